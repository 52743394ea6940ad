use crate::domain::model::{Participant, ParticipantId};
use std::collections::{HashMap, HashSet};

// 以換行或逗號切割、去空白、丟棄空項。貼上與檔案匯入共用同一條規則。
pub fn parse_names(text: &str) -> Vec<String> {
    text.split(|c| c == '\n' || c == ',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

// 範例名單
pub fn sample_names() -> Vec<String> {
    [
        "王小明", "李美玲", "張大衛", "林志強", "陳淑芬", "黃金龍", "吳欣怡", "周杰倫", "蔡依林",
        "徐若瑄", "彭于晏", "桂綸鎂", "柯佳嬿", "許光漢", "賈靜雯", "謝盈萱", "邱澤", "曾敬驊",
        "陳昊森", "李沐",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Ordered participant store; other components only see name snapshots.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    entries: Vec<Participant>,
    next_id: u64,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trim, drop empties, append with fresh ids. Returns how many were added.
    pub fn add_names<I, S>(&mut self, names: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let before = self.entries.len();
        for raw in names {
            let name = raw.as_ref().trim();
            if name.is_empty() {
                continue;
            }
            let id = ParticipantId(self.next_id);
            self.next_id += 1;
            self.entries.push(Participant {
                id,
                name: name.to_string(),
            });
        }
        self.entries.len() - before
    }

    // 零個有效姓名不算錯誤，只是什麼都沒加
    pub fn add_raw(&mut self, text: &str) -> usize {
        self.add_names(parse_names(text))
    }

    /// No-op if the id is absent.
    pub fn remove(&mut self, id: ParticipantId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|p| p.id != id);
        self.entries.len() < before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Keeps the first occurrence of each name, survivor order unchanged.
    pub fn dedupe(&mut self) -> usize {
        let before = self.entries.len();
        let mut seen = HashSet::new();
        self.entries.retain(|p| seen.insert(p.name.clone()));
        before - self.entries.len()
    }

    /// Recomputed from current state on every call, never cached.
    pub fn duplicate_ids(&self) -> HashSet<ParticipantId> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for p in &self.entries {
            *counts.entry(p.name.as_str()).or_insert(0) += 1;
        }

        self.entries
            .iter()
            .filter(|p| counts[p.name.as_str()] > 1)
            .map(|p| p.id)
            .collect()
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|p| p.name.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Participant> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
