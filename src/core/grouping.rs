use crate::core::shuffle::{shuffle_with, RandomSource};
use crate::domain::model::{Group, GroupId};
use crate::domain::ports::NamingProvider;
use crate::utils::error::{Result, ToolboxError};

// 後備隊名，1 起算
pub fn placeholder_label(n: usize) -> String {
    format!("隊伍 {}", n)
}

/// Partitions a shuffled copy of the roster into fixed-size groups. Labels
/// only decorate; membership never depends on the naming collaborator.
pub struct GroupingEngine<N: NamingProvider> {
    namer: N,
}

impl<N: NamingProvider> GroupingEngine<N> {
    pub fn new(namer: N) -> Self {
        Self { namer }
    }

    /// One run, one naming call. The result fully replaces any previous one;
    /// a naming shortfall becomes placeholder labels, never an error.
    pub async fn run(
        &self,
        names: &[String],
        group_size: usize,
        theme: &str,
        rng: &mut impl RandomSource,
    ) -> Result<Vec<Group>> {
        if group_size < 2 {
            return Err(ToolboxError::InvalidGroupSize { size: group_size });
        }
        if names.is_empty() {
            return Err(ToolboxError::EmptyRoster);
        }

        let shuffled = shuffle_with(names, rng);
        let group_count = shuffled.len().div_ceil(group_size);

        tracing::info!(
            "Partitioning {} names into {} groups of up to {}",
            shuffled.len(),
            group_count,
            group_size
        );

        let labels = self.namer.generate_names(group_count, theme).await;
        if labels.len() < group_count {
            tracing::warn!(
                "Naming provider delivered {}/{} labels, filling the rest with placeholders",
                labels.len(),
                group_count
            );
        }

        let groups = shuffled
            .chunks(group_size)
            .enumerate()
            .map(|(i, chunk)| Group {
                id: GroupId(i as u64),
                name: labels
                    .get(i)
                    .cloned()
                    .unwrap_or_else(|| placeholder_label(i + 1)),
                members: chunk.to_vec(),
            })
            .collect();

        Ok(groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Returns a fixed label list and counts invocations.
    struct FixedNamer {
        labels: Vec<String>,
        calls: AtomicUsize,
    }

    impl FixedNamer {
        fn new(labels: &[&str]) -> Self {
            Self {
                labels: labels.iter().map(|s| s.to_string()).collect(),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl NamingProvider for FixedNamer {
        async fn generate_names(&self, count: usize, _theme: &str) -> Vec<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.labels.iter().take(count).cloned().collect()
        }
    }

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("P{}", i)).collect()
    }

    #[tokio::test]
    async fn partition_is_total_and_disjoint() {
        let roster = names(10);
        let engine = GroupingEngine::new(FixedNamer::new(&["甲", "乙", "丙", "丁"]));
        let mut rng = StdRng::seed_from_u64(1);

        let groups = engine.run(&roster, 3, "動物", &mut rng).await.unwrap();

        assert_eq!(groups.len(), 4); // ceil(10/3)
        let all: Vec<_> = groups.iter().flat_map(|g| g.members.clone()).collect();
        assert_eq!(all.len(), 10);
        let distinct: HashSet<_> = all.iter().collect();
        assert_eq!(distinct.len(), 10);
        let mut sorted = all.clone();
        sorted.sort();
        let mut expected = roster.clone();
        expected.sort();
        assert_eq!(sorted, expected);
    }

    #[tokio::test]
    async fn only_last_group_may_be_smaller() {
        let roster = names(10);
        let engine = GroupingEngine::new(FixedNamer::new(&["a", "b", "c", "d"]));
        let mut rng = StdRng::seed_from_u64(2);

        let groups = engine.run(&roster, 3, "fruit", &mut rng).await.unwrap();

        for g in &groups[..groups.len() - 1] {
            assert_eq!(g.members.len(), 3);
        }
        let last = groups.last().unwrap();
        assert_eq!(last.members.len(), 1);
        assert!(!last.members.is_empty());
    }

    #[tokio::test]
    async fn exact_division_has_no_runt_group() {
        let roster = names(9);
        let engine = GroupingEngine::new(FixedNamer::new(&["a", "b", "c"]));
        let mut rng = StdRng::seed_from_u64(3);

        let groups = engine.run(&roster, 3, "", &mut rng).await.unwrap();
        assert_eq!(groups.len(), 3);
        assert!(groups.iter().all(|g| g.members.len() == 3));
    }

    #[tokio::test]
    async fn shortfall_gets_unique_placeholders() {
        let roster = names(8);
        // one real label for four groups
        let engine = GroupingEngine::new(FixedNamer::new(&["超人隊"]));
        let mut rng = StdRng::seed_from_u64(4);

        let groups = engine.run(&roster, 2, "heroes", &mut rng).await.unwrap();

        assert_eq!(groups[0].name, "超人隊");
        assert_eq!(groups[1].name, "隊伍 2");
        assert_eq!(groups[2].name, "隊伍 3");
        assert_eq!(groups[3].name, "隊伍 4");

        let labels: HashSet<_> = groups.iter().map(|g| g.name.clone()).collect();
        assert_eq!(labels.len(), groups.len());
    }

    #[tokio::test]
    async fn total_provider_failure_means_all_placeholders() {
        let roster = names(4);
        let engine = GroupingEngine::new(FixedNamer::new(&[]));
        let mut rng = StdRng::seed_from_u64(5);

        let groups = engine.run(&roster, 2, "", &mut rng).await.unwrap();
        assert_eq!(groups[0].name, "隊伍 1");
        assert_eq!(groups[1].name, "隊伍 2");
    }

    #[tokio::test]
    async fn exactly_one_naming_call_per_run() {
        let roster = names(6);
        let namer = FixedNamer::new(&["a", "b", "c"]);
        let engine = GroupingEngine::new(namer);
        let mut rng = StdRng::seed_from_u64(6);

        engine.run(&roster, 2, "t", &mut rng).await.unwrap();
        assert_eq!(engine.namer.calls.load(Ordering::SeqCst), 1);

        engine.run(&roster, 2, "t", &mut rng).await.unwrap();
        assert_eq!(engine.namer.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn invalid_configuration_is_refused() {
        let engine = GroupingEngine::new(FixedNamer::new(&["a"]));
        let mut rng = StdRng::seed_from_u64(7);

        let err = engine.run(&names(5), 1, "", &mut rng).await.unwrap_err();
        assert!(matches!(err, ToolboxError::InvalidGroupSize { size: 1 }));

        let err = engine.run(&[], 3, "", &mut rng).await.unwrap_err();
        assert!(matches!(err, ToolboxError::EmptyRoster));
    }

    #[tokio::test]
    async fn group_ids_follow_generation_order() {
        let roster = names(6);
        let engine = GroupingEngine::new(FixedNamer::new(&["a", "b", "c"]));
        let mut rng = StdRng::seed_from_u64(8);

        let groups = engine.run(&roster, 2, "", &mut rng).await.unwrap();
        let ids: Vec<_> = groups.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![GroupId(0), GroupId(1), GroupId(2)]);
    }
}
