use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Roster-scoped identifier, handed out by a monotonic counter.
/// Identity is the id, never the name; two participants may share a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ParticipantId(pub u64);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupId(pub u64);

/// One group of a partitioning run. Members are owned name strings, not
/// participant references, so later roster edits never rewrite an old result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    pub members: Vec<String>,
}

/// One cosmetic frame of the slot-machine deceleration: a candidate name to
/// flash, and how long to hold it before the next frame.
#[derive(Debug, Clone)]
pub struct TickFrame {
    pub name: String,
    pub delay: Duration,
}

/// The decided outcome of a single draw. The winner is fixed the moment the
/// draw starts; the frames are presentation only and may be skipped or
/// cancelled without affecting the result.
#[derive(Debug, Clone)]
pub struct DrawTicket {
    pub winner: String,
    pub frames: Vec<TickFrame>,
}
