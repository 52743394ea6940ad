pub mod draw;
pub mod export;
pub mod grouping;
pub mod roster;
pub mod shuffle;

pub use crate::domain::model::{DrawTicket, Group, Participant, ParticipantId};
pub use crate::domain::ports::{NamingProvider, Storage};
pub use crate::utils::error::Result;
