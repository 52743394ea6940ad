pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{gemini::GeminiNamer, storage::LocalStorage};
pub use config::{AppConfig, CliConfig};
pub use crate::core::{draw::DrawSession, grouping::GroupingEngine, roster::Roster};
pub use utils::error::{Result, ToolboxError};
