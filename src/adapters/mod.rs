// Adapters layer: concrete implementations for external systems (naming API, filesystem).

pub mod gemini;
pub mod storage;
