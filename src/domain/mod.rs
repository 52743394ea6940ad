// Domain layer: core models and ports (interfaces). No dependencies on adapters.

pub mod model;
pub mod ports;
