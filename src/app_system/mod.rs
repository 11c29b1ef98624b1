//! System orchestration, startup, and shutdown logic.

pub mod registry_system;
pub mod telemetry;

pub use registry_system::*;
pub use telemetry::*;
