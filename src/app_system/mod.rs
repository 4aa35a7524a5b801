//! System orchestration, startup, and shutdown logic.

pub mod logging;
pub mod roster_system;

pub use logging::*;
pub use roster_system::*;
