//! Domain Layer
//!
//! Pure types for the watch/run/report loop, with no I/O.
//!
//! ## Structure
//!
//! - `entities/` - `RunResult`, `SessionState`, `WatchRegistration`
//! - `value_objects/` - `Action`, `ToolchainSpec`
//! - `ports/` - `CommandRunner`, the seam to the OS process layer

pub mod entities;
pub mod ports;
pub mod value_objects;
