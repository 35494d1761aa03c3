//! Domain Entities
//!
//! - `RunResult` - Captured outcome of one toolchain invocation
//! - `SessionState` - Mutable verbosity shared by the loop and the reporter
//! - `WatchRegistration` - Glob plus the ordered actions it triggers

mod registration;
mod run_result;
mod session;

pub use registration::WatchRegistration;
pub use run_result::{RunResult, ABNORMAL_EXIT};
pub use session::SessionState;
