//! Diagnostic tracing.
//!
//! - **Tracing (this module)**: developer diagnostics via `RUST_LOG`, written
//!   to stderr. Not part of the product output.
//!
//! - **Reports (`ui/views`)**: banners and toolchain output on stdout,
//!   always shown regardless of `RUST_LOG`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. Defaults to `warn` if unset.
/// Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=rewatch=debug rewatch watch
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
