pub mod run;
pub mod watch;

use std::path::Path;

use anyhow::{Context, Result};
use rewatch::config::Config;

use crate::cli::ColorWhen;
use crate::ui::context::UiContext;
use crate::ui::output::print_config_warnings;

/// Load `--config` (defaults when absent) and resolve the UI context.
///
/// Unknown-key warnings go to stderr in every output mode.
pub(crate) fn load_config(
    path: Option<&Path>,
    json: bool,
    color: Option<ColorWhen>,
) -> Result<(Config, UiContext)> {
    let (config, warnings) = Config::load_or_default(path).with_context(|| match path {
        Some(path) => format!("Failed to load config from {}", path.display()),
        None => "Failed to load default config".to_string(),
    })?;

    let ui = UiContext::new(json, color, &config);
    print_config_warnings(&warnings, ui.unicode);

    Ok((config, ui))
}
