use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use rewatch::domain::entities::ABNORMAL_EXIT;
use rewatch::{Action, ActionRunner, ProcessRunner, RunResult, SessionState};

use crate::cli::ColorWhen;
use crate::ui::views::report::{action_passed, Reporter};

/// Run one action, report it, and return the process exit code.
pub fn cmd_run(
    action: Action,
    root: &Path,
    config_path: Option<&Path>,
    json: bool,
    color: Option<ColorWhen>,
    verbose: u8,
) -> Result<i32> {
    let (config, ui) = super::load_config(config_path, json, color)?;
    let root = root
        .canonicalize()
        .with_context(|| format!("Project root not found: {}", root.display()))?;

    let session = SessionState::new(verbose > 0);
    let runner = ActionRunner::new(
        Arc::new(ProcessRunner::in_dir(&root)),
        config.toolchain_spec(),
        session.clone(),
    );

    let result = runner.run(action);
    let stderr_is_failure = config.build.stderr_is_failure;

    if ui.json {
        println!(
            "{}",
            render_json(action, &result, session.verbose(), stderr_is_failure)
        );
    } else {
        let mut reporter = Reporter::new(std::io::stdout().lock(), ui.color, stderr_is_failure);
        reporter
            .report(action, &result, session.verbose())
            .context("Failed to write report")?;
    }

    Ok(exit_code(action, &result, stderr_is_failure))
}

fn render_json(
    action: Action,
    result: &RunResult,
    verbose: bool,
    stderr_is_failure: bool,
) -> String {
    serde_json::json!({
        "event": "action_complete",
        "command": action.to_string(),
        "action": action,
        "passed": action_passed(action, result, stderr_is_failure),
        "verbose": verbose,
        "result": result,
    })
    .to_string()
}

/// The toolchain's own status, 1 when it never ran or failed on stderr
fn exit_code(action: Action, result: &RunResult, stderr_is_failure: bool) -> i32 {
    if result.exit_status == ABNORMAL_EXIT {
        return 1;
    }
    if result.is_success() && !action_passed(action, result, stderr_is_failure) {
        return 1;
    }
    result.exit_status
}
