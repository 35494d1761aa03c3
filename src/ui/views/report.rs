//! Console reporter: one banner per action, then the lines worth reading.

use std::io::{self, Write};

use rewatch::{Action, RunResult};

use crate::ui::primitives::text::ColoredText;

/// Writes action reports to a sink, one timestamped line at a time.
pub struct Reporter<W: Write> {
    out: W,
    color: bool,
    stderr_is_failure: bool,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, color: bool, stderr_is_failure: bool) -> Self {
        Self {
            out,
            color,
            stderr_is_failure,
        }
    }

    pub fn report(&mut self, action: Action, result: &RunResult, verbose: bool) -> io::Result<()> {
        let timestamp = super::timestamp();
        let lines = render_report(
            &timestamp,
            action,
            result,
            verbose,
            self.color,
            self.stderr_is_failure,
        );
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Whether `result` counts as a pass for `action`.
///
/// `stderr_is_failure` only applies to the build step.
pub fn action_passed(action: Action, result: &RunResult, stderr_is_failure: bool) -> bool {
    result.passed(stderr_is_failure && !action.is_test())
}

pub fn render_report(
    timestamp: &str,
    action: Action,
    result: &RunResult,
    verbose: bool,
    supports_color: bool,
    stderr_is_failure: bool,
) -> Vec<String> {
    let prefix = format!("[{}]", timestamp);
    let mut lines = Vec::new();

    if action_passed(action, result, stderr_is_failure) {
        let banner = ColoredText::success_banner(format!("{} Successful", action.label()));
        lines.push(format!("{} {}", prefix, banner.render(supports_color)));

        if verbose && action.is_test() {
            lines.extend(result.stdout.iter().map(|l| format!("{} {}", prefix, l)));
        }
    } else {
        let banner = ColoredText::failure_banner(format!("{} Failed", action.label()));
        lines.push(format!("{} {}", prefix, banner.render(supports_color)));

        // A build that exits 0 but fails on stderr still shows stderr
        let failure_lines = if result.is_success() {
            &result.stderr
        } else {
            result.failure_lines(action)
        };
        lines.extend(failure_lines.iter().map(|l| {
            format!(
                "{} {}",
                prefix,
                ColoredText::error(l.as_str()).render(supports_color)
            )
        }));
    }

    lines
}
