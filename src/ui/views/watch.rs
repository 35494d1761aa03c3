use rewatch::{Action, WatchEvent};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Where a rendered watch event belongs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sink {
    /// stdout, alongside action reports
    Report,
    /// stderr: interactive responses and errors
    Prompt,
}

pub fn sink_for(event: &WatchEvent) -> Sink {
    match event {
        WatchEvent::VerboseChanged { .. }
        | WatchEvent::UnknownCommand { .. }
        | WatchEvent::Error { .. } => Sink::Prompt,
        _ => Sink::Report,
    }
}

pub fn render_watch_header(
    root: &str,
    pattern: &str,
    actions: &[Action],
    interactive: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Watch, "Rewatch");
    header.add("Root", root);
    header.add("Pattern", pattern);
    header.add("Actions", join_actions(actions));
    if interactive {
        header.add("Commands", "verbose");
    }
    header.add("Hint", "Press Ctrl+C to stop");
    header.render(supports_color, supports_unicode)
}

/// Render one watch event.
///
/// Returns `None` for `ActionComplete`, which the reporter prints.
pub fn render_watch_event(
    timestamp: &str,
    event: &WatchEvent,
    supports_color: bool,
    supports_unicode: bool,
) -> Option<String> {
    let prefix = format!("[{}]", timestamp);

    let rendered = match event {
        WatchEvent::WatchStarted { pattern, .. } => format!(
            "{} {} Watching: {}\n",
            prefix,
            Icon::Watch.colored(supports_color, supports_unicode),
            pattern
        ),
        WatchEvent::FileChanged { path } => format!(
            "{} {} Changed: {}\n",
            prefix,
            Icon::Arrow.colored(supports_color, supports_unicode),
            path
        ),
        WatchEvent::RunStarted { actions } => format!(
            "{} {} Running: {}\n",
            prefix,
            Icon::Progress.colored(supports_color, supports_unicode),
            join_actions(actions)
        ),
        WatchEvent::RunQueued => format!(
            "{} {} Queued another run\n",
            prefix,
            Icon::Pending.colored(supports_color, supports_unicode)
        ),
        WatchEvent::ActionComplete { .. } => return None,
        WatchEvent::VerboseChanged { verbose } => {
            format!("{} Verbose is now {}\n", prefix, verbose)
        }
        WatchEvent::UnknownCommand { input } => format!(
            "{} {} {}\n",
            prefix,
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error(format!("Unknown command: {}", input)).render(supports_color)
        ),
        WatchEvent::Error { message } => format!(
            "{} {} Error: {}\n",
            prefix,
            Icon::Error.colored(supports_color, supports_unicode),
            message
        ),
        WatchEvent::Shutdown => format!(
            "\n{} {} Watch stopped.\n",
            prefix,
            Icon::Watch.colored(supports_color, supports_unicode)
        ),
    };

    Some(rendered)
}

fn join_actions(actions: &[Action]) -> String {
    actions
        .iter()
        .map(|a| a.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
