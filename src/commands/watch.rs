use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use rewatch::{
    ProcessRunner, SessionState, WatchEvent, WatchOptions, WatchRegistration, WatchUseCase,
};

use crate::cli::ColorWhen;
use crate::ui::views::report::Reporter;
use crate::ui::views::watch::{render_watch_event, render_watch_header, sink_for, Sink};

pub struct WatchArgs<'a> {
    pub root: &'a Path,
    pub config: Option<&'a Path>,
    pub json: bool,
    pub color: Option<ColorWhen>,
    pub verbose: u8,
    pub with_tests: bool,
    pub interactive: bool,
    pub extension: Option<String>,
}

pub fn cmd_watch(args: WatchArgs<'_>) -> Result<()> {
    let (config, ui) = super::load_config(args.config, args.json, args.color)?;

    let extension = args
        .extension
        .unwrap_or_else(|| config.watch.extension.clone());
    let with_tests = args.with_tests || config.watch.with_tests;
    let registration = WatchRegistration::for_extension(&extension, with_tests)
        .with_context(|| format!("Cannot watch extension '{}'", extension))?;

    let root = args
        .root
        .canonicalize()
        .with_context(|| format!("Project root not found: {}", args.root.display()))?;

    let session = SessionState::new(args.verbose > 0);
    let options = WatchOptions::new(root.clone(), registration.clone())
        .with_toolchain(config.toolchain_spec())
        .with_interactive(args.interactive);
    let use_case = WatchUseCase::new(
        options,
        Arc::new(ProcessRunner::in_dir(&root)),
        session,
    );

    // Set up Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("Error setting Ctrl+C handler")?;

    if !ui.json {
        print!(
            "{}",
            render_watch_header(
                &root.display().to_string(),
                registration.pattern(),
                registration.actions(),
                args.interactive,
                ui.color,
                ui.unicode
            )
        );
    }

    let mut reporter = Reporter::new(std::io::stdout(), ui.color, config.build.stderr_is_failure);

    use_case
        .start(running, |event| {
            if ui.json {
                println!("{}", event.to_json());
                return;
            }

            if let WatchEvent::ActionComplete {
                action,
                result,
                verbose,
            } = &event
            {
                if let Err(e) = reporter.report(*action, result, *verbose) {
                    tracing::warn!(error = %e, "failed to write report");
                }
                return;
            }

            let timestamp = crate::ui::views::timestamp();
            if let Some(rendered) = render_watch_event(&timestamp, &event, ui.color, ui.unicode) {
                match sink_for(&event) {
                    Sink::Prompt => eprint!("{rendered}"),
                    Sink::Report => {
                        print!("{rendered}");
                        let _ = std::io::stdout().flush();
                    }
                }
            }
        })
        .context("Watch failed")?;

    Ok(())
}
