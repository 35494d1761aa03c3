//! Rewatch CLI - re-run your toolchain when sources change
//!
//! Usage: rewatch [OPTIONS] <COMMAND>
//!
//! Commands:
//!   build   Run the build step once
//!   test    Run the test step once
//!   watch   Watch sources and re-run on every change

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use rewatch::Action;

use cli::{Cli, Commands};
use commands::watch::WatchArgs;

fn main() {
    rewatch::logging::init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let config = cli.config.as_deref();
    match cli.command {
        Commands::Build => commands::run::cmd_run(
            Action::Build,
            &cli.root,
            config,
            cli.json,
            cli.color,
            cli.verbose,
        ),
        Commands::Test => commands::run::cmd_run(
            Action::Test,
            &cli.root,
            config,
            cli.json,
            cli.color,
            cli.verbose,
        ),
        Commands::Watch {
            with_tests,
            interactive,
            extension,
        } => {
            commands::watch::cmd_watch(WatchArgs {
                root: &cli.root,
                config,
                json: cli.json,
                color: cli.color,
                verbose: cli.verbose,
                with_tests,
                interactive,
                extension,
            })?;
            Ok(0)
        }
    }
}
