use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use dirtree::cli::Cli;
use dirtree::error::BuildError;
use dirtree::fs::RealFileSystem;

fn main() -> ExitCode {
    let cli_args = Cli::parse();
    setup_tracing();
    debug!("Parsed CLI arguments: {cli_args:?}");

    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("dirtree: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn try_main() -> anyhow::Result<()> {
    let start = match std::env::current_dir() {
        Ok(start) => start,
        Err(err) => {
            debug!(error = %err, "cannot resolve current directory");
            // The shell's idea of the cwd still names the directory that went away.
            let Some(pwd) = std::env::var_os("PWD") else {
                return Err(err).context("cannot resolve current directory");
            };
            return Err(BuildError::InvalidArgument {
                path: PathBuf::from(pwd),
            }
            .into());
        }
    };
    debug!(start = %start.display(), "building tree");

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    dirtree::run(&RealFileSystem, &start, &mut writer)
}

fn setup_tracing() {
    let Ok(value) = std::env::var(dirtree::LOG_ENV) else {
        return;
    };

    match value.parse::<tracing::Level>() {
        Ok(level) => {
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_writer(io::stderr)
                .without_time()
                .compact()
                .init();
        }
        Err(_) => eprintln!(
            "dirtree: ignoring invalid {} value {value:?}",
            dirtree::LOG_ENV
        ),
    }
}
