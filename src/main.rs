//! Command-line entry point.
//!
//! Opens the journal described by the configuration, loads it, and prints the
//! rendered journal screen.
//!
//! # Usage
//!
//! ```text
//! wanderlog [CONFIG.toml | key=value ...]
//! ```
//!
//! A single argument ending in `.toml` is read as a configuration file; any
//! other arguments are `key=value` pairs (see `Config::from_map`). Without
//! arguments the defaults apply.
//!
//! # Examples
//!
//! ```text
//! wanderlog
//! wanderlog ~/.config/wanderlog.toml
//! wanderlog data_dir=/tmp/journal seed_sample_data=false trace_level=debug
//! ```

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use std::process::ExitCode;
use wanderlog::app::{Action, NotificationKind};
use wanderlog::observability::init_tracing;
use wanderlog::{handle_event, initialize, Config, Event};

fn parse_args(args: &[String]) -> wanderlog::Result<Config> {
    match args {
        [path] if path.ends_with(".toml") => {
            Config::from_file(wanderlog::infrastructure::expand_tilde(path))
        }
        pairs => {
            let map: BTreeMap<String, String> = pairs
                .iter()
                .filter_map(|pair| pair.split_once('='))
                .map(|(key, value)| (key.trim().to_string(), value.to_string()))
                .collect();
            Ok(Config::from_map(&map))
        }
    }
}

fn run(config: &Config) -> wanderlog::Result<()> {
    let mut journal = initialize(config)?;
    let (_, actions) = handle_event(&mut journal, &Event::Load)?;

    for action in &actions {
        match action {
            Action::Notify { kind, message } => {
                let label = match kind {
                    NotificationKind::Success => "ok",
                    NotificationKind::Info => "info",
                    NotificationKind::Warning => "warning",
                };
                eprintln!("[{label}] {message}");
            }
            Action::ShowFormError(message) => eprintln!("[form] {message}"),
            Action::FocusTrip(_) => {}
        }
    }

    print!("{}", wanderlog::ui::render(&journal));
    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match parse_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("wanderlog: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config);
    tracing::info!(storage = %config.storage_path().display(), "starting wanderlog");

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "journal failed");
            eprintln!("wanderlog: {e}");
            ExitCode::FAILURE
        }
    }
}
