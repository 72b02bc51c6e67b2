//! ttracker library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod notify;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Start { .. } => cli::commands::start::handle(&cli.command, cfg),
        Commands::Stop => cli::commands::stop::handle(cfg),
        Commands::Status => cli::commands::status::handle(cfg),
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, cfg),
        Commands::Daemon => {
            let notifier = notify::for_config(cfg);
            core::reminder::run_daemon(cfg, notifier.as_ref())
        }
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // parse CLI; argument errors exit 1, --help/--version exit 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    // resolve the config root once, apply the --dir override
    let cfg = Config::resolve(cli.dir.as_deref(), cli.test)?;

    // the one directory-creation call per invocation; idempotent
    cfg.ensure_dirs()?;

    dispatch(&cli, &cfg)
}
