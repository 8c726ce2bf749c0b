use chrono::Local;
use clap::Parser;
use expense_tracker::args::{Args, Command};
use expense_tracker::{commands, Config, Result};
use std::process::ExitCode;
use tracing::{debug, error, trace};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    let log_level = args.common().log_level();
    init_logger(log_level);
    debug!("Log level set to {}", log_level.to_string().to_lowercase());

    match main_inner(args).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Exiting with error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

pub async fn main_inner(args: Args) -> Result<()> {
    trace!("{args:?}");
    let home = args.common().expense_home().path();
    let json = args.common().json();
    let today = Local::now().date_naive();

    // Route to appropriate command handler
    let _: () = match args.command() {
        Command::Init(init_args) => commands::init(home, init_args.storage_key())
            .await?
            .print(json),

        Command::Add(add_args) => {
            let config = Config::load(home).await?;
            commands::add(config, add_args.clone(), today)
                .await?
                .print(json)
        }

        Command::Edit(edit_args) => {
            let config = Config::load(home).await?;
            commands::edit(config, edit_args.clone(), today)
                .await?
                .print(json)
        }

        Command::Delete(delete_args) => {
            let config = Config::load(home).await?;
            commands::delete(config, delete_args.clone(), today)
                .await?
                .print(json)
        }

        Command::List(list_args) => {
            let config = Config::load(home).await?;
            commands::list(config, list_args.clone(), today)
                .await?
                .print(json)
        }

        Command::Summary(summary_args) => {
            let config = Config::load(home).await?;
            commands::summary(config, summary_args.clone(), today)
                .await?
                .print(json)
        }
    };
    Ok(())
}

/// Initializes the tracing subscriber.
pub fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => {
            // RUST_LOG exists; use it.
            EnvFilter::from_default_env()
        }
        None => {
            // RUST_LOG does not exist; use default log level for the library and binary only.
            EnvFilter::new(format!(
                "{}={},{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                level,
                env!("CARGO_BIN_NAME"),
                level
            ))
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
