use clap::Parser;
use std::{path::PathBuf, time::Duration};

use geolookup::{
    Config,
    config::{DEFAULT_SESSION_FILE, DEFAULT_TIMEOUT_SECS, SESSION_FILE_ENV},
    logging::init_logging,
};

mod cli;

#[derive(Parser)]
#[command(name = "geolookup")]
#[command(about = "Look up IP geolocation through a remote service")]
struct Cli {
    /// Base URL of the geolocation API (falls back to GEOLOOKUP_BASE_URL, then VITE_BASE_URL)
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Where the session token is kept between runs
    #[arg(long, value_name = "FILE", env = SESSION_FILE_ENV, default_value = DEFAULT_SESSION_FILE)]
    session_file: PathBuf,

    /// Per-request timeout
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Run one command headless instead of opening the window
    #[command(subcommand)]
    command: Option<cli::Command>,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Cli::parse();
    init_logging(&args.log_level)?;

    let config = Config::new(
        args.base_url,
        args.session_file,
        Duration::from_secs(args.timeout_secs),
    )?;

    match args.command {
        Some(command) => {
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(cli::run(command, &config))
        }
        None => launch_gui(config),
    }
}

#[cfg(feature = "gui")]
fn launch_gui(config: Config) -> anyhow::Result<()> {
    let api = config.api_client()?;
    geolookup::gui::run(config, api)?;
    Ok(())
}

#[cfg(not(feature = "gui"))]
fn launch_gui(_config: Config) -> anyhow::Result<()> {
    anyhow::bail!("Built without the `gui` feature; pass a command such as `lookup`")
}
