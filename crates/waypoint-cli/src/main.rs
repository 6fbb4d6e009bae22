use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

use waypoint_cli::cli::{Cli, Commands};
use waypoint_cli::config::{self, LogFormat, WaypointConfig};
use waypoint_cli::state::{AppState, Output};
use waypoint_cli::{commands, DEFAULT_LOG_FILTER};

fn init_tracing(config: &WaypointConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(config.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER))
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match config.log_format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config_dir = match cli.config_dir {
        Some(dir) => dir,
        None => config::default_config_dir()?,
    };
    let config = config::load_or_default(&config_dir)?;
    init_tracing(&config);

    let output = if cli.json { Output::Json } else { Output::Human };

    let command = match cli.command {
        Commands::Config { command } => {
            return commands::run_config(&config_dir, config, cli.data_file.as_deref(), output, command);
        }
        Commands::Tracker(command) => command,
    };

    let mut app = AppState::open(cli.data_file.as_deref(), &config, output)?;
    let result = commands::run(&mut app, command);

    if let Some(err) = app.store.take_persist_error() {
        tracing::warn!(error = %err, "changes were not saved");
        eprintln!("warning: {err}");
    }

    result
}
