use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stretchy_core::{AppConfig, OutputFormat};

mod commands;

#[derive(Parser)]
#[command(name = "stretchy")]
#[command(author, version, about = "Replay scroll traces through a stretchy collapsing header")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (defaults to ~/.config/stretchy/config.toml)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a scroll trace file (TOML, or JSON by extension)
    Replay {
        /// Trace file path
        trace: PathBuf,
        /// Output format (overrides the config)
        #[arg(short = 'f', long)]
        format: Option<FormatArg>,
        /// Print a summary after the frames
        #[arg(short = 's', long)]
        summary: bool,
    },
    /// Replay a linear drag through the given offsets
    Drag {
        /// Drag corners, e.g. `0 -40 0 150`
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        waypoints: Vec<f64>,
        /// Distance between samples
        #[arg(long)]
        step: Option<f64>,
        /// Content inset top
        #[arg(long)]
        inset: Option<f64>,
        /// Output format (overrides the config)
        #[arg(short = 'f', long)]
        format: Option<FormatArg>,
        /// Print a summary after the frames
        #[arg(short = 's', long)]
        summary: bool,
    },
    /// Print the effective header bounds
    Bounds,
    /// Show or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Table,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Table => OutputFormat::Table,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config_path = cli.config.clone().unwrap_or_else(AppConfig::config_path);
    let config = AppConfig::load_from(&config_path)?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Replay {
            trace,
            format,
            summary,
        } => {
            let format = format.map(Into::into).unwrap_or(config.replay.format);
            commands::replay::run(&config, &trace, format, summary)
        }
        Commands::Drag {
            waypoints,
            step,
            inset,
            format,
            summary,
        } => {
            let format = format.map(Into::into).unwrap_or(config.replay.format);
            commands::replay::drag(&config, waypoints, step, inset, format, summary)
        }
        Commands::Bounds => commands::bounds::run(&config),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(&config),
            ConfigAction::Init { force } => commands::config::init(&config_path, force),
        },
    }
}
