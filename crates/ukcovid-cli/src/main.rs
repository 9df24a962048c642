mod chart;
mod refresh;
mod summary;
mod watch;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use ukcovid_core::{ChartWindow, Location};

#[derive(Debug, Parser)]
#[command(name = "ukcovid")]
#[command(about = "UK COVID-19 statistics from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch once and print the summary block.
    Summary {
        #[arg(long, default_value = "uk")]
        location: Location,
        /// Print the snapshot as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Fetch once and render cases/deaths sparklines.
    Chart {
        #[arg(long, default_value = "uk")]
        location: Location,
        /// How far back to plot: 1w, 1m, 3m, 6m or all.
        #[arg(long, default_value = "3m")]
        window: ChartWindow,
        /// Scale deaths by their own maximum instead of sharing the
        /// cases axis.
        #[arg(long)]
        emphasized: bool,
    },
    /// Poll for new data, reprinting the summary after every fetch.
    Watch {
        #[arg(long, default_value = "uk")]
        location: Location,
        /// Drop previously displayed data before the first fetch.
        #[arg(long)]
        clear: bool,
    },
    /// Single-shot background check; fires the update triggers when
    /// new data has been published since the last run.
    Refresh {
        #[arg(long, default_value = "uk")]
        location: Location,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = ukcovid_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Summary { location, json } => summary::run(&config, location, json).await,
        Commands::Chart {
            location,
            window,
            emphasized,
        } => chart::run(&config, location, window, emphasized).await,
        Commands::Watch { location, clear } => watch::run(&config, location, clear).await,
        Commands::Refresh { location } => refresh::run(&config, location).await,
    }
}
