//! US Population Trend CLI
//!
//! Command-line preview of the population trend view:
//! - Fetch and show the selected trend window
//! - Generate a default config file

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uspop::{render, Config, DataUsaClient, DisplayState, LoggingConfig, TrendView, TrendWindow};

#[derive(Parser)]
#[command(name = "uspop")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Development of the US population")]
#[command(long_about = "Fetches yearly US population figures from Data USA and shows the\nmost recent 3, 5 or 10 years.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: ~/.config/uspop/config.toml or ./uspop.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch population data and show the trend window
    Show {
        /// Length of the trend line in years (3, 5 or 10)
        #[arg(short, long)]
        years: Option<TrendWindow>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Chart,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Config loading logs before the configured subscriber exists
    let config = {
        let _bootstrap = bootstrap_logging();
        match &cli.config {
            Some(path) => Config::load_with_env(path)?,
            None => Config::load_default(),
        }
    };

    init_logging(&config.logging);

    match cli.command {
        Commands::Show { years, format } => {
            let window = years.unwrap_or(config.display.trend_years);
            let client = DataUsaClient::new(config.source.clone())?;

            let mut view = TrendView::new();
            view.select(window);
            view.apply(client.fetch_population().await);

            match view.display() {
                DisplayState::Error => {
                    eprintln!("Oops. Something went wrong");
                    std::process::exit(1);
                }
                DisplayState::Loading => println!("Loading..."),
                DisplayState::Data(records) => {
                    tracing::info!(window = %view.window(), shown = records.len(), "Rendering trend");

                    match format {
                        OutputFormat::Table => print!("{}", render::table(records)),
                        OutputFormat::Json => println!("{}", render::json(records)?),
                        OutputFormat::Chart => {
                            println!("Development of the US population ({})", window);
                            println!();
                            print!("{}", render::text_chart(records, config.display.chart_height));
                        }
                    }
                }
            }
        }

        Commands::Config { output } => {
            let content = uspop::config::generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

/// Thread-local subscriber used while the config is loaded
fn bootstrap_logging() -> tracing::dispatcher::DefaultGuard {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .set_default()
}

/// Initialize logging to stderr so stdout stays clean for output
fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("uspop={0},uspop_cli={0}", logging.level))
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
