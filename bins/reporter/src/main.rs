//! Budgetwise reporter
//!
//! Loads a document export and prints a dashboard view as JSON.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use budgetwise_core::dashboard::DashboardService;
use budgetwise_core::source::{Dataset, InMemoryStore};
use budgetwise_shared::types::{MonthKey, UserId};
use budgetwise_shared::{AppConfig, LoggingConfig};

#[derive(Parser, Debug)]
#[command(name = "budgetwise", about = "Print Budgetwise dashboard views as JSON.")]
struct Args {
    /// Path to the JSON document export
    #[arg(short, long)]
    dataset: PathBuf,

    /// User whose documents are reported
    #[arg(short, long = "user")]
    user_id: UserId,

    /// Month as YYYY-MM; defaults to the current month
    #[arg(short, long)]
    month: Option<MonthKey>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
enum Command {
    /// Current-month overview
    Overview,
    /// Trend, forecast and seasonality ending at the month
    Analytics {
        /// Restrict the trend to one category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Close the month with its current balance
    Close,
}

fn init_tracing(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));
    let registry = tracing_subscriber::registry().with(filter);

    // Reports go to stdout, logs to stderr.
    if config.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn load_store(path: &Path) -> anyhow::Result<InMemoryStore> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read dataset {}", path.display()))?;
    let dataset: Dataset = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse dataset {}", path.display()))?;

    Ok(InMemoryStore::from_dataset(dataset)?)
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let config = AppConfig::load().context("failed to load configuration")?;
    init_tracing(&config.logging);

    let month = args.month.unwrap_or_else(MonthKey::current);
    let store = load_store(&args.dataset)?;
    info!(dataset = %args.dataset.display(), %month, "dataset loaded");

    let service = DashboardService::new(Arc::new(store), config.analytics);
    let stdout = std::io::stdout().lock();

    match args.command {
        Command::Overview => {
            let overview = service.month_overview(args.user_id, month)?;
            serde_json::to_writer_pretty(stdout, &overview)?;
        }
        Command::Analytics { category } => {
            let analytics = service.analytics(args.user_id, month, category.as_deref())?;
            serde_json::to_writer_pretty(stdout, &analytics)?;
        }
        Command::Close => {
            let closing = service.close_month(args.user_id, month, chrono::Utc::now())?;
            info!(month = %closing.month, balance = %closing.final_balance, "month closed");
            serde_json::to_writer_pretty(stdout, &closing)?;
        }
    }

    println!();
    Ok(())
}
