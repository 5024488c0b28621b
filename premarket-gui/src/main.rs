mod app;
mod ui;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use app::PremarketApp;
use clap::builder::PossibleValuesParser;
use clap::{Args, Parser, Subcommand};
use premarket_core::{export, filter_records, FilterCriteria, NseClient, NseConfig};

#[derive(Parser)]
#[command(name = "premarket")]
#[command(about = "NSE pre-open market data filter", long_about = None)]
struct Cli {
    #[command(flatten)]
    connection: ConnectionArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct ConnectionArgs {
    /// NSE site root used for the session bootstrap and the data API
    #[arg(long, global = true, env = "PREMARKET_BASE_URL", default_value = premarket_core::config::NSE_BASE_URL)]
    base_url: String,

    /// Pre-open market segment
    #[arg(
        long,
        global = true,
        env = "PREMARKET_MARKET_KEY",
        default_value = premarket_core::config::DEFAULT_MARKET_KEY,
        value_parser = PossibleValuesParser::new(premarket_core::config::MARKET_KEYS),
        ignore_case = true
    )]
    key: String,

    /// Request timeout in seconds (0 disables the timeout)
    #[arg(long, global = true, env = "PREMARKET_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,

    /// Ignore HTTP(S)_PROXY settings from the environment
    #[arg(long, global = true)]
    no_proxy: bool,
}

impl ConnectionArgs {
    fn to_config(&self) -> NseConfig {
        let mut config = NseConfig::default()
            .with_base_url(self.base_url.clone())
            .with_market_key(self.key.to_uppercase());
        config.timeout = (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs));
        config.use_system_proxy = !self.no_proxy;
        config
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch once, filter, and print the matching rows without opening a window
    Snapshot {
        #[command(flatten)]
        filter: FilterArgs,

        /// Write the rows to a CSV file instead of printing a table
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Print the rows as JSON
        #[arg(long, conflicts_with = "csv")]
        json: bool,
    },
}

#[derive(Args)]
struct FilterArgs {
    #[arg(long, default_value_t = -20.0, allow_hyphen_values = true)]
    pchange_min: f64,
    #[arg(long, default_value_t = 10.0, allow_hyphen_values = true)]
    pchange_max: f64,
    #[arg(long, default_value_t = 100.0, allow_hyphen_values = true)]
    price_min: f64,
    #[arg(long, default_value_t = 5000.0, allow_hyphen_values = true)]
    price_max: f64,
    #[arg(long, default_value_t = 100_000.0, allow_hyphen_values = true)]
    turnover_min: f64,
    #[arg(long, default_value_t = 500_000_000.0, allow_hyphen_values = true)]
    turnover_max: f64,
}

impl From<&FilterArgs> for FilterCriteria {
    fn from(args: &FilterArgs) -> Self {
        FilterCriteria {
            pchange_min: args.pchange_min,
            pchange_max: args.pchange_max,
            price_min: args.price_min,
            price_max: args.price_max,
            turnover_min: args.turnover_min,
            turnover_max: args.turnover_max,
        }
    }
}

fn snapshot_mode(
    config: NseConfig,
    criteria: FilterCriteria,
    csv: Option<PathBuf>,
    json: bool,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let client = NseClient::new(config)?;
    let snapshot = match client.load_snapshot() {
        Ok(snapshot) => snapshot,
        Err(e) => {
            eprintln!("{}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    for range in criteria.inverted_bounds() {
        log::warn!("{} minimum is above its maximum; no rows can match", range);
    }

    let outcome = filter_records(&snapshot.records, &criteria);
    if let Some(message) = outcome.message() {
        eprintln!("{}", message);
        return Ok(ExitCode::SUCCESS);
    }
    let rows = outcome.rows();

    if let Some(path) = csv {
        export::write_csv(rows, std::fs::File::create(&path)?)?;
        println!("Wrote {} rows to {}", rows.len(), path.display());
    } else if json {
        println!("{}", serde_json::to_string_pretty(rows)?);
    } else {
        println!("Pre-open snapshot at {}", snapshot.fetched_at.format("%Y-%m-%d %H:%M:%S"));
        print!("{}", ui::table::render_text(rows));
        println!("{} of {} records matched", rows.len(), snapshot.records.len());
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();
    let config = cli.connection.to_config();

    match cli.command {
        Some(Commands::Snapshot { filter, csv, json }) => {
            snapshot_mode(config, FilterCriteria::from(&filter), csv, json)
        }
        None => {
            let client = NseClient::new(config)?;

            let options = eframe::NativeOptions {
                viewport: egui::ViewportBuilder::default()
                    .with_inner_size([1200.0, 800.0])
                    .with_min_inner_size([800.0, 600.0]),
                ..Default::default()
            };

            eframe::run_native(
                "NSE Market Data Filter",
                options,
                Box::new(move |cc| Ok(Box::new(PremarketApp::new(cc, client)))),
            )?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
