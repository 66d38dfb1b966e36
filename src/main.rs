use anyhow::Result;
use chart_analyzer::charts::CoinGeckoClient;
use chart_analyzer::config::AppConfig;
use chart_analyzer::utils::logging;
use chart_analyzer::{pipeline, AnalysisRequest, AnalyzerError};
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(version, about = "Historical price and volume analysis for a CoinGecko coin")]
struct Args {
    /// First day of the range (YYYY-MM-DD, UTC)
    date_from: NaiveDate,

    /// Last day of the range (YYYY-MM-DD, UTC)
    date_to: NaiveDate,

    /// CoinGecko coin id, e.g. bitcoin or ethereum (overrides config)
    #[arg(short, long)]
    currency: Option<String>,

    /// Path to config file (optional)
    #[arg(long)]
    config: Option<PathBuf>,

    /// CoinGecko pro API key (overrides config)
    #[arg(long)]
    api_key: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    match execute(&args) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn report_error(err: &anyhow::Error) {
    match err.downcast_ref::<AnalyzerError>() {
        Some(analyzer_err) => {
            eprintln!("Error: {}", analyzer_err.message);
            if let Some(details) = &analyzer_err.details {
                eprintln!("  {}", details);
            }
        }
        None => eprintln!("Error: {:#}", err),
    }
}

fn execute(args: &Args) -> Result<String> {
    // Load base configuration from file if provided
    let mut cfg = match &args.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };

    if let Some(key) = &args.api_key {
        cfg.provider.api_key = Some(key.clone());
        cfg.validate()?;
    }

    let currency = args
        .currency
        .as_deref()
        .unwrap_or(&cfg.analysis.default_currency);
    let request = AnalysisRequest::new(currency, args.date_from, args.date_to)?;

    let client = CoinGeckoClient::from_config(&cfg.provider)?;
    let report = pipeline::run(&request, &client)?;

    if args.json {
        let mut out = report.to_json()?;
        out.push('\n');
        Ok(out)
    } else {
        Ok(report.to_string())
    }
}
