use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use shift_comparator::api::{
    AppState, ComparisonResponse, MIN_COMPARED_SCENARIOS, ScenarioRequest, ScenarioResponse,
    ShiftRequest, create_router,
};
use shift_comparator::calculation::{RankedComparison, calculate_scenario, rank};
use shift_comparator::config::{ConfigLoader, DEFAULT_CONFIG_PATH};
use shift_comparator::models::ScenarioTotal;
use shift_comparator::report::{format_comparison, format_scenario};

#[derive(Parser)]
#[command(
    name = "shift-comparator",
    version,
    about = "Compare the pay of work-schedule scenarios with night and Sunday bonuses",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (defaults to config/comparator.yaml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format (text, json)
    #[arg(long, global = true, default_value = "text")]
    log_format: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the pay of a single scenario
    Calculate {
        /// Scenario name
        #[arg(short, long)]
        name: Option<String>,

        /// Base hourly rate
        #[arg(short, long)]
        rate: Option<Decimal>,

        /// Shift as DATE:KIND, e.g. 2026-01-12:night (repeatable)
        #[arg(short, long = "shift", required = true)]
        shifts: Vec<String>,

        /// Print only the summary, without the per-day detail
        #[arg(long, default_value = "false")]
        summary: bool,

        /// Print the result as JSON
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Rank the scenarios listed in a YAML or JSON file
    Compare {
        /// File holding a list of scenarios
        #[arg(short, long)]
        file: PathBuf,

        /// Print only the ranking, without the per-scenario detail
        #[arg(long, default_value = "false")]
        summary: bool,

        /// Print the result as JSON
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Run the HTTP API
    Serve {
        /// Interface to bind to (overrides the configuration)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides the configuration)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging
    setup_tracing(&cli.log_format, cli.verbose)?;

    let loader = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Calculate {
            name,
            rate,
            shifts,
            summary,
            json,
        } => {
            tracing::info!(
                name = ?name,
                rate = ?rate,
                shifts = shifts.len(),
                "Starting calculate command"
            );
            calculate(&loader, name, rate, &shifts, summary, json)?;
        }

        Commands::Compare {
            file,
            summary,
            json,
        } => {
            tracing::info!(file = %file.display(), "Starting compare command");
            compare(&loader, &file, summary, json)?;
        }

        Commands::Serve { host, port } => {
            serve(loader, host, port).await?;
        }
    }

    Ok(())
}

fn setup_tracing(format: &str, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("shift_comparator=debug,info")
    } else {
        tracing_subscriber::EnvFilter::new("shift_comparator=info,warn")
    };

    // stdout carries the reports
    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
                .init();
        }
    }

    Ok(())
}

/// An explicit path must load; the default path is optional.
fn load_config(path: Option<&Path>) -> Result<ConfigLoader> {
    match path {
        Some(path) => ConfigLoader::load(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => ConfigLoader::load(DEFAULT_CONFIG_PATH)
            .with_context(|| format!("Failed to load configuration from {DEFAULT_CONFIG_PATH}")),
        None => {
            tracing::debug!("No configuration file, using defaults");
            Ok(ConfigLoader::default())
        }
    }
}

fn parse_shift_arg(arg: &str) -> Result<ShiftRequest> {
    match arg.split_once(':') {
        Some((date, kind)) => Ok(ShiftRequest::new(date, kind)),
        None => bail!("Invalid shift '{arg}': expected DATE:KIND, e.g. 2026-01-12:night"),
    }
}

/// Resolves `DATE:KIND` arguments into a scenario and computes it.
fn calculate_total(
    loader: &ConfigLoader,
    name: Option<String>,
    rate: Option<Decimal>,
    shifts: &[String],
) -> Result<ScenarioTotal> {
    let shifts = shifts
        .iter()
        .map(|arg| parse_shift_arg(arg))
        .collect::<Result<Vec<_>>>()?;
    let request = ScenarioRequest {
        name,
        hourly_rate: rate,
        shifts,
    };

    let scenario = request
        .into_scenario(loader.config())
        .context("Invalid scenario")?;
    Ok(calculate_scenario(&scenario))
}

fn calculate(
    loader: &ConfigLoader,
    name: Option<String>,
    rate: Option<Decimal>,
    shifts: &[String],
    summary: bool,
    json: bool,
) -> Result<()> {
    let total = calculate_total(loader, name, rate, shifts)?;

    if json {
        let response = ScenarioResponse::new(Uuid::new_v4(), &total);
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("{}", format_scenario(&total, !summary));
    }

    Ok(())
}

fn read_scenarios(file: &Path) -> Result<Vec<ScenarioRequest>> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let is_json = file
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let requests = if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {} as JSON", file.display()))?
    } else {
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {} as YAML", file.display()))?
    };

    Ok(requests)
}

/// Computes and ranks scenario requests, refusing too small a comparison.
fn rank_requests(
    loader: &ConfigLoader,
    requests: Vec<ScenarioRequest>,
) -> Result<RankedComparison> {
    if requests.len() < MIN_COMPARED_SCENARIOS {
        bail!(
            "At least {MIN_COMPARED_SCENARIOS} scenarios are required for a comparison, got {}",
            requests.len()
        );
    }

    let mut totals = Vec::with_capacity(requests.len());
    for (index, request) in requests.into_iter().enumerate() {
        let scenario = request
            .into_scenario(loader.config())
            .with_context(|| format!("Invalid scenario #{}", index + 1))?;
        totals.push(calculate_scenario(&scenario));
    }

    Ok(rank(totals))
}

fn compare(loader: &ConfigLoader, file: &Path, summary: bool, json: bool) -> Result<()> {
    let comparison = rank_requests(loader, read_scenarios(file)?)?;

    if json {
        let response = ComparisonResponse::new(Uuid::new_v4(), &comparison);
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("{}", format_comparison(&comparison, !summary));
    }

    Ok(())
}

async fn serve(loader: ConfigLoader, host: Option<String>, port: Option<u16>) -> Result<()> {
    let mut server = loader.config().server.clone();
    if let Some(host) = host {
        server.host = host;
    }
    if let Some(port) = port {
        server.port = port;
    }

    let address = server.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    tracing::info!(address = %address, "Shift comparator API listening");

    let router = create_router(AppState::new(loader));
    axum::serve(listener, router)
        .await
        .context("HTTP server failed")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn shifts(args: &[&str]) -> Vec<String> {
        args.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_calculate_arguments_parse() {
        let cli = Cli::try_parse_from([
            "shift-comparator",
            "calculate",
            "--name",
            "Week",
            "--rate",
            "13.50",
            "--shift",
            "2026-01-12:night",
            "--shift",
            "18/01/2026:afternoon",
            "--summary",
        ])
        .unwrap();

        match cli.command {
            Commands::Calculate {
                name,
                rate,
                shifts,
                summary,
                json,
            } => {
                assert_eq!(name.as_deref(), Some("Week"));
                assert_eq!(rate, Some(dec("13.50")));
                assert_eq!(shifts.len(), 2);
                assert!(summary);
                assert!(!json);
            }
            _ => panic!("Expected the calculate command"),
        }
    }

    #[test]
    fn test_calculate_requires_a_shift() {
        assert!(Cli::try_parse_from(["shift-comparator", "calculate", "--name", "Week"]).is_err());
    }

    #[test]
    fn test_parse_shift_arg_splits_on_first_colon() {
        let shift = parse_shift_arg("2026-01-12:NUIT").unwrap();
        assert_eq!(shift.date, "2026-01-12");
        assert_eq!(shift.kind, "NUIT");
    }

    #[test]
    fn test_parse_shift_arg_without_colon_is_rejected() {
        let error = parse_shift_arg("2026-01-12-night").unwrap_err();
        assert!(error.to_string().contains("expected DATE:KIND"));
    }

    #[test]
    fn test_calculate_total_from_arguments() {
        let total = calculate_total(
            &ConfigLoader::default(),
            Some("Monday night".to_string()),
            Some(dec("13")),
            &shifts(&["2026-01-12:night"]),
        )
        .unwrap();

        assert_eq!(total.name, "Monday night");
        // nine night hours at +15%
        assert_eq!(total.total_pay, dec("134.55"));
    }

    #[test]
    fn test_calculate_total_rejects_bad_kind() {
        let result = calculate_total(
            &ConfigLoader::default(),
            None,
            None,
            &shifts(&["2026-01-12:evening"]),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_read_demo_scenarios_yaml() {
        let requests = read_scenarios(Path::new("demos/scenarios.yaml")).unwrap();
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[0].name.as_deref(), Some("Three weekday mornings"));
        assert_eq!(requests[2].shifts[0].date, "18/01/2026");

        let comparison = rank_requests(&ConfigLoader::default(), requests).unwrap();
        assert_eq!(comparison.len(), 3);
        assert_eq!(comparison.best().unwrap().scenario.name, "Three weekday mornings");
        assert_eq!(comparison.best().unwrap().scenario.total_pay, dec("351.00"));
    }

    #[test]
    fn test_read_scenarios_picks_json_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"[
                {{"name": "A", "hourly_rate": 13, "shifts": [{{"date": "2026-01-12", "type": "morning"}}]}},
                {{"name": "B", "shifts": [{{"date": "2026-01-18", "type": "afternoon"}}]}}
            ]"#
        )
        .unwrap();

        let requests = read_scenarios(file.path()).unwrap();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].hourly_rate, Some(dec("13")));
        assert_eq!(requests[1].hourly_rate, None);
    }

    #[test]
    fn test_read_scenarios_reports_parse_errors() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, "name: not json").unwrap();
        let error = read_scenarios(file.path()).unwrap_err();
        assert!(error.to_string().contains("as JSON"));
    }

    #[test]
    fn test_read_missing_file_is_an_error() {
        assert!(read_scenarios(Path::new("demos/missing.yaml")).is_err());
    }

    #[test]
    fn test_compare_needs_two_scenarios() {
        let mut requests = read_scenarios(Path::new("demos/scenarios.yaml")).unwrap();
        requests.truncate(1);

        let error = rank_requests(&ConfigLoader::default(), requests).unwrap_err();
        assert!(error.to_string().contains("At least 2 scenarios"));
    }

    #[test]
    fn test_compare_names_the_invalid_scenario() {
        let mut requests = read_scenarios(Path::new("demos/scenarios.yaml")).unwrap();
        requests[1].shifts[0].kind = "siesta".to_string();

        let error = rank_requests(&ConfigLoader::default(), requests).unwrap_err();
        assert!(error.to_string().contains("Invalid scenario #2"));
    }
}
