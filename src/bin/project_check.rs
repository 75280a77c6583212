use clap::{Parser, ValueEnum};
use flight_genes::config::{DEFAULT_OUTPUT_PATH, DEFAULT_SPECIES_CONFIG};
use flight_genes::core::validator::default_builder_path;
use flight_genes::utils::logger;
use flight_genes::utils::validation::{validate_path, validate_positive_number};
use flight_genes::{ProjectValidator, ValidatorSettings};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Compact,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "project-check")]
#[command(about = "Smoke-test the flight-genes project layout, config and outputs")]
struct Args {
    /// Project directory to check
    #[arg(long, default_value = ".")]
    project_root: String,

    /// Species config, relative to the project root
    #[arg(long, default_value = DEFAULT_SPECIES_CONFIG)]
    config: String,

    /// Result table, relative to the project root
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    results: String,

    /// Builder executable (defaults to flight-genes next to this binary)
    #[arg(long)]
    builder: Option<PathBuf>,

    /// Seconds to wait for the builder before killing it
    #[arg(long, default_value = "60")]
    timeout_secs: u64,

    /// Print the report as JSON after the console summary
    #[arg(long)]
    json: bool,

    #[arg(long, value_enum, default_value = "compact")]
    log_format: LogFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    match args.log_format {
        LogFormat::Compact => logger::init_cli_logger(args.verbose),
        LogFormat::Json => logger::init_json_logger(args.verbose),
    }

    validate_path("project_root", &args.project_root)?;
    validate_path("config", &args.config)?;
    validate_path("results", &args.results)?;
    validate_positive_number("timeout_secs", args.timeout_secs, 1)?;

    let rule = "=".repeat(60);
    println!("{}", rule);
    println!("Sparrow & butterfly flight gene project check");
    println!("{}", rule);

    let settings = ValidatorSettings {
        project_root: PathBuf::from(&args.project_root),
        config_path: PathBuf::from(&args.config),
        results_path: PathBuf::from(&args.results),
        builder_program: args.builder.clone().unwrap_or_else(default_builder_path),
        builder_timeout: Duration::from_secs(args.timeout_secs),
    };
    tracing::debug!("Validator settings: {:?}", settings);

    let report = ProjectValidator::from_settings(&settings).run().await;
    for line in report.summary_lines() {
        println!("{}", line);
    }

    if args.json {
        println!("{}", report.to_json()?);
    }

    tracing::info!("Checks passed: {}/{}", report.passed(), report.total());
    std::process::exit(report.exit_code());
}
