use clap::Parser;
use fnol_router::batch::{render_report, run_batch};
use fnol_router::config::Config;
use fnol_router::ClaimReport;
use std::path::{Path, PathBuf};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_PATH: &str = ".config/fnol_router.toml";

#[derive(Parser, Debug)]
#[command(
    name = "fnol-router",
    version,
    about = "Extract FNOL claim fields and recommend a processing route"
)]
struct Cli {
    /// TOML config file; defaults apply when it does not exist
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Print single-line JSON
    #[arg(long)]
    compact: bool,

    /// Log filter, e.g. `debug` or `fnol_router=trace` (overrides RUST_LOG)
    #[arg(long)]
    log: Option<String>,

    /// Claim documents: `.pdf`, any text file, or `-` for stdin
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let cfg = Config::load_or_default(&cli.config)?;

    // init tracing
    let filter = match &cli.log {
        Some(f) => EnvFilter::try_new(f)?,
        None => EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&cfg.logging.filter))?,
    };
    tracing_subscriber::fmt()
        .with_target(true)
        .with_level(true)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let pretty = cfg.output.pretty && !cli.compact;
    let total = cli.files.len();
    let outcomes = run_batch(cli.files, cfg.document.min_text_chars).await?;

    let mut failed = 0;
    for outcome in outcomes {
        match outcome.result {
            Ok(report) => {
                log_report(&outcome.path, &report);
                println!("{}", render_report(&report, pretty)?);
            }
            Err(e) => {
                failed += 1;
                error!(path = %outcome.path.display(), error = %e, "Failed to load document");
                eprintln!("{}: {e}", outcome.path.display());
            }
        }
    }

    if failed > 0 {
        return Err(format!("{failed} of {total} documents failed").into());
    }
    Ok(())
}

fn log_report(path: &Path, report: &ClaimReport) {
    let (filled, total) = report.extracted_fields.coverage();
    info!(
        path = %path.display(),
        filled,
        total,
        missing = report.missing_fields.len(),
        route = %report.recommended_route,
        "Claim routed"
    );
}
