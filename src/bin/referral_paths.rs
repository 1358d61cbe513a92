//! Referral path batch CLI.
//!
//! Reads a JSON user export and a CSV query batch, computes shortest
//! referral paths, and writes one JSON result per query.
//!
//! ## Configuration
//!
//! - `RUST_LOG`: log level filter (default: info)
//! - `LOG_FORMAT`: "json" for structured logs, "pretty" for development
//!   (default: pretty)
//!
//! ## Usage
//!
//! ```bash
//! referral_paths --users users.json --queries queries.csv --output results.json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use referral_kernel::{
    build_graph, load_queries, load_users, write_results, BatchReport, BatchRunner, IoError,
};

#[derive(Debug, Parser)]
#[command(name = "referral_paths", about = "Shortest referral paths over a subscription graph")]
struct Cli {
    /// JSON file with the user export.
    #[arg(long, default_value = "users.json")]
    users: PathBuf,

    /// Headerless CSV file with (from,to) query rows.
    #[arg(long, default_value = "queries.csv")]
    queries: PathBuf,

    /// Destination file for the JSON results.
    #[arg(long, default_value = "results.json")]
    output: PathBuf,
}

/// Initialize the tracing subscriber with JSON or pretty format.
fn init_tracing() {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "referral_kernel=info,referral_paths=info".into());

    if log_format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true))
            .init();
    }
}

fn run(cli: &Cli) -> Result<(), IoError> {
    let users = load_users(&cli.users)?;
    let queries = load_queries(&cli.queries)?;

    let graph = build_graph(&users);
    info!(
        users = graph.num_users(),
        edges = graph.num_edges(),
        fingerprint = %graph.fingerprint(),
        "contact graph ready"
    );

    let runner = BatchRunner::new(&graph);
    let results = runner.run(&queries);
    let report = BatchReport::from_results(&graph, &results);

    write_results(&cli.output, &results)?;
    info!(
        output = %cli.output.display(),
        reachable = report.reachable_count,
        total = report.query_count,
        "done"
    );

    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "batch run aborted");
            ExitCode::FAILURE
        }
    }
}
