//! CLI entrypoint for Sovereign Council
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail, ensure};
use clap::Parser;
use council_application::{
    CouncilRequest, GridReading, ProgressNotifier, RoundLogger, RunCouncilUseCase,
};
use council_domain::{AdvisoryDomain, OutputFormat};
use council_infrastructure::{ConfigLoader, FileGridConfig, JsonlRoundLogger, LineageRouter};
use council_presentation::{Cli, ConsoleFormatter, ProgressReporter, SimpleProgress};
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Upper bound on establishing a provider connection
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };

    let log_dir = cli.log_dir.as_deref().or(config.logging.dir.as_deref());
    let _guard = init_tracing(cli.verbose, log_dir);

    info!("Starting Sovereign Council");
    for issue in config.validate() {
        warn!("config: {}", issue);
    }

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    let query = match cli.query.clone() {
        Some(q) if !q.trim().is_empty() => q,
        _ => bail!("A query is required. See --help for usage."),
    };

    // === Request ===
    let grid = resolve_grid(&config.grid, cli.region.as_deref(), cli.load, cli.price)?;
    let domain = cli
        .domain
        .as_deref()
        .map(AdvisoryDomain::from_tag)
        .unwrap_or_default();
    let profile = config.profile.to_profile();
    if !profile.domains.contains(&domain) {
        debug!("{} is outside the profile's usual domains", domain);
    }

    let mut request = CouncilRequest::new(query, grid).with_domain(domain);
    if let Some(token) = &cli.urgency {
        request = request.with_urgency(token.clone());
    }
    if !cli.options.is_empty() {
        request = request.with_options(cli.options.clone());
    }

    // === Dependency Injection ===
    let client = reqwest::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .build()
        .context("Failed to build HTTP client")?;
    let router = LineageRouter::from_config(&config.providers, client);
    for (lineage, route) in router.describe() {
        info!("{}: {}", lineage, route);
    }

    let cancel = CancellationToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, abandoning remaining rounds");
            ctrl_c.cancel();
        }
    });

    let mut use_case = RunCouncilUseCase::new(
        Arc::new(router),
        config.execution.to_params(),
        profile,
    )
    .with_cancellation(cancel);

    let transcript = cli.transcript.as_deref().or(config.logging.transcript.as_deref());
    if let Some(path) = transcript {
        let request_id = format!("req-{}", chrono::Utc::now().timestamp_millis());
        if let Some(logger) = JsonlRoundLogger::open(path, request_id) {
            info!("Round transcript: {}", logger.path().display());
            use_case = use_case.with_logger(Arc::new(logger) as Arc<dyn RoundLogger>);
        }
    }

    let format: OutputFormat = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();

    // Print header
    if !cli.quiet && format != OutputFormat::Json {
        let classification = use_case.classify(&request);
        eprintln!();
        eprintln!("Query: {}", request.query);
        eprintln!(
            "Grid: load {:.2}, price {:.2} | {} | {}",
            request.grid.load,
            request.grid.price,
            classification.urgency,
            classification.efficiency.equation
        );
        eprintln!();
    }

    // Execute with or without progress reporting
    let verdict = if cli.quiet {
        use_case.execute(request).await
    } else {
        let progress: Box<dyn ProgressNotifier> = if std::io::stderr().is_terminal() {
            Box::new(ProgressReporter::new())
        } else {
            Box::new(SimpleProgress)
        };
        use_case.execute_with_progress(request, progress.as_ref()).await
    };

    println!("{}", ConsoleFormatter::render(&verdict, format));

    Ok(())
}

/// Install the tracing subscriber.
///
/// The filter follows `-v` unless `RUST_LOG` is set. With a log directory,
/// output goes to a daily-rolling file instead of stderr; the returned guard
/// must live until exit so buffered lines are flushed.
fn init_tracing(verbose: u8, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "council.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            None
        }
    }
}

/// Region baseline, with explicit `--load` / `--price` taking precedence
fn resolve_grid(
    grid: &FileGridConfig,
    region: Option<&str>,
    load: Option<f64>,
    price: Option<f64>,
) -> Result<GridReading> {
    for (name, value) in [("--load", load), ("--price", price)] {
        if let Some(v) = value {
            ensure!(v.is_finite(), "{} must be a finite number, got {}", name, v);
        }
    }

    let baseline = match (region, load, price) {
        // Both readings given explicitly: no baseline needed
        (None, Some(load), Some(price)) => return Ok(GridReading::new(load, price)),
        (Some(name), _, _) => grid.reading(name)?,
        (None, _, _) => grid.default_reading()?,
    };

    Ok(GridReading::new(
        load.unwrap_or(baseline.load),
        price.unwrap_or(baseline.price),
    ))
}
