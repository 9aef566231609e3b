/**
 * sqliprobe - CLI
 * Probes URLs with candidate injection payloads and flags time-based,
 * error-based, and anomaly-based SQLi signals against a per-target baseline
 */

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info, Level};

use sqliprobe::config::{ScanConfig, REQUEST_TIMEOUT};
use sqliprobe::dispatcher::Dispatcher;
use sqliprobe::http_client::HttpClient;
use sqliprobe::input;
use sqliprobe::prober::Prober;
use sqliprobe::reporting::{self, ScanLog};
use sqliprobe::types::Classification;

/// sqliprobe - concurrent SQL injection probe engine
#[derive(Parser)]
#[command(name = "sqliprobe")]
#[command(version = "0.2.0")]
#[command(about = "Probe URLs with SQLi payloads and flag time/error/anomaly signals", long_about = None)]
struct Cli {
    /// Single URL to scan
    #[arg(short, long, required_unless_present = "url_list")]
    url: Option<String>,

    /// Text file containing a list of URLs to scan
    #[arg(short = 'l', long, conflicts_with = "url")]
    url_list: Option<PathBuf>,

    /// Text file containing the payloads (required)
    #[arg(short, long)]
    payloads: PathBuf,

    /// Cookie to include in the GET request
    #[arg(short, long)]
    cookie: Option<String>,

    /// Number of concurrent probes (1-20)
    #[arg(short, long, default_value_t = 5)]
    threads: usize,

    /// Log file to store results
    #[arg(long, default_value = "sqli_scan.log")]
    log: PathBuf,

    /// Write all results as JSON to this path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,

    /// Quiet mode - only findings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.debug {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .init();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(num_cpus::get())
        .thread_name("sqliprobe-worker")
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cli))
}

async fn async_main(cli: Cli) -> Result<()> {
    // Input errors are fatal: no scan is attempted.
    let targets = match input::load_targets(
        cli.url.as_deref(),
        cli.url_list.as_deref(),
        cli.cookie.as_deref(),
    ) {
        Ok(targets) => targets,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let payloads = match input::load_payloads(&cli.payloads) {
        Ok(payloads) => payloads,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let config = ScanConfig::new(cli.threads, cli.log.clone());

    let mut log = match ScanLog::open(&config.log_path) {
        Ok(log) => log,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    if !cli.quiet {
        reporting::print_banner();
    }

    info!(
        "scanning {} target(s) with {} payload(s), concurrency {}",
        targets.len(),
        payloads.len(),
        config.concurrency
    );

    let client = Arc::new(HttpClient::new(REQUEST_TIMEOUT)?);
    let prober = Arc::new(Prober::new(client, REQUEST_TIMEOUT));
    let dispatcher = Dispatcher::new(prober, config.concurrency);

    let target_count = targets.len();
    let start = Instant::now();

    let (mut rx, baseline_failures) = dispatcher.run(targets, payloads).await;
    for failure in &baseline_failures {
        reporting::log_baseline_failure(failure, &mut log);
    }

    let mut results = Vec::new();
    let mut time_based = 0usize;
    let mut error_based = 0usize;
    let mut anomaly_based = 0usize;
    let mut probe_errors = 0usize;

    while let Some(result) = rx.recv().await {
        reporting::report(&result, &mut log);
        match result.classification {
            Classification::TimeBased => time_based += 1,
            Classification::ErrorBased => error_based += 1,
            Classification::AnomalyBased => anomaly_based += 1,
            Classification::None => {}
        }
        if !result.success {
            probe_errors += 1;
        }
        results.push(result);
    }

    let elapsed = start.elapsed();
    let findings = time_based + error_based + anomaly_based;

    println!();
    println!("{}", "=".repeat(60));
    println!("SCAN COMPLETE");
    println!("{}", "=".repeat(60));
    println!("Targets:            {} ({} skipped)", target_count, baseline_failures.len());
    println!("Probes sent:        {}", results.len());
    println!("Time-based:         {}", time_based);
    println!("Error-based:        {}", error_based);
    println!("Anomaly-based:      {}", anomaly_based);
    println!("Probe errors:       {}", probe_errors);
    println!("Duration:           {:.2}s", elapsed.as_secs_f64());
    println!("{}", "=".repeat(60));

    if let Some(output_path) = cli.output {
        let json = serde_json::to_string_pretty(&results)?;
        std::fs::write(&output_path, json)?;
        info!("results written to: {}", output_path.display());
    }

    if findings > 0 {
        std::process::exit(1);
    }

    Ok(())
}
