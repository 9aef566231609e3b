/**
 * sqliprobe - Reporting
 * Stateless console formatting plus the append-only scan log. Presentation
 * only; the engine never writes here directly.
 */

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use chrono::Local;
use tracing::warn;

use crate::errors::{ScanError, ScanResult};
use crate::types::{Classification, ProbeResult};

pub const RESET: &str = "\x1b[0m";
pub const LIGHT_GREEN: &str = "\x1b[92m";
pub const RED: &str = "\x1b[91m";
pub const YELLOW: &str = "\x1b[93m";

pub fn print_banner() {
    println!("{}                _ _                 _          {}", LIGHT_GREEN, RESET);
    println!("{}  ___  __ _| (_)_ __  _ __ ___ | |__   ___ {}", LIGHT_GREEN, RESET);
    println!("{} / __|/ _` | | | '_ \\| '__/ _ \\| '_ \\ / _ \\{}", LIGHT_GREEN, RESET);
    println!("{} \\__ \\ (_| | | | |_) | | | (_) | |_) |  __/{}", LIGHT_GREEN, RESET);
    println!("{} |___/\\__, |_|_| .__/|_|  \\___/|_.__/ \\___|{}", LIGHT_GREEN, RESET);
    println!("{}         |_|   |_|                          {}", LIGHT_GREEN, RESET);
    println!("{}        concurrent SQLi probe engine v0.2{}", LIGHT_GREEN, RESET);
    println!();
}

/// Append-only plain-text scan log. Timestamped lines, not machine-parseable
/// structured data.
pub struct ScanLog {
    file: File,
}

impl ScanLog {
    /// Open for appending, creating the file if absent.
    pub fn open(path: &Path) -> ScanResult<Self> {
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)
            .map_err(|source| ScanError::LogFile {
                path: path.display().to_string(),
                source,
            })?;
        Ok(Self { file })
    }

    pub fn record(&mut self, line: &str) {
        let stamp = Local::now().format("%Y/%m/%d %H:%M:%S");
        if let Err(e) = writeln!(self.file, "sqliprobe: {} {}", stamp, line) {
            warn!("failed to write scan log: {}", e);
        }
    }
}

/// One console line per result plus a log line for each finding or error.
pub fn report(result: &ProbeResult, log: &mut ScanLog) {
    match result.classification {
        Classification::TimeBased => {
            println!(
                "{}\u{2713} Time-Based SQLi Found! URL: {} - Response Time: {:.2} s (Baseline: {:.2} s){}",
                LIGHT_GREEN, result.url, result.response_time, result.baseline.response_time, RESET
            );
            log.record(&format!(
                "Time-Based SQLi: {} - Time: {:.2} s",
                result.url, result.response_time
            ));
        }
        Classification::ErrorBased => {
            println!(
                "{}\u{2713} Error-Based SQLi Found! URL: {} - Response Time: {:.2} s{}",
                YELLOW, result.url, result.response_time, RESET
            );
            log.record(&format!(
                "Error-Based SQLi: {} - Time: {:.2} s",
                result.url, result.response_time
            ));
        }
        Classification::AnomalyBased => {
            println!(
                "{}\u{2713} Anomaly-Based SQLi Detected! URL: {} - Size: {} (Baseline: {}){}",
                YELLOW, result.url, result.body_size, result.baseline.body_size, RESET
            );
            log.record(&format!(
                "Anomaly-Based SQLi: {} - Size: {}",
                result.url, result.body_size
            ));
        }
        Classification::None => {
            // A failed probe gets its error line below instead of a verdict
            // it never earned.
            if result.success {
                println!(
                    "{}\u{2717} Not Vulnerable. URL: {} - Response Time: {:.2} s{}",
                    RED, result.url, result.response_time, RESET
                );
            }
        }
    }

    if let Some(error) = &result.error {
        println!("{}\u{2717} Error: {}{}", RED, error, RESET);
        log.record(&format!("Error: {} - {}", result.url, error));
    }
}

/// Diagnostic for a target whose unpayloaded request failed.
pub fn log_baseline_failure(error: &ScanError, log: &mut ScanLog) {
    println!("{}\u{2717} {}{}", RED, error, RESET);
    log.record(&format!("Baseline failure: {}", error));
}
