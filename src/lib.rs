/**
 * sqliprobe - Scanner Library
 * Exposes the probing and classification engine for the CLI and tests
 */

pub mod classifier;
pub mod config;
pub mod dispatcher;
pub mod errors;
pub mod http_client;
pub mod input;
pub mod prober;
pub mod reporting;
pub mod types;
