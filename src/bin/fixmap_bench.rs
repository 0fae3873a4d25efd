//! Chaining versus open addressing comparison run.
//!
//! Configuration comes from the JSON file named by `FIXMAP_BENCH_CONFIG` when
//! set, otherwise from `FIXMAP_BENCH_*` environment variables. The preset
//! names `quick` and `stress` are accepted as the first argument. The report
//! is written to stdout as JSON.

use fixmap::bench::{generate_unique_keys, run_suite};
use fixmap::config::{BenchConfig, Config};
use fixmap::error::{FixmapError, Result};
use std::io;
use std::process::ExitCode;

fn load_config() -> Result<BenchConfig> {
    if let Some(preset) = std::env::args().nth(1) {
        return match preset.as_str() {
            "quick" => Ok(BenchConfig::quick_preset()),
            "stress" => Ok(BenchConfig::stress_preset()),
            "default" => Ok(BenchConfig::default()),
            other => Err(FixmapError::configuration(format!(
                "unknown preset '{}', expected quick, stress or default",
                other
            ))),
        };
    }
    match std::env::var("FIXMAP_BENCH_CONFIG") {
        Ok(path) => BenchConfig::load_from_file(path),
        Err(_) => BenchConfig::from_env(),
    }
}

fn run() -> Result<()> {
    fixmap::init();
    let config = load_config()?;

    let keys = generate_unique_keys(config.dataset_size, config.seed);
    let report = run_suite(&config, &keys)?;
    report.write_json(io::stdout().lock())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("fixmap_bench: {} error: {}", e.category(), e);
            ExitCode::FAILURE
        }
    }
}
