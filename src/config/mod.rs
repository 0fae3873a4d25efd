//! Configuration APIs for fixmap
//!
//! Configuration covers the comparison harness: dataset size, table sizes,
//! the load steps to measure and the hasher to use. The maps themselves take
//! their sizes as plain constructor arguments.
//!
//! # Configuration Traits
//!
//! The [`Config`] trait provides validation, environment initialization,
//! presets and JSON file persistence.
//!
//! # Environment Initialization
//!
//! ```rust
//! use fixmap::config::{BenchConfig, Config};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Reads FIXMAP_BENCH_* variables, falling back to defaults
//! let config = BenchConfig::from_env()?;
//! assert!(config.validate().is_ok());
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use std::env;
use std::fmt;
use std::path::Path;

pub mod bench;


pub use bench::{BenchConfig, HasherKind};

/// Common configuration trait providing validation, environment
/// initialization, presets and persistence.
pub trait Config: Clone + fmt::Debug {
    /// Validate the configuration for correctness and consistency.
    fn validate(&self) -> Result<()>;

    /// Initialize configuration from environment variables with the
    /// `FIXMAP_` prefix.
    fn from_env() -> Result<Self>
    where
        Self: Default,
    {
        Self::from_env_with_prefix("FIXMAP_")
    }

    /// Initialize configuration from environment variables with a custom prefix.
    ///
    /// Unset or unparsable variables keep their default value.
    fn from_env_with_prefix(prefix: &str) -> Result<Self>
    where
        Self: Default;

    /// Small configuration that finishes in well under a second.
    fn quick_preset() -> Self;

    /// Configuration pushing tables close to their ceiling.
    fn stress_preset() -> Self;

    /// Save configuration to a JSON file.
    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()>;

    /// Load and validate configuration from a JSON file.
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self>;
}

/// Parse an environment variable, falling back to `default`.
pub fn parse_env_var<T>(var_name: &str, default: T) -> T
where
    T: std::str::FromStr + Clone,
{
    env::var(var_name)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

/// Parse a boolean environment variable.
///
/// Accepts: "true", "1", "yes", "on" (case-insensitive) as true,
/// everything else as false.
pub fn parse_env_bool(var_name: &str, default: bool) -> bool {
    env::var(var_name)
        .ok()
        .map(|s| {
            let s = s.to_lowercase();
            matches!(s.as_str(), "true" | "1" | "yes" | "on")
        })
        .unwrap_or(default)
}

/// Parse a comma separated environment variable.
///
/// The whole list falls back to `default` if any element fails to parse.
pub fn parse_env_list<T>(var_name: &str, default: Vec<T>) -> Vec<T>
where
    T: std::str::FromStr,
{
    let Ok(raw) = env::var(var_name) else {
        return default;
    };
    let parsed: std::result::Result<Vec<T>, _> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect();
    match parsed {
        Ok(values) => values,
        Err(_) => {
            log::warn!("ignoring malformed list in {}: {:?}", var_name, raw);
            default
        }
    }
}
