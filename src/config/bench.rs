//! Comparison harness configuration.

use super::{parse_env_bool, parse_env_list, parse_env_var, Config};
use crate::error::{FixmapError, Result};
use crate::hash_map::{is_prime, DEFAULT_CAPACITY, DEFAULT_NUM_BUCKETS};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Hash function used by both maps during a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HasherKind {
    /// `ahash::RandomState`
    #[default]
    Ahash,
    /// Integer keys hash to themselves
    Identity,
}

impl FromStr for HasherKind {
    type Err = FixmapError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "ahash" => Ok(Self::Ahash),
            "identity" => Ok(Self::Identity),
            other => Err(FixmapError::configuration(format!("unknown hasher '{}'", other))),
        }
    }
}

/// Configuration for the insert/lookup comparison runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Number of unique random keys generated up front
    pub dataset_size: usize,
    /// Seed for key generation; `None` draws from OS entropy
    pub seed: Option<u64>,
    /// Slot count of the open-addressing map
    pub capacity: usize,
    /// Bucket count of the chained map in the regular categories
    pub num_buckets: usize,
    /// Bucket count of the chained map in the low-bucket categories
    pub low_num_buckets: usize,
    /// Key counts measured in the regular categories
    pub load_steps: Vec<usize>,
    /// Key counts measured in the low-bucket categories
    pub low_bucket_steps: Vec<usize>,
    /// Hash function for both maps
    pub hasher: HasherKind,
    /// Check every looked-up value against the inserted one
    pub verify_lookups: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            dataset_size: 100_000,
            seed: None,
            capacity: DEFAULT_CAPACITY,
            num_buckets: DEFAULT_NUM_BUCKETS,
            low_num_buckets: 503,
            load_steps: vec![10_000, 20_000, 25_000, 30_000, 40_000, 50_000, 54_916],
            low_bucket_steps: vec![25_000, 30_000, 40_000, 50_000, 54_916],
            hasher: HasherKind::Ahash,
            verify_lookups: true,
        }
    }
}

impl BenchConfig {
    /// Largest key count any run will insert
    pub fn max_step(&self) -> usize {
        self.load_steps
            .iter()
            .chain(self.low_bucket_steps.iter())
            .copied()
            .max()
            .unwrap_or(0)
    }
}

impl Config for BenchConfig {
    fn validate(&self) -> Result<()> {
        if self.dataset_size == 0 {
            return Err(FixmapError::configuration("dataset_size must be greater than 0"));
        }
        for (field, value) in [
            ("capacity", self.capacity),
            ("num_buckets", self.num_buckets),
            ("low_num_buckets", self.low_num_buckets),
        ] {
            if value == 0 {
                return Err(FixmapError::configuration(format!("{} must be greater than 0", field)));
            }
            if !is_prime(value) {
                log::warn!("{} = {} is not prime; expect a skewed slot distribution", field, value);
            }
        }
        if self.load_steps.is_empty() && self.low_bucket_steps.is_empty() {
            return Err(FixmapError::configuration("no load steps configured"));
        }
        let max_step = self.max_step();
        if max_step > self.dataset_size {
            return Err(FixmapError::configuration(format!(
                "load step {} exceeds dataset_size {}",
                max_step, self.dataset_size
            )));
        }
        if max_step > self.capacity {
            return Err(FixmapError::configuration(format!(
                "load step {} exceeds open addressing capacity {}",
                max_step, self.capacity
            )));
        }
        Ok(())
    }

    fn from_env_with_prefix(prefix: &str) -> Result<Self> {
        let mut config = Self::default();
        config.dataset_size =
            parse_env_var(&format!("{}BENCH_DATASET_SIZE", prefix), config.dataset_size);
        config.seed = std::env::var(format!("{}BENCH_SEED", prefix))
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .or(config.seed);
        config.capacity = parse_env_var(&format!("{}BENCH_CAPACITY", prefix), config.capacity);
        config.num_buckets =
            parse_env_var(&format!("{}BENCH_NUM_BUCKETS", prefix), config.num_buckets);
        config.low_num_buckets =
            parse_env_var(&format!("{}BENCH_LOW_NUM_BUCKETS", prefix), config.low_num_buckets);
        config.load_steps =
            parse_env_list(&format!("{}BENCH_LOAD_STEPS", prefix), config.load_steps);
        config.low_bucket_steps =
            parse_env_list(&format!("{}BENCH_LOW_BUCKET_STEPS", prefix), config.low_bucket_steps);
        config.hasher = parse_env_var(&format!("{}BENCH_HASHER", prefix), config.hasher);
        config.verify_lookups =
            parse_env_bool(&format!("{}BENCH_VERIFY_LOOKUPS", prefix), config.verify_lookups);
        config.validate()?;
        Ok(config)
    }

    fn quick_preset() -> Self {
        Self {
            dataset_size: 2_000,
            seed: Some(42),
            capacity: 1_009,
            num_buckets: 1_009,
            low_num_buckets: 13,
            load_steps: vec![100, 250, 500, 750, 1_000],
            low_bucket_steps: vec![500, 1_000],
            ..Self::default()
        }
    }

    fn stress_preset() -> Self {
        Self {
            load_steps: vec![27_458, 38_441, 49_425, 52_171, 54_367, 54_916],
            low_bucket_steps: vec![49_425, 54_916],
            ..Self::default()
        }
    }

    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let serialized = serde_json::to_string_pretty(self)
            .map_err(|e| FixmapError::serialization(format!("Failed to serialize bench config: {}", e)))?;
        std::fs::write(path, serialized)?;
        Ok(())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| FixmapError::serialization(format!("Failed to parse bench config file: {}", e)))?;
        config.validate()?;
        Ok(config)
    }
}
