use std::env;
use std::path::PathBuf;

use crate::{BenchError, Result};

#[derive(Debug, Clone)]
pub struct SizeSpec {
    pub label: String,
    pub bytes: usize,
}

/// Explicit configuration passed into the runner; no module-level state.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub runs_per_test: usize,
    pub sizes: Vec<SizeSpec>,
    pub mib_divisor: f64,
    pub data_dir: PathBuf,
    pub results_dir: PathBuf,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            runs_per_test: 10,
            sizes: vec![
                SizeSpec {
                    label: "1KB".to_string(),
                    bytes: 1024,
                },
                SizeSpec {
                    label: "1MB".to_string(),
                    bytes: 1024 * 1024,
                },
                SizeSpec {
                    label: "10MB".to_string(),
                    bytes: 10 * 1024 * 1024,
                },
            ],
            mib_divisor: (1024 * 1024) as f64,
            data_dir: PathBuf::from("data"),
            results_dir: PathBuf::from("results"),
        }
    }
}

impl BenchConfig {
    /// Defaults with environment overrides applied: `RUNS_PER_TEST`,
    /// `MB_DIVISOR`, `SIZES` (`label:bytes` pairs, comma-separated),
    /// `DATA_DIR`, `RESULTS_DIR`.
    pub fn load() -> Result<Self> {
        let mut config = Self::default();
        if let Ok(value) = env::var("RUNS_PER_TEST") {
            config.runs_per_test = value.parse().map_err(|_| {
                BenchError::InvalidConfig(format!("Invalid RUNS_PER_TEST value: {}", value))
            })?;
        }
        if let Ok(value) = env::var("MB_DIVISOR") {
            config.mib_divisor = value.parse().map_err(|_| {
                BenchError::InvalidConfig(format!("Invalid MB_DIVISOR value: {}", value))
            })?;
        }
        if let Ok(value) = env::var("SIZES") {
            config.sizes = parse_sizes(&value)?;
        }
        if let Ok(value) = env::var("DATA_DIR") {
            config.data_dir = PathBuf::from(value);
        }
        if let Ok(value) = env::var("RESULTS_DIR") {
            config.results_dir = PathBuf::from(value);
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.runs_per_test == 0 {
            return Err(BenchError::InvalidConfig(
                "Run count must be at least 1".to_string(),
            ));
        }
        if self.sizes.is_empty() {
            return Err(BenchError::InvalidConfig(
                "At least one test file size is required".to_string(),
            ));
        }
        for size in &self.sizes {
            if size.label.is_empty() {
                return Err(BenchError::InvalidConfig(
                    "Size labels must not be empty".to_string(),
                ));
            }
            if size.bytes == 0 {
                return Err(BenchError::InvalidConfig(format!(
                    "Size {} must be at least 1 byte",
                    size.label
                )));
            }
        }
        if !(self.mib_divisor > 0.0) {
            return Err(BenchError::InvalidConfig(
                "Throughput divisor must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Parses the `SIZES` surface, e.g. `1KB:1024,1MB:1048576`.
pub fn parse_sizes(value: &str) -> Result<Vec<SizeSpec>> {
    let mut sizes = Vec::new();
    for entry in value.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        let (label, bytes) = entry
            .split_once(':')
            .ok_or_else(|| BenchError::InvalidConfig(format!("Invalid size entry: {}", entry)))?;
        let bytes = bytes.trim().parse().map_err(|_| {
            BenchError::InvalidConfig(format!("Invalid byte count in size entry: {}", entry))
        })?;
        sizes.push(SizeSpec {
            label: label.trim().to_string(),
            bytes,
        });
    }
    if sizes.is_empty() {
        return Err(BenchError::InvalidConfig(
            "SIZES must name at least one size".to_string(),
        ));
    }
    Ok(sizes)
}
