pub mod algorithms;
pub mod config;
pub mod data;
pub mod padding;
pub mod report;
pub mod runner;
pub mod sampler;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("Padding error: {0}")]
    Padding(String),
    #[error("Invalid key or IV: {0}")]
    InvalidKeyOrIv(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Integrity error: {0}")]
    Integrity(String),
    #[error("I/O error: {0}")]
    Io(String),
    #[error("Report error: {0}")]
    Report(String),
}

pub type Result<T> = std::result::Result<T, BenchError>;

impl From<std::io::Error> for BenchError {
    fn from(err: std::io::Error) -> Self {
        BenchError::Io(err.to_string())
    }
}

impl From<csv::Error> for BenchError {
    fn from(err: csv::Error) -> Self {
        BenchError::Report(err.to_string())
    }
}

pub use algorithms::Algorithm;
pub use config::{BenchConfig, SizeSpec};
pub use runner::{Operation, ResultRow};
