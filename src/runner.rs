use std::collections::VecDeque;
use std::fmt;

use log::info;
use serde::Serialize;

use crate::algorithms::Algorithm;
use crate::data::TestFile;
use crate::padding::{pkcs7_pad, pkcs7_unpad};
use crate::report;
use crate::sampler;
use crate::{BenchError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Encrypt,
    Decrypt,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Encrypt => f.write_str("encrypt"),
            Operation::Decrypt => f.write_str("decrypt"),
        }
    }
}

/// One measurement, ready for the CSV writer. Field order is the report
/// column order.
#[derive(Debug, Clone, Serialize)]
pub struct ResultRow {
    pub file: String,
    pub algorithm: &'static str,
    pub operation: Operation,
    pub avg_time_s: f64,
    pub throughput_mib_s: f64,
    pub input_bytes: usize,
}

/// Benchmarks every (algorithm, file) pair in both directions and returns
/// one row per (algorithm, file, operation) triple.
pub fn run(
    algorithms: &[Algorithm],
    files: &[TestFile],
    runs_per_test: usize,
    mib_divisor: f64,
) -> Result<Vec<ResultRow>> {
    if algorithms.is_empty() {
        return Err(BenchError::InvalidConfig(
            "No algorithms to benchmark".to_string(),
        ));
    }
    if files.is_empty() {
        return Err(BenchError::InvalidConfig(
            "No test files to benchmark".to_string(),
        ));
    }
    if runs_per_test == 0 {
        return Err(BenchError::InvalidConfig(
            "Run count must be at least 1".to_string(),
        ));
    }

    let mut rows = Vec::with_capacity(algorithms.len() * files.len() * 2);
    for file in files {
        info!("Benchmarking {}...", file.label);
        for &algorithm in algorithms {
            info!("  - {} ({} runs)", algorithm, runs_per_test);
            benchmark_pair(algorithm, file, runs_per_test, mib_divisor, &mut rows)?;
        }
    }
    Ok(rows)
}

fn benchmark_pair(
    algorithm: Algorithm,
    file: &TestFile,
    runs: usize,
    mib_divisor: f64,
    rows: &mut Vec<ResultRow>,
) -> Result<()> {
    let block_size = algorithm.block_size();

    // Every encryption, the warm-up included, gets its own fresh key/IV pair
    // and keeps its artifacts so the decrypt phase can replay them in order.
    let mut pending = VecDeque::with_capacity(runs + 1);
    let enc_mean = sampler::measure(
        || {
            let (key, iv) = algorithm.generate_key_iv();
            let padded = pkcs7_pad(&file.content, block_size);
            let ciphertext = algorithm.encrypt_cbc(&padded, &key, &iv)?;
            pending.push_back((key, iv, ciphertext));
            Ok(())
        },
        runs,
    )?;

    // The warm-up encryption doubles as the dry run that fixes the
    // ciphertext length used for decrypt throughput.
    let ciphertext_len = match pending.front() {
        Some((_, _, ciphertext)) => ciphertext.len(),
        None => {
            return Err(BenchError::Integrity(
                "Encryption sampling recorded no ciphertext".to_string(),
            ))
        }
    };

    // Each decrypt run consumes the key, IV and ciphertext of the matching
    // encrypt run; recovered plaintexts are kept so the integrity comparison
    // can happen outside the timed region.
    let mut recovered = Vec::with_capacity(runs + 1);
    let dec_mean = sampler::measure(
        || {
            let (key, iv, ciphertext) = pending.pop_front().ok_or_else(|| {
                BenchError::Integrity(
                    "Ran out of recorded encryptions during decrypt sampling".to_string(),
                )
            })?;
            let padded = algorithm.decrypt_cbc(&ciphertext, &key, &iv)?;
            recovered.push(pkcs7_unpad(&padded, block_size)?);
            Ok(())
        },
        runs,
    )?;

    // A mismatch is a correctness bug in the cipher or padding path, never a
    // transient condition: abort the whole run.
    for plaintext in &recovered {
        if *plaintext != file.content {
            return Err(BenchError::Integrity(format!(
                "{} decryption of {} does not match the original plaintext",
                algorithm, file.label
            )));
        }
    }

    rows.push(ResultRow {
        file: file.label.clone(),
        algorithm: algorithm.name(),
        operation: Operation::Encrypt,
        avg_time_s: enc_mean,
        throughput_mib_s: report::throughput_mib_s(file.content.len(), enc_mean, mib_divisor),
        input_bytes: file.content.len(),
    });
    rows.push(ResultRow {
        file: file.label.clone(),
        algorithm: algorithm.name(),
        operation: Operation::Decrypt,
        avg_time_s: dec_mean,
        throughput_mib_s: report::throughput_mib_s(ciphertext_len, dec_mean, mib_divisor),
        input_bytes: ciphertext_len,
    });
    Ok(())
}
