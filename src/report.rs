use std::fs;
use std::path::Path;

use crate::algorithms::Algorithm;
use crate::runner::{Operation, ResultRow};
use crate::Result;

/// Throughput in units of `divisor` bytes per second: 2^20 for MiB/s, 10^6
/// for decimal MB/s.
pub fn throughput_mib_s(bytes: usize, mean_seconds: f64, divisor: f64) -> f64 {
    (bytes as f64 / divisor) / mean_seconds
}

/// Writes the flat table, one record per row, serde-serialized so the header
/// follows the ResultRow field order.
pub fn write_csv(rows: &[ResultRow], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the pivoted summary: one throughput table per operation, rows =
/// files, columns = algorithms.
pub fn write_summary(
    rows: &[ResultRow],
    algorithms: &[Algorithm],
    unit: &str,
    path: &Path,
) -> Result<()> {
    let mut text = String::new();
    text.push_str(&format!("Throughput ({}) - Encrypt\n", unit));
    text.push_str(&pivot_table(rows, algorithms, Operation::Encrypt));
    text.push_str(&format!("\nThroughput ({}) - Decrypt\n", unit));
    text.push_str(&pivot_table(rows, algorithms, Operation::Decrypt));
    fs::write(path, text)?;
    Ok(())
}

/// Renders the stdout summary keyed by (file, operation) with one column per
/// algorithm.
pub fn render_pivot(rows: &[ResultRow], algorithms: &[Algorithm]) -> String {
    let labels = file_labels(rows);
    let mut out = String::new();
    out.push_str(&format!("{:<6}{:<10}", "file", "operation"));
    for algorithm in algorithms {
        out.push_str(&format!("  {:>10}", algorithm.name()));
    }
    out.push('\n');
    for label in &labels {
        for operation in [Operation::Encrypt, Operation::Decrypt] {
            out.push_str(&format!("{:<6}{:<10}", label, operation));
            for algorithm in algorithms {
                match lookup(rows, label, algorithm.name(), operation) {
                    Some(value) => out.push_str(&format!("  {:>10.2}", value)),
                    None => out.push_str(&format!("  {:>10}", "-")),
                }
            }
            out.push('\n');
        }
    }
    out
}

fn pivot_table(rows: &[ResultRow], algorithms: &[Algorithm], operation: Operation) -> String {
    let labels = file_labels(rows);
    let label_width = labels
        .iter()
        .map(|l| l.len())
        .chain(std::iter::once("file".len()))
        .max()
        .unwrap_or(4);

    let mut out = String::new();
    out.push_str(&format!("{:<width$}", "file", width = label_width));
    for algorithm in algorithms {
        out.push_str(&format!("  {:>10}", algorithm.name()));
    }
    out.push('\n');
    for label in &labels {
        out.push_str(&format!("{:<width$}", label, width = label_width));
        for algorithm in algorithms {
            match lookup(rows, label, algorithm.name(), operation) {
                Some(value) => out.push_str(&format!("  {:>10.2}", value)),
                None => out.push_str(&format!("  {:>10}", "-")),
            }
        }
        out.push('\n');
    }
    out
}

fn file_labels(rows: &[ResultRow]) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();
    for row in rows {
        if !labels.iter().any(|l| l == &row.file) {
            labels.push(row.file.clone());
        }
    }
    labels
}

fn lookup(rows: &[ResultRow], file: &str, algorithm: &str, operation: Operation) -> Option<f64> {
    rows.iter()
        .find(|r| r.file == file && r.algorithm == algorithm && r.operation == operation)
        .map(|r| r.throughput_mib_s)
}
