use std::time::Instant;

use crate::{BenchError, Result};

/// Executes `op` once as a discarded warm-up, then `runs` timed times, and
/// returns the arithmetic mean wall-clock duration in seconds.
///
/// The timed region is the whole closure, so per-call setup (key and IV
/// generation, padding) counts toward the mean. That inclusion is the
/// measurement policy of this harness, not an accident.
pub fn measure<T, F>(mut op: F, runs: usize) -> Result<f64>
where
    F: FnMut() -> Result<T>,
{
    if runs == 0 {
        return Err(BenchError::InvalidConfig(
            "Run count must be at least 1".to_string(),
        ));
    }

    // Warm-up: the caller may capture its output through the closure, the
    // duration is dropped.
    op()?;

    let mut total = 0.0;
    for _ in 0..runs {
        let start = Instant::now();
        op()?;
        total += start.elapsed().as_secs_f64();
    }
    Ok(total / runs as f64)
}
