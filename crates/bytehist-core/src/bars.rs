// crates/bytehist-core/src/bars.rs
//
// Map [0,1] scaled values to integer bar lengths.
//
// Rounding: round-half-to-even, so 0.5-fraction ties are deterministic.
// Visibility: a bucket with count > 0 never gets a zero-length bar.
// A bucket with count == 0 is never bumped.

use crate::error::{HistError, Result};

pub const BAR_LENGTH_MAX: usize = 80;

/// Bar length for a single bucket.
pub fn bar_length(scaled: f64, count: u64) -> usize {
    let raw = (scaled * BAR_LENGTH_MAX as f64).round_ties_even();
    // NaN and negatives land on 0; values above 1.0 clamp to the chart width.
    let bar = (raw.max(0.0) as usize).min(BAR_LENGTH_MAX);
    if count > 0 && bar == 0 {
        1
    } else {
        bar
    }
}

pub fn bar_lengths(scaled: &[f64], counts: &[u64]) -> Result<Vec<usize>> {
    if scaled.len() != counts.len() {
        return Err(HistError::ShapeMismatch {
            scaled: scaled.len(),
            counts: counts.len(),
        });
    }
    Ok(scaled
        .iter()
        .zip(counts)
        .map(|(&s, &c)| bar_length(s, c))
        .collect())
}
