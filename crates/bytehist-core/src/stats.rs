// crates/bytehist-core/src/stats.rs
//
// Descriptive statistics over the 256 bucket counts.
// Each bucket is one sample; nothing is weighted by occurrence.

use crate::counts::ByteCounts;

#[derive(Clone, Debug, PartialEq)]
pub struct Stats {
    pub min: u64,
    pub max: u64,
    pub mean: f64,
    /// Population standard deviation.
    pub stddev: f64,
    /// `100 * stddev / mean`; `None` when the mean is zero (empty input).
    pub rel_stddev: Option<f64>,
    pub median: f64,
    /// Buckets with a non-zero count.
    pub distinct: usize,
    /// Shannon entropy in bits per byte (0..=8).
    pub entropy: f64,
}

impl Stats {
    pub fn from_counts(counts: &ByteCounts) -> Self {
        Self {
            distinct: counts.distinct(),
            ..Self::from_values(counts.as_slice())
        }
    }

    /// Same computation over an arbitrary set of bucket values.
    pub fn from_values(values: &[u64]) -> Self {
        let (min, max) = min_max(values);
        let mean = mean(values);
        let stddev = stddev(values, mean);
        let rel_stddev = if mean == 0.0 {
            None
        } else {
            Some(100.0 * stddev / mean)
        };

        Self {
            min,
            max,
            mean,
            stddev,
            rel_stddev,
            median: median(values),
            distinct: values.iter().filter(|&&c| c > 0).count(),
            entropy: entropy_bits(values),
        }
    }
}

fn min_max(values: &[u64]) -> (u64, u64) {
    let min = values.iter().copied().min().unwrap_or(0);
    let max = values.iter().copied().max().unwrap_or(0);
    (min, max)
}

fn mean(values: &[u64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sum: f64 = values.iter().map(|&v| v as f64).sum();
    sum / values.len() as f64
}

fn stddev(values: &[u64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let var: f64 = values
        .iter()
        .map(|&v| {
            let d = v as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / values.len() as f64;
    var.sqrt()
}

fn median(values: &[u64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0
    } else {
        sorted[mid] as f64
    }
}

fn entropy_bits(values: &[u64]) -> f64 {
    let total: u64 = values.iter().sum();
    if total == 0 {
        return 0.0;
    }
    let mut ent = 0.0;
    for &c in values {
        if c == 0 {
            continue;
        }
        let p = (c as f64) / (total as f64);
        ent -= p * p.log2();
    }
    ent
}
