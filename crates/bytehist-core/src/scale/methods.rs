// crates/bytehist-core/src/scale/methods.rs
//
// Pure normalization transforms. Each returns a new Vec and never prints.
// Empty input comes back empty.

/// Natural-log scaling.
///
/// If any element is below 1, every element is shifted by +1 first, so the
/// whole sequence stays ordered and `ln` never sees a value at or below zero
/// for non-negative input.
pub fn scale_log(values: &[f64]) -> Vec<f64> {
    let shift = if values.iter().any(|&x| x < 1.0) { 1.0 } else { 0.0 };
    values.iter().map(|&x| (x + shift).ln()).collect()
}

/// Divide by the maximum so the largest element becomes exactly 1.0.
/// A zero maximum returns the input unchanged.
pub fn scale_max(values: &[f64]) -> Vec<f64> {
    let Some(maximum) = max_of(values) else {
        return Vec::new();
    };
    if maximum == 0.0 {
        return values.to_vec();
    }
    values.iter().map(|&x| x / maximum).collect()
}

/// Shift so the minimum is 0.0, then divide by the new maximum.
/// A constant sequence returns all zeros.
pub fn scale_minmax(values: &[f64]) -> Vec<f64> {
    let Some(minimum) = min_of(values) else {
        return Vec::new();
    };
    let shifted: Vec<f64> = values.iter().map(|&x| x - minimum).collect();
    let maximum = max_of(&shifted).unwrap_or(0.0);
    if maximum == 0.0 {
        return shifted;
    }
    shifted.iter().map(|&x| x / maximum).collect()
}

fn max_of(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}

fn min_of(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::min)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(got: &[f64], want: &[f64]) {
        assert_eq!(got.len(), want.len());
        for (i, (g, w)) in got.iter().zip(want).enumerate() {
            assert!((g - w).abs() < 1e-4, "idx={} got={} want={}", i, g, w);
        }
    }

    #[test]
    fn max_divides_by_largest() {
        assert_eq!(scale_max(&[0.0, 5.0, 10.0]), vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn max_leaves_all_zero_alone() {
        assert_eq!(scale_max(&[0.0, 0.0, 0.0]), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn minmax_spans_unit_interval() {
        assert_close(&scale_minmax(&[3.0, 5.0, 10.0]), &[0.0, 0.2857142857, 1.0]);
    }

    #[test]
    fn minmax_constant_is_zero() {
        assert_eq!(scale_minmax(&[7.0, 7.0, 7.0]), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn log_shifts_whole_sequence_when_below_one() {
        assert_close(&scale_log(&[0.0, 1.0, 9.0]), &[0.0, 0.6931, 2.3026]);
    }

    #[test]
    fn log_without_shift() {
        assert_close(&scale_log(&[1.0, 10.0]), &[0.0, 2.302585]);
    }

    #[test]
    fn empty_in_empty_out() {
        assert!(scale_log(&[]).is_empty());
        assert!(scale_max(&[]).is_empty());
        assert!(scale_minmax(&[]).is_empty());
    }
}
