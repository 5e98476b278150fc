// crates/bytehist-core/src/counts.rs
//
// 256-bucket byte occurrence counts.
// Invariant: sum of all buckets == input length.

/// Number of buckets (one per byte value).
pub const BUCKETS: usize = 256;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ByteCounts([u64; BUCKETS]);

impl ByteCounts {
    /// Count occurrences of each byte value in `data`.
    ///
    /// Empty input yields all-zero counts.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut h = [0u64; BUCKETS];
        for &b in data {
            h[b as usize] += 1;
        }
        Self(h)
    }

    #[inline]
    pub fn get(&self, byte: u8) -> u64 {
        self.0[byte as usize]
    }

    #[inline]
    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.0.iter().copied()
    }

    /// Sum of all buckets (== input length).
    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }

    /// Buckets with at least one occurrence.
    pub fn distinct(&self) -> usize {
        self.0.iter().filter(|&&c| c > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&c| c == 0)
    }

    /// Float view fed into the scaling pipeline.
    pub fn to_f64(&self) -> Vec<f64> {
        self.0.iter().map(|&c| c as f64).collect()
    }
}

impl Default for ByteCounts {
    fn default() -> Self {
        Self([0u64; BUCKETS])
    }
}
