use crate::error::{ConfigurationError, Result};
use std::f64::consts::LN_2;

const LN_2_2: f64 = LN_2 * LN_2;

/// Validated filter dimensions: `size` bits probed by `num_hashes` functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterConfig {
    size: usize,
    num_hashes: usize,
}

impl FilterConfig {
    pub fn new(size: usize, num_hashes: usize) -> Result<Self> {
        if size < 1 {
            return Err(ConfigurationError::InvalidSize { size });
        }
        if num_hashes < 1 {
            return Err(ConfigurationError::InvalidHashCount { num_hashes });
        }
        Ok(Self { size, num_hashes })
    }

    /// Sizes a filter for `items_count` items at the wanted rate of false
    /// positives, in ]0.0, 1.0[
    pub fn with_fp_rate(items_count: usize, fp_rate: f64) -> Result<Self> {
        if items_count < 1 {
            return Err(ConfigurationError::InvalidItemsCount { items_count });
        }
        if !(fp_rate > 0.0 && fp_rate < 1.0) {
            return Err(ConfigurationError::InvalidFpRate { fp_rate });
        }
        Self::new(compute_m_num(items_count, fp_rate), compute_k_num(fp_rate))
    }

    #[inline(always)]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline(always)]
    pub fn num_hashes(&self) -> usize {
        self.num_hashes
    }

    /// Theoretical false positive rate after `items` distinct inserts,
    /// `(1 - e^(-kn/m))^k`.
    pub fn expected_fp_rate(&self, items: usize) -> f64 {
        let (m, k, n) = (self.size as f64, self.num_hashes as f64, items as f64);
        (1.0 - (-k * n / m).exp()).powf(k)
    }
}

// Calculates the optimal Bloom filter size, m, based on the number of
// items and the desired rate of false positives.
fn compute_m_num(items_count: usize, fp_rate: f64) -> usize {
    ((items_count as f64) * fp_rate.ln().abs() / LN_2_2).ceil() as usize
}

// Calculates the optimal number of hash functions to use for a Bloom
// filter based on the desired rate of false positives.
fn compute_k_num(fp_rate: f64) -> usize {
    fp_rate.log2().abs().ceil() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_dimensions() {
        assert_eq!(Err(ConfigurationError::InvalidSize { size: 0 }), FilterConfig::new(0, 3));
        assert_eq!(
            Err(ConfigurationError::InvalidHashCount { num_hashes: 0 }),
            FilterConfig::new(100, 0)
        );
        assert!(FilterConfig::new(1, 1).is_ok());
    }

    #[test]
    fn with_fp_rate() {
        let config = FilterConfig::with_fp_rate(100, 0.03).unwrap();
        // -100 * ln(0.03) / ln2 ^ 2 = 729.8
        assert_eq!(730, config.size());
        assert_eq!(6, config.num_hashes());
    }

    #[test]
    fn with_fp_rate_rejects_bad_input() {
        assert_eq!(
            Err(ConfigurationError::InvalidItemsCount { items_count: 0 }),
            FilterConfig::with_fp_rate(0, 0.01)
        );
        for fp_rate in [0.0, 1.0, -0.5, 2.0] {
            assert_eq!(
                Err(ConfigurationError::InvalidFpRate { fp_rate }),
                FilterConfig::with_fp_rate(10, fp_rate)
            );
        }
        assert!(FilterConfig::with_fp_rate(10, f64::NAN).is_err());
    }

    #[test]
    fn expected_fp_rate() {
        let config = FilterConfig::new(1_751_201, 5).unwrap();
        let rate = config.expected_fp_rate(235_886);
        assert!(rate > 0.02 && rate < 0.04, "rate = {}", rate);
        assert_eq!(0.0, config.expected_fp_rate(0));
    }
}
