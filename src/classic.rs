use crate::bits::BitArray;
use crate::config::FilterConfig;
use crate::error::Result;
use crate::fingerprint::Fingerprint;
use crate::hash::{BuildHashFamily, HashFamily};
use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;
use tracing::debug;

/// A Bloom filter over values of type `T`.
///
/// Each value is reduced to an `i64` by the fingerprint strategy `F`, then
/// probed at `h_i(fingerprint) mod m` for every member `h_i` of the hash
/// family. Bits are never cleared, so a value that was inserted is always
/// reported as present.
pub struct Filter<T: ?Sized, F> {
    config: FilterConfig,    // m and k
    bits: BitArray,          // filter data
    hash_family: HashFamily, // k universal hashes
    fingerprint: F,
    _marker: PhantomData<fn(&T)>,
}

impl<T: ?Sized, F: Fingerprint<T>> Filter<T, F> {
    /// Create a new bloom filter structure with `size` bits and
    /// `num_hashes` hash functions drawn from `build_hash_family`.
    pub fn new<BHF: BuildHashFamily>(
        size: usize,
        num_hashes: usize,
        fingerprint: F,
        build_hash_family: BHF,
    ) -> Result<Self> {
        Self::with_config(FilterConfig::new(size, num_hashes)?, fingerprint, build_hash_family)
    }

    pub fn with_config<BHF: BuildHashFamily>(
        config: FilterConfig,
        fingerprint: F,
        build_hash_family: BHF,
    ) -> Result<Self> {
        let hash_family = build_hash_family.build_hash_family(config.num_hashes())?;
        let bits = BitArray::new(config.size())?;
        debug!(size = config.size(), num_hashes = config.num_hashes(), "created bloom filter");
        Ok(Self {
            config,
            bits,
            hash_family,
            fingerprint,
            _marker: PhantomData,
        })
    }

    /// Create a filter sized for `items_count` items.
    /// fp_rate is the wanted rate of false positives, in ]0.0, 1.0[
    pub fn with_fp_rate<BHF: BuildHashFamily>(
        items_count: usize,
        fp_rate: f64,
        fingerprint: F,
        build_hash_family: BHF,
    ) -> Result<Self> {
        Self::with_config(FilterConfig::with_fp_rate(items_count, fp_rate)?, fingerprint, build_hash_family)
    }

    /// Sets every probe bit of `item`. Fails only if the fingerprint does,
    /// in which case no bit is touched.
    pub fn try_insert(&mut self, item: &T) -> std::result::Result<(), F::Error> {
        let x = self.fingerprint.fingerprint(item)?;
        let bits = &mut self.bits;
        self.hash_family.indices(x, bits.len()).for_each(|i| bits.set(i));
        Ok(())
    }

    /// `Ok(false)` means `item` was definitely never inserted; `Ok(true)`
    /// means it probably was.
    pub fn try_contains(&self, item: &T) -> std::result::Result<bool, F::Error> {
        let x = self.fingerprint.fingerprint(item)?;
        Ok(self.hash_family.indices(x, self.bits.len()).all(|i| self.bits.get(i)))
    }

    #[inline(always)]
    pub fn size(&self) -> usize {
        self.config.size()
    }

    #[inline(always)]
    pub fn num_hashes(&self) -> usize {
        self.config.num_hashes()
    }

    pub fn hash_family(&self) -> &HashFamily {
        &self.hash_family
    }

    pub fn bits_set(&self) -> usize {
        self.bits.count_ones()
    }

    /// Fraction of bits currently set.
    pub fn fill_ratio(&self) -> f64 {
        self.bits_set() as f64 / self.size() as f64
    }

    /// Theoretical false positive rate once `items` distinct values are in.
    pub fn estimated_fp_rate(&self, items: usize) -> f64 {
        self.config.expected_fp_rate(items)
    }

    pub fn config(&self) -> FilterConfig {
        self.config
    }
}

impl<T: ?Sized, F: Fingerprint<T, Error = Infallible>> Filter<T, F> {
    pub fn insert(&mut self, item: &T) {
        match self.try_insert(item) {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }

    pub fn contains(&self, item: &T) -> bool {
        match self.try_contains(item) {
            Ok(found) => found,
            Err(never) => match never {},
        }
    }
}

impl<T: ?Sized, F> fmt::Debug for Filter<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter")
            .field("size", &self.bits.len())
            .field("num_hashes", &self.hash_family.len())
            .field("bits_set", &self.bits.count_ones())
            .finish()
    }
}
