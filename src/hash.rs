use crate::error::{ConfigurationError, Result};
use rand::rngs::{StdRng, ThreadRng};
use rand::{thread_rng, Rng, SeedableRng};
use std::collections::hash_map::DefaultHasher;
use std::hash::BuildHasher;
use std::slice;
use tracing::debug;

/// The ninth Mersenne prime, 2^61 - 1.
pub const MERSENNE_61: u64 = (1 << 61) - 1;

/// One member of the Carter-Wegman family `h(x) = (a * x + b) mod p`
/// with `p = 2^61 - 1`.
///
/// The product is computed in 128-bit arithmetic and reduced with a
/// Euclidean remainder, so every output is exact and lies in `[0, p)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UniversalHash {
    a: i64,
    b: i64,
}

impl UniversalHash {
    pub fn new(a: i64, b: i64) -> Self {
        Self { a, b }
    }

    /// Draws both coefficients from the thread-local generator.
    pub fn random() -> Self {
        Self::from_rng(&mut thread_rng())
    }

    /// Draws both coefficients from `rng`. A seeded generator gives
    /// reproducible functions.
    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.gen(), rng.gen())
    }

    pub fn a(&self) -> i64 {
        self.a
    }

    pub fn b(&self) -> i64 {
        self.b
    }

    #[inline]
    pub fn hash(&self, x: i64) -> u64 {
        let t = i128::from(self.a) * i128::from(x) + i128::from(self.b);
        t.rem_euclid(i128::from(MERSENNE_61)) as u64
    }
}

/// An ordered set of `k` independently drawn [`UniversalHash`] functions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashFamily {
    hashes: Vec<UniversalHash>,
}

impl HashFamily {
    /// Builds `k` functions, each from its own pair of draws on `rng`.
    pub fn from_rng<R: Rng + ?Sized>(k: usize, rng: &mut R) -> Result<Self> {
        if k < 1 {
            return Err(ConfigurationError::InvalidHashCount { num_hashes: k });
        }
        let hashes = (0..k).map(|_| UniversalHash::from_rng(&mut *rng)).collect();
        debug!(k, "drew random hash family");
        Ok(Self { hashes })
    }

    /// Builds one function per `(a, b)` pair, in order.
    pub fn with_coefficients(coefficients: Vec<(i64, i64)>) -> Result<Self> {
        if coefficients.is_empty() {
            return Err(ConfigurationError::InvalidHashCount { num_hashes: 0 });
        }
        let hashes = coefficients.into_iter().map(|(a, b)| UniversalHash::new(a, b)).collect();
        Ok(Self { hashes })
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    // Always false once constructed.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }

    /// Hashes `x` with the `index`-th function.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    pub fn hash_at(&self, index: usize, x: i64) -> u64 {
        self.hashes[index].hash(x)
    }

    pub fn iter(&self) -> slice::Iter<'_, UniversalHash> {
        self.hashes.iter()
    }

    /// Lazily yields the `k` probe positions of `x` in a table of `m` slots.
    ///
    /// # Panics
    ///
    /// Panics if `m == 0`.
    pub fn indices(&self, x: i64, m: usize) -> HashIter<'_> {
        assert!(m > 0, "cannot index into a table of 0 slots");
        HashIter {
            hashes: self.hashes.iter(),
            x,
            m: m as u64,
        }
    }
}

pub struct HashIter<'a> {
    hashes: slice::Iter<'a, UniversalHash>,
    x: i64,
    m: u64,
}

impl<'a> Iterator for HashIter<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.hashes.next().map(|h| (h.hash(self.x) % self.m) as usize)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.hashes.size_hint()
    }
}

impl<'a> ExactSizeIterator for HashIter<'a> {}

/// A source of hash families: turns a requested count into `k` functions.
pub trait BuildHashFamily {
    fn build_hash_family(self, k: usize) -> Result<HashFamily>;
}

/// Draws every coefficient from a random generator.
pub struct RandomHashes<R> {
    rng: R,
}

impl RandomHashes<ThreadRng> {
    pub fn new() -> Self {
        Self { rng: thread_rng() }
    }
}

impl Default for RandomHashes<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomHashes<StdRng> {
    /// Reproducible coefficients: the same seed always yields the same family.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomHashes<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> BuildHashFamily for RandomHashes<R> {
    fn build_hash_family(mut self, k: usize) -> Result<HashFamily> {
        HashFamily::from_rng(k, &mut self.rng)
    }
}

/// Uses caller-supplied `(a, b)` pairs, one per function.
#[derive(Clone, Debug)]
pub struct ExplicitHashes(pub Vec<(i64, i64)>);

impl BuildHashFamily for ExplicitHashes {
    fn build_hash_family(self, k: usize) -> Result<HashFamily> {
        if k < 1 {
            return Err(ConfigurationError::InvalidHashCount { num_hashes: k });
        }
        if self.0.len() != k {
            return Err(ConfigurationError::CoefficientCountMismatch {
                expected: k,
                actual: self.0.len(),
            });
        }
        HashFamily::with_coefficients(self.0)
    }
}

/// std's SipHash with fixed keys, so fingerprints agree across filters
/// and runs of the same binary.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultBuildHasher;

impl BuildHasher for DefaultBuildHasher {
    type Hasher = DefaultHasher;

    fn build_hasher(&self) -> DefaultHasher {
        DefaultHasher::new()
    }
}
