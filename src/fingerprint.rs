//! Strategies that turn a value into the 64-bit integer fed to the hash family.
//!
//! Equal values must fingerprint equally, on every call. The filter only
//! ever sees fingerprints, so two values with the same fingerprint are
//! indistinguishable to it.

use crate::hash::DefaultBuildHasher;
use std::convert::Infallible;
use std::hash::{BuildHasher, Hash, Hasher};

pub trait Fingerprint<T: ?Sized> {
    type Error;

    fn fingerprint(&self, item: &T) -> Result<i64, Self::Error>;
}

impl<T: ?Sized, F> Fingerprint<T> for F
where
    F: Fn(&T) -> i64,
{
    type Error = Infallible;

    fn fingerprint(&self, item: &T) -> Result<i64, Infallible> {
        Ok(self(item))
    }
}

/// Adapts a fallible closure. Its errors reach the caller of
/// `try_insert`/`try_contains` unchanged.
#[derive(Clone, Copy, Debug)]
pub struct Fallible<F>(pub F);

impl<T: ?Sized, E, F> Fingerprint<T> for Fallible<F>
where
    F: Fn(&T) -> Result<i64, E>,
{
    type Error = E;

    fn fingerprint(&self, item: &T) -> Result<i64, E> {
        (self.0)(item)
    }
}

/// Fingerprints any `Hash` value through a [`BuildHasher`].
///
/// The builder must be deterministic for the lifetime of the filter;
/// `RandomState` is fine within one filter but not across filters.
#[derive(Clone, Copy, Debug, Default)]
pub struct HashFingerprint<BH = DefaultBuildHasher> {
    build_hasher: BH,
}

impl HashFingerprint<DefaultBuildHasher> {
    pub fn new() -> Self {
        Self {
            build_hasher: DefaultBuildHasher,
        }
    }
}

impl<BH: BuildHasher> HashFingerprint<BH> {
    pub fn with_hasher(build_hasher: BH) -> Self {
        Self { build_hasher }
    }
}

impl<T: Hash + ?Sized, BH: BuildHasher> Fingerprint<T> for HashFingerprint<BH> {
    type Error = Infallible;

    fn fingerprint(&self, item: &T) -> Result<i64, Infallible> {
        let mut hasher = self.build_hasher.build_hasher();
        item.hash(&mut hasher);
        Ok(hasher.finish() as i64)
    }
}

/// Integers are their own fingerprint.
#[derive(Clone, Copy, Debug, Default)]
pub struct Identity;

impl<T: Copy + Into<i64>> Fingerprint<T> for Identity {
    type Error = Infallible;

    fn fingerprint(&self, item: &T) -> Result<i64, Infallible> {
        Ok((*item).into())
    }
}
