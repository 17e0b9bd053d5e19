//! A common query interface over the filter and the exact sets it is
//! compared against.

use crate::classic::Filter;
use crate::fingerprint::Fingerprint;
use crate::sorted::Set;
use std::borrow::Borrow;
use std::collections::{BTreeSet, HashSet};
use std::convert::Infallible;
use std::hash::{BuildHasher, Hash};

pub trait Membership<Q: ?Sized> {
    fn contains(&self, item: &Q) -> bool;
}

impl<T: ?Sized, F: Fingerprint<T, Error = Infallible>> Membership<T> for Filter<T, F> {
    fn contains(&self, item: &T) -> bool {
        Filter::contains(self, item)
    }
}

impl<T: Ord + Borrow<Q>, Q: Ord + ?Sized> Membership<Q> for Set<T> {
    fn contains(&self, item: &Q) -> bool {
        Set::contains(self, item)
    }
}

impl<T: Ord + Borrow<Q>, Q: Ord + ?Sized> Membership<Q> for BTreeSet<T> {
    fn contains(&self, item: &Q) -> bool {
        BTreeSet::contains(self, item)
    }
}

impl<T, Q, S> Membership<Q> for HashSet<T, S>
where
    T: Eq + Hash + Borrow<Q>,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    fn contains(&self, item: &Q) -> bool {
        HashSet::contains(self, item)
    }
}

/// Counts how many of `queries` `set` reports as present.
pub fn count_found<'a, Q, M, I>(queries: I, set: &M) -> usize
where
    Q: ?Sized + 'a,
    M: Membership<Q> + ?Sized,
    I: IntoIterator<Item = &'a Q>,
{
    queries.into_iter().filter(|q| set.contains(*q)).count()
}

/// Answers from `exact`, but asks `filter` first and only falls through to
/// `exact` on a possible hit.
///
/// The answers equal `exact`'s as long as every member of `exact` has been
/// inserted into `filter`.
#[derive(Debug)]
pub struct Prefiltered<'a, B: ?Sized, E: ?Sized> {
    filter: &'a B,
    exact: &'a E,
}

impl<'a, B: ?Sized, E: ?Sized> Prefiltered<'a, B, E> {
    pub fn new(filter: &'a B, exact: &'a E) -> Self {
        Self { filter, exact }
    }
}

impl<'a, Q, B, E> Membership<Q> for Prefiltered<'a, B, E>
where
    Q: ?Sized,
    B: Membership<Q> + ?Sized,
    E: Membership<Q> + ?Sized,
{
    fn contains(&self, item: &Q) -> bool {
        self.filter.contains(item) && self.exact.contains(item)
    }
}
