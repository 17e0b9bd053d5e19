use std::borrow::Borrow;
use std::cmp::Ordering;
use std::iter::FromIterator;
use std::slice;

/// Exact membership over a sorted copy of the input, answered by binary
/// search.
///
/// Built once and never modified. Duplicates are kept; a query matches if
/// any copy is found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Set<T> {
    data: Vec<T>,
}

impl<T: Ord + Clone> Set<T> {
    /// Copies `items` and sorts the copy. `items` is left untouched.
    pub fn new(items: &[T]) -> Self {
        Self::from(items.to_vec())
    }
}

impl<T: Ord> Set<T> {
    pub fn contains<Q>(&self, query: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.binary_search(query).is_some()
    }

    // [start, end) narrows until a match or until it is empty.
    fn binary_search<Q>(&self, query: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (mut start, mut end) = (0, self.data.len());
        while start < end {
            let mid = start + (end - start) / 2;
            match self.data[mid].borrow().cmp(query) {
                Ordering::Greater => end = mid,
                Ordering::Less => start = mid + 1,
                Ordering::Equal => return Some(mid),
            }
        }
        None
    }
}

impl<T> Set<T> {
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T: Ord> From<Vec<T>> for Set<T> {
    fn from(mut data: Vec<T>) -> Self {
        data.sort_unstable();
        Self { data }
    }
}

impl<T: Ord> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
