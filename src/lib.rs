//! Bloom filter over a Carter-Wegman universal hash family, plus a sorted,
//! binary-searched exact set to check it against.
//!
//! ```
//! use universal_bloom::{BloomFilter, HashFingerprint, RandomHashes, SortedMembershipSet};
//!
//! let words = ["apple", "fig", "pear"];
//! let mut filter: BloomFilter<str, _> =
//!     BloomFilter::new(1000, 3, HashFingerprint::new(), RandomHashes::seeded(42)).unwrap();
//! words.iter().for_each(|w| filter.insert(w));
//! assert!(words.iter().all(|w| filter.contains(w)));
//!
//! let exact = SortedMembershipSet::new(&words);
//! assert!(exact.contains(&"fig"));
//! assert!(!exact.contains(&"plum"));
//! ```

mod bits;
mod classic;
mod config;
mod error;
mod fingerprint;
mod hash;
mod membership;
mod sorted;

pub use classic::Filter as BloomFilter;
pub use config::FilterConfig;
pub use error::{ConfigurationError, Result};
pub use fingerprint::{Fallible, Fingerprint, HashFingerprint, Identity};
pub use hash::{
    BuildHashFamily, DefaultBuildHasher, ExplicitHashes, HashFamily, HashIter, RandomHashes, UniversalHash, MERSENNE_61,
};
pub use membership::{count_found, Membership, Prefiltered};
pub use sorted::Set as SortedMembershipSet;
