use crate::error::{ConfigurationError, Result};
use std::mem::size_of;

type Word = usize;
const BITS_PER_WORD: usize = size_of::<Word>() * 8;

/// Fixed-length bit vector packed into machine words.
///
/// Bits can be set but never cleared.
#[derive(Clone, Debug)]
pub struct BitArray {
    data: Vec<Word>,
    count: usize,
}

impl BitArray {
    /// Creates a new BitArray with `count` bits, all clear.
    ///
    /// Fails with [`ConfigurationError::TooLarge`] when the words cannot be
    /// allocated.
    pub fn new(count: usize) -> Result<Self> {
        let words = words_for(count);
        let mut data = Vec::new();
        data.try_reserve_exact(words).map_err(|_| ConfigurationError::TooLarge { size: count })?;
        data.resize(words, 0);
        Ok(Self { data, count })
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn set(&mut self, bit: usize) {
        assert!(bit < self.count, "bit index {} out of range for {} bits", bit, self.count);
        self.data[bit / BITS_PER_WORD] |= (1 as Word) << (bit % BITS_PER_WORD);
    }

    #[inline]
    pub fn get(&self, bit: usize) -> bool {
        assert!(bit < self.count, "bit index {} out of range for {} bits", bit, self.count);
        self.data[bit / BITS_PER_WORD] & ((1 as Word) << (bit % BITS_PER_WORD)) != 0
    }

    pub fn count_ones(&self) -> usize {
        self.data.iter().map(|w| w.count_ones() as usize).sum()
    }
}

// Number of words holding `count` bits, without overflowing near usize::MAX.
#[inline]
fn words_for(count: usize) -> usize {
    count / BITS_PER_WORD + usize::from(count % BITS_PER_WORD != 0)
}
