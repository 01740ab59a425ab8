//! Fixed-capacity bit set over the discriminator space of a branch.

use crate::BRANCHING_FACTOR;

const WORD_BITS: usize = u64::BITS as usize;
const WORDS: usize = BRANCHING_FACTOR.div_ceil(WORD_BITS);

/// A set of up to [`BRANCHING_FACTOR`] bits stored inline as 64-bit words.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Bitmap {
    words: [u64; WORDS],
}

impl Bitmap {
    /// Number of addressable bits.
    pub const CAPACITY: usize = BRANCHING_FACTOR;

    /// Sets the bit at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not below [`Bitmap::CAPACITY`].
    #[inline]
    pub fn set(&mut self, idx: usize) {
        assert!(idx < Self::CAPACITY, "bit {idx} out of range");
        self.words[idx / WORD_BITS] |= 1 << (idx % WORD_BITS);
    }

    /// Clears the bit at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not below [`Bitmap::CAPACITY`].
    #[inline]
    pub fn clear(&mut self, idx: usize) {
        assert!(idx < Self::CAPACITY, "bit {idx} out of range");
        self.words[idx / WORD_BITS] &= !(1 << (idx % WORD_BITS));
    }

    /// Returns `true` if the bit at `idx` is set.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not below [`Bitmap::CAPACITY`].
    #[inline]
    #[must_use]
    pub fn is_set(&self, idx: usize) -> bool {
        assert!(idx < Self::CAPACITY, "bit {idx} out of range");
        self.words[idx / WORD_BITS] & (1 << (idx % WORD_BITS)) != 0
    }

    /// Counts the set bits in `lo..hi`.
    ///
    /// # Panics
    ///
    /// Panics if the range is inverted or exceeds the capacity.
    #[must_use]
    pub fn count_range(&self, lo: usize, hi: usize) -> usize {
        assert!(lo <= hi && hi <= Self::CAPACITY, "bad range {lo}..{hi}");
        let mut count = 0;
        for (i, word) in self.words.iter().enumerate() {
            let start = i * WORD_BITS;
            let end = start + WORD_BITS;
            if end <= lo || start >= hi {
                continue;
            }
            let from = lo.saturating_sub(start);
            let to = (hi - start).min(WORD_BITS);
            count += (word & range_mask(from, to)).count_ones() as usize;
        }
        count
    }

    /// Counts all set bits.
    #[must_use]
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Iterates over the indices of the set bits in increasing order.
    #[must_use]
    pub fn ones(&self) -> Ones<'_> {
        Ones {
            words: &self.words,
            word_idx: 0,
            current: self.words[0],
        }
    }
}

/// Mask with bits `from..to` of a word set. Requires `from <= to <= 64` and `from < 64`.
#[inline]
const fn range_mask(from: usize, to: usize) -> u64 {
    let upper = if to == WORD_BITS {
        u64::MAX
    } else {
        (1 << to) - 1
    };
    upper & !((1 << from) - 1)
}

/// Iterator over the set bits of a [`Bitmap`].
#[derive(Debug, Clone)]
pub struct Ones<'a> {
    words: &'a [u64; WORDS],
    word_idx: usize,
    current: u64,
}

impl Iterator for Ones<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current == 0 {
            self.word_idx += 1;
            if self.word_idx >= WORDS {
                return None;
            }
            self.current = self.words[self.word_idx];
        }
        let bit = self.current.trailing_zeros() as usize;
        // Drop the lowest set bit.
        self.current &= self.current - 1;
        Some(self.word_idx * WORD_BITS + bit)
    }
}

#[cfg(test)]
mod tests {
    use super::Bitmap;

    #[test]
    fn set_clear_is_set() {
        let mut bitmap = Bitmap::default();
        for idx in [0, 1, 63, 64, 127, 128, 255, 256] {
            assert!(!bitmap.is_set(idx));
            bitmap.set(idx);
            assert!(bitmap.is_set(idx));
        }
        assert_eq!(bitmap.count(), 8);
        bitmap.clear(64);
        assert!(!bitmap.is_set(64));
        assert!(bitmap.is_set(63));
        assert_eq!(bitmap.count(), 7);
    }

    #[test]
    fn count_range_across_words() {
        let mut bitmap = Bitmap::default();
        for idx in (0..Bitmap::CAPACITY).step_by(3) {
            bitmap.set(idx);
        }
        for (lo, hi) in [(0, 0), (0, 1), (0, 64), (1, 65), (60, 200), (0, 257), (256, 257)] {
            let expected = (lo..hi).filter(|i| i % 3 == 0).count();
            assert_eq!(bitmap.count_range(lo, hi), expected, "range {lo}..{hi}");
        }
    }

    #[test]
    fn rank_counts_strictly_below() {
        let mut bitmap = Bitmap::default();
        for c in [b'a', b'w', b'y'] {
            bitmap.set(usize::from(c));
        }
        assert_eq!(bitmap.count_range(0, usize::from(b'x')), 2);
        bitmap.set(usize::from(b'x'));
        assert_eq!(bitmap.count_range(0, usize::from(b'x')), 2);
        assert_eq!(bitmap.count_range(0, usize::from(b'y')), 3);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn set_past_capacity_panics() {
        let mut bitmap = Bitmap::default();
        bitmap.set(Bitmap::CAPACITY);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn is_set_on_padding_bit_panics() {
        let _ = Bitmap::default().is_set(300);
    }

    #[test]
    fn ones_in_order() {
        let mut bitmap = Bitmap::default();
        assert_eq!(bitmap.ones().next(), None);
        for idx in [256, 0, 65, 64, 200] {
            bitmap.set(idx);
        }
        assert_eq!(bitmap.ones().collect::<Vec<_>>(), vec![0, 64, 65, 200, 256]);
    }
}
