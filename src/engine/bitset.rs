//! # Fixed Bit Set
//!
//! [`FixedBitSet`] is the signature value used everywhere in this crate: a
//! packed set of [`TOTAL_BITS`] flags, one per component kind, stored as
//! [`WORD_COUNT`] words of [`BITS_PER_WORD`] bits.
//!
//! ## Purpose
//! Archetype matching compares signatures in the innermost loops of a
//! simulation tick. Every relation here (superset, disjoint, equality) is a
//! fixed number of word operations, independent of how many bits are set.
//!
//! ## Value semantics
//! The set is `Copy`. Copies never alias, and two sets with identical words
//! are equal, hash identically, and are interchangeable as map keys.
//!
//! ## Addressing
//! Bit-level calls validate the index before touching any word and report
//! failures as [`MaskError`]. Positional reads through `mask[index]` follow
//! the same check and panic with the same message instead of returning
//! `false` for an out-of-range index.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Index, Not};

use crate::engine::error::{InvalidWordIndexError, MaskError, MaskResult};
use crate::engine::types::{locate, BitIndex, Word, BITS_PER_WORD, TOTAL_BITS, WORD_COUNT};

/// Fixed-capacity bitset describing a set of components.
///
/// ## Invariants
/// - Bit `i` is stored in `words[i / BITS_PER_WORD]` at offset `i % BITS_PER_WORD`.
/// - Every valid bit index satisfies `0 <= i < TOTAL_BITS`.
///
/// ## Example
/// ```
/// use archetype_mask::FixedBitSet;
///
/// let movers = FixedBitSet::from_bits([0, 1])?;
/// let archetype = FixedBitSet::from_bits([0, 1, 7])?;
/// assert!(archetype.is_superset_of(&movers));
/// assert!(archetype.test(7)?);
/// # Ok::<(), archetype_mask::MaskError>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FixedBitSet {
    words: [Word; WORD_COUNT],
}

impl FixedBitSet {
    /// The empty set.
    pub const NONE: Self = Self::empty();

    /// Creates a set with no bits set.
    #[inline]
    pub const fn empty() -> Self {
        Self { words: [0; WORD_COUNT] }
    }

    /// Creates a set directly from its backing words.
    #[inline]
    pub const fn from_words(words: [Word; WORD_COUNT]) -> Self {
        Self { words }
    }

    /// Builds a set containing every index yielded by `indices`.
    ///
    /// Duplicates are harmless. Construction is all-or-nothing: the set is
    /// assembled privately and only returned once every index has passed the
    /// range check, so a failing index never leaks a partially built value.
    ///
    /// ## Errors
    /// Returns [`MaskError::IndexOutOfRange`] for the first index outside
    /// `[0, TOTAL_BITS)`.
    pub fn from_bits<I>(indices: I) -> MaskResult<Self>
    where
        I: IntoIterator,
        I::Item: BitIndex,
    {
        let mut signature = Self::empty();
        for index in indices {
            signature.set(index)?;
        }
        Ok(signature)
    }

    /// Returns the backing words in index order.
    #[inline]
    pub const fn words(&self) -> &[Word; WORD_COUNT] {
        &self.words
    }

    /// Number of addressable bits.
    #[inline]
    pub const fn capacity() -> usize {
        TOTAL_BITS
    }

    #[inline]
    fn word(&self, word_index: usize) -> MaskResult<Word> {
        self.words
            .get(word_index)
            .copied()
            .ok_or_else(|| invalid_word(word_index))
    }

    #[inline]
    fn word_mut(&mut self, word_index: usize) -> MaskResult<&mut Word> {
        self.words
            .get_mut(word_index)
            .ok_or_else(|| invalid_word(word_index))
    }

    /// Returns `true` if the bit at `index` is set.
    ///
    /// ## Errors
    /// Returns [`MaskError::IndexOutOfRange`] if `index` is outside the capacity.
    #[inline]
    pub fn test<I: BitIndex>(&self, index: I) -> MaskResult<bool> {
        let (word_index, mask) = locate(index.to_bit_index()?);
        Ok(self.word(word_index)? & mask != 0)
    }

    /// Sets the bit at `index`. Setting an already set bit is a no-op.
    ///
    /// ## Errors
    /// Returns [`MaskError::IndexOutOfRange`] without modifying the set.
    #[inline]
    pub fn set<I: BitIndex>(&mut self, index: I) -> MaskResult<()> {
        let (word_index, mask) = locate(index.to_bit_index()?);
        *self.word_mut(word_index)? |= mask;
        Ok(())
    }

    /// Clears the bit at `index`. Clearing an unset bit is a no-op.
    ///
    /// ## Errors
    /// Returns [`MaskError::IndexOutOfRange`] without modifying the set.
    #[inline]
    pub fn clear<I: BitIndex>(&mut self, index: I) -> MaskResult<()> {
        let (word_index, mask) = locate(index.to_bit_index()?);
        *self.word_mut(word_index)? &= !mask;
        Ok(())
    }

    /// Returns a copy of this set with the bit at `index` set.
    #[inline]
    pub fn with<I: BitIndex>(mut self, index: I) -> MaskResult<Self> {
        self.set(index)?;
        Ok(self)
    }

    /// Returns a copy of this set with the bit at `index` cleared.
    #[inline]
    pub fn without<I: BitIndex>(mut self, index: I) -> MaskResult<Self> {
        self.clear(index)?;
        Ok(self)
    }

    /// Returns `true` if every bit set in `other` is also set in `self`.
    ///
    /// Stops at the first word that fails.
    #[inline]
    pub fn is_superset_of(&self, other: &FixedBitSet) -> bool {
        for (mine, theirs) in self.words.iter().zip(other.words.iter()) {
            if (mine & theirs) != *theirs { return false; }
        }
        true
    }

    /// Returns `true` if no bit is set in both `self` and `other`.
    ///
    /// Stops at the first word that overlaps.
    #[inline]
    pub fn is_disjoint_from(&self, other: &FixedBitSet) -> bool {
        for (mine, theirs) in self.words.iter().zip(other.words.iter()) {
            if (mine & theirs) != 0 { return false; }
        }
        true
    }

    /// Number of set bits.
    #[inline]
    pub fn count(&self) -> usize {
        self.words.iter().map(|word| word.count_ones() as usize).sum()
    }

    /// Returns `true` when no bit is set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&word| word == 0)
    }

    /// Iterates over set bit indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.words
            .iter()
            .enumerate()
            .flat_map(|(word_index, &word)| {
                let base = word_index * BITS_PER_WORD;
                let mut bits = word;
                std::iter::from_fn(move || {
                    if bits == 0 {
                        return None;
                    }
                    let tz = bits.trailing_zeros() as usize;
                    bits &= bits - 1;
                    Some(base + tz)
                })
            })
    }
}

#[cold]
fn invalid_word(word_index: usize) -> MaskError {
    InvalidWordIndexError { word_index, word_count: WORD_COUNT }.into()
}

impl<I: BitIndex> Index<I> for FixedBitSet {
    type Output = bool;

    /// Positional read, equivalent to [`FixedBitSet::test`].
    ///
    /// ## Panics
    /// Panics if `index` is outside `[0, TOTAL_BITS)`.
    #[inline]
    fn index(&self, index: I) -> &bool {
        match self.test(index) {
            Ok(true) => &true,
            Ok(false) => &false,
            Err(e) => panic!("{e}"),
        }
    }
}

impl BitAnd for FixedBitSet {
    type Output = FixedBitSet;

    #[inline]
    fn bitand(mut self, rhs: FixedBitSet) -> FixedBitSet {
        self &= rhs;
        self
    }
}

impl BitOr for FixedBitSet {
    type Output = FixedBitSet;

    #[inline]
    fn bitor(mut self, rhs: FixedBitSet) -> FixedBitSet {
        self |= rhs;
        self
    }
}

impl Not for FixedBitSet {
    type Output = FixedBitSet;

    #[inline]
    fn not(mut self) -> FixedBitSet {
        for word in self.words.iter_mut() { *word = !*word; }
        self
    }
}

impl BitAndAssign for FixedBitSet {
    #[inline]
    fn bitand_assign(&mut self, rhs: FixedBitSet) {
        for (mine, theirs) in self.words.iter_mut().zip(rhs.words.iter()) { *mine &= theirs; }
    }
}

impl BitOrAssign for FixedBitSet {
    #[inline]
    fn bitor_assign(&mut self, rhs: FixedBitSet) {
        for (mine, theirs) in self.words.iter_mut().zip(rhs.words.iter()) { *mine |= theirs; }
    }
}

/// Renders `TOTAL_BITS` characters of `0`/`1`: each word most significant
/// bit first, words in index order.
impl fmt::Display for FixedBitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in &self.words {
            write!(f, "{:0width$b}", word, width = BITS_PER_WORD)?;
        }
        Ok(())
    }
}

impl fmt::Debug for FixedBitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FixedBitSet ")?;
        f.debug_set().entries(self.iter()).finish()
    }
}
