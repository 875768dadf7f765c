//! Core Mask Types, Identifiers, and Bit-Level Layouts
//!
//! This module defines the **fundamental constants, identifiers, and index
//! conversions** shared by every signature-based structure in the crate:
//! the bit-set itself, query filters, access sets, and the archetype index.
//!
//! ## Layout
//!
//! A signature is a fixed array of [`Word`]s:
//!
//! ```text
//! | word 0: bits 0..64 | word 1: bits 64..128 | word 2: bits 128..192 | word 3: bits 192..256 |
//! ```
//!
//! Bit `i` lives in word `i / BITS_PER_WORD` at offset `i % BITS_PER_WORD`.
//! All widths are compile-time constants and validated using static
//! assertions, so the capacity can never drift from the word layout.
//!
//! ## Bit Indices
//!
//! Callers address bits with whatever integer type they already carry
//! (component IDs, raw `usize` offsets, signed indices from external data).
//! The [`BitIndex`] trait normalizes all of them into a checked `usize`,
//! rejecting negative and too-large values with the same error.

use crate::engine::error::{IndexOutOfRangeError, MaskResult};

/// Backing storage unit of a signature.
pub type Word = u64;

/// Number of bits held by a single [`Word`].
pub const BITS_PER_WORD: usize = Word::BITS as usize;

/// Number of words backing a signature.
pub const WORD_COUNT: usize = 4;

/// Total number of addressable bits in a signature.
pub const TOTAL_BITS: usize = WORD_COUNT * BITS_PER_WORD;

/// Largest valid bit index (inclusive).
pub const MAX_BIT_INDEX: usize = TOTAL_BITS - 1;

const _: [(); 1] = [(); (WORD_COUNT > 0) as usize];
const _: [(); 1] = [(); (TOTAL_BITS % BITS_PER_WORD == 0) as usize];
const _: [(); 1] = [(); (BITS_PER_WORD.is_power_of_two()) as usize];

/// Unique identifier for a component type; one bit per component.
pub type ComponentID = u16;

/// Unique identifier for an archetype.
pub type ArchetypeID = u16;

/// Maximum number of distinct archetypes an index can hold.
pub const ARCHETYPE_CAP: usize = ArchetypeID::MAX as usize + 1;

/// Integer types usable as a bit position.
///
/// Conversion is checked: anything outside `[0, TOTAL_BITS)` yields an
/// [`IndexOutOfRangeError`] carrying the original value.
pub trait BitIndex: Copy {
    /// Returns the validated `usize` bit position.
    fn to_bit_index(self) -> MaskResult<usize>;
}

#[inline]
fn checked(index: i128) -> MaskResult<usize> {
    if (0..TOTAL_BITS as i128).contains(&index) {
        Ok(index as usize)
    } else {
        Err(IndexOutOfRangeError { index, max_index: MAX_BIT_INDEX }.into())
    }
}

macro_rules! impl_bit_index {
    ($($ty:ty),* $(,)?) => {
        $(
            impl BitIndex for $ty {
                #[inline]
                fn to_bit_index(self) -> MaskResult<usize> {
                    checked(self as i128)
                }
            }
        )*
    };
}

impl_bit_index!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// Splits a validated bit position into `(word_index, mask)`.
#[inline]
pub(crate) const fn locate(bit: usize) -> (usize, Word) {
    (bit / BITS_PER_WORD, (1 as Word) << (bit % BITS_PER_WORD))
}
