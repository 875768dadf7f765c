//! # Archetype Mask
//!
//! Fixed-capacity component signatures for archetype-based
//! Entity-Component-System (ECS) engines.
//!
//! ## Design Goals
//! - 256-bit packed signatures with O(word-count) relations
//! - Pure value semantics: `Copy`, hashable, usable as map keys
//! - Bound-checked bit addressing reported through `Result`
//! - Parallel bulk matching over candidate signatures
//!
//! ```
//! use archetype_mask::prelude::*;
//!
//! let archetype = FixedBitSet::from_bits([3, 10, 64, 255])?;
//! let filter = MaskFilter::new().require(3)?.exclude(4)?;
//! assert!(filter.matches(&archetype));
//! # Ok::<(), archetype_mask::MaskError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(dead_code)]

pub mod engine;

// ─────────────────────────────────────────────────────────────────────────────
// Re-exports (Public API)
// ─────────────────────────────────────────────────────────────────────────────

pub use engine::bitset::FixedBitSet;

pub use engine::query::{
    MaskFilter,
    AccessSets,
};

pub use engine::archetype::ArchetypeIndex;

pub use engine::view::{
    ViewSource,
    ViewData,
    BoundView,
    Transform,
};

pub use engine::error::{
    MaskResult,
    MaskError,
    IndexOutOfRangeError,
    InvalidWordIndexError,
    ArchetypeResult,
    ArchetypeError,
    CapacityError,
};

pub use engine::types::{
    BitIndex,
    Word,
    ComponentID,
    ArchetypeID,
    BITS_PER_WORD,
    WORD_COUNT,
    TOTAL_BITS,
    MAX_BIT_INDEX,
    ARCHETYPE_CAP,
};

// ─────────────────────────────────────────────────────────────────────────────
// Prelude
// ─────────────────────────────────────────────────────────────────────────────

/// Commonly used signature types.
///
/// Import with:
/// ```rust
/// use archetype_mask::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        FixedBitSet,
        MaskFilter,
        AccessSets,
        ArchetypeIndex,
        BitIndex,
        MaskError,
        MaskResult,
    };
}
