//! Signature filters and access declarations.
//!
//! This module turns [`FixedBitSet`] values into the two questions an
//! archetype scheduler asks every tick:
//!
//! * **Does this archetype match?** A [`MaskFilter`] holds a required
//!   (`with`) and an excluded (`without`) signature. A candidate matches when
//!   it is a superset of `with` and disjoint from `without`.
//! * **May these two systems run together?** [`AccessSets`] records which
//!   components a system reads and writes, and reports conflicts.
//!
//! ## Bulk matching
//! [`MaskFilter::matching_indices`] scans a slice of candidate signatures.
//! With the `parallel` feature (default) the scan is split across the rayon
//! pool; each worker reads its own copies, so no synchronization is needed.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::trace_span;

use crate::engine::bitset::FixedBitSet;
use crate::engine::error::MaskResult;
use crate::engine::types::BitIndex;

/// Required/excluded component filter.
///
/// ## Example
/// ```
/// use archetype_mask::{FixedBitSet, MaskFilter};
///
/// let filter = MaskFilter::new().require(0)?.require(1)?.exclude(9)?;
/// assert!(filter.matches(&FixedBitSet::from_bits([0, 1, 2])?));
/// assert!(!filter.matches(&FixedBitSet::from_bits([0, 1, 9])?));
/// # Ok::<(), archetype_mask::MaskError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MaskFilter {
    /// Components that must be present.
    pub with: FixedBitSet,

    /// Components that must be absent.
    pub without: FixedBitSet,
}

impl MaskFilter {
    /// Creates a filter that matches every signature.
    #[inline]
    pub const fn new() -> Self {
        Self { with: FixedBitSet::empty(), without: FixedBitSet::empty() }
    }

    /// Creates a filter from explicit required and excluded signatures.
    #[inline]
    pub const fn from_parts(with: FixedBitSet, without: FixedBitSet) -> Self {
        Self { with, without }
    }

    /// Adds a required component.
    pub fn require<I: BitIndex>(mut self, index: I) -> MaskResult<Self> {
        self.with.set(index)?;
        Ok(self)
    }

    /// Adds an excluded component.
    pub fn exclude<I: BitIndex>(mut self, index: I) -> MaskResult<Self> {
        self.without.set(index)?;
        Ok(self)
    }

    /// Returns `true` if no signature can ever match, i.e. some component is
    /// both required and excluded.
    #[inline]
    pub fn is_unsatisfiable(&self) -> bool {
        !self.with.is_disjoint_from(&self.without)
    }

    /// Returns `true` if `signature` contains every required component and
    /// none of the excluded ones.
    #[inline]
    pub fn matches(&self, signature: &FixedBitSet) -> bool {
        signature.is_superset_of(&self.with) && signature.is_disjoint_from(&self.without)
    }

    /// Returns the positions of all matching candidates, in ascending order.
    pub fn matching_indices(&self, candidates: &[FixedBitSet]) -> Vec<usize> {
        let _span = trace_span!("MaskFilter::matching_indices", candidates = candidates.len()).entered();

        if self.is_unsatisfiable() {
            return Vec::new();
        }

        #[cfg(feature = "parallel")]
        let matched: Vec<usize> = candidates
            .par_iter()
            .enumerate()
            .filter(|(_, signature)| self.matches(signature))
            .map(|(position, _)| position)
            .collect();

        #[cfg(not(feature = "parallel"))]
        let matched: Vec<usize> = candidates
            .iter()
            .enumerate()
            .filter(|(_, signature)| self.matches(signature))
            .map(|(position, _)| position)
            .collect();

        matched
    }
}

/// Declares the component access set of a system.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccessSets {
    /// Components read by the system.
    pub read: FixedBitSet,
    /// Components written by the system.
    pub write: FixedBitSet,
}

impl AccessSets {
    /// Returns `true` if this access set conflicts with another.
    #[inline]
    pub fn conflicts_with(&self, other: &AccessSets) -> bool {
        // Conflicts if: (W ∩ W) or (W ∩ R) or (R ∩ W)
        !self.write.is_disjoint_from(&other.write)
            || !self.write.is_disjoint_from(&other.read)
            || !self.read.is_disjoint_from(&other.write)
    }

    /// Every component touched by the system.
    #[inline]
    pub fn touched(&self) -> FixedBitSet {
        self.read | self.write
    }

    /// The filter an archetype must satisfy to serve this system.
    #[inline]
    pub fn as_filter(&self) -> MaskFilter {
        MaskFilter::from_parts(self.touched(), FixedBitSet::empty())
    }
}
