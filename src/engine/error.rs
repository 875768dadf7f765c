//! Error types for signature construction, bit addressing, and archetype
//! indexing.
//!
//! Each failure mode gets its own small, `Copy` error type carrying the
//! offending values, and aggregates ([`MaskError`], [`ArchetypeError`]) wrap
//! them so callers can use `?` across layers.
//!
//! ## Failure model
//! Every error here reports a contract violation at the call site. An index
//! outside the fixed capacity is a caller bug, and an invalid word index is an
//! internal invariant violation. There is no retry or degraded mode; errors
//! are returned, never swallowed or replaced by a default value.
//!
//! ## Typical flow
//! ```ignore
//! fn archetype_for(index: &mut ArchetypeIndex, ids: &[ComponentID]) -> Result<ArchetypeID, ArchetypeError> {
//!     let signature = FixedBitSet::from_bits(ids.iter().copied())?; // MaskError -> ArchetypeError
//!     index.get_or_insert(signature)
//! }
//! ```
//!
//! ## Display vs. Debug
//! * [`fmt::Display`] gives short, single-line messages for logs.
//! * [`fmt::Debug`] (derived) retains full structure for diagnostics.

use std::fmt;

/// Returned when a bit index lies outside `[0, TOTAL_BITS)`.
///
/// ### Fields
/// * `index` — The requested index, widened so negative inputs survive intact.
/// * `max_index` — The largest valid bit index (inclusive).
///
/// ### Example
/// ```ignore
/// if !(0..TOTAL_BITS as i128).contains(&index) {
///     return Err(IndexOutOfRangeError { index, max_index: MAX_BIT_INDEX }.into());
/// }
/// ```

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfRangeError {

    /// Offending bit index as supplied by the caller.
    pub index: i128,

    /// Maximum valid bit index (inclusive).
    pub max_index: usize,
}

impl fmt::Display for IndexOutOfRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "bit index {} out of range (max index {})",
            self.index, self.max_index
        )
    }
}

impl std::error::Error for IndexOutOfRangeError {}

/// Returned when word arithmetic yields a word outside the backing array.
///
/// ## Notes
/// Bit indices are validated before they are split into words, so this is
/// unreachable through the public API. Seeing it means the layout constants
/// and the word array disagree.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidWordIndexError {

    /// Word index that was computed.
    pub word_index: usize,

    /// Number of words in the backing array.
    pub word_count: usize,
}

impl fmt::Display for InvalidWordIndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "nonexistent word {} (signature has {} words)",
            self.word_index, self.word_count
        )
    }
}

impl std::error::Error for InvalidWordIndexError {}

/// Aggregate error for bit-level signature operations.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskError {

    /// A bit index was outside the fixed capacity.
    IndexOutOfRange(IndexOutOfRangeError),

    /// Internal word addressing escaped the backing array.
    InvalidWordIndex(InvalidWordIndexError),
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaskError::IndexOutOfRange(e) => write!(f, "{e}"),
            MaskError::InvalidWordIndex(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for MaskError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MaskError::IndexOutOfRange(e) => Some(e),
            MaskError::InvalidWordIndex(e) => Some(e),
        }
    }
}

impl From<IndexOutOfRangeError> for MaskError {
    fn from(e: IndexOutOfRangeError) -> Self { MaskError::IndexOutOfRange(e) }
}

impl From<InvalidWordIndexError> for MaskError {
    fn from(e: InvalidWordIndexError) -> Self { MaskError::InvalidWordIndex(e) }
}

/// Returned when an archetype index has handed out every available ID.
///
/// ### Fields
/// * `archetypes_needed` — Number of archetypes the insertion would require.
/// * `capacity` — Configured upper bound.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityError {

    /// Total archetypes the operation attempted to hold.
    pub archetypes_needed: usize,

    /// Current capacity limiting the operation.
    pub capacity: usize,
}

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "archetype limit reached ({} needed; capacity {})",
            self.archetypes_needed, self.capacity
        )
    }
}

impl std::error::Error for CapacityError {}

/// High-level error for archetype registration and lookup.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchetypeError {

    /// No archetype IDs remain.
    Capacity(CapacityError),

    /// Building or editing a signature failed.
    Mask(MaskError),
}

impl fmt::Display for ArchetypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArchetypeError::Capacity(e) => write!(f, "{e}"),
            ArchetypeError::Mask(e) => write!(f, "invalid archetype signature: {e}"),
        }
    }
}

impl std::error::Error for ArchetypeError {}

impl From<CapacityError> for ArchetypeError {
    fn from(e: CapacityError) -> Self { ArchetypeError::Capacity(e) }
}

impl From<MaskError> for ArchetypeError {
    fn from(e: MaskError) -> Self { ArchetypeError::Mask(e) }
}

impl From<IndexOutOfRangeError> for ArchetypeError {
    fn from(e: IndexOutOfRangeError) -> Self { ArchetypeError::Mask(e.into()) }
}

/// Result alias for bit-level operations.
pub type MaskResult<T> = Result<T, MaskError>;

/// Result alias for archetype index operations.
pub type ArchetypeResult<T> = Result<T, ArchetypeError>;
