//! # Archetype Index
//!
//! Maps component signatures to dense [`ArchetypeID`]s.
//!
//! ## Purpose
//! Every distinct combination of components an entity can carry is an
//! archetype. The index interns each signature once, assigning IDs in
//! insertion order, so structural changes can look up "the archetype with
//! components X" by value and queries can enumerate matching archetypes.
//!
//! ## Invariants
//! - `signature_map` and `signatures` always agree:
//!   `signature_map[signatures[id]] == id` for every assigned `id`.
//! - IDs are dense: `0..len()`.
//! - At most [`ARCHETYPE_CAP`] archetypes are ever assigned.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::engine::bitset::FixedBitSet;
use crate::engine::error::{ArchetypeResult, CapacityError};
use crate::engine::query::MaskFilter;
use crate::engine::types::{ArchetypeID, BitIndex, ARCHETYPE_CAP};

/// Signature-to-ID interning table.
#[derive(Clone, Debug, Default)]
pub struct ArchetypeIndex {
    /// Signatures indexed by archetype ID.
    signatures: Vec<FixedBitSet>,

    /// Reverse lookup from signature value.
    signature_map: FxHashMap<FixedBitSet, ArchetypeID>,
}

impl ArchetypeIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered archetypes.
    #[inline]
    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    /// Returns `true` if no archetype has been registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    /// Returns the archetype ID for `signature`, if registered.
    #[inline]
    pub fn get(&self, signature: &FixedBitSet) -> Option<ArchetypeID> {
        self.signature_map.get(signature).copied()
    }

    /// Returns the signature of `archetype_id`, if assigned.
    #[inline]
    pub fn signature_of(&self, archetype_id: ArchetypeID) -> Option<&FixedBitSet> {
        self.signatures.get(archetype_id as usize)
    }

    /// Retrieves the archetype matching `signature`, registering it if necessary.
    ///
    /// ## Errors
    /// Returns [`ArchetypeError::Capacity`](crate::ArchetypeError::Capacity)
    /// when every ID has been handed out.
    pub fn get_or_insert(&mut self, signature: FixedBitSet) -> ArchetypeResult<ArchetypeID> {
        if let Some(&id) = self.signature_map.get(&signature) {
            return Ok(id);
        }

        if self.signatures.len() >= ARCHETYPE_CAP {
            return Err(CapacityError {
                archetypes_needed: self.signatures.len() + 1,
                capacity: ARCHETYPE_CAP,
            }
            .into());
        }

        let id = self.signatures.len() as ArchetypeID;
        self.signatures.push(signature);
        self.signature_map.insert(signature, id);
        debug!(archetype_id = id, components = signature.count(), "registered archetype");
        Ok(id)
    }

    /// Builds a signature from `components` and interns it.
    ///
    /// ## Errors
    /// Fails without registering anything if any component index is out of
    /// range, or if the index is full.
    pub fn get_or_insert_components<I>(&mut self, components: I) -> ArchetypeResult<ArchetypeID>
    where
        I: IntoIterator,
        I::Item: BitIndex,
    {
        let signature = FixedBitSet::from_bits(components)?;
        self.get_or_insert(signature)
    }

    /// Returns the archetype reached by adding `component` to `archetype_id`.
    ///
    /// Returns `Ok(None)` if `archetype_id` is not registered.
    pub fn with_component<I: BitIndex>(
        &mut self,
        archetype_id: ArchetypeID,
        component: I,
    ) -> ArchetypeResult<Option<ArchetypeID>> {
        let Some(&signature) = self.signature_of(archetype_id) else { return Ok(None) };
        let destination = signature.with(component)?;
        self.get_or_insert(destination).map(Some)
    }

    /// Returns the archetype reached by removing `component` from `archetype_id`.
    ///
    /// Returns `Ok(None)` if `archetype_id` is not registered.
    pub fn without_component<I: BitIndex>(
        &mut self,
        archetype_id: ArchetypeID,
        component: I,
    ) -> ArchetypeResult<Option<ArchetypeID>> {
        let Some(&signature) = self.signature_of(archetype_id) else { return Ok(None) };
        let destination = signature.without(component)?;
        self.get_or_insert(destination).map(Some)
    }

    /// Iterates over `(id, signature)` pairs in ID order.
    pub fn iter(&self) -> impl Iterator<Item = (ArchetypeID, &FixedBitSet)> + '_ {
        self.signatures
            .iter()
            .enumerate()
            .map(|(id, signature)| (id as ArchetypeID, signature))
    }

    /// Returns the IDs of all archetypes accepted by `filter`, ascending.
    pub fn matching(&self, filter: &MaskFilter) -> Vec<ArchetypeID> {
        filter
            .matching_indices(&self.signatures)
            .into_iter()
            .map(|position| position as ArchetypeID)
            .collect()
    }
}
