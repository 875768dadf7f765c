//! # Engine Module
//!
//! Signature primitives and the structures built on them:
//! - Layout constants and index conversion
//! - The fixed-capacity bit set
//! - Query filters and access sets
//! - Archetype interning
//! - View source binding
//!
//! Public API exposure is controlled by `lib.rs`.

pub mod types;
pub mod error;
pub mod bitset;
pub mod query;
pub mod archetype;
pub mod view;
