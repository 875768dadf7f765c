#![allow(dead_code)]

use archetype_mask::{FixedBitSet, TOTAL_BITS};

pub const CANDIDATES_SMALL: usize = 1_000;
pub const CANDIDATES_LARGE: usize = 1_000_000;

/// Deterministic xorshift signatures.
pub fn signatures(count: usize, bits_per_signature: usize) -> Vec<FixedBitSet> {
    let mut state = 0x9E37_79B9_7F4A_7C15u64;
    (0..count)
        .map(|_| {
            let mut signature = FixedBitSet::empty();
            for _ in 0..bits_per_signature {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                let bit = (state % TOTAL_BITS as u64) as usize;
                signature.set(bit).unwrap();
            }
            signature
        })
        .collect()
}
