//! Content digest
//!
//! A 64-bit polynomial rolling hash (multiply by 33 and add each byte, seeded and mixed
//! with the input length). It is deterministic and stable across platforms, but it is
//! not collision resistant: equal digests are treated as equal content.

use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::artifacts::objects::object_id::ObjectId;

const SEED: u64 = 5831;
const MULTIPLIER: u64 = 33;
const LENGTH_FACTOR: u64 = 7919;

/// Raw 64-bit hash of the given bytes
pub fn hash(data: &[u8]) -> u64 {
    let hash = data.iter().fold(SEED, |hash, &byte| {
        hash.wrapping_mul(MULTIPLIER).wrapping_add(u64::from(byte))
    });

    hash.wrapping_add((data.len() as u64).wrapping_mul(LENGTH_FACTOR))
}

/// Digest of the given bytes rendered as a fixed-width lowercase hex identifier
pub fn digest(data: &[u8]) -> ObjectId {
    ObjectId::from_hash(hash(data))
}

pub(crate) fn render(hash: u64) -> String {
    format!("{hash:0width$x}", width = OBJECT_ID_LENGTH)
}
