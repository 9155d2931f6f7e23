//! Initialization and finalization for Argon3.
//!
//! This module handles the boundary operations of the derivation: building
//! the 72-byte seed state from all inputs, and folding the filled memory
//! down to the output tag.

use crate::VERSION;
use crate::block::Block;
use crate::core::Mode;
use crate::hash;
use crate::params::Argon3Params;

/// Computes the 72-byte seed state from all Argon3 inputs.
///
/// Bytes 0..64 are the BLAKE3 output over a 24-byte parameter header
/// followed by the length-prefixed password, salt, secret, and associated
/// data:
///
/// ```text
/// H0 = H(lanes || tag_len || mem || time || version || mode
///        || |P| || P || |S| || S || |K| || K || |X| || X)
/// ```
///
/// all fields little-endian u32. A missing secret or associated data
/// hashes as a zero length prefix with no bytes. Bytes 64..72 are left as
/// scratch for the rolling block and lane counters used when seeding the
/// first two blocks of each lane.
///
/// The header carries the memory size as requested, before rounding; the
/// engine itself runs on the rounded size.
pub(crate) fn initial_hash(
    password: &[u8],
    salt: &[u8],
    params: &Argon3Params,
    mode: Mode,
) -> [u8; 72] {
    let mut buf = Vec::with_capacity(24 + 16 + password.len() + salt.len());

    buf.extend_from_slice(&params.lanes.to_le_bytes());
    buf.extend_from_slice(&params.tag_len.to_le_bytes());
    buf.extend_from_slice(&params.mem_kib.to_le_bytes());
    buf.extend_from_slice(&params.time.to_le_bytes());
    buf.extend_from_slice(&VERSION.to_le_bytes());
    buf.extend_from_slice(&(mode as u32).to_le_bytes());

    buf.extend_from_slice(&(password.len() as u32).to_le_bytes());
    buf.extend_from_slice(password);

    buf.extend_from_slice(&(salt.len() as u32).to_le_bytes());
    buf.extend_from_slice(salt);

    if let Some(ref secret) = params.secret {
        buf.extend_from_slice(&(secret.len() as u32).to_le_bytes());
        buf.extend_from_slice(secret);
    } else {
        buf.extend_from_slice(&0u32.to_le_bytes());
    }

    if let Some(ref ad) = params.associated_data {
        buf.extend_from_slice(&(ad.len() as u32).to_le_bytes());
        buf.extend_from_slice(ad);
    } else {
        buf.extend_from_slice(&0u32.to_le_bytes());
    }

    let mut h0 = [0u8; 72];
    hash::xof(&mut h0[..64], &buf);
    h0
}

/// Folds the filled memory into the output tag.
///
/// The last block of every lane is XORed into a single 1024-byte block,
/// which is serialized little-endian and hashed to exactly `tag_len`
/// bytes. A `tag_len` of zero yields an empty tag.
///
/// All lanes contribute to the fold, so no lane's work can be skipped
/// without changing the output.
pub(crate) fn extract_key(memory: &[Block], lanes: u32, lane_len: u32, tag_len: u32) -> Vec<u8> {
    let mut final_block = Block::ZERO;

    for lane in 0..lanes {
        let last_block_idx = ((lane + 1) * lane_len - 1) as usize;
        final_block.in_place_xor(&memory[last_block_idx]);
    }

    let mut key = vec![0u8; tag_len as usize];
    hash::xof(&mut key, &final_block.to_bytes());
    key
}
