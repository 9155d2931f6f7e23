//! The extendable-output hash primitive used throughout Argon3.
//!
//! Argon3 replaces Argon2's BLAKE2b-based variable-length hash H' with the
//! plain BLAKE3 XOF: the input is hashed once and the output stream is read
//! to whatever length the caller needs. No length prefix is mixed into the
//! input; a 64-byte read and a 1024-byte read of the same input share a
//! common prefix by construction of the XOF.

/// Fills `out` with the BLAKE3 extendable output of `in_bytes`.
///
/// Used for the initial hash H0, the first two blocks of each lane, and
/// the final tag extraction.
pub fn xof(out: &mut [u8], in_bytes: &[u8]) {
    let mut hasher = blake3::Hasher::new();
    hasher.update(in_bytes);
    hasher.finalize_xof().fill(out);
}
