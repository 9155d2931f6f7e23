//! Argon3 memory-hard key derivation.
//!
//! Argon3 is a variant of the Argon2 (version 0x13) key derivation function
//! in which every use of the hash primitive is replaced by the BLAKE3
//! extendable-output function. It turns a low-entropy password into a
//! cryptographic key or password hash whose evaluation cost is bound from
//! below by memory usage, resisting GPU and custom-hardware attacks.
//!
//! # Variants
//!
//! - [`argon3d`] uses data-dependent memory addressing. It offers the best
//!   resistance against brute-force attacks but is vulnerable to
//!   side-channel attacks, which makes it a fit for proof-of-work style
//!   puzzles rather than password storage.
//! - [`argon3i`] uses data-independent memory addressing and is the
//!   side-channel resistant variant. It requires more passes over memory
//!   than argon3id to protect from trade-off attacks.
//! - [`argon3id`] is the hybrid: data-independent addressing for the first
//!   half of the first pass, data-dependent addressing for the rest. If you
//!   are not sure which variant you need, use this one.
//!
//! # Algorithm Overview
//!
//! 1. **Initialization**: compute the 72-byte seed H0 = BLAKE3(params ||
//!    password || salt || secret || associated data), each input prefixed
//!    with its length.
//! 2. **Lane seeding**: derive the first two blocks of each lane from H0
//!    and a rolling block/lane counter.
//! 3. **Memory filling**: fill the remaining blocks with the compression
//!    function G over `time` passes, one worker per lane, synchronizing at
//!    each of the 4 slice boundaries.
//! 4. **Finalization**: XOR the last block of every lane together and read
//!    the BLAKE3 XOF of the result to the requested length.
//!
//! # Memory Organization
//!
//! Memory is a matrix of 1024-byte blocks:
//! - **Lanes**: independent rows, one per degree of parallelism.
//! - **Slices**: each lane is divided into 4 slices (sync points).
//! - **Segments**: the blocks of one slice within one lane, filled
//!   sequentially by a single worker.
//!
//! # Choosing Parameters
//!
//! `time` is the number of passes over memory and `mem_kib` the memory cost
//! in KiB; raise whichever your deployment can afford. `lanes` can be set to
//! the number of available cores. Remember to use a good random salt.

pub mod hash;

mod block;
mod boundary;
mod core;
mod memory;
mod params;
mod reference;

pub use crate::core::{Argon3Error, Mode};
pub use crate::params::{Argon3ParamError, Argon3Params};

/// The Argon2 version this crate implements, embedded in the initial hash.
pub const VERSION: u32 = 0x13;

/// Derives a key from the password and salt using data-dependent
/// addressing (argon3d).
///
/// IMPORTANT: argon3d is, under normal circumstances, unsuitable for
/// password hashing. It is useful for puzzles such as proof-of-work
/// challenges, where side channels are not a concern.
pub fn argon3d(
    password: &[u8],
    salt: &[u8],
    params: &Argon3Params,
) -> Result<Vec<u8>, Argon3Error> {
    crate::core::derive_key(Mode::DataDependent, password, salt, params)
}

/// Derives a key from the password and salt using data-independent
/// addressing (argon3i).
///
/// The derived key has length `params.tag_len` and can be used directly as
/// cryptographic key material, e.g. a 32-byte tag for AES-256.
pub fn argon3i(
    password: &[u8],
    salt: &[u8],
    params: &Argon3Params,
) -> Result<Vec<u8>, Argon3Error> {
    crate::core::derive_key(Mode::DataIndependent, password, salt, params)
}

/// Derives a key from the password and salt using the hybrid schedule
/// (argon3id): data-independent addressing for the first half of the first
/// pass, data-dependent addressing for the rest.
///
/// This is the recommended variant for password hashing and password-based
/// key derivation.
pub fn argon3id(
    password: &[u8],
    salt: &[u8],
    params: &Argon3Params,
) -> Result<Vec<u8>, Argon3Error> {
    crate::core::derive_key(Mode::Hybrid, password, salt, params)
}
