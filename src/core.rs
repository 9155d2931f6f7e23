//! The Argon3 derivation engine.
//!
//! The three public entry points only select a [`Mode`] and forward here.
//! The engine validates the cost parameters, builds the seed state, fills
//! the block matrix, and extracts the tag. Given valid parameters the whole
//! computation is pure and deterministic; there is no partial-failure path.

use thiserror::Error;

use crate::block::Block;
use crate::boundary::{extract_key, initial_hash};
use crate::memory::MemoryLayout;
use crate::params::{Argon3ParamError, Argon3Params};

/// Addressing strategy of a derivation.
///
/// The discriminants are wire-visible: the selected mode is hashed into
/// the seed state and written into the address blocks of data-independent
/// segments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// argon3d: randomness comes from memory content already written.
    DataDependent = 0,
    /// argon3i: randomness comes from a counter-driven computation.
    DataIndependent = 1,
    /// argon3id: data-independent during the first half of the first pass,
    /// data-dependent afterwards.
    Hybrid = 2,
}

/// Errors that can occur during an Argon3 derivation.
///
/// Invalid cost parameters are the only failure class; they are rejected
/// before any memory is allocated. A memory request below the minimum is
/// not an error (see [`Argon3Params::effective_mem_kib`]).
#[derive(Debug, Error)]
pub enum Argon3Error {
    /// Invalid cost parameter values.
    #[error("invalid parameters: {0}")]
    InvalidParams(#[from] Argon3ParamError),
}

/// Runs one full derivation in the given mode.
///
/// The memory matrix is owned by this call alone and its blocks zero
/// themselves on drop once the tag has been extracted.
pub(crate) fn derive_key(
    mode: Mode,
    password: &[u8],
    salt: &[u8],
    params: &Argon3Params,
) -> Result<Vec<u8>, Argon3Error> {
    params.validate()?;

    // The seed state hashes the memory size as requested; only the matrix
    // itself uses the rounded value.
    let mut h0 = initial_hash(password, salt, params, mode);

    let layout = MemoryLayout::new(params.effective_mem_kib(), params.lanes);
    let mut memory = vec![Block::ZERO; layout.total_blocks as usize];

    layout.seed_lanes(&mut memory, &mut h0);
    layout.fill(&mut memory, params.time, mode);

    Ok(extract_key(
        &memory,
        layout.lanes,
        layout.lane_len,
        params.tag_len,
    ))
}
