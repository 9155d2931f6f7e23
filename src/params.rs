//! Parameter definitions, validation, and memory normalization for Argon3.
//!
//! This module defines the configurable cost parameters and the silent
//! memory adjustment that rounds a requested memory size down to a whole
//! number of slices per lane.

use thiserror::Error;

use crate::memory::SYNC_POINTS;

/// Configuration parameters for the Argon3 variants.
///
/// These parameters control the memory and time cost of the derivation,
/// allowing the security level to be tuned for the target hardware and
/// threat model.
///
/// # Recommended Values
///
/// - argon3i: `time = 3` and as much memory as available.
/// - argon3id: `time = 1` and as much memory as available.
/// - `lanes`: the number of available cores.
/// - `tag_len`: 32 bytes for most applications.
#[derive(Clone, Debug)]
pub struct Argon3Params {
    /// Memory size in KiB, i.e. the number of 1024-byte blocks.
    pub mem_kib: u32,
    /// Number of passes over memory (minimum 1).
    pub time: u32,
    /// Degree of parallelism (number of lanes, minimum 1).
    pub lanes: u32,
    /// Length of the output tag in bytes. Zero is allowed and produces an
    /// empty tag.
    pub tag_len: u32,
    /// Optional secret key for keyed hashing.
    pub secret: Option<Vec<u8>>,
    /// Optional associated data.
    pub associated_data: Option<Vec<u8>>,
}

/// Errors that can occur during parameter validation.
///
/// Memory is never rejected: a request below the minimum is silently raised
/// to `8 × lanes` KiB (see [`Argon3Params::effective_mem_kib`]).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Argon3ParamError {
    /// Time (passes) must be at least 1.
    #[error("number of passes must be at least 1")]
    TooFewPasses,
    /// Lanes must be at least 1.
    #[error("parallelism degree must be at least 1")]
    TooFewLanes,
}

impl Argon3Params {
    pub(crate) fn validate(&self) -> Result<(), Argon3ParamError> {
        if self.time < 1 {
            return Err(Argon3ParamError::TooFewPasses);
        }

        if self.lanes < 1 {
            return Err(Argon3ParamError::TooFewLanes);
        }

        Ok(())
    }

    /// Returns the memory size in KiB the derivation will actually use.
    ///
    /// The requested `mem_kib` is rounded down to a multiple of
    /// `4 × lanes` so each lane splits evenly into 4 slices, and raised to
    /// `8 × lanes` if the result falls below two blocks per slice. Callers
    /// that need exact reproducibility of the cost parameters can query
    /// this instead of re-deriving the rounding.
    pub fn effective_mem_kib(&self) -> u32 {
        let granularity = SYNC_POINTS * self.lanes.max(1);
        let rounded = self.mem_kib / granularity * granularity;
        rounded.max(2 * granularity)
    }
}

impl Default for Argon3Params {
    /// Default parameters: 64 MiB memory, 3 passes, 1 lane, 32-byte tag.
    fn default() -> Self {
        Self {
            mem_kib: 64 * 1024,
            time: 3,
            lanes: 1,
            tag_len: 32,
            secret: None,
            associated_data: None,
        }
    }
}
