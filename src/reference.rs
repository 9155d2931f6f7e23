//! Reference block selection for the Argon3 filling loop.
//!
//! When filling the block at position (lane, slice, index), the engine
//! mixes the previous block in the lane with one earlier block chosen
//! pseudo-randomly. This module maps the 64-bit randomness value for the
//! position onto the index of that reference block.

use crate::memory::{MemoryLayout, SYNC_POINTS};

/// Computes the absolute index of the reference block for one position.
///
/// The upper 32 bits of `rand` select the reference lane (forced to the
/// current lane during the very first slice, when no other lane has data
/// yet). The candidate window covers the blocks already finalized from
/// this position's point of view:
///
/// - pass 0: everything written so far this pass, i.e. the completed
///   slices, plus the current segment's earlier positions when staying in
///   the current lane;
/// - later passes: the three slices preceding the current one (the window
///   wraps around the lane), again plus the earlier in-segment positions
///   when staying in the current lane.
///
/// The window shrinks by one at the first position of a segment and
/// whenever the reference lane is the current lane, which keeps the block
/// about to be overwritten out of reach. The lower 32 bits of `rand` then
/// pick from the window via [`phi`].
pub(crate) fn reference_index(
    rand: u64,
    layout: &MemoryLayout,
    pass: u32,
    slice: u32,
    lane: u32,
    index: u32,
) -> u32 {
    let segment_len = layout.segment_len;

    let mut ref_lane = ((rand >> 32) % layout.lanes as u64) as u32;
    if pass == 0 && slice == 0 {
        ref_lane = lane;
    }

    let mut window = 3 * segment_len;
    let mut start = ((slice + 1) % SYNC_POINTS) * segment_len;
    if lane == ref_lane {
        window += index;
    }

    if pass == 0 {
        window = slice * segment_len;
        start = 0;
        if slice == 0 || lane == ref_lane {
            window += index;
        }
    }

    if index == 0 || lane == ref_lane {
        window -= 1;
    }

    phi(rand, window as u64, start as u64, ref_lane, layout.lane_len)
}

/// Maps a 32-bit random value into the candidate window.
///
/// The squaring skews the distribution toward the most recently written
/// blocks: x = J1²/2³², position = start + window − 1 − window·x/2³²,
/// taken modulo the lane length.
fn phi(rand: u64, window: u64, start: u64, ref_lane: u32, lane_len: u32) -> u32 {
    let mut p = rand & 0xFFFF_FFFF;
    p = (p * p) >> 32;
    p = (p * window) >> 32;
    ref_lane * lane_len + ((start + window - (p + 1)) % lane_len as u64) as u32
}
