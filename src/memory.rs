//! Memory organization and the pass/slice filling loop for Argon3.
//!
//! Memory is a matrix of 1024-byte blocks laid out lane-major: `lanes`
//! independent rows, each split into 4 slices of `segment_len` blocks. The
//! slices are the synchronization points. Within one slice every lane's
//! segment is filled by its own worker; a join barrier separates
//! consecutive slices so that cross-lane references only ever land on
//! finalized blocks.

use std::thread;

use crate::block::Block;
use crate::core::Mode;
use crate::hash;
use crate::reference::reference_index;

/// Number of slices (synchronization points) per pass.
pub(crate) const SYNC_POINTS: u32 = 4;

/// Words per block; also the number of addressing words one address block
/// yields before a fresh one is needed.
const BLOCK_WORDS: u32 = 128;

/// Memory layout parameters, all in blocks.
#[derive(Debug, Clone)]
pub(crate) struct MemoryLayout {
    pub lanes: u32,
    pub lane_len: u32,
    pub segment_len: u32,
    pub total_blocks: u32,
}

impl MemoryLayout {
    /// Builds the layout from an already-normalized block count, so
    /// `total_blocks` divides evenly into lanes and slices.
    pub(crate) fn new(total_blocks: u32, lanes: u32) -> Self {
        let lane_len = total_blocks / lanes;

        Self {
            lanes,
            lane_len,
            segment_len: lane_len / SYNC_POINTS,
            total_blocks,
        }
    }

    #[inline]
    fn index(&self, lane: u32, index_in_lane: u32) -> usize {
        (lane * self.lane_len + index_in_lane) as usize
    }

    /// Seeds the first two blocks of every lane from the seed state.
    ///
    /// The block index goes into scratch bytes 64..68 and the lane index
    /// into bytes 68..72, then the whole 72-byte state is hashed to 1024
    /// bytes and read as 128 little-endian words.
    pub(crate) fn seed_lanes(&self, memory: &mut [Block], h0: &mut [u8; 72]) {
        let mut bytes = [0u8; 1024];

        for lane in 0..self.lanes {
            h0[68..72].copy_from_slice(&lane.to_le_bytes());

            for block in 0..2u32 {
                h0[64..68].copy_from_slice(&block.to_le_bytes());
                hash::xof(&mut bytes, &h0[..]);
                memory[self.index(lane, block)] = Block::from_bytes(bytes);
            }
        }
    }

    /// Fills all remaining blocks over `time` passes.
    ///
    /// Each pass runs the 4 slices in order. Within a slice one worker is
    /// spawned per lane and the scope join is the barrier: no worker starts
    /// slice k+1 until every worker has finished slice k. The barrier is
    /// required for correctness, not just throughput, since both addressing
    /// modes may reference other lanes' blocks from earlier slices.
    pub(crate) fn fill(&self, memory: &mut [Block], time: u32, mode: Mode) {
        let shared = SharedBlocks::new(memory);

        for pass in 0..time {
            for slice in 0..SYNC_POINTS {
                thread::scope(|scope| {
                    for lane in 0..self.lanes {
                        scope.spawn(move || {
                            self.fill_segment(shared, pass, slice, lane, time, mode);
                        });
                    }
                });
            }
        }
    }

    /// Fills one segment: the blocks of `slice` within `lane`, in order.
    ///
    /// For each position the randomness word comes either from the address
    /// pool (data-independent) or from the first word of the previous block
    /// (data-dependent); the reference block it selects is mixed with the
    /// previous block through G and XORed into the destination. Pass-0
    /// destinations start zeroed, so the XOR writes them outright; later
    /// passes accumulate onto the earlier content.
    fn fill_segment(
        &self,
        shared: SharedBlocks,
        pass: u32,
        slice: u32,
        lane: u32,
        time: u32,
        mode: Mode,
    ) {
        let data_independent = mode == Mode::DataIndependent
            || (mode == Mode::Hybrid && pass == 0 && slice < SYNC_POINTS / 2);

        let mut counters = Block::ZERO;
        let mut addresses = Block::ZERO;

        if data_independent {
            counters.0[0] = pass as u64;
            counters.0[1] = lane as u64;
            counters.0[2] = slice as u64;
            counters.0[3] = self.total_blocks as u64;
            counters.0[4] = time as u64;
            counters.0[5] = mode as u64;
        }

        let mut index = 0u32;
        if pass == 0 && slice == 0 {
            // The first two blocks were seeded directly from the seed state.
            index = 2;
            if data_independent {
                addresses = counters.next_address_block();
            }
        }

        let mut offset = lane * self.lane_len + slice * self.segment_len + index;

        while index < self.segment_len {
            let prev = if index == 0 && slice == 0 {
                // Wrap to the lane's last block, finalized in the previous pass.
                offset + self.lane_len - 1
            } else {
                offset - 1
            };

            let rand = if data_independent {
                if index % BLOCK_WORDS == 0 {
                    addresses = counters.next_address_block();
                }
                addresses.0[(index % BLOCK_WORDS) as usize]
            } else {
                // SAFETY: `prev` is in this worker's own lane and was
                // written before this position, either earlier in this
                // segment or in an already-joined slice.
                unsafe { shared.block(prev) }.0[0]
            };

            let reference = reference_index(rand, self, pass, slice, lane, index);

            // SAFETY: `prev` and `reference` were finalized before this
            // position (same-lane earlier positions, or other lanes'
            // strictly earlier slices; the barrier in `fill` guarantees
            // the latter), and `offset` lies inside this worker's own
            // segment, which no other worker reads or writes during the
            // current slice. The reference window never includes the block
            // being written.
            let compressed =
                unsafe { Block::compress(shared.block(prev), shared.block(reference)) };
            unsafe { shared.block_mut(offset) }.in_place_xor(&compressed);

            index += 1;
            offset += 1;
        }
    }
}

/// Shared view of the block matrix handed to the per-lane workers.
///
/// The matrix is the only shared mutable state in the derivation. Workers
/// partition it by the slice discipline documented on
/// [`MemoryLayout::fill_segment`], which is what makes the concurrent
/// writes race-free without locking.
#[derive(Clone, Copy)]
struct SharedBlocks {
    ptr: *mut Block,
    len: usize,
}

// SAFETY: only handed to scoped per-lane workers whose write regions are
// disjoint within a slice and whose reads target blocks finalized before
// the slice began.
unsafe impl Send for SharedBlocks {}
// SAFETY: see above.
unsafe impl Sync for SharedBlocks {}

impl SharedBlocks {
    fn new(blocks: &mut [Block]) -> Self {
        Self {
            ptr: blocks.as_mut_ptr(),
            len: blocks.len(),
        }
    }

    /// # Safety
    ///
    /// No worker may be writing block `index` concurrently.
    unsafe fn block(&self, index: u32) -> &Block {
        debug_assert!((index as usize) < self.len);
        unsafe { &*self.ptr.add(index as usize) }
    }

    /// # Safety
    ///
    /// The caller must have exclusive access to block `index` for the
    /// duration of the borrow.
    #[allow(clippy::mut_from_ref)]
    unsafe fn block_mut(&self, index: u32) -> &mut Block {
        debug_assert!((index as usize) < self.len);
        unsafe { &mut *self.ptr.add(index as usize) }
    }
}
