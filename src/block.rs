//! Block operations for Argon3.
//!
//! This module defines the 1024-byte memory block and the compression
//! function G that the filling loop applies at every position. G is the
//! standard Argon2 primitive: a BLAKE2b-style round with extra 32-bit
//! multiplication for diffusion, applied to rows and then to interleaved
//! column groups of the block.

/// A 1024-byte memory block (128 × 64-bit words).
///
/// Blocks are the atomic unit of the memory matrix. Word 6 doubles as the
/// address counter when a block is used as the input of address-block
/// generation. Each block is zeroed on drop since the matrix is derived
/// from password material.
#[derive(Debug, Clone)]
pub(crate) struct Block(pub(crate) [u64; 128]);

impl Block {
    pub(crate) const ZERO: Self = Self([0u64; 128]);

    pub(crate) fn in_place_xor(&mut self, other: &Block) {
        self.0
            .iter_mut()
            .zip(other.0.iter())
            .for_each(|(a, b)| *a ^= b);
    }

    /// Reinterprets 1024 little-endian bytes as 128 words.
    pub(crate) fn from_bytes(bytes: [u8; 1024]) -> Self {
        let words = std::array::from_fn(|i| {
            let start = i * 8;
            u64::from_le_bytes(bytes[start..start + 8].try_into().unwrap())
        });
        Block(words)
    }

    /// Serializes the block to 1024 little-endian bytes.
    pub(crate) fn to_bytes(&self) -> [u8; 1024] {
        let mut out = [0u8; 1024];
        self.0.iter().enumerate().for_each(|(i, word)| {
            let start = i * 8;
            out[start..start + 8].copy_from_slice(&word.to_le_bytes());
        });
        out
    }

    /// Compression function G.
    ///
    /// Computes G(X, Y) = P(P(X ⊕ Y)) ⊕ X ⊕ Y, where the permutation is
    /// applied first to the 8 rows of 16 consecutive words and then to the
    /// 8 interleaved column groups. The final XOR feeds both inputs forward
    /// into the output.
    ///
    /// This is the Argon2 compression primitive of RFC 9106; the rotation
    /// amounts and index pattern are fixed there and are what the
    /// known-answer vectors pin down.
    pub(crate) fn compress(x: &Self, y: &Self) -> Self {
        let mut r = Block::ZERO;
        for i in 0..128 {
            r.0[i] = x.0[i] ^ y.0[i];
        }

        let mut z = r.clone();

        // First pass: P on 8 groups of 16 consecutive words
        for i in 0..8 {
            let base = 16 * i;
            let mut v: [u64; 16] = z.0[base..base + 16].try_into().unwrap();
            permute_p(&mut v);
            z.0[base..base + 16].copy_from_slice(&v);
        }

        // Second pass: P on 8 groups with interleaved indices
        for i in 0..8 {
            let mut v = [
                z.0[2 * i],
                z.0[2 * i + 1],
                z.0[2 * i + 16],
                z.0[2 * i + 17],
                z.0[2 * i + 32],
                z.0[2 * i + 33],
                z.0[2 * i + 48],
                z.0[2 * i + 49],
                z.0[2 * i + 64],
                z.0[2 * i + 65],
                z.0[2 * i + 80],
                z.0[2 * i + 81],
                z.0[2 * i + 96],
                z.0[2 * i + 97],
                z.0[2 * i + 112],
                z.0[2 * i + 113],
            ];

            permute_p(&mut v);

            z.0[2 * i] = v[0];
            z.0[2 * i + 1] = v[1];
            z.0[2 * i + 16] = v[2];
            z.0[2 * i + 17] = v[3];
            z.0[2 * i + 32] = v[4];
            z.0[2 * i + 33] = v[5];
            z.0[2 * i + 48] = v[6];
            z.0[2 * i + 49] = v[7];
            z.0[2 * i + 64] = v[8];
            z.0[2 * i + 65] = v[9];
            z.0[2 * i + 80] = v[10];
            z.0[2 * i + 81] = v[11];
            z.0[2 * i + 96] = v[12];
            z.0[2 * i + 97] = v[13];
            z.0[2 * i + 112] = v[14];
            z.0[2 * i + 113] = v[15];
        }

        z.in_place_xor(&r);

        z
    }

    /// Advances the address counter in word 6 and produces the next pool of
    /// 128 pseudo-random addressing words.
    ///
    /// In data-independent addressing the randomness source is a separate
    /// counter-driven computation rather than memory content: the pool is
    /// G(0, G(0, self)), where `self` carries the position fields (pass,
    /// lane, slice, total blocks, time, mode) and the counter. The filling
    /// loop consumes one word per position and asks for a fresh pool every
    /// 128 positions.
    pub(crate) fn next_address_block(&mut self) -> Block {
        self.0[6] += 1;
        let tmp = Block::compress(&Block::ZERO, self);
        Block::compress(&Block::ZERO, &tmp)
    }
}

impl Drop for Block {
    fn drop(&mut self) {
        self.0.iter_mut().for_each(|v| *v = 0);
    }
}

/// GB mixing function (Argon2 variant of BLAKE2b's G).
///
/// Unlike the original BLAKE2b G function which adds message words, this
/// variant multiplies the lower 32 bits of its operands:
///
/// ```text
/// a = a + b + 2 × trunc(a) × trunc(b)
/// d = (d ⊕ a) >>> rotation
/// ```
///
/// with rotations of 32, 24, 16, and 63 bits across the four steps.
#[inline(always)]
fn gb(a: u64, b: u64, c: u64, d: u64) -> (u64, u64, u64, u64) {
    let a = a.wrapping_add(b).wrapping_add(
        2u64.wrapping_mul((a as u32) as u64)
            .wrapping_mul((b as u32) as u64),
    );
    let d = (d ^ a).rotate_right(32);

    let c = c.wrapping_add(d).wrapping_add(
        2u64.wrapping_mul((c as u32) as u64)
            .wrapping_mul((d as u32) as u64),
    );
    let b = (b ^ c).rotate_right(24);

    let a = a.wrapping_add(b).wrapping_add(
        2u64.wrapping_mul((a as u32) as u64)
            .wrapping_mul((b as u32) as u64),
    );
    let d = (d ^ a).rotate_right(16);

    let c = c.wrapping_add(d).wrapping_add(
        2u64.wrapping_mul((c as u32) as u64)
            .wrapping_mul((d as u32) as u64),
    );
    let b = (b ^ c).rotate_right(63);

    (a, b, c, d)
}

/// P permutation: one round of the BLAKE2-like mixing.
///
/// Applies GB to a 4×4 matrix of 64-bit words, first along columns, then
/// along diagonals.
#[inline(always)]
fn permute_p(v: &mut [u64; 16]) {
    (v[0], v[4], v[8], v[12]) = gb(v[0], v[4], v[8], v[12]);
    (v[1], v[5], v[9], v[13]) = gb(v[1], v[5], v[9], v[13]);
    (v[2], v[6], v[10], v[14]) = gb(v[2], v[6], v[10], v[14]);
    (v[3], v[7], v[11], v[15]) = gb(v[3], v[7], v[11], v[15]);

    (v[0], v[5], v[10], v[15]) = gb(v[0], v[5], v[10], v[15]);
    (v[1], v[6], v[11], v[12]) = gb(v[1], v[6], v[11], v[12]);
    (v[2], v[7], v[8], v[13]) = gb(v[2], v[7], v[8], v[13]);
    (v[3], v[4], v[9], v[14]) = gb(v[3], v[4], v[9], v[14]);
}
