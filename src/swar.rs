//! Branch-free SWAR population counts.
//!
//! Every function here is a fixed sequence of mask, shift, add and multiply
//! operations: no loops, no early exits, same cost for every input.
//!
//! The `_max15` variants skip the byte-lane fold and sum nibble lanes
//! directly, which is only exact when the true count fits in a nibble.

use crate::Bitboard;

const M1_64: u64 = 0x5555_5555_5555_5555;
const M2_64: u64 = 0x3333_3333_3333_3333;
const M4_64: u64 = 0x0F0F_0F0F_0F0F_0F0F;
const H01_64: u64 = 0x0101_0101_0101_0101;
const H1_64: u64 = 0x1111_1111_1111_1111;

const M1_32: u32 = 0x5555_5555;
const M2_32: u32 = 0x3333_3333;
const M4_32: u32 = 0x0F0F_0F0F;
const H01_32: u32 = 0x0101_0101;
const H1_32: u32 = 0x1111_1111;

/// Exact population count using 64-bit lanes.
#[inline]
pub const fn count64(b: Bitboard) -> u32 {
    let mut b = b;
    b -= (b >> 1) & M1_64; // 0-2 in 2 bits
    b = ((b >> 2) & M2_64) + (b & M2_64); // 0-4 in 4 bits
    b = ((b >> 4) + b) & M4_64; // 0-8 in 8 bits
    (b.wrapping_mul(H01_64) >> 56) as u32
}

/// Population count using 64-bit lanes, exact only when `b` has at most 15
/// bits set. Larger counts wrap silently.
#[inline]
pub const fn count64_max15(b: Bitboard) -> u32 {
    let mut b = b;
    b -= (b >> 1) & M1_64;
    b = ((b >> 2) & M2_64) + (b & M2_64);
    (b.wrapping_mul(H1_64) >> 60) as u32
}

/// Exact population count for targets where native arithmetic is 32 bits
/// wide. Each half of the bitboard is folded separately and the byte lanes
/// are merged before the final multiply.
#[inline]
pub const fn count32(b: Bitboard) -> u32 {
    let mut w = (b >> 32) as u32;
    let mut v = b as u32;
    v -= (v >> 1) & M1_32;
    w -= (w >> 1) & M1_32;
    v = ((v >> 2) & M2_32) + (v & M2_32);
    w = ((w >> 2) & M2_32) + (w & M2_32);
    v = ((v >> 4) + v) & M4_32;
    v += ((w >> 4) + w) & M4_32; // 0-16 in 8 bits
    v.wrapping_mul(H01_32) >> 24
}

/// 32-bit counterpart of [`count64_max15`]. Same precondition.
#[inline]
pub const fn count32_max15(b: Bitboard) -> u32 {
    let mut w = (b >> 32) as u32;
    let mut v = b as u32;
    v -= (v >> 1) & M1_32;
    w -= (w >> 1) & M1_32;
    v = ((v >> 2) & M2_32) + (v & M2_32);
    w = ((w >> 2) & M2_32) + (w & M2_32);
    v += w; // 0-8 in 4 bits
    v.wrapping_mul(H1_32) >> 28
}
