//! Shared helpers for unit tests.

use rand::prelude::*;
use rand::rngs::StdRng;

use crate::Bitboard;

/// Brute-force count by clearing the lowest set bit. Kept independent of
/// every counter under test.
pub fn reference_count(mut b: Bitboard) -> u32 {
    let mut n = 0;
    while b != 0 {
        b &= b - 1;
        n += 1;
    }
    n
}

/// Zero, all ones, every single-bit value and the usual alternating masks.
pub fn patterns() -> Vec<Bitboard> {
    let mut out = vec![
        0,
        u64::MAX,
        0x5555_5555_5555_5555,
        0xAAAA_AAAA_AAAA_AAAA,
        0x3333_3333_3333_3333,
        0xCCCC_CCCC_CCCC_CCCC,
        0x0F0F_0F0F_0F0F_0F0F,
        0xF0F0_F0F0_F0F0_F0F0,
        0x00FF_00FF_00FF_00FF,
        0xFF00_FF00_FF00_FF00,
        0x0000_FFFF_0000_FFFF,
        0xFFFF_0000_FFFF_0000,
        0x0000_0000_FFFF_FFFF,
        0xFFFF_FFFF_0000_0000,
    ];
    out.extend((0..64).map(|i| 1u64 << i));
    out.extend((0..64).map(|i| !(1u64 << i)));
    out
}

pub fn random_samples(seed: u64, n: usize) -> Vec<Bitboard> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.next_u64()).collect()
}

/// Random bitboards whose population is spread evenly over 0..=15.
pub fn bounded_samples(seed: u64, n: usize) -> Vec<Bitboard> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            let target = (i % 16) as u32;
            let mut b = 0u64;
            while reference_count(b) < target {
                b |= 1u64 << (rng.next_u64() % 64);
            }
            b
        })
        .collect()
}

/// Bit-position permutations of `b`: rotations, reversals and a few random
/// shuffles of the 64 positions.
pub fn permutations(b: Bitboard, seed: u64) -> Vec<Bitboard> {
    let mut out = vec![b.reverse_bits(), b.swap_bytes(), b.rotate_left(1), b.rotate_right(29)];

    let mut rng = StdRng::seed_from_u64(seed ^ b);
    for _ in 0..4 {
        let mut order: [u32; 64] = std::array::from_fn(|i| i as u32);
        for i in (1..64).rev() {
            let j = (rng.next_u64() % (i as u64 + 1)) as usize;
            order.swap(i, j);
        }
        let shuffled = order
            .iter()
            .enumerate()
            .filter(|&(from, _)| (b >> from) & 1 != 0)
            .fold(0u64, |acc, (_, &to)| acc | (1u64 << to));
        out.push(shuffled);
    }
    out
}
