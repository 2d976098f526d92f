//! Portable counters that never touch a hardware instruction.

use std::fmt;

use crate::swar;
use crate::Bitboard;

/// A software population count algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Software {
    /// Fixed-sequence SWAR on one 64-bit word.
    Swar64,
    /// Fixed-sequence SWAR on two 32-bit halves.
    Swar32,
    /// Clear the lowest set bit until nothing is left.
    Loop,
}

impl Software {
    /// Algorithm compiled in as the software fallback for this build.
    pub const DEFAULT: Software = if cfg!(feature = "bitcount-loop") {
        Software::Loop
    } else if cfg!(any(feature = "bitcount-swar32", target_pointer_width = "32")) {
        Software::Swar32
    } else {
        Software::Swar64
    };

    pub const ALL: [Software; 3] = [Software::Swar64, Software::Swar32, Software::Loop];

    pub fn name(&self) -> &'static str {
        match self {
            Software::Swar64 => "swar64",
            Software::Swar32 => "swar32",
            Software::Loop => "loop",
        }
    }

    /// Exact count, valid for every input.
    #[inline]
    pub fn count(&self, b: Bitboard) -> u32 {
        self.count_fn()(b)
    }

    /// Count valid only when `b` has at most 15 bits set.
    #[inline]
    pub fn count_max15(&self, b: Bitboard) -> u32 {
        self.count_max15_fn()(b)
    }

    pub(crate) fn count_fn(&self) -> fn(Bitboard) -> u32 {
        match self {
            Software::Swar64 => swar::count64,
            Software::Swar32 => swar::count32,
            Software::Loop => count_loop,
        }
    }

    pub(crate) fn count_max15_fn(&self) -> fn(Bitboard) -> u32 {
        match self {
            Software::Swar64 => swar::count64_max15,
            Software::Swar32 => swar::count32_max15,
            Software::Loop => count_loop_max15,
        }
    }
}

impl Default for Software {
    fn default() -> Self {
        Software::DEFAULT
    }
}

impl fmt::Display for Software {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Exact count in time proportional to the number of set bits. Useful where
/// a 64-bit multiply is slow.
#[inline]
pub const fn count_loop(b: Bitboard) -> u32 {
    let mut b = b;
    let mut r = 0;
    while b != 0 {
        b &= b - 1;
        r += 1;
    }
    r
}

/// The loop is always exact, so the bounded form is the same count.
#[inline]
pub const fn count_loop_max15(b: Bitboard) -> u32 {
    count_loop(b)
}

/// Exact count with the build's default software algorithm.
#[inline]
pub fn count(b: Bitboard) -> u32 {
    match Software::DEFAULT {
        Software::Swar64 => swar::count64(b),
        Software::Swar32 => swar::count32(b),
        Software::Loop => count_loop(b),
    }
}

/// Bounded count with the build's default software algorithm.
#[inline]
pub fn count_max15(b: Bitboard) -> u32 {
    match Software::DEFAULT {
        Software::Swar64 => swar::count64_max15(b),
        Software::Swar32 => swar::count32_max15(b),
        Software::Loop => count_loop_max15(b),
    }
}
