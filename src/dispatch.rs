//! Routing between the hardware instruction and the software counters.
//!
//! The free functions [`count`] and [`count_bounded`] resolve their path at
//! build time when they can: `no-intrinsic` compiles only software, and a
//! build with the instruction enabled for the target compiles only the
//! hardware call. Otherwise the cached result of [`cpu::has_popcnt`] picks
//! the path, so detection runs once per process and never per call.
//!
//! [`Counter`] is the explicit alternative: a strategy chosen once from a
//! [`Capability`] and held by the caller.

use std::fmt;

use crate::cpu::{self, Capability, HostCpu};
use crate::intrinsic;
use crate::software::{self, Software};
use crate::Bitboard;

const BUILD_INTRINSIC: bool = cfg!(all(
    not(feature = "no-intrinsic"),
    any(
        all(any(target_arch = "x86_64", target_arch = "x86"), target_feature = "popcnt"),
        all(target_arch = "aarch64", target_feature = "neon"),
    )
));

const BUILD_SOFTWARE: bool = cfg!(feature = "no-intrinsic");

/// Which implementation backs a count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    Intrinsic,
    Software(Software),
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Intrinsic => "intrinsic",
            Strategy::Software(algo) => algo.name(),
        }
    }

    pub fn is_intrinsic(&self) -> bool {
        matches!(self, Strategy::Intrinsic)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Only ever installed in a `Counter` after a `Capability` vouched for it.
fn intrinsic_count(b: Bitboard) -> u32 {
    unsafe { intrinsic::popcnt(b) }
}

/// A population counter whose implementation was fixed at construction.
#[derive(Clone, Copy, Debug)]
pub struct Counter {
    strategy: Strategy,
    count: fn(Bitboard) -> u32,
    count_bounded: fn(Bitboard) -> u32,
}

impl Counter {
    /// Hardware path if the host supports it, otherwise the build's default
    /// software algorithm.
    pub fn detect() -> Self {
        Self::select(&HostCpu, Software::DEFAULT)
    }

    /// Hardware path if `cap` reports it, otherwise `fallback`.
    pub fn select<C: Capability + ?Sized>(cap: &C, fallback: Software) -> Self {
        if cap.has_popcnt() {
            Counter {
                strategy: Strategy::Intrinsic,
                count: intrinsic_count,
                count_bounded: intrinsic_count,
            }
        } else {
            Self::software(fallback)
        }
    }

    pub fn software(algo: Software) -> Self {
        Counter {
            strategy: Strategy::Software(algo),
            count: algo.count_fn(),
            count_bounded: algo.count_max15_fn(),
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Exact number of set bits in `b`.
    #[inline]
    pub fn count(&self, b: Bitboard) -> u32 {
        (self.count)(b)
    }

    /// Number of set bits in `b`, valid only when that number is at most 15.
    #[inline]
    pub fn count_bounded(&self, b: Bitboard) -> u32 {
        (self.count_bounded)(b)
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::detect()
    }
}

/// Resolved at build time unless the build leaves it to the cached flag.
#[inline]
fn use_intrinsic() -> bool {
    BUILD_INTRINSIC || (!BUILD_SOFTWARE && cpu::has_popcnt())
}

/// The strategy [`count`] and [`count_bounded`] use in this build on this
/// machine.
pub fn active_strategy() -> Strategy {
    if use_intrinsic() {
        Strategy::Intrinsic
    } else {
        Strategy::Software(Software::DEFAULT)
    }
}

/// Exact number of set bits in `b`. Valid for every input.
#[inline]
pub fn count(b: Bitboard) -> u32 {
    if use_intrinsic() {
        // SAFETY: enabled for the build or reported by the processor.
        unsafe { intrinsic::popcnt(b) }
    } else {
        software::count(b)
    }
}

/// Number of set bits in `b`.
///
/// The caller must guarantee `b` has at most 15 bits set. Larger inputs give
/// an unspecified result on the software path and are not detected.
#[inline]
pub fn count_bounded(b: Bitboard) -> u32 {
    if use_intrinsic() {
        // SAFETY: enabled for the build or reported by the processor.
        unsafe { intrinsic::popcnt(b) }
    } else {
        software::count_max15(b)
    }
}
