//! Direct calls to the hardware population count instruction.

use crate::Bitboard;

/// True when this target has a hardware instruction behind [`popcnt`]. On
/// other targets [`popcnt`] is the default software count.
pub const fn is_native() -> bool {
    cfg!(any(target_arch = "x86_64", target_arch = "x86", target_arch = "aarch64"))
}

/// Count set bits with `POPCNT`.
///
/// # Safety
///
/// The processor must support `popcnt`, see [`crate::cpu::has_popcnt`].
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "popcnt")]
#[inline]
pub unsafe fn popcnt(b: Bitboard) -> u32 {
    std::arch::x86_64::_popcnt64(b as i64) as u32
}

/// Count set bits with two 32-bit `POPCNT`s.
///
/// # Safety
///
/// The processor must support `popcnt`, see [`crate::cpu::has_popcnt`].
#[cfg(target_arch = "x86")]
#[target_feature(enable = "popcnt")]
#[inline]
pub unsafe fn popcnt(b: Bitboard) -> u32 {
    use std::arch::x86::_popcnt32;
    (_popcnt32(b as u32 as i32) + _popcnt32((b >> 32) as u32 as i32)) as u32
}

/// Count set bits with NEON `CNT`.
///
/// # Safety
///
/// The processor must support NEON, see [`crate::cpu::has_popcnt`].
#[cfg(target_arch = "aarch64")]
#[target_feature(enable = "neon")]
#[inline]
pub unsafe fn popcnt(b: Bitboard) -> u32 {
    b.count_ones()
}

/// No instruction on this target; falls back to software.
///
/// # Safety
///
/// Always safe to call here. The signature matches the native targets.
#[cfg(not(any(target_arch = "x86_64", target_arch = "x86", target_arch = "aarch64")))]
#[inline]
pub unsafe fn popcnt(b: Bitboard) -> u32 {
    crate::software::count(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu;
    use crate::swar;
    use crate::test_utils::{patterns, random_samples, reference_count};

    #[test]
    fn test_matches_reference_when_available() {
        if !cpu::has_popcnt() && is_native() {
            return;
        }
        for b in patterns().into_iter().chain(random_samples(17, 2000)) {
            let hw = unsafe { popcnt(b) };
            assert_eq!(hw, reference_count(b), "{:#x}", b);
            assert_eq!(hw, swar::count64(b), "{:#x}", b);
            assert_eq!(hw, swar::count32(b), "{:#x}", b);
        }
    }

    #[test]
    fn test_native_targets() {
        if cfg!(target_arch = "x86_64") {
            assert!(is_native());
        }
    }
}
