//! Processor capability detection for the hardware popcount path.

use std::sync::atomic::{AtomicU8, Ordering};

const UNKNOWN: u8 = 0;
const ABSENT: u8 = 1;
const PRESENT: u8 = 2;

/// Cached detection result. Written at most once with a deterministic value,
/// so racing first callers may each detect and store the same thing.
static POPCNT: AtomicU8 = AtomicU8::new(UNKNOWN);

/// Query the executing processor for a hardware population count.
///
/// Never faults: processors that cannot answer the query report `false`.
/// Prefer [`has_popcnt`], which caches the answer.
pub fn detect() -> bool {
    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    {
        is_x86_feature_detected!("popcnt")
    }
    #[cfg(target_arch = "aarch64")]
    {
        std::arch::is_aarch64_feature_detected!("neon")
    }
    #[cfg(not(any(target_arch = "x86_64", target_arch = "x86", target_arch = "aarch64")))]
    {
        false
    }
}

/// Cached form of [`detect`]. The first call performs the query; every later
/// call is a single relaxed load.
#[inline]
pub fn has_popcnt() -> bool {
    match POPCNT.load(Ordering::Relaxed) {
        PRESENT => true,
        ABSENT => false,
        _ => {
            let found = detect();
            POPCNT.store(if found { PRESENT } else { ABSENT }, Ordering::Relaxed);
            found
        }
    }
}

/// Source of the capability answer used when choosing a counter.
///
/// Lets callers and tests pick the software path deterministically without
/// touching the process-wide cache.
///
/// # Safety
///
/// Returning `true` from [`Capability::has_popcnt`] promises that the
/// executing processor supports the instruction behind
/// [`crate::intrinsic::popcnt`]. A false promise is undefined behaviour once
/// a counter built from it is used.
pub unsafe trait Capability {
    fn has_popcnt(&self) -> bool;
}

/// The processor this process runs on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HostCpu;

unsafe impl Capability for HostCpu {
    #[inline]
    fn has_popcnt(&self) -> bool {
        has_popcnt()
    }
}

/// Pretends the instruction is missing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SoftwareOnly;

unsafe impl Capability for SoftwareOnly {
    #[inline]
    fn has_popcnt(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_is_stable() {
        let first = detect();
        for _ in 0..100 {
            assert_eq!(detect(), first);
        }
    }

    #[test]
    fn test_cache_matches_detect() {
        assert_eq!(has_popcnt(), detect());
        assert_ne!(POPCNT.load(Ordering::Relaxed), UNKNOWN);
        for _ in 0..100 {
            assert_eq!(has_popcnt(), detect());
        }
    }

    #[test]
    fn test_cache_from_many_threads() {
        let expected = detect();
        let handles: Vec<_> = (0..8).map(|_| std::thread::spawn(has_popcnt)).collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    }

    #[test]
    fn test_providers() {
        assert_eq!(HostCpu.has_popcnt(), has_popcnt());
        assert!(!SoftwareOnly.has_popcnt());
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "x86", target_arch = "aarch64")))]
    #[test]
    fn test_unsupported_arch_reports_absent() {
        assert!(!detect());
    }
}
