//! Population count for 64-bit bitboards.
//!
//! [`count`] and [`count_bounded`] pick the hardware instruction when the
//! processor has one and a branch-free software count otherwise.

pub mod cpu;
pub mod dispatch;
pub mod intrinsic;
pub mod software;
pub mod swar;

#[cfg(test)]
mod test_utils;

pub use dispatch::{active_strategy, count, count_bounded, Counter, Strategy};
pub use software::Software;

/// One bit per board position.
pub type Bitboard = u64;

#[cfg(feature = "python")]
extern crate pyo3;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule(gil_used = false)]
fn bitcount(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use python_bindings::*;
    m.add_function(wrap_pyfunction!(py_count, m)?)?;
    m.add_function(wrap_pyfunction!(py_count_bounded, m)?)?;
    m.add_function(wrap_pyfunction!(py_has_popcnt, m)?)?;
    m.add_function(wrap_pyfunction!(py_active_strategy, m)?)?;
    Ok(())
}

#[cfg(feature = "python")]
mod python_bindings {
    use super::*;

    #[pyfunction(name = "count")]
    pub fn py_count(bitboard: u64) -> u32 {
        crate::count(bitboard)
    }

    /// Only meaningful when `bitboard` has at most 15 bits set.
    #[pyfunction(name = "count_bounded")]
    pub fn py_count_bounded(bitboard: u64) -> u32 {
        crate::count_bounded(bitboard)
    }

    #[pyfunction(name = "has_popcnt")]
    pub fn py_has_popcnt() -> bool {
        crate::cpu::has_popcnt()
    }

    #[pyfunction(name = "active_strategy")]
    pub fn py_active_strategy() -> String {
        crate::active_strategy().to_string()
    }
}
