//! Entry point for solving linear combinations `a * x = b`.
//!
//! No algorithm is implemented yet; every call fails with `NotImplemented`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{Result, VctrError};

/// Algorithm used by [`solve_combinations`].
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SolveAlgorithm {
    #[default]
    LuDecomposition,
}

impl FromStr for SolveAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lu" | "lu_decomposition" => Ok(SolveAlgorithm::LuDecomposition),
            _ => Err(format!(
                "Unknown solve algorithm: {}. Expected one of: lu, lu_decomposition",
                s
            )),
        }
    }
}

/// Find `x` such that the rows of `a` combined by `x` give `b`.
///
/// `x` is left untouched.
pub fn solve_combinations<T>(
    a: &[Vec<T>],
    b: &[T],
    x: &mut [T],
    algorithm: SolveAlgorithm,
) -> Result<()> {
    log::debug!(
        "solve_combinations: {:?} requested for {} rows, {} rhs, {} unknowns",
        algorithm,
        a.len(),
        b.len(),
        x.len()
    );
    Err(VctrError::NotImplemented {
        feature: "solve_combinations",
    })
}
