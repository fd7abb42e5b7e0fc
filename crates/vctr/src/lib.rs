//! vctr: lightweight dense vectors and matrices.
//!
//! The crate provides an owning, fixed-length `Vector<T>` with bounds-checked
//! access, a random-access cursor, and elementwise/reduction arithmetic that
//! switches to rayon data parallelism for large inputs. A row-major `Matrix<T>`
//! and a placeholder linear-system solver sit on top of it.
//!
//! Thresholds and forced execution paths are controlled through
//! [`config::ExecutionConfig`]. Operations without a `_with` suffix use the
//! default configuration.
pub mod config;
pub mod error;
pub mod math;
pub mod solve;

pub use config::{ExecutionConfig, ExecutionPolicy};
pub use error::{Result, VctrError};
pub use math::{Matrix, Vector};

/// Items intended for glob-import: `use vctr::prelude::*;`
pub mod prelude {
    pub use crate::config::{ExecutionConfig, ExecutionPolicy};
    pub use crate::error::{Result, VctrError};
    pub use crate::math::{
        are_perpendicular, dot_product, dot_product_with, scale, unit_vector, unit_vector_with,
        Cursor, CursorMut, Matrix, Scalar, Vector,
    };
    pub use crate::solve::{solve_combinations, SolveAlgorithm};
    pub use crate::vector;
}
