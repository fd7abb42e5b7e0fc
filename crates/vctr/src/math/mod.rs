//! Dense numeric containers and the arithmetic defined over them.
//!
//! Provides `Vector` (owning 1D buffer with size-adaptive parallel
//! arithmetic), its random-access `Cursor`, and the row-major `Matrix` that
//! can be assembled from equal-length vectors.
pub mod cursor;
pub mod matrix;
pub mod ops;
pub mod scalar;
pub mod vector;

pub use cursor::{Cursor, CursorMut};
pub use matrix::Matrix;
pub use ops::{
    are_perpendicular, dot_product, dot_product_with, scale, unit_vector, unit_vector_with,
};
pub use scalar::Scalar;
pub use vector::Vector;
