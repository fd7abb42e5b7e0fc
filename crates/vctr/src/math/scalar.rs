use std::fmt::Debug;

use num_traits::{Num, ToPrimitive};

/// Element type accepted by [`Vector`](super::Vector) and [`Matrix`](super::Matrix).
///
/// Implemented for every primitive integer and float. `Send + Sync` lets the
/// parallel paths share operand slices across rayon workers.
pub trait Scalar: Copy + Send + Sync + PartialEq + Debug + Num + ToPrimitive {
    /// Widen to `f64` for reductions that are always computed in floating point.
    #[inline]
    fn as_f64(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl<T> Scalar for T where T: Copy + Send + Sync + PartialEq + Debug + Num + ToPrimitive {}
