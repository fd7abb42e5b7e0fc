use std::error::Error;
use std::fmt;

/// Reason carried by `DegenerateOperand` when both dot product operands are empty.
pub const NULL_VECTORS: &str = "cannot dot product null vectors.";

/// Reason carried by `DegenerateOperand` when a vector cannot be normalized.
pub const ZERO_MAGNITUDE: &str = "cannot normalize a zero-magnitude vector.";

/// Errors returned by vector, matrix and solver operations.
///
/// The `Display` text of each variant is fixed so callers can match on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VctrError {
    /// Indexed access at or past `dimensions`.
    OutOfBounds { index: usize, dimensions: usize },
    /// Binary operation on operands of different lengths.
    SizeMismatch { lhs: usize, rhs: usize },
    /// Operation undefined for the given operand(s).
    DegenerateOperand { reason: &'static str },
    /// Entry point exists but has no implementation yet.
    NotImplemented { feature: &'static str },
}

impl VctrError {
    pub(crate) fn out_of_bounds(index: usize, dimensions: usize) -> Self {
        VctrError::OutOfBounds { index, dimensions }
    }

    pub(crate) fn size_mismatch(lhs: usize, rhs: usize) -> Self {
        VctrError::SizeMismatch { lhs, rhs }
    }
}

impl fmt::Display for VctrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VctrError::OutOfBounds { .. } => write!(f, "index out of bounds."),
            VctrError::SizeMismatch { .. } => write!(f, "unequal vector sizes."),
            VctrError::DegenerateOperand { reason } => write!(f, "{}", reason),
            VctrError::NotImplemented { .. } => write!(f, "not yet implemented"),
        }
    }
}

impl Error for VctrError {}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, VctrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_stable() {
        assert_eq!(
            VctrError::out_of_bounds(5, 5).to_string(),
            "index out of bounds."
        );
        assert_eq!(
            VctrError::size_mismatch(3, 4).to_string(),
            "unequal vector sizes."
        );
        assert_eq!(
            VctrError::DegenerateOperand { reason: NULL_VECTORS }.to_string(),
            "cannot dot product null vectors."
        );
        assert_eq!(
            VctrError::NotImplemented { feature: "lu" }.to_string(),
            "not yet implemented"
        );
    }

    #[test]
    fn degenerate_messages_differ_from_size_mismatch() {
        let size = VctrError::size_mismatch(0, 1).to_string();
        assert_ne!(size, NULL_VECTORS);
        assert_ne!(size, ZERO_MAGNITUDE);
    }
}
