//! Arithmetic and reductions over [`Vector`].
//!
//! Every operation picks its execution path once per call: a plain sequential
//! pass, or a rayon data-parallel pass when the operand length exceeds the
//! operation's threshold in [`ExecutionConfig`]. The parallel path blocks the
//! caller until all partitions finish.
//!
//! Elementwise results and integer reductions are identical on both paths.
//! Floating-point reductions (`magnitude`, `dot_product` over floats) may
//! differ in their least significant bits, since rayon's accumulation order is
//! unspecified.
//!
//! Integer overflow follows the element type on both paths: plain integers
//! panic in debug builds and wrap in release builds. Use
//! `std::num::Wrapping` elements when wrapping is the intended behaviour.

use std::ops::{Add, Sub};

use num_traits::{Float, NumCast};
use rayon::prelude::*;

use crate::config::ExecutionConfig;
use crate::error::{Result, VctrError, NULL_VECTORS, ZERO_MAGNITUDE};
use crate::math::scalar::Scalar;
use crate::math::vector::Vector;

fn elementwise<T, F>(
    lhs: &Vector<T>,
    rhs: &Vector<T>,
    config: &ExecutionConfig,
    name: &str,
    op: F,
) -> Result<Vector<T>>
where
    T: Scalar,
    F: Fn(T, T) -> T + Send + Sync,
{
    if lhs.dimensions() != rhs.dimensions() {
        log::debug!(
            "{}: rejecting operands of {} and {} elements",
            name,
            lhs.dimensions(),
            rhs.dimensions()
        );
        return Err(VctrError::size_mismatch(lhs.dimensions(), rhs.dimensions()));
    }
    if lhs.is_empty() {
        return Ok(Vector::default());
    }

    let (a, b) = (lhs.as_slice(), rhs.as_slice());
    let data: Vec<T> = if config.use_parallel(config.elementwise_threshold, a.len()) {
        log::trace!("{}: parallel path over {} elements", name, a.len());
        a.par_iter().zip(b.par_iter()).map(|(&x, &y)| op(x, y)).collect()
    } else {
        log::trace!("{}: sequential path over {} elements", name, a.len());
        a.iter().zip(b.iter()).map(|(&x, &y)| op(x, y)).collect()
    };
    Ok(Vector::from_vec(data))
}

impl<T: Scalar> Vector<T> {
    /// Elementwise sum. Fails with `SizeMismatch` before computing anything.
    pub fn add_with(&self, rhs: &Vector<T>, config: &ExecutionConfig) -> Result<Vector<T>> {
        elementwise(self, rhs, config, "add", |x, y| x + y)
    }

    /// Elementwise difference. Fails with `SizeMismatch` before computing anything.
    pub fn sub_with(&self, rhs: &Vector<T>, config: &ExecutionConfig) -> Result<Vector<T>> {
        elementwise(self, rhs, config, "sub", |x, y| x - y)
    }

    /// Euclidean norm, always reduced in `f64`.
    pub fn magnitude(&self) -> f64 {
        self.magnitude_with(&ExecutionConfig::default())
    }

    pub fn magnitude_with(&self, config: &ExecutionConfig) -> f64 {
        let data = self.as_slice();
        let sum_squares: f64 = if config.use_parallel(config.magnitude_threshold, data.len()) {
            log::trace!("magnitude: parallel path over {} elements", data.len());
            data.par_iter()
                .map(|&x| {
                    let v = x.as_f64();
                    v * v
                })
                .sum()
        } else {
            log::trace!("magnitude: sequential path over {} elements", data.len());
            data.iter()
                .map(|&x| {
                    let v = x.as_f64();
                    v * v
                })
                .sum()
        };
        sum_squares.sqrt()
    }

    /// Multiply every element by `scalar` in place.
    pub fn scale(&mut self, scalar: T) {
        self.scale_with(scalar, &ExecutionConfig::default())
    }

    pub fn scale_with(&mut self, scalar: T, config: &ExecutionConfig) {
        let parallel = config.use_parallel(config.scale_threshold, self.dimensions());
        let data = self.as_mut_slice();
        if parallel {
            log::trace!("scale: parallel path over {} elements", data.len());
            data.par_iter_mut().for_each(|x| *x = *x * scalar);
        } else {
            log::trace!("scale: sequential path over {} elements", data.len());
            data.iter_mut().for_each(|x| *x = *x * scalar);
        }
    }
}

impl<'a, 'b, T: Scalar> Add<&'b Vector<T>> for &'a Vector<T> {
    type Output = Result<Vector<T>>;

    fn add(self, rhs: &'b Vector<T>) -> Self::Output {
        self.add_with(rhs, &ExecutionConfig::default())
    }
}

impl<'a, 'b, T: Scalar> Sub<&'b Vector<T>> for &'a Vector<T> {
    type Output = Result<Vector<T>>;

    fn sub(self, rhs: &'b Vector<T>) -> Self::Output {
        self.sub_with(rhs, &ExecutionConfig::default())
    }
}

impl<T: Scalar> Add for Vector<T> {
    type Output = Result<Vector<T>>;

    fn add(self, rhs: Vector<T>) -> Self::Output {
        &self + &rhs
    }
}

impl<T: Scalar> Sub for Vector<T> {
    type Output = Result<Vector<T>>;

    fn sub(self, rhs: Vector<T>) -> Self::Output {
        &self - &rhs
    }
}

/// Sum of pairwise products.
///
/// Fails with `SizeMismatch` for operands of different lengths and with
/// `DegenerateOperand` when both are empty.
pub fn dot_product<T: Scalar>(a: &Vector<T>, b: &Vector<T>) -> Result<T> {
    dot_product_with(a, b, &ExecutionConfig::default())
}

pub fn dot_product_with<T: Scalar>(
    a: &Vector<T>,
    b: &Vector<T>,
    config: &ExecutionConfig,
) -> Result<T> {
    if a.dimensions() != b.dimensions() {
        log::debug!(
            "dot_product: rejecting operands of {} and {} elements",
            a.dimensions(),
            b.dimensions()
        );
        return Err(VctrError::size_mismatch(a.dimensions(), b.dimensions()));
    }
    if a.is_empty() {
        log::debug!("dot_product: both operands are empty");
        return Err(VctrError::DegenerateOperand {
            reason: NULL_VECTORS,
        });
    }

    let (lhs, rhs) = (a.as_slice(), b.as_slice());
    if config.use_parallel(config.dot_product_threshold, lhs.len()) {
        log::trace!("dot_product: parallel path over {} elements", lhs.len());
        Ok(lhs
            .par_iter()
            .zip(rhs.par_iter())
            .map(|(&x, &y)| x * y)
            .reduce(T::zero, |acc, v| acc + v))
    } else {
        log::trace!("dot_product: sequential path over {} elements", lhs.len());
        Ok(lhs
            .iter()
            .zip(rhs.iter())
            .fold(T::zero(), |acc, (&x, &y)| acc + x * y))
    }
}

/// Exact check that the dot product is zero. Errors from [`dot_product`] pass through.
pub fn are_perpendicular<T: Scalar>(a: &Vector<T>, b: &Vector<T>) -> Result<bool> {
    Ok(dot_product(a, b)? == T::zero())
}

/// In-place multiplication of every element by `scalar`.
pub fn scale<T: Scalar>(vector: &mut Vector<T>, scalar: T) {
    vector.scale(scalar)
}

/// Copy of `vector` scaled to magnitude one.
///
/// A vector whose magnitude is zero or not finite (the empty vector included)
/// has no direction and is rejected with `DegenerateOperand`.
pub fn unit_vector<T: Scalar + Float>(vector: &Vector<T>) -> Result<Vector<T>> {
    unit_vector_with(vector, &ExecutionConfig::default())
}

pub fn unit_vector_with<T: Scalar + Float>(
    vector: &Vector<T>,
    config: &ExecutionConfig,
) -> Result<Vector<T>> {
    let degenerate = VctrError::DegenerateOperand {
        reason: ZERO_MAGNITUDE,
    };
    let magnitude = vector.magnitude_with(config);
    if magnitude == 0.0 || !magnitude.is_finite() {
        log::debug!("unit_vector: magnitude {} has no direction", magnitude);
        return Err(degenerate);
    }
    let magnitude = <T as NumCast>::from(magnitude).ok_or(degenerate)?;

    let mut result = vector.clone();
    result.scale_with(T::one() / magnitude, config);
    Ok(result)
}
