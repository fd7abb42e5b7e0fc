use std::fmt;
use std::iter::FromIterator;
use std::ops::{Index, IndexMut};
use std::slice::{Iter, IterMut};

use num_traits::Zero;

use crate::error::{Result, VctrError};
use crate::math::cursor::{Cursor, CursorMut};

/// A fixed-length mathematical vector that exclusively owns its elements.
///
/// `Clone` produces an independent buffer with equal contents. Moving out with
/// [`Vector::take`] leaves the source as an empty vector, indistinguishable from
/// `Vector::default()`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Vector<T> {
    data: Vec<T>,
}

/// Build a [`Vector`] from a literal element list or an `elem; n` pair.
///
/// ```
/// use vctr::vector;
///
/// let v = vector![1, 2, 3];
/// assert_eq!(v.dimensions(), 3);
/// let w = vector![0.5; 4];
/// assert_eq!(w.dimensions(), 4);
/// ```
#[macro_export]
macro_rules! vector {
    () => {
        $crate::math::Vector::from_vec(::std::vec::Vec::new())
    };
    ($elem:expr; $n:expr) => {
        $crate::math::Vector::from_elem($n, $elem)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::math::Vector::from_vec(::std::vec![$($x),+])
    };
}

impl<T> Vector<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn from_vec(data: Vec<T>) -> Self {
        Self::new(data)
    }

    /// Number of elements. Fixed for the lifetime of the buffer.
    pub fn dimensions(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bounds-checked shared access.
    pub fn get(&self, index: usize) -> Result<&T> {
        let dimensions = self.dimensions();
        self.data
            .get(index)
            .ok_or_else(|| VctrError::out_of_bounds(index, dimensions))
    }

    /// Bounds-checked mutable access.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let dimensions = self.dimensions();
        self.data
            .get_mut(index)
            .ok_or_else(|| VctrError::out_of_bounds(index, dimensions))
    }

    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Move the buffer out, leaving `self` with zero dimensions.
    pub fn take(&mut self) -> Vector<T> {
        Vector {
            data: std::mem::take(&mut self.data),
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Cursor positioned at the first element.
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(&self.data, 0)
    }

    /// Cursor positioned one past the last element.
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(&self.data, self.data.len() as isize)
    }

    /// Writable cursor positioned at the first element.
    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(&mut self.data, 0)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn mapv<U, F>(&self, mut f: F) -> Vector<U>
    where
        F: FnMut(&T) -> U,
    {
        Vector::from_vec(self.data.iter().map(|v| f(v)).collect())
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }
}

impl<T> Vector<T>
where
    T: Clone,
{
    pub fn from_elem(dimensions: usize, value: T) -> Self {
        Vector::from_vec(vec![value; dimensions])
    }
}

impl<T> Vector<T>
where
    T: Clone + Zero,
{
    pub fn zeros(dimensions: usize) -> Self {
        Vector::from_vec(vec![T::zero(); dimensions])
    }

    /// Vector of the given size. Elements start at zero rather than unspecified.
    pub fn with_dimensions(dimensions: usize) -> Self {
        Self::zeros(dimensions)
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Vector { data: Vec::new() }
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(value: Vec<T>) -> Self {
        Vector::from_vec(value)
    }
}

impl<T: Clone> From<&[T]> for Vector<T> {
    fn from(value: &[T]) -> Self {
        Vector::from_vec(value.to_vec())
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    fn from(value: Vector<T>) -> Self {
        value.data
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Vector::from_vec(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.data.iter().enumerate() {
            write!(f, "{}", value)?;
            if idx + 1 != self.data.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}
