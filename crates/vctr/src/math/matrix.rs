use std::fmt;
use std::ops::{Index, IndexMut};

use num_traits::Zero;

use crate::error::{Result, VctrError};
use crate::math::vector::Vector;

/// Row-major matrix owning its elements in a single contiguous buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

/// Length shared by every row, checked before anything is allocated.
fn common_row_len<I>(mut lengths: I) -> Result<usize>
where
    I: Iterator<Item = usize>,
{
    let cols = match lengths.next() {
        Some(cols) => cols,
        None => return Ok(0),
    };
    for len in lengths {
        if len != cols {
            log::debug!("matrix: row of {} elements, expected {}", len, cols);
            return Err(VctrError::size_mismatch(cols, len));
        }
    }
    Ok(cols)
}

impl<T> Matrix<T> {
    /// Build from nested rows. Zero rows gives a 0x0 matrix.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let cols = common_row_len(rows.iter().map(Vec::len))?;
        let nrows = rows.len();
        let mut data = Vec::with_capacity(nrows * cols);
        for row in rows {
            data.extend(row);
        }
        Ok(Self {
            data,
            rows: nrows,
            cols,
        })
    }

    /// Build with one row per vector. All vectors must share a length.
    pub fn from_vectors(rows: &[Vector<T>]) -> Result<Self>
    where
        T: Clone,
    {
        let cols = common_row_len(rows.iter().map(Vector::dimensions))?;
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            data.extend_from_slice(row.as_slice());
        }
        Ok(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows {
            return Err(VctrError::out_of_bounds(row, self.rows));
        }
        if col >= self.cols {
            return Err(VctrError::out_of_bounds(col, self.cols));
        }
        Ok(row * self.cols + col)
    }

    pub fn get(&self, row: usize, col: usize) -> Result<&T> {
        let offset = self.offset(row, col)?;
        Ok(&self.data[offset])
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        let offset = self.offset(row, col)?;
        Ok(&mut self.data[offset])
    }

    pub fn row(&self, row: usize) -> Result<&[T]> {
        if row >= self.rows {
            return Err(VctrError::out_of_bounds(row, self.rows));
        }
        let start = row * self.cols;
        Ok(&self.data[start..start + self.cols])
    }

    pub fn row_vector(&self, row: usize) -> Result<Vector<T>>
    where
        T: Clone,
    {
        self.row(row).map(Vector::from)
    }

    /// Move the elements out, leaving a 0x0 matrix behind.
    pub fn take(&mut self) -> Matrix<T> {
        let taken = Matrix {
            data: std::mem::take(&mut self.data),
            rows: self.rows,
            cols: self.cols,
        };
        self.rows = 0;
        self.cols = 0;
        taken
    }
}

impl<T: Clone> Matrix<T> {
    pub fn from_elem(rows: usize, cols: usize, value: T) -> Self {
        Self {
            data: vec![value; rows * cols],
            rows,
            cols,
        }
    }
}

impl<T: Clone + Zero> Matrix<T> {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::from_elem(rows, cols, T::zero())
    }
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Matrix {
            data: Vec::new(),
            rows: 0,
            cols: 0,
        }
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        match self.get(index.0, index.1) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        match self.get_mut(index.0, index.1) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for row in 0..self.rows {
            if row > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            let start = row * self.cols;
            for (idx, value) in self.data[start..start + self.cols].iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", value)?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ragged_rows_are_rejected() {
        let result = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5]]);
        assert_eq!(result, Err(VctrError::SizeMismatch { lhs: 3, rhs: 2 }));
    }

    #[test]
    fn empty_input_gives_empty_matrix() {
        let m: Matrix<f64> = Matrix::from_rows(Vec::new()).unwrap();
        assert_eq!(m.shape(), (0, 0));
        assert!(m.is_empty());
    }

    #[test]
    fn take_leaves_empty_matrix() {
        let mut m = Matrix::from_elem(2, 3, 1u8);
        let moved = m.take();
        assert_eq!(moved.shape(), (2, 3));
        assert_eq!(m, Matrix::default());
    }

    #[test]
    fn display_nested() {
        let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(m.to_string(), "[[1, 2], [3, 4]]");
    }
}
