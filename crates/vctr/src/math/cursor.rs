//! Random-access cursors over a borrowed vector buffer.
//!
//! A cursor is a position into a slice. It may sit anywhere, including before
//! the first element or past the last one; only dereferencing checks bounds.
//! The borrow ties its lifetime to the owning vector, so the buffer cannot be
//! reallocated or dropped while a cursor is alive.
//!
//! [`Cursor`] reads. [`CursorMut`] (from [`Vector::begin_mut`]) also writes
//! through the element under it.
//!
//! Equality, ordering and distance compare positions only. They are meaningful
//! for cursors taken from the same vector; cursors from different vectors at
//! the same offset compare equal.
//!
//! [`Vector::begin_mut`]: super::Vector::begin_mut

use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[derive(Debug)]
pub struct Cursor<'a, T> {
    data: &'a [T],
    pos: isize,
    // exclusive end of the range still to be yielded by `next_back`
    back: isize,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(data: &'a [T], pos: isize) -> Self {
        Self {
            data,
            pos,
            back: data.len() as isize,
        }
    }

    /// Offset from the start of the buffer.
    pub fn position(&self) -> isize {
        self.pos
    }

    /// Element under the cursor, or `None` when it is outside the buffer.
    pub fn get(&self) -> Option<&'a T> {
        let data: &'a [T] = self.data;
        usize::try_from(self.pos).ok().and_then(|idx| data.get(idx))
    }

    /// Advance by one and return the moved cursor.
    pub fn inc(&mut self) -> &mut Self {
        self.pos += 1;
        self
    }

    /// Step back by one and return the moved cursor.
    pub fn dec(&mut self) -> &mut Self {
        self.pos -= 1;
        self
    }

    /// Advance by one, returning the cursor as it was before.
    pub fn post_inc(&mut self) -> Self {
        let prev = *self;
        self.pos += 1;
        prev
    }

    /// Step back by one, returning the cursor as it was before.
    pub fn post_dec(&mut self) -> Self {
        let prev = *self;
        self.pos -= 1;
        prev
    }

    /// Signed number of elements between `origin` and `self`.
    pub fn distance_from(&self, origin: &Cursor<'a, T>) -> isize {
        debug_assert!(
            std::ptr::eq(self.data.as_ptr(), origin.data.as_ptr()),
            "cursors belong to different vectors"
        );
        self.pos - origin.pos
    }

    fn remaining(&self) -> usize {
        (self.back - self.pos.max(0)).max(0) as usize
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> PartialOrd for Cursor<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Cursor<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.pos.cmp(&other.pos)
    }
}

impl<'a, T> Add<isize> for Cursor<'a, T> {
    type Output = Cursor<'a, T>;

    fn add(mut self, n: isize) -> Self::Output {
        self.pos += n;
        self
    }
}

impl<'a, T> Sub<isize> for Cursor<'a, T> {
    type Output = Cursor<'a, T>;

    fn sub(mut self, n: isize) -> Self::Output {
        self.pos -= n;
        self
    }
}

impl<T> AddAssign<isize> for Cursor<'_, T> {
    fn add_assign(&mut self, n: isize) {
        self.pos += n;
    }
}

impl<T> SubAssign<isize> for Cursor<'_, T> {
    fn sub_assign(&mut self, n: isize) {
        self.pos -= n;
    }
}

impl<'a, T> Sub<Cursor<'a, T>> for Cursor<'a, T> {
    type Output = isize;

    fn sub(self, origin: Cursor<'a, T>) -> isize {
        self.distance_from(&origin)
    }
}

/// Yields the elements from the cursor's position to the end of the buffer.
impl<'a, T> Iterator for Cursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos < 0 {
            self.pos = 0;
        }
        if self.pos >= self.back {
            return None;
        }
        let item = self.get()?;
        self.pos += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl<T> ExactSizeIterator for Cursor<'_, T> {}

impl<'a, T> DoubleEndedIterator for Cursor<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining() == 0 {
            return None;
        }
        self.back -= 1;
        let data: &'a [T] = self.data;
        data.get(self.back as usize)
    }
}

/// Cursor that can write the element under it.
#[derive(Debug)]
pub struct CursorMut<'a, T> {
    data: &'a mut [T],
    pos: isize,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(data: &'a mut [T], pos: isize) -> Self {
        Self { data, pos }
    }

    pub fn position(&self) -> isize {
        self.pos
    }

    pub fn get(&self) -> Option<&T> {
        usize::try_from(self.pos)
            .ok()
            .and_then(|idx| self.data.get(idx))
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        match usize::try_from(self.pos) {
            Ok(idx) => self.data.get_mut(idx),
            Err(_) => None,
        }
    }

    pub fn inc(&mut self) -> &mut Self {
        self.pos += 1;
        self
    }

    pub fn dec(&mut self) -> &mut Self {
        self.pos -= 1;
        self
    }

    /// Read-only cursor at the same position, borrowing from this one.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(&*self.data, self.pos)
    }
}

impl<T> AddAssign<isize> for CursorMut<'_, T> {
    fn add_assign(&mut self, n: isize) {
        self.pos += n;
    }
}

impl<T> SubAssign<isize> for CursorMut<'_, T> {
    fn sub_assign(&mut self, n: isize) {
        self.pos -= n;
    }
}

#[cfg(test)]
mod tests {
    use crate::math::Vector;

    #[test]
    fn begin_end_distance_is_dimensions() {
        let v = crate::vector![9, 3, 4, 1, 4];
        assert_eq!(v.end() - v.begin(), 5);
        let empty: Vector<u8> = Vector::default();
        assert_eq!(empty.end() - empty.begin(), 0);
        assert_eq!(empty.begin(), empty.end());
    }

    #[test]
    fn increment_and_decrement() {
        let v = crate::vector![10, 20, 30];
        let mut c = v.begin();
        assert_eq!(c.get(), Some(&10));
        c.inc();
        assert_eq!(c.get(), Some(&20));
        let before = c.post_inc();
        assert_eq!(before.get(), Some(&20));
        assert_eq!(c.get(), Some(&30));
        c.dec();
        assert_eq!(c.get(), Some(&20));
        let before = c.post_dec();
        assert_eq!(before.get(), Some(&20));
        assert_eq!(c.get(), Some(&10));
    }

    #[test]
    fn offset_arithmetic() {
        let v = crate::vector![1, 2, 3, 4, 5];
        let mut c = v.begin() + 3;
        assert_eq!(c.get(), Some(&4));
        c -= 2;
        assert_eq!(c.get(), Some(&2));
        c += 3;
        assert_eq!(c.get(), Some(&5));
        assert_eq!((v.end() - 1).get(), Some(&5));
        assert_eq!(v.end().get(), None);
        assert_eq!((v.begin() - 1).get(), None);
        assert!(v.begin() < v.end());
    }

    #[test]
    fn iterates_remaining_elements() {
        let v = crate::vector![1, 2, 3, 4];
        let tail: Vec<i32> = (v.begin() + 1).copied().collect();
        assert_eq!(tail, vec![2, 3, 4]);
        assert_eq!(v.begin().len(), 4);
        let reversed: Vec<i32> = v.begin().rev().copied().collect();
        assert_eq!(reversed, vec![4, 3, 2, 1]);
        let sum: i32 = v.begin().sum();
        assert_eq!(sum, 10);
    }

    #[test]
    fn next_back_keeps_position_semantics() {
        let v = crate::vector![1, 2, 3, 4, 5];

        let mut c = v.begin();
        assert_eq!(c.next_back(), Some(&5));
        assert_eq!(c, v.begin());
        assert_eq!(c - v.begin(), 0);
        assert_eq!((c + 3).get(), Some(&4));
        assert_eq!((c + 4).get(), Some(&5));

        let mut c = v.begin() + 1;
        assert_eq!(c.next_back(), Some(&5));
        assert_eq!(c - v.begin(), 1);
        assert_eq!(c.len(), 3);
        assert_eq!(c.next(), Some(&2));
        assert_eq!(c.next_back(), Some(&4));
        assert_eq!(c.next(), Some(&3));
        assert_eq!(c.next(), None);
        assert_eq!(c.next_back(), None);
        assert_eq!(c - v.begin(), 3);
    }

    #[test]
    fn equality_is_by_position() {
        let a: Vector<i32> = Vector::default();
        let b = crate::vector![1, 2];
        assert_eq!(a.begin(), a.end());
        assert_eq!(b.begin() + 2, b.end());
        assert_ne!(b.begin(), b.end());
    }

    #[test]
    fn mutable_cursor_writes_through() {
        let mut v = crate::vector![1, 2, 3];
        {
            let mut c = v.begin_mut();
            c += 1;
            if let Some(x) = c.get_mut() {
                *x = 20;
            }
            c.inc();
            *c.get_mut().unwrap() *= 10;
            assert_eq!(c.as_cursor().get(), Some(&30));
            c += 1;
            assert!(c.get_mut().is_none());
            c -= 4;
            assert!(c.get().is_none());
        }
        assert_eq!(v, crate::vector![1, 20, 30]);
    }
}
