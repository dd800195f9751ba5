use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Deref, DerefMut};

#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;
use crate::util::result::ResultExtension;

pub(crate) const MIN_CAP: usize = 2;

const GROWTH_FACTOR: usize = 2;

/// A growable contiguous sequence of `i32`s, doubling its capacity whenever it runs out of room.
///
/// The buffer is always fully initialized; values at indices `len..cap` are unused and never
/// observable. Capacity never shrinks.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DynamicArray.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `get` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `replace` | `O(1)` |
/// | `contains` | `O(n)` |
///
/// \* If the DynamicArray is full, `push` copies every element into a buffer of twice the size.
#[derive(Clone)]
pub struct DynamicArray {
    pub(crate) buf: Box<[i32]>,
    pub(crate) len: usize,
}

impl DynamicArray {
    /// Creates a new, empty DynamicArray with the minimum capacity of 2.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::contiguous::DynamicArray;
    /// let arr = DynamicArray::new();
    /// assert_eq!(arr.len(), 0);
    /// assert_eq!(arr.cap(), 2);
    /// ```
    pub fn new() -> DynamicArray {
        DynamicArray::with_cap(MIN_CAP)
    }

    /// Creates a new, empty DynamicArray with capacity exactly equal to `cap`.
    pub fn with_cap(cap: usize) -> DynamicArray {
        DynamicArray {
            buf: vec![0; cap].into_boxed_slice(),
            len: 0,
        }
    }

    /// Returns the number of elements in the DynamicArray.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the DynamicArray contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the DynamicArray can hold before it has to grow.
    pub fn cap(&self) -> usize {
        self.buf.len()
    }

    /// Appends `value` to the end of the DynamicArray, doubling the capacity first if it is full.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::new();
    /// for i in 0..5 {
    ///     arr.push(i);
    /// }
    /// assert_eq!(&*arr, &[0, 1, 2, 3, 4]);
    /// assert_eq!(arr.cap(), 8);
    /// ```
    pub fn push(&mut self, value: i32) {
        if self.len == self.cap() {
            self.grow();
        }
        self.buf[self.len] = value;
        self.len += 1;
    }

    /// Removes the last element and returns it, if there is one.
    pub fn pop(&mut self) -> Option<i32> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            Some(self.buf[self.len])
        }
    }

    /// Inserts `value` at `index`, shifting all following elements one place to the right.
    /// `index` may be equal to the length, in which case this is equivalent to a push.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length of the DynamicArray.
    pub fn insert(&mut self, index: usize, value: i32) {
        self.try_insert(index, value).throw()
    }

    /// Inserts `value` at `index`, returning an [`Err`] rather than panicking if `index` is
    /// greater than the length of the DynamicArray.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::contiguous::DynamicArray;
    /// let mut arr: DynamicArray = [10, 30].into_iter().collect();
    /// arr.try_insert(1, 20).unwrap();
    /// arr.try_insert(3, 40).unwrap();
    /// assert_eq!(&*arr, &[10, 20, 30, 40]);
    /// assert!(arr.try_insert(9, 0).is_err());
    /// ```
    pub fn try_insert(&mut self, index: usize, value: i32) -> Result<(), IndexOutOfBounds> {
        if index > self.len {
            return Err(IndexOutOfBounds { index, len: self.len });
        }

        if self.len == self.cap() {
            self.grow();
        }

        self.buf.copy_within(index..self.len, index + 1);
        self.buf[index] = value;
        self.len += 1;
        Ok(())
    }

    /// Returns the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn get(&self, index: usize) -> i32 {
        self.try_get(index).throw()
    }

    /// Returns the element at `index`, or an [`Err`] if it is out of bounds.
    pub fn try_get(&self, index: usize) -> Result<i32, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(self.buf[index])
    }

    /// Replaces the element at `index` with `new_value`, returning the old value.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn replace(&mut self, index: usize, new_value: i32) -> i32 {
        self.try_replace(index, new_value).throw()
    }

    /// Replaces the element at `index` with `new_value`, returning the old value or an [`Err`] if
    /// `index` is out of bounds.
    pub fn try_replace(&mut self, index: usize, new_value: i32) -> Result<i32, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(std::mem::replace(&mut self.buf[index], new_value))
    }

    /// Removes and returns the element at `index`, shifting all following elements one place to
    /// the left.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> i32 {
        self.try_remove(index).throw()
    }

    /// Removes and returns the element at `index`, or returns an [`Err`] if it is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use classic_collections::collections::contiguous::DynamicArray;
    /// let mut arr: DynamicArray = (1..=4).collect();
    /// assert_eq!(arr.try_remove(1), Ok(2));
    /// assert_eq!(&*arr, &[1, 3, 4]);
    /// assert!(arr.try_remove(3).is_err());
    /// ```
    pub fn try_remove(&mut self, index: usize) -> Result<i32, IndexOutOfBounds> {
        self.check_index(index)?;

        let value = self.buf[index];
        self.buf.copy_within(index + 1..self.len, index);
        self.len -= 1;
        Ok(value)
    }

    pub fn contains(&self, value: i32) -> bool {
        self.iter().any(|i| *i == value)
    }

    /// Reallocates into a buffer of double the capacity, copying every element across.
    pub(crate) fn grow(&mut self) {
        let new_cap = cmp::max(self.cap().saturating_mul(GROWTH_FACTOR), MIN_CAP);
        self.realloc_with_cap(new_cap);
    }

    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) {
        let mut buf = vec![0; new_cap].into_boxed_slice();
        buf[..self.len].copy_from_slice(&self.buf[..self.len]);
        self.buf = buf;
    }

    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index < self.len {
            Ok(())
        } else {
            Err(IndexOutOfBounds { index, len: self.len })
        }
    }
}

impl Extend<i32> for DynamicArray {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl FromIterator<i32> for DynamicArray {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut arr = DynamicArray::with_cap(cmp::max(iter.size_hint().0, MIN_CAP));
        arr.extend(iter);
        arr
    }
}

impl Default for DynamicArray {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for DynamicArray {
    type Target = [i32];

    fn deref(&self) -> &Self::Target {
        &self.buf[..self.len]
    }
}

impl DerefMut for DynamicArray {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.buf[..self.len]
    }
}

impl AsRef<[i32]> for DynamicArray {
    fn as_ref(&self) -> &[i32] {
        self.deref()
    }
}

impl PartialEq for DynamicArray {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl Eq for DynamicArray {}

impl Debug for DynamicArray {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl Display for DynamicArray {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
