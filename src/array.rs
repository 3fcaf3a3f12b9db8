use crate::slots::Slots;
use crate::{ArrayError, Element, Iter};

/// Starting capacity used by `DynamicArray::default`.
pub const DEFAULT_CAPACITY: usize = 4;

/// Growable array of owned strings.
///
/// The array copies every element it is given and releases it again on `remove`,
/// `destroy` or drop. Capacity doubles whenever an insert finds the storage full,
/// and is never reduced.
///
/// Indices are signed so that negative requests can be reported instead of wrapping.
/// Index `0` is always accepted by validation, even on an empty array, which is
/// what allows inserting the first element at position `0`.
// don't clone
pub struct DynamicArray {
    count: usize,
    storage: Slots,
}

impl DynamicArray {
    /// Allocates an empty array with room for `initial_capacity` elements.
    ///
    /// Fails with `InvalidCapacity` if `initial_capacity` is zero or negative.
    pub fn create(initial_capacity: isize) -> Result<DynamicArray, ArrayError> {
        if initial_capacity <= 0 {
            warn!("create: rejected capacity {}", initial_capacity);
            return Err(ArrayError::InvalidCapacity { requested: initial_capacity });
        }

        debug!("create: capacity {}", initial_capacity);
        Ok(DynamicArray {
            count: 0,
            storage: Slots::empty(initial_capacity as usize),
        })
    }

    /// Releases every stored element and then the storage block.
    ///
    /// Dropping the array does the same; this only makes the end of life explicit.
    pub fn destroy(self) {
        debug!("destroy: {} of {} slots live", self.count, self.capacity());
    }

    /// Number of live elements.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of allocated slots, live or not.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    fn validate_index(&self, index: isize) -> Option<usize> {
        if index == 0 {
            return Some(0);
        }
        if index < 0 || index as usize >= self.count {
            return None;
        }
        Some(index as usize)
    }

    fn out_of_range(&self, index: isize) -> ArrayError {
        ArrayError::IndexOutOfRange { index, count: self.count }
    }

    /// Returns the element at `index`.
    ///
    /// The reference is valid until the array is next mutated. Reading index `0`
    /// of an empty array passes validation but finds no element, and fails like
    /// any other out of range read.
    pub fn read(&self, index: isize) -> Result<&Element, ArrayError> {
        let element = self.validate_index(index)
            .and_then(|i| if i < self.count { self.storage.get(i) } else { None });

        match element {
            Some(element) => Ok(element),
            None => {
                warn!("read: no element at index {} (count {})", index, self.count);
                Err(self.out_of_range(index))
            }
        }
    }

    fn grow(&mut self) {
        let new_capacity = self.capacity() * 2;
        debug!("grow: {} -> {} slots", self.capacity(), new_capacity);
        let next = self.storage.grown(self.count, new_capacity);
        self.storage = next;
    }

    /// Stores a copy of `element` at `index`, moving later elements one slot right.
    ///
    /// Valid positions are the live range, index `0`, and the tail (`index == len()`),
    /// where insert behaves like `append`. Anything else fails with
    /// `IndexOutOfRange` and leaves the array untouched.
    pub fn insert(&mut self, element: impl AsRef<[u8]>, index: isize) -> Result<(), ArrayError> {
        let index = match self.validate_index(index) {
            Some(i) => i,
            None if index >= 0 && index as usize == self.count => self.count,
            None => {
                warn!("insert: index {} out of range (count {})", index, self.count);
                return Err(self.out_of_range(index));
            }
        };

        if self.count == self.capacity() {
            self.grow();
        }

        self.storage.shift_right(index, self.count);
        trace!("insert: shifted {} elements from {}", self.count - index, index);
        self.storage.put(index, Element::copy_from(element.as_ref()));
        self.count += 1;

        Ok(())
    }

    /// Stores a copy of `element` after the last live element.
    pub fn append(&mut self, element: impl AsRef<[u8]>) {
        if self.count == self.capacity() {
            self.grow();
        }

        self.storage.put(self.count, Element::copy_from(element.as_ref()));
        self.count += 1;
    }

    /// Index of the first element equal to `element`, byte for byte.
    pub fn position(&self, element: impl AsRef<[u8]>) -> Option<usize> {
        let needle = element.as_ref();
        self.iter().position(|e| e.as_bytes() == needle)
    }

    pub fn contains(&self, element: impl AsRef<[u8]>) -> bool {
        self.position(element).is_some()
    }

    /// Releases the first element equal to `element` and moves later elements
    /// one slot left.
    ///
    /// Fails with `ElementNotFound`, leaving the array untouched, if there is no match.
    pub fn remove(&mut self, element: impl AsRef<[u8]>) -> Result<(), ArrayError> {
        let found = match self.position(element) {
            Some(found) => found,
            None => {
                warn!("remove: element not in array (count {})", self.count);
                return Err(ArrayError::ElementNotFound);
            }
        };

        std::mem::drop(self.storage.take(found));
        self.storage.shift_left(found, self.count);
        trace!("remove: shifted {} elements into {}", self.count - found - 1, found);
        self.count -= 1;

        Ok(())
    }

    /// Iterates over the live elements in index order.
    ///
    /// Each call starts a fresh pass; the iterator hands out borrows only.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.storage.live(self.count).iter(),
        }
    }
}

impl Default for DynamicArray {
    fn default() -> Self {
        DynamicArray {
            count: 0,
            storage: Slots::empty(DEFAULT_CAPACITY),
        }
    }
}

impl Drop for DynamicArray {
    #[cfg_attr(not(feature = "logging"), allow(unused_variables))]
    fn drop(&mut self) {
        let released = self.storage.release_all();
        trace!("drop: released {} elements from {} slots", released, self.capacity());
        self.count = 0;
    }
}

impl<'a> IntoIterator for &'a DynamicArray {
    type Item = &'a Element;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E> Extend<E> for DynamicArray where E: AsRef<[u8]> {
    fn extend<I: IntoIterator<Item=E>>(&mut self, iter: I) {
        for element in iter {
            self.append(element);
        }
    }
}

impl std::fmt::Debug for DynamicArray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_list();
        for element in self.iter() {
            list.entry(element);
        }
        list.finish()
    }
}
