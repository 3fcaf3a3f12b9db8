use std::convert::TryFrom;

use crate::{ArrayError, DynamicArray};

/// Implements collect to `DynamicArray`.
pub trait CollectArray: Iterator {
    /// Appends every item to a new array whose starting capacity is the larger of
    /// `capacity` and the iterator's lower size hint.
    ///
    /// Fails with `InvalidCapacity` only when both are zero or less.
    fn collect_array(self, capacity: isize) -> Result<DynamicArray, ArrayError>;
}

impl<Q> CollectArray for Q where Q: Iterator, Q::Item: AsRef<[u8]> {
    fn collect_array(self, capacity: isize) -> Result<DynamicArray, ArrayError> {
        let (lower, _) = self.size_hint();
        let lower = isize::try_from(lower).unwrap_or(isize::MAX);
        let mut array = DynamicArray::create(capacity.max(lower))?;
        array.extend(self);
        Ok(array)
    }
}
