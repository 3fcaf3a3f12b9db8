use thiserror::Error;

/// Error type for `DynamicArray` operations.
///
/// A failing operation leaves the array exactly as it was.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum ArrayError {
    /// Construction requested a capacity of zero or less.
    #[error("Capacity must be at least 1, but was {requested}")]
    InvalidCapacity { requested: isize },

    /// Read or insert addressed an index outside the live range.
    #[error("Index out of range: {index} (count is {count})")]
    IndexOutOfRange { index: isize, count: usize },

    /// Remove was asked for a value that is not stored in the array.
    #[error("Element not in array")]
    ElementNotFound,
}
