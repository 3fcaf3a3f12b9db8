//! Growable array of owned strings.
//!
//! `DynamicArray` copies every element handed to it, doubles its capacity when
//! full, and reports misuse through `ArrayError` instead of panicking.
//!
//! ```
//! use strarray::{ArrayError, DynamicArray};
//!
//! let mut array = DynamicArray::create(1)?;
//! array.insert("STRING1", 0)?;
//! array.append("STRING4");
//! array.insert("STRING2", 0)?;
//! assert_eq!("[STRING2,STRING1,STRING4]", array.to_string());
//!
//! array.remove("STRING2")?;
//! assert_eq!("STRING1", *array.read(0)?);
//! assert_eq!(Err(ArrayError::ElementNotFound), array.remove("STRING2"));
//!
//! array.destroy();
//! # Ok::<(), ArrayError>(())
//! ```

#[macro_use]
mod logging;

mod array;
mod element;
mod error;
mod iter;
mod print;
mod slots;
mod traits;

pub use array::{DynamicArray, DEFAULT_CAPACITY};
pub use element::Element;
pub use error::ArrayError;
pub use iter::Iter;
pub use print::{print, write_to};
pub use traits::CollectArray;
