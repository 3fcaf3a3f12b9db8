//! Presentation of a `DynamicArray` as `[e0,e1,...,en]`.
//!
//! Everything here goes through `DynamicArray::iter`; nothing mutates the array.

use std::fmt::{self, Display};
use std::io::{self, Write};

use crate::DynamicArray;

impl Display for DynamicArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, element) in self.iter().enumerate() {
            if i != 0 {
                f.write_str(",")?;
            }
            Display::fmt(element, f)?;
        }
        f.write_str("]")
    }
}

/// Writes the bracketed list followed by a newline.
pub fn write_to<W: Write>(array: &DynamicArray, mut writer: W) -> io::Result<()> {
    writer.write_all(b"[")?;
    for (i, element) in array.iter().enumerate() {
        if i != 0 {
            writer.write_all(b",")?;
        }
        writer.write_all(element.as_bytes())?;
    }
    writer.write_all(b"]\n")
}

/// Prints the array to standard output.
pub fn print(array: &DynamicArray) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_to(array, &mut lock)?;
    lock.flush()
}

#[cfg(test)]
mod print_tests {
    use super::{print, write_to};
    use crate::DynamicArray;

    fn rendered(array: &DynamicArray) -> String {
        let mut out = Vec::new();
        write_to(array, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn empty_array() {
        let array = DynamicArray::create(1).unwrap();
        assert_eq!("[]\n", rendered(&array));
        assert_eq!("[]", array.to_string());
    }

    #[test]
    fn single_element_has_no_comma() {
        let mut array = DynamicArray::create(1).unwrap();
        array.append("one");
        assert_eq!("[one]\n", rendered(&array));
    }

    #[test]
    fn raw_bytes_are_written_unchanged() {
        let mut array = DynamicArray::create(1).unwrap();
        array.append(&[b'a', 0xff][..]);
        let mut out = Vec::new();
        write_to(&array, &mut out).unwrap();
        assert_eq!(&b"[a\xff]\n"[..], &out[..]);
    }

    #[test]
    fn print_to_stdout_leaves_array_unchanged() {
        let mut array = DynamicArray::create(2).unwrap();
        array.extend(&["a", "b"]);
        print(&array).unwrap();
        assert_eq!("[a,b]\n", rendered(&array));
        assert_eq!(2, array.len());
    }

    #[test]
    fn demonstration_sequence() {
        let mut array = DynamicArray::create(1).unwrap();

        array.insert("STRING1", 0).unwrap();
        array.append("STRING4");
        assert_eq!("STRING1", *array.read(0).unwrap());
        array.append("STRING");
        assert_eq!("STRING1", *array.read(0).unwrap());
        assert_eq!("[STRING1,STRING4,STRING]\n", rendered(&array));

        array.insert("STRING2", 0).unwrap();
        array.insert("STRING3", 1).unwrap();
        assert_eq!("[STRING2,STRING3,STRING1,STRING4,STRING]\n", rendered(&array));

        array.remove("STRING3").unwrap();
        assert_eq!("[STRING2,STRING1,STRING4,STRING]\n", rendered(&array));
        assert_eq!("[STRING2,STRING1,STRING4,STRING]", format!("{}", array));
        assert_eq!(8, array.capacity());

        array.destroy();
    }
}
