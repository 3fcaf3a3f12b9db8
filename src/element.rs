use std::borrow::Cow;
use std::fmt::{Debug, Display};

/// Owned copy of a string-like byte sequence.
///
/// Every `Element` has its own allocation, so the array never refers back to the
/// buffer a caller handed in.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Element {
    bytes: Box<[u8]>,
}

impl Element {
    /// Copies `value` into a fresh allocation.
    pub fn copy_from(value: &[u8]) -> Element {
        Element {
            bytes: value.to_vec().into_boxed_slice(),
        }
    }

    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` for a zero-length element.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The contents as text, replacing invalid UTF-8 sequences.
    pub fn to_str_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }

    /// Returns the contents as `&str` if they are valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.bytes).ok()
    }
}

impl Debug for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.to_str_lossy(), f)
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.to_str_lossy(), f)
    }
}

impl AsRef<[u8]> for Element {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<&str> for Element {
    fn from(value: &str) -> Element {
        Element::copy_from(value.as_bytes())
    }
}

impl From<&[u8]> for Element {
    fn from(value: &[u8]) -> Element {
        Element::copy_from(value)
    }
}

impl From<String> for Element {
    fn from(value: String) -> Element {
        Element {
            bytes: value.into_bytes().into_boxed_slice(),
        }
    }
}

impl From<Vec<u8>> for Element {
    fn from(value: Vec<u8>) -> Element {
        Element {
            bytes: value.into_boxed_slice(),
        }
    }
}

impl PartialEq<[u8]> for Element {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes().eq(other)
    }
}

impl PartialEq<str> for Element {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes().eq(other.as_bytes())
    }
}

impl PartialEq<&str> for Element {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes().eq(other.as_bytes())
    }
}

impl PartialEq<String> for Element {
    fn eq(&self, other: &String) -> bool {
        self.as_bytes().eq(other.as_bytes())
    }
}

impl PartialEq<Element> for str {
    fn eq(&self, other: &Element) -> bool {
        self.as_bytes().eq(other.as_bytes())
    }
}

impl PartialEq<Element> for &str {
    fn eq(&self, other: &Element) -> bool {
        self.as_bytes().eq(other.as_bytes())
    }
}

impl PartialEq<Element> for String {
    fn eq(&self, other: &Element) -> bool {
        self.as_bytes().eq(other.as_bytes())
    }
}

impl PartialEq<Element> for [u8] {
    fn eq(&self, other: &Element) -> bool {
        self.eq(other.as_bytes())
    }
}

#[cfg(test)]
mod element_tests {
    use crate::Element;

    #[test]
    fn copy_does_not_alias_source() {
        let mut source = String::from("hello world!");
        let element = Element::from(source.as_str());
        source.push_str(" changed");
        assert_eq!("hello world!", element);
        assert_ne!(source.as_ptr(), element.as_bytes().as_ptr());
    }

    #[test]
    fn compares_byte_for_byte() {
        let element = Element::from("abc");
        assert_eq!(element, "abc");
        assert_eq!(element, String::from("abc"));
        assert!(b"abc"[..] == element);
        assert_ne!(element, "abcd");
        assert_ne!(element, "ABC");
    }

    #[test]
    fn invalid_utf8_is_rendered_lossy() {
        let element = Element::from(&[b'a', 0xff, b'b'][..]);
        assert_eq!(None, element.as_str());
        assert_eq!("a\u{fffd}b", element.to_string());
        assert_eq!(3, element.len());
    }

    #[test]
    fn empty_element() {
        let element = Element::from("");
        assert!(element.is_empty());
        assert_eq!(0, element.len());
        assert_eq!(element, "");
        assert!(!Element::from("x").is_empty());
    }

    #[test]
    fn debug_is_quoted() {
        assert_eq!("\"x\"", format!("{:?}", Element::from("x")));
    }
}
