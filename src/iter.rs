use crate::Element;

/// Borrowing iterator over the live elements of a `DynamicArray`, in index order.
#[derive(Clone)]
pub struct Iter<'a> {
    pub(crate) inner: std::slice::Iter<'a, Option<Element>>,
}

impl<'a> ExactSizeIterator for Iter<'a> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.inner.next()?;
        debug_assert!(slot.is_some(), "Iter::next: live slot is empty");
        slot.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let slot = self.inner.next_back()?;
        debug_assert!(slot.is_some(), "Iter::next_back: live slot is empty");
        slot.as_ref()
    }
}

impl<'a> std::iter::FusedIterator for Iter<'a> {}
