use crate::Element;

/// Fixed-size storage block of element slots.
///
/// An empty slot is `None`, so every slot in the block is releasable at any
/// time. The block never changes size; growing means building a bigger block
/// with `grown` and dropping the old one.
pub(crate) struct Slots {
    items: Box<[Option<Element>]>,
}

impl Slots {
    /// Allocates `capacity` empty slots.
    pub fn empty(capacity: usize) -> Slots {
        Slots {
            items: (0..capacity).map(|_| None).collect(),
        }
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    /// Returns a block of `new_capacity` slots with the first `count` elements
    /// moved into it, in order. Elements are moved, never copied or released;
    /// the old block is left with empty slots and is dropped by the caller.
    pub fn grown(&mut self, count: usize, new_capacity: usize) -> Slots {
        debug_assert!(count <= self.capacity(), "grown: count within capacity");
        debug_assert!(new_capacity >= count, "grown: new block holds every element");

        let mut next = Slots::empty(new_capacity);
        for (from, to) in self.items[..count].iter_mut().zip(next.items.iter_mut()) {
            *to = from.take();
        }
        trace!("moved {} elements into block of {} slots", count, new_capacity);
        next
    }

    #[inline(always)]
    pub fn get(&self, index: usize) -> Option<&Element> {
        self.items.get(index).and_then(Option::as_ref)
    }

    #[inline(always)]
    pub fn live(&self, count: usize) -> &[Option<Element>] {
        &self.items[..count]
    }

    /// Opens a gap at `index` by moving `[index, count)` one slot to the right,
    /// working down from the highest live slot. Requires `count < capacity`.
    pub fn shift_right(&mut self, index: usize, count: usize) {
        debug_assert!(count < self.capacity(), "shift_right: free slot at the tail");
        debug_assert!(index <= count, "shift_right: index within live range");

        for i in (index + 1..=count).rev() {
            self.items[i] = self.items[i - 1].take();
        }
    }

    /// Closes the gap at `index` by moving `[index + 1, count)` one slot to the
    /// left. The last live slot is emptied; nothing at or past `count` is read.
    pub fn shift_left(&mut self, index: usize, count: usize) {
        debug_assert!(index < count, "shift_left: index within live range");
        debug_assert!(count <= self.capacity(), "shift_left: count within capacity");

        for i in index..count - 1 {
            self.items[i] = self.items[i + 1].take();
        }
        self.items[count - 1] = None;
    }

    /// Stores `element` in an empty slot.
    #[inline(always)]
    pub fn put(&mut self, index: usize, element: Element) {
        debug_assert!(self.items[index].is_none(), "put: slot is empty");
        self.items[index] = Some(element);
    }

    /// Takes the element out of `index`, leaving the slot empty.
    #[inline(always)]
    pub fn take(&mut self, index: usize) -> Option<Element> {
        self.items[index].take()
    }

    /// Releases every slot in the block, live or empty. Returns the number of
    /// elements released.
    pub fn release_all(&mut self) -> usize {
        let mut released = 0;
        for slot in self.items.iter_mut() {
            if slot.take().is_some() {
                released += 1;
            }
        }
        released
    }
}
