/// Fixed-capacity circular buffer with overwrite-on-overflow semantics.
///
/// `head` is the oldest element, `tail` the next write position; both wrap
/// modulo the capacity. Pushing into a full buffer advances `head`, so the
/// buffer always holds the most recent `capacity` elements. Empty-state
/// accessors return `Option` instead of panicking.
pub struct RingBuffer<T> {
    slots: Vec<Option<T>>,
    head: usize,
    tail: usize,
    full: bool,
}

impl<T> RingBuffer<T> {
    /// Create a buffer holding at most `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0; a zero-capacity ring has no valid slot
    /// arithmetic.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "ring buffer capacity must be positive");
        Self {
            slots: std::iter::repeat_with(|| None).take(capacity).collect(),
            head: 0,
            tail: 0,
            full: false,
        }
    }

    /// Append an element, overwriting the oldest one if the buffer is full.
    pub fn push_back(&mut self, item: T) {
        let capacity = self.capacity();
        self.slots[self.tail] = Some(item);
        self.tail = (self.tail + 1) % capacity;

        if self.full {
            // Overwrote the oldest element; the next-oldest takes its place.
            self.head = (self.head + 1) % capacity;
        }
        if self.tail == self.head {
            self.full = true;
        }
    }

    /// Remove and return the oldest element.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let item = self.slots[self.head].take();
        self.head = (self.head + 1) % self.capacity();
        self.full = false;
        item
    }

    /// The oldest element, if any.
    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.head].as_ref()
    }

    /// The most recently pushed element, if any.
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        let capacity = self.capacity();
        self.slots[(self.tail + capacity - 1) % capacity].as_ref()
    }

    pub fn len(&self) -> usize {
        if self.full {
            self.capacity()
        } else if self.tail >= self.head {
            self.tail - self.head
        } else {
            self.capacity() - (self.head - self.tail)
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        !self.full && self.head == self.tail
    }

    pub fn is_full(&self) -> bool {
        self.full
    }

    /// Iterate from the oldest element to the newest.
    pub fn iter(&self) -> RingIter<'_, T> {
        RingIter {
            buffer: self,
            index: self.head,
            remaining: self.len(),
        }
    }
}

/// Forward iterator over a [`RingBuffer`], oldest element first.
pub struct RingIter<'a, T> {
    buffer: &'a RingBuffer<T>,
    index: usize,
    remaining: usize,
}

impl<'a, T> Iterator for RingIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.buffer.slots[self.index].as_ref()?;
        self.index = (self.index + 1) % self.buffer.capacity();
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for RingIter<'_, T> {}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = RingIter<'a, T>;

    fn into_iter(self) -> RingIter<'a, T> {
        self.iter()
    }
}
