use std::fmt;

use crate::{Sequence, SequenceError};

/// Capacity of a sequence built with [`Sequence::new`].
pub const DEFAULT_CAPACITY: usize = 10;

/// A sequence stored in a contiguous, partially-filled buffer.
///
/// Invariants:
/// - elements occupy `data[0..len]` in positional order;
/// - `len <= cap`, and the underlying allocation holds at least `cap`
///   slots (it may hold more; `capacity` reports `cap`);
/// - the cursor, when present, indexes a live element.
pub struct ArraySequence<T> {
    data: Vec<T>,
    cap: usize,
    cursor: Option<usize>,
}

impl<T> ArraySequence<T> {
    /// Creates an empty sequence with the given initial capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            cap: capacity,
            cursor: None,
        }
    }

    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Grows the capacity to at least `minimum`, leaving elements and the
    /// cursor untouched. Growth at least doubles so that repeated inserts
    /// cost amortized O(1) buffer copies.
    pub fn ensure_capacity(&mut self, minimum: usize) {
        if self.cap < minimum {
            let new_cap = minimum.max(self.cap * 2);
            self.data.reserve(new_cap - self.data.len());
            self.cap = new_cap;
        }
    }

    /// Shrinks the capacity to exactly the current length.
    pub fn trim_to_size(&mut self) {
        self.data.shrink_to_fit();
        self.cap = self.data.len();
    }
}

impl<T> Sequence for ArraySequence<T> {
    type Item = T;

    fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn start(&mut self) {
        self.cursor = if self.data.is_empty() { None } else { Some(0) };
    }

    fn is_current(&self) -> bool {
        self.cursor.is_some()
    }

    fn current(&self) -> Result<&T, SequenceError> {
        self.cursor
            .map(|i| &self.data[i])
            .ok_or(SequenceError::NoCurrent)
    }

    fn advance(&mut self) -> Result<(), SequenceError> {
        let i = self.cursor.ok_or(SequenceError::NoCurrent)?;
        self.cursor = if i + 1 < self.data.len() {
            Some(i + 1)
        } else {
            None
        };
        Ok(())
    }

    fn add_before(&mut self, item: T) {
        self.ensure_capacity(self.data.len() + 1);
        let at = self.cursor.unwrap_or(0);
        self.data.insert(at, item);
        self.cursor = Some(at);
    }

    fn add_after(&mut self, item: T) {
        self.ensure_capacity(self.data.len() + 1);
        match self.cursor {
            Some(i) => {
                self.data.insert(i + 1, item);
                self.cursor = Some(i + 1);
            }
            None => {
                self.data.push(item);
                self.cursor = Some(self.data.len() - 1);
            }
        }
    }

    fn remove_current(&mut self) -> Result<T, SequenceError> {
        let i = self.cursor.ok_or(SequenceError::NoCurrent)?;
        let item = self.data.remove(i);
        self.cursor = if i < self.data.len() { Some(i) } else { None };
        Ok(item)
    }
}

impl<T: fmt::Display> fmt::Display for ArraySequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.is_empty() {
            return f.write_str("empty sequence");
        }
        for (i, item) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            if Some(i) == self.cursor {
                write!(f, "({item})")?;
            } else {
                write!(f, "{item}")?;
            }
        }
        Ok(())
    }
}
