use crate::error::{LookupError, TableError, TableKind};

/// Fixed-capacity table of per-frame entries, filled by the producer.
///
/// Entries are appended during scene building and read through [`TableView`]s
/// while a draw is in flight. `clear()` starts the next frame.
#[derive(Debug, Clone)]
pub struct Table<T> {
    kind: TableKind,
    capacity: usize,
    entries: Vec<T>,
}

impl<T> Table<T> {
    pub fn new(kind: TableKind, capacity: usize) -> Self {
        Self {
            kind,
            capacity,
            entries: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends an entry and returns its index.
    pub fn push(&mut self, entry: T) -> Result<u32, TableError> {
        if self.entries.len() >= self.capacity {
            return Err(TableError::Full {
                table: self.kind,
                capacity: self.capacity,
            });
        }
        let index = self.entries.len() as u32;
        self.entries.push(entry);
        Ok(index)
    }

    /// Drops all entries. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[inline]
    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    #[inline]
    pub fn view(&self) -> TableView<'_, T> {
        TableView::new(self.kind, &self.entries)
    }
}

/// Read-only, bounds-checked view of a table for the duration of a draw.
#[derive(Debug)]
pub struct TableView<'a, T> {
    kind: TableKind,
    entries: &'a [T],
}

// Manual impls: the view is copyable regardless of `T`.
impl<T> Clone for TableView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TableView<'_, T> {}

impl<'a, T> TableView<'a, T> {
    #[inline]
    pub fn new(kind: TableKind, entries: &'a [T]) -> Self {
        Self { kind, entries }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up `index`, reporting out-of-range indices instead of reading past the table.
    #[inline]
    pub fn get(&self, index: u32) -> Result<&'a T, LookupError> {
        self.entries.get(index as usize).ok_or(LookupError::OutOfRange {
            table: self.kind,
            index,
            len: self.entries.len(),
        })
    }
}
