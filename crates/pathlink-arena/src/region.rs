//! Contiguous bump-allocated memory regions.

use crate::error::ArenaError;

/// A single contiguous memory region with bump allocation.
///
/// Regions are the storage unit of the arena. Each region is a `Vec<T>`
/// allocated to full capacity at creation, with a cursor that advances on
/// each allocation. Regions are never freed individually; they are reset or
/// dropped together with the arena.
#[derive(Debug)]
pub struct Region<T> {
    /// Backing storage. Filled with `T::default()` at creation.
    data: Vec<T>,
    /// Bump pointer: next free position (in elements).
    cursor: usize,
}

impl<T: Copy + Default> Region<T> {
    /// Create a region holding `capacity` elements.
    ///
    /// Uses fallible reservation so an exhausted system allocator surfaces
    /// as [`ArenaError::OutOfMemory`] instead of aborting the process.
    pub fn try_new(capacity: usize) -> Result<Self, ArenaError> {
        let requested = capacity.saturating_mul(std::mem::size_of::<T>());
        let mut data = Vec::new();
        data.try_reserve_exact(capacity)
            .map_err(|_| ArenaError::OutOfMemory { requested })?;
        data.resize(capacity, T::default());
        Ok(Self { data, cursor: 0 })
    }

    /// Bump-allocate `len` elements from this region.
    ///
    /// Returns the starting offset, or `None` if there is insufficient
    /// remaining capacity. The allocated slots are reset to `T::default()`.
    pub fn alloc(&mut self, len: usize) -> Option<usize> {
        let new_cursor = self.cursor.checked_add(len)?;
        if new_cursor > self.data.len() {
            return None;
        }
        let offset = self.cursor;
        self.data[offset..new_cursor].fill(T::default());
        self.cursor = new_cursor;
        Some(offset)
    }

    /// Shared slice at `offset..offset + len`.
    ///
    /// # Panics
    ///
    /// Panics if the range exceeds the region's capacity.
    pub fn slice(&self, offset: usize, len: usize) -> &[T] {
        &self.data[offset..offset + len]
    }

    /// Mutable slice at `offset..offset + len`.
    ///
    /// # Panics
    ///
    /// Panics if the range exceeds the region's capacity.
    pub fn slice_mut(&mut self, offset: usize, len: usize) -> &mut [T] {
        &mut self.data[offset..offset + len]
    }

    /// Copy `len` elements from `from` to `to` within this region.
    pub(crate) fn copy_within(&mut self, from: usize, len: usize, to: usize) {
        self.data.copy_within(from..from + len, to);
    }

    /// Rewind the bump pointer to zero without deallocating.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Number of elements currently allocated.
    pub fn used(&self) -> usize {
        self.cursor
    }

    /// Total capacity in elements.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Remaining free capacity in elements.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.cursor
    }

    /// Size of the backing storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.data.len() * std::mem::size_of::<T>()
    }
}
