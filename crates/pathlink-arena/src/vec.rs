//! Arena-backed growable sequence.

use crate::arena::{Block, GrowingArena};
use crate::error::ArenaError;

/// A growable ordered sequence whose storage lives in a [`GrowingArena`].
///
/// The sequence only holds a [`Block`] handle, so every operation that
/// touches element storage takes the arena explicitly. Capacity doubles
/// through [`GrowingArena::grow_in_place`] when a push finds the block
/// full; the abandoned block is reclaimed with the next arena reset.
///
/// # Examples
///
/// ```
/// use pathlink_arena::{ArenaConfig, ArenaVec, GrowingArena};
///
/// let mut arena = GrowingArena::<i32>::new(ArenaConfig::default());
/// let mut seq = ArenaVec::with_capacity(&mut arena, 2).unwrap();
/// for v in 1..=5 {
///     seq.push(&mut arena, v).unwrap();
/// }
/// assert_eq!(seq.as_slice(&arena), &[1, 2, 3, 4, 5]);
/// assert_eq!(seq.capacity(), 8);
/// assert_eq!(seq.pop(&arena).unwrap(), 5);
/// ```
#[derive(Debug)]
pub struct ArenaVec<T> {
    block: Block,
    len: usize,
    _marker: std::marker::PhantomData<T>,
}

impl<T: Copy + Default> ArenaVec<T> {
    /// Create an empty sequence with the arena's configured default
    /// capacity.
    pub fn new(arena: &mut GrowingArena<T>) -> Result<Self, ArenaError> {
        let cap = arena.config().sequence_capacity;
        Self::with_capacity(arena, cap)
    }

    /// Create an empty sequence with room for `cap` elements (at least 1).
    pub fn with_capacity(arena: &mut GrowingArena<T>, cap: usize) -> Result<Self, ArenaError> {
        let block = arena.alloc(cap.max(1))?;
        Ok(Self {
            block,
            len: 0,
            _marker: std::marker::PhantomData,
        })
    }

    /// Append `value`, doubling capacity if full.
    pub fn push(&mut self, arena: &mut GrowingArena<T>, value: T) -> Result<(), ArenaError> {
        if self.len >= self.block.len() {
            let new_cap = self.block.len().max(1) * 2;
            self.block = arena.grow_in_place(self.block, self.len, new_cap)?;
        }
        arena.slice_mut(self.block)[self.len] = value;
        self.len += 1;
        Ok(())
    }

    /// Remove and return the last element.
    ///
    /// Returns [`ArenaError::Underflow`] when empty. Callers in the engine
    /// check the length first; hitting this is a bug.
    pub fn pop(&mut self, arena: &GrowingArena<T>) -> Result<T, ArenaError> {
        if self.len == 0 {
            return Err(ArenaError::Underflow);
        }
        self.len -= 1;
        Ok(arena.slice(self.block)[self.len])
    }

    /// Reset the length to zero. Capacity and storage are kept.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Elements that fit before the next doubling.
    pub fn capacity(&self) -> usize {
        self.block.len()
    }

    /// Element at `index`, if `index < len`.
    pub fn get(&self, arena: &GrowingArena<T>, index: usize) -> Option<T> {
        self.as_slice(arena).get(index).copied()
    }

    /// Overwrite the element at `index`. Returns `false` (and writes
    /// nothing) if `index >= len`.
    pub fn set(&self, arena: &mut GrowingArena<T>, index: usize, value: T) -> bool {
        match self.as_mut_slice(arena).get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// First element.
    pub fn first(&self, arena: &GrowingArena<T>) -> Option<T> {
        self.get(arena, 0)
    }

    /// Last element.
    pub fn last(&self, arena: &GrowingArena<T>) -> Option<T> {
        self.len.checked_sub(1).and_then(|i| self.get(arena, i))
    }

    /// The live elements as a slice.
    pub fn as_slice<'a>(&self, arena: &'a GrowingArena<T>) -> &'a [T] {
        &arena.slice(self.block)[..self.len]
    }

    /// The live elements as a mutable slice.
    pub fn as_mut_slice<'a>(&self, arena: &'a mut GrowingArena<T>) -> &'a mut [T] {
        &mut arena.slice_mut(self.block)[..self.len]
    }
}
