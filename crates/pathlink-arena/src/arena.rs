//! The growing bump arena.
//!
//! A [`GrowingArena`] is a list of [`Region`]s plus a cursor naming the
//! region currently being filled. Allocation never frees: a request that
//! does not fit the current region first looks for room in an existing
//! region (newest first) and only then asks the system for a new one.
//! The scan is what lets [`reset`](GrowingArena::reset) reuse every
//! region the arena ever grew without going back to the allocator.

use log::debug;

use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::region::Region;

/// Handle to a contiguous run of elements inside a [`GrowingArena`].
///
/// A block stays valid until the arena is [`reset`](GrowingArena::reset)
/// or [`released`](GrowingArena::release). Reading a block after that is
/// a caller error: after a reset it silently aliases newer allocations,
/// after a release it panics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Block {
    region: usize,
    offset: usize,
    len: usize,
}

impl Block {
    /// Index of the region holding this block.
    pub fn region(&self) -> usize {
        self.region
    }

    /// Element offset within the region.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Length in elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the block has zero length.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Informational counters. Not used for correctness.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArenaStats {
    /// Bytes handed out since the last reset.
    pub used_bytes: usize,
    /// Bytes of backing storage across all regions.
    pub total_bytes: usize,
    /// Free bytes left behind in regions abandoned for a new one.
    pub wasted_bytes: usize,
    /// Number of regions.
    pub region_count: usize,
}

/// Bump allocator over a growable list of regions.
///
/// # Examples
///
/// ```
/// use pathlink_arena::{ArenaConfig, GrowingArena};
///
/// let mut arena = GrowingArena::<u32>::new(ArenaConfig::default());
/// let block = arena.alloc(4).unwrap();
/// arena.slice_mut(block).copy_from_slice(&[1, 2, 3, 4]);
/// assert_eq!(arena.slice(block), &[1, 2, 3, 4]);
/// assert_eq!(arena.stats().used_bytes, 16);
/// ```
#[derive(Debug)]
pub struct GrowingArena<T> {
    regions: Vec<Region<T>>,
    /// Index of the region currently being filled.
    current: usize,
    /// Default region capacity in elements.
    region_len: usize,
    config: ArenaConfig,
    /// Elements handed out since the last reset.
    used: usize,
    /// Elements abandoned in regions we moved away from.
    wasted: usize,
}

impl<T: Copy + Default> GrowingArena<T> {
    /// Create an empty arena. No memory is reserved until the first
    /// allocation.
    pub fn new(config: ArenaConfig) -> Self {
        Self {
            regions: Vec::new(),
            current: 0,
            region_len: config.region_len::<T>(),
            config,
            used: 0,
            wasted: 0,
        }
    }

    /// The configuration this arena was built with.
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Allocate `len` zero-initialised elements.
    ///
    /// Tries the current region, then every existing region newest-first,
    /// and finally creates a region of `max(region_len, len)` elements.
    pub fn alloc(&mut self, len: usize) -> Result<Block, ArenaError> {
        if self.regions.is_empty() {
            self.push_region(len)?;
        }

        if let Some(offset) = self.regions[self.current].alloc(len) {
            return Ok(self.commit(self.current, offset, len));
        }

        // Current region full: reuse any region with enough room.
        if let Some(index) = self.regions.iter().rposition(|r| r.remaining() >= len) {
            if let Some(offset) = self.regions[index].alloc(len) {
                self.current = index;
                return Ok(self.commit(index, offset, len));
            }
        }

        // Need a new region. Whatever is left in the current one is wasted.
        self.wasted += self.regions[self.current].remaining();
        let index = self.push_region(len)?;
        let offset = self.regions[index]
            .alloc(len)
            .ok_or(ArenaError::OutOfMemory {
                requested: self.bytes(len),
            })?;
        Ok(self.commit(index, offset, len))
    }

    /// Allocate a block of `new_len` and copy the first `old_len` elements
    /// of `old` into it. `old` is not freed.
    ///
    /// `old_len` is clamped to both `old.len()` and `new_len`.
    pub fn grow_in_place(
        &mut self,
        old: Block,
        old_len: usize,
        new_len: usize,
    ) -> Result<Block, ArenaError> {
        let keep = old_len.min(old.len).min(new_len);
        let new = self.alloc(new_len)?;
        if keep == 0 {
            return Ok(new);
        }
        if new.region == old.region {
            self.regions[new.region].copy_within(old.offset, keep, new.offset);
        } else if old.region < new.region {
            let (head, tail) = self.regions.split_at_mut(new.region);
            tail[0]
                .slice_mut(new.offset, keep)
                .copy_from_slice(head[old.region].slice(old.offset, keep));
        } else {
            let (head, tail) = self.regions.split_at_mut(old.region);
            head[new.region]
                .slice_mut(new.offset, keep)
                .copy_from_slice(tail[0].slice(old.offset, keep));
        }
        Ok(new)
    }

    /// Shared view of a block.
    ///
    /// # Panics
    ///
    /// Panics if `block` refers to a region dropped by [`release`](Self::release).
    pub fn slice(&self, block: Block) -> &[T] {
        self.regions[block.region].slice(block.offset, block.len)
    }

    /// Mutable view of a block.
    ///
    /// # Panics
    ///
    /// Panics if `block` refers to a region dropped by [`release`](Self::release).
    pub fn slice_mut(&mut self, block: Block) -> &mut [T] {
        self.regions[block.region].slice_mut(block.offset, block.len)
    }

    /// Rewind every region without returning memory to the system.
    ///
    /// All blocks handed out before the reset become invalid.
    pub fn reset(&mut self) {
        for region in &mut self.regions {
            region.reset();
        }
        self.current = 0;
        self.used = 0;
        self.wasted = 0;
    }

    /// Return all regions to the system. The arena remains usable; the
    /// next allocation starts a fresh region.
    pub fn release(&mut self) {
        debug!(
            "arena released: {} regions, {} bytes",
            self.regions.len(),
            self.total_bytes()
        );
        self.regions = Vec::new();
        self.current = 0;
        self.used = 0;
        self.wasted = 0;
    }

    /// Bookkeeping counters.
    pub fn stats(&self) -> ArenaStats {
        ArenaStats {
            used_bytes: self.bytes(self.used),
            total_bytes: self.total_bytes(),
            wasted_bytes: self.bytes(self.wasted),
            region_count: self.regions.len(),
        }
    }

    /// Number of regions currently held.
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    fn push_region(&mut self, len: usize) -> Result<usize, ArenaError> {
        let capacity = self.region_len.max(len);
        let region = Region::try_new(capacity)?;
        debug!(
            "arena region {} created: {} bytes",
            self.regions.len(),
            region.memory_bytes()
        );
        self.regions.push(region);
        self.current = self.regions.len() - 1;
        Ok(self.current)
    }

    fn commit(&mut self, region: usize, offset: usize, len: usize) -> Block {
        self.used += len;
        Block {
            region,
            offset,
            len,
        }
    }

    fn bytes(&self, elems: usize) -> usize {
        elems.saturating_mul(std::mem::size_of::<T>())
    }

    fn total_bytes(&self) -> usize {
        self.regions.iter().map(|r| r.memory_bytes()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn small_arena(region_bytes: usize) -> GrowingArena<u32> {
        GrowingArena::new(ArenaConfig {
            region_bytes,
            sequence_capacity: 4,
        })
    }

    #[test]
    fn first_alloc_creates_region() {
        let mut arena = small_arena(64);
        assert_eq!(arena.region_count(), 0);
        let block = arena.alloc(4).unwrap();
        assert_eq!(block.region(), 0);
        assert_eq!(block.offset(), 0);
        assert_eq!(arena.region_count(), 1);
        assert_eq!(arena.stats().total_bytes, 64);
    }

    #[test]
    fn overflow_creates_new_region_and_counts_waste() {
        // 16 elements per region.
        let mut arena = small_arena(64);
        arena.alloc(12).unwrap();
        let block = arena.alloc(8).unwrap();
        assert_eq!(block.region(), 1);
        let stats = arena.stats();
        assert_eq!(stats.region_count, 2);
        assert_eq!(stats.wasted_bytes, 4 * 4);
        assert_eq!(stats.used_bytes, 20 * 4);
    }

    #[test]
    fn oversized_request_gets_exact_region() {
        let mut arena = small_arena(64);
        let block = arena.alloc(100).unwrap();
        assert_eq!(block.len(), 100);
        assert_eq!(arena.stats().total_bytes, 400);
    }

    #[test]
    fn scan_reuses_region_with_room() {
        let mut arena = small_arena(64);
        arena.alloc(8).unwrap(); // region 0: 8/16
        arena.alloc(100).unwrap(); // region 1: 100/100 (exact fit, current)
        let block = arena.alloc(4).unwrap();
        // Region 1 is full, region 0 still has 8 free.
        assert_eq!(block.region(), 0);
        assert_eq!(block.offset(), 8);
        assert_eq!(arena.region_count(), 2);
    }

    #[test]
    fn reset_reuses_regions_without_growing() {
        let mut arena = small_arena(64);
        arena.alloc(16).unwrap();
        arena.alloc(16).unwrap();
        arena.alloc(16).unwrap();
        assert_eq!(arena.region_count(), 3);
        arena.reset();
        assert_eq!(arena.stats().used_bytes, 0);
        for _ in 0..3 {
            arena.alloc(16).unwrap();
        }
        assert_eq!(arena.region_count(), 3);
        assert_eq!(arena.stats().wasted_bytes, 0);
    }

    #[test]
    fn release_drops_everything() {
        let mut arena = small_arena(64);
        arena.alloc(10).unwrap();
        arena.release();
        assert_eq!(arena.stats(), ArenaStats::default());
        let block = arena.alloc(2).unwrap();
        assert_eq!(block.region(), 0);
        assert_eq!(arena.region_count(), 1);
    }

    #[test]
    fn grow_in_place_copies_prefix_same_region() {
        let mut arena = small_arena(64);
        let old = arena.alloc(3).unwrap();
        arena.slice_mut(old).copy_from_slice(&[1, 2, 3]);
        let new = arena.grow_in_place(old, 3, 6).unwrap();
        assert_eq!(new.region(), old.region());
        assert_eq!(arena.slice(new), &[1, 2, 3, 0, 0, 0]);
        // The old block is untouched.
        assert_eq!(arena.slice(old), &[1, 2, 3]);
    }

    #[test]
    fn grow_in_place_copies_across_regions() {
        let mut arena = small_arena(64);
        let old = arena.alloc(10).unwrap();
        arena.slice_mut(old).fill(9);
        let new = arena.grow_in_place(old, 10, 20).unwrap();
        assert_ne!(new.region(), old.region());
        assert!(arena.slice(new)[..10].iter().all(|&v| v == 9));
        assert!(arena.slice(new)[10..].iter().all(|&v| v == 0));
    }

    #[test]
    fn grow_in_place_into_older_region() {
        let mut arena = small_arena(64);
        arena.alloc(4).unwrap(); // region 0: 4/16
        let old = arena.alloc(30).unwrap(); // region 1 (exact, full)
        arena.slice_mut(old)[..2].copy_from_slice(&[5, 6]);
        let new = arena.grow_in_place(old, 2, 8).unwrap();
        assert_eq!(new.region(), 0);
        assert_eq!(&arena.slice(new)[..2], &[5, 6]);
    }

    proptest! {
        #[test]
        fn blocks_never_overlap(lens in proptest::collection::vec(0usize..40, 1..30)) {
            let mut arena = small_arena(64);
            let mut blocks = Vec::new();
            for (i, &len) in lens.iter().enumerate() {
                let block = arena.alloc(len).unwrap();
                arena.slice_mut(block).fill(i as u32 + 1);
                blocks.push(block);
            }
            for (i, block) in blocks.iter().enumerate() {
                prop_assert!(arena.slice(*block).iter().all(|&v| v == i as u32 + 1));
            }
            let total: usize = lens.iter().sum();
            prop_assert_eq!(arena.stats().used_bytes, total * 4);
        }

        #[test]
        fn used_never_exceeds_total(lens in proptest::collection::vec(1usize..40, 1..30)) {
            let mut arena = small_arena(64);
            for &len in &lens {
                arena.alloc(len).unwrap();
                let stats = arena.stats();
                prop_assert!(stats.used_bytes <= stats.total_bytes);
            }
        }
    }
}
