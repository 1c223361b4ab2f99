//! Arena configuration parameters.

/// Configuration for a [`GrowingArena`](crate::GrowingArena) and the
/// sequences allocated from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Default size of a new region in bytes.
    ///
    /// Default: 4096 (one page). A request larger than this gets a region
    /// sized to fit it exactly.
    pub region_bytes: usize,

    /// Initial element capacity of an [`ArenaVec`](crate::ArenaVec)
    /// created with [`ArenaVec::new`](crate::ArenaVec::new).
    ///
    /// Default: 64, enough for most paths on a 10×10 board before the
    /// first doubling.
    pub sequence_capacity: usize,
}

impl ArenaConfig {
    /// Default region size: 4KB.
    pub const DEFAULT_REGION_BYTES: usize = 4096;

    /// Default initial sequence capacity.
    pub const DEFAULT_SEQUENCE_CAPACITY: usize = 64;

    /// Region capacity in elements of `T`. Never zero.
    pub fn region_len<T>(&self) -> usize {
        let elem = std::mem::size_of::<T>().max(1);
        (self.region_bytes / elem).max(1)
    }

    /// Whether both sizes are non-zero.
    pub fn is_valid(&self) -> bool {
        self.region_bytes > 0 && self.sequence_capacity > 0
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            region_bytes: Self::DEFAULT_REGION_BYTES,
            sequence_capacity: Self::DEFAULT_SEQUENCE_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_region_is_one_page() {
        let config = ArenaConfig::default();
        assert_eq!(config.region_bytes, 4096);
        assert_eq!(config.region_len::<u32>(), 1024);
        assert_eq!(config.region_len::<[i32; 2]>(), 512);
    }

    #[test]
    fn region_len_never_zero() {
        let config = ArenaConfig {
            region_bytes: 1,
            sequence_capacity: 1,
        };
        assert_eq!(config.region_len::<u64>(), 1);
        assert_eq!(config.region_len::<()>(), 1);
    }

    #[test]
    fn zero_sizes_are_invalid() {
        let mut config = ArenaConfig::default();
        assert!(config.is_valid());
        config.sequence_capacity = 0;
        assert!(!config.is_valid());
    }
}
