//! Solver configuration (SPEC_FULL.md §2 "Configuration"). Resolves the
//! shard count the way the original resolves `kNumThreads` from
//! `std::thread::hardware_concurrency()`.

use std::num::NonZeroUsize;

/// Default shard count multiplier applied to the available parallelism,
/// matching the original's `kNumThreads = kNumCores*2` ("FIXME: this speeds
/// things up on my Intel I7").
const DEFAULT_SHARD_MULTIPLIER: usize = 2;

#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    pub shard_count: usize,
}

impl SolverConfig {
    /// `shard_count = 2 * available_parallelism`, falling back to `2` shards
    /// if the platform can't report a core count (spec.md §3 "Shards").
    pub fn from_available_parallelism() -> SolverConfig {
        let cores = std::thread::available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(1);
        SolverConfig {
            shard_count: cores * DEFAULT_SHARD_MULTIPLIER,
        }
    }

    pub fn with_shard_count(shard_count: usize) -> SolverConfig {
        SolverConfig {
            shard_count: shard_count.max(1),
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::from_available_parallelism()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_has_at_least_one_shard() {
        assert!(SolverConfig::default().shard_count >= 1);
    }

    #[test]
    fn explicit_shard_count_is_respected() {
        assert_eq!(SolverConfig::with_shard_count(7).shard_count, 7);
        assert_eq!(SolverConfig::with_shard_count(0).shard_count, 1);
    }
}
