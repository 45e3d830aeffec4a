//! Bit-packed sets used throughout the solver: a fixed 26-bit mask for trie
//! child presence, and a growable bitset for per-worker visited maps.

mod bitset32;
mod dynamic;

pub use bitset32::BitSet32;
pub use dynamic::BitSet;
