//! Fixed-size Bloom filter with rolling-hash substring membership.
//!
//! HowTo:
//!    * Storage: a packed bit buffer of `bits_per_element * estimated_elements / 8 + 1`
//!      bytes. Bit `i` lives in byte `i / 8`, offset `i % 8`.
//!    * Hash functions: a caller-owned ordered list of `k` [`HashFunction`]s.
//!      The filter only borrows it.
//!
//! Insertion:
//!     * Each hash output is reduced modulo the bit length and that bit is set.
//! Query:
//!     * An item is possibly present when all `k` bits are set, and certainly
//!       absent otherwise.
//! Substring query:
//!     * Every window of a fixed length inside a longer buffer is tested.
//!     * The first window is hashed in full; after that each hash is updated
//!       from the previous window's value and the byte that left the window,
//!       so rolling hashes (e.g. [`RabinKarpHash`]) do O(1) work per step.
//! Serialization:
//!     * The raw byte buffer ([`BloomFilter::as_bytes`]) is the whole format.
//!       Rebuild with [`BloomFilter::from_bytes`] and the same hash functions.
//!
//! Not thread-safe for writers: `add`, `clear` and `substring_exists` take
//! `&mut self`.

pub mod bloom;
pub mod hash;

pub use bloom::{
    BitBuffer, BloomError, BloomFilter, BloomFilterConfig,
    BloomFilterConfigBuilder, BloomFilterConfigBuilderError, BloomFilterOps,
    BloomFilterStats, BloomResult, SubstringSearch,
};
pub use hash::{
    DEFAULT_HASH_FUNCTIONS, Fnv1aHash, HashFunction, Murmur3Hash, RabinKarpHash,
};
