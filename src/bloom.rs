//! Standard Bloom Filter with rolling-hash substring scans
pub mod bit_buffer;
pub mod config;
pub mod error;
pub mod filter;
pub mod traits;

pub use bit_buffer::BitBuffer;
pub use config::{
    BloomFilterConfig, BloomFilterConfigBuilder, BloomFilterConfigBuilderError,
};
pub use error::{BloomError, BloomResult};
pub use filter::BloomFilter;
pub use traits::{BloomFilterOps, BloomFilterStats, SubstringSearch};
