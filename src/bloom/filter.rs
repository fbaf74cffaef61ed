use super::{
    BitBuffer, BloomError, BloomFilterConfig, BloomFilterOps, BloomFilterStats,
    BloomResult, SubstringSearch,
};
use crate::hash::{DEFAULT_HASH_FUNCTIONS, HashFunction};
use std::ffi::CStr;
use tracing::{debug, trace};

/// Bloom filter over a borrowed, ordered set of hash functions.
///
/// Every hash output is reduced modulo the bit length before touching the
/// buffer. `last_hash` holds one running hash per function during
/// `substring_exists`; it is overwritten on every scan.
pub struct BloomFilter<'a> {
    hash_functions: &'a [&'a dyn HashFunction],
    buffer: BitBuffer,
    bit_len: u64,
    last_hash: Vec<u64>,
}

impl<'a> BloomFilter<'a> {
    /// Allocates a zeroed filter of
    /// `bits_per_element * estimated_elements / 8 + 1` bytes.
    pub fn new(
        config: BloomFilterConfig,
        hash_functions: &'a [&'a dyn HashFunction],
    ) -> BloomResult<Self> {
        config.validate()?;
        let byte_len = config.byte_buffer_size()?;

        debug!(
            bits_per_element = config.bits_per_element,
            estimated_elements = config.estimated_elements,
            byte_len,
            num_hashes = hash_functions.len(),
            "Creating bloom filter"
        );

        Self::with_buffer(BitBuffer::new(byte_len), hash_functions)
    }

    /// Reconstructs a filter from a previously exported byte buffer. The bytes
    /// are copied; `hash_functions` must match the ones used to build it.
    pub fn from_bytes(
        bytes: &[u8],
        hash_functions: &'a [&'a dyn HashFunction],
    ) -> BloomResult<Self> {
        if bytes.is_empty() {
            return Err(BloomError::EmptyBuffer);
        }

        debug!(
            byte_len = bytes.len(),
            num_hashes = hash_functions.len(),
            "Importing bloom filter"
        );

        Self::with_buffer(BitBuffer::from_bytes(bytes), hash_functions)
    }

    fn with_buffer(
        buffer: BitBuffer,
        hash_functions: &'a [&'a dyn HashFunction],
    ) -> BloomResult<Self> {
        if hash_functions.is_empty() {
            return Err(BloomError::NoHashFunctions);
        }

        Ok(Self {
            hash_functions,
            bit_len: buffer.bit_len() as u64,
            buffer,
            last_hash: vec![0; hash_functions.len()],
        })
    }

    /// Raw bit buffer, the complete serialized form of the filter.
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    pub fn add_str(&mut self, item: &str) {
        self.add(item.as_bytes());
    }

    pub fn exists_str(&self, item: &str) -> bool {
        self.exists(item.as_bytes())
    }

    pub fn substring_exists_str(
        &mut self,
        data: &str,
        window: usize,
    ) -> BloomResult<bool> {
        self.substring_exists(data.as_bytes(), window)
    }

    /// NUL-terminated form; the terminator is not hashed.
    pub fn add_cstr(&mut self, item: &CStr) {
        self.add(item.to_bytes());
    }

    pub fn exists_cstr(&self, item: &CStr) -> bool {
        self.exists(item.to_bytes())
    }

    pub fn substring_exists_cstr(
        &mut self,
        data: &CStr,
        window: usize,
    ) -> BloomResult<bool> {
        self.substring_exists(data.to_bytes(), window)
    }

    #[inline]
    fn bit_index(&self, hash: u64) -> usize {
        (hash % self.bit_len) as usize
    }
}

impl BloomFilter<'static> {
    /// Sized filter using the five default Rabin-Karp hashes.
    pub fn with_default_hashes(config: BloomFilterConfig) -> BloomResult<Self> {
        Self::new(config, &DEFAULT_HASH_FUNCTIONS)
    }
}

impl BloomFilterOps for BloomFilter<'_> {
    fn add(&mut self, item: &[u8]) {
        for hasher in self.hash_functions {
            let idx = self.bit_index(hasher.hash(item));
            self.buffer.set_bit(idx);
        }
    }

    fn exists(&self, item: &[u8]) -> bool {
        self.hash_functions.iter().all(|hasher| {
            self.buffer.is_bit_set(self.bit_index(hasher.hash(item)))
        })
    }

    fn clear(&mut self) {
        debug!(byte_len = self.buffer.byte_len(), "Clearing bloom filter");
        self.buffer.clear();
    }
}

impl SubstringSearch for BloomFilter<'_> {
    /// Checks every `window`-byte slice of `data`, updating each hash
    /// incrementally from the previous window after the first one.
    fn substring_exists(
        &mut self,
        data: &[u8],
        window: usize,
    ) -> BloomResult<bool> {
        if window == 0 {
            return Err(BloomError::ZeroWindow);
        }
        if window > data.len() {
            return Ok(false);
        }

        let hash_functions = self.hash_functions;
        let mut departed = 0u8;

        for (offset, current) in data.windows(window).enumerate() {
            for (hasher, last) in
                hash_functions.iter().zip(self.last_hash.iter_mut())
            {
                *last = if offset == 0 {
                    hasher.hash(current)
                } else {
                    hasher.rolling_hash(current, departed, *last)
                };
            }

            let all_set = self
                .last_hash
                .iter()
                .all(|&hash| self.buffer.is_bit_set(self.bit_index(hash)));
            if all_set {
                trace!(offset, window, "Substring match");
                return Ok(true);
            }

            departed = current[0];
        }

        Ok(false)
    }
}

impl BloomFilterStats for BloomFilter<'_> {
    fn byte_len(&self) -> usize {
        self.buffer.byte_len()
    }

    fn bit_len(&self) -> usize {
        self.buffer.bit_len()
    }

    fn num_hashes(&self) -> usize {
        self.hash_functions.len()
    }

    fn bits_set(&self) -> usize {
        self.buffer.count_ones()
    }
}

impl std::fmt::Debug for BloomFilter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BloomFilter {{ byte_len: {}, bit_len: {}, num_hashes: {}, bits_set: {} }}",
            self.buffer.byte_len(),
            self.bit_len,
            self.hash_functions.len(),
            self.buffer.count_ones()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::RabinKarpHash;

    fn config(
        bits_per_element: usize,
        estimated_elements: usize,
    ) -> BloomFilterConfig {
        BloomFilterConfig {
            bits_per_element,
            estimated_elements,
        }
    }

    #[test]
    fn test_sized_construction() {
        let h1 = RabinKarpHash::new(13);
        let hashes: [&dyn HashFunction; 1] = [&h1];
        let filter = BloomFilter::new(config(10, 10), &hashes).unwrap();
        assert_eq!(filter.byte_len(), 13);
        assert_eq!(filter.bit_len(), 104);
        assert_eq!(filter.num_hashes(), 1);
        assert_eq!(filter.bits_set(), 0);
        assert_eq!(filter.last_hash.len(), 1);
    }

    #[test]
    fn test_no_hash_functions_rejected() {
        let hashes: [&dyn HashFunction; 0] = [];
        assert_eq!(
            BloomFilter::new(config(10, 10), &hashes).unwrap_err(),
            BloomError::NoHashFunctions
        );
        assert_eq!(
            BloomFilter::from_bytes(&[0u8; 4], &hashes).unwrap_err(),
            BloomError::NoHashFunctions
        );
    }

    #[test]
    fn test_empty_import_rejected() {
        let h1 = RabinKarpHash::new(13);
        let hashes: [&dyn HashFunction; 1] = [&h1];
        assert_eq!(
            BloomFilter::from_bytes(&[], &hashes).unwrap_err(),
            BloomError::EmptyBuffer
        );
    }

    #[test]
    fn test_add_sets_reduced_bits() {
        // Identity-like hashes make the bit positions predictable.
        let first = |input: &[u8]| input[0] as u64;
        let second = |input: &[u8]| input[0] as u64 + 1000;
        let hashes: [&dyn HashFunction; 2] = [&first, &second];
        // 2 bytes -> 16 bits
        let mut filter = BloomFilter::from_bytes(&[0, 0], &hashes).unwrap();

        filter.add(&[3]);
        // 3 % 16 = 3, 1003 % 16 = 11
        assert_eq!(filter.as_bytes(), &[0b0000_1000, 0b0000_1000]);
        assert!(filter.exists(&[3]));
        assert!(filter.exists(&[19]));
        assert!(!filter.exists(&[4]));
    }

    #[test]
    fn test_scratch_state_overwritten_per_scan() {
        let h1 = RabinKarpHash::new(13);
        let h2 = RabinKarpHash::new(17);
        let hashes: [&dyn HashFunction; 2] = [&h1, &h2];
        let mut filter = BloomFilter::new(config(10, 10), &hashes).unwrap();

        assert!(!filter.substring_exists(b"abcdef", 3).unwrap());
        assert_eq!(filter.last_hash, vec![h1.hash(b"def"), h2.hash(b"def")]);

        assert!(!filter.substring_exists(b"xyz", 2).unwrap());
        assert_eq!(filter.last_hash, vec![h1.hash(b"yz"), h2.hash(b"yz")]);
    }

    #[test]
    fn test_debug_output() {
        let filter = BloomFilter::with_default_hashes(config(8, 8)).unwrap();
        assert_eq!(
            format!("{filter:?}"),
            "BloomFilter { byte_len: 9, bit_len: 72, num_hashes: 5, bits_set: 0 }"
        );
    }
}
