use fnv::FnvHasher;
use murmur3::murmur3_x64_128;
use std::hash::Hasher;
use std::io::Cursor;

/// A hash function usable by the Bloom filter.
///
/// Every implementation has two calling modes:
///
/// - `hash(input)`
///   - Full computation over a byte slice (the slice length is the window
///     length).
/// - `rolling_hash(input, departed, previous)`
///   - Incremental computation for a sliding window. `input` is the current
///     window, `departed` is the byte that just left the window and
///     `previous` is the hash of the previous window.
///
/// Both modes must be deterministic and must agree with each other:
/// `rolling_hash(window, departed, hash(previous_window))` has to equal
/// `hash(window)`. Hashes that cannot be updated incrementally keep the
/// default `rolling_hash`, which simply recomputes over `input`.
pub trait HashFunction: Send + Sync {
    fn hash(&self, input: &[u8]) -> u64;

    fn rolling_hash(&self, input: &[u8], departed: u8, previous: u64) -> u64 {
        let _ = (departed, previous);
        self.hash(input)
    }
}

/// Any plain `Fn(&[u8]) -> u64` can be used as a (non-rolling) hash function.
impl<F> HashFunction for F
where
    F: Fn(&[u8]) -> u64 + Send + Sync,
{
    fn hash(&self, input: &[u8]) -> u64 {
        self(input)
    }
}

const PRECOMPUTED_POWERS: usize = 64;

/// Polynomial rolling hash (Rabin-Karp) over wrapping `u64` arithmetic.
///
/// `hash(b_0 .. b_{n-1}) = sum(b_i * base^(n - 1 - i))`. Powers of `base`
/// below 64 are precomputed; larger ones are computed by squaring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RabinKarpHash {
    base: u64,
    powers: [u64; PRECOMPUTED_POWERS],
}

impl RabinKarpHash {
    pub const fn new(base: u64) -> Self {
        let mut powers = [0u64; PRECOMPUTED_POWERS];
        let mut acc = 1u64;
        let mut i = 0;
        while i < PRECOMPUTED_POWERS {
            powers[i] = acc;
            acc = acc.wrapping_mul(base);
            i += 1;
        }
        Self { base, powers }
    }

    pub fn base(&self) -> u64 {
        self.base
    }

    fn pow(&self, exp: usize) -> u64 {
        if let Some(&power) = self.powers.get(exp) {
            return power;
        }

        let mut result = 1u64;
        let mut base = self.base;
        let mut exp = exp;
        while exp > 0 {
            if exp & 1 == 1 {
                result = result.wrapping_mul(base);
            }
            base = base.wrapping_mul(base);
            exp >>= 1;
        }
        result
    }
}

impl HashFunction for RabinKarpHash {
    fn hash(&self, input: &[u8]) -> u64 {
        input.iter().fold(0u64, |acc, &byte| {
            acc.wrapping_mul(self.base).wrapping_add(byte as u64)
        })
    }

    fn rolling_hash(&self, input: &[u8], departed: u8, previous: u64) -> u64 {
        let Some(&entered) = input.last() else {
            return 0;
        };
        // Drop the departed byte's leading term, shift, append the new byte.
        let leading = (departed as u64).wrapping_mul(self.pow(input.len() - 1));
        previous
            .wrapping_sub(leading)
            .wrapping_mul(self.base)
            .wrapping_add(entered as u64)
    }
}

/// 64-bit FNV-1a. Not incremental.
#[derive(Clone, Copy, Debug, Default)]
pub struct Fnv1aHash;

impl HashFunction for Fnv1aHash {
    fn hash(&self, input: &[u8]) -> u64 {
        let mut hasher = FnvHasher::default();
        hasher.write(input);
        hasher.finish()
    }
}

/// Lower 64 bits of MurmurHash3 x64/128. Not incremental.
#[derive(Clone, Copy, Debug, Default)]
pub struct Murmur3Hash {
    pub seed: u32,
}

impl Murmur3Hash {
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }
}

impl HashFunction for Murmur3Hash {
    fn hash(&self, input: &[u8]) -> u64 {
        let mut cursor = Cursor::new(input);
        // Reading from an in-memory cursor cannot fail.
        murmur3_x64_128(&mut cursor, self.seed)
            .expect("Failed to compute Murmur3 hash") as u64
    }
}

static RABIN_KARP_13: RabinKarpHash = RabinKarpHash::new(13);
static RABIN_KARP_17: RabinKarpHash = RabinKarpHash::new(17);
static RABIN_KARP_31: RabinKarpHash = RabinKarpHash::new(31);
static RABIN_KARP_41: RabinKarpHash = RabinKarpHash::new(41);
static RABIN_KARP_53: RabinKarpHash = RabinKarpHash::new(53);

/// Five rolling hashes with prime bases 13, 17, 31, 41 and 53.
pub static DEFAULT_HASH_FUNCTIONS: [&dyn HashFunction; 5] = [
    &RABIN_KARP_13,
    &RABIN_KARP_17,
    &RABIN_KARP_31,
    &RABIN_KARP_41,
    &RABIN_KARP_53,
];
