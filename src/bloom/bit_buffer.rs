use bitvec::{order::Lsb0, vec::BitVec};

/// Fixed-length bit array packed into bytes.
///
/// Bit `i` lives in byte `i / 8` at offset `i % 8` (least significant bit
/// first), so `as_bytes` is the filter's serialized form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitBuffer {
    bits: BitVec<u8, Lsb0>,
}

impl BitBuffer {
    /// Zeroed buffer of `byte_len` bytes.
    pub fn new(byte_len: usize) -> Self {
        Self {
            bits: BitVec::from_vec(vec![0u8; byte_len]),
        }
    }

    /// Copies `bytes` verbatim.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bits: BitVec::from_slice(bytes),
        }
    }

    /// Caller guarantees `index < bit_len()`.
    #[inline]
    pub fn set_bit(&mut self, index: usize) {
        self.bits.set(index, true);
    }

    #[inline]
    pub fn is_bit_set(&self, index: usize) -> bool {
        self.bits[index]
    }

    pub fn clear(&mut self) {
        self.bits.fill(false);
    }

    pub fn byte_len(&self) -> usize {
        self.bits.as_raw_slice().len()
    }

    pub fn bit_len(&self) -> usize {
        self.bits.len()
    }

    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.bits.as_raw_slice()
    }
}
