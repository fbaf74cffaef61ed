use super::BloomResult;

pub trait BloomFilterOps {
    fn add(&mut self, item: &[u8]);
    fn exists(&self, item: &[u8]) -> bool;
    fn clear(&mut self);
}

/// Sliding-window membership over a longer byte buffer.
pub trait SubstringSearch {
    fn substring_exists(&mut self, data: &[u8], window: usize)
    -> BloomResult<bool>;
}

pub trait BloomFilterStats {
    fn byte_len(&self) -> usize;
    fn bit_len(&self) -> usize;
    fn num_hashes(&self) -> usize;
    fn bits_set(&self) -> usize;
}
