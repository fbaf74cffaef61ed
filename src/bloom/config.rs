use super::{BloomError, BloomResult};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Sizing parameters for a freshly allocated filter.
///
/// The filter does not store hash function identities; callers that persist
/// a filter's bytes should keep this config (and the hash set used) next to
/// them.
#[derive(Clone, Debug, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(pattern = "owned")]
pub struct BloomFilterConfig {
    /// Bit budget per expected element
    #[builder(default = "10")]
    pub bits_per_element: usize,

    /// Expected number of distinct elements
    #[builder(default = "50_000")]
    pub estimated_elements: usize,
}

impl Default for BloomFilterConfig {
    fn default() -> Self {
        Self {
            bits_per_element: 10,
            estimated_elements: 50_000,
        }
    }
}

impl BloomFilterConfig {
    pub fn validate(&self) -> BloomResult<()> {
        if self.bits_per_element == 0 {
            return Err(BloomError::InvalidConfig(
                "Bits per element must be > 0".into(),
            ));
        }
        if self.estimated_elements == 0 {
            return Err(BloomError::InvalidConfig(
                "Estimated elements must be > 0".into(),
            ));
        }
        self.byte_buffer_size().map(|_| ())
    }

    /// `bits_per_element * estimated_elements / 8 + 1`
    pub fn byte_buffer_size(&self) -> BloomResult<usize> {
        self.bits_per_element
            .checked_mul(self.estimated_elements)
            .map(|bits| bits / 8 + 1)
            .ok_or_else(|| {
                BloomError::InvalidConfig(format!(
                    "Filter size overflows: {} bits/element * {} elements",
                    self.bits_per_element, self.estimated_elements
                ))
            })
    }
}
