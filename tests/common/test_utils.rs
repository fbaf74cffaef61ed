use rand::Rng;
use rand::distr::Alphanumeric;
use rolling_bloom_rs::{HashFunction, RabinKarpHash};
use std::sync::Once;
use tracing_subscriber::EnvFilter;

pub static H13: RabinKarpHash = RabinKarpHash::new(13);
pub static H17: RabinKarpHash = RabinKarpHash::new(17);

/// The two-hash set used by most tests: Rabin-Karp with bases 13 and 17.
pub static TEST_HASHES: [&dyn HashFunction; 2] = [&H13, &H17];

static TRACING: Once = Once::new();

/// Installs a test subscriber once; respects `RUST_LOG`.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Random alphanumeric string of `len` characters
#[allow(dead_code)]
pub fn random_string(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

#[allow(dead_code)]
pub fn generate_test_items(count: usize) -> Vec<Vec<u8>> {
    (0..count)
        .map(|i| format!("test_item_{:06}", i).into_bytes())
        .collect()
}
