//! Shared random source
//!
//! The standard generators are not thread-safe, so the process-wide source
//! wraps one behind a mutex: concurrent callers each draw a distinct,
//! non-interleaved value instead of racing the generator state.
//!
//! Used to mint `Transaction-Id` values when the caller does not supply one.

use once_cell::sync::Lazy;
use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::sync::{Mutex, PoisonError};

/// A mutex-guarded pseudo-random generator
pub struct LockedRng {
    inner: Mutex<StdRng>,
}

impl LockedRng {
    /// Create a generator from an explicit seed
    ///
    /// The same seed yields the same sequence, which is what tests want.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Create a generator seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            inner: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Draw the next value
    pub fn next_u64(&self) -> u64 {
        self.lock().next_u64()
    }

    /// Fill a buffer with random bytes
    pub fn fill_bytes(&self, buf: &mut [u8]) {
        self.lock().fill_bytes(buf);
    }

    /// Draw a random alphanumeric string of the given length
    pub fn alphanumeric(&self, len: usize) -> String {
        let mut rng = self.lock();
        (0..len).map(|_| rng.sample(Alphanumeric) as char).collect()
    }

    /// Replace the generator state with a freshly seeded one
    ///
    /// Values already being drawn on other threads come from the old state;
    /// reseed at startup (or between test cases) if a deterministic sequence
    /// is wanted.
    pub fn reseed(&self, seed: u64) {
        *self.lock() = StdRng::seed_from_u64(seed);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StdRng> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for LockedRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LockedRng").finish()
    }
}

static GLOBAL: Lazy<LockedRng> = Lazy::new(LockedRng::from_entropy);

/// The process-wide random source
pub fn global() -> &'static LockedRng {
    &GLOBAL
}

/// Mint a transaction ID for request tracing
pub fn transaction_id() -> String {
    format!("sdk-{}", global().alphanumeric(16))
}
