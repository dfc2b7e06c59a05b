//! Holder of the ambient stream

use serde::{Deserialize, Serialize};

use super::resolver::{resolve, ScopedStream, StreamSource};
use crate::rng::{hash_seed, RngError, Seed, Stream};

/// Initial state of every fresh registry
///
/// Part of the public contract: fixtures that never reseed depend on the
/// sequence this produces, so it must not change between releases.
pub const DEFAULT_SEED: u32 = 0x9E37_79B9;

/// Owns exactly one stream, replaced wholesale by [`Registry::reseed`]
///
/// The ambient registry in [`crate::scope::global`] wraps one of these. Tests
/// that want isolation construct their own instead.
///
/// # Example
/// ```
/// use seeded_mock_core::scope::Registry;
///
/// let mut registry = Registry::default();
/// registry.reseed(42);
/// let a = registry.current().int(1, 6).unwrap();
///
/// registry.reseed(42);
/// let b = registry.current().int(1, 6).unwrap();
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    stream: Stream,
}

impl Registry {
    /// Create a registry whose stream starts from `seed`.
    pub fn new(seed: impl Into<Seed>) -> Self {
        Self {
            stream: Stream::from_seed(seed),
        }
    }

    /// Replace the stream with a fresh one hashed from `seed`.
    pub fn reseed(&mut self, seed: impl Into<Seed>) {
        let seed = seed.into();
        let state = hash_seed(&seed);
        tracing::debug!(seed = %seed, state, "reseeding stream registry");
        self.stream = Stream::new(state);
    }

    /// The live stream.
    pub fn current(&mut self) -> &mut Stream {
        &mut self.stream
    }

    /// Resolve the stream for one call, using this registry as fallback.
    pub fn resolve(&mut self, local: Option<&Seed>) -> ScopedStream<'_> {
        resolve(local, &mut self.stream)
    }

    /// Capture the current position of the stream.
    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            state: self.stream.state(),
        }
    }

    /// Rewind (or fast-forward) to a previously captured position.
    pub fn restore(&mut self, snapshot: &RegistrySnapshot) {
        tracing::debug!(state = snapshot.state, "restoring stream registry");
        self.stream = Stream::new(snapshot.state);
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            stream: Stream::new(DEFAULT_SEED),
        }
    }
}

impl StreamSource for Registry {
    fn with_stream<R>(
        &mut self,
        local: Option<&Seed>,
        f: impl FnOnce(&mut Stream) -> Result<R, RngError>,
    ) -> Result<R, RngError> {
        let mut scoped = self.resolve(local);
        f(&mut *scoped)
    }
}

/// Serializable position of a registry's stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    /// Raw 32-bit stream state at the time of capture
    pub state: u32,
}
