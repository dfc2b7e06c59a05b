//! Seeded Mock Core - Deterministic Mock Data Engine
//!
//! Reproducible pseudo-random values for mocks, fixtures and tests.
//!
//! # Architecture
//!
//! - **rng**: Seed hashing and the mulberry32 stream
//! - **scope**: Ambient registry and per-call stream resolution
//! - **compose**: Child seed derivation for nested generator calls
//! - **mock**: Option-driven value generators built on the above
//!
//! # Critical Invariants
//!
//! 1. Same seed → same values, bit for bit, on every platform
//! 2. A local seed isolates a call; omitting it shares the ambient stream
//! 3. Failed calls never advance a stream
//!
//! # Example
//!
//! ```
//! use seeded_mock_core::{global, Stream};
//!
//! global::reseed(42);
//! let a = global::with_current(|rng| rng.int(1, 6)).unwrap();
//!
//! global::reseed(42);
//! let b = global::with_current(|rng| rng.int(1, 6)).unwrap();
//! assert_eq!(a, b);
//!
//! let mut local = Stream::from_seed("fixture");
//! assert!(local.pick(&[] as &[u8]).is_err());
//! ```

// Module declarations
pub mod compose;
pub mod mock;
pub mod rng;
pub mod scope;

// Re-exports for convenience
pub use mock::Faker;
pub use rng::{hash_seed, RngError, Seed, Stream};
pub use scope::{
    global, resolve, Global, Registry, RegistrySnapshot, ScopedStream, StreamSource, DEFAULT_SEED,
};
