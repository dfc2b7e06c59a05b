//! Stream scoping
//!
//! Decides which [`Stream`] a generator call draws from:
//!
//! - **Local seed given** → a brand new stream hashed from that seed. The
//!   ambient stream is neither read nor advanced.
//! - **No local seed** → the ambient stream held by a [`Registry`], shared
//!   with every other unseeded call in order.
//!
//! [`StreamSource`] is the seam generators go through. The ambient
//! process-wide registry ([`Global`]) and an owned [`Registry`] both
//! implement it, so tests can run against an isolated instance.
//!
//! [`Stream`]: crate::rng::Stream

pub mod global;
mod registry;
mod resolver;

pub use global::Global;
pub use registry::{Registry, RegistrySnapshot, DEFAULT_SEED};
pub use resolver::{resolve, ScopedStream, StreamSource};
