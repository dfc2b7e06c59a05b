//! Deterministic random number generation
//!
//! Uses mulberry32 over a 32-bit state, seeded by integer or text.
//! CRITICAL: All randomness in the crate MUST go through this module.

mod mulberry32;
mod seed;

pub(crate) use mulberry32::TWO_POW_32;
pub use mulberry32::{RngError, Stream};
pub use seed::{hash_seed, Seed};
