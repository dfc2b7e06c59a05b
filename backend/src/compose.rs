//! Composition protocol
//!
//! A generator that calls other generators does not hand them its own
//! stream. It draws one value per nested call and passes it on as that
//! call's local seed:
//!
//! ```text
//! child_seed = floor(parent.next_f64() * 2^32)
//! ```
//!
//! `next_f64()` is a 32-bit word divided by 2^32, so the scaled value is the
//! drawn word itself and the derivation is exact.
//!
//! # Guarantees
//!
//! - The whole composite is reproducible from the outermost seed alone.
//! - Each nested call consumes exactly one step of the parent, however many
//!   values it draws internally. Changing what one child generates cannot
//!   shift the seeds handed to its siblings.

use crate::rng::{Seed, Stream, TWO_POW_32};

/// Draw one child seed from `parent`, advancing it by one step.
///
/// # Example
/// ```
/// use seeded_mock_core::compose::child_seed;
/// use seeded_mock_core::rng::{Seed, Stream};
///
/// let mut parent = Stream::new(42);
/// assert_eq!(child_seed(&mut parent), Seed::Int(2581720956));
/// ```
pub fn child_seed(parent: &mut Stream) -> Seed {
    let word = (parent.next_f64() * TWO_POW_32) as u32;
    tracing::trace!(child = word, "derived child seed");
    Seed::Int(i64::from(word))
}

/// Draw a child seed and build its stream in one go.
pub fn fork(parent: &mut Stream) -> Stream {
    Stream::from_seed(child_seed(parent))
}

/// Draw `n` child seeds up front, one step each.
///
/// Collecting seeds before running any nested call keeps the parent stream
/// free while the children run.
pub fn child_seeds(parent: &mut Stream, n: usize) -> Vec<Seed> {
    (0..n).map(|_| child_seed(parent)).collect()
}
