//! mulberry32 stream generator
//!
//! A small counter-based PRNG with 32-bit state. Each step adds a fixed odd
//! increment to the state and scrambles the result into one 32-bit output.
//!
//! # Algorithm
//!
//! ```text
//! state = state + 0x6D2B79F5                 (wrapping)
//! t = (state ^ state >> 15) * (state | 1)    (wrapping)
//! t = t ^ (t + (t ^ t >> 7) * (t | 61))      (wrapping)
//! out = t ^ t >> 14
//! ```
//!
//! The float form is `out / 2^32`, which is always in `[0, 1)`.
//!
//! # Determinism
//!
//! Same state → same sequence, bit for bit, on every platform. Not suitable
//! for anything security related: the state is trivially recoverable from
//! the output.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::seed::{hash_seed, Seed};

/// Odd increment added to the state on every step
const INCREMENT: u32 = 0x6D2B_79F5;

/// 2^32 as f64, the divisor mapping a 32-bit word into [0, 1)
pub(crate) const TWO_POW_32: f64 = 4_294_967_296.0;

/// 2^53, the largest magnitude below which every integer is an exact f64
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// Errors raised by stream operations
///
/// All of these are raised before the stream advances, so a failed call
/// leaves the state untouched.
///
/// [`RngError::AmbientInUse`] comes from [`crate::scope::global`], never from
/// the stream itself.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RngError {
    #[error("Invalid argument: {name} {reason}, got {value}")]
    InvalidArgument {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Cannot select from an empty domain")]
    EmptyDomain,

    #[error("Invalid option: {0}")]
    InvalidOption(String),

    #[error("Ambient stream is held by an enclosing call on this thread")]
    AmbientInUse,
}

/// Deterministic stream of uniform values backed by mulberry32
///
/// # Example
/// ```
/// use seeded_mock_core::rng::Stream;
///
/// let mut rng = Stream::new(42);
/// assert_eq!(rng.next_f64(), 0.6011037519201636);
///
/// let roll = rng.int(1, 6).unwrap(); // [1, 6]
/// assert!((1..=6).contains(&roll));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stream {
    /// Internal state (32-bit)
    state: u32,
}

impl Stream {
    /// Create a stream starting from a raw 32-bit state.
    ///
    /// Unlike xorshift, zero is a valid state.
    pub fn new(state: u32) -> Self {
        Self { state }
    }

    /// Create a stream from any seed, hashing it first.
    ///
    /// # Example
    /// ```
    /// use seeded_mock_core::rng::Stream;
    ///
    /// let a = Stream::from_seed("fixtures");
    /// let b = Stream::from_seed("fixtures");
    /// assert_eq!(a, b);
    /// ```
    pub fn from_seed(seed: impl Into<Seed>) -> Self {
        Self::new(hash_seed(&seed.into()))
    }

    /// Generate the next 32-bit output and advance the state.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Generate a uniform f64 in `[0.0, 1.0)` and advance the state.
    ///
    /// Every other operation on the stream is built on this one.
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / TWO_POW_32
    }

    /// Get the current state (for checkpointing/replay)
    ///
    /// # Example
    /// ```
    /// use seeded_mock_core::rng::Stream;
    ///
    /// let mut rng = Stream::new(7);
    /// rng.next_u32();
    ///
    /// let mut replay = Stream::new(rng.state());
    /// assert_eq!(rng.next_u32(), replay.next_u32());
    /// ```
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Uniform integer in `[min, max]`, both ends inclusive.
    ///
    /// Bounds are swapped when `min > max`. `min` is rounded up and `max`
    /// rounded down before drawing.
    ///
    /// # Errors
    /// [`RngError::InvalidArgument`] if either bound is NaN or infinite, or
    /// rounds to an integer of magnitude above 2^53.
    pub fn int(&mut self, min: impl Into<f64>, max: impl Into<f64>) -> Result<i64, RngError> {
        let (min, max) = ordered_bounds(min.into(), max.into())?;
        let lo = exact_int("min", min.ceil())?;
        let hi = exact_int("max", max.floor())?;
        let value = (self.next_f64() * (hi - lo + 1.0)).floor() + lo;
        Ok(value as i64)
    }

    /// Uniform float in `[min, max)`.
    ///
    /// Bounds are swapped when `min > max`. When `step * (max - min) + min`
    /// rounds up to `max` (wide magnitudes, narrow ranges) the result is the
    /// largest float below `max` instead. Equal bounds return `min`.
    ///
    /// # Errors
    /// [`RngError::InvalidArgument`] if either bound is NaN or infinite.
    pub fn float(&mut self, min: impl Into<f64>, max: impl Into<f64>) -> Result<f64, RngError> {
        let (min, max) = ordered_bounds(min.into(), max.into())?;
        let step = self.next_f64();
        let width = max - min;
        let value = if width.is_finite() {
            step * width + min
        } else {
            // max - min overflowed
            (1.0 - step) * min + step * max
        };
        if value >= max && max > min {
            return Ok(next_below(max).max(min));
        }
        Ok(value)
    }

    /// Pick one element uniformly.
    ///
    /// # Errors
    /// [`RngError::EmptyDomain`] if `items` is empty.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T, RngError> {
        if items.is_empty() {
            return Err(RngError::EmptyDomain);
        }
        Ok(&items[self.index(items.len())])
    }

    /// Uniform index in `[0, len)`. `len` must be non-zero.
    pub(crate) fn index(&mut self, len: usize) -> usize {
        let idx = (self.next_f64() * len as f64).floor() as usize;
        idx.min(len - 1)
    }
}

fn ordered_bounds(min: f64, max: f64) -> Result<(f64, f64), RngError> {
    for (name, value) in [("min", min), ("max", max)] {
        if !value.is_finite() {
            return Err(RngError::InvalidArgument {
                name,
                value,
                reason: "must be finite",
            });
        }
    }
    Ok(if min > max { (max, min) } else { (min, max) })
}

/// Reject rounded bounds an `i64` result could not reproduce exactly.
fn exact_int(name: &'static str, value: f64) -> Result<f64, RngError> {
    if value.abs() > MAX_EXACT_INT {
        return Err(RngError::InvalidArgument {
            name,
            value,
            reason: "must be within ±2^53",
        });
    }
    Ok(value)
}

/// Largest f64 strictly below a finite `x`.
fn next_below(x: f64) -> f64 {
    if x == 0.0 {
        -f64::from_bits(1)
    } else if x > 0.0 {
        f64::from_bits(x.to_bits() - 1)
    } else {
        f64::from_bits(x.to_bits() + 1)
    }
}
