//! Seed values and seed hashing
//!
//! A seed is whatever a caller hands us to pin down a stream: an integer or
//! a piece of text. Both fold into the 32-bit state a [`Stream`] starts from.
//!
//! # Hashing
//!
//! - Integers are reduced modulo 2^32 (two's complement wraparound, so `-1`
//!   becomes `u32::MAX`).
//! - Text goes through 32-bit FNV-1a over its Unicode scalar values, in order.
//!   No normalisation and no locale handling: the same `str` always lands on
//!   the same state.
//!
//! [`Stream`]: crate::rng::Stream

use serde::{Deserialize, Serialize};
use std::fmt;

/// FNV-1a 32-bit offset basis
const FNV_OFFSET_BASIS: u32 = 0x811C_9DC5;

/// FNV-1a 32-bit prime
const FNV_PRIME: u32 = 0x0100_0193;

/// A caller-supplied or derived seed
///
/// Deserializes untagged, so a JSON number becomes [`Seed::Int`] and a JSON
/// string becomes [`Seed::Text`].
///
/// # Example
/// ```
/// use seeded_mock_core::rng::{hash_seed, Seed};
///
/// assert_eq!(hash_seed(&Seed::from(42)), 42);
/// assert_eq!(hash_seed(&Seed::from("test")), 2949673445);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seed {
    /// Integer seed, taken modulo 2^32
    Int(i64),
    /// Text seed, hashed with FNV-1a
    Text(String),
}

impl Seed {
    /// Fold this seed into a 32-bit stream state.
    pub fn hash(&self) -> u32 {
        hash_seed(self)
    }
}

/// Fold a seed into the 32-bit initial state of a stream.
///
/// Total: never fails, for any integer or any text (including empty text).
pub fn hash_seed(seed: &Seed) -> u32 {
    match seed {
        Seed::Int(value) => *value as u32,
        Seed::Text(text) => fnv1a32(text),
    }
}

fn fnv1a32(text: &str) -> u32 {
    text.chars().fold(FNV_OFFSET_BASIS, |hash, ch| {
        (hash ^ ch as u32).wrapping_mul(FNV_PRIME)
    })
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seed::Int(value) => write!(f, "{}", value),
            Seed::Text(text) => write!(f, "{:?}", text),
        }
    }
}

macro_rules! seed_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Seed {
                fn from(value: $ty) -> Self {
                    Seed::Int(value as i64)
                }
            }
        )*
    };
}

seed_from_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl From<&str> for Seed {
    fn from(text: &str) -> Self {
        Seed::Text(text.to_string())
    }
}

impl From<String> for Seed {
    fn from(text: String) -> Self {
        Seed::Text(text)
    }
}

impl From<&String> for Seed {
    fn from(text: &String) -> Self {
        Seed::Text(text.clone())
    }
}
