//! Random strings over a character set

use serde::{Deserialize, Serialize};

use crate::rng::{RngError, Seed, Stream};

const ALPHA: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const NUMERIC: &str = "0123456789";
const HEX: &str = "0123456789abcdef";

/// Character set to draw from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Charset {
    #[default]
    Alphanumeric,
    Alpha,
    Numeric,
    Hex,
    /// Any caller-supplied set; duplicates weight the draw
    Custom(String),
}

impl Charset {
    fn chars(&self) -> Vec<char> {
        match self {
            Charset::Alphanumeric => ALPHA.chars().chain(NUMERIC.chars()).collect(),
            Charset::Alpha => ALPHA.chars().collect(),
            Charset::Numeric => NUMERIC.chars().collect(),
            Charset::Hex => HEX.chars().collect(),
            Charset::Custom(set) => set.chars().collect(),
        }
    }
}

/// Options for [`string_in`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StringOptions {
    pub seed: Option<Seed>,
    /// Number of characters
    pub length: usize,
    pub charset: Charset,
}

impl Default for StringOptions {
    fn default() -> Self {
        Self {
            seed: None,
            length: 8,
            charset: Charset::default(),
        }
    }
}

/// Draw `opts.length` characters, one step each.
///
/// Fails with [`RngError::EmptyDomain`] for an empty custom set, even when
/// `length` is zero.
pub fn string_in(rng: &mut Stream, opts: &StringOptions) -> Result<String, RngError> {
    let chars = opts.charset.chars();
    if chars.is_empty() {
        return Err(RngError::EmptyDomain);
    }
    (0..opts.length)
        .map(|_| rng.pick(&chars).copied())
        .collect()
}
