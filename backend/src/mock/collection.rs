//! Selection and reordering over caller-supplied items

use serde::{Deserialize, Serialize};

use crate::rng::{RngError, Seed, Stream};

/// Options for [`pick_in`] and [`shuffle_in`]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionOptions {
    pub seed: Option<Seed>,
}

/// Options for [`sample_in`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleOptions {
    pub seed: Option<Seed>,
    /// Number of distinct positions to take
    pub count: usize,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self { seed: None, count: 1 }
    }
}

/// Options for a composed collection of nested calls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrayOptions {
    pub seed: Option<Seed>,
    /// Number of elements, one child seed each
    pub length: usize,
}

impl Default for ArrayOptions {
    fn default() -> Self {
        Self {
            seed: None,
            length: 10,
        }
    }
}

pub fn pick_in<T: Clone>(rng: &mut Stream, items: &[T]) -> Result<T, RngError> {
    rng.pick(items).cloned()
}

/// Fisher–Yates, drawing `j` in `[0, i]` for `i` from the top down.
pub fn shuffle_in<T: Clone>(rng: &mut Stream, items: &[T]) -> Result<Vec<T>, RngError> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.int(0, i as f64)? as usize;
        out.swap(i, j);
    }
    Ok(out)
}

/// `count` elements from distinct positions, in draw order.
pub fn sample_in<T: Clone>(rng: &mut Stream, items: &[T], count: usize) -> Result<Vec<T>, RngError> {
    if count > items.len() {
        return Err(RngError::InvalidOption(format!(
            "cannot sample {} of {} items",
            count,
            items.len()
        )));
    }
    let mut pool = items.to_vec();
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let idx = rng.index(pool.len());
        out.push(pool.swap_remove(idx));
    }
    Ok(out)
}
