//! Identifier mock values

use serde::{Deserialize, Serialize};
use uuid::{Builder, Uuid};

use crate::rng::{RngError, Seed, Stream};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UuidOptions {
    pub seed: Option<Seed>,
}

/// A version-4 layout UUID whose 122 random bits come from the stream.
///
/// Sixteen steps are consumed, one per byte; the version and variant bits
/// are then overwritten.
pub fn uuid_in(rng: &mut Stream) -> Result<Uuid, RngError> {
    let mut bytes = [0u8; 16];
    for byte in bytes.iter_mut() {
        *byte = rng.int(0, 255)? as u8;
    }
    Ok(Builder::from_random_bytes(bytes).into_uuid())
}
