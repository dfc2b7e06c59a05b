//! Numeric mock values

use serde::{Deserialize, Serialize};

use crate::rng::{RngError, Seed, Stream};

/// Options for [`int_in`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntOptions {
    /// Local seed; `None` draws from the ambient stream
    pub seed: Option<Seed>,
    /// Lower bound, inclusive (rounded up)
    pub min: f64,
    /// Upper bound, inclusive (rounded down)
    pub max: f64,
}

impl Default for IntOptions {
    fn default() -> Self {
        Self {
            seed: None,
            min: 0.0,
            max: 100.0,
        }
    }
}

/// Options for [`float_in`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatOptions {
    pub seed: Option<Seed>,
    /// Lower bound, inclusive
    pub min: f64,
    /// Upper bound, exclusive
    pub max: f64,
    /// Keep at most this many decimals (truncated toward `min`)
    pub precision: Option<u32>,
}

impl Default for FloatOptions {
    fn default() -> Self {
        Self {
            seed: None,
            min: 0.0,
            max: 1.0,
            precision: None,
        }
    }
}

/// Options for [`boolean_in`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoolOptions {
    pub seed: Option<Seed>,
    /// Probability of `true`, in `[0, 1]`
    pub probability: f64,
}

impl Default for BoolOptions {
    fn default() -> Self {
        Self {
            seed: None,
            probability: 0.5,
        }
    }
}

pub fn int_in(rng: &mut Stream, opts: &IntOptions) -> Result<i64, RngError> {
    rng.int(opts.min, opts.max)
}

pub fn float_in(rng: &mut Stream, opts: &FloatOptions) -> Result<f64, RngError> {
    let value = rng.float(opts.min, opts.max)?;
    Ok(match opts.precision {
        Some(decimals) => {
            let factor = 10f64.powi(decimals as i32);
            ((value * factor).floor() / factor).max(opts.min.min(opts.max))
        }
        None => value,
    })
}

pub fn boolean_in(rng: &mut Stream, opts: &BoolOptions) -> Result<bool, RngError> {
    if !(0.0..=1.0).contains(&opts.probability) {
        return Err(RngError::InvalidOption(format!(
            "probability must be within [0, 1], got {}",
            opts.probability
        )));
    }
    Ok(rng.next_f64() < opts.probability)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_defaults() {
        let mut rng = Stream::new(42);
        for _ in 0..100 {
            let v = int_in(&mut rng, &IntOptions::default()).unwrap();
            assert!((0..=100).contains(&v));
        }
    }

    #[test]
    fn test_float_precision_truncates() {
        let mut rng = Stream::new(42);
        let opts = FloatOptions {
            precision: Some(2),
            ..Default::default()
        };
        // 0.6011037519201636 → 0.6
        assert_eq!(float_in(&mut rng, &opts).unwrap(), 0.6);
    }

    #[test]
    fn test_boolean_extremes() {
        let mut rng = Stream::new(1);
        let never = BoolOptions {
            probability: 0.0,
            ..Default::default()
        };
        let always = BoolOptions {
            probability: 1.0,
            ..Default::default()
        };
        for _ in 0..100 {
            assert!(!boolean_in(&mut rng, &never).unwrap());
            assert!(boolean_in(&mut rng, &always).unwrap());
        }
    }

    #[test]
    fn test_boolean_rejects_bad_probability() {
        let mut rng = Stream::new(1);
        for p in [-0.1, 1.5, f64::NAN] {
            let opts = BoolOptions {
                probability: p,
                ..Default::default()
            };
            assert!(matches!(
                boolean_in(&mut rng, &opts),
                Err(RngError::InvalidOption(_))
            ));
        }
        assert_eq!(rng.state(), 1);
    }

    #[test]
    fn test_options_from_partial_json() {
        let opts: IntOptions = serde_json::from_str(r#"{"max": 6, "min": 1, "seed": "dice"}"#).unwrap();
        assert_eq!(opts.seed, Some(Seed::from("dice")));
        assert_eq!(opts.min, 1.0);

        let opts: FloatOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, FloatOptions::default());
    }
}
