//! CLI command implementations
//!
//! Every command maps onto one generator of the mock layer. Values are
//! written as JSON lines.

use std::io::Write;

use chrono::{DateTime, Utc};
use seeded_mock_core::mock::{
    BoolOptions, Charset, CollectionOptions, ColorOptions, DateOptions, Faker,
    FloatOptions, IntOptions, StringOptions, UuidOptions,
};
use seeded_mock_core::{global, Seed, StreamSource};
use serde_json::Value;
use tracing::{debug, info};

use crate::{CharsetArg, CliError, ColorFormat, Result};

/// Seeding and repetition shared by all commands
#[derive(Debug, Clone, Default)]
pub struct Invocation {
    /// Reseed the ambient stream first
    pub seed: Option<Seed>,
    /// Isolate the invocation; each value gets a child seed of this one
    pub local_seed: Option<Seed>,
    pub count: usize,
}

/// A single generator call, minus its seed
#[derive(Debug, Clone)]
pub enum Request {
    Int { min: f64, max: f64 },
    Float { min: f64, max: f64, precision: Option<u32> },
    Bool { probability: f64 },
    String { length: usize, charset: Charset },
    Color { format: ColorFormat },
    Uuid,
    Date { from: DateTime<Utc>, to: DateTime<Utc> },
    Pick { items: Vec<String> },
}

impl Request {
    fn generate<S: StreamSource>(&self, faker: &mut Faker<S>, seed: Option<Seed>) -> Result<Value> {
        let value = match self {
            Request::Int { min, max } => Value::from(faker.int(&IntOptions {
                seed,
                min: *min,
                max: *max,
            })?),
            Request::Float {
                min,
                max,
                precision,
            } => Value::from(faker.float(&FloatOptions {
                seed,
                min: *min,
                max: *max,
                precision: *precision,
            })?),
            Request::Bool { probability } => Value::from(faker.boolean(&BoolOptions {
                seed,
                probability: *probability,
            })?),
            Request::String { length, charset } => Value::from(faker.string(&StringOptions {
                seed,
                length: *length,
                charset: charset.clone(),
            })?),
            Request::Color { format } => {
                let opts = ColorOptions { seed };
                match format {
                    ColorFormat::Hex => Value::from(faker.hex_color(&opts)?),
                    ColorFormat::Rgb => serde_json::to_value(faker.rgb(&opts)?)?,
                    ColorFormat::Hsl => serde_json::to_value(faker.hsl(&opts)?)?,
                }
            }
            Request::Uuid => Value::from(faker.uuid(&UuidOptions { seed })?.to_string()),
            Request::Date { from, to } => Value::from(
                faker
                    .date_between(&DateOptions {
                        seed,
                        from: *from,
                        to: *to,
                    })?
                    .to_rfc3339(),
            ),
            Request::Pick { items } => {
                Value::from(faker.pick(items, &CollectionOptions { seed })?)
            }
        };
        Ok(value)
    }
}

/// Generate `invocation.count` values and write one JSON line each.
///
/// With a local seed the values are composed: line `i` depends only on the
/// local seed and `i`, not on `count`.
pub fn run(invocation: &Invocation, request: &Request, out: &mut impl Write) -> Result<()> {
    if let Some(seed) = &invocation.seed {
        info!(seed = %seed, "reseeding ambient stream");
        global::reseed(seed.clone());
    }

    let mut faker = Faker::global();
    let values = match &invocation.local_seed {
        Some(local) => {
            faker
                .child_seeds(Some(local), invocation.count)?
                .into_iter()
                .map(|seed| request.generate(&mut faker, Some(seed)))
                .collect::<Result<Vec<_>>>()?
        }
        None => (0..invocation.count)
            .map(|_| request.generate(&mut faker, None))
            .collect::<Result<Vec<_>>>()?,
    };

    debug!(count = values.len(), "generated values");
    for value in values {
        serde_json::to_writer(&mut *out, &value)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Integers become integer seeds; anything else is a text seed.
pub fn parse_seed(raw: &str) -> Seed {
    match raw.parse::<i64>() {
        Ok(value) => Seed::Int(value),
        Err(_) => Seed::from(raw),
    }
}

pub fn parse_instant(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| CliError::InvalidArgument(format!("{}: {}", raw, e)))
}

pub fn charset(arg: CharsetArg, chars: Option<String>) -> Result<Charset> {
    Ok(match (arg, chars) {
        (CharsetArg::Alphanumeric, None) => Charset::Alphanumeric,
        (CharsetArg::Alpha, None) => Charset::Alpha,
        (CharsetArg::Numeric, None) => Charset::Numeric,
        (CharsetArg::Hex, None) => Charset::Hex,
        (CharsetArg::Custom, Some(chars)) => Charset::Custom(chars),
        (CharsetArg::Custom, None) => {
            return Err(CliError::InvalidArgument(
                "--charset custom requires --chars".to_string(),
            ))
        }
        (_, Some(_)) => {
            return Err(CliError::InvalidArgument(
                "--chars is only valid with --charset custom".to_string(),
            ))
        }
    })
}

#[cfg(test)]
mod tests {
    use std::sync::{Mutex, MutexGuard, PoisonError};

    use super::*;

    /// `run` reseeds the ambient stream, which every test thread shares
    static AMBIENT: Mutex<()> = Mutex::new(());

    fn ambient() -> MutexGuard<'static, ()> {
        AMBIENT.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lines(invocation: &Invocation, request: &Request) -> Vec<String> {
        let mut out = Vec::new();
        run(invocation, request, &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_parse_seed() {
        assert_eq!(parse_seed("42"), Seed::Int(42));
        assert_eq!(parse_seed("-3"), Seed::Int(-3));
        assert_eq!(parse_seed("42a"), Seed::from("42a"));
    }

    #[test]
    fn test_reseeded_dice() {
        let _ambient = ambient();
        let invocation = Invocation {
            seed: Some(Seed::Int(42)),
            local_seed: None,
            count: 2,
        };
        let dice = Request::Int { min: 1.0, max: 6.0 };
        assert_eq!(lines(&invocation, &dice), vec!["4", "3"]);
    }

    #[test]
    fn test_local_seed_lines_are_prefix_stable() {
        let request = Request::String {
            length: 10,
            charset: Charset::Hex,
        };
        let short = Invocation {
            seed: None,
            local_seed: Some(Seed::from("rows")),
            count: 2,
        };
        let long = Invocation {
            count: 5,
            ..short.clone()
        };
        assert_eq!(lines(&short, &request)[..], lines(&long, &request)[..2]);
    }

    #[test]
    fn test_pick_outputs_json_strings() {
        let _ambient = ambient();
        let invocation = Invocation {
            seed: Some(Seed::from("pick")),
            local_seed: None,
            count: 3,
        };
        let request = Request::Pick {
            items: vec!["a".to_string(), "b".to_string()],
        };
        for line in lines(&invocation, &request) {
            assert!(line == "\"a\"" || line == "\"b\"", "{}", line);
        }
    }

    #[test]
    fn test_custom_charset_requires_chars() {
        assert!(charset(CharsetArg::Custom, None).is_err());
        assert!(charset(CharsetArg::Hex, Some("x".to_string())).is_err());
        assert_eq!(
            charset(CharsetArg::Custom, Some("xy".to_string())).unwrap(),
            Charset::Custom("xy".to_string())
        );
    }

    #[test]
    fn test_parse_instant_rejects_garbage() {
        assert!(parse_instant("yesterday").is_err());
        assert_eq!(
            parse_instant("2024-02-29T12:00:00+02:00").unwrap().to_rfc3339(),
            "2024-02-29T10:00:00+00:00"
        );
    }
}
