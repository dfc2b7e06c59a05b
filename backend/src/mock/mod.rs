//! Mock value generators
//!
//! Thin consumers of the stream core. Each generator comes in two layers:
//!
//! 1. `*_in(&mut Stream, ...)` does the drawing and knows nothing about
//!    seeds or scoping.
//! 2. A [`Faker`] method resolves the stream once from the options' `seed`
//!    (through its [`StreamSource`]) and calls the `*_in` function.
//!
//! Generators that call other generators go through the composition
//! protocol ([`crate::compose`]): one child seed per nested call.
//!
//! # Example
//!
//! ```
//! use seeded_mock_core::mock::{Faker, IntOptions, StringOptions};
//!
//! let mut faker = Faker::isolated(42);
//! let dice = IntOptions { min: 1.0, max: 6.0, ..Default::default() };
//! let roll = faker.int(&dice).unwrap();
//! assert!((1..=6).contains(&roll));
//!
//! // A local seed pins the value no matter what came before
//! let tag = StringOptions { seed: Some("tag".into()), ..Default::default() };
//! assert_eq!(faker.string(&tag).unwrap(), Faker::global().string(&tag).unwrap());
//! ```

pub mod collection;
pub mod color;
pub mod date;
pub mod identity;
pub mod numbers;
pub mod text;

pub use collection::{ArrayOptions, CollectionOptions, SampleOptions};
pub use color::{ColorOptions, Hsl, PaletteOptions, Rgb};
pub use date::DateOptions;
pub use identity::UuidOptions;
pub use numbers::{BoolOptions, FloatOptions, IntOptions};
pub use text::{Charset, StringOptions};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::compose;
use crate::rng::{RngError, Seed};
use crate::scope::{Global, Registry, StreamSource};

/// Generator front end over a [`StreamSource`]
pub struct Faker<S = Global> {
    source: S,
}

impl Faker<Global> {
    /// Draw unseeded values from the ambient stream.
    pub fn global() -> Self {
        Self { source: Global }
    }
}

impl Faker<Registry> {
    /// Draw unseeded values from a private registry seeded with `seed`.
    pub fn isolated(seed: impl Into<Seed>) -> Self {
        Self {
            source: Registry::new(seed),
        }
    }
}

impl<S: StreamSource> Faker<S> {
    /// Wrap any stream source, e.g. a [`Registry`] restored from a snapshot.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// The underlying source, for reseeding or snapshots.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Unwrap the source.
    pub fn into_source(self) -> S {
        self.source
    }

    /// Integer in `[opts.min, opts.max]`, see [`numbers::int_in`].
    pub fn int(&mut self, opts: &IntOptions) -> Result<i64, RngError> {
        self.source
            .with_stream(opts.seed.as_ref(), |rng| numbers::int_in(rng, opts))
    }

    /// Float in `[opts.min, opts.max)`, optionally truncated to `precision`.
    pub fn float(&mut self, opts: &FloatOptions) -> Result<f64, RngError> {
        self.source
            .with_stream(opts.seed.as_ref(), |rng| numbers::float_in(rng, opts))
    }

    /// `true` with probability `opts.probability`.
    pub fn boolean(&mut self, opts: &BoolOptions) -> Result<bool, RngError> {
        self.source
            .with_stream(opts.seed.as_ref(), |rng| numbers::boolean_in(rng, opts))
    }

    /// `opts.length` characters drawn from `opts.charset`.
    pub fn string(&mut self, opts: &StringOptions) -> Result<String, RngError> {
        self.source
            .with_stream(opts.seed.as_ref(), |rng| text::string_in(rng, opts))
    }

    /// One color as 8-bit channels.
    pub fn rgb(&mut self, opts: &ColorOptions) -> Result<Rgb, RngError> {
        self.source.with_stream(opts.seed.as_ref(), color::rgb_in)
    }

    /// One color as `#rrggbb`.
    pub fn hex_color(&mut self, opts: &ColorOptions) -> Result<String, RngError> {
        self.source.with_stream(opts.seed.as_ref(), color::hex_color_in)
    }

    /// One color as hue, saturation and lightness.
    pub fn hsl(&mut self, opts: &ColorOptions) -> Result<Hsl, RngError> {
        self.source.with_stream(opts.seed.as_ref(), color::hsl_in)
    }

    /// A v4-layout UUID built from drawn bytes.
    pub fn uuid(&mut self, opts: &UuidOptions) -> Result<Uuid, RngError> {
        self.source.with_stream(opts.seed.as_ref(), identity::uuid_in)
    }

    /// Instant between `opts.from` and `opts.to`, both inclusive.
    pub fn date_between(&mut self, opts: &DateOptions) -> Result<DateTime<Utc>, RngError> {
        self.source
            .with_stream(opts.seed.as_ref(), |rng| date::date_between_in(rng, opts))
    }

    /// Clone of one element of `items`.
    pub fn pick<T: Clone>(&mut self, items: &[T], opts: &CollectionOptions) -> Result<T, RngError> {
        self.source
            .with_stream(opts.seed.as_ref(), |rng| collection::pick_in(rng, items))
    }

    /// Shuffled copy of `items`.
    pub fn shuffle<T: Clone>(
        &mut self,
        items: &[T],
        opts: &CollectionOptions,
    ) -> Result<Vec<T>, RngError> {
        self.source
            .with_stream(opts.seed.as_ref(), |rng| collection::shuffle_in(rng, items))
    }

    /// `opts.count` distinct positions of `items`, in draw order.
    pub fn sample<T: Clone>(&mut self, items: &[T], opts: &SampleOptions) -> Result<Vec<T>, RngError> {
        self.source.with_stream(opts.seed.as_ref(), |rng| {
            collection::sample_in(rng, items, opts.count)
        })
    }

    /// Draw `n` child seeds from the stream resolved for `seed`.
    ///
    /// The building block for composite values: hand each seed to one
    /// nested generator call as its local seed.
    pub fn child_seeds(&mut self, seed: Option<&Seed>, n: usize) -> Result<Vec<Seed>, RngError> {
        self.source
            .with_stream(seed, |rng| Ok(compose::child_seeds(rng, n)))
    }

    /// Build `opts.length` elements, each from its own child seed.
    ///
    /// # Example
    /// ```
    /// use seeded_mock_core::mock::{ArrayOptions, Faker, UuidOptions};
    ///
    /// let opts = ArrayOptions { seed: Some(1.into()), length: 3 };
    /// let ids = Faker::global()
    ///     .array(&opts, |faker, seed| faker.uuid(&UuidOptions { seed: Some(seed) }))
    ///     .unwrap();
    /// assert_eq!(ids.len(), 3);
    /// ```
    pub fn array<T>(
        &mut self,
        opts: &ArrayOptions,
        mut element: impl FnMut(&mut Self, Seed) -> Result<T, RngError>,
    ) -> Result<Vec<T>, RngError> {
        self.child_seeds(opts.seed.as_ref(), opts.length)?
            .into_iter()
            .map(|seed| element(self, seed))
            .collect()
    }

    /// `opts.size` hex colors, one child seed each.
    pub fn palette(&mut self, opts: &PaletteOptions) -> Result<Vec<String>, RngError> {
        let array = ArrayOptions {
            seed: opts.seed.clone(),
            length: opts.size,
        };
        self.array(&array, |faker, seed| {
            faker.hex_color(&ColorOptions { seed: Some(seed) })
        })
    }
}
