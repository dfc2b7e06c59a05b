//! Per-call stream resolution

use std::ops::{Deref, DerefMut};

use crate::rng::{RngError, Seed, Stream};

/// The stream a single generator call is bound to
///
/// Either a stream owned by the call (local seed given) or a borrow of the
/// fallback stream (no local seed). Derefs to [`Stream`] in both cases.
#[derive(Debug)]
pub enum ScopedStream<'a> {
    /// Fresh stream from the caller's seed, dropped at the end of the call
    Local(Stream),
    /// The fallback stream, advanced in place
    Shared(&'a mut Stream),
}

impl ScopedStream<'_> {
    /// True if this call owns an isolated stream.
    pub fn is_local(&self) -> bool {
        matches!(self, ScopedStream::Local(_))
    }
}

impl Deref for ScopedStream<'_> {
    type Target = Stream;

    fn deref(&self) -> &Stream {
        match self {
            ScopedStream::Local(stream) => stream,
            ScopedStream::Shared(stream) => stream,
        }
    }
}

impl DerefMut for ScopedStream<'_> {
    fn deref_mut(&mut self) -> &mut Stream {
        match self {
            ScopedStream::Local(stream) => stream,
            ScopedStream::Shared(stream) => stream,
        }
    }
}

/// Select the stream for one call.
///
/// Presence is the test, not truthiness: `Some(Seed::Int(0))` and
/// `Some(Seed::Text(""))` both produce an isolated stream.
///
/// # Example
/// ```
/// use seeded_mock_core::rng::{Seed, Stream};
/// use seeded_mock_core::scope::resolve;
///
/// let mut fallback = Stream::new(1);
/// let first = resolve(Some(&Seed::from(7)), &mut fallback).next_f64();
///
/// fallback.next_u32();
/// let again = resolve(Some(&Seed::from(7)), &mut fallback).next_f64();
/// assert_eq!(first, again);
/// ```
pub fn resolve<'a>(local: Option<&Seed>, fallback: &'a mut Stream) -> ScopedStream<'a> {
    match local {
        Some(seed) => {
            tracing::trace!(seed = %seed, "resolved local stream");
            ScopedStream::Local(Stream::from_seed(seed.clone()))
        }
        None => {
            tracing::trace!(state = fallback.state(), "resolved shared stream");
            ScopedStream::Shared(fallback)
        }
    }
}

/// Anything that can hand a generator call its stream
///
/// Every public generator goes through [`StreamSource::with_stream`] exactly
/// once, passing its own optional seed, before drawing any value.
pub trait StreamSource {
    /// Run `f` against the stream resolved for `local`.
    ///
    /// # Errors
    /// Whatever `f` returns, plus any error the source raises while handing
    /// out its stream (see [`crate::scope::global`]).
    fn with_stream<R>(
        &mut self,
        local: Option<&Seed>,
        f: impl FnOnce(&mut Stream) -> Result<R, RngError>,
    ) -> Result<R, RngError>;
}

impl StreamSource for Stream {
    fn with_stream<R>(
        &mut self,
        local: Option<&Seed>,
        f: impl FnOnce(&mut Stream) -> Result<R, RngError>,
    ) -> Result<R, RngError> {
        let mut scoped = resolve(local, self);
        f(&mut *scoped)
    }
}
