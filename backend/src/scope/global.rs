//! The ambient stream
//!
//! Every generator call without a local seed draws from here. There is one
//! ambient registry per process: a reseed on any thread is seen by every
//! other thread.
//!
//! # Ordering
//!
//! The values a caller observes depend on the order of unseeded calls. Code
//! that needs isolation between logical tasks must pass distinct local seeds
//! instead of relying on the ambient stream.
//!
//! # Leases
//!
//! [`with_current`] lends the stream out for the length of its closure.
//! Other threads wait until it comes back, so one closure always sees an
//! unbroken run of the sequence. On the lending thread itself:
//!
//! - a nested unseeded call fails with [`RngError::AmbientInUse`]
//! - a nested [`reseed`] or [`restore`] wins, and the closure's own draws
//!   are dropped when it returns
//! - a nested [`snapshot`] reports the position before the closure started
//!
//! Seeded calls never touch the registry and nest freely.

use std::sync::{Condvar, Mutex, MutexGuard, OnceLock, PoisonError};
use std::thread::{self, ThreadId};

use super::registry::{Registry, RegistrySnapshot};
use super::resolver::StreamSource;
use crate::rng::{RngError, Seed, Stream};

struct Ambient {
    registry: Registry,
    /// Bumped by every reseed and restore
    generation: u64,
    /// Thread currently holding the stream through [`with_current`]
    holder: Option<ThreadId>,
}

struct Slot {
    ambient: Mutex<Ambient>,
    returned: Condvar,
}

static SLOT: OnceLock<Slot> = OnceLock::new();

fn slot() -> &'static Slot {
    SLOT.get_or_init(|| Slot {
        ambient: Mutex::new(Ambient {
            registry: Registry::default(),
            generation: 0,
            holder: None,
        }),
        returned: Condvar::new(),
    })
}

/// Lock the ambient state once no other thread holds the lease.
///
/// The flag is true when the calling thread is the holder.
fn settled() -> (MutexGuard<'static, Ambient>, bool) {
    let slot = slot();
    let me = thread::current().id();
    let mut ambient = slot.ambient.lock().unwrap_or_else(PoisonError::into_inner);
    loop {
        let holder = ambient.holder;
        match holder {
            None => return (ambient, false),
            Some(holder) if holder == me => return (ambient, true),
            Some(_) => {
                ambient = slot
                    .returned
                    .wait(ambient)
                    .unwrap_or_else(PoisonError::into_inner);
            }
        }
    }
}

/// Stream lent out by [`with_current`], handed back on drop
struct Lease {
    stream: Stream,
    generation: u64,
}

impl Drop for Lease {
    fn drop(&mut self) {
        let slot = slot();
        let mut ambient = slot.ambient.lock().unwrap_or_else(PoisonError::into_inner);
        if ambient.generation == self.generation {
            *ambient.registry.current() = self.stream.clone();
        } else {
            tracing::debug!(
                state = self.stream.state(),
                "ambient stream replaced during lease, dropping leased draws"
            );
        }
        ambient.holder = None;
        drop(ambient);
        slot.returned.notify_all();
    }
}

/// Replace the ambient stream with one hashed from `seed`.
///
/// # Example
/// ```
/// use seeded_mock_core::scope::global;
///
/// global::reseed(42);
/// let first = global::with_current(|rng| rng.int(1, 6)).unwrap();
///
/// global::reseed(42);
/// assert_eq!(global::with_current(|rng| rng.int(1, 6)).unwrap(), first);
/// ```
pub fn reseed(seed: impl Into<Seed>) {
    let (mut ambient, _) = settled();
    ambient.registry.reseed(seed);
    ambient.generation = ambient.generation.wrapping_add(1);
}

/// Run `f` against the live ambient stream.
///
/// # Errors
/// [`RngError::AmbientInUse`] when called from inside another `with_current`
/// closure on the same thread; otherwise whatever `f` returns.
pub fn with_current<R>(
    f: impl FnOnce(&mut Stream) -> Result<R, RngError>,
) -> Result<R, RngError> {
    let mut lease = {
        let (mut ambient, held_here) = settled();
        if held_here {
            return Err(RngError::AmbientInUse);
        }
        ambient.holder = Some(thread::current().id());
        Lease {
            stream: ambient.registry.current().clone(),
            generation: ambient.generation,
        }
    };
    f(&mut lease.stream)
}

/// Capture the ambient stream position.
pub fn snapshot() -> RegistrySnapshot {
    let (ambient, _) = settled();
    ambient.registry.snapshot()
}

/// Restore a previously captured ambient stream position.
pub fn restore(snapshot: &RegistrySnapshot) {
    let (mut ambient, _) = settled();
    ambient.registry.restore(snapshot);
    ambient.generation = ambient.generation.wrapping_add(1);
}

/// [`StreamSource`] backed by the ambient registry
///
/// A local seed never touches the registry, so seeded calls may nest freely
/// inside an ambient closure.
#[derive(Debug, Clone, Copy, Default)]
pub struct Global;

impl StreamSource for Global {
    fn with_stream<R>(
        &mut self,
        local: Option<&Seed>,
        f: impl FnOnce(&mut Stream) -> Result<R, RngError>,
    ) -> Result<R, RngError> {
        match local {
            Some(seed) => f(&mut Stream::from_seed(seed.clone())),
            None => with_current(f),
        }
    }
}

/// Serializes unit tests that reseed or draw from the ambient stream.
#[cfg(test)]
pub(crate) fn serial() -> MutexGuard<'static, ()> {
    static SERIAL: Mutex<()> = Mutex::new(());
    SERIAL.lock().unwrap_or_else(PoisonError::into_inner)
}
