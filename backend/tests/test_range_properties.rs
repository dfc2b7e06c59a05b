//! Property tests for the stream convenience operations

use proptest::prelude::*;
use seeded_mock_core::{RngError, Stream};

proptest! {
    #[test]
    fn int_stays_within_inclusive_bounds(state in any::<u32>(), a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
        let mut rng = Stream::new(state);
        let v = rng.int(a as f64, b as f64).unwrap();
        prop_assert!(v >= a.min(b) && v <= a.max(b), "{} outside [{}, {}]", v, a.min(b), a.max(b));
    }

    #[test]
    fn int_is_symmetric_in_bound_order(state in any::<u32>(), a in -10_000i64..10_000, b in -10_000i64..10_000) {
        let mut x = Stream::new(state);
        let mut y = Stream::new(state);
        prop_assert_eq!(x.int(a as f64, b as f64).unwrap(), y.int(b as f64, a as f64).unwrap());
    }

    #[test]
    fn int_degenerate_range_is_constant(state in any::<u32>(), n in -1_000_000i64..1_000_000) {
        let mut rng = Stream::new(state);
        prop_assert_eq!(rng.int(n as f64, n as f64).unwrap(), n);
    }

    #[test]
    fn float_is_half_open(state in any::<u32>(), a in -1.0e3f64..1.0e3, width in 1.0f64..1.0e6) {
        let mut rng = Stream::new(state);
        let v = rng.float(a, a + width).unwrap();
        prop_assert!(v >= a && v < a + width, "{} outside [{}, {})", v, a, a + width);
    }

    #[test]
    fn float_is_half_open_at_large_magnitude(state in any::<u32>(), a in -1.0e18f64..1.0e18, ulps in 1u64..16) {
        let width = a.abs().max(1.0) * f64::EPSILON * ulps as f64;
        let max = a + width;
        prop_assume!(max > a);
        let mut rng = Stream::new(state);
        let v = rng.float(a, max).unwrap();
        prop_assert!(v >= a && v < max, "{} outside [{}, {})", v, a, max);
    }

    #[test]
    fn int_rejects_bounds_beyond_exact_range(state in any::<u32>(), big in 1.0e16f64..1.0e300, small in -1.0e6f64..1.0e6) {
        let mut rng = Stream::new(state);
        prop_assert!(matches!(rng.int(small, big), Err(RngError::InvalidArgument { .. })), "expected InvalidArgument from int(small, big)");
        prop_assert!(matches!(rng.int(-big, small), Err(RngError::InvalidArgument { .. })), "expected InvalidArgument from int(-big, small)");
        prop_assert_eq!(rng.state(), state);
    }

    #[test]
    fn pick_returns_member(state in any::<u32>(), items in proptest::collection::vec(any::<i32>(), 1..50)) {
        let mut rng = Stream::new(state);
        let picked = *rng.pick(&items).unwrap();
        prop_assert!(items.contains(&picked));
    }

    #[test]
    fn failures_do_not_advance(state in any::<u32>(), finite in -1.0e9f64..1.0e9) {
        let mut rng = Stream::new(state);
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            prop_assert!(matches!(rng.int(bad, finite), Err(RngError::InvalidArgument { .. })), "expected InvalidArgument from int(bad, finite)");
            prop_assert!(matches!(rng.float(finite, bad), Err(RngError::InvalidArgument { .. })), "expected InvalidArgument from float(finite, bad)");
        }
        let empty: [u8; 0] = [];
        prop_assert_eq!(rng.pick(&empty), Err(RngError::EmptyDomain));
        prop_assert_eq!(rng.state(), state);
    }

    #[test]
    fn next_f64_is_unit_interval(state in any::<u32>()) {
        let mut rng = Stream::new(state);
        for _ in 0..32 {
            let v = rng.next_f64();
            prop_assert!((0.0..1.0).contains(&v));
        }
    }
}
