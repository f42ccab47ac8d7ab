//! Property tests for the proximity classifier.
//!
//! Runs on host (x86_64) only — proptest is not available for ESP32
//! targets.  On ESP32, these tests are compiled out.

#![cfg(not(target_os = "espidf"))]

use proptest::prelude::*;
use rangeglow::proximity::{ProximityTier, TIER_PATTERNS, classify};

/// Interval boundaries, farthest first.  A distance's tier index equals
/// the number of boundaries it does not exceed — an independent
/// formulation of the classification table used to cross-check
/// `classify`.
const BOUNDARIES_CM: [f64; 5] = [100.0, 80.0, 60.0, 40.0, 20.0];

fn expected_index(d: f64) -> usize {
    BOUNDARIES_CM.iter().filter(|b| d <= **b).count()
}

proptest! {
    /// Every distance lands in exactly one tier, and that tier agrees
    /// with the interval table: the six intervals partition the domain
    /// with no gap and no overlap.
    #[test]
    fn classification_is_total_and_matches_intervals(d in -10.0f64..10_000.0) {
        let tier = classify(d);
        prop_assert!(tier.index() < ProximityTier::COUNT);
        prop_assert_eq!(tier.index(), expected_index(d));
    }

    /// Tier index never increases as distance grows: moving away from
    /// the sensor can only hold or lower the tier.
    #[test]
    fn tier_index_is_monotonic_in_distance(
        a in 0.0f64..500.0,
        b in 0.0f64..500.0,
    ) {
        let (near, far) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(classify(near).index() >= classify(far).index());
    }

    /// Rounding to two decimals (as the sensor driver does) never moves
    /// a reading across more than one tier boundary step.
    #[test]
    fn classification_is_stable_under_reading_jitter(d in 0.0f64..200.0) {
        let rounded = (d * 100.0).round() / 100.0;
        let diff = classify(d).index().abs_diff(classify(rounded).index());
        prop_assert!(diff <= 1);
    }
}

#[test]
fn boundary_values_belong_to_the_nearer_tier() {
    for (i, b) in BOUNDARIES_CM.iter().enumerate() {
        assert_eq!(
            classify(*b).index(),
            i + 1,
            "boundary {b} cm must fall into the nearer tier"
        );
    }
}

#[test]
fn patterns_fill_in_from_the_first_lamp() {
    // Every tier lights a (possibly empty) prefix of the panel — no gaps
    // with a dark lamp between two lit ones.
    for pattern in TIER_PATTERNS {
        let mut seen_dark = false;
        for slot in pattern {
            if slot.is_none() {
                seen_dark = true;
            } else {
                assert!(!seen_dark, "lit lamp after a dark one in {pattern:?}");
            }
        }
    }
}
