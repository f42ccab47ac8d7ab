//! Distance-to-tier classification and tier color patterns.
//!
//! Six ordered proximity tiers partition the distance domain in 20 cm
//! steps below one meter.  Each tier carries a fixed color assignment for
//! the three indicator lamps, held in a const table — a static dispatch
//! table, not a runtime-mutable registry.

use crate::drivers::indicator::Color;

/// Discrete proximity buckets, ordered farthest (0) to nearest (5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum ProximityTier {
    /// Nothing within a meter of the sensor.
    Clear = 0,
    /// 80–100 cm.
    VeryFar = 1,
    /// 60–80 cm.
    Far = 2,
    /// 40–60 cm.
    Mid = 3,
    /// 20–40 cm.
    Near = 4,
    /// Within 20 cm of the sensor.
    VeryNear = 5,
}

impl ProximityTier {
    pub const COUNT: usize = 6;

    /// Tier index, 0 = farthest .. 5 = nearest.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Color assignment for the three indicators at this tier.
    pub const fn pattern(self) -> TierPattern {
        TIER_PATTERNS[self as usize]
    }
}

/// Per-indicator color selection for one tier.  `None` shuts the lamp off.
pub type TierPattern = [Option<Color>; 3];

/// Tier → indicator colors.  Lamps light up one by one as an object
/// approaches, then the whole panel sweeps to red inside 20 cm.
pub const TIER_PATTERNS: [TierPattern; ProximityTier::COUNT] = [
    [None, None, None],
    [Some(Color::Green), None, None],
    [Some(Color::Blue), Some(Color::Green), None],
    [Some(Color::Red), Some(Color::Blue), Some(Color::Green)],
    [Some(Color::Red), Some(Color::Red), Some(Color::Blue)],
    [Some(Color::Red), Some(Color::Red), Some(Color::Red)],
];

/// Classify a distance (centimeters) into its proximity tier.
///
/// Half-open 20 cm intervals, first match wins; every value at or below
/// 20 cm (including degenerate non-positive readings) is [`VeryNear`].
/// Total over the whole distance domain — no value is unclassified.
///
/// [`VeryNear`]: ProximityTier::VeryNear
pub fn classify(distance_cm: f64) -> ProximityTier {
    if distance_cm > 100.0 {
        ProximityTier::Clear
    } else if distance_cm > 80.0 {
        ProximityTier::VeryFar
    } else if distance_cm > 60.0 {
        ProximityTier::Far
    } else if distance_cm > 40.0 {
        ProximityTier::Mid
    } else if distance_cm > 20.0 {
        ProximityTier::Near
    } else {
        ProximityTier::VeryNear
    }
}
