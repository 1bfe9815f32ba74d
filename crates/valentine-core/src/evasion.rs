//! Evasive decline control: where the "No" button jumps to.
//!
//! Offsets are drawn through the [`OffsetSource`] trait so the view can use
//! entropy while tests use a seed or a script.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default half-extent of the jump range, in CSS pixels.
pub const DEFAULT_OFFSET_EXTENT: f64 = 100.0;

/// Largest accepted half-extent, in CSS pixels.
pub const MAX_OFFSET_EXTENT: f64 = 10_000.0;

/// Visual displacement of the decline control from its resting place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DeclineOffset {
    pub x: f64,
    pub y: f64,
}

impl DeclineOffset {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// CSS `transform` value for this offset.
    pub fn css_translate(&self) -> String {
        format!("translate({:.1}px, {:.1}px)", self.x, self.y)
    }
}

/// Symmetric range `[-extent, extent]` applied to both axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct OffsetRange {
    extent: f64,
}

impl OffsetRange {
    /// Create a range, rejecting NaN and extents outside `0..=MAX_OFFSET_EXTENT`.
    pub fn new(extent: f64) -> Result<Self, ConfigError> {
        if (0.0..=MAX_OFFSET_EXTENT).contains(&extent) {
            Ok(Self { extent })
        } else {
            Err(ConfigError::InvalidOffsetRange(extent))
        }
    }

    pub fn extent(&self) -> f64 {
        self.extent
    }

    /// Whether both coordinates lie inside the range (bounds inclusive).
    pub fn contains(&self, offset: DeclineOffset) -> bool {
        offset.x.abs() <= self.extent && offset.y.abs() <= self.extent
    }

    /// Pull an offset back inside the range.
    pub fn clamp(&self, offset: DeclineOffset) -> DeclineOffset {
        DeclineOffset {
            x: offset.x.clamp(-self.extent, self.extent),
            y: offset.y.clamp(-self.extent, self.extent),
        }
    }
}

impl Default for OffsetRange {
    fn default() -> Self {
        Self {
            extent: DEFAULT_OFFSET_EXTENT,
        }
    }
}

impl TryFrom<f64> for OffsetRange {
    type Error = ConfigError;

    fn try_from(extent: f64) -> Result<Self, Self::Error> {
        Self::new(extent)
    }
}

impl From<OffsetRange> for f64 {
    fn from(range: OffsetRange) -> Self {
        range.extent
    }
}

/// Produces a fresh offset for every decline.
pub trait OffsetSource {
    /// Next offset. Must lie within `range`.
    fn next_offset(&mut self, range: OffsetRange) -> DeclineOffset;
}

impl<S: OffsetSource + ?Sized> OffsetSource for &mut S {
    fn next_offset(&mut self, range: OffsetRange) -> DeclineOffset {
        (**self).next_offset(range)
    }
}

impl<S: OffsetSource + ?Sized> OffsetSource for Box<S> {
    fn next_offset(&mut self, range: OffsetRange) -> DeclineOffset {
        (**self).next_offset(range)
    }
}

/// Two independent uniform draws per offset.
#[derive(Debug, Clone)]
pub struct RandomOffsets<R = StdRng> {
    rng: R,
}

impl RandomOffsets<StdRng> {
    /// Deterministic source for tests and reproducible sessions.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Source seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl<R: Rng> RandomOffsets<R> {
    /// Wrap an existing generator.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> OffsetSource for RandomOffsets<R> {
    fn next_offset(&mut self, range: OffsetRange) -> DeclineOffset {
        let extent = range.extent();
        let x = self.rng.random_range(-extent..=extent);
        let y = self.rng.random_range(-extent..=extent);
        DeclineOffset { x, y }
    }
}

/// Replays a fixed list of offsets, wrapping around at the end.
///
/// Scripted values are clamped into the requested range.
#[derive(Debug, Clone, Default)]
pub struct FixedOffsets {
    script: Vec<DeclineOffset>,
    cursor: usize,
}

impl FixedOffsets {
    pub fn new(script: impl IntoIterator<Item = DeclineOffset>) -> Self {
        Self {
            script: script.into_iter().collect(),
            cursor: 0,
        }
    }

    /// Number of offsets handed out so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl OffsetSource for FixedOffsets {
    fn next_offset(&mut self, range: OffsetRange) -> DeclineOffset {
        if self.script.is_empty() {
            return DeclineOffset::default();
        }
        let offset = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        range.clamp(offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_rejects_bad_extents() {
        assert!(OffsetRange::new(-1.0).is_err());
        assert!(OffsetRange::new(f64::NAN).is_err());
        assert!(OffsetRange::new(f64::INFINITY).is_err());
        assert!(OffsetRange::new(0.0).is_ok());
    }

    #[test]
    fn test_range_is_capped() {
        assert!(OffsetRange::new(MAX_OFFSET_EXTENT).is_ok());
        assert!(OffsetRange::new(MAX_OFFSET_EXTENT + 1.0).is_err());
        assert!(OffsetRange::new(1e308).is_err());
        assert!(OffsetRange::new(f64::MAX).is_err());
    }

    #[test]
    fn test_largest_range_draws_without_panicking() {
        let range = OffsetRange::new(MAX_OFFSET_EXTENT).unwrap();
        let mut source = RandomOffsets::seeded(12);
        for _ in 0..100 {
            assert!(range.contains(source.next_offset(range)));
        }
    }

    #[test]
    fn test_default_range_is_one_hundred() {
        assert_eq!(OffsetRange::default().extent(), 100.0);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let range = OffsetRange::new(10.0).unwrap();
        assert!(range.contains(DeclineOffset::new(10.0, -10.0)));
        assert!(!range.contains(DeclineOffset::new(10.5, 0.0)));
        assert!(!range.contains(DeclineOffset::new(0.0, -11.0)));
    }

    #[test]
    fn test_seeded_offsets_are_reproducible() {
        let range = OffsetRange::default();
        let mut a = RandomOffsets::seeded(42);
        let mut b = RandomOffsets::seeded(42);
        for _ in 0..20 {
            assert_eq!(a.next_offset(range), b.next_offset(range));
        }
    }

    #[test]
    fn test_random_offsets_stay_in_range() {
        let range = OffsetRange::new(25.0).unwrap();
        let mut source = RandomOffsets::seeded(9);
        for _ in 0..1000 {
            assert!(range.contains(source.next_offset(range)));
        }
    }

    #[test]
    fn test_random_offsets_use_both_signs() {
        let range = OffsetRange::default();
        let mut source = RandomOffsets::seeded(3);
        let draws: Vec<_> = (0..200).map(|_| source.next_offset(range)).collect();
        assert!(draws.iter().any(|o| o.x < 0.0));
        assert!(draws.iter().any(|o| o.x > 0.0));
        assert!(draws.iter().any(|o| o.y < 0.0));
        assert!(draws.iter().any(|o| o.y > 0.0));
    }

    #[test]
    fn test_zero_extent_pins_the_control() {
        let range = OffsetRange::new(0.0).unwrap();
        let mut source = RandomOffsets::seeded(1);
        assert_eq!(source.next_offset(range), DeclineOffset::default());
    }

    #[test]
    fn test_fixed_offsets_wrap_and_clamp() {
        let range = OffsetRange::new(50.0).unwrap();
        let mut source = FixedOffsets::new([
            DeclineOffset::new(10.0, 20.0),
            DeclineOffset::new(-80.0, 5.0),
        ]);
        assert_eq!(source.next_offset(range), DeclineOffset::new(10.0, 20.0));
        assert_eq!(source.next_offset(range), DeclineOffset::new(-50.0, 5.0));
        assert_eq!(source.next_offset(range), DeclineOffset::new(10.0, 20.0));
        assert_eq!(source.draws(), 3);
    }

    #[test]
    fn test_empty_script_yields_origin() {
        let mut source = FixedOffsets::default();
        assert_eq!(
            source.next_offset(OffsetRange::default()),
            DeclineOffset::default()
        );
    }

    #[test]
    fn test_css_translate() {
        assert_eq!(
            DeclineOffset::new(12.345, -7.0).css_translate(),
            "translate(12.3px, -7.0px)"
        );
    }

    #[test]
    fn test_range_serde_validates() {
        let range: OffsetRange = serde_json::from_str("60.0").unwrap();
        assert_eq!(range.extent(), 60.0);
        assert!(serde_json::from_str::<OffsetRange>("-5.0").is_err());
        assert!(serde_json::from_str::<OffsetRange>("1e308").is_err());
    }
}
