//! Declarative descriptions of decorative motion.
//!
//! None of this touches [`ProposalState`](crate::ProposalState). The renderer
//! turns these values into CSS; layouts are generated once per session so a
//! re-render never reshuffles them.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Stagger between consecutive floating hearts, in seconds.
pub const HEART_STAGGER_S: f64 = 0.5;

/// A heart drifting from the bottom of the viewport to above the top, forever.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatingHeart {
    /// Horizontal start position, percent of viewport width.
    pub left_pct: f64,
    /// Sideways drift over one rise, in pixels.
    pub drift_px: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl FloatingHeart {
    /// Lay out `count` hearts with staggered start times.
    pub fn scatter<R: Rng>(rng: &mut R, count: usize) -> Vec<FloatingHeart> {
        (0..count)
            .map(|i| FloatingHeart {
                left_pct: rng.random_range(0.0..100.0),
                drift_px: rng.random_range(-50.0..50.0),
                duration_s: rng.random_range(8.0..12.0),
                delay_s: i as f64 * HEART_STAGGER_S,
            })
            .collect()
    }

    /// Inline style for the heart element.
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; --drift: {:.1}px; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.left_pct, self.drift_px, self.duration_s, self.delay_s
        )
    }
}

/// A looping keyframe animation applied to a decorative element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pulse {
    /// Keyframes name in the stylesheet.
    pub name: &'static str,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl Pulse {
    /// Intro cat bobbing up and down.
    pub const CAT_BOB: Pulse = Pulse::new("cat-bob", 2.0);
    /// Hearts perched on the intro cat.
    pub const HEART_BEAT: Pulse = Pulse::new("heart-beat", 1.5);
    pub const HEART_BEAT_LATE: Pulse = Pulse::new("heart-beat", 1.5).delayed(0.5);
    /// Question-screen cats rocking side to side.
    pub const CAT_SWAY_LEFT: Pulse = Pulse::new("cat-sway-left", 2.0);
    pub const CAT_SWAY_RIGHT: Pulse = Pulse::new("cat-sway-right", 2.0);
    /// Big heart between the cats.
    pub const HEART_HOP: Pulse = Pulse::new("heart-hop", 1.5);
    /// Accept button breathing.
    pub const ACCEPT_HEARTBEAT: Pulse = Pulse::new("accept-heartbeat", 1.0);
    /// Celebration cat.
    pub const CAT_WIGGLE: Pulse = Pulse::new("cat-wiggle", 2.0);
    /// Celebration title.
    pub const TITLE_BREATHE: Pulse = Pulse::new("title-breathe", 1.5);

    pub const fn new(name: &'static str, duration_s: f64) -> Self {
        Self {
            name,
            duration_s,
            delay_s: 0.0,
        }
    }

    pub const fn delayed(mut self, delay_s: f64) -> Self {
        self.delay_s = delay_s;
        self
    }

    /// Row of bouncing hearts, each starting `stagger_s` after the previous.
    pub fn heart_row(count: usize, stagger_s: f64) -> Vec<Pulse> {
        (0..count)
            .map(|i| Pulse::new("heart-bounce", 1.0).delayed(i as f64 * stagger_s))
            .collect()
    }

    /// CSS `animation` shorthand.
    pub fn css_animation(&self) -> String {
        format!(
            "{} {:.2}s ease-in-out {:.2}s infinite",
            self.name, self.duration_s, self.delay_s
        )
    }
}

/// One falling piece of the celebration burst.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfettiPiece {
    pub left_pct: f64,
    pub delay_s: f64,
    pub fall_s: f64,
    pub drift_px: f64,
    pub spin_deg: f64,
    pub size_px: f64,
    pub color: String,
}

impl ConfettiPiece {
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; width: {:.1}px; height: {:.1}px; background: {}; \
             --drift: {:.1}px; --spin: {:.0}deg; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.left_pct,
            self.size_px,
            self.size_px * 0.4,
            self.color,
            self.drift_px,
            self.spin_deg,
            self.fall_s,
            self.delay_s
        )
    }
}

/// A single, non-recycling confetti burst.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfettiBurst {
    pub pieces: Vec<ConfettiPiece>,
}

impl ConfettiBurst {
    /// Fallback color when the palette is empty.
    pub const FALLBACK_COLOR: &'static str = "#ff69b4";

    pub fn generate<R: Rng>(rng: &mut R, count: usize, palette: &[String]) -> Self {
        let pieces = (0..count)
            .map(|_| {
                let color = if palette.is_empty() {
                    Self::FALLBACK_COLOR.to_string()
                } else {
                    palette[rng.random_range(0..palette.len())].clone()
                };
                ConfettiPiece {
                    left_pct: rng.random_range(0.0..100.0),
                    delay_s: rng.random_range(0.0..0.8),
                    fall_s: rng.random_range(2.5..5.0),
                    drift_px: rng.random_range(-120.0..120.0),
                    spin_deg: rng.random_range(360.0..1080.0),
                    size_px: rng.random_range(6.0..12.0),
                    color,
                }
            })
            .collect();
        Self { pieces }
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Seconds until the last piece has landed.
    pub fn duration_s(&self) -> f64 {
        self.pieces
            .iter()
            .map(|p| p.delay_s + p.fall_s)
            .fold(0.0, f64::max)
    }
}

/// Damped spring used when the decline control jumps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringTransition {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Default for SpringTransition {
    fn default() -> Self {
        Self {
            stiffness: 300.0,
            damping: 10.0,
            mass: 1.0,
        }
    }
}

impl SpringTransition {
    fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Fraction of the travel the spring overshoots by; zero when not underdamped.
    pub fn overshoot(&self) -> f64 {
        let zeta = self.damping_ratio();
        if zeta >= 1.0 {
            0.0
        } else {
            (-zeta * std::f64::consts::PI / (1.0 - zeta * zeta).sqrt()).exp()
        }
    }

    /// Approximate settling time, clamped to a range that reads well on screen.
    pub fn settle_s(&self) -> f64 {
        let omega = (self.stiffness / self.mass).sqrt();
        let zeta = self.damping_ratio().max(f64::EPSILON);
        (4.0 / (zeta * omega)).clamp(0.2, 1.5)
    }

    /// CSS `transition` value approximating the spring with an overshooting bezier.
    pub fn css_transition(&self, property: &str) -> String {
        let y1 = (1.0 + 2.0 * self.overshoot()).min(2.5);
        format!(
            "{} {:.2}s cubic-bezier(0.34, {:.2}, 0.64, 1)",
            property,
            self.settle_s(),
            y1
        )
    }
}
