//! The live collection of triangles and its population rules.
//!
//! Two operations mutate the collection outside of per-triangle updates:
//! 1. [`TriangleField::spawn`] — inserts a click-spawned triangle, evicting
//!    the oldest one first when the population is at its cap and marking
//!    near-cap spawns as fast-fading.
//! 2. [`TriangleField::sweep_faded`] — drops every triangle whose opacity
//!    has decayed to zero or below; runs once per frame after drawing.

use crate::{config::Config, triangle::Triangle};
use glam::Vec2;
use rand::Rng;

/// Ordered collection of live triangles.
///
/// Insertion order is creation order: the front of `triangles` is always
/// the oldest live triangle, which is the one evicted at the cap.
#[derive(Debug, Default)]
pub struct TriangleField {
    pub triangles: Vec<Triangle>,
}

impl TriangleField {
    pub fn new() -> Self {
        Self {
            triangles: Vec::new(),
        }
    }

    /// Spawns a triangle at a click position.
    ///
    /// In order:
    ///
    /// 1. If the live count is already at `cfg.max_live`, the oldest
    ///    triangle (front of the collection) is removed, so the population
    ///    is capped immediately after insertion.
    /// 2. The fast-fade flag is computed **after** that eviction: spawns
    ///    that still see `cfg.fast_fade_at` or more live triangles fade on
    ///    the short delay.
    /// 3. A new triangle is appended with `cfg.side_length`, a random
    ///    velocity, opacity 1 and the given timestamp.
    ///
    /// Any position is accepted; an off-surface spawn is pulled back in by
    /// the bounce rule once it moves.
    ///
    /// ### Parameters
    /// - `pos` - Spawn position in surface coordinates (the reference vertex).
    /// - `now_ms` - Current host time in milliseconds.
    /// - `cfg` - Animation constants (cap, thresholds, side length).
    /// - `rng` - Random number generator for the velocity components.
    pub fn spawn(&mut self, pos: Vec2, now_ms: f64, cfg: &Config, rng: &mut impl Rng) {
        if self.triangles.len() >= cfg.max_live {
            self.triangles.remove(0);
        }

        let fast_fade = self.triangles.len() >= cfg.fast_fade_at;
        self.triangles
            .push(Triangle::new(pos, cfg.side_length, fast_fade, now_ms, rng));
    }

    /// Retains only triangles that are still visible (opacity strictly
    /// greater than zero). A triangle dropped here is never drawn again.
    pub fn sweep_faded(&mut self) {
        self.triangles.retain(|t| t.is_visible());
    }
}
