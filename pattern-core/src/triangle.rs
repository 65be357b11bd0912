use crate::config::Config;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug)]
pub struct Triangle {
    pub pos: Vec2,
    pub side_length: f32,
    pub vel: Vec2,
    pub opacity: f32,
    pub created_at_ms: f64,
    pub fast_fade: bool,
}

impl Triangle {
    pub fn new(
        pos: Vec2,
        side_length: f32,
        fast_fade: bool,
        now_ms: f64,
        rng: &mut impl Rng,
    ) -> Self {
        Self {
            pos,
            side_length,
            vel: Vec2::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0)),
            opacity: 1.0,
            created_at_ms: now_ms,
            fast_fade,
        }
    }

    /// The three outline vertices: reference corner, apex, right corner.
    ///
    /// Surface coordinates are y-down, so the apex sits at a smaller y
    /// than the reference vertex.
    pub fn vertices(&self) -> [Vec2; 3] {
        [
            self.pos,
            Vec2::new(
                self.pos.x + self.side_length / 2.0,
                self.pos.y - (3.0_f32.sqrt() * self.side_length) / 2.0,
            ),
            Vec2::new(self.pos.x + self.side_length, self.pos.y),
        ]
    }

    /// Adds the velocity to the position and bounces off the surface edges.
    ///
    /// The horizontal test covers the full width of the triangle
    /// (`pos.x` on the left, `pos.x + side_length` on the right); the
    /// vertical test tracks only the reference vertex. The position is
    /// never clamped, only the velocity component is negated.
    pub fn advance(&mut self, bounds: Vec2) {
        self.pos += self.vel;

        if self.pos.x < 0.0 || self.pos.x + self.side_length > bounds.x {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y < 0.0 || self.pos.y > bounds.y {
            self.vel.y = -self.vel.y;
        }
    }

    /// Decrements the opacity by `Config::fade_step` once the triangle's
    /// age exceeds its fade delay. Before that the opacity stays at 1.
    pub fn update_opacity(&mut self, now_ms: f64, cfg: &Config) {
        let elapsed = now_ms - self.created_at_ms;
        let delay = if self.fast_fade {
            cfg.fast_fade_delay_ms
        } else {
            cfg.fade_delay_ms
        };
        if elapsed > delay {
            self.opacity -= cfg.fade_step;
        }
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_at(pos: Vec2, vel: Vec2) -> Triangle {
        Triangle {
            pos,
            side_length: 40.0,
            vel,
            opacity: 1.0,
            created_at_ms: 0.0,
            fast_fade: false,
        }
    }

    #[test]
    fn vertices_match_reference_apex_right_layout() {
        let tri = triangle_at(Vec2::new(100.0, 100.0), Vec2::ZERO);
        let [a, b, c] = tri.vertices();

        assert_eq!(a, Vec2::new(100.0, 100.0));
        // Apex is half a side to the right and sqrt(3)/2 of a side up.
        assert_eq!(b, Vec2::new(120.0, 100.0 - (3.0_f32.sqrt() * 40.0) / 2.0));
        assert_eq!(c, Vec2::new(140.0, 100.0));
    }

    #[test]
    fn advance_moves_by_velocity() {
        let mut tri = triangle_at(Vec2::new(200.0, 200.0), Vec2::new(0.5, -0.25));

        tri.advance(Vec2::new(800.0, 600.0));

        assert_eq!(tri.pos, Vec2::new(200.5, 199.75));
        assert_eq!(tri.vel, Vec2::new(0.5, -0.25));
    }

    #[test]
    fn bounce_flips_dx_when_crossing_left_edge() {
        let mut tri = triangle_at(Vec2::new(0.5, 300.0), Vec2::new(-1.0, 0.0));

        tri.advance(Vec2::new(800.0, 600.0));

        // The position is left where it landed; only the velocity flips.
        assert_eq!(tri.pos.x, -0.5);
        assert_eq!(tri.vel.x, 1.0);
    }

    #[test]
    fn bounce_flips_dx_when_right_extent_crosses_width() {
        // Reference vertex well inside the surface, but the right vertex
        // (pos.x + side_length) pokes past the width after the move.
        let mut tri = triangle_at(Vec2::new(759.5, 300.0), Vec2::new(1.0, 0.0));

        tri.advance(Vec2::new(800.0, 600.0));

        assert_eq!(tri.pos.x, 760.5);
        assert_eq!(tri.vel.x, -1.0);
    }

    #[test]
    fn bounce_flips_dy_on_top_and_bottom_edges() {
        let mut top = triangle_at(Vec2::new(300.0, 0.5), Vec2::new(0.0, -1.0));
        top.advance(Vec2::new(800.0, 600.0));
        assert_eq!(top.vel.y, 1.0);

        let mut bottom = triangle_at(Vec2::new(300.0, 599.5), Vec2::new(0.0, 1.0));
        bottom.advance(Vec2::new(800.0, 600.0));
        assert_eq!(bottom.vel.y, -1.0);
    }

    #[test]
    fn vertical_bounce_ignores_triangle_height() {
        // The apex is already above the top edge, but the reference vertex
        // is not, so no bounce happens.
        let mut tri = triangle_at(Vec2::new(300.0, 10.0), Vec2::new(0.0, -1.0));

        tri.advance(Vec2::new(800.0, 600.0));

        assert!(tri.vertices()[1].y < 0.0);
        assert_eq!(tri.vel.y, -1.0);
    }

    #[test]
    fn opacity_stays_at_one_before_fade_delay() {
        let cfg = Config::default();
        let mut tri = triangle_at(Vec2::new(0.0, 0.0), Vec2::ZERO);

        tri.update_opacity(20_000.0, &cfg);

        // Exactly at the delay nothing happens yet; the age must exceed it.
        assert_eq!(tri.opacity, 1.0);
    }

    #[test]
    fn opacity_decays_by_fixed_step_after_delay() {
        let cfg = Config::default();
        let mut tri = triangle_at(Vec2::new(0.0, 0.0), Vec2::ZERO);

        tri.update_opacity(20_001.0, &cfg);
        assert_eq!(tri.opacity, 1.0 - cfg.fade_step);

        tri.update_opacity(20_002.0, &cfg);
        assert_eq!(tri.opacity, 1.0 - 2.0 * cfg.fade_step);
    }

    #[test]
    fn fast_fade_uses_short_delay() {
        let cfg = Config::default();
        let mut fast = triangle_at(Vec2::new(0.0, 0.0), Vec2::ZERO);
        fast.fast_fade = true;
        let mut slow = triangle_at(Vec2::new(0.0, 0.0), Vec2::ZERO);

        fast.update_opacity(5_001.0, &cfg);
        slow.update_opacity(5_001.0, &cfg);

        assert!(fast.opacity < 1.0);
        assert_eq!(slow.opacity, 1.0);
    }

    #[test]
    fn opacity_never_increases_and_crosses_zero() {
        let cfg = Config::default();
        let mut tri = triangle_at(Vec2::new(0.0, 0.0), Vec2::ZERO);
        tri.fast_fade = true;

        let mut last = tri.opacity;
        for frame in 0..120 {
            tri.update_opacity(6_000.0 + frame as f64, &cfg);
            assert!(tri.opacity <= last);
            last = tri.opacity;
        }

        // 120 steps of 0.01 take the opacity below zero.
        assert!(tri.opacity < 0.0);
        assert!(!tri.is_visible());
    }

    #[test]
    fn new_randomizes_velocity_components_in_unit_range() {
        let mut rng = rand::rng();
        for _ in 0..50 {
            let tri = Triangle::new(Vec2::ZERO, 40.0, false, 0.0, &mut rng);
            assert!((-1.0..1.0).contains(&tri.vel.x));
            assert!((-1.0..1.0).contains(&tri.vel.y));
            assert_eq!(tri.opacity, 1.0);
        }
    }
}
