//! Vertex-to-vertex connection lines between triangle pairs.

use crate::triangle::Triangle;
use glam::Vec2;

/// A single connection line between a vertex of one triangle and a vertex
/// of another, with the alpha it should be stroked at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Vec2,
    pub to: Vec2,
    pub alpha: f32,
}

/// Builds the connection segments for one unordered pair of triangles.
///
/// Every vertex of `a` is joined to every vertex of `b`, giving exactly
/// 3 × 3 = 9 segments, ordered with `a`'s vertices as the outer loop. All
/// nine share one alpha: the minimum of the two triangles' opacities as
/// they stand when this is called.
///
/// The caller is responsible for visiting each pair once per frame.
///
/// ### Parameters
/// - `a` - The earlier triangle in collection order.
/// - `b` - The later triangle.
///
/// ### Returns
/// The nine segments joining `a`'s vertices to `b`'s.
pub fn segments(a: &Triangle, b: &Triangle) -> [Segment; 9] {
    let alpha = a.opacity.min(b.opacity);
    let va = a.vertices();
    let vb = b.vertices();

    std::array::from_fn(|i| Segment {
        from: va[i / 3],
        to: vb[i % 3],
        alpha,
    })
}
