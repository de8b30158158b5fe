use super::{Point3, Similarity3, Vector3, TOLERANCE};

/// A finite line segment, as produced by unprojecting a pointer through the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Start point (the near plane for pointer rays).
    pub from: Point3,
    /// End point (the far plane for pointer rays).
    pub to: Point3,
}

impl Segment {
    /// Creates a segment between two points.
    #[must_use]
    pub fn new(from: Point3, to: Point3) -> Self {
        Self { from, to }
    }

    /// Returns the unnormalized direction `to - from`.
    #[must_use]
    pub fn direction(&self) -> Vector3 {
        self.to - self.from
    }

    /// Returns the point at parameter `t`, where `t = 0` is `from` and `t = 1` is `to`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3 {
        self.from + self.direction() * t
    }

    /// Maps both endpoints into the local frame of `transform`.
    ///
    /// Similarities are affine, so segment parameters are preserved.
    #[must_use]
    pub fn to_local(&self, transform: &Similarity3) -> Self {
        Self {
            from: transform.inverse_transform_point(&self.from),
            to: transform.inverse_transform_point(&self.to),
        }
    }
}

/// Intersects a segment with a triangle (Möller–Trumbore), from either side.
///
/// Returns the segment parameter `t` in `[0, 1]` of the hit, or `None`.
#[must_use]
pub fn segment_triangle_intersect(seg: &Segment, a: &Point3, b: &Point3, c: &Point3) -> Option<f64> {
    let dir = seg.direction();
    let edge1 = b - a;
    let edge2 = c - a;

    let h = dir.cross(&edge2);
    let det = edge1.dot(&h);
    // Segment parallel to the triangle plane
    if det.abs() < TOLERANCE {
        return None;
    }

    let inv_det = 1.0 / det;
    let s = seg.from - a;
    let u = inv_det * s.dot(&h);
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(&edge1);
    let v = inv_det * dir.dot(&q);
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = inv_det * edge2.dot(&q);
    (0.0..=1.0).contains(&t).then_some(t)
}
