use crate::error::GeometryError;

use super::{Point3, Vector3};

/// Extents of a point set in the viewer's handedness.
///
/// The y axis is inverted relative to x and z: `top_right` carries the
/// *minimum* y and `bottom_left` the *maximum* y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// `(max x, min y, max z)`.
    pub top_right: Point3,
    /// `(min x, max y, min z)`.
    pub bottom_left: Point3,
    /// Extent along z.
    pub height: f64,
    /// Extent along x.
    pub width: f64,
    /// Arithmetic mean of all points.
    pub center: Point3,
    /// Largest distance from `center` to any point.
    pub radius: f64,
}

impl Bounds {
    /// Computes the bounds of a point set.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::EmptyPointSet`] if `points` is empty.
    pub fn new(points: &[Point3]) -> Result<Self, GeometryError> {
        let first = points.first().ok_or(GeometryError::EmptyPointSet)?;

        let mut min = *first;
        let mut max = *first;
        let mut sum = Vector3::zeros();
        for p in points {
            min = min.inf(p);
            max = max.sup(p);
            sum += p.coords;
        }

        #[allow(clippy::cast_precision_loss)]
        let center = Point3::from(sum / points.len() as f64);
        let radius = points
            .iter()
            .map(|p| nalgebra::distance(p, &center))
            .fold(0.0, f64::max);

        let top_right = Point3::new(max.x, min.y, max.z);
        let bottom_left = Point3::new(min.x, max.y, min.z);

        Ok(Self {
            top_right,
            bottom_left,
            height: top_right.z - bottom_left.z,
            width: top_right.x - bottom_left.x,
            center,
            radius,
        })
    }

    /// Returns `true` if `p` lies inside the box, widened by `tolerance`.
    #[must_use]
    pub fn contains(&self, p: &Point3, tolerance: f64) -> bool {
        let within = |v: f64, lo: f64, hi: f64| v >= lo - tolerance && v <= hi + tolerance;
        within(p.x, self.bottom_left.x, self.top_right.x)
            && within(p.y, self.top_right.y, self.bottom_left.y)
            && within(p.z, self.bottom_left.z, self.top_right.z)
    }
}
