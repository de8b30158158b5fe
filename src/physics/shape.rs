use crate::math::{segment_triangle_intersect, Point3, Segment};
use crate::mesh::FaceFragment;
use crate::tessellation::Triangle;

/// A convex collision shape given by its points and boundary triangles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConvexShape {
    points: Vec<Point3>,
    triangles: Vec<Triangle>,
}

impl ConvexShape {
    /// Derives a shape directly from a fragment's triangle data.
    #[must_use]
    pub fn from_fragment(fragment: &FaceFragment) -> Self {
        Self {
            points: fragment.positions().to_vec(),
            triangles: fragment.indices().to_vec(),
        }
    }

    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    #[must_use]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Returns the smallest segment parameter at which `segment` crosses the shape.
    #[must_use]
    pub fn cast_segment(&self, segment: &Segment) -> Option<f64> {
        self.triangles
            .iter()
            .filter_map(|&[a, b, c]| {
                let (a, b, c) = (
                    self.points.get(a as usize)?,
                    self.points.get(b as usize)?,
                    self.points.get(c as usize)?,
                );
                segment_triangle_intersect(segment, a, b, c)
            })
            .min_by(f64::total_cmp)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::mesh::BuildFragment;
    use crate::palette::Color;

    #[test]
    fn cast_through_hexagon() {
        let hexagon: Vec<Point3> = (0..6)
            .map(|i| {
                let a = f64::from(i) * std::f64::consts::TAU / 6.0;
                Point3::new(a.cos(), a.sin(), 2.0)
            })
            .collect();
        let fragment = BuildFragment::new(&hexagon, 0, Color::rgb(1.0, 1.0, 1.0))
            .execute()
            .unwrap();
        let shape = ConvexShape::from_fragment(&fragment);
        assert_eq!(shape.triangles().len(), 4);

        let seg = Segment::new(Point3::new(0.1, -0.2, 6.0), Point3::new(0.1, -0.2, -2.0));
        assert_relative_eq!(shape.cast_segment(&seg).unwrap(), 0.5);

        let miss = Segment::new(Point3::new(1.5, 0.0, 6.0), Point3::new(1.5, 0.0, -2.0));
        assert!(shape.cast_segment(&miss).is_none());
    }
}
