use crate::error::MeshError;
use crate::math::{Point3, Vector3, TOLERANCE};
use crate::palette::Color;
use crate::tessellation::{triangle_count, triangulate};

use super::FaceFragment;

/// Builds the fragment of one face from its ordered world-space vertices.
///
/// Normals point radially from the shape's origin, which holds for every
/// supported shape because each one is centered there.
pub struct BuildFragment<'a> {
    vertices: &'a [Point3],
    face_id: u32,
    color: Color,
}

impl<'a> BuildFragment<'a> {
    /// Creates a new `BuildFragment` operation.
    #[must_use]
    pub fn new(vertices: &'a [Point3], face_id: u32, color: Color) -> Self {
        Self {
            vertices,
            face_id,
            color,
        }
    }

    /// Executes the build, returning a standalone fragment triangulated from row 0.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidArity`] if the face has fewer than three vertices.
    pub fn execute(&self) -> Result<FaceFragment, MeshError> {
        let n = self.vertices.len();
        let mut fragment = FaceFragment::with_capacity(n, triangle_count(n));
        self.append_to(&mut fragment)?;
        Ok(fragment)
    }

    /// Appends the face to a shared buffer, triangulating at the buffer's
    /// current row count.
    ///
    /// # Errors
    ///
    /// Returns an error if the face has fewer than three vertices or the
    /// buffer's row count overflows `u32`.
    pub fn append_to(&self, target: &mut FaceFragment) -> Result<(), MeshError> {
        let start = u32::try_from(target.row_count())
            .map_err(|_| MeshError::TooManyRows(target.row_count()))?;
        let triangles = triangulate(self.vertices.len(), start)?;

        for p in self.vertices {
            let normal = p
                .coords
                .try_normalize(TOLERANCE)
                .unwrap_or_else(Vector3::zeros);
            target.push_row(*p, normal, self.color, self.face_id);
        }
        target.push_triangles(triangles);
        Ok(())
    }
}
