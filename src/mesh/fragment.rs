use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::MeshError;
use crate::math::{Point3, Vector3};
use crate::palette::Color;
use crate::tessellation::{triangulate, Triangle};

/// A self-contained renderable buffer for one face, or for a whole shape
/// after assembly.
///
/// Rows are stored as parallel arrays sharing a row index: position, normal,
/// color, and the tag of the logical face each row belongs to. Every array
/// holds the same number of rows and every triangle index refers to a row of
/// this fragment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaceFragment {
    positions: Vec<Point3>,
    normals: Vec<Vector3>,
    colors: Vec<Color>,
    face_ids: Vec<u32>,
    indices: Vec<Triangle>,
}

/// The rows of one logical face, recovered from a fragment by face tag.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceGroup {
    /// Positions in row order.
    pub positions: Vec<Point3>,
    /// The first color observed for the face.
    pub color: Color,
}

impl FaceFragment {
    /// Creates an empty fragment with room for `rows` rows and `triangles` triangles.
    #[must_use]
    pub fn with_capacity(rows: usize, triangles: usize) -> Self {
        Self {
            positions: Vec::with_capacity(rows),
            normals: Vec::with_capacity(rows),
            colors: Vec::with_capacity(rows),
            face_ids: Vec::with_capacity(rows),
            indices: Vec::with_capacity(triangles),
        }
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[must_use]
    pub fn positions(&self) -> &[Point3] {
        &self.positions
    }

    #[must_use]
    pub fn normals(&self) -> &[Vector3] {
        &self.normals
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[must_use]
    pub fn face_ids(&self) -> &[u32] {
        &self.face_ids
    }

    #[must_use]
    pub fn indices(&self) -> &[Triangle] {
        &self.indices
    }

    /// Appends one row.
    pub(crate) fn push_row(&mut self, position: Point3, normal: Vector3, color: Color, face_id: u32) {
        self.positions.push(position);
        self.normals.push(normal);
        self.colors.push(color);
        self.face_ids.push(face_id);
    }

    pub(crate) fn push_triangles(&mut self, triangles: impl IntoIterator<Item = Triangle>) {
        self.indices.extend(triangles);
    }

    /// Overwrites the color of every row.
    pub fn set_uniform_color(&mut self, color: Color) {
        self.colors.fill(color);
    }

    /// Checks the parallel-array and index invariants.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::RowCountMismatch`] if the arrays disagree in
    /// length, or [`MeshError::IndexOutOfRange`] if a triangle refers to a
    /// missing row.
    pub fn validate(&self) -> Result<(), MeshError> {
        let rows = self.positions.len();
        if self.normals.len() != rows || self.colors.len() != rows || self.face_ids.len() != rows {
            return Err(MeshError::RowCountMismatch {
                positions: rows,
                normals: self.normals.len(),
                colors: self.colors.len(),
                face_ids: self.face_ids.len(),
            });
        }
        if let Some(&index) = self.indices.iter().flatten().find(|&&i| i as usize >= rows) {
            return Err(MeshError::IndexOutOfRange { index, rows });
        }
        Ok(())
    }

    /// Appends all rows of `face` and re-triangulates them at this
    /// fragment's current row offset.
    ///
    /// When `tint` is set it replaces the per-row colors of `face`.
    ///
    /// # Errors
    ///
    /// Returns an error if `face` has fewer than three rows or the combined
    /// row count overflows `u32`.
    pub fn extend_with_face(&mut self, face: &Self, tint: Option<Color>) -> Result<(), MeshError> {
        let start =
            u32::try_from(self.row_count()).map_err(|_| MeshError::TooManyRows(self.row_count()))?;
        let triangles = triangulate(face.row_count(), start)?;

        for (row, position) in face.positions.iter().enumerate() {
            let color = tint.unwrap_or(face.colors[row]);
            self.push_row(*position, face.normals[row], color, face.face_ids[row]);
        }
        self.push_triangles(triangles);
        Ok(())
    }

    /// Groups rows by face tag, in ascending tag order.
    ///
    /// Rows of one face need not be adjacent. Each group keeps the first
    /// color seen for its tag.
    #[must_use]
    pub fn group_by_face(&self) -> BTreeMap<u32, FaceGroup> {
        let mut groups: BTreeMap<u32, FaceGroup> = BTreeMap::new();
        for ((position, color), &id) in self.positions.iter().zip(&self.colors).zip(&self.face_ids) {
            groups
                .entry(id)
                .or_insert_with(|| FaceGroup {
                    positions: Vec::new(),
                    color: *color,
                })
                .positions
                .push(*position);
        }
        groups
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::mesh::BuildFragment;

    const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);

    fn square(z: f64) -> Vec<Point3> {
        vec![
            Point3::new(-1.0, -1.0, z),
            Point3::new(1.0, -1.0, z),
            Point3::new(1.0, 1.0, z),
            Point3::new(-1.0, 1.0, z),
        ]
    }

    #[test]
    fn extend_reseeds_triangulation_at_offset() {
        let tri = BuildFragment::new(&square(1.0)[..3], 0, RED).execute().unwrap();
        let quad = BuildFragment::new(&square(-1.0), 1, BLUE).execute().unwrap();

        let mut shared = FaceFragment::default();
        shared.extend_with_face(&tri, None).unwrap();
        shared.extend_with_face(&quad, None).unwrap();

        assert_eq!(shared.row_count(), 7);
        assert_eq!(shared.indices(), &[[0, 1, 2], [3, 4, 6], [4, 5, 6]]);
        assert_eq!(shared.face_ids(), &[0, 0, 0, 1, 1, 1, 1]);
        assert_eq!(shared.colors()[3], BLUE);
        shared.validate().unwrap();
    }

    #[test]
    fn extend_applies_tint() {
        let quad = BuildFragment::new(&square(0.5), 4, RED).execute().unwrap();
        let mut shared = FaceFragment::default();
        shared.extend_with_face(&quad, Some(BLUE)).unwrap();
        assert!(shared.colors().iter().all(|&c| c == BLUE));
    }

    #[test]
    fn grouping_handles_interleaved_rows() {
        let mut fragment = FaceFragment::default();
        let n = Vector3::z();
        fragment.push_row(Point3::new(0.0, 0.0, 0.0), n, RED, 5);
        fragment.push_row(Point3::new(1.0, 0.0, 0.0), n, BLUE, 2);
        fragment.push_row(Point3::new(2.0, 0.0, 0.0), n, BLUE, 5);
        fragment.push_row(Point3::new(3.0, 0.0, 0.0), n, RED, 2);

        let groups = fragment.group_by_face();
        let ids: Vec<u32> = groups.keys().copied().collect();
        assert_eq!(ids, vec![2, 5]);
        assert_eq!(groups[&5].color, RED);
        assert_eq!(groups[&2].color, BLUE);
        assert_eq!(
            groups[&5].positions,
            vec![Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 0.0, 0.0)]
        );
    }

    #[test]
    fn validate_detects_bad_index() {
        let mut fragment = BuildFragment::new(&square(0.0)[..3], 0, RED).execute().unwrap();
        fragment.push_triangles([[0, 1, 3]]);
        assert!(matches!(
            fragment.validate(),
            Err(MeshError::IndexOutOfRange { index: 3, rows: 3 })
        ));
    }

    #[test]
    fn validate_detects_row_mismatch() {
        let mut fragment = BuildFragment::new(&square(0.0)[..3], 0, RED).execute().unwrap();
        fragment.face_ids.pop();
        assert!(matches!(
            fragment.validate(),
            Err(MeshError::RowCountMismatch { positions: 3, face_ids: 2, .. })
        ));
    }
}
