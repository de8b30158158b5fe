//! Generated uniform polyhedra with outward-wound faces.

use std::f64::consts::{PI, TAU};

use crate::math::Point3;

use super::ShapeRecord;

fn polygon_name(n: usize) -> String {
    match n {
        3 => "Triangular".into(),
        4 => "Square".into(),
        5 => "Pentagonal".into(),
        6 => "Hexagonal".into(),
        7 => "Heptagonal".into(),
        8 => "Octagonal".into(),
        9 => "Enneagonal".into(),
        10 => "Decagonal".into(),
        _ => format!("{n}-gonal"),
    }
}

/// A ring of `n` points on the unit circle at height `z`, starting at `phase`.
fn ring(n: usize, z: f64, phase: f64) -> impl Iterator<Item = Point3> {
    #[allow(clippy::cast_precision_loss)]
    let step = TAU / n as f64;
    (0..n).map(move |i| {
        #[allow(clippy::cast_precision_loss)]
        let a = phase + step * i as f64;
        Point3::new(a.cos(), a.sin(), z)
    })
}

/// Edge length of a regular `n`-gon inscribed in the unit circle.
fn edge_length(n: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let n = n as f64;
    2.0 * (PI / n).sin()
}

/// The regular tetrahedron.
#[must_use]
pub fn tetrahedron() -> ShapeRecord {
    ShapeRecord {
        id: "r01".into(),
        name: "Tetrahedron".into(),
        vertices: vec![
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(1.0, -1.0, -1.0),
            Point3::new(-1.0, 1.0, -1.0),
            Point3::new(-1.0, -1.0, 1.0),
        ],
        faces: vec![vec![0, 3, 1], vec![0, 1, 2], vec![0, 2, 3], vec![1, 3, 2]],
    }
}

/// The regular octahedron.
#[must_use]
pub fn octahedron() -> ShapeRecord {
    ShapeRecord {
        id: "r03".into(),
        name: "Octahedron".into(),
        vertices: vec![
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(-1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, -1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(0.0, 0.0, -1.0),
        ],
        faces: vec![
            vec![0, 2, 4],
            vec![2, 1, 4],
            vec![1, 3, 4],
            vec![3, 0, 4],
            vec![2, 0, 5],
            vec![1, 2, 5],
            vec![3, 1, 5],
            vec![0, 3, 5],
        ],
    }
}

/// The uniform `n`-gonal prism: two `n`-gons joined by `n` squares.
#[must_use]
pub fn prism(n: usize) -> ShapeRecord {
    let half = edge_length(n) / 2.0;
    let mut vertices: Vec<Point3> = ring(n, -half, 0.0).collect();
    vertices.extend(ring(n, half, 0.0));

    let mut faces = vec![(n..2 * n).collect::<Vec<_>>(), (0..n).rev().collect()];
    for i in 0..n {
        let j = (i + 1) % n;
        faces.push(vec![i, j, n + j, n + i]);
    }

    ShapeRecord {
        id: format!("p{n:02}"),
        name: format!("{} Prism", polygon_name(n)),
        vertices,
        faces,
    }
}

/// The uniform `n`-gonal antiprism: two `n`-gons joined by a band of `2n` triangles.
#[must_use]
pub fn antiprism(n: usize) -> ShapeRecord {
    let e = edge_length(n);
    #[allow(clippy::cast_precision_loss)]
    let offset = 2.0 * (PI / (2.0 * n as f64)).sin();
    let half = (e * e - offset * offset).sqrt() / 2.0;

    #[allow(clippy::cast_precision_loss)]
    let phase = PI / n as f64;
    let mut vertices: Vec<Point3> = ring(n, -half, 0.0).collect();
    vertices.extend(ring(n, half, phase));

    let mut faces = vec![(n..2 * n).collect::<Vec<_>>(), (0..n).rev().collect()];
    for i in 0..n {
        let j = (i + 1) % n;
        faces.push(vec![i, j, n + i]);
        faces.push(vec![n + i, j, n + j]);
    }

    ShapeRecord {
        id: format!("a{n:02}"),
        name: format!("{} Antiprism", polygon_name(n)),
        vertices,
        faces,
    }
}

/// The `n`-gonal pyramid with unit-circumradius base.
///
/// Lateral edges match the base edges where that is possible (`n < 6`).
#[must_use]
pub fn pyramid(n: usize) -> ShapeRecord {
    let e = edge_length(n);
    let height = if e > 1.0 { (e * e - 1.0).sqrt() } else { 1.0 };
    let half = height / 2.0;

    let mut vertices: Vec<Point3> = ring(n, -half, 0.0).collect();
    vertices.push(Point3::new(0.0, 0.0, half));

    let mut faces = vec![(0..n).rev().collect::<Vec<_>>()];
    for i in 0..n {
        faces.push(vec![i, (i + 1) % n, n]);
    }

    ShapeRecord {
        id: format!("y{n:02}"),
        name: format!("{} Pyramid", polygon_name(n)),
        vertices,
        faces,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    /// Every face should wind counter-clockwise seen from outside.
    fn assert_outward(record: &ShapeRecord) {
        for face in &record.faces {
            let p: Vec<Point3> = face.iter().map(|&i| record.vertices[i]).collect();
            let normal = (p[1] - p[0]).cross(&(p[2] - p[0]));
            let centroid = p.iter().fold(Point3::origin(), |acc, q| acc + q.coords / p.len() as f64);
            assert!(
                normal.dot(&centroid.coords) > 0.0,
                "{}: face {face:?} winds inward",
                record.name
            );
        }
    }

    #[test]
    fn shapes_wind_outward() {
        for record in [tetrahedron(), octahedron(), prism(3), prism(7), antiprism(5), pyramid(4)] {
            record.validate().unwrap();
            assert_outward(&record);
        }
    }

    #[test]
    fn prism_face_counts() {
        let p = prism(15);
        assert_eq!(p.faces.len(), 17);
        assert_eq!(p.vertices.len(), 30);
        assert_eq!(p.name, "15-gonal Prism");
        assert_eq!(p.id, "p15");
    }

    #[test]
    fn antiprism_edges_are_uniform() {
        let a = antiprism(6);
        assert_eq!(a.faces.len(), 14);
        let e = edge_length(6);
        for face in a.faces.iter().filter(|f| f.len() == 3) {
            for k in 0..3 {
                let d = nalgebra::distance(&a.vertices[face[k]], &a.vertices[face[(k + 1) % 3]]);
                assert_relative_eq!(d, e, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn square_pyramid_is_centered_vertically() {
        let y = pyramid(4);
        let zs: Vec<f64> = y.vertices.iter().map(|p| p.z).collect();
        let lo = zs.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = zs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        assert_relative_eq!(lo, -hi);
    }
}
