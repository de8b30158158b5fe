use crate::error::MeshError;

/// A triangle as three row indices into a fragment.
pub type Triangle = [u32; 3];

/// Fixed split of a quad along its 1–3 diagonal, as offsets from the first row.
pub const QUAD_SPLIT: [Triangle; 2] = [[0, 1, 3], [1, 2, 3]];

/// Number of triangles produced for a face of the given arity.
#[must_use]
pub fn triangle_count(arity: usize) -> usize {
    arity.saturating_sub(2)
}

/// Triangulates a polygon face of `arity` rows starting at row `start`.
///
/// The index pattern is fixed per arity and downstream winding depends on it:
///
/// - triangles yield `(s, s+1, s+2)`;
/// - quads yield [`QUAD_SPLIT`];
/// - larger faces yield `(s, s+1, s+2)` followed by `(s+i-1, s, s+i)` for
///   `i` in `3..arity`, which alternates the fresh indices rather than
///   keeping the fan's first index in the leading slot.
///
/// # Errors
///
/// Returns [`MeshError::InvalidArity`] if `arity < 3`, or
/// [`MeshError::TooManyRows`] if the indices overflow `u32`.
pub fn triangulate(arity: usize, start: u32) -> Result<Vec<Triangle>, MeshError> {
    let n = u32::try_from(arity).map_err(|_| MeshError::TooManyRows(arity))?;
    if n < 3 {
        return Err(MeshError::InvalidArity(arity));
    }
    if start.checked_add(n).is_none() {
        return Err(MeshError::TooManyRows(start as usize + arity));
    }

    let triangles = match n {
        3 => vec![[start, start + 1, start + 2]],
        4 => QUAD_SPLIT
            .iter()
            .map(|[a, b, c]| [start + a, start + b, start + c])
            .collect(),
        _ => (2..n)
            .map(|i| {
                if i == 2 {
                    [start, start + 1, start + 2]
                } else {
                    [start + i - 1, start, start + i]
                }
            })
            .collect(),
    };

    Ok(triangles)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;

    #[test]
    fn triangle_is_single_triple() {
        assert_eq!(triangulate(3, 0).unwrap(), vec![[0, 1, 2]]);
        assert_eq!(triangulate(3, 10).unwrap(), vec![[10, 11, 12]]);
    }

    #[test]
    fn quad_uses_fixed_diagonal() {
        assert_eq!(triangulate(4, 0).unwrap(), vec![[0, 1, 3], [1, 2, 3]]);
        assert_eq!(triangulate(4, 5).unwrap(), vec![[5, 6, 8], [6, 7, 8]]);
    }

    #[test]
    fn pentagon_alternates_fresh_indices() {
        assert_eq!(
            triangulate(5, 0).unwrap(),
            vec![[0, 1, 2], [2, 0, 3], [3, 0, 4]]
        );
    }

    #[test]
    fn hexagon_with_offset() {
        assert_eq!(
            triangulate(6, 3).unwrap(),
            vec![[3, 4, 5], [5, 3, 6], [6, 3, 7], [7, 3, 8]]
        );
    }

    #[test]
    fn degenerate_arity_fails() {
        for arity in 0..3 {
            assert!(matches!(
                triangulate(arity, 0),
                Err(MeshError::InvalidArity(a)) if a == arity
            ));
        }
    }

    #[test]
    fn overflowing_start_fails() {
        assert!(matches!(
            triangulate(3, u32::MAX - 1),
            Err(MeshError::TooManyRows(_))
        ));
    }

    #[test]
    fn every_vertex_covered_for_small_arities() {
        for n in 3..=8 {
            let tris = triangulate(n, 0).unwrap();
            assert_eq!(tris.len(), n - 2, "arity {n}");
            assert_eq!(tris.len(), triangle_count(n));
            let covered: HashSet<u32> = tris.iter().flatten().copied().collect();
            let expected: HashSet<u32> = (0..u32::try_from(n).unwrap()).collect();
            assert_eq!(covered, expected, "arity {n}");
        }
    }

    proptest! {
        #[test]
        fn proptest_indices_stay_in_range(n in 3usize..64, start in 0u32..10_000) {
            let tris = triangulate(n, start).unwrap();
            prop_assert_eq!(tris.len(), n - 2);
            let end = start + u32::try_from(n).unwrap();
            for tri in &tris {
                for &i in tri {
                    prop_assert!((start..end).contains(&i));
                }
                prop_assert!(tri[0] != tri[1] && tri[1] != tri[2] && tri[0] != tri[2]);
            }
        }
    }
}
