//! A single face: its fragment plus identity, placement and collision body.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, FaceError};
use crate::math::{Similarity3, Translation3, UnitQuaternion, Vector3};
use crate::mesh::FaceFragment;
use crate::palette::Color;
use crate::physics::{BodyHandle, ConvexShape, PhysicsWorld, RigidBody};

const FACE_NAME_PREFIX: &str = "face_";

/// Returns the body name of the face created at `index`.
#[must_use]
pub fn face_name(index: usize) -> String {
    format!("{FACE_NAME_PREFIX}{index}")
}

/// Recovers the creation index from a face body name.
///
/// # Errors
///
/// Returns [`FaceError::MalformedName`] if `name` is not `face_<index>`.
pub fn parse_face_name(name: &str) -> Result<usize, FaceError> {
    name.strip_prefix(FACE_NAME_PREFIX)
        .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|digits| digits.parse().ok())
        .ok_or_else(|| FaceError::MalformedName(name.to_owned()))
}

/// How a recolor is stored on a face.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorStrategy {
    /// Tint the whole face object, leaving the fragment's row colors untouched.
    Tint,
    /// Rewrite every row color of the fragment, so recolors reach exported meshes.
    #[default]
    VertexColors,
}

/// Placement applied to every face for the exploded display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayParams {
    /// Uniform scale pushing faces away from the shape's center. Must be positive.
    pub face_scale: f64,
    /// Roll about the +y axis, in degrees.
    pub face_roll_deg: f64,
}

impl Default for DisplayParams {
    fn default() -> Self {
        Self {
            face_scale: 1.5,
            face_roll_deg: -30.0,
        }
    }
}

impl DisplayParams {
    /// Parameters that leave faces at their true position.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            face_scale: 1.0,
            face_roll_deg: 0.0,
        }
    }

    /// Checks that the face scale is finite and positive.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] otherwise.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.face_scale.is_finite() && self.face_scale > 0.0 && self.face_roll_deg.is_finite() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(
                "display.face_scale must be positive and display.face_roll_deg finite".to_owned(),
            ))
        }
    }

    /// Returns the local-to-parent transform of a face.
    ///
    /// # Panics
    ///
    /// Panics if `face_scale` is zero; [`validate`](Self::validate) rejects it.
    #[must_use]
    pub fn transform(&self) -> Similarity3 {
        let roll = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), self.face_roll_deg.to_radians());
        Similarity3::from_parts(Translation3::identity(), roll, self.face_scale)
    }
}

/// One independently pickable, collidable face.
#[derive(Debug)]
pub struct Face {
    index: usize,
    name: String,
    fragment: FaceFragment,
    body: BodyHandle,
    transform: Similarity3,
    tint: Option<Color>,
}

impl Face {
    /// Wraps `fragment` as the face at creation position `index` and
    /// attaches its collision body to `world`.
    pub fn new<W: PhysicsWorld + ?Sized>(
        index: usize,
        fragment: FaceFragment,
        display: &DisplayParams,
        collide_mask: u32,
        world: &mut W,
    ) -> Self {
        let name = face_name(index);
        let transform = display.transform();
        let body = world.attach(RigidBody {
            name: name.clone(),
            shape: ConvexShape::from_fragment(&fragment),
            transform,
            collide_mask,
        });
        Self {
            index,
            name,
            fragment,
            body,
            transform,
            tint: None,
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn fragment(&self) -> &FaceFragment {
        &self.fragment
    }

    #[must_use]
    pub fn body(&self) -> BodyHandle {
        self.body
    }

    #[must_use]
    pub fn transform(&self) -> &Similarity3 {
        &self.transform
    }

    /// The whole-object tint, if one was applied.
    #[must_use]
    pub fn tint(&self) -> Option<Color> {
        self.tint
    }

    /// The color the face is displayed with.
    #[must_use]
    pub fn color(&self) -> Option<Color> {
        self.tint.or_else(|| self.fragment.colors().first().copied())
    }

    /// Recolors the face using `strategy`.
    pub fn set_color(&mut self, color: Color, strategy: ColorStrategy) {
        match strategy {
            ColorStrategy::Tint => self.tint = Some(color),
            ColorStrategy::VertexColors => {
                self.fragment.set_uniform_color(color);
                self.tint = None;
            }
        }
    }

    /// Detaches the face's body from `world`, consuming the face.
    pub fn detach<W: PhysicsWorld + ?Sized>(self, world: &mut W) {
        if world.detach(self.body).is_none() {
            tracing::warn!(face = %self.name, "face body was not attached to the world");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::Point3;
    use crate::mesh::BuildFragment;
    use crate::physics::CollisionWorld;

    const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    const RED: Color = Color::rgb(1.0, 0.0, 0.0);

    fn triangle_fragment() -> FaceFragment {
        let verts = [
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        ];
        BuildFragment::new(&verts, 3, WHITE).execute().unwrap()
    }

    #[test]
    fn names_roundtrip() {
        assert_eq!(face_name(12), "face_12");
        assert_eq!(parse_face_name("face_12").unwrap(), 12);
    }

    #[test]
    fn malformed_names_are_rejected() {
        for bad in ["face_", "face_x", "face_-1", "face_+1", "polygon_3", "", "face_1_2"] {
            assert!(
                matches!(parse_face_name(bad), Err(FaceError::MalformedName(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn new_face_attaches_named_body() {
        let mut world = CollisionWorld::new();
        let face = Face::new(4, triangle_fragment(), &DisplayParams::default(), 1, &mut world);

        assert_eq!(face.name(), "face_4");
        let body = world.body(face.body()).unwrap();
        assert_eq!(body.name, "face_4");
        assert_eq!(body.collide_mask, 1);
        assert_eq!(body.shape.triangles().len(), 1);
        assert_relative_eq!(face.transform().scaling(), 1.5);
    }

    #[test]
    fn vertex_color_strategy_rewrites_rows() {
        let mut world = CollisionWorld::new();
        let mut face = Face::new(0, triangle_fragment(), &DisplayParams::identity(), 1, &mut world);
        face.set_color(RED, ColorStrategy::VertexColors);
        assert!(face.fragment().colors().iter().all(|&c| c == RED));
        assert_eq!(face.tint(), None);
        assert_eq!(face.color(), Some(RED));
    }

    #[test]
    fn tint_strategy_keeps_rows() {
        let mut world = CollisionWorld::new();
        let mut face = Face::new(0, triangle_fragment(), &DisplayParams::identity(), 1, &mut world);
        face.set_color(RED, ColorStrategy::Tint);
        assert!(face.fragment().colors().iter().all(|&c| c == WHITE));
        assert_eq!(face.tint(), Some(RED));
        assert_eq!(face.color(), Some(RED));
    }

    #[test]
    fn detach_releases_body() {
        let mut world = CollisionWorld::new();
        let face = Face::new(0, triangle_fragment(), &DisplayParams::default(), 1, &mut world);
        assert_eq!(world.body_count(), 1);
        face.detach(&mut world);
        assert_eq!(world.body_count(), 0);
    }

    #[test]
    fn display_transform_scales_and_rolls() {
        let t = DisplayParams {
            face_scale: 2.0,
            face_roll_deg: 90.0,
        }
        .transform();
        let p = t.transform_point(&Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(p, Point3::new(0.0, 0.0, -2.0), epsilon = 1e-12);
    }
}
