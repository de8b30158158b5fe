//! The aggregate of all faces of one loaded shape.
//!
//! Faces are kept in creation order. A face's position in that order is its
//! only identity: it is the numeric suffix of the body name a ray cast
//! reports, and it fixes the row order of the assembled mesh.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, info};

use crate::config::BoardConfig;
use crate::error::{ConfigError, FaceError, MeshError, PaletteError, Result, ShapeError};
use crate::face::{parse_face_name, ColorStrategy, DisplayParams, Face};
use crate::math::{Bounds, Point3};
use crate::mesh::{BuildFragment, FaceFragment};
use crate::palette::Color;
use crate::physics::PhysicsWorld;

/// Assigns every distinct face arity a color class, in ascending arity order.
///
/// Returns the class of each face and the number of classes.
#[must_use]
pub fn arity_classes(faces: &[Vec<usize>]) -> (Vec<usize>, usize) {
    let arities: BTreeSet<usize> = faces.iter().map(Vec::len).collect();
    let class_of: BTreeMap<usize, usize> = arities
        .into_iter()
        .enumerate()
        .map(|(class, arity)| (arity, class))
        .collect();
    let classes = faces.iter().map(|f| class_of[&f.len()]).collect();
    (classes, class_of.len())
}

/// Looks up the world-space vertices of face number `face`.
///
/// # Errors
///
/// Returns [`ShapeError::DegenerateFace`] for fewer than three indices, or
/// [`ShapeError::VertexOutOfRange`] for an index past the end of `vertices`.
pub fn resolve_face(
    vertices: &[Point3],
    indices: &[usize],
    face: usize,
) -> std::result::Result<Vec<Point3>, ShapeError> {
    if indices.len() < 3 {
        return Err(ShapeError::DegenerateFace {
            face,
            arity: indices.len(),
        });
    }
    indices
        .iter()
        .map(|&index| {
            vertices.get(index).copied().ok_or(ShapeError::VertexOutOfRange {
                face,
                index,
                vertex_count: vertices.len(),
            })
        })
        .collect()
}

/// Builds the fragment of every face definition, in order.
///
/// Face `i` takes color `colors[classes[i]]` and the face tag `i`.
///
/// # Errors
///
/// Returns an error if `classes` and `faces` differ in length, a class has
/// no color, or a face is malformed.
pub fn build_faces(
    vertices: &[Point3],
    faces: &[Vec<usize>],
    classes: &[usize],
    colors: &[Color],
) -> Result<Vec<FaceFragment>> {
    if classes.len() != faces.len() {
        return Err(ShapeError::ClassCountMismatch {
            faces: faces.len(),
            classes: classes.len(),
        }
        .into());
    }

    let mut fragments = Vec::with_capacity(faces.len());
    for (i, (indices, &class)) in faces.iter().zip(classes).enumerate() {
        let color = colors.get(class).copied().ok_or(PaletteError::NotEnoughColors {
            requested: class + 1,
            available: colors.len(),
        })?;
        let face_vertices = resolve_face(vertices, indices, i)?;
        let face_id = u32::try_from(i).map_err(|_| MeshError::TooManyRows(i))?;
        fragments.push(BuildFragment::new(&face_vertices, face_id, color).execute()?);
    }
    Ok(fragments)
}

/// Rebuilds one fragment per face tag of an assembled mesh.
///
/// Rows are grouped by tag without assuming adjacency, and fragments come
/// out in ascending tag order. Each takes the first color seen for its tag.
///
/// # Errors
///
/// Returns an error if the mesh violates its row invariants or a tag has
/// fewer than three rows.
pub fn split_mesh(mesh: &FaceFragment) -> Result<Vec<FaceFragment>> {
    mesh.validate()?;
    let fragments = mesh
        .group_by_face()
        .into_iter()
        .map(|(id, group)| BuildFragment::new(&group.positions, id, group.color).execute())
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(fragments)
}

/// The ordered set of faces of one shape, all registered with one physics world.
#[derive(Debug)]
pub struct Polyhedron {
    faces: Vec<Face>,
    display: DisplayParams,
    color_strategy: ColorStrategy,
    collide_mask: u32,
}

impl Default for Polyhedron {
    fn default() -> Self {
        Self {
            faces: Vec::new(),
            display: DisplayParams::default(),
            color_strategy: ColorStrategy::default(),
            collide_mask: 1,
        }
    }
}

impl Polyhedron {
    /// Creates an empty polyhedron.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `display` has no usable face scale.
    pub fn new(
        display: DisplayParams,
        color_strategy: ColorStrategy,
        collide_mask: u32,
    ) -> std::result::Result<Self, ConfigError> {
        display.validate()?;
        Ok(Self {
            faces: Vec::new(),
            display,
            color_strategy,
            collide_mask,
        })
    }

    /// Creates an empty polyhedron configured from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `config.display` is unusable.
    pub fn from_config(config: &BoardConfig) -> std::result::Result<Self, ConfigError> {
        Self::new(config.display, config.color_strategy, config.collide_mask)
    }

    #[must_use]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    #[must_use]
    pub fn face(&self, index: usize) -> Option<&Face> {
        self.faces.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    #[must_use]
    pub fn color_strategy(&self) -> ColorStrategy {
        self.color_strategy
    }

    /// Builds one face per definition in `faces`, in order.
    ///
    /// The polyhedron must be empty. See [`build_faces`] for how faces are
    /// colored and tagged. A failure leaves both the polyhedron and `world`
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the polyhedron is not empty or any error of
    /// [`build_faces`].
    pub fn make_faces<W: PhysicsWorld + ?Sized>(
        &mut self,
        world: &mut W,
        vertices: &[Point3],
        faces: &[Vec<usize>],
        classes: &[usize],
        colors: &[Color],
    ) -> Result<()> {
        self.ensure_empty()?;
        let fragments = build_faces(vertices, faces, classes, colors)?;
        self.attach_all(fragments, world);
        info!(faces = self.faces.len(), "built polyhedron faces");
        Ok(())
    }

    /// Builds a single face from its world-space vertices and appends it.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidArity`] for fewer than three vertices.
    pub fn make_face<W: PhysicsWorld + ?Sized>(
        &mut self,
        world: &mut W,
        vertices: &[Point3],
        face_id: u32,
        color: Color,
    ) -> Result<&Face> {
        let fragment = BuildFragment::new(vertices, face_id, color).execute()?;
        Ok(self.push_face(fragment, world))
    }

    /// Splits an assembled mesh back into faces, one per face tag.
    ///
    /// The polyhedron must be empty. See [`split_mesh`] for grouping and
    /// ordering.
    ///
    /// # Errors
    ///
    /// Returns an error if the polyhedron is not empty or any error of
    /// [`split_mesh`].
    pub fn disassemble<W: PhysicsWorld + ?Sized>(
        &mut self,
        world: &mut W,
        mesh: &FaceFragment,
    ) -> Result<()> {
        self.ensure_empty()?;
        let fragments = split_mesh(mesh)?;
        self.attach_all(fragments, world);
        info!(
            faces = self.faces.len(),
            rows = mesh.row_count(),
            "disassembled mesh into faces"
        );
        Ok(())
    }

    /// Clears the polyhedron and rebuilds it from prepared face fragments.
    ///
    /// Fragments come from [`build_faces`] or [`split_mesh`], so every
    /// fallible step has already run before the current faces are dropped.
    pub fn replace<W: PhysicsWorld + ?Sized>(&mut self, world: &mut W, fragments: Vec<FaceFragment>) {
        self.clear(world);
        self.attach_all(fragments, world);
        debug!(faces = self.faces.len(), "replaced polyhedron faces");
    }

    /// Recolors the face whose body is called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`FaceError::MalformedName`] if `name` is not a face name, or
    /// [`FaceError::NotFound`] if no face has that index.
    pub fn change_face_color(&mut self, name: &str, color: Color) -> Result<()> {
        let index = parse_face_name(name)?;
        let strategy = self.color_strategy;
        let face = self.faces.get_mut(index).ok_or(FaceError::NotFound(index))?;
        face.set_color(color, strategy);
        debug!(face = name, color = %color.to_hex(), "recolored face");
        Ok(())
    }

    /// Detaches every face body from `world` and drops all faces.
    pub fn clear<W: PhysicsWorld + ?Sized>(&mut self, world: &mut W) {
        let count = self.faces.len();
        for face in self.faces.drain(..) {
            face.detach(world);
        }
        debug!(faces = count, "cleared polyhedron");
    }

    /// Joins all faces into one fragment, in face order.
    ///
    /// Each face is re-triangulated at its row offset in the shared buffer.
    /// Tinted faces contribute their tint as the color of every row.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::TooManyRows`] if the result overflows `u32` indices.
    pub fn assemble(&self) -> Result<FaceFragment> {
        let rows = self.faces.iter().map(|f| f.fragment().row_count()).sum();
        let triangles = self.faces.iter().map(|f| f.fragment().indices().len()).sum();

        let mut mesh = FaceFragment::with_capacity(rows, triangles);
        for face in &self.faces {
            mesh.extend_with_face(face.fragment(), face.tint())?;
        }
        debug!(faces = self.faces.len(), rows, "assembled polyhedron");
        Ok(mesh)
    }

    /// Bounds of all face vertices, before display placement.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::EmptyPointSet`](crate::error::GeometryError::EmptyPointSet)
    /// if the polyhedron is empty.
    pub fn bounds(&self) -> Result<Bounds> {
        let points: Vec<Point3> = self
            .faces
            .iter()
            .flat_map(|f| f.fragment().positions().iter().copied())
            .collect();
        Ok(Bounds::new(&points)?)
    }

    fn ensure_empty(&self) -> std::result::Result<(), FaceError> {
        if self.faces.is_empty() {
            Ok(())
        } else {
            Err(FaceError::NotEmpty(self.faces.len()))
        }
    }

    fn attach_all<W: PhysicsWorld + ?Sized>(&mut self, fragments: Vec<FaceFragment>, world: &mut W) {
        self.faces.reserve(fragments.len());
        for fragment in fragments {
            self.push_face(fragment, world);
        }
    }

    fn push_face<W: PhysicsWorld + ?Sized>(&mut self, fragment: FaceFragment, world: &mut W) -> &Face {
        let index = self.faces.len();
        let face = Face::new(index, fragment, &self.display, self.collide_mask, world);
        self.faces.push(face);
        &self.faces[index]
    }
}
