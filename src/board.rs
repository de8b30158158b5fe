//! The coloring board: one shape, one camera, one physics world.

use std::path::{Path, PathBuf};

use rand::Rng;
use tracing::{debug, info};

use crate::asset::MeshAsset;
use crate::camera::OrbitCamera;
use crate::config::BoardConfig;
use crate::error::Result;
use crate::face::parse_face_name;
use crate::interaction::{InputSnapshot, Interaction, InteractionMachine};
use crate::math::{Bounds, Point2};
use crate::palette::{Color, CustomSwatches, Palette};
use crate::physics::{CollisionWorld, PhysicsWorld};
use crate::polyhedron::{arity_classes, build_faces, split_mesh, Polyhedron};
use crate::source::ShapeSource;

const UNTITLED: &str = "Untitled";

/// Drives a [`Polyhedron`] from per-frame pointer input.
///
/// The board owns the physics world every face body lives in, so loading,
/// clearing and picking always go through the same world.
#[derive(Debug)]
pub struct ColoringBoard<W: PhysicsWorld = CollisionWorld> {
    config: BoardConfig,
    world: W,
    polyhedron: Polyhedron,
    camera: OrbitCamera,
    input: InteractionMachine,
    palette: Palette,
    custom_swatches: CustomSwatches,
    selected: Option<Color>,
    outline_visible: bool,
    shape_name: Option<String>,
}

impl ColoringBoard<CollisionWorld> {
    /// Creates a board with its own [`CollisionWorld`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`](crate::error::ConfigError::Invalid)
    /// if `config` fails validation.
    pub fn new(config: BoardConfig) -> Result<Self> {
        Self::with_world(config, CollisionWorld::new())
    }
}

impl Default for ColoringBoard<CollisionWorld> {
    fn default() -> Self {
        Self::build(BoardConfig::default(), CollisionWorld::new(), Polyhedron::default())
    }
}

impl<W: PhysicsWorld> ColoringBoard<W> {
    /// Creates a board around an existing physics world.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`](crate::error::ConfigError::Invalid)
    /// if `config` fails validation.
    pub fn with_world(config: BoardConfig, world: W) -> Result<Self> {
        config.validate()?;
        let polyhedron = Polyhedron::from_config(&config)?;
        Ok(Self::build(config, world, polyhedron))
    }

    fn build(config: BoardConfig, world: W, polyhedron: Polyhedron) -> Self {
        Self {
            polyhedron,
            camera: OrbitCamera::new(config.camera),
            input: InteractionMachine::new(config.debounce_frames, config.rotation_step_deg),
            palette: Palette::from_source(config.palette_source),
            custom_swatches: CustomSwatches::new(),
            selected: None,
            outline_visible: true,
            shape_name: None,
            config,
            world,
        }
    }

    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    #[must_use]
    pub fn world(&self) -> &W {
        &self.world
    }

    #[must_use]
    pub fn polyhedron(&self) -> &Polyhedron {
        &self.polyhedron
    }

    #[must_use]
    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Name of the shape currently shown, if any.
    #[must_use]
    pub fn shape_name(&self) -> Option<&str> {
        self.shape_name.as_deref()
    }

    #[must_use]
    pub fn selected_color(&self) -> Option<Color> {
        self.selected
    }

    /// Sets the color applied by taps. `None` makes taps do nothing.
    pub fn select_color(&mut self, color: Option<Color>) {
        self.selected = color;
    }

    #[must_use]
    pub fn custom_swatches(&self) -> &CustomSwatches {
        &self.custom_swatches
    }

    /// Remembers `color` as a custom swatch and returns its slot.
    pub fn add_custom_color(&mut self, color: Color) -> usize {
        self.custom_swatches.push(color)
    }

    /// Whether collision outlines are drawn over the faces.
    #[must_use]
    pub fn outline_visible(&self) -> bool {
        self.outline_visible
    }

    pub fn toggle_outline(&mut self, visible: bool) {
        self.outline_visible = visible;
    }

    /// Replaces the current shape with `name` from `source`.
    ///
    /// Faces of equal arity share an initial color, chosen according to the
    /// configured palette policy. Every face is built before anything is
    /// cleared, so an unknown or malformed shape leaves the current one in
    /// place.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape is unknown or malformed, or if it has
    /// more arity classes than the palette has colors.
    pub fn show_shape<S, R>(&mut self, source: &S, name: &str, rng: &mut R) -> Result<()>
    where
        S: ShapeSource + ?Sized,
        R: Rng + ?Sized,
    {
        let vertices = source.vertices(name)?;
        let faces = source.faces(name)?;
        let (classes, class_count) = arity_classes(&faces);
        let colors = self
            .palette
            .for_classes(self.config.palette_policy, class_count, rng)?;

        let fragments = build_faces(&vertices, &faces, &classes, &colors)?;

        self.polyhedron.replace(&mut self.world, fragments);
        self.shape_name = Some(name.to_owned());
        info!(shape = name, faces = faces.len(), classes = class_count, "showing shape");
        Ok(())
    }

    /// Recolors the face under the pointer with the selected color.
    ///
    /// Returns the index of the recolored face, or `None` if nothing was hit
    /// or no color is selected.
    ///
    /// # Errors
    ///
    /// Returns a [`FaceError`](crate::error::FaceError) if the hit body does
    /// not name a face of the current shape.
    pub fn change_color(&mut self, ndc: &Point2) -> Result<Option<usize>> {
        let segment = self.camera.unproject(ndc);
        let Some(hit) = self.world.cast_ray(&segment.from, &segment.to) else {
            return Ok(None);
        };
        let Some(color) = self.selected else {
            return Ok(None);
        };
        let index = parse_face_name(&hit.name)?;
        self.polyhedron.change_face_color(&hit.name, color)?;
        Ok(Some(index))
    }

    /// Advances the board by one frame.
    ///
    /// At most one pointer transition is processed. A drag turns the camera
    /// and a tap recolors the face under the pointer. The physics world is
    /// stepped by `input.dt` either way.
    ///
    /// # Errors
    ///
    /// Returns any error of [`change_color`](Self::change_color).
    pub fn update(&mut self, input: &InputSnapshot) -> Result<Option<Interaction>> {
        let action = self.input.update(input);
        self.world.step_simulation(input.dt);

        match action {
            Some(Interaction::Rotate(hpr)) => self.camera.rotate(&hpr),
            Some(Interaction::Pick(pos)) => {
                if let Some(face) = self.change_color(&pos)? {
                    debug!(face, frame = input.frame, "tap recolored face");
                }
            }
            None => {}
        }
        Ok(action)
    }

    /// Bounds of the current shape.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::EmptyPointSet`](crate::error::GeometryError::EmptyPointSet)
    /// if no shape is shown.
    pub fn shape_bounds(&self) -> Result<Bounds> {
        self.polyhedron.bounds()
    }

    /// Assembles the current shape, colors included, and saves it into `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if assembly fails or the file cannot be written.
    pub fn save(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let name = self.shape_name.as_deref().unwrap_or(UNTITLED);
        let asset = MeshAsset::new(name, self.polyhedron.assemble()?);
        Ok(asset.save(dir)?)
    }

    /// Replaces the current shape with a saved mesh asset.
    ///
    /// # Errors
    ///
    /// Returns an error if the asset cannot be read or holds a mesh that
    /// does not split into faces. The current shape is then left in place.
    pub fn open(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let asset = MeshAsset::load(path)?;
        let fragments = split_mesh(&asset.fragment)?;

        self.polyhedron.replace(&mut self.world, fragments);
        info!(shape = %asset.name, faces = self.polyhedron.len(), "opened mesh asset");
        self.shape_name = Some(asset.name);
        Ok(())
    }
}
