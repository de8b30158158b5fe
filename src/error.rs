use thiserror::Error;

/// Top-level error type for the Polychrome coloring core.
#[derive(Debug, Error)]
pub enum PolychromeError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Face(#[from] FaceError),

    #[error(transparent)]
    Palette(#[from] PaletteError),

    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("point set is empty")]
    EmptyPointSet,
}

/// Errors related to face fragments and their triangulation.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error("face arity {0} is below the minimum of 3")]
    InvalidArity(usize),

    #[error(
        "parallel arrays disagree: {positions} positions, {normals} normals, \
         {colors} colors, {face_ids} face ids"
    )]
    RowCountMismatch {
        positions: usize,
        normals: usize,
        colors: usize,
        face_ids: usize,
    },

    #[error("triangle index {index} out of range for {rows} rows")]
    IndexOutOfRange { index: u32, rows: usize },

    #[error("fragment with {0} rows exceeds the u32 index range")]
    TooManyRows(usize),
}

/// Errors raised while looking up or resolving shape definitions.
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("unknown shape: {0}")]
    UnknownShape(String),

    #[error("face {face} references vertex {index}, but only {vertex_count} vertices exist")]
    VertexOutOfRange {
        face: usize,
        index: usize,
        vertex_count: usize,
    },

    #[error("face {face} has only {arity} vertices")]
    DegenerateFace { face: usize, arity: usize },

    #[error("{faces} faces were given but {classes} color classes")]
    ClassCountMismatch { faces: usize, classes: usize },
}

/// Errors related to face objects inside a polyhedron.
#[derive(Debug, Error)]
pub enum FaceError {
    #[error("malformed face name: {0:?}")]
    MalformedName(String),

    #[error("no face at index {0}")]
    NotFound(usize),

    #[error("polyhedron still holds {0} faces; clear it before loading")]
    NotEmpty(usize),
}

/// Errors related to colors and palettes.
#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),

    #[error("requested {requested} colors from a palette of {available}")]
    NotEnoughColors { requested: usize, available: usize },
}

/// Errors related to reading and writing mesh assets and shape libraries.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed asset: {0}")]
    Format(#[from] serde_json::Error),

    #[error("asset holds an invalid mesh: {0}")]
    InvalidMesh(#[from] MeshError),
}

/// Errors related to loading board configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[source] std::io::Error),

    #[error("malformed config: {0}")]
    Format(#[source] serde_json::Error),

    #[error("invalid config value: {0}")]
    Invalid(String),
}

/// Convenience type alias for results using [`PolychromeError`].
pub type Result<T> = std::result::Result<T, PolychromeError>;
