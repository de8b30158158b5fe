//! Where shape definitions come from.

mod builtin;

pub use builtin::{antiprism, octahedron, prism, pyramid, tetrahedron};

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AssetError, ShapeError};
use crate::math::Point3;

/// Read-only access to shape definitions by name.
pub trait ShapeSource {
    /// Names of all available shapes, in catalogue order.
    fn shape_names(&self) -> Vec<String>;

    /// Ordered vertices of the shape.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::UnknownShape`] if no shape has this name.
    fn vertices(&self, name: &str) -> Result<Vec<Point3>, ShapeError>;

    /// Ordered faces of the shape, each an ordered tuple of vertex indices.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::UnknownShape`] if no shape has this name.
    fn faces(&self, name: &str) -> Result<Vec<Vec<usize>>, ShapeError>;
}

/// A group of shapes whose ids share the category id as a prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// One stored shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeRecord {
    pub id: String,
    pub name: String,
    pub vertices: Vec<Point3>,
    pub faces: Vec<Vec<usize>>,
}

impl ShapeRecord {
    /// Checks that every face has at least three vertices and references
    /// only existing vertices.
    ///
    /// # Errors
    ///
    /// Returns the first [`ShapeError::DegenerateFace`] or
    /// [`ShapeError::VertexOutOfRange`] found.
    pub fn validate(&self) -> Result<(), ShapeError> {
        for (face, indices) in self.faces.iter().enumerate() {
            if indices.len() < 3 {
                return Err(ShapeError::DegenerateFace {
                    face,
                    arity: indices.len(),
                });
            }
            if let Some(&index) = indices.iter().find(|&&i| i >= self.vertices.len()) {
                return Err(ShapeError::VertexOutOfRange {
                    face,
                    index,
                    vertex_count: self.vertices.len(),
                });
            }
        }
        Ok(())
    }
}

/// An in-memory shape catalogue, loadable from JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapeLibrary {
    #[serde(default)]
    categories: Vec<Category>,
    shapes: Vec<ShapeRecord>,
}

impl ShapeLibrary {
    /// Creates an empty library.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A library of generated polyhedra, all centered at the origin.
    #[must_use]
    pub fn builtin() -> Self {
        let mut library = Self::new();
        for (id, name) in [
            ("r", "Regular Polyhedra"),
            ("p", "Prisms"),
            ("a", "Antiprisms"),
            ("y", "Pyramids"),
        ] {
            library.add_category(id, name);
        }

        library.insert(tetrahedron());
        let mut cube = prism(4);
        cube.id = "r02".into();
        cube.name = "Cube".into();
        library.insert(cube);
        library.insert(octahedron());
        for n in [3, 5, 6, 8] {
            library.insert(prism(n));
        }
        for n in [4, 5, 6, 8] {
            library.insert(antiprism(n));
        }
        for n in [4, 5] {
            library.insert(pyramid(n));
        }
        library
    }

    /// Parses a library from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::Format`] if the JSON is malformed.
    pub fn from_json_str(json: &str) -> Result<Self, AssetError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a library from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Serializes the library to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::Format`] if serialization fails.
    pub fn to_json_string(&self) -> Result<String, AssetError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Adds a category.
    pub fn add_category(&mut self, id: impl Into<String>, name: impl Into<String>) {
        self.categories.push(Category {
            id: id.into(),
            name: name.into(),
        });
    }

    /// Adds a shape, replacing any shape with the same name.
    pub fn insert(&mut self, record: ShapeRecord) {
        match self.shapes.iter_mut().find(|s| s.name == record.name) {
            Some(existing) => *existing = record,
            None => self.shapes.push(record),
        }
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Names of the shapes whose id starts with `category_id`.
    #[must_use]
    pub fn names_in_category(&self, category_id: &str) -> Vec<&str> {
        self.shapes
            .iter()
            .filter(|s| s.id.starts_with(category_id))
            .map(|s| s.name.as_str())
            .collect()
    }

    /// Returns the record named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::UnknownShape`] if there is none.
    pub fn get(&self, name: &str) -> Result<&ShapeRecord, ShapeError> {
        self.shapes
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| ShapeError::UnknownShape(name.to_owned()))
    }
}

impl ShapeSource for ShapeLibrary {
    fn shape_names(&self) -> Vec<String> {
        self.shapes.iter().map(|s| s.name.clone()).collect()
    }

    fn vertices(&self, name: &str) -> Result<Vec<Point3>, ShapeError> {
        Ok(self.get(name)?.vertices.clone())
    }

    fn faces(&self, name: &str) -> Result<Vec<Vec<usize>>, ShapeError> {
        let record = self.get(name)?;
        record.validate()?;
        Ok(record.faces.clone())
    }
}
