//! Named mesh assets on disk.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::AssetError;
use crate::mesh::FaceFragment;

const ASSET_EXTENSION: &str = "json";

/// An assembled shape mesh together with its display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshAsset {
    pub name: String,
    /// Faces are rendered from both sides.
    pub two_sided: bool,
    pub fragment: FaceFragment,
}

impl MeshAsset {
    #[must_use]
    pub fn new(name: impl Into<String>, fragment: FaceFragment) -> Self {
        Self {
            name: name.into(),
            two_sided: true,
            fragment,
        }
    }

    /// The file name the asset is saved under: its name with spaces removed.
    #[must_use]
    pub fn file_name(&self) -> String {
        let stem: String = self.name.chars().filter(|c| *c != ' ').collect();
        format!("{stem}.{ASSET_EXTENSION}")
    }

    /// Serializes the asset as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::Format`] if writing to `writer` fails.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<(), AssetError> {
        serde_json::to_writer(writer, self)?;
        Ok(())
    }

    /// Deserializes an asset and checks its mesh invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::Format`] for malformed JSON or
    /// [`AssetError::InvalidMesh`] if the fragment's rows disagree.
    pub fn read_from<R: Read>(reader: R) -> Result<Self, AssetError> {
        let asset: Self = serde_json::from_reader(reader)?;
        asset.fragment.validate()?;
        Ok(asset)
    }

    /// Writes the asset into `dir` under [`file_name`](Self::file_name).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn save(&self, dir: impl AsRef<Path>) -> Result<PathBuf, AssetError> {
        let path = dir.as_ref().join(self.file_name());
        let mut writer = BufWriter::new(File::create(&path)?);
        self.write_to(&mut writer)?;
        writer.flush()?;
        info!(path = %path.display(), rows = self.fragment.row_count(), "saved mesh asset");
        Ok(path)
    }

    /// Reads an asset file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or holds an invalid asset.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let asset = Self::read_from(BufReader::new(File::open(path)?))?;
        info!(path = %path.display(), name = %asset.name, "loaded mesh asset");
        Ok(asset)
    }
}
