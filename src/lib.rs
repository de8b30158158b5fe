pub mod asset;
pub mod board;
pub mod camera;
pub mod config;
pub mod error;
pub mod face;
pub mod interaction;
pub mod math;
pub mod mesh;
pub mod palette;
pub mod physics;
pub mod polyhedron;
pub mod source;
pub mod tessellation;

pub use error::{PolychromeError, Result};
