//! Per-face renderable geometry buffers.

mod builder;
mod fragment;

pub use builder::BuildFragment;
pub use fragment::{FaceFragment, FaceGroup};
