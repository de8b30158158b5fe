pub mod bounds;
pub mod ray;

pub use bounds::Bounds;
pub use ray::{segment_triangle_intersect, Segment};

/// 2D point type, used for pointer positions in normalized device coordinates.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Uniform-scale rigid transform used to place faces in the scene.
pub type Similarity3 = nalgebra::Similarity3<f64>;

/// Translation component of a transform.
pub type Translation3 = nalgebra::Translation3<f64>;

/// Rigid transform used for camera views.
pub type Isometry3 = nalgebra::Isometry3<f64>;

/// Unit quaternion rotation.
pub type UnitQuaternion = nalgebra::UnitQuaternion<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
