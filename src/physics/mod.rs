//! The collision capability faces are registered with and picked through.

mod shape;
mod world;

pub use shape::ConvexShape;
pub use world::CollisionWorld;

use crate::math::{Point3, Similarity3};

slotmap::new_key_type! {
    /// Unique identifier for a rigid body attached to a world.
    pub struct BodyHandle;
}

/// A static, named collidable placed in the world.
#[derive(Debug, Clone)]
pub struct RigidBody {
    /// The body name reported back by ray casts.
    pub name: String,
    /// Collision geometry in the body's local frame.
    pub shape: ConvexShape,
    /// Local-to-world placement.
    pub transform: Similarity3,
    /// Category bits; a body with no bits set is never hit.
    pub collide_mask: u32,
}

/// The closest body crossed by a ray cast.
#[derive(Debug, Clone, PartialEq)]
pub struct RayHit {
    pub body: BodyHandle,
    pub name: String,
    /// Parameter along the cast segment, in `[0, 1]`.
    pub t: f64,
    /// World-space hit point.
    pub point: Point3,
}

/// The physics surface the coloring core relies on.
///
/// Every [`attach`](Self::attach) made while loading a shape must be paired
/// with a [`detach`](Self::detach) when the shape is cleared.
pub trait PhysicsWorld {
    /// Registers a body and returns its handle.
    fn attach(&mut self, body: RigidBody) -> BodyHandle;

    /// Removes a body, returning it if it was attached.
    fn detach(&mut self, handle: BodyHandle) -> Option<RigidBody>;

    /// Advances the simulation by `dt` seconds.
    fn step_simulation(&mut self, dt: f64);

    /// Finds the closest body crossed by the segment `from → to`.
    fn cast_ray(&self, from: &Point3, to: &Point3) -> Option<RayHit>;

    /// Number of attached bodies.
    fn body_count(&self) -> usize;
}
