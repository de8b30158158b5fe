use slotmap::SlotMap;

use crate::math::{Point3, Segment};

use super::{BodyHandle, PhysicsWorld, RayHit, RigidBody};

/// A world of static bodies that answers closest-hit ray casts.
///
/// Bodies live in an arena keyed by generational handles, so a stale handle
/// from a cleared shape never aliases a newer body.
#[derive(Debug, Default)]
pub struct CollisionWorld {
    bodies: SlotMap<BodyHandle, RigidBody>,
    elapsed: f64,
}

impl CollisionWorld {
    /// Creates a new, empty world.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the attached body for `handle`, if any.
    #[must_use]
    pub fn body(&self, handle: BodyHandle) -> Option<&RigidBody> {
        self.bodies.get(handle)
    }

    /// Iterates over all attached bodies.
    pub fn bodies(&self) -> impl Iterator<Item = (BodyHandle, &RigidBody)> {
        self.bodies.iter()
    }

    /// Total simulated time in seconds.
    #[must_use]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}

impl PhysicsWorld for CollisionWorld {
    fn attach(&mut self, body: RigidBody) -> BodyHandle {
        self.bodies.insert(body)
    }

    fn detach(&mut self, handle: BodyHandle) -> Option<RigidBody> {
        self.bodies.remove(handle)
    }

    fn step_simulation(&mut self, dt: f64) {
        // Every body is static; only the clock moves.
        self.elapsed += dt;
    }

    fn cast_ray(&self, from: &Point3, to: &Point3) -> Option<RayHit> {
        let segment = Segment::new(*from, *to);
        self.bodies
            .iter()
            .filter(|(_, body)| body.collide_mask != 0)
            .filter_map(|(handle, body)| {
                let local = segment.to_local(&body.transform);
                body.shape.cast_segment(&local).map(|t| (handle, body, t))
            })
            .min_by(|a, b| a.2.total_cmp(&b.2))
            .map(|(handle, body, t)| RayHit {
                body: handle,
                name: body.name.clone(),
                t,
                point: segment.point_at(t),
            })
    }

    fn body_count(&self) -> usize {
        self.bodies.len()
    }
}
