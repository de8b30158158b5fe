//! The orbiting viewer camera and pointer unprojection.

use serde::{Deserialize, Serialize};

use crate::math::{Isometry3, Point2, Point3, Segment, UnitQuaternion, Vector3};

/// Lens and placement of an [`OrbitCamera`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraParams {
    /// Distance from the orbit center.
    pub distance: f64,
    /// Vertical field of view, in degrees.
    pub fov_deg: f64,
    /// Viewport width over height.
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            distance: 15.0,
            fov_deg: 40.0,
            aspect: 4.0 / 3.0,
            near: 1.0,
            far: 100.0,
        }
    }
}

/// A camera on a pivot at the origin, looking at the origin from `+x`
/// before rotation, with `+z` up.
///
/// Dragging turns the pivot by heading (about z), pitch (about x) and roll
/// (about y), in degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    params: CameraParams,
    hpr: Vector3,
}

impl OrbitCamera {
    #[must_use]
    pub fn new(params: CameraParams) -> Self {
        Self {
            params,
            hpr: Vector3::zeros(),
        }
    }

    #[must_use]
    pub fn params(&self) -> &CameraParams {
        &self.params
    }

    /// Current pivot heading, pitch and roll in degrees.
    #[must_use]
    pub fn hpr(&self) -> Vector3 {
        self.hpr
    }

    /// Adds `delta` (heading, pitch, roll in degrees) to the pivot rotation.
    pub fn rotate(&mut self, delta: &Vector3) {
        self.hpr += delta;
    }

    /// Resets the pivot to its initial orientation.
    pub fn reset(&mut self) {
        self.hpr = Vector3::zeros();
    }

    fn pivot(&self) -> UnitQuaternion {
        let [h, p, r] = [self.hpr.x, self.hpr.y, self.hpr.z].map(f64::to_radians);
        UnitQuaternion::from_axis_angle(&Vector3::z_axis(), h)
            * UnitQuaternion::from_axis_angle(&Vector3::x_axis(), p)
            * UnitQuaternion::from_axis_angle(&Vector3::y_axis(), r)
    }

    /// World-space eye position.
    #[must_use]
    pub fn eye(&self) -> Point3 {
        self.pivot() * Point3::new(self.params.distance, 0.0, 0.0)
    }

    /// World-to-view transform.
    #[must_use]
    pub fn view(&self) -> Isometry3 {
        let up = self.pivot() * Vector3::z();
        Isometry3::look_at_rh(&self.eye(), &Point3::origin(), &up)
    }

    fn projection(&self) -> nalgebra::Perspective3<f64> {
        let p = &self.params;
        nalgebra::Perspective3::new(p.aspect, p.fov_deg.to_radians(), p.near, p.far)
    }

    /// Maps a pointer position in normalized device coordinates to the
    /// world-space segment between the near and far clip planes.
    #[must_use]
    pub fn unproject(&self, ndc: &Point2) -> Segment {
        let projection = self.projection();
        let view = self.view();
        let near = projection.unproject_point(&Point3::new(ndc.x, ndc.y, -1.0));
        let far = projection.unproject_point(&Point3::new(ndc.x, ndc.y, 1.0));
        Segment::new(
            view.inverse_transform_point(&near),
            view.inverse_transform_point(&far),
        )
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn center_ray_runs_through_origin() {
        let camera = OrbitCamera::new(CameraParams::default());
        let seg = camera.unproject(&Point2::origin());

        assert_relative_eq!(seg.from, Point3::new(14.0, 0.0, 0.0), epsilon = 1e-9);
        assert_relative_eq!(seg.to, Point3::new(-85.0, 0.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn pointer_up_looks_up() {
        let camera = OrbitCamera::new(CameraParams::default());
        let seg = camera.unproject(&Point2::new(0.0, 0.5));
        assert!(seg.to.z > seg.from.z);
        assert_relative_eq!(seg.to.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn heading_orbits_around_z() {
        let mut camera = OrbitCamera::new(CameraParams::default());
        camera.rotate(&Vector3::new(90.0, 0.0, 0.0));
        assert_relative_eq!(camera.eye(), Point3::new(0.0, 15.0, 0.0), epsilon = 1e-9);

        let seg = camera.unproject(&Point2::origin());
        assert_relative_eq!(seg.from, Point3::new(0.0, 14.0, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn roll_orbits_vertically() {
        let mut camera = OrbitCamera::new(CameraParams::default());
        camera.rotate(&Vector3::new(0.0, 0.0, 90.0));
        assert_relative_eq!(camera.eye(), Point3::new(0.0, 0.0, -15.0), epsilon = 1e-9);
        camera.reset();
        assert_eq!(camera.hpr(), Vector3::zeros());
    }
}
