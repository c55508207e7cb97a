//! Test utilities for the orbital scene.
//!
//! Provides fixtures for bodies, registries and cameras, and assertions for
//! orbit invariants such as "the body lies on its orbit circle".

use bevy::prelude::*;

use crate::body::OrbitingBody;
use crate::picking::{Unproject, Viewport};
use crate::scene::SceneConfig;
use crate::simulation::{BodyRegistry, PointerDown};

/// Fixtures for creating test bodies and input.
pub mod fixtures {
    use super::*;

    /// The innermost default body: radius 8, orbit radius 90, speed 0.5.
    pub fn inner_body() -> OrbitingBody {
        OrbitingBody::new(8.0, 90.0, 0.5).unwrap()
    }

    /// Registry with the four default bodies.
    pub fn default_registry() -> BodyRegistry {
        SceneConfig::default().build_registry().unwrap()
    }

    /// Default camera position.
    pub fn camera_position() -> Vec3 {
        SceneConfig::default().camera.position
    }

    /// Camera that casts every pointer along the ray from the default
    /// camera position through `target`.
    pub fn ray_camera_through(target: Vec3) -> TargetRay {
        TargetRay {
            origin: camera_position(),
            target,
        }
    }

    /// Viewport used by pointer fixtures.
    pub fn viewport() -> Viewport {
        Viewport::new(0.0, 0.0, 800.0, 600.0)
    }

    /// Pointer-down in the middle of [`viewport`].
    pub fn centered_pointer() -> PointerDown {
        PointerDown {
            position: Vec2::new(400.0, 300.0),
            viewport: viewport(),
        }
    }

    /// See [`ray_camera_through`].
    pub struct TargetRay {
        pub origin: Vec3,
        pub target: Vec3,
    }

    impl Unproject for TargetRay {
        fn unproject(&self, _ndc: Vec2) -> Option<Ray3d> {
            let direction = Dir3::new(self.target - self.origin).ok()?;
            Some(Ray3d {
                origin: self.origin,
                direction,
            })
        }
    }
}

/// Assertions for orbit invariants.
pub mod assertions {
    use super::*;
    use std::f64::consts::TAU;

    /// Smallest signed difference between two angles, in (-π, π].
    pub fn angle_difference(a: f64, b: f64) -> f64 {
        let diff = (a - b).rem_euclid(TAU);
        if diff > TAU / 2.0 { diff - TAU } else { diff }
    }

    /// Assert two angles are equal modulo a full turn.
    ///
    /// # Panics
    /// Panics if they differ by more than `tolerance`.
    pub fn assert_same_angle(actual: f64, expected: f64, tolerance: f64) {
        let diff = angle_difference(actual, expected).abs();
        assert!(
            diff <= tolerance,
            "Angles differ: actual={actual:.12}, expected={expected:.12}, diff={diff:.3e}"
        );
    }

    /// Assert the body's position is the orbit point for its current angle.
    ///
    /// # Panics
    /// Panics if the position is off by more than `tolerance`.
    pub fn assert_on_orbit(body: &OrbitingBody, tolerance: f64) {
        let expected = crate::body::orbit_point(body.orbit_radius(), body.orbit_angle());
        let error = (body.position() - expected).length();
        assert!(
            error <= tolerance,
            "Body off its orbit: position={:?}, expected={:?}",
            body.position(),
            expected
        );
        let radius_error = (body.position().length() - body.orbit_radius()).abs();
        assert!(radius_error <= tolerance, "Body off its orbit circle by {radius_error:.3e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::TAU;

    #[test]
    fn test_angle_difference_wraps() {
        assert_relative_eq!(assertions::angle_difference(0.1, TAU - 0.1), 0.2, epsilon = 1e-12);
        assert_relative_eq!(assertions::angle_difference(TAU - 0.1, 0.1), -0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_target_ray_points_at_target() {
        let target = Vec3::new(90.0, 0.0, 0.0);
        let camera = fixtures::ray_camera_through(target);
        let ray = camera.unproject(Vec2::ZERO).unwrap();

        let distance = (target - ray.origin).length();
        assert!((ray.get_point(distance) - target).length() < 1e-3);
    }

    #[test]
    fn test_default_registry_on_orbit() {
        for body in fixtures::default_registry().bodies() {
            assertions::assert_on_orbit(body, 1e-12);
        }
    }
}
