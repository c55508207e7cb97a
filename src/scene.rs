//! Scene configuration: the central body, its satellites and the camera.
//!
//! Values default to the classic four-planet layout. Colors are kept as hex
//! strings and resolved through Bevy's `Srgba::hex`.

use bevy::prelude::*;

use crate::body::OrbitingBody;
use crate::simulation::BodyRegistry;
use crate::types::SimulationError;

/// Parameters for one satellite.
#[derive(Clone, Debug, PartialEq)]
pub struct BodySpec {
    /// Visual (and picking) radius.
    pub radius: f64,
    /// Hex color, e.g. `#6b93ff`.
    pub color: String,
    pub orbit_radius: f64,
    /// Radians per second; sign selects direction.
    pub orbit_speed: f64,
}

impl BodySpec {
    pub fn new(radius: f64, color: &str, orbit_radius: f64, orbit_speed: f64) -> Self {
        Self {
            radius,
            color: color.to_string(),
            orbit_radius,
            orbit_speed,
        }
    }

    /// Resolved color; malformed hex falls back to white.
    pub fn color(&self) -> Color {
        match Srgba::hex(&self.color) {
            Ok(srgba) => Color::Srgba(srgba),
            Err(err) => {
                warn!("Invalid body color {:?}: {}; using white", self.color, err);
                Color::WHITE
            }
        }
    }

    pub fn build(&self) -> Result<OrbitingBody, SimulationError> {
        OrbitingBody::new(self.radius, self.orbit_radius, self.orbit_speed)
    }
}

/// Camera placement and projection.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraConfig {
    pub position: Vec3,
    pub target: Vec3,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 200.0, 600.0),
            target: Vec3::ZERO,
            fov_degrees: 50.0,
            near: 0.1,
            far: 5000.0,
        }
    }
}

/// Everything needed to build the scene.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct SceneConfig {
    /// Radius of the central body. It is drawn and lit, never picked.
    pub central_radius: f32,
    pub central_color: String,
    /// Satellites in registry order.
    pub bodies: Vec<BodySpec>,
    pub camera: CameraConfig,
    /// Point light at the origin, in lumens.
    pub light_intensity: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            central_radius: 50.0,
            central_color: "#ffcc00".to_string(),
            bodies: default_bodies(),
            camera: CameraConfig::default(),
            light_intensity: 4.0e9,
        }
    }
}

impl SceneConfig {
    /// Build the registry, failing on the first invalid body.
    pub fn build_registry(&self) -> Result<BodyRegistry, SimulationError> {
        self.bodies.iter().map(BodySpec::build).collect()
    }

    pub fn central_color(&self) -> Color {
        Srgba::hex(&self.central_color)
            .map(Color::Srgba)
            .unwrap_or(Color::WHITE)
    }
}

/// The four default satellites, innermost first.
pub fn default_bodies() -> Vec<BodySpec> {
    vec![
        BodySpec::new(8.0, "#6b93ff", 90.0, 0.5),
        BodySpec::new(12.0, "#ff6b6b", 140.0, 0.35),
        BodySpec::new(10.0, "#42f5b0", 200.0, 0.25),
        BodySpec::new(14.0, "#ffdf7a", 260.0, 0.15),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_matches_specs() {
        let config = SceneConfig::default();
        let registry = config.build_registry().unwrap();

        assert_eq!(registry.len(), 4);
        for (body, spec) in registry.bodies().iter().zip(&config.bodies) {
            assert_eq!(body.radius(), spec.radius);
            assert_eq!(body.orbit_radius(), spec.orbit_radius);
            assert_eq!(body.orbit_speed(), spec.orbit_speed);
        }
    }

    #[test]
    fn test_invalid_spec_fails_build() {
        let mut config = SceneConfig::default();
        config.bodies.push(BodySpec::new(-1.0, "#ffffff", 300.0, 0.1));

        let err = config.build_registry().unwrap_err();
        assert!(matches!(
            err,
            SimulationError::InvalidParameter { name: "radius", .. }
        ));
    }

    #[test]
    fn test_hex_colors() {
        let spec = BodySpec::new(8.0, "#ff0000", 90.0, 0.5);
        assert_eq!(spec.color(), Color::srgb(1.0, 0.0, 0.0));

        let broken = BodySpec::new(8.0, "not-a-color", 90.0, 0.5);
        assert_eq!(broken.color(), Color::WHITE);
    }

    #[test]
    fn test_default_bodies_have_distinct_orbits() {
        let bodies = default_bodies();
        for pair in bodies.windows(2) {
            assert!(pair[0].orbit_radius < pair[1].orbit_radius);
            assert!(pair[0].orbit_speed > pair[1].orbit_speed);
        }
    }
}
