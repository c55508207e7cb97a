//! Orbit ring rendering using Bevy Gizmos.
//!
//! Orbits are circles in the y=0 plane, so the ring for a body is fully
//! determined by its orbit radius and never needs realigning.

use bevy::prelude::*;

use crate::body::orbit_point;
use crate::scene::SceneConfig;
use crate::simulation::SimulationLoop;
use crate::types::{SimulationSet, FULL_TURN};

/// Plugin providing orbit ring visualization.
pub struct OrbitRingPlugin;

impl Plugin for OrbitRingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitRingSettings>()
            .add_systems(Update, draw_orbit_rings.in_set(SimulationSet::Overlay));
    }
}

/// Settings for orbit ring rendering.
#[derive(Resource)]
pub struct OrbitRingSettings {
    /// Whether to show orbit rings.
    pub visible: bool,
    /// Number of segments per ring (higher = smoother).
    pub segments: u32,
    /// Alpha value for ring color.
    pub alpha: f32,
}

impl Default for OrbitRingSettings {
    fn default() -> Self {
        Self {
            visible: true,
            segments: 128,
            alpha: 0.3,
        }
    }
}

/// Closed polyline approximating an orbit circle; the last point repeats the first.
pub fn orbit_ring_points(orbit_radius: f64, segments: u32) -> Vec<Vec3> {
    let segments = segments.max(3);
    (0..=segments)
        .map(|i| {
            let angle = (i % segments) as f64 / segments as f64 * FULL_TURN;
            let point = orbit_point(orbit_radius, angle);
            Vec3::new(point.x as f32, 0.0, point.y as f32)
        })
        .collect()
}

/// Draw one ring per body, tinted with the body's color.
fn draw_orbit_rings(
    mut gizmos: Gizmos,
    settings: Res<OrbitRingSettings>,
    config: Res<SceneConfig>,
    sim: Res<SimulationLoop>,
) {
    if !settings.visible {
        return;
    }

    for (id, body) in sim.registry().iter() {
        let color = config
            .bodies
            .get(id.index())
            .map(|spec| spec.color())
            .unwrap_or(Color::WHITE)
            .with_alpha(settings.alpha);

        let points = orbit_ring_points(body.orbit_radius(), settings.segments);
        for pair in points.windows(2) {
            gizmos.line(pair[0], pair[1], color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_is_closed_and_on_circle() {
        let points = orbit_ring_points(140.0, 64);
        assert_eq!(points.len(), 65);
        assert_eq!(points.first(), points.last());
        for point in &points {
            assert!((point.length() - 140.0).abs() < 1e-3);
            assert_eq!(point.y, 0.0);
        }
    }

    #[test]
    fn test_ring_has_minimum_segments() {
        assert_eq!(orbit_ring_points(90.0, 0).len(), 4);
    }
}
