//! Highlight ring around the most recently activated body.

use bevy::prelude::*;

use crate::simulation::SimulationLoop;
use crate::types::SimulationSet;

/// Plugin providing selection highlighting.
pub struct HighlightPlugin;

impl Plugin for HighlightPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, draw_highlight.in_set(SimulationSet::Overlay));
    }
}

/// Draw a cyan ring around the last activated body, in its orbital plane.
fn draw_highlight(mut gizmos: Gizmos, sim: Res<SimulationLoop>) {
    let Some(body) = sim.last_activated().and_then(|id| sim.registry().get(id)) else {
        return;
    };

    let center = body.translation();
    let ring_radius = body.radius() as f32 * 1.5;
    let color = Color::srgba(0.0, 1.0, 1.0, 0.8);

    // Draw circle using line segments
    let segments = 32;
    for i in 0..segments {
        let t0 = (i as f32 / segments as f32) * std::f32::consts::TAU;
        let t1 = ((i + 1) as f32 / segments as f32) * std::f32::consts::TAU;

        let p0 = center + Vec3::new(ring_radius * t0.cos(), 0.0, ring_radius * t0.sin());
        let p1 = center + Vec3::new(ring_radius * t1.cos(), 0.0, ring_radius * t1.sin());

        gizmos.line(p0, p1, color);
    }
}
