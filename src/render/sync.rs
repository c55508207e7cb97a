//! Position synchronization between the simulation and rendering.

use bevy::prelude::*;

use crate::render::bodies::BodyVisual;
use crate::simulation::BodyRegistry;

/// Copy each body's position and spin into its mesh `Transform`.
///
/// This is the render step of a simulation frame; it runs once all bodies
/// have been updated.
pub fn sync_body_transforms(
    registry: &BodyRegistry,
    visuals: &mut Query<(&BodyVisual, &mut Transform)>,
) {
    for (visual, mut transform) in visuals.iter_mut() {
        let Some(body) = registry.get(visual.id) else {
            continue;
        };
        transform.translation = body.translation();
        transform.rotation = body.rotation();
    }
}
