//! Rendering for the orbital scene.
//!
//! Bevy does the drawing; this module spawns the meshes, copies body state into
//! `Transform`s once per simulation frame, and draws gizmo overlays.

pub mod bodies;
pub mod highlight;
pub mod orbits;
mod sync;

use bevy::prelude::*;

use self::bodies::SceneSpawnPlugin;
use self::highlight::HighlightPlugin;
use self::orbits::OrbitRingPlugin;

pub use self::bodies::{BodyVisual, CentralBody};
pub use self::orbits::OrbitRingSettings;
pub use self::sync::sync_body_transforms;

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::BLACK))
            .add_plugins((SceneSpawnPlugin, OrbitRingPlugin, HighlightPlugin));
    }
}
