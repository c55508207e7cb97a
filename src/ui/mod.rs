//! UI module providing the egui info panel.

pub mod info_panel;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub use info_panel::{body_rows, BodyRow};

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerCaptured>()
            .add_systems(EguiPrimaryContextPass, info_panel::info_panel);
    }
}

/// Whether egui claimed the pointer during the last UI pass.
///
/// Picking and camera input ignore the pointer while this is set, so clicks
/// on the panel never reach the scene.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerCaptured(pub bool);
