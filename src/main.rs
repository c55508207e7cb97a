//! Orrery - Interactive Orbital Scene
//!
//! A desktop application showing a central body with orbiting satellites.
//! Clicking a satellite spins it.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use orrery::camera::CameraPlugin;
use orrery::input::InputPlugin;
use orrery::render::RenderPlugin;
use orrery::scene::SceneConfig;
use orrery::time::TimePlugin;
use orrery::ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Orrery".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        // Insert resources before plugins that depend on them
        .insert_resource(SceneConfig::default())
        .add_plugins((TimePlugin, CameraPlugin, InputPlugin, RenderPlugin, UiPlugin))
        .run();
}
