//! Input handling for pointer picking and keyboard shortcuts.
//!
//! A left click is forwarded to [`SimulationLoop::on_pointer_down`] with the
//! main camera as the unprojection capability. Keyboard shortcuts control
//! simulation time.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::camera::{CameraView, MainCamera};
use crate::picking::Viewport;
use crate::simulation::{PointerDown, SimulationLoop, TimeControl};
use crate::types::SimulationSet;
use crate::ui::PointerCaptured;

/// Plugin providing keyboard input handling and pointer picking.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerCaptured>().add_systems(
            Update,
            (keyboard_shortcuts, pick_on_pointer_down)
                .in_set(SimulationSet::Input)
                .run_if(resource_exists::<SimulationLoop>),
        );
    }
}

/// Apply a time-control shortcut. Returns `true` if `key` is one.
///
/// Space toggles pause, `[`/`]` halve/double the scale, 1-4 select 1x/2x/4x/8x.
pub fn apply_time_shortcut(control: &mut TimeControl, key: KeyCode) -> bool {
    match key {
        KeyCode::Space => control.toggle_pause(),
        KeyCode::BracketLeft => control.set_scale(control.scale * 0.5),
        KeyCode::BracketRight => control.set_scale(control.scale * 2.0),
        KeyCode::Digit1 => control.set_scale(1.0),
        KeyCode::Digit2 => control.set_scale(2.0),
        KeyCode::Digit3 => control.set_scale(4.0),
        KeyCode::Digit4 => control.set_scale(8.0),
        _ => return false,
    }
    true
}

/// Handle keyboard shortcuts for simulation control.
fn keyboard_shortcuts(keys: Res<ButtonInput<KeyCode>>, mut sim: ResMut<SimulationLoop>) {
    for key in keys.get_just_pressed() {
        let control = sim.time_control_mut();
        if !apply_time_shortcut(control, *key) {
            continue;
        }
        if *key == KeyCode::Space {
            info!("Simulation {}", if control.paused { "paused" } else { "running" });
        } else {
            info!("Time scale: {}x", control.scale);
        }
    }
}

/// Pick and activate the body under the cursor on left click.
fn pick_on_pointer_down(
    mouse: Res<ButtonInput<MouseButton>>,
    captured: Res<PointerCaptured>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut sim: ResMut<SimulationLoop>,
) {
    if !mouse.just_pressed(MouseButton::Left) || captured.0 {
        return;
    }

    let Ok(window) = window_query.single() else {
        return;
    };

    let Some(cursor_pos) = window.cursor_position() else {
        return;
    };

    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };

    let Some(rect) = camera.logical_viewport_rect() else {
        return;
    };

    let event = PointerDown {
        position: cursor_pos,
        viewport: Viewport::from_rect(rect),
    };
    let view = CameraView {
        camera,
        transform: camera_transform,
    };
    sim.on_pointer_down(event, &view);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MAX_TIME_SCALE, MIN_TIME_SCALE};

    #[test]
    fn test_space_toggles_pause() {
        let mut control = TimeControl::default();
        assert!(apply_time_shortcut(&mut control, KeyCode::Space));
        assert!(control.paused);
        assert!(apply_time_shortcut(&mut control, KeyCode::Space));
        assert!(!control.paused);
    }

    #[test]
    fn test_brackets_scale_within_bounds() {
        let mut control = TimeControl::default();
        for _ in 0..20 {
            apply_time_shortcut(&mut control, KeyCode::BracketRight);
        }
        assert_eq!(control.scale, MAX_TIME_SCALE);

        for _ in 0..20 {
            apply_time_shortcut(&mut control, KeyCode::BracketLeft);
        }
        assert_eq!(control.scale, MIN_TIME_SCALE);
    }

    #[test]
    fn test_digit_presets() {
        let mut control = TimeControl::default();
        apply_time_shortcut(&mut control, KeyCode::Digit3);
        assert_eq!(control.scale, 4.0);
        apply_time_shortcut(&mut control, KeyCode::Digit1);
        assert_eq!(control.scale, 1.0);
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut control = TimeControl::default();
        assert!(!apply_time_shortcut(&mut control, KeyCode::KeyQ));
        assert_eq!(control, TimeControl::default());
    }
}
