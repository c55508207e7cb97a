//! Camera system for the orbital scene.
//!
//! Provides a perspective camera that orbits the central body with damped
//! rotation and zoom, plus two [`Unproject`] implementations used for picking:
//! [`CameraView`] wraps Bevy's camera, [`LookAtCamera`] is a plain
//! perspective model usable without an `App`.

use bevy::{
    input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll},
    prelude::*,
};

use crate::picking::{Unproject, Viewport};
use crate::scene::{CameraConfig, SceneConfig};
use crate::ui::PointerCaptured;

/// Closest allowed camera distance from the focus point.
pub const MIN_DISTANCE: f32 = 100.0;

/// Furthest allowed camera distance from the focus point.
pub const MAX_DISTANCE: f32 = 3000.0;

/// Pitch limit in radians, keeps the camera off the poles.
pub const MAX_PITCH: f32 = 1.45;

/// Zoom speed multiplier for scroll wheel.
pub const ZOOM_SPEED: f32 = 0.1;

/// Radians of rotation per pixel of drag.
pub const ROTATE_SPEED: f32 = 0.005;

/// Exponential damping rate (per second) towards the target orientation.
pub const DAMPING: f32 = 8.0;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Orbit state of the main camera around `focus`.
///
/// Input writes the `target_*` fields; the current values chase them each frame.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct OrbitCamera {
    pub focus: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub target_yaw: f32,
    pub target_pitch: f32,
    pub target_distance: f32,
}

impl OrbitCamera {
    /// Orbit state that reproduces a camera at `position` looking at `focus`.
    pub fn looking_at(position: Vec3, focus: Vec3) -> Self {
        let offset = position - focus;
        let distance = offset.length().max(f32::EPSILON);
        let yaw = offset.x.atan2(offset.z);
        let pitch = (offset.y / distance).clamp(-1.0, 1.0).asin();
        Self {
            focus,
            yaw,
            pitch,
            distance,
            target_yaw: yaw,
            target_pitch: pitch,
            target_distance: distance,
        }
    }

    /// Current camera position.
    pub fn position(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.focus
            + self.distance * Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw)
    }

    pub fn rotate(&mut self, delta: Vec2) {
        self.target_yaw -= delta.x * ROTATE_SPEED;
        self.target_pitch = (self.target_pitch + delta.y * ROTATE_SPEED).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Logarithmic zoom: positive `scroll` moves closer.
    pub fn zoom(&mut self, scroll: f32) {
        let zoom_factor = 1.0 - scroll * ZOOM_SPEED;
        self.target_distance = (self.target_distance * zoom_factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Move current values towards their targets over `dt` seconds.
    pub fn damp(&mut self, dt: f32) {
        let blend = 1.0 - (-DAMPING * dt).exp();
        self.yaw += (self.target_yaw - self.yaw) * blend;
        self.pitch += (self.target_pitch - self.pitch) * blend;
        self.distance += (self.target_distance - self.distance) * blend;
    }
}

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerCaptured>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, (camera_input, apply_orbit).chain());
    }
}

/// Spawn the main camera with perspective projection.
fn setup_camera(mut commands: Commands, config: Res<SceneConfig>) {
    let camera = &config.camera;
    let orbit = OrbitCamera::looking_at(camera.position, camera.target);

    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: camera.fov_degrees.to_radians(),
            near: camera.near,
            far: camera.far,
            ..default()
        }),
        Transform::from_translation(orbit.position()).looking_at(orbit.focus, Vec3::Y),
        orbit,
        MainCamera,
    ));
}

/// Right drag orbits, scroll wheel zooms.
fn camera_input(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mouse_scroll: Res<AccumulatedMouseScroll>,
    captured: Res<PointerCaptured>,
    mut camera_query: Query<&mut OrbitCamera, With<MainCamera>>,
) {
    if captured.0 {
        return;
    }

    let Ok(mut orbit) = camera_query.single_mut() else {
        return;
    };

    if mouse_buttons.pressed(MouseButton::Right) && mouse_motion.delta != Vec2::ZERO {
        orbit.rotate(mouse_motion.delta);
    }

    if mouse_scroll.delta.y != 0.0 {
        orbit.zoom(mouse_scroll.delta.y);
    }
}

/// Apply damped orbit state to the camera transform.
fn apply_orbit(
    time: Res<Time>,
    mut camera_query: Query<(&mut OrbitCamera, &mut Transform), With<MainCamera>>,
) {
    let Ok((mut orbit, mut transform)) = camera_query.single_mut() else {
        return;
    };

    orbit.damp(time.delta_secs());
    *transform = Transform::from_translation(orbit.position()).looking_at(orbit.focus, Vec3::Y);
}

/// Bevy camera as an [`Unproject`] capability.
pub struct CameraView<'a> {
    pub camera: &'a Camera,
    pub transform: &'a GlobalTransform,
}

impl Unproject for CameraView<'_> {
    fn unproject(&self, ndc: Vec2) -> Option<Ray3d> {
        let rect = self.camera.logical_viewport_rect()?;
        let position = Viewport::from_rect(rect).ndc_to_pointer(ndc);
        self.camera.viewport_to_world(self.transform, position).ok()
    }
}

/// Perspective camera described by position, look target and field of view.
#[derive(Clone, Debug, PartialEq)]
pub struct LookAtCamera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov: f32,
    /// Viewport width over height.
    pub aspect: f32,
}

impl LookAtCamera {
    pub fn from_config(config: &CameraConfig, aspect: f32) -> Self {
        Self {
            position: config.position,
            target: config.target,
            up: Vec3::Y,
            fov: config.fov_degrees.to_radians(),
            aspect,
        }
    }

    /// Orthonormal (forward, right, up) basis.
    fn basis(&self) -> Option<(Vec3, Vec3, Vec3)> {
        let forward = (self.target - self.position).try_normalize()?;
        let right = forward.cross(self.up).try_normalize()?;
        let up = right.cross(forward);
        Some((forward, right, up))
    }

    /// NDC of a world point, or `None` when it is behind the camera.
    pub fn project(&self, point: Vec3) -> Option<Vec2> {
        let (forward, right, up) = self.basis()?;
        let half_height = (self.fov * 0.5).tan();
        let offset = point - self.position;
        let depth = offset.dot(forward);
        if depth <= 0.0 {
            return None;
        }
        Some(Vec2::new(
            offset.dot(right) / (depth * half_height * self.aspect),
            offset.dot(up) / (depth * half_height),
        ))
    }
}

impl Unproject for LookAtCamera {
    fn unproject(&self, ndc: Vec2) -> Option<Ray3d> {
        let (forward, right, up) = self.basis()?;
        let half_height = (self.fov * 0.5).tan();
        let direction =
            forward + right * (ndc.x * half_height * self.aspect) + up * (ndc.y * half_height);
        Some(Ray3d {
            origin: self.position,
            direction: Dir3::new(direction).ok()?,
        })
    }
}
