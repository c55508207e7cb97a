//! Common test utilities for integration tests.
#![allow(dead_code)]

use bevy::prelude::*;
use orrery::camera::LookAtCamera;
use orrery::picking::Viewport;
use orrery::scene::SceneConfig;
use orrery::simulation::{ManualClock, PointerDown, SimulationLoop};

/// Viewport used by all pointer tests.
pub fn viewport() -> Viewport {
    Viewport::new(0.0, 0.0, 1280.0, 720.0)
}

/// The default scene camera for [`viewport`].
pub fn default_camera() -> LookAtCamera {
    let size = viewport().size;
    LookAtCamera::from_config(&SceneConfig::default().camera, size.x / size.y)
}

/// Loop over the default four bodies with a hand-driven clock at t = 0.
pub fn manual_loop() -> (SimulationLoop, ManualClock) {
    let clock = ManualClock::new(0.0);
    let registry = SceneConfig::default().build_registry().unwrap();
    (SimulationLoop::with_clock(registry, clock.clone()), clock)
}

/// Pointer-down at the pixel where `camera` sees `point`.
pub fn pointer_at(camera: &LookAtCamera, point: Vec3) -> PointerDown {
    let ndc = camera.project(point).expect("point in front of camera");
    PointerDown {
        position: viewport().ndc_to_pointer(ndc),
        viewport: viewport(),
    }
}

/// Render target that ignores the registry.
pub fn no_render() -> impl FnMut(&orrery::simulation::BodyRegistry) {
    |_: &orrery::simulation::BodyRegistry| {}
}
