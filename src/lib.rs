//! Orrery - Interactive Orbital Scene
//!
//! A library crate providing the orbital scene components: parametric
//! satellites, pointer picking and the frame-driven simulation loop, plus the
//! Bevy plugins that put them on screen.

pub mod body;
pub mod camera;
pub mod input;
pub mod picking;
pub mod render;
pub mod scene;
pub mod simulation;
pub mod time;
pub mod types;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
