//! Shared constants, system sets and the error type for the orbital scene.

use std::f64::consts::{PI, TAU};

use bevy::prelude::*;

/// System sets ordering one Bevy frame.
///
/// Pointer input is handled against the state left by the previous frame,
/// then every body is stepped and synced, then overlays are drawn.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Keyboard and pointer handling
    Input,
    /// Body updates and transform sync (the frame proper)
    Step,
    /// Gizmo overlays that read final positions
    Overlay,
}

/// Rotation applied to a body's spin each time it is activated (radians).
pub const SPIN_INCREMENT: f64 = PI / 8.0;

/// One full turn in radians.
pub const FULL_TURN: f64 = TAU;

/// Slowest allowed time scale multiplier.
pub const MIN_TIME_SCALE: f64 = 0.125;

/// Fastest allowed time scale multiplier.
pub const MAX_TIME_SCALE: f64 = 128.0;

/// Errors raised by body construction and integration.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    #[error("invalid elapsed time {elapsed} (must be finite and non-negative)")]
    InvalidElapsed { elapsed: f64 },

    #[error("invalid body parameter {name} = {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

/// Identifier of a body inside a registry (its insertion index).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub usize);

impl BodyId {
    /// Position of the body in registry order.
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for BodyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "body #{}", self.0)
    }
}

/// Wrap an angle into [0, 2π).
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(FULL_TURN);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= FULL_TURN { 0.0 } else { wrapped }
}
