//! Satellites on parametric circular orbits.
//!
//! A body's orbit is not force-integrated: its phase advances linearly with
//! time and the position is read straight off the orbit circle in the y=0
//! plane. Positions are kept in f64 (`DVec2` holding x and z) and only
//! narrowed to f32 when handed to rendering or picking.

use bevy::math::DVec2;
use bevy::prelude::*;

use crate::types::{normalize_angle, SimulationError, SPIN_INCREMENT};

#[cfg(test)]
mod proptest_body;

/// A single satellite with fixed orbital parameters and mutable phase.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitingBody {
    radius: f64,
    orbit_radius: f64,
    orbit_speed: f64,
    orbit_angle: f64,
    /// Position in the orbital plane as (x, z).
    position: DVec2,
    spin: f64,
}

impl OrbitingBody {
    /// Create a body at phase 0.
    ///
    /// `radius` and `orbit_radius` must be finite and strictly positive;
    /// `orbit_speed` may have any sign but must be finite.
    pub fn new(radius: f64, orbit_radius: f64, orbit_speed: f64) -> Result<Self, SimulationError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SimulationError::InvalidParameter {
                name: "radius",
                value: radius,
            });
        }
        if !(orbit_radius.is_finite() && orbit_radius > 0.0) {
            return Err(SimulationError::InvalidParameter {
                name: "orbit_radius",
                value: orbit_radius,
            });
        }
        if !orbit_speed.is_finite() {
            return Err(SimulationError::InvalidParameter {
                name: "orbit_speed",
                value: orbit_speed,
            });
        }

        Ok(Self {
            radius,
            orbit_radius,
            orbit_speed,
            orbit_angle: 0.0,
            position: orbit_point(orbit_radius, 0.0),
            spin: 0.0,
        })
    }

    /// Advance the orbital phase by `orbit_speed * elapsed`.
    ///
    /// Negative or non-finite `elapsed` is rejected and leaves the body untouched.
    pub fn update(&mut self, elapsed: f64) -> Result<(), SimulationError> {
        if !elapsed.is_finite() || elapsed < 0.0 {
            return Err(SimulationError::InvalidElapsed { elapsed });
        }
        if elapsed == 0.0 {
            return Ok(());
        }

        self.orbit_angle = normalize_angle(self.orbit_angle + self.orbit_speed * elapsed);
        self.position = orbit_point(self.orbit_radius, self.orbit_angle);
        Ok(())
    }

    /// Add one fixed spin increment. Not a toggle: every call adds again.
    pub fn activate(&mut self) {
        self.spin += SPIN_INCREMENT;
    }

    /// Visual radius, also used as the picking sphere radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn orbit_radius(&self) -> f64 {
        self.orbit_radius
    }

    /// Angular velocity in radians per time unit.
    pub fn orbit_speed(&self) -> f64 {
        self.orbit_speed
    }

    /// Current phase in [0, 2π).
    pub fn orbit_angle(&self) -> f64 {
        self.orbit_angle
    }

    /// Position in the orbital plane as (x, z).
    pub fn position(&self) -> DVec2 {
        self.position
    }

    /// Accumulated spin about the body's own y axis (radians).
    pub fn spin(&self) -> f64 {
        self.spin
    }

    /// World-space center in render units (y = 0).
    pub fn translation(&self) -> Vec3 {
        Vec3::new(self.position.x as f32, 0.0, self.position.y as f32)
    }

    /// Orientation produced by the accumulated spin.
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.spin as f32)
    }
}

/// Point on a circle of `orbit_radius` at `angle`, as (x, z).
pub fn orbit_point(orbit_radius: f64, angle: f64) -> DVec2 {
    DVec2::new(orbit_radius * angle.cos(), orbit_radius * angle.sin())
}
