//! Pointer picking: mapping a 2D pointer position to the body under it.
//!
//! The picking algorithm only needs two narrow capabilities:
//! - a camera that can [`Unproject`] a normalized device coordinate into a ray;
//! - a [`BoundingSphere`] per candidate that reports the ray distance of a hit.
//!
//! Everything here is stateless and side-effect free.

use bevy::prelude::*;

/// Camera capability: turn a normalized device coordinate into a world ray.
///
/// Coordinates outside [-1, 1] are valid input and still produce a ray.
pub trait Unproject {
    fn unproject(&self, ndc: Vec2) -> Option<Ray3d>;
}

impl<T: Unproject + ?Sized> Unproject for &T {
    fn unproject(&self, ndc: Vec2) -> Option<Ray3d> {
        (**self).unproject(ndc)
    }
}

/// The on-screen rectangle the scene is drawn into, in logical pixels.
///
/// `min` is the top-left corner; y grows downwards as in window coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub min: Vec2,
    pub size: Vec2,
}

impl Viewport {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(left, top),
            size: Vec2::new(width, height),
        }
    }

    pub fn from_rect(rect: Rect) -> Self {
        Self {
            min: rect.min,
            size: rect.size(),
        }
    }

    /// Normalize a pointer position to NDC (x right, y up, [-1, 1] inside the viewport).
    ///
    /// Positions outside the viewport are not rejected. Returns `None` only for a
    /// viewport with no area.
    pub fn pointer_to_ndc(&self, pointer: Vec2) -> Option<Vec2> {
        if !(self.size.x > 0.0 && self.size.y > 0.0) {
            return None;
        }
        let relative = (pointer - self.min) / self.size;
        Some(Vec2::new(relative.x * 2.0 - 1.0, -relative.y * 2.0 + 1.0))
    }

    /// Inverse of [`Viewport::pointer_to_ndc`].
    pub fn ndc_to_pointer(&self, ndc: Vec2) -> Vec2 {
        let relative = Vec2::new((ndc.x + 1.0) * 0.5, (1.0 - ndc.y) * 0.5);
        self.min + relative * self.size
    }
}

/// Sphere used as a stand-in for a body's geometry when picking.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingSphere {
    pub center: Vec3,
    pub radius: f32,
}

impl BoundingSphere {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Distance along `ray` to the nearest intersection at or in front of the origin.
    ///
    /// A ray starting inside the sphere reports where it exits.
    pub fn intersect(&self, ray: &Ray3d) -> Option<f32> {
        // |o + t d - c|^2 = r^2 with |d| = 1  ->  t^2 + 2 b t + c = 0
        let direction: Vec3 = *ray.direction;
        let offset = ray.origin - self.center;
        let b = offset.dot(direction);
        let c = offset.length_squared() - self.radius * self.radius;

        let discr = b * b - c;
        if discr < 0.0 {
            return None;
        }

        let sqrt_d = discr.sqrt();
        let near = -b - sqrt_d;
        let far = -b + sqrt_d;

        if near >= 0.0 {
            Some(near)
        } else if far >= 0.0 {
            Some(far)
        } else {
            None
        }
    }
}

/// A candidate reported by [`pick`] together with its distance along the ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickHit<K> {
    pub key: K,
    pub distance: f32,
}

/// Find the candidate nearest to the camera under `ndc`.
///
/// Returns `None` if the camera cannot produce a ray or no sphere is hit.
pub fn pick<K, C, I>(ndc: Vec2, camera: &C, candidates: I) -> Option<PickHit<K>>
where
    C: Unproject + ?Sized,
    I: IntoIterator<Item = (K, BoundingSphere)>,
{
    let ray = camera.unproject(ndc)?;
    pick_along(&ray, candidates)
}

/// Nearest hit along an already constructed ray.
///
/// Equal distances resolve to the candidate that came first.
pub fn pick_along<K, I>(ray: &Ray3d, candidates: I) -> Option<PickHit<K>>
where
    I: IntoIterator<Item = (K, BoundingSphere)>,
{
    let mut closest: Option<PickHit<K>> = None;

    for (key, sphere) in candidates {
        let Some(distance) = sphere.intersect(ray) else {
            continue;
        };
        if closest.as_ref().is_none_or(|hit| distance < hit.distance) {
            closest = Some(PickHit { key, distance });
        }
    }

    closest
}
