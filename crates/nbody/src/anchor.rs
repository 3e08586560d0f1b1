//! Kinematic anchors
//!
//! An anchored body ignores gravity: at every instant it sits on an exact
//! circular orbit around its reference body, optionally tilted about the
//! ascending-node axis (+x). It still has mass and pulls on every other
//! body through the force model.

use std::f64::consts::TAU;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use units::{AngularVelocity, Length};

use crate::body::{Body, BodyId, Motion};
use crate::error::{NBodyError, Result};

/// A circular orbit prescribed for one body
///
/// # Examples
///
/// ```
/// use nbody::anchor::Anchor;
/// use nbody::body::BodyId;
/// use units::{AngularVelocity, Length};
///
/// // Geostationary satellite of body 1
/// let anchor = Anchor::new(
///     BodyId(1),
///     Length::from_meters(4.216e7),
///     AngularVelocity::geostationary(),
/// );
///
/// let (offset, _) = anchor.offset_at(0.0);
/// assert_eq!(offset.x, 4.216e7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    /// Body the orbit is centered on
    pub reference: BodyId,
    /// Orbit radius in m
    pub radius: f64,
    /// Angular velocity in rad/s (negative for retrograde)
    pub angular_velocity: f64,
    /// Orbital angle at t = 0 in radians
    pub phase_at_epoch: f64,
    /// Tilt of the orbit plane about the x axis in radians
    pub inclination: f64,
}

impl Anchor {
    /// Creates an equatorial anchor starting on the +x axis
    pub fn new(reference: BodyId, radius: Length, angular_velocity: AngularVelocity) -> Self {
        Self {
            reference,
            radius: radius.to_m(),
            angular_velocity: angular_velocity.to_rad_per_sec(),
            phase_at_epoch: 0.0,
            inclination: 0.0,
        }
    }

    pub fn with_phase(mut self, phase_at_epoch: f64) -> Self {
        self.phase_at_epoch = phase_at_epoch;
        self
    }

    pub fn with_inclination(mut self, inclination: f64) -> Self {
        self.inclination = inclination;
        self
    }

    /// Orbital angle at `time`, wrapped into [0, 2π)
    pub fn angle_at(&self, time: f64) -> f64 {
        (self.phase_at_epoch + self.angular_velocity * time).rem_euclid(TAU)
    }

    /// Position and velocity relative to the reference body at `time`
    pub fn offset_at(&self, time: f64) -> (Vector3<f64>, Vector3<f64>) {
        let theta = self.angle_at(time);
        let (sin_t, cos_t) = theta.sin_cos();
        let (sin_i, cos_i) = self.inclination.sin_cos();

        let position = Vector3::new(cos_t, sin_t * cos_i, -sin_t * sin_i) * self.radius;
        let velocity = Vector3::new(-sin_t, cos_t * cos_i, -cos_t * sin_i)
            * (self.radius * self.angular_velocity);

        (position, velocity)
    }

    /// Checks the anchor of body `index` against the collection it lives in.
    ///
    /// The reference must be another, gravity-integrated body so that anchor
    /// placement never depends on the order anchors are applied in.
    pub(crate) fn validate(&self, index: usize, bodies: &[Body]) -> Result<()> {
        let name = &bodies[index].name;
        let reference = self.reference.0;

        if reference >= bodies.len() {
            return Err(NBodyError::anchor(
                name.as_str(),
                format!("reference index {} out of range ({} bodies)", reference, bodies.len()),
            ));
        }
        if reference == index {
            return Err(NBodyError::anchor(name.as_str(), "body cannot anchor to itself"));
        }
        if bodies[reference].is_anchored() {
            return Err(NBodyError::anchor(
                name.as_str(),
                format!("reference '{}' is itself anchored", bodies[reference].name),
            ));
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(NBodyError::anchor(
                name.as_str(),
                format!("radius must be positive and finite, got {}", self.radius),
            ));
        }
        let angles = [self.angular_velocity, self.phase_at_epoch, self.inclination];
        if angles.iter().any(|x| !x.is_finite()) {
            return Err(NBodyError::anchor(
                name.as_str(),
                "angular velocity, phase and inclination must be finite",
            ));
        }
        Ok(())
    }
}

/// Places every anchored body on its prescribed orbit at `time`.
///
/// Velocities include the reference body's own velocity, so anchored
/// bodies co-move with whatever they orbit.
pub fn apply_anchors(bodies: &mut [Body], time: f64) {
    for idx in 0..bodies.len() {
        let anchor = match bodies[idx].motion {
            Motion::Anchored(anchor) => anchor,
            Motion::Integrated => continue,
        };

        let reference = &bodies[anchor.reference.0];
        let (ref_position, ref_velocity) = (reference.position, reference.velocity);
        let (offset, relative_velocity) = anchor.offset_at(time);

        let body = &mut bodies[idx];
        body.position = ref_position + offset;
        body.velocity = ref_velocity + relative_velocity;
    }
}
