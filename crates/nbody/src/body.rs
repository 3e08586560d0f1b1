use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::anchor::Anchor;

/// Index of a body in its system's ordered collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BodyId(pub usize);

/// How a body's trajectory is produced
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Advanced by the integrator under the force model
    Integrated,
    /// Placed on an exact circular orbit around a reference body every step
    Anchored(Anchor),
}

impl Motion {
    pub fn is_integrated(&self) -> bool {
        matches!(self, Motion::Integrated)
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    pub name: String,
    pub mass: f64,                  // kg
    pub position: Point3<f64>,      // m (center-of-mass frame once in a SystemState)
    pub velocity: Vector3<f64>,     // m/s
    pub acceleration: Vector3<f64>, // m/s², recomputed every step
    pub motion: Motion,
}

impl Body {
    /// Creates a gravity-integrated body
    ///
    /// # Arguments
    ///
    /// * `name` - Identifier used for lookups and snapshot matching
    /// * `mass` - Mass in kg
    /// * `position` - Position in m
    /// * `velocity` - Velocity in m/s
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody::body::Body;
    ///
    /// let qaia = Body::new("Qaia", 5.972e24, [1.496e11, 0.0, 0.0], [0.0, 29_785.0, 0.0]);
    /// assert!(qaia.motion.is_integrated());
    /// assert_eq!(qaia.acceleration.magnitude(), 0.0);
    /// ```
    pub fn new(name: impl Into<String>, mass: f64, position: [f64; 3], velocity: [f64; 3]) -> Self {
        Body {
            name: name.into(),
            mass,
            position: Point3::from(position),
            velocity: Vector3::from(velocity),
            acceleration: Vector3::zeros(),
            motion: Motion::Integrated,
        }
    }

    /// Replaces this body's motion law with a kinematic anchor.
    ///
    /// Position and velocity passed to [`Body::new`] are overwritten the
    /// first time the anchor is applied.
    pub fn anchored(mut self, anchor: Anchor) -> Self {
        self.motion = Motion::Anchored(anchor);
        self
    }

    pub fn anchor(&self) -> Option<&Anchor> {
        match &self.motion {
            Motion::Anchored(anchor) => Some(anchor),
            Motion::Integrated => None,
        }
    }

    pub fn is_anchored(&self) -> bool {
        !self.motion.is_integrated()
    }

    pub fn momentum(&self) -> Vector3<f64> {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.magnitude_squared()
    }

    /// Position of this body as seen from `other`
    pub fn position_relative_to(&self, other: &Body) -> Vector3<f64> {
        self.position - other.position
    }

    /// Velocity of this body as seen from `other`
    pub fn velocity_relative_to(&self, other: &Body) -> Vector3<f64> {
        self.velocity - other.velocity
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        self.position_relative_to(other).magnitude()
    }

    /// Angular momentum about the origin (r × p)
    pub fn angular_momentum(&self) -> Vector3<f64> {
        self.position.coords.cross(&self.momentum())
    }

    pub fn is_finite(&self) -> bool {
        self.position.iter().all(|x| x.is_finite()) && self.velocity.iter().all(|v| v.is_finite())
    }
}
