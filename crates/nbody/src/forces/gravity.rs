//! Direct N-body gravity (O(N²) implementation)

use crate::body::Body;
use crate::forces::{ForceModel, G};
use nalgebra::Vector3;

/// Direct pairwise Newtonian gravity
///
/// Each unordered pair is visited once and the interaction is applied to
/// both members with opposite sign. There is no softening: coincident
/// bodies produce non-finite accelerations.
///
/// # Examples
///
/// ```
/// use nbody::body::Body;
/// use nbody::forces::{DirectGravity, ForceModel, G};
///
/// let bodies = vec![
///     Body::new("a", 1.0e20, [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]),
///     Body::new("b", 1.0e20, [1.0e6, 0.0, 0.0], [0.0, 0.0, 0.0]),
/// ];
///
/// let gravity = DirectGravity::with_constant(G);
/// let accels = gravity.accelerations(&bodies);
///
/// // Equal masses pull on each other equally and oppositely
/// assert_eq!(accels[0].x, -accels[1].x);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectGravity {
    /// Gravitational constant in m³ kg⁻¹ s⁻²
    pub g: f64,
}

impl DirectGravity {
    /// Creates a direct gravity force using the standard constant
    pub fn new() -> Self {
        Self { g: G }
    }

    /// Creates a direct gravity force with an explicit constant
    ///
    /// # Arguments
    ///
    /// * `g` - Gravitational constant, normally taken from `SimConfig`
    pub fn with_constant(g: f64) -> Self {
        Self { g }
    }
}

impl Default for DirectGravity {
    fn default() -> Self {
        Self::new()
    }
}

impl ForceModel for DirectGravity {
    fn accelerations(&self, bodies: &[Body]) -> Vec<Vector3<f64>> {
        let n = bodies.len();
        let mut accels = vec![Vector3::zeros(); n];

        for i in 0..n {
            for j in (i + 1)..n {
                let dr = bodies[j].position - bodies[i].position;
                let r2 = dr.magnitude_squared();
                let f = self.g / (r2 * r2.sqrt());

                accels[i] += dr * (f * bodies[j].mass);
                accels[j] -= dr * (f * bodies[i].mass);
            }
        }

        accels
    }

    fn potential_energy(&self, bodies: &[Body]) -> f64 {
        // Each pair counted once
        bodies
            .iter()
            .enumerate()
            .flat_map(|(i, a)| {
                bodies[i + 1..]
                    .iter()
                    .map(move |b| -self.g * a.mass * b.mass / a.distance_to(b))
            })
            .sum()
    }
}
