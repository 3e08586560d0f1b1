//! Force models for N-body simulations
//!
//! This module provides the `ForceModel` trait and the direct pairwise
//! gravity used by the integrator.

use crate::body::Body;
use nalgebra::Vector3;

pub mod gravity;


pub use gravity::DirectGravity;

/// Gravitational constant in m³ kg⁻¹ s⁻²
pub const G: f64 = 6.674e-11;

/// A source of acceleration on bodies in an N-body system
///
/// Force models compute the acceleration of every body at once so that
/// pairwise interactions can be evaluated a single time per pair.
///
/// # Examples
///
/// ```
/// use nbody::body::Body;
/// use nbody::forces::{DirectGravity, ForceModel};
///
/// let bodies = vec![
///     Body::new("Sun", 1.989e30, [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]),
///     Body::new("Qaia", 5.972e24, [1.496e11, 0.0, 0.0], [0.0, 29_785.0, 0.0]),
/// ];
///
/// let accels = DirectGravity::new().accelerations(&bodies);
/// assert!(accels[1].x < 0.0);
/// ```
pub trait ForceModel: Send + Sync {
    /// Compute the acceleration of every body in `bodies`
    ///
    /// # Returns
    ///
    /// One acceleration vector per body, in m/s², in the same order
    fn accelerations(&self, bodies: &[Body]) -> Vec<Vector3<f64>>;

    /// Compute potential energy of the configuration (optional)
    ///
    /// Default implementation returns 0.0. Override for force models
    /// that contribute to potential energy (e.g., gravity).
    ///
    /// # Returns
    ///
    /// Potential energy in J
    fn potential_energy(&self, _bodies: &[Body]) -> f64 {
        0.0
    }
}
