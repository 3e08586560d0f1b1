//! Time integration for N-body systems
//!
//! The integrator is velocity Verlet: second order and symplectic, so the
//! total energy of a bound system oscillates around its initial value
//! instead of drifting away from it. Anchored bodies are skipped by the
//! update and re-placed on their prescribed orbits after every step.

use crate::anchor::apply_anchors;
use crate::body::Motion;
use crate::forces::ForceModel;
use crate::state::SystemState;
use nalgebra::Vector3;

/// A fixed-step time integrator for N-body systems
pub trait Integrator: Send + Sync {
    /// Advance the system by one timestep
    ///
    /// # Arguments
    ///
    /// * `state` - Current system state (modified in place)
    /// * `dt` - Timestep in seconds
    /// * `force` - Force model to compute accelerations
    fn step(&self, state: &mut SystemState, dt: f64, force: &dyn ForceModel);

    /// Advance the system by multiple timesteps
    ///
    /// # Returns
    ///
    /// Final time after integration
    fn integrate(
        &self,
        state: &mut SystemState,
        dt: f64,
        n_steps: usize,
        force: &dyn ForceModel,
    ) -> f64 {
        for _ in 0..n_steps {
            self.step(state, dt, force);
        }
        state.time
    }

    /// Advance `n_steps`, handing the state to `sample` on a fixed cadence
    ///
    /// The sampler runs after step `i` (counting from zero) whenever
    /// `i % sample_interval == 0`, so the first step is always sampled.
    /// A `sample_interval` of zero never samples.
    fn advance(
        &self,
        state: &mut SystemState,
        dt: f64,
        n_steps: usize,
        sample_interval: usize,
        force: &dyn ForceModel,
        sample: &mut dyn FnMut(&SystemState),
    ) -> f64 {
        for i in 0..n_steps {
            self.step(state, dt, force);
            if sample_interval > 0 && i % sample_interval == 0 {
                sample(state);
            }
        }
        state.time
    }
}

/// Velocity Verlet integrator (2nd order, symplectic)
///
/// 1. Drift: x(t + dt) = x(t) + v(t) * dt + a(t) * dt²/2, then place
///    anchored bodies at t + dt around their drifted references
/// 2. Recompute a(t + dt) at the new positions
/// 3. Kick: v(t + dt) = v(t) + (a(t) + a(t + dt)) * dt/2
/// 4. Advance the clock and re-apply anchors against the kicked velocities
///
/// Accelerations are carried on the bodies between steps, so each step
/// costs a single force evaluation.
///
/// # Examples
///
/// ```
/// use nbody::body::Body;
/// use nbody::forces::DirectGravity;
/// use nbody::integrator::{Integrator, VelocityVerlet};
/// use nbody::state::SystemState;
///
/// let force = DirectGravity::new();
/// let mut system = SystemState::new(
///     vec![
///         Body::new("Sun", 1.989e30, [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]),
///         Body::new("Qaia", 5.972e24, [1.496e11, 0.0, 0.0], [0.0, 29_785.0, 0.0]),
///     ],
///     &force,
/// )
/// .unwrap();
///
/// VelocityVerlet.step(&mut system, 360.0, &force);
/// assert_eq!(system.time, 360.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct VelocityVerlet;

impl Integrator for VelocityVerlet {
    fn step(&self, state: &mut SystemState, dt: f64, force: &dyn ForceModel) {
        let half_dt_sq = 0.5 * dt * dt;
        let t_next = state.time + dt;

        for body in state.bodies.iter_mut() {
            match body.motion {
                Motion::Integrated => {
                    body.position += body.velocity * dt + body.acceleration * half_dt_sq;
                }
                Motion::Anchored(_) => {}
            }
        }
        apply_anchors(&mut state.bodies, t_next);

        let previous: Vec<Vector3<f64>> = state.bodies.iter().map(|b| b.acceleration).collect();
        state.refresh_accelerations(force);

        for (body, a_old) in state.bodies.iter_mut().zip(previous) {
            match body.motion {
                Motion::Integrated => {
                    body.velocity += (a_old + body.acceleration) * (0.5 * dt);
                }
                Motion::Anchored(_) => {}
            }
        }

        state.time = t_next;
        apply_anchors(&mut state.bodies, t_next);
    }
}
