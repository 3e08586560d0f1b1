use std::collections::HashSet;

use nalgebra::{Point3, Vector3};
use tracing::debug;

use crate::anchor::apply_anchors;
use crate::body::{Body, BodyId};
use crate::diagnostics::barycenter;
use crate::error::{NBodyError, Result};
use crate::forces::ForceModel;

/// Complete state of an N-body system at a given time
///
/// A `SystemState` is owned by exactly one caller and mutated in place by
/// the integrator. Construction validates the bodies, places anchored bodies
/// on their orbits, moves everything into the center-of-mass frame and
/// records the energy baseline used for drift reporting.
#[derive(Debug, Clone)]
pub struct SystemState {
    /// Elapsed simulated time in seconds
    pub time: f64,
    /// Ordered collection of bodies
    pub bodies: Vec<Body>,
    /// Total energy captured at construction
    initial_energy: f64,
}

impl SystemState {
    /// Creates a system at t = 0
    ///
    /// # Arguments
    ///
    /// * `bodies` - The initial body collection
    /// * `force` - Force model used for the initial accelerations and energy
    ///
    /// # Errors
    ///
    /// Fails if a mass is not positive, a name is empty or duplicated,
    /// kinematics are non-finite, or an anchor is malformed.
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody::body::Body;
    /// use nbody::forces::DirectGravity;
    /// use nbody::state::SystemState;
    ///
    /// let bodies = vec![
    ///     Body::new("Sun", 1.989e30, [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]),
    ///     Body::new("Qaia", 5.972e24, [1.496e11, 0.0, 0.0], [0.0, 29_785.0, 0.0]),
    /// ];
    ///
    /// let system = SystemState::new(bodies, &DirectGravity::new()).unwrap();
    ///
    /// assert_eq!(system.body_count(), 2);
    /// assert_eq!(system.time, 0.0);
    /// // Zero up to round-off on the scale of Qaia's momentum
    /// assert!(system.total_momentum().magnitude() < 1e-9 * 5.972e24 * 29_785.0);
    /// ```
    pub fn new(bodies: Vec<Body>, force: &dyn ForceModel) -> Result<Self> {
        Self::starting_at(bodies, 0.0, force)
    }

    /// Creates a system whose clock starts at `time` seconds
    ///
    /// Anchors are evaluated at `time` before the center-of-mass shift.
    pub fn starting_at(mut bodies: Vec<Body>, time: f64, force: &dyn ForceModel) -> Result<Self> {
        check_start_time(time)?;
        validate_bodies(&bodies)?;

        apply_anchors(&mut bodies, time);
        shift_to_center_of_mass(&mut bodies);

        Ok(Self::assemble(bodies, time, force))
    }

    /// Rebuilds a system from restored kinematics at `time`
    ///
    /// Unlike [`SystemState::starting_at`] the frame is left as given, so
    /// restored bodies keep exactly the positions and velocities they were
    /// saved with. Anchored bodies are placed in phase at `time`.
    pub fn resumed(mut bodies: Vec<Body>, time: f64, force: &dyn ForceModel) -> Result<Self> {
        check_start_time(time)?;
        validate_bodies(&bodies)?;

        apply_anchors(&mut bodies, time);

        Ok(Self::assemble(bodies, time, force))
    }

    fn assemble(bodies: Vec<Body>, time: f64, force: &dyn ForceModel) -> Self {
        let mut state = Self {
            time,
            bodies,
            initial_energy: 0.0,
        };
        state.refresh_accelerations(force);
        state.initial_energy = state.total_energy(force);

        debug!(
            bodies = state.bodies.len(),
            time = state.time,
            initial_energy = state.initial_energy,
            "constructed system state"
        );

        state
    }

    /// Recomputes every body's acceleration from the current positions
    pub fn refresh_accelerations(&mut self, force: &dyn ForceModel) {
        let accelerations = force.accelerations(&self.bodies);
        self.bodies
            .iter_mut()
            .zip(accelerations)
            .for_each(|(body, accel)| body.acceleration = accel);
    }

    /// Returns the number of bodies in the system
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Looks up a body index by name
    pub fn body_id(&self, name: &str) -> Option<BodyId> {
        self.bodies.iter().position(|b| b.name == name).map(BodyId)
    }

    /// Gets a reference to a body by ID
    pub fn get_body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.0)
    }

    /// Gets a reference to a body by name
    pub fn body(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name == name)
    }

    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.mass).sum()
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(|b| b.kinetic_energy()).sum()
    }

    /// Kinetic plus potential energy of the whole system
    pub fn total_energy(&self, force: &dyn ForceModel) -> f64 {
        self.kinetic_energy() + force.potential_energy(&self.bodies)
    }

    /// Total energy recorded when the state was constructed
    pub fn initial_energy(&self) -> f64 {
        self.initial_energy
    }

    /// Relative energy change since construction, (E - E₀) / |E₀|
    ///
    /// Bounded oscillation is expected from the symplectic integrator;
    /// secular growth means the step is too coarse or bodies came close.
    pub fn energy_drift(&self, force: &dyn ForceModel) -> f64 {
        (self.total_energy(force) - self.initial_energy) / self.initial_energy.abs()
    }

    /// Returns the total momentum of all bodies
    ///
    /// Zero after construction; anchored bodies break momentum
    /// conservation afterwards since their motion ignores gravity.
    pub fn total_momentum(&self) -> Vector3<f64> {
        self.bodies
            .iter()
            .map(|b| b.momentum())
            .fold(Vector3::zeros(), |acc, p| acc + p)
    }

    /// Returns the total angular momentum about the origin
    pub fn total_angular_momentum(&self) -> Vector3<f64> {
        self.bodies
            .iter()
            .map(|b| b.angular_momentum())
            .fold(Vector3::zeros(), |acc, l| acc + l)
    }

    /// Mass-weighted centroid position and velocity
    pub fn center_of_mass(&self) -> (Point3<f64>, Vector3<f64>) {
        center_of_mass(&self.bodies)
    }
}

/// Mass-weighted centroid position and velocity of `bodies`
///
/// Returns the origin and zero velocity for an empty slice.
pub fn center_of_mass(bodies: &[Body]) -> (Point3<f64>, Vector3<f64>) {
    let all: Vec<&Body> = bodies.iter().collect();
    barycenter(&all)
}

/// Translates every body so that the centroid sits at the origin and the
/// total momentum is zero.
pub fn shift_to_center_of_mass(bodies: &mut [Body]) {
    let (com_position, com_velocity) = center_of_mass(bodies);
    for body in bodies.iter_mut() {
        body.position -= com_position.coords;
        body.velocity -= com_velocity;
    }
}

fn check_start_time(time: f64) -> Result<()> {
    if time.is_finite() {
        Ok(())
    } else {
        Err(NBodyError::config(format!("start time must be finite, got {time}")))
    }
}

fn validate_bodies(bodies: &[Body]) -> Result<()> {
    let mut names = HashSet::new();

    for (idx, body) in bodies.iter().enumerate() {
        if !(body.mass.is_finite() && body.mass > 0.0) {
            return Err(NBodyError::InvalidMass {
                name: body.name.clone(),
                mass: body.mass,
            });
        }
        if body.name.is_empty() {
            return Err(NBodyError::EmptyName(idx));
        }
        if !names.insert(body.name.as_str()) {
            return Err(NBodyError::DuplicateName(body.name.clone()));
        }
        match body.anchor() {
            Some(anchor) => anchor.validate(idx, bodies)?,
            None if !body.is_finite() => {
                return Err(NBodyError::NonFiniteKinematics(body.name.clone()))
            }
            None => {}
        }
    }

    Ok(())
}
