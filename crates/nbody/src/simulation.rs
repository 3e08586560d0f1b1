//! Single-owner simulation driver
//!
//! `Simulation` bundles a validated `SimConfig`, the direct gravity force
//! model, the velocity Verlet integrator and the `SystemState` they act
//! on. It is what interactive loops and offline tools hold on to.

use tracing::debug;
use units::Time;

use crate::body::{Body, BodyId};
use crate::config::SimConfig;
use crate::diagnostics::{self, OrbitalElements};
use crate::error::{NBodyError, Result};
use crate::forces::DirectGravity;
use crate::integrator::{Integrator, VelocityVerlet};
use crate::snapshot::Snapshot;
use crate::state::SystemState;

/// A running N-body simulation with a fixed time step
///
/// # Examples
///
/// ```
/// use nbody::config::SimConfig;
/// use nbody::scenario;
/// use nbody::simulation::Simulation;
///
/// let config = SimConfig::default();
/// let bodies = scenario::sun_earth(config.gravitational_constant);
/// let mut sim = Simulation::new(config, bodies).unwrap();
///
/// let mut samples = 0;
/// sim.advance(100, 10, |_| samples += 1);
///
/// assert_eq!(samples, 10);
/// assert_eq!(sim.time(), 36_000.0);
/// assert!(sim.energy_drift().abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimConfig,
    force: DirectGravity,
    integrator: VelocityVerlet,
    state: SystemState,
}

impl Simulation {
    /// Builds a simulation starting at t = 0
    pub fn new(config: SimConfig, bodies: Vec<Body>) -> Result<Self> {
        Self::starting_at(config, bodies, 0.0)
    }

    /// Builds a simulation whose clock starts at `time` seconds
    pub fn starting_at(config: SimConfig, bodies: Vec<Body>, time: f64) -> Result<Self> {
        config.validate()?;
        let force = DirectGravity::with_constant(config.gravitational_constant);
        let state = SystemState::starting_at(bodies, time, &force)?;

        Ok(Self::with_state(config, force, state))
    }

    /// Resumes a run from saved kinematics
    ///
    /// `fresh` supplies masses and anchors; the snapshot overrides position
    /// and velocity of every body it names and sets the clock. Bodies the
    /// snapshot does not name keep their fresh kinematics. No frame shift is
    /// applied. The energy baseline is taken from the restored state.
    pub fn from_snapshot(config: SimConfig, mut fresh: Vec<Body>, snapshot: &Snapshot) -> Result<Self> {
        config.validate()?;
        snapshot.overlay(&mut fresh);
        let force = DirectGravity::with_constant(config.gravitational_constant);
        let state = SystemState::resumed(fresh, snapshot.time, &force)?;

        Ok(Self::with_state(config, force, state))
    }

    fn with_state(config: SimConfig, force: DirectGravity, state: SystemState) -> Self {
        Self {
            config,
            force,
            integrator: VelocityVerlet,
            state,
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn state(&self) -> &SystemState {
        &self.state
    }

    pub fn bodies(&self) -> &[Body] {
        &self.state.bodies
    }

    /// Simulated seconds since t = 0
    pub fn time(&self) -> f64 {
        self.state.time
    }

    pub fn dt(&self) -> f64 {
        self.config.dt
    }

    /// Advances exactly one time step
    pub fn step(&mut self) {
        self.integrator.step(&mut self.state, self.config.dt, &self.force);
    }

    /// Advances `n` steps, calling `sample` every `sample_interval` steps
    ///
    /// See [`Integrator::advance`] for the exact cadence.
    pub fn advance<F>(&mut self, n: usize, sample_interval: usize, mut sample: F)
    where
        F: FnMut(&SystemState),
    {
        self.integrator.advance(
            &mut self.state,
            self.config.dt,
            n,
            sample_interval,
            &self.force,
            &mut sample,
        );
    }

    /// Advances `n` steps at the configured `sample_interval`
    pub fn advance_sampled<F>(&mut self, n: usize, sample: F)
    where
        F: FnMut(&SystemState),
    {
        self.advance(n, self.config.sample_interval, sample);
    }

    /// Number of whole steps closest to `duration`
    pub fn steps_for(&self, duration: Time) -> usize {
        (duration.to_seconds() / self.config.dt).round().max(0.0) as usize
    }

    /// Advances for `duration` of simulated time without sampling
    pub fn run_for(&mut self, duration: Time) {
        let steps = self.steps_for(duration);
        debug!(steps, years = duration.to_years(), "running without sampling");
        self.integrator
            .integrate(&mut self.state, self.config.dt, steps, &self.force);
    }

    /// Index of the body called `name`
    pub fn body_id(&self, name: &str) -> Result<BodyId> {
        self.state
            .body_id(name)
            .ok_or_else(|| NBodyError::UnknownBody(name.to_string()))
    }

    /// The body at `id`
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range. Ids from [`Simulation::body_id`] are
    /// always valid; use [`Simulation::get_body`] for ids built by hand.
    pub fn body(&self, id: BodyId) -> &Body {
        &self.state.bodies[id.0]
    }

    pub fn get_body(&self, id: BodyId) -> Option<&Body> {
        self.state.get_body(id)
    }

    pub fn total_energy(&self) -> f64 {
        self.state.total_energy(&self.force)
    }

    pub fn energy_drift(&self) -> f64 {
        self.state.energy_drift(&self.force)
    }

    /// Keplerian elements of `body` around `primary`, `None` if unbound
    ///
    /// Panics on an out-of-range id, like [`Simulation::body`].
    pub fn orbital_elements(&self, body: BodyId, primary: BodyId) -> Option<OrbitalElements> {
        diagnostics::orbital_elements(self.body(body), self.body(primary), self.config.gravitational_constant)
    }

    /// Specific orbital energy of `body` relative to `primary`
    ///
    /// Panics on an out-of-range id, like [`Simulation::body`].
    pub fn binding_energy(&self, body: BodyId, primary: BodyId) -> f64 {
        diagnostics::binding_energy(self.body(body), self.body(primary), self.config.gravitational_constant)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }
}
