//! Long-run escape scans
//!
//! A stability check integrates a simulation for a long stretch of time and
//! tests, every `check_interval`, whether each watched satellite is still
//! bound to its primary. The first check at which a satellite's binding
//! energy turns positive is recorded as its escape.

use serde::Serialize;
use tracing::{debug, info};
use units::Time;

use crate::body::BodyId;
use crate::error::{NBodyError, Result};
use crate::simulation::Simulation;

/// The first check at which a satellite was found unbound
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EscapeEvent {
    pub body: String,
    /// Simulated seconds at the check that detected the escape
    pub time: f64,
    /// Distance from the primary at that check (m)
    pub distance: f64,
    /// Specific orbital energy at that check (J/kg)
    pub binding_energy: f64,
}

impl EscapeEvent {
    pub fn years(&self) -> f64 {
        Time::from_seconds(self.time).to_years()
    }
}

/// Outcome of a stability scan
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StabilityReport {
    pub primary: String,
    pub watched: Vec<String>,
    pub simulated_seconds: f64,
    /// Escapes in the order they were detected
    pub escapes: Vec<EscapeEvent>,
    /// Relative energy drift at the end of the scan
    pub energy_drift: f64,
}

impl StabilityReport {
    /// Watched bodies that never escaped
    pub fn survivors(&self) -> Vec<&str> {
        self.watched
            .iter()
            .filter(|name| !self.escapes.iter().any(|e| &e.body == *name))
            .map(String::as_str)
            .collect()
    }

    pub fn all_bound(&self) -> bool {
        self.escapes.is_empty()
    }
}

/// Which satellites to watch, around which primary, how often
#[derive(Debug, Clone)]
pub struct StabilityCheck {
    primary: BodyId,
    watched: Vec<BodyId>,
    check_interval_steps: usize,
}

impl StabilityCheck {
    /// Watches the named satellites of `primary_name`
    ///
    /// The check interval is rounded to whole steps, with a minimum of one.
    ///
    /// # Errors
    ///
    /// `UnknownBody` if any name is not in the simulation, `InvalidConfig`
    /// if the primary is among the watched bodies.
    pub fn new(
        sim: &Simulation,
        primary_name: &str,
        watched_names: &[&str],
        check_interval: Time,
    ) -> Result<Self> {
        let primary = sim.body_id(primary_name)?;
        let watched = watched_names
            .iter()
            .map(|name| sim.body_id(name))
            .collect::<Result<Vec<_>>>()?;
        if watched.contains(&primary) {
            return Err(NBodyError::config(format!(
                "primary '{primary_name}' cannot be watched for escape from itself"
            )));
        }

        Ok(Self {
            primary,
            watched,
            check_interval_steps: sim.steps_for(check_interval).max(1),
        })
    }

    /// Watches every integrated body currently bound to `primary_name`
    ///
    /// Anchored bodies cannot escape and are left out.
    pub fn satellites_of(sim: &Simulation, primary_name: &str, check_interval: Time) -> Result<Self> {
        let primary = sim.body_id(primary_name)?;
        let watched = (0..sim.bodies().len())
            .map(BodyId)
            .filter(|&id| id != primary)
            .filter(|&id| !sim.body(id).is_anchored())
            .filter(|&id| sim.binding_energy(id, primary) < 0.0)
            .collect();

        Ok(Self {
            primary,
            watched,
            check_interval_steps: sim.steps_for(check_interval).max(1),
        })
    }

    pub fn watched(&self) -> &[BodyId] {
        &self.watched
    }

    pub fn check_interval_steps(&self) -> usize {
        self.check_interval_steps
    }

    /// Integrates `sim` for `duration`, recording escapes
    ///
    /// Escapes are permanent: once recorded a body is no longer tested.
    /// The scan stops early when every watched body has escaped.
    pub fn run(&self, sim: &mut Simulation, duration: Time) -> StabilityReport {
        let total_steps = sim.steps_for(duration);
        let start = sim.time();
        let primary_name = sim.body(self.primary).name.clone();

        info!(
            primary = %primary_name,
            watched = self.watched.len(),
            years = duration.to_years(),
            "starting stability scan"
        );

        let mut escaped = vec![false; self.watched.len()];
        let mut escapes = Vec::new();
        let mut done = 0;

        while done < total_steps {
            let chunk = self.check_interval_steps.min(total_steps - done);
            sim.advance(chunk, 0, |_| {});
            done += chunk;

            for (slot, &id) in self.watched.iter().enumerate() {
                if escaped[slot] {
                    continue;
                }
                let energy = sim.binding_energy(id, self.primary);
                if energy > 0.0 {
                    escaped[slot] = true;
                    let body = sim.body(id);
                    let event = EscapeEvent {
                        body: body.name.clone(),
                        time: sim.time(),
                        distance: body.distance_to(sim.body(self.primary)),
                        binding_energy: energy,
                    };
                    info!(
                        body = %event.body,
                        years = event.years(),
                        distance_m = event.distance,
                        "satellite escaped"
                    );
                    escapes.push(event);
                }
            }

            debug!(
                years = Time::from_seconds(sim.time()).to_years(),
                escaped = escapes.len(),
                drift = sim.energy_drift(),
                "stability check"
            );

            if !self.watched.is_empty() && escaped.iter().all(|&e| e) {
                info!("every watched satellite escaped, stopping early");
                break;
            }
        }

        StabilityReport {
            primary: primary_name,
            watched: self
                .watched
                .iter()
                .map(|&id| sim.body(id).name.clone())
                .collect(),
            simulated_seconds: sim.time() - start,
            escapes,
            energy_drift: sim.energy_drift(),
        }
    }
}
