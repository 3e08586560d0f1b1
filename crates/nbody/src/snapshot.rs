//! Saved kinematics for resuming long runs.
//!
//! A snapshot records only time, names, positions and velocities. Masses
//! and anchors always come from a freshly built body collection; the
//! snapshot is overlaid onto it by name.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::body::Body;
use crate::error::Result;
use crate::state::SystemState;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodySnapshot {
    pub name: String,
    /// m
    pub position: [f64; 3],
    /// m/s
    pub velocity: [f64; 3],
}

/// Kinematic state of a system at one instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Simulated time in seconds
    pub time: f64,
    pub bodies: Vec<BodySnapshot>,
}

impl Snapshot {
    /// Records the current kinematics of every body
    pub fn capture(state: &SystemState) -> Self {
        Self {
            time: state.time,
            bodies: state
                .bodies
                .iter()
                .map(|b| BodySnapshot {
                    name: b.name.clone(),
                    position: b.position.coords.into(),
                    velocity: b.velocity.into(),
                })
                .collect(),
        }
    }

    /// Copies position and velocity onto the bodies with matching names
    ///
    /// Bodies without a snapshot entry keep their current kinematics.
    /// Snapshot entries naming unknown bodies are skipped with a warning.
    ///
    /// # Returns
    ///
    /// Number of bodies updated
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody::body::Body;
    /// use nbody::snapshot::{BodySnapshot, Snapshot};
    ///
    /// let mut bodies = vec![
    ///     Body::new("Qaia", 5.972e24, [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]),
    ///     Body::new("Secundus", 1.8e22, [1.7e8, 0.0, 0.0], [0.0, 1_500.0, 0.0]),
    /// ];
    /// let snapshot = Snapshot {
    ///     time: 3600.0,
    ///     bodies: vec![BodySnapshot {
    ///         name: "Qaia".into(),
    ///         position: [1.0, 2.0, 3.0],
    ///         velocity: [4.0, 5.0, 6.0],
    ///     }],
    /// };
    ///
    /// assert_eq!(snapshot.overlay(&mut bodies), 1);
    /// assert_eq!(bodies[0].position.x, 1.0);
    /// assert_eq!(bodies[1].position.x, 1.7e8);
    /// ```
    pub fn overlay(&self, bodies: &mut [Body]) -> usize {
        let mut matched = 0;

        for saved in &self.bodies {
            match bodies.iter_mut().find(|b| b.name == saved.name) {
                Some(body) => {
                    body.position = saved.position.into();
                    body.velocity = saved.velocity.into();
                    matched += 1;
                }
                None => warn!(body = %saved.name, "snapshot body not present in system, skipped"),
            }
        }

        debug!(matched, total = self.bodies.len(), time = self.time, "overlaid snapshot");
        matched
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Writes the snapshot as JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Reads a JSON snapshot
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}
