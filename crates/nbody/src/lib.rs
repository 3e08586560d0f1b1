//! Direct-summation N-body gravity with kinematic anchors
//!
//! Bodies are integrated with velocity Verlet in SI units inside a
//! center-of-mass frame. Some bodies may instead be anchored onto exact
//! circular orbits around another body. Two-body diagnostics, snapshots
//! and long escape scans sit on top of the core stepping loop.

pub mod anchor;
pub mod body;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod forces;
pub mod integrator;
pub mod scenario;
pub mod simulation;
pub mod snapshot;
pub mod stability;
pub mod state;

pub use body::{Body, BodyId, Motion};
pub use config::SimConfig;
pub use error::{NBodyError, Result};
pub use simulation::Simulation;
pub use snapshot::Snapshot;

#[cfg(test)]
mod body_test;
#[cfg(test)]
mod config_test;
#[cfg(test)]
mod snapshot_test;
#[cfg(test)]
mod state_test;
