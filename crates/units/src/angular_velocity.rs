use std::f64::consts::TAU;

use crate::time::{Time, SIDEREAL_DAY_SECONDS};

/// Angular velocity in rad/s
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct AngularVelocity(pub f64);

impl AngularVelocity {
    pub fn from_rad_per_sec(value: f64) -> Self {
        Self(value)
    }

    /// Angular velocity of a uniform rotation completing one turn per `period`.
    ///
    /// A negative period describes a retrograde rotation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use units::{AngularVelocity, Time};
    ///
    /// let daily = AngularVelocity::from_period(Time::from_days(1.0));
    /// assert!((daily.to_rad_per_sec() - std::f64::consts::TAU / 86_400.0).abs() < 1e-18);
    /// ```
    pub fn from_period(period: Time) -> Self {
        Self(TAU / period.to_seconds())
    }

    /// Rotation rate of a geostationary orbit: one turn per sidereal day.
    pub fn geostationary() -> Self {
        Self::from_period(Time::from_seconds(SIDEREAL_DAY_SECONDS))
    }

    pub fn to_rad_per_sec(&self) -> f64 {
        self.0
    }

    /// Time taken for one full turn.
    pub fn period(&self) -> Time {
        Time::from_seconds(TAU / self.0)
    }
}
