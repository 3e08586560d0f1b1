use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// One astronomical unit in meters
pub const AU_M: f64 = 1.496e11;

/// Mean Earth-Moon distance in meters (one lunar distance, LD)
pub const LUNAR_DISTANCE_M: f64 = 3.844e8;

/// Radius of a geostationary orbit around an Earth-mass planet, in meters
pub const GEOSTATIONARY_RADIUS_M: f64 = 4.216e7;

const KM_TO_M: f64 = 1_000.0;

/// A physical length quantity using f64 precision.
///
/// The `Length` struct stores meters. Astronomical units and lunar
/// distances are the scales orbits are described in.
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let qaia_orbit = Length::from_au(1.0);
/// let primus_orbit = Length::from_lunar_distances(1.0);
///
/// assert_eq!(qaia_orbit.to_m(), 1.496e11);
/// assert!((primus_orbit.to_km() - 384_400.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: meters

impl Length {
    /// Creates a zero length value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Length` from a value in meters.
    pub fn from_meters(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Length` from a value in kilometers.
    pub fn from_km(value: f64) -> Self {
        Self(value * KM_TO_M)
    }

    /// Creates a new `Length` from a value in astronomical units.
    pub fn from_au(value: f64) -> Self {
        Self(value * AU_M)
    }

    /// Creates a new `Length` from a value in lunar distances.
    pub fn from_lunar_distances(value: f64) -> Self {
        Self(value * LUNAR_DISTANCE_M)
    }

    /// Returns the length in meters.
    pub fn to_m(&self) -> f64 {
        self.0
    }

    pub fn to_km(&self) -> f64 {
        self.0 / KM_TO_M
    }

    pub fn to_au(&self) -> f64 {
        self.0 / AU_M
    }

    pub fn to_lunar_distances(&self) -> f64 {
        self.0 / LUNAR_DISTANCE_M
    }

    /// Raise to integer power
    pub fn powi(&self, n: i32) -> f64 {
        self.0.powi(n)
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Length {
        Length(self.0 / rhs)
    }
}

/// Division of Length by Length returns a dimensionless ratio
impl Div for Length {
    type Output = f64;

    fn div(self, rhs: Length) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * Length (commutative multiplication)
impl Mul<Length> for f64 {
    type Output = Length;

    fn mul(self, rhs: Length) -> Length {
        rhs * self
    }
}
