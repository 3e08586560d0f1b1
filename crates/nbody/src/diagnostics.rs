//! Two-body orbital diagnostics.
//!
//! Every function here is pure: it reads one or two body states and never
//! touches the system. Other bodies' gravity is ignored in the formulas,
//! even though it shaped the trajectories being measured.
//!
//! # Usage
//!
//! `binding_energy` is the escape test used by long stability scans: a
//! positive value means the satellite is no longer bound to the primary.
//! `orbital_elements` returns `None` in exactly that case.

use std::f64::consts::{PI, TAU};

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use units::{Length, Time};

use crate::body::Body;

/// Classical elements of a bound two-body orbit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    /// Semi-major axis
    pub semi_major_axis: Length,

    /// Eccentricity (dimensionless, 0 ≤ e < 1)
    pub eccentricity: f64,

    /// Angle between the angular momentum vector and +z (radians, 0..π)
    ///
    /// Values above π/2 are retrograde orbits.
    pub inclination: f64,

    /// Orbital period from Kepler's third law
    pub period: Time,

    /// Specific orbital energy (J/kg, always negative here)
    pub specific_energy: f64,
}

impl OrbitalElements {
    /// Closest approach to the primary
    pub fn periapsis(&self) -> Length {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    /// Farthest distance from the primary
    pub fn apoapsis(&self) -> Length {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }

    pub fn is_retrograde(&self) -> bool {
        self.inclination > PI / 2.0
    }
}

/// Specific orbital energy of `satellite` relative to `primary`
///
/// ε = v²/2 − μ/r with μ = G·M_primary. Negative means bound.
///
/// # Arguments
/// * `satellite` - The orbiting body
/// * `primary` - The body it is tested against
/// * `g` - Gravitational constant
///
/// # Examples
/// ```
/// use nbody::body::Body;
/// use nbody::diagnostics::binding_energy;
/// use nbody::forces::G;
///
/// let qaia = Body::new("Qaia", 5.972e24, [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]);
/// let slow = Body::new("Primus", 7.342e22, [3.844e8, 0.0, 0.0], [0.0, 1_000.0, 0.0]);
/// let fast = Body::new("Tracer", 1.0e3, [3.844e8, 0.0, 0.0], [0.0, 5_000.0, 0.0]);
///
/// assert!(binding_energy(&slow, &qaia, G) < 0.0);
/// assert!(binding_energy(&fast, &qaia, G) > 0.0);
/// ```
pub fn binding_energy(satellite: &Body, primary: &Body, g: f64) -> f64 {
    let mu = g * primary.mass;
    let r = satellite.distance_to(primary);
    let v2 = satellite.velocity_relative_to(primary).magnitude_squared();
    0.5 * v2 - mu / r
}

/// True once `satellite` is no longer bound to `primary` (ε > 0)
pub fn has_escaped(satellite: &Body, primary: &Body, g: f64) -> bool {
    binding_energy(satellite, primary, g) > 0.0
}

/// Keplerian elements of `satellite` around `primary`
///
/// Returns `None` when the orbit is unbound (ε ≥ 0), where the
/// semi-major axis and period have no meaning.
///
/// # Examples
/// ```
/// use nbody::body::Body;
/// use nbody::diagnostics::orbital_elements;
/// use nbody::forces::G;
///
/// let r = 3.844e8;
/// let v = (G * 5.972e24 / r).sqrt();
/// let qaia = Body::new("Qaia", 5.972e24, [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]);
/// let moon = Body::new("Primus", 1.0, [r, 0.0, 0.0], [0.0, v, 0.0]);
///
/// let elements = orbital_elements(&moon, &qaia, G).unwrap();
/// assert!(elements.eccentricity < 1e-6);
/// assert!((elements.semi_major_axis.to_m() - r).abs() / r < 1e-9);
/// assert!(elements.period.to_days() > 27.0);
/// ```
pub fn orbital_elements(satellite: &Body, primary: &Body, g: f64) -> Option<OrbitalElements> {
    let mu = g * primary.mass;
    let r_vec = satellite.position_relative_to(primary);
    let v_vec = satellite.velocity_relative_to(primary);
    let r = r_vec.magnitude();

    let energy = 0.5 * v_vec.magnitude_squared() - mu / r;
    if energy >= 0.0 || !energy.is_finite() {
        return None;
    }

    let a = -mu / (2.0 * energy);
    let h = r_vec.cross(&v_vec);
    let h2 = h.magnitude_squared();
    let eccentricity = (1.0 - h2 / (mu * a)).max(0.0).sqrt();

    Some(OrbitalElements {
        semi_major_axis: Length::from_meters(a),
        eccentricity,
        inclination: inclination_of(&h),
        period: Time::from_seconds(TAU * (a.powi(3) / mu).sqrt()),
        specific_energy: energy,
    })
}

/// Angle between an angular momentum vector and the +z axis
fn inclination_of(h: &Vector3<f64>) -> f64 {
    let h_mag = h.magnitude();
    if h_mag == 0.0 {
        // Radial motion has no orbital plane
        return 0.0;
    }
    (h.z / h_mag).clamp(-1.0, 1.0).acos()
}

/// Angle of `body` around `reference` in the x–y plane, in (−π, π]
///
/// Useful for tracking revolutions: after one sidereal period a planet's
/// phase angle around its star returns to its starting value.
pub fn phase_angle(body: &Body, reference: &Body) -> f64 {
    let d = body.position_relative_to(reference);
    d.y.atan2(d.x)
}

/// Mass-weighted position and velocity of a subset of bodies
///
/// # Examples
/// ```
/// use nbody::body::Body;
/// use nbody::diagnostics::barycenter;
///
/// let a = Body::new("a", 3.0, [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]);
/// let b = Body::new("b", 1.0, [4.0, 0.0, 0.0], [0.0, 4.0, 0.0]);
///
/// let (position, velocity) = barycenter(&[&a, &b]);
/// assert_eq!(position.x, 1.0);
/// assert_eq!(velocity.y, 1.0);
/// ```
pub fn barycenter(bodies: &[&Body]) -> (Point3<f64>, Vector3<f64>) {
    let total_mass: f64 = bodies.iter().map(|b| b.mass).sum();
    if total_mass <= 0.0 {
        return (Point3::origin(), Vector3::zeros());
    }

    let weighted_position = bodies
        .iter()
        .fold(Vector3::zeros(), |acc, b| acc + b.position.coords * b.mass);
    let momentum = bodies
        .iter()
        .fold(Vector3::zeros(), |acc, b| acc + b.momentum());

    (
        Point3::from(weighted_position / total_mass),
        momentum / total_mass,
    )
}
