//! Initial conditions for the Qaia system and simple reference cases.
//!
//! Every builder returns a body collection already shifted into the
//! center-of-mass frame, ready for `Simulation::new`.

use std::f64::consts::PI;

use nalgebra::Vector3;
use units::{AngularVelocity, Length, Mass, AU_M, GEOSTATIONARY_RADIUS_M};

use crate::anchor::{apply_anchors, Anchor};
use crate::body::{Body, BodyId};
use crate::state::shift_to_center_of_mass;

/// Tilt of Primus's orbit relative to the x–y plane
pub const PRIMUS_INCLINATION: f64 = 5.14 * PI / 180.0;

/// Speed of a circular orbit of radius `radius` around `central_mass`
pub fn circular_speed(g: f64, central_mass: f64, radius: f64) -> f64 {
    (g * central_mass / radius).sqrt()
}

/// Speed at periapsis of an orbit with semi-major axis `a` and eccentricity `e`
///
/// From vis-viva: v = √(GM(1 + e) / r_peri), with r_peri = a(1 − e).
pub fn periapsis_speed(g: f64, central_mass: f64, a: f64, e: f64) -> f64 {
    let r_peri = a * (1.0 - e);
    (g * central_mass * (1.0 + e) / r_peri).sqrt()
}

/// A Sun-mass star and an Earth-mass planet on a circular orbit at 1 AU
///
/// # Examples
///
/// ```
/// use nbody::forces::G;
/// use nbody::scenario::sun_earth;
///
/// let bodies = sun_earth(G);
/// assert_eq!(bodies.len(), 2);
/// assert_eq!(bodies[1].name, "Qaia");
/// ```
pub fn sun_earth(g: f64) -> Vec<Body> {
    let (sun, qaia) = sun_and_qaia(g);
    let mut bodies = vec![sun, qaia];
    shift_to_center_of_mass(&mut bodies);
    bodies
}

/// A moon starting at periapsis in the planet's x–y plane
///
/// `phase_deg` is the direction of periapsis seen from the planet, measured
/// from +x. Retrograde moons circle clockwise seen from +z.
struct MoonOrbit {
    lunar_masses: f64,
    semi_major_axis_ld: f64,
    eccentricity: f64,
    phase_deg: f64,
    retrograde: bool,
}

impl MoonOrbit {
    fn body(&self, name: &str, g: f64, planet: &Body) -> Body {
        let a = Length::from_lunar_distances(self.semi_major_axis_ld).to_m();
        let r_peri = a * (1.0 - self.eccentricity);
        let v_peri = periapsis_speed(g, planet.mass, a, self.eccentricity);

        let phi = self.phase_deg.to_radians();
        let (sin_p, cos_p) = phi.sin_cos();
        let direction = if self.retrograde { -1.0 } else { 1.0 };

        let position = planet.position.coords + Vector3::new(cos_p, sin_p, 0.0) * r_peri;
        let velocity =
            planet.velocity + Vector3::new(-sin_p, cos_p, 0.0) * (direction * v_peri);

        Body::new(
            name,
            Mass::from_lunar_masses(self.lunar_masses).to_kg(),
            position.into(),
            velocity.into(),
        )
    }
}

fn sun_and_qaia(g: f64) -> (Body, Body) {
    let m_sun = Mass::from_solar_masses(1.0).to_kg();
    let v_qaia = circular_speed(g, m_sun, AU_M);

    (
        Body::new("Sun", m_sun, [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]),
        Body::new(
            "Qaia",
            Mass::from_earth_masses(1.0).to_kg(),
            [AU_M, 0.0, 0.0],
            [0.0, v_qaia, 0.0],
        ),
    )
}

/// The four-moon Qaia system
///
/// Primus (1 lunar mass, 1 LD, inclined 5.14°) and Secundus (0.25 lunar
/// masses, 0.45 LD) are prograde; Tertius (0.04, 0.24 LD) and Quartus
/// (0.02, 0.12 LD) are retrograde. The three inner moons start at
/// periapsis with e = 0.10.
pub fn four_moons(g: f64) -> Vec<Body> {
    let (sun, qaia) = sun_and_qaia(g);

    let lunar_distance = Length::from_lunar_distances(1.0).to_m();
    let v_primus = circular_speed(g, qaia.mass, lunar_distance);
    let (sin_i, cos_i) = PRIMUS_INCLINATION.sin_cos();
    let primus = Body::new(
        "Primus",
        Mass::from_lunar_masses(1.0).to_kg(),
        [AU_M + lunar_distance, 0.0, 0.0],
        [0.0, qaia.velocity.y + v_primus * cos_i, v_primus * sin_i],
    );

    let secundus = MoonOrbit {
        lunar_masses: 0.25,
        semi_major_axis_ld: 0.45,
        eccentricity: 0.10,
        phase_deg: 90.0,
        retrograde: false,
    }
    .body("Secundus", g, &qaia);

    let quartus = MoonOrbit {
        lunar_masses: 0.02,
        semi_major_axis_ld: 0.12,
        eccentricity: 0.10,
        phase_deg: 180.0,
        retrograde: true,
    }
    .body("Quartus", g, &qaia);

    let tertius = MoonOrbit {
        lunar_masses: 0.04,
        semi_major_axis_ld: 0.24,
        eccentricity: 0.10,
        phase_deg: 270.0,
        retrograde: true,
    }
    .body("Tertius", g, &qaia);

    let mut bodies = vec![sun, qaia, primus, secundus, quartus, tertius];
    shift_to_center_of_mass(&mut bodies);
    bodies
}

/// Qaia with a light geostationary Primus held by an anchor
///
/// Primus (0.002 lunar masses) is anchored to Qaia at the geostationary
/// radius; Secundus orbits freely at 0.45 LD and feels Primus's pull.
pub fn geostationary(g: f64) -> Vec<Body> {
    let (sun, qaia) = sun_and_qaia(g);

    let anchor = Anchor::new(
        BodyId(1),
        Length::from_meters(GEOSTATIONARY_RADIUS_M),
        AngularVelocity::geostationary(),
    );
    let primus = Body::new(
        "Primus",
        Mass::from_lunar_masses(0.002).to_kg(),
        [0.0, 0.0, 0.0],
        [0.0, 0.0, 0.0],
    )
    .anchored(anchor);

    let secundus = MoonOrbit {
        lunar_masses: 0.25,
        semi_major_axis_ld: 0.45,
        eccentricity: 0.10,
        phase_deg: 90.0,
        retrograde: false,
    }
    .body("Secundus", g, &qaia);

    let mut bodies = vec![sun, qaia, primus, secundus];
    apply_anchors(&mut bodies, 0.0);
    shift_to_center_of_mass(&mut bodies);
    bodies
}
