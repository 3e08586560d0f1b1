use approx::assert_relative_eq;
use nalgebra::Vector3;
use units::{AngularVelocity, Length};

use crate::anchor::Anchor;
use crate::body::{Body, BodyId};
use crate::error::NBodyError;
use crate::forces::{DirectGravity, G};
use crate::state::{center_of_mass, shift_to_center_of_mass, SystemState};

const M_SUN: f64 = 1.989e30;
const M_EARTH: f64 = 5.972e24;
const AU: f64 = 1.496e11;

fn sun_and_planet() -> Vec<Body> {
    let v = (G * M_SUN / AU).sqrt();
    vec![
        Body::new("Sun", M_SUN, [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]),
        Body::new("Qaia", M_EARTH, [AU, 0.0, 0.0], [0.0, v, 0.0]),
    ]
}

#[test]
fn test_new_system() {
    let system = SystemState::new(sun_and_planet(), &DirectGravity::new()).unwrap();

    assert_eq!(system.time, 0.0);
    assert_eq!(system.body_count(), 2);
    assert_relative_eq!(system.total_mass(), M_SUN + M_EARTH);
}

#[test]
fn test_construction_shifts_to_center_of_mass() {
    let system = SystemState::new(sun_and_planet(), &DirectGravity::new()).unwrap();
    let (position, velocity) = system.center_of_mass();

    assert!(position.coords.magnitude() < 1e-6 * AU);
    assert!(velocity.magnitude() < 1e-9);

    // Sun moves opposite the planet
    assert!(system.bodies[0].position.x < 0.0);
    assert!(system.bodies[0].velocity.y < 0.0);
}

#[test]
fn test_shift_preserves_relative_kinematics() {
    let mut bodies = vec![
        Body::new("a", 3.0, [1.0, 2.0, 3.0], [1.0, 0.0, 0.0]),
        Body::new("b", 1.0, [5.0, 2.0, 3.0], [0.0, 1.0, 0.0]),
    ];
    let before = bodies[1].position_relative_to(&bodies[0]);

    shift_to_center_of_mass(&mut bodies);

    assert_eq!(bodies[1].position_relative_to(&bodies[0]), before);
    let (position, velocity) = center_of_mass(&bodies);
    assert_relative_eq!(position.coords.magnitude(), 0.0, epsilon = 1e-12);
    assert_relative_eq!(velocity.magnitude(), 0.0, epsilon = 1e-12);
}

#[test]
fn test_center_of_mass_empty() {
    let (position, velocity) = center_of_mass(&[]);

    assert_eq!(position.coords, Vector3::zeros());
    assert_eq!(velocity, Vector3::zeros());
}

#[test]
fn test_construction_computes_accelerations() {
    let system = SystemState::new(sun_and_planet(), &DirectGravity::new()).unwrap();

    let planet = &system.bodies[1];
    let expected = G * M_SUN / (AU * AU);
    assert_relative_eq!(planet.acceleration.magnitude(), expected, max_relative = 1e-5);
    assert!(planet.acceleration.x < 0.0);
}

#[test]
fn test_initial_energy_and_drift() {
    let force = DirectGravity::new();
    let system = SystemState::new(sun_and_planet(), &force).unwrap();

    assert!(system.initial_energy() < 0.0);
    assert_eq!(system.total_energy(&force), system.initial_energy());
    assert_eq!(system.energy_drift(&force), 0.0);
}

#[test]
fn test_body_lookup() {
    let system = SystemState::new(sun_and_planet(), &DirectGravity::new()).unwrap();

    assert_eq!(system.body_id("Qaia"), Some(BodyId(1)));
    assert_eq!(system.body_id("Pluto"), None);
    assert_eq!(system.body("Sun").map(|b| b.mass), Some(M_SUN));
    assert!(system.get_body(BodyId(2)).is_none());
}

#[test]
fn test_starting_at_sets_clock() {
    let system = SystemState::starting_at(sun_and_planet(), 1.0e6, &DirectGravity::new()).unwrap();

    assert_eq!(system.time, 1.0e6);
}

#[test]
fn test_resumed_keeps_given_frame() {
    let bodies = sun_and_planet();
    let system = SystemState::resumed(bodies.clone(), 1.0e6, &DirectGravity::new()).unwrap();

    assert_eq!(system.time, 1.0e6);
    for (restored, given) in system.bodies.iter().zip(&bodies) {
        assert_eq!(restored.position, given.position);
        assert_eq!(restored.velocity, given.velocity);
    }
    assert!(system.bodies[1].acceleration.magnitude() > 0.0);
    assert_eq!(system.energy_drift(&DirectGravity::new()), 0.0);
}

#[test]
fn test_resumed_validates_bodies() {
    let mut bodies = sun_and_planet();
    bodies[1].name = "Sun".to_string();

    let result = SystemState::resumed(bodies, 0.0, &DirectGravity::new());
    assert!(matches!(result, Err(NBodyError::DuplicateName(ref name)) if name == "Sun"));
}

#[test]
fn test_non_finite_start_time_rejected() {
    let result = SystemState::starting_at(sun_and_planet(), f64::NAN, &DirectGravity::new());

    assert!(matches!(result, Err(NBodyError::InvalidConfig(_))));
}

#[test]
fn test_zero_mass_rejected() {
    let mut bodies = sun_and_planet();
    bodies[1].mass = 0.0;

    let result = SystemState::new(bodies, &DirectGravity::new());
    assert!(matches!(result, Err(NBodyError::InvalidMass { ref name, .. }) if name == "Qaia"));
}

#[test]
fn test_negative_mass_rejected() {
    let mut bodies = sun_and_planet();
    bodies[0].mass = -1.0;

    let result = SystemState::new(bodies, &DirectGravity::new());
    assert!(matches!(result, Err(NBodyError::InvalidMass { .. })));
}

#[test]
fn test_non_finite_position_rejected() {
    let mut bodies = sun_and_planet();
    bodies[1].position.y = f64::INFINITY;

    let result = SystemState::new(bodies, &DirectGravity::new());
    assert!(matches!(result, Err(NBodyError::NonFiniteKinematics(ref name)) if name == "Qaia"));
}

#[test]
fn test_duplicate_name_rejected() {
    let mut bodies = sun_and_planet();
    bodies[1].name = "Sun".to_string();

    let result = SystemState::new(bodies, &DirectGravity::new());
    assert!(matches!(result, Err(NBodyError::DuplicateName(ref name)) if name == "Sun"));
}

#[test]
fn test_empty_name_rejected() {
    let mut bodies = sun_and_planet();
    bodies[1].name = String::new();

    let result = SystemState::new(bodies, &DirectGravity::new());
    assert!(matches!(result, Err(NBodyError::EmptyName(1))));
}

#[test]
fn test_anchored_body_placed_before_shift() {
    let mut bodies = sun_and_planet();
    let radius = 4.216e7;
    bodies.push(
        Body::new("Primus", 1.0e20, [f64::NAN, 0.0, 0.0], [0.0, 0.0, 0.0]).anchored(Anchor::new(
            BodyId(1),
            Length::from_meters(radius),
            AngularVelocity::geostationary(),
        )),
    );

    let system = SystemState::new(bodies, &DirectGravity::new()).unwrap();

    // Non-finite input kinematics are overwritten by the anchor
    let primus = &system.bodies[2];
    assert!(primus.is_finite());
    assert_relative_eq!(primus.distance_to(&system.bodies[1]), radius, max_relative = 1e-9);

    let (_, com_velocity) = system.center_of_mass();
    assert!(com_velocity.magnitude() < 1e-9);
}

#[test]
fn test_total_angular_momentum_points_up() {
    let system = SystemState::new(sun_and_planet(), &DirectGravity::new()).unwrap();
    let l = system.total_angular_momentum();

    assert!(l.z > 0.0);
    assert_relative_eq!(l.x, 0.0, epsilon = 1e-6 * l.z);
}
