use nalgebra::{Point3, Vector3};
use units::{AngularVelocity, Length};

use crate::anchor::Anchor;
use crate::body::{Body, BodyId, Motion};

#[test]
fn test_new_is_integrated() {
    let body = Body::new("Qaia", 5.972e24, [1.0, 2.0, 3.0], [4.0, 5.0, 6.0]);

    assert_eq!(body.name, "Qaia");
    assert_eq!(body.mass, 5.972e24);
    assert_eq!(body.position, Point3::new(1.0, 2.0, 3.0));
    assert_eq!(body.velocity, Vector3::new(4.0, 5.0, 6.0));
    assert_eq!(body.acceleration, Vector3::zeros());
    assert_eq!(body.motion, Motion::Integrated);
    assert!(body.anchor().is_none());
}

#[test]
fn test_anchored_replaces_motion() {
    let anchor = Anchor::new(
        BodyId(0),
        Length::from_meters(4.216e7),
        AngularVelocity::geostationary(),
    );
    let body = Body::new("Primus", 1.0e20, [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]).anchored(anchor);

    assert!(body.is_anchored());
    assert!(!body.motion.is_integrated());
    assert_eq!(body.anchor(), Some(&anchor));
}

#[test]
fn test_momentum() {
    let body = Body::new("a", 2.0, [1.0, 0.0, 0.0], [3.0, 4.0, 0.0]);

    assert_eq!(body.momentum(), Vector3::new(6.0, 8.0, 0.0));
}

#[test]
fn test_kinetic_energy() {
    let body = Body::new("a", 2.0, [0.0, 0.0, 0.0], [3.0, 4.0, 0.0]);

    // KE = 0.5 * m * v²
    // v² = 3² + 4² = 25
    // KE = 0.5 * 2 * 25 = 25
    assert_eq!(body.kinetic_energy(), 25.0);
}

#[test]
fn test_distance_to() {
    let a = Body::new("a", 1.0, [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]);
    let b = Body::new("b", 1.0, [3.0, 0.0, 4.0], [0.0, 0.0, 0.0]);

    assert_eq!(a.distance_to(&b), 5.0);
    assert_eq!(b.distance_to(&a), 5.0);
}

#[test]
fn test_relative_kinematics() {
    let planet = Body::new("planet", 1.0, [10.0, 0.0, 0.0], [0.0, 5.0, 0.0]);
    let moon = Body::new("moon", 1.0, [12.0, 0.0, 0.0], [0.0, 7.0, 1.0]);

    assert_eq!(moon.position_relative_to(&planet), Vector3::new(2.0, 0.0, 0.0));
    assert_eq!(moon.velocity_relative_to(&planet), Vector3::new(0.0, 2.0, 1.0));
}

#[test]
fn test_angular_momentum_prograde_points_up() {
    let body = Body::new("a", 2.0, [1.0, 0.0, 0.0], [0.0, 3.0, 0.0]);

    // L = r × p = (1, 0, 0) × (0, 6, 0) = (0, 0, 6)
    assert_eq!(body.angular_momentum(), Vector3::new(0.0, 0.0, 6.0));
}

#[test]
fn test_is_finite() {
    let good = Body::new("a", 1.0, [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]);
    let bad_position = Body::new("b", 1.0, [f64::NAN, 0.0, 0.0], [0.0, 0.0, 0.0]);
    let bad_velocity = Body::new("c", 1.0, [0.0, 0.0, 0.0], [0.0, f64::INFINITY, 0.0]);

    assert!(good.is_finite());
    assert!(!bad_position.is_finite());
    assert!(!bad_velocity.is_finite());
}
