use crate::body::Body;
use crate::config::SimConfig;
use crate::forces::G;
use crate::scenario;
use crate::simulation::Simulation;
use crate::snapshot::{BodySnapshot, Snapshot};

fn sample_snapshot() -> Snapshot {
    Snapshot {
        time: 7_200.0,
        bodies: vec![
            BodySnapshot {
                name: "Qaia".into(),
                position: [1.0, 2.0, 3.0],
                velocity: [4.0, 5.0, 6.0],
            },
            BodySnapshot {
                name: "Ghost".into(),
                position: [0.0, 0.0, 0.0],
                velocity: [0.0, 0.0, 0.0],
            },
        ],
    }
}

#[test]
fn test_capture_records_every_body() {
    let sim = Simulation::new(SimConfig::default(), scenario::four_moons(G)).unwrap();

    let snapshot = Snapshot::capture(sim.state());

    assert_eq!(snapshot.time, 0.0);
    assert_eq!(snapshot.bodies.len(), 6);
    assert_eq!(snapshot.bodies[2].name, "Primus");
    assert_eq!(snapshot.bodies[2].position, <[f64; 3]>::from(sim.bodies()[2].position.coords));
}

#[test]
fn test_overlay_skips_unknown_names() {
    let mut bodies = vec![
        Body::new("Sun", 1.989e30, [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]),
        Body::new("Qaia", 5.972e24, [9.0, 9.0, 9.0], [9.0, 9.0, 9.0]),
    ];

    let matched = sample_snapshot().overlay(&mut bodies);

    assert_eq!(matched, 1);
    assert_eq!(<[f64; 3]>::from(bodies[1].position.coords), [1.0, 2.0, 3.0]);
    assert_eq!(<[f64; 3]>::from(bodies[1].velocity), [4.0, 5.0, 6.0]);
    assert_eq!(<[f64; 3]>::from(bodies[0].position.coords), [0.0, 0.0, 0.0]);
}

#[test]
fn test_overlay_keeps_mass() {
    let mut bodies = vec![Body::new("Qaia", 5.972e24, [0.0, 0.0, 0.0], [0.0, 0.0, 0.0])];

    sample_snapshot().overlay(&mut bodies);

    assert_eq!(bodies[0].mass, 5.972e24);
}

#[test]
fn test_json_round_trip() {
    let snapshot = sample_snapshot();

    let text = snapshot.to_json().unwrap();
    let restored = Snapshot::from_json(&text).unwrap();

    assert_eq!(restored, snapshot);
}

#[test]
fn test_json_field_names() {
    let text = sample_snapshot().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(value["time"], 7_200.0);
    assert_eq!(value["bodies"][0]["name"], "Qaia");
    assert_eq!(value["bodies"][0]["position"][2], 3.0);
}

#[test]
fn test_malformed_json_rejected() {
    assert!(Snapshot::from_json("{\"time\": 1.0}").is_err());
    assert!(Snapshot::from_json("not json").is_err());
}

#[test]
fn test_save_and_load() {
    let path = std::env::temp_dir().join(format!("nbody-snapshot-{}.json", std::process::id()));
    let snapshot = sample_snapshot();

    snapshot.save(&path).unwrap();
    let loaded = Snapshot::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(loaded, snapshot);
}
