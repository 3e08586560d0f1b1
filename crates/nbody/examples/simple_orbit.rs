//! Simple orbital integration example
//!
//! Integrates Qaia around a Sun-mass star for ten years with velocity
//! Verlet, showing energy conservation and the orbit's phase each year.
//!
//! Run with: cargo run --package nbody --example simple_orbit

use nbody::diagnostics::phase_angle;
use nbody::forces::G;
use nbody::scenario::sun_earth;
use nbody::{SimConfig, Simulation};
use units::{Length, Time};

fn main() -> nbody::Result<()> {
    println!("N-body Integrator Test: Single Planet Orbit\n");
    println!("{}", "=".repeat(60));

    let config = SimConfig::default();
    let mut sim = Simulation::new(config, sun_earth(G))?;
    let sun = sim.body_id("Sun")?;
    let qaia = sim.body_id("Qaia")?;

    let r0 = sim.body(qaia).distance_to(sim.body(sun));
    let initial_l = sim.state().total_angular_momentum().magnitude();

    println!("\nInitial conditions:");
    println!("  Orbital radius: {:.6} AU", Length::from_meters(r0).to_au());
    println!("  Speed: {:.1} m/s", sim.body(qaia).velocity_relative_to(sim.body(sun)).magnitude());
    println!("  Total energy: {:.6e} J", sim.total_energy());

    let year = Time::from_years(1.0);
    println!("\nIntegration parameters:");
    println!("  Timestep: {} s ({} steps/year)", sim.dt(), sim.steps_for(year));

    println!("\nIntegrating...");
    for n in 1..=10 {
        sim.run_for(year);

        let r = sim.body(qaia).distance_to(sim.body(sun));
        let phase = phase_angle(sim.body(qaia), sim.body(sun)).to_degrees();
        let l = sim.state().total_angular_momentum().magnitude();

        println!(
            "Year {:>2}: r={:.6} AU, phase={:+8.3}°, ΔE={:.2e}, ΔL={:.2e}",
            n,
            Length::from_meters(r).to_au(),
            phase,
            sim.energy_drift().abs(),
            ((l - initial_l) / initial_l).abs()
        );
    }

    let elements = sim
        .orbital_elements(qaia, sun)
        .ok_or_else(|| nbody::NBodyError::config("Qaia is no longer bound"))?;

    println!("\n{}", "=".repeat(60));
    println!("Final elements:");
    println!("  a = {:.6} AU", elements.semi_major_axis.to_au());
    println!("  e = {:.2e}", elements.eccentricity);
    println!("  T = {:.3} days", elements.period.to_days());

    if sim.energy_drift().abs() < 1e-6 {
        println!("✓ Energy conserved to within 1e-6");
    } else {
        println!("✗ Energy drift too large: {:.2e}", sim.energy_drift());
    }

    Ok(())
}
