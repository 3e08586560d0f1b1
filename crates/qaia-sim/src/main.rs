//! Qaia system analysis CLI
//!
//! Long escape scans, snapshot saving and orbital element reports on top of
//! the `nbody` engine.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use nbody::stability::StabilityCheck;
use nbody::{scenario, Body, NBodyError, SimConfig, Simulation, Snapshot};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use units::Time;

#[derive(Parser, Debug)]
#[command(name = "qaia-sim")]
#[command(about = "Offline N-body analysis for the Qaia system", long_about = None)]
struct Args {
    /// TOML file overriding dt, gravitational_constant and sample_interval
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Initial conditions
    #[arg(short = 'S', long, global = true, value_enum, default_value = "four-moons")]
    scenario: ScenarioId,

    /// Resume from a saved snapshot instead of the scenario's t = 0 state
    #[arg(long, global = true)]
    snapshot: Option<PathBuf>,

    /// Verbose output (ignored when RUST_LOG is set)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Integrate for a number of years and record when satellites escape
    Stability {
        /// Simulated years to run
        #[arg(short, long, default_value = "100")]
        years: f64,

        /// Years between escape checks
        #[arg(long, default_value = "10")]
        check_every: f64,

        /// Body the satellites are tested against
        #[arg(short, long, default_value = "Qaia")]
        primary: String,

        /// Satellites to watch (default: every body initially bound to the primary)
        #[arg(short, long, value_delimiter = ',')]
        watch: Vec<String>,

        /// Write the report as JSON to this file
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Integrate for a number of years and write a snapshot
    Save {
        #[arg(short, long)]
        years: f64,

        #[arg(short, long)]
        output: PathBuf,
    },

    /// Print the orbital elements of every body around a primary
    Elements {
        #[arg(short, long, default_value = "Qaia")]
        primary: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ScenarioId {
    /// Sun and Qaia only
    SunEarth,
    /// Qaia with Primus, Secundus, Tertius and Quartus
    FourMoons,
    /// Qaia with an anchored geostationary Primus and Secundus
    Geostationary,
}

impl ScenarioId {
    fn bodies(self, g: f64) -> Vec<Body> {
        match self {
            ScenarioId::SunEarth => scenario::sun_earth(g),
            ScenarioId::FourMoons => scenario::four_moons(g),
            ScenarioId::Geostationary => scenario::geostationary(g),
        }
    }
}

fn build_simulation(args: &Args) -> Result<Simulation, NBodyError> {
    let config = match &args.config {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    debug!(?config, scenario = ?args.scenario, "building simulation");

    let bodies = args.scenario.bodies(config.gravitational_constant);
    match &args.snapshot {
        Some(path) => {
            let snapshot = Snapshot::load(path)?;
            info!(
                path = %path.display(),
                years = Time::from_seconds(snapshot.time).to_years(),
                "resuming from snapshot"
            );
            Simulation::from_snapshot(config, bodies, &snapshot)
        }
        None => Simulation::new(config, bodies),
    }
}

fn run_stability(
    sim: &mut Simulation,
    years: f64,
    check_every: f64,
    primary: &str,
    watch: &[String],
    report_path: Option<&Path>,
) -> Result<(), NBodyError> {
    let interval = Time::from_years(check_every);
    let check = if watch.is_empty() {
        StabilityCheck::satellites_of(sim, primary, interval)?
    } else {
        let names: Vec<&str> = watch.iter().map(String::as_str).collect();
        StabilityCheck::new(sim, primary, &names, interval)?
    };

    let report = check.run(sim, Time::from_years(years));

    println!(
        "Simulated {:.1} years around {}",
        Time::from_seconds(report.simulated_seconds).to_years(),
        report.primary
    );
    for event in &report.escapes {
        println!(
            "  {:<10} escaped at {:>8.1} yr  (r = {:.3e} m, ε = {:+.3e} J/kg)",
            event.body,
            event.years(),
            event.distance,
            event.binding_energy
        );
    }
    for name in report.survivors() {
        println!("  {:<10} bound", name);
    }
    println!("Energy drift: {:.3e}", report.energy_drift);

    if let Some(path) = report_path {
        std::fs::write(path, serde_json::to_string_pretty(&report)?)?;
        info!(path = %path.display(), "wrote stability report");
    }

    Ok(())
}

fn run_save(sim: &mut Simulation, years: f64, output: &Path) -> Result<(), NBodyError> {
    sim.run_for(Time::from_years(years));
    sim.snapshot().save(output)?;

    info!(
        path = %output.display(),
        years = Time::from_seconds(sim.time()).to_years(),
        drift = sim.energy_drift(),
        "saved snapshot"
    );
    Ok(())
}

fn print_elements(sim: &Simulation, primary: &str) -> Result<(), NBodyError> {
    let primary_id = sim.body_id(primary)?;

    println!(
        "Orbital elements around {} at t = {:.2} yr",
        primary,
        Time::from_seconds(sim.time()).to_years()
    );
    println!(
        "  {:<10} {:>10} {:>8} {:>8} {:>10}",
        "body", "a (LD)", "e", "i (°)", "T (days)"
    );

    for (idx, body) in sim.bodies().iter().enumerate() {
        if idx == primary_id.0 {
            continue;
        }
        match sim.orbital_elements(nbody::BodyId(idx), primary_id) {
            Some(el) => println!(
                "  {:<10} {:>10.4} {:>8.4} {:>8.2} {:>10.2}",
                body.name,
                el.semi_major_axis.to_lunar_distances(),
                el.eccentricity,
                el.inclination.to_degrees(),
                el.period.to_days()
            ),
            None => println!("  {:<10} unbound", body.name),
        }
    }
    Ok(())
}

fn main() -> Result<(), NBodyError> {
    let args = Args::parse();

    // Initialize logging
    let level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut sim = build_simulation(&args)?;

    match &args.command {
        Command::Stability {
            years,
            check_every,
            primary,
            watch,
            report,
        } => run_stability(&mut sim, *years, *check_every, primary, watch, report.as_deref()),
        Command::Save { years, output } => run_save(&mut sim, *years, output),
        Command::Elements { primary } => print_elements(&sim, primary),
    }
}
