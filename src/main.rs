use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use projectile_sim::config::{load_config, RunConfig};
use projectile_sim::io::input::parse_scalar;
use projectile_sim::io::{csv, json};
use projectile_sim::physics::vacuum::VacuumEstimate;
use projectile_sim::sim::{self, LandingObserver, StepResult, TrajectoryStepper, LANDING_MESSAGE};
use projectile_sim::types::{FlightReport, LaunchParameters, TrajectorySample};
use projectile_sim::SimError;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Projectile flight with linear drag, integrated with fixed-step Euler"
)]
struct Cli {
    /// TOML run file; flags below override its values
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Launch speed, m/s
    #[arg(long, global = true)]
    speed: Option<String>,

    /// Launch angle above horizontal, degrees
    #[arg(long, global = true, allow_hyphen_values = true)]
    angle: Option<String>,

    /// Simulated time step, s
    #[arg(long, global = true)]
    dt: Option<String>,

    /// Body mass, kg
    #[arg(long, global = true, allow_hyphen_values = true)]
    mass: Option<String>,

    /// Linear drag coefficient (defaults to 0.1)
    #[arg(long, global = true, allow_hyphen_values = true)]
    drag: Option<String>,

    /// Give up after this many steps
    #[arg(long, global = true)]
    max_steps: Option<u64>,

    /// Log more (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Integrate to the ground and print range, max height and flight time
    Solve {
        /// Write the report as JSON
        #[arg(long)]
        json: Option<PathBuf>,
        /// Write every visited sample as CSV
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Step the flight tick by tick, printing each point
    Animate {
        /// Wall-clock interval between ticks, ms
        #[arg(long)]
        tick_ms: Option<u64>,
        /// Sleep one tick between steps instead of running flat out
        #[arg(long, default_value_t = false)]
        realtime: bool,
        /// Write the animated samples as CSV
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cfg = resolve_config(&cli)?;
    let params = cfg.launch.to_parameters();

    match cli.command.unwrap_or(Command::Solve { json: None, csv: None }) {
        Command::Solve { json, csv } => run_solve(&params, &cfg, json.as_deref(), csv.as_deref()),
        Command::Animate { tick_ms, realtime, csv } => {
            let tick_ms = tick_ms.unwrap_or(cfg.animation.tick_ms);
            run_animate(&params, &cfg, tick_ms, realtime, csv.as_deref())
        }
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// File values first, then any command-line overrides.
fn resolve_config(cli: &Cli) -> anyhow::Result<RunConfig> {
    let mut cfg = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("loading run file {}", path.display()))?,
        None => RunConfig::default(),
    };

    let launch = &mut cfg.launch;
    override_scalar(&mut launch.speed, "speed", cli.speed.as_deref())?;
    override_scalar(&mut launch.angle_degrees, "angle", cli.angle.as_deref())?;
    override_scalar(&mut launch.time_step, "time step", cli.dt.as_deref())?;
    override_scalar(&mut launch.mass, "mass", cli.mass.as_deref())?;
    override_scalar(&mut launch.drag_coefficient, "drag coefficient", cli.drag.as_deref())?;
    if let Some(max_steps) = cli.max_steps {
        cfg.sim.max_steps = max_steps;
    }
    Ok(cfg)
}

fn override_scalar(slot: &mut f64, field: &'static str, text: Option<&str>) -> Result<(), SimError> {
    if let Some(text) = text {
        *slot = parse_scalar(field, text)?;
    }
    Ok(())
}

fn announce() -> impl LandingObserver {
    |message: &str| println!("{message}")
}

// ---------------------------------------------------------------------------
// solve
// ---------------------------------------------------------------------------

fn run_solve(
    params: &LaunchParameters,
    cfg: &RunConfig,
    json_path: Option<&Path>,
    csv_path: Option<&Path>,
) -> anyhow::Result<()> {
    let mut observer = announce();
    let report = match csv_path {
        Some(path) => {
            let (samples, report) = sim::solve_recorded(params, &cfg.sim)?;
            observer.on_landed(LANDING_MESSAGE);
            csv::write_trajectory_file(path, &samples)
                .with_context(|| format!("writing {}", path.display()))?;
            report
        }
        None => sim::solve_with(params, &cfg.sim, &mut observer)?,
    };

    print_report(params, &report);

    if let Some(path) = json_path {
        json::write_report_file(path, params, &report)
            .with_context(|| format!("writing {}", path.display()))?;
    }
    Ok(())
}

fn print_report(params: &LaunchParameters, report: &FlightReport) {
    let vacuum = VacuumEstimate::for_launch(params);
    println!("Range:       {:>10.4} m", report.range);
    println!("Max height:  {:>10.4} m", report.max_height);
    println!("Flight time: {:>10.4} s", report.flight_time);
    println!(
        "Vacuum ref:  range {:.4} m, max height {:.4} m, flight time {:.4} s",
        vacuum.range, vacuum.max_height, vacuum.flight_time
    );
    println!("Steps:       {:>10}   dt={} s", report.steps, params.time_step());
}

// ---------------------------------------------------------------------------
// animate
// ---------------------------------------------------------------------------

fn run_animate(
    params: &LaunchParameters,
    cfg: &RunConfig,
    tick_ms: u64,
    realtime: bool,
    csv_path: Option<&Path>,
) -> anyhow::Result<()> {
    let tick = Duration::from_millis(tick_ms);
    let mut stepper = TrajectoryStepper::new(*params, cfg.sim)?;
    let mut observer = announce();
    let mut samples = vec![stepper.sample()];

    println!("{:>9}  {:>10}  {:>10}", "t (s)", "x (m)", "y (m)");
    print_sample(&samples[0]);

    loop {
        match stepper.step()? {
            StepResult::InFlight(s) => {
                print_sample(&s);
                samples.push(s);
            }
            StepResult::Landed(s) => {
                print_sample(&s);
                samples.push(s);
                observer.on_landed(LANDING_MESSAGE);
                break;
            }
            StepResult::Ended => break,
        }
        if realtime {
            thread::sleep(tick);
        }
    }

    if let Some(report) = stepper.report() {
        print_report(params, &report);
    }
    if let Some(path) = csv_path {
        csv::write_trajectory_file(path, &samples)
            .with_context(|| format!("writing {}", path.display()))?;
    }
    Ok(())
}

fn print_sample(s: &TrajectorySample) {
    println!("{:>9.4}  {:>10.4}  {:>10.4}", s.time, s.x, s.y);
}
