//! point_to_point: run one swarm point-to-point mission from a YAML scenario.
//!
//! Loads the parameter file (optionally replacing start/goal pairs and
//! obstacles with a whitespace-separated triple file), runs the mission with
//! a reference solver and writes `sim_info.json`, `sim_data.csv` and, on
//! success, `sim_results.json` to the output directory.
//!
//! ```text
//! point_to_point demos/point_to_point/scenario.yaml --output output/p2p
//! RUST_LOG=debug point_to_point scenario.yaml --placement config_data.txt --num-obs 3
//! ```

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;

use swarm_core::Verbosity;
use swarm_output::{CsvJsonWriter, RunRecorder};
use swarm_scenario::{Scenario, load_placement_path, load_scenario_path};
use swarm_sim::{RunReport, SimBuilder};
use swarm_solver::{AgentSolver, HoldSolver, StraightLineSolver};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, ValueEnum)]
enum SolverKind {
    /// Every drone hovers in place.
    Hold,
    /// Straight line to the goal with a yield rule.
    Straight,
}

#[derive(Parser)]
#[command(name = "point_to_point")]
#[command(about = "Swarm point-to-point mission simulator", long_about = None)]
#[command(version)]
struct Cli {
    /// YAML scenario parameter file
    scenario: PathBuf,

    /// Whitespace-separated triple file with start/goal pairs and obstacles
    #[arg(short, long)]
    placement: Option<PathBuf>,

    /// Number of obstacles in the placement file
    #[arg(long, default_value_t = 0)]
    num_obs: usize,

    /// Directory for run artifacts
    #[arg(short, long, default_value = "output/point_to_point")]
    output: PathBuf,

    #[arg(long, value_enum, default_value_t = SolverKind::Straight)]
    solver: SolverKind,

    /// Cruise speed as a fraction of vel_max (straight solver)
    #[arg(long, default_value_t = 0.8)]
    speed_fraction: f64,

    /// Acceleration bound in m/s² when use_model is set (straight solver)
    #[arg(long, default_value_t = 5.0)]
    max_accel: f64,

    /// Override the scenario's worker thread count
    #[arg(short = 'j', long)]
    threads: Option<usize>,

    /// Override the scenario's RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Override the scenario's verbosity level (2 progress, 3 collisions, 4 timing)
    #[arg(short, long)]
    verbose: Option<u8>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn init_logging(level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))
        .context("failed to create log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
    Ok(())
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    // 1. Scenario.
    let mut scenario = load_scenario_path(&cli.scenario)
        .with_context(|| format!("loading scenario {}", cli.scenario.display()))?;
    if let Some(path) = &cli.placement {
        let placement = load_placement_path(path, scenario.data.requested_agents, cli.num_obs)
            .with_context(|| format!("loading placement {}", path.display()))?;
        scenario = scenario.with_placement(placement);
    }
    if let Some(n) = cli.threads {
        scenario.run.num_threads = Some(n);
    }
    if let Some(seed) = cli.seed {
        scenario.run.seed = seed;
    }
    if let Some(level) = cli.verbose {
        scenario.run.verbosity = Verbosity(level);
    }
    info!(
        drones = scenario.data.requested_agents,
        horizon = scenario.run.horizon,
        dt = scenario.run.dt(),
        max_ticks = scenario.run.max_ticks(),
        "scenario loaded"
    );

    // 2. Output directory.
    std::fs::create_dir_all(&cli.output)
        .with_context(|| format!("creating {}", cli.output.display()))?;

    // 3. Run.
    let report = match cli.solver {
        SolverKind::Hold => run(scenario, HoldSolver, &cli.output)?,
        SolverKind::Straight => {
            let solver = StraightLineSolver::new(cli.speed_fraction, cli.max_accel)?;
            run(scenario, solver, &cli.output)?
        }
    };

    // 4. Summary.
    println!();
    println!("Outcome      : {}", report.cause);
    println!("Ticks        : {}", report.ticks_completed);
    println!("Mission time : {:.3} s", report.mission_time);
    println!("Compute time : {:.3} s", report.total_compute_secs);
    if let Some(m) = &report.metrics {
        println!("Smoothness   : {:.4} (avg)", m.avg_smoothness);
        println!("Path length  : {:.4} m (avg)", m.avg_path_length);
        println!(
            "Inter-agent  : min {:.4} m, avg {:.4} m",
            m.min_inter_agent_distance, m.avg_inter_agent_distance
        );
        println!(
            "Obstacles    : min {:.4} m, avg {:.4} m",
            m.min_agent_obstacle_distance, m.avg_agent_obstacle_distance
        );
    }
    println!("Artifacts    : {}", cli.output.display());

    Ok(())
}

fn run<S: AgentSolver>(scenario: Scenario, solver: S, out: &Path) -> Result<RunReport> {
    let mut sim = SimBuilder::new(scenario, solver).build()?;
    let mut recorder = RunRecorder::new(CsvJsonWriter::new(out)?);

    let t0 = Instant::now();
    let report = sim.run(&mut recorder)?;
    info!(elapsed_secs = t0.elapsed().as_secs_f64(), "run finished");

    if let Some(e) = recorder.take_error() {
        eprintln!("output error: {e}");
    }
    Ok(report)
}
