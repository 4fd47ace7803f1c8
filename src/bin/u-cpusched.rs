//! u-cpusched: compare CPU scheduling disciplines on one workload.
//!
//! Generates (or loads) a workload, runs every selected discipline over
//! it and prints the comparison table and conclusions.
//!
//! # Usage
//!
//! ```bash
//! u-cpusched --seed 42 --quantum 4 --gantt
//! u-cpusched --workload processes.json --algorithms fcfs,srtf --json
//! RUST_LOG=u_cpusched=debug u-cpusched --processes 5 --seed 1
//! ```

use std::path::PathBuf;
use std::process;

use clap::Parser;
use serde_json::json;
use tracing_subscriber::EnvFilter;

use u_cpusched::comparison::{self, AlgorithmOutcome};
use u_cpusched::config::SimulationConfig;
use u_cpusched::generator::WorkloadGenerator;
use u_cpusched::models::Workload;
use u_cpusched::report::{self, GanttChart};
use u_cpusched::scheduler::{Algorithm, Scheduler};
use u_cpusched::SchedError;

/// Default chart width in columns.
const CHART_WIDTH_DEFAULT: usize = 60;

/// Compare FCFS, SJF, Round-Robin, Priority and SRTF on one workload.
#[derive(Parser, Debug)]
#[command(name = "u-cpusched")]
#[command(about = "CPU scheduling algorithm comparison")]
struct Cli {
    /// JSON configuration file. Flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON array of processes to use instead of a random workload.
    #[arg(long)]
    workload: Option<PathBuf>,

    /// RNG seed for the random workload (random if not set).
    #[arg(long)]
    seed: Option<u64>,

    /// Number of random processes (the transient process is added on top).
    #[arg(long)]
    processes: Option<usize>,

    /// Round-Robin time quantum.
    #[arg(long, allow_negative_numbers = true)]
    quantum: Option<i64>,

    /// PID of the injected process reported in the transient columns.
    #[arg(long)]
    transient_pid: Option<u32>,

    /// Comma-separated disciplines (fcfs, sjf, rr, priority, srtf).
    #[arg(long, value_delimiter = ',')]
    algorithms: Vec<Algorithm>,

    /// Run each discipline on its own thread over a private copy.
    #[arg(long)]
    concurrent: bool,

    /// Print a per-process Gantt chart for each discipline.
    #[arg(long)]
    gantt: bool,

    /// Print the exact execution slices for each discipline.
    #[arg(long)]
    timeline: bool,

    /// Chart width in columns.
    #[arg(long, default_value_t = CHART_WIDTH_DEFAULT)]
    width: usize,

    /// Emit JSON instead of text tables.
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn simulation_config(&self) -> Result<SimulationConfig, SchedError> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::load(path)?,
            None => SimulationConfig::default(),
        };

        if let Some(seed) = self.seed {
            config.workload.seed = Some(seed);
        }
        if let Some(count) = self.processes {
            config.workload.process_count = count;
        }
        if let Some(quantum) = self.quantum {
            config.time_quantum = quantum;
        }
        if let Some(pid) = self.transient_pid {
            config.workload.transient.pid = pid;
        }
        if !self.algorithms.is_empty() {
            config.algorithms = self.algorithms.clone();
        }
        config.concurrent |= self.concurrent;

        config.validate()?;
        Ok(config)
    }
}

fn load_workload(cli: &Cli, config: &SimulationConfig) -> Result<Workload, SchedError> {
    match &cli.workload {
        Some(path) => Workload::from_json(&std::fs::read_to_string(path)?),
        None => WorkloadGenerator::new(config.workload.clone()).generate(),
    }
}

fn run(cli: &Cli) -> Result<(), SchedError> {
    let config = cli.simulation_config()?;
    let mut workload = load_workload(cli, &config)?;
    let scheduler = Scheduler::new().with_time_quantum(config.time_quantum);

    tracing::info!(
        processes = workload.len(),
        quantum = config.time_quantum,
        concurrent = config.concurrent,
        "starting comparison"
    );

    let algorithms = &config.algorithms;
    let transient_pid = config.transient_pid();
    let outcomes: Vec<AlgorithmOutcome> = if config.concurrent {
        comparison::compare_concurrent(&workload, algorithms, &scheduler, transient_pid)?
    } else {
        comparison::compare(&mut workload, algorithms, &scheduler, transient_pid)?
    };

    if cli.json {
        let output = json!({
            "time_quantum": scheduler.time_quantum(),
            "transient_pid": transient_pid,
            "outcomes": outcomes,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for outcome in &outcomes {
        if cli.gantt {
            let title = format!("{} Horizontal Gantt Chart", outcome.algorithm.name());
            let chart = GanttChart::from_processes(title, &outcome.processes);
            println!("{}", chart.render(cli.width));
        }
        if cli.timeline {
            let title = format!("{} Execution Timeline", outcome.algorithm.name());
            println!("{}", report::render_timeline(&title, &outcome.timeline, cli.width));
        }
    }

    println!("{}", report::comparison_table(&outcomes));
    println!("{}", report::conclusions(&config.algorithms));
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
