use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::info;
use serde::Serialize;

use jj_supercurrent::current::extract;
use jj_supercurrent::dispersion::{SweepConfig, closest_phase_index, solve};
use jj_supercurrent::interfaces::ModelVariant;
use jj_supercurrent::junction::JunctionBuilder;

#[derive(Parser)]
#[command(name = "jj-supercurrent")]
#[command(about = "Current-phase relation of a phase-biased superconducting strip")]
#[command(version)]
struct Cli {
    /// JSON sweep description; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Sites across the strip
    #[arg(short, long)]
    width: Option<usize>,

    /// Phase samples over [0, 2pi]
    #[arg(long)]
    phases: Option<usize>,

    /// Momentum samples over [-pi, pi]
    #[arg(long)]
    momenta: Option<usize>,

    /// Chemical potential
    #[arg(long, allow_hyphen_values = true)]
    mu: Option<f64>,

    /// Pairing amplitude
    #[arg(long, allow_hyphen_values = true)]
    delta: Option<f64>,

    /// Hopping
    #[arg(long, allow_hyphen_values = true)]
    t: Option<f64>,

    /// Rashba strength (spinful model)
    #[arg(long, allow_hyphen_values = true)]
    alpha: Option<f64>,

    /// Zeeman field along x (spinful model)
    #[arg(long, allow_hyphen_values = true)]
    zeeman_x: Option<f64>,

    /// Zeeman field along y (spinful model)
    #[arg(long, allow_hyphen_values = true)]
    zeeman_y: Option<f64>,

    /// Zeeman field along z (spinful model)
    #[arg(long, allow_hyphen_values = true)]
    zeeman_z: Option<f64>,

    /// Use the particle-hole x spin model
    #[arg(long)]
    spinful: bool,

    /// Write results as JSON to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Include the full dispersion table in the output
    #[arg(long)]
    with_dispersion: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Number of threads to use (default: all available cores)
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Serialize)]
struct Report {
    version: &'static str,
    config: SweepConfig,
    phases: Vec<f64>,
    momenta: Vec<f64>,
    currents: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dispersions: Option<Vec<Vec<Vec<f64>>>>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Set thread pool size if specified
    if let Some(threads) = cli.threads {
        #[cfg(feature = "parallel")]
        {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .context("Failed to set thread pool size")?;
            info!("Using {} threads", threads);
        }
        #[cfg(not(feature = "parallel"))]
        {
            log::warn!("Thread count {} specified but parallel feature not enabled. Ignoring.", threads);
        }
    }

    info!("Starting jj-supercurrent v{}", jj_supercurrent::VERSION);

    let config = resolve_config(&cli)?;
    let report = run_sweep(config, cli.with_dispersion)?;

    let json = serde_json::to_string_pretty(&report)?;
    match &cli.output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
            info!("Results written to {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn resolve_config(cli: &Cli) -> anyhow::Result<SweepConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            SweepConfig::from_json(&json)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => SweepConfig::default(),
    };

    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(n) = cli.phases {
        config.phase_points = n;
    }
    if let Some(n) = cli.momenta {
        config.momentum_points = n;
    }
    if cli.spinful {
        config.variant = ModelVariant::Spinful;
    }

    let params = &mut config.params;
    if let Some(mu) = cli.mu {
        params.mu = mu;
    }
    if let Some(delta) = cli.delta {
        params.delta = delta;
    }
    if let Some(t) = cli.t {
        params.t = t;
    }
    if let Some(alpha) = cli.alpha {
        params.alpha = alpha;
    }
    for (axis, value) in [cli.zeeman_x, cli.zeeman_y, cli.zeeman_z].into_iter().enumerate() {
        if let Some(h) = value {
            params.zeeman[axis] = h;
        }
    }

    Ok(config)
}

fn run_sweep(config: SweepConfig, with_dispersion: bool) -> anyhow::Result<Report> {
    let model = JunctionBuilder::new()
        .with_width(config.width)
        .with_variant(config.variant)
        .build()?;

    let phases = config.phases();
    let momenta = config.momenta();
    let table = solve(&model, &phases, &momenta, &config.params)?;
    let cpr = extract(&table)?;

    if let Some(i) = closest_phase_index(&table.phases, std::f64::consts::PI / 2.0) {
        info!(
            "I(phi = {:.3}) = {:.4e} A, max |I| = {:.4e} A",
            table.phases[i],
            cpr.currents[i],
            cpr.critical_current()
        );
    }

    Ok(Report {
        version: jj_supercurrent::VERSION,
        config,
        phases: table.phases.clone(),
        momenta: table.momenta.clone(),
        currents: cpr.currents,
        dispersions: with_dispersion.then_some(table.dispersions),
    })
}
