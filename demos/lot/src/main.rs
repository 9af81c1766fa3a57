//! parksim-lot — drive the occupancy simulator from the terminal.
//!
//! Loads a parking mask (ASCII, `P` = spot, `#` = road) and an optional JSON
//! config, runs the tick loop, and prints an ASCII frame every few ticks.
//! Graphical front ends plug into the same `SimObserver` hook.

mod config;
mod frame;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use park_core::Mask;
use park_decision::ScoringWeights;
use park_fleet::{DestinationTable, FleetBuilder};
use park_sim::{LogObserver, Sim, SimObserver, TickSummary};

use config::LotConfig;
use frame::AsciiFrame;

// ── Built-in lot ──────────────────────────────────────────────────────────────

// Two double rows of bays between three driving lanes.
const DEFAULT_MASK: &str = "\
..........................
.########################.
.#PPPPPPPPPPPPPPPPPPPPPP#.
.#PPPPPPPPPPPPPPPPPPPPPP#.
.########################.
.#PPPPPPPPPPPPPPPPPPPPPP#.
.#PPPPPPPPPPPPPPPPPPPPPP#.
.########################.
..........................
";

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(name = "parksim-lot", about = "Toy parking-lot occupancy simulator")]
struct Args {
    /// ASCII mask file; defaults to a built-in two-aisle lot.
    #[arg(long)]
    mask: Option<PathBuf>,

    /// JSON run configuration.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Ticks to simulate (overrides the config).
    #[arg(long)]
    ticks: Option<u64>,

    /// RNG seed (overrides the config).
    #[arg(long)]
    seed: Option<u64>,

    /// Print a frame every N ticks; 0 disables frames.
    #[arg(long, default_value_t = 50)]
    frame_every: u64,

    /// Log a summary line every N ticks.
    #[arg(long, default_value_t = 10)]
    log_every: u64,

    /// Destination weight (overrides the config).
    #[arg(long)]
    destination_weight: Option<f64>,

    /// Spacing weight (overrides the config).
    #[arg(long)]
    spacing_weight: Option<f64>,
}

// ── Observer fan-out ──────────────────────────────────────────────────────────

struct Observers {
    log:   LogObserver,
    frame: AsciiFrame,
}

impl SimObserver for Observers {
    fn on_tick_end(&mut self, s: &TickSummary, vehicles: &[park_fleet::Vehicle]) {
        self.log.on_tick_end(s, vehicles);
        self.frame.on_tick_end(s, vehicles);
    }

    fn on_sim_end(&mut self, final_tick: park_core::Tick) {
        self.log.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    // 1. Configuration.
    let mut cfg = match &args.config {
        Some(path) => LotConfig::load(path)?,
        None       => LotConfig::default(),
    };
    if let Some(t) = args.ticks {
        cfg.sim.total_ticks = t;
    }
    if let Some(s) = args.seed {
        cfg.sim.seed = s;
    }
    if let Some(w) = args.destination_weight {
        cfg.fleet.weights = cfg.fleet.weights.with_destination(w)?;
    }
    if let Some(w) = args.spacing_weight {
        cfg.fleet.weights = cfg.fleet.weights.with_spacing(w)?;
    }

    // 2. Mask.
    let mask = match &args.mask {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            Mask::from_ascii(&text)?
        }
        None => Mask::from_ascii(DEFAULT_MASK)?,
    };
    let destinations = cfg
        .destinations
        .take()
        .unwrap_or_else(|| DestinationTable::cardinal(mask.width(), mask.height()));
    log::info!(
        "mask {}x{} with {} spots, {} destinations",
        mask.width(),
        mask.height(),
        mask.spot_count(),
        destinations.len()
    );

    // 3. Fleet and sim.
    let weights: ScoringWeights = cfg.fleet.weights;
    let fleet = FleetBuilder::new(mask.clone(), destinations.clone())
        .config(cfg.fleet)
        .build()?;
    let mut sim = Sim::new(cfg.sim, fleet);

    let mut obs = Observers {
        log:   LogObserver::new(args.log_every),
        frame: AsciiFrame::new(mask, destinations, args.frame_every),
    };

    // 4. Run.
    println!(
        "=== parksim-lot: {} ticks, seed {}, weights {:.2}/{:.2} ===",
        sim.config.total_ticks,
        sim.config.seed,
        weights.destination(),
        weights.spacing()
    );
    let t0 = Instant::now();
    sim.run(&mut obs)?;

    // 5. Summary.
    let stats = sim.fleet.stats();
    println!("Simulation complete in {:.3} s", t0.elapsed().as_secs_f64());
    println!(
        "  parked {}/{} ({:.0}%), mean dwell {:.1} ticks",
        stats.parked,
        stats.capacity,
        stats.occupancy_ratio * 100.0,
        stats.mean_time_spent
    );
    Ok(())
}
