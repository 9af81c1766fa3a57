//! Tests for the park-sim tick loop.

use park_core::{Cell, CellKind, Mask, SequenceRng, SimConfig, Tick};
use park_decision::ScoringWeights;
use park_fleet::{DestinationTable, FleetBuilder, FleetManager, SpawnPolicy, Vehicle};

use crate::{NoopObserver, Sim, SimObserver, TickSummary};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn config(total_ticks: u64) -> SimConfig {
    SimConfig { total_ticks, seed: 42 }
}

fn lot(width: usize, height: usize) -> FleetManager {
    FleetBuilder::new(
        Mask::filled(width, height, CellKind::Spot).unwrap(),
        DestinationTable::cardinal(width, height),
    )
    .weights(ScoringWeights::new(0.5, 0.5).unwrap())
    .spawn_policy(SpawnPolicy { min_parking_time: 0, ..SpawnPolicy::default() })
    .build()
    .unwrap()
}

/// Records every callback.
#[derive(Default)]
struct Recorder {
    starts:    Vec<Tick>,
    summaries: Vec<TickSummary>,
    departed:  usize,
    ended:     Option<Tick>,
    max_drawn: usize,
}

impl SimObserver for Recorder {
    fn on_tick_start(&mut self, tick: Tick) {
        self.starts.push(tick);
    }
    fn on_departures(&mut self, _tick: Tick, departed: &[Vehicle]) {
        assert!(!departed.is_empty());
        self.departed += departed.len();
    }
    fn on_tick_end(&mut self, summary: &TickSummary, vehicles: &[Vehicle]) {
        assert_eq!(summary.stats.parked, vehicles.len());
        self.max_drawn = self.max_drawn.max(vehicles.len());
        self.summaries.push(*summary);
    }
    fn on_sim_end(&mut self, final_tick: Tick) {
        self.ended = Some(final_tick);
    }
}

// ── Run control ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn run_stops_at_end_tick() {
        let mut sim = Sim::new(config(25), lot(6, 6));
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();

        assert_eq!(sim.current_tick, Tick(25));
        assert_eq!(rec.starts.len(), 25);
        assert_eq!(rec.summaries.len(), 25);
        assert_eq!(rec.ended, Some(Tick(25)));
        assert!(rec.max_drawn > 0);
    }

    #[test]
    fn run_ticks_advances_clock() {
        let mut sim = Sim::new(config(100), lot(4, 4));
        sim.run_ticks(5, &mut NoopObserver).unwrap();
        assert_eq!(sim.current_tick, Tick(5));
        sim.run_ticks(3, &mut NoopObserver).unwrap();
        assert_eq!(sim.current_tick, Tick(8));
    }

    #[test]
    fn summaries_balance_the_fleet() {
        let mut sim = Sim::new(config(300), lot(8, 5));
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();

        let mut parked = 0i64;
        for s in &rec.summaries {
            parked += s.placed as i64 - s.departed as i64;
            assert_eq!(parked as usize, s.stats.parked);
            assert!(s.placed <= s.requested);
        }
        let total_departed: u32 = rec.summaries.iter().map(|s| s.departed).sum();
        assert_eq!(total_departed as usize, rec.departed);
    }

    #[test]
    fn same_seed_same_history() {
        let history = |seed| {
            let mut sim = Sim::new(SimConfig { total_ticks: 60, seed }, lot(7, 7));
            let mut rec = Recorder::default();
            sim.run(&mut rec).unwrap();
            let cells: Vec<Cell> = sim.fleet.vehicles().iter().map(|v| v.position()).collect();
            (rec.summaries, cells)
        };
        assert_eq!(history(9), history(9));
    }
}

// ── Scripted scenarios ────────────────────────────────────────────────────────

#[cfg(test)]
mod scripted_tests {
    use super::*;

    fn scenario_sim() -> Sim<park_decision::WeightedScorer, SequenceRng> {
        let fleet = FleetBuilder::new(
            Mask::filled(5, 5, CellKind::Spot).unwrap(),
            DestinationTable::from_pairs([("gate", Cell::new(0, 0))]).unwrap(),
        )
        .weights(ScoringWeights::new(1.0, 0.0).unwrap())
        .spawn_policy(SpawnPolicy {
            spawn_probability: 1.0,
            max_new_cars:      1,
            min_parking_time:  0,
            dwell_seed_span:   50,
        })
        .build()
        .unwrap();
        Sim::with_rng(config(10), fleet, SequenceRng::constant(0.99))
    }

    #[test]
    fn two_ticks_fill_nearest_cells() {
        let mut sim = scenario_sim();
        let first = sim.step(&mut NoopObserver).unwrap();
        assert_eq!(first.placed, 1);
        assert_eq!(sim.fleet.vehicles()[0].position(), Cell::new(0, 0));

        sim.step(&mut NoopObserver).unwrap();
        let cells: Vec<Cell> = sim.fleet.vehicles().iter().map(|v| v.position()).collect();
        assert_eq!(cells, vec![Cell::new(0, 0), Cell::new(0, 1)]);
    }

    #[test]
    fn weights_set_between_ticks_apply_next_tick() {
        let mut sim = scenario_sim();
        sim.step(&mut NoopObserver).unwrap();
        sim.set_weights(ScoringWeights::new(0.0, 1.0).unwrap());
        sim.step(&mut NoopObserver).unwrap();
        assert_eq!(sim.fleet.vehicles()[1].position(), Cell::new(4, 4));
    }

    #[test]
    fn full_lot_turns_arrivals_away() {
        let mut sim = scenario_sim();
        sim.run_ticks(25, &mut NoopObserver).unwrap();
        assert_eq!(sim.fleet.vehicles().len(), 25);

        let s = sim.step(&mut NoopObserver).unwrap();
        assert_eq!(s.requested, 1);
        assert_eq!(s.placed, 0);
        assert_eq!(s.stats.occupancy_ratio, 1.0);
    }
}
