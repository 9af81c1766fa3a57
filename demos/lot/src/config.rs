//! JSON run configuration for the demo.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use park_core::SimConfig;
use park_fleet::{DestinationTable, FleetConfig};

/// Everything the demo reads from `--config`.  Every section is optional.
///
/// ```json
/// {
///   "sim":   { "total_ticks": 500, "seed": 7 },
///   "fleet": {
///     "spawn":   { "spawn_probability": 0.9, "max_new_cars": 10, "min_parking_time": 200 },
///     "weights": { "destination": 0.7, "spacing": 0.3 },
///     "search":  "mask"
///   },
///   "destinations": [ { "label": "shop", "point": { "col": 0, "row": 4 } } ]
/// }
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LotConfig {
    pub sim:          SimConfig,
    pub fleet:        FleetConfig,
    /// Defaults to the four border midpoints of the mask.
    pub destinations: Option<DestinationTable>,
}

impl LotConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("parsing {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use park_core::Cell;
    use park_fleet::CandidateSearch;

    #[test]
    fn empty_object_is_all_defaults() {
        let cfg: LotConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.sim, SimConfig::default());
        assert_eq!(cfg.fleet, FleetConfig::default());
        assert!(cfg.destinations.is_none());
    }

    #[test]
    fn partial_sections_merge_with_defaults() {
        let cfg: LotConfig = serde_json::from_str(
            r#"{
                "sim": { "seed": 7 },
                "fleet": {
                    "spawn": { "max_new_cars": 3 },
                    "weights": { "destination": 0.7, "spacing": 0.3 },
                    "search": "open"
                },
                "destinations": [ { "label": "shop", "point": { "col": 0, "row": 4 } } ]
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.sim.seed, 7);
        assert_eq!(cfg.sim.total_ticks, SimConfig::default().total_ticks);
        assert_eq!(cfg.fleet.spawn.max_new_cars, 3);
        assert_eq!(cfg.fleet.spawn.min_parking_time, 200);
        assert_eq!(cfg.fleet.weights.destination(), 0.7);
        assert_eq!(cfg.fleet.search, CandidateSearch::Open);
        let table = cfg.destinations.unwrap();
        assert_eq!(table.id_of("shop").and_then(|id| table.get(id)).unwrap().point, Cell::new(0, 4));
    }

    #[test]
    fn negative_weight_rejected_at_load() {
        let res: Result<LotConfig, _> =
            serde_json::from_str(r#"{ "fleet": { "weights": { "destination": -1, "spacing": 0.5 } } }"#);
        assert!(res.is_err());
    }

    #[test]
    fn duplicate_destination_labels_merge_at_load() {
        let cfg: LotConfig = serde_json::from_str(
            r#"{ "destinations": [
                { "label": "shop", "point": { "col": 0, "row": 4 } },
                { "label": "gate", "point": { "col": 9, "row": 0 } },
                { "label": "shop", "point": { "col": 3, "row": 3 } }
            ] }"#,
        )
        .unwrap();
        let table = cfg.destinations.unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.id_of("shop").and_then(|id| table.get(id)).unwrap().point, Cell::new(3, 3));
    }

    #[test]
    fn oversized_destination_table_rejected_at_load() {
        let entries: Vec<String> = (0..=u16::MAX as u32 + 1)
            .map(|i| format!(r#"{{ "label": "d{i}", "point": {{ "col": 0, "row": 0 }} }}"#))
            .collect();
        let json = format!(r#"{{ "destinations": [{}] }}"#, entries.join(","));
        let res: Result<LotConfig, _> = serde_json::from_str(&json);
        assert!(res.is_err());
    }
}
