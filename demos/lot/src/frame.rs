//! ASCII frame renderer — the demo's stand-in for a graphical front end.

use park_core::{Cell, CellKind, Mask};
use park_fleet::{DestinationTable, Vehicle};
use park_sim::{SimObserver, TickSummary};

/// Draws the lot every `every` ticks: `#` road, `_` free spot, blank for
/// other terrain, and each parked vehicle as the first letter of its
/// destination label.
pub struct AsciiFrame {
    mask:         Mask,
    destinations: DestinationTable,
    every:        u64,
}

impl AsciiFrame {
    pub fn new(mask: Mask, destinations: DestinationTable, every: u64) -> Self {
        Self { mask, destinations, every }
    }

    pub fn render(&self, vehicles: &[Vehicle]) -> String {
        let w = self.mask.width();
        let mut grid: Vec<char> = (0..self.mask.height())
            .flat_map(|row| (0..w).map(move |col| Cell::new(col as i32, row as i32)))
            .map(|cell| match self.mask.get(cell) {
                Some(CellKind::Spot) => '_',
                Some(CellKind::Road) => '#',
                _                    => ' ',
            })
            .collect();

        for v in vehicles {
            let p = v.position();
            if self.mask.contains(p) {
                let glyph = self
                    .destinations
                    .label(v.destination())
                    .and_then(|l| l.chars().next())
                    .unwrap_or('*');
                grid[p.row as usize * w + p.col as usize] = glyph;
            }
        }

        let mut out = String::with_capacity(grid.len() + self.mask.height());
        for row in grid.chunks(w) {
            out.extend(row);
            out.push('\n');
        }
        out
    }
}

impl SimObserver for AsciiFrame {
    fn on_tick_end(&mut self, s: &TickSummary, vehicles: &[Vehicle]) {
        if self.every > 0 && s.tick.0.is_multiple_of(self.every) {
            println!(
                "── {} ── parked {}/{}  mean dwell {:.1}",
                s.tick, s.stats.parked, s.stats.capacity, s.stats.mean_time_spent
            );
            print!("{}", self.render(vehicles));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use park_core::{DestinationId, VehicleId};

    #[test]
    fn vehicles_drawn_with_destination_initial() {
        let mask = Mask::from_ascii("PP#\n.P#\n").unwrap();
        let table = DestinationTable::cardinal(3, 2);
        let frame = AsciiFrame::new(mask, table, 1);
        let cars = [Vehicle::new(VehicleId(0), Cell::new(1, 1), DestinationId(3), 0)];
        assert_eq!(frame.render(&cars), "__#\n w#\n");
    }
}
