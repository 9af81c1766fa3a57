//! Named destination points.
//!
//! The table keeps insertion order, so a uniform draw over indices is
//! reproducible for a given seed.

use rustc_hash::FxHashMap;

use park_core::{Cell, DestinationId};

use crate::{FleetError, FleetResult};

/// A labelled fixed point vehicles are heading for.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Destination {
    pub label: String,
    pub point: Cell,
}

/// Ordered `label → point` table, indexed by [`DestinationId`].
///
/// Holds at most `u16::MAX + 1` entries, so every index fits a
/// `DestinationId`.  With the `serde` feature it reads and writes a plain
/// list of destinations; loading goes through [`from_pairs`](Self::from_pairs).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Destination>", into = "Vec<Destination>")
)]
pub struct DestinationTable {
    entries:  Vec<Destination>,
    by_label: FxHashMap<String, DestinationId>,
}

impl DestinationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The four border midpoints of a `width × height` grid, in the order
    /// `north`, `east`, `south`, `west`.
    pub fn cardinal(width: usize, height: usize) -> Self {
        let w = width.max(1) as i32;
        let h = height.max(1) as i32;
        let mut table = Self::new();
        for (label, point) in [
            ("north", Cell::new(w / 2, 0)),
            ("east",  Cell::new(w - 1, h / 2)),
            ("south", Cell::new(w / 2, h - 1)),
            ("west",  Cell::new(0, h / 2)),
        ] {
            let id = DestinationId(table.entries.len() as u16);
            table.by_label.insert(label.to_owned(), id);
            table.entries.push(Destination { label: label.to_owned(), point });
        }
        table
    }

    /// Add `label` at `point`, or move an existing label to `point`.
    pub fn insert(&mut self, label: impl Into<String>, point: Cell) -> FleetResult<DestinationId> {
        let label = label.into();
        if let Some(id) = self.id_of(&label) {
            self.entries[id.index()].point = point;
            return Ok(id);
        }
        let id = DestinationId::try_from(self.entries.len())
            .map_err(|_| FleetError::Config("too many destinations".into()))?;
        self.by_label.insert(label.clone(), id);
        self.entries.push(Destination { label, point });
        Ok(id)
    }

    /// Build from `(label, point)` pairs; later duplicates override earlier ones.
    pub fn from_pairs<I, L>(pairs: I) -> FleetResult<Self>
    where
        I: IntoIterator<Item = (L, Cell)>,
        L: Into<String>,
    {
        let mut table = Self::new();
        for (label, point) in pairs {
            table.insert(label, point)?;
        }
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: DestinationId) -> Option<&Destination> {
        self.entries.get(id.index())
    }

    pub fn label(&self, id: DestinationId) -> Option<&str> {
        self.get(id).map(|d| d.label.as_str())
    }

    pub fn id_of(&self, label: &str) -> Option<DestinationId> {
        self.by_label.get(label).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DestinationId, &Destination)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, d)| (DestinationId(i as u16), d)) // bounded by `insert`
    }
}

impl TryFrom<Vec<Destination>> for DestinationTable {
    type Error = FleetError;

    fn try_from(entries: Vec<Destination>) -> FleetResult<Self> {
        Self::from_pairs(entries.into_iter().map(|d| (d.label, d.point)))
    }
}

impl From<DestinationTable> for Vec<Destination> {
    fn from(table: DestinationTable) -> Self {
        table.entries
    }
}
