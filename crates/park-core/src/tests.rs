//! Unit tests for park-core primitives.

#[cfg(test)]
mod ids {
    use crate::{DestinationId, VehicleId};

    #[test]
    fn index_roundtrip() {
        let id = VehicleId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(VehicleId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn destination_id_overflow_rejected() {
        assert!(DestinationId::try_from(70_000usize).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(VehicleId(7).to_string(), "VehicleId(7)");
    }
}

#[cfg(test)]
mod grid {
    use crate::Cell;

    #[test]
    fn distance_is_euclidean() {
        let a = Cell::new(0, 0);
        assert_eq!(a.distance_to(Cell::new(3, 4)), 5.0);
        assert_eq!(a.distance_to(a), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Cell::new(-2, 7);
        let b = Cell::new(5, 1);
        assert_eq!(a.distance_to(b), b.distance_to(a));
    }

    #[test]
    fn ordering_is_column_then_row() {
        assert!(Cell::new(0, 1) < Cell::new(1, 0));
        assert!(Cell::new(1, 0) < Cell::new(1, 2));
    }
}

#[cfg(test)]
mod mask {
    use crate::{Cell, CellKind, CoreError, Mask, Region};

    #[test]
    fn shape_mismatch_rejected() {
        let err = Mask::new(3, 2, vec![CellKind::Spot; 5]).unwrap_err();
        assert!(matches!(err, CoreError::MaskShape { cells: 5, .. }));
    }

    #[test]
    fn zero_dimension_rejected() {
        assert!(matches!(
            Mask::new(0, 4, vec![]),
            Err(CoreError::EmptyMask { .. })
        ));
    }

    #[test]
    fn oversized_dimensions_rejected_without_overflow() {
        assert!(matches!(
            Mask::filled(usize::MAX, usize::MAX, CellKind::Spot),
            Err(CoreError::Config(_))
        ));
        assert!(matches!(
            Mask::new(usize::MAX, 2, vec![]),
            Err(CoreError::Config(_))
        ));
        assert!(matches!(
            Mask::from_fn(i32::MAX as usize + 1, 1, |_| CellKind::Spot),
            Err(CoreError::Config(_))
        ));
    }

    #[test]
    fn ascii_roundtrip_and_lookup() {
        let text = "P.#\n.PP\n";
        let mask = Mask::from_ascii(text).unwrap();
        assert_eq!(mask.width(), 3);
        assert_eq!(mask.height(), 2);
        assert_eq!(mask.get(Cell::new(0, 0)), Some(CellKind::Spot));
        assert_eq!(mask.get(Cell::new(2, 0)), Some(CellKind::Road));
        assert_eq!(mask.get(Cell::new(1, 0)), Some(CellKind::NotSpot));
        assert_eq!(mask.get(Cell::new(3, 0)), None);
        assert_eq!(mask.get(Cell::new(-1, 0)), None);
        assert_eq!(mask.spot_count(), 3);
        assert_eq!(mask.to_ascii(), text);
    }

    #[test]
    fn ragged_ascii_rejected() {
        let err = Mask::from_ascii("PP\nP\n").unwrap_err();
        assert!(matches!(err, CoreError::RaggedRow { row: 1, got: 1, expected: 2 }));
    }

    #[test]
    fn column_major_iteration() {
        let mask = Mask::filled(2, 2, CellKind::Spot).unwrap();
        let order: Vec<Cell> = mask.iter_column_major().map(|(c, _)| c).collect();
        assert_eq!(
            order,
            vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 0), Cell::new(1, 1)]
        );
    }

    #[test]
    fn from_fn_matches_predicate() {
        let mask = Mask::from_fn(4, 3, |c| {
            if c.row == 1 { CellKind::Road } else { CellKind::Spot }
        })
        .unwrap();
        assert_eq!(mask.spot_count(), 8);
        assert!(!mask.is_spot(Cell::new(2, 1)));
    }

    #[test]
    fn region_is_half_open_and_order_free() {
        let r = Region::from_corners(Cell::new(4, 5), Cell::new(1, 2));
        assert!(r.contains(Cell::new(1, 2)));
        assert!(r.contains(Cell::new(3, 4)));
        assert!(!r.contains(Cell::new(4, 4)));
        assert!(!r.contains(Cell::new(3, 5)));
        assert!(!r.is_empty());
        assert!(Region::from_corners(Cell::new(1, 1), Cell::new(1, 9)).is_empty());
    }
}

#[cfg(test)]
mod time {
    use crate::{SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        assert_eq!(Tick(10) + 5, Tick(15));
        assert_eq!(Tick(3).next(), Tick(4));
        assert_eq!(Tick(9).to_string(), "T9");
    }

    #[test]
    fn end_tick() {
        let cfg = SimConfig { total_ticks: 250, seed: 1 };
        assert_eq!(cfg.end_tick(), Tick(250));
    }
}

#[cfg(test)]
mod rng {
    use crate::{RandomSource, SequenceRng, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.unit(), r2.unit());
        }
    }

    #[test]
    fn sim_rng_draws_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let u = rng.unit();
            assert!((0.0..1.0).contains(&u));
            let r = rng.range_inclusive(3, 7);
            assert!((3..=7).contains(&r));
            assert!(rng.index(4) < 4);
        }
    }

    #[test]
    fn bernoulli_extremes() {
        let mut rng = SimRng::new(7);
        for _ in 0..100 {
            assert!(!rng.bernoulli(0.0));
            assert!(rng.bernoulli(1.0));
        }
    }

    #[test]
    fn children_diverge() {
        let mut root = SimRng::new(1);
        let mut a = root.child(0);
        let mut b = root.child(1);
        assert_ne!(a.unit(), b.unit());
    }

    #[test]
    fn sequence_cycles() {
        let mut rng = SequenceRng::new([0.1, 0.6]);
        assert_eq!(rng.unit(), 0.1);
        assert_eq!(rng.unit(), 0.6);
        assert_eq!(rng.unit(), 0.1);
        assert_eq!(rng.draws(), 3);
    }

    #[test]
    fn sequence_integer_scaling() {
        let mut low = SequenceRng::constant(0.0);
        assert_eq!(low.range_inclusive(10, 60), 10);
        assert_eq!(low.index(5), 0);

        let mut high = SequenceRng::constant(0.99);
        assert_eq!(high.range_inclusive(10, 60), 60);
        assert_eq!(high.index(5), 4);
        assert_eq!(high.range_inclusive(1, 1), 1);
    }

    #[test]
    fn sequence_clamps_out_of_range_values() {
        let mut rng = SequenceRng::new([1.5, -2.0]);
        assert!(rng.unit() < 1.0);
        assert_eq!(rng.unit(), 0.0);
        assert_eq!(SequenceRng::new(Vec::new()).unit(), 0.0);
    }
}
