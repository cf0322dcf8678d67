use digirain::engine::{Cell, Engine, LiveSource, ScrollStyle, Settings};
use proptest::prelude::*;

fn check_invariants(engine: &Engine) -> Result<(), TestCaseError> {
    let rows = engine.rows();
    for (col, column) in engine.state().columns().iter().enumerate() {
        prop_assert!(column.length >= 3 && column.length <= rows / 2 + 2);
        prop_assert!(column.spaces <= rows);
        prop_assert!((1..=3).contains(&column.update_cadence));

        let cells = engine.grid().column(col);
        for run in cells.split(|c| c.is_blank()) {
            let heads = run.iter().filter(|c| **c == Cell::Head).count();
            prop_assert!(heads <= 1, "column {} has a stream with {} heads", col, heads);
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn streams_keep_their_shape(
        seed in any::<u64>(),
        rows in 10u16..48,
        cols in 10u16..60,
        real in any::<bool>(),
        changes in any::<bool>(),
        async_cadence in any::<bool>(),
        frames in 1usize..300,
    ) {
        let mut engine = Engine::new(rows, cols, Box::new(LiveSource::with_seed(seed))).unwrap();
        let settings = Settings {
            scroll: if real { ScrollStyle::Real } else { ScrollStyle::Fake },
            changes,
            async_cadence,
            ..Settings::default()
        };

        check_invariants(&engine)?;
        for _ in 0..frames {
            engine.advance(&settings);
            check_invariants(&engine)?;
        }
    }

    #[test]
    fn resize_starts_from_scratch(
        seed in any::<u64>(),
        rows in 0u16..60,
        cols in 0u16..60,
    ) {
        let mut engine = Engine::new(24, 80, Box::new(LiveSource::with_seed(seed))).unwrap();
        let settings = Settings { async_cadence: false, ..Settings::default() };
        for _ in 0..40 {
            engine.advance(&settings);
        }

        engine.rebuild(rows, cols).unwrap();
        let rows = rows.max(10);
        let cols = cols.max(10);
        prop_assert_eq!(engine.rows(), usize::from(rows));
        prop_assert_eq!(engine.grid().cols(), (usize::from(cols) + 1) / 2);
        prop_assert!(engine.grid().is_blank());
        check_invariants(&engine)?;
    }
}
