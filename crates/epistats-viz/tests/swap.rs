//! Property tests for the rows/columns exchange.

use proptest::prelude::*;

use epistats_model::{CaseAttribute, SubAttribute};
use epistats_viz::VisualizationConfig;

fn axis_selection() -> impl Strategy<Value = (CaseAttribute, Option<SubAttribute>)> {
    (0..CaseAttribute::ALL.len()).prop_flat_map(|index| {
        let attribute = CaseAttribute::ALL[index];
        let subs = attribute.sub_attributes();
        let sub = if subs.is_empty() {
            Just(None).boxed()
        } else {
            prop_oneof![
                Just(None),
                (0..subs.len()).prop_map(move |i| Some(subs[i])),
            ]
            .boxed()
        };
        (Just(attribute), sub)
    })
}

proptest! {
    #[test]
    fn swapping_twice_restores_the_original_assignment(
        rows in axis_selection(),
        columns in axis_selection(),
        swaps in 0usize..4,
    ) {
        let mut config = VisualizationConfig::new();
        config.select_rows(rows.0, rows.1).unwrap();
        config.select_columns(columns.0, columns.1).unwrap();

        let before = (
            config.rows().attribute(),
            config.rows().sub_attribute(),
            config.columns().attribute(),
            config.columns().sub_attribute(),
        );

        for _ in 0..swaps * 2 {
            config.swap_rows_and_columns();
        }

        let after = (
            config.rows().attribute(),
            config.rows().sub_attribute(),
            config.columns().attribute(),
            config.columns().sub_attribute(),
        );
        prop_assert_eq!(before, after);
    }

    #[test]
    fn a_single_swap_exchanges_the_selections(
        rows in axis_selection(),
        columns in axis_selection(),
    ) {
        let mut config = VisualizationConfig::new();
        config.select_rows(rows.0, rows.1).unwrap();
        config.select_columns(columns.0, columns.1).unwrap();

        config.swap_rows_and_columns();

        prop_assert_eq!(config.rows().attribute(), Some(columns.0));
        prop_assert_eq!(config.rows().sub_attribute(), columns.1);
        prop_assert_eq!(config.columns().attribute(), Some(rows.0));
        prop_assert_eq!(config.columns().sub_attribute(), rows.1);
    }
}
