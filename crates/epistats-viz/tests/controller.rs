//! Behavioral tests for the visualization configuration controller.

use epistats_model::{CaseAttribute, ChartType, MapType, SubAttribute, VisualizationType};
use epistats_viz::{AxisRole, VisualizationConfig};

#[test]
fn initial_state_is_table_with_latent_sub_types() {
    let mut config = VisualizationConfig::new();
    assert_eq!(config.visualization_type(), VisualizationType::Table);
    // Sub-types are only reported for their own mode.
    assert_eq!(config.chart_type(), None);
    assert_eq!(config.map_type(), None);
    assert!(config.rows().attribute().is_some());
    assert!(config.columns().attribute().is_some());

    // The latent defaults surface as soon as the matching mode is active.
    config.set_visualization_type(VisualizationType::Chart);
    assert_eq!(config.chart_type(), Some(ChartType::StackedColumn));
    config.set_visualization_type(VisualizationType::Map);
    assert_eq!(config.map_type(), Some(MapType::Regions));
    assert_eq!(config.chart_type(), None);
}

#[test]
fn sub_type_selector_visibility_matches_the_mode() {
    let mut config = VisualizationConfig::new();
    for mode in VisualizationType::ALL {
        config.set_visualization_type(mode);
        let visibility = config.visibility();
        assert_eq!(
            visibility.chart_type_selector,
            mode == VisualizationType::Chart
        );
        assert_eq!(visibility.map_type_selector, mode == VisualizationType::Map);
        assert!(!(visibility.chart_type_selector && visibility.map_type_selector));
    }
}

#[test]
fn table_mode_shows_both_axes_and_the_swap_control() {
    let config = VisualizationConfig::new();
    let visibility = config.visibility();
    assert!(visibility.rows_element);
    assert!(visibility.columns_element);
    assert!(visibility.swap_control);
}

#[test]
fn pie_chart_hides_the_column_axis_and_swap_control() {
    let mut config = VisualizationConfig::new();
    config.set_visualization_type(VisualizationType::Chart);
    config.set_chart_type(ChartType::Pie).unwrap();
    let visibility = config.visibility();
    assert!(visibility.rows_element);
    assert!(!visibility.columns_element);
    assert!(!visibility.swap_control);
    assert_eq!(config.columns_attribute(), None);
    assert_eq!(config.columns_sub_attribute(), None);
}

#[test]
fn non_pie_chart_keeps_the_column_axis() {
    let mut config = VisualizationConfig::new();
    config.set_visualization_type(VisualizationType::Chart);
    config.set_chart_type(ChartType::Column).unwrap();
    assert!(config.visibility().columns_element);
    assert!(config.columns_attribute().is_some());
}

#[test]
fn map_mode_forces_region_district_rows() {
    let mut config = VisualizationConfig::new();
    config.set_visualization_type(VisualizationType::Map);

    config.set_map_type(MapType::Regions).unwrap();
    assert_eq!(config.rows_attribute().unwrap(), CaseAttribute::RegionDistrict);
    assert_eq!(
        config.rows_sub_attribute().unwrap(),
        Some(SubAttribute::Region)
    );

    config.set_map_type(MapType::Districts).unwrap();
    assert_eq!(config.rows_attribute().unwrap(), CaseAttribute::RegionDistrict);
    assert_eq!(
        config.rows_sub_attribute().unwrap(),
        Some(SubAttribute::District)
    );

    assert_eq!(config.columns_attribute(), None);
    assert_eq!(config.columns_sub_attribute(), None);
    assert!(!config.visibility().rows_element);
    assert!(!config.visibility().columns_element);
}

#[test]
fn sub_type_setters_require_the_matching_mode() {
    let mut config = VisualizationConfig::new();
    assert!(config.set_chart_type(ChartType::Pie).is_err());
    assert!(config.set_map_type(MapType::Districts).is_err());

    config.set_visualization_type(VisualizationType::Chart);
    assert!(config.set_chart_type(ChartType::Pie).is_ok());
    assert!(config.set_map_type(MapType::Districts).is_err());
}

#[test]
fn swap_exchanges_selections_and_is_an_involution() {
    let mut config = VisualizationConfig::new();
    config
        .select_rows(CaseAttribute::RegionDistrict, Some(SubAttribute::District))
        .unwrap();
    config.select_columns(CaseAttribute::Sex, None).unwrap();

    config.swap_rows_and_columns();
    assert_eq!(config.rows().role(), AxisRole::Rows);
    assert_eq!(config.columns().role(), AxisRole::Columns);
    assert_eq!(config.rows().attribute(), Some(CaseAttribute::Sex));
    assert_eq!(config.rows().sub_attribute(), None);
    assert_eq!(
        config.columns().attribute(),
        Some(CaseAttribute::RegionDistrict)
    );
    assert_eq!(
        config.columns().sub_attribute(),
        Some(SubAttribute::District)
    );

    config.swap_rows_and_columns();
    assert_eq!(
        config.rows().attribute(),
        Some(CaseAttribute::RegionDistrict)
    );
    assert_eq!(config.rows().sub_attribute(), Some(SubAttribute::District));
    assert_eq!(config.columns().attribute(), Some(CaseAttribute::Sex));
}

#[test]
fn disabling_stacked_column_and_pie_resets_a_disabled_selection() {
    let mut config = VisualizationConfig::new();
    config.set_visualization_type(VisualizationType::Chart);
    config.set_chart_type(ChartType::Pie).unwrap();

    config.set_stacked_column_and_pie_enabled(false);
    assert_eq!(config.chart_type(), Some(ChartType::Column));
    assert!(config.set_chart_type(ChartType::StackedColumn).is_err());
    assert!(config.set_chart_type(ChartType::Pie).is_err());

    config.set_stacked_column_and_pie_enabled(true);
    assert!(config.set_chart_type(ChartType::Pie).is_ok());
}

#[test]
fn disabling_leaves_other_chart_types_untouched() {
    let mut config = VisualizationConfig::new();
    config.set_visualization_type(VisualizationType::Chart);
    config.set_chart_type(ChartType::Line).unwrap();
    config.set_stacked_column_and_pie_enabled(false);
    assert_eq!(config.chart_type(), Some(ChartType::Line));
}

#[test]
fn mode_change_restricts_axis_selections() {
    let mut config = VisualizationConfig::new();
    config.select_rows(CaseAttribute::Disease, None).unwrap();
    config.set_visualization_type(VisualizationType::Map);
    // Disease is not a geographic grouping, so the element falls back to
    // an attribute the map can use.
    assert_eq!(
        config.rows().attribute(),
        Some(CaseAttribute::RegionDistrict)
    );

    config.set_visualization_type(VisualizationType::Table);
    assert!(config.select_rows(CaseAttribute::Disease, None).is_ok());
}

#[test]
fn selecting_a_foreign_sub_attribute_is_rejected() {
    let mut config = VisualizationConfig::new();
    let error = config
        .select_rows(CaseAttribute::Sex, Some(SubAttribute::Region))
        .unwrap_err();
    assert!(error.to_string().contains("REGION"));
}

#[test]
fn grouping_predicates_follow_the_axis_selections() {
    let mut config = VisualizationConfig::new();
    config
        .select_rows(CaseAttribute::RegionDistrict, Some(SubAttribute::Region))
        .unwrap();
    config
        .select_columns(CaseAttribute::AgeInterval5Years, None)
        .unwrap();

    assert!(config.has_region_grouping());
    assert!(!config.has_district_grouping());
    assert!(!config.has_sex_grouping());
    assert!(config.has_age_group_grouping());
    assert!(!config.has_age_group_grouping_without_population_data());
    assert!(config.has_population_grouping());

    config
        .select_columns(CaseAttribute::AgeIntervalBasic, None)
        .unwrap();
    assert!(!config.has_age_group_grouping());
    assert!(config.has_age_group_grouping_without_population_data());

    config.swap_rows_and_columns();
    // Predicates look at both axes, so swapping must not change them.
    assert!(config.has_region_grouping());
    assert!(config.has_age_group_grouping_without_population_data());
}

#[test]
fn query_spec_composes_the_effective_groupings() {
    let mut config = VisualizationConfig::new();
    config
        .select_rows(CaseAttribute::ReportTime, Some(SubAttribute::EpiWeekOfYear))
        .unwrap();
    config.select_columns(CaseAttribute::Sex, None).unwrap();

    let spec = config.query_spec().unwrap();
    assert_eq!(spec.rows_attribute, CaseAttribute::ReportTime);
    assert_eq!(spec.rows_sub_attribute, Some(SubAttribute::EpiWeekOfYear));
    assert_eq!(spec.columns_attribute, Some(CaseAttribute::Sex));
    assert_eq!(spec.columns_sub_attribute, None);
    assert!(spec.needs_population_data);

    config.set_visualization_type(VisualizationType::Map);
    config.set_map_type(MapType::Districts).unwrap();
    let spec = config.query_spec().unwrap();
    assert_eq!(spec.rows_attribute, CaseAttribute::RegionDistrict);
    assert_eq!(spec.rows_sub_attribute, Some(SubAttribute::District));
    assert_eq!(spec.columns_attribute, None);
}
