use serde::Serialize;
use tracing::debug;

use epistats_model::{
    CaseAttribute, ChartType, MapType, ModelError, Result, SubAttribute, VisualizationType,
};

use crate::element::{AxisRole, AxisSelection};
use crate::query::QuerySpec;

/// Visibility flags for the widgets of a statistics view, derived from the
/// controller state. The widget layer re-renders from this projection; the
/// controller itself never touches rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComponentVisibility {
    pub chart_type_selector: bool,
    pub map_type_selector: bool,
    pub rows_element: bool,
    pub columns_element: bool,
    pub swap_control: bool,
}

/// Configuration state of one statistics view: visualization type, the
/// latent chart/map sub-types, and the two axis grouping elements.
///
/// The two axis elements are owned in a fixed-order array; `rows_index`
/// records which of them currently plays the rows role. Swapping rows and
/// columns flips the index and re-tags the elements, so selections are
/// exchanged without being copied or reset.
#[derive(Debug, Clone)]
pub struct VisualizationConfig {
    visualization_type: VisualizationType,
    chart_type: Option<ChartType>,
    map_type: Option<MapType>,
    elements: [AxisSelection; 2],
    rows_index: usize,
    stacked_column_and_pie_enabled: bool,
}

impl Default for VisualizationConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl VisualizationConfig {
    /// Creates a controller in its initial state: table visualization,
    /// stacked-column chart and regions map latently preselected, both
    /// axis elements carrying their default attribute.
    pub fn new() -> Self {
        let visualization_type = VisualizationType::Table;
        Self {
            visualization_type,
            chart_type: Some(ChartType::StackedColumn),
            map_type: Some(MapType::Regions),
            elements: [
                AxisSelection::new(AxisRole::Rows, visualization_type),
                AxisSelection::new(AxisRole::Columns, visualization_type),
            ],
            rows_index: 0,
            stacked_column_and_pie_enabled: true,
        }
    }

    pub fn visualization_type(&self) -> VisualizationType {
        self.visualization_type
    }

    /// The selected chart sub-type. Present only while the visualization
    /// type is chart; the stored selection stays latent otherwise and
    /// resurfaces when the user switches back.
    pub fn chart_type(&self) -> Option<ChartType> {
        self.chart_type
            .filter(|_| self.visualization_type == VisualizationType::Chart)
    }

    /// The selected map sub-type. Present only while the visualization
    /// type is map; latent otherwise.
    pub fn map_type(&self) -> Option<MapType> {
        self.map_type
            .filter(|_| self.visualization_type == VisualizationType::Map)
    }

    pub fn rows(&self) -> &AxisSelection {
        &self.elements[self.rows_index]
    }

    pub fn columns(&self) -> &AxisSelection {
        &self.elements[1 - self.rows_index]
    }

    /// Switches the visualization type and re-restricts both axis elements
    /// to the attribute options valid for it.
    pub fn set_visualization_type(&mut self, visualization_type: VisualizationType) {
        debug!(from = %self.visualization_type, to = %visualization_type, "visualization type changed");
        self.visualization_type = visualization_type;
        let rows_index = self.rows_index;
        self.elements[rows_index].retag(AxisRole::Rows, visualization_type);
        self.elements[1 - rows_index].retag(AxisRole::Columns, visualization_type);
    }

    /// Selects the chart sub-type. Valid only while the visualization type
    /// is chart, and only for sub-types that are currently enabled.
    pub fn set_chart_type(&mut self, chart_type: ChartType) -> Result<()> {
        if self.visualization_type != VisualizationType::Chart {
            return Err(ModelError::invalid_state(format!(
                "chart type selected while visualization type is {}",
                self.visualization_type
            )));
        }
        if !self.stacked_column_and_pie_enabled
            && matches!(chart_type, ChartType::StackedColumn | ChartType::Pie)
        {
            return Err(ModelError::invalid_state(format!(
                "chart type {chart_type} is disabled for the current data"
            )));
        }
        self.chart_type = Some(chart_type);
        Ok(())
    }

    /// Selects the map sub-type. Valid only while the visualization type
    /// is map.
    pub fn set_map_type(&mut self, map_type: MapType) -> Result<()> {
        if self.visualization_type != VisualizationType::Map {
            return Err(ModelError::invalid_state(format!(
                "map type selected while visualization type is {}",
                self.visualization_type
            )));
        }
        self.map_type = Some(map_type);
        Ok(())
    }

    /// Applies a grouping selection to the rows element.
    pub fn select_rows(
        &mut self,
        attribute: CaseAttribute,
        sub_attribute: Option<SubAttribute>,
    ) -> Result<()> {
        let index = self.rows_index;
        self.elements[index].select(attribute, sub_attribute, self.visualization_type)
    }

    /// Applies a grouping selection to the columns element.
    pub fn select_columns(
        &mut self,
        attribute: CaseAttribute,
        sub_attribute: Option<SubAttribute>,
    ) -> Result<()> {
        let index = 1 - self.rows_index;
        self.elements[index].select(attribute, sub_attribute, self.visualization_type)
    }

    /// Exchanges the roles of the two axis elements in place. Selections
    /// travel with their element; applying the swap twice restores the
    /// original assignment.
    pub fn swap_rows_and_columns(&mut self) {
        self.rows_index = 1 - self.rows_index;
        let rows_index = self.rows_index;
        self.elements[rows_index].retag(AxisRole::Rows, self.visualization_type);
        self.elements[1 - rows_index].retag(AxisRole::Columns, self.visualization_type);
        debug!("rows and columns swapped");
    }

    /// Enables or disables the stacked-column and pie chart sub-types.
    /// Disabling while one of them is selected falls back to the plain
    /// column chart instead of leaving an unselectable value active.
    pub fn set_stacked_column_and_pie_enabled(&mut self, enabled: bool) {
        self.stacked_column_and_pie_enabled = enabled;
        if !enabled
            && matches!(
                self.chart_type,
                Some(ChartType::StackedColumn) | Some(ChartType::Pie)
            )
        {
            debug!(chart_type = ?self.chart_type, "disabled chart type was selected, falling back to column");
            self.chart_type = Some(ChartType::Column);
        }
    }

    pub fn stacked_column_and_pie_enabled(&self) -> bool {
        self.stacked_column_and_pie_enabled
    }

    /// Current widget visibility. Maps and pie charts have no column
    /// dimension, so they hide the columns element and the swap control.
    pub fn visibility(&self) -> ComponentVisibility {
        let visualization_type = self.visualization_type;
        let has_columns = match visualization_type {
            VisualizationType::Table => true,
            VisualizationType::Chart => self.chart_type != Some(ChartType::Pie),
            VisualizationType::Map => false,
        };
        ComponentVisibility {
            chart_type_selector: visualization_type == VisualizationType::Chart,
            map_type_selector: visualization_type == VisualizationType::Map,
            rows_element: matches!(
                visualization_type,
                VisualizationType::Table | VisualizationType::Chart
            ),
            columns_element: has_columns,
            swap_control: has_columns,
        }
    }

    /// The effective rows grouping attribute. Maps always group by
    /// region/district regardless of the rows element.
    pub fn rows_attribute(&self) -> Result<CaseAttribute> {
        if self.visualization_type == VisualizationType::Map {
            return Ok(CaseAttribute::RegionDistrict);
        }
        self.rows()
            .attribute()
            .ok_or_else(|| ModelError::invalid_state("no rows attribute selected".to_string()))
    }

    /// The effective rows sub-attribute. For maps it is derived from the
    /// selected map type; querying it with no map type selected is an
    /// error rather than a silent default.
    pub fn rows_sub_attribute(&self) -> Result<Option<SubAttribute>> {
        if self.visualization_type == VisualizationType::Map {
            return match self.map_type {
                Some(MapType::Regions) => Ok(Some(SubAttribute::Region)),
                Some(MapType::Districts) => Ok(Some(SubAttribute::District)),
                None => Err(ModelError::invalid_state(
                    "map visualization without a selected map type".to_string(),
                )),
            };
        }
        Ok(self.rows().sub_attribute())
    }

    /// The effective columns grouping attribute, absent for visualizations
    /// without a column dimension.
    pub fn columns_attribute(&self) -> Option<CaseAttribute> {
        if !self.has_column_dimension() {
            return None;
        }
        self.columns().attribute()
    }

    /// The effective columns sub-attribute, absent for visualizations
    /// without a column dimension.
    pub fn columns_sub_attribute(&self) -> Option<SubAttribute> {
        if !self.has_column_dimension() {
            return None;
        }
        self.columns().sub_attribute()
    }

    fn has_column_dimension(&self) -> bool {
        match self.visualization_type {
            VisualizationType::Map => false,
            VisualizationType::Chart => self.chart_type != Some(ChartType::Pie),
            VisualizationType::Table => true,
        }
    }

    pub fn has_region_grouping(&self) -> bool {
        self.either_element(|element| element.sub_attribute() == Some(SubAttribute::Region))
    }

    pub fn has_district_grouping(&self) -> bool {
        self.either_element(|element| element.sub_attribute() == Some(SubAttribute::District))
    }

    pub fn has_sex_grouping(&self) -> bool {
        self.either_element(|element| element.attribute() == Some(CaseAttribute::Sex))
    }

    pub fn has_age_group_grouping(&self) -> bool {
        self.either_element(|element| {
            element.attribute() == Some(CaseAttribute::AgeInterval5Years)
        })
    }

    /// True when an axis groups by an age interval that has no matching
    /// population data. Only the 5-year interval can be joined against
    /// population figures; any other age interval makes incidence values
    /// unavailable.
    pub fn has_age_group_grouping_without_population_data(&self) -> bool {
        self.either_element(|element| {
            element
                .attribute()
                .is_some_and(|attribute| {
                    attribute.is_age_group() && attribute != CaseAttribute::AgeInterval5Years
                })
        })
    }

    /// Whether any selected grouping requires population denominator data.
    pub fn has_population_grouping(&self) -> bool {
        self.has_region_grouping()
            || self.has_district_grouping()
            || self.has_sex_grouping()
            || self.has_age_group_grouping()
    }

    fn either_element(&self, predicate: impl Fn(&AxisSelection) -> bool) -> bool {
        self.elements.iter().any(predicate)
    }

    /// Assembles the validated query specification for the statistics
    /// query engine from the current state.
    pub fn query_spec(&self) -> Result<QuerySpec> {
        Ok(QuerySpec {
            rows_attribute: self.rows_attribute()?,
            rows_sub_attribute: self.rows_sub_attribute()?,
            columns_attribute: self.columns_attribute(),
            columns_sub_attribute: self.columns_sub_attribute(),
            needs_population_data: self.has_population_grouping(),
        })
    }
}
