use serde::{Deserialize, Serialize};

use epistats_model::{CaseAttribute, SubAttribute};

/// Validated grouping specification handed to the statistics query engine.
///
/// Rows always carry an attribute; columns are absent for visualizations
/// without a column dimension (maps, pie charts).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuerySpec {
    pub rows_attribute: CaseAttribute,
    pub rows_sub_attribute: Option<SubAttribute>,
    pub columns_attribute: Option<CaseAttribute>,
    pub columns_sub_attribute: Option<SubAttribute>,
    /// Whether the query engine must join population denominator data for
    /// incidence calculations.
    pub needs_population_data: bool,
}
