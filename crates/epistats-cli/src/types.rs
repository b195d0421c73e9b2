use std::path::PathBuf;

use serde::Serialize;

use epistats_export::ExportAudience;
use epistats_model::{ChartType, MapType, VisualizationType};
use epistats_viz::{ComponentVisibility, QuerySpec};

#[derive(Debug)]
pub struct ExportResult {
    pub audience: ExportAudience,
    pub records: usize,
    pub columns: usize,
    pub output: PathBuf,
}

/// Resolved visualization plan: the controller state after applying the
/// requested events, plus the derived query specification.
#[derive(Debug, Serialize)]
pub struct PlanOutcome {
    pub visualization_type: VisualizationType,
    pub chart_type: Option<ChartType>,
    pub map_type: Option<MapType>,
    pub visibility: ComponentVisibility,
    pub query_spec: QuerySpec,
}
