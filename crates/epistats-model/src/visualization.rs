use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Top-level output shape of a statistics view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VisualizationType {
    Table,
    Chart,
    Map,
}

impl VisualizationType {
    pub const ALL: [VisualizationType; 3] = [
        VisualizationType::Table,
        VisualizationType::Chart,
        VisualizationType::Map,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VisualizationType::Table => "Table",
            VisualizationType::Chart => "Chart",
            VisualizationType::Map => "Map",
        }
    }
}

impl fmt::Display for VisualizationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VisualizationType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "TABLE" => Ok(VisualizationType::Table),
            "CHART" => Ok(VisualizationType::Chart),
            "MAP" => Ok(VisualizationType::Map),
            _ => Err(ModelError::unsupported("visualization type", s)),
        }
    }
}

/// Chart shape; meaningful only while the visualization type is Chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChartType {
    StackedColumn,
    Column,
    Line,
    Pie,
}

impl ChartType {
    pub const ALL: [ChartType; 4] = [
        ChartType::StackedColumn,
        ChartType::Column,
        ChartType::Line,
        ChartType::Pie,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::StackedColumn => "Stacked column",
            ChartType::Column => "Column",
            ChartType::Line => "Line",
            ChartType::Pie => "Pie",
        }
    }

    /// Pie charts have no column dimension.
    pub fn has_column_dimension(&self) -> bool {
        !matches!(self, ChartType::Pie)
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChartType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().replace('-', "_").as_str() {
            "STACKED_COLUMN" => Ok(ChartType::StackedColumn),
            "COLUMN" => Ok(ChartType::Column),
            "LINE" => Ok(ChartType::Line),
            "PIE" => Ok(ChartType::Pie),
            _ => Err(ModelError::unsupported("chart type", s)),
        }
    }
}

/// Map granularity; meaningful only while the visualization type is Map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MapType {
    Regions,
    Districts,
}

impl MapType {
    pub const ALL: [MapType; 2] = [MapType::Regions, MapType::Districts];

    pub fn as_str(&self) -> &'static str {
        match self {
            MapType::Regions => "Regions",
            MapType::Districts => "Districts",
        }
    }
}

impl fmt::Display for MapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MapType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "REGIONS" => Ok(MapType::Regions),
            "DISTRICTS" => Ok(MapType::Districts),
            _ => Err(ModelError::unsupported("map type", s)),
        }
    }
}
