use serde::{Deserialize, Serialize};
use std::fmt;

use epistats_model::{CaseAttribute, ModelError, Result, SubAttribute, VisualizationType};

/// Which axis of the statistics grid a selection element feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AxisRole {
    Rows,
    Columns,
}

impl AxisRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AxisRole::Rows => "Rows",
            AxisRole::Columns => "Columns",
        }
    }
}

impl fmt::Display for AxisRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One axis grouping selection: an attribute plus an optional refining
/// sub-attribute, tagged with the axis role it currently plays.
///
/// The role tag is mutable on purpose: swapping rows and columns re-tags
/// the two existing selections instead of copying their values around.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisSelection {
    role: AxisRole,
    attribute: Option<CaseAttribute>,
    sub_attribute: Option<SubAttribute>,
}

impl AxisSelection {
    /// Creates a selection for the given role with the default attribute
    /// for the visualization type preselected, so the element carries a
    /// usable grouping from the moment the view initializes.
    pub fn new(role: AxisRole, visualization_type: VisualizationType) -> Self {
        Self {
            role,
            attribute: Some(default_attribute(visualization_type)),
            sub_attribute: None,
        }
    }

    pub fn role(&self) -> AxisRole {
        self.role
    }

    pub fn attribute(&self) -> Option<CaseAttribute> {
        self.attribute
    }

    pub fn sub_attribute(&self) -> Option<SubAttribute> {
        self.sub_attribute
    }

    /// The attributes this element offers under the given visualization
    /// type.
    pub fn attribute_options(visualization_type: VisualizationType) -> Vec<CaseAttribute> {
        CaseAttribute::ALL
            .iter()
            .copied()
            .filter(|attribute| attribute.is_valid_for(visualization_type))
            .collect()
    }

    /// Selects an attribute and optional sub-attribute.
    ///
    /// The attribute must be offered for the given visualization type and
    /// the sub-attribute must refine the attribute.
    pub fn select(
        &mut self,
        attribute: CaseAttribute,
        sub_attribute: Option<SubAttribute>,
        visualization_type: VisualizationType,
    ) -> Result<()> {
        if !attribute.is_valid_for(visualization_type) {
            return Err(ModelError::invalid_state(format!(
                "attribute {attribute} is not available for {visualization_type} visualizations"
            )));
        }
        if let Some(sub) = sub_attribute {
            if !sub.belongs_to(attribute) {
                return Err(ModelError::unsupported(
                    "sub-attribute",
                    format!("{sub} (does not refine {attribute})"),
                ));
            }
        }
        self.attribute = Some(attribute);
        self.sub_attribute = sub_attribute;
        Ok(())
    }

    /// Re-tags this element with a (possibly new) role and restricts its
    /// selection to the options valid for the visualization type. A
    /// selection that is still valid survives the re-tag untouched.
    pub(crate) fn retag(&mut self, role: AxisRole, visualization_type: VisualizationType) {
        self.role = role;
        let keep = self
            .attribute
            .is_some_and(|attribute| attribute.is_valid_for(visualization_type));
        if !keep {
            self.attribute = Some(default_attribute(visualization_type));
            self.sub_attribute = None;
        }
    }
}

/// First attribute offered for a visualization type. For maps that is the
/// only offered attribute.
fn default_attribute(visualization_type: VisualizationType) -> CaseAttribute {
    CaseAttribute::ALL
        .iter()
        .copied()
        .find(|attribute| attribute.is_valid_for(visualization_type))
        .unwrap_or(CaseAttribute::RegionDistrict)
}
