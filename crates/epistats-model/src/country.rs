use serde::{Deserialize, Serialize};
use std::fmt;

/// Country reference data as served by the infrastructure registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub uuid: String,
    pub default_name: String,
    /// Name shown in the UI and exports; falls back to the default name
    /// when the deployment does not localize it.
    pub display_name: String,
    #[serde(default)]
    pub external_id: Option<String>,
    /// ISO 3166-1 alpha-2 code.
    #[serde(default)]
    pub iso_code: Option<String>,
    /// UN M49 numeric code.
    #[serde(default)]
    pub uno_code: Option<String>,
    #[serde(default)]
    pub archived: bool,
}

impl Country {
    pub fn new(uuid: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            uuid: uuid.into(),
            default_name: name.clone(),
            display_name: name,
            external_id: None,
            iso_code: None,
            uno_code: None,
            archived: false,
        }
    }

    pub fn with_iso_code(mut self, code: impl Into<String>) -> Self {
        self.iso_code = Some(code.into());
        self
    }

    pub fn with_uno_code(mut self, code: impl Into<String>) -> Self {
        self.uno_code = Some(code.into());
        self
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name)
    }
}
