use serde::{Deserialize, Serialize};

/// Session state remembered between runs.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateConfig {
    /// City selected when the application last exited.
    #[serde(default)]
    pub last_city: Option<String>,
}
