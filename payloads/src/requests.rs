use serde::{Deserialize, Serialize};

/// Body for creating or replacing a space object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceObjectCreate {
    pub name: String,
    /// planet, star, asteroid, etc.
    #[serde(rename = "type")]
    pub object_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// In light years.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_from_earth: Option<f64>,
}
