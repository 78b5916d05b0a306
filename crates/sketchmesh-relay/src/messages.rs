//! Wire messages shared with the mesh-generation service.

use serde::{Deserialize, Serialize};

/// Conversion job lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Processing,
    Completed,
    Failed,
}

impl JobStatus {
    /// Terminal states stop the polling watcher.
    pub fn is_terminal(self) -> bool {
        !matches!(self, JobStatus::Processing)
    }
}

/// Mesh category the upstream model was trained on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelType {
    Cars,
    Chairs,
}

impl ModelType {
    /// Form-field spelling of the variant.
    pub fn as_str(self) -> &'static str {
        match self {
            ModelType::Cars => "cars",
            ModelType::Chairs => "chairs",
        }
    }

    /// Parse a form-field value; anything unknown is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "cars" => Some(ModelType::Cars),
            "chairs" => Some(ModelType::Chairs),
            _ => None,
        }
    }
}

/// Sketch rendering style hint for the upstream model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SketchStyle {
    #[default]
    Suggestive,
    Fd,
    Handdrawn,
}

impl SketchStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            SketchStyle::Suggestive => "suggestive",
            SketchStyle::Fd => "fd",
            SketchStyle::Handdrawn => "handdrawn",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "suggestive" => Some(SketchStyle::Suggestive),
            "fd" => Some(SketchStyle::Fd),
            "handdrawn" => Some(SketchStyle::Handdrawn),
            _ => None,
        }
    }
}

/// Response to a conversion submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertResponse {
    pub mesh_id: String,
    pub status: JobStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Conversion progress snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: JobStatus,
    #[serde(default)]
    pub progress: Option<u8>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Upstream service health.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub models_ready: bool,
    pub sketch2mesh_available: bool,
}
