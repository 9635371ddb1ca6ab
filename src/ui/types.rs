use serde::Deserialize;
use serde_json::{Map, Value};

/// Screen-space coordinates for a block. Editor-only, ignored by compilation.
#[derive(Debug, Deserialize, Clone, Copy, Default)]
pub struct UiPosition {
    pub x: f64,
    pub y: f64,
}

/// Block payload as the editor stores it.
#[derive(Debug, Deserialize, Clone)]
pub struct UiBlockData {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub properties: Map<String, Value>,
    #[serde(default)]
    pub category: String,
    #[serde(default, alias = "isValid")]
    pub is_valid: bool,
    #[serde(default)]
    pub errors: Vec<String>,
}

/// A node on the canvas representing one unit of bot behavior.
#[derive(Debug, Deserialize, Clone)]
pub struct UiBlock {
    pub id: String,
    /// Free-text capability tag, e.g. `command_slash` or `action_reply`.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub position: UiPosition,
    pub data: UiBlockData,
}

/// A directed edge between two blocks, optionally tagged with handles.
#[derive(Debug, Deserialize, Clone)]
pub struct UiConnection {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default, alias = "sourceHandle")]
    pub source_handle: Option<String>,
    #[serde(default, alias = "targetHandle")]
    pub target_handle: Option<String>,
}

/// Complete canvas state as persisted by the editor.
#[derive(Debug, Deserialize, Clone)]
pub struct CanvasState {
    pub blocks: Vec<UiBlock>,
    pub connections: Vec<UiConnection>,
    #[serde(default, alias = "selectedBlockId")]
    pub selected_block_id: Option<String>,
    #[serde(default, alias = "viewportPosition")]
    pub viewport_position: Option<UiPosition>,
}
