use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One generated source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

/// The full delivery shape: every file plus manifest data and setup notes.
#[derive(Debug, Clone, Serialize)]
pub struct ExportBundle {
    pub files: Vec<GeneratedFile>,
    /// Structured name→version pairs for discord.js; empty for discord.py,
    /// whose manifest is the flat requirements.txt.
    pub dependencies: BTreeMap<String, String>,
    pub instructions: String,
}

/// The preview delivery shape: file metadata and diagnostics, no full
/// content.
#[derive(Debug, Clone, Serialize)]
pub struct FilePreview {
    pub path: String,
    /// Content length in bytes.
    pub size: usize,
    /// The first 200 characters of the file.
    pub preview: String,
    pub issues: Vec<String>,
}

/// Per-file outcome reported by the source-hosting push collaborator.
///
/// The push integration itself lives outside this crate; only its wire
/// contract is defined here. One file's failure never aborts the rest, so
/// consumers must treat partial success as a first-class outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushOutcome {
    pub path: String,
    pub status: PushStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PushStatus {
    Ok,
    Error,
}
