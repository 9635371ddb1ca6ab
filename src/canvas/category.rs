use serde::{Deserialize, Serialize};

/// Closed set of block groupings sharing one emission strategy.
///
/// The editor stores categories as free text; conversion funnels every tag
/// into this enum so each dispatch site handles all of them exhaustively.
/// `Unknown` is an explicit no-op arm, not a silently missing case: blocks
/// carrying an unrecognized category still compile, contributing nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockCategory {
    Trigger,
    Action,
    Moderation,
    Logic,
    Unknown,
}

impl BlockCategory {
    /// Maps an editor category tag to its canonical variant.
    /// Both singular and plural spellings appear in stored canvases.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "trigger" | "triggers" => Self::Trigger,
            "action" | "actions" => Self::Action,
            "moderation" => Self::Moderation,
            "logic" => Self::Logic,
            _ => Self::Unknown,
        }
    }
}
