use crate::ui::CanvasState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two supported output ecosystems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetLanguage {
    #[serde(rename = "discord.js")]
    DiscordJs,
    #[serde(rename = "discord.py")]
    DiscordPy,
}

impl TargetLanguage {
    /// Source file extension for this target.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::DiscordJs => "js",
            Self::DiscordPy => "py",
        }
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::DiscordJs => "discord.js",
            Self::DiscordPy => "discord.py",
        })
    }
}

/// Bot credentials and invocation settings, embedded verbatim into the
/// generated environment file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportSettings {
    #[serde(default)]
    pub prefix: String,
    #[serde(alias = "botToken")]
    pub bot_token: String,
    #[serde(alias = "clientId")]
    pub client_id: String,
    /// Gateway intent bits, carried through from the editor. The generated
    /// entry files currently ship a fixed intent set.
    #[serde(default)]
    pub intents: Vec<u64>,
}

/// A complete export request as the editor submits it.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportRequest {
    pub canvas: CanvasState,
    pub language: TargetLanguage,
    pub settings: ExportSettings,
}
