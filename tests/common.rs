//! Common test utilities for building canvas definitions and settings.
use kyto::prelude::*;
use serde_json::{Value, json};

/// Builds a block from an editor-style category tag and a JSON property map.
#[allow(dead_code)]
pub fn block(id: &str, kind: &str, category: &str, properties: Value) -> BlockDefinition {
    BlockDefinition {
        id: id.to_string(),
        kind: kind.to_string(),
        category: BlockCategory::from_tag(category),
        label: String::new(),
        properties: properties.as_object().cloned().unwrap_or_default(),
    }
}

#[allow(dead_code)]
pub fn connection(
    id: &str,
    source: &str,
    target: &str,
    handle: Option<&str>,
) -> ConnectionDefinition {
    ConnectionDefinition {
        id: id.to_string(),
        source: source.to_string(),
        target: target.to_string(),
        source_handle: handle.map(str::to_string),
        target_handle: None,
    }
}

/// One `ping` slash command replying `pong` over a default (unhandled) edge.
#[allow(dead_code)]
pub fn ping_pong_canvas() -> CanvasDefinition {
    CanvasDefinition {
        blocks: vec![
            block(
                "trigger-1",
                "command_slash",
                "trigger",
                json!({ "name": "ping" }),
            ),
            block(
                "reply-1",
                "action_reply",
                "actions",
                json!({ "message": "pong" }),
            ),
        ],
        connections: vec![connection("conn-1", "trigger-1", "reply-1", None)],
    }
}

/// A `check` command branching on a verbatim condition with disjoint
/// then/else chains.
#[allow(dead_code)]
pub fn branching_canvas() -> CanvasDefinition {
    CanvasDefinition {
        blocks: vec![
            block(
                "trigger-1",
                "command_slash",
                "trigger",
                json!({ "name": "check" }),
            ),
            block(
                "if-1",
                "if_condition",
                "logic",
                json!({ "condition": "score > 10" }),
            ),
            block(
                "reply-big",
                "action_reply",
                "actions",
                json!({ "message": "big" }),
            ),
            block(
                "reply-small",
                "action_reply",
                "actions",
                json!({ "message": "small" }),
            ),
        ],
        connections: vec![
            connection("conn-1", "trigger-1", "if-1", None),
            connection("conn-2", "if-1", "reply-big", Some("then")),
            connection("conn-3", "if-1", "reply-small", Some("else")),
        ],
    }
}

#[allow(dead_code)]
pub fn test_settings() -> ExportSettings {
    ExportSettings {
        prefix: "!".to_string(),
        bot_token: "token-123".to_string(),
        client_id: "client-456".to_string(),
        intents: vec![],
    }
}

#[allow(dead_code)]
pub fn compile(canvas: CanvasDefinition, language: TargetLanguage) -> Compiler {
    Compiler::builder(canvas, language, test_settings()).build()
}

#[allow(dead_code)]
pub fn find_file<'a>(files: &'a [GeneratedFile], path: &str) -> &'a GeneratedFile {
    files
        .iter()
        .find(|f| f.path == path)
        .unwrap_or_else(|| panic!("expected file '{}' in output", path))
}
