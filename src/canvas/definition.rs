use super::BlockCategory;
use serde_json::{Map, Value};

/// The complete, canonical definition of a canvas, ready for compilation.
/// This is the target structure for any custom editor-format conversion.
#[derive(Debug, Clone, Default)]
pub struct CanvasDefinition {
    pub blocks: Vec<BlockDefinition>,
    pub connections: Vec<ConnectionDefinition>,
}

/// Defines a single block on the canvas.
#[derive(Debug, Clone)]
pub struct BlockDefinition {
    pub id: String,
    /// Free-text capability tag, e.g. `command_slash` or `action_reply`.
    pub kind: String,
    pub category: BlockCategory,
    pub label: String,
    pub properties: Map<String, Value>,
}

/// Defines a directed connection between two blocks.
#[derive(Debug, Clone)]
pub struct ConnectionDefinition {
    pub id: String,
    pub source: String,
    pub target: String,
    pub source_handle: Option<String>,
    pub target_handle: Option<String>,
}

impl CanvasDefinition {
    /// Returns every block one hop downstream of `block_id`, in
    /// connection-list order.
    ///
    /// With `handle == None` every outgoing edge qualifies; with `Some(h)`
    /// only edges whose `source_handle` equals `h` do. Connections whose
    /// target id does not exist are filtered, not errors. Multi-step chains
    /// are unrolled by the plan builder, never here.
    pub fn connected_blocks(&self, block_id: &str, handle: Option<&str>) -> Vec<&BlockDefinition> {
        self.connections
            .iter()
            .filter(|c| {
                c.source == block_id
                    && handle.is_none_or(|h| c.source_handle.as_deref() == Some(h))
            })
            .filter_map(|c| self.find_block(&c.target))
            .collect()
    }

    /// Looks up a block by id.
    pub fn find_block(&self, block_id: &str) -> Option<&BlockDefinition> {
        self.blocks.iter().find(|b| b.id == block_id)
    }

    /// Blocks whose kind starts with `prefix`, in canvas order.
    pub fn blocks_with_kind_prefix(&self, prefix: &str) -> impl Iterator<Item = &BlockDefinition> {
        self.blocks.iter().filter(move |b| b.kind.starts_with(prefix))
    }
}

impl BlockDefinition {
    /// String property lookup. Empty strings count as absent, matching the
    /// editor's behavior of leaving cleared fields as `""`.
    pub fn prop_str<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.properties
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .unwrap_or(default)
    }

    /// Boolean property lookup, absent means `false`.
    pub fn prop_bool(&self, key: &str) -> bool {
        self.properties
            .get(key)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Numeric property lookup with a fallback.
    pub fn prop_f64(&self, key: &str, default: f64) -> f64 {
        self.properties
            .get(key)
            .and_then(Value::as_f64)
            .unwrap_or(default)
    }

    /// Property rendered as display text. Editors store ids sometimes as
    /// strings and sometimes as numbers; both are accepted.
    pub fn prop_display(&self, key: &str) -> String {
        match self.properties.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        }
    }
}
