//! The language-agnostic emission plan.
//!
//! Lowering turns a canvas into a [`BotPlan`]; the render backends print it
//! as target source. Printers decide syntax only, never semantics: every
//! statement carries its already-defaulted property values.

mod statement;

pub(crate) use statement::chain_contains;
pub use statement::Statement;

/// A compiled, language-agnostic program plan for one canvas.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BotPlan {
    pub commands: Vec<CommandSpec>,
    pub events: Vec<EventSpec>,
}

/// One slash command and the statement chain behind it.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandSpec {
    /// Filesystem-safe slug, also the registered command name.
    pub name: String,
    pub description: String,
    pub body: Vec<Statement>,
}

/// One gateway event listener and the statement chain behind it.
#[derive(Debug, Clone, PartialEq)]
pub struct EventSpec {
    /// Internal event tag as authored, e.g. `member_join`. Resolution to a
    /// runtime event name happens per target at assembly time.
    pub tag: String,
    pub body: Vec<Statement>,
}

impl BotPlan {
    pub fn has_commands(&self) -> bool {
        !self.commands.is_empty()
    }

    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }

    /// True when the canvas produced no triggers at all.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && self.events.is_empty()
    }
}

/// Lowercases a name and collapses whitespace runs to single hyphens.
/// The result is the slug used for command names and generated file names.
pub(crate) fn slugify_name(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_whitespace = false;
    for ch in name.to_lowercase().chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
                in_whitespace = true;
            }
        } else {
            slug.push(ch);
            in_whitespace = false;
        }
    }
    slug
}
