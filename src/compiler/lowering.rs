//! Lowers a canvas into the language-agnostic emission plan.

use crate::canvas::{BlockCategory, BlockDefinition, CanvasDefinition};
use crate::plan::{BotPlan, CommandSpec, EventSpec, Statement, slugify_name};
use ahash::AHashSet;

const COMMAND_KIND_PREFIX: &str = "command_slash";
const EVENT_KIND_PREFIX: &str = "event_";

pub(super) fn lower(canvas: &CanvasDefinition) -> BotPlan {
    let commands = canvas
        .blocks_with_kind_prefix(COMMAND_KIND_PREFIX)
        .map(|block| CommandSpec {
            name: slugify_name(block.prop_str("name", "command")),
            description: block.prop_str("description", "A bot command").to_string(),
            body: lower_trigger(canvas, block),
        })
        .collect();

    let events = canvas
        .blocks_with_kind_prefix(EVENT_KIND_PREFIX)
        .map(|block| EventSpec {
            tag: block.kind[EVENT_KIND_PREFIX.len()..].to_string(),
            body: lower_trigger(canvas, block),
        })
        .collect();

    BotPlan { commands, events }
}

/// Resolves and lowers the chain hanging off one trigger block.
fn lower_trigger(canvas: &CanvasDefinition, trigger: &BlockDefinition) -> Vec<Statement> {
    let mut path = AHashSet::new();
    let hop = canvas.connected_blocks(&trigger.id, None);
    lower_chain(canvas, &hop, &mut path)
}

/// Lowers one resolved hop of blocks. An empty hop becomes the canonical
/// placeholder so no generated unit of code is ever empty.
///
/// `path` holds the branch blocks currently being expanded. A block seen
/// again on the same walk is truncated rather than followed, which bounds
/// recursion on cyclic canvases while still letting re-convergent branches
/// emit a block once per branch.
fn lower_chain(
    canvas: &CanvasDefinition,
    blocks: &[&BlockDefinition],
    path: &mut AHashSet<String>,
) -> Vec<Statement> {
    if blocks.is_empty() {
        return vec![Statement::Placeholder];
    }

    let mut chain = Vec::new();
    for block in blocks {
        if path.contains(&block.id) {
            continue;
        }
        match block.category {
            BlockCategory::Action => lower_action(block, &mut chain),
            BlockCategory::Moderation => lower_moderation(block, &mut chain),
            BlockCategory::Logic => lower_logic(canvas, block, path, &mut chain),
            // Triggers never appear mid-chain; unknown categories are a
            // deliberate no-op, not an error.
            BlockCategory::Trigger | BlockCategory::Unknown => {}
        }
    }
    chain
}

fn lower_action(block: &BlockDefinition, chain: &mut Vec<Statement>) {
    match block.kind.as_str() {
        "action_reply" => chain.push(Statement::Reply {
            message: block.prop_str("message", "Hello!").to_string(),
            ephemeral: block.prop_bool("ephemeral"),
        }),
        "send_message" => chain.push(Statement::SendMessage {
            message: block.prop_str("message", "Message").to_string(),
            channel_id: block.prop_display("channel_id"),
        }),
        "action_defer_reply" => chain.push(Statement::DeferReply {
            ephemeral: block.prop_bool("ephemeral"),
        }),
        "follow_up" => chain.push(Statement::FollowUp {
            message: block.prop_str("content", "").to_string(),
            ephemeral: block.prop_bool("ephemeral"),
        }),
        "wait" => chain.push(Statement::Wait {
            seconds: nonzero(block.prop_f64("duration", 1.0), 1.0),
        }),
        "console_log" => chain.push(Statement::Log {
            message: block.prop_str("message", "[Log Block]").to_string(),
        }),
        // Unsupported kinds within a known category contribute nothing.
        _ => {}
    }
}

fn lower_moderation(block: &BlockDefinition, chain: &mut Vec<Statement>) {
    match block.kind.as_str() {
        "mod_kick" => chain.push(Statement::Kick {
            reason: block.prop_str("reason", "No reason").to_string(),
        }),
        "mod_ban" => chain.push(Statement::Ban {
            reason: block.prop_str("reason", "No reason").to_string(),
        }),
        "member_timeout" => chain.push(Statement::Timeout {
            minutes: nonzero(block.prop_f64("minutes", 10.0), 10.0),
            reason: block.prop_str("reason", "Auto timeout").to_string(),
        }),
        _ => {}
    }
}

fn lower_logic(
    canvas: &CanvasDefinition,
    block: &BlockDefinition,
    path: &mut AHashSet<String>,
    chain: &mut Vec<Statement>,
) {
    match block.kind.as_str() {
        "if_condition" => {
            path.insert(block.id.clone());
            let then_hop = canvas.connected_blocks(&block.id, Some("then"));
            let then_chain = lower_chain(canvas, &then_hop, path);
            let else_hop = canvas.connected_blocks(&block.id, Some("else"));
            let else_chain = lower_chain(canvas, &else_hop, path);
            path.remove(&block.id);

            chain.push(Statement::Branch {
                // The condition expression is emitted verbatim as authored.
                condition: block.prop_str("condition", "true").to_string(),
                then_chain,
                else_chain,
            });
        }
        _ => {}
    }
}

/// Editor number fields clear to `0`, which the product treats as unset.
fn nonzero(value: f64, default: f64) -> f64 {
    if value == 0.0 { default } else { value }
}
