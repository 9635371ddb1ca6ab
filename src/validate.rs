//! Best-effort syntax sanity checks for generated files.
//!
//! JavaScript files get a real parse; Python files get a bracket balance
//! heuristic that can both under- and over-report, which is an accepted
//! limitation rather than something to patch around. Diagnostics are
//! additive metadata only and never remove a file from the output.

use crate::export::{GeneratedFile, TargetLanguage};
use itertools::Itertools;
use tree_sitter::{Node, Parser};

/// Returns diagnostics for one generated file, possibly empty.
///
/// Only the target's own source files are checked; manifests, environment
/// files and the readme always pass.
pub fn validate_file(language: TargetLanguage, file: &GeneratedFile) -> Vec<String> {
    let mut issues = Vec::new();

    match language {
        TargetLanguage::DiscordJs => {
            if file.path.ends_with(".js")
                && let Some(issue) = parse_javascript(&file.content)
            {
                issues.push(issue);
            }
        }
        TargetLanguage::DiscordPy => {
            if file.path.ends_with(".py") && !brackets_balanced(&file.content) {
                issues.push(
                    "Potential unbalanced brackets or parentheses in Python file".to_string(),
                );
            }
        }
    }

    issues
}

/// Full parse via tree-sitter; `None` means the file parsed cleanly.
fn parse_javascript(source: &str) -> Option<String> {
    let mut parser = Parser::new();
    if parser
        .set_language(&tree_sitter_javascript::LANGUAGE.into())
        .is_err()
    {
        // Grammar version mismatch: skip the check rather than fail the file.
        return None;
    }
    let tree = parser.parse(source, None)?;
    let root = tree.root_node();
    if !root.has_error() {
        return None;
    }

    let position = first_error_node(root)
        .map(|node| node.start_position())
        .unwrap_or_else(|| root.start_position());
    Some(format!(
        "JavaScript parse error at line {}, column {}",
        position.row + 1,
        position.column + 1
    ))
}

fn first_error_node(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error_node)
}

/// Counts opening and closing `()[]{}` across the whole file. String and
/// comment contents are counted too, so the check can misfire either way.
fn brackets_balanced(source: &str) -> bool {
    let counts = source.chars().counts();
    let count = |ch: char| counts.get(&ch).copied().unwrap_or(0) as i64;
    count('(') == count(')') && count('[') == count(']') && count('{') == count('}')
}
