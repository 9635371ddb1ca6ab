//! Target-language printers for the emission plan.
//!
//! One plan, two independent backends: the layouts the targets expect are
//! different enough (brace vs indentation blocks, separate event files vs
//! inline handlers) that unifying them would distort both. The
//! [`ChainRenderer`] seam covers statement chains; file-level composition
//! lives with each backend and in the assembler.

pub(crate) mod js;
pub(crate) mod py;

use crate::plan::Statement;

/// Prints language-agnostic statement chains as target source text.
pub(crate) trait ChainRenderer {
    /// Spaces per indent level for this target.
    fn indent_unit(&self) -> usize;

    /// Comment line emitted for a chain whose blocks all lowered to no-ops.
    fn no_actions_comment(&self) -> &'static str;

    /// Renders one statement at `level`. Always newline-terminated, so
    /// chains compose into nested blocks without gluing to delimiters.
    fn statement(&self, stmt: &Statement, level: usize) -> String;

    /// Renders a chain at `level`. The placeholder for empty hops is
    /// injected during lowering; an empty chain here means every block was
    /// skipped, which renders as a single comment line.
    fn chain(&self, chain: &[Statement], level: usize) -> String {
        if chain.is_empty() {
            return format!("{}{}\n", self.pad(level), self.no_actions_comment());
        }
        chain
            .iter()
            .map(|stmt| self.statement(stmt, level))
            .collect()
    }

    fn pad(&self, level: usize) -> String {
        " ".repeat(level * self.indent_unit())
    }
}

/// Escapes quotes before embedding user text into a quoted literal.
/// Braces and templating syntax intentionally pass through untouched.
pub(crate) fn escape_quotes(text: &str) -> String {
    text.replace('\'', "\\'").replace('"', "\\\"")
}

/// Formats a number the way the generated sources expect: integral values
/// without a fractional part, everything else as-is.
pub(crate) fn format_number(value: f64) -> String {
    format!("{}", value)
}
