//! TUI pane rendering modules
//!
//! Each pane module exports a primary `render_*_pane()` function that draws
//! one view of the parse:
//!
//! - [`source`]: Source code with token-based highlighting and the selected token's line
//! - [`tokens`]: The full token stream, one row per token
//! - [`ast`]: Top-level statements in their reconstructed form
//! - [`diagnostics`]: Parse errors in the order they were reported
//! - [`status`]: Status bar with keybindings and parse counts

pub mod ast;
pub mod diagnostics;
pub mod source;
pub mod status;
pub mod tokens;

pub use ast::render_ast_pane;
pub use diagnostics::render_diagnostics_pane;
pub use source::render_source_pane;
pub use status::render_status_bar;
pub use tokens::render_tokens_pane;

/// Adjust `offset` so that row `selected` is inside a window of `visible`
/// rows, and never scroll past the last page of `total` rows.
pub(crate) fn keep_in_view(offset: &mut usize, selected: usize, visible: usize, total: usize) {
    if selected < *offset {
        *offset = selected;
    } else if selected >= *offset + visible {
        *offset = selected + 1 - visible;
    }

    let max_offset = total.saturating_sub(visible);
    *offset = (*offset).min(max_offset);
}
