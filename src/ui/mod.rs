//! Terminal parse explorer built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — parse results, pane focus, selection, keyboard event loop
//! - **[`panes`]** — stateless render functions for each visible pane (source,
//!   tokens, AST, diagnostics, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it from a
//! [`ParseView`] and call [`App::run`] to start the event loop.
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::{App, ParseView};
