//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state, keyboard event loop, pane focus, algorithm mode
//! - **[`panes`]**: render functions for each visible pane (cells, memory,
//!   algorithm, input, status bar, help)
//! - **[`theme`]**: centralized color palette and marker styles used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`Session`] and a [`Config`], then call [`App::run`] to start the event loop.
//!
//! [`Session`]: crate::session::Session
//! [`Config`]: crate::config::Config
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
