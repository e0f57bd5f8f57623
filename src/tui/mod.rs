//! Terminal User Interface for browsing and searching the journal.
//!
//! This module provides an interactive TUI built on bubbletea-rs.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::JournalApp`]
//! - **View**: Rendering logic in each component's `view()` method
//! - **Update**: Message-driven state transitions in `update()`
//!
//! The search form's state belongs to
//! [`FilterFormController`](crate::search::FilterFormController); the TUI
//! only maps keys to its operations and renders what it reports.
//!
//! # Modules
//!
//! - [`app`]: Main application model and entry point
//! - [`messages`]: Message types for the update loop
//! - [`state`]: List cursor and date picker text
//! - [`components`]: Entry list and search modal rendering
//! - [`input`]: Key-to-message mapping for input handling
//!
//! # Initial Data Loading
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, call [`set_initial_session`] before starting the program and
//! `JournalApp::init()` will retrieve it.

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod state;
mod storage;

pub use app::JournalApp;
pub use storage::{
    JournalSession, set_initial_session, set_initial_terminal_size, set_telemetry_sink,
};
pub(crate) use storage::{get_initial_session, get_initial_terminal_size, get_telemetry_sink};
