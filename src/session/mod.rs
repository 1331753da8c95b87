//! Annotation session management module
//!
//! This module contains:
//! - Mode flags and the marker click dispatch table
//! - Feature/marker store and hover/selection state
//! - Message types, message handlers and the marker lifecycle
//! - Text command parsing for the interactive shell

pub mod commands;
pub mod handlers;
pub mod markers;
pub mod messages;
pub mod mode;
pub mod presenter;
pub mod prompt;
pub mod state;
pub mod store;
