//! Core application module
//!
//! This module contains the interactive host that drives an annotation
//! session from a terminal: file picker, info prompt, action menu and
//! export download.

pub mod app;
