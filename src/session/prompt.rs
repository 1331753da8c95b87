//! Info prompt collaborator
//!
//! Marker creation and editing ask the host for a line of text. The call is
//! synchronous: the session processes no other message until it returns, so
//! a host with an asynchronous modal must hold back further pointer events
//! while the prompt is open.

/// Asks the user for a marker's info text
pub trait InfoPrompt {
    /// Show `message` with `default` pre-filled; `None` means cancelled
    fn prompt(&mut self, message: &str, default: &str) -> Option<String>;
}

impl<F> InfoPrompt for F
where
    F: FnMut(&str, &str) -> Option<String>,
{
    fn prompt(&mut self, message: &str, default: &str) -> Option<String> {
        self(message, default)
    }
}
