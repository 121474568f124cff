//! Presentation interface.
//!
//! Render implementations receive only the [`NavigationDecision`] and the
//! already-derived photo URLs, never the raw API response, so decision logic
//! stays testable without any terminal or display attached.

use crate::pagination::NavigationDecision;

/// Sink for search results and status messages.
pub trait Render {
    /// Replaces any previously shown results with a fresh page.
    fn render(&mut self, decision: &NavigationDecision, photo_urls: &[String]);

    /// Shows a status message on its own (input errors, request failures).
    fn status(&mut self, message: &str);
}
