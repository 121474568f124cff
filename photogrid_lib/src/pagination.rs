//! Pagination decisions derived from server-reported paging counts.

use photogrid_api::PhotoPage;
use serde::Serialize;

/// What the presentation layer should do with the navigation controls after
/// a page of results arrives.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavigationDecision {
    /// Whether previous/next controls should be shown at all.
    pub show_nav: bool,
    /// Whether the previous-page control is usable.
    pub previous_enabled: bool,
    /// Whether the next-page control is usable.
    pub next_enabled: bool,
    /// Status line to display alongside the results.
    pub status_text: String,
}

/// Decides navigation enablement and status text from one page of results.
///
/// Pure function of the server's paging counts: an empty result set hides
/// navigation and reports "No results found"; a result set that fits on one
/// page hides navigation; otherwise previous/next are enabled at the
/// respective boundaries.
pub fn decide_navigation(meta: &PhotoPage) -> NavigationDecision {
    if meta.total == 0 {
        return NavigationDecision {
            show_nav: false,
            previous_enabled: false,
            next_enabled: false,
            status_text: "No results found".to_string(),
        };
    }

    let status_text = format!("Page {} of {}", meta.page, meta.pages);
    if meta.total <= meta.perpage {
        NavigationDecision {
            show_nav: false,
            previous_enabled: false,
            next_enabled: false,
            status_text,
        }
    } else {
        NavigationDecision {
            show_nav: true,
            previous_enabled: meta.page > 1,
            next_enabled: meta.page < meta.pages,
            status_text,
        }
    }
}
