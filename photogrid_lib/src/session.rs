//! Browsing session: the state machine between user actions and fetches.
//!
//! A [`Session`] owns the current page number and the active search term. User
//! actions (`search`, `next_page`, `previous_page`) produce a
//! [`PendingRequest`] that the caller executes against the API however it
//! likes; the result is fed back through [`Session::complete`]. Requests carry
//! sequence numbers so that a response arriving after a newer request was
//! issued is discarded instead of overwriting fresher results.

use photogrid_api::{Error, PhotoPage, SearchQuery, SortOrder};

use crate::pagination::{decide_navigation, NavigationDecision};

/// Where the session currently is in the fetch-and-display cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// No search has been issued yet.
    Idle,
    /// A request has been issued and not yet completed.
    Searching,
    /// The last request succeeded and its results are current.
    Displaying,
    /// The last request failed. The page number is kept so the user can
    /// retry or navigate from where they were.
    Error,
}

/// User-input errors. Recovered locally; no request is issued.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("please enter a search term")]
    EmptySearchTerm,
    #[error("no search in progress")]
    NoActiveSearch,
    #[error("already on the first page")]
    AtFirstPage,
}

/// Per-session search settings that apply to every request.
#[derive(Clone, Copy, Debug)]
pub struct SearchPrefs {
    /// Results per page requested from the API.
    pub per_page: i64,
    /// Result ordering requested from the API.
    pub sort: SortOrder,
}

impl Default for SearchPrefs {
    fn default() -> Self {
        Self {
            per_page: 25,
            sort: SortOrder::default(),
        }
    }
}

/// A request the caller should execute. The sequence number must be passed
/// back to [`Session::complete`] together with the outcome.
pub struct PendingRequest {
    pub seq: u64,
    pub query: SearchQuery,
}

/// What the caller should present after a completed request.
pub enum Outcome {
    /// Results arrived: replace whatever is shown with this page.
    Display {
        decision: NavigationDecision,
        page: PhotoPage,
    },
    /// The request failed: show the message, keep the previous results.
    Failed { message: String },
}

/// State machine for one browsing session.
pub struct Session {
    state: SessionState,
    page: i64,
    term: Option<String>,
    prefs: SearchPrefs,
    next_seq: u64,
    current_seq: Option<u64>,
}

impl Session {
    pub fn new(prefs: SearchPrefs) -> Self {
        Self {
            state: SessionState::Idle,
            page: 1,
            term: None,
            prefs,
            next_seq: 0,
            current_seq: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Current page number (1-indexed). Client-held; independent of the
    /// server's counts until a response arrives.
    pub fn page(&self) -> i64 {
        self.page
    }

    /// Starts a fresh search. Resets the page to 1; an empty or
    /// whitespace-only term is rejected without changing any state.
    pub fn search(&mut self, term: &str) -> Result<PendingRequest, SessionError> {
        let term = term.trim();
        if term.is_empty() {
            return Err(SessionError::EmptySearchTerm);
        }
        self.term = Some(term.to_string());
        self.page = 1;
        Ok(self.begin_fetch())
    }

    /// Moves to the next page of the active search. The page is not reset.
    pub fn next_page(&mut self) -> Result<PendingRequest, SessionError> {
        if self.term.is_none() {
            return Err(SessionError::NoActiveSearch);
        }
        self.page += 1;
        Ok(self.begin_fetch())
    }

    /// Moves to the previous page of the active search.
    pub fn previous_page(&mut self) -> Result<PendingRequest, SessionError> {
        if self.term.is_none() {
            return Err(SessionError::NoActiveSearch);
        }
        if self.page <= 1 {
            return Err(SessionError::AtFirstPage);
        }
        self.page -= 1;
        Ok(self.begin_fetch())
    }

    fn begin_fetch(&mut self) -> PendingRequest {
        self.state = SessionState::Searching;
        self.next_seq += 1;
        self.current_seq = Some(self.next_seq);
        let term = self.term.as_deref().unwrap_or_default();
        let query = SearchQuery::new(term)
            .with_page(self.page)
            .with_per_page(self.prefs.per_page)
            .with_sort(self.prefs.sort);
        PendingRequest {
            seq: self.next_seq,
            query,
        }
    }

    /// Feeds the result of an executed request back into the session.
    ///
    /// Returns `None` when the response is stale, meaning a newer request was
    /// issued after this one; the session state is left untouched in that
    /// case. On failure the page number is deliberately kept, so the user can
    /// retry the same page via navigation.
    pub fn complete(&mut self, seq: u64, result: Result<PhotoPage, Error>) -> Option<Outcome> {
        if self.current_seq != Some(seq) {
            tracing::debug!(seq, "discarding stale search response");
            return None;
        }
        self.current_seq = None;

        match result {
            Ok(page) => {
                self.state = SessionState::Displaying;
                let decision = decide_navigation(&page);
                Some(Outcome::Display { decision, page })
            }
            Err(e) => {
                self.state = SessionState::Error;
                Some(Outcome::Failed {
                    message: e.to_string(),
                })
            }
        }
    }
}
