//! Domain layer for photogrid: pagination decisions, the browsing session
//! state machine, and the render interface.
//!
//! Wraps the `photogrid_api` crate. Nothing here performs I/O; fetching and
//! presentation are driven by the caller through [`session::Session`] and
//! [`render::Render`].

pub mod pagination;
pub mod render;
pub mod session;

pub use photogrid_api;
pub use photogrid_api::{Client, Error, Photo, PhotoPage, PhotoSize, SearchQuery, SortOrder};

pub use pagination::{decide_navigation, NavigationDecision};
pub use session::{Outcome, PendingRequest, SearchPrefs, Session, SessionError, SessionState};
