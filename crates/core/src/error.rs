//! Error types for the page model and its host adapter.

use thiserror::Error;

/// Errors raised while loading the site configuration or building the page.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("section registry is empty")]
    EmptyRegistry,

    #[error("section #{index} has a blank id")]
    BlankSectionId { index: usize },

    #[error("section #{index} id '{id}' contains whitespace")]
    InvalidSectionId { index: usize, id: String },

    #[error("duplicate section id: {id}")]
    DuplicateSection { id: String },
}

/// Errors reported by a [`Host`](crate::Host) while performing a page action.
///
/// These are never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("no window")]
    NoWindow,

    #[error("no document")]
    NoDocument,

    #[error("no element with id '{id}'")]
    MissingAnchor { id: String },

    #[error("host call failed: {message}")]
    Js { message: String },
}
