//! Startup errors

use thiserror::Error;

/// Failures while binding the game to the page
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UiError {
    #[error("no window/document available")]
    NoDocument,
    #[error("required element #{id} is missing from the page")]
    MissingElement { id: &'static str },
}
