use crate::session::SessionError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("Element not found for '{target}' (tried: {})", .attempted.join(", "))]
    ElementNotFound {
        target: String,
        attempted: Vec<String>,
    },

    #[error("Button not found: '{button}' (tried: {})", .attempted.join(", "))]
    ButtonNotFound {
        button: String,
        attempted: Vec<String>,
    },

    #[error("No candidate selectors supplied")]
    NoCandidates,

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl ResolveError {
    /// Selectors tried before giving up, if any were.
    pub fn attempted(&self) -> &[String] {
        match self {
            ResolveError::ElementNotFound { attempted, .. }
            | ResolveError::ButtonNotFound { attempted, .. } => attempted,
            _ => &[],
        }
    }
}
