//! Page Query Abstraction
//!
//! The resolver never talks to a browser directly. Everything it needs from the
//! live document goes through the two traits below, so native WebDriver clients
//! and test doubles plug in the same way.

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// How a single-element lookup addresses the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locator<'a> {
    /// A CSS selector, used verbatim.
    Css(&'a str),
    /// An element id, without the leading `#`. Any characters are allowed;
    /// sessions escape it for their own query syntax.
    Id(&'a str),
}

impl fmt::Display for Locator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::Css(selector) => write!(f, "{}", selector),
            Locator::Id(id) => write!(f, "#{}", id),
        }
    }
}

/// Failures reported by a session query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Nothing in the document matched.
    #[error("No element matches '{0}'")]
    NotFound(String),

    /// The selector was rejected by the browser.
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    /// Anything else: lost connection, script failure, driver error.
    #[error("Session error: {0}")]
    Other(String),
}

impl SessionError {
    /// True when the query ran and simply found nothing usable.
    pub fn is_miss(&self) -> bool {
        matches!(
            self,
            SessionError::NotFound(_) | SessionError::InvalidSelector(_)
        )
    }
}

/// A located element.
#[async_trait]
pub trait Element: Send + Sync {
    /// Returns `Ok(None)` when the attribute is not present.
    async fn attribute(&self, name: &str) -> Result<Option<String>, SessionError>;

    /// Rendered text of the element, as the user sees it.
    async fn visible_text(&self) -> Result<String, SessionError>;
}

/// Query interface over a live document.
#[async_trait]
pub trait Session: Send + Sync {
    type Element: Element;

    /// First element matching `locator`, or `SessionError::NotFound`.
    async fn find_one(&self, locator: Locator<'_>) -> Result<Self::Element, SessionError>;

    /// Every element matching the CSS selector, in document order.
    async fn find_all(&self, selector: &str) -> Result<Vec<Self::Element>, SessionError>;
}

#[async_trait]
impl<S: Session + ?Sized> Session for &S {
    type Element = S::Element;

    async fn find_one(&self, locator: Locator<'_>) -> Result<Self::Element, SessionError> {
        (**self).find_one(locator).await
    }

    async fn find_all(&self, selector: &str) -> Result<Vec<Self::Element>, SessionError> {
        (**self).find_all(selector).await
    }
}

#[async_trait]
impl<S: Session + ?Sized> Session for Arc<S> {
    type Element = S::Element;

    async fn find_one(&self, locator: Locator<'_>) -> Result<Self::Element, SessionError> {
        (**self).find_one(locator).await
    }

    async fn find_all(&self, selector: &str) -> Result<Vec<Self::Element>, SessionError> {
        (**self).find_all(selector).await
    }
}
