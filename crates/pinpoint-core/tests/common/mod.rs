//! In-memory page used by the integration tests.
//!
//! Elements are registered under the exact (already formatted) selector the
//! resolver is expected to send, which keeps assertions about scoping and
//! alias substitution honest.

#![allow(dead_code)]

use async_trait::async_trait;
use pinpoint_core::{Element, Locator, Session, SessionError};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeElement {
    pub label: String,
    attributes: HashMap<String, String>,
    text: String,
    stale: bool,
}

impl FakeElement {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            attributes: HashMap::new(),
            text: String::new(),
            stale: false,
        }
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    /// Every read fails, like an element detached from the DOM.
    pub fn stale(mut self) -> Self {
        self.stale = true;
        self
    }
}

#[async_trait]
impl Element for FakeElement {
    async fn attribute(&self, name: &str) -> Result<Option<String>, SessionError> {
        if self.stale {
            return Err(SessionError::Other("stale element reference".into()));
        }
        Ok(self.attributes.get(name).cloned())
    }

    async fn visible_text(&self) -> Result<String, SessionError> {
        if self.stale {
            return Err(SessionError::Other("stale element reference".into()));
        }
        Ok(self.text.clone())
    }
}

#[derive(Debug, Default)]
pub struct FakePage {
    elements: Vec<(String, FakeElement)>,
    ids: HashMap<String, FakeElement>,
    invalid: HashSet<String>,
    disconnected: bool,
    queries: Mutex<Vec<String>>,
}

impl FakePage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `element` as matching the formatted `selector`.
    pub fn with(mut self, selector: &str, element: FakeElement) -> Self {
        self.elements.push((selector.to_string(), element));
        self
    }

    pub fn with_id(mut self, id: &str, element: FakeElement) -> Self {
        self.ids.insert(id.to_string(), element);
        self
    }

    /// Queries for `selector` are rejected as malformed.
    pub fn invalid(mut self, selector: &str) -> Self {
        self.invalid.insert(selector.to_string());
        self
    }

    pub fn disconnected(mut self) -> Self {
        self.disconnected = true;
        self
    }

    /// Every query issued so far, as `css:..`, `id:..` or `all:..`.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }

    fn record(&self, query: String) {
        self.queries.lock().unwrap().push(query);
    }

    fn check(&self, selector: &str) -> Result<(), SessionError> {
        if self.disconnected {
            return Err(SessionError::Other("session disconnected".into()));
        }
        if self.invalid.contains(selector) {
            return Err(SessionError::InvalidSelector(selector.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl Session for FakePage {
    type Element = FakeElement;

    async fn find_one(&self, locator: Locator<'_>) -> Result<FakeElement, SessionError> {
        match locator {
            Locator::Css(selector) => {
                self.record(format!("css:{}", selector));
                self.check(selector)?;
                self.elements
                    .iter()
                    .find(|(s, _)| s == selector)
                    .map(|(_, e)| e.clone())
                    .ok_or_else(|| SessionError::NotFound(selector.to_string()))
            }
            Locator::Id(id) => {
                self.record(format!("id:{}", id));
                if self.disconnected {
                    return Err(SessionError::Other("session disconnected".into()));
                }
                self.ids
                    .get(id)
                    .cloned()
                    .ok_or_else(|| SessionError::NotFound(format!("#{}", id)))
            }
        }
    }

    async fn find_all(&self, selector: &str) -> Result<Vec<FakeElement>, SessionError> {
        self.record(format!("all:{}", selector));
        self.check(selector)?;
        Ok(self
            .elements
            .iter()
            .filter(|(s, _)| s == selector)
            .map(|(_, e)| e.clone())
            .collect())
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
