use crate::error::map_cmd_error;
use async_trait::async_trait;
use fantoccini::elements::Element as WdElement;
use fantoccini::{Client, ClientBuilder, Locator as WdLocator};
use pinpoint_core::{Element, Locator, Session, SessionError};
use tracing::{debug, info};

/// A WebDriver session the resolver can query.
///
/// Cloning is cheap and shares the underlying browser session.
#[derive(Clone, Debug)]
pub struct WebDriverSession {
    client: Client,
}

impl WebDriverSession {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn connect(
        url: &str,
        capabilities: Option<serde_json::Map<String, serde_json::Value>>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let caps = capabilities.unwrap_or_default();

        info!("Connecting to WebDriver at {}...", url);
        let client = ClientBuilder::native()
            .capabilities(caps)
            .connect(url)
            .await
            .map_err(|e| format!("Failed to connect to WebDriver at {}: {}", url, e))?;

        Ok(Self { client })
    }

    /// Underlying client, for navigation and everything else the resolver
    /// does not do.
    pub fn client(&self) -> &Client {
        &self.client
    }

    pub async fn close(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.client
            .close()
            .await
            .map_err(|e| format!("Failed to close session: {}", e))?;
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct WebDriverElement(WdElement);

impl WebDriverElement {
    pub fn inner(&self) -> &WdElement {
        &self.0
    }

    pub fn into_inner(self) -> WdElement {
        self.0
    }
}

#[async_trait]
impl Element for WebDriverElement {
    async fn attribute(&self, name: &str) -> Result<Option<String>, SessionError> {
        self.0
            .attr(name)
            .await
            .map_err(|e| SessionError::Other(e.to_string()))
    }

    async fn visible_text(&self) -> Result<String, SessionError> {
        self.0
            .text()
            .await
            .map_err(|e| SessionError::Other(e.to_string()))
    }
}

#[async_trait]
impl Session for WebDriverSession {
    type Element = WebDriverElement;

    async fn find_one(&self, locator: Locator<'_>) -> Result<WebDriverElement, SessionError> {
        debug!("WebDriver find {}", locator);
        let found = match locator {
            Locator::Css(selector) => self.client.find(WdLocator::Css(selector)).await,
            Locator::Id(id) => {
                let selector = id_selector(id);
                self.client.find(WdLocator::Css(&selector)).await
            }
        };
        found
            .map(WebDriverElement)
            .map_err(|e| map_cmd_error(&locator.to_string(), e))
    }

    async fn find_all(&self, selector: &str) -> Result<Vec<WebDriverElement>, SessionError> {
        debug!("WebDriver find_all {}", selector);
        let found = self
            .client
            .find_all(WdLocator::Css(selector))
            .await
            .map_err(|e| map_cmd_error(selector, e))?;
        Ok(found.into_iter().map(WebDriverElement).collect())
    }
}

/// CSS `#id` selector for an arbitrary id.
///
/// fantoccini sends `Locator::Id` as an XPath string literal, which cannot
/// hold a `"`; an escaped CSS id selector accepts any id.
fn id_selector(id: &str) -> String {
    let mut selector = String::with_capacity(id.len() + 1);
    selector.push('#');
    for (i, c) in id.chars().enumerate() {
        match c {
            '\0' => selector.push('\u{FFFD}'),
            '0'..='9' if i == 0 || (i == 1 && id.starts_with('-')) => {
                selector.push_str(&format!("\\{:x} ", c as u32))
            }
            '-' if i == 0 && id.len() == 1 => selector.push_str("\\-"),
            c if c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii() => {
                selector.push(c)
            }
            c if c.is_ascii_control() => selector.push_str(&format!("\\{:x} ", c as u32)),
            c => {
                selector.push('\\');
                selector.push(c);
            }
        }
    }
    selector
}
