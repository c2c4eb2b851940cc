//! Field and button resolution.
//!
//! A `Resolver` turns the names test authors write ("email", "Save", "@terms")
//! into live elements. Each field kind has a short, ordered list of candidate
//! selectors; the first that matches wins. Buttons get a longer chain that
//! falls back to scanning submit values and button text.

use crate::alias::AliasTable;
use crate::config::ResolverConfig;
use crate::error::ResolveError;
use crate::field::{FieldKind, Target, direct_id};
use crate::selector::{DEFAULT_PREFIX, Scope};
use crate::session::{Element, Locator, Session, SessionError};
use async_trait::async_trait;
use tracing::{debug, warn};

const SUBMIT_INPUTS: &str = "input[type=submit]";
const BUTTONS: &str = "button";

/// Narrow resolution interface.
///
/// Behaviour added on top of the built-in strategies (custom steps, logging,
/// retries owned by the caller) wraps an implementation of this trait.
#[async_trait]
pub trait FieldResolver: Send + Sync {
    type Element: Send;

    async fn resolve(&self, target: &Target) -> Result<Self::Element, ResolveError>;
}

/// Resolves field and button names against `session`, scoping every generated
/// selector under a prefix after alias substitution.
pub struct Resolver<S> {
    session: S,
    scope: Scope,
}

impl<S: Session> Resolver<S> {
    /// Resolver scoped under `body`.
    pub fn new(session: S) -> Self {
        Self::with_prefix(session, DEFAULT_PREFIX)
    }

    /// An empty prefix disables scoping.
    pub fn with_prefix(session: S, prefix: &str) -> Self {
        Self {
            session,
            scope: Scope::new(prefix),
        }
    }

    pub fn from_config(session: S, config: ResolverConfig) -> Self {
        Self::with_prefix(session, &config.prefix).with_aliases(config.aliases)
    }

    pub fn with_aliases(mut self, aliases: AliasTable) -> Self {
        self.scope = self.scope.with_aliases(aliases);
        self
    }

    pub fn prefix(&self) -> &str {
        self.scope.prefix()
    }

    pub fn aliases(&self) -> &AliasTable {
        self.scope.aliases()
    }

    /// The session queries go to, for the actions that follow resolution.
    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn format(&self, selector: &str) -> String {
        self.scope.format(selector)
    }

    // ------------------------------------------------------------------
    // Probing primitives
    // ------------------------------------------------------------------

    /// Single lookup that never fails; any error reads as "absent".
    pub async fn find(&self, selector: &str) -> Option<S::Element> {
        match self.find_or_fail(selector).await {
            Ok(element) => Some(element),
            Err(e) => {
                debug!("Probe '{}' missed: {}", selector, e);
                None
            }
        }
    }

    /// Single lookup; the session's error is returned unchanged.
    pub async fn find_or_fail(&self, selector: &str) -> Result<S::Element, SessionError> {
        let formatted = self.format(selector);
        self.session.find_one(Locator::Css(&formatted)).await
    }

    /// Every match in document order; an empty list on any failure.
    pub async fn all(&self, selector: &str) -> Vec<S::Element> {
        let formatted = self.format(selector);
        match self.session.find_all(&formatted).await {
            Ok(elements) => elements,
            Err(e) => {
                debug!("Scan '{}' failed: {}", formatted, e);
                Vec::new()
            }
        }
    }

    /// First selector that matches, tried in order.
    ///
    /// Misses and rejected selectors move on to the next candidate. A broken
    /// session stops the search with `ResolveError::Session`.
    pub async fn first_or_fail<I>(&self, selectors: I) -> Result<S::Element, ResolveError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let selectors: Vec<String> = selectors
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .collect();
        let Some(target) = selectors.first() else {
            return Err(ResolveError::NoCandidates);
        };
        self.probe_candidates(target, &selectors).await
    }

    async fn probe_candidates(
        &self,
        target: &str,
        selectors: &[String],
    ) -> Result<S::Element, ResolveError> {
        let mut attempted = Vec::with_capacity(selectors.len());
        for selector in selectors {
            let formatted = self.format(selector);
            match self.session.find_one(Locator::Css(&formatted)).await {
                Ok(element) => {
                    debug!("Resolved '{}' with '{}'", target, formatted);
                    return Ok(element);
                }
                Err(e) if e.is_miss() => {
                    debug!("Candidate '{}' missed: {}", formatted, e);
                    attempted.push(formatted);
                }
                Err(e) => {
                    warn!("Session failed while resolving '{}': {}", target, e);
                    return Err(e.into());
                }
            }
        }

        Err(ResolveError::ElementNotFound {
            target: target.to_string(),
            attempted,
        })
    }

    /// `#id` lookup against the bare session: no prefix, no aliases.
    async fn resolve_by_id(&self, target: &str, id: &str) -> Result<S::Element, ResolveError> {
        debug!("Resolving '{}' by id", target);
        match self.session.find_one(Locator::Id(id)).await {
            Ok(element) => Ok(element),
            Err(e) if e.is_miss() => Err(ResolveError::ElementNotFound {
                target: target.to_string(),
                attempted: vec![target.to_string()],
            }),
            Err(e) => Err(e.into()),
        }
    }

    // ------------------------------------------------------------------
    // Field kinds
    // ------------------------------------------------------------------

    pub async fn resolve_field(
        &self,
        kind: &FieldKind,
        field: &str,
    ) -> Result<S::Element, ResolveError> {
        if let Some(id) = direct_id(field) {
            return self.resolve_by_id(field, id).await;
        }
        debug!("Resolving '{}' for {}", field, kind.name());
        self.probe_candidates(field, &kind.candidates(field)).await
    }

    pub async fn resolve_for_typing(&self, field: &str) -> Result<S::Element, ResolveError> {
        self.resolve_field(&FieldKind::Typing, field).await
    }

    pub async fn resolve_for_selection(&self, field: &str) -> Result<S::Element, ResolveError> {
        self.resolve_field(&FieldKind::Selection, field).await
    }

    pub async fn resolve_for_radio_selection(
        &self,
        field: &str,
        value: &str,
    ) -> Result<S::Element, ResolveError> {
        let kind = FieldKind::RadioSelection {
            value: value.to_string(),
        };
        self.resolve_field(&kind, field).await
    }

    pub async fn resolve_for_checking(&self, field: &str) -> Result<S::Element, ResolveError> {
        self.resolve_field(&FieldKind::Checking, field).await
    }

    pub async fn resolve_for_attachment(&self, field: &str) -> Result<S::Element, ResolveError> {
        self.resolve_field(&FieldKind::Attachment, field).await
    }

    // ------------------------------------------------------------------
    // Buttons
    // ------------------------------------------------------------------

    /// Resolve a button by, in order: id, raw selector, submit/button `name`,
    /// exact submit `value`, then a substring of the button's visible text.
    pub async fn resolve_for_button_press(&self, button: &str) -> Result<S::Element, ResolveError> {
        if let Some(id) = direct_id(button) {
            return self.resolve_by_id(button, id).await;
        }

        let mut attempted = Vec::new();

        let named = [
            button.to_string(),
            format!("input[type=submit][name={}]", button),
            format!("button[name={}]", button),
        ];
        for selector in &named {
            attempted.push(self.format(selector));
            if let Some(element) = self.find(selector).await {
                debug!("Button '{}' matched selector '{}'", button, selector);
                return Ok(element);
            }
        }

        attempted.push(format!(
            "{} with value \"{}\"",
            self.format(SUBMIT_INPUTS),
            button
        ));
        for input in self.all(SUBMIT_INPUTS).await {
            let value = input.attribute("value").await;
            match value {
                Ok(Some(value)) if value == button => {
                    debug!("Button '{}' matched a submit value", button);
                    return Ok(input);
                }
                Ok(_) => {}
                Err(e) => debug!("Skipping submit input: {}", e),
            }
        }

        attempted.push(format!(
            "{} containing text \"{}\"",
            self.format(BUTTONS),
            button
        ));
        for candidate in self.all(BUTTONS).await {
            let text = candidate.visible_text().await;
            match text {
                Ok(text) if text.contains(button) => {
                    debug!("Button '{}' matched visible text '{}'", button, text);
                    return Ok(candidate);
                }
                Ok(_) => {}
                Err(e) => debug!("Skipping button: {}", e),
            }
        }

        Err(ResolveError::ButtonNotFound {
            button: button.to_string(),
            attempted,
        })
    }
}

impl<S: Session + Clone> Resolver<S> {
    /// Resolver for a nested region, e.g. `within("form#signup")`.
    pub fn within(&self, scope: &str) -> Self {
        Self {
            session: self.session.clone(),
            scope: self.scope.nested(scope),
        }
    }
}

#[async_trait]
impl<S: Session> FieldResolver for Resolver<S> {
    type Element = S::Element;

    async fn resolve(&self, target: &Target) -> Result<S::Element, ResolveError> {
        match target {
            Target::Field { kind, name } => self.resolve_field(kind, name).await,
            Target::Button(name) => self.resolve_for_button_press(name).await,
        }
    }
}
