use crate::alias::AliasTable;

pub const DEFAULT_PREFIX: &str = "body";

/// Prefix and aliases that every generated selector passes through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    prefix: String,
    aliases: AliasTable,
}

impl Default for Scope {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

impl Scope {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.trim().to_string(),
            aliases: AliasTable::new(),
        }
    }

    pub fn with_aliases(mut self, aliases: AliasTable) -> Self {
        self.aliases = aliases;
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Same aliases, scoped one level deeper. Aliases in `scope` are expanded.
    pub fn nested(&self, scope: &str) -> Self {
        let scope = self.aliases.apply(scope.trim());
        Self {
            prefix: format!("{} {}", self.prefix, scope).trim().to_string(),
            aliases: self.aliases.clone(),
        }
    }

    /// Substitute aliases, then scope under the prefix.
    ///
    /// `format("foo")` is `"body foo"` with the default prefix and `"foo"` with
    /// an empty one.
    pub fn format(&self, selector: &str) -> String {
        let substituted = self.aliases.apply(selector);
        format!("{} {}", self.prefix, substituted).trim().to_string()
    }
}
