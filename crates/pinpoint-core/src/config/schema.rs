use crate::alias::AliasTable;
use crate::selector::DEFAULT_PREFIX;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    #[serde(default = "default_prefix")]
    pub prefix: String,
    #[serde(default)]
    pub aliases: AliasTable,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            aliases: AliasTable::default(),
        }
    }
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}
