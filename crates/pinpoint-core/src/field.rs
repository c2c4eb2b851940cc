//! Field kinds and the selectors tried for each.
//!
//! The author's own text always goes first, so a field written as a real
//! selector (or an alias) wins over anything guessed from its name.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    Typing,
    Selection,
    RadioSelection { value: String },
    Checking,
    Attachment,
}

impl FieldKind {
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Typing => "typing",
            FieldKind::Selection => "selection",
            FieldKind::RadioSelection { .. } => "radio_selection",
            FieldKind::Checking => "checking",
            FieldKind::Attachment => "attachment",
        }
    }

    /// Candidate selectors for `field`, most specific intent first.
    pub fn candidates(&self, field: &str) -> Vec<String> {
        let mut candidates = vec![field.to_string()];
        match self {
            FieldKind::Typing => {
                candidates.push(format!("input[name={}]", field));
                candidates.push(format!("textarea[name={}]", field));
            }
            FieldKind::Selection => {
                candidates.push(format!("select[name={}]", field));
            }
            FieldKind::RadioSelection { value } => {
                candidates.push(format!(
                    "input[type=radio][name={}][value={}]",
                    field, value
                ));
            }
            FieldKind::Checking => {
                candidates.push(format!("input[type=checkbox][name={}]", field));
            }
            FieldKind::Attachment => {
                candidates.push(format!("input[type=file][name={}]", field));
            }
        }
        candidates
    }
}

/// What a test step wants to act on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    Field { kind: FieldKind, name: String },
    Button(String),
}

impl Target {
    pub fn typing(name: impl Into<String>) -> Self {
        Target::Field {
            kind: FieldKind::Typing,
            name: name.into(),
        }
    }

    pub fn selection(name: impl Into<String>) -> Self {
        Target::Field {
            kind: FieldKind::Selection,
            name: name.into(),
        }
    }

    pub fn radio(name: impl Into<String>, value: impl Into<String>) -> Self {
        Target::Field {
            kind: FieldKind::RadioSelection {
                value: value.into(),
            },
            name: name.into(),
        }
    }

    pub fn checking(name: impl Into<String>) -> Self {
        Target::Field {
            kind: FieldKind::Checking,
            name: name.into(),
        }
    }

    pub fn attachment(name: impl Into<String>) -> Self {
        Target::Field {
            kind: FieldKind::Attachment,
            name: name.into(),
        }
    }

    pub fn button(name: impl Into<String>) -> Self {
        Target::Button(name.into())
    }
}

/// `#id` fields bypass prefix and aliases entirely.
pub(crate) fn direct_id(field: &str) -> Option<&str> {
    field.strip_prefix('#')
}
