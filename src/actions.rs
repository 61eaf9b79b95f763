use serde::{Deserialize, Serialize};

/// A runnable result: what the user sees plus the action string the
/// launcher executes.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Action {
    pub label: String,
    pub desc: String,
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<String>,
}

impl Action {
    pub fn new(label: impl Into<String>, desc: &str, action: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            desc: desc.into(),
            action: action.into(),
            args: None,
        }
    }
}
