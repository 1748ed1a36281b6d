use serde::{Deserialize, Serialize};

/// Toy login flag checked before admin commands run. Carries no security
/// properties; its stored shape is part of the external interface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminSession {
    pub is_logged_in: bool,
    pub username: String,
}

impl AdminSession {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            is_logged_in: true,
            username: username.into(),
        }
    }
}
