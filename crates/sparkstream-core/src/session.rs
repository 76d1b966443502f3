use serde::{Deserialize, Serialize};

/// Simulated session role. There is no real authentication behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Guest,
    Creator,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Top-level screens of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViewState {
    Dashboard,
    Ideation,
    Creator,
    Analytics,
    Collab,
    Admin,
}

impl ViewState {
    /// Whether a user with the given admin flag may open this view.
    ///
    /// Admins are confined to the admin panel; creators see everything else.
    #[must_use]
    pub fn allowed_for(self, is_admin: bool) -> bool {
        match self {
            ViewState::Admin => is_admin,
            _ => !is_admin,
        }
    }
}
