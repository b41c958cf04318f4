//! Read-only values handed to every view.

/// Built once at startup and passed down by reference; views read it, nothing
/// writes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppContext {
    user: String,
    profile: Profile,
}

/// Shown on the props card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub role: String,
}

impl AppContext {
    pub fn new(user: impl Into<String>, profile: Profile) -> Self {
        Self {
            user: user.into(),
            profile,
        }
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }
}
