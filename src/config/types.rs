use serde::{Deserialize, Serialize};

/// Root configuration container. Every section is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub context: ContextConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub lazy: LazyConfig,
}

/// Value distributed to every view through the application context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextConfig {
    #[serde(default = "default_context_user")]
    pub user: String,
}

/// Person shown on the props card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_profile_name")]
    pub name: String,
    #[serde(default = "default_profile_role")]
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Interval between ticks (spinner, box transition) in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Route shown at startup.
    #[serde(default = "default_initial_route")]
    pub initial_route: String,
}

/// Behavior of the lazily loaded panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LazyConfig {
    /// Artificial load latency in milliseconds (default: 0, resolves at once).
    #[serde(default)]
    pub delay_ms: u64,
    /// Make the load fail, to exercise the failure view.
    #[serde(default)]
    pub simulate_failure: bool,
}

fn default_context_user() -> String {
    "Aditya Janjanam".to_string()
}

fn default_profile_name() -> String {
    "Aditya".to_string()
}

fn default_profile_role() -> String {
    "Full Stack Developer".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_initial_route() -> String {
    "/".to_string()
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            user: default_context_user(),
        }
    }
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: default_profile_name(),
            role: default_profile_role(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            initial_route: default_initial_route(),
        }
    }
}
