use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
}

/// Default widget and generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    /// Password length (default: 20).
    #[serde(default = "default_length")]
    pub length: usize,
    /// Include digits in the pool (default: true).
    #[serde(default = "default_enabled")]
    pub numbers: bool,
    /// Include symbols in the pool (default: true).
    #[serde(default = "default_enabled")]
    pub symbols: bool,
    /// Number of independent widgets to render (default: 3).
    #[serde(default = "default_widgets")]
    pub widgets: usize,
}

fn default_length() -> usize {
    20
}

fn default_enabled() -> bool {
    true
}

fn default_widgets() -> usize {
    3
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            length: default_length(),
            numbers: true,
            symbols: true,
            widgets: default_widgets(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            defaults: Defaults::default(),
        }
    }
}
