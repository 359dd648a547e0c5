use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default element prefix spliced into class names and event identifiers.
pub const DEFAULT_PREFIX: &str = "cnp";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid element prefix {prefix:?}: {reason}")]
    InvalidPrefix {
        prefix: String,
        reason: &'static str,
    },
}

/// Library-wide naming settings.
///
/// Every class name and event identifier the components emit is derived
/// from one element prefix, so a host design system can re-namespace the
/// whole widget by swapping a single value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    prefix: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create settings with a custom element prefix.
    ///
    /// The prefix is spliced into CSS class names (`{prefix}--tree-node`)
    /// and the toggle event identifier (`{prefix}-tree-node-toggleclick`),
    /// so it must start with a lowercase ASCII letter and contain only
    /// lowercase ASCII letters and digits.
    pub fn with_prefix(prefix: impl Into<String>) -> Result<Self, SettingsError> {
        let prefix = prefix.into();
        if prefix.is_empty() {
            return Err(SettingsError::InvalidPrefix {
                prefix,
                reason: "prefix must not be empty",
            });
        }
        if !prefix
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_lowercase())
        {
            return Err(SettingsError::InvalidPrefix {
                prefix,
                reason: "prefix must start with a lowercase ASCII letter",
            });
        }
        if !prefix
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        {
            return Err(SettingsError::InvalidPrefix {
                prefix,
                reason: "prefix may only contain lowercase ASCII letters and digits",
            });
        }
        Ok(Self { prefix })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Compose a block class name: `class("tree-node")` → `"cnp--tree-node"`.
    pub fn class(&self, block: &str) -> String {
        format!("{}--{}", self.prefix, block)
    }

    /// The fixed, library-namespaced identifier of the toggle notification.
    pub fn event_toggle_click(&self) -> String {
        format!("{}-tree-node-toggleclick", self.prefix)
    }
}
