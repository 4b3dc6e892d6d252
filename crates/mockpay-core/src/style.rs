//! # Checkout Style Configuration
//!
//! Presentation settings served to checkout frontends. A fixed light theme
//! ships built in; deployments can replace it with a TOML file.

use crate::error::{ServiceError, ServiceResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Style settings for a hosted checkout page.
///
/// Custom styles are kept ordered so the serialized form is identical on
/// every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleConfig {
    /// Theme name, e.g. "light"
    pub theme: String,

    /// Primary accent color as a CSS color value
    pub primary_color: String,

    /// Free-form CSS property overrides keyed by property name
    pub custom_styles: BTreeMap<String, String>,
}

impl StyleConfig {
    /// The built-in light theme
    pub fn light() -> Self {
        let mut custom_styles = BTreeMap::new();
        custom_styles.insert("borderRadius".to_owned(), "5px".to_owned());
        custom_styles.insert("fontFamily".to_owned(), "Arial, sans-serif".to_owned());

        Self {
            theme: "light".to_owned(),
            primary_color: "#007bff".to_owned(),
            custom_styles,
        }
    }

    /// Parse a style configuration from TOML contents
    pub fn from_toml(contents: &str) -> ServiceResult<Self> {
        toml::from_str(contents)
            .map_err(|e| ServiceError::Configuration(format!("invalid style config: {e}")))
    }

    /// Set the theme name
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    /// Set the primary color
    pub fn with_primary_color(mut self, color: impl Into<String>) -> Self {
        self.primary_color = color.into();
        self
    }

    /// Add or replace a custom style entry
    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_styles.insert(key.into(), value.into());
        self
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::light()
    }
}
