//! Markup contract between generated pages and the page behaviors.

use serde::{Deserialize, Serialize};

use crate::error::{DocPageError, Result};

/// Default id of the floating "scroll to top" button.
pub const DEFAULT_UP_BUTTON_ID: &str = "upBtn";
/// Default class marking rows hidden until their group is expanded.
pub const DEFAULT_EXTENDED_CLASS: &str = "ext";
/// Default class whose presence hides a row.
pub const DEFAULT_HIDDEN_CLASS: &str = "hide";
/// Default class of the clickable row that expands its table.
pub const DEFAULT_TOGGLE_CLASS: &str = "toggle";
/// Scroll offset (CSS px) past which the button is shown.
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 20.0;

/// Names and thresholds the behaviors look for in the page.
///
/// Every field is optional when deserializing; missing fields keep the
/// defaults the page generator writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    pub up_button_id: String,
    pub extended_class: String,
    /// Must differ from `extended_class`: toggling would otherwise remove
    /// the marker the rows are found by.
    pub hidden_class: String,
    pub toggle_class: String,
    pub table_tag: String,
    pub scroll_threshold: f64,
    /// Register click listeners instead of relying on inline `onclick`
    /// attributes in the markup.
    pub delegate_clicks: bool,
    /// Report no-op paths to the browser console.
    pub debug: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            up_button_id: DEFAULT_UP_BUTTON_ID.to_string(),
            extended_class: DEFAULT_EXTENDED_CLASS.to_string(),
            hidden_class: DEFAULT_HIDDEN_CLASS.to_string(),
            toggle_class: DEFAULT_TOGGLE_CLASS.to_string(),
            table_tag: "table".to_string(),
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            delegate_clicks: false,
            debug: false,
        }
    }
}

impl PageConfig {
    /// Parse and validate a config from JSON text.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed or a field is invalid.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check identifiers and the threshold, and that the extended and hidden
    /// classes differ.
    ///
    /// # Errors
    /// Returns `DocPageError::Config` naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        let names = [
            ("upButtonId", &self.up_button_id),
            ("extendedClass", &self.extended_class),
            ("hiddenClass", &self.hidden_class),
            ("toggleClass", &self.toggle_class),
            ("tableTag", &self.table_tag),
        ];
        for (field, value) in names {
            if value.is_empty() {
                return Err(DocPageError::Config(format!("{field} is empty")));
            }
            if value.chars().any(char::is_whitespace) {
                return Err(DocPageError::Config(format!(
                    "{field} contains whitespace: {value:?}"
                )));
            }
        }
        if !self.scroll_threshold.is_finite() || self.scroll_threshold < 0.0 {
            return Err(DocPageError::Config(format!(
                "scrollThreshold must be a non-negative number, got {}",
                self.scroll_threshold
            )));
        }
        if self.extended_class == self.hidden_class {
            return Err(DocPageError::Config(
                "extendedClass and hiddenClass must differ".to_string(),
            ));
        }
        Ok(())
    }
}
