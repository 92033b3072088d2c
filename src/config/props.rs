//! Pass-through configuration for the autocomplete widget
//!
//! # Overview
//!
//! [`AutocompleteProps`] carries everything the host UI needs to draw the
//! field apart from the option loader, which the path field supplies itself.
//!
//! - **Fixed fields**: label, placeholder, current value, disabled, required
//! - **Custom Metadata** (`HashMap<String, Value>`): any developer-defined
//!   key-value pairs (`"helper_text"`, `"width"`, `"autofocus"`, ...). There
//!   are no predefined keys; add whatever your framework needs.
//!
//! ```rust
//! use pathfield::AutocompleteProps;
//! use serde_json::json;
//!
//! let props = AutocompleteProps::new()
//!     .label("Data directory")
//!     .placeholder("/srv/data")
//!     .required(true)
//!     .meta_str("helper_text", "Must be writable by the service user")
//!     .meta_bool("autofocus", true)
//!     .meta_num("width", 320)
//!     .meta("sx", json!({"mt": 2}));
//!
//! assert_eq!(props.get_meta_str("helper_text"), Some("Must be writable by the service user"));
//! assert_eq!(props.get_meta_bool("autofocus"), Some(true));
//! assert_eq!(props.get_meta_num("width"), Some(320.0));
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::collections::HashMap;

/// Autocomplete configuration forwarded untouched to the widget
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AutocompleteProps {
    /// Field label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Hint shown while the field is empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    /// Current field value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(default)]
    pub disabled: bool,

    #[serde(default)]
    pub required: bool,

    /// Developer-defined custom metadata (fully dynamic)
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, Value>,
}

impl AutocompleteProps {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Fixed fields (builder pattern)
    // =========================================================================

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    // =========================================================================
    // Dynamic metadata methods
    // =========================================================================

    /// Add custom string metadata
    #[must_use]
    pub fn meta_str(mut self, key: &str, value: impl Into<String>) -> Self {
        self.metadata
            .insert(key.to_string(), Value::String(value.into()));
        self
    }

    /// Add custom boolean metadata
    #[must_use]
    pub fn meta_bool(mut self, key: &str, value: bool) -> Self {
        self.metadata.insert(key.to_string(), Value::Bool(value));
        self
    }

    /// Add custom number metadata
    #[must_use]
    pub fn meta_num(mut self, key: &str, value: impl Into<f64>) -> Self {
        self.metadata.insert(key.to_string(), json!(value.into()));
        self
    }

    /// Add custom JSON metadata
    #[must_use]
    pub fn meta(mut self, key: &str, value: Value) -> Self {
        self.metadata.insert(key.to_string(), value);
        self
    }

    /// Get metadata value by key
    pub fn get_meta(&self, key: &str) -> Option<&Value> {
        self.metadata.get(key)
    }

    pub fn get_meta_str(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).and_then(|v| v.as_str())
    }

    pub fn get_meta_bool(&self, key: &str) -> Option<bool> {
        self.metadata.get(key).and_then(|v| v.as_bool())
    }

    pub fn get_meta_num(&self, key: &str) -> Option<f64> {
        self.metadata.get(key).and_then(|v| v.as_f64())
    }
}

// =============================================================================
// Tests
// =============================================================================
