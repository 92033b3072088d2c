//! Framework-agnostic autocomplete widget model
//!
//! An [`Autocomplete`] pairs pass-through widget configuration
//! ([`AutocompleteProps`]) with an [`OptionLoader`] that produces
//! suggestions for the current input. Host UIs render the props however they
//! like and call [`Autocomplete::suggest`] as the user types.

use crate::config::AutocompleteProps;
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A selectable suggestion
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AutocompleteOption {
    label: String,
    value: String,
}

impl AutocompleteOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Text shown in the dropdown
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Value written into the field when selected
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Produces suggestions for the current field text
#[async_trait]
pub trait OptionLoader: Send + Sync {
    /// Load the options to show for `input`
    ///
    /// # Errors
    ///
    /// Returns an error if the options cannot be produced.
    async fn load(&self, input: &str) -> Result<Vec<AutocompleteOption>>;
}

/// Outcome of a suggestion request as the widget presents it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suggestions {
    /// Options ready to display
    Ready(Vec<AutocompleteOption>),
    /// The loader failed; the message is suitable for an inline error
    Failed(String),
}

impl Suggestions {
    /// Options to display (empty when loading failed)
    pub fn options(&self) -> &[AutocompleteOption] {
        match self {
            Suggestions::Ready(options) => options,
            Suggestions::Failed(_) => &[],
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Suggestions::Failed(_))
    }
}

/// Autocomplete field: configuration plus the loader that feeds it
pub struct Autocomplete<'a> {
    props: &'a AutocompleteProps,
    loader: &'a dyn OptionLoader,
}

impl<'a> Autocomplete<'a> {
    pub fn new(props: &'a AutocompleteProps, loader: &'a dyn OptionLoader) -> Self {
        Self { props, loader }
    }

    /// Pass-through configuration to render with
    pub fn props(&self) -> &'a AutocompleteProps {
        self.props
    }

    /// Ask the loader for options, propagating failures
    ///
    /// # Errors
    ///
    /// Returns whatever error the loader produced.
    pub async fn load_options(&self, input: &str) -> Result<Vec<AutocompleteOption>> {
        self.loader.load(input).await
    }

    /// Ask the loader for options, turning a failure into an inline error
    pub async fn suggest(&self, input: &str) -> Suggestions {
        match self.loader.load(input).await {
            Ok(options) => Suggestions::Ready(options),
            Err(e) => {
                log::warn!("Failed to load suggestions for '{input}': {e}");
                Suggestions::Failed(e.to_string())
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
