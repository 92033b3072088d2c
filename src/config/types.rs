//! Path field configuration

use serde::{Deserialize, Serialize};

use super::AutocompleteProps;
use crate::cache::CacheStrategy;
use crate::error::Result;
use crate::listing::SymlinkMode;

/// Configuration for a `PathField`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathFieldConfig {
    /// Everything forwarded to the autocomplete widget
    #[serde(default)]
    pub props: AutocompleteProps,

    /// Symlink handling requested from the backend; unset leaves it to the
    /// backend's default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symlink: Option<SymlinkMode>,

    /// How directory listings are cached
    #[serde(default)]
    pub cache_strategy: CacheStrategy,
}

impl PathFieldConfig {
    /// Create a new builder for PathFieldConfig
    ///
    /// # Example
    /// ```rust
    /// use pathfield::{PathFieldConfig, SymlinkMode};
    ///
    /// let config = PathFieldConfig::builder()
    ///     .label("Backup target")
    ///     .symlink(SymlinkMode::Resolve)
    ///     .lru_cache(64)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(config.symlink, Some(SymlinkMode::Resolve));
    /// ```
    pub fn builder() -> PathFieldConfigBuilder {
        PathFieldConfigBuilder::default()
    }

    /// Decode a configuration from JSON and validate it
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the cache strategy is
    /// invalid.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns error if the cache strategy is invalid.
    pub fn validate(&self) -> Result<()> {
        self.cache_strategy.validate()
    }
}

/// Builder for creating PathFieldConfig with a fluent API
#[derive(Debug, Clone, Default)]
pub struct PathFieldConfigBuilder {
    props: AutocompleteProps,
    symlink: Option<SymlinkMode>,
    cache_strategy: CacheStrategy,
}

impl PathFieldConfigBuilder {
    /// Replace the widget props wholesale
    #[must_use]
    pub fn props(mut self, props: AutocompleteProps) -> Self {
        self.props = props;
        self
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.props.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.props.placeholder = Some(placeholder.into());
        self
    }

    /// Ask the backend to resolve or follow symbolic links
    #[must_use]
    pub fn symlink(mut self, mode: SymlinkMode) -> Self {
        self.symlink = Some(mode);
        self
    }

    #[must_use]
    pub fn cache_strategy(mut self, strategy: CacheStrategy) -> Self {
        self.cache_strategy = strategy;
        self
    }

    /// Keep at most `max_entries` directory listings
    #[must_use]
    pub fn lru_cache(self, max_entries: usize) -> Self {
        self.cache_strategy(CacheStrategy::Lru(max_entries))
    }

    /// Fetch on every lookup
    #[must_use]
    pub fn no_cache(self) -> Self {
        self.cache_strategy(CacheStrategy::None)
    }

    /// Build the PathFieldConfig
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCacheStrategy`](crate::Error::InvalidCacheStrategy)
    /// for an `Lru(0)` strategy.
    pub fn build(self) -> Result<PathFieldConfig> {
        let config = PathFieldConfig {
            props: self.props,
            symlink: self.symlink,
            cache_strategy: self.cache_strategy,
        };
        config.validate()?;
        Ok(config)
    }
}
