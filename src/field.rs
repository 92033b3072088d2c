//! Path picker field
//!
//! A [`PathField`] turns partial path input into completion options. The
//! parent directory of the input is listed through the field's
//! [`ListingProvider`], the result is cached per directory, and the cached
//! list is narrowed to the options that still match what the user typed.
//!
//! ```rust
//! # async fn example() -> pathfield::Result<()> {
//! use pathfield::{MemoryProvider, PathField, PathFieldConfig};
//! use std::sync::Arc;
//!
//! let provider = Arc::new(MemoryProvider::new().with_dir("/srv", ["git", "www"]));
//! let field = PathField::new(provider, PathFieldConfig::default());
//!
//! let options = field.load_filtered_options("/srv/g").await?;
//! assert_eq!(options.len(), 1);
//! assert_eq!(options[0].value(), "/srv/git");
//! # Ok(())
//! # }
//! ```
//!
//! Concurrent lookups of the same uncached directory are not coalesced: each
//! one lists the directory and stores its result, and the last store wins.

use crate::autocomplete::{Autocomplete, AutocompleteOption, OptionLoader};
use crate::cache::ListingCache;
use crate::config::PathFieldConfig;
use crate::error::Result;
use crate::listing::{ListingProvider, SymlinkMode};
use crate::path::ParentPath;
use async_trait::async_trait;
use std::sync::Arc;

/// Filesystem path input with backend-driven completions
pub struct PathField {
    provider: Arc<dyn ListingProvider>,
    config: PathFieldConfig,
    cache: ListingCache,
}

impl PathField {
    /// Create a field listing directories through `provider`
    pub fn new(provider: Arc<dyn ListingProvider>, config: PathFieldConfig) -> Self {
        let cache = ListingCache::new(config.cache_strategy);
        Self {
            provider,
            config,
            cache,
        }
    }

    pub fn config(&self) -> &PathFieldConfig {
        &self.config
    }

    /// Symlink mode forwarded with every listing request
    pub fn symlink(&self) -> Option<SymlinkMode> {
        self.config.symlink
    }

    /// All children of the directory that `value` points into.
    ///
    /// Served from the cache when the directory was listed before; otherwise
    /// the directory is listed once and the result cached, including an
    /// empty result for paths without children.
    ///
    /// # Errors
    ///
    /// Returns the provider's error unchanged. Nothing is cached on failure.
    pub async fn load_options(&self, value: &str) -> Result<Vec<AutocompleteOption>> {
        let parent = ParentPath::of(value);
        let key = parent.key();

        if let Some(cached) = self.cache.get(key) {
            log::debug!("Listing cache hit for '{key}'");
            return Ok(cached);
        }

        log::debug!(
            "Listing cache miss for '{key}', fetching (symlink: {:?})",
            self.config.symlink
        );
        let listing = self.provider.get_param(key, self.config.symlink).await?;

        let options: Vec<AutocompleteOption> = listing
            .children
            .unwrap_or_default()
            .into_iter()
            .map(|child| {
                let value = parent.child(&child.name);
                AutocompleteOption::new(child.name, value)
            })
            .collect();

        self.cache.insert(key, options.clone());
        Ok(options)
    }

    /// Children of the parent directory whose path starts with `value`
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`load_options`](Self::load_options).
    pub async fn load_filtered_options(&self, value: &str) -> Result<Vec<AutocompleteOption>> {
        let options = self.load_options(value).await?;
        Ok(options
            .into_iter()
            .filter(|option| option.value().starts_with(value))
            .collect())
    }

    /// Autocomplete widget for this field.
    ///
    /// Carries the configured props unchanged; the symlink mode stays with
    /// the field.
    pub fn render(&self) -> Autocomplete<'_> {
        Autocomplete::new(&self.config.props, self)
    }

    // =========================================================================
    // Cache management
    // =========================================================================

    /// Forget the listing of the directory `value` points into
    pub fn invalidate(&self, value: &str) -> bool {
        self.cache.remove(ParentPath::of(value).key())
    }

    /// Forget every cached listing
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Whether the directory `value` points into is cached
    pub fn is_cached(&self, value: &str) -> bool {
        self.cache.contains(ParentPath::of(value).key())
    }

    /// Number of cached directories
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }
}

#[async_trait]
impl OptionLoader for PathField {
    async fn load(&self, input: &str) -> Result<Vec<AutocompleteOption>> {
        self.load_filtered_options(input).await
    }
}

// =============================================================================
// Tests
// =============================================================================
