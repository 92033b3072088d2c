//! # pathfield - Path Picker Field
//!
//! A framework-agnostic Rust library for filesystem path inputs with
//! autocomplete suggestions fetched from a backend directory listing.
//!
//! ## Features
//!
//! - **Parent-directory completion**: Input like `/srv/w` lists `/srv` and offers its children
//! - **Per-directory caching**: Each directory is listed once per field, then served from memory
//! - **Cache strategies**: Unbounded (default), LRU-bounded, or disabled
//! - **Pluggable backend**: Implement [`ListingProvider`] over HTTP, IPC, or anything async
//! - **Symlink modes**: `resolve` / `follow` forwarded verbatim to the backend
//! - **Widget model**: [`Autocomplete`] pairs pass-through props with the option loader
//!
//! ## Quick Start
//!
//! ```rust
//! use pathfield::{MemoryProvider, PathField, PathFieldConfig, SymlinkMode};
//! use std::sync::Arc;
//!
//! # async fn example() -> pathfield::Result<()> {
//! let provider = Arc::new(
//!     MemoryProvider::new()
//!         .with_dir("/", ["etc", "home", "srv"])
//!         .with_dir("/srv", ["git", "www"]),
//! );
//!
//! let config = PathFieldConfig::builder()
//!     .label("Web root")
//!     .symlink(SymlinkMode::Resolve)
//!     .build()?;
//! let field = PathField::new(provider, config);
//!
//! // Everything in /srv
//! let all = field.load_options("/srv/w").await?;
//! assert_eq!(all.len(), 2);
//!
//! // Only what still matches the input (served from cache)
//! let matching = field.load_filtered_options("/srv/w").await?;
//! assert_eq!(matching[0].value(), "/srv/www");
//! # Ok(())
//! # }
//! ```
//!
//! ## Implementing a Provider
//!
//! ```rust
//! use async_trait::async_trait;
//! use pathfield::{DirectoryListing, Error, ListingProvider, Result, SymlinkMode};
//!
//! struct ApiClient;
//!
//! impl ApiClient {
//!     async fn get(&self, path: &str, symlink: Option<&str>) -> std::io::Result<String> {
//!         // GET /api/param?path=...&symlink=... with your HTTP client of choice
//!         # let _ = (path, symlink);
//!         Ok(r#"{"children": [{"name": "data"}]}"#.to_string())
//!     }
//! }
//!
//! #[async_trait]
//! impl ListingProvider for ApiClient {
//!     async fn get_param(
//!         &self,
//!         path: &str,
//!         symlink: Option<SymlinkMode>,
//!     ) -> Result<DirectoryListing> {
//!         let body = self
//!             .get(path, symlink.map(|mode| mode.as_str()))
//!             .await
//!             .map_err(|e| Error::fetch(path, e.to_string()))?;
//!         DirectoryListing::from_json(&body)
//!     }
//! }
//! ```
//!
//! ## Rendering
//!
//! ```rust
//! use pathfield::{MemoryProvider, PathField, PathFieldConfig};
//! use std::sync::Arc;
//!
//! # async fn example() {
//! let field = PathField::new(Arc::new(MemoryProvider::new()), PathFieldConfig::default());
//! let widget = field.render();
//!
//! // Failures become an inline error instead of an Err
//! let suggestions = widget.suggest("/nowhere/x").await;
//! assert!(suggestions.is_failed());
//! # }
//! ```

mod autocomplete;
mod error;
mod field;
mod sync;

pub mod cache;
pub mod config;
pub mod listing;
pub mod path;

// Re-exports
pub use autocomplete::{Autocomplete, AutocompleteOption, OptionLoader, Suggestions};
pub use cache::CacheStrategy;
pub use config::{AutocompleteProps, PathFieldConfig, PathFieldConfigBuilder};
pub use error::{Error, Result};
pub use field::PathField;
pub use listing::{
    DirectoryListing, FetchRequest, ListingEntry, ListingProvider, MemoryProvider, SymlinkMode,
};
