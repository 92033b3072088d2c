//! Configuration types
//!
//! - `AutocompleteProps` - Pass-through configuration for the autocomplete widget
//! - `PathFieldConfig` - Props plus symlink mode and cache strategy for a path field

mod props;
mod types;

pub use props::AutocompleteProps;
pub use types::{PathFieldConfig, PathFieldConfigBuilder};
