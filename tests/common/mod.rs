//! Common test utilities for pathfield integration tests
//!
//! Provides a shared directory tree fixture and helper functions.

#![allow(dead_code)]

use pathfield::{AutocompleteOption, MemoryProvider, PathField, PathFieldConfig};
use std::sync::Arc;

/// Initialize logging once for the test binary
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A small server-like directory tree
pub fn sample_provider() -> MemoryProvider {
    MemoryProvider::new()
        .with_dir("/", ["bin", "etc", "home", "srv", "var"])
        .with_dir("/home", ["alice", "bob", "shared"])
        .with_dir("/home/alice", ["Documents", "Downloads", "Music"])
        .with_dir("/srv", ["git", "www"])
        .with_dir("/srv/www", Vec::<&str>::new())
        .with_leaf("/etc/hosts")
        .with_failure("/var", "permission denied")
}

/// Field wired to a shared provider so tests can inspect requests
pub struct TestFixture {
    pub provider: Arc<MemoryProvider>,
    pub field: PathField,
}

impl TestFixture {
    pub fn new() -> Self {
        Self::with_config(PathFieldConfig::default())
    }

    pub fn with_config(config: PathFieldConfig) -> Self {
        init_logging();
        let provider = Arc::new(sample_provider());
        let field = PathField::new(provider.clone(), config);
        Self { provider, field }
    }
}

/// Option values, for compact assertions
pub fn values(options: &[AutocompleteOption]) -> Vec<&str> {
    options.iter().map(AutocompleteOption::value).collect()
}
