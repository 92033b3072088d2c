//! In-memory listing provider for testing

use super::{DirectoryListing, ListingProvider, SymlinkMode};
use crate::error::{Error, Result};
use crate::sync::MutexExt;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// A single call received by a [`MemoryProvider`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub path: String,
    pub symlink: Option<SymlinkMode>,
}

enum Entry {
    Listing(DirectoryListing),
    Failure(String),
}

/// In-memory directory tree (not persisted).
///
/// Records every request so callers can assert how often the backend was
/// hit. Unknown paths fail with [`Error::Fetch`].
#[derive(Default)]
pub struct MemoryProvider {
    entries: Mutex<HashMap<String, Entry>>,
    requests: Mutex<Vec<FetchRequest>>,
}

impl MemoryProvider {
    /// Create an empty provider
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a directory and its children
    #[must_use]
    pub fn with_dir<I, S>(self, path: impl Into<String>, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(path, DirectoryListing::directory(children));
        self
    }

    /// Register a path that lists without children
    #[must_use]
    pub fn with_leaf(self, path: impl Into<String>) -> Self {
        self.insert(path, DirectoryListing::leaf());
        self
    }

    /// Make every request for `path` fail with `reason`
    #[must_use]
    pub fn with_failure(self, path: impl Into<String>, reason: impl Into<String>) -> Self {
        self.entries
            .lock_recovered()
            .insert(path.into(), Entry::Failure(reason.into()));
        self
    }

    /// Insert or replace the listing for `path`
    pub fn insert(&self, path: impl Into<String>, listing: DirectoryListing) {
        self.entries
            .lock_recovered()
            .insert(path.into(), Entry::Listing(listing));
    }

    /// Every request received so far, oldest first
    pub fn requests(&self) -> Vec<FetchRequest> {
        self.requests.lock_recovered().clone()
    }

    /// Total number of requests received
    pub fn fetch_count(&self) -> usize {
        self.requests.lock_recovered().len()
    }

    /// Number of requests received for `path`
    pub fn fetches_for(&self, path: &str) -> usize {
        self.requests
            .lock_recovered()
            .iter()
            .filter(|req| req.path == path)
            .count()
    }
}

#[async_trait]
impl ListingProvider for MemoryProvider {
    async fn get_param(
        &self,
        path: &str,
        symlink: Option<SymlinkMode>,
    ) -> Result<DirectoryListing> {
        self.requests.lock_recovered().push(FetchRequest {
            path: path.to_string(),
            symlink,
        });

        match self.entries.lock_recovered().get(path) {
            Some(Entry::Listing(listing)) => Ok(listing.clone()),
            Some(Entry::Failure(reason)) => Err(Error::fetch(path, reason.clone())),
            None => Err(Error::fetch(path, "no such path")),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
