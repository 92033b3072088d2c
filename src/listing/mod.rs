//! Directory listings and the provider seam that fetches them
//!
//! A [`ListingProvider`] is whatever the host application uses to ask its
//! backend for the children of a directory: an HTTP client, an IPC bridge,
//! or the in-memory [`MemoryProvider`] used by tests and demos.

mod memory;

pub use memory::{FetchRequest, MemoryProvider};

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the backend treats symbolic links while listing a directory.
///
/// Forwarded verbatim to the provider; never interpreted locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymlinkMode {
    /// Resolve links to their target path
    Resolve,
    /// Follow links and list the target's children
    Follow,
}

impl SymlinkMode {
    /// Wire name of the mode
    pub fn as_str(&self) -> &'static str {
        match self {
            SymlinkMode::Resolve => "resolve",
            SymlinkMode::Follow => "follow",
        }
    }
}

impl fmt::Display for SymlinkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single child returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingEntry {
    pub name: String,
}

impl ListingEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Backend response for a single path.
///
/// `children` is `None` when the path is not a directory. Any other fields
/// the backend sends are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryListing {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ListingEntry>>,
}

impl DirectoryListing {
    /// Listing for a path that has no children (a file, or nothing at all)
    pub fn leaf() -> Self {
        Self { children: None }
    }

    /// Listing for a directory with the given child names, in order
    pub fn directory<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            children: Some(names.into_iter().map(ListingEntry::new).collect()),
        }
    }

    /// Decode a listing from the backend's JSON body
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`](crate::Error::Parse) if the body is not a
    /// valid listing.
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Whether the backend reported this path as a directory
    pub fn is_directory(&self) -> bool {
        self.children.is_some()
    }
}

/// Fetches directory listings from the host's backend.
///
/// Implementations own transport, timeouts and retries; the path field
/// issues one call per cache miss and propagates any error unchanged.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListingProvider: Send + Sync {
    /// List the children of `path`.
    ///
    /// `path` is always non-empty; the root directory is requested as `/`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot produce a listing.
    async fn get_param(
        &self,
        path: &str,
        symlink: Option<SymlinkMode>,
    ) -> Result<DirectoryListing>;
}

// =============================================================================
// Tests
// =============================================================================
