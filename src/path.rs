//! Parent-directory derivation for partial path input
//!
//! The text typed into a path field is split at its last `/`. Everything
//! before it is the directory whose children are offered as completions;
//! everything after it is the partially typed child name.
//!
//! | Input      | Prefix  | Cache key |
//! |------------|---------|-----------|
//! | `/a/bc`    | `/a`    | `/a`      |
//! | `/a/`      | `/a`    | `/a`      |
//! | `/etc`     | `""`    | `/`       |
//! | `""`       | `""`    | `/`       |
//! | `abc`      | `""`    | `/`       |

/// Key used for the root directory
pub const ROOT: &str = "/";

/// Directory portion of a partial path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParentPath<'a> {
    prefix: &'a str,
}

impl<'a> ParentPath<'a> {
    /// Derive the parent directory from raw field text
    pub fn of(input: &'a str) -> Self {
        let prefix = input.rfind('/').map_or("", |idx| &input[..idx]);
        Self { prefix }
    }

    /// The raw prefix (may be empty)
    pub fn prefix(&self) -> &'a str {
        self.prefix
    }

    /// The prefix normalized for cache lookups and listing requests
    pub fn key(&self) -> &'a str {
        if self.prefix.is_empty() {
            ROOT
        } else {
            self.prefix
        }
    }

    /// Full path of a child of this directory.
    ///
    /// Joins onto the raw prefix, so children of the root come out as
    /// `/name` rather than `//name`.
    pub fn child(&self, name: &str) -> String {
        format!("{}/{}", self.prefix, name)
    }
}
