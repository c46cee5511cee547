//! Attached media references and content-addressed locations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// URI scheme used for content-addressed locations.
pub const HASH_SCHEME: &str = "sha1";

/// A file attached to a launch, identified by name and content hash.
///
/// The hash is computed by the content store; nothing here hashes files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaFile {
    /// Original file name (e.g. `"game.d64"`)
    pub name: String,
    /// Hex SHA-1 of the file contents
    pub sha1: String,
}

impl MediaFile {
    pub fn new(name: impl Into<String>, sha1: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sha1: sha1.into(),
        }
    }

    /// Upper-cased file suffix including the dot, e.g. `".TAP"`.
    ///
    /// Empty when the name has no suffix. A leading dot alone (`".hidden"`)
    /// does not count as a suffix.
    pub fn extension_class(&self) -> String {
        let file_name = self
            .name
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.name.as_str());
        match file_name.rfind('.') {
            Some(pos) if file_name[..pos].chars().any(|c| c != '.') => {
                file_name[pos..].to_uppercase()
            }
            _ => String::new(),
        }
    }

    /// Content-addressed location of this file.
    pub fn location(&self) -> ContentLocation {
        ContentLocation::new(&self.sha1, &self.name)
    }
}

/// Reference to a file by content hash: `sha1://<hash>/<name>`.
///
/// Deterministic for a given hash and name, and carries no other path
/// information.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentLocation(String);

impl ContentLocation {
    pub fn new(hash: &str, name: &str) -> Self {
        Self(format!("{HASH_SCHEME}://{hash}/{name}"))
    }

    /// Parse a location string previously produced by [`ContentLocation::new`].
    ///
    /// Returns `None` for other schemes or an empty hash.
    pub fn parse(s: &str) -> Option<Self> {
        let rest = s.strip_prefix(HASH_SCHEME)?.strip_prefix("://")?;
        let (hash, _name) = rest.split_once('/')?;
        if hash.is_empty() {
            return None;
        }
        Some(Self(s.to_string()))
    }

    fn body(&self) -> &str {
        self.0
            .strip_prefix(HASH_SCHEME)
            .and_then(|rest| rest.strip_prefix("://"))
            .unwrap_or("")
    }

    /// The content hash component.
    pub fn hash(&self) -> &str {
        self.body().split_once('/').map_or("", |(hash, _)| hash)
    }

    /// The original file name component.
    pub fn name(&self) -> &str {
        self.body().split_once('/').map_or("", |(_, name)| name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ContentLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
