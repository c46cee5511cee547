//! Content store abstraction
//!
//! Configuration slots reference files by content hash. Runners need real
//! paths, so they ask a [`ContentResolver`] to map locations onto the store.

use std::path::PathBuf;

use hearth_shared::ContentLocation;

/// Trait for mapping content-addressed locations to files on disk.
///
/// The launcher provides the implementation; runners stay agnostic of the
/// store layout.
pub trait ContentResolver: Send + Sync {
    /// Path where the content for `location` is stored.
    ///
    /// Returns `None` if the location cannot be mapped by this store.
    fn resolve(&self, location: &ContentLocation) -> Option<PathBuf>;
}

/// Store that shards objects by the first two hash characters:
/// `<root>/<hash[0..2]>/<hash>`.
#[derive(Debug, Clone)]
pub struct ShardedStore {
    root: PathBuf,
}

impl ShardedStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ContentResolver for ShardedStore {
    fn resolve(&self, location: &ContentLocation) -> Option<PathBuf> {
        let hash = location.hash();
        let valid = hash.len() > 2 && hash.chars().all(|c| c.is_ascii_hexdigit());
        if !valid {
            return None;
        }
        let hash = hash.to_ascii_lowercase();
        Some(self.root.join(&hash[..2]).join(&hash))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sharded_layout() {
        let store = ShardedStore::new("/store");
        let location = ContentLocation::new("ABCDEF0123", "game.d64");
        assert_eq!(
            store.resolve(&location),
            Some(PathBuf::from("/store/ab/abcdef0123"))
        );
    }

    #[test]
    fn test_rejects_non_hex_hashes() {
        let store = ShardedStore::new("/store");
        assert_eq!(store.resolve(&ContentLocation::new("..", "x")), None);
        assert_eq!(store.resolve(&ContentLocation::new("aa", "x")), None);
        assert_eq!(store.resolve(&ContentLocation::new("zz/../etc", "x")), None);
    }
}
