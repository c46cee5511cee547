//! Configuration key-value store written by loaders and read by runners.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Stable configuration slot names.
///
/// Other components key off these names; a loader must reuse them rather
/// than invent new slots for the same role.
pub mod options {
    /// Selected C64 hardware model
    pub const C64_MODEL: &str = "c64_model";
    /// Transient model/variant field supplied with an attach event
    pub const MODEL: &str = "model";
    /// JSON-encoded list of attached media files
    pub const FILE_LIST: &str = "file_list";

    /// Tape media group
    pub const TAPE: &str = "tape";
    /// Floppy media group
    pub const FLOPPY: &str = "floppy";

    /// `tape_drive_0`
    pub const TAPE_DRIVE_0: &str = "tape_drive_0";
    /// `floppy_drive_0`
    pub const FLOPPY_DRIVE_0: &str = "floppy_drive_0";

    /// Primary drive slot for a media group: `<group>_drive_0`.
    pub fn drive_slot(group: &str) -> String {
        format!("{group}_drive_0")
    }

    /// Image list slot for a media group: `<group>_image_<index>`.
    pub fn image_slot(group: &str, index: usize) -> String {
        format!("{group}_image_{index}")
    }
}

/// Ordered mapping from slot name to value.
///
/// Owned by the caller; loaders only borrow it for the duration of a call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigStore {
    values: BTreeMap<String, String>,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Value of `key`, or the empty string when unset.
    pub fn get_or_empty(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Reset a slot to the empty string.
    ///
    /// The key stays present so downstream readers see it was consumed.
    pub fn clear(&mut self, key: &str) {
        self.values.insert(key.to_string(), String::new());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ConfigStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
