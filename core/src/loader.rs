//! Media loading abstraction
//!
//! A [`Loader`] turns an "attach media" event (a list of files plus a few
//! auxiliary fields) into configuration slots for one platform. Each
//! platform implements its own routing rules; callers only see the trait.

pub mod c64;

use hearth_shared::{MediaFile, Platform};

use crate::error::{DispatchError, Result};
use crate::store::{ConfigStore, options};

pub use c64::C64Loader;

/// Trait for platform-specific media loaders.
///
/// For a single attach event, [`load_files`](Loader::load_files) runs first,
/// then [`load_extra`](Loader::load_extra). Both mutate a configuration store
/// owned by the caller; loaders must not keep it beyond the call.
///
/// # Example
///
/// ```
/// use hearth_core::loader::{C64Loader, Loader};
/// use hearth_core::store::ConfigStore;
///
/// let mut loader = C64Loader::new();
/// let mut config = ConfigStore::new();
/// let mut values: ConfigStore = [
///     ("file_list", r#"[{"name": "game.d64", "sha1": "bbb"}]"#),
///     ("model", ""),
/// ]
/// .into_iter()
/// .collect();
///
/// loader.load(&mut config, &mut values).unwrap();
/// assert_eq!(config.get("floppy_drive_0"), Some("sha1://bbb/game.d64"));
/// ```
pub trait Loader: Send {
    /// Platform this loader writes configuration for.
    fn platform(&self) -> Platform;

    /// Route attached files into media slots.
    ///
    /// Order matters: the first file of a routing class becomes the primary
    /// drive. Files the platform does not understand are ignored.
    fn load_files(&mut self, config: &mut ConfigStore, files: &[MediaFile]) -> Result<()>;

    /// Apply auxiliary fields (model/variant selection and similar).
    fn load_extra(&mut self, _config: &mut ConfigStore, _values: &mut ConfigStore) -> Result<()> {
        Ok(())
    }

    /// Decode the `file_list` field of `values` and run both stages.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::MalformedInput`] when `file_list` is missing
    /// or is not a JSON list of `{name, sha1}` objects. Nothing is written
    /// to `config` in that case.
    fn load(&mut self, config: &mut ConfigStore, values: &mut ConfigStore) -> Result<()> {
        let raw = values.get(options::FILE_LIST).ok_or_else(|| {
            DispatchError::MalformedInput(format!("missing '{}' field", options::FILE_LIST))
        })?;
        let files = decode_file_list(raw)?;
        tracing::debug!(
            "Loading {} file(s) for platform {}",
            files.len(),
            self.platform()
        );
        self.load_files(config, &files)?;
        self.load_extra(config, values)
    }
}

/// Decode the structured file list of an attach event.
///
/// # Errors
///
/// Returns [`DispatchError::MalformedInput`] if `raw` is not a JSON array of
/// objects with string `name` and `sha1` fields.
pub fn decode_file_list(raw: &str) -> Result<Vec<MediaFile>> {
    Ok(serde_json::from_str(raw)?)
}

/// Encode a file list in the shape [`decode_file_list`] accepts.
pub fn encode_file_list(files: &[MediaFile]) -> Result<String> {
    Ok(serde_json::to_string(files)?)
}
