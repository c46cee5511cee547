//! Commodore 64 media loader.
//!
//! Routes tape images (`.TAP`, `.T64`) and floppy images (`.D64`) into the
//! `tape_*` and `floppy_*` slots and applies the hardware model selection.

use hearth_shared::{MediaFile, Platform};

use super::Loader;
use crate::error::Result;
use crate::store::{ConfigStore, options};

/// Original breadbin C64
pub const C64_MODEL_C64: &str = "c64";
/// Later C64C revision, used when no model is selected
pub const C64_MODEL_C64C: &str = "c64c";

/// Media group for an upper-cased file suffix.
fn media_group(extension: &str) -> Option<&'static str> {
    match extension {
        ".TAP" | ".T64" => Some(options::TAPE),
        ".D64" => Some(options::FLOPPY),
        _ => None,
    }
}

/// Loader for the `c64` platform.
#[derive(Debug, Default)]
pub struct C64Loader;

impl C64Loader {
    pub fn new() -> Self {
        Self
    }
}

impl Loader for C64Loader {
    fn platform(&self) -> Platform {
        Platform::C64
    }

    /// Index `i` counts over the whole list, not per group, so a group's
    /// image slots can be sparse. The first file routed to each group also
    /// fills that group's drive.
    fn load_files(&mut self, config: &mut ConfigStore, files: &[MediaFile]) -> Result<()> {
        let mut drives_filled: Vec<&'static str> = Vec::with_capacity(2);
        for (i, file) in files.iter().enumerate() {
            let extension = file.extension_class();
            let Some(group) = media_group(&extension) else {
                tracing::trace!("Ignoring {} (unhandled extension)", file.name);
                continue;
            };

            let location = file.location();
            tracing::debug!("{} -> {} slot {}", file.name, group, i);
            if !drives_filled.contains(&group) {
                drives_filled.push(group);
                config.set(options::drive_slot(group), location.as_str());
            }
            config.set(options::image_slot(group, i), location.into_string());
        }
        Ok(())
    }

    fn load_extra(&mut self, config: &mut ConfigStore, values: &mut ConfigStore) -> Result<()> {
        let model = match values.get_or_empty(options::MODEL) {
            "" => C64_MODEL_C64C,
            model => model,
        };
        config.set(options::C64_MODEL, model);
        config.clear(options::MODEL);
        values.clear(options::MODEL);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(files: &[MediaFile]) -> ConfigStore {
        let mut config = ConfigStore::new();
        C64Loader::new().load_files(&mut config, files).unwrap();
        config
    }

    #[test]
    fn test_media_group_routing() {
        assert_eq!(media_group(".TAP"), Some("tape"));
        assert_eq!(media_group(".T64"), Some("tape"));
        assert_eq!(media_group(".D64"), Some("floppy"));
        assert_eq!(media_group(".d64"), None);
        assert_eq!(media_group(".PRG"), None);
        assert_eq!(media_group(""), None);
    }

    #[test]
    fn test_mixed_tape_and_floppy_keep_global_indices() {
        let config = load(&[
            MediaFile::new("game.tap", "aaa"),
            MediaFile::new("game2.d64", "bbb"),
            MediaFile::new("game3.d64", "ccc"),
        ]);

        assert_eq!(config.get("tape_drive_0"), Some("sha1://aaa/game.tap"));
        assert_eq!(config.get("tape_image_0"), Some("sha1://aaa/game.tap"));
        assert_eq!(config.get("floppy_image_1"), Some("sha1://bbb/game2.d64"));
        assert_eq!(config.get("floppy_image_2"), Some("sha1://ccc/game3.d64"));
        assert_eq!(config.get("floppy_image_0"), None);
        // The third file does not replace the first floppy in the drive.
        assert_eq!(config.get("floppy_drive_0"), Some("sha1://bbb/game2.d64"));
        assert_eq!(config.len(), 5);
    }

    #[test]
    fn test_each_group_fills_its_own_drive() {
        let config = load(&[
            MediaFile::new("disk.d64", "bbb"),
            MediaFile::new("game.tap", "aaa"),
        ]);

        assert_eq!(config.get("floppy_drive_0"), Some("sha1://bbb/disk.d64"));
        assert_eq!(config.get("floppy_image_0"), Some("sha1://bbb/disk.d64"));
        assert_eq!(config.get("tape_drive_0"), Some("sha1://aaa/game.tap"));
        assert_eq!(config.get("tape_image_1"), Some("sha1://aaa/game.tap"));
        assert_eq!(config.len(), 4);
    }

    #[test]
    fn test_existing_drive_slot_is_replaced() {
        let mut config: ConfigStore = [("floppy_drive_0", "sha1://old/old.d64")]
            .into_iter()
            .collect();
        C64Loader::new()
            .load_files(&mut config, &[MediaFile::new("new.d64", "bbb")])
            .unwrap();
        assert_eq!(config.get("floppy_drive_0"), Some("sha1://bbb/new.d64"));
    }

    #[test]
    fn test_first_floppy_fills_drive() {
        let config = load(&[
            MediaFile::new("disk1.D64", "bbb"),
            MediaFile::new("disk2.d64", "ccc"),
        ]);

        assert_eq!(config.get("floppy_drive_0"), Some("sha1://bbb/disk1.D64"));
        assert_eq!(config.get("floppy_image_0"), Some("sha1://bbb/disk1.D64"));
        assert_eq!(config.get("floppy_image_1"), Some("sha1://ccc/disk2.d64"));
        assert_eq!(config.len(), 3);
    }

    #[test]
    fn test_t64_routes_to_tape() {
        let config = load(&[MediaFile::new("collection.t64", "ddd")]);
        assert_eq!(config.get("tape_drive_0"), Some("sha1://ddd/collection.t64"));
        assert_eq!(config.get("tape_image_0"), Some("sha1://ddd/collection.t64"));
    }

    #[test]
    fn test_unknown_extension_writes_nothing() {
        let config = load(&[MediaFile::new("readme.txt", "eee")]);
        assert!(config.is_empty());
    }

    #[test]
    fn test_unknown_extension_still_consumes_index() {
        let config = load(&[
            MediaFile::new("readme.txt", "eee"),
            MediaFile::new("game.tap", "aaa"),
        ]);
        assert_eq!(config.get("tape_image_1"), Some("sha1://aaa/game.tap"));
        assert_eq!(config.get("tape_drive_0"), Some("sha1://aaa/game.tap"));
        assert_eq!(config.len(), 2);
    }

    #[test]
    fn test_empty_model_uses_default_and_clears_field() {
        let mut config: ConfigStore = [("model", "")].into_iter().collect();
        let mut values: ConfigStore = [("model", "")].into_iter().collect();

        C64Loader::new().load_extra(&mut config, &mut values).unwrap();

        assert_eq!(config.get(options::C64_MODEL), Some(C64_MODEL_C64C));
        assert_eq!(config.get("model"), Some(""));
        assert_eq!(values.get("model"), Some(""));
    }

    #[test]
    fn test_selected_model_is_kept() {
        let mut config = ConfigStore::new();
        let mut values: ConfigStore = [("model", C64_MODEL_C64)].into_iter().collect();

        C64Loader::new().load_extra(&mut config, &mut values).unwrap();

        assert_eq!(config.get(options::C64_MODEL), Some("c64"));
        assert_eq!(config.get("model"), Some(""));
        assert_eq!(values.get("model"), Some(""));
    }

    #[test]
    fn test_missing_model_uses_default() {
        let mut config = ConfigStore::new();
        C64Loader::new()
            .load_extra(&mut config, &mut ConfigStore::new())
            .unwrap();
        assert_eq!(config.get(options::C64_MODEL), Some("c64c"));
    }
}
