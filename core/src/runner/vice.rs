//! VICE backend for the Commodore 64.

use std::path::PathBuf;
use std::process::Command;
use std::sync::Arc;

use anyhow::{Result, anyhow, bail};
use hearth_shared::{ContentLocation, Platform};

use super::Runner;
use crate::content::ContentResolver;
use crate::loader::c64::C64_MODEL_C64C;
use crate::store::{ConfigStore, options};

/// Starts `x64sc` (or the configured VICE binary) with the attached media.
///
/// Command shape:
/// `x64sc -model <c64_model> [-1 <tape>] [-8 <floppy>] -autostart <primary>`
/// where the primary image is the floppy drive if set, else the tape drive.
pub struct ViceRunner {
    executable: PathBuf,
    resolver: Arc<dyn ContentResolver>,
}

impl ViceRunner {
    pub fn new(executable: impl Into<PathBuf>, resolver: Arc<dyn ContentResolver>) -> Self {
        Self {
            executable: executable.into(),
            resolver,
        }
    }

    fn resolve_slot(&self, config: &ConfigStore, slot: &str) -> Result<Option<PathBuf>> {
        let value = config.get_or_empty(slot);
        if value.is_empty() {
            return Ok(None);
        }
        let location = ContentLocation::parse(value)
            .ok_or_else(|| anyhow!("Slot '{}' is not a content location: {}", slot, value))?;
        self.resolver
            .resolve(&location)
            .map(Some)
            .ok_or_else(|| anyhow!("Cannot resolve {} in the content store", location))
    }
}

impl Runner for ViceRunner {
    fn platform(&self) -> Platform {
        Platform::C64
    }

    fn command(&self, config: &ConfigStore) -> Result<Command> {
        let tape = self.resolve_slot(config, options::TAPE_DRIVE_0)?;
        let floppy = self.resolve_slot(config, options::FLOPPY_DRIVE_0)?;

        let Some(primary) = floppy.as_ref().or(tape.as_ref()).cloned() else {
            bail!("No tape or floppy image in drive 0");
        };

        let model = match config.get_or_empty(options::C64_MODEL) {
            "" => C64_MODEL_C64C,
            model => model,
        };

        let mut cmd = Command::new(&self.executable);
        cmd.args(["-model", model]);
        if let Some(tape) = &tape {
            cmd.arg("-1").arg(tape);
        }
        if let Some(floppy) = &floppy {
            cmd.arg("-8").arg(floppy);
        }
        cmd.arg("-autostart").arg(primary);
        Ok(cmd)
    }
}
