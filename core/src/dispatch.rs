//! Dispatch facade
//!
//! The entry point other subsystems use: given a raw platform name,
//! normalize it, look up its descriptor and build loaders and runners on
//! demand. Holds no mutable state.

use hearth_shared::normalize_platform_id;

use crate::context::LaunchContext;
use crate::error::{Capability, DispatchError, Result};
use crate::loader::Loader;
use crate::registry::{self, PlatformDescriptor};
use crate::runner::Runner;

/// Handle for one platform: its canonical id and registered descriptor.
///
/// Unknown names produce a handle over the unsupported descriptor rather
/// than an error.
#[derive(Debug, Clone)]
pub struct PlatformHandler {
    id: String,
    descriptor: &'static PlatformDescriptor,
}

impl PlatformHandler {
    /// Resolve a raw, possibly non-canonical platform name.
    pub fn for_platform(raw: &str) -> Self {
        let id = normalize_platform_id(raw);
        let descriptor = registry::descriptor(&id);
        if descriptor.is_unsupported() {
            tracing::debug!("Platform '{}' (from '{}') is not registered", id, raw);
        }
        Self { id, descriptor }
    }

    /// Canonical identifier (best-effort for unknown platforms).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name, "Unsupported" for unknown platforms.
    pub fn name(&self) -> &'static str {
        self.descriptor.name
    }

    pub fn descriptor(&self) -> &'static PlatformDescriptor {
        self.descriptor
    }

    pub fn is_supported(&self) -> bool {
        !self.descriptor.is_unsupported()
    }

    pub fn has_loader(&self) -> bool {
        self.descriptor.loader.is_some()
    }

    pub fn has_runner(&self) -> bool {
        self.descriptor.runner.is_some()
    }

    fn unavailable(&self, capability: Capability) -> DispatchError {
        tracing::warn!("No {} for platform '{}'", capability, self.id);
        DispatchError::CapabilityUnavailable {
            platform: self.id.clone(),
            capability,
        }
    }

    /// Build this platform's media loader.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::CapabilityUnavailable`] if the platform has no
    /// loader (including unknown platforms).
    pub fn create_loader(&self, ctx: &LaunchContext) -> Result<Box<dyn Loader>> {
        let factory = self
            .descriptor
            .loader
            .ok_or_else(|| self.unavailable(Capability::Loader))?;
        tracing::info!("Creating loader for {} ({})", self.name(), self.id);
        Ok(factory(ctx))
    }

    /// Build this platform's emulator runner.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::CapabilityUnavailable`] if the platform has no
    /// runner (including unknown platforms).
    pub fn create_runner(&self, ctx: &LaunchContext) -> Result<Box<dyn Runner>> {
        let factory = self
            .descriptor
            .runner
            .ok_or_else(|| self.unavailable(Capability::Runner))?;
        tracing::info!("Creating runner for {} ({})", self.name(), self.id);
        Ok(factory(ctx))
    }
}

/// Resolve `raw` and build its loader.
pub fn create_loader(raw: &str, ctx: &LaunchContext) -> Result<Box<dyn Loader>> {
    PlatformHandler::for_platform(raw).create_loader(ctx)
}

/// Resolve `raw` and build its runner.
pub fn create_runner(raw: &str, ctx: &LaunchContext) -> Result<Box<dyn Runner>> {
    PlatformHandler::for_platform(raw).create_runner(ctx)
}
