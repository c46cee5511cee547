//! Hearth Core - platform identification and dispatch
//!
//! This crate maps platform names onto registered platforms and builds the
//! per-platform components that prepare and start an emulation backend.
//!
//! # Architecture
//!
//! - [`registry`] - Canonical id → [`PlatformDescriptor`] table
//! - [`PlatformHandler`] - Facade that normalizes names and builds components
//! - [`Loader`] - Turns attached media into configuration slots
//! - [`Runner`] - Starts the emulator backend from a configuration
//! - [`ConfigStore`] - Slot name → value mapping shared between the two

pub mod content;
pub mod context;
pub mod dispatch;
pub mod error;
pub mod loader;
pub mod registry;
pub mod runner;
pub mod settings;
pub mod store;

pub use content::{ContentResolver, ShardedStore};
pub use context::LaunchContext;
pub use dispatch::{PlatformHandler, create_loader, create_runner};
pub use error::{Capability, DispatchError, Result};
pub use loader::{C64Loader, Loader, decode_file_list};
pub use registry::{PlatformDescriptor, UNSUPPORTED, descriptor, platform_ids, platform_name};
pub use runner::{Runner, ViceRunner};
pub use settings::Settings;
pub use store::{ConfigStore, options};

// Re-export shared types for convenience
pub use hearth_shared::{ContentLocation, MediaFile, Platform, normalize_platform_id};
