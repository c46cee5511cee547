//! Shared types for the Hearth launcher.
//!
//! Canonical platform identifiers, the normalizer that maps free-form
//! platform names onto them, and the media references attached to a launch.

pub mod media;
pub mod normalize;
pub mod platform;

pub use media::{ContentLocation, HASH_SCHEME, MediaFile};
pub use normalize::normalize_platform_id;
pub use platform::{Platform, UnknownPlatformId};
