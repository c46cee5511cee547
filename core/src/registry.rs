//! Platform registry
//!
//! Maps canonical platform identifiers to [`PlatformDescriptor`]s: the
//! display name plus the factories that build each platform's loader and
//! runner.
//!
//! # Lifecycle
//!
//! The table is built on first access and never changes afterwards. There is
//! no dynamic registration; the sorted id list is cached for the lifetime of
//! the process.
//!
//! # Adding a Platform
//!
//! 1. Add a `Platform` variant in hearth_shared (with its canonical id)
//! 2. Add any aliases to the normalizer
//! 3. Implement `Loader` and/or `Runner` for it in this crate
//! 4. Register the factories in `descriptor_for()`

use std::sync::LazyLock;

use hashbrown::HashMap;
use hearth_shared::Platform;

use crate::context::LaunchContext;
use crate::loader::{C64Loader, Loader};
use crate::runner::{Runner, ViceRunner};

/// Builds a platform's loader.
pub type LoaderFactory = fn(&LaunchContext) -> Box<dyn Loader>;

/// Builds a platform's runner.
pub type RunnerFactory = fn(&LaunchContext) -> Box<dyn Runner>;

/// Immutable description of a platform and what it can do.
///
/// A factory set to `None` means the platform is known but that capability
/// is not implemented. Descriptors are only handed out by reference into
/// the static table.
#[derive(Debug)]
pub struct PlatformDescriptor {
    /// Display name (e.g. "Commodore 64")
    pub name: &'static str,
    /// Loader constructor, if media loading is implemented
    pub loader: Option<LoaderFactory>,
    /// Runner constructor, if launching is implemented
    pub runner: Option<RunnerFactory>,
}

impl PlatformDescriptor {
    pub const fn new(
        name: &'static str,
        loader: Option<LoaderFactory>,
        runner: Option<RunnerFactory>,
    ) -> Self {
        Self {
            name,
            loader,
            runner,
        }
    }

    /// True for the [`UNSUPPORTED`] sentinel.
    pub fn is_unsupported(&self) -> bool {
        std::ptr::eq(self, &UNSUPPORTED)
    }
}

/// Descriptor returned for identifiers that are not registered.
pub static UNSUPPORTED: PlatformDescriptor = PlatformDescriptor::new("Unsupported", None, None);

fn c64_loader(_ctx: &LaunchContext) -> Box<dyn Loader> {
    Box::new(C64Loader::new())
}

fn c64_runner(ctx: &LaunchContext) -> Box<dyn Runner> {
    Box::new(ViceRunner::new(
        ctx.settings.emulators.vice.clone(),
        ctx.resolver.clone(),
    ))
}

/// Static registration for one platform.
fn descriptor_for(platform: Platform) -> PlatformDescriptor {
    let name = platform.display_name();
    match platform {
        Platform::C64 => PlatformDescriptor::new(
            name,
            Some(c64_loader as LoaderFactory),
            Some(c64_runner as RunnerFactory),
        ),
        // Loaders and runners for the remaining platforms live outside this crate.
        _ => PlatformDescriptor::new(name, None, None),
    }
}

static DESCRIPTORS: LazyLock<HashMap<&'static str, PlatformDescriptor>> = LazyLock::new(|| {
    let table: HashMap<_, _> = Platform::ALL
        .into_iter()
        .map(|platform| (platform.as_str(), descriptor_for(platform)))
        .collect();
    tracing::debug!("Platform registry initialized with {} entries", table.len());
    table
});

static PLATFORM_IDS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    let mut ids: Vec<_> = DESCRIPTORS.keys().copied().collect();
    ids.sort_unstable();
    ids
});

/// Look up the descriptor for a canonical platform identifier.
///
/// The identifier is lower-cased before lookup. Unknown identifiers return
/// [`UNSUPPORTED`]; this never fails.
pub fn descriptor(platform_id: &str) -> &'static PlatformDescriptor {
    let descriptors: &'static HashMap<&'static str, PlatformDescriptor> = &DESCRIPTORS;
    descriptors
        .get(platform_id.to_lowercase().as_str())
        .unwrap_or(&UNSUPPORTED)
}

/// All registered platform identifiers, sorted ascending.
pub fn platform_ids() -> &'static [&'static str] {
    &PLATFORM_IDS
}

/// Display name for a platform identifier ("Unsupported" if unknown).
pub fn platform_name(platform_id: &str) -> &'static str {
    descriptor(platform_id).name
}
