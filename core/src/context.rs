//! Context handed to loader and runner factories.

use std::sync::Arc;

use crate::content::{ContentResolver, ShardedStore};
use crate::settings::Settings;

/// Everything a loader or runner may need from the launcher.
#[derive(Clone)]
pub struct LaunchContext {
    pub settings: Settings,
    pub resolver: Arc<dyn ContentResolver>,
}

impl LaunchContext {
    /// Context backed by a [`ShardedStore`] at the configured store root.
    pub fn new(settings: Settings) -> Self {
        let resolver = Arc::new(ShardedStore::new(settings.content.store.clone()));
        Self { settings, resolver }
    }

    pub fn with_resolver(settings: Settings, resolver: Arc<dyn ContentResolver>) -> Self {
        Self { settings, resolver }
    }
}

impl Default for LaunchContext {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl std::fmt::Debug for LaunchContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LaunchContext")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
