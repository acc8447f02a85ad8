//! Addon directory listing
//!
//! Enabling and discovering addons happens elsewhere; the dispatch core only
//! needs the current `{id, dir}` list to decide which code owns a file.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// An enabled addon and its root directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Addon {
    pub id: String,
    pub dir: PathBuf,
}

impl Addon {
    pub fn new(id: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        Self {
            id: id.into(),
            dir: dir.into(),
        }
    }
}

/// Source of the currently enabled addons
pub trait AddonDirectory: Send + Sync {
    /// Enabled addons in enable order
    fn list(&self) -> Vec<Addon>;
}

/// In-memory addon list, safe to grow while requests are being served
#[derive(Debug, Default)]
pub struct AddonRegistry {
    addons: RwLock<Vec<Addon>>,
}

impl AddonRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable an addon. Re-enabling an id replaces its directory in place.
    pub fn enable(&self, id: impl Into<String>, dir: impl Into<PathBuf>) {
        let addon = Addon::new(id, dir);
        debug!("Enabling addon {} at {:?}", addon.id, addon.dir);

        let mut addons = self.addons.write();
        match addons.iter_mut().find(|existing| existing.id == addon.id) {
            Some(existing) => existing.dir = addon.dir,
            None => addons.push(addon),
        }
    }
}

impl AddonDirectory for AddonRegistry {
    fn list(&self) -> Vec<Addon> {
        self.addons.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enable_preserves_order() {
        let registry = AddonRegistry::new();
        registry.enable("vendor/one", "/srv/addons/one");
        registry.enable("vendor/two", "/srv/addons/two");

        let ids: Vec<String> = registry.list().into_iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["vendor/one", "vendor/two"]);
    }

    #[test]
    fn test_reenable_replaces_dir() {
        let registry = AddonRegistry::new();
        registry.enable("vendor/one", "/old");
        registry.enable("vendor/one", "/new");

        assert_eq!(registry.list(), vec![Addon::new("vendor/one", "/new")]);
    }
}
