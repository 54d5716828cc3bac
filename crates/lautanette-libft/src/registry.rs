//! Suite registry - which suite implementations exist
//!
//! Which of them participate in a given run is decided by `Unified`.

use crate::suite::{SuiteDescriptor, SuiteTier};
use crate::suites;
use std::path::Path;
use tracing::warn;

/// Ordered list of known suites
#[derive(Debug, Clone, PartialEq)]
pub struct SuiteRegistry {
    descriptors: Vec<SuiteDescriptor>,
}

impl Default for SuiteRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SuiteRegistry {
    pub fn new(descriptors: Vec<SuiteDescriptor>) -> Self {
        Self { descriptors }
    }

    /// fsoares baseline, then tripouille, alelievr and war-machine
    pub fn builtin() -> Self {
        Self::new(suites::builtin_descriptors())
    }

    pub fn descriptors(&self) -> &[SuiteDescriptor] {
        &self.descriptors
    }

    pub fn get(&self, name: &str) -> Option<&SuiteDescriptor> {
        self.descriptors.iter().find(|d| d.name == name)
    }

    pub fn baseline(&self) -> impl Iterator<Item = &SuiteDescriptor> {
        self.tier(SuiteTier::Baseline)
    }

    pub fn compat(&self) -> impl Iterator<Item = &SuiteDescriptor> {
        self.tier(SuiteTier::Compat)
    }

    fn tier(&self, tier: SuiteTier) -> impl Iterator<Item = &SuiteDescriptor> {
        self.descriptors.iter().filter(move |d| d.tier == tier)
    }

    /// Compatibility suites, if every one of them is available
    ///
    /// A single unavailable suite drops the whole set with one warning.
    pub fn load_compat(&self, tests_root: &Path) -> Vec<SuiteDescriptor> {
        let mut loaded = Vec::new();
        for descriptor in self.compat() {
            if let Err(reason) = descriptor.check_available(tests_root) {
                warn!(suite = descriptor.name, "Failed to load compatibility suites: {}", reason);
                return Vec::new();
            }
            loaded.push(*descriptor);
        }
        loaded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_builtin_order() {
        let registry = SuiteRegistry::builtin();
        let names: Vec<_> = registry.descriptors().iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["fsoares", "tripouille", "alelievr", "war-machine"]);

        let baseline: Vec<_> = registry.baseline().map(|d| d.name).collect();
        assert_eq!(baseline, vec!["fsoares"]);
    }

    #[test]
    fn test_load_compat_all_available() {
        let temp = tempfile::tempdir().unwrap();
        let registry = SuiteRegistry::builtin();
        for descriptor in registry.compat() {
            fs::create_dir(temp.path().join(descriptor.folder)).unwrap();
        }

        let loaded: Vec<_> = registry
            .load_compat(temp.path())
            .iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(loaded, vec!["tripouille", "alelievr", "war-machine"]);
    }

    #[test]
    fn test_load_compat_is_all_or_nothing() {
        let temp = tempfile::tempdir().unwrap();
        fs::create_dir(temp.path().join("Tripouille")).unwrap();
        fs::create_dir(temp.path().join("alelievr")).unwrap();

        let registry = SuiteRegistry::builtin();
        assert!(registry.load_compat(temp.path()).is_empty());
    }

    #[test]
    fn test_get() {
        let registry = SuiteRegistry::builtin();
        assert_eq!(registry.get("alelievr").map(|d| d.folder), Some("alelievr"));
        assert!(registry.get("unknown").is_none());
    }
}
