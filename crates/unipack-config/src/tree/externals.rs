//! Externals predicate.
//!
//! Server bundles run inside a host that already has the installed
//! dependencies, so anything coming from `node_modules` or imported by
//! package name is left to a runtime `require`. Client bundles have no such
//! host and bundle everything.

use serde::ser::{Serialize, SerializeMap, SerializeStruct, Serializer};

use crate::axis::BuildTarget;
use crate::tree::output::LibraryTarget;

/// Directory name holding installed dependencies.
pub const VENDOR_DIRECTORY: &str = "node_modules";

const RELATIVE_MARKER: char = '.';

/// Outcome of classifying one dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Inline the module into the bundle.
    Bundle,
    /// Leave it for the runtime; holds the descriptor, e.g. `commonjs2 react`.
    External(String),
}

impl Classification {
    pub fn is_external(&self) -> bool {
        matches!(self, Classification::External(_))
    }
}

/// Classifies dependencies as externals when they resolve to installed packages.
///
/// Stateless; safe to call from any number of resolver threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InstalledDependencies;

impl InstalledDependencies {
    /// Classify `specifier` as imported from `containing_dir`.
    pub fn classify(&self, containing_dir: &str, specifier: &str) -> Classification {
        if containing_dir.contains(VENDOR_DIRECTORY) || !specifier.starts_with(RELATIVE_MARKER) {
            Classification::External(format!(
                "{} {specifier}",
                LibraryTarget::Commonjs2.as_str()
            ))
        } else {
            Classification::Bundle
        }
    }
}

impl Serialize for InstalledDependencies {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("InstalledDependencies", 2)?;
        state.serialize_field("vendorDirectory", VENDOR_DIRECTORY)?;
        state.serialize_field("libraryTarget", &LibraryTarget::Commonjs2)?;
        state.end()
    }
}

/// The `externals` section of a configuration tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Externals {
    /// Empty mapping; everything is bundled.
    None,
    Predicate(InstalledDependencies),
}

impl Externals {
    pub fn classify(&self, containing_dir: &str, specifier: &str) -> Classification {
        match self {
            Externals::None => Classification::Bundle,
            Externals::Predicate(predicate) => predicate.classify(containing_dir, specifier),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Externals::None)
    }
}

impl Serialize for Externals {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Externals::None => serializer.serialize_map(Some(0))?.end(),
            Externals::Predicate(predicate) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("predicate", predicate)?;
                map.end()
            }
        }
    }
}

/// Externals for one build target.
pub fn build_externals(target: BuildTarget) -> Externals {
    match target {
        BuildTarget::Server => Externals::Predicate(InstalledDependencies),
        BuildTarget::Client => Externals::None,
    }
}
