//! Pre-built trees for every axis combination.
//!
//! A [`Registry`] holds the four `(flavor, target)` trees plus a default
//! tree chosen from the ambient settings. It is built once by the host at
//! startup; later environment changes do not affect it.

use serde::Serialize;

use crate::axis::{BuildFlavor, BuildTarget};
use crate::settings::Settings;
use crate::tree::{ConfigurationTree, Generator, generate};

/// Server and client trees of one flavor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetPair {
    pub server: ConfigurationTree,
    pub client: ConfigurationTree,
}

impl TargetPair {
    fn build(flavor: BuildFlavor, settings: &Settings) -> Self {
        Self {
            server: generate(BuildTarget::Server, flavor, &settings.root),
            client: generate(BuildTarget::Client, flavor, &settings.root),
        }
    }

    pub fn get(&self, target: BuildTarget) -> &ConfigurationTree {
        match target {
            BuildTarget::Server => &self.server,
            BuildTarget::Client => &self.client,
        }
    }
}

/// The default tree at the root plus named `production` and `development` groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registry {
    #[serde(flatten)]
    default: ConfigurationTree,
    production: TargetPair,
    development: TargetPair,
}

impl Registry {
    pub fn build(settings: &Settings) -> Self {
        let default = Generator::new(settings.clone()).generate(None, None);
        tracing::debug!(
            build_target = %default.build_target,
            build_flavor = %default.build_flavor,
            "selected default configuration tree"
        );

        Self {
            default,
            production: TargetPair::build(BuildFlavor::Production, settings),
            development: TargetPair::build(BuildFlavor::Development, settings),
        }
    }

    pub fn default_tree(&self) -> &ConfigurationTree {
        &self.default
    }

    pub fn production(&self) -> &TargetPair {
        &self.production
    }

    pub fn development(&self) -> &TargetPair {
        &self.development
    }

    pub fn get(&self, flavor: BuildFlavor, target: BuildTarget) -> &ConfigurationTree {
        match flavor {
            BuildFlavor::Production => self.production.get(target),
            BuildFlavor::Development => self.development.get(target),
        }
    }

    /// All four named trees: production before development, server before client.
    pub fn iter(&self) -> impl Iterator<Item = (BuildFlavor, BuildTarget, &ConfigurationTree)> {
        BuildFlavor::ALL.into_iter().flat_map(move |flavor| {
            BuildTarget::ALL
                .into_iter()
                .map(move |target| (flavor, target, self.get(flavor, target)))
        })
    }

    pub fn to_json_pretty(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
