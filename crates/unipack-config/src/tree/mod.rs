//! Configuration tree and its generator.
//!
//! Each section of the tree comes from its own pure builder:
//!
//! - [`entry`] - ordered entry points
//! - [`rules`] - pre-processing and transformation rules
//! - [`output`] - destination, filenames and export format
//! - [`plugins`] - ordered plugin pipeline
//! - [`externals`] - dependency externalization predicate
//!
//! [`generate`] composes them for one `(target, flavor)` pair.

pub mod entry;
pub mod externals;
pub mod output;
pub mod plugins;
pub mod rules;

use std::path::PathBuf;

use serde::Serialize;

use crate::axis::{self, BuildFlavor, BuildTarget, Resolution};
use crate::error::Result;
use crate::settings::{ProjectRoot, Settings};

pub use entry::{HOT_MIDDLEWARE_CLIENT, HOT_POLL_INTERVAL_MS, build_entries, hot_poll_module};
pub use externals::{Classification, Externals, InstalledDependencies, build_externals};
pub use output::{LibraryTarget, OutputSpec, build_output};
pub use plugins::{MangleOptions, Plugin, build_plugins};
pub use rules::{LoaderOptions, ModuleRules, Pattern, Rule, build_rules};

/// Extensions tried, in order, when an import omits one.
pub const RESOLVE_EXTENSIONS: [&str; 5] = ["", ".webpack.js", ".web.js", ".js", ".jsx"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolveOptions {
    pub extensions: Vec<String>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            extensions: RESOLVE_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
        }
    }
}

/// Compilation target understood by the bundler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeTarget {
    Node,
    Web,
}

impl From<BuildTarget> for RuntimeTarget {
    fn from(target: BuildTarget) -> Self {
        match target {
            BuildTarget::Server => RuntimeTarget::Node,
            BuildTarget::Client => RuntimeTarget::Web,
        }
    }
}

/// Node globals kept real in server bundles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NodeShims {
    #[serde(rename = "__dirname")]
    pub dirname: bool,
    #[serde(rename = "__filename")]
    pub filename: bool,
}

/// Source-map strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Devtool {
    CheapModuleEvalSourceMap,
    SourceMap,
}

impl Devtool {
    pub fn for_flavor(flavor: BuildFlavor) -> Self {
        if flavor.is_production() {
            Devtool::SourceMap
        } else {
            Devtool::CheapModuleEvalSourceMap
        }
    }
}

/// Terminal output verbosity of an interactive development server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatsHints {
    pub colors: bool,
    pub chunks: bool,
    pub hash: bool,
    pub version: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DevServerHints {
    pub stats: StatsHints,
}

impl Default for DevServerHints {
    fn default() -> Self {
        Self {
            stats: StatsHints {
                colors: true,
                chunks: false,
                hash: false,
                version: false,
            },
        }
    }
}

/// Complete descriptor of one bundling job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationTree {
    /// Axes this tree was generated for.
    #[serde(skip)]
    pub build_target: BuildTarget,
    #[serde(skip)]
    pub build_flavor: BuildFlavor,

    pub context: PathBuf,
    pub entry: Vec<String>,
    pub resolve: ResolveOptions,
    pub externals: Externals,
    pub module: ModuleRules,
    pub target: RuntimeTarget,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node: Option<NodeShims>,
    pub output: OutputSpec,
    pub devtool: Devtool,
    pub dev_server_hints: DevServerHints,
    pub plugins: Vec<Plugin>,
}

impl ConfigurationTree {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The module the bundler exports as the chunk's value.
    pub fn main_entry(&self) -> &str {
        // build_entries always ends with the main module
        self.entry.last().map(String::as_str).unwrap_or_default()
    }

    pub fn has_plugin(&self, name: &str) -> bool {
        self.plugins.iter().any(|plugin| plugin.name() == name)
    }
}

/// Build the tree for one axis combination.
pub fn generate(target: BuildTarget, flavor: BuildFlavor, root: &ProjectRoot) -> ConfigurationTree {
    tracing::debug!(
        build_target = %target,
        build_flavor = %flavor,
        root = %root.path().display(),
        "generating configuration tree"
    );

    ConfigurationTree {
        build_target: target,
        build_flavor: flavor,
        context: root.source_dir(),
        entry: build_entries(target, flavor),
        resolve: ResolveOptions::default(),
        externals: build_externals(target),
        module: build_rules(target, flavor),
        target: target.into(),
        node: target.is_server().then_some(NodeShims {
            dirname: true,
            filename: true,
        }),
        output: build_output(target, flavor, root),
        devtool: Devtool::for_flavor(flavor),
        dev_server_hints: DevServerHints::default(),
        plugins: build_plugins(target, flavor),
    }
}

/// Generator bound to host settings.
///
/// Axes not given explicitly fall back to the ambient values captured in
/// [`Settings`], then to `server` / `production`.
#[derive(Debug, Clone)]
pub struct Generator {
    settings: Settings,
}

impl Generator {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Resolve axes from loose strings against the ambient values.
    pub fn resolve(&self, target: Option<&str>, flavor: Option<&str>) -> Resolution {
        axis::resolve(
            target,
            flavor,
            self.settings.build_type.as_deref(),
            self.settings.node_env.as_deref(),
        )
    }

    pub fn generate(
        &self,
        target: Option<BuildTarget>,
        flavor: Option<BuildFlavor>,
    ) -> ConfigurationTree {
        self.generate_from_strs(target.map(BuildTarget::as_str), flavor.map(BuildFlavor::as_str))
    }

    /// Like [`Generator::generate`] for unparsed axis values; unknown values
    /// are clamped to the defaults.
    pub fn generate_from_strs(
        &self,
        target: Option<&str>,
        flavor: Option<&str>,
    ) -> ConfigurationTree {
        let (target, flavor) = self.resolve(target, flavor).axes();
        generate(target, flavor, &self.settings.root)
    }
}
