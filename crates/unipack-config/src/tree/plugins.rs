//! Plugin pipeline builder.
//!
//! Plugins run in listed order. The id-assignment plugin always comes first;
//! the rest depends on the flavor.

use indexmap::IndexMap;
use serde::Serialize;

use crate::axis::{BuildFlavor, BuildTarget};

/// Banner installing source-map support in server entry chunks.
pub const SOURCE_MAP_SUPPORT_BANNER: &str = r#"require("source-map-support").install();"#;

/// Compile-time constant holding the runtime environment indicator.
pub const NODE_ENV_CONSTANT: &str = "process.env.NODE_ENV";

/// Identifier-mangling options of the minifier.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MangleOptions {
    /// Identifiers preserved from mangling.
    pub except: Vec<String>,
}

/// A build-time plugin descriptor, named as the bundler knows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "name", content = "options")]
pub enum Plugin {
    /// Deterministic module/chunk id assignment by occurrence count.
    #[serde(rename = "OccurenceOrderPlugin", rename_all = "camelCase")]
    OccurrenceOrder { prefer_entry: bool },

    /// Text prepended to generated chunks.
    #[serde(rename = "BannerPlugin", rename_all = "camelCase")]
    Banner {
        banner: String,
        raw: bool,
        entry_only: bool,
    },

    #[serde(rename = "HotModuleReplacementPlugin")]
    HotModuleReplacement,

    /// Skip emitting assets when compilation fails.
    #[serde(rename = "NoErrorsPlugin")]
    NoErrors,

    /// Merge structurally identical modules. Unsafe under watch builds.
    #[serde(rename = "DedupePlugin")]
    Dedupe,

    /// Compile-time constants; values are JSON source text.
    #[serde(rename = "DefinePlugin")]
    Define(IndexMap<String, String>),

    #[serde(rename = "UglifyJsPlugin", rename_all = "camelCase")]
    UglifyJs {
        source_map: bool,
        mangle: MangleOptions,
    },
}

impl Plugin {
    pub fn name(&self) -> &'static str {
        match self {
            Plugin::OccurrenceOrder { .. } => "OccurenceOrderPlugin",
            Plugin::Banner { .. } => "BannerPlugin",
            Plugin::HotModuleReplacement => "HotModuleReplacementPlugin",
            Plugin::NoErrors => "NoErrorsPlugin",
            Plugin::Dedupe => "DedupePlugin",
            Plugin::Define(_) => "DefinePlugin",
            Plugin::UglifyJs { .. } => "UglifyJsPlugin",
        }
    }

    pub fn is_minifier(&self) -> bool {
        matches!(self, Plugin::UglifyJs { .. })
    }

    pub fn is_hot_module_replacement(&self) -> bool {
        matches!(self, Plugin::HotModuleReplacement)
    }
}

/// Ordered plugin pipeline for one axis combination.
pub fn build_plugins(target: BuildTarget, flavor: BuildFlavor) -> Vec<Plugin> {
    let mut plugins = vec![Plugin::OccurrenceOrder { prefer_entry: true }];

    if flavor.is_production() {
        plugins.push(Plugin::Dedupe);
        plugins.push(production_define());
        plugins.push(Plugin::UglifyJs {
            source_map: false,
            mangle: MangleOptions::default(),
        });
    } else {
        if target.is_server() {
            plugins.push(Plugin::Banner {
                banner: SOURCE_MAP_SUPPORT_BANNER.to_string(),
                raw: true,
                entry_only: true,
            });
        }
        plugins.push(Plugin::HotModuleReplacement);
        plugins.push(Plugin::NoErrors);
    }

    plugins
}

fn production_define() -> Plugin {
    let mut definitions = IndexMap::new();
    // Values are JSON source, so the string literal keeps its quotes.
    let value = serde_json::Value::from(BuildFlavor::Production.as_str());
    definitions.insert(NODE_ENV_CONSTANT.to_string(), value.to_string());
    Plugin::Define(definitions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(target: BuildTarget, flavor: BuildFlavor) -> Vec<&'static str> {
        build_plugins(target, flavor).iter().map(Plugin::name).collect()
    }

    #[test]
    fn server_development_pipeline() {
        assert_eq!(
            names(BuildTarget::Server, BuildFlavor::Development),
            vec![
                "OccurenceOrderPlugin",
                "BannerPlugin",
                "HotModuleReplacementPlugin",
                "NoErrorsPlugin"
            ]
        );
    }

    #[test]
    fn client_development_pipeline_has_no_banner() {
        assert_eq!(
            names(BuildTarget::Client, BuildFlavor::Development),
            vec![
                "OccurenceOrderPlugin",
                "HotModuleReplacementPlugin",
                "NoErrorsPlugin"
            ]
        );
    }

    #[test]
    fn production_pipeline_is_target_independent() {
        let expected = vec![
            "OccurenceOrderPlugin",
            "DedupePlugin",
            "DefinePlugin",
            "UglifyJsPlugin",
        ];
        assert_eq!(names(BuildTarget::Server, BuildFlavor::Production), expected);
        assert_eq!(names(BuildTarget::Client, BuildFlavor::Production), expected);
    }

    #[test]
    fn banner_is_raw_and_entry_only() {
        let plugins = build_plugins(BuildTarget::Server, BuildFlavor::Development);
        assert_eq!(
            plugins[1],
            Plugin::Banner {
                banner: SOURCE_MAP_SUPPORT_BANNER.to_string(),
                raw: true,
                entry_only: true,
            }
        );
    }

    #[test]
    fn define_fixes_node_env_to_production() {
        let plugins = build_plugins(BuildTarget::Client, BuildFlavor::Production);
        let Plugin::Define(definitions) = &plugins[2] else {
            panic!("expected DefinePlugin, got {:?}", plugins[2]);
        };
        assert_eq!(definitions[NODE_ENV_CONSTANT], "\"production\"");
    }

    #[test]
    fn plugins_serialize_with_bundler_names() {
        let plugins = build_plugins(BuildTarget::Client, BuildFlavor::Production);
        let value = serde_json::to_value(&plugins).unwrap();
        assert_eq!(value[0]["name"], "OccurenceOrderPlugin");
        assert_eq!(value[0]["options"]["preferEntry"], true);
        assert_eq!(value[2]["options"]["process.env.NODE_ENV"], "\"production\"");
        assert_eq!(value[3]["options"]["sourceMap"], false);
        assert_eq!(value[3]["options"]["mangle"]["except"], serde_json::json!([]));
    }
}
