//! Module rule builder.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Serialize, Serializer};

use crate::axis::{BuildFlavor, BuildTarget};

static JSON_FILES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.json$").expect("valid pattern"));
static JSX_FILES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.jsx$").expect("valid pattern"));
static VENDOR_FILES: LazyLock<Regex> = LazyLock::new(|| Regex::new("node_modules").expect("valid pattern"));
static MINIFIED_FILES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.min\.js").expect("valid pattern"));

/// Transform plugin that lets async helpers run in a server runtime.
pub const RUNTIME_TRANSFORM_PLUGIN: &str = "transform-runtime";

/// A compiled file pattern. Compares and serializes by its source text.
#[derive(Clone)]
pub struct Pattern(Regex);

impl Pattern {
    fn fixed(re: &LazyLock<Regex>) -> Self {
        Self(Regex::clone(re))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.0.is_match(path)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.as_str())
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Pattern {}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Options passed to the component-syntax loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoaderOptions {
    /// Persistent compilation cache.
    pub cache_directory: bool,

    /// Extra transformation plugins, in order.
    pub plugins: Vec<String>,
}

/// A pattern-matched transformation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    pub test: Pattern,
    pub exclude: Pattern,
    pub loader: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<LoaderOptions>,
}

impl Rule {
    /// Whether this rule transforms the module at `path`.
    pub fn applies_to(&self, path: &str) -> bool {
        self.test.is_match(path) && !self.exclude.is_match(path)
    }
}

/// The `module` section of a configuration tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleRules {
    pub pre_rules: Vec<Rule>,
    pub rules: Vec<Rule>,
    pub no_parse: Pattern,
}

impl ModuleRules {
    /// Whether `path` names an already-minified file the bundler should not parse.
    pub fn skips_parsing(&self, path: &str) -> bool {
        self.no_parse.is_match(path)
    }

    /// Loaders applied to `path`, pre-rules first.
    pub fn loaders_for<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pre_rules
            .iter()
            .chain(&self.rules)
            .filter(move |rule| rule.applies_to(path))
            .map(|rule| rule.loader.as_str())
    }
}

/// Rules for one axis combination.
pub fn build_rules(target: BuildTarget, flavor: BuildFlavor) -> ModuleRules {
    let json = Rule {
        test: Pattern::fixed(&JSON_FILES),
        exclude: Pattern::fixed(&VENDOR_FILES),
        loader: "json".to_string(),
        options: None,
    };

    let mut plugins = Vec::new();
    if !flavor.is_production() && target.is_server() {
        plugins.push(RUNTIME_TRANSFORM_PLUGIN.to_string());
    }

    let jsx = Rule {
        test: Pattern::fixed(&JSX_FILES),
        exclude: Pattern::fixed(&VENDOR_FILES),
        loader: "babel".to_string(),
        options: Some(LoaderOptions {
            cache_directory: true,
            plugins,
        }),
    };

    ModuleRules {
        pre_rules: vec![json],
        rules: vec![jsx],
        no_parse: Pattern::fixed(&MINIFIED_FILES),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jsx_plugins(target: BuildTarget, flavor: BuildFlavor) -> Vec<String> {
        let rules = build_rules(target, flavor);
        rules.rules[0].options.clone().unwrap().plugins
    }

    #[test]
    fn runtime_transform_only_for_server_development() {
        assert_eq!(
            jsx_plugins(BuildTarget::Server, BuildFlavor::Development),
            vec![RUNTIME_TRANSFORM_PLUGIN]
        );
        assert!(jsx_plugins(BuildTarget::Server, BuildFlavor::Production).is_empty());
        assert!(jsx_plugins(BuildTarget::Client, BuildFlavor::Development).is_empty());
        assert!(jsx_plugins(BuildTarget::Client, BuildFlavor::Production).is_empty());
    }

    #[test]
    fn cache_directory_always_on() {
        for target in BuildTarget::ALL {
            for flavor in BuildFlavor::ALL {
                let rules = build_rules(target, flavor);
                assert!(rules.rules[0].options.as_ref().unwrap().cache_directory);
            }
        }
    }

    #[test]
    fn rules_skip_vendor_files() {
        let rules = build_rules(BuildTarget::Client, BuildFlavor::Production);
        assert_eq!(
            rules.loaders_for("/app/src/data/en.json").collect::<Vec<_>>(),
            vec!["json"]
        );
        assert_eq!(
            rules.loaders_for("/app/src/App.jsx").collect::<Vec<_>>(),
            vec!["babel"]
        );
        assert_eq!(
            rules
                .loaders_for("/app/node_modules/pkg/data.json")
                .count(),
            0
        );
        assert_eq!(rules.loaders_for("/app/src/index.js").count(), 0);
    }

    #[test]
    fn minified_files_are_not_parsed() {
        let rules = build_rules(BuildTarget::Server, BuildFlavor::Development);
        assert!(rules.skips_parsing("/app/node_modules/react/dist/react.min.js"));
        assert!(!rules.skips_parsing("/app/src/minimal.js"));
    }

    #[test]
    fn patterns_serialize_as_source() {
        let rules = build_rules(BuildTarget::Server, BuildFlavor::Production);
        let value = serde_json::to_value(&rules).unwrap();
        assert_eq!(value["preRules"][0]["test"], r"\.json$");
        assert_eq!(value["noParse"], r"\.min\.js");
        assert_eq!(value["rules"][0]["options"]["cacheDirectory"], true);
    }
}
