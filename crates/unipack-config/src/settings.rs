//! Injected project root and ambient axis values.
//!
//! The generator never reads the process environment. Hosts build a
//! [`Settings`] once at startup, usually through [`Settings::from_env`], and
//! hand it to the generator and the registry.

use std::path::{Component, Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Serialized},
    value::{Num, Value},
};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ConfigError, Result};

/// Environment variable selecting the build target.
pub const TARGET_ENV_VAR: &str = "BUILD_TYPE";
/// Environment variable selecting the build flavor.
pub const FLAVOR_ENV_VAR: &str = "NODE_ENV";
/// Environment variable overriding project root discovery.
pub const ROOT_ENV_VAR: &str = "APP_ROOT_PATH";

const VENDOR_DIR: &str = "node_modules";
const MANIFEST_FILE: &str = "package.json";

/// Absolute path of the project being bundled.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProjectRoot(PathBuf);

impl ProjectRoot {
    /// Wrap an absolute path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::RelativeRoot`] if `path` is relative; the root
    /// is never resolved against the working directory implicitly.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.is_absolute() {
            return Err(ConfigError::RelativeRoot(path));
        }
        Ok(Self(path))
    }

    /// Find the application root above `start`.
    ///
    /// If `start` lies inside a `node_modules` directory, the directory
    /// above the outermost `node_modules` is the root. Otherwise the nearest
    /// ancestor holding a `package.json` wins, falling back to `start`.
    pub fn discover(start: impl AsRef<Path>) -> Result<Self> {
        let start = start.as_ref().canonicalize()?;

        if let Some(root) = above_vendor_dir(&start) {
            return Ok(Self(root));
        }

        let root = start
            .ancestors()
            .find(|dir| dir.join(MANIFEST_FILE).is_file())
            .unwrap_or(start.as_path())
            .to_path_buf();

        tracing::debug!(root = %root.display(), "discovered project root");
        Ok(Self(root))
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Source directory, used as the tree `context`.
    pub fn source_dir(&self) -> PathBuf {
        self.0.join("src")
    }

    /// Static asset directory, used as the client output path.
    pub fn public_dir(&self) -> PathBuf {
        self.0.join("public")
    }
}

impl AsRef<Path> for ProjectRoot {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

fn above_vendor_dir(path: &Path) -> Option<PathBuf> {
    let mut prefix = PathBuf::new();
    for component in path.components() {
        if matches!(component, Component::Normal(name) if name == VENDOR_DIR) {
            return Some(prefix);
        }
        prefix.push(component);
    }
    None
}

/// Raw ambient values as extracted by figment.
///
/// `Env` infers types, so `NODE_ENV=1` arrives as a number and
/// `BUILD_TYPE=[a,b]` as an array. Every key is read back as text and left
/// for the resolver to clamp.
#[derive(Debug, Default, Serialize, Deserialize)]
struct AmbientValues {
    #[serde(default, deserialize_with = "as_text", skip_serializing_if = "Option::is_none")]
    build_type: Option<String>,

    #[serde(default, deserialize_with = "as_text", skip_serializing_if = "Option::is_none")]
    node_env: Option<String>,

    #[serde(default, deserialize_with = "as_text", skip_serializing_if = "Option::is_none")]
    app_root_path: Option<String>,
}

fn as_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.map(|value| render(&value)))
}

fn render(value: &Value) -> String {
    match value {
        Value::String(_, s) => s.clone(),
        Value::Char(_, c) => c.to_string(),
        Value::Bool(_, b) => b.to_string(),
        Value::Num(_, n) => render_num(*n),
        Value::Empty(_, _) => String::new(),
        Value::Array(_, items) => {
            let items: Vec<String> = items.iter().map(render).collect();
            format!("[{}]", items.join(","))
        }
        Value::Dict(_, dict) => {
            let entries: Vec<String> = dict
                .iter()
                .map(|(key, value)| format!("{key}={}", render(value)))
                .collect();
            format!("{{{}}}", entries.join(","))
        }
    }
}

fn render_num(n: Num) -> String {
    n.to_u128()
        .map(|v| v.to_string())
        .or_else(|| n.to_i128().map(|v| v.to_string()))
        .or_else(|| n.to_f64().map(|v| v.to_string()))
        .unwrap_or_default()
}

/// Everything the generator needs from the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub root: ProjectRoot,

    /// Ambient target value (`BUILD_TYPE`), consulted when no explicit target is given.
    pub build_type: Option<String>,

    /// Ambient flavor value (`NODE_ENV`), consulted when no explicit flavor is given.
    pub node_env: Option<String>,
}

impl Settings {
    /// Settings with no ambient axis values.
    pub fn new(root: ProjectRoot) -> Self {
        Self {
            root,
            build_type: None,
            node_env: None,
        }
    }

    pub fn with_build_type(mut self, value: impl Into<String>) -> Self {
        self.build_type = Some(value.into());
        self
    }

    pub fn with_node_env(mut self, value: impl Into<String>) -> Self {
        self.node_env = Some(value.into());
        self
    }

    /// The figment used by [`Settings::from_env`].
    ///
    /// Priority: environment variables > defaults.
    pub fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(AmbientValues::default()))
            .merge(Env::raw().only(&[TARGET_ENV_VAR, FLAVOR_ENV_VAR, ROOT_ENV_VAR]))
    }

    /// Extract settings from `figment`.
    ///
    /// Recognized keys are `build_type`, `node_env` and `app_root_path`.
    /// Without a non-blank `app_root_path` the root is discovered from
    /// `fallback_root`.
    pub fn from_figment(figment: Figment, fallback_root: impl AsRef<Path>) -> Result<Self> {
        let values: AmbientValues = figment.extract()?;

        let root = match values.app_root_path.filter(|path| !path.trim().is_empty()) {
            Some(path) => ProjectRoot::new(path)?,
            None => ProjectRoot::discover(fallback_root)?,
        };

        Ok(Self {
            root,
            build_type: values.build_type,
            node_env: values.node_env,
        })
    }

    /// Read `BUILD_TYPE`, `NODE_ENV` and `APP_ROOT_PATH` from the process
    /// environment, discovering the root from the working directory.
    pub fn from_env() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::from_figment(Self::figment(), cwd)
    }
}
