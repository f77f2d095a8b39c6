//! Output spec builder.

use std::path::PathBuf;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::Serialize;

use crate::axis::{BuildFlavor, BuildTarget};
use crate::settings::ProjectRoot;

/// Template for the hot-update manifest, relative to the output path.
pub const HOT_UPDATE_MAIN_TEMPLATE: &str = "hmr/[hash]/hot-update.json";
/// Template for per-chunk hot-update files, relative to the output path.
pub const HOT_UPDATE_CHUNK_TEMPLATE: &str = "hmr/[hash]/hot-update-chunk-[id].js";

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(hash|id)\]").expect("valid pattern"));

/// Export format of the emitted bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LibraryTarget {
    /// `module.exports = ...`, consumable through `require`.
    Commonjs2,
}

impl LibraryTarget {
    pub fn as_str(self) -> &'static str {
        match self {
            LibraryTarget::Commonjs2 => "commonjs2",
        }
    }
}

/// The `output` section of a configuration tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputSpec {
    pub path: PathBuf,
    pub filename: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub library_target: Option<LibraryTarget>,
    pub hot_update_main_filename: String,
    pub hot_update_chunk_filename: String,
    pub pathinfo: bool,
}

impl OutputSpec {
    /// Absolute path of the emitted bundle.
    pub fn bundle_path(&self) -> PathBuf {
        self.path.join(&self.filename)
    }

    /// Hot-update manifest name for compilation `hash`.
    pub fn hot_update_main_file(&self, hash: &str) -> String {
        render_template(&self.hot_update_main_filename, hash, "")
    }

    /// Hot-update file name of chunk `id` for compilation `hash`.
    pub fn hot_update_chunk_file(&self, hash: &str, id: &str) -> String {
        render_template(&self.hot_update_chunk_filename, hash, id)
    }
}

/// Substitute `[hash]` and `[id]` in one pass; substituted text is never rescanned.
fn render_template(template: &str, hash: &str, id: &str) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| match &caps[1] {
            "hash" => hash.to_string(),
            _ => id.to_string(),
        })
        .into_owned()
}

/// Output spec for one axis combination.
///
/// Server bundles land next to the sources and export `commonjs2`; client
/// bundles land in `public/` and are served from `/`.
pub fn build_output(target: BuildTarget, flavor: BuildFlavor, root: &ProjectRoot) -> OutputSpec {
    let (path, public_path, library_target) = match target {
        BuildTarget::Server => (root.path().to_path_buf(), None, Some(LibraryTarget::Commonjs2)),
        BuildTarget::Client => (root.public_dir(), Some("/".to_string()), None),
    };

    OutputSpec {
        path,
        filename: format!("{target}.js"),
        public_path,
        library_target,
        hot_update_main_filename: HOT_UPDATE_MAIN_TEMPLATE.to_string(),
        hot_update_chunk_filename: HOT_UPDATE_CHUNK_TEMPLATE.to_string(),
        pathinfo: !flavor.is_production(),
    }
}
