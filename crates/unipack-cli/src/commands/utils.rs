use std::path::{Path, PathBuf};

use figment::providers::Serialized;
use unipack_config::Settings;

use crate::error::Result;

/// Load settings; a `--root` flag overrides `APP_ROOT_PATH`.
///
/// Priority: CLI args > environment variables > discovery from the working directory.
pub(crate) fn load_settings(root: Option<&Path>) -> Result<Settings> {
    let cwd = std::env::current_dir()?;
    let mut figment = Settings::figment();

    if let Some(root) = root {
        let root: PathBuf = std::path::absolute(root)?;
        figment = figment.merge(Serialized::default("app_root_path", root));
    }

    let settings = Settings::from_figment(figment, &cwd)?;
    tracing::debug!(root = %settings.root.path().display(), "loaded settings");
    Ok(settings)
}

pub(crate) fn to_json<T: serde::Serialize>(value: &T, compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(json)
}
