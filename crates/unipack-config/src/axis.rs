//! Build axes and the parameter resolver.
//!
//! A configuration tree is parameterized by two independent axes: the
//! [`BuildTarget`] (server vs. client output) and the [`BuildFlavor`]
//! (development vs. production). Values arrive as loose strings from callers
//! and the environment; [`resolve`] turns them into closed enums.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Which runtime the bundle is produced for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildTarget {
    /// Node-like host runtime; installed dependencies are available at runtime.
    #[default]
    Server,
    /// Browser-like runtime; every dependency must be bundled.
    Client,
}

/// Development or production behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildFlavor {
    /// Debugging aids and hot-module-replacement scaffolding.
    Development,
    /// Optimization plugins, no HMR.
    #[default]
    Production,
}

impl BuildTarget {
    pub const ALL: [BuildTarget; 2] = [BuildTarget::Server, BuildTarget::Client];

    pub fn as_str(self) -> &'static str {
        match self {
            BuildTarget::Server => "server",
            BuildTarget::Client => "client",
        }
    }

    pub fn is_server(self) -> bool {
        self == BuildTarget::Server
    }

    /// Module identifier of the axis main module, e.g. `./server`.
    pub fn main_module(self) -> String {
        format!("./{}", self.as_str())
    }
}

impl BuildFlavor {
    pub const ALL: [BuildFlavor; 2] = [BuildFlavor::Production, BuildFlavor::Development];

    pub fn as_str(self) -> &'static str {
        match self {
            BuildFlavor::Development => "development",
            BuildFlavor::Production => "production",
        }
    }

    pub fn is_production(self) -> bool {
        self == BuildFlavor::Production
    }
}

impl fmt::Display for BuildTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for BuildFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildTarget {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.eq_ignore_ascii_case("server") {
            Ok(BuildTarget::Server)
        } else if value.eq_ignore_ascii_case("client") {
            Ok(BuildTarget::Client)
        } else {
            Err(ConfigError::UnknownTarget(s.to_string()))
        }
    }
}

impl FromStr for BuildFlavor {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.eq_ignore_ascii_case("development") {
            Ok(BuildFlavor::Development)
        } else if value.eq_ignore_ascii_case("production") {
            Ok(BuildFlavor::Production)
        } else {
            Err(ConfigError::UnknownFlavor(s.to_string()))
        }
    }
}

/// Where the resolved value of one axis came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AxisSource {
    Explicit,
    Environment,
    Default,
    /// A value was supplied but not recognized; the hard default was used.
    Clamped { rejected: String },
}

/// Result of [`resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub target: BuildTarget,
    pub flavor: BuildFlavor,
    pub target_source: AxisSource,
    pub flavor_source: AxisSource,
}

impl Resolution {
    pub fn axes(&self) -> (BuildTarget, BuildFlavor) {
        (self.target, self.flavor)
    }
}

/// Resolve both axes from explicit arguments and environment values.
///
/// Per axis, independently: the first non-empty value among `explicit_*` and
/// `env_*` wins, otherwise the hard default applies (`server`, `production`).
/// An empty string counts as absent. A present value outside the enumerated
/// set is clamped to the hard default rather than degrading into
/// client/development behaviour.
pub fn resolve(
    explicit_target: Option<&str>,
    explicit_flavor: Option<&str>,
    env_target: Option<&str>,
    env_flavor: Option<&str>,
) -> Resolution {
    let (target, target_source) = resolve_axis::<BuildTarget>(explicit_target, env_target, "target");
    let (flavor, flavor_source) = resolve_axis::<BuildFlavor>(explicit_flavor, env_flavor, "flavor");

    Resolution {
        target,
        flavor,
        target_source,
        flavor_source,
    }
}

fn resolve_axis<T>(explicit: Option<&str>, env: Option<&str>, axis: &str) -> (T, AxisSource)
where
    T: FromStr + Default,
{
    let present = |v: &Option<&str>| v.is_some_and(|s| !s.trim().is_empty());

    let (raw, source) = if present(&explicit) {
        (explicit, AxisSource::Explicit)
    } else if present(&env) {
        (env, AxisSource::Environment)
    } else {
        return (T::default(), AxisSource::Default);
    };

    let raw = raw.unwrap_or_default();
    match raw.parse::<T>() {
        Ok(value) => (value, source),
        Err(_) => {
            tracing::warn!(axis, value = raw, "unrecognized build {axis}, using default");
            (
                T::default(),
                AxisSource::Clamped {
                    rejected: raw.to_string(),
                },
            )
        }
    }
}
