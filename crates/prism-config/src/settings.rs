//! Build settings shared by every output profile.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Marker substituted with the build mode in UMD bundles.
pub const DEFAULT_ENV_MARKER: &str = "process.env.NODE_ENV";

/// Target platform for module resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Browser,
    Node,
    Neutral,
}

/// Syntax level the emitted code is lowered to.
///
/// `es5` is not offered: the compiler lowers no further than ES2015.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EsTarget {
    #[default]
    Es2015,
    Es2016,
    Es2017,
    Es2018,
    Es2019,
    Es2020,
    Es2021,
    Es2022,
    Es2023,
    Es2024,
    EsNext,
}

impl EsTarget {
    pub fn as_str(self) -> &'static str {
        match self {
            EsTarget::Es2015 => "es2015",
            EsTarget::Es2016 => "es2016",
            EsTarget::Es2017 => "es2017",
            EsTarget::Es2018 => "es2018",
            EsTarget::Es2019 => "es2019",
            EsTarget::Es2020 => "es2020",
            EsTarget::Es2021 => "es2021",
            EsTarget::Es2022 => "es2022",
            EsTarget::Es2023 => "es2023",
            EsTarget::Es2024 => "es2024",
            EsTarget::EsNext => "esnext",
        }
    }
}

impl std::fmt::Display for EsTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Project-level build settings.
///
/// Every field has a default matching the conventional single-component
/// layout (`src/index.js`, `src/style.css`, `dist/`), so a project only needs
/// to configure what differs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildSettings {
    /// Entry module, relative to the project root.
    pub entry: PathBuf,

    /// Output directory, relative to the project root.
    pub out_dir: PathBuf,

    /// Stylesheet copied verbatim next to the scripts. `null` disables the copy.
    pub stylesheet: Option<PathBuf>,

    /// Module ids left out of the bundle and supplied by the host.
    pub external: Vec<String>,

    /// Global binding for each external in UMD builds (e.g. `vue` -> `Vue`).
    pub globals: IndexMap<String, String>,

    /// Global variable the UMD bundle assigns its exports to.
    pub global_name: Option<String>,

    /// Expression replaced with the quoted build mode in UMD bundles.
    pub env_marker: String,

    pub platform: Platform,

    /// Syntax level scripts are lowered to.
    pub target: EsTarget,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            entry: PathBuf::from("src/index.js"),
            out_dir: PathBuf::from("dist"),
            stylesheet: Some(PathBuf::from("src/style.css")),
            external: Vec::new(),
            globals: IndexMap::new(),
            global_name: None,
            env_marker: DEFAULT_ENV_MARKER.to_string(),
            platform: Platform::Browser,
            target: EsTarget::Es2015,
        }
    }
}

impl BuildSettings {
    /// UMD global name, falling back to the PascalCase form of `package_name`.
    pub fn resolved_global_name(&self, package_name: &str) -> String {
        match &self.global_name {
            Some(name) => name.clone(),
            None => pascal_case(package_name),
        }
    }
}

/// `vue-thin-modal` -> `VueThinModal`, `@acme/my_lib` -> `MyLib`.
pub fn pascal_case(name: &str) -> String {
    let base = match name.rsplit_once('/') {
        Some((_, stem)) => stem,
        None => name,
    };

    base.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}
