//! Inputs to the [`Bundler`](crate::Bundler): what to compile and how to render it.

use std::fmt;
use std::path::PathBuf;

use indexmap::IndexMap;
use prism_config::{EsTarget, Platform};

use crate::banner::Banner;

/// Compile-time settings shared by all profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransformSettings {
    pub platform: Platform,
    /// Newer syntax is lowered to this level.
    pub target: EsTarget,
}

/// A transform applied while building the module graph.
///
/// Plugins run in list order, so a substitution placed before
/// [`TransformPlugin::Minify`] is visible to the minifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformPlugin {
    /// Replace each key expression with the literal value (already quoted).
    Substitute(IndexMap<String, String>),
    Minify,
}

/// Everything needed to build the module graph for one profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPlan {
    /// Absolute path of the entry module.
    pub entry: PathBuf,
    /// Directory module resolution starts from.
    pub cwd: PathBuf,
    /// Module ids left out of the bundle.
    pub external: Vec<String>,
    pub transform: TransformSettings,
    pub plugins: Vec<TransformPlugin>,
}

impl BuildPlan {
    /// Copy of this plan with `plugins` appended.
    pub fn with_plugins(&self, plugins: impl IntoIterator<Item = TransformPlugin>) -> Self {
        let mut plan = self.clone();
        plan.plugins.extend(plugins);
        plan
    }

    /// Merged substitution table of all `Substitute` plugins, later ones winning.
    pub fn substitutions(&self) -> IndexMap<String, String> {
        let mut merged = IndexMap::new();
        for plugin in &self.plugins {
            if let TransformPlugin::Substitute(map) = plugin {
                for (key, value) in map {
                    merged.insert(key.clone(), value.clone());
                }
            }
        }
        merged
    }

    pub fn minify(&self) -> bool {
        self.plugins.iter().any(|p| matches!(p, TransformPlugin::Minify))
    }
}

/// Module wrapper of a rendered artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleFormat {
    Cjs,
    Esm,
    Umd,
}

impl fmt::Display for ModuleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ModuleFormat::Cjs => "cjs",
            ModuleFormat::Esm => "esm",
            ModuleFormat::Umd => "umd",
        })
    }
}

/// How the entry module's exports are exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportStyle {
    #[default]
    Named,
    Default,
    Auto,
}

/// Output options for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub format: ModuleFormat,
    pub banner: Banner,
    pub exports: ExportStyle,
    /// Global the UMD wrapper assigns exports to.
    pub global_name: Option<String>,
    /// External id -> host global, for UMD only.
    pub external_bindings: IndexMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan() -> BuildPlan {
        BuildPlan {
            entry: PathBuf::from("/p/src/index.js"),
            cwd: PathBuf::from("/p"),
            external: vec![],
            transform: TransformSettings::default(),
            plugins: vec![],
        }
    }

    #[test]
    fn with_plugins_leaves_base_untouched() {
        let base = plan();
        let extended = base.with_plugins([TransformPlugin::Minify]);
        assert!(base.plugins.is_empty());
        assert!(extended.minify());
        assert!(!base.minify());
    }

    #[test]
    fn later_substitutions_win() {
        let first: IndexMap<_, _> = [("A".to_string(), "1".to_string())].into_iter().collect();
        let second: IndexMap<_, _> = [("A".to_string(), "2".to_string())].into_iter().collect();
        let plan = plan().with_plugins([
            TransformPlugin::Substitute(first),
            TransformPlugin::Substitute(second),
        ]);
        assert_eq!(plan.substitutions().get("A").map(String::as_str), Some("2"));
    }
}
