//! Profile registry: the fixed set of output targets for a project.
//!
//! The registry is pure data built once from a [`ProjectConfig`]. It performs
//! no I/O and cannot fail; anything wrong with the inputs surfaces later, when
//! the bundler touches the filesystem.

use std::fmt;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use prism_config::ProjectConfig;

use crate::banner::Banner;
use crate::plan::{
    BuildPlan, ExportStyle, ModuleFormat, RenderOptions, TransformPlugin, TransformSettings,
};

/// One of the four distribution formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileFormat {
    CommonJs,
    EsModule,
    UmdDev,
    UmdProd,
}

impl ProfileFormat {
    /// Declared emission order.
    pub const ALL: [ProfileFormat; 4] = [
        ProfileFormat::CommonJs,
        ProfileFormat::EsModule,
        ProfileFormat::UmdDev,
        ProfileFormat::UmdProd,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ProfileFormat::CommonJs => "commonjs",
            ProfileFormat::EsModule => "esmodule",
            ProfileFormat::UmdDev => "umd-dev",
            ProfileFormat::UmdProd => "umd-prod",
        }
    }

    /// File name suffix appended to the package stem.
    pub fn suffix(self) -> &'static str {
        match self {
            ProfileFormat::CommonJs => ".cjs.js",
            ProfileFormat::EsModule => ".esm.js",
            ProfileFormat::UmdDev => ".js",
            ProfileFormat::UmdProd => ".min.js",
        }
    }

    pub fn module_format(self) -> ModuleFormat {
        match self {
            ProfileFormat::CommonJs => ModuleFormat::Cjs,
            ProfileFormat::EsModule => ModuleFormat::Esm,
            ProfileFormat::UmdDev | ProfileFormat::UmdProd => ModuleFormat::Umd,
        }
    }

    /// Build mode baked into the bundle, if any.
    pub fn mode(self) -> Option<&'static str> {
        match self {
            ProfileFormat::UmdDev => Some("development"),
            ProfileFormat::UmdProd => Some("production"),
            _ => None,
        }
    }

    pub fn minify(self) -> bool {
        matches!(self, ProfileFormat::UmdProd)
    }

    pub fn is_umd(self) -> bool {
        self.module_format() == ModuleFormat::Umd
    }
}

impl fmt::Display for ProfileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// UMD wrapper settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UmdBindings {
    pub global_name: String,
    pub external_bindings: IndexMap<String, String>,
}

/// A named output target realized into a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputProfile {
    format: ProfileFormat,
    destination: PathBuf,
    banner: Banner,
    substitutions: IndexMap<String, String>,
    umd: Option<UmdBindings>,
}

impl OutputProfile {
    pub fn format(&self) -> ProfileFormat {
        self.format
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn banner(&self) -> &Banner {
        &self.banner
    }

    /// Marker expression -> quoted literal. Empty for non-UMD profiles.
    pub fn substitutions(&self) -> &IndexMap<String, String> {
        &self.substitutions
    }

    pub fn minify(&self) -> bool {
        self.format.minify()
    }

    pub fn umd(&self) -> Option<&UmdBindings> {
        self.umd.as_ref()
    }

    /// Plugins this profile adds to the base plan, substitution first.
    pub fn plugins(&self) -> Vec<TransformPlugin> {
        let mut plugins = Vec::new();
        if !self.substitutions.is_empty() {
            plugins.push(TransformPlugin::Substitute(self.substitutions.clone()));
        }
        if self.minify() {
            plugins.push(TransformPlugin::Minify);
        }
        plugins
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            format: self.format.module_format(),
            banner: self.banner.clone(),
            exports: ExportStyle::Named,
            global_name: self.umd.as_ref().map(|u| u.global_name.clone()),
            external_bindings: self
                .umd
                .as_ref()
                .map(|u| u.external_bindings.clone())
                .unwrap_or_default(),
        }
    }
}

/// Ordered profiles plus the shared base plan.
#[derive(Debug, Clone)]
pub struct ProfileRegistry {
    base: BuildPlan,
    profiles: Vec<OutputProfile>,
    out_dir: PathBuf,
    stylesheet: Option<(PathBuf, PathBuf)>,
}

impl ProfileRegistry {
    pub fn from_config(config: &ProjectConfig) -> Self {
        let settings = &config.settings;
        let out_dir = config.out_dir();
        let stem = config.manifest.file_stem();
        let banner = Banner::render(&config.manifest);

        let base = BuildPlan {
            entry: config.entry_path(),
            cwd: config.root.clone(),
            external: settings.external.clone(),
            transform: TransformSettings {
                platform: settings.platform,
                target: settings.target,
            },
            plugins: Vec::new(),
        };

        let profiles = ProfileFormat::ALL
            .iter()
            .map(|&format| {
                let substitutions = match format.mode() {
                    Some(mode) => {
                        let mut map = IndexMap::new();
                        map.insert(settings.env_marker.clone(), quote(mode));
                        map
                    }
                    None => IndexMap::new(),
                };

                let umd = format.is_umd().then(|| UmdBindings {
                    global_name: config.global_name(),
                    external_bindings: settings.globals.clone(),
                });

                OutputProfile {
                    format,
                    destination: out_dir.join(format!("{stem}{}", format.suffix())),
                    banner: banner.clone(),
                    substitutions,
                    umd,
                }
            })
            .collect();

        let stylesheet = config
            .stylesheet_path()
            .map(|src| (src, out_dir.join(format!("{stem}.css"))));

        Self {
            base,
            profiles,
            out_dir,
            stylesheet,
        }
    }

    /// Entry point, externals and transform settings shared by every profile.
    pub fn base_plan(&self) -> &BuildPlan {
        &self.base
    }

    /// Profiles in emission order.
    pub fn profiles(&self) -> &[OutputProfile] {
        &self.profiles
    }

    pub fn profile(&self, format: ProfileFormat) -> Option<&OutputProfile> {
        self.profiles.iter().find(|p| p.format == format)
    }

    /// Base plan extended with the profile's plugins.
    pub fn plan_for(&self, profile: &OutputProfile) -> BuildPlan {
        self.base.with_plugins(profile.plugins())
    }

    pub fn render_options(&self, profile: &OutputProfile) -> RenderOptions {
        profile.render_options()
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Stylesheet `(source, destination)`, if one is configured.
    pub fn stylesheet(&self) -> Option<(&Path, &Path)> {
        self.stylesheet
            .as_ref()
            .map(|(src, dest)| (src.as_path(), dest.as_path()))
    }
}

/// JSON string literal for `value`.
fn quote(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}
