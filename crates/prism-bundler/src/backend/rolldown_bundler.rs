//! [`Bundler`] backed by Rolldown.
//!
//! Rolldown compiles and renders in a single `generate()` call, so `build`
//! checks the entry and assembles the input options, and `render` adds the
//! output options and runs the generation in memory.

use std::io::ErrorKind;

use async_trait::async_trait;
use rolldown::{
    BundlerBuilder, BundlerOptions, BundlerTransformOptions, Either, GlobalsOutputOption,
    InputItem, IsExternal, OutputFormat, RawMinifyOptions,
};
use rolldown_common::{Output, OutputExports};
use rustc_hash::FxHashMap;

use crate::backend::Bundler;
use crate::diagnostics;
use crate::plan::{BuildPlan, ExportStyle, ModuleFormat, RenderOptions};
use crate::{Error, Result};

/// A checked build plan, ready to render.
pub struct RolldownBundle {
    options: BundlerOptions,
    external: Vec<String>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RolldownBundler;

impl RolldownBundler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Bundler for RolldownBundler {
    type Bundle = RolldownBundle;

    async fn build(&self, plan: &BuildPlan) -> Result<Self::Bundle> {
        let entry = if plan.entry.is_absolute() {
            plan.entry.clone()
        } else {
            plan.cwd.join(&plan.entry)
        };

        match std::fs::metadata(&entry) {
            Ok(meta) if meta.is_file() => {}
            Ok(_) => {
                return Err(Error::Build(format!(
                    "entry '{}' is not a file",
                    entry.display()
                )));
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::Build(format!(
                    "UnresolvedEntry: cannot find entry module '{}'",
                    entry.display()
                )));
            }
            Err(e) => {
                return Err(Error::Build(format!(
                    "cannot read entry module '{}': {e}",
                    entry.display()
                )));
            }
        }

        let mut options = BundlerOptions {
            input: Some(vec![InputItem {
                name: None,
                import: entry.to_string_lossy().into_owned(),
            }]),
            cwd: Some(plan.cwd.clone()),
            external: Some(IsExternal::from(plan.external.clone())),
            platform: Some(to_rolldown_platform(plan.transform.platform)),
            transform: Some(BundlerTransformOptions {
                target: Some(Either::Left(plan.transform.target.as_str().to_string())),
                ..Default::default()
            }),
            ..Default::default()
        };

        let substitutions = plan.substitutions();
        if !substitutions.is_empty() {
            options.define = Some(substitutions.into_iter().collect());
        }

        if plan.minify() {
            options.minify = Some(RawMinifyOptions::from(true));
        }

        tracing::debug!(
            entry = %entry.display(),
            externals = plan.external.len(),
            target = %plan.transform.target,
            minify = plan.minify(),
            "Prepared rolldown input options"
        );

        Ok(RolldownBundle {
            options,
            external: plan.external.clone(),
        })
    }

    async fn render(&self, bundle: Self::Bundle, options: &RenderOptions) -> Result<String> {
        let RolldownBundle {
            options: mut rolldown_options,
            external,
        } = bundle;

        rolldown_options.format = Some(to_rolldown_format(options.format));
        rolldown_options.exports = Some(to_rolldown_exports(options.exports));

        if options.format == ModuleFormat::Umd {
            if let Some(missing) = external
                .iter()
                .find(|id| !options.external_bindings.contains_key(*id))
            {
                return Err(Error::Render(format!(
                    "external module '{missing}' has no global binding for the UMD bundle"
                )));
            }

            let name = options.global_name.clone().ok_or_else(|| {
                Error::Render("UMD bundles require a global name".to_string())
            })?;
            rolldown_options.name = Some(name);

            let globals: FxHashMap<String, String> = options
                .external_bindings
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect();
            rolldown_options.globals = Some(GlobalsOutputOption::from(globals));
        }

        let mut bundler = BundlerBuilder::default()
            .with_options(rolldown_options)
            .build()
            .map_err(|e| diagnostics::from_rolldown(&e))?;

        let output = bundler
            .generate()
            .await
            .map_err(|e| diagnostics::from_rolldown(&e))?;

        let code = output
            .assets
            .iter()
            .find_map(|item| match item {
                Output::Chunk(chunk) if chunk.is_entry => Some(chunk.code.to_string()),
                _ => None,
            })
            .ok_or_else(|| Error::Render("rolldown produced no entry chunk".to_string()))?;

        Ok(options.banner.apply(&code))
    }
}

fn to_rolldown_format(format: ModuleFormat) -> OutputFormat {
    match format {
        ModuleFormat::Cjs => OutputFormat::Cjs,
        ModuleFormat::Esm => OutputFormat::Esm,
        ModuleFormat::Umd => OutputFormat::Umd,
    }
}

fn to_rolldown_exports(exports: ExportStyle) -> OutputExports {
    match exports {
        ExportStyle::Named => OutputExports::Named,
        ExportStyle::Default => OutputExports::Default,
        ExportStyle::Auto => OutputExports::Auto,
    }
}

fn to_rolldown_platform(platform: prism_config::Platform) -> rolldown::Platform {
    match platform {
        prism_config::Platform::Browser => rolldown::Platform::Browser,
        prism_config::Platform::Node => rolldown::Platform::Node,
        prism_config::Platform::Neutral => rolldown::Platform::Neutral,
    }
}
