//! The emission pipeline: one build, render and write per profile.
//!
//! Profiles are processed strictly in registry order. The first failure
//! aborts the run; artifacts already written stay on disk.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use prism_config::ProjectConfig;

use crate::backend::Bundler;
use crate::output;
use crate::profile::{OutputProfile, ProfileFormat, ProfileRegistry};
use crate::{Error, Result};

/// One script artifact written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedArtifact {
    pub format: ProfileFormat,
    pub path: PathBuf,
    pub bytes: usize,
    pub duration: Duration,
}

impl EmittedArtifact {
    /// Size as reported to the user, e.g. `1.23kb`.
    pub fn size_kib(&self) -> String {
        format_kib(self.bytes as u64)
    }
}

/// Stylesheet copied next to the scripts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopiedStylesheet {
    pub path: PathBuf,
    pub bytes: u64,
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct EmissionSummary {
    pub artifacts: Vec<EmittedArtifact>,
    pub stylesheet: Option<CopiedStylesheet>,
    pub duration: Duration,
}

impl EmissionSummary {
    pub fn total_bytes(&self) -> u64 {
        self.artifacts.iter().map(|a| a.bytes as u64).sum()
    }
}

/// `bytes / 1024` with two decimals and a `kb` suffix.
pub fn format_kib(bytes: u64) -> String {
    format!("{:.2}kb", bytes as f64 / 1024.0)
}

/// Drives a [`Bundler`] over every profile of a project.
pub struct EmissionPipeline<B> {
    registry: ProfileRegistry,
    bundler: B,
}

impl<B: Bundler> EmissionPipeline<B> {
    pub fn new(config: ProjectConfig, bundler: B) -> Self {
        Self {
            registry: ProfileRegistry::from_config(&config),
            bundler,
        }
    }

    pub fn bundler(&self) -> &B {
        &self.bundler
    }

    /// Run every profile without progress reporting.
    pub async fn run(&self) -> Result<EmissionSummary> {
        self.run_with(|_| {}).await
    }

    /// Run every profile, calling `on_emit` after each artifact is written.
    ///
    /// # Errors
    ///
    /// Returns the first [`Error::Build`], [`Error::Render`] or [`Error::Io`]
    /// encountered. Later profiles are not attempted. A configured stylesheet
    /// that cannot be copied fails the run before any script is built.
    pub async fn run_with<F>(&self, mut on_emit: F) -> Result<EmissionSummary>
    where
        F: FnMut(&EmittedArtifact),
    {
        let start = Instant::now();
        let out_dir = self.registry.out_dir();

        output::ensure_output_dir(out_dir)?;
        let stylesheet = self.copy_stylesheet()?;

        let mut artifacts = Vec::with_capacity(self.registry.profiles().len());
        for profile in self.registry.profiles() {
            let artifact = self.emit(profile).await?;
            tracing::debug!(
                profile = %artifact.format,
                "{} {}",
                artifact.path.display(),
                artifact.size_kib()
            );
            on_emit(&artifact);
            artifacts.push(artifact);
        }

        Ok(EmissionSummary {
            artifacts,
            stylesheet,
            duration: start.elapsed(),
        })
    }

    async fn emit(&self, profile: &OutputProfile) -> Result<EmittedArtifact> {
        let start = Instant::now();
        let format = profile.format();
        let target = self.target_path(profile)?;

        tracing::debug!(profile = %format, "Building");
        let plan = self.registry.plan_for(profile);
        let bundle = self.bundler.build(&plan).await?;

        tracing::debug!(profile = %format, "Rendering");
        let code = self
            .bundler
            .render(bundle, &self.registry.render_options(profile))
            .await?;

        tracing::debug!(profile = %format, "Writing {}", target.display());
        output::write_atomic(&target, code.as_bytes())?;

        Ok(EmittedArtifact {
            format,
            path: target,
            bytes: code.len(),
            duration: start.elapsed(),
        })
    }

    fn target_path(&self, profile: &OutputProfile) -> Result<PathBuf> {
        let file_name = profile
            .destination()
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                Error::InvalidConfig(format!(
                    "invalid destination '{}' for profile {}",
                    profile.destination().display(),
                    profile.format()
                ))
            })?;
        output::output_path(self.registry.out_dir(), file_name)
    }

    fn copy_stylesheet(&self) -> Result<Option<CopiedStylesheet>> {
        let Some((src, dest)) = self.registry.stylesheet() else {
            return Ok(None);
        };

        let bytes = output::copy_file(src, dest)?;
        tracing::debug!("{} {}", dest.display(), format_kib(bytes));
        Ok(Some(CopiedStylesheet {
            path: dest.to_path_buf(),
            bytes,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kib_formatting() {
        assert_eq!(format_kib(0), "0.00kb");
        assert_eq!(format_kib(1024), "1.00kb");
        assert_eq!(format_kib(1536), "1.50kb");
        assert_eq!(format_kib(2_000), "1.95kb");
    }
}
