//! The compiler seam.
//!
//! Module resolution, transpilation and minification all happen behind
//! [`Bundler`]. The pipeline only sequences calls and writes results.

mod rolldown_bundler;

pub use rolldown_bundler::{RolldownBundle, RolldownBundler};

use async_trait::async_trait;

use crate::Result;
use crate::plan::{BuildPlan, RenderOptions};

/// Two-phase compiler interface.
///
/// `build` fails with [`Error::Build`](crate::Error::Build). `render` usually
/// fails with [`Error::Render`](crate::Error::Render), but a backend that only
/// compiles while rendering (such as [`RolldownBundler`]) may also report
/// [`Error::Build`](crate::Error::Build) from it for resolution or parse
/// failures. A bundle is consumed by its render; the pipeline builds afresh
/// for every profile.
#[async_trait]
pub trait Bundler: Send + Sync {
    type Bundle: Send;

    /// Resolve and compile the module graph described by `plan`.
    async fn build(&self, plan: &BuildPlan) -> Result<Self::Bundle>;

    /// Render a built graph to code in the requested format.
    async fn render(&self, bundle: Self::Bundle, options: &RenderOptions) -> Result<String>;
}
