//! License banner stamped onto every script artifact.

use std::fmt;
use std::sync::Arc;

use prism_config::PackageManifest;

/// Immutable license header shared by all profiles of a run.
///
/// Cloning is cheap; every profile holds the same allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner(Arc<str>);

impl Banner {
    /// Populate the license template from package metadata.
    pub fn render(manifest: &PackageManifest) -> Self {
        let text = format!(
            "/*!\n * {name} v{version}\n * {homepage}\n *\n * Copyright (c) 2017-present {author}\n * Released under the MIT license\n * {homepage}/blob/master/LICENSE\n */",
            name = manifest.name,
            version = manifest.version,
            homepage = manifest.homepage,
            author = manifest.author,
        );
        Self(Arc::from(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Prefix `code` with the banner on its own line.
    pub fn apply(&self, code: &str) -> String {
        let mut out = String::with_capacity(self.0.len() + 1 + code.len());
        out.push_str(&self.0);
        out.push('\n');
        out.push_str(code);
        out
    }
}

impl fmt::Display for Banner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
