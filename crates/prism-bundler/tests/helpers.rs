//! Shared test utilities for prism-bundler tests
//!
//! `StubBundler` stands in for the real compiler: it reads the entry file,
//! applies substitutions textually, strips comments when minifying and wraps
//! the result in a format-specific shell.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use prism_bundler::{BuildPlan, Bundler, Error, ModuleFormat, RenderOptions, Result};
use prism_config::{BuildSettings, ConfigDiscovery, ProjectConfig};
use tempfile::TempDir;

pub const PACKAGE_JSON: &str = r#"{
  "name": "vue-thin-modal",
  "version": "1.2.3",
  "homepage": "https://github.com/ktsn/vue-thin-modal",
  "author": "katashin"
}"#;

pub const ENTRY: &str = r#"// entry module
/* block comment */
export const mode = process.env.NODE_ENV;
export function open() {
  return mode === "production" ? 1 : 2; // trailing
}
"#;

pub const STYLESHEET: &str = ".modal { display: none; }\n";

/// A project on disk with `package.json`, `src/index.js` and `src/style.css`.
pub struct TestProject {
    pub dir: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), PACKAGE_JSON).unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/index.js"), ENTRY).unwrap();
        fs::write(dir.path().join("src/style.css"), STYLESHEET).unwrap();
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn out_dir(&self) -> PathBuf {
        self.root().join("dist")
    }

    pub fn out(&self, file: &str) -> PathBuf {
        self.out_dir().join(file)
    }

    pub fn read(&self, file: &str) -> String {
        fs::read_to_string(self.out(file)).unwrap()
    }

    pub fn config(&self) -> ProjectConfig {
        ConfigDiscovery::new(self.root()).load().unwrap()
    }

    pub fn config_with(&self, f: impl FnOnce(&mut BuildSettings)) -> ProjectConfig {
        let mut config = self.config();
        f(&mut config.settings);
        config
    }
}

pub struct StubBundle {
    code: String,
}

#[derive(Default)]
pub struct StubBundler {
    builds: AtomicUsize,
    renders: AtomicUsize,
    /// 1-based build call that fails.
    pub fail_build_on: Option<usize>,
    /// 1-based render call that fails.
    pub fail_render_on: Option<usize>,
}

impl StubBundler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_build_on(n: usize) -> Self {
        Self {
            fail_build_on: Some(n),
            ..Self::default()
        }
    }

    pub fn failing_render_on(n: usize) -> Self {
        Self {
            fail_render_on: Some(n),
            ..Self::default()
        }
    }

    pub fn builds(&self) -> usize {
        self.builds.load(Ordering::SeqCst)
    }

    pub fn renders(&self) -> usize {
        self.renders.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Bundler for StubBundler {
    type Bundle = StubBundle;

    async fn build(&self, plan: &BuildPlan) -> Result<StubBundle> {
        let n = self.builds.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail_build_on == Some(n) {
            return Err(Error::Build(format!("stub build {n} failed")));
        }

        let mut code = fs::read_to_string(&plan.entry)
            .map_err(|e| Error::Build(format!("cannot read entry: {e}")))?;
        for (from, to) in plan.substitutions() {
            code = code.replace(&from, &to);
        }
        if plan.minify() {
            code = minify(&code);
        }
        Ok(StubBundle { code })
    }

    async fn render(&self, bundle: StubBundle, options: &RenderOptions) -> Result<String> {
        let n = self.renders.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail_render_on == Some(n) {
            return Err(Error::Render(format!("stub render {n} failed")));
        }

        let body = match options.format {
            ModuleFormat::Cjs => format!("'use strict';\n{}", bundle.code),
            ModuleFormat::Esm => bundle.code,
            ModuleFormat::Umd => format!(
                "(function (global) {{ global.{} = {{}};\n{}\n}})(this);",
                options.global_name.as_deref().unwrap_or("Anonymous"),
                bundle.code
            ),
        };
        Ok(options.banner.apply(&body))
    }
}

/// Drop `//` and `/* */` comments (keeping `/*!`) and blank lines.
pub fn minify(code: &str) -> String {
    let mut out = String::new();
    let mut rest = code;
    while !rest.is_empty() {
        if rest.starts_with("/*!") {
            let end = rest.find("*/").map(|i| i + 2).unwrap_or(rest.len());
            out.push_str(&rest[..end]);
            rest = &rest[end..];
        } else if rest.starts_with("/*") {
            let end = rest.find("*/").map(|i| i + 2).unwrap_or(rest.len());
            rest = &rest[end..];
        } else if rest.starts_with("//") {
            let end = rest.find('\n').unwrap_or(rest.len());
            rest = &rest[end..];
        } else {
            let c = rest.chars().next().unwrap();
            out.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }
    out.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("")
}

/// Comments in `code` other than `/*!` ones.
pub fn plain_comments(code: &str) -> Vec<String> {
    let mut found = Vec::new();
    let mut rest = code;
    while let Some(start) = rest.find("/*").into_iter().chain(rest.find("//")).min() {
        let tail = &rest[start..];
        if tail.starts_with("/*!") {
            let end = tail.find("*/").map(|i| i + 2).unwrap_or(tail.len());
            rest = &tail[end..];
        } else if tail.starts_with("/*") {
            let end = tail.find("*/").map(|i| i + 2).unwrap_or(tail.len());
            found.push(tail[..end].to_string());
            rest = &tail[end..];
        } else {
            let end = tail.find('\n').unwrap_or(tail.len());
            found.push(tail[..end].to_string());
            rest = &tail[end..];
        }
    }
    found
}
