//! Package manifest (`package.json`) metadata.
//!
//! Only the fields that end up in artifact names and the license banner are
//! read. Everything else in the manifest is ignored.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// File name of the project manifest.
pub const MANIFEST_FILE_NAME: &str = "package.json";

/// Package metadata read once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageManifest {
    pub name: String,
    pub version: String,
    pub homepage: String,
    pub author: Author,
}

/// The `author` field, in either of the two shapes npm accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Author {
    Name(String),
    Person {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        email: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
    },
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Author::Name(name) => f.write_str(name),
            Author::Person { name, email, url } => {
                f.write_str(name)?;
                if let Some(email) = email {
                    write!(f, " <{email}>")?;
                }
                if let Some(url) = url {
                    write!(f, " ({url})")?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Deserialize)]
struct RawManifest {
    name: Option<String>,
    version: Option<String>,
    homepage: Option<String>,
    author: Option<Author>,
}

impl PackageManifest {
    /// Read `package.json` from the project root.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::ManifestNotFound`] if the file does not exist
    /// - [`ConfigError::InvalidManifest`] if it is not valid JSON
    /// - [`ConfigError::MissingField`] if name, version, homepage or author is absent
    pub fn load(root: impl AsRef<Path>) -> Result<Self> {
        let path = root.as_ref().join(MANIFEST_FILE_NAME);
        let content = fs::read_to_string(&path).map_err(|err| match err.kind() {
            std::io::ErrorKind::NotFound => ConfigError::ManifestNotFound(path.clone()),
            _ => ConfigError::Io(err),
        })?;
        Self::parse(&path, &content)
    }

    /// Parse manifest content; `path` is only used for error messages.
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        let raw: RawManifest =
            serde_json::from_str(content).map_err(|e| ConfigError::InvalidManifest {
                path: PathBuf::from(path),
                message: e.to_string(),
            })?;

        let name = required(raw.name, "name")?;
        let version = required(raw.version, "version")?;
        let homepage = required(raw.homepage, "homepage")?;
        let author = raw.author.ok_or(ConfigError::MissingField("author"))?;

        Ok(Self {
            name,
            version,
            homepage: homepage.trim_end_matches('/').to_string(),
            author,
        })
    }

    /// Base name used for emitted files.
    ///
    /// Scoped packages drop their scope, so `@acme/modal` emits `modal.js`.
    pub fn file_stem(&self) -> &str {
        match self.name.rsplit_once('/') {
            Some((_, stem)) if self.name.starts_with('@') => stem,
            _ => &self.name,
        }
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::MissingField(field)),
    }
}
