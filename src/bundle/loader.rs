// SPDX-License-Identifier: MPL-2.0
//! Resolves dotted bundle names onto resource trees.
//!
//! Names follow `{ProjectName}.{ResourcesFolder}.{ContextFolder}.{BaseName}`.
//! The loader strips its prefix (`{ProjectName}.{ResourcesFolder}`) when
//! present and maps the remaining segments onto directories, so
//! `LocLens.Resources.Login.Strings` is read from `Login/Strings/`.

use super::{BundleResolver, FluentResourceBundle, ResourceBundle};
use crate::config::defaults::{NAME_SEPARATOR, RESOURCE_PREFIX};
use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(RustEmbed)]
#[folder = "assets/resources/"]
struct EmbeddedResources;

#[derive(Debug, Clone)]
enum Source {
    Embedded,
    Directory(PathBuf),
}

impl Source {
    /// Every file below `dir`, as `(path relative to dir, contents)`.
    fn files_under(&self, dir: &str) -> Result<Vec<(String, Vec<u8>)>> {
        let prefix = format!("{}/", dir);
        match self {
            Source::Embedded => Ok(EmbeddedResources::iter()
                .filter_map(|path| {
                    let relative = path.strip_prefix(&prefix)?.to_string();
                    let file = EmbeddedResources::get(&path)?;
                    Some((relative, file.data.into_owned()))
                })
                .collect()),
            Source::Directory(root) => {
                let base = root.join(dir);
                let mut files = Vec::new();
                if base.is_dir() {
                    collect_files(&base, &base, &mut files)?;
                }
                Ok(files)
            }
        }
    }
}

fn collect_files(base: &Path, current: &Path, out: &mut Vec<(String, Vec<u8>)>) -> Result<()> {
    for entry in fs::read_dir(current)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_files(base, &path, out)?;
        } else if let Ok(relative) = path.strip_prefix(base) {
            let relative = relative
                .components()
                .map(|component| component.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            out.push((relative, fs::read(&path)?));
        }
    }
    Ok(())
}

/// Loads [`FluentResourceBundle`]s by name.
///
/// ```
/// use loc_lens::bundle::{BundleLoader, ResourceBundle};
/// use loc_lens::i18n::parse_culture;
///
/// let bundle = BundleLoader::embedded()
///     .load("LocLens.Resources.Login.Strings")
///     .unwrap();
/// let title = bundle.lookup_string("Title", &parse_culture("de-DE").unwrap());
/// assert_eq!(title.as_deref(), Some("Anmeldung"));
/// ```
#[derive(Debug, Clone)]
pub struct BundleLoader {
    source: Source,
    prefix: Option<String>,
}

impl BundleLoader {
    /// Loader over the resources compiled into the binary.
    pub fn embedded() -> Self {
        Self {
            source: Source::Embedded,
            prefix: Some(RESOURCE_PREFIX.to_string()),
        }
    }

    /// Loader over a resource tree on disk.
    pub fn from_dir(root: impl Into<PathBuf>) -> Self {
        Self {
            source: Source::Directory(root.into()),
            prefix: Some(RESOURCE_PREFIX.to_string()),
        }
    }

    /// Replaces the `{ProjectName}.{ResourcesFolder}` prefix stripped from names.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Maps every name segment onto a directory.
    #[must_use]
    pub fn without_prefix(mut self) -> Self {
        self.prefix = None;
        self
    }

    /// Directory (relative to the source root) a bundle name maps to.
    pub fn bundle_dir(&self, name: &str) -> Result<String> {
        let relative = match &self.prefix {
            Some(prefix) if name == prefix => {
                return Err(Error::BundleNotFound(name.to_string()));
            }
            Some(prefix) => name
                .strip_prefix(prefix.as_str())
                .and_then(|rest| rest.strip_prefix(NAME_SEPARATOR))
                .unwrap_or(name),
            None => name,
        };

        let segments: Vec<&str> = relative.split(NAME_SEPARATOR).collect();
        if segments
            .iter()
            .any(|segment| segment.is_empty() || segment.contains(['/', '\\']) || *segment == "..")
        {
            return Err(Error::BundleNotFound(name.to_string()));
        }
        Ok(segments.join("/"))
    }

    pub fn load(&self, name: &str) -> Result<FluentResourceBundle> {
        let dir = self.bundle_dir(name)?;
        let files = self.source.files_under(&dir)?;
        let has_partition = files.iter().any(|(path, _)| {
            !path.contains('/') && (path.ends_with(".ftl") || path.ends_with(".toml"))
        });
        if !has_partition {
            tracing::debug!(bundle = name, dir = %dir, "no culture partition files found");
            return Err(Error::BundleNotFound(name.to_string()));
        }
        FluentResourceBundle::from_files(name, files)
    }
}

impl Default for BundleLoader {
    fn default() -> Self {
        Self::embedded()
    }
}

impl BundleResolver for BundleLoader {
    fn resolve(&self, name: &str) -> Result<Box<dyn ResourceBundle>> {
        Ok(Box::new(self.load(name)?))
    }
}
