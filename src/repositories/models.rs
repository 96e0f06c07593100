use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::helpers::{ARCH_PLACEHOLDER, CODENAME_PLACEHOLDER, placeholders, render_template};
use crate::source::RepositoryKey;

use super::CatalogError;

/// Serialized catalog; serde is confined to this module tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct CatalogDocument {
    /// Base URL every release path hangs off, e.g. `.../pub/gluster/glusterfs/`.
    pub(crate) root: String,
    /// Extra path segment inserted after `root` for archived releases.
    pub(crate) archive_segment: String,
    pub(crate) releases: Vec<ReleaseRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ReleaseRow {
    pub(crate) release: String,
    pub(crate) path: String,
    #[serde(default)]
    pub(crate) archived: bool,
    #[serde(default)]
    pub(crate) key: Option<RepositoryKey>,
    pub(crate) architectures: BTreeSet<String>,
}

/// One validated row of the release catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseEntry {
    release_id: String,
    url_template: String,
    key: Option<RepositoryKey>,
    archived: bool,
    supported_architectures: BTreeSet<String>,
}

impl ReleaseEntry {
    /// Build an entry from its serialized row, checking everything that would
    /// otherwise only show up as a broken URL at resolution time.
    pub(crate) fn from_row(root: &str, archive_segment: &str, row: ReleaseRow) -> Result<Self, CatalogError> {
        let release = row.release;

        let url_template = if row.archived {
            format!("{root}{archive_segment}{}", row.path)
        } else {
            format!("{root}{}", row.path)
        };

        if !url_template.ends_with('/') {
            return Err(CatalogError::MissingTrailingSlash(release));
        }

        let tokens = placeholders(&url_template);
        if let Some(unknown) = tokens
            .iter()
            .find(|t| **t != CODENAME_PLACEHOLDER && **t != ARCH_PLACEHOLDER)
        {
            return Err(CatalogError::UnknownPlaceholder {
                release,
                placeholder: unknown.to_string(),
            });
        }
        if !tokens.contains(&CODENAME_PLACEHOLDER) {
            return Err(CatalogError::MissingCodename(release));
        }

        if row.architectures.is_empty() {
            return Err(CatalogError::NoArchitectures(release));
        }
        // A template without {arch} can only serve the one architecture it names.
        if !tokens.contains(&ARCH_PLACEHOLDER) && row.architectures.len() != 1 {
            return Err(CatalogError::FixedArchitecture(release));
        }

        let sample = render_template(&url_template, "codename", "arch");
        url::Url::parse(&sample).map_err(|source| CatalogError::InvalidUrl {
            release: release.clone(),
            url: url_template.clone(),
            source,
        })?;

        if let Some(key) = &row.key {
            let is_fingerprint = hex::decode(key.id()).map(|bytes| bytes.len() == 20).unwrap_or(false);
            if !is_fingerprint {
                return Err(CatalogError::InvalidFingerprint {
                    release,
                    id: key.id().to_string(),
                });
            }
            url::Url::parse(key.key_source()).map_err(|source| CatalogError::InvalidUrl {
                release: release.clone(),
                url: key.key_source().to_string(),
                source,
            })?;
        }

        Ok(Self {
            release_id: release,
            url_template,
            key: row.key,
            archived: row.archived,
            supported_architectures: row.architectures,
        })
    }

    /// Exact identifier, e.g. `LATEST` or `4.1`.
    pub fn release_id(&self) -> &str {
        &self.release_id
    }

    /// Absolute URL with `{codename}` and optionally `{arch}` placeholders.
    pub fn url_template(&self) -> &str {
        &self.url_template
    }

    pub fn key(&self) -> Option<&RepositoryKey> {
        self.key.as_ref()
    }

    pub fn key_id(&self) -> Option<&str> {
        self.key.as_ref().map(|k| k.id())
    }

    pub fn key_source(&self) -> Option<&str> {
        self.key.as_ref().map(|k| k.key_source())
    }

    /// True when the release lives under the old-releases path.
    pub fn is_archived(&self) -> bool {
        self.archived
    }

    pub fn supported_architectures(&self) -> &BTreeSet<String> {
        &self.supported_architectures
    }

    /// Exact, case-sensitive membership test.
    pub fn supports(&self, architecture: &str) -> bool {
        self.supported_architectures.contains(architecture)
    }

    pub fn render(&self, codename: &str, architecture: &str) -> String {
        render_template(&self.url_template, codename, architecture)
    }
}
