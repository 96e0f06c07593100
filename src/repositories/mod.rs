pub mod apt;
mod models;

use std::{collections::HashSet, fs, path::Path, sync::OnceLock};

use tracing::debug;

pub use models::ReleaseEntry; // Re-export the model type to callers.
use models::CatalogDocument;

/// Environment variable that may carry a complete catalog as JSON.
pub const CATALOG_ENV: &str = "GLUSTER_REPO_CATALOG";

const BUILTIN_CATALOG: &str = include_str!("../../resources/catalog.json");

/// Process-wide catalog (set exactly once, before any resolution).
static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Immutable, version-indexed table of GlusterFS releases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<ReleaseEntry>,
}

impl Catalog {
    /// The catalog shipped with the crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    /// Load from a JSON file path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let data = fs::read_to_string(path).map_err(CatalogError::Io)?;
        Self::from_json_str(&data)
    }

    /// Load from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(json).map_err(CatalogError::Json)?;
        Self::from_document(document)
    }

    /// Load from an env var containing JSON.
    pub fn from_env(var: &str) -> Result<Self, CatalogError> {
        let s = std::env::var(var).map_err(|_| CatalogError::MissingEnv(var.to_string()))?;
        Self::from_json_str(&s)
    }

    /// Load from `file` when given, then from `$GLUSTER_REPO_CATALOG`, then the
    /// built-in table.
    pub fn load(file: Option<&Path>) -> Result<Self, CatalogError> {
        if let Some(path) = file {
            debug!("loading release catalog from {}", path.display());
            return Self::from_file(path);
        }

        if std::env::var_os(CATALOG_ENV).is_some() {
            debug!("loading release catalog from ${CATALOG_ENV}");
            return Self::from_env(CATALOG_ENV);
        }

        debug!("loading built-in release catalog");
        Self::builtin()
    }

    fn from_document(document: CatalogDocument) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(document.releases.len());

        for row in document.releases {
            if !seen.insert(row.release.clone()) {
                return Err(CatalogError::DuplicateRelease(row.release));
            }
            entries.push(ReleaseEntry::from_row(&document.root, &document.archive_segment, row)?);
        }

        debug!("loaded release catalog with {} entries", entries.len());
        Ok(Self { entries })
    }

    /// Exact key match; `"4"` does not find `"4.1"`.
    pub fn lookup(&self, release_id: &str) -> Option<&ReleaseEntry> {
        self.entries.iter().find(|e| e.release_id() == release_id)
    }

    /// Release identifiers in catalog order.
    pub fn releases(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.release_id())
    }

    pub fn entries(&self) -> &[ReleaseEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Install the process-wide catalog. Must happen before the first resolution.
pub fn install(catalog: Catalog) -> Result<&'static Catalog, CatalogError> {
    CATALOG
        .set(catalog)
        .map_err(|_| CatalogError::AlreadyInitialized)?;
    installed()
}

/// Borrow the process-wide catalog.
pub fn installed() -> Result<&'static Catalog, CatalogError> {
    CATALOG.get().ok_or(CatalogError::NotInitialized)
}

/// ---- Errors ----
#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("release catalog is not initialized")]
    NotInitialized,
    #[error("release catalog already initialized")]
    AlreadyInitialized,
    #[error("missing env var: {0}")]
    MissingEnv(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("release '{0}' appears more than once in the catalog")]
    DuplicateRelease(String),
    #[error("release '{0}' declares no supported architectures")]
    NoArchitectures(String),
    #[error("release '{0}' has a fixed architecture in its URL but lists several architectures")]
    FixedArchitecture(String),
    #[error("release '{0}' URL template must contain {{codename}}")]
    MissingCodename(String),
    #[error("release '{release}' URL template uses unknown placeholder {placeholder}")]
    UnknownPlaceholder { release: String, placeholder: String },
    #[error("release '{0}' URL template must end with '/'")]
    MissingTrailingSlash(String),
    #[error("release '{release}' has an invalid key fingerprint '{id}'")]
    InvalidFingerprint { release: String, id: String },
    #[error("release '{release}' has an invalid URL '{url}': {source}")]
    InvalidUrl {
        release: String,
        url: String,
        #[source]
        source: url::ParseError,
    },
}
