use tracing::{debug, warn};

use crate::repositories::Catalog;
use crate::source::{Provider, RepositoryDescriptor, RequestParameters, ResolutionError};

/// Resolves GlusterFS APT sources for Debian-family hosts.
#[derive(Debug, Clone, Copy)]
pub struct AptProvider<'a> {
    catalog: &'a Catalog,
}

impl<'a> AptProvider<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }
}

impl Provider for AptProvider<'_> {
    fn family(&self) -> &'static str {
        "Debian"
    }

    fn resolve(&self, params: &RequestParameters) -> Result<RepositoryDescriptor, ResolutionError> {
        let release = params.release.as_str();
        let arch = params.architecture.as_str();

        // 1) Release must be catalogued verbatim
        let Some(entry) = self.catalog.lookup(release) else {
            warn!("GlusterFS release '{release}' is not in the release catalog");
            return Err(ResolutionError::UnknownRelease(release.to_string()));
        };

        // 2) Single architecture gate, even for LATEST
        if !entry.supports(arch) {
            warn!("architecture '{arch}' is not yet supported for GlusterFS release '{release}'");
            return Err(ResolutionError::UnsupportedArchitecture {
                architecture: arch.to_string(),
                release: release.to_string(),
            });
        }

        // 3) Render and assemble
        let location = entry.render(&params.distro_codename, arch);
        let descriptor = RepositoryDescriptor::for_release(release, location, entry.key().cloned(), params.priority.clone());

        debug!(
            "resolved {} -> {} (archived: {}, signed: {})",
            descriptor.name(),
            descriptor.location(),
            entry.is_archived(),
            descriptor.key().is_some()
        );

        Ok(descriptor)
    }
}
