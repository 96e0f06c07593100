mod descriptor;
mod request;

pub use descriptor::{NAME_PREFIX, REPO_SECTION, RepositoryDescriptor, RepositoryKey};
pub use request::{DEFAULT_RELEASE, Provider, RequestParameters, ResolutionError};
