pub mod dispatch;
pub mod helpers;
pub mod repositories;
pub mod source;

pub use dispatch::{DispatchError, OsFamily, provider_for};
pub use repositories::{CATALOG_ENV, Catalog, CatalogError, ReleaseEntry, apt::AptProvider};
pub use source::{DEFAULT_RELEASE, Provider, RepositoryDescriptor, RepositoryKey, RequestParameters, ResolutionError};
