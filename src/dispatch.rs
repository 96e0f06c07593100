use std::fmt;

use crate::repositories::{Catalog, apt::AptProvider};
use crate::source::Provider;

/// Host OS family as reported by fact collection (`osfamily`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OsFamily {
    Debian,
    RedHat,
    Other(String),
}

impl From<&str> for OsFamily {
    fn from(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "debian" => Self::Debian,
            "redhat" => Self::RedHat,
            _ => Self::Other(value.to_string()),
        }
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debian => f.write_str("Debian"),
            Self::RedHat => f.write_str("RedHat"),
            Self::Other(name) => f.write_str(name),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("OS family '{0}' is not yet supported")]
    UnsupportedOsFamily(OsFamily),
}

/// Pick the provider for a host's package manager family.
pub fn provider_for<'a>(family: &OsFamily, catalog: &'a Catalog) -> Result<Box<dyn Provider + 'a>, DispatchError> {
    match family {
        OsFamily::Debian => Ok(Box::new(AptProvider::new(catalog))),
        // YUM/DNF sources are served by a separate resolver
        other => Err(DispatchError::UnsupportedOsFamily(other.clone())),
    }
}
