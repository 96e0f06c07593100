use super::RepositoryDescriptor;

/// Release resolved when the caller does not ask for a specific one.
pub const DEFAULT_RELEASE: &str = "LATEST";

/// Inputs of a single resolution: host facts plus what the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestParameters {
    pub distro_codename: String, // e.g., "bookworm"
    pub architecture: String,    // e.g., "amd64"
    pub release: String,         // "LATEST" | "4.1" | "3.12"
    pub priority: Option<String>,
}

impl RequestParameters {
    /// Parameters for the default release with no pin.
    pub fn new(distro_codename: impl Into<String>, architecture: impl Into<String>) -> Self {
        Self {
            distro_codename: distro_codename.into(),
            architecture: architecture.into(),
            release: DEFAULT_RELEASE.to_string(),
            priority: None,
        }
    }

    pub fn with_release(mut self, release: impl Into<String>) -> Self {
        self.release = release.into();
        self
    }

    /// Accepts either `"700"` or `700`; the value is carried as an opaque string.
    pub fn with_priority(mut self, priority: impl ToString) -> Self {
        self.priority = Some(priority.to_string());
        self
    }
}

/// Reasons a request cannot be turned into a descriptor.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    #[error("GlusterFS release '{0}' is not in the release catalog")]
    UnknownRelease(String),
    #[error("architecture '{architecture}' is not yet supported for GlusterFS release '{release}'")]
    UnsupportedArchitecture { architecture: String, release: String },
}

/// One implementation per package-management family.
pub trait Provider {
    /// Host OS family this provider serves, e.g. `Debian`.
    fn family(&self) -> &'static str;

    fn resolve(&self, params: &RequestParameters) -> Result<RepositoryDescriptor, ResolutionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = RequestParameters::new("bookworm", "amd64");
        assert_eq!(params.release, "LATEST");
        assert_eq!(params.priority, None);
    }

    #[test]
    fn test_priority_accepts_numbers_and_strings() {
        let numeric = RequestParameters::new("bookworm", "amd64").with_priority(700);
        let text = RequestParameters::new("bookworm", "amd64").with_priority("700");
        assert_eq!(numeric, text);
    }

    #[test]
    fn test_error_display() {
        let err = ResolutionError::UnknownRelease("4".to_string());
        assert_eq!(err.to_string(), "GlusterFS release '4' is not in the release catalog");

        let err = ResolutionError::UnsupportedArchitecture {
            architecture: "zLinux".to_string(),
            release: "LATEST".to_string(),
        };
        assert!(err.to_string().contains("not yet supported"));
        assert!(err.to_string().contains("zLinux"));
    }
}
