use serde::{Deserialize, Serialize};
use std::fmt;

/// Section every GlusterFS APT repository publishes its packages under.
pub const REPO_SECTION: &str = "main";

/// Prefix of the source name handed to the package manager.
pub const NAME_PREFIX: &str = "glusterfs-";

/// Signing key the package manager should fetch and trust for a repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepositoryKey {
    id: String,
    key_source: String,
}

impl RepositoryKey {
    pub fn new(id: impl Into<String>, key_source: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            key_source: key_source.into(),
        }
    }

    /// GPG fingerprint, e.g. `EED3351AFD72E5437C050F0388F6CDEE78FA6D97`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// URL the public key can be downloaded from.
    pub fn key_source(&self) -> &str {
        &self.key_source
    }
}

impl fmt::Display for RepositoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.id, self.key_source)
    }
}

/// Ready-to-register package source, regardless of which package manager
/// family resolved it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryDescriptor {
    name: String,
    repo_section: String,
    location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    key: Option<RepositoryKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pin: Option<String>,
}

impl RepositoryDescriptor {
    /// Assemble the descriptor for `release`. The name and section are derived
    /// here so every provider names its sources the same way.
    pub fn for_release(release: &str, location: String, key: Option<RepositoryKey>, pin: Option<String>) -> Self {
        Self {
            name: format!("{NAME_PREFIX}{release}"),
            repo_section: REPO_SECTION.to_string(),
            location,
            key,
            pin,
        }
    }

    /// Source name, e.g. `glusterfs-LATEST`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn repo_section(&self) -> &str {
        &self.repo_section
    }

    /// Fully rendered URL of the package index directory.
    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn key(&self) -> Option<&RepositoryKey> {
        self.key.as_ref()
    }

    // Priority passed through verbatim
    pub fn pin(&self) -> Option<&str> {
        self.pin.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_and_section_are_derived() {
        let descriptor = RepositoryDescriptor::for_release("4.1", "https://example.org/apt/".to_string(), None, None);

        assert_eq!(descriptor.name(), "glusterfs-4.1");
        assert_eq!(descriptor.repo_section(), "main");
        assert!(descriptor.key().is_none());
        assert!(descriptor.pin().is_none());
    }

    #[test]
    fn test_json_omits_absent_fields() {
        let descriptor = RepositoryDescriptor::for_release("LATEST", "https://example.org/apt/".to_string(), None, None);

        let value = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(value["name"], "glusterfs-LATEST");
        assert_eq!(value["repo_section"], "main");
        assert!(value.get("key").is_none());
        assert!(value.get("pin").is_none());
    }

    #[test]
    fn test_json_carries_key_and_pin() {
        let key = RepositoryKey::new("ABCD", "https://example.org/rsa.pub");
        let descriptor =
            RepositoryDescriptor::for_release("3.12", "https://example.org/apt/".to_string(), Some(key), Some("700".to_string()));

        let value = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(value["key"]["id"], "ABCD");
        assert_eq!(value["key"]["key_source"], "https://example.org/rsa.pub");
        assert_eq!(value["pin"], "700");
    }
}
