use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Identity of a published dependency: `group:artifact:version`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyCoordinates {
    pub group: String,
    pub artifact: String,
    pub version: String,
}

impl DependencyCoordinates {
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
        }
    }
}

impl std::fmt::Display for DependencyCoordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)
    }
}

/// Metadata extracted from a dependency's manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PomInfo {
    pub name: Option<String>,
    #[serde(default)]
    pub licenses: Vec<PomLicense>,
    pub scm: Option<PomScm>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PomScm {
    pub url: Option<String>,
}

/// One declared license clause, exactly as the manifest states it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PomLicense {
    pub name: Option<String>,
    pub url: Option<String>,
}

impl PomLicense {
    pub fn new(name: Option<&str>, url: Option<&str>) -> Self {
        Self {
            name: name.map(str::to_string),
            url: url.map(str::to_string),
        }
    }
}

/// Which declared field of a license clause is matched against the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenseSource {
    /// Match the declared name as an SPDX identifier.
    Name,
    /// Match the declared URL against known license URLs.
    Url,
}

impl std::fmt::Display for LicenseSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LicenseSource::Name => write!(f, "name"),
            LicenseSource::Url => write!(f, "url"),
        }
    }
}

/// A canonical SPDX license as reported by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SpdxLicense {
    pub identifier: String,
    pub name: String,
    pub url: String,
}

/// A declared license clause that no resolution source recognized.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UnknownLicense {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl From<&PomLicense> for UnknownLicense {
    fn from(license: &PomLicense) -> Self {
        Self {
            name: license.name.clone(),
            url: license.url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactScm {
    pub url: String,
}

/// Normalized license summary for one dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactDetail {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub spdx_licenses: BTreeSet<SpdxLicense>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub unknown_licenses: BTreeSet<UnknownLicense>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scm: Option<ArtifactScm>,
}

impl ArtifactDetail {
    pub fn has_unknown_licenses(&self) -> bool {
        !self.unknown_licenses.is_empty()
    }
}
