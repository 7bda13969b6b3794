//! Loading already-extracted dependency metadata.
//!
//! The input is a JSON array with one record per dependency:
//!
//! ```json
//! [
//!   {
//!     "groupId": "com.example",
//!     "artifactId": "lib",
//!     "version": "1.0",
//!     "name": "Lib",
//!     "scm": { "url": "https://github.com/example/lib" },
//!     "licenses": [{ "name": "Apache-2.0", "url": null }]
//!   }
//! ]
//! ```

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::error::{NormalizeError, Result};
use crate::models::{DependencyCoordinates, PomInfo, PomLicense, PomScm};

/// One dependency as it appears in the input document.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyRecord {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub scm: Option<PomScm>,
    #[serde(default)]
    pub licenses: Vec<PomLicense>,
}

impl DependencyRecord {
    fn into_entry(self) -> (DependencyCoordinates, PomInfo) {
        (
            DependencyCoordinates::new(self.group_id, self.artifact_id, self.version),
            PomInfo {
                name: self.name,
                licenses: self.licenses,
                scm: self.scm,
            },
        )
    }
}

/// Parse an input document into the coordinates-to-metadata map.
///
/// `origin` only labels errors. When two records share coordinates the later
/// one wins.
pub fn parse_metadata(
    content: &str,
    origin: &Path,
) -> Result<HashMap<DependencyCoordinates, PomInfo>> {
    let records: Vec<DependencyRecord> =
        serde_json::from_str(content).map_err(|source| NormalizeError::InputParse {
            path: origin.to_path_buf(),
            source,
        })?;

    let mut map = HashMap::with_capacity(records.len());
    for record in records {
        let (id, pom_info) = record.into_entry();
        if map.contains_key(&id) {
            warn!(dependency = %id, "duplicate coordinates in input, keeping the last record");
        }
        map.insert(id, pom_info);
    }
    Ok(map)
}

/// Load the metadata map from `path`, or from stdin when `path` is `-`.
pub fn load_metadata(path: &Path) -> Result<HashMap<DependencyCoordinates, PomInfo>> {
    let read_err = |source: std::io::Error| NormalizeError::InputRead {
        path: path.to_path_buf(),
        source,
    };

    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map_err(read_err)?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(read_err)?
    };

    parse_metadata(&content, path)
}
