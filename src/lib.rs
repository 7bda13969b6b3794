//! `license-normalizr` — resolve free-text dependency license declarations
//! into SPDX licenses.
//!
//! # Flow
//! 1. Load the `{coordinates → metadata}` map ([`input::load_metadata`]).
//! 2. Pick the resolution-source priority ([`config::load_config`]).
//! 3. Resolve every declared license clause against the catalog and fold the
//!    results into one record per dependency
//!    ([`license::normalizer::normalize_license_info`]).
//! 4. Write the sorted [`models::ArtifactDetail`] list as JSON ([`output`]).

pub mod config;
pub mod error;
pub mod input;
pub mod license;
pub mod models;
pub mod output;

pub use error::{NormalizeError, Result};
pub use license::normalizer::normalize_license_info;
pub use license::spdx::{LicenseCatalog, SpdxCatalog};
