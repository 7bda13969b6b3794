//! Resolution of declared license clauses into SPDX licenses.
//!
//! - [`spdx`] — the [`LicenseCatalog`](spdx::LicenseCatalog) lookup interface and
//!   the built-in [`SpdxCatalog`](spdx::SpdxCatalog).
//! - [`resolver`] — resolves a single clause by trying each
//!   [`LicenseSource`](crate::models::LicenseSource) in priority order.
//! - [`normalizer`] — resolves every clause of every dependency and produces
//!   the sorted [`ArtifactDetail`](crate::models::ArtifactDetail) list.

pub mod normalizer;
pub mod resolver;
pub mod spdx;

#[cfg(test)]
pub(crate) mod fixtures {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::spdx::LicenseCatalog;
    use crate::models::SpdxLicense;

    /// Catalog knowing two identifiers, one single-match URL and one URL
    /// shared by two licenses. Counts identifier lookups.
    #[derive(Default)]
    pub struct FixtureCatalog {
        name_lookups: AtomicUsize,
    }

    impl FixtureCatalog {
        pub fn name_lookups(&self) -> usize {
            self.name_lookups.load(Ordering::SeqCst)
        }
    }

    impl LicenseCatalog for FixtureCatalog {
        fn find_by_identifier(&self, identifier: &str) -> Option<SpdxLicense> {
            self.name_lookups.fetch_add(1, Ordering::SeqCst);
            match identifier {
                "Apache-2.0" => Some(apache()),
                "MIT" => Some(mit()),
                _ => None,
            }
        }

        fn find_by_url(&self, url: &str) -> Vec<SpdxLicense> {
            match url {
                "https://opensource.org/licenses/MIT" => vec![mit()],
                "https://www.gnu.org/licenses/old-licenses/gpl-2.0.html" => {
                    vec![gpl2("only"), gpl2("or-later")]
                }
                _ => Vec::new(),
            }
        }
    }

    pub fn apache() -> SpdxLicense {
        SpdxLicense {
            identifier: "Apache-2.0".to_string(),
            name: "Apache License 2.0".to_string(),
            url: "https://www.apache.org/licenses/LICENSE-2.0".to_string(),
        }
    }

    pub fn mit() -> SpdxLicense {
        SpdxLicense {
            identifier: "MIT".to_string(),
            name: "MIT License".to_string(),
            url: "https://opensource.org/licenses/MIT".to_string(),
        }
    }

    pub fn gpl2(suffix: &str) -> SpdxLicense {
        SpdxLicense {
            identifier: format!("GPL-2.0-{suffix}"),
            name: format!("GNU General Public License v2.0 {suffix}"),
            url: "https://www.gnu.org/licenses/old-licenses/gpl-2.0.html".to_string(),
        }
    }
}
