use tracing::trace;

use crate::license::spdx::LicenseCatalog;
use crate::models::{LicenseSource, PomLicense, SpdxLicense};

/// Outcome of consulting one source for one license clause.
#[derive(Debug, PartialEq)]
enum Step {
    /// The source could not decide; consult the next one.
    TryNextSource,
    /// The source matched one or more catalog entries.
    Resolved(Vec<SpdxLicense>),
    /// The source was applicable but matched nothing, and ends resolution.
    Terminal,
}

/// Map a declared license clause to SPDX licenses, consulting `sources` in order.
///
/// - `Name`: an absent name or an unrecognized name moves on to the next source.
/// - `Url`: an absent URL moves on; a present URL ends resolution with whatever
///   the catalog returns for it, even nothing.
///
/// An empty result means the clause is unknown.
pub fn resolve<C: LicenseCatalog + ?Sized>(
    license: &PomLicense,
    sources: &[LicenseSource],
    catalog: &C,
) -> Vec<SpdxLicense> {
    for source in sources {
        match attempt(license, *source, catalog) {
            Step::TryNextSource => continue,
            Step::Resolved(licenses) => return licenses,
            Step::Terminal => return Vec::new(),
        }
    }
    trace!(?license, "no source left");
    Vec::new()
}

fn attempt<C: LicenseCatalog + ?Sized>(
    license: &PomLicense,
    source: LicenseSource,
    catalog: &C,
) -> Step {
    match source {
        LicenseSource::Name => {
            let Some(name) = license.name.as_deref() else {
                return Step::TryNextSource;
            };
            match catalog.find_by_identifier(name) {
                Some(found) => {
                    trace!(
                        license_name = name,
                        identifier = %found.identifier,
                        "resolved by name"
                    );
                    Step::Resolved(vec![found])
                }
                None => {
                    trace!(license_name = name, "name is not an SPDX identifier");
                    Step::TryNextSource
                }
            }
        }
        LicenseSource::Url => {
            let Some(url) = license.url.as_deref() else {
                return Step::TryNextSource;
            };
            let found = catalog.find_by_url(url);
            trace!(url, matches = found.len(), "resolved by url");
            if found.is_empty() {
                Step::Terminal
            } else {
                Step::Resolved(found)
            }
        }
    }
}
