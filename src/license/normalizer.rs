use std::collections::{BTreeSet, HashMap};

use rayon::prelude::*;
use tracing::debug;

use crate::license::resolver::resolve;
use crate::license::spdx::LicenseCatalog;
use crate::models::{
    ArtifactDetail, ArtifactScm, DependencyCoordinates, LicenseSource, PomInfo, UnknownLicense,
};

/// Resolve the declared licenses of every dependency.
///
/// Produces exactly one [`ArtifactDetail`] per entry of `coordinate_to_pom_info`,
/// sorted by group, artifact and version. Dependencies are resolved in
/// parallel; the order of the input map has no effect on the result.
pub fn normalize_license_info<C: LicenseCatalog + ?Sized>(
    coordinate_to_pom_info: &HashMap<DependencyCoordinates, PomInfo>,
    sources: &[LicenseSource],
    catalog: &C,
) -> Vec<ArtifactDetail> {
    let mut details: Vec<ArtifactDetail> = coordinate_to_pom_info
        .par_iter()
        .map(|(id, pom_info)| artifact_detail(id, pom_info, sources, catalog))
        .collect();

    sort_details(&mut details);
    details
}

/// Build the detail record for one dependency.
pub fn artifact_detail<C: LicenseCatalog + ?Sized>(
    id: &DependencyCoordinates,
    pom_info: &PomInfo,
    sources: &[LicenseSource],
    catalog: &C,
) -> ArtifactDetail {
    let mut spdx_licenses = BTreeSet::new();
    let mut unknown_licenses = BTreeSet::new();

    for license in &pom_info.licenses {
        let resolved = resolve(license, sources, catalog);
        if resolved.is_empty() {
            unknown_licenses.insert(UnknownLicense::from(license));
        } else {
            spdx_licenses.extend(resolved);
        }
    }

    debug!(
        dependency = %id,
        resolved = spdx_licenses.len(),
        unknown = unknown_licenses.len(),
        "normalized licenses"
    );

    ArtifactDetail {
        group_id: id.group.clone(),
        artifact_id: id.artifact.clone(),
        version: id.version.clone(),
        name: pom_info.name.clone(),
        spdx_licenses,
        unknown_licenses,
        scm: pom_info
            .scm
            .as_ref()
            .and_then(|scm| scm.url.clone())
            .map(|url| ArtifactScm { url }),
    }
}

/// Stable sort by (group, artifact, version).
pub fn sort_details(details: &mut [ArtifactDetail]) {
    details.sort_by(|a, b| {
        (&a.group_id, &a.artifact_id, &a.version).cmp(&(&b.group_id, &b.artifact_id, &b.version))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::license::fixtures::{apache, gpl2, mit, FixtureCatalog};
    use crate::models::{PomLicense, PomScm, SpdxLicense};
    use LicenseSource::{Name, Url};

    fn coords(group: &str, artifact: &str, version: &str) -> DependencyCoordinates {
        DependencyCoordinates::new(group, artifact, version)
    }

    fn pom(licenses: Vec<PomLicense>) -> PomInfo {
        PomInfo {
            name: Some("Lib".to_string()),
            licenses,
            scm: None,
        }
    }

    fn single(licenses: Vec<PomLicense>, sources: &[LicenseSource]) -> ArtifactDetail {
        let mut input = HashMap::new();
        input.insert(coords("com.example", "lib", "1.0"), pom(licenses));
        let mut details = normalize_license_info(&input, sources, &FixtureCatalog::default());
        assert_eq!(details.len(), 1);
        details.remove(0)
    }

    #[test]
    fn test_known_identifier() {
        let detail = single(vec![PomLicense::new(Some("Apache-2.0"), None)], &[Name]);
        assert_eq!(detail.group_id, "com.example");
        assert_eq!(detail.artifact_id, "lib");
        assert_eq!(detail.version, "1.0");
        assert_eq!(detail.name.as_deref(), Some("Lib"));
        assert_eq!(detail.spdx_licenses, BTreeSet::from([apache()]));
        assert!(detail.unknown_licenses.is_empty());
        assert!(detail.scm.is_none());
    }

    #[test]
    fn test_unrecognized_name_and_url() {
        let detail = single(
            vec![PomLicense::new(
                Some("My Custom License"),
                Some("https://example.com/license"),
            )],
            &[Name, Url],
        );
        assert!(detail.spdx_licenses.is_empty());
        assert_eq!(
            detail.unknown_licenses,
            BTreeSet::from([UnknownLicense {
                name: Some("My Custom License".to_string()),
                url: Some("https://example.com/license".to_string()),
            }])
        );
        assert!(detail.has_unknown_licenses());
    }

    #[test]
    fn test_mixed_clauses_split_into_both_sets() {
        let detail = single(
            vec![
                PomLicense::new(Some("MIT"), None),
                PomLicense::new(None, Some("https://example.com/eula")),
                PomLicense::new(
                    None,
                    Some("https://www.gnu.org/licenses/old-licenses/gpl-2.0.html"),
                ),
            ],
            &[Name, Url],
        );
        let expected: BTreeSet<SpdxLicense> = [mit(), gpl2("only"), gpl2("or-later")].into();
        assert_eq!(detail.spdx_licenses, expected);
        assert_eq!(detail.unknown_licenses.len(), 1);
    }

    #[test]
    fn test_duplicate_clauses_collapse() {
        let detail = single(
            vec![
                PomLicense::new(Some("MIT"), None),
                PomLicense::new(Some("MIT"), None),
                PomLicense::new(None, Some("https://opensource.org/licenses/MIT")),
                PomLicense::new(Some("Custom"), None),
                PomLicense::new(Some("Custom"), None),
            ],
            &[Name, Url],
        );
        assert_eq!(detail.spdx_licenses, BTreeSet::from([mit()]));
        assert_eq!(detail.unknown_licenses.len(), 1);
    }

    #[test]
    fn test_no_licenses() {
        let detail = single(Vec::new(), &[Name, Url]);
        assert!(detail.spdx_licenses.is_empty());
        assert!(detail.unknown_licenses.is_empty());
    }

    #[test]
    fn test_empty_clause_is_unknown() {
        let detail = single(vec![PomLicense::default()], &[Name, Url]);
        assert_eq!(
            detail.unknown_licenses,
            BTreeSet::from([UnknownLicense { name: None, url: None }])
        );
    }

    #[test]
    fn test_scm_url() {
        let mut input = HashMap::new();
        let mut with_scm = pom(Vec::new());
        with_scm.scm = Some(PomScm {
            url: Some("https://github.com/example/lib".to_string()),
        });
        let mut scm_without_url = pom(Vec::new());
        scm_without_url.scm = Some(PomScm { url: None });
        input.insert(coords("a", "with-scm", "1"), with_scm);
        input.insert(coords("a", "without-url", "1"), scm_without_url);

        let details = normalize_license_info(&input, &[Name], &FixtureCatalog::default());
        assert_eq!(
            details[0].scm,
            Some(ArtifactScm {
                url: "https://github.com/example/lib".to_string()
            })
        );
        assert!(details[1].scm.is_none());
    }

    #[test]
    fn test_one_detail_per_dependency_sorted() {
        let mut input = HashMap::new();
        input.insert(coords("b", "x", "1"), pom(Vec::new()));
        input.insert(coords("a", "y", "1"), pom(Vec::new()));
        input.insert(coords("a", "x", "2"), pom(Vec::new()));
        input.insert(coords("a", "x", "10"), pom(Vec::new()));

        let details = normalize_license_info(&input, &[Name], &FixtureCatalog::default());
        let order: Vec<(&str, &str, &str)> = details
            .iter()
            .map(|d| (d.group_id.as_str(), d.artifact_id.as_str(), d.version.as_str()))
            .collect();
        // versions compare as strings
        assert_eq!(
            order,
            vec![("a", "x", "10"), ("a", "x", "2"), ("a", "y", "1"), ("b", "x", "1")]
        );
    }

    #[test]
    fn test_idempotent() {
        let mut input = HashMap::new();
        for i in 0..50 {
            input.insert(
                coords("com.example", &format!("lib{i}"), "1.0"),
                pom(vec![
                    PomLicense::new(Some("Apache-2.0"), None),
                    PomLicense::new(Some("Custom"), Some("https://example.com")),
                ]),
            );
        }
        let catalog = FixtureCatalog::default();
        let first = normalize_license_info(&input, &[Name, Url], &catalog);
        let mut entries: Vec<_> = input.into_iter().collect();
        entries.reverse();
        let rebuilt: HashMap<_, _> = entries.into_iter().collect();
        let second = normalize_license_info(&rebuilt, &[Name, Url], &catalog);
        assert_eq!(first.len(), 50);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let detail = |name: &str| ArtifactDetail {
            group_id: "g".to_string(),
            artifact_id: "a".to_string(),
            version: "1".to_string(),
            name: Some(name.to_string()),
            spdx_licenses: BTreeSet::new(),
            unknown_licenses: BTreeSet::new(),
            scm: None,
        };
        let mut details = vec![detail("first"), detail("second"), detail("third")];
        sort_details(&mut details);
        let names: Vec<_> = details.iter().map(|d| d.name.as_deref().unwrap()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }
}
