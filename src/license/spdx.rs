use crate::models::SpdxLicense;

/// Lookup interface over a canonical license registry.
///
/// Implementations must be read-only so lookups can run from many threads.
pub trait LicenseCatalog: Sync {
    /// Find the license whose SPDX identifier is exactly `identifier`.
    fn find_by_identifier(&self, identifier: &str) -> Option<SpdxLicense>;

    /// Find every license known by `url`. Several licenses may share a URL
    /// (e.g. the `-only` and `-or-later` variants of the GNU licenses).
    fn find_by_url(&self, url: &str) -> Vec<SpdxLicense>;
}

/// One entry of the built-in license table.
#[derive(Debug)]
pub struct SpdxId {
    pub id: &'static str,
    pub name: &'static str,
    pub url: &'static str,
    /// Other URLs projects commonly declare for this license.
    pub other_urls: &'static [&'static str],
}

impl SpdxId {
    pub fn to_spdx_license(&self) -> SpdxLicense {
        SpdxLicense {
            identifier: self.id.to_string(),
            name: self.name.to_string(),
            url: self.url.to_string(),
        }
    }

    fn urls(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.url).chain(self.other_urls.iter().copied())
    }
}

const GPL_2_URLS: &[&str] = &[
    "https://opensource.org/licenses/GPL-2.0",
    "https://www.gnu.org/licenses/old-licenses/gpl-2.0.html",
    "https://www.gnu.org/licenses/old-licenses/gpl-2.0.txt",
];

const GPL_3_URLS: &[&str] = &[
    "https://opensource.org/licenses/GPL-3.0",
    "https://www.gnu.org/licenses/gpl-3.0.html",
    "https://www.gnu.org/licenses/gpl-3.0.txt",
    "https://www.gnu.org/licenses/gpl.txt",
];

const LGPL_21_URLS: &[&str] = &[
    "https://opensource.org/licenses/LGPL-2.1",
    "https://www.gnu.org/licenses/old-licenses/lgpl-2.1.html",
    "https://www.gnu.org/licenses/old-licenses/lgpl-2.1.txt",
];

const LGPL_3_URLS: &[&str] = &[
    "https://opensource.org/licenses/LGPL-3.0",
    "https://www.gnu.org/licenses/lgpl-3.0.html",
    "https://www.gnu.org/licenses/lgpl-3.0.txt",
    "https://www.gnu.org/licenses/lgpl+gpl-3.0.txt",
    "https://www.gnu.org/licenses/lgpl.txt",
];

const AGPL_3_URLS: &[&str] = &[
    "https://opensource.org/licenses/AGPL-3.0",
    "https://www.gnu.org/licenses/agpl-3.0.html",
];

/// Licenses most often declared in published manifests, with the URLs they
/// are declared under.
pub static SPDX_IDS: &[SpdxId] = &[
    SpdxId {
        id: "0BSD",
        name: "BSD Zero Clause License",
        url: "http://landley.net/toybox/license.html",
        other_urls: &["https://opensource.org/licenses/0BSD"],
    },
    SpdxId {
        id: "AGPL-3.0-only",
        name: "GNU Affero General Public License v3.0 only",
        url: "https://www.gnu.org/licenses/agpl.txt",
        other_urls: AGPL_3_URLS,
    },
    SpdxId {
        id: "AGPL-3.0-or-later",
        name: "GNU Affero General Public License v3.0 or later",
        url: "https://www.gnu.org/licenses/agpl.txt",
        other_urls: AGPL_3_URLS,
    },
    SpdxId {
        id: "Apache-1.1",
        name: "Apache License 1.1",
        url: "http://apache.org/licenses/LICENSE-1.1",
        other_urls: &["https://opensource.org/licenses/Apache-1.1"],
    },
    SpdxId {
        id: "Apache-2.0",
        name: "Apache License 2.0",
        url: "https://www.apache.org/licenses/LICENSE-2.0",
        other_urls: &[
            "https://www.apache.org/licenses/LICENSE-2.0.txt",
            "https://www.apache.org/licenses/LICENSE-2.0.html",
            "https://opensource.org/licenses/Apache-2.0",
            "https://opensource.org/license/apache-2-0",
        ],
    },
    SpdxId {
        id: "BSD-2-Clause",
        name: "BSD 2-Clause \"Simplified\" License",
        url: "https://opensource.org/licenses/BSD-2-Clause",
        other_urls: &["https://opensource.org/license/bsd-2-clause"],
    },
    SpdxId {
        id: "BSD-3-Clause",
        name: "BSD 3-Clause \"New\" or \"Revised\" License",
        url: "https://opensource.org/licenses/BSD-3-Clause",
        other_urls: &[
            "https://opensource.org/license/bsd-3-clause",
            "https://www.eclipse.org/org/documents/edl-v10.php",
            "https://www.eclipse.org/org/documents/edl-v10.html",
        ],
    },
    SpdxId {
        id: "BSL-1.0",
        name: "Boost Software License 1.0",
        url: "https://www.boost.org/LICENSE_1_0.txt",
        other_urls: &["https://opensource.org/licenses/BSL-1.0"],
    },
    SpdxId {
        id: "CC0-1.0",
        name: "Creative Commons Zero v1.0 Universal",
        url: "https://creativecommons.org/publicdomain/zero/1.0/legalcode",
        other_urls: &["https://creativecommons.org/publicdomain/zero/1.0"],
    },
    SpdxId {
        id: "CC-BY-4.0",
        name: "Creative Commons Attribution 4.0 International",
        url: "https://creativecommons.org/licenses/by/4.0/legalcode",
        other_urls: &["https://creativecommons.org/licenses/by/4.0"],
    },
    SpdxId {
        id: "CDDL-1.0",
        name: "Common Development and Distribution License 1.0",
        url: "https://opensource.org/licenses/cddl1",
        other_urls: &["https://opensource.org/licenses/CDDL-1.0"],
    },
    SpdxId {
        id: "CDDL-1.1",
        name: "Common Development and Distribution License 1.1",
        url: "https://glassfish.java.net/public/CDDL+GPL_1_1.html",
        other_urls: &["https://javaee.github.io/glassfish/LICENSE"],
    },
    SpdxId {
        id: "EPL-1.0",
        name: "Eclipse Public License 1.0",
        url: "https://www.eclipse.org/legal/epl-v10.html",
        other_urls: &["https://opensource.org/licenses/EPL-1.0"],
    },
    SpdxId {
        id: "EPL-2.0",
        name: "Eclipse Public License 2.0",
        url: "https://www.eclipse.org/legal/epl-2.0",
        other_urls: &[
            "https://www.eclipse.org/legal/epl-v20.html",
            "https://opensource.org/licenses/EPL-2.0",
        ],
    },
    SpdxId {
        id: "GPL-2.0-only",
        name: "GNU General Public License v2.0 only",
        url: "https://www.gnu.org/licenses/old-licenses/gpl-2.0-standalone.html",
        other_urls: GPL_2_URLS,
    },
    SpdxId {
        id: "GPL-2.0-or-later",
        name: "GNU General Public License v2.0 or later",
        url: "https://www.gnu.org/licenses/old-licenses/gpl-2.0-standalone.html",
        other_urls: GPL_2_URLS,
    },
    SpdxId {
        id: "GPL-2.0-with-classpath-exception",
        name: "GNU General Public License v2.0 w/Classpath exception",
        url: "https://www.gnu.org/software/classpath/license.html",
        other_urls: &["https://openjdk.java.net/legal/gplv2+ce.html"],
    },
    SpdxId {
        id: "GPL-3.0-only",
        name: "GNU General Public License v3.0 only",
        url: "https://www.gnu.org/licenses/gpl-3.0-standalone.html",
        other_urls: GPL_3_URLS,
    },
    SpdxId {
        id: "GPL-3.0-or-later",
        name: "GNU General Public License v3.0 or later",
        url: "https://www.gnu.org/licenses/gpl-3.0-standalone.html",
        other_urls: GPL_3_URLS,
    },
    SpdxId {
        id: "ISC",
        name: "ISC License",
        url: "https://www.isc.org/licenses/",
        other_urls: &["https://opensource.org/licenses/ISC"],
    },
    SpdxId {
        id: "LGPL-2.1-only",
        name: "GNU Lesser General Public License v2.1 only",
        url: "https://www.gnu.org/licenses/old-licenses/lgpl-2.1-standalone.html",
        other_urls: LGPL_21_URLS,
    },
    SpdxId {
        id: "LGPL-2.1-or-later",
        name: "GNU Lesser General Public License v2.1 or later",
        url: "https://www.gnu.org/licenses/old-licenses/lgpl-2.1-standalone.html",
        other_urls: LGPL_21_URLS,
    },
    SpdxId {
        id: "LGPL-3.0-only",
        name: "GNU Lesser General Public License v3.0 only",
        url: "https://www.gnu.org/licenses/lgpl-3.0-standalone.html",
        other_urls: LGPL_3_URLS,
    },
    SpdxId {
        id: "LGPL-3.0-or-later",
        name: "GNU Lesser General Public License v3.0 or later",
        url: "https://www.gnu.org/licenses/lgpl-3.0-standalone.html",
        other_urls: LGPL_3_URLS,
    },
    SpdxId {
        id: "MIT",
        name: "MIT License",
        url: "https://opensource.org/licenses/MIT",
        other_urls: &[
            "https://opensource.org/license/mit",
            "https://mit-license.org",
            "https://www.opensource.org/licenses/mit-license.php",
        ],
    },
    SpdxId {
        id: "MIT-0",
        name: "MIT No Attribution",
        url: "https://github.com/aws/mit-0",
        other_urls: &["https://opensource.org/licenses/MIT-0"],
    },
    SpdxId {
        id: "MPL-1.1",
        name: "Mozilla Public License 1.1",
        url: "https://www.mozilla.org/MPL/MPL-1.1.html",
        other_urls: &["https://opensource.org/licenses/MPL-1.1"],
    },
    SpdxId {
        id: "MPL-2.0",
        name: "Mozilla Public License 2.0",
        url: "https://www.mozilla.org/MPL/2.0/",
        other_urls: &[
            "https://opensource.org/licenses/MPL-2.0",
            "https://mozilla.org/MPL/2.0",
        ],
    },
    SpdxId {
        id: "Unlicense",
        name: "The Unlicense",
        url: "https://unlicense.org/",
        other_urls: &[],
    },
    SpdxId {
        id: "WTFPL",
        name: "Do What The F*ck You Want To Public License",
        url: "http://www.wtfpl.net/about/",
        other_urls: &["http://sam.zoy.org/wtfpl/COPYING"],
    },
    SpdxId {
        id: "Zlib",
        name: "zlib License",
        url: "http://www.zlib.net/zlib_license.html",
        other_urls: &["https://opensource.org/licenses/Zlib"],
    },
];

/// The built-in catalog: [`SPDX_IDS`] first, then the full SPDX license list
/// for identifiers the table does not carry.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpdxCatalog;

impl SpdxCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl LicenseCatalog for SpdxCatalog {
    fn find_by_identifier(&self, identifier: &str) -> Option<SpdxLicense> {
        if let Some(entry) = SPDX_IDS.iter().find(|entry| entry.id == identifier) {
            return Some(entry.to_spdx_license());
        }

        // `spdx::license_id` strips a trailing `+`, so insist on the exact id
        spdx::license_id(identifier)
            .filter(|id| id.name == identifier)
            .map(|id| SpdxLicense {
                identifier: id.name.to_string(),
                name: id.full_name.to_string(),
                url: format!("https://spdx.org/licenses/{}.html", id.name),
            })
    }

    fn find_by_url(&self, url: &str) -> Vec<SpdxLicense> {
        let key = normalize_url(url);
        if key.is_empty() {
            return Vec::new();
        }

        SPDX_IDS
            .iter()
            .filter(|entry| entry.urls().any(|u| normalize_url(u) == key))
            .map(SpdxId::to_spdx_license)
            .collect()
    }
}

/// Reduce a license URL to a comparison key.
///
/// Scheme, a leading `www.` and trailing slashes are dropped and the result is
/// lower-cased, so `http://www.apache.org/licenses/LICENSE-2.0/` and
/// `https://apache.org/licenses/license-2.0` compare equal.
pub fn normalize_url(url: &str) -> String {
    let lowered = url.trim().to_ascii_lowercase();
    let without_scheme = lowered
        .strip_prefix("https://")
        .or_else(|| lowered.strip_prefix("http://"))
        .unwrap_or(&lowered);
    let without_www = without_scheme
        .strip_prefix("www.")
        .unwrap_or(without_scheme);
    without_www.trim_end_matches('/').to_string()
}
