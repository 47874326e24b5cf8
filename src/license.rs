//! SPDX license identifier to URL mapping.
//!
//! The manifest's `license` field usually carries a bare SPDX identifier
//! (e.g. `MIT`). This table maps the common identifiers to a canonical URL so
//! the generated README can link the license text. Unknown identifiers simply
//! yield no URL; the README then renders the license name without a link.

/// Known SPDX identifiers and their canonical license URLs.
///
/// Matching is case-insensitive on the identifier.
const LICENSE_URLS: &[(&str, &str)] = &[
    ("AFL-3.0", "https://opensource.org/licenses/AFL-3.0"),
    ("Apache-2.0", "https://opensource.org/licenses/Apache-2.0"),
    ("Artistic-2.0", "https://opensource.org/licenses/Artistic-2.0"),
    ("BSD-2-Clause", "https://opensource.org/licenses/BSD-2-Clause"),
    ("BSD-3-Clause", "https://opensource.org/licenses/BSD-3-Clause"),
    ("BSL-1.0", "https://opensource.org/licenses/BSL-1.0"),
    ("CC0-1.0", "https://creativecommons.org/publicdomain/zero/1.0/"),
    ("CC-BY-4.0", "https://creativecommons.org/licenses/by/4.0/"),
    ("CC-BY-SA-4.0", "https://creativecommons.org/licenses/by-sa/4.0/"),
    ("EPL-2.0", "https://opensource.org/licenses/EPL-2.0"),
    ("AGPL-3.0", "https://opensource.org/licenses/AGPL-3.0"),
    ("GPL-2.0", "https://opensource.org/licenses/GPL-2.0"),
    ("GPL-3.0", "https://opensource.org/licenses/GPL-3.0"),
    ("LGPL-2.1", "https://opensource.org/licenses/LGPL-2.1"),
    ("LGPL-3.0", "https://opensource.org/licenses/LGPL-3.0"),
    ("ISC", "https://opensource.org/licenses/ISC"),
    ("MIT", "https://opensource.org/licenses/MIT"),
    ("MPL-2.0", "https://opensource.org/licenses/MPL-2.0"),
    ("Unlicense", "https://unlicense.org/"),
    ("WTFPL", "http://www.wtfpl.net/about/"),
    ("Zlib", "https://opensource.org/licenses/Zlib"),
];

/// Looks up the canonical URL for a license identifier.
///
/// Returns `None` for identifiers not in the table, including compound SPDX
/// expressions like `MIT OR Apache-2.0`.
#[must_use]
pub fn license_url(name: &str) -> Option<&'static str> {
    let name = name.trim();
    LICENSE_URLS
        .iter()
        .find(|(id, _)| id.eq_ignore_ascii_case(name))
        .map(|(_, url)| *url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_identifiers_resolve() {
        assert_eq!(license_url("MIT"), Some("https://opensource.org/licenses/MIT"));
        assert_eq!(
            license_url("Apache-2.0"),
            Some("https://opensource.org/licenses/Apache-2.0")
        );
    }

    #[test]
    fn lookup_is_case_insensitive_and_trims() {
        assert_eq!(license_url(" mit "), Some("https://opensource.org/licenses/MIT"));
        assert_eq!(license_url("isc"), Some("https://opensource.org/licenses/ISC"));
    }

    #[test]
    fn unknown_identifiers_yield_none() {
        assert_eq!(license_url("SSPL-1.0"), None);
        assert_eq!(license_url("MIT OR Apache-2.0"), None);
        assert_eq!(license_url(""), None);
    }
}
