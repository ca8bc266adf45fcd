//! Package URL (purl) parsing and ecosystem lookups.
//!
//! Purls arrive embedded in vulnerability data (`pkg:type/namespace/name@version`).
//! Parsing is a read boundary only: malformed input yields `None`, never an
//! error, and callers are expected to render "no purl" silently.

use indexmap::IndexMap;

/// A parsed package URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Purl {
    /// Package type (`npm`, `apk`, `golang`, ...)
    pub ptype: String,
    /// Optional namespace (npm scope, Maven group, distro name)
    pub namespace: Option<String>,
    /// Package name; may itself contain `/` for deep module paths
    pub name: String,
    /// Optional version (after the last `@` in the path)
    pub version: Option<String>,
    /// Qualifiers from the query string, populated only when any exist
    pub qualifiers: Option<IndexMap<String, String>>,
    /// Subpath from the fragment, populated only when non-empty
    pub subpath: Option<String>,
}

/// Parse a `pkg:` URL. Returns `None` for any other scheme or any input
/// that does not decode into at least a type and a name.
#[must_use]
pub fn parse_purl(purl: &str) -> Option<Purl> {
    let rest = purl.strip_prefix("pkg:")?;

    // Peel fragment then query, in URL order.
    let (rest, fragment) = match rest.find('#') {
        Some(i) => (&rest[..i], &rest[i + 1..]),
        None => (rest, ""),
    };
    let (path, query) = match rest.find('?') {
        Some(i) => (&rest[..i], &rest[i + 1..]),
        None => (rest, ""),
    };

    // Version is whatever follows the last `@` of the path.
    let (path, version) = match path.rfind('@') {
        Some(i) => (&path[..i], Some(&path[i + 1..])),
        None => (path, None),
    };

    let mut segments = Vec::new();
    for segment in path.trim_start_matches('/').split('/') {
        segments.push(urlencoding::decode(segment).ok()?.into_owned());
    }
    if segments.len() < 2 || segments[0].is_empty() {
        return None;
    }

    let ptype = segments[0].clone();
    let (namespace, name) = if segments.len() == 2 {
        if segments[1].is_empty() {
            return None;
        }
        (None, segments[1].clone())
    } else {
        (Some(segments[1].clone()), segments[2..].join("/"))
    };

    let version = match version {
        Some(v) => Some(urlencoding::decode(v).ok()?.into_owned()),
        None => None,
    };
    let qualifiers = parse_qualifiers(query);
    let subpath = if fragment.is_empty() {
        None
    } else {
        Some(fragment.to_string())
    };

    Some(Purl {
        ptype,
        namespace,
        name,
        version,
        qualifiers,
        subpath,
    })
}

fn parse_qualifiers(query: &str) -> Option<IndexMap<String, String>> {
    if query.is_empty() {
        return None;
    }
    let mut qualifiers = IndexMap::new();
    for pair in query.split('&') {
        let (key, value) = match pair.find('=') {
            Some(i) => (&pair[..i], &pair[i + 1..]),
            None => (pair, ""),
        };
        if key.is_empty() {
            continue;
        }
        let key = urlencoding::decode(key).ok()?.into_owned();
        let value = urlencoding::decode(value).ok()?.into_owned();
        qualifiers.insert(key, value);
    }
    if qualifiers.is_empty() {
        None
    } else {
        Some(qualifiers)
    }
}

/// External registry link for a purl, when the ecosystem is recognized.
#[must_use]
pub fn purl_link(purl: &Purl) -> Option<String> {
    match (purl.ptype.as_str(), purl.namespace.as_deref()) {
        ("apk", Some("alpine")) => Some(format!(
            "https://pkgs.alpinelinux.org/packages?name={}",
            purl.name
        )),
        ("deb", Some("ubuntu")) => {
            Some(format!("https://launchpad.net/ubuntu/+source/{}", purl.name))
        }
        ("golang", namespace) => {
            let path = match namespace {
                Some(ns) => format!("{ns}/{}", purl.name),
                None => purl.name.clone(),
            };
            Some(format!("https://pkg.go.dev/{path}"))
        }
        _ => None,
    }
}

/// Human-readable package-type description, when recognized.
#[must_use]
pub fn purl_type(purl: &Purl) -> Option<&'static str> {
    match (purl.ptype.as_str(), purl.namespace.as_deref()) {
        ("apk", Some("alpine")) => Some("Alpine Linux package"),
        ("deb", Some("ubuntu")) => Some("Ubuntu package"),
        ("golang", _) => Some("Go module"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_and_name_only() {
        let purl = parse_purl("pkg:golang/stdlib@1.22.4").expect("valid purl");
        assert_eq!(purl.ptype, "golang");
        assert_eq!(purl.namespace, None);
        assert_eq!(purl.name, "stdlib");
        assert_eq!(purl.version.as_deref(), Some("1.22.4"));
        assert_eq!(purl.qualifiers, None);
        assert_eq!(purl.subpath, None);
    }

    #[test]
    fn test_namespace_is_percent_decoded() {
        let purl = parse_purl("pkg:npm/%40angular/animation@12.3.1").expect("valid purl");
        assert_eq!(purl.namespace.as_deref(), Some("@angular"));
        assert_eq!(purl.name, "animation");
        assert_eq!(purl.version.as_deref(), Some("12.3.1"));
    }

    #[test]
    fn test_deep_path_joins_into_name() {
        let purl =
            parse_purl("pkg:golang/github.com/prometheus/client_golang@v1.19.0").expect("valid");
        assert_eq!(purl.namespace.as_deref(), Some("github.com"));
        assert_eq!(purl.name, "prometheus/client_golang");
    }

    #[test]
    fn test_all_optional_fields() {
        let purl = parse_purl("pkg:deb/ubuntu/openssl@3.0.2?arch=amd64&distro=jammy#lib/ssl")
            .expect("valid purl");
        assert_eq!(purl.ptype, "deb");
        assert_eq!(purl.namespace.as_deref(), Some("ubuntu"));
        assert_eq!(purl.name, "openssl");
        assert_eq!(purl.version.as_deref(), Some("3.0.2"));
        let qualifiers = purl.qualifiers.expect("qualifiers");
        assert_eq!(qualifiers.get("arch").map(String::as_str), Some("amd64"));
        assert_eq!(qualifiers.get("distro").map(String::as_str), Some("jammy"));
        assert_eq!(purl.subpath.as_deref(), Some("lib/ssl"));
    }

    #[test]
    fn test_non_pkg_scheme_is_absent() {
        assert_eq!(parse_purl("https://example.com/pkg:npm/x"), None);
        assert_eq!(parse_purl("cpe:2.3:a:openssl:openssl"), None);
        assert_eq!(parse_purl(""), None);
    }

    #[test]
    fn test_malformed_input_is_absent_never_panics() {
        assert_eq!(parse_purl("pkg:"), None);
        assert_eq!(parse_purl("pkg:npm"), None);
        assert_eq!(parse_purl("pkg:/"), None);
        assert_eq!(parse_purl("pkg:npm/"), None);
        // %FF decodes to invalid UTF-8.
        assert_eq!(parse_purl("pkg:npm/%FF/broken"), None);
    }

    #[test]
    fn test_purl_link_tables() {
        let apk = parse_purl("pkg:apk/alpine/musl@1.2.4-r2").expect("valid");
        assert_eq!(
            purl_link(&apk).as_deref(),
            Some("https://pkgs.alpinelinux.org/packages?name=musl")
        );
        assert_eq!(purl_type(&apk), Some("Alpine Linux package"));

        let deb = parse_purl("pkg:deb/ubuntu/bash@5.1").expect("valid");
        assert_eq!(
            purl_link(&deb).as_deref(),
            Some("https://launchpad.net/ubuntu/+source/bash")
        );

        let golang = parse_purl("pkg:golang/github.com/spf13/cobra@v1.8.0").expect("valid");
        assert_eq!(
            purl_link(&golang).as_deref(),
            Some("https://pkg.go.dev/github.com/spf13/cobra")
        );
        assert_eq!(purl_type(&golang), Some("Go module"));

        let unknown = parse_purl("pkg:npm/lodash@4.17.21").expect("valid");
        assert_eq!(purl_link(&unknown), None);
        assert_eq!(purl_type(&unknown), None);
    }
}
