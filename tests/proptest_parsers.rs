//! Property-based tests for the tolerant parsers.
//!
//! References and purls come from untrusted backend data, so the parsers
//! must accept arbitrary input without panicking; purl parsing additionally
//! must signal failure as absence, never as an error.

use imagedash::model::{
    compare_severity, full_version, name, parse_purl, version, ImageReference, Severity,
};
use proptest::prelude::*;

proptest! {
    // Parser fuzz tests only assert no-panic plus the absence contracts,
    // since random input is expected to be garbage in almost all cases.
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn reference_parse_doesnt_panic(s in "\\PC{0,200}") {
        let parsed = ImageReference::parse(&s);
        // Version always renders something.
        prop_assert!(!parsed.version().is_empty());
        prop_assert!(!version(&s).is_empty());
        prop_assert!(!full_version(&s).is_empty());
        let _ = name(&s);
    }

    #[test]
    fn reference_name_never_contains_delimiters_after_split(
        repo in "[a-z0-9./-]{1,40}",
        tag in "[a-zA-Z0-9._-]{1,20}",
    ) {
        let reference = format!("{repo}:{tag}");
        let parsed = ImageReference::parse(&reference);
        prop_assert!(!parsed.name.contains(':'));
        prop_assert!(!parsed.name.contains('@'));
    }

    #[test]
    fn purl_parse_doesnt_panic(s in "\\PC{0,300}") {
        let _ = parse_purl(&s);
    }

    #[test]
    fn purl_non_pkg_scheme_is_absent(s in "[a-z]{1,10}", rest in "\\PC{0,100}") {
        prop_assume!(s != "pkg");
        let input = format!("{s}:{rest}");
        prop_assert!(parse_purl(&input).is_none());
    }

    #[test]
    fn purl_simple_roundtrip(
        ptype in "[a-z]{1,10}",
        pname in "[a-z][a-z0-9-]{0,20}",
        pversion in "[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}",
    ) {
        let input = format!("pkg:{ptype}/{pname}@{pversion}");
        let purl = parse_purl(&input).expect("well-formed purl should parse");
        prop_assert_eq!(purl.ptype, ptype);
        prop_assert_eq!(purl.name, pname);
        prop_assert_eq!(purl.version, Some(pversion));
        prop_assert_eq!(purl.namespace, None);
    }

    #[test]
    fn severity_label_total_order(labels in prop::collection::vec("\\PC{0,20}", 0..20)) {
        // Sorting by the comparator never panics and is idempotent.
        let mut sorted = labels.clone();
        sorted.sort_by(|a, b| compare_severity(a, b));
        let mut twice = sorted.clone();
        twice.sort_by(|a, b| compare_severity(a, b));
        prop_assert_eq!(sorted, twice);
    }

    #[test]
    fn severity_from_label_doesnt_panic(s in "\\PC{0,40}") {
        let severity = Severity::from_label(&s);
        prop_assert!(severity.rank() <= 5);
    }
}
