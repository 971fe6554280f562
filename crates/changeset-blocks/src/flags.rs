//! `manifestOnly` flag normalization

use regex::Regex;
use std::sync::LazyLock;

/// `manifestOnly:` followed by optional whitespace and `false`
static MANIFEST_ONLY_FALSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"manifestOnly:\s*false").expect("Invalid manifestOnly regex")
});

/// Replacement written for every `manifestOnly: false` occurrence
pub const MANIFEST_ONLY_TRUE: &str = "manifestOnly: true";

/// Rewrite every `manifestOnly: false` (any whitespace after the colon) to
/// `manifestOnly: true`.
///
/// Pure text transform; the match is not anchored to a line or a key.
pub fn normalize_manifest_only(text: &str) -> String {
    MANIFEST_ONLY_FALSE
        .replace_all(text, MANIFEST_ONLY_TRUE)
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrites_flag() {
        assert_eq!(
            normalize_manifest_only("manifestOnly: false\n"),
            "manifestOnly: true\n"
        );
    }

    #[test]
    fn test_tolerates_whitespace_after_colon() {
        assert_eq!(
            normalize_manifest_only("manifestOnly:false\nmanifestOnly:\t  false\n"),
            "manifestOnly: true\nmanifestOnly: true\n"
        );
    }

    #[test]
    fn test_rewrites_indented_occurrences() {
        assert_eq!(
            normalize_manifest_only("deploy:\n  manifestOnly: false\n"),
            "deploy:\n  manifestOnly: true\n"
        );
    }

    #[test]
    fn test_leaves_true_and_other_keys_alone() {
        let text = "manifestOnly: true\nother: false\nmanifestonly: false\n";
        assert_eq!(normalize_manifest_only(text), text);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(normalize_manifest_only(""), "");
    }
}
