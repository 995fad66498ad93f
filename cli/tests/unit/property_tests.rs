//! Property-based tests for URL normalization and secret generation.
//!
//! Uses `proptest` to verify invariants across many random inputs.

#![allow(clippy::expect_used)]

use proptest::prelude::*;

use tandem_cli::domain::secret::generate_secret;
use tandem_cli::domain::url::{extract_frontend_url, normalize_backend_url};

proptest! {
    /// Whatever the CLI prints, the result carries exactly one scheme.
    #[test]
    fn prop_normalized_backend_url_has_one_scheme(
        schemes in prop::collection::vec(prop_oneof!["https://", "http://"], 0..4),
        host in "[a-z0-9][a-z0-9.-]{0,30}",
        slashes in 0usize..3,
    ) {
        let raw = format!("{}{host}{}", schemes.concat(), "/".repeat(slashes));
        let url = normalize_backend_url(&raw).expect("non-empty host");
        prop_assert!(url.as_str().starts_with("https://"));
        prop_assert_eq!(url.as_str().matches("://").count(), 1);
        prop_assert!(!url.as_str().ends_with('/'));
    }

    /// Normalizing an already normalized URL changes nothing.
    #[test]
    fn prop_normalization_is_idempotent(raw in "[ -~]{0,40}") {
        if let Some(once) = normalize_backend_url(&raw) {
            let twice = normalize_backend_url(once.as_str()).expect("still valid");
            prop_assert_eq!(once, twice);
        }
    }

    /// Extraction only ever returns an https URL found in the output.
    #[test]
    fn prop_extracted_url_is_https_and_present(output in "(\\PC{0,20}\n){0,5}") {
        if let Some(url) = extract_frontend_url(&output, "vercel.app") {
            prop_assert!(url.as_str().starts_with("https://"));
            prop_assert!(output.contains(url.as_str()));
        }
    }
}

proptest! {
    /// Secrets keep the prefix and end in 64 lowercase hex chars.
    #[test]
    fn prop_secret_format(prefix in "[a-z-]{0,12}") {
        let secret = generate_secret(&prefix);
        prop_assert!(secret.starts_with(&prefix));
        let suffix = &secret[prefix.len()..];
        prop_assert_eq!(suffix.len(), 64);
        prop_assert!(suffix.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }
}

#[test]
fn test_secret_uniqueness_batch() {
    let secrets: std::collections::HashSet<_> =
        (0..100).map(|_| generate_secret("shop-")).collect();
    assert_eq!(secrets.len(), 100, "duplicate secrets generated");
}
