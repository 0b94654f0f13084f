use reqwest::StatusCode;
use url::Url;

use crate::extractor::{AccessibilityRecord, extract, extract_page};
use crate::fetcher::types::{Charset, PageResponse};

const PAGE_FIXTURE: &str = include_str!("fixtures/page.html");
const BROKEN_FIXTURE: &str = include_str!("fixtures/broken.html");

#[test]
fn test_extract_all_fields() {
    let html = r#"<html><head><title>T</title><meta name="description" content="D"></head><body><h1>H</h1></body></html>"#;

    assert_eq!(
        extract(200, html),
        AccessibilityRecord {
            status_code: 200,
            h1: "H".to_string(),
            title: "T".to_string(),
            description: "D".to_string(),
        }
    );
}

#[test]
fn test_extract_empty_document() {
    assert_eq!(
        extract(200, "<html></html>"),
        AccessibilityRecord {
            status_code: 200,
            ..Default::default()
        }
    );
    assert_eq!(extract(204, "").status_code, 204);
}

#[test]
fn test_extract_realistic_page() {
    let record = extract(200, PAGE_FIXTURE);

    assert_eq!(record.title, "Example Domain");
    // First h1 in document order, nested markup flattened
    assert_eq!(record.h1, "Welcome to Example Domain");
    assert_eq!(record.description, "An example page used in documentation.");
}

#[test]
fn test_extract_meta_description_without_content() {
    let html = r#"<html><head><meta name="description"><title>T</title></head></html>"#;

    let record = extract(200, html);
    assert_eq!(record.description, "");
    assert_eq!(record.title, "T");
}

#[test]
fn test_extract_ignores_other_meta_tags() {
    let html = r#"<head><meta name="keywords" content="a, b"><meta property="og:description" content="og"></head>"#;

    assert_eq!(extract(200, html).description, "");
}

#[test]
fn test_extract_status_passthrough() {
    let html = "<html><head><title>Not Found</title></head><body><h1>404</h1></body></html>";

    let record = extract(404, html);
    assert_eq!(record.status_code, 404);
    assert_eq!(record.title, "Not Found");
    assert_eq!(record.h1, "404");
}

#[test]
fn test_malformed_html() {
    let record = extract(200, BROKEN_FIXTURE);

    assert_eq!(record.title, "Broken");
    assert!(record.h1.starts_with("Unclosed heading"));
    assert_eq!(record.description, "");
}

#[test]
fn test_extract_page_uses_response_status() {
    let html = "<title>Server Error</title>".to_string();
    let response = create_test_response(html, StatusCode::INTERNAL_SERVER_ERROR);

    let record = extract_page(&response);
    assert_eq!(record.status_code, 500);
    assert_eq!(record.title, "Server Error");
}

fn create_test_response(html: String, status: StatusCode) -> PageResponse {
    PageResponse {
        url_final: Url::parse("https://example.com").unwrap(),
        status,
        body_utf8: html,
        charset: Charset::Utf8,
    }
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_extract_never_panics(html in ".*", status in 100u16..600) {
            let record = extract(status, &html);
            prop_assert_eq!(record.status_code, status);
        }

        #[test]
        fn test_extracted_text_is_trimmed(
            title in "[a-zA-Z \\n\\t]{0,40}",
            heading in "[a-zA-Z \\n\\t]{0,40}",
        ) {
            let html = format!("<html><head><title>{title}</title></head><body><h1>{heading}</h1></body></html>");
            let record = extract(200, &html);
            prop_assert_eq!(record.title.trim(), record.title.as_str());
            prop_assert_eq!(record.h1.trim(), record.h1.as_str());
            prop_assert!(!record.h1.contains("  "));
        }
    }
}
