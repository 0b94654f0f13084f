pub mod model;

#[cfg(test)]
mod tests;

pub use model::AccessibilityRecord;

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use crate::extractor::model::normalize_whitespace;
use crate::fetcher::types::PageResponse;

static H1_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h1").expect("Failed to parse h1 selector"));
static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("Failed to parse title selector"));
static DESCRIPTION_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"meta[name="description"]"#).expect("Failed to parse meta selector")
});

/// Read status, first `<h1>`, `<title>` and meta description from a page.
///
/// html5ever recovers from any markup, so the worst case is a record with
/// empty fields.
pub fn extract(status_code: u16, body: &str) -> AccessibilityRecord {
    let document = Html::parse_document(body);

    AccessibilityRecord {
        status_code,
        h1: first_text(&document, &H1_SELECTOR),
        title: first_text(&document, &TITLE_SELECTOR),
        description: first_element(&document, &DESCRIPTION_SELECTOR)
            .and_then(|meta| meta.value().attr("content"))
            .map(|content| content.trim().to_string())
            .unwrap_or_default(),
    }
}

pub fn extract_page(page: &PageResponse) -> AccessibilityRecord {
    extract(page.status.as_u16(), &page.body_utf8)
}

fn first_element<'a>(document: &'a Html, selector: &Selector) -> Option<ElementRef<'a>> {
    document.select(selector).next()
}

fn first_text(document: &Html, selector: &Selector) -> String {
    first_element(document, selector)
        .map(|element| normalize_whitespace(&element.text().collect::<String>()))
        .unwrap_or_default()
}
