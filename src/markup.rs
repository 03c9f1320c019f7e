//! Candidate fragment extraction from injected pages.
//!
//! The pseudo-Darkleech injector hides both the key carrier and the payload
//! in the text of ordinary block elements, so the candidate set is simply
//! the text of every matching element in document order. The decode pipeline
//! has no contract with DOM structure beyond that order.

use crate::error::{Error, Result};
use scraper::{Html, Selector};

/// Element selector matching where the injector hides its text.
pub const DEFAULT_SELECTOR: &str = "div";

/// Extract candidate fragments from an HTML document using
/// [`DEFAULT_SELECTOR`].
pub fn extract_fragments(html: &str) -> Vec<String> {
    extract_fragments_with_selector(html, DEFAULT_SELECTOR)
        .expect("default selector is valid")
}

/// Extract candidate fragments using a caller-supplied CSS selector.
///
/// Returns the concatenated descendant text of each matched element, in
/// document order. Nested matches each contribute their own fragment, so an
/// outer element's fragment includes its children's text.
pub fn extract_fragments_with_selector(html: &str, selector: &str) -> Result<Vec<String>> {
    let sel = Selector::parse(selector)
        .map_err(|e| Error::InvalidSelector(format!("{selector}: {e}")))?;
    let document = Html::parse_document(html);

    Ok(document
        .select(&sel)
        .map(|element| element.text().collect::<String>())
        .collect())
}
