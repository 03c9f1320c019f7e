//! Decode-key discovery inside candidate fragments.
//!
//! The injector stashes the decode key in one element of the page, itself
//! encoded: the element text is a run of whitespace-separated decimal
//! character codes which, concatenated, spell a snippet containing the
//! marker `-1;<ident>="<key>"`. A fragment that is anything other than pure
//! digit tokens is not a key carrier.

use regex::Regex;
use std::sync::OnceLock;

/// Marker the injector leaves inside the numeric carrier text.
fn key_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"-1;\w+="(\w+)""#).expect("marker pattern is valid"))
}

/// Try to recover the decode key from one fragment.
///
/// Returns `None` when the fragment is not a key carrier: a token is not all
/// decimal digits, a token does not denote a valid character code, or the
/// decoded carrier text has no key marker. None of these are errors; the
/// caller keeps scanning.
pub fn extract_key(fragment: &str) -> Option<String> {
    let mut carrier = String::new();
    for token in fragment.split_whitespace() {
        if !token.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let code: u32 = token.parse().ok()?;
        carrier.push(char::from_u32(code)?);
    }

    key_marker()
        .captures(&carrier)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
