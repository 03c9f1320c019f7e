//! # unleech - pseudo-Darkleech payload recovery
//!
//! This library recovers hidden redirection payloads from webpages carrying
//! pseudo-Darkleech style injections, as observed in compromised sites in
//! early 2016.
//!
//! ## Background
//!
//! The injection scheme scatters its material across ordinary block elements
//! of the compromised page:
//!
//! - One element holds the decode key, itself encoded: its text is a run of
//!   decimal character codes spelling a snippet that contains the marker
//!   `-1;<ident>="<key>"`.
//! - Other elements hold the payload under a character-pair substitution:
//!   every two lowercase letters encode one byte, unmasked by XOR with a
//!   cycling key byte. Anything outside `a`..=`z` is filler.
//!
//! Recovery derives the key from the first carrier fragment, runs the
//! reverse transform over every fragment, and keeps the decodes that look
//! like genuine script rather than noise.
//!
//! ## Usage
//!
//! ```no_run
//! use unleech::{recover_document, RecoverOptions};
//!
//! let html = std::fs::read_to_string("injected.html").unwrap();
//! let recovery = recover_document(&html, &RecoverOptions::new()).unwrap();
//!
//! for payload in &recovery.payloads {
//!     println!("{}: {}", payload.fragment_index, payload.value);
//! }
//! ```

mod decode;
mod error;
mod key;
mod markup;
mod types;
mod validation;

pub use decode::decode;
pub use error::{Error, Result};
pub use key::extract_key;
pub use markup::{extract_fragments, extract_fragments_with_selector, DEFAULT_SELECTOR};
pub use types::{PayloadKind, RecoveredPayload, Recovery, Severity};
pub use validation::{is_plausible, MIN_DISTINCT_CHARS};

/// Options for a recovery run.
#[derive(Debug, Clone, Default)]
pub struct RecoverOptions {
    /// Use this key instead of searching the fragments for one
    pub key: Option<String>,
    /// Keep candidates the plausibility filter rejects
    pub keep_rejected: bool,
    /// Element selector for the markup layer (default: `div`)
    pub selector: Option<String>,
}

impl RecoverOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip the key-search phase and decode with the given key.
    pub fn with_key(mut self, key: &str) -> Self {
        self.key = Some(key.to_string());
        self
    }

    /// Emit every decoded candidate, including ones the plausibility filter
    /// would drop.
    pub fn with_rejected(mut self, keep: bool) -> Self {
        self.keep_rejected = keep;
        self
    }

    /// Select candidate elements with a custom CSS selector.
    pub fn with_selector(mut self, selector: &str) -> Self {
        self.selector = Some(selector.to_string());
        self
    }
}

/// Find the decode key: scan fragments in order, stop at the first carrier.
///
/// Fails with [`Error::KeyNotFound`] after exhausting the whole sequence.
/// The key is derived exactly once per run; callers never re-derive it
/// mid-run.
pub fn find_key(fragments: &[String]) -> Result<String> {
    for (index, fragment) in fragments.iter().enumerate() {
        match key::extract_key(fragment) {
            Some(found) => {
                tracing::info!("decode key {:?} found in fragment {}", found, index);
                return Ok(found);
            }
            None => tracing::debug!("fragment {} is not a key carrier", index),
        }
    }
    Err(Error::KeyNotFound)
}

/// Run the full pipeline over an ordered fragment list.
///
/// Derives the key (or takes it from `opts`), decodes every fragment with a
/// fresh key cursor, filters each candidate, and returns accepted payloads
/// in fragment order. The key carrier itself is decoded like any other
/// fragment; its digit text holds no lowercase pairs and falls to the
/// filter. Fragments the filter rejects are dropped silently.
pub fn recover_fragments(fragments: &[String], opts: &RecoverOptions) -> Result<Recovery> {
    let key = match &opts.key {
        Some(provided) if provided.is_empty() => return Err(Error::EmptyKey),
        Some(provided) => provided.clone(),
        None => find_key(fragments)?,
    };

    let mut payloads = Vec::new();
    for (index, fragment) in fragments.iter().enumerate() {
        let decoded = decode::decode(fragment, &key);
        if !opts.keep_rejected && !validation::is_plausible(&decoded) {
            continue;
        }
        let kind = PayloadKind::classify(&decoded);
        payloads.push(RecoveredPayload {
            value: decoded,
            fragment_index: index,
            kind,
        });
    }

    Ok(Recovery { key, payloads })
}

/// Extract candidate fragments from an HTML document and run the pipeline
/// over them.
pub fn recover_document(html: &str, opts: &RecoverOptions) -> Result<Recovery> {
    let selector = opts.selector.as_deref().unwrap_or(DEFAULT_SELECTOR);
    let fragments = markup::extract_fragments_with_selector(html, selector)?;
    recover_fragments(&fragments, opts)
}
