//! Core types for payload recovery.

use serde::Serialize;

/// A decoded candidate that made it into the result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecoveredPayload {
    /// The decoded payload text
    pub value: String,
    /// Position of the source fragment in document order
    pub fragment_index: usize,
    /// Semantic kind of the payload
    pub kind: PayloadKind,
}

/// Result of one recovery run: the derived key plus the accepted payloads in
/// fragment order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recovery {
    /// The decode key used for this run
    pub key: String,
    /// Accepted payloads, in source fragment order
    pub payloads: Vec<RecoveredPayload>,
}

impl Recovery {
    /// Payload texts only, in fragment order.
    pub fn values(&self) -> Vec<&str> {
        self.payloads.iter().map(|p| p.value.as_str()).collect()
    }
}

/// Semantic kind of a recovered payload.
///
/// Classifies decoded output by what it appears to inject. Used for display
/// and triage only; acceptance is decided by the plausibility heuristic
/// alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[non_exhaustive]
pub enum PayloadKind {
    /// Generic decoded text
    #[default]
    Text,
    /// Bare script source (location/document/window manipulation)
    Script,
    /// Contains an absolute URL
    Url,
    /// Injected markup (script or iframe elements)
    Markup,
}

/// Severity level for security-focused output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Redirection IOCs: injected markup, URLs
    High = 0,
    /// Script source without an obvious destination
    Medium = 1,
    /// Everything else
    Info = 2,
}

impl PayloadKind {
    /// Classify decoded output by its content.
    pub(crate) fn classify(decoded: &str) -> PayloadKind {
        if decoded.contains("<script") || decoded.contains("<iframe") {
            PayloadKind::Markup
        } else if decoded.contains("://") {
            PayloadKind::Url
        } else if ["location", "document.", "window.", "eval(", "setTimeout"]
            .iter()
            .any(|marker| decoded.contains(marker))
        {
            PayloadKind::Script
        } else {
            PayloadKind::Text
        }
    }

    /// Get the severity level for this kind
    pub fn severity(&self) -> Severity {
        match self {
            PayloadKind::Markup | PayloadKind::Url => Severity::High,
            PayloadKind::Script => Severity::Medium,
            _ => Severity::Info,
        }
    }

    /// Get short display name for the kind
    pub fn short_name(&self) -> &'static str {
        match self {
            PayloadKind::Text => "-",
            PayloadKind::Script => "script",
            PayloadKind::Url => "url",
            PayloadKind::Markup => "markup",
        }
    }
}
