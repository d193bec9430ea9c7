//! Non-fatal integrity warnings collected during a rebuild.

use serde::Serialize;

/// What kind of integrity problem was detected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DiagnosticKind {
    /// A fixed column has no explicit key and falls back to its sibling index
    MissingFixedKey,
    /// Two columns resolve to the same key; the later one wins lookups
    DuplicateKey,
    /// A rendered header cell for a fixed column carries no `data-colkey`
    UnkeyedHeaderCell,
    /// A fixed row's key could not be resolved from its data record
    MissingRowKey,
}

/// One integrity warning
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
}

impl Diagnostic {
    /// Record a warning and forward it to the `log` facade
    pub(crate) fn warn(kind: DiagnosticKind, message: String) -> Self {
        log::warn!("fixedtable: {message}");
        Self { kind, message }
    }
}
