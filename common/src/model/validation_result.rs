use serde::Serialize;

/// Outcome of a single required-field rule. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub key: &'static str,
    pub label: &'static str,
    pub pass: bool,
}
