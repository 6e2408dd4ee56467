//! Required-field checks for the Create Event form.
//!
//! The evaluator is a pure function of the draft: it is recomputed on every
//! call and keeps no state between calls. A field passes when its value is
//! non-empty after trimming whitespace; the draft passes when all rules do.

use crate::model::event_draft::{DraftField, EventDraft};
use crate::model::validation_result::ValidationResult;

/// A required field and the message shown when it is missing.
#[derive(Debug, Clone, Copy)]
pub struct ValidationRule {
    pub key: &'static str,
    pub field: DraftField,
    pub label: &'static str,
}

/// Required fields, in display order.
pub const RULES: [ValidationRule; 7] = [
    ValidationRule {
        key: "title",
        field: DraftField::Title,
        label: "Event title is required",
    },
    ValidationRule {
        key: "category",
        field: DraftField::Category,
        label: "Category must be selected",
    },
    ValidationRule {
        key: "venue",
        field: DraftField::Venue,
        label: "Venue is required",
    },
    ValidationRule {
        key: "startDate",
        field: DraftField::StartDate,
        label: "Start date is required",
    },
    ValidationRule {
        key: "endDate",
        field: DraftField::EndDate,
        label: "End date is required",
    },
    ValidationRule {
        key: "eventTime",
        field: DraftField::Time,
        label: "Event time is required",
    },
    ValidationRule {
        key: "editorContent",
        field: DraftField::DocumentContent,
        label: "Event description/document content is required",
    },
];

/// Per-rule results for one snapshot of the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    results: Vec<ValidationResult>,
}

impl ValidationReport {
    pub fn results(&self) -> &[ValidationResult] {
        &self.results
    }

    pub fn all_pass(&self) -> bool {
        self.results.iter().all(|result| result.pass)
    }

    pub fn failing(&self) -> impl Iterator<Item = &ValidationResult> {
        self.results.iter().filter(|result| !result.pass)
    }

    pub fn failing_labels(&self) -> Vec<&'static str> {
        self.failing().map(|result| result.label).collect()
    }
}

pub fn evaluate(draft: &EventDraft) -> ValidationReport {
    let results = RULES
        .iter()
        .map(|rule| ValidationResult {
            key: rule.key,
            label: rule.label,
            pass: !draft.get(rule.field).trim().is_empty(),
        })
        .collect();

    ValidationReport { results }
}
