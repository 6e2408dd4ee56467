use serde::{Deserialize, Serialize};

/// Category options offered by the category select, as `(value, label)`.
pub const CATEGORIES: [(&str, &str); 5] = [
    ("technical", "Technical"),
    ("cultural", "Cultural"),
    ("sports", "Sports"),
    ("workshop", "Workshop"),
    ("seminar", "Seminar"),
];

/// Event mode options, as `(value, label)`.
pub const EVENT_MODES: [(&str, &str); 3] = [
    ("online", "Online"),
    ("offline", "Offline"),
    ("hybrid", "Hybrid"),
];

/// Names every string-valued field of an [`EventDraft`].
///
/// Used by the view to route input events to a single `SetField` message and
/// by the validation rule table to point at the value it checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Title,
    Club,
    Venue,
    StartDate,
    EndDate,
    Category,
    Mode,
    TeamSize,
    Time,
    GuestList,
    DocumentContent,
    ApprovalLetterContent,
}

/// The event being composed in the workspace.
///
/// Every value is kept exactly as typed: dates, times and team size are opaque
/// strings, and no field is checked against any other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub title: String,
    pub club: String,
    pub venue: String,
    pub start_date: String,
    pub end_date: String,
    pub category: String,
    pub mode: String,
    pub team_size: String,
    pub time: String,
    pub guest_list: String,
    pub is_public: bool,
    pub document_content: String,
    pub approval_letter_content: String,
}

impl Default for EventDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            club: String::new(),
            venue: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            category: String::new(),
            mode: String::new(),
            team_size: String::new(),
            time: String::new(),
            guest_list: String::new(),
            is_public: true,
            document_content: String::new(),
            approval_letter_content: String::new(),
        }
    }
}

impl EventDraft {
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Club => &self.club,
            DraftField::Venue => &self.venue,
            DraftField::StartDate => &self.start_date,
            DraftField::EndDate => &self.end_date,
            DraftField::Category => &self.category,
            DraftField::Mode => &self.mode,
            DraftField::TeamSize => &self.team_size,
            DraftField::Time => &self.time,
            DraftField::GuestList => &self.guest_list,
            DraftField::DocumentContent => &self.document_content,
            DraftField::ApprovalLetterContent => &self.approval_letter_content,
        }
    }

    /// Stores `value` as-is. No trimming, no validation.
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let slot = match field {
            DraftField::Title => &mut self.title,
            DraftField::Club => &mut self.club,
            DraftField::Venue => &mut self.venue,
            DraftField::StartDate => &mut self.start_date,
            DraftField::EndDate => &mut self.end_date,
            DraftField::Category => &mut self.category,
            DraftField::Mode => &mut self.mode,
            DraftField::TeamSize => &mut self.team_size,
            DraftField::Time => &mut self.time,
            DraftField::GuestList => &mut self.guest_list,
            DraftField::DocumentContent => &mut self.document_content,
            DraftField::ApprovalLetterContent => &mut self.approval_letter_content,
        };
        *slot = value.into();
    }

    pub fn set_public(&mut self, is_public: bool) {
        self.is_public = is_public;
    }

    /// Comma separated guest names, trimmed, empties dropped.
    pub fn guests(&self) -> Vec<&str> {
        self.guest_list
            .split(',')
            .map(str::trim)
            .filter(|guest| !guest.is_empty())
            .collect()
    }
}

/// Looks up the display label of an option value, e.g. `"technical"` -> `"Technical"`.
pub fn option_label<'a>(options: &'a [(&'a str, &'a str)], value: &str) -> Option<&'a str> {
    options
        .iter()
        .find(|(option, _)| *option == value)
        .map(|(_, label)| *label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_draft_is_empty_and_public() {
        let draft = EventDraft::default();
        assert!(draft.is_public);
        assert!(draft.title.is_empty());
        assert!(draft.document_content.is_empty());
    }

    #[test]
    fn setters_store_values_verbatim() {
        let mut draft = EventDraft::default();
        draft.set(DraftField::StartDate, "  not-a-date ");
        draft.set(DraftField::EndDate, "1999-01-01");
        draft.set(DraftField::TeamSize, "-3");

        assert_eq!(draft.get(DraftField::StartDate), "  not-a-date ");
        assert_eq!(draft.get(DraftField::EndDate), "1999-01-01");
        assert_eq!(draft.team_size, "-3");
    }

    #[test]
    fn guests_are_split_and_trimmed() {
        let mut draft = EventDraft::default();
        draft.set(DraftField::GuestList, " Dr. Rao, ,Prof. Iyer ,");
        assert_eq!(draft.guests(), vec!["Dr. Rao", "Prof. Iyer"]);
    }

    #[test]
    fn option_labels_resolve() {
        assert_eq!(option_label(&CATEGORIES, "sports"), Some("Sports"));
        assert_eq!(option_label(&EVENT_MODES, "hybrid"), Some("Hybrid"));
        assert_eq!(option_label(&CATEGORIES, "gaming"), None);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let draft = EventDraft::default();
        let json = serde_json::to_value(&draft).unwrap();
        assert!(json.get("startDate").is_some());
        assert!(json.get("isPublic").is_some());
        assert!(json.get("approvalLetterContent").is_some());
    }
}
