use common::generation::{
    render_announcement, ContentGenerator, GenerationKind, GenerationState, TemplateGenerator,
};
use common::model::document_version::Timestamp;
use common::model::event_draft::{DraftField, EventDraft};
use common::validation::{evaluate, RULES};
use common::workspace::{EventWorkspace, SubmitOutcome, DRAFT_LABEL, SUBMITTED_LABEL};
use proptest::prelude::*;

fn tech_fest() -> EventDraft {
    let mut draft = EventDraft::default();
    draft.set(DraftField::Title, "Tech Fest");
    draft.set(DraftField::Venue, "Auditorium");
    draft.set(DraftField::StartDate, "2025-03-01");
    draft.set(DraftField::EndDate, "2025-03-01");
    draft.set(DraftField::Time, "10:00");
    draft.set(DraftField::Category, "technical");
    draft.set(DraftField::DocumentContent, "Join us");
    draft
}

#[test]
fn every_subset_of_empty_required_fields_is_reported_exactly() {
    for mask in 0u32..(1 << RULES.len()) {
        let mut draft = tech_fest();
        let mut expected = Vec::new();
        for (bit, rule) in RULES.iter().enumerate() {
            if mask & (1 << bit) != 0 {
                draft.set(rule.field, "");
                expected.push(rule.label);
            }
        }

        let report = evaluate(&draft);
        assert_eq!(report.all_pass(), mask == 0, "mask {mask:07b}");
        assert_eq!(report.failing_labels(), expected, "mask {mask:07b}");
    }
}

#[test]
fn tech_fest_example() {
    let mut draft = tech_fest();
    assert!(evaluate(&draft).all_pass());

    draft.set(DraftField::Venue, "");
    let report = evaluate(&draft);
    assert!(!report.all_pass());
    assert_eq!(report.failing_labels(), vec!["Venue is required"]);
}

proptest! {
    #[test]
    fn optional_fields_never_affect_validation(
        club in ".*",
        mode in ".*",
        team in ".*",
        guests in ".*",
        letter in ".*",
        is_public in any::<bool>(),
    ) {
        let mut draft = tech_fest();
        draft.set(DraftField::Club, club);
        draft.set(DraftField::Mode, mode);
        draft.set(DraftField::TeamSize, team);
        draft.set(DraftField::GuestList, guests);
        draft.set(DraftField::ApprovalLetterContent, letter);
        draft.set_public(is_public);
        prop_assert!(evaluate(&draft).all_pass());
    }

    #[test]
    fn whitespace_only_required_value_fails(idx in 0usize..7, ws in "[ \t\r\n]{0,8}") {
        let mut draft = tech_fest();
        draft.set(RULES[idx].field, ws);
        prop_assert_eq!(evaluate(&draft).failing_labels(), vec![RULES[idx].label]);
    }

    #[test]
    fn restore_discards_unsaved_edits(saved in ".*", unsaved in ".*") {
        let mut workspace = EventWorkspace::new();
        workspace.set_field(DraftField::DocumentContent, saved.clone());
        workspace.save_version(DRAFT_LABEL, Timestamp::new(10, "t"));
        workspace.set_field(DraftField::DocumentContent, unsaved);

        workspace.restore_version(10).unwrap();
        prop_assert_eq!(&workspace.draft.document_content, &saved);
        workspace.restore_version(10).unwrap();
        prop_assert_eq!(&workspace.draft.document_content, &saved);
    }
}

#[test]
fn saving_prepends_and_shifts_prior_versions() {
    let mut workspace = EventWorkspace::new();
    workspace.set_field(DraftField::DocumentContent, "first");
    workspace.save_version("Draft", Timestamp::new(100, "a"));
    workspace.set_field(DraftField::DocumentContent, "second");
    workspace.save_version("Draft", Timestamp::new(200, "b"));
    let before: Vec<_> = workspace.versions.list().to_vec();

    workspace.set_field(DraftField::DocumentContent, "third");
    workspace.save_version("Milestone", Timestamp::new(300, "c"));

    let after = workspace.versions.list();
    assert_eq!(after.len(), 3);
    assert_eq!(after[0].label, "Milestone");
    assert_eq!(after[0].content, "third");
    assert_eq!(after[0].timestamp, "c");
    assert_eq!(&after[1..], &before[..]);
}

#[test]
fn generation_appends_one_block_and_returns_to_idle() {
    let mut workspace = EventWorkspace::new();
    workspace.set_field(DraftField::DocumentContent, "Existing notes");
    workspace.set_field(DraftField::Title, "Tech Fest");
    workspace.set_prompt("Create a compelling event description");

    let request = workspace
        .begin_generation(GenerationKind::Announcement)
        .expect("prompt is set");
    let snapshot = request.draft.clone();
    assert_eq!(
        workspace.generation,
        GenerationState::Generating(GenerationKind::Announcement)
    );

    let text = futures::executor::block_on(TemplateGenerator.generate(request));
    assert!(workspace.finish_generation(GenerationKind::Announcement, &text));

    assert_eq!(workspace.generation, GenerationState::Idle);
    assert_eq!(
        workspace.draft.document_content,
        format!("Existing notes\n\n{}", render_announcement(&snapshot))
    );
}

#[test]
fn submit_is_gated_on_validation() {
    let mut workspace = EventWorkspace::new();
    let outcome = workspace.submit(Timestamp::new(1, "t"));
    assert_eq!(outcome, SubmitOutcome::Blocked(RULES.iter().map(|r| r.label).collect()));
    assert!(workspace.show_validation);
    assert!(!workspace.show_submit_options);
    assert!(workspace.versions.is_empty());

    workspace.draft = tech_fest();
    assert_eq!(workspace.submit(Timestamp::new(2, "t")), SubmitOutcome::Submitted);
    assert!(workspace.show_submit_options);
    assert_eq!(workspace.versions.list()[0].label, SUBMITTED_LABEL);
    assert_eq!(workspace.versions.list()[0].content, "Join us");
}
