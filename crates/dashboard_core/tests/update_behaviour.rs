use std::sync::Once;

use dashboard_core::{
    update, AppState, Effect, EntityKind, FieldErrorKind, FormKind, ListAction, Msg, NoticeLevel,
    Page, PageBody, SubmitOutcome, Submission, VendorStatus,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(dashboard_logging::initialize_for_tests);
}

fn send(state: AppState, msgs: Vec<Msg>) -> (AppState, Vec<Effect>) {
    let mut effects = Vec::new();
    let mut state = state;
    for msg in msgs {
        let (next, mut produced) = update(state, msg);
        effects.append(&mut produced);
        state = next;
    }
    (state, effects)
}

fn set(field: &str, value: &str) -> Msg {
    Msg::FieldChanged {
        field: field.to_string(),
        value: value.to_string(),
    }
}

fn on_page(page: Page) -> AppState {
    let (state, _) = update(AppState::new(), Msg::Navigate(page));
    state
}

fn valid_vendor_msgs() -> Vec<Msg> {
    vec![
        set("id", "V004"),
        set("name", "Sara Lee"),
        set("email", "sara@example.com"),
        set("phone", "+1 555 222 3333"),
        Msg::SubmitClicked,
    ]
}

fn submitted_request(effects: &[Effect]) -> (u64, Submission) {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::Submit {
                request_id,
                submission,
            } => Some((*request_id, submission.clone())),
            _ => None,
        })
        .expect("submit effect")
}

#[test]
fn starts_on_freelancers_with_seed_data() {
    init_logging();
    let view = AppState::new().view();
    assert_eq!(view.page, Page::List(EntityKind::Freelancers));
    let PageBody::Table(table) = view.body else {
        panic!("expected a table");
    };
    assert_eq!(table.total_count, 2);
    assert_eq!(table.page, 1);
    assert_eq!(table.total_pages, 1);
    assert_eq!(table.filter_options, vec!["All", "Active", "Inactive"]);
    assert_eq!(
        table
            .summary
            .iter()
            .map(|card| (card.label.as_str(), card.value))
            .collect::<Vec<_>>(),
        vec![("Total Freelancers", 2), ("Active", 1), ("Inactive", 1)]
    );
}

#[test]
fn list_actions_apply_to_the_current_page_only() {
    init_logging();
    let state = on_page(Page::List(EntityKind::Jobs));
    let (mut state, effects) = send(
        state,
        vec![Msg::List(ListAction::Search("design".to_string()))],
    );

    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    assert_eq!(state.jobs().search(), "design");
    assert_eq!(state.freelancers().search(), "");
    assert_eq!(state.jobs().filtered().len(), 1);
}

#[test]
fn delete_with_open_menu_clears_it() {
    init_logging();
    let (state, _) = send(
        AppState::new(),
        vec![
            Msg::List(ListAction::ToggleMenu("2".to_string())),
            Msg::List(ListAction::Delete("2".to_string())),
        ],
    );
    assert!(!state.freelancers().contains(&2));
    assert_eq!(state.freelancers().open_menu(), None);
}

#[test]
fn open_menu_is_reported_in_the_view() {
    init_logging();
    let (state, _) = send(
        AppState::new(),
        vec![Msg::List(ListAction::ToggleMenu("1".to_string()))],
    );
    let table = state.table_view(EntityKind::Freelancers);
    let open: Vec<_> = table
        .rows
        .iter()
        .filter(|row| row.menu_open)
        .map(|row| row.id.as_str())
        .collect();
    assert_eq!(open, vec!["1"]);
}

#[test]
fn edit_emits_effect_and_info_notice() {
    init_logging();
    let state = on_page(Page::List(EntityKind::News));
    let (state, effects) = send(state, vec![Msg::List(ListAction::Edit("2".to_string()))]);

    assert_eq!(
        effects,
        vec![Effect::EditRequested {
            entity: EntityKind::News,
            id: "2".to_string(),
        }]
    );
    let notice = state.notice().expect("notice");
    assert_eq!(notice.level, NoticeLevel::Info);
    assert_eq!(notice.text, "Edit news with id: 2");
    assert_eq!(state.news().records().len(), 2);
}

#[test]
fn add_new_opens_the_matching_form() {
    init_logging();
    let state = on_page(Page::List(EntityKind::Vendors));
    let (state, _) = update(state, Msg::AddNewClicked);
    assert_eq!(state.page(), Page::Form(FormKind::Vendor));

    let state = on_page(Page::List(EntityKind::Jobs));
    let (state, _) = update(state, Msg::AddNewClicked);
    assert_eq!(state.page(), Page::List(EntityKind::Jobs));
}

#[test]
fn invalid_form_shows_errors_without_effects() {
    init_logging();
    let state = on_page(Page::Form(FormKind::Vendor));
    let (state, effects) = send(
        state,
        vec![set("email", "nope"), Msg::SubmitClicked],
    );

    assert!(effects.is_empty());
    let form = state.vendor_form();
    assert_eq!(form.error_for("id").unwrap().kind, FieldErrorKind::Required);
    assert_eq!(
        form.error_for("email").unwrap().kind,
        FieldErrorKind::InvalidFormat
    );
    assert_eq!(form.submitting(), None);
    assert_eq!(state.pending_submissions(), 0);
}

#[test]
fn accepted_vendor_is_appended_and_form_reset() {
    init_logging();
    let state = on_page(Page::Form(FormKind::Vendor));
    let (state, effects) = send(state, valid_vendor_msgs());
    let (request_id, submission) = submitted_request(&effects);
    assert_eq!(submission.record_id(), "V004");
    assert_eq!(state.vendor_form().submitting(), Some(request_id));
    assert_eq!(state.pending_submissions(), 1);

    let (state, effects) = update(
        state,
        Msg::SubmissionFinished {
            request_id,
            outcome: SubmitOutcome::Accepted {
                accepted_at: "2025-08-12T09:00:00+00:00".to_string(),
            },
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.pending_submissions(), 0);
    assert_eq!(state.vendors().records().len(), 4);
    let added = state.vendors().records().last().unwrap();
    assert_eq!(added.id, "V004");
    assert_eq!(added.status, VendorStatus::Active);
    assert_eq!(state.vendor_form().draft().id, "");
    assert_eq!(state.vendor_form().submitting(), None);
    let notice = state.notice().unwrap();
    assert_eq!(notice.level, NoticeLevel::Success);
    assert_eq!(notice.text, "Vendor added successfully!");
}

#[test]
fn failed_submission_keeps_the_draft() {
    init_logging();
    let state = on_page(Page::Form(FormKind::Vendor));
    let (state, effects) = send(state, valid_vendor_msgs());
    let (request_id, _) = submitted_request(&effects);

    let (state, _) = update(
        state,
        Msg::SubmissionFinished {
            request_id,
            outcome: SubmitOutcome::Failed {
                reason: "service unavailable".to_string(),
            },
        },
    );

    assert_eq!(state.vendors().records().len(), 3);
    assert_eq!(state.vendor_form().draft().id, "V004");
    assert_eq!(state.vendor_form().submitting(), None);
    let notice = state.notice().unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(
        notice.text,
        "Failed to add vendor. Try again. (service unavailable)"
    );

    let (_, effects) = update(state, Msg::SubmitClicked);
    let (retry_id, _) = submitted_request(&effects);
    assert_ne!(retry_id, request_id);
}

#[test]
fn form_is_frozen_while_submitting() {
    init_logging();
    let state = on_page(Page::Form(FormKind::Vendor));
    let (state, _) = send(state, valid_vendor_msgs());

    let (state, effects) = send(
        state,
        vec![set("name", "Someone Else"), Msg::SubmitClicked, Msg::ResetClicked],
    );
    assert!(effects.is_empty());
    assert_eq!(state.vendor_form().draft().name, "Sara Lee");
    assert_eq!(state.pending_submissions(), 1);
}

#[test]
fn vendor_id_already_in_use_is_rejected() {
    init_logging();
    let state = on_page(Page::Form(FormKind::Vendor));
    let (state, effects) = send(state, valid_vendor_msgs());
    let (request_id, _) = submitted_request(&effects);
    let (state, _) = update(
        state,
        Msg::SubmissionFinished {
            request_id,
            outcome: SubmitOutcome::Accepted {
                accepted_at: "2025-08-12T09:00:00+00:00".to_string(),
            },
        },
    );

    let (state, effects) = send(state, valid_vendor_msgs());
    assert!(effects.is_empty());
    assert_eq!(
        state.vendor_form().error_for("id").unwrap().kind,
        FieldErrorKind::Duplicate
    );
}

#[test]
fn generated_ids_are_never_reused() {
    init_logging();
    let state = on_page(Page::Form(FormKind::Order));
    let order_msgs = || {
        vec![
            set("customer_name", "Ali Hassan"),
            set("order_date", "2025-08-12"),
            Msg::SubmitClicked,
        ]
    };

    let (state, effects) = send(state, order_msgs());
    let (first_id, first) = submitted_request(&effects);
    assert_eq!(first.record_id(), "#ORD-004");

    let (state, _) = update(
        state,
        Msg::SubmissionFinished {
            request_id: first_id,
            outcome: SubmitOutcome::Failed {
                reason: "timeout".to_string(),
            },
        },
    );
    let (_, effects) = update(state, Msg::SubmitClicked);
    let (_, second) = submitted_request(&effects);
    assert_eq!(second.record_id(), "#ORD-005");
}

#[test]
fn accepted_product_takes_its_creation_date_from_the_answer() {
    init_logging();
    let state = on_page(Page::Form(FormKind::Product));
    let (state, effects) = send(
        state,
        vec![
            set("name", "Standing Desk"),
            set("category", "Furniture"),
            set("price", "349.00"),
            set("stock", "4"),
            Msg::SubmitClicked,
        ],
    );
    let (request_id, submission) = submitted_request(&effects);
    assert_eq!(submission.record_id(), "P008");

    let (state, _) = update(
        state,
        Msg::SubmissionFinished {
            request_id,
            outcome: SubmitOutcome::Accepted {
                accepted_at: "2025-09-01T12:30:00+00:00".to_string(),
            },
        },
    );
    let product = state.products().records().last().unwrap();
    assert_eq!(product.created_at, "2025-09-01");
    assert_eq!(
        state.notice().unwrap().text,
        "Product \"Standing Desk\" added successfully!"
    );
}

#[test]
fn answer_arriving_after_navigation_still_lands() {
    init_logging();
    let state = on_page(Page::Form(FormKind::Purchase));
    let (state, effects) = send(
        state,
        vec![
            set("vendor", "StyleHub"),
            set("product", "Rain Coat"),
            set("price", "45"),
            set("date", "2025-08-12"),
            Msg::SubmitClicked,
            Msg::Navigate(Page::List(EntityKind::Purchases)),
        ],
    );
    let (request_id, _) = submitted_request(&effects);

    let (state, _) = update(
        state,
        Msg::SubmissionFinished {
            request_id,
            outcome: SubmitOutcome::Accepted {
                accepted_at: "2025-08-12T10:00:00+00:00".to_string(),
            },
        },
    );
    let table = state.table_view(EntityKind::Purchases);
    assert_eq!(table.total_count, 4);
    assert_eq!(table.rows.last().unwrap().id, "#PUR-1004");
}

#[test]
fn unknown_request_answers_are_ignored() {
    init_logging();
    let state = AppState::new();
    let before = state.clone();
    let (after, effects) = update(
        state,
        Msg::SubmissionFinished {
            request_id: 99,
            outcome: SubmitOutcome::Accepted {
                accepted_at: "2025-08-12T10:00:00+00:00".to_string(),
            },
        },
    );
    assert!(effects.is_empty());
    assert_eq!(after, before);
}

#[test]
fn navigation_clears_the_notice() {
    init_logging();
    let state = on_page(Page::List(EntityKind::Jobs));
    let (state, _) = update(state, Msg::List(ListAction::Edit("1".to_string())));
    assert!(state.notice().is_some());

    let (state, _) = update(state, Msg::Navigate(Page::List(EntityKind::News)));
    assert!(state.notice().is_none());
}
