use crate::entity::{EntityKind, ListEntity};
use crate::form::{FormDraft, FormKind, FormState};
use crate::list::ListState;
use crate::state::{Notice, Page};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub page: Page,
    pub body: PageBody,
    pub notice: Option<Notice>,
    pub pending_submissions: usize,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageBody {
    Table(TableView),
    Form(FormView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCard {
    pub label: String,
    pub value: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: String,
    pub cells: Vec<String>,
    pub menu_open: bool,
}

/// Everything a list page shows, already filtered and sliced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub entity: EntityKind,
    pub columns: Vec<&'static str>,
    pub rows: Vec<RowView>,
    pub summary: Vec<SummaryCard>,
    pub search: String,
    pub filter: String,
    pub filter_options: Vec<String>,
    pub page: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
    pub total_count: usize,
    pub add_new: Option<FormKind>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub value: String,
    pub required: bool,
    pub choices: Vec<&'static str>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub kind: FormKind,
    pub title: &'static str,
    pub fields: Vec<FieldView>,
    pub submitting: bool,
}

/// Summary cards: the collection size, then one count per filter option.
pub fn summary_cards<E: ListEntity>(records: &[E]) -> Vec<SummaryCard> {
    let mut cards = vec![SummaryCard {
        label: format!("Total {}", E::KIND.title()),
        value: records.len(),
    }];
    for facet in E::facet_options(records) {
        cards.push(SummaryCard {
            label: facet.to_string(),
            value: records.iter().filter(|r| r.facet() == facet).count(),
        });
    }
    cards
}

pub fn table_view<E: ListEntity>(list: &ListState<E>) -> TableView {
    let filtered = list.filtered();
    let visible_menu = list.visible_menu();
    let rows = list
        .page_rows()
        .into_iter()
        .map(|record| RowView {
            id: record.id().to_string(),
            cells: record.cells(),
            menu_open: visible_menu == Some(record.id()),
        })
        .collect();

    let mut filter_options = vec!["All".to_string()];
    filter_options.extend(list.filter_options().iter().map(ToString::to_string));

    TableView {
        entity: E::KIND,
        columns: E::COLUMNS.to_vec(),
        rows,
        summary: summary_cards(list.records()),
        search: list.search().to_string(),
        filter: list.filter().to_string(),
        filter_options,
        page: list.page(),
        total_pages: list.total_pages(),
        filtered_count: filtered.len(),
        total_count: list.records().len(),
        add_new: FormKind::for_entity(E::KIND),
    }
}

pub fn form_view<D: FormDraft>(form: &FormState<D>) -> FormView {
    let fields = D::FIELDS
        .iter()
        .map(|spec| FieldView {
            name: spec.name,
            label: spec.label,
            value: form.draft().value(spec.name).unwrap_or_default().to_string(),
            required: spec.required,
            choices: spec.choices.to_vec(),
            error: form.error_for(spec.name).map(|error| error.message.clone()),
        })
        .collect();
    FormView {
        kind: D::KIND,
        title: D::KIND.title(),
        fields,
        submitting: form.submitting().is_some(),
    }
}
