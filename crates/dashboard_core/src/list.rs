use dashboard_logging::{dash_debug, dash_trace};

use crate::entity::{matches_search, Filter, ListEntity};

/// Rows shown per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Number of pages needed for `count` rows; never less than one so an empty
/// view still reads "page 1 of 1".
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

/// Window of `items` shown at the 1-based `page`.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let page_size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Records matching `search` and `filter`, in collection order.
pub fn filter_records<'a, E: ListEntity>(
    records: &'a [E],
    search: &str,
    filter: &Filter<E::Facet>,
) -> Vec<&'a E> {
    records
        .iter()
        .filter(|record| matches_search(*record, search) && filter.matches(&record.facet()))
        .collect()
}

/// Text-level request against a list, as produced by the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListAction {
    Search(String),
    Filter(String),
    NextPage,
    PrevPage,
    ToggleMenu(String),
    Edit(String),
    Delete(String),
}

/// What applying a `ListAction` asks of the surrounding app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListOutcome {
    Unchanged,
    Changed,
    EditRequested { id: String },
}

/// Search, filter, pagination and row-menu state over one collection.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<E: ListEntity> {
    records: Vec<E>,
    search: String,
    filter: Filter<E::Facet>,
    page: usize,
    open_menu: Option<E::Id>,
    page_size: usize,
}

impl<E: ListEntity> ListState<E> {
    pub fn new(seed: Vec<E>) -> Self {
        Self::with_page_size(seed, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(seed: Vec<E>, page_size: usize) -> Self {
        Self {
            records: seed,
            search: String::new(),
            filter: Filter::All,
            page: 1,
            open_menu: None,
            page_size: page_size.max(1),
        }
    }

    pub fn records(&self) -> &[E] {
        &self.records
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn filter(&self) -> &Filter<E::Facet> {
        &self.filter
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn open_menu(&self) -> Option<&E::Id> {
        self.open_menu.as_ref()
    }

    pub fn contains(&self, id: &E::Id) -> bool {
        self.records.iter().any(|record| record.id() == id)
    }

    pub fn filtered(&self) -> Vec<&E> {
        filter_records(&self.records, &self.search, &self.filter)
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered().len(), self.page_size)
    }

    pub fn page_rows(&self) -> Vec<&E> {
        let filtered = self.filtered();
        page_slice(&filtered, self.page, self.page_size).to_vec()
    }

    /// The open menu, if its row is on the current page.
    pub fn visible_menu(&self) -> Option<&E::Id> {
        let open = self.open_menu.as_ref()?;
        self.page_rows()
            .into_iter()
            .any(|record| record.id() == open)
            .then_some(open)
    }

    pub fn filter_options(&self) -> Vec<E::Facet> {
        E::facet_options(&self.records)
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
        self.page = 1;
    }

    pub fn set_filter(&mut self, filter: Filter<E::Facet>) {
        self.filter = filter;
        self.page = 1;
    }

    /// Returns false at the last page.
    pub fn next_page(&mut self) -> bool {
        if self.page < self.total_pages() {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Returns false at the first page.
    pub fn prev_page(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Removes the record with `id`. Returns false when it was already gone.
    pub fn delete(&mut self, id: &E::Id) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id() != id);
        if self.open_menu.as_ref() == Some(id) {
            self.open_menu = None;
        }
        self.clamp_page();
        self.records.len() != before
    }

    /// Opens the menu of a row on the current page, or closes it when it is
    /// already open. Ids not on the current page are ignored.
    pub fn toggle_menu(&mut self, id: &E::Id) -> bool {
        if self.open_menu.as_ref() == Some(id) {
            self.open_menu = None;
            return true;
        }
        let on_page = self.page_rows().iter().any(|record| record.id() == id);
        if on_page {
            self.open_menu = Some(id.clone());
        }
        on_page
    }

    /// Acknowledges an edit request: closes the menu, leaves data untouched.
    pub fn edit(&mut self, id: &E::Id) -> bool {
        let known = self.contains(id);
        if known {
            self.open_menu = None;
        }
        known
    }

    /// Appends a freshly created record. Rejects ids already in use.
    pub fn insert(&mut self, record: E) -> bool {
        if self.contains(record.id()) {
            return false;
        }
        self.records.push(record);
        true
    }

    pub fn apply(&mut self, action: ListAction) -> ListOutcome {
        dash_trace!("{} list action {:?}", E::KIND, action);
        let changed = match action {
            ListAction::Search(text) => {
                self.set_search(text);
                true
            }
            ListAction::Filter(raw) => match Filter::parse(&raw, &self.filter_options()) {
                Some(filter) => {
                    self.set_filter(filter);
                    true
                }
                None => {
                    dash_debug!("{}: no filter option named {:?}", E::KIND, raw);
                    false
                }
            },
            ListAction::NextPage => self.next_page(),
            ListAction::PrevPage => self.prev_page(),
            ListAction::ToggleMenu(raw) => match parse_id::<E>(&raw) {
                Some(id) => self.toggle_menu(&id),
                None => false,
            },
            ListAction::Edit(raw) => {
                if let Some(id) = parse_id::<E>(&raw) {
                    if self.edit(&id) {
                        return ListOutcome::EditRequested { id: id.to_string() };
                    }
                }
                false
            }
            ListAction::Delete(raw) => match parse_id::<E>(&raw) {
                Some(id) => self.delete(&id),
                None => false,
            },
        };
        if changed {
            ListOutcome::Changed
        } else {
            ListOutcome::Unchanged
        }
    }

    fn clamp_page(&mut self) {
        self.page = self.page.clamp(1, self.total_pages());
    }
}

fn parse_id<E: ListEntity>(raw: &str) -> Option<E::Id> {
    let parsed = raw.trim().parse::<E::Id>().ok();
    if parsed.is_none() {
        dash_debug!("{}: {:?} is not a valid id", E::KIND, raw);
    }
    parsed
}
