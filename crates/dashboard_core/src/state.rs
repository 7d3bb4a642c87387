use std::collections::BTreeMap;
use std::fmt;

use dashboard_logging::{dash_debug, dash_info, dash_warn};

use crate::effect::{Effect, RequestId, SubmitOutcome, Submission};
use crate::entity::EntityKind;
use crate::form::{
    FormKind, FormState, NewRecord, OrderDraft, ProductDraft, PurchaseDraft, VendorDraft,
};
use crate::list::{ListAction, ListOutcome, ListState, DEFAULT_PAGE_SIZE};
use crate::records::{Freelancer, Job, NewsItem, Order, Product, Purchase, Vendor};
use crate::seed;
use crate::view_model::{form_view, table_view, AppViewModel, PageBody, TableView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    List(EntityKind),
    Form(FormKind),
}

impl Default for Page {
    fn default() -> Self {
        Page::List(EntityKind::Freelancers)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Page::List(kind) => f.write_str(kind.title()),
            Page::Form(kind) => f.write_str(kind.title()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// One-line acknowledgement shown above the page until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

/// Highest numeric suffix among `ids` that start with `prefix`, plus one.
fn next_seq<'a>(ids: impl Iterator<Item = &'a String>, prefix: &str, floor: u32) -> u32 {
    ids.filter_map(|id| id.strip_prefix(prefix)?.parse::<u32>().ok())
        .max()
        .map_or(floor, |max| max + 1)
        .max(floor)
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    page: Page,
    freelancers: ListState<Freelancer>,
    jobs: ListState<Job>,
    news: ListState<NewsItem>,
    orders: ListState<Order>,
    products: ListState<Product>,
    purchases: ListState<Purchase>,
    vendors: ListState<Vendor>,
    vendor_form: FormState<VendorDraft>,
    order_form: FormState<OrderDraft>,
    product_form: FormState<ProductDraft>,
    purchase_form: FormState<PurchaseDraft>,
    pending: BTreeMap<RequestId, Submission>,
    next_request_id: RequestId,
    next_order_seq: u32,
    next_product_seq: u32,
    next_purchase_seq: u32,
    notice: Option<Notice>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    /// Fresh session over the seed data.
    pub fn with_page_size(page_size: usize) -> Self {
        let orders = seed::orders();
        let products = seed::products();
        let purchases = seed::purchases();
        Self {
            page: Page::default(),
            next_order_seq: next_seq(orders.iter().map(|o| &o.id), "#ORD-", 1),
            next_product_seq: next_seq(products.iter().map(|p| &p.id), "P", 1),
            next_purchase_seq: next_seq(purchases.iter().map(|p| &p.id), "#PUR-", 1001),
            freelancers: ListState::with_page_size(seed::freelancers(), page_size),
            jobs: ListState::with_page_size(seed::jobs(), page_size),
            news: ListState::with_page_size(seed::news(), page_size),
            orders: ListState::with_page_size(orders, page_size),
            products: ListState::with_page_size(products, page_size),
            purchases: ListState::with_page_size(purchases, page_size),
            vendors: ListState::with_page_size(seed::vendors(), page_size),
            vendor_form: FormState::default(),
            order_form: FormState::default(),
            product_form: FormState::default(),
            purchase_form: FormState::default(),
            pending: BTreeMap::new(),
            next_request_id: 1,
            notice: None,
            dirty: false,
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn freelancers(&self) -> &ListState<Freelancer> {
        &self.freelancers
    }

    pub fn jobs(&self) -> &ListState<Job> {
        &self.jobs
    }

    pub fn news(&self) -> &ListState<NewsItem> {
        &self.news
    }

    pub fn orders(&self) -> &ListState<Order> {
        &self.orders
    }

    pub fn products(&self) -> &ListState<Product> {
        &self.products
    }

    pub fn purchases(&self) -> &ListState<Purchase> {
        &self.purchases
    }

    pub fn vendors(&self) -> &ListState<Vendor> {
        &self.vendors
    }

    pub fn vendor_form(&self) -> &FormState<VendorDraft> {
        &self.vendor_form
    }

    pub fn order_form(&self) -> &FormState<OrderDraft> {
        &self.order_form
    }

    pub fn product_form(&self) -> &FormState<ProductDraft> {
        &self.product_form
    }

    pub fn purchase_form(&self) -> &FormState<PurchaseDraft> {
        &self.purchase_form
    }

    /// Submissions sent out and not yet answered.
    pub fn pending_submissions(&self) -> usize {
        self.pending.len()
    }

    pub fn view(&self) -> AppViewModel {
        let body = match self.page {
            Page::List(kind) => PageBody::Table(self.table_view(kind)),
            Page::Form(FormKind::Vendor) => PageBody::Form(form_view(&self.vendor_form)),
            Page::Form(FormKind::Order) => PageBody::Form(form_view(&self.order_form)),
            Page::Form(FormKind::Product) => PageBody::Form(form_view(&self.product_form)),
            Page::Form(FormKind::Purchase) => PageBody::Form(form_view(&self.purchase_form)),
        };
        AppViewModel {
            page: self.page,
            body,
            notice: self.notice.clone(),
            pending_submissions: self.pending.len(),
            dirty: self.dirty,
        }
    }

    pub fn table_view(&self, kind: EntityKind) -> TableView {
        match kind {
            EntityKind::Freelancers => table_view(&self.freelancers),
            EntityKind::Jobs => table_view(&self.jobs),
            EntityKind::News => table_view(&self.news),
            EntityKind::Orders => table_view(&self.orders),
            EntityKind::Products => table_view(&self.products),
            EntityKind::Purchases => table_view(&self.purchases),
            EntityKind::Vendors => table_view(&self.vendors),
        }
    }

    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn navigate(&mut self, page: Page) {
        dash_debug!("navigate {} -> {}", self.page, page);
        self.page = page;
        self.notice = None;
        self.mark_dirty();
    }

    pub(crate) fn dismiss_notice(&mut self) {
        if self.notice.take().is_some() {
            self.mark_dirty();
        }
    }

    fn set_notice(&mut self, level: NoticeLevel, text: String) {
        self.notice = Some(Notice { level, text });
        self.mark_dirty();
    }

    /// Applies a list action to the list shown on the current page.
    pub(crate) fn apply_list_action(&mut self, action: ListAction) -> Vec<Effect> {
        let Page::List(kind) = self.page else {
            dash_debug!("list action {:?} ignored on {}", action, self.page);
            return Vec::new();
        };
        let outcome = match kind {
            EntityKind::Freelancers => self.freelancers.apply(action),
            EntityKind::Jobs => self.jobs.apply(action),
            EntityKind::News => self.news.apply(action),
            EntityKind::Orders => self.orders.apply(action),
            EntityKind::Products => self.products.apply(action),
            EntityKind::Purchases => self.purchases.apply(action),
            EntityKind::Vendors => self.vendors.apply(action),
        };
        match outcome {
            ListOutcome::Unchanged => Vec::new(),
            ListOutcome::Changed => {
                self.mark_dirty();
                Vec::new()
            }
            ListOutcome::EditRequested { id } => {
                self.set_notice(
                    NoticeLevel::Info,
                    format!("Edit {} with id: {}", kind.noun(), id),
                );
                vec![Effect::EditRequested { entity: kind, id }]
            }
        }
    }

    pub(crate) fn add_new(&mut self) {
        match self.page {
            Page::List(kind) => match FormKind::for_entity(kind) {
                Some(form) => self.navigate(Page::Form(form)),
                None => dash_debug!("{} has no add form", kind),
            },
            Page::Form(_) => {}
        }
    }

    pub(crate) fn set_field(&mut self, field: &str, value: String) {
        let Page::Form(kind) = self.page else {
            return;
        };
        let changed = match kind {
            FormKind::Vendor => self.vendor_form.set_field(field, value),
            FormKind::Order => self.order_form.set_field(field, value),
            FormKind::Product => self.product_form.set_field(field, value),
            FormKind::Purchase => self.purchase_form.set_field(field, value),
        };
        if changed {
            self.mark_dirty();
        } else {
            dash_debug!("{} form: field {:?} not updated", kind, field);
        }
    }

    pub(crate) fn reset_form(&mut self) {
        let Page::Form(kind) = self.page else {
            return;
        };
        let submitting = match kind {
            FormKind::Vendor => self.vendor_form.submitting(),
            FormKind::Order => self.order_form.submitting(),
            FormKind::Product => self.product_form.submitting(),
            FormKind::Purchase => self.purchase_form.submitting(),
        };
        if submitting.is_some() {
            return;
        }
        match kind {
            FormKind::Vendor => self.vendor_form.reset(),
            FormKind::Order => self.order_form.reset(),
            FormKind::Product => self.product_form.reset(),
            FormKind::Purchase => self.purchase_form.reset(),
        }
        self.mark_dirty();
    }

    /// Validates the current form and, when valid, reserves a request id and
    /// a record id and emits the submission.
    pub(crate) fn submit_form(&mut self) -> Vec<Effect> {
        let Page::Form(kind) = self.page else {
            return Vec::new();
        };
        let request_id = self.next_request_id;
        let submission = match kind {
            FormKind::Vendor => {
                if self.vendor_form.submitting().is_some() {
                    return Vec::new();
                }
                let vendors = &self.vendors;
                let pending = &self.pending;
                let taken = |id: &str| {
                    vendors.records().iter().any(|v| v.id.eq_ignore_ascii_case(id))
                        || pending.values().any(|s| {
                            matches!(s, Submission::Vendor(v) if v.id.eq_ignore_ascii_case(id))
                        })
                };
                let ctx = NewRecord {
                    assigned_id: String::new(),
                    id_taken: &taken,
                };
                self.vendor_form.check(&ctx).map(Submission::Vendor)
            }
            FormKind::Order => {
                if self.order_form.submitting().is_some() {
                    return Vec::new();
                }
                let ctx = NewRecord {
                    assigned_id: format!("#ORD-{:03}", self.next_order_seq),
                    id_taken: &|_: &str| false,
                };
                let order = self.order_form.check(&ctx);
                if order.is_some() {
                    self.next_order_seq += 1;
                }
                order.map(Submission::Order)
            }
            FormKind::Product => {
                if self.product_form.submitting().is_some() {
                    return Vec::new();
                }
                let ctx = NewRecord {
                    assigned_id: format!("P{:03}", self.next_product_seq),
                    id_taken: &|_: &str| false,
                };
                let product = self.product_form.check(&ctx);
                if product.is_some() {
                    self.next_product_seq += 1;
                }
                product.map(Submission::Product)
            }
            FormKind::Purchase => {
                if self.purchase_form.submitting().is_some() {
                    return Vec::new();
                }
                let ctx = NewRecord {
                    assigned_id: format!("#PUR-{}", self.next_purchase_seq),
                    id_taken: &|_: &str| false,
                };
                let purchase = self.purchase_form.check(&ctx);
                if purchase.is_some() {
                    self.next_purchase_seq += 1;
                }
                purchase.map(Submission::Purchase)
            }
        };
        self.mark_dirty();

        let Some(submission) = submission else {
            dash_debug!("{} form has validation errors", kind);
            return Vec::new();
        };

        match kind {
            FormKind::Vendor => self.vendor_form.mark_submitting(request_id),
            FormKind::Order => self.order_form.mark_submitting(request_id),
            FormKind::Product => self.product_form.mark_submitting(request_id),
            FormKind::Purchase => self.purchase_form.mark_submitting(request_id),
        }
        self.next_request_id += 1;
        dash_info!(
            "submitting {} {} as request {}",
            kind,
            submission.record_id(),
            request_id
        );
        self.pending.insert(request_id, submission.clone());
        vec![Effect::Submit {
            request_id,
            submission,
        }]
    }

    pub(crate) fn finish_submission(&mut self, request_id: RequestId, outcome: SubmitOutcome) {
        let Some(submission) = self.pending.remove(&request_id) else {
            dash_warn!("answer for unknown request {} ignored", request_id);
            return;
        };
        let kind = submission.form();
        let form_waiting = match kind {
            FormKind::Vendor => self.vendor_form.submitting(),
            FormKind::Order => self.order_form.submitting(),
            FormKind::Product => self.product_form.submitting(),
            FormKind::Purchase => self.purchase_form.submitting(),
        } == Some(request_id);

        match outcome {
            SubmitOutcome::Accepted { accepted_at } => {
                let (inserted, message) = match submission {
                    Submission::Vendor(vendor) => {
                        (self.vendors.insert(vendor), "Vendor added successfully!".to_string())
                    }
                    Submission::Order(order) => {
                        (self.orders.insert(order), "Order created!".to_string())
                    }
                    Submission::Product(mut product) => {
                        product.created_at = accepted_at.chars().take(10).collect();
                        let message = format!("Product \"{}\" added successfully!", product.name);
                        (self.products.insert(product), message)
                    }
                    Submission::Purchase(purchase) => {
                        (self.purchases.insert(purchase), "Purchase added successfully!".to_string())
                    }
                };
                if form_waiting {
                    self.reset_submitted_form(kind);
                }
                if inserted {
                    dash_info!("request {} accepted at {}", request_id, accepted_at);
                    self.set_notice(NoticeLevel::Success, message);
                } else {
                    dash_warn!("request {} accepted but its id is already in use", request_id);
                    self.set_notice(
                        NoticeLevel::Error,
                        format!("Could not add {}: id already exists.", kind),
                    );
                }
            }
            SubmitOutcome::Failed { reason } => {
                dash_warn!("request {} failed: {}", request_id, reason);
                if form_waiting {
                    match kind {
                        FormKind::Vendor => self.vendor_form.submission_failed(),
                        FormKind::Order => self.order_form.submission_failed(),
                        FormKind::Product => self.product_form.submission_failed(),
                        FormKind::Purchase => self.purchase_form.submission_failed(),
                    }
                }
                self.set_notice(
                    NoticeLevel::Error,
                    format!("Failed to add {kind}. Try again. ({reason})"),
                );
            }
        }
    }

    fn reset_submitted_form(&mut self, kind: FormKind) {
        match kind {
            FormKind::Vendor => self.vendor_form.reset(),
            FormKind::Order => self.order_form.reset(),
            FormKind::Product => self.product_form.reset(),
            FormKind::Purchase => self.purchase_form.reset(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequences_continue_after_seed_ids() {
        let state = AppState::new();
        assert_eq!(state.next_order_seq, 4);
        assert_eq!(state.next_product_seq, 8);
        assert_eq!(state.next_purchase_seq, 1004);
    }

    #[test]
    fn next_seq_uses_floor_without_matching_ids() {
        let ids = ["V001".to_string(), "misc".to_string()];
        assert_eq!(next_seq(ids.iter(), "#ORD-", 1), 1);
        assert_eq!(next_seq(ids.iter(), "V", 1), 2);
    }
}
