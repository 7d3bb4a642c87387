//! Dashboard core: pure state machine, list controller and view-model helpers.
mod effect;
mod entity;
mod form;
mod list;
mod msg;
mod records;
pub mod seed;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, RequestId, SubmitOutcome, Submission};
pub use entity::{matches_search, EntityKind, Filter, ListEntity};
pub use form::{
    FieldError, FieldErrorKind, FieldSpec, FormDraft, FormKind, FormState, NewRecord, OrderDraft,
    ProductDraft, PurchaseDraft, VendorDraft,
};
pub use list::{
    filter_records, page_slice, total_pages, ListAction, ListOutcome, ListState,
    DEFAULT_PAGE_SIZE,
};
pub use msg::Msg;
pub use records::{
    Activity, Freelancer, Job, JobStatus, NewsItem, NewsStatus, Order, PaymentStatus, Product,
    ProductStatus, Purchase, PurchaseStatus, ShippingStatus, UnknownVariant, Vendor, VendorStatus,
};
pub use state::{AppState, Notice, NoticeLevel, Page};
pub use update::update;
pub use view_model::{
    form_view, summary_cards, table_view, AppViewModel, FieldView, FormView, PageBody, RowView,
    SummaryCard, TableView,
};
