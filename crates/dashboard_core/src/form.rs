//! Record-creation forms: raw text drafts, validation, per-field errors.
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::entity::EntityKind;
use crate::records::{
    Order, PaymentStatus, Product, ProductStatus, Purchase, PurchaseStatus, ShippingStatus,
    Vendor, VendorStatus,
};
use crate::seed::PURCHASE_VENDORS;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());
static PHONE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\+?[0-9\s\-()]{7,15}$").unwrap());
static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(https?://[^\s$.?#].[^\s]*)$").unwrap());
static DATE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormKind {
    Vendor,
    Order,
    Product,
    Purchase,
}

impl FormKind {
    pub const ALL: [FormKind; 4] = [
        FormKind::Vendor,
        FormKind::Order,
        FormKind::Product,
        FormKind::Purchase,
    ];

    pub fn entity(self) -> EntityKind {
        match self {
            FormKind::Vendor => EntityKind::Vendors,
            FormKind::Order => EntityKind::Orders,
            FormKind::Product => EntityKind::Products,
            FormKind::Purchase => EntityKind::Purchases,
        }
    }

    pub fn for_entity(entity: EntityKind) -> Option<FormKind> {
        match entity {
            EntityKind::Vendors => Some(FormKind::Vendor),
            EntityKind::Orders => Some(FormKind::Order),
            EntityKind::Products => Some(FormKind::Product),
            EntityKind::Purchases => Some(FormKind::Purchase),
            EntityKind::Freelancers | EntityKind::Jobs | EntityKind::News => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            FormKind::Vendor => "Add New Vendor",
            FormKind::Order => "Add New Order",
            FormKind::Product => "Add New Product",
            FormKind::Purchase => "Add New Purchase",
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.entity().noun())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    Required,
    InvalidFormat,
    OutOfRange,
    Duplicate,
    UnknownOption,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub kind: FieldErrorKind,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, kind: FieldErrorKind, message: impl Into<String>) -> Self {
        Self {
            field,
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub required: bool,
    /// Allowed values for select fields; empty for free text.
    pub choices: &'static [&'static str],
}

const fn text(name: &'static str, label: &'static str, required: bool) -> FieldSpec {
    FieldSpec {
        name,
        label,
        required,
        choices: &[],
    }
}

const fn select(name: &'static str, label: &'static str, choices: &'static [&'static str]) -> FieldSpec {
    FieldSpec {
        name,
        label,
        required: false,
        choices,
    }
}

/// Context for turning a valid draft into a record.
pub struct NewRecord<'a> {
    /// Id reserved for the record, ignored by forms that take a user-entered id.
    pub assigned_id: String,
    pub id_taken: &'a dyn Fn(&str) -> bool,
}

/// A form's editable text fields and how they become a record.
pub trait FormDraft: Default + Clone + fmt::Debug + PartialEq {
    type Record;

    const KIND: FormKind;
    const FIELDS: &'static [FieldSpec];

    fn value(&self, field: &str) -> Option<&str>;

    /// Returns false for unknown field names.
    fn set(&mut self, field: &str, value: String) -> bool;

    fn validate(&self, ctx: &NewRecord<'_>) -> Result<Self::Record, Vec<FieldError>>;
}

/// Collects errors while a draft is checked field by field.
#[derive(Default)]
struct Checker {
    errors: Vec<FieldError>,
}

impl Checker {
    fn required<'v>(&mut self, field: &'static str, value: &'v str, message: &str) -> Option<&'v str> {
        let value = value.trim();
        if value.is_empty() {
            self.errors
                .push(FieldError::new(field, FieldErrorKind::Required, message));
            None
        } else {
            Some(value)
        }
    }

    fn pattern(&mut self, field: &'static str, value: &str, pattern: &Regex, message: &str) -> bool {
        let ok = pattern.is_match(value);
        if !ok {
            self.errors
                .push(FieldError::new(field, FieldErrorKind::InvalidFormat, message));
        }
        ok
    }

    fn date<'v>(&mut self, field: &'static str, value: &'v str, required: &str) -> Option<&'v str> {
        let value = self.required(field, value, required)?;
        self.pattern(field, value, &DATE, "Use the YYYY-MM-DD date format")
            .then_some(value)
    }

    fn number<T: FromStr>(&mut self, field: &'static str, value: &str, required: &str, invalid: &str) -> Option<T> {
        let value = self.required(field, value, required)?;
        match value.parse::<T>() {
            Ok(number) => Some(number),
            Err(_) => {
                self.errors
                    .push(FieldError::new(field, FieldErrorKind::InvalidFormat, invalid));
                None
            }
        }
    }

    /// Like `number`, but NaN and infinities count as malformed.
    fn amount(&mut self, field: &'static str, value: &str, required: &str, invalid: &str) -> Option<f64> {
        let amount = self.number::<f64>(field, value, required, invalid)?;
        if amount.is_finite() {
            Some(amount)
        } else {
            self.errors
                .push(FieldError::new(field, FieldErrorKind::InvalidFormat, invalid));
            None
        }
    }

    fn at_least<T: PartialOrd>(&mut self, field: &'static str, value: Option<T>, min: T, message: &str) -> Option<T> {
        let value = value?;
        if value < min {
            self.errors
                .push(FieldError::new(field, FieldErrorKind::OutOfRange, message));
            None
        } else {
            Some(value)
        }
    }

    fn choice<T: FromStr>(&mut self, field: &'static str, value: &str) -> Option<T> {
        match value.parse::<T>() {
            Ok(choice) => Some(choice),
            Err(_) => {
                self.errors.push(FieldError::new(
                    field,
                    FieldErrorKind::UnknownOption,
                    format!("{:?} is not one of the offered options", value.trim()),
                ));
                None
            }
        }
    }

    fn finish<R>(self, build: impl FnOnce() -> Option<R>) -> Result<R, Vec<FieldError>> {
        if !self.errors.is_empty() {
            return Err(self.errors);
        }
        // Only reachable when a checked number overflows the record's field.
        build().ok_or_else(|| {
            vec![FieldError::new(
                "form",
                FieldErrorKind::OutOfRange,
                "A value is too large",
            )]
        })
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorDraft {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: String,
    pub avatar_url: String,
}

impl Default for VendorDraft {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            status: VendorStatus::Active.key().to_string(),
            avatar_url: String::new(),
        }
    }
}

impl FormDraft for VendorDraft {
    type Record = Vendor;

    const KIND: FormKind = FormKind::Vendor;
    const FIELDS: &'static [FieldSpec] = &[
        text("id", "Vendor ID", true),
        text("name", "Name", true),
        text("email", "Email", true),
        text("phone", "Phone Number", true),
        select("status", "Status", &["active", "pending", "inactive"]),
        text("avatar_url", "Avatar URL (optional)", false),
    ];

    fn value(&self, field: &str) -> Option<&str> {
        match field {
            "id" => Some(&self.id),
            "name" => Some(&self.name),
            "email" => Some(&self.email),
            "phone" => Some(&self.phone),
            "status" => Some(&self.status),
            "avatar_url" => Some(&self.avatar_url),
            _ => None,
        }
    }

    fn set(&mut self, field: &str, value: String) -> bool {
        let slot = match field {
            "id" => &mut self.id,
            "name" => &mut self.name,
            "email" => &mut self.email,
            "phone" => &mut self.phone,
            "status" => &mut self.status,
            "avatar_url" => &mut self.avatar_url,
            _ => return false,
        };
        *slot = value;
        true
    }

    fn validate(&self, ctx: &NewRecord<'_>) -> Result<Vendor, Vec<FieldError>> {
        let mut check = Checker::default();
        let id = check.required("id", &self.id, "Vendor ID is required");
        if let Some(id) = id {
            if (ctx.id_taken)(id) {
                check.errors.push(FieldError::new(
                    "id",
                    FieldErrorKind::Duplicate,
                    format!("Vendor ID {id} already exists"),
                ));
            }
        }
        let name = check.required("name", &self.name, "Name is required");
        let email = check
            .required("email", &self.email, "Email is required")
            .filter(|email| check.pattern("email", email, &EMAIL, "Invalid email format"));
        let phone = check
            .required("phone", &self.phone, "Phone number is required")
            .filter(|phone| check.pattern("phone", phone, &PHONE, "Invalid phone number format"));
        let status = check.choice::<VendorStatus>("status", &self.status);
        let avatar_url = optional(&self.avatar_url);
        if let Some(url) = &avatar_url {
            check.pattern("avatar_url", url, &URL, "Invalid URL format");
        }

        check.finish(|| {
            Some(Vendor {
                id: id?.to_string(),
                name: name?.to_string(),
                email: email?.to_string(),
                phone: phone?.to_string(),
                status: status?,
                avatar_url,
            })
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    pub customer_name: String,
    pub order_date: String,
    pub payment_status: String,
    pub shipping_status: String,
}

impl Default for OrderDraft {
    fn default() -> Self {
        Self {
            customer_name: String::new(),
            order_date: String::new(),
            payment_status: PaymentStatus::Pending.label().to_string(),
            shipping_status: ShippingStatus::Processing.label().to_string(),
        }
    }
}

impl FormDraft for OrderDraft {
    type Record = Order;

    const KIND: FormKind = FormKind::Order;
    const FIELDS: &'static [FieldSpec] = &[
        text("customer_name", "Customer Name", true),
        text("order_date", "Order Date", true),
        select("payment_status", "Payment Status", &["Paid", "Pending", "Failed"]),
        select(
            "shipping_status",
            "Shipping Status",
            &["Processing", "Shipped", "Delivered", "Cancelled"],
        ),
    ];

    fn value(&self, field: &str) -> Option<&str> {
        match field {
            "customer_name" => Some(&self.customer_name),
            "order_date" => Some(&self.order_date),
            "payment_status" => Some(&self.payment_status),
            "shipping_status" => Some(&self.shipping_status),
            _ => None,
        }
    }

    fn set(&mut self, field: &str, value: String) -> bool {
        let slot = match field {
            "customer_name" => &mut self.customer_name,
            "order_date" => &mut self.order_date,
            "payment_status" => &mut self.payment_status,
            "shipping_status" => &mut self.shipping_status,
            _ => return false,
        };
        *slot = value;
        true
    }

    fn validate(&self, ctx: &NewRecord<'_>) -> Result<Order, Vec<FieldError>> {
        let mut check = Checker::default();
        let customer = check.required("customer_name", &self.customer_name, "Customer name is required");
        let date = check.date("order_date", &self.order_date, "Order date is required");
        let payment = check.choice::<PaymentStatus>("payment_status", &self.payment_status);
        let shipping = check.choice::<ShippingStatus>("shipping_status", &self.shipping_status);

        check.finish(|| {
            Some(Order {
                id: ctx.assigned_id.clone(),
                customer: customer?.to_string(),
                items_count: 0,
                total: 0.0,
                date: date?.to_string(),
                payment_status: payment?,
                shipping_status: shipping?,
            })
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub price: String,
    pub stock: String,
    pub status: String,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: String::new(),
            price: "0".to_string(),
            stock: "0".to_string(),
            status: ProductStatus::Available.key().to_string(),
        }
    }
}

impl FormDraft for ProductDraft {
    type Record = Product;

    const KIND: FormKind = FormKind::Product;
    const FIELDS: &'static [FieldSpec] = &[
        text("name", "Product Name", true),
        text("category", "Category", true),
        text("price", "Price ($)", true),
        text("stock", "Stock Quantity", true),
        select("status", "Status", &["available", "out_of_stock", "discontinued"]),
    ];

    fn value(&self, field: &str) -> Option<&str> {
        match field {
            "name" => Some(&self.name),
            "category" => Some(&self.category),
            "price" => Some(&self.price),
            "stock" => Some(&self.stock),
            "status" => Some(&self.status),
            _ => None,
        }
    }

    fn set(&mut self, field: &str, value: String) -> bool {
        let slot = match field {
            "name" => &mut self.name,
            "category" => &mut self.category,
            "price" => &mut self.price,
            "stock" => &mut self.stock,
            "status" => &mut self.status,
            _ => return false,
        };
        *slot = value;
        true
    }

    /// `created_at` stays empty until the submission is accepted.
    fn validate(&self, ctx: &NewRecord<'_>) -> Result<Product, Vec<FieldError>> {
        let mut check = Checker::default();
        let name = check.required("name", &self.name, "Product name is required");
        let category = check.required("category", &self.category, "Category is required");
        let price = check.amount("price", &self.price, "Price is required", "Price must be a number");
        let price = check.at_least("price", price, 0.01, "Price must be greater than 0");
        let stock = check.number::<i64>("stock", &self.stock, "Stock is required", "Stock must be a whole number");
        let stock = check.at_least("stock", stock, 0, "Stock cannot be negative");
        let status = check.choice::<ProductStatus>("status", &self.status);

        check.finish(|| {
            Some(Product {
                id: ctx.assigned_id.clone(),
                name: name?.to_string(),
                category: category?.to_string(),
                price: price?,
                stock: u32::try_from(stock?).ok()?,
                status: status?,
                created_at: String::new(),
            })
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseDraft {
    pub vendor: String,
    pub product: String,
    pub quantity: String,
    pub price: String,
    pub date: String,
    pub status: String,
    pub notes: String,
}

impl Default for PurchaseDraft {
    fn default() -> Self {
        Self {
            vendor: String::new(),
            product: String::new(),
            quantity: "1".to_string(),
            price: String::new(),
            date: String::new(),
            status: PurchaseStatus::Pending.label().to_string(),
            notes: String::new(),
        }
    }
}

impl FormDraft for PurchaseDraft {
    type Record = Purchase;

    const KIND: FormKind = FormKind::Purchase;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec {
            name: "vendor",
            label: "Vendor",
            required: true,
            choices: PURCHASE_VENDORS,
        },
        text("product", "Product Name", true),
        text("quantity", "Quantity", true),
        text("price", "Price", true),
        text("date", "Date", true),
        select("status", "Status", &["Completed", "Pending", "Cancelled"]),
        text("notes", "Notes (optional)", false),
    ];

    fn value(&self, field: &str) -> Option<&str> {
        match field {
            "vendor" => Some(&self.vendor),
            "product" => Some(&self.product),
            "quantity" => Some(&self.quantity),
            "price" => Some(&self.price),
            "date" => Some(&self.date),
            "status" => Some(&self.status),
            "notes" => Some(&self.notes),
            _ => None,
        }
    }

    fn set(&mut self, field: &str, value: String) -> bool {
        let slot = match field {
            "vendor" => &mut self.vendor,
            "product" => &mut self.product,
            "quantity" => &mut self.quantity,
            "price" => &mut self.price,
            "date" => &mut self.date,
            "status" => &mut self.status,
            "notes" => &mut self.notes,
            _ => return false,
        };
        *slot = value;
        true
    }

    fn validate(&self, ctx: &NewRecord<'_>) -> Result<Purchase, Vec<FieldError>> {
        let mut check = Checker::default();
        let vendor = check.required("vendor", &self.vendor, "Vendor is required");
        let vendor = vendor.and_then(|vendor| {
            let known = PURCHASE_VENDORS
                .iter()
                .find(|known| known.eq_ignore_ascii_case(vendor));
            if known.is_none() {
                check.errors.push(FieldError::new(
                    "vendor",
                    FieldErrorKind::UnknownOption,
                    format!("{vendor:?} is not one of the offered options"),
                ));
            }
            known.copied()
        });
        let product = check.required("product", &self.product, "Product name is required");
        let quantity = check.number::<i64>(
            "quantity",
            &self.quantity,
            "Quantity is required",
            "Quantity must be a whole number",
        );
        let quantity = check.at_least("quantity", quantity, 1, "Quantity must be at least 1");
        let price = check.amount("price", &self.price, "Price is required", "Price must be a number");
        let price = check.at_least("price", price, 0.0, "Price cannot be negative");
        let date = check.date("date", &self.date, "Date is required");
        let status = check.choice::<PurchaseStatus>("status", &self.status);

        check.finish(|| {
            Some(Purchase {
                id: ctx.assigned_id.clone(),
                vendor: vendor?.to_string(),
                product: product?.to_string(),
                quantity: u32::try_from(quantity?).ok()?,
                price: price?,
                date: date?.to_string(),
                status: status?,
                notes: optional(&self.notes),
            })
        })
    }
}

/// A draft plus its inline errors and submission flag.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState<D: FormDraft> {
    draft: D,
    errors: Vec<FieldError>,
    submitting: Option<u64>,
}

impl<D: FormDraft> FormState<D> {
    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn error_for(&self, field: &str) -> Option<&FieldError> {
        self.errors.iter().find(|error| error.field == field)
    }

    /// Request id of the submission in flight, if any.
    pub fn submitting(&self) -> Option<u64> {
        self.submitting
    }

    /// Edits one field and clears that field's error. Ignored while a
    /// submission is in flight or for unknown field names.
    pub fn set_field(&mut self, field: &str, value: String) -> bool {
        if self.submitting.is_some() || !self.draft.set(field, value) {
            return false;
        }
        self.errors.retain(|error| error.field != field);
        true
    }

    /// Validates the draft. On failure the errors are kept for display.
    pub fn check(&mut self, ctx: &NewRecord<'_>) -> Option<D::Record> {
        match self.draft.validate(ctx) {
            Ok(record) => {
                self.errors.clear();
                Some(record)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    pub fn mark_submitting(&mut self, request_id: u64) {
        self.submitting = Some(request_id);
    }

    /// Clears the in-flight flag, keeping the draft for another attempt.
    pub fn submission_failed(&mut self) {
        self.submitting = None;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(taken: &dyn Fn(&str) -> bool) -> NewRecord<'_> {
        NewRecord {
            assigned_id: "X-1".to_string(),
            id_taken: taken,
        }
    }

    fn kinds(errors: &[FieldError]) -> Vec<(&'static str, FieldErrorKind)> {
        errors.iter().map(|e| (e.field, e.kind)).collect()
    }

    #[test]
    fn empty_vendor_reports_every_required_field() {
        let errors = VendorDraft::default().validate(&ctx(&|_: &str| false)).unwrap_err();
        assert_eq!(
            kinds(&errors),
            vec![
                ("id", FieldErrorKind::Required),
                ("name", FieldErrorKind::Required),
                ("email", FieldErrorKind::Required),
                ("phone", FieldErrorKind::Required),
            ]
        );
        assert_eq!(errors[0].message, "Vendor ID is required");
    }

    #[test]
    fn vendor_formats_are_checked() {
        let draft = VendorDraft {
            id: "V010".into(),
            name: "Acme".into(),
            email: "not-an-email".into(),
            phone: "12".into(),
            avatar_url: "ftp://x".into(),
            ..VendorDraft::default()
        };
        let errors = draft.validate(&ctx(&|_: &str| false)).unwrap_err();
        assert_eq!(
            kinds(&errors),
            vec![
                ("email", FieldErrorKind::InvalidFormat),
                ("phone", FieldErrorKind::InvalidFormat),
                ("avatar_url", FieldErrorKind::InvalidFormat),
            ]
        );
    }

    #[test]
    fn vendor_id_must_be_unused() {
        let draft = VendorDraft {
            id: "V001".into(),
            name: "Acme".into(),
            email: "sales@acme.io".into(),
            phone: "+1 555 0100".into(),
            ..VendorDraft::default()
        };
        let errors = draft.validate(&ctx(&|id: &str| id == "V001")).unwrap_err();
        assert_eq!(kinds(&errors), vec![("id", FieldErrorKind::Duplicate)]);

        let vendor = draft.validate(&ctx(&|_: &str| false)).unwrap();
        assert_eq!(vendor.id, "V001");
        assert_eq!(vendor.status, VendorStatus::Active);
        assert_eq!(vendor.avatar_url, None);
    }

    #[test]
    fn product_ranges_are_enforced() {
        let draft = ProductDraft {
            name: "Kettle".into(),
            category: "Home Appliances".into(),
            price: "0".into(),
            stock: "-3".into(),
            ..ProductDraft::default()
        };
        let errors = draft.validate(&ctx(&|_: &str| false)).unwrap_err();
        assert_eq!(
            kinds(&errors),
            vec![
                ("price", FieldErrorKind::OutOfRange),
                ("stock", FieldErrorKind::OutOfRange),
            ]
        );
        assert_eq!(errors[0].message, "Price must be greater than 0");
    }

    #[test]
    fn purchase_uses_assigned_id_and_known_vendor() {
        let draft = PurchaseDraft {
            vendor: "techmart".into(),
            product: "USB Hub".into(),
            price: "12.5".into(),
            date: "2025-08-11".into(),
            ..PurchaseDraft::default()
        };
        let purchase = draft.validate(&ctx(&|_: &str| false)).unwrap();
        assert_eq!(purchase.id, "X-1");
        assert_eq!(purchase.vendor, "TechMart");
        assert_eq!(purchase.quantity, 1);
        assert_eq!(purchase.status, PurchaseStatus::Pending);

        let unknown = PurchaseDraft {
            vendor: "Nowhere".into(),
            ..draft
        };
        let errors = unknown.validate(&ctx(&|_: &str| false)).unwrap_err();
        assert_eq!(kinds(&errors), vec![("vendor", FieldErrorKind::UnknownOption)]);
    }

    #[test]
    fn non_finite_prices_are_malformed() {
        for raw in ["NaN", "inf", "-infinity"] {
            let product = ProductDraft {
                name: "Kettle".into(),
                category: "Home Appliances".into(),
                price: raw.into(),
                stock: "3".into(),
                ..ProductDraft::default()
            };
            let errors = product.validate(&ctx(&|_: &str| false)).unwrap_err();
            assert_eq!(kinds(&errors), vec![("price", FieldErrorKind::InvalidFormat)], "{raw}");
            assert_eq!(errors[0].message, "Price must be a number");

            let purchase = PurchaseDraft {
                vendor: "GadgetZone".into(),
                product: "Drone".into(),
                price: raw.into(),
                date: "2025-08-11".into(),
                ..PurchaseDraft::default()
            };
            let errors = purchase.validate(&ctx(&|_: &str| false)).unwrap_err();
            assert_eq!(kinds(&errors), vec![("price", FieldErrorKind::InvalidFormat)], "{raw}");
        }
    }

    #[test]
    fn phone_and_date_accept_ascii_digits_only() {
        let draft = VendorDraft {
            id: "V010".into(),
            name: "Acme".into(),
            email: "sales@acme.io".into(),
            phone: "٠١٢٣٤٥٦٧".into(),
            ..VendorDraft::default()
        };
        let errors = draft.validate(&ctx(&|_: &str| false)).unwrap_err();
        assert_eq!(kinds(&errors), vec![("phone", FieldErrorKind::InvalidFormat)]);

        let ascii = VendorDraft {
            phone: "01234567".into(),
            ..draft
        };
        assert!(ascii.validate(&ctx(&|_: &str| false)).is_ok());

        let order = OrderDraft {
            customer_name: "Ali".into(),
            order_date: "٢٠٢٥-٠٨-١٢".into(),
            ..OrderDraft::default()
        };
        let errors = order.validate(&ctx(&|_: &str| false)).unwrap_err();
        assert_eq!(kinds(&errors), vec![("order_date", FieldErrorKind::InvalidFormat)]);
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let mut form = FormState::<OrderDraft>::default();
        assert!(form.check(&ctx(&|_: &str| false)).is_none());
        assert_eq!(form.errors().len(), 2);

        assert!(form.set_field("customer_name", "Ali".into()));
        assert!(form.error_for("customer_name").is_none());
        assert!(form.error_for("order_date").is_some());
        assert!(!form.set_field("nope", "x".into()));
    }

    #[test]
    fn edits_are_ignored_while_submitting() {
        let mut form = FormState::<OrderDraft>::default();
        form.mark_submitting(4);
        assert!(!form.set_field("customer_name", "Ali".into()));
        assert_eq!(form.draft().customer_name, "");

        form.submission_failed();
        assert!(form.set_field("customer_name", "Ali".into()));
    }
}
