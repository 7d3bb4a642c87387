use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::entity::{EntityKind, ListEntity};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown value {0:?}")]
pub struct UnknownVariant(pub String);

/// Closed status sets. Each variant has a display label and a storage key;
/// parsing accepts either, ignoring ASCII case.
macro_rules! status_enum {
    ($name:ident { $($variant:ident => $label:literal / $key:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            pub fn key(self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                let raw = raw.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.label().eq_ignore_ascii_case(raw) || v.key().eq_ignore_ascii_case(raw))
                    .ok_or_else(|| UnknownVariant(raw.to_string()))
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.key())
            }
        }
    };
}

status_enum!(Activity {
    Active => "Active" / "active",
    Inactive => "Inactive" / "inactive",
});

status_enum!(JobStatus {
    Open => "Open" / "open",
    Closed => "Closed" / "closed",
});

status_enum!(NewsStatus {
    Published => "Published" / "published",
    Draft => "Draft" / "draft",
});

status_enum!(PaymentStatus {
    Paid => "Paid" / "paid",
    Pending => "Pending" / "pending",
    Failed => "Failed" / "failed",
});

status_enum!(ShippingStatus {
    Processing => "Processing" / "processing",
    Shipped => "Shipped" / "shipped",
    Delivered => "Delivered" / "delivered",
    Cancelled => "Cancelled" / "cancelled",
});

status_enum!(ProductStatus {
    Available => "Available" / "available",
    OutOfStock => "Out of Stock" / "out_of_stock",
    Discontinued => "Discontinued" / "discontinued",
});

status_enum!(PurchaseStatus {
    Completed => "Completed" / "completed",
    Pending => "Pending" / "pending",
    Cancelled => "Cancelled" / "cancelled",
});

status_enum!(VendorStatus {
    Active => "Active" / "active",
    Inactive => "Inactive" / "inactive",
    Pending => "Pending" / "pending",
});

fn money(amount: f64) -> String {
    format!("${amount:.2}")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Freelancer {
    pub id: u32,
    pub name: String,
    pub active: bool,
    pub field: String,
    pub done: u32,
    pub in_progress: u32,
}

impl ListEntity for Freelancer {
    type Id = u32;
    type Facet = Activity;

    const KIND: EntityKind = EntityKind::Freelancers;
    const COLUMNS: &'static [&'static str] = &["Name", "Active", "Field", "Done", "In Progress"];

    fn id(&self) -> &u32 {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.field.as_str()]
    }

    fn facet(&self) -> Activity {
        if self.active {
            Activity::Active
        } else {
            Activity::Inactive
        }
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            if self.active { "Yes" } else { "No" }.to_string(),
            self.field.clone(),
            self.done.to_string(),
            self.in_progress.to_string(),
        ]
    }

    fn facet_options(_records: &[Self]) -> Vec<Activity> {
        Activity::ALL.to_vec()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Job {
    pub id: u32,
    pub title: String,
    pub department: String,
    pub status: JobStatus,
    pub posted: String,
}

impl ListEntity for Job {
    type Id = u32;
    type Facet = JobStatus;

    const KIND: EntityKind = EntityKind::Jobs;
    const COLUMNS: &'static [&'static str] = &["Title", "Department", "Status", "Posted"];

    fn id(&self) -> &u32 {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.department.as_str()]
    }

    fn facet(&self) -> JobStatus {
        self.status
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.department.clone(),
            self.status.to_string(),
            self.posted.clone(),
        ]
    }

    fn facet_options(_records: &[Self]) -> Vec<JobStatus> {
        JobStatus::ALL.to_vec()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsItem {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub date: String,
    pub status: NewsStatus,
}

impl ListEntity for NewsItem {
    type Id = u32;
    type Facet = NewsStatus;

    const KIND: EntityKind = EntityKind::News;
    const COLUMNS: &'static [&'static str] = &["Title", "Author", "Date", "Status"];

    fn id(&self) -> &u32 {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.author.as_str()]
    }

    fn facet(&self) -> NewsStatus {
        self.status
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.author.clone(),
            self.date.clone(),
            self.status.to_string(),
        ]
    }

    fn facet_options(_records: &[Self]) -> Vec<NewsStatus> {
        NewsStatus::ALL.to_vec()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: String,
    pub customer: String,
    pub items_count: u32,
    pub total: f64,
    pub date: String,
    pub payment_status: PaymentStatus,
    pub shipping_status: ShippingStatus,
}

impl ListEntity for Order {
    type Id = String;
    type Facet = PaymentStatus;

    const KIND: EntityKind = EntityKind::Orders;
    const COLUMNS: &'static [&'static str] = &[
        "Order ID", "Customer", "Items", "Total", "Date", "Payment", "Shipping",
    ];

    fn id(&self) -> &String {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.customer.as_str()]
    }

    fn facet(&self) -> PaymentStatus {
        self.payment_status
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.customer.clone(),
            self.items_count.to_string(),
            money(self.total),
            self.date.clone(),
            self.payment_status.to_string(),
            self.shipping_status.to_string(),
        ]
    }

    fn facet_options(_records: &[Self]) -> Vec<PaymentStatus> {
        PaymentStatus::ALL.to_vec()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: u32,
    pub status: ProductStatus,
    pub created_at: String,
}

impl ListEntity for Product {
    type Id = String;
    type Facet = String;

    const KIND: EntityKind = EntityKind::Products;
    const COLUMNS: &'static [&'static str] = &[
        "Product ID",
        "Name",
        "Category",
        "Price ($)",
        "Stock Qty",
        "Status",
        "Created Date",
    ];

    fn id(&self) -> &String {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }

    fn facet(&self) -> String {
        self.category.clone()
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.category.clone(),
            format!("{:.2}", self.price),
            self.stock.to_string(),
            self.status.to_string(),
            self.created_at.clone(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Purchase {
    pub id: String,
    pub vendor: String,
    pub product: String,
    pub quantity: u32,
    pub price: f64,
    pub date: String,
    pub status: PurchaseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ListEntity for Purchase {
    type Id = String;
    type Facet = PurchaseStatus;

    const KIND: EntityKind = EntityKind::Purchases;
    const COLUMNS: &'static [&'static str] = &[
        "Purchase ID", "Vendor", "Product", "Qty", "Price", "Date", "Status",
    ];

    fn id(&self) -> &String {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.vendor.as_str(), self.product.as_str()]
    }

    fn facet(&self) -> PurchaseStatus {
        self.status
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.vendor.clone(),
            self.product.clone(),
            self.quantity.to_string(),
            money(self.price),
            self.date.clone(),
            self.status.to_string(),
        ]
    }

    fn facet_options(_records: &[Self]) -> Vec<PurchaseStatus> {
        PurchaseStatus::ALL.to_vec()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vendor {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: VendorStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl ListEntity for Vendor {
    type Id = String;
    type Facet = VendorStatus;

    const KIND: EntityKind = EntityKind::Vendors;
    const COLUMNS: &'static [&'static str] = &["Vendor ID", "Name", "Email", "Phone", "Status"];

    fn id(&self) -> &String {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }

    fn facet(&self) -> VendorStatus {
        self.status
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.status.to_string(),
        ]
    }

    fn facet_options(_records: &[Self]) -> Vec<VendorStatus> {
        VendorStatus::ALL.to_vec()
    }
}
