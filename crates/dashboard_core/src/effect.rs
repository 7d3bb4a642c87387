use serde::Serialize;

use crate::entity::EntityKind;
use crate::form::FormKind;
use crate::records::{Order, Product, Purchase, Vendor};

/// Identifies one submission round trip.
pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Hand a validated record to the submission capability.
    Submit {
        request_id: RequestId,
        submission: Submission,
    },
    /// The user asked to edit a row; nothing in the model changes.
    EditRequested { entity: EntityKind, id: String },
}

/// A record created by one of the add forms, awaiting acceptance.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Submission {
    Vendor(Vendor),
    Order(Order),
    Product(Product),
    Purchase(Purchase),
}

impl Submission {
    pub fn form(&self) -> FormKind {
        match self {
            Submission::Vendor(_) => FormKind::Vendor,
            Submission::Order(_) => FormKind::Order,
            Submission::Product(_) => FormKind::Product,
            Submission::Purchase(_) => FormKind::Purchase,
        }
    }

    pub fn record_id(&self) -> &str {
        match self {
            Submission::Vendor(vendor) => &vendor.id,
            Submission::Order(order) => &order.id,
            Submission::Product(product) => &product.id,
            Submission::Purchase(purchase) => &purchase.id,
        }
    }
}

/// Answer of the submission capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// `accepted_at` is an RFC 3339 timestamp.
    Accepted { accepted_at: String },
    Failed { reason: String },
}
