//! Hard-coded records every session starts from.
use crate::records::{
    Freelancer, Job, JobStatus, NewsItem, NewsStatus, Order, PaymentStatus, Product,
    ProductStatus, Purchase, PurchaseStatus, ShippingStatus, Vendor, VendorStatus,
};

/// Vendors offered by the purchase form.
pub const PURCHASE_VENDORS: &[&str] = &["TechMart", "StyleHub", "GadgetZone"];

pub fn freelancers() -> Vec<Freelancer> {
    vec![
        Freelancer {
            id: 1,
            name: "John Doe".into(),
            active: true,
            field: "Web Development".into(),
            done: 12,
            in_progress: 2,
        },
        Freelancer {
            id: 2,
            name: "Jane Smith".into(),
            active: false,
            field: "Graphic Design".into(),
            done: 8,
            in_progress: 1,
        },
    ]
}

pub fn jobs() -> Vec<Job> {
    let job = |id, title: &str, department: &str, status, posted: &str| Job {
        id,
        title: title.into(),
        department: department.into(),
        status,
        posted: posted.into(),
    };
    vec![
        job(1, "Frontend Developer", "Engineering", JobStatus::Open, "2025-08-01"),
        job(2, "Backend Developer", "Engineering", JobStatus::Closed, "2025-07-15"),
        job(3, "UI/UX Designer", "Design", JobStatus::Open, "2025-07-20"),
    ]
}

pub fn news() -> Vec<NewsItem> {
    vec![
        NewsItem {
            id: 1,
            title: "New Feature Released".into(),
            author: "Admin".into(),
            date: "2025-08-10".into(),
            status: NewsStatus::Published,
        },
        NewsItem {
            id: 2,
            title: "Maintenance Scheduled".into(),
            author: "Support".into(),
            date: "2025-08-05".into(),
            status: NewsStatus::Draft,
        },
    ]
}

pub fn orders() -> Vec<Order> {
    let order = |id: &str, customer: &str, items_count, total, date: &str, payment, shipping| Order {
        id: id.into(),
        customer: customer.into(),
        items_count,
        total,
        date: date.into(),
        payment_status: payment,
        shipping_status: shipping,
    };
    vec![
        order(
            "#ORD-001",
            "John Doe",
            3,
            150.0,
            "2025-08-10",
            PaymentStatus::Paid,
            ShippingStatus::Delivered,
        ),
        order(
            "#ORD-002",
            "Jane Smith",
            1,
            50.0,
            "2025-08-09",
            PaymentStatus::Pending,
            ShippingStatus::Processing,
        ),
        order(
            "#ORD-003",
            "Ali Hassan",
            5,
            250.0,
            "2025-08-08",
            PaymentStatus::Failed,
            ShippingStatus::Cancelled,
        ),
    ]
}

pub fn products() -> Vec<Product> {
    let product = |id: &str, name: &str, category: &str, price, stock, status, created_at: &str| {
        Product {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            price,
            stock,
            status,
            created_at: created_at.into(),
        }
    };
    use ProductStatus::{Available, Discontinued, OutOfStock};
    vec![
        product("P001", "Wireless Headphones", "Electronics", 99.99, 120, Available, "2024-07-01"),
        product("P002", "Running Shoes", "Footwear", 79.99, 0, OutOfStock, "2024-06-15"),
        product("P003", "Coffee Maker", "Home Appliances", 49.99, 30, Available, "2024-05-20"),
        product("P004", "Smart Watch", "Wearables", 199.99, 10, Discontinued, "2024-03-10"),
        product("P005", "Desk Lamp", "Furniture", 25.99, 50, Available, "2024-04-01"),
        product("P006", "Yoga Mat", "Sports", 19.99, 100, Available, "2024-07-10"),
        product("P007", "Bluetooth Speaker", "Electronics", 59.99, 0, OutOfStock, "2024-06-01"),
    ]
}

pub fn purchases() -> Vec<Purchase> {
    let purchase = |id: &str, vendor: &str, product: &str, quantity, price, date: &str, status| {
        Purchase {
            id: id.into(),
            vendor: vendor.into(),
            product: product.into(),
            quantity,
            price,
            date: date.into(),
            status,
            notes: None,
        }
    };
    vec![
        purchase(
            "#PUR-1001",
            "TechMart",
            "Wireless Headphones",
            2,
            120.0,
            "2025-08-10",
            PurchaseStatus::Completed,
        ),
        purchase(
            "#PUR-1002",
            "StyleHub",
            "Men's Casual Jacket",
            1,
            80.0,
            "2025-08-09",
            PurchaseStatus::Pending,
        ),
        purchase(
            "#PUR-1003",
            "GadgetZone",
            "Smartwatch Pro",
            3,
            150.0,
            "2025-08-08",
            PurchaseStatus::Cancelled,
        ),
    ]
}

pub fn vendors() -> Vec<Vendor> {
    let vendor = |id: &str, name: &str, email: &str, phone: &str, status, img: u8| Vendor {
        id: id.into(),
        name: name.into(),
        email: email.into(),
        phone: phone.into(),
        status,
        avatar_url: Some(format!("https://i.pravatar.cc/40?img={img}")),
    };
    vec![
        vendor("V001", "John Doe", "john@example.com", "+1 (555) 123-4567", VendorStatus::Active, 1),
        vendor("V002", "Jane Smith", "jane@example.com", "+1 (555) 987-6543", VendorStatus::Pending, 2),
        vendor("V003", "Mike Johnson", "mike@example.com", "+1 (555) 555-5555", VendorStatus::Inactive, 3),
    ]
}
