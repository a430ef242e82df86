//! Sample data loaded into the in-memory repositories at startup.
//!
//! Every seeded principal uses the password `password123`.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;

use super::models::{Product, Review, User, Vendor};
use crate::auth::{CredentialHash, Role};

pub const FIXTURE_PASSWORD: &str = "password123";

fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 9, 0, 0)
        .single()
        .unwrap_or_default()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn users() -> Vec<User> {
    let user = |id: &str, name: &str, email: &str, role: Role, vendor_id: Option<&str>, created: DateTime<Utc>| User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        credential: CredentialHash::new(FIXTURE_PASSWORD),
        role,
        phone: None,
        avatar: None,
        address: None,
        vendor_id: vendor_id.map(str::to_string),
        created_at: created,
        last_login: None,
    };

    vec![
        User {
            phone: Some("+1 555 0100".to_string()),
            address: Some("12 Market Street, Springfield".to_string()),
            ..user("user-1", "Jane Customer", "customer@example.com", Role::Customer, None, at(2024, 1, 10))
        },
        user("user-2", "Victor Vendor", "vendor@example.com", Role::Vendor, Some("vendor-1"), at(2024, 1, 12)),
        user("user-3", "Ada Admin", "admin@example.com", Role::Admin, None, at(2024, 1, 1)),
    ]
}

pub fn vendors() -> Vec<Vendor> {
    vec![
        Vendor {
            id: "vendor-1".to_string(),
            name: "Artisan Crafts Co.".to_string(),
            description: "Handmade jewelry and home goods from local artisans".to_string(),
            category: "Handmade".to_string(),
            location: "Portland, OR".to_string(),
            logo: Some("/images/vendors/artisan-crafts.png".to_string()),
            rating: Some(4.8),
            review_count: 124,
            verified: true,
            featured: true,
            tags: strings(&["handmade", "jewelry", "home"]),
            created_at: Some(at(2023, 6, 1)),
        },
        Vendor {
            id: "vendor-2".to_string(),
            name: "Green Valley Farm".to_string(),
            description: "Organic produce and pantry staples".to_string(),
            category: "Food".to_string(),
            location: "Sonoma, CA".to_string(),
            logo: None,
            rating: Some(4.6),
            review_count: 89,
            verified: true,
            featured: false,
            tags: strings(&["organic", "local", "food"]),
            created_at: Some(at(2023, 9, 15)),
        },
        Vendor {
            id: "vendor-3".to_string(),
            name: "TechHub Electronics".to_string(),
            description: "Refurbished gadgets and accessories".to_string(),
            category: "Electronics".to_string(),
            location: "Austin, TX".to_string(),
            logo: None,
            rating: Some(4.2),
            review_count: 56,
            verified: false,
            featured: true,
            tags: strings(&["electronics", "refurbished"]),
            created_at: Some(at(2024, 2, 20)),
        },
        Vendor {
            id: "vendor-4".to_string(),
            name: "Urban Threads".to_string(),
            description: "Small-batch apparel and accessories".to_string(),
            category: "Fashion".to_string(),
            location: "Brooklyn, NY".to_string(),
            logo: None,
            rating: None,
            review_count: 0,
            verified: false,
            featured: false,
            tags: strings(&["fashion", "apparel"]),
            created_at: None,
        },
    ]
}

pub fn products() -> Vec<Product> {
    let product = |id: &str, name: &str, category: &str, cents: i64, vendor: &str| Product {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        category: category.to_string(),
        price: Decimal::new(cents, 2),
        original_price: None,
        rating: None,
        review_count: 0,
        reviews: vec![],
        tags: vec![],
        images: vec![format!("/images/products/{}.jpg", id)],
        vendor: vendor.to_string(),
        featured: false,
        in_stock: true,
        stock: 25,
        created_at: None,
    };

    vec![
        Product {
            description: "Sterling silver ring with a hammered finish".to_string(),
            original_price: Some(Decimal::new(5999, 2)),
            rating: Some(5.0),
            review_count: 1,
            reviews: vec![Review {
                id: "review-1".to_string(),
                user_id: "user-1".to_string(),
                user_name: "Jane Customer".to_string(),
                rating: 5,
                comment: Some("Beautiful work".to_string()),
                created_at: at(2024, 3, 2),
            }],
            tags: strings(&["silver", "ring", "handmade"]),
            featured: true,
            created_at: Some(at(2024, 2, 1)),
            ..product("prod-1", "Handmade Silver Ring", "Jewelry", 4999, "vendor-1")
        },
        Product {
            description: "Beaded necklace strung with recycled glass".to_string(),
            rating: Some(4.4),
            review_count: 12,
            tags: strings(&["necklace", "glass", "handmade"]),
            created_at: Some(at(2024, 3, 12)),
            ..product("prod-2", "Recycled Glass Necklace", "Jewelry", 3250, "vendor-1")
        },
        Product {
            description: "Wheel-thrown stoneware mug".to_string(),
            rating: Some(4.7),
            review_count: 31,
            tags: strings(&["ceramic", "kitchen", "handmade"]),
            featured: true,
            created_at: Some(at(2024, 1, 20)),
            ..product("prod-3", "Ceramic Coffee Mug", "Home & Kitchen", 2400, "vendor-1")
        },
        Product {
            description: "Seasonal box of organic vegetables".to_string(),
            rating: Some(4.9),
            review_count: 77,
            tags: strings(&["organic", "vegetables"]),
            featured: true,
            created_at: Some(at(2024, 4, 5)),
            ..product("prod-4", "Organic Veggie Box", "Food", 3500, "vendor-2")
        },
        Product {
            description: "Raw wildflower honey, 500g jar".to_string(),
            rating: Some(4.8),
            review_count: 40,
            tags: strings(&["honey", "organic", "pantry"]),
            created_at: Some(at(2023, 11, 2)),
            ..product("prod-5", "Wildflower Honey", "Food", 1299, "vendor-2")
        },
        Product {
            description: "Refurbished noise-cancelling headphones".to_string(),
            original_price: Some(Decimal::new(19999, 2)),
            rating: Some(4.1),
            review_count: 18,
            tags: strings(&["audio", "refurbished"]),
            featured: true,
            created_at: Some(at(2024, 2, 28)),
            ..product("prod-6", "Wireless Headphones", "Electronics", 12900, "vendor-3")
        },
        Product {
            description: "Braided USB-C cable, 2m".to_string(),
            rating: Some(3.9),
            review_count: 9,
            tags: strings(&["cable", "usb-c"]),
            stock: 0,
            in_stock: false,
            ..product("prod-7", "USB-C Charging Cable", "Electronics", 999, "vendor-3")
        },
        Product {
            description: "Heavyweight organic cotton tee".to_string(),
            tags: strings(&["shirt", "cotton", "organic"]),
            created_at: Some(at(2024, 5, 1)),
            ..product("prod-8", "Organic Cotton T-Shirt", "Fashion", 2800, "vendor-4")
        },
        Product {
            description: "Waxed canvas tote with leather handles".to_string(),
            rating: Some(4.5),
            review_count: 6,
            tags: strings(&["bag", "canvas"]),
            created_at: Some(at(2024, 4, 18)),
            ..product("prod-9", "Canvas Tote Bag", "Fashion", 4500, "vendor-4")
        },
        Product {
            description: "Hand-poured soy candle scented with cedar".to_string(),
            rating: Some(4.6),
            review_count: 22,
            tags: strings(&["candle", "soy", "handmade"]),
            created_at: Some(at(2023, 12, 8)),
            ..product("prod-10", "Cedar Soy Candle", "Home & Kitchen", 1850, "vendor-1")
        },
    ]
}
