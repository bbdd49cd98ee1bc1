//! Request and response types for the pages and the JSON API

use catalog::{CategoryFilter, CategoryOption, Direction, GalleryImage, Inquiry, PriceTiers, Product, ValidationErrors};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Raw `key=value` pairs of a query string, in order
type QueryPairs = Vec<(String, String)>;

/// Last value given for `key`; a repeated key never fails the request
fn last_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs.iter().rev().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
}

/// `?category=` on list pages and list endpoints
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "QueryPairs")]
pub struct ListQuery {
    pub category: CategoryFilter,
}

impl From<QueryPairs> for ListQuery {
    fn from(pairs: QueryPairs) -> Self {
        Self {
            category: CategoryFilter::parse(last_value(&pairs, "category")),
        }
    }
}

/// Home page: product filter and active testimonial slide.
/// A slide that is not a non-negative integer reads as absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "QueryPairs")]
pub struct HomeQuery {
    pub category: CategoryFilter,
    pub slide: Option<usize>,
}

impl From<QueryPairs> for HomeQuery {
    fn from(pairs: QueryPairs) -> Self {
        Self {
            category: CategoryFilter::parse(last_value(&pairs, "category")),
            slide: last_value(&pairs, "slide").and_then(|v| v.trim().parse().ok()),
        }
    }
}

/// Gallery page: filter and the item shown in the lightbox, if any
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "QueryPairs")]
pub struct GalleryQuery {
    pub category: CategoryFilter,
    pub view: Option<String>,
}

impl From<QueryPairs> for GalleryQuery {
    fn from(pairs: QueryPairs) -> Self {
        Self {
            category: CategoryFilter::parse(last_value(&pairs, "category")),
            view: last_value(&pairs, "view").map(str::to_string),
        }
    }
}

/// Lightbox API: open `item` in the filtered list, then optionally step
#[derive(Debug, Clone, Deserialize)]
pub struct ViewerQuery {
    #[serde(default)]
    pub category: CategoryFilter,
    pub item: String,
    pub step: Option<Direction>,
}

/// Filtered list with the menu it was filtered from
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse<T> {
    pub category: CategoryFilter,
    pub categories: Vec<CategoryOption>,
    pub items: Vec<T>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ViewerResponse {
    pub item: GalleryImage,
    pub index: usize,
    pub position: usize,
    pub total: usize,
    pub prev_id: String,
    pub next_id: String,
}

/// Product as published; prices only when the site shows them
#[derive(Debug, Clone, Serialize)]
pub struct PublicProduct {
    pub id: String,
    pub name: String,
    pub origin: String,
    pub altitude: String,
    pub process: String,
    pub flavor_profile: Vec<String>,
    pub description: String,
    pub image: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceTiers>,
}

impl PublicProduct {
    pub fn new(product: &Product, show_prices: bool) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            origin: product.origin.clone(),
            altitude: product.altitude.clone(),
            process: product.process.clone(),
            flavor_profile: product.flavor_profile.clone(),
            description: product.description.clone(),
            image: product.image.clone(),
            category: product.category.clone(),
            price: show_prices.then_some(product.price),
        }
    }
}

/// Acknowledgment for an accepted inquiry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InquiryReceipt {
    pub reference: Uuid,
    pub received_at: DateTime<Utc>,
    pub inquiry: Inquiry,
}

impl InquiryReceipt {
    pub fn new(inquiry: Inquiry) -> Self {
        Self {
            reference: Uuid::new_v4(),
            received_at: Utc::now(),
            inquiry,
        }
    }

    /// Short reference shown to the visitor
    pub fn short_reference(&self) -> String {
        self.reference.simple().to_string()[..8].to_uppercase()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InquiryAccepted {
    pub status: &'static str,
    #[serde(flatten)]
    pub receipt: InquiryReceipt,
}

impl From<InquiryReceipt> for InquiryAccepted {
    fn from(receipt: InquiryReceipt) -> Self {
        Self {
            status: "received",
            receipt,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InquiryRejected {
    pub status: &'static str,
    pub errors: ValidationErrors,
}

impl From<ValidationErrors> for InquiryRejected {
    fn from(errors: ValidationErrors) -> Self {
        Self {
            status: "invalid",
            errors,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_seconds: u64,
    pub inquiries_received: u64,
}
