//! Core catalog types

use serde::{Deserialize, Serialize};

/// A displayable unit carrying a category tag used for filtering
pub trait Categorized {
    fn id(&self) -> &str;
    fn category(&self) -> &str;
}

/// Image shown in the gallery grid and lightbox
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: String,
    pub src: String,
    pub alt: String,
    pub category: String,
    pub title: String,
    pub description: String,
}

/// Completed client project shown in the portfolio
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub client: String,
    pub location: String,
    pub year: String,
    pub category: String,
    pub description: String,
    pub image: String,
    pub results: Vec<String>,
    pub product_types: Vec<String>,
    pub volume: String,
}

/// Package prices in USD
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTiers {
    pub kg5: u32,
    pub kg10: u32,
    pub kg25: u32,
}

/// Product listed in the home page catalog
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub origin: String,
    pub altitude: String,
    pub process: String,
    pub flavor_profile: Vec<String>,
    pub description: String,
    pub price: PriceTiers,
    pub image: String,
    pub category: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub quote: String,
    pub name: String,
    pub company: String,
    pub location: String,
    pub image: Option<String>,
}

impl Testimonial {
    /// Avatar fallback: first letter of every word in the name
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

/// One entry of a category filter menu
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOption {
    pub id: String,
    pub label: String,
}

impl CategoryOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyValue {
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub year: String,
    pub event: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub image: String,
}

/// Headline figure on the portfolio page
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub email: String,
    pub address_lines: Vec<String>,
    pub whatsapp_number: String,
}

impl ContactDetails {
    /// Click-to-chat link used by the contact buttons
    pub fn whatsapp_link(&self) -> String {
        format!(
            "https://api.whatsapp.com/send/?phone={}&text&type=phone_number&app_absent=0",
            self.whatsapp_number
        )
    }
}

macro_rules! impl_categorized {
    ($($ty:ty),+) => {
        $(
            impl Categorized for $ty {
                fn id(&self) -> &str {
                    &self.id
                }

                fn category(&self) -> &str {
                    &self.category
                }
            }
        )+
    };
}

impl_categorized!(GalleryImage, Project, Product);
