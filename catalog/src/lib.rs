//! Domain core for the export company website
//!
//! Holds the catalog data set and the pure logic the pages are built from:
//! category filtering, the gallery lightbox, the testimonial carousel and
//! inquiry validation. Nothing in this crate performs I/O.

pub mod carousel;
pub mod content;
pub mod errors;
pub mod filter;
pub mod inquiry;
pub mod logging;
pub mod types;
pub mod viewer;

pub use carousel::Carousel;
pub use content::SiteContent;
pub use errors::*;
pub use filter::{CategoryFilter, CategoryMenu, derive_categories, filter_items};
pub use inquiry::{FieldError, Inquiry, InquiryField, InquiryForm, ValidationErrors};
pub use logging::Component;
pub use types::*;
pub use viewer::{Direction, GalleryView, Lightbox, ViewerState};
