//! Test fixtures for webserver service tests

use catalog::{Inquiry, InquiryForm};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Inquiry that passes every validation rule
pub fn create_test_inquiry() -> Inquiry {
    create_test_form().validate().expect("fixture form should be valid")
}

/// Form that passes every validation rule
pub fn create_test_form() -> InquiryForm {
    InquiryForm {
        company_name: "Nusantara Foods".to_string(),
        contact_name: "Dewi Lestari".to_string(),
        email: "dewi@nusantarafoods.com".to_string(),
        phone: "+62 21 555 0101".to_string(),
        business_type: "distributor".to_string(),
        order_volume: "large".to_string(),
        coffee_types: vec!["Pepper".to_string(), "Cloves".to_string()],
        notes: Some("Monthly container to Rotterdam".to_string()),
    }
}

/// Static root containing a product image, a stylesheet and a nested asset,
/// plus a file next to (outside) the root
pub fn create_static_root() -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let root = dir.path().join("static");
    fs::create_dir_all(root.join("img")).expect("failed to create static dirs");

    write(&root.join("black-pepper.png"), b"\x89PNG fake image");
    write(&root.join("site.css"), b"body { margin: 0; }");
    write(&root.join("img").join("Logo.SVG"), b"<svg></svg>");
    write(&root.join("img").join("harbour.webp"), b"RIFF fake webp");
    write(&root.join("notes.xyz"), b"unknown type");
    write(&dir.path().join("secret.txt"), b"outside the static root");

    (dir, root)
}

fn write(path: &Path, content: &[u8]) {
    fs::write(path, content).expect("failed to write fixture file");
}
