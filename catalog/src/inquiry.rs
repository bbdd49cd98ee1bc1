//! Wholesale inquiry form schema and validation
//!
//! `InquiryForm` is the raw submission, exactly as the visitor typed it.
//! [`InquiryForm::validate`] checks it against a fixed schema and either
//! yields the accepted [`Inquiry`] payload or one [`FieldError`] per failing
//! field, in form order.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use crate::errors::CatalogError;

/// Select/checkbox option shown on the form
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn option(value: &'static str, label: &'static str) -> FormOption {
    FormOption { value, label }
}

pub const BUSINESS_TYPES: &[FormOption] = &[
    option("roaster", "Coffee Roaster"),
    option("cafe", "Café Chain"),
    option("distributor", "Distributor"),
    option("retailer", "Retailer"),
    option("other", "Other"),
];

pub const ORDER_VOLUMES: &[FormOption] = &[
    option("small", "< 100 kg per month"),
    option("medium", "100-500 kg per month"),
    option("large", "500-1000 kg per month"),
    option("enterprise", "> 1000 kg per month"),
];

pub const PRODUCT_INTERESTS: &[FormOption] = &[
    option("Pepper", "Pepper"),
    option("White-Pepper", "White-Pepper"),
    option("Cloves", "Cloves"),
    option("Palm-Sugar", "Palm-Sugar"),
    option("Others", "Others"),
];

/// Display label for `value` in `options`, or the value itself
pub fn label_for(options: &[FormOption], value: &str) -> String {
    options
        .iter()
        .find(|o| o.value == value)
        .map(|o| o.label.to_string())
        .unwrap_or_else(|| value.to_string())
}

/// Raw form submission
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InquiryForm {
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub business_type: String,
    pub order_volume: String,
    pub coffee_types: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Accepted inquiry, field-for-field identical to the submitted form
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub business_type: String,
    pub order_volume: String,
    pub coffee_types: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InquiryField {
    CompanyName,
    ContactName,
    Email,
    Phone,
    BusinessType,
    OrderVolume,
    CoffeeTypes,
    Notes,
}

impl InquiryField {
    pub const ALL: [InquiryField; 8] = [
        InquiryField::CompanyName,
        InquiryField::ContactName,
        InquiryField::Email,
        InquiryField::Phone,
        InquiryField::BusinessType,
        InquiryField::OrderVolume,
        InquiryField::CoffeeTypes,
        InquiryField::Notes,
    ];

    /// Wire name, shared by the JSON payload and the HTML form
    pub fn name(&self) -> &'static str {
        match self {
            InquiryField::CompanyName => "companyName",
            InquiryField::ContactName => "contactName",
            InquiryField::Email => "email",
            InquiryField::Phone => "phone",
            InquiryField::BusinessType => "businessType",
            InquiryField::OrderVolume => "orderVolume",
            InquiryField::CoffeeTypes => "coffeeTypes",
            InquiryField::Notes => "notes",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    pub fn label(&self) -> &'static str {
        match self {
            InquiryField::CompanyName => "Company Name",
            InquiryField::ContactName => "Contact Person",
            InquiryField::Email => "Email Address",
            InquiryField::Phone => "Phone Number",
            InquiryField::BusinessType => "Business Type",
            InquiryField::OrderVolume => "Estimated Order Volume",
            InquiryField::CoffeeTypes => "Preferred Products Types",
            InquiryField::Notes => "Additional Notes",
        }
    }
}

impl fmt::Display for InquiryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: InquiryField,
    pub message: String,
}

/// Every rule failure of one submission, in form order
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    pub fn for_field(&self, field: InquiryField) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field == field)
    }

    fn push(&mut self, field: InquiryField, message: &str) {
        self.0.push(FieldError {
            field,
            message: message.to_string(),
        });
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|e| format!("{}: {}", e.field, e.message)).collect();
        f.write_str(&parts.join("; "))
    }
}

impl From<ValidationErrors> for CatalogError {
    fn from(errors: ValidationErrors) -> Self {
        CatalogError::InvalidInquiry(errors)
    }
}

impl InquiryForm {
    /// Build a form from decoded `key=value` pairs. `coffeeTypes` may repeat;
    /// unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut form = InquiryForm::default();
        for (key, value) in pairs {
            let Some(field) = InquiryField::from_name(key.as_ref()) else {
                continue;
            };
            let value = value.into();
            match field {
                InquiryField::CompanyName => form.company_name = value,
                InquiryField::ContactName => form.contact_name = value,
                InquiryField::Email => form.email = value,
                InquiryField::Phone => form.phone = value,
                InquiryField::BusinessType => form.business_type = value,
                InquiryField::OrderVolume => form.order_volume = value,
                InquiryField::CoffeeTypes => form.coffee_types.push(value),
                InquiryField::Notes => form.notes = Some(value),
            }
        }
        form
    }

    pub fn validate(&self) -> Result<Inquiry, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if !min_chars(&self.company_name, 2) {
            errors.push(InquiryField::CompanyName, "Company name is required");
        }
        if !min_chars(&self.contact_name, 2) {
            errors.push(InquiryField::ContactName, "Contact name is required");
        }
        if !is_email_shaped(&self.email) {
            errors.push(InquiryField::Email, "Please enter a valid email address");
        }
        if !min_chars(&self.phone, 5) {
            errors.push(InquiryField::Phone, "Phone number is required");
        }
        if !min_chars(&self.business_type, 1) {
            errors.push(InquiryField::BusinessType, "Please select a business type");
        }
        if !min_chars(&self.order_volume, 1) {
            errors.push(InquiryField::OrderVolume, "Please select an estimated order volume");
        }
        if self.coffee_types.is_empty() {
            errors.push(InquiryField::CoffeeTypes, "Please select at least one coffee type");
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Inquiry {
            company_name: self.company_name.clone(),
            contact_name: self.contact_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            business_type: self.business_type.clone(),
            order_volume: self.order_volume.clone(),
            coffee_types: self.coffee_types.clone(),
            notes: self.notes.clone(),
        })
    }

    pub fn has_product(&self, value: &str) -> bool {
        self.coffee_types.iter().any(|v| v == value)
    }
}

fn min_chars(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

/// `local@label.label.tld`, ASCII only, matched case-insensitively.
///
/// The local part may not start with `.` or end in `.` or `'`; the TLD is two
/// or more letters.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i-u)^([A-Z0-9_'+\-\.]*)[A-Z0-9_+-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
        .expect("email regex should compile")
});

/// Email shape check. The regex engine has no lookahead, so the leading dot
/// and `..` rules are plain string checks.
pub fn is_email_shaped(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_PATTERN.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> InquiryForm {
        InquiryForm {
            company_name: "Spice Traders Ltd".to_string(),
            contact_name: "Ana Lima".to_string(),
            email: "ana@spicetraders.com".to_string(),
            phone: "+62 812 3456".to_string(),
            business_type: "distributor".to_string(),
            order_volume: "medium".to_string(),
            coffee_types: vec!["Pepper".to_string()],
            notes: None,
        }
    }

    #[test]
    fn test_valid_form_echoes_payload() {
        let form = valid_form();
        let inquiry = form.validate().unwrap();
        assert_eq!(inquiry.company_name, form.company_name);
        assert_eq!(inquiry.coffee_types, vec!["Pepper".to_string()]);
        assert_eq!(inquiry.notes, None);
        assert_eq!(
            serde_json::to_value(&inquiry).unwrap(),
            serde_json::to_value(&form).unwrap()
        );
    }

    #[test]
    fn test_empty_company_name_rejected() {
        let form = InquiryForm {
            company_name: String::new(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        let error = errors.for_field(InquiryField::CompanyName).unwrap();
        assert_eq!(error.message, "Company name is required");
    }

    #[test]
    fn test_empty_form_reports_every_required_field_in_order() {
        let errors = InquiryForm::default().validate().unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                InquiryField::CompanyName,
                InquiryField::ContactName,
                InquiryField::Email,
                InquiryField::Phone,
                InquiryField::BusinessType,
                InquiryField::OrderVolume,
                InquiryField::CoffeeTypes,
            ]
        );
    }

    #[test]
    fn test_minimum_lengths_count_characters() {
        let form = InquiryForm {
            company_name: "Ñu".to_string(),
            phone: "1234".to_string(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.for_field(InquiryField::CompanyName).is_none());
        assert!(errors.for_field(InquiryField::Phone).is_some());
    }

    #[test]
    fn test_email_shapes() {
        for good in [
            "a@b.co",
            "first.last@example.com",
            "o'neil+tag@mail.example.org",
            "x_y-z@sub-domain.example.id",
        ] {
            assert!(is_email_shaped(good), "{good} should be accepted");
        }
        for bad in [
            "",
            "plain",
            "@example.com",
            ".lead@example.com",
            "double..dot@example.com",
            "trail.@example.com",
            "quote'@example.com",
            "a@localhost",
            "a@example.c",
            "a@-bad.com",
            "a@exa_mple.com",
            "a@example.com1",
            "a@@example.com",
            "jos\u{e9}@example.com",
            "a@example.\u{212a}m",
            "a b@example.com",
        ] {
            assert!(!is_email_shaped(bad), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_from_pairs_collects_repeated_products() {
        let form = InquiryForm::from_pairs(vec![
            ("companyName", "Spice Traders"),
            ("coffeeTypes", "Pepper"),
            ("coffeeTypes", "Cloves"),
            ("notes", ""),
            ("ignored", "value"),
        ]);
        assert_eq!(form.company_name, "Spice Traders");
        assert_eq!(form.coffee_types, vec!["Pepper", "Cloves"]);
        assert_eq!(form.notes.as_deref(), Some(""));
        assert!(form.has_product("Cloves"));
        assert!(!form.has_product("Others"));
    }

    #[test]
    fn test_json_payload_uses_camel_case() {
        let json = serde_json::json!({
            "companyName": "Spice Traders",
            "coffeeTypes": ["Pepper"]
        });
        let form: InquiryForm = serde_json::from_value(json).unwrap();
        assert_eq!(form.company_name, "Spice Traders");
        assert!(form.contact_name.is_empty());

        let errors = form.validate().unwrap_err();
        let encoded = serde_json::to_value(&errors).unwrap();
        assert_eq!(encoded[0]["field"], "contactName");
    }

    #[test]
    fn test_labels() {
        assert_eq!(label_for(BUSINESS_TYPES, "cafe"), "Café Chain");
        assert_eq!(label_for(ORDER_VOLUMES, "custom"), "custom");
        assert_eq!(InquiryField::from_name("orderVolume"), Some(InquiryField::OrderVolume));
    }
}
