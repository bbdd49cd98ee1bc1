//! Wholesale inquiry form

use catalog::inquiry::{BUSINESS_TYPES, FormOption, ORDER_VOLUMES, PRODUCT_INTERESTS};
use catalog::{InquiryField, InquiryForm, ValidationErrors};
use maud::{Markup, html};

use crate::types::InquiryReceipt;

/// What the form shows: submitted values, their errors, or an acknowledgment
#[derive(Debug, Clone, Copy)]
pub struct InquiryPanel<'a> {
    pub form: &'a InquiryForm,
    pub errors: Option<&'a ValidationErrors>,
    pub receipt: Option<&'a InquiryReceipt>,
}

impl<'a> InquiryPanel<'a> {
    pub fn blank(form: &'a InquiryForm) -> Self {
        Self {
            form,
            errors: None,
            receipt: None,
        }
    }

    pub fn rejected(form: &'a InquiryForm, errors: &'a ValidationErrors) -> Self {
        Self {
            form,
            errors: Some(errors),
            receipt: None,
        }
    }

    /// Reset form with the acknowledgment above it
    pub fn accepted(form: &'a InquiryForm, receipt: &'a InquiryReceipt) -> Self {
        Self {
            form,
            errors: None,
            receipt: Some(receipt),
        }
    }

    fn error_for(&self, field: InquiryField) -> Option<&'a str> {
        self.errors?.for_field(field).map(|e| e.message.as_str())
    }
}

fn field_error(panel: &InquiryPanel<'_>, field: InquiryField) -> Markup {
    html! {
        @if let Some(message) = panel.error_for(field) {
            p.error id={ (field.name()) "-error" } { (message) }
        }
    }
}

fn text_input(panel: &InquiryPanel<'_>, field: InquiryField, input_type: &str, value: &str) -> Markup {
    html! {
        div.field {
            label for=(field.name()) { (field.label()) }
            input
                type=(input_type)
                id=(field.name())
                name=(field.name())
                value=(value)
                aria-invalid=[panel.error_for(field).map(|_| "true")];
            (field_error(panel, field))
        }
    }
}

fn select(panel: &InquiryPanel<'_>, field: InquiryField, placeholder: &str, options: &[FormOption], value: &str) -> Markup {
    html! {
        div.field {
            label for=(field.name()) { (field.label()) }
            select id=(field.name()) name=(field.name()) {
                option value="" selected[value.is_empty()] { (placeholder) }
                @for option in options {
                    option value=(option.value) selected[option.value == value] { (option.label) }
                }
            }
            (field_error(panel, field))
        }
    }
}

pub fn render(panel: &InquiryPanel<'_>) -> Markup {
    let form = panel.form;

    html! {
        @if let Some(receipt) = panel.receipt {
            div.notice role="status" {
                p {
                    strong { "Thank you, " (receipt.inquiry.contact_name) "!" }
                    " Your inquiry has been received."
                }
                p {
                    "Reference " code { (receipt.short_reference()) }
                    ". Our team will reach you at " (receipt.inquiry.email) " within 24 hours."
                }
            }
        }
        @if panel.errors.is_some_and(|errors| !errors.is_empty()) {
            p.error role="alert" { "Please correct the highlighted fields." }
        }
        form method="post" action="/inquiry" novalidate {
            (text_input(panel, InquiryField::CompanyName, "text", &form.company_name))
            (text_input(panel, InquiryField::ContactName, "text", &form.contact_name))
            (text_input(panel, InquiryField::Email, "email", &form.email))
            (text_input(panel, InquiryField::Phone, "tel", &form.phone))
            (select(panel, InquiryField::BusinessType, "Select business type", BUSINESS_TYPES, &form.business_type))
            (select(panel, InquiryField::OrderVolume, "Select order volume", ORDER_VOLUMES, &form.order_volume))
            div.field.checks {
                span { strong { (InquiryField::CoffeeTypes.label()) } }
                br;
                @for option in PRODUCT_INTERESTS {
                    label {
                        input
                            type="checkbox"
                            name=(InquiryField::CoffeeTypes.name())
                            value=(option.value)
                            checked[form.has_product(option.value)];
                        " " (option.label)
                    }
                }
                (field_error(panel, InquiryField::CoffeeTypes))
            }
            div.field {
                label for=(InquiryField::Notes.name()) { (InquiryField::Notes.label()) }
                textarea id=(InquiryField::Notes.name()) name=(InquiryField::Notes.name()) rows="4" {
                    (form.notes.as_deref().unwrap_or_default())
                }
            }
            button type="submit" { "Send Inquiry" }
        }
    }
}
