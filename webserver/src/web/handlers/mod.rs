//! Request handlers
//!
//! Handlers are generic over the injected services and share one
//! [`AppContext`](crate::state::AppContext) as router state.

pub mod api;
pub mod pages;
pub mod static_files;

use catalog::{Component, InquiryForm, ValidationErrors, site_info};

use crate::error::WebServerResult;
use crate::traits::InquirySink;
use crate::types::InquiryReceipt;

/// Outcome of an inquiry submission
#[derive(Debug)]
pub enum Submission {
    Accepted(InquiryReceipt),
    Rejected(ValidationErrors),
}

/// Validate `form` and hand it to `sink` only when every field passes
pub async fn submit_inquiry<I: InquirySink + ?Sized>(sink: &I, form: &InquiryForm) -> WebServerResult<Submission> {
    match form.validate() {
        Ok(inquiry) => {
            let receipt = sink.submit(inquiry).await?;
            Ok(Submission::Accepted(receipt))
        }
        Err(errors) => {
            site_info!(
                Component::Inquiry,
                failed_fields = errors.len(),
                "📝 Inquiry rejected: {}",
                errors
            );
            Ok(Submission::Rejected(errors))
        }
    }
}
