//! Inquiry acknowledgment service
//!
//! No backend receives inquiries yet: accepted submissions are logged and
//! acknowledged with a reference number.

use async_trait::async_trait;
use catalog::inquiry::{BUSINESS_TYPES, ORDER_VOLUMES, label_for};
use catalog::{Component, Inquiry, site_info};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::WebServerResult;
use crate::traits::InquirySink;
use crate::types::InquiryReceipt;

/// Logs every accepted inquiry and counts them
#[derive(Clone, Default)]
pub struct LoggingInquirySink {
    received: Arc<AtomicU64>,
}

impl LoggingInquirySink {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InquirySink for LoggingInquirySink {
    async fn submit(&self, inquiry: Inquiry) -> WebServerResult<InquiryReceipt> {
        let receipt = InquiryReceipt::new(inquiry);
        let inquiry = &receipt.inquiry;

        site_info!(
            Component::Inquiry,
            reference = %receipt.reference,
            company = %inquiry.company_name,
            contact = %inquiry.contact_name,
            email = %inquiry.email,
            "📨 Inquiry received: {} ({}, {}) interested in {}",
            inquiry.company_name,
            label_for(BUSINESS_TYPES, &inquiry.business_type),
            label_for(ORDER_VOLUMES, &inquiry.order_volume),
            inquiry.coffee_types.join(", ")
        );

        self.received.fetch_add(1, Ordering::Relaxed);
        Ok(receipt)
    }

    async fn received_count(&self) -> u64 {
        self.received.load(Ordering::Relaxed)
    }
}
