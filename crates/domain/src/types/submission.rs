//! Batch submission (with scheduling and payment) payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::form1098::Form1098Item;

/// Request body for submitting a scheduled, paid batch of 1098 forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submit1098BatchRequest {
    pub tax_year: String,
    pub form_name: String,
    /// Date the batch should be filed, RFC 3339 UTC on the wire.
    pub scheduled_date: DateTime<Utc>,
    pub is_corrected: bool,
    pub coupon_code: String,
    pub card_reference_id: String,
    pub items: Vec<Form1098Item>,
}

/// Response body for the batch submission operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Submit1098BatchResponse {
    pub trace_identifier: String,
    pub message: String,
    pub status_code: i64,
    pub original_status_code: i64,
    pub is_error: bool,
    pub reference_ids: Vec<i64>,
    pub payment_response_message: String,
    pub total_count: i64,
}
