//! Filled-form PDF download request.

use serde::{Deserialize, Serialize};

use super::is_false;

/// Submission status filter for PDF retrieval.
///
/// A closed enum: the two wire literals are the only values the API
/// recognizes, so an invalid status cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormStatus {
    #[serde(rename = "Not Submitted")]
    NotSubmitted,
    Submitted,
}

/// Request body for downloading a filled form PDF.
///
/// Exactly one addressing mode must be used: `form_id` alone, or the pair
/// (`payer_tin`, `tax_year`). `form_type` is always required, and a
/// `form_id` of 0 is rejected (the API treats 0 as unset). The client
/// validates this locally before any network call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DownloadFormRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_id: Option<u32>,
    /// Form family, e.g. "1099-MISC" or "1098".
    pub form_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<FormStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_payer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer_tin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disregarded_entity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_reference_id: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub is_all_copies: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub is_payer_copy_only: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub is_recipient_copy_only: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub is_state_copy_only: bool,
    #[serde(rename = "unMaskPDF", skip_serializing_if = "is_false")]
    pub un_mask_pdf: bool,
}
