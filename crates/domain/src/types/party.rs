//! Payer and recipient records shared by every form family.

use serde::{Deserialize, Serialize};

/// Whether a party files under an individual or a business TIN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TinType {
    Individual,
    Business,
}

/// The filer submitting the form (the lender, in 1098 context).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayerInfo {
    /// Unique identifier for the payer in Tax1099's system.
    pub payer_id: i64,
    /// Unique identifier for the payer in the caller's system.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_payer_id: Option<String>,
    pub tin_type: TinType,
    /// The payer's TIN, SSN, or EIN with no dashes.
    pub payer_tin: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    /// Last name if an individual, otherwise the business name.
    pub last_name_or_business_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    /// Street address, line 1.
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    pub city: String,
    /// Two-letter state abbreviation.
    pub state: String,
    /// 5-digit zip code, or 9-digit with a hyphen.
    pub zip_code: String,
    /// Two-letter country abbreviation.
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub phone: String,
    /// True when no further filings are expected for this payer.
    pub last_filing: bool,
    /// Owner name when the payer is a disregarded entity, otherwise empty.
    pub disregarded_entity: String,
    pub un_mask_recipient_tin: bool,
    pub combined_fed_state_filing: bool,
}

/// The party the form concerns (the borrower, in 1098 context).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientInfo {
    /// Unique identifier for the payer in Tax1099's system.
    pub payer_id: i64,
    /// Unique identifier for the recipient in Tax1099's system.
    pub recipient_id: i64,
    /// Unique identifier for the recipient in the caller's system.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_recipient_id: Option<String>,
    pub tin_type: TinType,
    /// The recipient's TIN, SSN, or EIN with no dashes.
    pub recipient_tin: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    pub last_name_or_business_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub email: String,
    pub phone: String,
    /// Person the form should be addressed to, if the recipient is a business.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attention_to: Option<String>,
    pub is_active: bool,
}

/// Business-rule violation reported by the remote service inside an
/// otherwise-successful response. Never constructed locally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationError {
    pub field: String,
    pub source: String,
    pub message: String,
}
