//! 1098 form payloads for the validate and import operations.

use serde::{Deserialize, Serialize};

use super::party::{PayerInfo, RecipientInfo, ValidationError};

/// A single Form 1098 (Mortgage Interest Statement).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Form1098 {
    pub recipient_info: RecipientInfo,
    /// Year for which the form is being filed.
    pub tax_year: String,
    /// Required when filing more than one 1098 for the same payer/borrower.
    pub acct_no: String,
    /// Interest received from the borrower during the tax year.
    pub mortgage_interest: f64,
    /// Points paid by the borrower for the residence.
    pub principal_residence: f64,
    /// Interest refunded or credited to the borrower during the tax year.
    pub overpaid_interest: f64,
    pub mortgage_premiums: f64,
    /// Outstanding principal at the start of the calendar year.
    pub mortgage_principal: f64,
    /// Date the mortgage was originated.
    pub mortgage_date: String,
    /// Property address is the same as the recipient address.
    pub is_address_same: bool,
    pub property_address: String,
    pub property_description: String,
    /// Mail a paper copy via USPS.
    pub usps_mail: bool,
    pub tin_check: bool,
    #[serde(rename = "eDelivery")]
    pub e_delivery: bool,
    pub corrected_return: bool,
}

/// One payer and the 1098 forms filed under them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Form1098Item {
    pub payer_info: PayerInfo,
    pub forms: Vec<Form1098>,
}

/// Request body for the 1098 validate and import operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submit1098Request {
    pub tax_year: String,
    pub items: Vec<Form1098Item>,
}

/// Per-record outcome inside a [`Submit1098Response`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmissionResult {
    pub id: i64,
    pub is_inserted: bool,
}

/// Response body for the 1098 validate and import operations.
///
/// `is_error` and `validation_errors` report remote business-rule
/// violations inside an HTTP 200 response; callers must inspect them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Submit1098Response {
    pub result: Vec<SubmissionResult>,
    pub total_count: i64,
    pub validation_errors: Vec<ValidationError>,
    pub message: String,
    pub status_code: i64,
    pub original_status_code: i64,
    pub is_error: bool,
}
