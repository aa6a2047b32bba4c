use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::common::Gender;
use super::season::RACE_DATE_FORMAT;
use crate::error::{Result, ResultsError};

/// A participant registration as submitted to the service.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub date_of_birth: String,
    pub club: String,
    pub parkrun_id: String,
}

impl RegistrationForm {
    /// Check required fields and formats, returning a normalised copy
    /// (whitespace trimmed, parkrun id upper-cased).
    pub fn validated(&self) -> Result<RegistrationForm> {
        let first_name = required("first_name", &self.first_name, "First name is required")?;
        let last_name = required("last_name", &self.last_name, "Last name is required")?;
        let date_of_birth = required(
            "date_of_birth",
            &self.date_of_birth,
            "Date of birth is required",
        )?;
        if NaiveDate::parse_from_str(&date_of_birth, RACE_DATE_FORMAT).is_err() {
            return Err(ResultsError::InvalidRegistration {
                field: "date_of_birth",
                reason: "Date of birth must be a valid date (YYYY-MM-DD)",
            });
        }
        let club = required("club", &self.club, "Please select a valid running club")?;
        let parkrun_id = required("parkrun_id", &self.parkrun_id, "Parkrun ID is required")?
            .to_ascii_uppercase();
        if !is_parkrun_barcode(&parkrun_id) {
            return Err(ResultsError::InvalidRegistration {
                field: "parkrun_id",
                reason: "Invalid barcode format (should be A followed by 6-7 digits)",
            });
        }

        Ok(RegistrationForm {
            first_name,
            last_name,
            gender: self.gender,
            date_of_birth,
            club,
            parkrun_id,
        })
    }
}

fn required(field: &'static str, value: &str, reason: &'static str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ResultsError::InvalidRegistration { field, reason });
    }
    Ok(value.to_string())
}

/// `A` followed by six or seven digits.
pub fn is_parkrun_barcode(id: &str) -> bool {
    let Some(digits) = id.strip_prefix(['A', 'a']) else {
        return false;
    };
    (6..=7).contains(&digits.len()) && digits.bytes().all(|b| b.is_ascii_digit())
}

/// The service's answer to a registration.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Confirmation returned for an accepted registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationReceipt {
    pub message: String,
}
