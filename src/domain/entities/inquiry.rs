use std::borrow::Cow;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

static LETTERS_AND_SPACES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("invalid letters pattern"));

// Optional +2 country prefix followed by exactly 11 digits.
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\+2)?[0-9]{11}$").expect("invalid phone pattern"));

/// A stored client inquiry. Inquiries are created by visitors and deleted by
/// an administrator; they are never updated in place.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: Uuid,
    pub full_name: String,
    pub governorate: String,
    pub video_type: String,
    pub video_duration: f64,
    pub expected_price: f64,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewInquiry {
    #[validate(custom(function = "validate_full_name"))]
    pub full_name: String,

    #[validate(custom(function = "validate_governorate"))]
    pub governorate: String,

    #[validate(length(min = 2, message = "Please specify the video type."))]
    pub video_type: String,

    #[validate(range(min = 1.0, message = "Duration must be at least 1 second."))]
    pub video_duration: f64,

    #[validate(range(min = 500.0, message = "Please enter a valid expected budget."))]
    pub expected_price: f64,

    #[validate(regex(path = *PHONE_PATTERN, message = "Phone number must be exactly 11 digits."))]
    pub phone: String,
}

impl NewInquiry {
    /// Trims string fields before validation, matching the form behavior.
    pub fn normalized(mut self) -> Self {
        self.full_name = self.full_name.trim().to_string();
        self.governorate = self.governorate.trim().to_string();
        self.video_type = self.video_type.trim().to_string();
        self.phone = self.phone.trim().to_string();
        self
    }
}

pub fn validate_full_name(value: &str) -> Result<(), ValidationError> {
    let length = value.chars().count();
    if length < 3 {
        return Err(new_validation_error("full_name_length", "Full name must be at least 3 characters."));
    }
    if length > 40 {
        return Err(new_validation_error("full_name_length", "Full name is too long."));
    }
    if !LETTERS_AND_SPACES.is_match(value) {
        return Err(new_validation_error("full_name_charset", "Full name can only contain letters and spaces."));
    }
    Ok(())
}

pub fn validate_governorate(value: &str) -> Result<(), ValidationError> {
    let length = value.chars().count();
    if length < 3 {
        return Err(new_validation_error("governorate_length", "City must be at least 3 characters."));
    }
    if length > 30 {
        return Err(new_validation_error("governorate_length", "City name is too long."));
    }
    if !LETTERS_AND_SPACES.is_match(value) {
        return Err(new_validation_error("governorate_charset", "City can only contain letters and spaces."));
    }
    Ok(())
}

fn new_validation_error(code: &'static str, msg: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(msg));
    err
}

#[derive(Debug, Serialize)]
pub struct InquiryCreatedResponse {
    pub id: Uuid,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct InquiryListResponse {
    pub inquiries: Vec<Inquiry>,
    pub total: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_inquiry() -> NewInquiry {
        NewInquiry {
            full_name: "Mina Gerges".to_string(),
            governorate: "Cairo".to_string(),
            video_type: "Commercial Ad".to_string(),
            video_duration: 30.0,
            expected_price: 1500.0,
            phone: "01110711006".to_string(),
        }
    }

    fn field_fails(inquiry: &NewInquiry, field: &str) -> bool {
        match inquiry.validate() {
            Ok(()) => false,
            Err(errors) => errors.field_errors().contains_key(field),
        }
    }

    #[test]
    fn accepts_a_well_formed_inquiry() {
        assert!(valid_inquiry().validate().is_ok());
    }

    #[test]
    fn rejects_digits_and_symbols_in_name_fields() {
        let mut inquiry = valid_inquiry();
        inquiry.full_name = "Mina 3rd".to_string();
        assert!(field_fails(&inquiry, "full_name"));

        let mut inquiry = valid_inquiry();
        inquiry.governorate = "Cairo!".to_string();
        assert!(field_fails(&inquiry, "governorate"));
    }

    #[test]
    fn enforces_name_length_bounds() {
        let mut inquiry = valid_inquiry();
        inquiry.full_name = "Al".to_string();
        assert!(field_fails(&inquiry, "full_name"));

        inquiry.full_name = "a".repeat(41);
        assert!(field_fails(&inquiry, "full_name"));

        inquiry.full_name = "a".repeat(40);
        assert!(!field_fails(&inquiry, "full_name"));
    }

    #[test]
    fn enforces_city_length_bounds_with_distinct_messages() {
        let mut inquiry = valid_inquiry();
        inquiry.governorate = "Al".to_string();
        let errors = inquiry.validate().unwrap_err();
        let messages: Vec<String> = errors.field_errors()["governorate"]
            .iter()
            .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .collect();
        assert_eq!(messages, vec!["City must be at least 3 characters."]);

        inquiry.governorate = "a".repeat(31);
        let errors = inquiry.validate().unwrap_err();
        let messages: Vec<String> = errors.field_errors()["governorate"]
            .iter()
            .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .collect();
        assert_eq!(messages, vec!["City name is too long."]);

        inquiry.governorate = "a".repeat(30);
        assert!(!field_fails(&inquiry, "governorate"));
    }

    #[test]
    fn duration_boundary_at_one_second() {
        let mut inquiry = valid_inquiry();
        inquiry.video_duration = 0.0;
        assert!(field_fails(&inquiry, "video_duration"));

        inquiry.video_duration = 1.0;
        assert!(!field_fails(&inquiry, "video_duration"));
    }

    #[test]
    fn price_boundary_at_five_hundred() {
        let mut inquiry = valid_inquiry();
        inquiry.expected_price = 499.0;
        assert!(field_fails(&inquiry, "expected_price"));

        inquiry.expected_price = 500.0;
        assert!(!field_fails(&inquiry, "expected_price"));
    }

    #[test]
    fn phone_requires_eleven_digits_with_optional_prefix() {
        let mut inquiry = valid_inquiry();
        inquiry.phone = "01110711006".to_string();
        assert!(!field_fails(&inquiry, "phone"));

        inquiry.phone = "0111071100".to_string();
        assert!(field_fails(&inquiry, "phone"));

        inquiry.phone = "+201110711006".to_string();
        assert!(!field_fails(&inquiry, "phone"));

        inquiry.phone = "+301110711006".to_string();
        assert!(field_fails(&inquiry, "phone"));
    }

    #[test]
    fn normalized_trims_whitespace() {
        let mut inquiry = valid_inquiry();
        inquiry.full_name = "  Mina Gerges  ".to_string();
        inquiry.phone = " 01110711006 ".to_string();
        let inquiry = inquiry.normalized();
        assert_eq!(inquiry.full_name, "Mina Gerges");
        assert!(inquiry.validate().is_ok());
    }
}
