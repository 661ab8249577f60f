//! Customer write requests and their validation rules.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::{PERSON_NAME, PHONE_NUMBER, not_blank, trim_opt_string, trim_string};

/// Body of `POST /api/customers`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    #[validate(
        custom(function = "not_blank", message = "First name is required"),
        length(max = 100, message = "First name must not exceed 100 characters")
    )]
    #[serde(deserialize_with = "trim_string")]
    pub first_name: String,

    #[validate(
        custom(function = "not_blank", message = "Last name is required"),
        length(max = 100, message = "Last name must not exceed 100 characters")
    )]
    #[serde(deserialize_with = "trim_string")]
    pub last_name: String,

    #[validate(
        custom(function = "not_blank", message = "Email is required"),
        email(message = "Invalid email format"),
        length(max = 150, message = "Email must not exceed 150 characters")
    )]
    #[serde(deserialize_with = "trim_string")]
    pub email: String,

    #[validate(
        regex(path = *PHONE_NUMBER, message = "Phone number format is invalid"),
        length(max = 20, message = "Phone number must not exceed 20 characters")
    )]
    #[serde(default, deserialize_with = "trim_opt_string")]
    pub phone_number: Option<String>,
}

/// Body of `PUT /api/customers/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerRequest {
    #[validate(
        custom(function = "not_blank", message = "First name is required"),
        length(min = 2, max = 100, message = "First name must be between 2 and 100 characters"),
        regex(path = *PERSON_NAME, message = "First name contains invalid characters")
    )]
    #[serde(deserialize_with = "trim_string")]
    pub first_name: String,

    #[validate(
        custom(function = "not_blank", message = "Last name is required"),
        length(min = 2, max = 100, message = "Last name must be between 2 and 100 characters"),
        regex(path = *PERSON_NAME, message = "Last name contains invalid characters")
    )]
    #[serde(deserialize_with = "trim_string")]
    pub last_name: String,

    #[validate(
        custom(function = "not_blank", message = "Email is required"),
        email(message = "Invalid email format"),
        length(max = 320, message = "Email must not exceed 320 characters")
    )]
    #[serde(deserialize_with = "trim_string")]
    pub email: String,

    #[validate(
        regex(path = *PHONE_NUMBER, message = "Phone number format is invalid"),
        length(max = 20, message = "Phone number must not exceed 20 characters")
    )]
    #[serde(default, deserialize_with = "trim_opt_string")]
    pub phone_number: Option<String>,
}
