use crate::api::{ApiError, NewEnquiry};
use serde_json::json;

/// All three fields are required after trimming.
pub fn validate_enquiry(name: &str, mobile: &str, email: &str) -> Result<NewEnquiry, ApiError> {
    let enquiry = NewEnquiry {
        name: name.trim().to_string(),
        mobile: mobile.trim().to_string(),
        email: email.trim().to_string(),
    };
    let missing: Vec<&str> = [
        ("Name is required", &enquiry.name),
        ("Mobile is required", &enquiry.mobile),
        ("Email is required", &enquiry.email),
    ]
    .into_iter()
    .filter(|(_, value)| value.is_empty())
    .map(|(msg, _)| msg)
    .collect();

    if missing.is_empty() {
        Ok(enquiry)
    } else {
        let mut err = ApiError::validation("Please fill in all fields");
        err.details = Some(json!({ "errors": missing }));
        Err(err)
    }
}
