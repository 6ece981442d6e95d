use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::UserCreateRequest;

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]{3,}$").expect("Invalid name pattern."));
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("Invalid phone pattern."));

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("FirstName and LastName should not have spaces and must only contain letters")]
    InvalidName,
    #[error("Phone must be exactly 10 digits and only numbers")]
    InvalidPhone,
    #[error("Address must not be empty")]
    InvalidAddress,
}

/// At least 3 ASCII letters, nothing else.
pub fn check_name(name: &str) -> bool {
    NAME_PATTERN.is_match(name)
}

/// Exactly 10 ASCII digits, no country code and no separators.
pub fn check_phone(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone)
}

pub fn check_address(address: &str) -> bool {
    !address.trim().is_empty()
}

/// Checks a create request before it reaches the store.
///
/// `UserStore::create_user` never validates its input, so anything that
/// creates users outside the HTTP handler has to call this first.
pub fn validate_new_user(req: &UserCreateRequest) -> Result<(), ValidationError> {
    if !check_name(&req.firstname) || !check_name(&req.lastname) {
        return Err(ValidationError::InvalidName);
    }
    if !check_phone(&req.phone) {
        return Err(ValidationError::InvalidPhone);
    }
    if !check_address(&req.addr) {
        return Err(ValidationError::InvalidAddress);
    }
    Ok(())
}
