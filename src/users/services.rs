use lazy_static::lazy_static;
use regex::Regex;

use crate::users::dto::RegisterRequest;

lazy_static! {
    static ref RE_UPPER: Regex = Regex::new(r"[A-Z]").unwrap();
    static ref RE_LOWER: Regex = Regex::new(r"[a-z]").unwrap();
    static ref RE_NUMBER: Regex = Regex::new(r"[0-9]").unwrap();
    static ref RE_SPECIAL: Regex = Regex::new(r"[!@#$%^&]").unwrap();
}

/// A registration request that passed every rule, with required fields
/// unwrapped.
#[derive(Debug)]
pub struct ValidRegistration {
    pub user_name: String,
    pub full_name: String,
    pub nickname: Option<String>,
    pub password: String,
}

/// Apply the registration rules in order, stopping at the first failure.
/// The returned message is the exact client-facing error text.
pub fn validate_registration(req: RegisterRequest) -> Result<ValidRegistration, String> {
    let RegisterRequest {
        user_name,
        password,
        full_name,
        nickname,
    } = req;

    let user_name = require_field("user_name", user_name)?;
    let password = require_field("password", password)?;
    let full_name = require_field("full_name", full_name)?;

    validate_password(&password).map_err(str::to_string)?;

    Ok(ValidRegistration {
        user_name,
        full_name,
        nickname,
        password,
    })
}

fn require_field(name: &str, value: Option<String>) -> Result<String, String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(format!("Missing '{}' in request body", name)),
    }
}

fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < 8 {
        return Err("Password must be longer than 8 characters");
    }
    if password.len() > 72 {
        return Err("Password should be less than 72 characters");
    }
    if password.starts_with(' ') || password.ends_with(' ') {
        return Err("Password must not start or end with empty space");
    }
    let complex_enough = RE_UPPER.is_match(password)
        && RE_LOWER.is_match(password)
        && RE_NUMBER.is_match(password)
        && RE_SPECIAL.is_match(password);
    if !complex_enough {
        return Err(
            "Password must contain 1 Uppercase, 1 Lowercase, 1 Number, and 1 Special Character",
        );
    }
    Ok(())
}
