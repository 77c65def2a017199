//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use blog_core::entities::{PostChanges, User};
use serde::Deserialize;
use validator::{Validate, ValidationError};

// ============================================================================
// Custom validators
// ============================================================================

fn validate_username(username: &str) -> Result<(), ValidationError> {
    if User::is_valid_username(username) {
        Ok(())
    } else {
        let mut err = ValidationError::new("invalid_username");
        err.message = Some(
            "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters."
                .into(),
        );
        Err(err)
    }
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some("This field is required.".into());
        Err(err)
    } else {
        Ok(())
    }
}

/// Longest title a post may have once trimmed
const MAX_TITLE_LEN: usize = 100;

/// Required, and at most `MAX_TITLE_LEN` characters once trimmed
fn validate_title(title: &str) -> Result<(), ValidationError> {
    validate_not_blank(title)?;
    if title.trim().chars().count() > MAX_TITLE_LEN {
        let mut err = ValidationError::new("length");
        err.message = Some(
            format!("Ensure this value has at most {MAX_TITLE_LEN} characters.").into(),
        );
        err.add_param("max".into(), &MAX_TITLE_LEN);
        Err(err)
    } else {
        Ok(())
    }
}

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(
        length(max = 150, message = "Username must be at most 150 characters"),
        custom(function = "validate_username")
    )]
    pub username: String,

    #[validate(email(message = "Enter a valid email address."))]
    pub email: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub password: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(custom(function = "validate_not_blank"))]
    pub username: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

// ============================================================================
// Account Requests
// ============================================================================

/// Account update request; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateAccountRequest {
    #[validate(
        length(max = 150, message = "Username must be at most 150 characters"),
        custom(function = "validate_username")
    )]
    pub username: Option<String>,

    #[validate(email(message = "Enter a valid email address."))]
    pub email: Option<String>,

    /// Name of the profile picture
    #[validate(length(min = 1, max = 255, message = "Image name must be 1-255 characters"))]
    pub image: Option<String>,
}

// ============================================================================
// Post Requests
// ============================================================================

/// Post create/update form
///
/// Every field defaults when absent so that a missing field is reported as a
/// field error rather than a malformed body.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct PostForm {
    #[validate(custom(function = "validate_title"))]
    pub title: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub content: String,

    pub has_code: bool,

    pub code: String,
}

impl PostForm {
    /// Validated field values, with surrounding whitespace removed from the title
    pub fn into_changes(self) -> PostChanges {
        PostChanges {
            title: self.title.trim().to_string(),
            content: self.content,
            has_code: self.has_code,
            code: self.code,
        }
    }
}
