use crate::core::error::ValidationError;
use serde::Deserialize;

pub const EMPTY_PERSONAL_NAME: &str = "The given name or family name is empty.";
pub const EMPTY_USER_NAME: &str = "The username is empty.";

/// Request body for creating or editing a user
#[derive(Debug, Deserialize)]
pub struct UserParams {
    #[serde(default)]
    pub given_name: String,

    #[serde(default)]
    pub family_name: String,

    #[serde(default)]
    pub user_name: String,
}

/// Trimmed, non-empty name fields
#[derive(Debug, PartialEq, Eq)]
pub struct ValidatedUserParams {
    pub given_name: String,
    pub family_name: String,
    pub user_name: String,
}

impl UserParams {
    pub fn validate(self) -> Result<ValidatedUserParams, ValidationError> {
        let given_name = self.given_name.trim().to_string();
        let family_name = self.family_name.trim().to_string();
        let user_name = self.user_name.trim().to_string();

        validate_names(&given_name, &family_name, &user_name)?;

        Ok(ValidatedUserParams {
            given_name,
            family_name,
            user_name,
        })
    }
}

/// Reject names that are empty or whitespace only
///
/// Given and family name are checked before the user name.
pub fn validate_names(
    given_name: &str,
    family_name: &str,
    user_name: &str,
) -> Result<(), ValidationError> {
    if given_name.trim().is_empty() || family_name.trim().is_empty() {
        return Err(ValidationError::InvalidArgument(EMPTY_PERSONAL_NAME.to_string()));
    }

    if user_name.trim().is_empty() {
        return Err(ValidationError::InvalidArgument(EMPTY_USER_NAME.to_string()));
    }

    Ok(())
}
