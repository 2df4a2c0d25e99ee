//! Login and signup submissions and their validation rules.

use crate::error::AuthError;
use crate::policy::PasswordRequirements;
use crate::user::UserType;

/// Emails containing this substring are treated as already registered.
pub const DUPLICATE_EMAIL_SENTINEL: &str = "test@";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Checks field presence. There is no credential check.
    ///
    /// # Errors
    /// [`AuthError::Validation`] if either field is empty.
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(AuthError::Validation);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub user_type: Option<UserType>,
}

impl SignupRequest {
    pub fn password_requirements(&self) -> PasswordRequirements {
        PasswordRequirements::evaluate(&self.password)
    }

    /// Runs the signup checks in order: presence, password policy, duplicate email.
    ///
    /// # Errors
    /// The first failing check, as [`AuthError::Validation`],
    /// [`AuthError::PasswordPolicy`] or [`AuthError::DuplicateEmail`].
    pub fn validate(&self) -> Result<UserType, AuthError> {
        let user_type = match self.user_type {
            Some(t)
                if !self.username.is_empty()
                    && !self.email.is_empty()
                    && !self.password.is_empty() =>
            {
                t
            }
            _ => return Err(AuthError::Validation),
        };

        if !self.password_requirements().is_satisfied() {
            return Err(AuthError::PasswordPolicy);
        }

        if self.email.contains(DUPLICATE_EMAIL_SENTINEL) {
            return Err(AuthError::DuplicateEmail);
        }

        Ok(user_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_signup() -> SignupRequest {
        SignupRequest {
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "Abcdef1!".to_string(),
            user_type: Some(UserType::Manager),
        }
    }

    #[test]
    fn login_requires_both_fields() {
        assert_eq!(
            LoginRequest::new("a@b.c", "").validate(),
            Err(AuthError::Validation)
        );
        assert_eq!(
            LoginRequest::new("", "secret").validate(),
            Err(AuthError::Validation)
        );
        assert_eq!(LoginRequest::new("a@b.c", "x").validate(), Ok(()));
    }

    #[test]
    fn signup_accepts_complete_valid_request() {
        assert_eq!(valid_signup().validate(), Ok(UserType::Manager));
    }

    #[test]
    fn signup_missing_any_field_is_a_validation_error() {
        let mut missing_username = valid_signup();
        missing_username.username.clear();
        let mut missing_email = valid_signup();
        missing_email.email.clear();
        let mut missing_password = valid_signup();
        missing_password.password.clear();
        let mut missing_type = valid_signup();
        missing_type.user_type = None;

        for req in [missing_username, missing_email, missing_password, missing_type] {
            assert_eq!(req.validate(), Err(AuthError::Validation), "{req:?}");
        }
    }

    #[test]
    fn signup_weak_password_is_a_policy_error() {
        let mut req = valid_signup();
        req.password = "abcdefgh".to_string();
        assert_eq!(req.validate(), Err(AuthError::PasswordPolicy));
    }

    #[test]
    fn sentinel_email_is_a_duplicate() {
        let mut req = valid_signup();
        req.email = "test@example.com".to_string();
        assert_eq!(req.validate(), Err(AuthError::DuplicateEmail));

        req.email = "my.test@corp.io".to_string();
        assert_eq!(req.validate(), Err(AuthError::DuplicateEmail));
    }

    #[test]
    fn presence_is_checked_before_policy_and_duplicate() {
        let req = SignupRequest {
            username: String::new(),
            email: "test@example.com".to_string(),
            password: "weak".to_string(),
            user_type: None,
        };
        assert_eq!(req.validate(), Err(AuthError::Validation));

        let req = SignupRequest {
            password: "weak".to_string(),
            email: "test@example.com".to_string(),
            ..valid_signup()
        };
        assert_eq!(req.validate(), Err(AuthError::PasswordPolicy));
    }
}
