use datxb_core::forms::SignupRequest;
use datxb_core::policy::PasswordRequirements;
use datxb_core::user::UserType;

use crate::common::{TextField, cycle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignupFocus {
    #[default]
    Username,
    Email,
    Password,
    UserType,
    Submit,
    LoginLink,
}

impl SignupFocus {
    const ORDER: [SignupFocus; 6] = [
        SignupFocus::Username,
        SignupFocus::Email,
        SignupFocus::Password,
        SignupFocus::UserType,
        SignupFocus::Submit,
        SignupFocus::LoginLink,
    ];

    pub fn next(self) -> Self {
        cycle(&Self::ORDER, self, true)
    }

    pub fn prev(self) -> Self {
        cycle(&Self::ORDER, self, false)
    }
}

/// Form state for the sign-up screen. Reset whenever the screen is entered.
#[derive(Debug, Clone)]
pub struct SignupState {
    pub username: TextField,
    pub email: TextField,
    pub password: TextField,
    /// `None` until a role is picked.
    pub user_type: Option<UserType>,
    pub focus: SignupFocus,
}

impl Default for SignupState {
    fn default() -> Self {
        Self::new()
    }
}

impl SignupState {
    pub fn new() -> Self {
        Self {
            username: TextField::new(),
            email: TextField::new(),
            password: TextField::masked(),
            user_type: None,
            focus: SignupFocus::default(),
        }
    }

    pub fn request(&self) -> SignupRequest {
        SignupRequest {
            username: self.username.text().to_string(),
            email: self.email.text().to_string(),
            password: self.password.text().to_string(),
            user_type: self.user_type,
        }
    }

    pub fn password_requirements(&self) -> PasswordRequirements {
        PasswordRequirements::evaluate(self.password.text())
    }

    /// Steps the role selector. From "unset" forward picks the first role,
    /// backward picks the last.
    pub fn cycle_user_type(&mut self, forward: bool) {
        let all = UserType::all();
        self.user_type = Some(match self.user_type {
            Some(current) => cycle(all, current, forward),
            None if forward => all[0],
            None => all[all.len() - 1],
        });
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut TextField> {
        match self.focus {
            SignupFocus::Username => Some(&mut self.username),
            SignupFocus::Email => Some(&mut self.email),
            SignupFocus::Password => Some(&mut self.password),
            SignupFocus::UserType | SignupFocus::Submit | SignupFocus::LoginLink => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_selector_wraps() {
        let mut state = SignupState::new();
        state.cycle_user_type(true);
        assert_eq!(state.user_type, Some(UserType::Admin));
        state.cycle_user_type(false);
        assert_eq!(state.user_type, Some(UserType::Viewer));

        let mut state = SignupState::new();
        state.cycle_user_type(false);
        assert_eq!(state.user_type, Some(UserType::Viewer));
    }
}
