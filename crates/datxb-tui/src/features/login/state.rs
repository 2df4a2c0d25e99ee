use datxb_core::forms::LoginRequest;

use crate::common::{TextField, cycle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginFocus {
    #[default]
    Email,
    Password,
    Submit,
    SignupLink,
}

impl LoginFocus {
    const ORDER: [LoginFocus; 4] = [
        LoginFocus::Email,
        LoginFocus::Password,
        LoginFocus::Submit,
        LoginFocus::SignupLink,
    ];

    pub fn next(self) -> Self {
        cycle(&Self::ORDER, self, true)
    }

    pub fn prev(self) -> Self {
        cycle(&Self::ORDER, self, false)
    }
}

/// Form state for the sign-in screen. Reset whenever the screen is entered.
#[derive(Debug, Clone)]
pub struct LoginState {
    pub email: TextField,
    pub password: TextField,
    pub focus: LoginFocus,
}

impl Default for LoginState {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginState {
    pub fn new() -> Self {
        Self {
            email: TextField::new(),
            password: TextField::masked(),
            focus: LoginFocus::default(),
        }
    }

    pub fn request(&self) -> LoginRequest {
        LoginRequest::new(self.email.text(), self.password.text())
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut TextField> {
        match self.focus {
            LoginFocus::Email => Some(&mut self.email),
            LoginFocus::Password => Some(&mut self.password),
            LoginFocus::Submit | LoginFocus::SignupLink => None,
        }
    }
}
