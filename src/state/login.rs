//! Login form.

use crate::error::{require, Field, ValidationError};
use crate::models::LoginRequest;
use crate::widgets::InputField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

impl LoginField {
    pub fn next(self) -> Self {
        match self {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoginPage {
    pub email: InputField,
    pub password: InputField,
    pub focus: LoginField,
    submitting: bool,
}

impl Default for LoginPage {
    fn default() -> Self {
        Self {
            email: InputField::new(),
            password: InputField::masked(),
            focus: LoginField::Email,
            submitting: false,
        }
    }
}

impl LoginPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Form with the email prefilled and the password focused.
    pub fn with_email(email: &str) -> Self {
        let mut page = Self::default();
        page.email.set_content(email);
        page.focus = LoginField::Password;
        page
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn focused_field_mut(&mut self) -> &mut InputField {
        match self.focus {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }

    /// Validate and mark submitting. The password is sent as typed.
    pub fn begin_submit(&mut self) -> Result<Option<LoginRequest>, ValidationError> {
        if self.submitting {
            return Ok(None);
        }
        let email = require(Field::Email, self.email.content())?;
        require(Field::Password, self.password.content())?;
        self.submitting = true;
        Ok(Some(LoginRequest {
            email,
            password: self.password.content().to_string(),
        }))
    }

    /// Re-enable the form; the password is cleared.
    pub fn submit_failed(&mut self) {
        self.submitting = false;
        self.password.clear();
        self.focus = LoginField::Password;
    }
}
