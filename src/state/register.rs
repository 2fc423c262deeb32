//! Registration form.

use crate::error::{require, Field, ValidationError};
use crate::models::RegisterRequest;
use crate::widgets::InputField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegisterField {
    #[default]
    Username,
    Email,
    Password,
}

impl RegisterField {
    pub fn next(self) -> Self {
        match self {
            RegisterField::Username => RegisterField::Email,
            RegisterField::Email => RegisterField::Password,
            RegisterField::Password => RegisterField::Username,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegisterPage {
    pub username: InputField,
    pub email: InputField,
    pub password: InputField,
    pub focus: RegisterField,
    submitting: bool,
}

impl Default for RegisterPage {
    fn default() -> Self {
        Self {
            username: InputField::new(),
            email: InputField::new(),
            password: InputField::masked(),
            focus: RegisterField::Username,
            submitting: false,
        }
    }
}

impl RegisterPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn focused_field_mut(&mut self) -> &mut InputField {
        match self.focus {
            RegisterField::Username => &mut self.username,
            RegisterField::Email => &mut self.email,
            RegisterField::Password => &mut self.password,
        }
    }

    pub fn begin_submit(&mut self) -> Result<Option<RegisterRequest>, ValidationError> {
        if self.submitting {
            return Ok(None);
        }
        let username = require(Field::Username, self.username.content())?;
        let email = require(Field::Email, self.email.content())?;
        require(Field::Password, self.password.content())?;
        self.submitting = true;
        Ok(Some(RegisterRequest {
            username,
            email,
            password: self.password.content().to_string(),
        }))
    }

    pub fn submit_failed(&mut self) {
        self.submitting = false;
    }
}
