//! Permission errors raised by client-side guards.

use std::fmt;

/// Actions refused locally because the session may not perform them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionError {
    /// Only the owner of the question may accept one of its answers.
    NotQuestionOwner,
    /// Nobody may vote on their own answer.
    OwnAnswer,
    /// The action needs a logged-in session; carries the prompt to show.
    LoginRequired(&'static str),
}

impl PermissionError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            PermissionError::NotQuestionOwner => {
                "Only the question owner can accept answers".to_string()
            }
            PermissionError::OwnAnswer => "You cannot vote on your own answer".to_string(),
            PermissionError::LoginRequired(prompt) => prompt.to_string(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            PermissionError::NotQuestionOwner => "E_PERM_OWNER",
            PermissionError::OwnAnswer => "E_PERM_OWN_ANSWER",
            PermissionError::LoginRequired(_) => "E_PERM_LOGIN",
        }
    }
}

impl fmt::Display for PermissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PermissionError::NotQuestionOwner => write!(f, "caller does not own the question"),
            PermissionError::OwnAnswer => write!(f, "caller owns the answer"),
            PermissionError::LoginRequired(_) => write!(f, "no session token"),
        }
    }
}

impl std::error::Error for PermissionError {}
