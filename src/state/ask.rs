//! Ask-a-question form.

use crate::error::{require, Field, ValidationError};
use crate::html::text_to_html;
use crate::models::NewQuestion;
use crate::widgets::InputField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AskField {
    #[default]
    Title,
    Tags,
    Description,
}

impl AskField {
    pub fn next(self) -> Self {
        match self {
            AskField::Title => AskField::Tags,
            AskField::Tags => AskField::Description,
            AskField::Description => AskField::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            AskField::Title => AskField::Description,
            AskField::Tags => AskField::Title,
            AskField::Description => AskField::Tags,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AskPage {
    pub title: InputField,
    pub tags: InputField,
    pub description: InputField,
    pub focus: AskField,
    submitting: bool,
}

impl Default for AskPage {
    fn default() -> Self {
        Self {
            title: InputField::new(),
            tags: InputField::new(),
            description: InputField::multiline(),
            focus: AskField::Title,
            submitting: false,
        }
    }
}

impl AskPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn focused_field_mut(&mut self) -> &mut InputField {
        match self.focus {
            AskField::Title => &mut self.title,
            AskField::Tags => &mut self.tags,
            AskField::Description => &mut self.description,
        }
    }

    /// Validate the form and mark it submitting.
    ///
    /// Title is checked before description so a failed submit reports one
    /// problem. `Ok(None)` means a submission is already in flight.
    pub fn begin_submit(&mut self) -> Result<Option<NewQuestion>, ValidationError> {
        if self.submitting {
            return Ok(None);
        }
        let title = require(Field::Title, self.title.content())?;
        let description = require(Field::Description, self.description.content())?;
        self.submitting = true;
        Ok(Some(NewQuestion {
            title,
            tags: self.tags.trimmed().to_string(),
            description: text_to_html(&description),
        }))
    }

    /// Re-enable the form, keeping what was typed.
    pub fn submit_failed(&mut self) {
        self.submitting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_checked_first() {
        let mut page = AskPage::new();
        assert_eq!(
            page.begin_submit(),
            Err(ValidationError::Required(Field::Title))
        );

        page.title.set_content("Why?");
        assert_eq!(
            page.begin_submit(),
            Err(ValidationError::Required(Field::Description))
        );
        assert!(!page.is_submitting());
    }

    #[test]
    fn test_submit_body() {
        let mut page = AskPage::new();
        page.title.set_content("  Why?  ");
        page.tags.set_content(" go, rust ");
        page.description.set_content("x");

        let body = page.begin_submit().unwrap().unwrap();
        assert_eq!(body.title, "Why?");
        assert_eq!(body.tags, "go, rust");
        assert_eq!(body.description, "<p>x</p>");
        assert!(page.is_submitting());
        assert_eq!(page.begin_submit(), Ok(None));
    }

    #[test]
    fn test_failure_keeps_content() {
        let mut page = AskPage::new();
        page.title.set_content("t");
        page.description.set_content("d");
        page.begin_submit().unwrap();
        page.submit_failed();

        assert!(!page.is_submitting());
        assert_eq!(page.title.content(), "t");
    }

    #[test]
    fn test_focus_cycle() {
        assert_eq!(AskField::Title.next().next().next(), AskField::Title);
        assert_eq!(AskField::Title.prev(), AskField::Description);
    }
}
