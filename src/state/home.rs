//! Home page: the list of recent questions.

use crate::models::Question;

use super::PageLoad;

#[derive(Debug, Clone, Default)]
pub struct HomePage {
    pub load: PageLoad<Vec<Question>>,
    /// Index of the highlighted question
    pub selected: usize,
    /// Vertical scroll offset in lines, kept by the renderer
    pub scroll: u16,
}

impl HomePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loaded(&mut self, questions: Vec<Question>) {
        self.selected = self.selected.min(questions.len().saturating_sub(1));
        self.load = PageLoad::Ready(questions);
    }

    pub fn load_failed(&mut self) {
        self.load = PageLoad::Failed;
    }

    pub fn questions(&self) -> &[Question] {
        self.load.ready().map(Vec::as_slice).unwrap_or_default()
    }

    /// True once loaded with nothing to show.
    pub fn is_empty(&self) -> bool {
        self.load.ready().is_some_and(Vec::is_empty)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.questions().len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_question_id(&self) -> Option<i64> {
        self.questions().get(self.selected).map(|q| q.id)
    }
}
