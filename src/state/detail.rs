//! Question detail page: the question, its answer cards and the answer
//! editor.

use crate::error::{require, Field, PermissionError, StackitResult};
use crate::html::text_to_html;
use crate::models::{
    Answer, Comment, NewAnswer, NewComment, Question, VoteOutcome, VoteRequest, VoteTally,
    VoteType,
};
use crate::session::Session;
use crate::widgets::InputField;

use super::{AnswerCard, PageLoad};

/// What keyboard input on the detail page goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailFocus {
    /// Navigating answer cards
    #[default]
    Answers,
    /// Typing a new answer
    AnswerEditor,
    /// Typing a comment on the selected card
    CommentEditor,
}

/// A loaded question with its answers split into interactive cards.
#[derive(Debug, Clone)]
pub struct QuestionDetail {
    /// The question; its `answers` list is moved into `cards`.
    pub question: Question,
    pub cards: Vec<AnswerCard>,
}

impl QuestionDetail {
    pub fn new(mut question: Question) -> Self {
        let cards = std::mem::take(&mut question.answers)
            .into_iter()
            .map(AnswerCard::new)
            .collect();
        Self { question, cards }
    }

    pub fn answer_count(&self) -> usize {
        self.cards.len()
    }

    pub fn card(&self, answer_id: i64) -> Option<&AnswerCard> {
        self.cards.iter().find(|c| c.id() == answer_id)
    }

    pub fn card_mut(&mut self, answer_id: i64) -> Option<&mut AnswerCard> {
        self.cards.iter_mut().find(|c| c.id() == answer_id)
    }
}

#[derive(Debug, Clone)]
pub struct QuestionDetailPage {
    pub question_id: i64,
    pub session: Session,
    pub load: PageLoad<QuestionDetail>,
    pub answer_draft: InputField,
    submitting_answer: bool,
    /// Index of the selected answer card
    pub selected: usize,
    pub focus: DetailFocus,
    /// Vertical scroll offset in lines
    pub scroll: u16,
    /// Whether the renderer should scroll the selected card into view
    pub follow_selection: bool,
    /// Set once a vote count read has failed and been reported
    votes_failed: bool,
}

impl QuestionDetailPage {
    pub fn new(question_id: i64, session: Session) -> Self {
        Self {
            question_id,
            session,
            load: PageLoad::Loading,
            answer_draft: InputField::multiline(),
            submitting_answer: false,
            selected: 0,
            focus: DetailFocus::Answers,
            scroll: 0,
            follow_selection: true,
            votes_failed: false,
        }
    }

    pub fn loaded(&mut self, question: Question) {
        self.load = PageLoad::Ready(QuestionDetail::new(question));
        self.selected = 0;
    }

    pub fn load_failed(&mut self) {
        self.load = PageLoad::Failed;
    }

    pub fn detail(&self) -> Option<&QuestionDetail> {
        self.load.ready()
    }

    fn owner_id(&self) -> Option<i64> {
        self.detail().and_then(|d| d.question.owner_id)
    }

    pub fn answer_count(&self) -> usize {
        self.detail().map_or(0, QuestionDetail::answer_count)
    }

    pub fn is_submitting_answer(&self) -> bool {
        self.submitting_answer
    }

    pub fn selected_card(&self) -> Option<&AnswerCard> {
        self.detail().and_then(|d| d.cards.get(self.selected))
    }

    fn selected_card_mut(&mut self) -> Option<&mut AnswerCard> {
        let selected = self.selected;
        self.load.ready_mut().and_then(|d| d.cards.get_mut(selected))
    }

    fn card_mut(&mut self, answer_id: i64) -> Option<&mut AnswerCard> {
        self.load.ready_mut().and_then(|d| d.card_mut(answer_id))
    }

    pub fn select_next(&mut self) {
        let count = self.answer_count();
        if count > 0 && self.selected + 1 < count {
            self.selected += 1;
        }
        self.follow_selection = true;
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.follow_selection = true;
    }

    /// Manual scroll; selection stops pulling the view until it moves.
    pub fn scroll_by(&mut self, lines: i32) {
        let next = (self.scroll as i32 + lines).clamp(0, u16::MAX as i32);
        self.scroll = next as u16;
        self.follow_selection = false;
    }

    /// Whether the accept control shows on the card at `index`.
    pub fn can_accept(&self, index: usize) -> bool {
        self.detail()
            .and_then(|d| d.cards.get(index))
            .is_some_and(|card| card.can_accept(&self.session, self.owner_id()))
    }

    /// Guard an accept on the selected card; see [`AnswerCard::begin_accept`].
    pub fn begin_accept_selected(&mut self) -> Result<Option<i64>, PermissionError> {
        let session = self.session.clone();
        let owner = self.owner_id();
        match self.selected_card_mut() {
            Some(card) => card.begin_accept(&session, owner),
            None => Ok(None),
        }
    }

    /// Replace the answer with the same id. No-op if it is not listed.
    pub fn accept_succeeded(&mut self, answer: Answer) -> bool {
        match self.card_mut(answer.id) {
            Some(card) => {
                card.accept_succeeded(answer);
                true
            }
            None => false,
        }
    }

    pub fn accept_failed(&mut self, answer_id: i64) {
        if let Some(card) = self.card_mut(answer_id) {
            card.accept_failed();
        }
    }

    /// Ids of the answers whose vote counts this session can read.
    ///
    /// Empty for anonymous sessions; the tally route needs a token.
    pub fn vote_targets(&self) -> Vec<i64> {
        if !self.session.is_logged_in() {
            return Vec::new();
        }
        self.detail()
            .map(|d| d.cards.iter().map(AnswerCard::id).collect())
            .unwrap_or_default()
    }

    /// Whether the vote controls show on the card at `index`.
    pub fn can_vote(&self, index: usize) -> bool {
        self.detail()
            .and_then(|d| d.cards.get(index))
            .is_some_and(|card| card.can_vote(&self.session))
    }

    /// Guard a vote on the selected card; see [`AnswerCard::begin_vote`].
    pub fn begin_vote_selected(
        &mut self,
        vote_type: VoteType,
    ) -> Result<Option<VoteRequest>, PermissionError> {
        let session = self.session.clone();
        match self.selected_card_mut() {
            Some(card) => card.begin_vote(&session, vote_type),
            None => Ok(None),
        }
    }

    pub fn votes_loaded(&mut self, answer_id: i64, tally: VoteTally) {
        if let Some(card) = self.card_mut(answer_id) {
            card.set_votes(tally);
        }
    }

    /// True for the first failed count read only, so one outage is one
    /// toast however many answers there are.
    pub fn votes_load_failed(&mut self) -> bool {
        !std::mem::replace(&mut self.votes_failed, true)
    }

    pub fn vote_succeeded(&mut self, answer_id: i64, outcome: &VoteOutcome) {
        if let Some(card) = self.card_mut(answer_id) {
            card.vote_succeeded(outcome);
        }
    }

    pub fn vote_failed(&mut self, answer_id: i64) {
        if let Some(card) = self.card_mut(answer_id) {
            card.vote_failed();
        }
    }

    /// Toggle the selected card's comments. Returns an answer id to fetch.
    pub fn toggle_selected_comments(&mut self) -> Option<i64> {
        let card = self.selected_card_mut()?;
        card.comments.toggle().then(|| card.id())
    }

    pub fn comments_loaded(&mut self, answer_id: i64, comments: Vec<Comment>) {
        if let Some(card) = self.card_mut(answer_id) {
            card.comments.load_succeeded(comments);
        }
    }

    pub fn comments_failed(&mut self, answer_id: i64) {
        if let Some(card) = self.card_mut(answer_id) {
            card.comments.load_failed();
        }
    }

    /// Whether the comment editor can take focus on the selected card.
    pub fn can_comment(&self) -> bool {
        self.session.is_logged_in()
            && self
                .selected_card()
                .is_some_and(|c| c.comments.is_expanded() && !c.comments.is_loading())
    }

    /// Validate the selected card's comment draft.
    ///
    /// `Ok(None)` while the thread is collapsed or its comments are still
    /// loading, so a post never races the first read.
    pub fn begin_comment(&mut self) -> StackitResult<Option<(i64, NewComment)>> {
        if !self.session.is_logged_in() {
            return Err(PermissionError::LoginRequired("Log in to add a comment").into());
        }
        if !self.can_comment() {
            return Ok(None);
        }
        let Some(card) = self.selected_card_mut() else {
            return Ok(None);
        };
        let id = card.id();
        Ok(card.comments.begin_post()?.map(|body| (id, body)))
    }

    pub fn comment_posted(&mut self, answer_id: i64, comment: Comment) {
        if let Some(card) = self.card_mut(answer_id) {
            card.comments.post_succeeded(comment);
        }
    }

    pub fn comment_failed(&mut self, answer_id: i64) {
        if let Some(card) = self.card_mut(answer_id) {
            card.comments.post_failed();
        }
    }

    /// Validate the answer draft and mark the submission in flight.
    ///
    /// The draft is sent as paragraph HTML. `Ok(None)` means a submission is
    /// already pending or the question is not loaded.
    pub fn begin_answer(&mut self) -> StackitResult<Option<NewAnswer>> {
        if !self.session.is_logged_in() {
            return Err(PermissionError::LoginRequired("Please log in to post an answer.").into());
        }
        if self.submitting_answer || self.detail().is_none() {
            return Ok(None);
        }
        let text = require(Field::Answer, self.answer_draft.content())?;
        self.submitting_answer = true;
        Ok(Some(NewAnswer {
            content: text_to_html(&text),
        }))
    }

    /// Append the new answer as a card and clear the editor.
    pub fn answer_posted(&mut self, answer: Answer) {
        self.submitting_answer = false;
        if let Some(detail) = self.load.ready_mut() {
            let mut card = AnswerCard::new(answer);
            card.set_votes(VoteTally::default());
            detail.cards.push(card);
        }
        self.answer_draft.clear();
        self.focus = DetailFocus::Answers;
    }

    pub fn answer_failed(&mut self) {
        self.submitting_answer = false;
    }

    /// Field receiving keystrokes for the current focus.
    pub fn focused_input_mut(&mut self) -> Option<&mut InputField> {
        match self.focus {
            DetailFocus::Answers => None,
            DetailFocus::AnswerEditor => Some(&mut self.answer_draft),
            DetailFocus::CommentEditor => self.selected_card_mut().map(|c| &mut c.comments.draft),
        }
    }

    /// Focus the answer editor.
    pub fn start_answer(&mut self) -> Result<(), PermissionError> {
        if !self.session.is_logged_in() {
            return Err(PermissionError::LoginRequired("Please log in to post an answer."));
        }
        if self.detail().is_some() {
            self.focus = DetailFocus::AnswerEditor;
        }
        Ok(())
    }

    /// Focus the selected card's comment editor, expanding its thread first.
    ///
    /// Returns an answer id whose comments must be fetched.
    pub fn start_comment(&mut self) -> Result<Option<i64>, PermissionError> {
        if !self.session.is_logged_in() {
            return Err(PermissionError::LoginRequired("Log in to add a comment"));
        }
        let Some(card) = self.selected_card_mut() else {
            return Ok(None);
        };
        let fetch = card.comments.expand().then(|| card.id());
        self.focus = DetailFocus::CommentEditor;
        Ok(fetch)
    }
}
