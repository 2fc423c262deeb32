//! Interaction state of one answer: acceptance, votes and its comment thread.

use crate::error::PermissionError;
use crate::models::{Answer, VoteOutcome, VoteRequest, VoteTally, VoteType};
use crate::session::Session;

use super::CommentThread;

#[derive(Debug, Clone)]
pub struct AnswerCard {
    answer: Answer,
    accepting: bool,
    /// Vote counts; unknown until read with a token.
    votes: Option<VoteTally>,
    voting: bool,
    pub comments: CommentThread,
}

impl AnswerCard {
    /// Wrap an answer, seeding the comment cache with its nested comments.
    pub fn new(mut answer: Answer) -> Self {
        let comments = CommentThread::seeded(std::mem::take(&mut answer.comments));
        Self {
            answer,
            accepting: false,
            votes: None,
            voting: false,
            comments,
        }
    }

    pub fn answer(&self) -> &Answer {
        &self.answer
    }

    pub fn id(&self) -> i64 {
        self.answer.id
    }

    pub fn is_accepting(&self) -> bool {
        self.accepting
    }

    /// Whether the accept control is shown for this session.
    pub fn can_accept(&self, session: &Session, question_owner: Option<i64>) -> bool {
        !self.answer.is_accepted && question_owner.is_some_and(|owner| session.is_owner_of(owner))
    }

    /// Guard and mark an accept request in flight.
    ///
    /// Returns the answer id to send, `Ok(None)` if nothing should be sent
    /// (already accepted or a request is pending), or a permission error
    /// for sessions that do not own the question.
    pub fn begin_accept(
        &mut self,
        session: &Session,
        question_owner: Option<i64>,
    ) -> Result<Option<i64>, PermissionError> {
        if !question_owner.is_some_and(|owner| session.is_owner_of(owner)) {
            return Err(PermissionError::NotQuestionOwner);
        }
        if self.accepting || self.answer.is_accepted {
            return Ok(None);
        }
        self.accepting = true;
        Ok(Some(self.answer.id))
    }

    /// Swap in the server's record, keeping the local comment thread.
    pub fn accept_succeeded(&mut self, mut answer: Answer) {
        self.accepting = false;
        answer.comments.clear();
        self.answer = answer;
    }

    pub fn accept_failed(&mut self) {
        self.accepting = false;
    }

    pub fn votes(&self) -> Option<&VoteTally> {
        self.votes.as_ref()
    }

    pub fn set_votes(&mut self, tally: VoteTally) {
        self.votes = Some(tally);
    }

    pub fn is_voting(&self) -> bool {
        self.voting
    }

    fn owned_by(&self, session: &Session) -> bool {
        self.answer
            .owner_id
            .is_some_and(|owner| session.is_owner_of(owner))
    }

    /// Whether the vote controls are shown for this session.
    pub fn can_vote(&self, session: &Session) -> bool {
        session.is_logged_in() && !self.owned_by(session)
    }

    /// Guard and mark a vote in flight. A pending vote yields `Ok(None)`.
    pub fn begin_vote(
        &mut self,
        session: &Session,
        vote_type: VoteType,
    ) -> Result<Option<VoteRequest>, PermissionError> {
        if !session.is_logged_in() {
            return Err(PermissionError::LoginRequired("Log in to vote"));
        }
        if self.owned_by(session) {
            return Err(PermissionError::OwnAnswer);
        }
        if self.voting {
            return Ok(None);
        }
        self.voting = true;
        Ok(Some(VoteRequest {
            answer_id: self.answer.id,
            vote_type,
        }))
    }

    /// Fold the server's verdict into the tally.
    pub fn vote_succeeded(&mut self, outcome: &VoteOutcome) {
        self.voting = false;
        self.votes
            .get_or_insert_with(VoteTally::default)
            .apply(outcome.vote_type);
    }

    pub fn vote_failed(&mut self) {
        self.voting = false;
    }
}
