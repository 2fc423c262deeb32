//! Answer votes.

use serde::{Deserialize, Serialize};

/// Direction of a vote, serialised as `"upvote"` / `"downvote"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteType {
    Upvote,
    Downvote,
}

/// Body of `POST /votes/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VoteRequest {
    pub answer_id: i64,
    pub vote_type: VoteType,
}

/// Response of `POST /votes/`.
///
/// Repeating the caller's current vote removes it, which comes back as a
/// `null` vote type; a different type switches the vote.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VoteOutcome {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub vote_type: Option<VoteType>,
}

/// Response of `GET /votes/answer/{id}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct VoteTally {
    #[serde(default)]
    pub upvotes: u32,
    #[serde(default)]
    pub downvotes: u32,
    #[serde(default)]
    pub net_votes: i64,
    /// The caller's own vote on the answer.
    #[serde(default)]
    pub user_vote: Option<VoteType>,
}

impl VoteTally {
    /// Move the caller's vote to `vote`, keeping the counts consistent.
    pub fn apply(&mut self, vote: Option<VoteType>) {
        match self.user_vote {
            Some(VoteType::Upvote) => self.upvotes = self.upvotes.saturating_sub(1),
            Some(VoteType::Downvote) => self.downvotes = self.downvotes.saturating_sub(1),
            None => {}
        }
        match vote {
            Some(VoteType::Upvote) => self.upvotes += 1,
            Some(VoteType::Downvote) => self.downvotes += 1,
            None => {}
        }
        self.user_vote = vote;
        self.net_votes = i64::from(self.upvotes) - i64::from(self.downvotes);
    }
}
