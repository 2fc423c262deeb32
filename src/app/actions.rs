//! User actions that issue requests.
//!
//! Each action validates through the mounted page controller first; only
//! when the controller hands back a request body is a task spawned.

use std::future::Future;

use crate::error::StackitError;
use crate::models::VoteType;
use crate::router::Route;
use crate::session::Session;
use crate::state::{DetailFocus, Page};

use super::{App, AppMessage};

impl App {
    /// Run `request` off the event loop and feed its message back.
    fn spawn<F>(&self, request: F)
    where
        F: Future<Output = AppMessage> + Send + 'static,
    {
        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            let message = request.await;
            tracing::debug!(kind = message.kind(), "request finished");
            // The receiver is gone only while shutting down
            let _ = message_tx.send(message);
        });
    }

    pub(super) fn spawn_list_questions(&self) {
        let client = self.client.clone();
        let generation = self.generation;
        self.spawn(async move {
            AppMessage::QuestionsLoaded {
                generation,
                result: client.list_questions().await,
            }
        });
    }

    pub(super) fn spawn_get_question(&self, id: i64) {
        let client = self.client.clone();
        let generation = self.generation;
        self.spawn(async move {
            AppMessage::QuestionLoaded {
                generation,
                result: client.get_question(id).await,
            }
        });
    }

    fn spawn_list_comments(&self, answer_id: i64) {
        let client = self.client.clone();
        let generation = self.generation;
        self.spawn(async move {
            AppMessage::CommentsLoaded {
                generation,
                answer_id,
                result: client.list_comments(answer_id).await,
            }
        });
    }

    pub(super) fn spawn_answer_votes(&self, answer_id: i64) {
        let client = self.client.clone();
        let generation = self.generation;
        self.spawn(async move {
            AppMessage::VotesLoaded {
                generation,
                answer_id,
                result: client.answer_votes(answer_id).await,
            }
        });
    }

    pub(super) fn spawn_list_notifications(&self) {
        let client = self.client.clone();
        let generation = self.generation;
        self.spawn(async move {
            AppMessage::NotificationsLoaded {
                generation,
                result: client.list_notifications().await,
            }
        });
    }

    /// Re-read the navbar's unread badge. No-op when logged out.
    pub fn refresh_unread(&self) {
        if !self.session.is_logged_in() {
            return;
        }
        let client = self.client.clone();
        let generation = self.generation;
        self.spawn(async move {
            AppMessage::UnreadCountLoaded {
                generation,
                result: client.unread_count().await,
            }
        });
    }

    fn spawn_mark_read(&self, id: i64) {
        tracing::info!(id, "marking notification read");
        let client = self.client.clone();
        let generation = self.generation;
        self.spawn(async move {
            AppMessage::NotificationRead {
                generation,
                id,
                result: client.mark_notification_read(id).await,
            }
        });
    }

    /// Submit the ask form.
    pub fn submit_question(&mut self) {
        let outcome = match &mut self.page {
            Page::Ask(page) => page.begin_submit(),
            _ => return,
        };
        match outcome {
            Ok(Some(question)) => {
                tracing::info!(title = %question.title, "posting question");
                let client = self.client.clone();
                let generation = self.generation;
                self.spawn(async move {
                    AppMessage::QuestionCreated {
                        generation,
                        result: client.create_question(&question).await,
                    }
                });
            }
            Ok(None) => {}
            Err(err) => self
                .notifications
                .report(&err.into(), "Failed to post question. Please try again."),
        }
    }

    /// Submit the answer editor on the detail page.
    pub fn submit_answer(&mut self) {
        let (question_id, outcome) = match &mut self.page {
            Page::Detail(page) => (page.question_id, page.begin_answer()),
            _ => return,
        };
        match outcome {
            Ok(Some(answer)) => {
                tracing::info!(question_id, "posting answer");
                let client = self.client.clone();
                let generation = self.generation;
                self.spawn(async move {
                    AppMessage::AnswerCreated {
                        generation,
                        result: client.create_answer(question_id, &answer).await,
                    }
                });
            }
            Ok(None) => {}
            Err(err) => self
                .notifications
                .report(&err, "Failed to submit answer. Please try again."),
        }
    }

    /// Accept the selected answer.
    pub fn accept_selected(&mut self) {
        let outcome = match &mut self.page {
            Page::Detail(page) => page.begin_accept_selected(),
            _ => return,
        };
        match outcome {
            Ok(Some(answer_id)) => {
                tracing::info!(answer_id, "accepting answer");
                let client = self.client.clone();
                let generation = self.generation;
                self.spawn(async move {
                    AppMessage::AnswerAccepted {
                        generation,
                        answer_id,
                        result: client.accept_answer(answer_id).await,
                    }
                });
            }
            Ok(None) => {}
            Err(err) => self
                .notifications
                .report(&err.into(), "Failed to accept answer"),
        }
    }

    /// Vote on the selected answer. Repeating the current vote removes it.
    pub fn vote_selected(&mut self, vote_type: VoteType) {
        let outcome = match &mut self.page {
            Page::Detail(page) => page.begin_vote_selected(vote_type),
            _ => return,
        };
        match outcome {
            Ok(Some(vote)) => {
                tracing::info!(answer_id = vote.answer_id, vote = ?vote.vote_type, "voting");
                let client = self.client.clone();
                let generation = self.generation;
                self.spawn(async move {
                    AppMessage::VoteCast {
                        generation,
                        answer_id: vote.answer_id,
                        result: client.cast_vote(&vote).await,
                    }
                });
            }
            Ok(None) => {}
            Err(err) => self.notifications.report(&err.into(), "Failed to record vote"),
        }
    }

    /// Mark the highlighted notification read and open its question.
    pub async fn open_selected_notification(&mut self) {
        let Page::Inbox(page) = &mut self.page else {
            return;
        };
        let mark = page.begin_mark_read();
        let target = page
            .selected_notification()
            .and_then(|n| n.related_question_id);
        if let Some(id) = mark {
            self.spawn_mark_read(id);
        }
        if let Some(question_id) = target {
            self.navigate(Route::Question(question_id)).await;
        }
    }

    /// Mark the highlighted notification read.
    pub fn mark_selected_read(&mut self) {
        let mark = match &mut self.page {
            Page::Inbox(page) => page.begin_mark_read(),
            _ => return,
        };
        if let Some(id) = mark {
            self.spawn_mark_read(id);
        }
    }

    pub fn mark_all_read(&mut self) {
        let begin = match &mut self.page {
            Page::Inbox(page) => page.begin_mark_all(),
            _ => return,
        };
        if !begin {
            return;
        }
        tracing::info!("marking all notifications read");
        let client = self.client.clone();
        let generation = self.generation;
        self.spawn(async move {
            AppMessage::AllNotificationsRead {
                generation,
                result: client.mark_all_notifications_read().await,
            }
        });
    }

    pub fn delete_selected_notification(&mut self) {
        let delete = match &mut self.page {
            Page::Inbox(page) => page.begin_delete(),
            _ => return,
        };
        let Some(id) = delete else {
            return;
        };
        tracing::info!(id, "deleting notification");
        let client = self.client.clone();
        let generation = self.generation;
        self.spawn(async move {
            AppMessage::NotificationDeleted {
                generation,
                id,
                result: client.delete_notification(id).await,
            }
        });
    }

    /// Show or hide the selected answer's comments, fetching on first open.
    pub fn toggle_comments(&mut self) {
        let fetch = match &mut self.page {
            Page::Detail(page) => page.toggle_selected_comments(),
            _ => return,
        };
        if let Some(answer_id) = fetch {
            self.spawn_list_comments(answer_id);
        }
    }

    /// Focus the answer editor, or explain why it is unavailable.
    pub fn start_answer(&mut self) {
        let outcome = match &mut self.page {
            Page::Detail(page) => page.start_answer(),
            _ => return,
        };
        if let Err(err) = outcome {
            self.notifications.report(&err.into(), "");
        }
    }

    /// Focus the comment editor of the selected answer.
    pub fn start_comment(&mut self) {
        let outcome = match &mut self.page {
            Page::Detail(page) => page.start_comment(),
            _ => return,
        };
        match outcome {
            Ok(Some(answer_id)) => self.spawn_list_comments(answer_id),
            Ok(None) => {}
            Err(err) => self.notifications.report(&err.into(), ""),
        }
    }

    /// Post the selected answer's comment draft.
    pub fn submit_comment(&mut self) {
        let outcome = match &mut self.page {
            Page::Detail(page) => page.begin_comment(),
            _ => return,
        };
        match outcome {
            Ok(Some((answer_id, comment))) => {
                tracing::info!(answer_id, "posting comment");
                let client = self.client.clone();
                let generation = self.generation;
                self.spawn(async move {
                    AppMessage::CommentCreated {
                        generation,
                        answer_id,
                        result: client.create_comment(answer_id, &comment).await,
                    }
                });
            }
            Ok(None) => {}
            Err(err) => self.notifications.report(&err, "Failed to add comment"),
        }
    }

    /// Log in, look up the user and persist the session.
    pub fn submit_login(&mut self) {
        let outcome = match &mut self.page {
            Page::Login(page) => page.begin_submit(),
            _ => return,
        };
        let request = match outcome {
            Ok(Some(request)) => request,
            Ok(None) => return,
            Err(err) => {
                self.notifications.report(&err.into(), "");
                return;
            }
        };

        tracing::info!("logging in");
        let client = self.client.clone();
        let store = self.session_store.clone();
        let generation = self.generation;
        self.spawn(async move {
            let result = async {
                let token = client.login(&request).await?;
                let user = client.with_auth(&token.access_token).me().await?;
                let session = Session::new(token.access_token, user.id);
                store.save(&session).await.map_err(StackitError::from)?;
                Ok::<_, StackitError>(session)
            }
            .await;
            AppMessage::LoggedIn { generation, result }
        });
    }

    /// Create an account.
    pub fn submit_register(&mut self) {
        let outcome = match &mut self.page {
            Page::Register(page) => page.begin_submit(),
            _ => return,
        };
        match outcome {
            Ok(Some(request)) => {
                tracing::info!(username = %request.username, "registering");
                let client = self.client.clone();
                let generation = self.generation;
                self.spawn(async move {
                    AppMessage::Registered {
                        generation,
                        result: client.register(&request).await,
                    }
                });
            }
            Ok(None) => {}
            Err(err) => self.notifications.report(&err.into(), ""),
        }
    }

    /// Submit whatever form or editor has focus.
    pub fn submit_focused(&mut self) {
        match &self.page {
            Page::Ask(_) => self.submit_question(),
            Page::Login(_) => self.submit_login(),
            Page::Register(_) => self.submit_register(),
            Page::Detail(page) => match page.focus {
                DetailFocus::AnswerEditor => self.submit_answer(),
                DetailFocus::CommentEditor => self.submit_comment(),
                DetailFocus::Answers => {}
            },
            Page::Home(_) | Page::Inbox(_) => {}
        }
    }
}
