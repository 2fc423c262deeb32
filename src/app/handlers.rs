//! Message handling for the App.

use crate::router::Route;
use crate::state::{LoginPage, Page};

use super::{App, AppMessage};

impl App {
    /// Apply the result of a spawned request.
    ///
    /// Page-bound results from a page that is no longer mounted are
    /// dropped. Every failure resets the pending flag it set and becomes one
    /// toast.
    pub async fn handle_message(&mut self, msg: AppMessage) {
        if msg.is_page_bound() && msg.generation() != self.generation {
            tracing::debug!(
                kind = msg.kind(),
                generation = msg.generation(),
                current = self.generation,
                "dropping result for unmounted page"
            );
            return;
        }
        self.mark_dirty();

        match msg {
            AppMessage::QuestionsLoaded { result, .. } => {
                let Page::Home(page) = &mut self.page else {
                    return;
                };
                match result {
                    Ok(questions) => {
                        tracing::debug!(count = questions.len(), "questions loaded");
                        page.loaded(questions);
                    }
                    Err(err) => {
                        page.load_failed();
                        self.notifications.report(&err, "Failed to load questions");
                    }
                }
            }
            AppMessage::QuestionLoaded { result, .. } => {
                let Page::Detail(page) = &mut self.page else {
                    return;
                };
                match result {
                    Ok(question) => {
                        page.loaded(question);
                        for answer_id in page.vote_targets() {
                            self.spawn_answer_votes(answer_id);
                        }
                    }
                    Err(err) => {
                        page.load_failed();
                        self.notifications.report(&err, "Failed to load question");
                    }
                }
            }
            AppMessage::QuestionCreated { result, .. } => match result {
                Ok(question) => {
                    tracing::info!(id = question.id, "question posted");
                    self.notifications.success("Question posted successfully!");
                    self.navigate(Route::Home).await;
                }
                Err(err) => {
                    if let Page::Ask(page) = &mut self.page {
                        page.submit_failed();
                    }
                    self.notifications
                        .report(&err, "Failed to post question. Please try again.");
                }
            },
            AppMessage::AnswerCreated { result, .. } => {
                let Page::Detail(page) = &mut self.page else {
                    return;
                };
                match result {
                    Ok(answer) => {
                        tracing::info!(id = answer.id, "answer posted");
                        page.answer_posted(answer);
                        self.notifications.success("Answer submitted successfully!");
                    }
                    Err(err) => {
                        page.answer_failed();
                        self.notifications
                            .report(&err, "Failed to submit answer. Please try again.");
                    }
                }
            }
            AppMessage::AnswerAccepted {
                answer_id, result, ..
            } => {
                let Page::Detail(page) = &mut self.page else {
                    return;
                };
                match result {
                    Ok(answer) => {
                        if !page.accept_succeeded(answer) {
                            tracing::warn!(answer_id, "accepted answer is no longer listed");
                        }
                        self.notifications.success("Answer accepted!");
                    }
                    Err(err) => {
                        page.accept_failed(answer_id);
                        self.notifications.report(&err, "Failed to accept answer");
                    }
                }
            }
            AppMessage::CommentsLoaded {
                answer_id, result, ..
            } => {
                let Page::Detail(page) = &mut self.page else {
                    return;
                };
                match result {
                    Ok(comments) => page.comments_loaded(answer_id, comments),
                    Err(err) => {
                        page.comments_failed(answer_id);
                        self.notifications.report(&err, "Failed to load comments");
                    }
                }
            }
            AppMessage::CommentCreated {
                answer_id, result, ..
            } => {
                let Page::Detail(page) = &mut self.page else {
                    return;
                };
                match result {
                    Ok(comment) => {
                        page.comment_posted(answer_id, comment);
                        self.notifications.success("Comment added!");
                    }
                    Err(err) => {
                        page.comment_failed(answer_id);
                        self.notifications.report(&err, "Failed to add comment");
                    }
                }
            }
            AppMessage::VotesLoaded {
                answer_id, result, ..
            } => {
                let Page::Detail(page) = &mut self.page else {
                    return;
                };
                match result {
                    Ok(tally) => page.votes_loaded(answer_id, tally),
                    Err(err) => {
                        tracing::warn!(answer_id, error = %err, "vote count read failed");
                        if page.votes_load_failed() {
                            self.notifications.report(&err, "Failed to load votes");
                        }
                    }
                }
            }
            AppMessage::VoteCast {
                answer_id, result, ..
            } => {
                let Page::Detail(page) = &mut self.page else {
                    return;
                };
                match result {
                    Ok(outcome) => {
                        tracing::info!(answer_id, vote = ?outcome.vote_type, "vote recorded");
                        page.vote_succeeded(answer_id, &outcome);
                    }
                    Err(err) => {
                        page.vote_failed(answer_id);
                        self.notifications.report(&err, "Failed to record vote");
                    }
                }
            }
            AppMessage::UnreadCountLoaded { result, .. } => match result {
                Ok(count) => self.navbar.set_unread(count.unread_count),
                Err(err) => {
                    tracing::warn!(error = %err, "unread count read failed");
                    self.notifications
                        .report(&err, "Failed to load notification count");
                }
            },
            AppMessage::NotificationsLoaded { result, .. } => {
                let Page::Inbox(page) = &mut self.page else {
                    return;
                };
                match result {
                    Ok(notifications) => {
                        tracing::debug!(count = notifications.len(), "notifications loaded");
                        page.loaded(notifications);
                        self.navbar.set_unread(page.unread());
                    }
                    Err(err) => {
                        page.load_failed();
                        self.notifications
                            .report(&err, "Failed to load notifications");
                    }
                }
            }
            AppMessage::NotificationRead { id, result, .. } => {
                let inbox = match &mut self.page {
                    Page::Inbox(page) => Some(page),
                    _ => None,
                };
                match result {
                    Ok(_) => {
                        if let Some(page) = inbox {
                            page.mark_read_succeeded(id);
                        }
                        self.navbar.read_one();
                    }
                    Err(err) => {
                        if let Some(page) = inbox {
                            page.mark_read_failed(id);
                        }
                        self.notifications
                            .report(&err, "Failed to mark notification as read");
                    }
                }
            }
            AppMessage::AllNotificationsRead { result, .. } => {
                let inbox = match &mut self.page {
                    Page::Inbox(page) => Some(page),
                    _ => None,
                };
                match result {
                    Ok(_) => {
                        if let Some(page) = inbox {
                            page.mark_all_succeeded();
                        }
                        self.navbar.set_unread(0);
                        self.notifications.success("All notifications marked as read");
                    }
                    Err(err) => {
                        if let Some(page) = inbox {
                            page.mark_all_failed();
                        }
                        self.notifications
                            .report(&err, "Failed to mark notifications as read");
                    }
                }
            }
            AppMessage::NotificationDeleted { id, result, .. } => {
                let Page::Inbox(page) = &mut self.page else {
                    return;
                };
                match result {
                    Ok(_) => {
                        if page.delete_succeeded(id).is_some_and(|n| !n.is_read) {
                            self.navbar.read_one();
                        }
                        self.notifications.success("Notification deleted");
                    }
                    Err(err) => {
                        page.delete_failed(id);
                        self.notifications
                            .report(&err, "Failed to delete notification");
                    }
                }
            }
            AppMessage::LoggedIn { result, .. } => match result {
                Ok(session) => {
                    tracing::info!(user_id = ?session.user_id, "logged in");
                    self.apply_session(session);
                    self.notifications.success("Logged in successfully!");
                    self.navigate(Route::Home).await;
                    self.refresh_unread();
                }
                Err(err) => {
                    if let Page::Login(page) = &mut self.page {
                        page.submit_failed();
                    }
                    self.notifications
                        .report(&err, "Login failed. Please check your credentials.");
                }
            },
            AppMessage::Registered { result, .. } => match result {
                Ok(user) => {
                    tracing::info!(user_id = user.id, "registered");
                    self.notifications
                        .success("Registration successful! Please log in.");
                    self.navigate(Route::Login).await;
                    self.page = Page::Login(LoginPage::with_email(&user.email));
                }
                Err(err) => {
                    if let Page::Register(page) = &mut self.page {
                        page.submit_failed();
                    }
                    self.notifications
                        .report(&err, "Registration failed. Please try again.");
                }
            },
        }
    }
}
