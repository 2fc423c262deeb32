//! Inbox page: the logged-in user's notifications.

use crate::models::Notification;
use crate::session::Session;

use super::PageLoad;

#[derive(Debug, Clone, Default)]
pub struct InboxPage {
    logged_in: bool,
    pub load: PageLoad<Vec<Notification>>,
    /// Index of the highlighted notification
    pub selected: usize,
    /// Vertical scroll offset in lines, kept by the renderer
    pub scroll: u16,
    /// Notifications with a read or delete request in flight
    pending: Vec<i64>,
    marking_all: bool,
}

impl InboxPage {
    pub fn new(session: &Session) -> Self {
        Self {
            logged_in: session.is_logged_in(),
            ..Self::default()
        }
    }

    /// Anonymous sessions get a login prompt instead of a fetch.
    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn loaded(&mut self, notifications: Vec<Notification>) {
        self.selected = self.selected.min(notifications.len().saturating_sub(1));
        self.load = PageLoad::Ready(notifications);
    }

    pub fn load_failed(&mut self) {
        self.load = PageLoad::Failed;
    }

    pub fn notifications(&self) -> &[Notification] {
        self.load.ready().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.load.ready().is_some_and(Vec::is_empty)
    }

    pub fn unread(&self) -> u32 {
        self.notifications().iter().filter(|n| !n.is_read).count() as u32
    }

    pub fn is_pending(&self, id: i64) -> bool {
        self.pending.contains(&id)
    }

    pub fn is_marking_all(&self) -> bool {
        self.marking_all
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.notifications().len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_notification(&self) -> Option<&Notification> {
        self.notifications().get(self.selected)
    }

    fn find_mut(&mut self, id: i64) -> Option<&mut Notification> {
        self.load
            .ready_mut()
            .and_then(|list| list.iter_mut().find(|n| n.id == id))
    }

    /// Mark the selected notification's read request in flight.
    ///
    /// `None` when it is already read or a request for it is pending.
    pub fn begin_mark_read(&mut self) -> Option<i64> {
        let id = self
            .selected_notification()
            .filter(|n| !n.is_read)
            .map(|n| n.id)?;
        if self.is_pending(id) {
            return None;
        }
        self.pending.push(id);
        Some(id)
    }

    pub fn mark_read_succeeded(&mut self, id: i64) {
        self.pending.retain(|p| *p != id);
        if let Some(n) = self.find_mut(id) {
            n.is_read = true;
        }
    }

    pub fn mark_read_failed(&mut self, id: i64) {
        self.pending.retain(|p| *p != id);
    }

    /// Returns false when nothing is unread or the request is pending.
    pub fn begin_mark_all(&mut self) -> bool {
        if self.marking_all || self.unread() == 0 {
            return false;
        }
        self.marking_all = true;
        true
    }

    pub fn mark_all_succeeded(&mut self) {
        self.marking_all = false;
        if let Some(list) = self.load.ready_mut() {
            list.iter_mut().for_each(|n| n.is_read = true);
        }
    }

    pub fn mark_all_failed(&mut self) {
        self.marking_all = false;
    }

    pub fn begin_delete(&mut self) -> Option<i64> {
        let id = self.selected_notification()?.id;
        if self.is_pending(id) {
            return None;
        }
        self.pending.push(id);
        Some(id)
    }

    /// Drop the notification from the list and return it.
    pub fn delete_succeeded(&mut self, id: i64) -> Option<Notification> {
        self.pending.retain(|p| *p != id);
        let list = self.load.ready_mut()?;
        let index = list.iter().position(|n| n.id == id)?;
        let removed = list.remove(index);
        let len = list.len();
        self.selected = self.selected.min(len.saturating_sub(1));
        Some(removed)
    }

    pub fn delete_failed(&mut self, id: i64) {
        self.pending.retain(|p| *p != id);
    }
}
