//! Notification feed with read tracking and category chips

use shared::{Notification, NotificationKind};

/// Quick-action chips above the feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationFilter {
    #[default]
    All,
    Orders,
    Offers,
    Impact,
    Achievements,
}

impl NotificationFilter {
    pub fn all() -> &'static [NotificationFilter] {
        &[
            NotificationFilter::All,
            NotificationFilter::Orders,
            NotificationFilter::Offers,
            NotificationFilter::Impact,
            NotificationFilter::Achievements,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            NotificationFilter::All => "All",
            NotificationFilter::Orders => "Orders",
            NotificationFilter::Offers => "Offers",
            NotificationFilter::Impact => "Impact",
            NotificationFilter::Achievements => "Achievements",
        }
    }

    pub fn accepts(&self, kind: NotificationKind) -> bool {
        match self {
            NotificationFilter::All => true,
            NotificationFilter::Orders => kind == NotificationKind::Order,
            NotificationFilter::Offers => kind == NotificationKind::Offer,
            NotificationFilter::Impact => kind == NotificationKind::Impact,
            NotificationFilter::Achievements => kind == NotificationKind::Achievement,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NotificationFeed {
    items: Vec<Notification>,
    pub filter: NotificationFilter,
}

impl NotificationFeed {
    pub fn new(items: Vec<Notification>) -> Self {
        Self {
            items,
            filter: NotificationFilter::All,
        }
    }

    /// Notifications passing the active filter, newest first as stored
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter().filter(|n| self.filter.accepts(n.kind))
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    /// Header line, empty when everything is read
    pub fn unread_summary(&self) -> String {
        match self.unread_count() {
            0 => String::new(),
            1 => "1 unread notification".to_string(),
            n => format!("{} unread notifications", n),
        }
    }

    /// Mark one notification read. Returns `false` for an unknown id.
    pub fn mark_read(&mut self, id: u32) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.read = true;
                true
            }
            None => false,
        }
    }

    pub fn mark_all_read(&mut self) {
        for notification in &mut self.items {
            notification.read = true;
        }
    }
}
