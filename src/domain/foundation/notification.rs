//! Notification collector shared by commands, value objects, entities and handlers.
//!
//! Validation failures are data, not control flow. Every validated type owns a
//! [`Notifications`] collection and exposes it through the [`Notifiable`] trait,
//! so a caller can merge the outcome of several independently-checked objects
//! into a single ordered report.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single validation failure: the field it concerns and a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Notification {
    key: String,
    message: String,
}

impl Notification {
    /// Creates a new notification.
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Returns the field key this notification refers to.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.message)
    }
}

/// Ordered, append-only collection of notifications.
///
/// Insertion order is preserved so that merged reports are deterministic.
/// No deduplication is performed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Notifications(Vec<Notification>);

impl Notifications {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a notification unconditionally.
    pub fn add(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.0.push(Notification::new(key, message));
    }

    /// Appends an already-built notification.
    pub fn push(&mut self, notification: Notification) {
        self.0.push(notification);
    }

    /// Copies every notification of `source` to the end of this collection.
    pub fn add_all(&mut self, source: &dyn Notifiable) {
        self.extend_from_slice(source.notifications().as_slice());
    }

    /// Copies the notifications of each source in turn.
    ///
    /// Sources are drained in the order given; within a source the original
    /// order is kept.
    pub fn merge(&mut self, sources: &[&dyn Notifiable]) {
        for source in sources {
            self.add_all(*source);
        }
    }

    /// Appends a slice of notifications, preserving their order.
    pub fn extend_from_slice(&mut self, notifications: &[Notification]) {
        self.0.extend_from_slice(notifications);
    }

    /// Removes every notification.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Returns true when no failure has been recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of recorded failures.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the notifications as a slice.
    pub fn as_slice(&self) -> &[Notification] {
        &self.0
    }

    /// Iterates over the notifications in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Notification> {
        self.0.iter()
    }

    /// Returns true when at least one notification carries `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.iter().any(|n| n.key == key)
    }

    /// Returns the keys in insertion order.
    pub fn keys(&self) -> Vec<&str> {
        self.0.iter().map(|n| n.key.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a Notifications {
    type Item = &'a Notification;
    type IntoIter = std::slice::Iter<'a, Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Extend<Notification> for Notifications {
    fn extend<T: IntoIterator<Item = Notification>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

/// Capability of carrying validation failures.
///
/// Invariant: `is_valid() == notifications().is_empty()`.
pub trait Notifiable {
    /// The failures recorded so far, in insertion order.
    fn notifications(&self) -> &Notifications;

    /// True when no failure has been recorded.
    fn is_valid(&self) -> bool {
        self.notifications().is_empty()
    }

    /// True when at least one failure has been recorded.
    fn is_invalid(&self) -> bool {
        !self.is_valid()
    }
}

impl Notifiable for Notifications {
    fn notifications(&self) -> &Notifications {
        self
    }
}
