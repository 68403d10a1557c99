//! # Notifications
//!
//! Transient operator messages ("toasts"). The center keeps the most recent
//! notices in a bounded queue for the CLI to print, and mirrors each one to
//! `tracing`.

use std::collections::VecDeque;

use chrono::{DateTime, Local};
use parking_lot::Mutex;

use crate::core::service::{NoticeLevel, Notifier};

/// Notices kept before the oldest is dropped.
pub const MAX_NOTICES: usize = 50;

/// A single notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub at: DateTime<Local>,
}

impl Notice {
    /// Single-line rendering, e.g. `[error] Server error`.
    pub fn render(&self) -> String {
        let tag = match self.level {
            NoticeLevel::Info => "info",
            NoticeLevel::Success => "ok",
            NoticeLevel::Warning => "warn",
            NoticeLevel::Error => "error",
        };
        format!("[{}] {}", tag, self.message)
    }
}

/// Notification manager for the console
#[derive(Debug, Default)]
pub struct NotificationCenter {
    queue: Mutex<VecDeque<Notice>>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(NoticeLevel::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(NoticeLevel::Error, message.into());
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.push(NoticeLevel::Warning, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(NoticeLevel::Info, message.into());
    }

    /// Up to `limit` newest notices, oldest first.
    pub fn recent(&self, limit: usize) -> Vec<Notice> {
        let queue = self.queue.lock();
        let skip = queue.len().saturating_sub(limit);
        queue.iter().skip(skip).cloned().collect()
    }

    /// Take every pending notice.
    pub fn drain(&self) -> Vec<Notice> {
        self.queue.lock().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.queue.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.lock().is_empty()
    }

    fn push(&self, level: NoticeLevel, message: String) {
        match level {
            NoticeLevel::Error => tracing::error!(notice = %message, "Notification"),
            NoticeLevel::Warning => tracing::warn!(notice = %message, "Notification"),
            NoticeLevel::Info | NoticeLevel::Success => tracing::info!(notice = %message, "Notification"),
        }

        let mut queue = self.queue.lock();
        if queue.len() == MAX_NOTICES {
            queue.pop_front();
        }
        queue.push_back(Notice {
            level,
            message,
            at: Local::now(),
        });
    }
}

impl Notifier for NotificationCenter {
    fn notify(&self, level: NoticeLevel, message: &str) {
        self.push(level, message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_is_bounded() {
        let center = NotificationCenter::new();
        for i in 0..(MAX_NOTICES + 5) {
            center.info(format!("notice {}", i));
        }

        assert_eq!(center.len(), MAX_NOTICES);
        let recent = center.recent(1);
        assert_eq!(recent[0].message, format!("notice {}", MAX_NOTICES + 4));
    }

    #[test]
    fn test_drain_empties_queue() {
        let center = NotificationCenter::new();
        center.error("Server error");
        center.notify(NoticeLevel::Success, "Saved");

        let drained = center.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].render(), "[error] Server error");
        assert_eq!(drained[1].render(), "[ok] Saved");
        assert!(center.is_empty());
    }
}
