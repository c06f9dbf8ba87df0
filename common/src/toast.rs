use std::collections::VecDeque;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Severity of a toast, drives its colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
            ToastKind::Info => "toast toast-info",
        }
    }
}

/// Unique toast identifier (monotonic per queue).
pub type ToastId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// FIFO queue of on-screen notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastQueue {
    entries: VecDeque<Toast>,
    next_id: ToastId,
    display_for: Duration,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(Duration::milliseconds(DEFAULT_TOAST_MS))
    }
}

/// How long a toast stays up unless configured otherwise.
pub const DEFAULT_TOAST_MS: i64 = 5_000;

impl ToastQueue {
    pub fn new(display_for: Duration) -> Self {
        Self {
            entries: VecDeque::new(),
            next_id: 1,
            display_for,
        }
    }

    pub fn display_for(&self) -> Duration {
        self.display_for
    }

    /// Append a toast stamped `now`; returns its id.
    pub fn push(
        &mut self,
        kind: ToastKind,
        title: impl Into<String>,
        message: impl Into<String>,
        now: DateTime<Utc>,
    ) -> ToastId {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push_back(Toast {
            id,
            kind,
            title: title.into(),
            message: message.into(),
            created_at: now,
        });
        id
    }

    /// Remove a toast by id. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|t| t.id != id);
        self.entries.len() != before
    }

    /// Drop every toast whose display window has elapsed at `now`.
    /// Returns true if anything was removed.
    pub fn expire(&mut self, now: DateTime<Utc>) -> bool {
        let before = self.entries.len();
        let display_for = self.display_for;
        self.entries.retain(|t| now - t.created_at < display_for);
        self.entries.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.entries.back()
    }
}
