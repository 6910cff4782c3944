// =============================================================================
// NexusCorp Common - Transient Notices
// =============================================================================
// Table of Contents:
// 1. Notice Types
// 2. Notice Queue
// =============================================================================
// The queue only tracks which notices are live. Whoever pushes a notice owns
// the timer that later dismisses it by id; dismissing an id that is already
// gone does nothing, so a late timer can never remove a newer notice.
// =============================================================================

use std::collections::VecDeque;
use std::fmt;

// -----------------------------------------------------------------------------
// 1. Notice Types
// -----------------------------------------------------------------------------

/// Identifier handed out by [`NoticeQueue::push`]. Strictly increasing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoticeId(u64);

impl fmt::Display for NoticeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "notice-{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoticeLevel {
    #[default]
    Success,
    Info,
}

impl NoticeLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeLevel::Success => "success",
            NoticeLevel::Info => "info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: NoticeId,
    pub level: NoticeLevel,
    pub message: String,
}

// -----------------------------------------------------------------------------
// 2. Notice Queue
// -----------------------------------------------------------------------------

/// Stack of live notices, oldest first, capped at `capacity`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoticeQueue {
    live: VecDeque<Notice>,
    capacity: usize,
    next_id: u64,
}

impl NoticeQueue {
    /// `capacity` is clamped to at least one visible notice.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            live: VecDeque::with_capacity(capacity),
            capacity,
            next_id: 0,
        }
    }

    /// Add a notice, evicting the oldest one when full.
    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>) -> NoticeId {
        let id = NoticeId(self.next_id);
        self.next_id += 1;

        if self.live.len() == self.capacity {
            if let Some(evicted) = self.live.pop_front() {
                tracing::debug!(id = %evicted.id, "notice evicted");
            }
        }

        self.live.push_back(Notice {
            id,
            level,
            message: message.into(),
        });
        tracing::debug!(%id, level = level.as_str(), "notice shown");
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> NoticeId {
        self.push(NoticeLevel::Success, message)
    }

    /// Remove a notice. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: NoticeId) -> bool {
        match self.live.iter().position(|n| n.id == id) {
            Some(index) => {
                self.live.remove(index);
                tracing::debug!(%id, "notice dismissed");
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.live.iter()
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for NoticeQueue {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_MAX_VISIBLE_NOTICES)
    }
}
