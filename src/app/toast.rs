use std::time::{Duration, Instant};

/// Toasts drawn at once; older ones wait below the fold until they expire.
pub const MAX_VISIBLE_TOASTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Info,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    created: Instant,
}

impl Toast {
    pub fn created(&self) -> Instant {
        self.created
    }
}

/// Transient notifications with a shared time-to-live.
#[derive(Debug, Clone)]
pub struct Toasts {
    items: Vec<Toast>,
    ttl: Duration,
}

impl Toasts {
    pub fn new(ttl: Duration) -> Self {
        Self {
            items: Vec::new(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push_at(message, ToastLevel::Success, Instant::now());
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push_at(message, ToastLevel::Info, Instant::now());
    }

    pub fn push_at(&mut self, message: impl Into<String>, level: ToastLevel, now: Instant) {
        self.items.push(Toast {
            message: message.into(),
            level,
            created: now,
        });
    }

    /// Drop toasts older than the time-to-live. Returns true when any expired.
    pub fn expire(&mut self, now: Instant) -> bool {
        let before = self.items.len();
        let ttl = self.ttl;
        self.items
            .retain(|toast| now.saturating_duration_since(toast.created) < ttl);
        before != self.items.len()
    }

    /// Newest first, capped at [`MAX_VISIBLE_TOASTS`].
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter().rev().take(MAX_VISIBLE_TOASTS)
    }

    pub fn dismiss_all(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
