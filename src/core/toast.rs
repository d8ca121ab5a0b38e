use std::time::Duration;

use tokio::time::Instant;

pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

/// Identifies one shown notification so a late expiry cannot hide a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

#[derive(Debug, Clone)]
struct Toast {
    id: ToastId,
    text: String,
    expires_at: Instant,
}

/// Holds at most one self-hiding error notification.
#[derive(Debug, Clone)]
pub struct ToastSlot {
    current: Option<Toast>,
    next_id: u64,
    duration: Duration,
}

impl Default for ToastSlot {
    fn default() -> Self {
        Self::with_duration(DEFAULT_TOAST_DURATION)
    }
}

impl ToastSlot {
    pub fn with_duration(duration: Duration) -> Self {
        Self {
            current: None,
            next_id: 0,
            duration,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Replace whatever is showing with `text`.
    pub fn show(&mut self, text: impl Into<String>) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.current = Some(Toast {
            id,
            text: text.into(),
            expires_at: Instant::now() + self.duration,
        });
        id
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Drop the toast `id` if it is still the one showing.
    pub fn expire(&mut self, id: ToastId) {
        if self.current.as_ref().is_some_and(|toast| toast.id == id) {
            self.current = None;
        }
    }

    /// The text on screen right now, if any.
    pub fn visible(&self) -> Option<&str> {
        self.current
            .as_ref()
            .filter(|toast| Instant::now() < toast.expires_at)
            .map(|toast| toast.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn hides_after_duration() {
        let mut slot = ToastSlot::default();
        slot.show("Invalid email or password");
        assert_eq!(slot.visible(), Some("Invalid email or password"));

        tokio::time::advance(Duration::from_millis(2999)).await;
        assert!(slot.visible().is_some());

        tokio::time::advance(Duration::from_millis(1)).await;
        assert!(slot.visible().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn stale_expiry_keeps_newer_toast() {
        let mut slot = ToastSlot::default();
        let first = slot.show("first");
        slot.show("second");
        slot.expire(first);
        assert_eq!(slot.visible(), Some("second"));
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_hides_immediately() {
        let mut slot = ToastSlot::with_duration(Duration::from_secs(10));
        slot.show("boom");
        slot.dismiss();
        assert!(slot.visible().is_none());
    }
}
