//! Transient per-screen notifications.

/// Tone of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NoticeKind,
    pub message: String,
    /// Identifies this particular showing, for timers
    pub seq: u64,
}

/// Holds at most one visible notification.
///
/// A new notification replaces the current one. Auto-dismiss timers call
/// [`NotificationSlot::expire`] with the sequence number they were armed
/// for, so a timer left over from an older notification never closes a
/// newer one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationSlot {
    current: Option<Notification>,
    next_seq: u64,
}

impl NotificationSlot {
    pub fn show(&mut self, kind: NoticeKind, message: impl Into<String>) -> u64 {
        self.next_seq += 1;
        let seq = self.next_seq;
        self.current = Some(Notification {
            kind,
            message: message.into(),
            seq,
        });
        seq
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.show(NoticeKind::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.show(NoticeKind::Error, message)
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Close whatever is showing (the close button).
    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Close the notification only if `seq` is still the one showing.
    pub fn expire(&mut self, seq: u64) -> bool {
        match &self.current {
            Some(n) if n.seq == seq => {
                self.current = None;
                true
            }
            _ => false,
        }
    }
}

/// Anything that owns a [`NotificationSlot`], so one auto-dismiss timer
/// works for every page.
pub trait Notices {
    fn notices(&self) -> &NotificationSlot;
    fn notices_mut(&mut self) -> &mut NotificationSlot;
}

impl Notices for NotificationSlot {
    fn notices(&self) -> &NotificationSlot {
        self
    }

    fn notices_mut(&mut self) -> &mut NotificationSlot {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_notification_replaces_old() {
        let mut slot = NotificationSlot::default();
        slot.success("saved");
        slot.error("failed");
        let current = slot.current().unwrap();
        assert_eq!(current.kind, NoticeKind::Error);
        assert_eq!(current.message, "failed");
    }

    #[test]
    fn test_stale_timer_does_not_close_newer_notification() {
        let mut slot = NotificationSlot::default();
        let first = slot.success("one");
        let second = slot.success("two");
        assert!(!slot.expire(first));
        assert_eq!(slot.current().unwrap().message, "two");
        assert!(slot.expire(second));
        assert!(slot.current().is_none());
    }

    #[test]
    fn test_dismiss_early() {
        let mut slot = NotificationSlot::default();
        let seq = slot.error("boom");
        slot.dismiss();
        assert!(slot.current().is_none());
        assert!(!slot.expire(seq));
    }
}
