use std::time::Duration;

pub const SLIDE_IN_AFTER: Duration = Duration::from_millis(100);
pub const DISMISS_AFTER: Duration = Duration::from_millis(5_000);
pub const SLIDE_OUT_FOR: Duration = Duration::from_millis(300);

pub const SUBMIT_SUCCESS: &str = "Thank you for your message! I'll get back to you soon.";
pub const SUBMIT_FAILED: &str = "Please fix the errors above and try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            Self::Success => "#2F4F4F",
            Self::Error => "#8B0000",
            Self::Info => "#8B4513",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationPhase {
    Entering,
    Shown,
    Leaving,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
    pub phase: NotificationPhase,
}

impl Notification {
    pub fn new(id: u64, kind: NotificationKind, message: &str) -> Self {
        Self {
            id,
            kind,
            message: message.to_string(),
            phase: NotificationPhase::Entering,
        }
    }

    pub fn class(&self) -> String {
        format!("notification notification-{}", self.kind.as_str())
    }

    pub fn style(&self) -> String {
        let offset = match self.phase {
            NotificationPhase::Shown => "translateX(0)",
            NotificationPhase::Entering | NotificationPhase::Leaving => "translateX(100%)",
        };
        format!(
            "background-color: {}; transform: {offset};",
            self.kind.background()
        )
    }
}

/// Moves the current notification to `phase` only if it is still the one a
/// timer was scheduled for. Returns `None` once it has slid out.
pub fn advance(
    current: Option<&Notification>,
    id: u64,
    phase: Option<NotificationPhase>,
) -> Option<Option<Notification>> {
    let current = current.filter(|notification| notification.id == id)?;

    Some(phase.map(|phase| Notification {
        phase,
        ..current.clone()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_timer_does_not_touch_newer_notification() {
        let newer = Notification::new(2, NotificationKind::Success, SUBMIT_SUCCESS);
        assert_eq!(advance(Some(&newer), 1, None), None);
    }

    #[test]
    fn matching_timer_advances_and_removes() {
        let current = Notification::new(7, NotificationKind::Error, SUBMIT_FAILED);

        let shown = advance(Some(&current), 7, Some(NotificationPhase::Shown))
            .flatten()
            .expect("should advance");
        assert_eq!(shown.phase, NotificationPhase::Shown);
        assert!(shown.style().contains("translateX(0)"));

        assert_eq!(advance(Some(&shown), 7, None), Some(None));
    }

    #[test]
    fn kind_drives_class_and_color() {
        let info = Notification::new(1, NotificationKind::Info, "hi");
        assert_eq!(info.class(), "notification notification-info");
        assert!(info.style().starts_with("background-color: #8B4513;"));
    }
}
