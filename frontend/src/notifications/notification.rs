use chrono::{DateTime, Utc};
use std::fmt;

/// How long a toast stays on screen before it starts leaving.
pub const TOAST_LIFETIME_MS: u32 = 5_000;
/// Length of the exit animation that precedes removal.
pub const TOAST_EXIT_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(pub u64);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    /// Parses a severity name. Unknown names fall back to `Info`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => Severity::Success,
            "warning" => Severity::Warning,
            "error" => Severity::Error,
            _ => Severity::Info,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Severity::Info => "#7c3aed",
            Severity::Success => "#25D366",
            Severity::Warning => "#f59e0b",
            Severity::Error => "#ef4444",
        }
    }
}

impl From<&str> for Severity {
    fn from(name: &str) -> Self {
        Severity::from_name(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    pub created_at: DateTime<Utc>,
    pub lifetime_ms: u32,
}

impl Notification {
    pub fn new(
        id: NotificationId,
        message: impl Into<String>,
        severity: Severity,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            message: message.into(),
            severity,
            created_at,
            lifetime_ms: TOAST_LIFETIME_MS,
        }
    }
}

/// Per-page presentation knobs. The support portal and the demo page share
/// the palette and timing and differ only in these.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToastStyle {
    pub max_width_px: Option<u32>,
}

impl ToastStyle {
    pub fn portal() -> Self {
        Self { max_width_px: None }
    }

    pub fn demo() -> Self {
        Self {
            max_width_px: Some(400),
        }
    }
}

/// What the toast surface renders.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastView {
    pub notification: Notification,
    pub style: ToastStyle,
    /// Set once the exit animation has started.
    pub leaving: bool,
}

impl ToastView {
    pub fn id(&self) -> NotificationId {
        self.notification.id
    }

    /// Render key. A replacing toast gets a fresh card and replays `slideIn`.
    pub fn key(&self) -> String {
        format!("toast-{}", self.notification.id.0)
    }

    pub fn class(&self) -> String {
        format!("notification-toast {}", self.notification.severity.name())
    }

    pub fn css(&self) -> String {
        let animation = if self.leaving {
            format!("slideOut {}ms ease forwards", TOAST_EXIT_MS)
        } else {
            format!("slideIn {}ms ease", TOAST_EXIT_MS)
        };
        let mut css = format!(
            "position: fixed; top: 100px; right: 20px; background: {}; color: white; \
             padding: 1rem 1.5rem; border-radius: 10px; display: flex; align-items: center; \
             gap: 1rem; box-shadow: 0 10px 40px rgba(0,0,0,0.3); z-index: 1000; \
             animation: {}; font-family: 'Outfit', sans-serif;",
            self.notification.severity.color(),
            animation
        );
        if let Some(max_width) = self.style.max_width_px {
            css.push_str(&format!(" max-width: {}px;", max_width));
        }
        css
    }
}
