//! Alert entities and their lifecycle phases.
//!
//! ## Phases
//!
//! - **Pending**: inserted, drawn off-screen so the slide-in can be observed
//! - **Entering**: enter transition triggered
//! - **Visible**: resting on screen
//! - **Exiting**: slide-out running, still in the collection
//! - **Removed**: deleted from the collection (never stored)

use std::fmt;
use std::time::{Duration, Instant};

use uuid::Uuid;

/// Unique alert identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AlertId(Uuid);

impl AlertId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for AlertId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Presentation tag for an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AlertCategory {
    /// Neutral information
    #[default]
    Info,
    /// Operation finished successfully
    Success,
    /// Something needs attention
    Warning,
    /// Something failed
    Error,
}

impl AlertCategory {
    /// Get the icon for this category.
    pub fn icon(&self) -> char {
        match self {
            AlertCategory::Info => 'ℹ',
            AlertCategory::Success => '✔',
            AlertCategory::Warning => '⚠',
            AlertCategory::Error => '✖',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AlertCategory::Info => "info",
            AlertCategory::Success => "success",
            AlertCategory::Warning => "warning",
            AlertCategory::Error => "error",
        }
    }
}

/// Displayable payload of an alert. The queue never inspects it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertContent {
    /// A single line of text
    Text(String),
    /// Bold title over a dimmer detail line, with an optional leading glyph
    Rich {
        icon: Option<char>,
        title: String,
        detail: String,
    },
}

impl AlertContent {
    /// Structured content with a title and a detail line.
    pub fn rich(title: impl Into<String>, detail: impl Into<String>) -> Self {
        AlertContent::Rich {
            icon: None,
            title: title.into(),
            detail: detail.into(),
        }
    }

    /// Attach a leading glyph. Plain text content is left unchanged.
    pub fn with_icon(self, glyph: char) -> Self {
        match self {
            AlertContent::Rich { title, detail, .. } => AlertContent::Rich {
                icon: Some(glyph),
                title,
                detail,
            },
            text => text,
        }
    }

    /// First line to display.
    pub fn headline(&self) -> &str {
        match self {
            AlertContent::Text(text) => text,
            AlertContent::Rich { title, .. } => title,
        }
    }

    /// Secondary line, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            AlertContent::Text(_) => None,
            AlertContent::Rich { detail, .. } => Some(detail),
        }
    }

    pub fn icon(&self) -> Option<char> {
        match self {
            AlertContent::Text(_) => None,
            AlertContent::Rich { icon, .. } => *icon,
        }
    }
}

impl From<&str> for AlertContent {
    fn from(text: &str) -> Self {
        AlertContent::Text(text.to_string())
    }
}

impl From<String> for AlertContent {
    fn from(text: String) -> Self {
        AlertContent::Text(text)
    }
}

/// Lifecycle phase. Ordering follows the lifecycle, so `a < b` means `a`
/// comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Phase {
    Pending,
    Entering,
    Visible,
    Exiting,
    Removed,
}

impl Phase {
    /// Whether the alert is leaving or gone.
    pub fn is_exiting(&self) -> bool {
        *self >= Phase::Exiting
    }

    pub fn name(&self) -> &'static str {
        match self {
            Phase::Pending => "pending",
            Phase::Entering => "entering",
            Phase::Visible => "visible",
            Phase::Exiting => "exiting",
            Phase::Removed => "removed",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A live notification.
///
/// Only the owning queue can change an alert's phase; everything else sees
/// it through shared references.
#[derive(Debug, Clone)]
pub struct Alert {
    id: AlertId,
    content: AlertContent,
    category: AlertCategory,
    phase: Phase,
    duration: Duration,
    created_at: Instant,
    phase_since: Instant,
}

impl Alert {
    pub(crate) fn new(
        id: AlertId,
        content: AlertContent,
        category: AlertCategory,
        duration: Duration,
        now: Instant,
    ) -> Self {
        Self {
            id,
            content,
            category,
            phase: Phase::Pending,
            duration,
            created_at: now,
            phase_since: now,
        }
    }

    pub(crate) fn set_phase(&mut self, phase: Phase, at: Instant) {
        debug_assert!(phase > self.phase, "phase must move forward");
        self.phase = phase;
        self.phase_since = at;
    }

    pub fn id(&self) -> AlertId {
        self.id
    }

    pub fn content(&self) -> &AlertContent {
        &self.content
    }

    pub fn category(&self) -> AlertCategory {
        self.category
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Auto-dismiss delay; zero means the alert stays until removed.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn is_sticky(&self) -> bool {
        self.duration.is_zero()
    }

    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// When the current phase began.
    pub fn phase_since(&self) -> Instant {
        self.phase_since
    }
}
