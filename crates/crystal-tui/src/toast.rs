//! Toast rendering for the alert queue.
//!
//! Toasts stack in the bottom-right corner, oldest on top. Each one slides in
//! from the right edge once it has entered and slides back out while exiting.
//! Slide progress is derived from the alert's phase and `phase_since`, so the
//! queue itself knows nothing about animation.

use std::time::{Duration, Instant};

use crystal_alerts::{Alert, AlertId, Phase};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::theme::Theme;

/// Width of a fully visible toast, borders included.
pub const TOAST_WIDTH: u16 = 46;
/// Gap between the toasts and the screen edge.
const MARGIN: u16 = 1;
/// Glyph that dismisses a toast when clicked.
pub const DISMISS_GLYPH: &str = "✕";

/// How far a toast has slid on screen, from 0.0 (hidden) to 1.0.
pub fn slide_progress(alert: &Alert, now: Instant, animation: Duration) -> f32 {
    let elapsed = now.saturating_duration_since(alert.phase_since());
    let t = if animation.is_zero() {
        1.0
    } else {
        (elapsed.as_secs_f32() / animation.as_secs_f32()).min(1.0)
    };

    match alert.phase() {
        Phase::Pending | Phase::Removed => 0.0,
        Phase::Entering | Phase::Visible => ease_out(t),
        Phase::Exiting => 1.0 - ease_out(t),
    }
}

fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// Whether any toast is mid-slide and needs another frame.
pub fn is_animating(alerts: &[Alert], now: Instant, animation: Duration) -> bool {
    alerts.iter().any(|alert| match alert.phase() {
        Phase::Entering | Phase::Visible => {
            now.saturating_duration_since(alert.phase_since()) < animation
        }
        Phase::Exiting => true,
        Phase::Pending | Phase::Removed => false,
    })
}

/// Screen placement of one toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastSlot {
    pub id: AlertId,
    /// Visible part of the toast
    pub area: Rect,
    /// Clickable dismiss control, when on screen
    pub dismiss: Option<Rect>,
}

impl ToastSlot {
    /// Whether a click at `(column, row)` hits the dismiss control.
    pub fn hits_dismiss(&self, column: u16, row: u16) -> bool {
        self.dismiss.is_some_and(|r| {
            column >= r.x && column < r.right() && row >= r.y && row < r.bottom()
        })
    }
}

fn toast_height(alert: &Alert) -> u16 {
    // Border, headline, optional detail.
    if alert.content().detail().is_some() { 4 } else { 3 }
}

/// Stack of toasts rendered on top of everything else.
pub struct ToastStack<'a> {
    alerts: &'a [Alert],
    now: Instant,
    animation: Duration,
    theme: &'a Theme,
}

impl<'a> ToastStack<'a> {
    pub fn new(alerts: &'a [Alert], now: Instant, animation: Duration, theme: &'a Theme) -> Self {
        Self {
            alerts,
            now,
            animation,
            theme,
        }
    }

    /// Place every toast inside `area`, oldest first. The stack grows upward
    /// from the bottom edge, so when it is taller than `area` the oldest
    /// toasts are the ones cut off. Pending toasts are omitted.
    pub fn layout(&self, area: Rect) -> Vec<ToastSlot> {
        let width = TOAST_WIDTH.min(area.width.saturating_sub(MARGIN * 2));
        if width < 8 {
            return Vec::new();
        }

        let mut bottom = area.bottom().saturating_sub(MARGIN);
        let right = area.right().saturating_sub(MARGIN);

        let mut slots = Vec::new();
        for alert in self.alerts.iter().rev() {
            let height = toast_height(alert);
            let Some(top) = bottom.checked_sub(height).filter(|top| *top >= area.y) else {
                break;
            };
            bottom = top;

            let progress = slide_progress(alert, self.now, self.animation);
            let shown = (f32::from(width) * progress).round() as u16;
            if shown == 0 {
                continue;
            }

            let left = right - shown;
            let toast = Rect::new(left, top, right - left, height);
            let dismiss = (toast.width >= 4).then(|| Rect::new(toast.right() - 3, toast.y, 1, 1));
            slots.push(ToastSlot {
                id: alert.id(),
                area: toast,
                dismiss,
            });
        }
        slots.reverse();
        slots
    }

    fn render_toast(&self, alert: &Alert, slot: &ToastSlot, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let accent = self.theme.category_color(alert.category());
        let content = alert.content();
        let icon = content.icon().unwrap_or_else(|| alert.category().icon());

        let mut lines = vec![Line::from(vec![
            Span::styled(format!("{icon} "), Style::default().fg(accent)),
            Span::styled(
                content.headline().to_string(),
                Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
            ),
        ])];
        if let Some(detail) = content.detail() {
            lines.push(Line::from(Span::styled(
                format!("  {detail}"),
                Style::default().fg(colors.text_dim),
            )));
        }

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent));
        if slot.dismiss.is_some() {
            block = block
                .title(Span::styled(
                    format!(" {DISMISS_GLYPH} "),
                    Style::default().fg(colors.text_dim),
                ))
                .title_alignment(ratatui::layout::Alignment::Right);
        }

        Clear.render(slot.area, buf);
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(slot.area, buf);
    }
}

impl Widget for ToastStack<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for slot in self.layout(area) {
            if let Some(alert) = self.alerts.iter().find(|a| a.id() == slot.id) {
                self.render_toast(alert, &slot, buf);
            }
        }
    }
}
