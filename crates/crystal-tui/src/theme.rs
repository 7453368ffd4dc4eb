//! Crystal color palette.

use crystal_alerts::AlertCategory;
use ratatui::style::{Color, Modifier, Style};

/// Color palette for the landing page.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Title and focused borders
    pub header: Color,
    /// Hotkey hints
    pub hotkey: Color,
    /// Normal text
    pub text: Color,
    /// Secondary text (descriptions, placeholders)
    pub text_dim: Color,
    /// Unfocused borders
    pub border_dim: Color,
    /// Filter matches in the module picker
    pub highlight: Color,
    /// Disabled controls
    pub disabled: Color,
    /// Far parallax layer
    pub backdrop_far: Color,
    /// Near parallax layer
    pub backdrop_near: Color,
    pub status_success: Color,
    pub status_warning: Color,
    pub status_error: Color,
}

/// Theme used by every widget in the app.
#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: ThemeColors,
}

impl Default for Theme {
    fn default() -> Self {
        Self::crystal()
    }
}

impl Theme {
    /// Cyan-on-dark palette.
    pub fn crystal() -> Self {
        Self {
            colors: ThemeColors {
                header: Color::Rgb(26, 240, 224),
                hotkey: Color::Rgb(106, 240, 240),
                text: Color::Rgb(207, 250, 254),
                text_dim: Color::Rgb(103, 174, 181),
                border_dim: Color::Rgb(40, 88, 92),
                highlight: Color::Rgb(103, 232, 249),
                disabled: Color::Rgb(70, 80, 82),
                backdrop_far: Color::Rgb(24, 34, 36),
                backdrop_near: Color::Rgb(30, 70, 72),
                status_success: Color::Rgb(94, 234, 212),
                status_warning: Color::Yellow,
                status_error: Color::Rgb(248, 113, 113),
            },
        }
    }

    /// Accent color for an alert category.
    pub fn category_color(&self, category: AlertCategory) -> Color {
        match category {
            AlertCategory::Info => self.colors.header,
            AlertCategory::Success => self.colors.status_success,
            AlertCategory::Warning => self.colors.status_warning,
            AlertCategory::Error => self.colors.status_error,
        }
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.colors.header)
        } else {
            Style::default().fg(self.colors.border_dim)
        }
    }

    pub fn title(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.colors.header)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.colors.text)
        }
    }
}
