//! Keyboard focus targets on the landing page.

use std::fmt;

/// Control that owns keyboard focus.
///
/// Tab and Shift+Tab cycle through [`Focus::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// OSINT module picker
    #[default]
    Picker,
    /// Query text field
    Query,
    /// Results area
    Results,
}

impl Focus {
    /// All focus targets in cycle order.
    pub const ALL: [Focus; 3] = [Focus::Picker, Focus::Query, Focus::Results];

    pub fn title(&self) -> &'static str {
        match self {
            Focus::Picker => "Module",
            Focus::Query => "Query",
            Focus::Results => "Results",
        }
    }

    /// Next target in the cycle (Tab).
    pub fn next(&self) -> Focus {
        let idx = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous target in the cycle (Shift+Tab).
    pub fn prev(&self) -> Focus {
        let idx = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Focus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycling() {
        assert_eq!(Focus::Picker.next(), Focus::Query);
        assert_eq!(Focus::Query.next(), Focus::Results);
        assert_eq!(Focus::Results.next(), Focus::Picker); // wraps around
        assert_eq!(Focus::Picker.prev(), Focus::Results); // wraps around
        assert_eq!(Focus::Results.prev(), Focus::Query);
    }

    #[test]
    fn test_default_focus() {
        assert_eq!(Focus::default(), Focus::Picker);
        assert_eq!(Focus::Query.to_string(), "Query");
    }
}
