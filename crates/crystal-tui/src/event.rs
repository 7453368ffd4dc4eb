//! Event handling for the Crystal TUI.
//!
//! Maps keyboard and mouse input to [`AppEvent`]s according to the current
//! [`InputMode`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Application-level events that can trigger state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Request application quit
    Quit,
    /// Force quit (Ctrl+C)
    ForceQuit,
    /// Focus next control
    FocusNext,
    /// Focus previous control
    FocusPrev,
    /// Open or enter the focused control
    Activate,
    /// Close the picker or leave text entry
    Cancel,
    /// Navigate up in a list
    NavigateUp,
    /// Navigate down in a list
    NavigateDown,
    /// Page up
    PageUp,
    /// Page down
    PageDown,
    /// Text input character
    TextInput(char),
    /// Backspace in text input
    Backspace,
    /// Run the search
    Submit,
    /// Confirm the highlighted picker entry
    Select,
    /// Dismiss the newest toast
    DismissNewest,
    /// Pointer moved (drives the parallax backdrop)
    PointerMoved { column: u16, row: u16 },
    /// Left click
    Click { column: u16, row: u16 },
    /// No action needed
    None,
}

/// How key presses are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Hotkeys and focus movement
    #[default]
    Navigation,
    /// Typing into the query field
    TextEntry,
    /// Typing into the picker filter and choosing an entry
    Picker,
}

/// Input handler for converting terminal events to app events.
#[derive(Debug, Default)]
pub struct InputHandler {
    mode: InputMode,
}

impl InputHandler {
    /// Create a new input handler.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Handle a key event and return the corresponding app event.
    pub fn handle_key(&mut self, key: KeyEvent) -> AppEvent {
        // Ctrl+C always force quits
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return AppEvent::ForceQuit;
        }

        if key.code == KeyCode::Esc {
            self.mode = InputMode::Navigation;
            return AppEvent::Cancel;
        }

        match self.mode {
            InputMode::Navigation => self.handle_navigation(key),
            InputMode::TextEntry => self.handle_text_entry(key),
            InputMode::Picker => self.handle_picker(key),
        }
    }

    /// Handle a mouse event.
    pub fn handle_mouse(&self, mouse: MouseEvent) -> AppEvent {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => AppEvent::PointerMoved {
                column: mouse.column,
                row: mouse.row,
            },
            MouseEventKind::Down(MouseButton::Left) => AppEvent::Click {
                column: mouse.column,
                row: mouse.row,
            },
            MouseEventKind::ScrollUp => AppEvent::NavigateUp,
            MouseEventKind::ScrollDown => AppEvent::NavigateDown,
            _ => AppEvent::None,
        }
    }

    fn handle_navigation(&self, key: KeyEvent) -> AppEvent {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => AppEvent::Quit,
            KeyCode::Char('x') | KeyCode::Char('X') => AppEvent::DismissNewest,
            KeyCode::Char('s') | KeyCode::Char('S') => AppEvent::Submit,

            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    AppEvent::FocusPrev
                } else {
                    AppEvent::FocusNext
                }
            }
            KeyCode::BackTab => AppEvent::FocusPrev,

            KeyCode::Up | KeyCode::Char('k') => AppEvent::NavigateUp,
            KeyCode::Down | KeyCode::Char('j') => AppEvent::NavigateDown,
            KeyCode::PageUp => AppEvent::PageUp,
            KeyCode::PageDown => AppEvent::PageDown,

            KeyCode::Enter => AppEvent::Activate,

            _ => AppEvent::None,
        }
    }

    /// Handle input when typing a query.
    fn handle_text_entry(&mut self, key: KeyEvent) -> AppEvent {
        match key.code {
            KeyCode::Enter => AppEvent::Submit,
            KeyCode::Backspace => AppEvent::Backspace,
            KeyCode::Tab => {
                self.mode = InputMode::Navigation;
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    AppEvent::FocusPrev
                } else {
                    AppEvent::FocusNext
                }
            }
            KeyCode::BackTab => {
                self.mode = InputMode::Navigation;
                AppEvent::FocusPrev
            }
            KeyCode::Char(c) => AppEvent::TextInput(c),
            _ => AppEvent::None,
        }
    }

    /// Handle input while the module picker is open.
    fn handle_picker(&self, key: KeyEvent) -> AppEvent {
        match key.code {
            KeyCode::Enter => AppEvent::Select,
            KeyCode::Backspace => AppEvent::Backspace,
            KeyCode::Up => AppEvent::NavigateUp,
            KeyCode::Down => AppEvent::NavigateDown,
            KeyCode::Char(c) => AppEvent::TextInput(c),
            _ => AppEvent::None,
        }
    }
}
