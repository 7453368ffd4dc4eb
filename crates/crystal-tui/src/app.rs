//! Main application state and logic for the Crystal TUI.
//!
//! The `App` owns the alert queue and every control on the landing page. It
//! routes input to them, fires alert timers once per loop iteration and draws
//! the page.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent};
use crystal_alerts::{AlertCategory, AlertContent, AlertQueue, AlertTimings, Clock, SystemClock};
use crystal_core::{CrystalConfig, CrystalError};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use tracing::{debug, info, warn};

use crate::event::{AppEvent, InputHandler, InputMode};
use crate::focus::Focus;
use crate::module::{highlight_segments, ModulePicker, OsintModule};
use crate::parallax::{Backdrop, Parallax};
use crate::query::{self, QueryField, QueryValidator};
use crate::search::{SearchRequest, SearchResults, SearchRunner};
use crate::theme::Theme;
use crate::toast::{self, ToastSlot, ToastStack};

/// Result type for app operations.
pub type AppResult<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Longest wait for input when nothing is scheduled.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Width of the interactive column.
const CONTENT_WIDTH: u16 = 72;
/// Width of the feature card row.
const CARDS_WIDTH: u16 = 100;

const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
const SPINNER_STEP: Duration = Duration::from_millis(80);

const TAGLINE: &str = "A complete OSINT suite for monitoring, analyzing, and enriching digital \
information. Focused, fast, and futuristic.";
const PICKER_PROMPT: &str = "Select a OSINT module";
const RESULTS_PLACEHOLDER: &str = "Search results will appear here.";
const NO_RESULTS: &str = "No results found.";
const COPYRIGHT: &str = "© 2025 Crystal OSINT. All rights reserved.";

const FEATURES: [(char, &str, &str); 3] = [
    (
        '◎',
        "Monitoring",
        "Track public and dark web data in real-time with crystal-clear precision.",
    ),
    (
        '◔',
        "Analysis",
        "Correlate OSINT sources and enrich data to make smarter, faster decisions.",
    ),
    (
        '⧉',
        "Integration",
        "Modular OSINT tools easily integrated into any workflow or platform.",
    ),
];

/// Main application state.
pub struct App<C: Clock = SystemClock> {
    config: CrystalConfig,
    /// Live toasts
    alerts: AlertQueue<C>,
    /// Input handler for key and mouse events
    input_handler: InputHandler,
    focus: Focus,
    picker: ModulePicker,
    validator: QueryValidator,
    query: QueryField,
    search: SearchRunner,
    /// When the running search started, for the spinner
    search_started: Option<Instant>,
    /// Pretty-printed results of the last search
    results: String,
    results_scroll: u16,
    parallax: Parallax,
    theme: Theme,
    /// Toast placement from the last frame, for click hit-testing
    toast_slots: Vec<ToastSlot>,
    /// Search button placement from the last frame
    button_area: Rect,
    should_quit: bool,
    /// Dirty flag - whether UI needs redraw
    dirty: bool,
    /// Terminal size at the last draw
    cached_size: Option<Rect>,
}

impl App<SystemClock> {
    /// Create the app with the system clock.
    pub fn new(config: CrystalConfig) -> crystal_core::Result<Self> {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> App<C> {
    /// Create the app reading time from `clock`.
    pub fn with_clock(config: CrystalConfig, clock: C) -> crystal_core::Result<Self> {
        let timings = AlertTimings::from(&config.alerts);
        let search = SearchRunner::new(config.search.delay())?;

        Ok(Self {
            alerts: AlertQueue::with_clock(timings, clock),
            input_handler: InputHandler::new(),
            focus: Focus::default(),
            picker: ModulePicker::new(),
            validator: QueryValidator::new(),
            query: QueryField::default(),
            search,
            search_started: None,
            results: String::new(),
            results_scroll: 0,
            parallax: Parallax::default(),
            theme: Theme::default(),
            toast_slots: Vec::new(),
            button_area: Rect::default(),
            should_quit: false,
            dirty: true,
            cached_size: None,
            config,
        })
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_handler.mode()
    }

    /// Returns whether the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn alerts(&self) -> &AlertQueue<C> {
        &self.alerts
    }

    pub fn picker(&self) -> &ModulePicker {
        &self.picker
    }

    pub fn selected_module(&self) -> Option<OsintModule> {
        self.picker.selected()
    }

    pub fn query(&self) -> &QueryField {
        &self.query
    }

    /// Results text; empty until a search completes.
    pub fn results(&self) -> &str {
        &self.results
    }

    /// Whether a search is running.
    pub fn is_loading(&self) -> bool {
        self.search.is_running()
    }

    pub fn parallax(&self) -> Parallax {
        self.parallax
    }

    /// Mark the UI as dirty (needs redraw).
    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Check if UI needs redraw and clear the dirty flag.
    fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// The query field accepts input only with a module selected and no
    /// search running.
    fn query_editable(&self) -> bool {
        self.picker.selected().is_some() && !self.search.is_running()
    }

    /// Move keyboard focus to `focus`.
    pub fn set_focus(&mut self, focus: Focus) {
        self.picker.close();
        self.focus = focus;
        let mode = if focus == Focus::Query && self.query_editable() {
            InputMode::TextEntry
        } else {
            InputMode::Navigation
        };
        self.input_handler.set_mode(mode);
        self.mark_dirty();
    }

    /// Handle a key event.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let event = self.input_handler.handle_key(key);
        self.handle_app_event(event);
    }

    /// Handle a mouse event.
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let event = self.input_handler.handle_mouse(mouse);
        self.handle_app_event(event);
    }

    /// Handle an application event.
    pub fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Quit | AppEvent::ForceQuit => self.should_quit = true,
            AppEvent::FocusNext => self.set_focus(self.focus.next()),
            AppEvent::FocusPrev => self.set_focus(self.focus.prev()),
            AppEvent::Activate => self.activate(),
            AppEvent::Cancel => {
                self.picker.close();
                self.input_handler.set_mode(InputMode::Navigation);
                self.mark_dirty();
            }
            AppEvent::NavigateUp => {
                if self.picker.is_open() {
                    self.picker.move_up();
                } else {
                    self.scroll_results_by(-1);
                }
                self.mark_dirty();
            }
            AppEvent::NavigateDown => {
                if self.picker.is_open() {
                    self.picker.move_down();
                } else {
                    self.scroll_results_by(1);
                }
                self.mark_dirty();
            }
            AppEvent::PageUp => {
                self.scroll_results_by(-10);
                self.mark_dirty();
            }
            AppEvent::PageDown => {
                self.scroll_results_by(10);
                self.mark_dirty();
            }
            AppEvent::TextInput(c) => {
                if self.picker.is_open() {
                    self.picker.push_char(c);
                } else if self.focus == Focus::Query && self.query_editable() {
                    self.query
                        .push_char(c, self.picker.selected(), &self.validator);
                }
                self.mark_dirty();
            }
            AppEvent::Backspace => {
                if self.picker.is_open() {
                    self.picker.pop_char();
                } else if self.focus == Focus::Query && self.query_editable() {
                    self.query.pop_char(self.picker.selected(), &self.validator);
                }
                self.mark_dirty();
            }
            AppEvent::Submit => self.submit(),
            AppEvent::Select => {
                if let Some(module) = self.picker.confirm() {
                    self.on_module_selected(module);
                }
                self.mark_dirty();
            }
            AppEvent::DismissNewest => {
                if let Some(id) = self.alerts.newest_dismissable() {
                    self.alerts.remove_alert(id);
                    self.mark_dirty();
                }
            }
            AppEvent::PointerMoved { column, row } => {
                if let Some(size) = self.cached_size {
                    self.parallax = Parallax::from_pointer(column, row, size.width, size.height);
                    self.mark_dirty();
                }
            }
            AppEvent::Click { column, row } => self.handle_click(column, row),
            AppEvent::None => {}
        }
    }

    /// Enter or open the focused control.
    fn activate(&mut self) {
        match self.focus {
            Focus::Picker => {
                self.picker.open();
                self.input_handler.set_mode(InputMode::Picker);
            }
            Focus::Query if self.query_editable() => {
                self.input_handler.set_mode(InputMode::TextEntry);
            }
            Focus::Query | Focus::Results => {}
        }
        self.mark_dirty();
    }

    fn on_module_selected(&mut self, module: OsintModule) {
        info!(module_id = module.id(), module = module.title(), "module selected");
        self.query.reset();
        self.set_focus(Focus::Query);
    }

    fn handle_click(&mut self, column: u16, row: u16) {
        if let Some(slot) = self
            .toast_slots
            .iter()
            .find(|slot| slot.hits_dismiss(column, row))
        {
            let id = slot.id;
            self.alerts.remove_alert(id);
            self.mark_dirty();
            return;
        }

        if self.button_area.contains(Position::new(column, row)) {
            self.submit();
        }
    }

    fn scroll_results_by(&mut self, delta: i32) {
        let max = self.results.lines().count().saturating_sub(1);
        let max = u16::try_from(max).unwrap_or(u16::MAX);
        let next = i32::from(self.results_scroll) + delta;
        self.results_scroll = next.clamp(0, i32::from(max)) as u16;
    }

    /// Run the search for the current module and query, or explain why not.
    pub fn submit(&mut self) {
        if self.search.is_running() {
            debug!("search in progress, submit ignored");
            return;
        }
        self.mark_dirty();

        let Some(module) = self.picker.selected() else {
            self.alerts.notify(
                AlertContent::rich(
                    "Selection required",
                    "Please select an OSINT module before executing a query.",
                ),
                AlertCategory::Info,
            );
            return;
        };

        if !self.query.is_submittable() {
            let message = self
                .query
                .validation()
                .message()
                .unwrap_or("Please fix your query before continuing.");
            self.alerts.notify(
                AlertContent::rich("Invalid input", message),
                AlertCategory::Error,
            );
            return;
        }

        self.results.clear();
        self.results_scroll = 0;
        let request = SearchRequest {
            module,
            query: self.query.text().to_string(),
        };
        if self.search.start(request) {
            self.search_started = Some(self.alerts.now());
            self.input_handler.set_mode(InputMode::Navigation);
        }
    }

    fn on_search_complete(&mut self, results: SearchResults) {
        self.search_started = None;
        match results.to_pretty_json() {
            Ok(json) => {
                self.results = json;
                self.alerts.notify(
                    AlertContent::rich("Research complete!", "Query executed successfully.")
                        .with_icon('⚡'),
                    AlertCategory::Success,
                );
            }
            Err(e) => {
                warn!(error = %e, "failed to render search results");
                self.alerts.notify(
                    AlertContent::rich("Search failed", e.to_string()),
                    AlertCategory::Error,
                );
            }
        }
        if self.focus == Focus::Query && !self.picker.is_open() {
            self.input_handler.set_mode(InputMode::TextEntry);
        }
        self.mark_dirty();
    }

    /// Fire due alert timers and collect a finished search.
    ///
    /// Returns whether anything visible changed.
    pub fn update(&mut self) -> bool {
        let mut changed = self.alerts.tick();
        if let Some(results) = self.search.poll() {
            self.on_search_complete(results);
            changed = true;
        }
        changed
    }

    /// Whether the next frame differs from this one even without input.
    fn needs_animation_frame(&self) -> bool {
        self.search.is_running()
            || toast::is_animating(
                self.alerts.alerts(),
                self.alerts.now(),
                self.config.alerts.animation(),
            )
    }

    /// How long to wait for input before the next loop iteration.
    pub fn poll_timeout(&self, frame_elapsed: Duration) -> Duration {
        if self.needs_animation_frame() {
            return self
                .config
                .dashboard
                .frame_duration()
                .saturating_sub(frame_elapsed);
        }
        self.alerts
            .next_deadline()
            .map_or(IDLE_POLL, |deadline| {
                deadline.saturating_duration_since(self.alerts.now())
            })
            .min(IDLE_POLL)
    }

    /// Run the main application loop.
    pub fn run(&mut self) -> AppResult<()> {
        // Setup terminal
        crossterm::terminal::enable_raw_mode().map_err(|e| CrystalError::TerminalInit {
            message: e.to_string(),
        })?;
        let mut stdout = io::stdout();
        crossterm::execute!(
            stdout,
            crossterm::terminal::EnterAlternateScreen,
            crossterm::event::EnableMouseCapture
        )
        .map_err(|e| CrystalError::TerminalInit {
            message: e.to_string(),
        })?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        info!("terminal ready");
        let result = self.run_loop(&mut terminal);

        // Restore terminal
        crossterm::terminal::disable_raw_mode().map_err(|e| CrystalError::TerminalRestore {
            message: e.to_string(),
        })?;
        crossterm::execute!(
            terminal.backend_mut(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::event::DisableMouseCapture
        )
        .map_err(|e| CrystalError::TerminalRestore {
            message: e.to_string(),
        })?;
        terminal.show_cursor()?;

        result
    }

    /// The inner event loop.
    ///
    /// Redraws only when something changed, and waits for input no longer
    /// than the next alert timer or animation frame.
    fn run_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> AppResult<()> {
        while !self.should_quit {
            let frame_start = Instant::now();

            if self.update() || self.needs_animation_frame() {
                self.mark_dirty();
            }

            if self.take_dirty() {
                terminal.draw(|frame| self.draw(frame))?;
            }

            let timeout = self.poll_timeout(frame_start.elapsed());
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key_event(key),
                    Event::Mouse(mouse) => self.handle_mouse_event(mouse),
                    Event::Resize(_, _) => self.mark_dirty(),
                    _ => {}
                }
            }
        }
        info!(live_alerts = self.alerts.len(), "event loop finished");
        Ok(())
    }

    /// Draw the UI.
    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.cached_size = Some(area);

        frame.render_widget(Backdrop::new(self.parallax, &self.theme), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Module picker
                Constraint::Length(3), // Query
                Constraint::Length(1), // Validation message
                Constraint::Length(3), // Search button
                Constraint::Min(5),    // Results
                Constraint::Length(5), // Feature cards
                Constraint::Length(2), // Footer
            ])
            .split(area);

        self.draw_title(frame, chunks[0]);
        self.draw_picker(frame, centered(chunks[1], CONTENT_WIDTH));
        self.draw_query(frame, centered(chunks[2], CONTENT_WIDTH), chunks[3]);
        self.draw_button(frame, centered(chunks[4], CONTENT_WIDTH));
        self.draw_results(frame, centered(chunks[5], CONTENT_WIDTH));
        self.draw_cards(frame, centered(chunks[6], CARDS_WIDTH));
        self.draw_footer(frame, chunks[7]);

        if self.picker.is_open() {
            self.draw_picker_dropdown(frame, centered(chunks[1], CONTENT_WIDTH), area);
        }

        let stack = ToastStack::new(
            self.alerts.alerts(),
            self.alerts.now(),
            self.config.alerts.animation(),
            &self.theme,
        );
        self.toast_slots = stack.layout(area);
        frame.render_widget(stack, area);
    }

    fn draw_title(&self, frame: &mut Frame, area: Rect) {
        let colors = &self.theme.colors;
        let title = Paragraph::new(vec![
            Line::from(Span::styled(
                "◆ Crystal OSINT ◆",
                Style::default()
                    .fg(colors.header)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(TAGLINE, Style::default().fg(colors.text_dim))),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

        frame.render_widget(title, area);
    }

    fn draw_picker(&self, frame: &mut Frame, area: Rect) {
        let colors = &self.theme.colors;
        let focused = self.focus == Focus::Picker;
        let (label, label_style) = match self.picker.selected() {
            Some(module) => (module.title(), Style::default().fg(colors.text)),
            None => (PICKER_PROMPT, Style::default().fg(colors.text_dim)),
        };
        let arrow = if self.picker.is_open() { "▲" } else { "▼" };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border(focused))
            .title(Span::styled(" Module ", self.theme.title(focused)));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("⌕ ", Style::default().fg(colors.header)),
                Span::styled(label, label_style),
            ])),
            inner,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(arrow, Style::default().fg(colors.header)))
                .alignment(Alignment::Right),
            inner,
        );
    }

    /// Draw the open picker below `anchor`, on top of the page.
    fn draw_picker_dropdown(&self, frame: &mut Frame, anchor: Rect, bounds: Rect) {
        let colors = &self.theme.colors;
        let matches = self.picker.matches();
        let filter = self.picker.filter();

        let available = bounds.bottom().saturating_sub(anchor.bottom());
        let wanted = 3 + (matches.len().max(1) as u16) * 2;
        let height = wanted.min(available);
        if height < 4 {
            return;
        }
        let area = Rect::new(anchor.x, anchor.bottom(), anchor.width, height);

        let filter_line = if filter.is_empty() {
            Line::from(vec![
                Span::styled("⌕ ", Style::default().fg(colors.header)),
                Span::styled("Search...", Style::default().fg(colors.text_dim)),
            ])
        } else {
            Line::from(vec![
                Span::styled("⌕ ", Style::default().fg(colors.header)),
                Span::styled(filter.to_string(), Style::default().fg(colors.text)),
                Span::styled("▏", Style::default().fg(colors.header)),
            ])
        };
        let mut lines = vec![filter_line];

        if matches.is_empty() {
            lines.push(
                Line::from(Span::styled(NO_RESULTS, Style::default().fg(colors.text_dim)))
                    .alignment(Alignment::Center),
            );
        } else {
            // Two lines per entry below the filter line and borders.
            let visible = usize::from((height - 3) / 2).max(1);
            let first = (self.picker.cursor() + 1).saturating_sub(visible);
            let hit = Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD);

            for (index, module) in matches.iter().enumerate().skip(first).take(visible) {
                let current = index == self.picker.cursor();
                let marker = if current { "▸ " } else { "  " };
                let title_style = if current {
                    Style::default()
                        .fg(colors.header)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(colors.text).add_modifier(Modifier::BOLD)
                };

                let mut title = vec![
                    Span::styled(marker, Style::default().fg(colors.header)),
                    Span::styled(format!("{} ", module.glyph()), Style::default().fg(colors.header)),
                ];
                title.extend(
                    highlight_segments(module.title(), filter)
                        .into_iter()
                        .map(|(text, matched)| {
                            Span::styled(text.to_string(), if matched { hit } else { title_style })
                        }),
                );
                lines.push(Line::from(title));

                let mut description = vec![Span::raw("    ")];
                description.extend(
                    highlight_segments(module.description(), filter)
                        .into_iter()
                        .map(|(text, matched)| {
                            let style = if matched {
                                hit
                            } else {
                                Style::default().fg(colors.text_dim)
                            };
                            Span::styled(text.to_string(), style)
                        }),
                );
                lines.push(Line::from(description));
            }
        }

        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(self.theme.border(true)),
            ),
            area,
        );
    }

    fn draw_query(&self, frame: &mut Frame, area: Rect, message_area: Rect) {
        let colors = &self.theme.colors;
        let focused = self.focus == Focus::Query;
        let enabled = self.query_editable();
        let error = self.query.validation().message();

        let border = if error.is_some() {
            Style::default().fg(colors.status_error)
        } else if !enabled {
            Style::default().fg(colors.disabled)
        } else {
            self.theme.border(focused)
        };

        let module = self.picker.selected();
        let glyph = module.map_or('+', |m| m.glyph());
        let mut spans = vec![Span::styled(
            format!("{glyph} "),
            Style::default().fg(if error.is_some() {
                colors.status_error
            } else {
                colors.header
            }),
        )];
        if self.query.text().is_empty() {
            let style = if enabled {
                Style::default().fg(colors.text_dim)
            } else {
                Style::default().fg(colors.disabled)
            };
            spans.push(Span::styled(query::placeholder(module), style));
        } else {
            spans.push(Span::styled(
                self.query.text().to_string(),
                Style::default().fg(if enabled { colors.text } else { colors.disabled }),
            ));
        }
        if self.input_handler.mode() == InputMode::TextEntry && focused {
            spans.push(Span::styled("▏", Style::default().fg(colors.header)));
        }

        let field = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border)
                .title(Span::styled(" Query ", self.theme.title(focused))),
        );
        frame.render_widget(field, area);

        if let Some(message) = error {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    message,
                    Style::default().fg(colors.status_error),
                ))
                .alignment(Alignment::Center),
                message_area,
            );
        }
    }

    fn draw_button(&mut self, frame: &mut Frame, area: Rect) {
        let colors = &self.theme.colors;
        self.button_area = area;

        let (label, style) = match self.search_started {
            Some(started) => {
                let elapsed = self.alerts.now().saturating_duration_since(started);
                let step = (elapsed.as_millis() / SPINNER_STEP.as_millis()) as usize;
                (
                    format!("{} Searching...", SPINNER[step % SPINNER.len()]),
                    Style::default().fg(colors.disabled),
                )
            }
            None => (
                "⚡ Search informations".to_string(),
                Style::default()
                    .fg(colors.header)
                    .add_modifier(Modifier::BOLD),
            ),
        };

        let button = Paragraph::new(Span::styled(label, style))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(style.remove_modifier(Modifier::BOLD)),
            );
        frame.render_widget(button, area);
    }

    fn draw_results(&self, frame: &mut Frame, area: Rect) {
        let colors = &self.theme.colors;
        let focused = self.focus == Focus::Results;

        let body = if self.results.is_empty() {
            Paragraph::new(Span::styled(
                RESULTS_PLACEHOLDER,
                Style::default().fg(colors.text_dim),
            ))
        } else {
            Paragraph::new(self.results.as_str())
                .style(Style::default().fg(colors.text))
                .scroll((self.results_scroll, 0))
        };

        frame.render_widget(
            body.block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(self.theme.border(focused))
                    .title(Span::styled(" Results ", self.theme.title(focused))),
            ),
            area,
        );
    }

    fn draw_cards(&self, frame: &mut Frame, area: Rect) {
        let colors = &self.theme.colors;
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(area);

        for ((glyph, title, text), column) in FEATURES.iter().zip(columns.iter()) {
            let card = Paragraph::new(Span::styled(*text, Style::default().fg(colors.text_dim)))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(colors.border_dim))
                        .title(Span::styled(
                            format!(" {glyph} {title} "),
                            Style::default()
                                .fg(colors.text)
                                .add_modifier(Modifier::BOLD),
                        ))
                        .title_alignment(Alignment::Center),
                );
            frame.render_widget(card, *column);
        }
    }

    /// Draw the footer with hotkey hints.
    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let colors = &self.theme.colors;
        let hotkey_style = Style::default().fg(colors.hotkey);
        let hints = Line::from(vec![
            Span::styled("[Tab]", hotkey_style),
            Span::raw(" Focus "),
            Span::styled("[Enter]", hotkey_style),
            Span::raw(" Open/Search "),
            Span::styled("[s]", hotkey_style),
            Span::raw(" Search "),
            Span::styled("[x]", hotkey_style),
            Span::raw(" Dismiss "),
            Span::styled("[Esc]", hotkey_style),
            Span::raw(" Back "),
            Span::styled("[q]", hotkey_style),
            Span::raw(" Quit"),
        ]);

        let footer = Paragraph::new(vec![
            hints,
            Line::from(Span::styled(
                COPYRIGHT,
                Style::default().fg(colors.border_dim),
            )),
        ])
        .style(Style::default().fg(colors.text_dim))
        .alignment(Alignment::Center);

        frame.render_widget(footer, area);
    }
}

/// Horizontally center a column of at most `width` cells inside `area`.
fn centered(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height)
}
