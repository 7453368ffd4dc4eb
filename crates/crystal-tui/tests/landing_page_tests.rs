//! End-to-end tests driving the landing page through key events and a test
//! backend.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crystal_alerts::{AlertCategory, ManualClock, Phase};
use crystal_core::CrystalConfig;
use crystal_tui::App;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn press(app: &mut App<ManualClock>, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App<ManualClock>, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn screen(app: &mut App<ManualClock>) -> String {
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    terminal.draw(|frame| app.draw(frame)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn search_journey_from_error_to_results() {
    let mut config = CrystalConfig::default();
    config.search.delay_ms = 20;
    let clock = ManualClock::new();
    let mut app = App::with_clock(config, clock.clone()).unwrap();

    // Pick "Leak Monitor" through the dropdown.
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "leak");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.selected_module().map(|m| m.title()), Some("Leak Monitor"));

    // A malformed email is rejected with an error toast.
    type_text(&mut app, "analyst@");
    press(&mut app, KeyCode::Enter);
    assert!(!app.is_loading());
    clock.set_elapsed(ms(500));
    app.update();
    let text = screen(&mut app);
    assert!(text.contains("Invalid input"));
    assert!(text.contains("Please enter a valid email address."));

    // Fixing the address clears the message and runs the search.
    type_text(&mut app, "example.org");
    assert!(app.query().validation().is_valid());
    press(&mut app, KeyCode::Enter);
    assert!(app.is_loading());

    let deadline = Instant::now() + Duration::from_secs(5);
    while app.is_loading() && Instant::now() < deadline {
        app.update();
        std::thread::sleep(ms(5));
    }
    assert!(!app.is_loading());

    let alerts = app.alerts().alerts();
    assert_eq!(alerts.len(), 2);
    assert_eq!(alerts[0].category(), AlertCategory::Error);
    assert_eq!(alerts[1].category(), AlertCategory::Success);

    clock.set_elapsed(ms(1000));
    app.update();
    let text = screen(&mut app);
    assert!(text.contains("\"query\": \"analyst@example.org\""));
    assert!(text.contains("Research complete!"));
}

#[test]
fn toasts_follow_their_lifecycle_while_rendering() {
    let clock = ManualClock::new();
    let mut app = App::with_clock(CrystalConfig::default(), clock.clone()).unwrap();

    // Searching with no module selected raises an info toast.
    press(&mut app, KeyCode::Char('s'));
    let id = app.alerts().alerts()[0].id();
    assert!(!screen(&mut app).contains("Selection required"));

    for at in [10, 200, 500, 3000] {
        clock.set_elapsed(ms(at));
        app.update();
        assert_eq!(app.alerts().get(id).map(|a| a.phase()), Some(Phase::Visible));
    }
    assert!(screen(&mut app).contains("Selection required"));

    clock.set_elapsed(ms(4000));
    app.update();
    assert_eq!(app.alerts().get(id).map(|a| a.phase()), Some(Phase::Exiting));

    clock.set_elapsed(ms(4300));
    app.update();
    assert!(app.alerts().is_empty());
    assert!(!screen(&mut app).contains("Selection required"));
}
