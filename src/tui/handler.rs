//! Event handler for the TUI
//!
//! Routes key events to the mounted screen. Global keys: Ctrl+C always quits,
//! `q` quits when no text field is active, F1-F3 jump to the top-level routes.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::info;

use crate::flow::{CelebrationStage, Payload};
use crate::navigation::{Navigator, Route};
use crate::screens::{ControlAction, DashboardWidget};

use super::app::{App, Screen};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event, now: Instant) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key, now),
        Event::Tick => {
            app.tick(now);
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event, then mount whatever screen the key navigated to
pub fn handle_key_event(app: &mut App, key: KeyEvent, now: Instant) -> Result<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    match key.code {
        KeyCode::F(1) => app.go_to(Route::Onboarding),
        KeyCode::F(2) => app.go_to(Route::ParentalDashboard),
        KeyCode::F(3) => app.go_to(Route::YouthDashboard),
        KeyCode::Char('q') if !app.is_editing() => {
            app.quit();
            return Ok(());
        }
        _ => {
            app.clear_status();
            match app.screen {
                Screen::Onboarding(_) => handle_onboarding_key(app, key),
                Screen::YouthDashboard(_) => handle_youth_key(app, key, now),
                Screen::SavingsPotDetail(_) => handle_pot_detail_key(app, key),
                Screen::ParentalDashboard(_) => handle_parental_key(app, key),
                Screen::TransactionHistory { .. } => handle_transactions_key(app, key),
                Screen::NotFound => {
                    if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                        app.go_to(Route::Onboarding);
                    }
                }
            }
        }
    }

    app.sync(now);
    Ok(())
}

fn handle_onboarding_key(app: &mut App, key: KeyEvent) {
    let Screen::Onboarding(state) = &mut app.screen else {
        return;
    };

    if state.screen.is_dialog_open() {
        match key.code {
            KeyCode::Enter => {
                state.screen.go_to_dashboard(&mut app.history);
            }
            KeyCode::Esc => state.screen.close_dialog(),
            _ => {}
        }
        return;
    }

    let typing = state.is_typing();
    match key.code {
        KeyCode::Enter => {
            if state.screen.wizard().is_last_step() {
                let mut sink = |payload: &Payload| {
                    info!(fields = payload.len(), "Account details received");
                };
                if let Err(e) = state.screen.submit(&mut sink) {
                    app.status_message = Some(e.to_string());
                }
            } else {
                state.next();
            }
        }
        KeyCode::Esc => {
            state.back();
        }
        KeyCode::Tab | KeyCode::Down => state.focus_next(),
        KeyCode::BackTab | KeyCode::Up => state.focus_previous(),
        KeyCode::Backspace if typing => state.backspace(),
        KeyCode::Left if typing => state.input.move_left(),
        KeyCode::Right if typing => state.input.move_right(),
        KeyCode::Char(c) if typing => state.type_char(c),
        KeyCode::Char(' ') => state.screen.toggle_allowance(),
        KeyCode::Left | KeyCode::Char('-') => state.screen.decrease_allowance(),
        KeyCode::Right | KeyCode::Char('+') => state.screen.increase_allowance(),
        _ => {}
    }
}

fn handle_youth_key(app: &mut App, key: KeyEvent, now: Instant) {
    let Screen::YouthDashboard(dashboard) = &mut app.screen else {
        return;
    };

    if let Some(sequencer) = dashboard.graduation_mut() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
            match sequencer.stage() {
                CelebrationStage::Introduction | CelebrationStage::Announcement => {
                    sequencer.advance();
                }
                CelebrationStage::Confirmation => {
                    sequencer.finish();
                }
                CelebrationStage::Congratulation => {
                    dashboard.complete_graduation(&mut app.history);
                }
            }
        }
        return;
    }

    let mut started_celebration = false;
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => dashboard.select_previous_pot(),
        KeyCode::Down | KeyCode::Char('j') => dashboard.select_next_pot(),
        KeyCode::Enter => {
            if matches!(dashboard.widget(), DashboardWidget::SavingsPots(_)) {
                dashboard.open_pot(dashboard.selected_pot(), &mut app.history);
            }
        }
        KeyCode::Char('s') if dashboard.shows_demo_controls() => {
            dashboard.simulate_turning_18();
            started_celebration = dashboard.graduation().is_some();
        }
        KeyCode::Char('t') => app.history.navigate_to(Route::TransactionHistory, None),
        _ => {}
    }

    if started_celebration {
        app.restart_animation(now);
    }
}

fn handle_pot_detail_key(app: &mut App, key: KeyEvent) {
    let Screen::SavingsPotDetail(detail) = &mut app.screen else {
        return;
    };

    if detail.dialog().is_open() {
        match key.code {
            KeyCode::Enter => {
                if let Some(amount) = detail.confirm() {
                    app.status_message = Some(format!("Added {} to {}", amount, detail.pot().name));
                }
            }
            KeyCode::Esc => detail.cancel_dialog(),
            KeyCode::Backspace => detail.dialog_mut().pop_char(),
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' || c == '£' => {
                detail.dialog_mut().push_char(c);
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('a') => detail.open_dialog(),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => detail.back(&mut app.history),
        _ => {}
    }
}

fn handle_parental_key(app: &mut App, key: KeyEvent) {
    let Screen::ParentalDashboard(dashboard) = &mut app.screen else {
        return;
    };

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => dashboard.select_previous(),
        KeyCode::Down | KeyCode::Char('j') => dashboard.select_next(),
        KeyCode::Tab => dashboard.switch_focus(),
        KeyCode::Char(' ') => {
            dashboard.adjust_selected(ControlAction::Toggle);
        }
        KeyCode::Left | KeyCode::Char('-') => {
            dashboard.adjust_selected(ControlAction::Decrease);
        }
        KeyCode::Right | KeyCode::Char('+') => {
            dashboard.adjust_selected(ControlAction::Increase);
        }
        KeyCode::Enter | KeyCode::Char('t') => {
            dashboard.view_transactions(dashboard.selected(), &mut app.history);
        }
        KeyCode::Char('a') => dashboard.add_child(&mut app.history),
        _ => {}
    }
}

fn handle_transactions_key(app: &mut App, key: KeyEvent) {
    let Screen::TransactionHistory { screen, searching } = &mut app.screen else {
        return;
    };

    if *searching {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => *searching = false,
            KeyCode::Backspace => screen.pop_search_char(),
            KeyCode::Char(c) => screen.push_search_char(c),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('/') => *searching = true,
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => screen.back(&mut app.history),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::data::MockDataProvider;
    use crate::models::Money;

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE), Instant::now()).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn app(start: Route) -> App {
        App::new(MockDataProvider::new(), Settings::default(), start, Instant::now())
    }

    #[test]
    fn test_q_types_into_fields_but_quits_elsewhere() {
        let mut app = app(Route::Onboarding);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);

        let mut app = self::app(Route::ParentalDashboard);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_onboarding_through_to_parental_dashboard() {
        let mut app = app(Route::Onboarding);
        type_text(&mut app, "Jane Doe");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        // Allowance step: bump twice
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);

        let Screen::Onboarding(state) = &app.screen else {
            panic!("expected onboarding");
        };
        assert!(state.screen.wizard().is_last_step());
        assert_eq!(state.screen.summary().allowance.amount, Money::from_pounds(12));
        assert_eq!(state.screen.summary().parent_name, "Jane Doe");

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.history.current().route, Route::ParentalDashboard);
        assert!(matches!(app.screen, Screen::ParentalDashboard(_)));
    }

    #[test]
    fn test_pot_contribution_via_keys() {
        let mut app = app(Route::YouthDashboard);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.history.current().route, Route::SavingsPotDetail);

        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "5x.50");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.status_message.as_deref(), Some("Added £5.50 to Mountain Bike"));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.history.current().route, Route::YouthDashboard);
    }

    #[test]
    fn test_celebration_via_keys() {
        let mut app = app(Route::YouthDashboard);
        press(&mut app, KeyCode::Char('s'));
        for _ in 0..3 {
            press(&mut app, KeyCode::Enter);
        }
        let Screen::YouthDashboard(dashboard) = &app.screen else {
            panic!("expected the youth dashboard");
        };
        assert!(dashboard.graduation().unwrap().can_complete());

        press(&mut app, KeyCode::Enter);
        let Screen::YouthDashboard(dashboard) = &app.screen else {
            panic!("expected the youth dashboard");
        };
        assert!(dashboard.graduation().is_none());
        assert!(!dashboard.shows_demo_controls());
    }

    #[test]
    fn test_transaction_search_and_back() {
        let mut app = app(Route::ParentalDashboard);
        press(&mut app, KeyCode::Char('t'));
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "bus");
        press(&mut app, KeyCode::Enter);

        let Screen::TransactionHistory { screen, searching } = &app.screen else {
            panic!("expected transaction history");
        };
        assert!(!searching);
        assert_eq!(screen.filtered().len(), 1);

        press(&mut app, KeyCode::Char('b'));
        assert_eq!(app.history.current().route, Route::ParentalDashboard);
    }
}
