//! Application state for the TUI
//!
//! The App owns the navigator and the mounted screen. Whenever the history
//! changes a fresh screen model is mounted; the previous one is dropped along
//! with any pending timers.

use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::config::Settings;
use crate::data::MockDataProvider;
use crate::flow::FieldSpec;
use crate::navigation::{History, Navigator, Route};
use crate::screens::{
    DashboardConfig, OnboardingScreen, ParentalDashboard, SavingsPotDetail, TransactionHistory,
    YouthDashboard,
};

use super::widgets::input::TextInput;

/// Redirect chains longer than this end on the not-found screen
const MAX_REDIRECTS: usize = 8;

/// Onboarding screen plus the TUI's field focus
#[derive(Debug, Clone)]
pub struct OnboardingState {
    pub screen: OnboardingScreen,
    pub focused_field: usize,
    pub input: TextInput,
}

impl OnboardingState {
    fn new(screen: OnboardingScreen) -> Self {
        let mut state = Self {
            screen,
            focused_field: 0,
            input: TextInput::new(),
        };
        state.load_focused();
        state
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.screen.wizard().current_definition().fields
    }

    pub fn focused_spec(&self) -> Option<&FieldSpec> {
        self.fields().get(self.focused_field)
    }

    /// Whether keystrokes go into a text field
    pub fn is_typing(&self) -> bool {
        !self.screen.is_dialog_open() && self.focused_spec().is_some_and(FieldSpec::is_textual)
    }

    fn load_focused(&mut self) {
        let text = match self.focused_spec() {
            Some(spec) if spec.is_textual() => Some(self.screen.wizard().text(&spec.name).to_string()),
            _ => None,
        };
        self.input = match text {
            Some(text) => TextInput::new().content(text).focused(true),
            None => TextInput::new(),
        };
    }

    fn store_input(&mut self) {
        if let Some(name) = self.focused_spec().filter(|s| s.is_textual()).map(|s| s.name.clone()) {
            self.screen.set_text(&name, self.input.value());
        }
    }

    pub fn focus_next(&mut self) {
        let count = self.fields().len();
        if count > 0 {
            self.focused_field = (self.focused_field + 1) % count;
            self.load_focused();
        }
    }

    pub fn focus_previous(&mut self) {
        let count = self.fields().len();
        if count > 0 {
            self.focused_field = (self.focused_field + count - 1) % count;
            self.load_focused();
        }
    }

    pub fn type_char(&mut self, c: char) {
        self.input.insert(c);
        self.store_input();
    }

    pub fn backspace(&mut self) {
        self.input.backspace();
        self.store_input();
    }

    pub fn next(&mut self) -> bool {
        let moved = self.screen.next();
        if moved {
            self.focused_field = 0;
            self.load_focused();
        }
        moved
    }

    pub fn back(&mut self) -> bool {
        let moved = self.screen.back();
        if moved {
            self.focused_field = 0;
            self.load_focused();
        }
        moved
    }
}

/// The mounted screen
#[derive(Debug, Clone)]
pub enum Screen {
    Onboarding(OnboardingState),
    YouthDashboard(YouthDashboard),
    SavingsPotDetail(SavingsPotDetail),
    ParentalDashboard(ParentalDashboard),
    TransactionHistory {
        screen: TransactionHistory,
        searching: bool,
    },
    NotFound,
}

/// Main application state
pub struct App {
    pub provider: MockDataProvider,
    pub settings: Settings,
    pub history: History,
    pub screen: Screen,

    /// History version the current screen was mounted for
    mounted_version: Option<u64>,

    /// Demo state carried across youth dashboard remounts
    dashboard_config: Option<DashboardConfig>,

    /// When the mounted screen's animations started
    pub animation_start: Instant,

    /// Instant of the most recent tick
    pub last_tick: Instant,

    pub should_quit: bool,

    pub status_message: Option<String>,
}

impl App {
    pub fn new(provider: MockDataProvider, settings: Settings, start: Route, now: Instant) -> Self {
        let mut app = Self {
            provider,
            settings,
            history: History::new(start),
            screen: Screen::NotFound,
            mounted_version: None,
            dashboard_config: None,
            animation_start: now,
            last_tick: now,
            should_quit: false,
            status_message: None,
        };
        app.sync(now);
        app
    }

    /// Mount a screen for the current history entry if it changed.
    /// Screens that redirect while mounting are followed.
    pub fn sync(&mut self, now: Instant) {
        let mut mounts = 0;
        while self.mounted_version != Some(self.history.version()) {
            if mounts == MAX_REDIRECTS {
                warn!(route = %self.history.current().route, "Too many redirects");
                self.screen = Screen::NotFound;
                self.mounted_version = Some(self.history.version());
                break;
            }
            mounts += 1;

            self.remember_dashboard();
            let version = self.history.version();
            self.screen = self.mount(now);
            self.mounted_version = Some(version);
        }
    }

    fn remember_dashboard(&mut self) {
        if let Screen::YouthDashboard(dashboard) = &self.screen {
            self.dashboard_config = Some(dashboard.remount_config(self.settings.progress_delay()));
        }
    }

    fn mount(&mut self, now: Instant) -> Screen {
        let request = self.history.current().clone();
        info!(route = %request.route, "Mounting screen");
        self.animation_start = now;
        self.last_tick = now;

        match request.route {
            Route::Onboarding => match OnboardingScreen::new(&self.provider) {
                Ok(screen) => Screen::Onboarding(OnboardingState::new(screen)),
                Err(e) => {
                    self.set_status(e.to_string());
                    Screen::NotFound
                }
            },
            Route::YouthDashboard => {
                let config = self
                    .dashboard_config
                    .clone()
                    .unwrap_or_else(|| DashboardConfig::from_settings(&self.settings));
                Screen::YouthDashboard(YouthDashboard::new(config, &self.provider, now))
            }
            Route::SavingsPotDetail => SavingsPotDetail::mount(
                &self.provider,
                &request,
                &mut self.history,
                now,
                self.settings.progress_delay(),
            )
            .map_or(Screen::NotFound, Screen::SavingsPotDetail),
            Route::ParentalDashboard => {
                Screen::ParentalDashboard(ParentalDashboard::new(&self.provider))
            }
            Route::TransactionHistory => {
                TransactionHistory::mount(&self.provider, &request, &mut self.history)
                    .map_or(Screen::NotFound, |screen| Screen::TransactionHistory {
                        screen,
                        searching: false,
                    })
            }
            Route::NotFound => Screen::NotFound,
        }
    }

    /// Advance timers on the mounted screen
    pub fn tick(&mut self, now: Instant) -> bool {
        self.last_tick = now;
        match &mut self.screen {
            Screen::YouthDashboard(dashboard) => dashboard.tick(now),
            Screen::SavingsPotDetail(detail) => detail.tick(now),
            _ => false,
        }
    }

    /// Time since the mounted screen's animations started
    pub fn animation_elapsed(&self) -> Duration {
        self.last_tick.saturating_duration_since(self.animation_start)
    }

    /// Restart animations (used when the celebration overlay appears)
    pub fn restart_animation(&mut self, now: Instant) {
        self.animation_start = now;
        self.last_tick = now;
    }

    /// Jump to a top-level route
    pub fn go_to(&mut self, route: Route) {
        self.history.navigate_to(route, None);
    }

    /// Whether keystrokes are currently captured by a text field
    pub fn is_editing(&self) -> bool {
        match &self.screen {
            Screen::Onboarding(state) => state.is_typing(),
            Screen::SavingsPotDetail(detail) => detail.dialog().is_open(),
            Screen::TransactionHistory { searching, .. } => *searching,
            _ => false,
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{RouteState, POT_ID_KEY};

    fn app(start: Route) -> App {
        App::new(MockDataProvider::new(), Settings::default(), start, Instant::now())
    }

    #[test]
    fn test_starts_on_requested_route() {
        let app = app(Route::Onboarding);
        assert!(matches!(app.screen, Screen::Onboarding(_)));
        assert!(app.is_editing());
    }

    #[test]
    fn test_unknown_pot_redirects_to_dashboard() {
        let mut app = app(Route::YouthDashboard);
        app.history.navigate_to(
            Route::SavingsPotDetail,
            Some(RouteState::new().with(POT_ID_KEY, "pot9")),
        );
        app.sync(Instant::now());
        assert_eq!(app.history.current().route, Route::YouthDashboard);
        assert!(matches!(app.screen, Screen::YouthDashboard(_)));

        // Back never lands on the broken detail entry
        app.history.go_back();
        app.sync(Instant::now());
        assert_eq!(app.history.depth(), 1);
        assert!(matches!(app.screen, Screen::YouthDashboard(_)));
    }

    #[test]
    fn test_remount_discards_pending_reveal() {
        let start = Instant::now();
        let mut app = App::new(MockDataProvider::new(), Settings::default(), Route::YouthDashboard, start);
        app.history.navigate_to(
            Route::SavingsPotDetail,
            Some(RouteState::new().with(POT_ID_KEY, "pot1")),
        );
        app.sync(start);
        app.history.go_back();
        app.sync(start);

        // The detail screen is gone; only the new dashboard's timers fire
        assert!(app.tick(start + Duration::from_secs(1)));
        let Screen::YouthDashboard(dashboard) = &app.screen else {
            panic!("expected the youth dashboard");
        };
        assert!(dashboard.pot_cards()[0].progress() > 0.0);
    }

    #[test]
    fn test_graduation_survives_remount() {
        let now = Instant::now();
        let mut app = App::new(MockDataProvider::new(), Settings::default(), Route::YouthDashboard, now);
        let Screen::YouthDashboard(dashboard) = &mut app.screen else {
            panic!("expected the youth dashboard");
        };
        dashboard.simulate_turning_18();
        let seq = dashboard.graduation_mut().unwrap();
        seq.advance();
        seq.advance();
        seq.finish();
        assert!(dashboard.complete_graduation(&mut app.history));

        app.sync(now);
        let Screen::YouthDashboard(dashboard) = &app.screen else {
            panic!("expected the youth dashboard");
        };
        assert_eq!(dashboard.user_age(), 18);
        assert!(dashboard.graduation().is_none());
    }

    #[test]
    fn test_onboarding_typing_updates_payload() {
        let mut app = app(Route::Onboarding);
        let Screen::Onboarding(state) = &mut app.screen else {
            panic!("expected onboarding");
        };
        for c in "Jane".chars() {
            state.type_char(c);
        }
        state.focus_next();
        state.focus_previous();
        assert_eq!(state.input.value(), "Jane");
        assert_eq!(state.screen.wizard().text("parentName"), "Jane");

        assert!(state.next());
        assert!(state.next());
        assert!(!state.is_typing());
    }
}
