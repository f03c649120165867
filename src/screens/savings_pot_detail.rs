//! Savings pot detail
//!
//! Resolves the pot named by the `potId` route state. A missing or unknown id
//! redirects to the youth dashboard and no screen is produced.

use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::data::DataProvider;
use crate::flow::DeferredProgress;
use crate::models::{Money, SavingsPot};
use crate::navigation::{NavigationRequest, Navigator, Route, POT_ID_KEY};

/// Where an unresolvable pot sends the user
pub const MISSING_POT_ROUTE: Route = Route::YouthDashboard;

/// "Add Money" dialog state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContributionDialog {
    open: bool,
    input: String,
}

impl ContributionDialog {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    /// The entered amount, when it parses as a positive value
    pub fn parsed_amount(&self) -> Option<Money> {
        Money::parse(&self.input)
            .ok()
            .filter(|amount| amount.is_positive())
    }

    /// The confirm action stays disabled until the input is valid
    pub fn can_confirm(&self) -> bool {
        self.open && self.parsed_amount().is_some()
    }

    fn open(&mut self) {
        self.open = true;
        self.input.clear();
    }

    fn close(&mut self) {
        self.open = false;
        self.input.clear();
    }
}

#[derive(Debug, Clone)]
pub struct SavingsPotDetail {
    pot: SavingsPot,
    progress: DeferredProgress,
    dialog: ContributionDialog,
    added: Vec<Money>,
}

impl SavingsPotDetail {
    /// Mount for the given navigation entry
    pub fn mount<P, N>(
        provider: &P,
        request: &NavigationRequest,
        navigator: &mut N,
        now: Instant,
        delay: Duration,
    ) -> Option<Self>
    where
        P: DataProvider + ?Sized,
        N: Navigator + ?Sized,
    {
        let pot = request
            .state_value(POT_ID_KEY)
            .and_then(|id| provider.savings_pot(id));

        let Some(pot) = pot else {
            warn!(
                pot_id = request.state_value(POT_ID_KEY).unwrap_or(""),
                "Savings pot not found, redirecting"
            );
            navigator.replace(MISSING_POT_ROUTE, None);
            return None;
        };

        info!(pot_id = %pot.id, "Savings pot detail loaded");
        Some(Self {
            progress: DeferredProgress::new(pot.progress_percent(), delay, now),
            pot: pot.clone(),
            dialog: ContributionDialog::default(),
            added: Vec::new(),
        })
    }

    pub fn pot(&self) -> &SavingsPot {
        &self.pot
    }

    /// Progress currently drawn
    pub fn progress(&self) -> f64 {
        self.progress.value()
    }

    pub fn tick(&mut self, now: Instant) -> bool {
        self.progress.tick(now)
    }

    pub fn dialog(&self) -> &ContributionDialog {
        &self.dialog
    }

    pub fn dialog_mut(&mut self) -> &mut ContributionDialog {
        &mut self.dialog
    }

    pub fn open_dialog(&mut self) {
        self.dialog.open();
    }

    pub fn cancel_dialog(&mut self) {
        self.dialog.close();
    }

    /// Accept the entered amount. Returns it and closes the dialog, or leaves
    /// everything untouched when the input is not a positive amount.
    pub fn confirm(&mut self) -> Option<Money> {
        if !self.dialog.can_confirm() {
            return None;
        }
        let amount = self.dialog.parsed_amount()?;
        info!(pot_id = %self.pot.id, amount = %amount, "Contribution added");
        self.added.push(amount);
        self.dialog.close();
        Some(amount)
    }

    /// Contributions confirmed while this screen was mounted
    pub fn added_this_visit(&self) -> Money {
        self.added.iter().copied().sum()
    }

    pub fn back<N: Navigator + ?Sized>(&self, navigator: &mut N) {
        navigator.go_back();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MockDataProvider;
    use crate::navigation::{History, RouteState};

    const DELAY: Duration = Duration::from_millis(300);

    fn request(pot_id: Option<&str>) -> NavigationRequest {
        NavigationRequest::new(
            Route::SavingsPotDetail,
            pot_id.map(|id| RouteState::new().with(POT_ID_KEY, id)),
        )
    }

    fn mount(pot_id: Option<&str>, history: &mut History) -> Option<SavingsPotDetail> {
        SavingsPotDetail::mount(
            &MockDataProvider::new(),
            &request(pot_id),
            history,
            Instant::now(),
            DELAY,
        )
    }

    #[test]
    fn test_known_pot_mounts() {
        let mut history = History::new(Route::SavingsPotDetail);
        let detail = mount(Some("pot2"), &mut history).unwrap();
        assert_eq!(detail.pot().name, "Mountain Bike");
        assert_eq!(detail.progress(), 0.0);
        assert_eq!(history.version(), 0);
    }

    #[test]
    fn test_unknown_or_missing_pot_redirects() {
        for pot_id in [Some("pot9"), None] {
            let mut history = History::new(Route::SavingsPotDetail);
            assert!(mount(pot_id, &mut history).is_none());
            assert_eq!(history.current().route, MISSING_POT_ROUTE);
        }
    }

    #[test]
    fn test_redirect_replaces_broken_entry() {
        let mut history = History::new(Route::YouthDashboard);
        history.navigate_to(Route::SavingsPotDetail, None);
        assert!(mount(Some("pot9"), &mut history).is_none());
        assert_eq!(history.depth(), 2);

        history.go_back();
        assert_eq!(history.current().route, Route::YouthDashboard);
        assert_eq!(history.depth(), 1);
    }

    #[test]
    fn test_progress_reveal() {
        let mut history = History::new(Route::SavingsPotDetail);
        let start = Instant::now();
        let mut detail = SavingsPotDetail::mount(
            &MockDataProvider::new(),
            &request(Some("pot3")),
            &mut history,
            start,
            DELAY,
        )
        .unwrap();
        assert!(!detail.tick(start + Duration::from_millis(299)));
        assert!(detail.tick(start + DELAY));
        assert!((detail.progress() - 19.0).abs() < 1e-9);
    }

    #[test]
    fn test_contribution_requires_positive_amount() {
        let mut history = History::new(Route::SavingsPotDetail);
        let mut detail = mount(Some("pot1"), &mut history).unwrap();
        assert!(detail.confirm().is_none());

        detail.open_dialog();
        for bad in ["", "abc", "0", "-5", "1.2.3", "1.5£", "1.50£", "10.509", "99999999999999999"] {
            detail.dialog_mut().set_input(bad);
            assert!(!detail.dialog().can_confirm(), "{bad:?} should be rejected");
            assert!(detail.confirm().is_none());
        }
        assert!(detail.dialog().is_open());

        detail.dialog_mut().set_input("£12.50");
        assert_eq!(detail.confirm(), Some(Money::from_pence(1250)));
        assert!(!detail.dialog().is_open());
        assert_eq!(detail.dialog().input(), "");
        assert_eq!(detail.added_this_visit(), Money::from_pence(1250));
    }

    #[test]
    fn test_back_pops_history() {
        let mut history = History::new(Route::YouthDashboard);
        history.navigate_to(
            Route::SavingsPotDetail,
            Some(RouteState::new().with(POT_ID_KEY, "pot1")),
        );
        let detail = SavingsPotDetail::mount(
            &MockDataProvider::new(),
            history.current(),
            &mut History::new(Route::SavingsPotDetail),
            Instant::now(),
            DELAY,
        )
        .unwrap();
        detail.back(&mut history);
        assert_eq!(history.current().route, Route::YouthDashboard);
    }
}
