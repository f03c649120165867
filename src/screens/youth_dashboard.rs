//! Youth dashboard
//!
//! Shows the balance card and a widget that evolves with the account holder's
//! age. The simulated age is owned here as a plain field and passed down
//! through [`DashboardConfig`]; reaching 18 starts the graduation celebration
//! overlay.

use std::time::{Duration, Instant};

use tracing::info;

use crate::config::Settings;
use crate::data::{AccountBalance, DataProvider};
use crate::flow::{CelebrationSequencer, DeferredProgress};
use crate::models::{AgeStage, Money, PotIcon, PotId, SavingsPot, GRADUATION_AGE};
use crate::navigation::{Navigator, Route, RouteState, POT_ID_KEY};

/// Configuration handed to the dashboard by its owner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub user_name: String,
    pub user_age: u8,
    pub confetti_count: usize,
    pub progress_delay: Duration,
    /// The celebration already ran; don't start it again on mount
    pub graduated: bool,
}

impl DashboardConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            user_name: settings.user_name.clone(),
            user_age: settings.demo_user_age,
            confetti_count: settings.confetti_count,
            progress_delay: settings.progress_delay(),
            graduated: false,
        }
    }
}

/// A savings pot card with its delayed progress reveal
#[derive(Debug, Clone)]
pub struct PotCard {
    pub pot_id: PotId,
    pub name: String,
    pub icon: PotIcon,
    pub current_amount: Money,
    pub target_amount: Money,
    progress: DeferredProgress,
}

impl PotCard {
    fn new(pot: &SavingsPot, delay: Duration, now: Instant) -> Self {
        Self {
            pot_id: pot.id.clone(),
            name: pot.name.clone(),
            icon: pot.icon,
            current_amount: pot.current_amount,
            target_amount: pot.target_amount,
            progress: DeferredProgress::new(pot.progress_percent(), delay, now),
        }
    }

    /// Progress currently drawn (0 until the reveal fires)
    pub fn progress(&self) -> f64 {
        self.progress.value()
    }
}

/// Preview notice shown to older teens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolNotice {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FINANCIAL_TOOL_NOTICES: [ToolNotice; 3] = [
    ToolNotice {
        title: "Your Financial Snapshot",
        description: "Coming soon: A detailed breakdown of your spending habits to help you budget better.",
    },
    ToolNotice {
        title: "First Investment Goals",
        description: "Get ready to learn about investing. We'll guide you through the basics when you're ready.",
    },
    ToolNotice {
        title: "Preparing for 18",
        description: "Your account will evolve with you. We're preparing new features for your transition to financial independence!",
    },
];

/// What the evolving widget shows
#[derive(Debug, Clone, Copy)]
pub enum DashboardWidget<'a> {
    SavingsPots(&'a [PotCard]),
    FinancialTools(&'static [ToolNotice]),
}

/// Youth dashboard state
#[derive(Debug, Clone)]
pub struct YouthDashboard {
    user_name: String,
    user_age: u8,
    confetti_count: usize,
    balance: AccountBalance,
    pots: Vec<PotCard>,
    selected_pot: usize,
    graduation: Option<CelebrationSequencer>,
    graduated: bool,
}

impl YouthDashboard {
    pub fn new<P: DataProvider + ?Sized>(
        config: DashboardConfig,
        provider: &P,
        now: Instant,
    ) -> Self {
        info!(age = config.user_age, "Youth dashboard loaded");
        let pots = provider
            .savings_pots()
            .iter()
            .map(|pot| PotCard::new(pot, config.progress_delay, now))
            .collect();

        let mut dashboard = Self {
            user_name: config.user_name,
            user_age: config.user_age,
            confetti_count: config.confetti_count,
            balance: provider.main_balance(),
            pots,
            selected_pot: 0,
            graduation: None,
            graduated: config.graduated,
        };
        dashboard.check_graduation();
        dashboard
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn user_age(&self) -> u8 {
        self.user_age
    }

    pub fn age_stage(&self) -> AgeStage {
        AgeStage::from_age(self.user_age)
    }

    pub fn heading(&self) -> &'static str {
        self.age_stage().heading()
    }

    pub fn balance(&self) -> AccountBalance {
        self.balance
    }

    pub fn widget(&self) -> DashboardWidget<'_> {
        match self.age_stage() {
            AgeStage::SavingsPots => DashboardWidget::SavingsPots(&self.pots),
            AgeStage::FinancialTools | AgeStage::Graduated => {
                DashboardWidget::FinancialTools(&FINANCIAL_TOOL_NOTICES)
            }
        }
    }

    pub fn pot_cards(&self) -> &[PotCard] {
        &self.pots
    }

    pub fn selected_pot(&self) -> usize {
        self.selected_pot
    }

    pub fn select_next_pot(&mut self) {
        if self.selected_pot + 1 < self.pots.len() {
            self.selected_pot += 1;
        }
    }

    pub fn select_previous_pot(&mut self) {
        self.selected_pot = self.selected_pot.saturating_sub(1);
    }

    /// The "simulate turning 18" demo control is only offered before 18
    pub fn shows_demo_controls(&self) -> bool {
        self.user_age < GRADUATION_AGE
    }

    pub fn simulate_turning_18(&mut self) {
        if !self.shows_demo_controls() {
            return;
        }
        self.user_age = GRADUATION_AGE;
        info!(age = self.user_age, "Simulated 18th birthday");
        self.check_graduation();
    }

    fn check_graduation(&mut self) {
        if self.user_age >= GRADUATION_AGE && !self.graduated && self.graduation.is_none() {
            self.graduation = Some(CelebrationSequencer::new(
                self.user_name.clone(),
                self.confetti_count,
            ));
        }
    }

    /// Whether the celebration has been completed
    pub fn has_graduated(&self) -> bool {
        self.graduated
    }

    /// Settings to remount this dashboard with the same demo state
    pub fn remount_config(&self, progress_delay: Duration) -> DashboardConfig {
        DashboardConfig {
            user_name: self.user_name.clone(),
            user_age: self.user_age,
            confetti_count: self.confetti_count,
            progress_delay,
            graduated: self.graduated,
        }
    }

    /// The celebration overlay, while it is showing
    pub fn graduation(&self) -> Option<&CelebrationSequencer> {
        self.graduation.as_ref()
    }

    pub fn graduation_mut(&mut self) -> Option<&mut CelebrationSequencer> {
        self.graduation.as_mut()
    }

    /// Run the celebration's exit action and hide the overlay
    pub fn complete_graduation<N: Navigator + ?Sized>(&mut self, navigator: &mut N) -> bool {
        let Some(sequencer) = self.graduation.as_mut() else {
            return false;
        };

        let mut hide = false;
        let completed = sequencer.complete(navigator, || hide = true);
        if hide {
            info!("Graduation complete, hiding celebration");
            self.graduation = None;
            self.graduated = true;
        }
        completed
    }

    /// Open the detail page of the pot at `index`
    pub fn open_pot<N: Navigator + ?Sized>(&self, index: usize, navigator: &mut N) -> bool {
        let Some(card) = self.pots.get(index) else {
            return false;
        };
        navigator.navigate_to(
            Route::SavingsPotDetail,
            Some(RouteState::new().with(POT_ID_KEY, card.pot_id.as_str())),
        );
        true
    }

    /// Advance pending progress reveals
    pub fn tick(&mut self, now: Instant) -> bool {
        self.pots
            .iter_mut()
            .fold(false, |changed, card| card.progress.tick(now) || changed)
    }
}
