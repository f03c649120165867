//! Graduation celebration sequence
//!
//! A fixed four-stage narrative shown when a youth account turns 18. It only
//! moves forward, has no user data, and ends with a one-shot hand-off to the
//! navigator. Confetti is generated once when the sequencer is built and the
//! same pieces are reused for every render.

use std::fmt;

use rand::Rng;
use tracing::info;

use super::confetti::{self, ConfettiPiece};
use crate::navigation::{Navigator, Route};

/// Index of the last stage
pub const FINAL_STEP: u8 = 3;

/// Where the celebration hands over once it is complete
pub const DESTINATION: Route = Route::YouthDashboard;

/// The four stages, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CelebrationStage {
    /// Birthday greeting, with confetti
    Introduction,
    /// What changes with an adult account
    Announcement,
    /// Explicit "graduate my account" gate
    Confirmation,
    /// Congratulations and exit, with confetti
    Congratulation,
}

impl CelebrationStage {
    pub fn index(&self) -> u8 {
        match self {
            Self::Introduction => 0,
            Self::Announcement => 1,
            Self::Confirmation => 2,
            Self::Congratulation => 3,
        }
    }

    fn next(&self) -> Option<Self> {
        match self {
            Self::Introduction => Some(Self::Announcement),
            Self::Announcement => Some(Self::Confirmation),
            Self::Confirmation => Some(Self::Congratulation),
            Self::Congratulation => None,
        }
    }

    /// Whether the decorative confetti plays during this stage
    pub fn shows_confetti(&self) -> bool {
        matches!(self, Self::Introduction | Self::Congratulation)
    }
}

impl fmt::Display for CelebrationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Introduction => write!(f, "Introduction"),
            Self::Announcement => write!(f, "Announcement"),
            Self::Confirmation => write!(f, "Confirmation"),
            Self::Congratulation => write!(f, "Congratulation"),
        }
    }
}

/// Text content of a stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageContent {
    pub title: String,
    pub body: Vec<String>,
    /// Caption of the single action on this stage
    pub action: String,
}

/// The celebration state machine
#[derive(Debug, Clone)]
pub struct CelebrationSequencer {
    user_name: String,
    stage: CelebrationStage,
    confetti: Vec<ConfettiPiece>,
    completed: bool,
}

impl CelebrationSequencer {
    /// Build a sequencer with `confetti_count` pieces from the thread RNG
    pub fn new(user_name: impl Into<String>, confetti_count: usize) -> Self {
        Self::with_rng(user_name, confetti_count, &mut rand::thread_rng())
    }

    /// Build a sequencer drawing confetti parameters from `rng`
    pub fn with_rng<R: Rng + ?Sized>(
        user_name: impl Into<String>,
        confetti_count: usize,
        rng: &mut R,
    ) -> Self {
        let user_name = user_name.into();
        info!(user = %user_name, "Graduation celebration started");
        Self {
            user_name,
            stage: CelebrationStage::Introduction,
            confetti: confetti::generate(confetti_count, rng),
            completed: false,
        }
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn stage(&self) -> CelebrationStage {
        self.stage
    }

    /// Current stage index, 0 to [`FINAL_STEP`]
    pub fn current_step(&self) -> u8 {
        self.stage.index()
    }

    /// `current_step / 3 * 100`
    pub fn progress(&self) -> f64 {
        f64::from(self.current_step()) / f64::from(FINAL_STEP) * 100.0
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Whether `complete` would do anything
    pub fn can_complete(&self) -> bool {
        self.stage == CelebrationStage::Congratulation && !self.completed
    }

    /// Move to the next stage. Returns `false` on the final stage.
    pub fn advance(&mut self) -> bool {
        match self.stage.next() {
            Some(next) => {
                self.stage = next;
                info!(stage = %self.stage, "Celebration advanced");
                true
            }
            None => false,
        }
    }

    /// Confirm graduation. Only acts on the confirmation stage, where it
    /// behaves like `advance`; anywhere else it returns `false`.
    pub fn finish(&mut self) -> bool {
        if self.stage != CelebrationStage::Confirmation {
            return false;
        }
        self.advance()
    }

    /// Run the exit action once: calls `on_complete`, then sends the
    /// navigator to [`DESTINATION`]. Returns `false` without side effects if
    /// the final stage has not been reached or the action already ran.
    pub fn complete<N, F>(&mut self, navigator: &mut N, on_complete: F) -> bool
    where
        N: Navigator + ?Sized,
        F: FnOnce(),
    {
        if !self.can_complete() {
            return false;
        }
        self.completed = true;
        on_complete();
        info!(user = %self.user_name, "Graduation complete");
        navigator.navigate_to(DESTINATION, None);
        true
    }

    /// All pieces, fixed for the lifetime of the sequencer
    pub fn confetti(&self) -> &[ConfettiPiece] {
        &self.confetti
    }

    /// Pieces to draw for the current stage (empty when confetti is off)
    pub fn visible_confetti(&self) -> &[ConfettiPiece] {
        if self.stage.shows_confetti() {
            &self.confetti
        } else {
            &[]
        }
    }

    /// Text for the current stage
    pub fn content(&self) -> StageContent {
        let name = &self.user_name;
        match self.stage {
            CelebrationStage::Introduction => StageContent {
                title: format!("Happy 18th Birthday, {name}!"),
                body: vec!["A new chapter of your financial journey begins today.".into()],
                action: "Let's Celebrate".into(),
            },
            CelebrationStage::Announcement => StageContent {
                title: "Your Account is Graduating!".into(),
                body: vec![
                    "Here's what's new as you take full control:".into(),
                    "No more parental controls or spending limits.".into(),
                    "Access to adult features like overdrafts & investments.".into(),
                    "Your savings pots are now fully yours to manage.".into(),
                ],
                action: "Sounds Good!".into(),
            },
            CelebrationStage::Confirmation => StageContent {
                title: "Ready for the final step?".into(),
                body: vec![
                    "Confirm to transition your GrowBank account to an adult account.".into(),
                ],
                action: "I'm Ready! Graduate My Account".into(),
            },
            CelebrationStage::Congratulation => StageContent {
                title: format!("Congratulations, {name}!"),
                body: vec![
                    "You've officially graduated. Welcome to your new GrowBank account.".into(),
                ],
                action: "Go to My New Dashboard".into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::History;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sequencer() -> CelebrationSequencer {
        CelebrationSequencer::with_rng("Alex", 30, &mut StdRng::seed_from_u64(1))
    }

    #[test]
    fn test_starts_at_introduction() {
        let seq = sequencer();
        assert_eq!(seq.current_step(), 0);
        assert_eq!(seq.progress(), 0.0);
        assert_eq!(seq.visible_confetti().len(), 30);
        assert!(!seq.can_complete());
    }

    #[test]
    fn test_celebration_scenario() {
        let mut seq = sequencer();
        let mut history = History::new(Route::YouthDashboard);
        let mut calls = 0;

        assert!(seq.advance());
        assert!(seq.advance());
        assert_eq!(seq.current_step(), 2);
        assert!(seq.visible_confetti().is_empty());

        assert!(seq.finish());
        assert_eq!(seq.current_step(), 3);
        assert_eq!(seq.progress(), 100.0);

        assert!(seq.complete(&mut history, || calls += 1));
        assert_eq!(calls, 1);
        assert_eq!(history.current().route, DESTINATION);
        assert_eq!(history.depth(), 2);
    }

    #[test]
    fn test_advance_is_monotonic_and_stops_at_final() {
        let mut seq = sequencer();
        let mut last = seq.current_step();
        for _ in 0..10 {
            seq.advance();
            assert!(seq.current_step() >= last);
            last = seq.current_step();
        }
        assert_eq!(seq.current_step(), FINAL_STEP);
        assert!(!seq.advance());
    }

    #[test]
    fn test_finish_only_acts_on_confirmation() {
        let mut seq = sequencer();
        assert!(!seq.finish());
        assert_eq!(seq.current_step(), 0);

        seq.advance();
        seq.advance();
        seq.advance();
        assert!(!seq.finish());
        assert_eq!(seq.current_step(), 3);
    }

    #[test]
    fn test_complete_is_one_shot() {
        let mut seq = sequencer();
        let mut history = History::new(Route::YouthDashboard);
        let mut calls = 0;

        assert!(!seq.complete(&mut history, || calls += 1));
        while seq.advance() {}

        assert!(seq.complete(&mut history, || calls += 1));
        assert!(!seq.complete(&mut history, || calls += 1));
        assert_eq!(calls, 1);
        assert_eq!(history.version(), 1);
        assert!(seq.is_completed());
    }

    #[test]
    fn test_confetti_is_generated_once() {
        let mut seq = sequencer();
        let first: Vec<_> = seq.confetti().to_vec();
        while seq.advance() {}
        assert_eq!(seq.confetti(), first.as_slice());
        assert_eq!(seq.visible_confetti(), first.as_slice());
    }

    #[test]
    fn test_content_uses_name() {
        let mut seq = sequencer();
        assert_eq!(seq.content().title, "Happy 18th Birthday, Alex!");
        while seq.advance() {}
        let content = seq.content();
        assert_eq!(content.title, "Congratulations, Alex!");
        assert_eq!(content.action, "Go to My New Dashboard");
    }
}
