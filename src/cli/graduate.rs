//! `growbank graduate`: play the 18th-birthday celebration as line prompts

use std::io::{BufRead, Write};
use std::time::Instant;

use crate::data::DataProvider;
use crate::error::{GrowBankError, GrowBankResult};
use crate::flow::{CelebrationStage, ConfettiPiece};
use crate::navigation::{History, Route};
use crate::screens::{DashboardConfig, YouthDashboard};

use super::prompt::Prompter;

const STRIP_WIDTH: usize = 48;
const CONFETTI_GLYPHS: [char; 4] = ['*', '+', 'o', '~'];

/// Draw confetti as a single row, each piece at its horizontal position
pub fn confetti_strip(pieces: &[ConfettiPiece], width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let mut row = vec![' '; width];
    for piece in pieces {
        let col = (piece.x_percent / 100.0 * (width - 1) as f64).round() as usize;
        row[col.min(width - 1)] = CONFETTI_GLYPHS[piece.id % CONFETTI_GLYPHS.len()];
    }
    row.into_iter().collect::<String>().trim_end().to_string()
}

/// Simulate turning 18 on the youth dashboard and step through the
/// celebration. Returns the route the user ends on, or `None` if cancelled.
pub fn run_graduation<P, R, W>(
    provider: &P,
    config: DashboardConfig,
    prompter: &mut Prompter<R, W>,
) -> GrowBankResult<Option<Route>>
where
    P: DataProvider + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut history = History::new(Route::YouthDashboard);
    let mut dashboard = YouthDashboard::new(config, provider, Instant::now());

    if dashboard.shows_demo_controls() {
        prompter.say(format!(
            "{} is {}. Simulating their 18th birthday...",
            dashboard.user_name(),
            dashboard.user_age()
        ))?;
        dashboard.simulate_turning_18();
    }

    loop {
        let Some(sequencer) = dashboard.graduation() else {
            return Err(GrowBankError::Flow("No graduation in progress".into()));
        };
        let stage = sequencer.stage();
        let content = sequencer.content();

        prompter.heading(&content.title)?;
        if stage.shows_confetti() {
            prompter.say(confetti_strip(sequencer.visible_confetti(), STRIP_WIDTH))?;
        }
        for line in &content.body {
            prompter.say(line)?;
        }
        prompter.say(format!("Progress: {:.0}%", sequencer.progress()))?;

        let prompt = format!("[{}] press Enter to continue, or q to quit: ", content.action);
        let answer = match prompter.ask(&prompt)? {
            None => None,
            Some(answer) if answer.eq_ignore_ascii_case("q") => None,
            Some(answer) => Some(answer),
        };
        if answer.is_none() {
            prompter.say("Celebration dismissed.")?;
            return Ok(None);
        }

        match stage {
            CelebrationStage::Introduction | CelebrationStage::Announcement => {
                if let Some(sequencer) = dashboard.graduation_mut() {
                    sequencer.advance();
                }
            }
            CelebrationStage::Confirmation => {
                if let Some(sequencer) = dashboard.graduation_mut() {
                    sequencer.finish();
                }
            }
            CelebrationStage::Congratulation => {
                dashboard.complete_graduation(&mut history);
                let route = history.current().route;
                prompter.say(format!(
                    "Welcome to your new dashboard: {}",
                    dashboard.heading()
                ))?;
                return Ok(Some(route));
            }
        }
    }
}
