//! `growbank onboard`: the onboarding wizard as line prompts
//!
//! Walks the same four steps as the TUI. Fields are asked in order; an empty
//! answer keeps the current value. End of input cancels.

use std::io::{BufRead, Write};

use crate::data::DataProvider;
use crate::error::GrowBankResult;
use crate::flow::{FieldKind, FieldSpec, Payload};
use crate::models::Money;
use crate::navigation::{History, Route};
use crate::screens::onboarding::{DIALOG_ACTION, DIALOG_BODY, DIALOG_TITLE};
use crate::screens::{OnboardingScreen, OnboardingSummary};

use super::prompt::Prompter;

/// How an onboarding run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OnboardingOutcome {
    /// The account was created and the user moved on to `route`
    Created {
        summary: OnboardingSummary,
        route: Route,
    },
    Cancelled,
}

enum Choice {
    Next,
    Back,
    Confirm,
    Quit,
}

/// Run the onboarding flow against `provider`'s defaults
pub fn run_onboarding<P, R, W>(
    provider: &P,
    prompter: &mut Prompter<R, W>,
) -> GrowBankResult<OnboardingOutcome>
where
    P: DataProvider + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut screen = OnboardingScreen::new(provider)?;
    let mut history = History::new(Route::Onboarding);

    prompter.say("Create a GrowBank Account")?;
    prompter.say("Type 'q' at an action prompt or press Ctrl+D to cancel.")?;

    loop {
        let (fields, actions, next_label) = {
            let view = screen.wizard().current_view();
            prompter.heading(&format!(
                "Step {} of {}: {}",
                view.number, view.total, view.step.title
            ))?;
            prompter.say(&view.step.description)?;
            (
                view.step.fields.clone(),
                view.actions,
                view.step.next_label.clone(),
            )
        };

        if fields.is_empty() {
            prompter.blank()?;
            for (label, value) in screen.summary().rows() {
                prompter.say(format!("  {:<17} {}", format!("{}:", label), value))?;
            }
        }

        for field in &fields {
            let answered = match &field.kind {
                FieldKind::Control(_) => ask_allowance(&mut screen, prompter)?,
                _ => ask_text(&mut screen, field, prompter)?,
            };
            if !answered {
                return cancelled(prompter);
            }
        }

        let prompt = match (actions.can_retreat, actions.can_submit) {
            (false, _) => format!("[n]ext ({}) or [q]uit: ", next_label),
            (true, false) => format!("[n]ext ({}), [b]ack or [q]uit: ", next_label),
            (true, true) => format!("[c]onfirm ({}), [b]ack or [q]uit: ", next_label),
        };

        let choice = loop {
            let Some(answer) = prompter.ask(&prompt)? else {
                break Choice::Quit;
            };
            match answer.to_lowercase().as_str() {
                "n" | "next" if actions.can_advance => break Choice::Next,
                "b" | "back" if actions.can_retreat => break Choice::Back,
                "c" | "confirm" if actions.can_submit => break Choice::Confirm,
                "q" | "quit" => break Choice::Quit,
                _ => prompter.say("Please choose one of the listed options.")?,
            }
        };

        match choice {
            Choice::Next => {
                screen.next();
            }
            Choice::Back => {
                screen.back();
            }
            Choice::Quit => return cancelled(prompter),
            Choice::Confirm => {
                let mut submitted = None;
                screen.submit(&mut |payload: &Payload| {
                    submitted = Some(OnboardingSummary::from_payload(payload));
                })?;
                let summary = submitted.unwrap_or_else(|| screen.summary());

                prompter.heading(DIALOG_TITLE)?;
                prompter.say(DIALOG_BODY)?;
                prompter.blank()?;
                prompter.say(format!("-> {}", DIALOG_ACTION))?;

                screen.go_to_dashboard(&mut history);
                let route = history.current().route;
                prompter.say(format!("Now at {} ({})", route.title(), route))?;

                return Ok(OnboardingOutcome::Created { summary, route });
            }
        }
    }
}

fn cancelled<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> GrowBankResult<OnboardingOutcome> {
    prompter.say("Onboarding cancelled.")?;
    Ok(OnboardingOutcome::Cancelled)
}

/// Returns `false` at end of input
fn ask_text<R: BufRead, W: Write>(
    screen: &mut OnboardingScreen,
    field: &FieldSpec,
    prompter: &mut Prompter<R, W>,
) -> GrowBankResult<bool> {
    let current = screen.wizard().text(&field.name).to_string();
    let prompt = if !current.is_empty() {
        format!("{} [{}]: ", field.label, current)
    } else if let Some(placeholder) = &field.placeholder {
        format!("{} ({}): ", field.label, placeholder)
    } else {
        format!("{}: ", field.label)
    };

    match prompter.ask(&prompt)? {
        None => Ok(false),
        Some(answer) => {
            if !answer.is_empty() {
                screen.set_text(&field.name, answer);
            }
            Ok(true)
        }
    }
}

/// Returns `false` at end of input
fn ask_allowance<R: BufRead, W: Write>(
    screen: &mut OnboardingScreen,
    prompter: &mut Prompter<R, W>,
) -> GrowBankResult<bool> {
    loop {
        let control = screen.allowance_control();
        let spec = control.spec();
        prompter.say(format!(
            "{} is {} at {} (up to {}, in steps of {})",
            spec.label,
            if control.is_enabled() { "on" } else { "off" },
            control.display_amount(),
            spec.format(spec.max),
            spec.format(spec.step),
        ))?;

        let Some(answer) = prompter.ask("New amount, 'on' or 'off' (Enter to keep): ")? else {
            return Ok(false);
        };

        match answer.to_lowercase().as_str() {
            "" => return Ok(true),
            "on" => {
                if !screen.allowance_control().is_enabled() {
                    screen.toggle_allowance();
                }
            }
            "off" => {
                if screen.allowance_control().is_enabled() {
                    screen.toggle_allowance();
                }
            }
            amount => match Money::parse(amount) {
                Ok(_) if !screen.allowance_control().is_enabled() => {
                    prompter.say("Turn the allowance on before changing the amount.")?;
                }
                Ok(amount) => screen.set_allowance(amount),
                Err(_) => prompter.say("Enter an amount like 12 or 12.50.")?,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MockDataProvider;

    fn run(input: &str) -> (OnboardingOutcome, String) {
        let mut prompter = Prompter::new(input.as_bytes(), Vec::new());
        let outcome = run_onboarding(&MockDataProvider::new(), &mut prompter).unwrap();
        let output = String::from_utf8(prompter.into_output()).unwrap();
        (outcome, output)
    }

    #[test]
    fn test_complete_run_creates_account() {
        let input = "Jane Doe\njane@example.com\nn\n\
                     John Doe\n2012-03-04\nn\n\
                     12.50\n\nn\n\
                     c\n";
        let (outcome, output) = run(input);

        let OnboardingOutcome::Created { summary, route } = outcome else {
            panic!("expected account creation, got {outcome:?}");
        };
        assert_eq!(route, Route::ParentalDashboard);
        assert_eq!(summary.parent_name, "Jane Doe");
        assert_eq!(summary.child_dob, "2012-03-04");
        // £12.50 snaps to the nearest £1 step
        assert_eq!(summary.allowance.amount, Money::from_pounds(13));
        assert!(output.contains("Step 4 of 4: Confirm Details"));
        assert!(output.contains(DIALOG_TITLE));
    }

    #[test]
    fn test_back_keeps_entered_values() {
        let input = "Jane Doe\njane@example.com\nn\n\
                     \n\nb\n\
                     \n\nn\n\
                     \n\nn\n\
                     off\n\nn\n\
                     c\n";
        let (outcome, output) = run(input);

        assert!(output.contains("Full Name [Jane Doe]: "));
        let OnboardingOutcome::Created { summary, .. } = outcome else {
            panic!("expected account creation");
        };
        assert!(!summary.allowance.enabled);
        assert_eq!(summary.child_name, "");
    }

    #[test]
    fn test_invalid_choices_are_reprompted() {
        let (outcome, output) = run("\n\nc\nb\nq\n");
        assert_eq!(outcome, OnboardingOutcome::Cancelled);
        assert_eq!(output.matches("Please choose one of the listed options.").count(), 2);
    }

    #[test]
    fn test_eof_cancels() {
        let (outcome, output) = run("Jane Doe\n");
        assert_eq!(outcome, OnboardingOutcome::Cancelled);
        assert!(output.ends_with("Onboarding cancelled.\n"));
    }
}
