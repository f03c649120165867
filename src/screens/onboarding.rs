//! Account-creation onboarding
//!
//! Four steps: parent details, child details, initial allowance, review.
//! The wizard holds all entered values; the allowance control mirrors its
//! value into the payload on every change.

use tracing::info;

use crate::data::DataProvider;
use crate::error::GrowBankResult;
use crate::flow::{FieldSpec, FieldValue, Payload, StepDefinition, StepWizard, SubmissionSink};
use crate::models::{ControlSpec, ControlValue, Money};
use crate::navigation::{Navigator, Route};

use super::control::ParentalControl;

pub const FIELD_PARENT_NAME: &str = "parentName";
pub const FIELD_PARENT_EMAIL: &str = "parentEmail";
pub const FIELD_CHILD_NAME: &str = "childName";
pub const FIELD_CHILD_DOB: &str = "childDob";
pub const FIELD_ALLOWANCE: &str = "allowance";

/// Route the confirmation dialog leads to
pub const COMPLETION_ROUTE: Route = Route::ParentalDashboard;

pub const DIALOG_TITLE: &str = "Account Created Successfully!";
pub const DIALOG_BODY: &str =
    "Welcome to GrowBank! You can now manage your child's account from the parental dashboard.";
pub const DIALOG_ACTION: &str = "Go to Parental Dashboard";

/// Allowance slider used during onboarding
pub fn allowance_spec() -> ControlSpec {
    ControlSpec::new(
        "Weekly Allowance",
        "Set a weekly pocket money amount.",
        Money::from_pounds(50),
        Money::from_pounds(1),
    )
}

/// The onboarding step schema
pub fn onboarding_steps() -> Vec<StepDefinition> {
    vec![
        StepDefinition::new(
            "Parent's Information",
            "Let's start by verifying your identity. Please enter your details.",
        )
        .field(FieldSpec::text(FIELD_PARENT_NAME, "Full Name").with_placeholder("e.g., Jane Doe"))
        .field(
            FieldSpec::email(FIELD_PARENT_EMAIL, "Email Address")
                .with_placeholder("e.g., jane.doe@example.com"),
        ),
        StepDefinition::new(
            "Child's Details",
            "Now, let's create a profile for your child.",
        )
        .field(
            FieldSpec::text(FIELD_CHILD_NAME, "Child's Full Name")
                .with_placeholder("e.g., John Doe"),
        )
        .field(FieldSpec::date(FIELD_CHILD_DOB, "Date of Birth").with_placeholder("YYYY-MM-DD")),
        StepDefinition::new(
            "Initial Account Controls",
            "Set a starting weekly allowance. You can change this anytime.",
        )
        .field(FieldSpec::control(FIELD_ALLOWANCE, allowance_spec()))
        .next_label("Review Details"),
        StepDefinition::new(
            "Confirm Details",
            "Please review all the information before creating the account.",
        )
        .next_label("Confirm & Create Account"),
    ]
}

/// Typed view of the onboarding payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingSummary {
    pub parent_name: String,
    pub parent_email: String,
    pub child_name: String,
    pub child_dob: String,
    pub allowance: ControlValue,
}

impl OnboardingSummary {
    pub fn from_payload(payload: &Payload) -> Self {
        let text = |name: &str| {
            payload
                .get(name)
                .and_then(FieldValue::as_text)
                .unwrap_or_default()
                .to_string()
        };
        Self {
            parent_name: text(FIELD_PARENT_NAME),
            parent_email: text(FIELD_PARENT_EMAIL),
            child_name: text(FIELD_CHILD_NAME),
            child_dob: text(FIELD_CHILD_DOB),
            allowance: payload
                .get(FIELD_ALLOWANCE)
                .and_then(FieldValue::as_control)
                .unwrap_or_else(default_allowance),
        }
    }

    /// Label/value pairs for the review step
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Parent Name", self.parent_name.clone()),
            ("Parent Email", self.parent_email.clone()),
            ("Child Name", self.child_name.clone()),
            ("Child D.O.B", self.child_dob.clone()),
            ("Weekly Allowance", self.allowance.amount.to_string()),
        ]
    }
}

fn default_allowance() -> ControlValue {
    ControlValue::new(true, Money::from_pounds(10))
}

/// Onboarding screen state
#[derive(Debug, Clone)]
pub struct OnboardingScreen {
    wizard: StepWizard,
    allowance: ParentalControl,
    dialog_open: bool,
}

impl OnboardingScreen {
    pub fn new<P: DataProvider + ?Sized>(provider: &P) -> GrowBankResult<Self> {
        let defaults = provider.onboarding_defaults();
        let initial = defaults
            .get(FIELD_ALLOWANCE)
            .and_then(FieldValue::as_control)
            .unwrap_or_else(default_allowance);

        let wizard = StepWizard::new(onboarding_steps(), defaults)?;
        info!(step = wizard.current_step(), "Onboarding loaded");

        Ok(Self {
            wizard,
            allowance: ParentalControl::new(allowance_spec(), initial),
            dialog_open: false,
        })
    }

    pub fn wizard(&self) -> &StepWizard {
        &self.wizard
    }

    pub fn allowance_control(&self) -> &ParentalControl {
        &self.allowance
    }

    pub fn next(&mut self) -> bool {
        let moved = self.wizard.advance();
        if moved {
            info!(step = self.wizard.current_step(), "Onboarding step changed");
        }
        moved
    }

    pub fn back(&mut self) -> bool {
        let moved = self.wizard.retreat();
        if moved {
            info!(step = self.wizard.current_step(), "Onboarding step changed");
        }
        moved
    }

    /// Store a text field value
    pub fn set_text(&mut self, name: &str, value: impl Into<String>) {
        self.wizard.update_field(name, FieldValue::Text(value.into()));
    }

    pub fn toggle_allowance(&mut self) {
        let value = self.allowance.toggle();
        self.wizard.update_field(FIELD_ALLOWANCE, value);
    }

    pub fn increase_allowance(&mut self) {
        if let Some(value) = self.allowance.increase() {
            self.wizard.update_field(FIELD_ALLOWANCE, value);
        }
    }

    pub fn decrease_allowance(&mut self) {
        if let Some(value) = self.allowance.decrease() {
            self.wizard.update_field(FIELD_ALLOWANCE, value);
        }
    }

    pub fn set_allowance(&mut self, amount: Money) {
        if let Some(value) = self.allowance.set_amount(amount) {
            self.wizard.update_field(FIELD_ALLOWANCE, value);
        }
    }

    /// Emit the payload and open the confirmation dialog
    pub fn submit<S: SubmissionSink + ?Sized>(&mut self, sink: &mut S) -> GrowBankResult<()> {
        self.wizard.submit(sink)?;
        self.dialog_open = true;
        Ok(())
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub fn close_dialog(&mut self) {
        self.dialog_open = false;
    }

    /// Leave for the parental dashboard. Only available from the
    /// confirmation dialog.
    pub fn go_to_dashboard<N: Navigator + ?Sized>(&mut self, navigator: &mut N) -> bool {
        if !self.dialog_open {
            return false;
        }
        self.dialog_open = false;
        navigator.navigate_to(COMPLETION_ROUTE, None);
        true
    }

    pub fn summary(&self) -> OnboardingSummary {
        OnboardingSummary::from_payload(self.wizard.payload())
    }
}
