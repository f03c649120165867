//! Multi-step data-collection wizard
//!
//! [`StepWizard`] is a linear, non-skippable sequence of steps. Each step
//! declares the fields it shows; values entered on any step accumulate in one
//! [`Payload`] that survives back-navigation and is handed to a
//! [`SubmissionSink`] when the last step is confirmed.
//!
//! Boundary handling: `advance` at the last step and `retreat` at the first are
//! no-ops reported as `false`. `submit` before the last step is rejected with
//! [`GrowBankError::Flow`] and emits nothing.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{GrowBankError, GrowBankResult};
use crate::models::{ControlSpec, ControlValue};

/// What kind of input a field takes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    /// ISO `YYYY-MM-DD`
    Date,
    /// Switch plus bounded amount
    Control(ControlSpec),
}

/// One field shown on a step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Payload key
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub placeholder: Option<String>,
}

impl FieldSpec {
    fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            placeholder: None,
        }
    }

    pub fn text(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub fn email(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Email)
    }

    pub fn date(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Date)
    }

    pub fn control(name: impl Into<String>, spec: ControlSpec) -> Self {
        let label = spec.label.clone();
        Self::new(name, label, FieldKind::Control(spec))
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Whether the field is edited as free text
    pub fn is_textual(&self) -> bool {
        !matches!(self.kind, FieldKind::Control(_))
    }
}

/// A value stored in the payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Control(ControlValue),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Control(_) => None,
        }
    }

    pub fn as_control(&self) -> Option<ControlValue> {
        match self {
            Self::Control(value) => Some(*value),
            Self::Text(_) => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<ControlValue> for FieldValue {
    fn from(value: ControlValue) -> Self {
        Self::Control(value)
    }
}

/// Field name to value, accumulated across steps
pub type Payload = BTreeMap<String, FieldValue>;

/// Static content of one step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepDefinition {
    pub title: String,
    pub description: String,
    pub fields: Vec<FieldSpec>,
    /// Caption of the forward action on this step
    pub next_label: String,
}

impl StepDefinition {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            fields: Vec::new(),
            next_label: "Next".to_string(),
        }
    }

    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    pub fn next_label(mut self, label: impl Into<String>) -> Self {
        self.next_label = label.into();
        self
    }
}

/// Which navigation actions are valid right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavActions {
    pub can_advance: bool,
    pub can_retreat: bool,
    pub can_submit: bool,
}

/// A field of the current step together with its payload value
#[derive(Debug, Clone, Copy)]
pub struct FieldView<'a> {
    pub spec: &'a FieldSpec,
    pub value: Option<&'a FieldValue>,
}

impl FieldView<'_> {
    /// Text value, or an empty string when unset or not textual
    pub fn text(&self) -> &str {
        self.value.and_then(FieldValue::as_text).unwrap_or("")
    }
}

/// Everything a front-end needs to draw the current step
#[derive(Debug, Clone)]
pub struct StepView<'a> {
    /// 1-indexed
    pub number: usize,
    pub total: usize,
    pub progress: f64,
    pub step: &'a StepDefinition,
    pub fields: Vec<FieldView<'a>>,
    pub actions: NavActions,
}

/// Receives the payload when a wizard is submitted
pub trait SubmissionSink {
    fn receive(&mut self, payload: &Payload);
}

impl<F> SubmissionSink for F
where
    F: FnMut(&Payload),
{
    fn receive(&mut self, payload: &Payload) {
        self(payload)
    }
}

/// The step wizard state machine
#[derive(Debug, Clone)]
pub struct StepWizard {
    steps: Vec<StepDefinition>,
    /// 0-indexed internally; exposed 1-indexed
    current: usize,
    payload: Payload,
    submissions: usize,
}

impl StepWizard {
    /// Create a wizard positioned on step 1
    ///
    /// # Errors
    ///
    /// Returns a validation error when `steps` is empty.
    pub fn new(steps: Vec<StepDefinition>, defaults: Payload) -> GrowBankResult<Self> {
        if steps.is_empty() {
            return Err(GrowBankError::Validation(
                "A wizard needs at least one step".into(),
            ));
        }

        Ok(Self {
            steps,
            current: 0,
            payload: defaults,
            submissions: 0,
        })
    }

    /// Current step, 1-indexed
    pub fn current_step(&self) -> usize {
        self.current + 1
    }

    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    /// `current_step / total_steps * 100`
    pub fn progress(&self) -> f64 {
        self.current_step() as f64 / self.total_steps() as f64 * 100.0
    }

    pub fn is_first_step(&self) -> bool {
        self.current == 0
    }

    pub fn is_last_step(&self) -> bool {
        self.current_step() == self.total_steps()
    }

    pub fn actions(&self) -> NavActions {
        NavActions {
            can_advance: !self.is_last_step(),
            can_retreat: !self.is_first_step(),
            can_submit: self.is_last_step(),
        }
    }

    pub fn steps(&self) -> &[StepDefinition] {
        &self.steps
    }

    /// Definition of the current step
    pub fn current_definition(&self) -> &StepDefinition {
        &self.steps[self.current]
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.payload.get(name)
    }

    /// Text value of a field, or an empty string
    pub fn text(&self, name: &str) -> &str {
        self.field(name).and_then(FieldValue::as_text).unwrap_or("")
    }

    /// Move forward one step. Returns `false` (and does nothing) on the last step.
    pub fn advance(&mut self) -> bool {
        if self.is_last_step() {
            debug!(step = self.current_step(), "Advance ignored on last step");
            return false;
        }
        self.current += 1;
        debug!(step = self.current_step(), total = self.total_steps(), "Wizard advanced");
        true
    }

    /// Move back one step. Returns `false` (and does nothing) on the first step.
    pub fn retreat(&mut self) -> bool {
        if self.is_first_step() {
            debug!("Retreat ignored on first step");
            return false;
        }
        self.current -= 1;
        debug!(step = self.current_step(), total = self.total_steps(), "Wizard retreated");
        true
    }

    /// Insert or replace a payload value
    pub fn update_field(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.payload.insert(name.into(), value.into());
    }

    /// Hand the payload to `sink`. Only allowed on the last step; may be
    /// repeated, each call emitting again.
    pub fn submit<S>(&mut self, sink: &mut S) -> GrowBankResult<()>
    where
        S: SubmissionSink + ?Sized,
    {
        if !self.is_last_step() {
            return Err(GrowBankError::Flow(format!(
                "cannot submit from step {} of {}",
                self.current_step(),
                self.total_steps()
            )));
        }

        sink.receive(&self.payload);
        self.submissions += 1;
        info!(
            fields = self.payload.len(),
            submissions = self.submissions,
            "Wizard submitted"
        );
        Ok(())
    }

    /// Snapshot of the current step for rendering
    pub fn current_view(&self) -> StepView<'_> {
        let step = self.current_definition();
        StepView {
            number: self.current_step(),
            total: self.total_steps(),
            progress: self.progress(),
            step,
            fields: step
                .fields
                .iter()
                .map(|spec| FieldView {
                    spec,
                    value: self.payload.get(&spec.name),
                })
                .collect(),
            actions: self.actions(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn blank_steps(count: usize) -> Vec<StepDefinition> {
        (1..=count)
            .map(|n| StepDefinition::new(format!("Step {n}"), ""))
            .collect()
    }

    fn wizard(count: usize) -> StepWizard {
        StepWizard::new(blank_steps(count), Payload::new()).unwrap()
    }

    #[test]
    fn test_empty_wizard_is_rejected() {
        let err = StepWizard::new(Vec::new(), Payload::new()).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_starts_on_first_step_with_defaults() {
        let mut defaults = Payload::new();
        defaults.insert("childName".into(), "".into());
        let wizard = StepWizard::new(blank_steps(3), defaults.clone()).unwrap();

        assert_eq!(wizard.current_step(), 1);
        assert_eq!(wizard.payload(), &defaults);
        assert_eq!(
            wizard.actions(),
            NavActions {
                can_advance: true,
                can_retreat: false,
                can_submit: false
            }
        );
    }

    #[test]
    fn test_four_step_scenario() {
        let mut wizard = wizard(4);
        wizard.update_field("parentName", "Jane Doe");
        let before = wizard.payload().clone();

        for _ in 0..3 {
            assert!(wizard.advance());
        }
        assert_eq!(wizard.current_step(), 4);
        assert_eq!(wizard.progress(), 100.0);

        assert!(wizard.retreat());
        assert_eq!(wizard.current_step(), 3);
        assert_eq!(wizard.progress(), 75.0);
        assert_eq!(wizard.payload(), &before);
    }

    #[test]
    fn test_boundaries_are_no_ops() {
        let mut wizard = wizard(2);
        assert!(!wizard.retreat());
        assert_eq!(wizard.current_step(), 1);

        assert!(wizard.advance());
        assert!(!wizard.advance());
        assert_eq!(wizard.current_step(), 2);
    }

    #[test]
    fn test_single_step_wizard() {
        let mut wizard = wizard(1);
        assert_eq!(wizard.progress(), 100.0);
        assert!(!wizard.advance());
        assert!(!wizard.retreat());
        assert!(wizard.actions().can_submit);
    }

    #[test]
    fn test_random_walk_stays_in_bounds_and_progress_is_derived() {
        let mut rng = StdRng::seed_from_u64(7);
        for total in 1..=6 {
            let mut wizard = wizard(total);
            for _ in 0..200 {
                if rng.gen_bool(0.5) {
                    wizard.advance();
                } else {
                    wizard.retreat();
                }
                let step = wizard.current_step();
                assert!((1..=total).contains(&step));
                assert_eq!(wizard.progress(), step as f64 / total as f64 * 100.0);
            }
        }
    }

    #[test]
    fn test_update_field_is_last_write_wins_and_idempotent() {
        let mut wizard = wizard(2);
        wizard.update_field("childName", "Sam");
        wizard.update_field("childName", "John Doe");
        assert_eq!(wizard.text("childName"), "John Doe");

        let snapshot = wizard.payload().clone();
        wizard.update_field("childName", "John Doe");
        assert_eq!(wizard.payload(), &snapshot);
    }

    #[test]
    fn test_payload_survives_back_and_forth() {
        let mut wizard = wizard(3);
        wizard.advance();
        wizard.update_field("childDob", "2012-05-01");
        wizard.update_field(
            "allowance",
            ControlValue::new(true, Money::from_pounds(12)),
        );
        let before = wizard.payload().clone();

        wizard.retreat();
        wizard.advance();
        assert_eq!(wizard.payload(), &before);
    }

    #[test]
    fn test_submit_rejected_before_last_step() {
        let mut wizard = wizard(3);
        let mut received = Vec::new();
        let mut sink = |payload: &Payload| received.push(payload.clone());

        let err = wizard.submit(&mut sink).unwrap_err();
        assert!(matches!(err, GrowBankError::Flow(_)));
        drop(sink);
        assert!(received.is_empty());
    }

    #[test]
    fn test_submit_on_last_step_re_emits() {
        let mut wizard = wizard(2);
        wizard.update_field("parentEmail", "jane@example.com");
        wizard.advance();

        let mut received = Vec::new();
        let mut sink = |payload: &Payload| received.push(payload.clone());
        wizard.submit(&mut sink).unwrap();
        wizard.submit(&mut sink).unwrap();
        drop(sink);

        assert_eq!(received.len(), 2);
        assert_eq!(received[0], received[1]);
        // Submitting does not move the machine
        assert_eq!(wizard.current_step(), 2);
    }

    #[test]
    fn test_current_view_exposes_fields_and_values() {
        let steps = vec![
            StepDefinition::new("Parent", "details")
                .field(FieldSpec::text("parentName", "Full Name"))
                .field(FieldSpec::email("parentEmail", "Email Address")),
            StepDefinition::new("Review", "").next_label("Confirm"),
        ];
        let mut wizard = StepWizard::new(steps, Payload::new()).unwrap();
        wizard.update_field("parentName", "Jane");

        let view = wizard.current_view();
        assert_eq!(view.number, 1);
        assert_eq!(view.total, 2);
        assert_eq!(view.progress, 50.0);
        assert_eq!(view.fields.len(), 2);
        assert_eq!(view.fields[0].text(), "Jane");
        assert!(view.fields[1].value.is_none());
        assert_eq!(view.fields[1].text(), "");
        assert!(view.actions.can_advance);
    }

    #[test]
    fn test_payload_serializes_untagged() {
        let mut payload = Payload::new();
        payload.insert("childName".into(), "John".into());
        payload.insert(
            "allowance".into(),
            ControlValue::new(true, Money::from_pounds(10)).into(),
        );
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(
            json,
            r#"{"allowance":{"enabled":true,"amount":1000},"childName":"John"}"#
        );
    }
}
