//! Multi-step flow controllers
//!
//! - [`StepWizard`]: data-collection wizard with back/next and a final submit
//! - [`CelebrationSequencer`]: one-directional graduation sequence
//! - [`DeferredProgress`]: delayed progress-bar reveal shared by screens

pub mod confetti;
pub mod sequencer;
pub mod timer;
pub mod wizard;

pub use confetti::{ConfettiFrame, ConfettiPiece, CONFETTI_COUNT};
pub use sequencer::{CelebrationSequencer, CelebrationStage, StageContent, FINAL_STEP};
pub use timer::DeferredProgress;
pub use wizard::{
    FieldKind, FieldSpec, FieldValue, FieldView, NavActions, Payload, StepDefinition,
    StepView, StepWizard, SubmissionSink,
};
