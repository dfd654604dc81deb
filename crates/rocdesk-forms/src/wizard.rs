//! # Wizard Controller
//!
//! Generic multi-step form orchestration. A wizard drives a finite
//! sequence of named steps for constructing one record:
//!
//! ```text
//! step 1 ──next──▶ step 2 ──next──▶ … ──next──▶ step N ──next──▶ submitted
//!        ◀──back──        ◀──back──
//! ```
//!
//! `next` validates the step payload, merges it into the accumulated
//! draft and advances; at the last step it instead finishes the draft
//! into the flow's output, which the caller hands to the entity store
//! (`create` for a fresh wizard, `update` for one resumed from a stored
//! record). `back` only moves the cursor — data already applied stays in
//! the draft, and re-submitting an earlier step overwrites just that
//! step's contribution.
//!
//! Abandoning the wizard is dropping it: nothing is persisted until the
//! final step submits.
//!
//! ## Design Decision
//!
//! Steps are validated transitions over an enum-indexed cursor rather
//! than typestate types. Flows have four to seven steps and the invariant
//! (step k accepts only step k's payload) is straightforward to check at
//! runtime; a type-per-step design would multiply every flow into as many
//! types as it has steps without proportional safety benefit. Validation
//! failures are [`FieldErrors`] values surfaced to the caller — the
//! wizard never panics on user input.

use thiserror::Error;

use crate::error::FieldErrors;

/// A concrete multi-step flow: the draft it accumulates, the step
/// payloads it accepts and the record it produces.
pub trait WizardFlow {
    /// Accumulated partial state across steps.
    type Draft: Default;
    /// One step's payload (an enum with one variant per step).
    type Step;
    /// The finished record.
    type Output;

    /// Number of steps; the wizard submits when step `STEP_COUNT`
    /// passes validation.
    const STEP_COUNT: usize;

    /// The 1-based step a payload belongs to.
    fn step_index(step: &Self::Step) -> usize;

    /// Check one step's payload against its schema. Reports every
    /// violated rule, not just the first.
    fn validate(draft: &Self::Draft, step: &Self::Step) -> Result<(), FieldErrors>;

    /// Merge a validated payload into the draft. Only fails on a
    /// malformed internal call (e.g. a derived tranche applied before
    /// its predecessor exists), never on user input.
    fn apply(draft: &mut Self::Draft, step: Self::Step) -> Result<(), WizardError>;

    /// Assemble the output from a draft that completed every step.
    fn finish(draft: Self::Draft) -> Result<Self::Output, WizardError>;
}

/// Hard wizard failures. User-input problems are [`WizardError::Validation`]
/// and keep the wizard on its current step; the other variants indicate a
/// malformed internal call.
#[derive(Error, Debug)]
pub enum WizardError {
    /// The submitted payload fails its step's schema.
    #[error("validation failed: {0}")]
    Validation(#[from] FieldErrors),

    /// A payload for step `submitted` arrived while the wizard is at
    /// step `current`.
    #[error("step {submitted} submitted while the wizard is at step {current}")]
    StepMismatch {
        /// The wizard's current step.
        current: usize,
        /// The step the payload belongs to.
        submitted: usize,
    },

    /// `next` called after the final submission.
    #[error("wizard has already submitted")]
    AlreadySubmitted,

    /// The draft is missing data a later step or `finish` depends on.
    #[error("wizard draft is missing {0}")]
    Incomplete(&'static str),
}

/// What a successful `next` did.
#[derive(Debug)]
pub enum WizardOutcome<T> {
    /// Moved to the given step.
    Advanced {
        /// The new current step.
        step: usize,
    },
    /// The final step completed; the finished record is ready for the
    /// entity store.
    Submitted(T),
}

/// A wizard in progress.
#[derive(Debug)]
pub struct Wizard<F: WizardFlow> {
    step: usize,
    draft: F::Draft,
    submitted: bool,
}

impl<F: WizardFlow> Default for Wizard<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: WizardFlow> Wizard<F> {
    /// Start a fresh wizard at step 1 with an empty draft.
    pub fn new() -> Self {
        Self {
            step: 1,
            draft: F::Draft::default(),
            submitted: false,
        }
    }

    /// Re-open a wizard for edit, pre-seeded with a draft mapped from a
    /// stored record. The cursor starts back at step 1; submission goes
    /// through the store's `update`.
    pub fn resume(draft: F::Draft) -> Self {
        Self {
            step: 1,
            draft,
            submitted: false,
        }
    }

    /// The current 1-based step.
    pub fn current_step(&self) -> usize {
        self.step
    }

    /// The accumulated draft.
    pub fn draft(&self) -> &F::Draft {
        &self.draft
    }

    /// Whether the final step has submitted.
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Validate and merge one step's payload.
    ///
    /// On validation failure the wizard stays on the current step and
    /// the draft is untouched. At the last step a successful payload
    /// finishes the draft and transitions to the submitted state.
    pub fn next(&mut self, step: F::Step) -> Result<WizardOutcome<F::Output>, WizardError> {
        if self.submitted {
            return Err(WizardError::AlreadySubmitted);
        }
        let submitted_index = F::step_index(&step);
        if submitted_index != self.step {
            return Err(WizardError::StepMismatch {
                current: self.step,
                submitted: submitted_index,
            });
        }

        F::validate(&self.draft, &step)?;
        F::apply(&mut self.draft, step)?;

        if self.step == F::STEP_COUNT {
            let draft = std::mem::take(&mut self.draft);
            let output = F::finish(draft)?;
            self.submitted = true;
            tracing::debug!(step = self.step, "wizard submitted");
            Ok(WizardOutcome::Submitted(output))
        } else {
            self.step += 1;
            tracing::debug!(step = self.step, "wizard advanced");
            Ok(WizardOutcome::Advanced { step: self.step })
        }
    }

    /// Move one step back. A no-op at step 1. Data already applied is
    /// kept; returning to an earlier step and re-submitting it only
    /// overwrites that step's contribution.
    pub fn back(&mut self) -> usize {
        if self.step > 1 {
            self.step -= 1;
        }
        self.step
    }
}
