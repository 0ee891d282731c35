//! Conversational contact form
//!
//! Walks name → email → message → complete, one field per screen. The
//! move from the message step to the completion step goes through a
//! submission: `advance` flags it, the caller performs it and then calls
//! `finish_submission` (or `cancel_submission` if the view went away).

use crate::domain::models::{ContactFormData, FormField, FormStep};
use crate::shared::errors::FormError;

/// What a successful `advance` asks the caller to do next
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the given step index
    Moved(usize),
    /// Submission started for this snapshot of the data
    Submit(ContactFormData),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConversationalForm {
    steps: &'static [FormStep],
    current_step: usize,
    data: ContactFormData,
    submitting: bool,
}

impl Default for ConversationalForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationalForm {
    pub fn new() -> Self {
        Self {
            steps: &FormStep::SEQUENCE,
            current_step: 0,
            data: ContactFormData::default(),
            submitting: false,
        }
    }

    pub fn steps(&self) -> &'static [FormStep] {
        self.steps
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn step(&self) -> &FormStep {
        &self.steps[self.current_step]
    }

    pub fn data(&self) -> &ContactFormData {
        &self.data
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_complete(&self) -> bool {
        self.current_step == self.steps.len() - 1
    }

    /// Index of the step whose advance triggers the submission
    fn submit_step(&self) -> usize {
        self.steps.len() - 2
    }

    /// Value bound to the active step, empty on the terminal step
    pub fn field_value(&self) -> &str {
        match self.step().field {
            Some(field) => self.data.get(field),
            None => "",
        }
    }

    /// Write into the active step's field. Ignored while submitting or on
    /// the terminal step.
    pub fn set_field(&mut self, value: String) {
        if self.submitting {
            return;
        }
        if let Some(field) = self.step().field {
            self.data.set(field, value);
        }
    }

    pub fn check_advance(&self) -> Result<(), FormError> {
        if self.submitting {
            return Err(FormError::Submitting);
        }
        match self.step().field {
            None => Err(FormError::AlreadyComplete),
            Some(field) if self.data.get(field).is_empty() => Err(FormError::EmptyField(field)),
            Some(_) => Ok(()),
        }
    }

    pub fn can_advance(&self) -> bool {
        self.check_advance().is_ok()
    }

    pub fn advance(&mut self) -> Result<Advance, FormError> {
        self.check_advance()?;

        if self.current_step == self.submit_step() {
            self.submitting = true;
            return Ok(Advance::Submit(self.data.clone()));
        }

        self.current_step += 1;
        Ok(Advance::Moved(self.current_step))
    }

    /// Submission went through: land on the terminal step
    pub fn finish_submission(&mut self) {
        if self.submitting {
            self.submitting = false;
            self.current_step = self.steps.len() - 1;
        }
    }

    /// Submission abandoned: stay on the message step with data intact
    pub fn cancel_submission(&mut self) {
        self.submitting = false;
    }

    pub fn reset(&mut self) {
        self.current_step = 0;
        self.data = ContactFormData::default();
        self.submitting = false;
    }

    pub fn progress_percent(&self) -> usize {
        (self.current_step + 1) * 100 / self.steps.len()
    }

    pub fn active_field(&self) -> Option<FormField> {
        self.step().field
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(form: &mut ConversationalForm, value: &str) {
        form.set_field(value.to_string());
    }

    #[test]
    fn test_walks_steps_monotonically() {
        let mut form = ConversationalForm::new();
        let mut seen = vec![form.current_step()];

        for value in ["Ada Lovelace", "ada@example.com"] {
            filled(&mut form, value);
            assert!(matches!(form.advance(), Ok(Advance::Moved(_))));
            seen.push(form.current_step());
        }

        filled(&mut form, "We need a range control system.");
        let outcome = form.advance().unwrap();
        assert_eq!(
            outcome,
            Advance::Submit(ContactFormData {
                name: "Ada Lovelace".into(),
                email: "ada@example.com".into(),
                message: "We need a range control system.".into(),
            })
        );
        assert!(form.is_submitting());
        assert_eq!(form.current_step(), 2);

        form.finish_submission();
        seen.push(form.current_step());

        assert_eq!(seen, vec![0, 1, 2, 3]);
        assert!(form.is_complete());
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_empty_field_blocks_advance() {
        let mut form = ConversationalForm::new();
        assert!(!form.can_advance());
        assert_eq!(form.advance(), Err(FormError::EmptyField(FormField::Name)));
        assert_eq!(form.current_step(), 0);
    }

    #[test]
    fn test_advance_blocked_while_submitting() {
        let mut form = ConversationalForm::new();
        for value in ["Ada", "ada@example.com", "Hello"] {
            filled(&mut form, value);
            form.advance().unwrap();
        }
        assert!(!form.can_advance());
        assert_eq!(form.advance(), Err(FormError::Submitting));

        // edits are frozen during the submission
        form.set_field(String::new());
        assert_eq!(form.data().message, "Hello");
    }

    #[test]
    fn test_terminal_step_cannot_advance() {
        let mut form = ConversationalForm::new();
        for value in ["Ada", "ada@example.com", "Hello"] {
            filled(&mut form, value);
            form.advance().unwrap();
        }
        form.finish_submission();
        assert_eq!(form.advance(), Err(FormError::AlreadyComplete));
        assert_eq!(form.current_step(), 3);
    }

    #[test]
    fn test_reset_clears_data() {
        let mut form = ConversationalForm::new();
        for value in ["Ada", "ada@example.com", "Hello"] {
            filled(&mut form, value);
            form.advance().unwrap();
        }
        form.finish_submission();
        form.reset();

        assert_eq!(form.current_step(), 0);
        assert_eq!(form.data(), &ContactFormData::default());
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_cancelled_submission_keeps_step_and_data() {
        let mut form = ConversationalForm::new();
        for value in ["Ada", "ada@example.com", "Hello"] {
            filled(&mut form, value);
            form.advance().unwrap();
        }
        form.cancel_submission();
        form.finish_submission();

        assert_eq!(form.current_step(), 2);
        assert_eq!(form.data().message, "Hello");
        assert!(form.can_advance());
    }

    #[test]
    fn test_progress_percent() {
        let mut form = ConversationalForm::new();
        assert_eq!(form.progress_percent(), 25);
        filled(&mut form, "Ada");
        form.advance().unwrap();
        assert_eq!(form.progress_percent(), 50);
    }
}
