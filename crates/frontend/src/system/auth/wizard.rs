use crate::shared::allergies::merge_allergies;
use crate::shared::error::ApiError;
use contracts::system::auth::RegisterRequest;

pub const WIZARD_STEPS: usize = 3;

/// Step titles of the registration wizard.
pub const STEP_TITLES: [&str; WIZARD_STEPS] = ["Account", "About you", "Your skin"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Pending,
    Active,
    Completed,
}

/// Position in the three-step registration wizard (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterWizard {
    step: usize,
}

impl Default for RegisterWizard {
    fn default() -> Self {
        Self { step: 1 }
    }
}

impl RegisterWizard {
    pub fn step(&self) -> usize {
        self.step
    }

    /// Out-of-range targets are clamped to `1..=3`.
    pub fn go_to(&mut self, step: usize) {
        self.step = step.clamp(1, WIZARD_STEPS);
    }

    pub fn next(&mut self) {
        self.go_to(self.step + 1);
    }

    pub fn prev(&mut self) {
        self.go_to(self.step.saturating_sub(1));
    }

    pub fn is_last(&self) -> bool {
        self.step == WIZARD_STEPS
    }

    /// Indicator state of `step`: earlier steps are completed, the current one active.
    pub fn indicator(&self, step: usize) -> StepState {
        if step < self.step {
            StepState::Completed
        } else if step == self.step {
            StepState::Active
        } else {
            StepState::Pending
        }
    }

    pub fn indicator_class(&self, step: usize) -> &'static str {
        match self.indicator(step) {
            StepState::Completed => "step active completed",
            StepState::Active => "step active",
            StepState::Pending => "step",
        }
    }
}

/// Values collected across the three wizard steps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub gender: String,
    pub age_range: String,
    pub skin_type: String,
    pub common_allergies: Vec<String>,
    pub other_allergies: String,
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl RegisterForm {
    /// Account fields of step 1 must be filled before moving on.
    pub fn validate_account(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::Validation("Please enter your name.".into()));
        }
        if !self.email.contains('@') {
            return Err(ApiError::Validation("Please enter a valid email address.".into()));
        }
        if self.password.is_empty() {
            return Err(ApiError::Validation("Please choose a password.".into()));
        }
        Ok(())
    }

    /// Unanswered choices are sent as `null`.
    pub fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            gender: non_empty(&self.gender),
            age_range: non_empty(&self.age_range),
            skin_type: non_empty(&self.skin_type),
            allergies: merge_allergies(&self.common_allergies, &self.other_allergies),
        }
    }
}
