//! Four-step ROI projector wizard
//!
//! Flow:
//!   Step1 (profile) → Step2 (pipeline) → Step3 (investment) → Step4 (contact) → Results
//!
//! Each step's draft is validated on the way forward and committed as an
//! immutable record. Going back never re-validates and keeps what was already
//! committed; advancing again replaces the record for that step. Results is
//! terminal and is only reachable by a successful Step4 advance, which runs
//! the projection.

use serde::{Deserialize, Serialize};

use crate::comparison::{ProjectionReport, report};
use crate::contact::{require_email, require_filled};
use crate::error::{WizardError, require_non_negative, require_positive};
use crate::model::{
    Benchmarks, CloseRate, FormField, GrowthGoal, Industry, LeadSource, ProjectionInputs,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WizardStep {
    Step1,
    Step2,
    Step3,
    Step4,
    Results,
}

impl WizardStep {
    /// Input steps, in order
    pub const INPUT_STEPS: [WizardStep; 4] = [
        WizardStep::Step1,
        WizardStep::Step2,
        WizardStep::Step3,
        WizardStep::Step4,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Step1 => "Your Business",
            WizardStep::Step2 => "Current Marketing",
            WizardStep::Step3 => "Investment & Goals",
            WizardStep::Step4 => "Your Details",
            WizardStep::Results => "Your Projection",
        }
    }

    pub fn number(&self) -> usize {
        match self {
            WizardStep::Step1 => 1,
            WizardStep::Step2 => 2,
            WizardStep::Step3 => 3,
            WizardStep::Step4 => 4,
            WizardStep::Results => 5,
        }
    }

    fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Step1 => Some(WizardStep::Step2),
            WizardStep::Step2 => Some(WizardStep::Step3),
            WizardStep::Step3 => Some(WizardStep::Step4),
            WizardStep::Step4 => Some(WizardStep::Results),
            WizardStep::Results => None,
        }
    }

    fn previous(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Step1 | WizardStep::Results => None,
            WizardStep::Step2 => Some(WizardStep::Step1),
            WizardStep::Step3 => Some(WizardStep::Step2),
            WizardStep::Step4 => Some(WizardStep::Step3),
        }
    }
}

/// Progress indicator state of a step relative to the current one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Active,
    Upcoming,
}

// ============================================================================
// Drafts (what the form currently shows)
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileDraft {
    pub industry: Option<Industry>,
    pub client_value: f64,
    pub close_rate: Option<CloseRate>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineDraft {
    pub current_budget: f64,
    pub current_leads: u32,
    pub lead_source: Option<LeadSource>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvestmentDraft {
    pub proposed_budget: f64,
    pub goal: Option<GrowthGoal>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub email_opt_in: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StepDraft {
    Profile(ProfileDraft),
    Pipeline(PipelineDraft),
    Investment(InvestmentDraft),
    Contact(ContactDraft),
}

impl StepDraft {
    pub fn step(&self) -> WizardStep {
        match self {
            StepDraft::Profile(_) => WizardStep::Step1,
            StepDraft::Pipeline(_) => WizardStep::Step2,
            StepDraft::Investment(_) => WizardStep::Step3,
            StepDraft::Contact(_) => WizardStep::Step4,
        }
    }
}

// ============================================================================
// Committed records
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProfileStep {
    pub industry: Industry,
    pub client_value: f64,
    pub close_rate: CloseRate,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PipelineStep {
    pub current_budget: f64,
    pub current_leads: u32,
    pub lead_source: LeadSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InvestmentStep {
    pub proposed_budget: f64,
    pub goal: GrowthGoal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactStep {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: Option<String>,
    pub email_opt_in: bool,
}

impl ProfileDraft {
    pub fn validate(&self) -> Result<ProfileStep, WizardError> {
        let industry = self
            .industry
            .ok_or(WizardError::MissingSelection(FormField::Industry))?;
        let close_rate = self
            .close_rate
            .ok_or(WizardError::MissingSelection(FormField::CloseRate))?;
        let client_value = require_positive(FormField::ClientValue, self.client_value)?;
        Ok(ProfileStep {
            industry,
            client_value,
            close_rate,
        })
    }
}

impl PipelineDraft {
    pub fn validate(&self) -> Result<PipelineStep, WizardError> {
        let lead_source = self
            .lead_source
            .ok_or(WizardError::MissingSelection(FormField::LeadSource))?;
        let current_budget = require_non_negative(FormField::CurrentBudget, self.current_budget)?;
        Ok(PipelineStep {
            current_budget,
            current_leads: self.current_leads,
            lead_source,
        })
    }
}

impl InvestmentDraft {
    pub fn validate(&self) -> Result<InvestmentStep, WizardError> {
        let goal = self
            .goal
            .ok_or(WizardError::MissingSelection(FormField::Goal))?;
        let proposed_budget = require_positive(FormField::ProposedBudget, self.proposed_budget)?;
        Ok(InvestmentStep {
            proposed_budget,
            goal,
        })
    }
}

impl ContactDraft {
    pub fn validate(&self) -> Result<ContactStep, WizardError> {
        require_filled(&[
            (FormField::Name, &self.name),
            (FormField::Email, &self.email),
            (FormField::Company, &self.company),
        ])?;
        require_email(&self.email)?;
        let phone = self.phone.trim();
        Ok(ContactStep {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            company: self.company.trim().to_string(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
            email_opt_in: self.email_opt_in,
        })
    }
}

// ============================================================================
// State machine
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Wizard {
    step: WizardStep,
    profile: Option<ProfileStep>,
    pipeline: Option<PipelineStep>,
    investment: Option<InvestmentStep>,
    contact: Option<ContactStep>,
    report: Option<ProjectionReport>,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::Step1,
            profile: None,
            pipeline: None,
            investment: None,
            contact: None,
            report: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn is_finished(&self) -> bool {
        self.step == WizardStep::Results
    }

    pub fn status_of(&self, step: WizardStep) -> StepStatus {
        match step.cmp(&self.step) {
            std::cmp::Ordering::Less => StepStatus::Completed,
            std::cmp::Ordering::Equal => StepStatus::Active,
            std::cmp::Ordering::Greater => StepStatus::Upcoming,
        }
    }

    pub fn profile(&self) -> Option<&ProfileStep> {
        self.profile.as_ref()
    }

    pub fn pipeline(&self) -> Option<&PipelineStep> {
        self.pipeline.as_ref()
    }

    pub fn investment(&self) -> Option<&InvestmentStep> {
        self.investment.as_ref()
    }

    pub fn contact(&self) -> Option<&ContactStep> {
        self.contact.as_ref()
    }

    /// The projection, available once the wizard reaches Results
    pub fn report(&self) -> Option<&ProjectionReport> {
        self.report.as_ref()
    }

    /// Validate the current step's draft, commit it and move forward.
    pub fn advance(
        &mut self,
        draft: StepDraft,
        benchmarks: &Benchmarks,
    ) -> Result<WizardStep, WizardError> {
        if self.step == WizardStep::Results {
            return Err(WizardError::Finished);
        }
        if draft.step() != self.step {
            return Err(WizardError::StepMismatch {
                expected: self.step,
                got: draft.step(),
            });
        }

        match draft {
            StepDraft::Profile(d) => self.profile = Some(d.validate()?),
            StepDraft::Pipeline(d) => self.pipeline = Some(d.validate()?),
            StepDraft::Investment(d) => self.investment = Some(d.validate()?),
            StepDraft::Contact(d) => {
                let contact = d.validate()?;
                let inputs = self.projection_inputs()?;
                self.report = Some(report(&inputs, benchmarks)?);
                self.contact = Some(contact);
            }
        }

        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(self.step)
    }

    /// Move back one step without validating anything.
    pub fn back(&mut self) -> Result<WizardStep, WizardError> {
        match self.step {
            WizardStep::Step1 => Err(WizardError::AtFirstStep),
            WizardStep::Results => Err(WizardError::Finished),
            step => {
                self.step = step.previous().unwrap_or(WizardStep::Step1);
                Ok(self.step)
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Assemble projector input from the first three committed steps
    pub fn projection_inputs(&self) -> Result<ProjectionInputs, WizardError> {
        let profile = self
            .profile
            .ok_or(WizardError::MissingSelection(FormField::Industry))?;
        let pipeline = self
            .pipeline
            .ok_or(WizardError::MissingSelection(FormField::LeadSource))?;
        let investment = self
            .investment
            .ok_or(WizardError::MissingSelection(FormField::Goal))?;

        Ok(ProjectionInputs::new(
            profile.industry,
            profile.close_rate.percent(),
            profile.client_value,
            investment.proposed_budget,
            pipeline.current_budget,
            pipeline.current_leads,
        )?)
    }
}
