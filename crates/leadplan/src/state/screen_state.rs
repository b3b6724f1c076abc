use std::time::{Duration, Instant};

use leadplan_core::config::AllocationBuilder;
use leadplan_core::contact::{Acknowledgement, ContactForm, PendingSubmission, SubmissionStatus};
use leadplan_core::error::{CalcError, ContactError, WizardError};
use leadplan_core::model::{
    AllocationGoal, Benchmarks, BudgetPlan, CloseRate, FormField, GrowthGoal, Industry, LeadSource,
};
use leadplan_core::wizard::{
    ContactDraft, InvestmentDraft, PipelineDraft, ProfileDraft, StepDraft, Wizard, WizardStep,
};

use super::forms::{Choice, Slider, TextField, cycle_focus};

// ============================================================================
// Budget allocator
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocatorField {
    Industry,
    Goal,
    MonthlyBudget,
    CustomerValue,
}

impl AllocatorField {
    pub const ALL: [AllocatorField; 4] = [
        AllocatorField::Industry,
        AllocatorField::Goal,
        AllocatorField::MonthlyBudget,
        AllocatorField::CustomerValue,
    ];
}

#[derive(Debug)]
pub struct AllocatorState {
    pub focus: usize,
    pub industry: Choice<Industry>,
    pub goal: Choice<AllocationGoal>,
    pub monthly_budget: Slider,
    pub customer_value: Slider,
    pub plan: Option<BudgetPlan>,
}

impl AllocatorState {
    pub fn new(benchmarks: &Benchmarks) -> Self {
        Self {
            focus: 0,
            industry: Choice::new(FormField::Industry, benchmarks.allocator_industries()),
            goal: Choice::new(FormField::Goal, AllocationGoal::ALL)
                .with_selected(AllocationGoal::Balanced),
            monthly_budget: Slider::currency(FormField::MonthlyBudget, 500.0, 20_000.0, 250.0, 3_000.0),
            customer_value: Slider::currency(FormField::CustomerValue, 500.0, 50_000.0, 500.0, 1_500.0),
            plan: None,
        }
    }

    pub fn focused(&self) -> AllocatorField {
        AllocatorField::ALL[self.focus.min(AllocatorField::ALL.len() - 1)]
    }

    pub fn cycle_focus(&mut self, forward: bool) {
        self.focus = cycle_focus(self.focus, AllocatorField::ALL.len(), forward);
    }

    /// Run the allocator on the current form values
    pub fn calculate(&mut self, benchmarks: &Benchmarks) -> Result<&BudgetPlan, CalcError> {
        let mut builder = AllocationBuilder::new()
            .monthly_budget(self.monthly_budget.value())
            .customer_value(self.customer_value.value());
        if let Some(industry) = self.industry.selected() {
            builder = builder.industry(industry);
        }
        if let Some(goal) = self.goal.selected() {
            builder = builder.goal(goal);
        }

        let plan = builder.allocate(benchmarks)?;
        Ok(self.plan.insert(plan))
    }
}

// ============================================================================
// ROI projector wizard
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectorField {
    Industry,
    ClientValue,
    CloseRate,
    CurrentBudget,
    CurrentLeads,
    LeadSource,
    ProposedBudget,
    Goal,
    Name,
    Email,
    Company,
    Phone,
    EmailOptIn,
}

impl ProjectorField {
    /// Fields shown on a wizard step, in focus order
    pub fn for_step(step: WizardStep) -> &'static [ProjectorField] {
        match step {
            WizardStep::Step1 => &[
                ProjectorField::Industry,
                ProjectorField::ClientValue,
                ProjectorField::CloseRate,
            ],
            WizardStep::Step2 => &[
                ProjectorField::CurrentBudget,
                ProjectorField::CurrentLeads,
                ProjectorField::LeadSource,
            ],
            WizardStep::Step3 => &[ProjectorField::ProposedBudget, ProjectorField::Goal],
            WizardStep::Step4 => &[
                ProjectorField::Name,
                ProjectorField::Email,
                ProjectorField::Company,
                ProjectorField::Phone,
                ProjectorField::EmailOptIn,
            ],
            WizardStep::Results => &[],
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(
            self,
            ProjectorField::Name
                | ProjectorField::Email
                | ProjectorField::Company
                | ProjectorField::Phone
        )
    }
}

#[derive(Debug)]
pub struct ProjectorState {
    pub wizard: Wizard,
    pub focus: usize,
    pub results_scroll: u16,

    pub industry: Choice<Industry>,
    pub client_value: Slider,
    pub close_rate: Choice<CloseRate>,

    pub current_budget: Slider,
    pub current_leads: Slider,
    pub lead_source: Choice<LeadSource>,

    pub proposed_budget: Slider,
    pub goal: Choice<GrowthGoal>,

    pub name: TextField,
    pub email: TextField,
    pub company: TextField,
    pub phone: TextField,
    pub email_opt_in: bool,
}

impl Default for ProjectorState {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectorState {
    pub fn new() -> Self {
        Self {
            wizard: Wizard::new(),
            focus: 0,
            results_scroll: 0,
            industry: Choice::new(FormField::Industry, Industry::PROJECTOR),
            client_value: Slider::currency(FormField::ClientValue, 500.0, 50_000.0, 500.0, 5_000.0),
            close_rate: Choice::new(FormField::CloseRate, CloseRate::ALL),
            current_budget: Slider::currency(FormField::CurrentBudget, 0.0, 20_000.0, 250.0, 2_000.0),
            current_leads: Slider::count(FormField::CurrentLeads, 0.0, 200.0, 10.0),
            lead_source: Choice::new(FormField::LeadSource, LeadSource::ALL),
            proposed_budget: Slider::currency(
                FormField::ProposedBudget,
                1_500.0,
                15_000.0,
                250.0,
                3_500.0,
            ),
            goal: Choice::new(FormField::Goal, GrowthGoal::ALL),
            name: TextField::new(FormField::Name, true),
            email: TextField::new(FormField::Email, true),
            company: TextField::new(FormField::Company, true),
            phone: TextField::new(FormField::Phone, false),
            email_opt_in: false,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.wizard.step()
    }

    pub fn fields(&self) -> &'static [ProjectorField] {
        ProjectorField::for_step(self.step())
    }

    pub fn focused(&self) -> Option<ProjectorField> {
        self.fields().get(self.focus).copied()
    }

    pub fn cycle_focus(&mut self, forward: bool) {
        self.focus = cycle_focus(self.focus, self.fields().len(), forward);
    }

    pub fn text_field_mut(&mut self, field: ProjectorField) -> Option<&mut TextField> {
        match field {
            ProjectorField::Name => Some(&mut self.name),
            ProjectorField::Email => Some(&mut self.email),
            ProjectorField::Company => Some(&mut self.company),
            ProjectorField::Phone => Some(&mut self.phone),
            _ => None,
        }
    }

    /// Snapshot the form for the current step
    pub fn draft(&self) -> Option<StepDraft> {
        let draft = match self.step() {
            WizardStep::Step1 => StepDraft::Profile(ProfileDraft {
                industry: self.industry.selected(),
                client_value: self.client_value.value(),
                close_rate: self.close_rate.selected(),
            }),
            WizardStep::Step2 => StepDraft::Pipeline(PipelineDraft {
                current_budget: self.current_budget.value(),
                current_leads: self.current_leads.value().round() as u32,
                lead_source: self.lead_source.selected(),
            }),
            WizardStep::Step3 => StepDraft::Investment(InvestmentDraft {
                proposed_budget: self.proposed_budget.value(),
                goal: self.goal.selected(),
            }),
            WizardStep::Step4 => StepDraft::Contact(ContactDraft {
                name: self.name.value().to_string(),
                email: self.email.value().to_string(),
                company: self.company.value().to_string(),
                phone: self.phone.value().to_string(),
                email_opt_in: self.email_opt_in,
            }),
            WizardStep::Results => return None,
        };
        Some(draft)
    }

    /// Validate and commit the current step
    pub fn submit(&mut self, benchmarks: &Benchmarks) -> Result<WizardStep, WizardError> {
        let draft = self.draft().ok_or(WizardError::Finished)?;
        let step = self.wizard.advance(draft, benchmarks)?;
        self.focus = 0;
        Ok(step)
    }

    pub fn back(&mut self) -> Result<WizardStep, WizardError> {
        let step = self.wizard.back()?;
        self.focus = 0;
        Ok(step)
    }

    /// Start over with an empty form
    pub fn restart(&mut self) {
        *self = Self::new();
    }
}

// ============================================================================
// Contact form
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Company,
    Industry,
    Phone,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 6] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Company,
        ContactField::Industry,
        ContactField::Phone,
        ContactField::Message,
    ];
}

#[derive(Debug)]
pub struct ContactState {
    pub focus: usize,
    pub name: TextField,
    pub email: TextField,
    pub company: TextField,
    pub industry: Choice<Industry>,
    pub phone: TextField,
    pub message: TextField,
    pending: Option<PendingSubmission>,
    acknowledgement: Option<Acknowledgement>,
}

impl Default for ContactState {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactState {
    pub fn new() -> Self {
        Self {
            focus: 0,
            name: TextField::new(FormField::Name, true),
            email: TextField::new(FormField::Email, true),
            company: TextField::new(FormField::Company, true),
            industry: Choice::new(FormField::Industry, Industry::ALL),
            phone: TextField::new(FormField::Phone, false),
            message: TextField::new(FormField::Message, false),
            pending: None,
            acknowledgement: None,
        }
    }

    pub fn focused(&self) -> ContactField {
        ContactField::ALL[self.focus.min(ContactField::ALL.len() - 1)]
    }

    pub fn cycle_focus(&mut self, forward: bool) {
        self.focus = cycle_focus(self.focus, ContactField::ALL.len(), forward);
    }

    pub fn text_field_mut(&mut self, field: ContactField) -> Option<&mut TextField> {
        match field {
            ContactField::Name => Some(&mut self.name),
            ContactField::Email => Some(&mut self.email),
            ContactField::Company => Some(&mut self.company),
            ContactField::Phone => Some(&mut self.phone),
            ContactField::Message => Some(&mut self.message),
            ContactField::Industry => None,
        }
    }

    pub fn form(&self) -> ContactForm {
        ContactForm {
            name: self.name.value().to_string(),
            email: self.email.value().to_string(),
            company: self.company.value().to_string(),
            industry: self.industry.selected(),
            phone: self.phone.value().to_string(),
            message: self.message.value().to_string(),
        }
    }

    pub fn is_sending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn acknowledgement(&self) -> Option<&Acknowledgement> {
        self.acknowledgement.as_ref()
    }

    /// Time left on the simulated send, if one is in flight
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        match self.pending.as_ref()?.poll(now) {
            SubmissionStatus::Sending { remaining } => Some(remaining),
            SubmissionStatus::Delivered(_) => Some(Duration::ZERO),
        }
    }

    /// Validate and start sending. Ignored while a send is in flight.
    pub fn submit(&mut self, now: Instant) -> Result<(), ContactError> {
        if self.pending.is_some() {
            return Ok(());
        }
        let pending = self.form().submit(now, jiff::Timestamp::now())?;
        tracing::info!(company = %pending.request().company, "Contact form submitted");
        self.acknowledgement = None;
        self.pending = Some(pending);
        Ok(())
    }

    /// Complete the send once its delay has elapsed. Returns true when it completed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(pending) = &self.pending else {
            return false;
        };
        match pending.poll(now) {
            SubmissionStatus::Sending { .. } => false,
            SubmissionStatus::Delivered(ack) => {
                tracing::info!(submitted_at = %ack.submitted_at, "Contact form acknowledged");
                // The form resets once the message is acknowledged
                *self = Self {
                    acknowledgement: Some(ack),
                    ..Self::new()
                };
                true
            }
        }
    }

    pub fn dismiss_acknowledgement(&mut self) {
        self.acknowledgement = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leadplan_core::contact::SUBMISSION_DELAY;
    use leadplan_core::model::Tier;

    #[test]
    fn test_allocator_requires_industry() {
        let benchmarks = Benchmarks::builtin();
        let mut state = AllocatorState::new(benchmarks);
        let err = state.calculate(benchmarks).unwrap_err();
        assert_eq!(err.to_string(), "industry is required");
        assert!(state.plan.is_none());

        state.industry.select(Industry::Healthcare);
        let plan = state.calculate(benchmarks).unwrap();
        assert_eq!(plan.expected_leads, 20);
        assert!(state.plan.is_some());
    }

    #[test]
    fn test_allocator_offers_only_profiled_industries() {
        let state = AllocatorState::new(Benchmarks::builtin());
        assert_eq!(state.industry.options().len(), 5);
        assert!(!state.industry.options().contains(&Industry::Logistics));
        assert!(state.goal.is_selected(AllocationGoal::Balanced));
    }

    #[test]
    fn test_projector_walkthrough() {
        let benchmarks = Benchmarks::builtin();
        let mut state = ProjectorState::new();

        let err = state.submit(benchmarks).unwrap_err();
        assert_eq!(err, WizardError::MissingSelection(FormField::Industry));

        state.industry.select(Industry::Recruitment);
        state.client_value.set(2_000.0);
        state.close_rate.select(CloseRate::Typical);
        assert_eq!(state.submit(benchmarks), Ok(WizardStep::Step2));
        assert_eq!(state.focused(), Some(ProjectorField::CurrentBudget));

        state.lead_source.select(LeadSource::Website);
        assert_eq!(state.submit(benchmarks), Ok(WizardStep::Step3));

        state.proposed_budget.set(6_000.0);
        state.goal.select(GrowthGoal::MoreLeads);
        assert_eq!(state.submit(benchmarks), Ok(WizardStep::Step4));

        state.name.set("Ada");
        state.email.set("ada@example.com");
        state.company.set("Analytical Staffing");
        assert_eq!(state.submit(benchmarks), Ok(WizardStep::Results));
        assert!(state.draft().is_none());

        let report = state.wizard.report().unwrap();
        assert_eq!(report.projection.tier, Tier::Domination);
        assert_eq!(report.inputs.current_leads, 10);

        assert_eq!(state.submit(benchmarks), Err(WizardError::Finished));
        state.restart();
        assert_eq!(state.step(), WizardStep::Step1);
    }

    #[test]
    fn test_projector_back_keeps_form_values() {
        let benchmarks = Benchmarks::builtin();
        let mut state = ProjectorState::new();
        state.industry.select(Industry::Logistics);
        state.close_rate.select(CloseRate::High);
        state.submit(benchmarks).unwrap();

        assert_eq!(state.back(), Ok(WizardStep::Step1));
        assert!(state.industry.is_selected(Industry::Logistics));
        assert_eq!(state.back(), Err(WizardError::AtFirstStep));
    }

    #[test]
    fn test_contact_submit_and_acknowledge() {
        let mut state = ContactState::new();
        let start = Instant::now();

        assert_eq!(
            state.submit(start),
            Err(ContactError::MissingField(FormField::Name))
        );

        state.name.set("Sam");
        state.email.set("sam@example.com");
        state.company.set("Ortiz Logistics");
        state.industry.select(Industry::Logistics);
        state.submit(start).unwrap();
        assert!(state.is_sending());

        assert!(!state.tick(start + Duration::from_millis(200)));
        assert_eq!(
            state.remaining(start + Duration::from_millis(200)),
            Some(Duration::from_millis(1_300))
        );

        assert!(state.tick(start + SUBMISSION_DELAY));
        assert!(!state.is_sending());
        assert_eq!(state.name.value(), "");
        assert_eq!(
            state.acknowledgement().unwrap().request.company,
            "Ortiz Logistics"
        );
    }

    #[test]
    fn test_contact_email_checked_after_required_fields() {
        let mut state = ContactState::new();
        state.name.set("Sam");
        state.email.set("sam-at-example");
        state.company.set("Ortiz");
        state.industry.select(Industry::Healthcare);

        assert!(matches!(
            state.submit(Instant::now()),
            Err(ContactError::InvalidEmail(_))
        ));
        assert!(!state.is_sending());
    }
}
