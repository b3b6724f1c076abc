//! Projector wizard tests

use crate::error::{ContactError, InputError, WizardError};
use crate::model::{Benchmarks, CloseRate, FormField, GrowthGoal, Industry, LeadSource, Tier};
use crate::wizard::{
    ContactDraft, InvestmentDraft, PipelineDraft, ProfileDraft, StepDraft, StepStatus, Wizard,
    WizardStep,
};

fn profile() -> StepDraft {
    StepDraft::Profile(ProfileDraft {
        industry: Some(Industry::Recruitment),
        client_value: 2_000.0,
        close_rate: Some(CloseRate::Typical),
    })
}

fn pipeline() -> StepDraft {
    StepDraft::Pipeline(PipelineDraft {
        current_budget: 0.0,
        current_leads: 8,
        lead_source: Some(LeadSource::Referrals),
    })
}

fn investment(budget: f64) -> StepDraft {
    StepDraft::Investment(InvestmentDraft {
        proposed_budget: budget,
        goal: Some(GrowthGoal::MoreLeads),
    })
}

fn contact(email: &str) -> StepDraft {
    StepDraft::Contact(ContactDraft {
        name: "Dana Lee".to_string(),
        email: email.to_string(),
        company: "Northwind Staffing".to_string(),
        phone: String::new(),
        email_opt_in: true,
    })
}

fn wizard_at_step4() -> Wizard {
    let benchmarks = Benchmarks::builtin();
    let mut wizard = Wizard::new();
    wizard.advance(profile(), benchmarks).unwrap();
    wizard.advance(pipeline(), benchmarks).unwrap();
    wizard.advance(investment(6_000.0), benchmarks).unwrap();
    wizard
}

#[test]
fn test_full_run_reaches_results() {
    let mut wizard = wizard_at_step4();
    assert_eq!(wizard.step(), WizardStep::Step4);
    assert!(wizard.report().is_none());

    let step = wizard
        .advance(contact("dana@northwind.example"), Benchmarks::builtin())
        .unwrap();
    assert_eq!(step, WizardStep::Results);
    assert!(wizard.is_finished());

    let report = wizard.report().unwrap();
    assert_eq!(report.projection.tier, Tier::Domination);
    assert_eq!(report.projection.month(1).unwrap().leads, 12);
    assert_eq!(report.inputs.current_leads, 8);

    let contact = wizard.contact().unwrap();
    assert_eq!(contact.phone, None);
    assert!(contact.email_opt_in);
}

#[test]
fn test_missing_selection_blocks_advance() {
    let benchmarks = Benchmarks::builtin();
    let mut wizard = Wizard::new();

    let result = wizard.advance(StepDraft::Profile(ProfileDraft::default()), benchmarks);
    assert_eq!(
        result,
        Err(WizardError::MissingSelection(FormField::Industry))
    );

    let result = wizard.advance(
        StepDraft::Profile(ProfileDraft {
            industry: Some(Industry::Logistics),
            client_value: 5_000.0,
            close_rate: None,
        }),
        benchmarks,
    );
    assert_eq!(
        result,
        Err(WizardError::MissingSelection(FormField::CloseRate))
    );

    assert_eq!(wizard.step(), WizardStep::Step1);
    assert!(wizard.profile().is_none());
}

#[test]
fn test_each_step_checks_its_radio() {
    let benchmarks = Benchmarks::builtin();
    let mut wizard = Wizard::new();
    wizard.advance(profile(), benchmarks).unwrap();

    let result = wizard.advance(StepDraft::Pipeline(PipelineDraft::default()), benchmarks);
    assert_eq!(
        result,
        Err(WizardError::MissingSelection(FormField::LeadSource))
    );

    wizard.advance(pipeline(), benchmarks).unwrap();
    let result = wizard.advance(
        StepDraft::Investment(InvestmentDraft {
            proposed_budget: 4_000.0,
            goal: None,
        }),
        benchmarks,
    );
    assert_eq!(result, Err(WizardError::MissingSelection(FormField::Goal)));
    assert_eq!(wizard.step(), WizardStep::Step3);
}

#[test]
fn test_non_positive_amounts_are_rejected() {
    let benchmarks = Benchmarks::builtin();
    let mut wizard = Wizard::new();
    wizard.advance(profile(), benchmarks).unwrap();
    wizard.advance(pipeline(), benchmarks).unwrap();

    let result = wizard.advance(investment(0.0), benchmarks);
    assert_eq!(
        result,
        Err(WizardError::Input(InputError::NotPositive {
            field: FormField::ProposedBudget,
            value: 0.0
        }))
    );
}

#[test]
fn test_cannot_skip_ahead() {
    let mut wizard = Wizard::new();
    let result = wizard.advance(investment(6_000.0), Benchmarks::builtin());
    assert_eq!(
        result,
        Err(WizardError::StepMismatch {
            expected: WizardStep::Step1,
            got: WizardStep::Step3
        })
    );
    assert!(wizard.investment().is_none());
}

#[test]
fn test_fields_unreadable_until_committed() {
    let benchmarks = Benchmarks::builtin();
    let mut wizard = Wizard::new();
    assert!(wizard.profile().is_none());

    wizard.advance(profile(), benchmarks).unwrap();
    assert_eq!(wizard.profile().unwrap().industry, Industry::Recruitment);
    assert!(wizard.pipeline().is_none());
    assert!(wizard.projection_inputs().is_err());
}

#[test]
fn test_back_keeps_committed_records_without_validation() {
    let benchmarks = Benchmarks::builtin();
    let mut wizard = Wizard::new();
    wizard.advance(profile(), benchmarks).unwrap();
    wizard.advance(pipeline(), benchmarks).unwrap();
    assert_eq!(wizard.step(), WizardStep::Step3);

    assert_eq!(wizard.back(), Ok(WizardStep::Step2));
    assert_eq!(wizard.back(), Ok(WizardStep::Step1));
    assert_eq!(wizard.back(), Err(WizardError::AtFirstStep));

    assert!(wizard.profile().is_some());
    assert_eq!(wizard.pipeline().unwrap().current_leads, 8);
}

#[test]
fn test_readvancing_replaces_record() {
    let benchmarks = Benchmarks::builtin();
    let mut wizard = Wizard::new();
    wizard.advance(profile(), benchmarks).unwrap();
    wizard.back().unwrap();

    wizard
        .advance(
            StepDraft::Profile(ProfileDraft {
                industry: Some(Industry::ItServices),
                client_value: 9_000.0,
                close_rate: Some(CloseRate::High),
            }),
            benchmarks,
        )
        .unwrap();

    let committed = wizard.profile().unwrap();
    assert_eq!(committed.industry, Industry::ItServices);
    assert_eq!(committed.close_rate, CloseRate::High);
}

#[test]
fn test_contact_step_validation() {
    let benchmarks = Benchmarks::builtin();
    let mut wizard = wizard_at_step4();

    let result = wizard.advance(contact("not-an-email"), benchmarks);
    assert_eq!(
        result,
        Err(WizardError::Contact(ContactError::InvalidEmail(
            "not-an-email".to_string()
        )))
    );

    let result = wizard.advance(
        StepDraft::Contact(ContactDraft {
            name: "Dana".to_string(),
            email: "dana@example.com".to_string(),
            ..Default::default()
        }),
        benchmarks,
    );
    assert_eq!(
        result,
        Err(WizardError::Contact(ContactError::MissingField(
            FormField::Company
        )))
    );

    assert_eq!(wizard.step(), WizardStep::Step4);
    assert!(wizard.report().is_none());
    assert!(wizard.contact().is_none());
}

#[test]
fn test_results_is_terminal() {
    let benchmarks = Benchmarks::builtin();
    let mut wizard = wizard_at_step4();
    wizard.advance(contact("a@b.co"), benchmarks).unwrap();

    assert_eq!(wizard.back(), Err(WizardError::Finished));
    assert_eq!(
        wizard.advance(profile(), benchmarks),
        Err(WizardError::Finished)
    );

    wizard.reset();
    assert_eq!(wizard.step(), WizardStep::Step1);
    assert!(wizard.report().is_none());
}

#[test]
fn test_step_status() {
    let wizard = wizard_at_step4();
    assert_eq!(wizard.status_of(WizardStep::Step1), StepStatus::Completed);
    assert_eq!(wizard.status_of(WizardStep::Step3), StepStatus::Completed);
    assert_eq!(wizard.status_of(WizardStep::Step4), StepStatus::Active);
    assert_eq!(wizard.status_of(WizardStep::Results), StepStatus::Upcoming);
}
