use serde::{Deserialize, Serialize};

/// A named input field on one of the calculator forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Industry,
    Goal,
    MonthlyBudget,
    CustomerValue,
    ClientValue,
    CloseRate,
    CurrentBudget,
    CurrentLeads,
    LeadSource,
    ProposedBudget,
    Name,
    Email,
    Company,
    Phone,
    Message,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Industry => "industry",
            FormField::Goal => "primary goal",
            FormField::MonthlyBudget => "monthly budget",
            FormField::CustomerValue => "customer value",
            FormField::ClientValue => "client value",
            FormField::CloseRate => "close rate",
            FormField::CurrentBudget => "current budget",
            FormField::CurrentLeads => "current leads",
            FormField::LeadSource => "primary lead source",
            FormField::ProposedBudget => "proposed budget",
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Company => "company",
            FormField::Phone => "phone",
            FormField::Message => "message",
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
