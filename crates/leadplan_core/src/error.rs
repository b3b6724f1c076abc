use std::fmt;

use crate::model::{
    AllocationGoal, Channel, FormField, Industry, MAX_INDUSTRY_MULTIPLIER, MAX_TIER_LEADS, Tier,
};
use crate::wizard::WizardStep;

/// Errors related to user-entered numeric input
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    /// Value was NaN or infinite
    NotFinite { field: FormField, value: f64 },
    /// Value must be strictly greater than zero
    NotPositive { field: FormField, value: f64 },
    /// Value must be zero or greater
    Negative { field: FormField, value: f64 },
    /// Value is above the largest the calculators can represent or accept
    TooLarge { field: FormField, value: f64, max: f64 },
    /// A required input was never supplied
    Missing(FormField),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::NotFinite { field, value } => {
                write!(f, "{field} must be a number (got {value})")
            }
            InputError::NotPositive { field, value } => {
                write!(f, "{field} must be greater than zero (got {value})")
            }
            InputError::Negative { field, value } => {
                write!(f, "{field} cannot be negative (got {value})")
            }
            InputError::TooLarge { field, value, max } => {
                write!(f, "{field} must be at most {max} (got {value})")
            }
            InputError::Missing(field) => write!(f, "{field} is required"),
        }
    }
}

impl std::error::Error for InputError {}

/// Errors related to benchmark table lookups
#[derive(Debug, Clone, PartialEq)]
pub enum LookupError {
    IndustryProfileNotFound(Industry),
    GoalNotFound(AllocationGoal),
    TierNotFound(Tier),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::IndustryProfileNotFound(industry) => {
                write!(f, "no benchmark profile for industry {}", industry.key())
            }
            LookupError::GoalNotFound(goal) => {
                write!(f, "no channel modifiers for goal {}", goal.key())
            }
            LookupError::TierNotFound(tier) => {
                write!(f, "no lead range for tier {}", tier.name())
            }
        }
    }
}

impl std::error::Error for LookupError {}

/// Errors found while validating benchmark tables
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidCostPerLead {
        industry: Industry,
        value: f64,
    },
    InvalidConversionRate {
        industry: Industry,
        value: f64,
    },
    InvalidChannelWeight {
        table: String,
        channel: Channel,
        value: f64,
    },
    /// Every channel weight became zero after applying the goal modifiers
    ZeroWeightSum {
        industry: Industry,
        goal: AllocationGoal,
    },
    InvalidMultiplier {
        industry: Industry,
        value: f64,
    },
    InvalidTierRange {
        tier: Tier,
        min: u32,
        month6: u32,
        max: u32,
    },
    MissingGoal(AllocationGoal),
    MissingTier(Tier),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidCostPerLead { industry, value } => write!(
                f,
                "{}: average cost per lead must be positive (got {value})",
                industry.key()
            ),
            ConfigError::InvalidConversionRate { industry, value } => write!(
                f,
                "{}: conversion rate must be between 0 and 1 (got {value})",
                industry.key()
            ),
            ConfigError::InvalidChannelWeight {
                table,
                channel,
                value,
            } => write!(
                f,
                "{table}: weight for {channel:?} must be a non-negative number (got {value})"
            ),
            ConfigError::ZeroWeightSum { industry, goal } => write!(
                f,
                "{} with goal {} leaves no channel weight to allocate",
                industry.key(),
                goal.key()
            ),
            ConfigError::InvalidMultiplier { industry, value } => write!(
                f,
                "{}: industry multiplier must be between 0 and {MAX_INDUSTRY_MULTIPLIER} (got {value})",
                industry.key()
            ),
            ConfigError::InvalidTierRange {
                tier,
                min,
                month6,
                max,
            } => write!(
                f,
                "{} tier: expected 0 < min <= month6 <= max <= {MAX_TIER_LEADS} (got {min}/{month6}/{max})",
                tier.name()
            ),
            ConfigError::MissingGoal(goal) => write!(f, "missing modifiers for goal {}", goal.key()),
            ConfigError::MissingTier(tier) => write!(f, "missing lead range for tier {}", tier.name()),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors from running either calculator
#[derive(Debug, Clone, PartialEq)]
pub enum CalcError {
    Input(InputError),
    Lookup(LookupError),
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::Input(e) => write!(f, "{e}"),
            CalcError::Lookup(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CalcError::Input(e) => Some(e),
            CalcError::Lookup(e) => Some(e),
        }
    }
}

impl From<InputError> for CalcError {
    fn from(err: InputError) -> Self {
        CalcError::Input(err)
    }
}

impl From<LookupError> for CalcError {
    fn from(err: LookupError) -> Self {
        CalcError::Lookup(err)
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;

/// Errors from validating the contact form
#[derive(Debug, Clone, PartialEq)]
pub enum ContactError {
    MissingField(FormField),
    InvalidEmail(String),
}

impl fmt::Display for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactError::MissingField(field) => {
                write!(f, "please fill in all required fields ({field} is empty)")
            }
            ContactError::InvalidEmail(_) => write!(f, "please enter a valid email address"),
        }
    }
}

impl std::error::Error for ContactError {}

/// Errors from driving the projector wizard
#[derive(Debug, Clone, PartialEq)]
pub enum WizardError {
    /// A required selection on the current step is empty
    MissingSelection(FormField),
    Input(InputError),
    Contact(ContactError),
    /// The submitted draft belongs to a different step
    StepMismatch {
        expected: WizardStep,
        got: WizardStep,
    },
    AtFirstStep,
    /// The wizard already reached its results
    Finished,
    Projection(CalcError),
}

impl fmt::Display for WizardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WizardError::MissingSelection(field) => write!(f, "please select your {field}"),
            WizardError::Input(e) => write!(f, "{e}"),
            WizardError::Contact(e) => write!(f, "{e}"),
            WizardError::StepMismatch { expected, got } => {
                write!(f, "expected input for {expected:?}, got {got:?}")
            }
            WizardError::AtFirstStep => write!(f, "already at the first step"),
            WizardError::Finished => write!(f, "the projection is already complete"),
            WizardError::Projection(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for WizardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WizardError::Input(e) => Some(e),
            WizardError::Contact(e) => Some(e),
            WizardError::Projection(e) => Some(e),
            _ => None,
        }
    }
}

impl From<InputError> for WizardError {
    fn from(err: InputError) -> Self {
        WizardError::Input(err)
    }
}

impl From<ContactError> for WizardError {
    fn from(err: ContactError) -> Self {
        WizardError::Contact(err)
    }
}

impl From<CalcError> for WizardError {
    fn from(err: CalcError) -> Self {
        WizardError::Projection(err)
    }
}

/// Check that a value is finite and strictly positive
pub fn require_positive(field: FormField, value: f64) -> std::result::Result<f64, InputError> {
    if !value.is_finite() {
        return Err(InputError::NotFinite { field, value });
    }
    if value <= 0.0 {
        return Err(InputError::NotPositive { field, value });
    }
    Ok(value)
}

/// Check that a value is finite and zero or greater
pub fn require_non_negative(field: FormField, value: f64) -> std::result::Result<f64, InputError> {
    if !value.is_finite() {
        return Err(InputError::NotFinite { field, value });
    }
    if value < 0.0 {
        return Err(InputError::Negative { field, value });
    }
    Ok(value)
}

/// Check that a percentage is finite and within (0, 100]
pub fn require_percent(field: FormField, value: f64) -> std::result::Result<f64, InputError> {
    let value = require_positive(field, value)?;
    if value > 100.0 {
        return Err(InputError::TooLarge {
            field,
            value,
            max: 100.0,
        });
    }
    Ok(value)
}
