//! Identifiers for benchmark tables and form selections
//!
//! Every key that selects a row of a static table, or a radio option on a
//! form, is a closed enum so that an unknown key cannot be constructed.

use serde::{Deserialize, Serialize};

/// Industry a business operates in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Industry {
    PropertyManagement,
    Recruitment,
    Healthcare,
    ProfessionalServices,
    ItServices,
    CorporateTraining,
    Logistics,
    OtherB2b,
}

impl Industry {
    pub const ALL: [Industry; 8] = [
        Industry::PropertyManagement,
        Industry::Recruitment,
        Industry::Healthcare,
        Industry::ProfessionalServices,
        Industry::ItServices,
        Industry::CorporateTraining,
        Industry::Logistics,
        Industry::OtherB2b,
    ];

    /// Industries offered by the ROI projector
    pub const PROJECTOR: [Industry; 7] = [
        Industry::PropertyManagement,
        Industry::Recruitment,
        Industry::ProfessionalServices,
        Industry::ItServices,
        Industry::CorporateTraining,
        Industry::Logistics,
        Industry::OtherB2b,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Industry::PropertyManagement => "property-management",
            Industry::Recruitment => "recruitment",
            Industry::Healthcare => "healthcare",
            Industry::ProfessionalServices => "professional-services",
            Industry::ItServices => "it-services",
            Industry::CorporateTraining => "corporate-training",
            Industry::Logistics => "logistics",
            Industry::OtherB2b => "other-b2b",
        }
    }

    /// Short display name used in projector summaries
    pub fn name(&self) -> &'static str {
        match self {
            Industry::PropertyManagement => "Property Management",
            Industry::Recruitment => "Recruitment",
            Industry::Healthcare => "Healthcare",
            Industry::ProfessionalServices => "Professional Services",
            Industry::ItServices => "IT Services",
            Industry::CorporateTraining => "Corporate Training",
            Industry::Logistics => "Logistics",
            Industry::OtherB2b => "B2B Services",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|i| i.key() == key)
    }
}

/// Marketing spend category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Channel {
    Seo,
    PaidAds,
    Content,
    Linkedin,
    Other,
}

impl Channel {
    /// Display order of channels in an allocation
    pub const ALL: [Channel; 5] = [
        Channel::Seo,
        Channel::PaidAds,
        Channel::Content,
        Channel::Linkedin,
        Channel::Other,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Channel::Seo => "SEO & Organic Content",
            Channel::PaidAds => "Paid Advertising",
            Channel::Content => "Content Creation",
            Channel::Linkedin => "LinkedIn Outreach",
            Channel::Other => "Tools & Analytics",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Channel::Seo => "Blog posts, website optimization, keyword targeting",
            Channel::PaidAds => "Google Ads, LinkedIn Ads, targeted campaigns",
            Channel::Content => "Guides, whitepapers, lead magnets, case studies",
            Channel::Linkedin => "Profile optimization, networking, targeted messaging",
            Channel::Other => "Marketing software, tracking, testing tools",
        }
    }
}

/// Goal that skews the allocator's channel split
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AllocationGoal {
    BrandAwareness,
    Balanced,
    LeadGeneration,
}

impl AllocationGoal {
    pub const ALL: [AllocationGoal; 3] = [
        AllocationGoal::BrandAwareness,
        AllocationGoal::Balanced,
        AllocationGoal::LeadGeneration,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            AllocationGoal::BrandAwareness => "brand-awareness",
            AllocationGoal::Balanced => "balanced",
            AllocationGoal::LeadGeneration => "lead-generation",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AllocationGoal::BrandAwareness => "Brand Awareness",
            AllocationGoal::Balanced => "Balanced Growth",
            AllocationGoal::LeadGeneration => "Lead Generation",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.key() == key)
    }
}

/// Budget bracket that determines baseline lead volume
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    Foundation,
    Growth,
    Domination,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Foundation, Tier::Growth, Tier::Domination];

    /// Lower bound (inclusive) of the growth tier
    pub const GROWTH_THRESHOLD: f64 = 3_500.0;
    /// Lower bound (inclusive) of the domination tier
    pub const DOMINATION_THRESHOLD: f64 = 5_500.0;

    /// Select the tier for a proposed monthly budget.
    ///
    /// Boundary values belong to the upper tier.
    pub fn for_budget(proposed_budget: f64) -> Self {
        if proposed_budget >= Self::DOMINATION_THRESHOLD {
            Tier::Domination
        } else if proposed_budget >= Self::GROWTH_THRESHOLD {
            Tier::Growth
        } else {
            Tier::Foundation
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tier::Foundation => "Foundation",
            Tier::Growth => "Growth",
            Tier::Domination => "Domination",
        }
    }
}

/// Close rate radio options on the projector's first step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CloseRate {
    Low,
    Typical,
    High,
    Excellent,
}

impl CloseRate {
    pub const ALL: [CloseRate; 4] = [
        CloseRate::Low,
        CloseRate::Typical,
        CloseRate::High,
        CloseRate::Excellent,
    ];

    /// Close rate in percent
    pub fn percent(&self) -> f64 {
        match self {
            CloseRate::Low => 10.0,
            CloseRate::Typical => 20.0,
            CloseRate::High => 30.0,
            CloseRate::Excellent => 40.0,
        }
    }

    pub fn from_percent(percent: f64) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.percent() == percent)
    }

    pub fn label(&self) -> &'static str {
        match self {
            CloseRate::Low => "10% (1 in 10)",
            CloseRate::Typical => "20% (1 in 5)",
            CloseRate::High => "30% (1 in 3)",
            CloseRate::Excellent => "40%+ (2 in 5)",
        }
    }
}

/// Where most of a business's leads come from today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeadSource {
    Referrals,
    Website,
    PaidAds,
    Outbound,
    Events,
}

impl LeadSource {
    pub const ALL: [LeadSource; 5] = [
        LeadSource::Referrals,
        LeadSource::Website,
        LeadSource::PaidAds,
        LeadSource::Outbound,
        LeadSource::Events,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            LeadSource::Referrals => "Referrals & word of mouth",
            LeadSource::Website => "Website & organic search",
            LeadSource::PaidAds => "Paid advertising",
            LeadSource::Outbound => "Cold outreach",
            LeadSource::Events => "Events & networking",
        }
    }
}

/// Primary goal selected on the projector's third step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GrowthGoal {
    MoreLeads,
    BetterLeads,
    LowerCost,
    Predictability,
}

impl GrowthGoal {
    pub const ALL: [GrowthGoal; 4] = [
        GrowthGoal::MoreLeads,
        GrowthGoal::BetterLeads,
        GrowthGoal::LowerCost,
        GrowthGoal::Predictability,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            GrowthGoal::MoreLeads => "More leads",
            GrowthGoal::BetterLeads => "Better quality leads",
            GrowthGoal::LowerCost => "Lower cost per lead",
            GrowthGoal::Predictability => "Predictable pipeline",
        }
    }
}
