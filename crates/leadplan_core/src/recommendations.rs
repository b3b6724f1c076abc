//! Rule-based recommendations for a budget plan
//!
//! Rules are evaluated in [`RULES`] order and each contributes at most one
//! entry. The order is part of the output contract: the page lists
//! recommendations exactly as returned.

use crate::model::{Industry, Recommendation, RecommendationCategory};

/// Figures the rules look at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommendationContext {
    pub industry: Industry,
    pub monthly_budget: f64,
    pub roi_percent: i64,
    pub expected_clients: u32,
}

/// A single predicate→message rule
pub struct Rule {
    pub name: &'static str,
    pub evaluate: fn(&RecommendationContext) -> Option<Recommendation>,
}

pub const RULES: [Rule; 5] = [
    Rule {
        name: "roi",
        evaluate: roi_rule,
    },
    Rule {
        name: "budget_size",
        evaluate: budget_rule,
    },
    Rule {
        name: "client_volume",
        evaluate: client_volume_rule,
    },
    Rule {
        name: "industry_strategy",
        evaluate: industry_rule,
    },
    Rule {
        name: "timeline",
        evaluate: timeline_rule,
    },
];

pub const LOW_ROI_PERCENT: i64 = 200;
pub const EXCELLENT_ROI_PERCENT: i64 = 500;
pub const LIMITED_BUDGET: f64 = 1_500.0;
pub const SCALE_BUDGET: f64 = 5_000.0;
pub const LOW_CLIENT_VOLUME: u32 = 2;
pub const STRONG_CLIENT_VOLUME: u32 = 5;

pub fn recommend(ctx: &RecommendationContext) -> Vec<Recommendation> {
    RULES.iter().filter_map(|rule| (rule.evaluate)(ctx)).collect()
}

fn roi_rule(ctx: &RecommendationContext) -> Option<Recommendation> {
    let roi = ctx.roi_percent;
    let rec = if roi < LOW_ROI_PERCENT {
        Recommendation::new(
            RecommendationCategory::Warning,
            "Low Expected ROI",
            "Your projected ROI is below 200%. Consider increasing your budget or focusing on \
             higher-value services to improve returns. Alternatively, optimize your sales \
             conversion rate.",
        )
    } else if roi > EXCELLENT_ROI_PERCENT {
        Recommendation::new(
            RecommendationCategory::Success,
            "Excellent ROI Potential",
            format!(
                "Your projected {roi}% ROI is outstanding. Consider increasing your marketing \
                 budget to scale these results even further."
            ),
        )
    } else {
        Recommendation::new(
            RecommendationCategory::Success,
            "Healthy ROI",
            format!(
                "Your projected {roi}% ROI is solid for B2B services. This allocation should \
                 generate sustainable growth."
            ),
        )
    };
    Some(rec)
}

fn budget_rule(ctx: &RecommendationContext) -> Option<Recommendation> {
    if ctx.monthly_budget < LIMITED_BUDGET {
        Some(Recommendation::new(
            RecommendationCategory::Info,
            "Limited Budget",
            "With a smaller budget, focus heavily on SEO and organic content. These channels \
             build long-term assets. Consider starting with one paid channel rather than \
             splitting too thin.",
        ))
    } else if ctx.monthly_budget > SCALE_BUDGET {
        Some(Recommendation::new(
            RecommendationCategory::Info,
            "Opportunity to Scale",
            "Your budget allows for comprehensive multi-channel marketing. Test multiple \
             channels simultaneously and double down on winners within 3 months.",
        ))
    } else {
        None
    }
}

fn client_volume_rule(ctx: &RecommendationContext) -> Option<Recommendation> {
    let clients = ctx.expected_clients;
    if clients < LOW_CLIENT_VOLUME {
        Some(Recommendation::new(
            RecommendationCategory::Warning,
            "Low Client Volume",
            "Expected client volume is low. Ensure your sales process is optimized to convert \
             maximum leads, or consider increasing budget to generate more opportunities.",
        ))
    } else if clients >= STRONG_CLIENT_VOLUME {
        Some(Recommendation::new(
            RecommendationCategory::Success,
            "Strong Lead Pipeline",
            format!(
                "You can expect {clients} new clients per month. Ensure your sales team has \
                 capacity to handle this volume and maintain high conversion rates."
            ),
        ))
    } else {
        None
    }
}

fn industry_rule(ctx: &RecommendationContext) -> Option<Recommendation> {
    let (title, body) = match ctx.industry {
        Industry::PropertyManagement => (
            "Property Management Strategy",
            "Focus on MCST-focused content and local SEO. Target property managers actively \
             looking to switch providers. Timeline: expect 4-6 months for strong SEO results.",
        ),
        Industry::Recruitment => (
            "Recruitment Strategy",
            "Position on EOR/PEO services, not just candidate placement. Target employers on \
             LinkedIn. Build authority content around employment law and compliance.",
        ),
        Industry::Healthcare => (
            "Healthcare Strategy",
            "Emphasize educational content and doctor credentials. Target both patients (SEO) \
             and corporate clients (LinkedIn). Ensure all content is compliance-friendly.",
        ),
        Industry::ProfessionalServices => (
            "Professional Services Strategy",
            "Long sales cycles require consistent nurturing. Focus on thought leadership \
             content and LinkedIn networking. Budget for 6-9 month timeframe to ROI.",
        ),
        Industry::OtherB2b => (
            "B2B Services Strategy",
            "Target decision-makers with high-intent keywords. Create problem-solving content. \
             Use LinkedIn for direct outreach to ideal customer profiles.",
        ),
        Industry::ItServices | Industry::CorporateTraining | Industry::Logistics => return None,
    };
    Some(Recommendation::new(
        RecommendationCategory::Info,
        title,
        body,
    ))
}

fn timeline_rule(_ctx: &RecommendationContext) -> Option<Recommendation> {
    Some(Recommendation::new(
        RecommendationCategory::Info,
        "Realistic Timeline",
        "Expect 3-6 months for full results. Month 1-2: foundation and testing. Month 3-4: \
         traction and optimization. Month 5-6: momentum and scaling. SEO results compound \
         over time.",
    ))
}
