//! Benchmark table tests

use crate::error::ConfigError;
use crate::model::{
    AllocationGoal, Benchmarks, ChannelWeights, Industry, MAX_INDUSTRY_MULTIPLIER, MAX_TIER_LEADS,
    Tier,
};

#[test]
fn test_builtin_tables_validate() {
    assert_eq!(Benchmarks::builtin().validate(), Ok(()));
}

#[test]
fn test_builtin_splits_sum_to_100() {
    for (industry, profile) in &Benchmarks::builtin().industries {
        assert!(
            (profile.channel_split.sum() - 100.0).abs() < 1e-9,
            "{industry:?}"
        );
    }
}

#[test]
fn test_allocator_and_projector_industry_sets() {
    let benchmarks = Benchmarks::builtin();
    assert_eq!(benchmarks.allocator_industries().count(), 5);
    assert!(benchmarks.profile(Industry::Logistics).is_err());
    assert!(!Industry::PROJECTOR.contains(&Industry::Healthcare));
    assert_eq!(benchmarks.industry_multiplier(Industry::ItServices), 1.05);
}

#[test]
fn test_rejects_non_positive_cost_per_lead() {
    let mut benchmarks = Benchmarks::default();
    if let Some(profile) = benchmarks.industries.get_mut(&Industry::Healthcare) {
        profile.average_cost_per_lead = 0.0;
    }
    assert_eq!(
        benchmarks.validate(),
        Err(ConfigError::InvalidCostPerLead {
            industry: Industry::Healthcare,
            value: 0.0
        })
    );
}

#[test]
fn test_rejects_goal_that_zeroes_every_channel() {
    let mut benchmarks = Benchmarks::default();
    benchmarks
        .goals
        .insert(AllocationGoal::BrandAwareness, ChannelWeights::uniform(0.0));

    assert!(matches!(
        benchmarks.validate(),
        Err(ConfigError::ZeroWeightSum {
            goal: AllocationGoal::BrandAwareness,
            ..
        })
    ));
}

#[test]
fn test_rejects_missing_tier_and_bad_range() {
    let mut benchmarks = Benchmarks::default();
    benchmarks.tiers.remove(&Tier::Growth);
    assert_eq!(
        benchmarks.validate(),
        Err(ConfigError::MissingTier(Tier::Growth))
    );

    let mut benchmarks = Benchmarks::default();
    if let Some(range) = benchmarks.tiers.get_mut(&Tier::Foundation) {
        range.month6 = 20;
    }
    assert!(matches!(
        benchmarks.validate(),
        Err(ConfigError::InvalidTierRange {
            tier: Tier::Foundation,
            ..
        })
    ));
}

#[test]
fn test_rejects_multiplier_outside_bounds() {
    for value in [1e9, MAX_INDUSTRY_MULTIPLIER + 0.01, -0.5, f64::INFINITY] {
        let mut benchmarks = Benchmarks::default();
        benchmarks
            .industry_multipliers
            .insert(Industry::Recruitment, value);
        assert_eq!(
            benchmarks.validate(),
            Err(ConfigError::InvalidMultiplier {
                industry: Industry::Recruitment,
                value
            })
        );
    }

    let mut benchmarks = Benchmarks::default();
    benchmarks
        .industry_multipliers
        .insert(Industry::Recruitment, MAX_INDUSTRY_MULTIPLIER);
    assert_eq!(benchmarks.validate(), Ok(()));
}

#[test]
fn test_rejects_tier_leads_above_limit() {
    let mut benchmarks = Benchmarks::default();
    if let Some(range) = benchmarks.tiers.get_mut(&Tier::Domination) {
        range.month6 = 1_000_000_000;
        range.max = 1_000_000_000;
    }
    let err = benchmarks.validate().unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidTierRange {
            tier: Tier::Domination,
            month6: 1_000_000_000,
            ..
        }
    ));
    assert!(err.to_string().contains(&format!("<= {MAX_TIER_LEADS}")), "{err}");
}

#[test]
fn test_rejects_negative_weight() {
    let mut benchmarks = Benchmarks::default();
    if let Some(profile) = benchmarks.industries.get_mut(&Industry::OtherB2b) {
        profile.channel_split.linkedin = -5.0;
    }
    let err = benchmarks.validate().unwrap_err();
    assert!(err.to_string().starts_with("industry other-b2b"), "{err}");
}

#[test]
fn test_tables_survive_json() {
    let json = serde_json::to_string(Benchmarks::builtin()).unwrap();
    let parsed: Benchmarks = serde_json::from_str(&json).unwrap();
    assert_eq!(&parsed, Benchmarks::builtin());
}

#[test]
fn test_multipliers_are_optional_in_input() {
    let mut value = serde_json::to_value(Benchmarks::builtin()).unwrap();
    value
        .as_object_mut()
        .unwrap()
        .remove("industry_multipliers");

    let parsed: Benchmarks = serde_json::from_value(value).unwrap();
    assert!(parsed.industry_multipliers.is_empty());
    assert_eq!(parsed.industry_multiplier(Industry::PropertyManagement), 1.0);
    assert_eq!(parsed.validate(), Ok(()));
}
