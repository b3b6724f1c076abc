//! Recommendation rule tests

use crate::allocation::allocate;
use crate::model::{
    AllocationGoal, AllocationInputs, Benchmarks, Industry, RecommendationCategory,
};
use crate::recommendations::{RULES, RecommendationContext, recommend};

fn titles(ctx: &RecommendationContext) -> Vec<String> {
    recommend(ctx).into_iter().map(|r| r.title).collect()
}

fn ctx(roi_percent: i64, monthly_budget: f64, expected_clients: u32) -> RecommendationContext {
    RecommendationContext {
        industry: Industry::Healthcare,
        monthly_budget,
        roi_percent,
        expected_clients,
    }
}

#[test]
fn test_rule_order_is_fixed() {
    let names: Vec<&str> = RULES.iter().map(|r| r.name).collect();
    assert_eq!(
        names,
        vec![
            "roi",
            "budget_size",
            "client_volume",
            "industry_strategy",
            "timeline"
        ]
    );
}

#[test]
fn test_healthcare_scenario_recommendations() {
    let plan = allocate(
        &AllocationInputs::new(
            Industry::Healthcare,
            AllocationGoal::Balanced,
            3_000.0,
            1_500.0,
        )
        .unwrap(),
        Benchmarks::builtin(),
    )
    .unwrap();

    let titles: Vec<&str> = plan
        .recommendations
        .iter()
        .map(|r| r.title.as_str())
        .collect();
    assert_eq!(
        titles,
        vec!["Low Expected ROI", "Healthcare Strategy", "Realistic Timeline"]
    );
    assert_eq!(
        plan.recommendations[0].category,
        RecommendationCategory::Warning
    );
}

#[test]
fn test_every_rule_fires_in_order() {
    let recs = recommend(&RecommendationContext {
        industry: Industry::Recruitment,
        monthly_budget: 6_000.0,
        roi_percent: 1_233,
        expected_clients: 8,
    });

    let titles: Vec<&str> = recs.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Excellent ROI Potential",
            "Opportunity to Scale",
            "Strong Lead Pipeline",
            "Recruitment Strategy",
            "Realistic Timeline",
        ]
    );
    assert!(recs[0].body.contains("1233% ROI"));
    assert!(recs[2].body.contains("expect 8 new clients"));
    assert_eq!(recs[1].category, RecommendationCategory::Info);
    assert_eq!(recs[2].category, RecommendationCategory::Success);
}

#[test]
fn test_roi_thresholds() {
    assert_eq!(titles(&ctx(199, 3_000.0, 3))[0], "Low Expected ROI");
    assert_eq!(titles(&ctx(200, 3_000.0, 3))[0], "Healthy ROI");
    assert_eq!(titles(&ctx(500, 3_000.0, 3))[0], "Healthy ROI");
    assert_eq!(titles(&ctx(501, 3_000.0, 3))[0], "Excellent ROI Potential");
}

#[test]
fn test_budget_thresholds() {
    assert!(titles(&ctx(300, 1_499.0, 3)).contains(&"Limited Budget".to_string()));

    let mid = titles(&ctx(300, 1_500.0, 3));
    assert!(!mid.contains(&"Limited Budget".to_string()));
    assert!(!mid.contains(&"Opportunity to Scale".to_string()));

    assert!(!titles(&ctx(300, 5_000.0, 3)).contains(&"Opportunity to Scale".to_string()));
    assert!(titles(&ctx(300, 5_001.0, 3)).contains(&"Opportunity to Scale".to_string()));
}

#[test]
fn test_client_volume_thresholds() {
    assert!(titles(&ctx(300, 3_000.0, 1)).contains(&"Low Client Volume".to_string()));
    assert_eq!(titles(&ctx(300, 3_000.0, 2)).len(), 3);
    assert_eq!(titles(&ctx(300, 3_000.0, 4)).len(), 3);
    assert!(titles(&ctx(300, 3_000.0, 5)).contains(&"Strong Lead Pipeline".to_string()));
}

#[test]
fn test_projector_only_industry_has_no_strategy_tip() {
    let recs = recommend(&RecommendationContext {
        industry: Industry::Logistics,
        monthly_budget: 3_000.0,
        roi_percent: 300,
        expected_clients: 3,
    });
    let titles: Vec<&str> = recs.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Healthy ROI", "Realistic Timeline"]);
}

#[test]
fn test_same_inputs_same_output() {
    let c = ctx(250, 7_000.0, 6);
    assert_eq!(recommend(&c), recommend(&c));
}
