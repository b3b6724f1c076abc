//! Static industry benchmark tables
//!
//! The tables are immutable configuration. `Benchmarks::builtin()` builds them
//! once per process; a front end may instead deserialize a replacement set
//! at startup, run [`Benchmarks::validate`] on it, and then share it by
//! reference for the rest of the process.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use super::ids::{AllocationGoal, Channel, Industry, Tier};
use crate::error::{ConfigError, LookupError};

/// One weight or multiplier per marketing channel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ChannelWeights {
    pub seo: f64,
    pub paid_ads: f64,
    pub content: f64,
    pub linkedin: f64,
    pub other: f64,
}

impl ChannelWeights {
    pub const fn new(seo: f64, paid_ads: f64, content: f64, linkedin: f64, other: f64) -> Self {
        Self {
            seo,
            paid_ads,
            content,
            linkedin,
            other,
        }
    }

    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value, value)
    }

    pub fn get(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Seo => self.seo,
            Channel::PaidAds => self.paid_ads,
            Channel::Content => self.content,
            Channel::Linkedin => self.linkedin,
            Channel::Other => self.other,
        }
    }

    /// Iterate weights in channel display order
    pub fn iter(&self) -> impl Iterator<Item = (Channel, f64)> + '_ {
        Channel::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    pub fn sum(&self) -> f64 {
        self.iter().map(|(_, w)| w).sum()
    }
}

/// Benchmark figures for one industry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryProfile {
    pub name: String,
    pub average_cost_per_lead: f64,
    /// Fraction of leads that become clients, in [0, 1]
    pub conversion_rate: f64,
    /// Recommended split in percent, summing to 100
    pub channel_split: ChannelWeights,
}

/// Largest projector multiplier a benchmarks table may carry
pub const MAX_INDUSTRY_MULTIPLIER: f64 = 10.0;

/// Largest monthly lead count a tier range may carry
pub const MAX_TIER_LEADS: u32 = 100_000;

/// Expected monthly lead volume for a budget tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierLeadRange {
    pub min: u32,
    pub max: u32,
    /// Steady-state leads once campaigns mature
    pub month6: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Benchmarks {
    pub industries: BTreeMap<Industry, IndustryProfile>,
    pub goals: BTreeMap<AllocationGoal, ChannelWeights>,
    pub tiers: BTreeMap<Tier, TierLeadRange>,
    /// Projector conversion multipliers; industries not listed use 1.0
    #[serde(default)]
    pub industry_multipliers: BTreeMap<Industry, f64>,
}

static BUILTIN: LazyLock<Benchmarks> = LazyLock::new(Benchmarks::default_tables);

impl Default for Benchmarks {
    fn default() -> Self {
        Self::default_tables()
    }
}

impl Benchmarks {
    /// Shared built-in tables
    pub fn builtin() -> &'static Benchmarks {
        &BUILTIN
    }

    fn default_tables() -> Self {
        let profile = |name: &str, cpl: f64, conversion: f64, split: ChannelWeights| {
            IndustryProfile {
                name: name.to_string(),
                average_cost_per_lead: cpl,
                conversion_rate: conversion,
                channel_split: split,
            }
        };

        let industries = BTreeMap::from([
            (
                Industry::PropertyManagement,
                profile(
                    "Property Management",
                    120.0,
                    0.20,
                    ChannelWeights::new(35.0, 25.0, 25.0, 10.0, 5.0),
                ),
            ),
            (
                Industry::Recruitment,
                profile(
                    "Recruitment & HR",
                    180.0,
                    0.25,
                    ChannelWeights::new(30.0, 30.0, 20.0, 15.0, 5.0),
                ),
            ),
            (
                Industry::Healthcare,
                profile(
                    "Healthcare",
                    150.0,
                    0.22,
                    ChannelWeights::new(40.0, 25.0, 25.0, 5.0, 5.0),
                ),
            ),
            (
                Industry::ProfessionalServices,
                profile(
                    "Professional Services",
                    200.0,
                    0.18,
                    ChannelWeights::new(35.0, 25.0, 25.0, 10.0, 5.0),
                ),
            ),
            (
                Industry::OtherB2b,
                profile(
                    "Other B2B",
                    160.0,
                    0.20,
                    ChannelWeights::new(35.0, 30.0, 20.0, 10.0, 5.0),
                ),
            ),
        ]);

        let goals = BTreeMap::from([
            (
                AllocationGoal::BrandAwareness,
                ChannelWeights::new(1.3, 0.7, 1.3, 1.0, 1.0),
            ),
            (AllocationGoal::Balanced, ChannelWeights::uniform(1.0)),
            (
                AllocationGoal::LeadGeneration,
                ChannelWeights::new(0.8, 1.4, 0.8, 1.2, 0.8),
            ),
        ]);

        let tiers = BTreeMap::from([
            (
                Tier::Foundation,
                TierLeadRange {
                    min: 8,
                    max: 15,
                    month6: 12,
                },
            ),
            (
                Tier::Growth,
                TierLeadRange {
                    min: 15,
                    max: 30,
                    month6: 22,
                },
            ),
            (
                Tier::Domination,
                TierLeadRange {
                    min: 30,
                    max: 50,
                    month6: 40,
                },
            ),
        ]);

        let industry_multipliers = BTreeMap::from([
            (Industry::PropertyManagement, 0.9),
            (Industry::Recruitment, 1.0),
            (Industry::ProfessionalServices, 0.95),
            (Industry::ItServices, 1.05),
            (Industry::CorporateTraining, 1.0),
            (Industry::Logistics, 0.95),
            (Industry::OtherB2b, 1.0),
        ]);

        Self {
            industries,
            goals,
            tiers,
            industry_multipliers,
        }
    }

    pub fn profile(&self, industry: Industry) -> Result<&IndustryProfile, LookupError> {
        self.industries
            .get(&industry)
            .ok_or(LookupError::IndustryProfileNotFound(industry))
    }

    pub fn goal_modifiers(&self, goal: AllocationGoal) -> Result<&ChannelWeights, LookupError> {
        self.goals.get(&goal).ok_or(LookupError::GoalNotFound(goal))
    }

    pub fn tier_range(&self, tier: Tier) -> Result<&TierLeadRange, LookupError> {
        self.tiers.get(&tier).ok_or(LookupError::TierNotFound(tier))
    }

    /// Conversion multiplier for the projector, 1.0 when the industry is not listed
    pub fn industry_multiplier(&self, industry: Industry) -> f64 {
        self.industry_multipliers
            .get(&industry)
            .copied()
            .unwrap_or(1.0)
    }

    /// Industries that have an allocator profile
    pub fn allocator_industries(&self) -> impl Iterator<Item = Industry> + '_ {
        self.industries.keys().copied()
    }

    /// Check every table for values the calculators cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for goal in AllocationGoal::ALL {
            if !self.goals.contains_key(&goal) {
                return Err(ConfigError::MissingGoal(goal));
            }
        }
        for tier in Tier::ALL {
            if !self.tiers.contains_key(&tier) {
                return Err(ConfigError::MissingTier(tier));
            }
        }

        for (goal, modifiers) in &self.goals {
            check_weights(&format!("goal {}", goal.key()), modifiers)?;
        }

        for (industry, profile) in &self.industries {
            let cpl = profile.average_cost_per_lead;
            if !cpl.is_finite() || cpl <= 0.0 {
                return Err(ConfigError::InvalidCostPerLead {
                    industry: *industry,
                    value: cpl,
                });
            }
            let rate = profile.conversion_rate;
            if !(0.0..=1.0).contains(&rate) {
                return Err(ConfigError::InvalidConversionRate {
                    industry: *industry,
                    value: rate,
                });
            }
            check_weights(&format!("industry {}", industry.key()), &profile.channel_split)?;

            for (goal, modifiers) in &self.goals {
                let modified: f64 = profile
                    .channel_split
                    .iter()
                    .map(|(channel, weight)| weight * modifiers.get(channel))
                    .sum();
                if modified <= 0.0 {
                    return Err(ConfigError::ZeroWeightSum {
                        industry: *industry,
                        goal: *goal,
                    });
                }
            }
        }

        for (tier, range) in &self.tiers {
            if range.min == 0
                || range.min > range.month6
                || range.month6 > range.max
                || range.max > MAX_TIER_LEADS
            {
                return Err(ConfigError::InvalidTierRange {
                    tier: *tier,
                    min: range.min,
                    month6: range.month6,
                    max: range.max,
                });
            }
        }

        for (industry, multiplier) in &self.industry_multipliers {
            if !(0.0..=MAX_INDUSTRY_MULTIPLIER).contains(multiplier) {
                return Err(ConfigError::InvalidMultiplier {
                    industry: *industry,
                    value: *multiplier,
                });
            }
        }

        Ok(())
    }
}

fn check_weights(table: &str, weights: &ChannelWeights) -> Result<(), ConfigError> {
    for (channel, value) in weights.iter() {
        if !value.is_finite() || value < 0.0 {
            return Err(ConfigError::InvalidChannelWeight {
                table: table.to_string(),
                channel,
                value,
            });
        }
    }
    Ok(())
}
