//! Non-interactive subcommands

use clap::{Args, Subcommand};
use leadplan_core::config::{AllocationBuilder, ProjectionBuilder};
use leadplan_core::model::{AllocationGoal, Benchmarks, CloseRate, Industry};

use crate::data::storage::{DataDirectory, benchmarks_yaml};

fn parse_industry(key: &str) -> Result<Industry, String> {
    Industry::from_key(key).ok_or_else(|| {
        let keys: Vec<&str> = Industry::ALL.iter().map(|i| i.key()).collect();
        format!("unknown industry '{key}' (expected one of: {})", keys.join(", "))
    })
}

fn parse_goal(key: &str) -> Result<AllocationGoal, String> {
    AllocationGoal::from_key(key).ok_or_else(|| {
        let keys: Vec<&str> = AllocationGoal::ALL.iter().map(|g| g.key()).collect();
        format!("unknown goal '{key}' (expected one of: {})", keys.join(", "))
    })
}

fn parse_close_rate(value: &str) -> Result<CloseRate, String> {
    let options = || {
        let percents: Vec<String> = CloseRate::ALL
            .iter()
            .map(|r| r.percent().to_string())
            .collect();
        percents.join(", ")
    };
    value
        .trim_end_matches('%')
        .parse::<f64>()
        .ok()
        .and_then(CloseRate::from_percent)
        .ok_or_else(|| format!("unsupported close rate '{value}' (expected one of: {})", options()))
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Split a monthly budget across channels and print the plan as JSON
    Allocate(AllocateArgs),
    /// Project 12 months of leads and revenue and print the report as JSON
    Project(ProjectArgs),
    /// Print the active benchmark tables as YAML
    Benchmarks {
        /// Write the built-in tables to the data directory instead
        #[arg(long)]
        write: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct AllocateArgs {
    #[arg(long, value_parser = parse_industry)]
    pub industry: Industry,
    #[arg(long, value_parser = parse_goal, default_value = "balanced")]
    pub goal: AllocationGoal,
    /// Monthly marketing budget in dollars
    #[arg(long)]
    pub budget: f64,
    /// Average value of a new customer in dollars
    #[arg(long)]
    pub customer_value: f64,
}

#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    #[arg(long, value_parser = parse_industry)]
    pub industry: Industry,
    /// Close rate in percent: 10, 20, 30 or 40
    #[arg(long, value_parser = parse_close_rate)]
    pub close_rate: CloseRate,
    #[arg(long)]
    pub client_value: f64,
    #[arg(long)]
    pub proposed_budget: f64,
    #[arg(long, default_value_t = 0.0)]
    pub current_budget: f64,
    #[arg(long, default_value_t = 0)]
    pub current_leads: u32,
}

pub fn allocate_json(args: &AllocateArgs, benchmarks: &Benchmarks) -> color_eyre::Result<String> {
    let plan = AllocationBuilder::new()
        .industry(args.industry)
        .goal(args.goal)
        .monthly_budget(args.budget)
        .customer_value(args.customer_value)
        .allocate(benchmarks)?;
    Ok(serde_json::to_string_pretty(&plan)?)
}

pub fn project_json(args: &ProjectArgs, benchmarks: &Benchmarks) -> color_eyre::Result<String> {
    let report = ProjectionBuilder::new()
        .industry(args.industry)
        .close_rate(args.close_rate)
        .client_value(args.client_value)
        .proposed_budget(args.proposed_budget)
        .current(args.current_budget, args.current_leads)
        .report(benchmarks)?;
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Run a subcommand and return what it prints
pub fn execute(command: &Command, storage: &DataDirectory) -> color_eyre::Result<String> {
    match command {
        Command::Benchmarks { write: true } => {
            let path = storage.save_benchmarks(Benchmarks::builtin())?;
            Ok(format!("Wrote {}", path.display()))
        }
        Command::Benchmarks { write: false } => {
            let loaded = storage.active_benchmarks();
            if let Some(warning) = &loaded.warning {
                tracing::warn!("{warning}");
            }
            Ok(benchmarks_yaml(&loaded.benchmarks)?)
        }
        Command::Allocate(args) => allocate_json(args, &storage.active_benchmarks().benchmarks),
        Command::Project(args) => project_json(args, &storage.active_benchmarks().benchmarks),
    }
}
