//! Terminal front end for the lead generation budget calculators
//!
//! Three tabs: the budget allocator, the ROI projector wizard and the
//! contact form. The same calculators are also reachable through
//! non-interactive subcommands (see [`cli`]).

pub mod app;
pub mod cli;
pub mod components;
pub mod data;
pub mod logging;
pub mod screens;
pub mod state;
pub mod util;

pub use app::App;
pub use logging::init_logging;
