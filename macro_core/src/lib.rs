#![forbid(unsafe_code)]

//! Core domain model and calculation pipeline for the Macroplan system.
//!
//! This crate provides:
//! - Domain types (body profile, activity, goals, plans)
//! - Height normalization, BMR and TDEE estimation
//! - Goal policy and macronutrient split
//! - Input validation and plan rendering
//! - Configuration and logging setup

pub mod types;
pub mod error;
pub mod units;
pub mod energy;
pub mod policy;
pub mod split;
pub mod planner;
pub mod validation;
pub mod render;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use energy::{activity_factor, calculate_bmr, calculate_tdee, estimate_energy};
pub use policy::{goal_settings, resolve_goal_settings};
pub use split::{macro_breakdown, split_macros, MacroBreakdown};
pub use planner::{generate_plan, submit, PlanReport, PlanRequest, PlanSummary};
pub use validation::PlanForm;
pub use render::{render, OutputFormat};
