//! Core domain types for the Macroplan system.
//!
//! This module defines the value records that flow through the pipeline:
//! - Body profile and its categorical inputs (gender, activity, goal, intensity)
//! - Energy estimate (BMR and TDEE)
//! - Goal settings and the final macro plan
//!
//! Every record is built once and never mutated; each pipeline stage
//! produces a new one.

use serde::{Deserialize, Serialize};

// ============================================================================
// Categorical Inputs
// ============================================================================

/// Biological sex as used by the Mifflin-St Jeor equation
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Map a raw token onto the two-way formula switch.
    ///
    /// Only the exact token `"male"` selects the male formula; anything
    /// else takes the female one.
    pub fn from_token(token: &str) -> Self {
        if token == "male" {
            Gender::Male
        } else {
            Gender::Female
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

/// Daily activity level, 1 (sedentary) through 5 (extra active)
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtraActive,
}

impl ActivityLevel {
    /// All levels in ascending order
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtraActive,
    ];

    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(ActivityLevel::Sedentary),
            2 => Some(ActivityLevel::LightlyActive),
            3 => Some(ActivityLevel::ModeratelyActive),
            4 => Some(ActivityLevel::VeryActive),
            5 => Some(ActivityLevel::ExtraActive),
            _ => None,
        }
    }

    pub fn level(&self) -> u8 {
        match self {
            ActivityLevel::Sedentary => 1,
            ActivityLevel::LightlyActive => 2,
            ActivityLevel::ModeratelyActive => 3,
            ActivityLevel::VeryActive => 4,
            ActivityLevel::ExtraActive => 5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::LightlyActive => "Lightly Active",
            ActivityLevel::ModeratelyActive => "Moderately Active",
            ActivityLevel::VeryActive => "Very Active",
            ActivityLevel::ExtraActive => "Extra Active",
        }
    }
}

/// Body composition goal
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    FatLoss,
    Bulk,
    Maintenance,
    Recomp,
}

impl Goal {
    pub const ALL: [Goal; 4] = [Goal::FatLoss, Goal::Bulk, Goal::Maintenance, Goal::Recomp];

    /// Parse a goal label, ignoring case, spaces, underscores and hyphens.
    ///
    /// `"Fat Loss"`, `"fat_loss"` and `"fatloss"` all parse to [`Goal::FatLoss`].
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized: String = label
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "fatloss" => Some(Goal::FatLoss),
            "bulk" => Some(Goal::Bulk),
            "maintenance" => Some(Goal::Maintenance),
            "recomp" => Some(Goal::Recomp),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Goal::FatLoss => "Fat Loss",
            Goal::Bulk => "Bulk",
            Goal::Maintenance => "Maintenance",
            Goal::Recomp => "Recomp",
        }
    }
}

/// Fat-loss aggressiveness tier
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    Mild,
    Moderate,
    Aggressive,
}

impl Intensity {
    pub const ALL: [Intensity; 3] = [Intensity::Mild, Intensity::Moderate, Intensity::Aggressive];

    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Intensity::Mild),
            2 => Some(Intensity::Moderate),
            3 => Some(Intensity::Aggressive),
            _ => None,
        }
    }

    pub fn level(&self) -> u8 {
        match self {
            Intensity::Mild => 1,
            Intensity::Moderate => 2,
            Intensity::Aggressive => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Intensity::Mild => "Mild",
            Intensity::Moderate => "Moderate",
            Intensity::Aggressive => "Aggressive",
        }
    }
}

// ============================================================================
// Pipeline Records
// ============================================================================

/// Body measurements in metric units
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BodyProfile {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: u32,
    pub gender: Gender,
}

impl BodyProfile {
    /// Build a profile from a height given in feet and inches
    pub fn from_imperial(
        weight_kg: f64,
        height_ft: u32,
        height_in: u32,
        age_years: u32,
        gender: Gender,
    ) -> Self {
        Self {
            weight_kg,
            height_cm: crate::units::height_cm(height_ft, height_in),
            age_years,
            gender,
        }
    }
}

/// Resting and total daily energy expenditure, kcal/day (unrounded)
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct EnergyEstimate {
    pub bmr: f64,
    pub tdee: f64,
}

/// Goal-derived targets applied on top of TDEE
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct GoalSettings {
    /// Signed kcal added to TDEE
    pub calorie_adjustment: f64,
    pub protein_target_g: f64,
    /// Share of target calories from fat, in percent
    pub fat_percent: f64,
}

/// Final daily plan
///
/// Grams are rounded; `carbs_g` may be negative when protein and fat
/// already exceed the calorie target.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct MacroPlan {
    pub protein_g: i64,
    pub fat_g: i64,
    pub carbs_g: i64,
    pub target_calories: f64,
}
