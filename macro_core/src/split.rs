//! Macronutrient split of a calorie target.
//!
//! Protein is fixed in grams, fat is a share of calories, and carbohydrate
//! takes whatever is left. Nothing is clamped: a protein or fat target that
//! exceeds the calorie budget yields negative carbohydrate grams.

use crate::MacroPlan;
use serde::{Deserialize, Serialize};

pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;
pub const KCAL_PER_G_CARB: f64 = 4.0;

/// Unrounded gram split
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct MacroBreakdown {
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
}

/// Round to the nearest integer, ties to even
pub fn round_display(value: f64) -> i64 {
    value.round_ties_even() as i64
}

/// Split `final_calories` into unrounded grams
pub fn macro_breakdown(final_calories: f64, protein_target_g: f64, fat_percent: f64) -> MacroBreakdown {
    let protein_calories = protein_target_g * KCAL_PER_G_PROTEIN;
    let fat_calories = final_calories * (fat_percent / 100.0);
    let carb_calories = final_calories - (protein_calories + fat_calories);

    MacroBreakdown {
        protein_g: protein_target_g,
        fat_g: fat_calories / KCAL_PER_G_FAT,
        carbs_g: carb_calories / KCAL_PER_G_CARB,
    }
}

/// Split `final_calories` into a plan with each gram value rounded independently
pub fn split_macros(final_calories: f64, protein_target_g: f64, fat_percent: f64) -> MacroPlan {
    let raw = macro_breakdown(final_calories, protein_target_g, fat_percent);

    if raw.carbs_g < 0.0 {
        tracing::warn!(
            "Protein and fat exceed {:.0} kcal target; carbohydrate is {:.1} g",
            final_calories,
            raw.carbs_g
        );
    }

    let plan = MacroPlan {
        protein_g: round_display(raw.protein_g),
        fat_g: round_display(raw.fat_g),
        carbs_g: round_display(raw.carbs_g),
        target_calories: final_calories,
    };

    tracing::debug!(
        "Macro split: protein={}g fat={}g carbs={}g",
        plan.protein_g,
        plan.fat_g,
        plan.carbs_g
    );

    plan
}

impl MacroPlan {
    /// Calories implied by the rounded grams
    pub fn reconstructed_calories(&self) -> f64 {
        self.protein_g as f64 * KCAL_PER_G_PROTEIN
            + self.fat_g as f64 * KCAL_PER_G_FAT
            + self.carbs_g as f64 * KCAL_PER_G_CARB
    }
}
