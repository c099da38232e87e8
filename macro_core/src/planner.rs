//! Plan generation: the single entry point of the calculation pipeline.
//!
//! Height normalization -> BMR/TDEE -> goal settings -> macro split.
//! Every call is independent and deterministic; nothing is cached.

use crate::split::round_display;
use crate::{
    estimate_energy, goal_settings, split_macros, ActivityLevel, BodyProfile, EnergyEstimate,
    Goal, GoalSettings, Intensity, MacroPlan,
};
use serde::{Deserialize, Serialize};

/// A validated plan request
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PlanRequest {
    pub profile: BodyProfile,
    pub activity: ActivityLevel,
    pub goal: Goal,
    /// Only meaningful for [`Goal::FatLoss`]
    pub intensity: Option<Intensity>,
}

/// Every intermediate record of one pipeline run
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PlanReport {
    pub energy: EnergyEstimate,
    pub settings: GoalSettings,
    pub plan: MacroPlan,
}

/// The six display fields, rounded to whole numbers
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanSummary {
    pub bmr: i64,
    pub tdee: i64,
    pub target_calories: i64,
    pub protein_g: i64,
    pub fat_g: i64,
    pub carbs_g: i64,
}

impl PlanReport {
    pub fn summary(&self) -> PlanSummary {
        PlanSummary {
            bmr: round_display(self.energy.bmr),
            tdee: round_display(self.energy.tdee),
            target_calories: round_display(self.plan.target_calories),
            protein_g: self.plan.protein_g,
            fat_g: self.plan.fat_g,
            carbs_g: self.plan.carbs_g,
        }
    }
}

/// Run the full pipeline and keep all intermediates
pub fn generate_plan(request: &PlanRequest) -> PlanReport {
    let profile = &request.profile;

    let energy = estimate_energy(profile, request.activity);
    let settings = goal_settings(
        request.goal,
        request.intensity,
        profile.weight_kg,
        energy.tdee,
        profile.gender,
    );

    let final_calories = energy.tdee + settings.calorie_adjustment;
    let plan = split_macros(final_calories, settings.protein_target_g, settings.fat_percent);

    tracing::info!(
        "Generated {} plan: {:.0} kcal ({}P/{}F/{}C)",
        request.goal.label(),
        plan.target_calories,
        plan.protein_g,
        plan.fat_g,
        plan.carbs_g
    );

    PlanReport {
        energy,
        settings,
        plan,
    }
}

/// Compute a macro plan from validated inputs
pub fn submit(
    profile: &BodyProfile,
    activity: ActivityLevel,
    goal: Goal,
    intensity: Option<Intensity>,
) -> MacroPlan {
    let request = PlanRequest {
        profile: profile.clone(),
        activity,
        goal,
        intensity,
    };
    generate_plan(&request).plan
}
