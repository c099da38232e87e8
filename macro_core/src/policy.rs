//! Goal policy: turns a goal into calorie and macro targets.
//!
//! | Goal        | calorie adjustment | protein target        | fat % |
//! |-------------|--------------------|-----------------------|-------|
//! | Fat Loss    | -tdee * deficit    | base + (level-1) * 10 | 25/22/20 |
//! | Bulk        | +tdee * 0.15       | base                  | 27    |
//! | Maintenance | 0                  | base                  | 25    |
//! | Recomp      | 0                  | base + 15             | 25    |
//!
//! Fat-loss deficit grows with intensity while the fat share shrinks.

use crate::{Gender, Goal, GoalSettings, Intensity};

/// Protein per kg bodyweight for male profiles
pub const MALE_PROTEIN_PER_KG: f64 = 2.2;

/// Protein per kg bodyweight for female profiles
pub const FEMALE_PROTEIN_PER_KG: f64 = 2.0;

/// Calorie surplus fraction when bulking
pub const BULK_SURPLUS: f64 = 0.15;

/// Extra protein (g) on a recomposition
pub const RECOMP_PROTEIN_BONUS_G: f64 = 15.0;

/// Extra protein (g) per fat-loss intensity step above mild
pub const FAT_LOSS_PROTEIN_STEP_G: f64 = 10.0;

/// Baseline daily protein target in grams
pub fn protein_base(weight_kg: f64, gender: Gender) -> f64 {
    let per_kg = match gender {
        Gender::Male => MALE_PROTEIN_PER_KG,
        Gender::Female => FEMALE_PROTEIN_PER_KG,
    };
    weight_kg * per_kg
}

impl Intensity {
    /// Fraction of TDEE removed from the calorie target
    pub fn deficit(&self) -> f64 {
        match self {
            Intensity::Mild => 0.15,
            Intensity::Moderate => 0.22,
            Intensity::Aggressive => 0.28,
        }
    }

    /// Share of calories from fat, in percent
    pub fn fat_percent(&self) -> f64 {
        match self {
            Intensity::Mild => 25.0,
            Intensity::Moderate => 22.0,
            Intensity::Aggressive => 20.0,
        }
    }
}

/// Maintenance-like settings used for any goal that isn't recognized
pub fn fallback_settings(protein_base_g: f64) -> GoalSettings {
    GoalSettings {
        calorie_adjustment: 0.0,
        protein_target_g: protein_base_g,
        fat_percent: 25.0,
    }
}

/// Compute goal settings
///
/// `intensity` only matters for [`Goal::FatLoss`]; when absent there it
/// defaults to [`Intensity::Mild`]. Other goals ignore it.
pub fn goal_settings(
    goal: Goal,
    intensity: Option<Intensity>,
    weight_kg: f64,
    tdee: f64,
    gender: Gender,
) -> GoalSettings {
    let base = protein_base(weight_kg, gender);

    let settings = match goal {
        Goal::FatLoss => {
            let intensity = intensity.unwrap_or(Intensity::Mild);
            let steps = f64::from(intensity.level() - 1);
            GoalSettings {
                calorie_adjustment: -tdee * intensity.deficit(),
                protein_target_g: base + steps * FAT_LOSS_PROTEIN_STEP_G,
                fat_percent: intensity.fat_percent(),
            }
        }
        Goal::Bulk => GoalSettings {
            calorie_adjustment: tdee * BULK_SURPLUS,
            protein_target_g: base,
            fat_percent: 27.0,
        },
        Goal::Maintenance => GoalSettings {
            calorie_adjustment: 0.0,
            protein_target_g: base,
            fat_percent: 25.0,
        },
        Goal::Recomp => GoalSettings {
            calorie_adjustment: 0.0,
            protein_target_g: base + RECOMP_PROTEIN_BONUS_G,
            fat_percent: 25.0,
        },
    };

    tracing::debug!(
        "Goal settings for {}: adjustment={:.2} protein={:.2}g fat={}%",
        goal.label(),
        settings.calorie_adjustment,
        settings.protein_target_g,
        settings.fat_percent
    );

    settings
}

/// Compute goal settings from an unparsed goal label
///
/// Unrecognized labels take [`fallback_settings`] instead of failing.
pub fn resolve_goal_settings(
    label: &str,
    intensity: Option<Intensity>,
    weight_kg: f64,
    tdee: f64,
    gender: Gender,
) -> GoalSettings {
    match Goal::from_label(label) {
        Some(goal) => goal_settings(goal, intensity, weight_kg, tdee, gender),
        None => {
            tracing::warn!("Unrecognized goal {:?}, using maintenance defaults", label);
            fallback_settings(protein_base(weight_kg, gender))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TDEE: f64 = 2582.6875;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_protein_base() {
        assert!(approx(protein_base(70.0, Gender::Male), 154.0));
        assert!(approx(protein_base(70.0, Gender::Female), 140.0));
    }

    #[test]
    fn test_maintenance_ignores_intensity() {
        let intensities = [
            None,
            Some(Intensity::Mild),
            Some(Intensity::Moderate),
            Some(Intensity::Aggressive),
        ];
        for intensity in intensities {
            let s = goal_settings(Goal::Maintenance, intensity, 70.0, TDEE, Gender::Male);
            assert_eq!(s.calorie_adjustment, 0.0);
            assert_eq!(s.fat_percent, 25.0);
            assert!(approx(s.protein_target_g, 154.0));
        }
    }

    #[test]
    fn test_fat_loss_aggressive() {
        let s = goal_settings(
            Goal::FatLoss,
            Some(Intensity::Aggressive),
            70.0,
            TDEE,
            Gender::Male,
        );
        assert!(approx(s.calorie_adjustment, -0.28 * TDEE));
        assert_eq!(s.fat_percent, 20.0);
        assert!(approx(s.protein_target_g, 154.0 + 20.0));
    }

    #[test]
    fn test_fat_loss_tiers() {
        let mild = goal_settings(Goal::FatLoss, Some(Intensity::Mild), 70.0, TDEE, Gender::Female);
        assert!(approx(mild.calorie_adjustment, -0.15 * TDEE));
        assert!(approx(mild.protein_target_g, 140.0));
        assert_eq!(mild.fat_percent, 25.0);

        let moderate = goal_settings(
            Goal::FatLoss,
            Some(Intensity::Moderate),
            70.0,
            TDEE,
            Gender::Female,
        );
        assert!(approx(moderate.calorie_adjustment, -0.22 * TDEE));
        assert!(approx(moderate.protein_target_g, 150.0));
        assert_eq!(moderate.fat_percent, 22.0);
    }

    #[test]
    fn test_fat_percent_falls_as_intensity_rises() {
        let pcts: Vec<f64> = Intensity::ALL.iter().map(|i| i.fat_percent()).collect();
        let deficits: Vec<f64> = Intensity::ALL.iter().map(|i| i.deficit()).collect();
        assert!(pcts.windows(2).all(|w| w[0] > w[1]));
        assert!(deficits.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_fat_loss_without_intensity_is_mild() {
        let none = goal_settings(Goal::FatLoss, None, 80.0, TDEE, Gender::Male);
        let mild = goal_settings(Goal::FatLoss, Some(Intensity::Mild), 80.0, TDEE, Gender::Male);
        assert_eq!(none, mild);
    }

    #[test]
    fn test_bulk_and_recomp() {
        let bulk = goal_settings(Goal::Bulk, Some(Intensity::Aggressive), 70.0, TDEE, Gender::Male);
        assert!(approx(bulk.calorie_adjustment, 0.15 * TDEE));
        assert!(approx(bulk.protein_target_g, 154.0));
        assert_eq!(bulk.fat_percent, 27.0);

        let recomp = goal_settings(Goal::Recomp, None, 70.0, TDEE, Gender::Male);
        assert_eq!(recomp.calorie_adjustment, 0.0);
        assert!(approx(recomp.protein_target_g, 169.0));
        assert_eq!(recomp.fat_percent, 25.0);
    }

    #[test]
    fn test_unrecognized_goal_uses_fallback() {
        crate::logging::init_test();

        let s = resolve_goal_settings("keto", Some(Intensity::Aggressive), 70.0, TDEE, Gender::Male);
        assert_eq!(s, fallback_settings(protein_base(70.0, Gender::Male)));
        assert_eq!(s.calorie_adjustment, 0.0);
        assert_eq!(s.fat_percent, 25.0);
    }

    #[test]
    fn test_resolve_known_label() {
        let s = resolve_goal_settings("Fat Loss", Some(Intensity::Moderate), 70.0, TDEE, Gender::Male);
        assert_eq!(
            s,
            goal_settings(Goal::FatLoss, Some(Intensity::Moderate), 70.0, TDEE, Gender::Male)
        );
    }
}
