//! Energy expenditure estimation.
//!
//! BMR uses the Mifflin-St Jeor equation; TDEE scales it by an
//! activity multiplier.

use crate::{ActivityLevel, BodyProfile, EnergyEstimate, Gender};

/// Multiplier used for sedentary users and for any unknown activity level
pub const SEDENTARY_FACTOR: f64 = 1.2;

/// Calculate basal metabolic rate in kcal/day
///
/// male:   10w + 6.25h - 5a + 5
/// female: 10w + 6.25h - 5a - 161
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age_years: u32, gender: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age_years);
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

impl ActivityLevel {
    /// TDEE multiplier for this level
    pub fn factor(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => SEDENTARY_FACTOR,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }
}

/// Look up the activity multiplier for a raw level number
///
/// Levels outside 1..=5 fall back to the sedentary factor.
pub fn activity_factor(level: i64) -> f64 {
    match u8::try_from(level).ok().and_then(ActivityLevel::from_level) {
        Some(activity) => activity.factor(),
        None => {
            tracing::debug!("Unknown activity level {}, using sedentary factor", level);
            SEDENTARY_FACTOR
        }
    }
}

/// Scale BMR by the activity multiplier
pub fn calculate_tdee(bmr: f64, activity: ActivityLevel) -> f64 {
    bmr * activity.factor()
}

/// Compute BMR and TDEE for a profile
pub fn estimate_energy(profile: &BodyProfile, activity: ActivityLevel) -> EnergyEstimate {
    let bmr = calculate_bmr(
        profile.weight_kg,
        profile.height_cm,
        profile.age_years,
        profile.gender,
    );
    let tdee = calculate_tdee(bmr, activity);

    tracing::debug!(
        "Energy estimate: bmr={:.2} tdee={:.2} (activity {})",
        bmr,
        tdee,
        activity.label()
    );

    EnergyEstimate { bmr, tdee }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmr_male_reference() {
        let bmr = calculate_bmr(70.0, 177.8, 30, Gender::Male);
        assert!((bmr - 1666.25).abs() < 1e-9);
    }

    #[test]
    fn test_bmr_female_reference() {
        let bmr = calculate_bmr(70.0, 177.8, 30, Gender::Female);
        assert!((bmr - 1500.25).abs() < 1e-9);
    }

    #[test]
    fn test_bmr_gender_offset_is_constant() {
        for weight in [30.0, 55.5, 70.0, 123.4, 200.0] {
            for height in [121.92, 160.0, 177.8, 241.3] {
                for age in [15, 30, 47, 80] {
                    let male = calculate_bmr(weight, height, age, Gender::Male);
                    let female = calculate_bmr(weight, height, age, Gender::Female);
                    assert!((male - female - 166.0).abs() < 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_activity_factor_table() {
        assert_eq!(activity_factor(1), 1.2);
        assert_eq!(activity_factor(2), 1.375);
        assert_eq!(activity_factor(3), 1.55);
        assert_eq!(activity_factor(4), 1.725);
        assert_eq!(activity_factor(5), 1.9);
    }

    #[test]
    fn test_activity_factor_defaults_to_sedentary() {
        assert_eq!(activity_factor(0), SEDENTARY_FACTOR);
        assert_eq!(activity_factor(6), SEDENTARY_FACTOR);
        assert_eq!(activity_factor(-3), SEDENTARY_FACTOR);
        assert_eq!(activity_factor(1000), SEDENTARY_FACTOR);
        assert_eq!(activity_factor(6), activity_factor(0));
    }

    #[test]
    fn test_factor_matches_raw_lookup() {
        for level in ActivityLevel::ALL {
            assert_eq!(level.factor(), activity_factor(i64::from(level.level())));
        }
    }

    #[test]
    fn test_estimate_energy_is_unrounded() {
        crate::logging::init_test();

        let profile = BodyProfile::from_imperial(70.0, 5, 10, 30, Gender::Male);
        let estimate = estimate_energy(&profile, ActivityLevel::ModeratelyActive);

        assert!((estimate.bmr - 1666.25).abs() < 1e-9);
        assert!((estimate.tdee - 2582.6875).abs() < 1e-9);
    }
}
