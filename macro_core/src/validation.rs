//! Range validation for raw form input.
//!
//! The pipeline assumes clean inputs; this is where they get checked.

use crate::{ActivityLevel, BodyProfile, Error, Gender, Goal, Intensity, PlanRequest, Result};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const WEIGHT_KG_RANGE: RangeInclusive<f64> = 30.0..=200.0;
pub const HEIGHT_FT_RANGE: RangeInclusive<u32> = 4..=7;
pub const HEIGHT_IN_RANGE: RangeInclusive<u32> = 0..=11;
pub const AGE_RANGE: RangeInclusive<u32> = 15..=80;
pub const ACTIVITY_RANGE: RangeInclusive<u8> = 1..=5;
pub const INTENSITY_RANGE: RangeInclusive<u8> = 1..=3;

/// Unvalidated form values, as typed by the user
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlanForm {
    pub weight_kg: f64,
    pub height_ft: u32,
    pub height_in: u32,
    pub age_years: u32,
    pub gender: String,
    pub activity: u8,
    pub goal: String,
    pub intensity: u8,
}

impl Default for PlanForm {
    fn default() -> Self {
        Self {
            weight_kg: 70.0,
            height_ft: 5,
            height_in: 10,
            age_years: 30,
            gender: "male".into(),
            activity: 1,
            goal: "fat_loss".into(),
            intensity: 1,
        }
    }
}

fn check_range<T>(field: &str, value: T, range: &RangeInclusive<T>) -> Result<T>
where
    T: PartialOrd + std::fmt::Display + Copy,
{
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(Error::Validation(format!(
            "{} must be between {} and {}, got {}",
            field,
            range.start(),
            range.end(),
            value
        )))
    }
}

impl PlanForm {
    /// Check every field and build a [`PlanRequest`]
    ///
    /// Intensity is only checked when the goal is fat loss. Gender is
    /// case-normalized here, before it reaches the strict two-way switch
    /// of [`Gender::from_token`].
    pub fn validate(&self) -> Result<PlanRequest> {
        if !self.weight_kg.is_finite() {
            return Err(Error::Validation(format!(
                "weight_kg must be a number, got {}",
                self.weight_kg
            )));
        }
        let weight_kg = check_range("weight_kg", self.weight_kg, &WEIGHT_KG_RANGE)?;
        let height_ft = check_range("height_ft", self.height_ft, &HEIGHT_FT_RANGE)?;
        let height_in = check_range("height_in", self.height_in, &HEIGHT_IN_RANGE)?;
        let age_years = check_range("age_years", self.age_years, &AGE_RANGE)?;

        let gender = match self.gender.trim().to_lowercase().as_str() {
            token @ ("male" | "female") => Gender::from_token(token),
            other => {
                return Err(Error::Validation(format!(
                    "gender must be male or female, got {:?}",
                    other
                )))
            }
        };

        check_range("activity", self.activity, &ACTIVITY_RANGE)?;
        let activity = ActivityLevel::from_level(self.activity).ok_or_else(|| {
            Error::Validation(format!("unknown activity level {}", self.activity))
        })?;

        let goal = Goal::from_label(&self.goal).ok_or_else(|| {
            Error::Validation(format!(
                "goal must be one of fat_loss, bulk, maintenance, recomp, got {:?}",
                self.goal
            ))
        })?;

        let intensity = if goal == Goal::FatLoss {
            check_range("intensity", self.intensity, &INTENSITY_RANGE)?;
            Intensity::from_level(self.intensity)
        } else {
            None
        };

        tracing::debug!("Validated form input: {:?}", self);

        Ok(PlanRequest {
            profile: BodyProfile::from_imperial(weight_kg, height_ft, height_in, age_years, gender),
            activity,
            goal,
            intensity,
        })
    }
}
