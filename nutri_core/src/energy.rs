//! Total daily energy expenditure and body-mass index.

use crate::rounding::round_to;
use crate::ActivityLevel;

/// BMI below this is classified underweight
pub const BMI_UNDERWEIGHT_BELOW: f64 = 18.5;

/// BMI above this is classified overweight
pub const BMI_OVERWEIGHT_ABOVE: f64 = 25.0;

/// Multiplier applied to BMR for an activity level
pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::Light => 1.375,
        ActivityLevel::Moderate => 1.55,
        ActivityLevel::Active => 1.725,
        ActivityLevel::VeryActive => 1.9,
    }
}

/// Calculate TDEE in kcal/day, rounded to 2 decimals
pub fn calculate_tdee(bmr: f64, level: ActivityLevel) -> f64 {
    round_to(bmr * activity_multiplier(level), 2)
}

/// Calculate BMI from weight in kg and height in cm, rounded to 2 decimals
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    round_to(weight_kg / (height_m * height_m), 2)
}

/// Coarse BMI band used by the advisory note
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
}

impl BmiCategory {
    /// 18.5 and 25 themselves count as normal.
    pub fn classify(bmi: f64) -> Self {
        if bmi < BMI_UNDERWEIGHT_BELOW {
            BmiCategory::Underweight
        } else if bmi > BMI_OVERWEIGHT_ABOVE {
            BmiCategory::Overweight
        } else {
            BmiCategory::Normal
        }
    }
}
