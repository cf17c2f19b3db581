//! Calorie target and macronutrient split.
//!
//! The target is TDEE shifted by the goal offset, floored at BMR and then
//! capped at the configured ceiling. The split is fixed per goal and
//! high-activity flag.

use crate::config::TargetsConfig;
use crate::rounding::round_to;
use crate::{ActivityLevel, Goal, MacroBreakdown};

/// kcal per gram of protein
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
/// kcal per gram of fat
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
/// kcal per gram of carbohydrate
pub const KCAL_PER_GRAM_CARB: f64 = 4.0;

/// Allowed drift of a split's sum from 1.0 before it is renormalized
const SPLIT_SUM_TOLERANCE: f64 = 0.01;

/// Fractions of total calories per macronutrient
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MacroSplit {
    pub protein: f64,
    pub fat: f64,
    pub carb: f64,
}

impl MacroSplit {
    pub fn new(protein: f64, fat: f64, carb: f64) -> Self {
        Self { protein, fat, carb }
    }

    pub fn sum(&self) -> f64 {
        self.protein + self.fat + self.carb
    }

    /// Rescale so the fractions sum to 1.0 when they drift past tolerance.
    pub fn normalized(self) -> Self {
        let sum = self.sum();
        if (sum - 1.0).abs() > SPLIT_SUM_TOLERANCE && sum > 0.0 {
            tracing::debug!("Renormalizing macro split with sum {}", sum);
            Self::new(self.protein / sum, self.fat / sum, self.carb / sum)
        } else {
            self
        }
    }
}

/// Calorie target for a goal, clamped to `[bmr, ceiling]` and rounded to 2 decimals
///
/// The BMR floor is applied before the ceiling, so a ceiling below BMR
/// wins. [`crate::Config::validate`] keeps the ceiling above realistic BMRs.
pub fn target_calories(tdee: f64, bmr: f64, goal: Goal, config: &TargetsConfig) -> f64 {
    let mut target = match goal {
        Goal::Lose => tdee - config.calorie_offset,
        Goal::Gain => tdee + config.calorie_offset,
        Goal::Maintain => tdee,
    };

    if target < bmr {
        tracing::debug!("Target {} below BMR, raising to {}", target, bmr);
        target = bmr;
    }
    if target > config.calorie_ceiling {
        tracing::debug!(
            "Target {} above ceiling, capping at {}",
            target,
            config.calorie_ceiling
        );
        target = config.calorie_ceiling;
    }

    round_to(target, 2)
}

/// Look up the macro split for a goal and activity level
pub fn macro_split(goal: Goal, level: ActivityLevel) -> MacroSplit {
    let split = match (goal, level.is_high_activity()) {
        (Goal::Gain, true) => MacroSplit::new(0.35, 0.25, 0.40),
        (Goal::Gain, false) => MacroSplit::new(0.30, 0.30, 0.40),
        (Goal::Lose, true) => MacroSplit::new(0.40, 0.25, 0.35),
        (Goal::Lose, false) => MacroSplit::new(0.35, 0.30, 0.35),
        (Goal::Maintain, true) => MacroSplit::new(0.30, 0.25, 0.45),
        (Goal::Maintain, false) => MacroSplit::new(0.30, 0.30, 0.40),
    };
    split.normalized()
}

/// Convert a calorie target into grams per macronutrient
pub fn macro_grams(calories: f64, split: MacroSplit, weight_kg: f64) -> MacroBreakdown {
    let protein_gram = round_to(calories * split.protein / KCAL_PER_GRAM_PROTEIN, 1);
    let fat_gram = round_to(calories * split.fat / KCAL_PER_GRAM_FAT, 1);
    let carb_gram = round_to(calories * split.carb / KCAL_PER_GRAM_CARB, 1);

    MacroBreakdown {
        protein_gram,
        fat_gram,
        carb_gram,
        protein_per_kg: round_to(protein_gram / weight_kg, 2),
    }
}
