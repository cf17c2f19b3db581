//! Advisory note templates.

use crate::energy::BmiCategory;
use crate::{ActivityLevel, Goal};

fn activity_phrase(level: ActivityLevel) -> &'static str {
    match level {
        ActivityLevel::Sedentary => "with a mostly sedentary routine",
        ActivityLevel::Light => "with light exercise a few days a week",
        ActivityLevel::Moderate => "with moderate exercise most days of the week",
        ActivityLevel::Active => "with hard training on most days",
        ActivityLevel::VeryActive => "with very hard daily training or a physical job",
    }
}

fn bmi_prefix(bmi: f64) -> &'static str {
    match BmiCategory::classify(bmi) {
        BmiCategory::Underweight => {
            "Your BMI is below the healthy range, so favor nutrient-dense meals and avoid aggressive deficits. "
        }
        BmiCategory::Overweight => {
            "Your BMI is above the healthy range, so build meals around vegetables, lean protein and whole grains. "
        }
        BmiCategory::Normal => "",
    }
}

/// Render the advisory note for a goal, activity level and BMI
pub fn generate_note(goal: Goal, level: ActivityLevel, bmi: f64) -> String {
    let prefix = bmi_prefix(bmi);
    let phrase = activity_phrase(level);

    match goal {
        Goal::Lose => format!(
            "{prefix}To lose weight {phrase}, eat in a moderate calorie deficit. \
             Keep protein high to protect muscle and aim to lose about 0.5 kg per week."
        ),
        Goal::Gain => format!(
            "{prefix}To gain weight {phrase}, eat in a moderate calorie surplus. \
             Pair it with resistance training so that most of the gain is lean mass."
        ),
        Goal::Maintain => format!(
            "{prefix}To maintain your weight {phrase}, eat close to your maintenance calories. \
             Spread protein across your meals and adjust portions if your weight drifts."
        ),
    }
}
