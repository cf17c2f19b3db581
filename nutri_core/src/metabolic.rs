//! Basal metabolic rate (revised Harris-Benedict equation).

use crate::rounding::round_to;
use crate::Gender;

/// Coefficients of one Harris-Benedict equation
struct HarrisBenedict {
    constant: f64,
    weight: f64,
    height: f64,
    age: f64,
}

const MALE: HarrisBenedict = HarrisBenedict {
    constant: 88.362,
    weight: 13.397,
    height: 4.799,
    age: 5.677,
};

const FEMALE: HarrisBenedict = HarrisBenedict {
    constant: 447.593,
    weight: 9.247,
    height: 3.098,
    age: 4.330,
};

/// Calculate BMR in kcal/day, rounded to 2 decimals
///
/// - Male: `88.362 + 13.397·w + 4.799·h − 5.677·age`
/// - Female: `447.593 + 9.247·w + 3.098·h − 4.330·age`
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> f64 {
    let c = match gender {
        Gender::Male => &MALE,
        Gender::Female => &FEMALE,
    };

    let bmr = c.constant + c.weight * weight_kg + c.height * height_cm - c.age * f64::from(age);
    round_to(bmr, 2)
}
