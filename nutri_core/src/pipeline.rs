//! The recommendation pipeline.
//!
//! Runs the five stages in order over a validated profile:
//! 1. BMR
//! 2. TDEE and BMI
//! 3. Goal
//! 4. Calorie target and macros
//! 5. Advisory note
//!
//! Every stage is a pure function, so identical profiles always produce
//! identical responses. Extreme but valid inputs can still overflow; any
//! non-finite stage value fails the whole request with
//! [`Error::Computation`].

use crate::config::TargetsConfig;
use crate::energy::{calculate_bmi, calculate_tdee};
use crate::goal::resolve_goal;
use crate::metabolic::calculate_bmr;
use crate::note::generate_note;
use crate::targets::{macro_grams, macro_split, target_calories};
use crate::{Error, RecommendationResponse, Result, StatusResponse, UserProfile};

/// Compute the full recommendation for a validated profile
pub fn recommend(profile: &UserProfile, config: &TargetsConfig) -> Result<RecommendationResponse> {
    let bmr = calculate_bmr(
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        profile.gender,
    );
    let tdee = calculate_tdee(bmr, profile.activity_level);
    let bmi = calculate_bmi(profile.weight_kg, profile.height_cm);
    tracing::debug!("BMR {}, TDEE {}, BMI {}", bmr, tdee, bmi);
    ensure_finite("bmr", bmr)?;
    ensure_finite("tdee", tdee)?;
    ensure_finite("bmi", bmi)?;

    let goal = resolve_goal(profile, config.maintain_tolerance_kg);
    let recommended_calories = target_calories(tdee, bmr, goal, config);
    tracing::debug!("Goal {:?}, target {} kcal", goal, recommended_calories);

    let split = macro_split(goal, profile.activity_level);
    let macros = macro_grams(recommended_calories, split, profile.weight_kg);
    ensure_finite("proteinPerKg", macros.protein_per_kg)?;
    let note = generate_note(goal, profile.activity_level, bmi);

    Ok(RecommendationResponse {
        bmr,
        tdee,
        recommended_calories,
        bmi,
        macros,
        note,
    })
}

fn ensure_finite(field: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        tracing::error!("Stage produced non-finite {}: {}", field, value);
        Err(Error::Computation(format!("{} is not finite ({})", field, value)))
    }
}

/// Fixed status object reported by the service
pub fn status() -> StatusResponse {
    StatusResponse {
        status: "ok".into(),
        service: "nutrition-recommendation".into(),
        version: env!("CARGO_PKG_VERSION").into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ActivityLevel, Gender, Goal};

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    fn profile(
        weight_kg: f64,
        height_cm: f64,
        age: u32,
        gender: Gender,
        activity_level: ActivityLevel,
    ) -> UserProfile {
        UserProfile {
            weight_kg,
            height_cm,
            age,
            gender,
            activity_level,
            target_weight_kg: None,
            goal: None,
        }
    }

    #[test]
    fn test_male_moderate_maintain() {
        crate::logging::init_test();
        let p = profile(70.0, 175.0, 30, Gender::Male, ActivityLevel::Moderate);

        let response = recommend(&p, &TargetsConfig::default()).unwrap();

        assert_close(response.bmr, 1695.67);
        assert_close(response.tdee, 2628.29);
        assert_close(response.bmi, 22.86);
        assert_close(response.recommended_calories, response.tdee);
        assert_close(response.macros.protein_gram, 197.1);
        assert_close(response.macros.fat_gram, 87.6);
        assert_close(response.macros.carb_gram, 262.8);
        assert_close(response.macros.protein_per_kg, 2.82);
        assert!(response.note.starts_with("To maintain your weight"));
    }

    #[test]
    fn test_female_very_active_lose() {
        let mut p = profile(60.0, 160.0, 25, Gender::Female, ActivityLevel::VeryActive);
        p.goal = Some(Goal::Lose);

        let response = recommend(&p, &TargetsConfig::default()).unwrap();

        assert_close(response.bmr, 1389.84);
        assert_close(response.tdee, 2640.7);
        assert_close(response.recommended_calories, 2140.7);
        // 40/25/35 split
        assert_close(response.macros.protein_gram, 214.1);
        assert_close(response.macros.fat_gram, 59.5);
        assert_close(response.macros.carb_gram, 187.3);
        assert_close(response.macros.protein_per_kg, 3.57);
    }

    #[test]
    fn test_deficit_below_bmr_is_floored() {
        let mut p = profile(40.0, 150.0, 80, Gender::Female, ActivityLevel::Sedentary);
        p.goal = Some(Goal::Lose);

        let response = recommend(&p, &TargetsConfig::default()).unwrap();

        assert_close(response.bmr, 935.77);
        assert_eq!(response.recommended_calories, response.bmr);
        assert!(response.note.starts_with("Your BMI is below the healthy range"));
    }

    #[test]
    fn test_surplus_is_capped() {
        let mut p = profile(200.0, 220.0, 20, Gender::Male, ActivityLevel::VeryActive);
        p.goal = Some(Goal::Gain);

        let response = recommend(&p, &TargetsConfig::default()).unwrap();

        assert_eq!(response.recommended_calories, 4500.0);
        assert!(response.note.starts_with("Your BMI is above the healthy range"));
    }

    #[test]
    fn test_target_weight_drives_goal() {
        let mut p = profile(45.0, 170.0, 22, Gender::Female, ActivityLevel::Light);
        p.target_weight_kg = Some(52.0);

        let response = recommend(&p, &TargetsConfig::default()).unwrap();

        assert_close(response.tdee, 1780.78);
        assert_close(response.recommended_calories, 2280.78);
    }

    #[test]
    fn test_idempotent() {
        let mut p = profile(82.5, 181.0, 41, Gender::Male, ActivityLevel::Active);
        p.target_weight_kg = Some(78.0);

        let config = TargetsConfig::default();
        assert_eq!(
            recommend(&p, &config).unwrap(),
            recommend(&p, &config).unwrap()
        );
    }

    #[test]
    fn test_invariants_hold_across_profiles() {
        let config = TargetsConfig::default();
        let levels = [
            ActivityLevel::Sedentary,
            ActivityLevel::Light,
            ActivityLevel::Moderate,
            ActivityLevel::Active,
            ActivityLevel::VeryActive,
        ];

        for gender in [Gender::Male, Gender::Female] {
            for level in levels {
                for goal in [None, Some(Goal::Lose), Some(Goal::Gain), Some(Goal::Maintain)] {
                    for (weight, height, age) in [
                        (35.0, 140.0, 90),
                        (58.0, 163.0, 19),
                        (95.0, 188.0, 45),
                        (180.0, 210.0, 25),
                    ] {
                        let mut p = profile(weight, height, age, gender, level);
                        p.goal = goal;
                        let r = recommend(&p, &config).unwrap();

                        assert!(r.recommended_calories > 0.0);
                        assert!(r.recommended_calories >= r.bmr);
                        assert!(r.recommended_calories <= 4500.0);

                        let energy = r.macros.protein_gram * 4.0
                            + r.macros.fat_gram * 9.0
                            + r.macros.carb_gram * 4.0;
                        assert!(
                            (energy - r.recommended_calories).abs() <= 1.0,
                            "macro energy {} vs target {}",
                            energy,
                            r.recommended_calories
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_custom_offset() {
        let mut p = profile(70.0, 175.0, 30, Gender::Male, ActivityLevel::Moderate);
        p.goal = Some(Goal::Lose);
        let config = TargetsConfig {
            calorie_offset: 250.0,
            ..TargetsConfig::default()
        };

        let response = recommend(&p, &config).unwrap();
        assert_close(response.recommended_calories, 2378.29);
    }

    #[test]
    fn test_ceiling_halves_round_to_even() {
        let mut p = profile(120.0, 200.0, 20, Gender::Male, ActivityLevel::VeryActive);
        p.goal = Some(Goal::Maintain);

        let response = recommend(&p, &TargetsConfig::default()).unwrap();

        assert_eq!(response.recommended_calories, 4500.0);
        // 30/25/45 split of 4500 kcal
        assert_close(response.macros.protein_gram, 337.5);
        assert_close(response.macros.fat_gram, 125.0);
        assert_close(response.macros.carb_gram, 506.2);
        assert_close(response.macros.protein_per_kg, 2.81);
    }

    #[test]
    fn test_overflowing_weight_fails_whole_request() {
        let p = profile(1e307, 175.0, 30, Gender::Male, ActivityLevel::Moderate);

        let err = recommend(&p, &TargetsConfig::default()).unwrap_err();

        assert!(matches!(err, Error::Computation(_)));
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_vanishing_height_fails_whole_request() {
        let p = profile(70.0, 1e-200, 30, Gender::Female, ActivityLevel::Light);

        let err = recommend(&p, &TargetsConfig::default()).unwrap_err();

        assert!(matches!(err, Error::Computation(ref msg) if msg.starts_with("bmi")));
    }

    #[test]
    fn test_status_is_fixed() {
        let first = status();
        assert_eq!(first.status, "ok");
        assert_eq!(first, status());
    }
}
