//! Core domain types for the nutrition recommendation pipeline.
//!
//! This module defines:
//! - Closed enums for gender, activity level and goal
//! - The validated user profile consumed by the pipeline
//! - Response types produced by the pipeline

use serde::{Deserialize, Serialize};

// ============================================================================
// Profile Enums
// ============================================================================

/// Biological sex used to pick the BMR equation
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    #[serde(alias = "Nam")]
    Male,
    #[serde(alias = "Nữ")]
    Female,
}

/// Habitual activity level
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    /// ACTIVE and VERY_ACTIVE select the high-activity macro split.
    pub fn is_high_activity(self) -> bool {
        matches!(self, ActivityLevel::Active | ActivityLevel::VeryActive)
    }
}

/// Weight goal driving the calorie offset and macro split
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Goal {
    Lose,
    Gain,
    Maintain,
}

// ============================================================================
// Input
// ============================================================================

/// A validated body profile.
///
/// Only [`crate::ProfileRequest::validate`] constructs one from untrusted
/// input, so every stage may assume positive measurements and an age in range.
#[derive(Clone, Debug, PartialEq)]
pub struct UserProfile {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: u32,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    pub target_weight_kg: Option<f64>,
    pub goal: Option<Goal>,
}

// ============================================================================
// Output
// ============================================================================

/// Daily macronutrient amounts in grams
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MacroBreakdown {
    pub protein_gram: f64,
    pub fat_gram: f64,
    pub carb_gram: f64,
    pub protein_per_kg: f64,
}

/// Complete result of one pipeline run
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    pub bmr: f64,
    pub tdee: f64,
    pub recommended_calories: f64,
    pub bmi: f64,
    pub macros: MacroBreakdown,
    pub note: String,
}

/// Fixed service status object
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enums_use_screaming_snake_case() {
        let level: ActivityLevel = serde_json::from_str("\"VERY_ACTIVE\"").unwrap();
        assert_eq!(level, ActivityLevel::VeryActive);
        assert_eq!(serde_json::to_string(&Goal::Maintain).unwrap(), "\"MAINTAIN\"");
    }

    #[test]
    fn test_legacy_gender_aliases() {
        let male: Gender = serde_json::from_str("\"Nam\"").unwrap();
        let female: Gender = serde_json::from_str("\"Nữ\"").unwrap();
        assert_eq!(male, Gender::Male);
        assert_eq!(female, Gender::Female);
    }

    #[test]
    fn test_high_activity_flag() {
        assert!(ActivityLevel::Active.is_high_activity());
        assert!(ActivityLevel::VeryActive.is_high_activity());
        assert!(!ActivityLevel::Moderate.is_high_activity());
        assert!(!ActivityLevel::Light.is_high_activity());
        assert!(!ActivityLevel::Sedentary.is_high_activity());
    }

    #[test]
    fn test_response_field_names() {
        let response = RecommendationResponse {
            bmr: 1500.0,
            tdee: 1800.0,
            recommended_calories: 1800.0,
            bmi: 22.0,
            macros: MacroBreakdown {
                protein_gram: 135.0,
                fat_gram: 60.0,
                carb_gram: 180.0,
                protein_per_kg: 2.0,
            },
            note: "keep going".into(),
        };

        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("recommendedCalories").is_some());
        assert!(value["macros"].get("proteinGram").is_some());
        assert!(value["macros"].get("fatGram").is_some());
        assert!(value["macros"].get("carbGram").is_some());
        assert!(value["macros"].get("proteinPerKg").is_some());
    }
}
