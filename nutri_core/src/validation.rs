//! Request parsing and validation.
//!
//! Untrusted JSON becomes a [`ProfileRequest`], and only
//! [`ProfileRequest::validate`] turns it into a [`UserProfile`]. Every
//! constraint violation is reported as [`Error::Validation`].

use crate::config::ValidationConfig;
use crate::{ActivityLevel, Error, Gender, Goal, Result, UserProfile};
use serde::{Deserialize, Serialize};

/// Raw recommendation request as sent by a client
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRequest {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: i64,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    #[serde(default)]
    pub target_weight_kg: Option<f64>,
    #[serde(default)]
    pub goal: Option<Goal>,
}

impl ProfileRequest {
    /// Parse a request body. Malformed JSON and unknown enum values are
    /// client errors.
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body)
            .map_err(|e| Error::Validation(format!("malformed request: {}", e)))
    }

    /// Collect every constraint violation in the request
    pub fn violations(&self, bounds: &ValidationConfig) -> Vec<String> {
        let mut errors = Vec::new();

        if !is_positive(self.weight_kg) {
            errors.push(format!(
                "weightKg must be greater than 0, got {}",
                self.weight_kg
            ));
        }
        if !is_positive(self.height_cm) {
            errors.push(format!(
                "heightCm must be greater than 0, got {}",
                self.height_cm
            ));
        }
        if self.age < i64::from(bounds.min_age) || self.age > i64::from(bounds.max_age) {
            errors.push(format!(
                "age must be between {} and {}, got {}",
                bounds.min_age, bounds.max_age, self.age
            ));
        }

        if let Some(target) = self.target_weight_kg {
            if !is_positive(target) {
                errors.push(format!(
                    "targetWeightKg must be greater than 0, got {}",
                    target
                ));
            } else if is_positive(self.weight_kg)
                && (target - self.weight_kg).abs() > bounds.max_target_delta_kg
            {
                errors.push(format!(
                    "targetWeightKg must be within {} kg of weightKg ({} vs {})",
                    bounds.max_target_delta_kg, target, self.weight_kg
                ));
            }
        }

        errors
    }

    /// Validate the request and produce the profile the pipeline consumes
    pub fn validate(&self, bounds: &ValidationConfig) -> Result<UserProfile> {
        let errors = self.violations(bounds);
        if !errors.is_empty() {
            tracing::warn!("Rejected profile with {} violation(s)", errors.len());
            return Err(Error::Validation(errors.join("; ")));
        }

        // Range checked above
        let age = u32::try_from(self.age)
            .map_err(|_| Error::Validation(format!("age out of range: {}", self.age)))?;

        Ok(UserProfile {
            weight_kg: self.weight_kg,
            height_cm: self.height_cm,
            age,
            gender: self.gender,
            activity_level: self.activity_level,
            target_weight_kg: self.target_weight_kg,
            goal: self.goal,
        })
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
