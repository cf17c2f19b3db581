//! Goal resolution.
//!
//! Priority: explicit goal, then the sign of the target-weight delta, then
//! MAINTAIN. A profile with neither signal is never treated as weight loss.

use crate::{Goal, UserProfile};

/// Resolve the goal for a profile
///
/// `maintain_tolerance_kg` is the smallest delta that still counts as a
/// change; anything strictly below it resolves to MAINTAIN.
pub fn resolve_goal(profile: &UserProfile, maintain_tolerance_kg: f64) -> Goal {
    if let Some(goal) = profile.goal {
        return goal;
    }

    match profile.target_weight_kg {
        Some(target) => {
            let diff = target - profile.weight_kg;
            if diff.abs() < maintain_tolerance_kg {
                Goal::Maintain
            } else if diff > 0.0 {
                Goal::Gain
            } else {
                Goal::Lose
            }
        }
        None => Goal::Maintain,
    }
}
