//! Recommendation Pipeline — turns a profile into validated recommendations.
//!
//! Flow: presence-validate profile → render prompt → one model call with the
//! structured-output schema → parse JSON → enforce the recommendation
//! contract. Exactly one attempt per submission; identical profiles issue
//! independent requests and may return different recommendations.

use serde_json::Value;
use tracing::info;

use crate::assessment::profile::UserProfile;
use crate::assessment::prompts::RECOMMENDATION_PROMPT_TEMPLATE;
use crate::assessment::recommendation::CareerRecommendation;
use crate::assessment::schema::RECOMMENDATION_SCHEMA;
use crate::assessment::validate::validate_recommendations;
use crate::errors::AppError;
use crate::llm_client::{strip_json_fences, GenerativeModel};

/// Runs the full pipeline for one submitted profile.
///
/// Failure classification:
/// - empty profile field → `AppError::Input` (the model is never called)
/// - credential/transport/service failure, or a response that is not
///   well-formed JSON → `AppError::Pipeline`
/// - well-formed JSON violating the recommendation contract →
///   `AppError::Validation`
pub async fn generate_recommendations(
    model: &dyn GenerativeModel,
    profile: &UserProfile,
) -> Result<Vec<CareerRecommendation>, AppError> {
    profile.validate()?;

    let prompt = build_recommendation_prompt(profile);

    let raw = model
        .generate(&prompt, &RECOMMENDATION_SCHEMA)
        .await
        .map_err(|e| AppError::Pipeline(format!("Recommendation call failed: {e}")))?;

    let payload: Value = serde_json::from_str(strip_json_fences(&raw))
        .map_err(|e| AppError::Pipeline(format!("Model returned a non-JSON response: {e}")))?;

    let recommendations = validate_recommendations(&payload)?;

    info!(
        "Generated {} career recommendations",
        recommendations.len()
    );

    Ok(recommendations)
}

/// Renders the instruction text for one profile by filling the template.
/// Pure — identical input yields an identical prompt string.
pub fn build_recommendation_prompt(profile: &UserProfile) -> String {
    RECOMMENDATION_PROMPT_TEMPLATE
        .replace("{interests}", &profile.interests)
        .replace("{skills}", &profile.skills)
        .replace("{academic_strengths}", &profile.academic_strengths)
        .replace("{career_goals}", &profile.career_goals)
        .replace(
            "{work_environment}",
            profile.preferred_work_environment.as_str(),
        )
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
