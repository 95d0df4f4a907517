//! Assessment session — the Form → Pending → Results state machine.
//!
//! One session owns at most one in-flight recommendation request: a
//! submission is only accepted in `Form`, and `Form` is only re-entered
//! after the request settles or on explicit reset. Reset is refused while
//! `Pending` — there is no cancellation path for an issued model call.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::assessment::profile::UserProfile;
use crate::assessment::recommendation::CareerRecommendation;
use crate::errors::AppError;

/// In-process session store. Sessions are never persisted.
pub type SessionStore = Arc<RwLock<HashMap<Uuid, AssessmentSession>>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentPhase {
    Form,
    Pending,
    Results,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentSession {
    pub id: Uuid,
    pub phase: AssessmentPhase,
    pub profile: UserProfile,
    pub error: Option<String>,
    pub results: Option<Vec<CareerRecommendation>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AssessmentSession {
    /// Creates a session at `Form` with an empty profile.
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            phase: AssessmentPhase::Form,
            profile: UserProfile::default(),
            error: None,
            results: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// `Form → Pending`. Stores the submitted profile snapshot and clears
    /// any prior error. Refused in any other phase — a session never has
    /// two requests in flight.
    pub fn begin(&mut self, profile: UserProfile) -> Result<(), AppError> {
        match self.phase {
            AssessmentPhase::Form => {
                self.phase = AssessmentPhase::Pending;
                self.profile = profile;
                self.error = None;
                self.results = None;
                self.touch();
                Ok(())
            }
            AssessmentPhase::Pending => Err(AppError::Conflict(
                "a recommendation request is already in flight".to_string(),
            )),
            AssessmentPhase::Results => Err(AppError::Conflict(
                "session already has results; reset before resubmitting".to_string(),
            )),
        }
    }

    /// `Pending → Results`. Caller holds the settled pipeline outcome.
    pub fn complete(&mut self, results: Vec<CareerRecommendation>) {
        self.phase = AssessmentPhase::Results;
        self.results = Some(results);
        self.error = None;
        self.touch();
    }

    /// `Pending → Form`, carrying the user-facing message. The submitted
    /// profile is preserved for correction and resubmission.
    pub fn fail(&mut self, message: &str) {
        self.phase = AssessmentPhase::Form;
        self.error = Some(message.to_string());
        self.results = None;
        self.touch();
    }

    /// Explicit reset back to the initial `Form` state, discarding profile,
    /// results, and error. Refused while a request is in flight.
    pub fn reset(&mut self) -> Result<(), AppError> {
        if self.phase == AssessmentPhase::Pending {
            return Err(AppError::Conflict(
                "cannot reset while a recommendation request is in flight".to_string(),
            ));
        }

        self.phase = AssessmentPhase::Form;
        self.profile = UserProfile::default();
        self.error = None;
        self.results = None;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for AssessmentSession {
    fn default() -> Self {
        Self::new()
    }
}
