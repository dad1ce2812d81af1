//! Diagnosis result produced by the oracle from the intake survey.

use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, DomainResult};

/// The user's main social challenge, as classified by the oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MainChallenge {
    SocialAnxiety,
    BoundaryIssues,
    CommunicationGaps,
    AuthenticityDoubt,
    Other,
}

impl MainChallenge {
    /// Wire-format key, as the oracle produces and consumes it.
    pub fn as_str(self) -> &'static str {
        match self {
            MainChallenge::SocialAnxiety => "social_anxiety",
            MainChallenge::BoundaryIssues => "boundary_issues",
            MainChallenge::CommunicationGaps => "communication_gaps",
            MainChallenge::AuthenticityDoubt => "authenticity_doubt",
            MainChallenge::Other => "other",
        }
    }

    /// Spanish display label for the profile view.
    pub fn label(self) -> &'static str {
        match self {
            MainChallenge::SocialAnxiety => "Ansiedad Social",
            MainChallenge::BoundaryIssues => "Límites y Autenticidad",
            MainChallenge::CommunicationGaps => "Habilidades de Comunicación",
            MainChallenge::AuthenticityDoubt => "Duda sobre Autenticidad",
            MainChallenge::Other => "Bienestar General",
        }
    }
}

/// Four-factor profile scores, each in 1..=100. Higher is better.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileScores {
    pub social_energy: f64,
    pub social_anxiety: f64,
    pub communication_gaps: f64,
    pub authenticity_boundaries: f64,
}

impl ProfileScores {
    fn validate(&self) -> DomainResult<()> {
        for (name, value) in [
            ("social_energy", self.social_energy),
            ("social_anxiety", self.social_anxiety),
            ("communication_gaps", self.communication_gaps),
            ("authenticity_boundaries", self.authenticity_boundaries),
        ] {
            if !(1.0..=100.0).contains(&value) {
                return Err(DomainError::ValidationFailed(format!(
                    "score {name} out of range: {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Scenario keys the oracle may recommend. Anything else falls back to
/// the general scenario at use time.
pub const SCENARIO_KEYS: [&str; 5] = [
    "social_anxiety",
    "authenticity_boundaries",
    "communication_gaps",
    "social_energy",
    "general",
];

/// Structured AI-derived profile driving all downstream gating.
///
/// Replaceable wholesale by a later diagnosis run, never partially mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisResult {
    pub main_challenge: MainChallenge,

    /// Oracle confidence in the classification, 0..=1.
    pub confidence: f64,

    /// 3 to 5 lowercase Spanish trait labels.
    pub traits: Vec<String>,

    /// Short empathetic summary paragraph.
    pub insight: String,

    /// One of [`SCENARIO_KEYS`].
    pub recommended_scenario: String,

    pub scores: ProfileScores,
}

impl DiagnosisResult {
    /// Validate the enumerations and numeric ranges the oracle must respect.
    ///
    /// A diagnosis failing validation is discarded entirely; no partial
    /// result is ever stored.
    pub fn validate(&self) -> DomainResult<()> {
        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(DomainError::ValidationFailed(format!(
                "confidence out of range: {}",
                self.confidence
            )));
        }
        if !(3..=5).contains(&self.traits.len()) {
            return Err(DomainError::ValidationFailed(format!(
                "expected 3-5 traits, got {}",
                self.traits.len()
            )));
        }
        if self.insight.trim().is_empty() {
            return Err(DomainError::ValidationFailed("empty insight".to_string()));
        }
        if !SCENARIO_KEYS.contains(&self.recommended_scenario.as_str()) {
            return Err(DomainError::ValidationFailed(format!(
                "unknown recommended_scenario: {}",
                self.recommended_scenario
            )));
        }
        self.scores.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DiagnosisResult {
        DiagnosisResult {
            main_challenge: MainChallenge::SocialAnxiety,
            confidence: 0.95,
            traits: vec![
                "reflexivo".to_string(),
                "empático".to_string(),
                "cauteloso".to_string(),
            ],
            insight: "Te tomas tiempo para entender las situaciones sociales.".to_string(),
            recommended_scenario: "social_anxiety".to_string(),
            scores: ProfileScores {
                social_energy: 60.0,
                social_anxiety: 75.0,
                communication_gaps: 65.0,
                authenticity_boundaries: 85.0,
            },
        }
    }

    #[test]
    fn test_valid_diagnosis_passes() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_challenge_serializes_snake_case() {
        let json = serde_json::to_string(&MainChallenge::BoundaryIssues).unwrap();
        assert_eq!(json, "\"boundary_issues\"");
    }

    #[test]
    fn test_rejects_unknown_scenario() {
        let mut diagnosis = sample();
        diagnosis.recommended_scenario = "stage_fright".to_string();
        assert!(diagnosis.validate().is_err());
    }

    #[test]
    fn test_rejects_out_of_range_confidence() {
        let mut diagnosis = sample();
        diagnosis.confidence = 1.2;
        assert!(diagnosis.validate().is_err());
    }

    #[test]
    fn test_rejects_trait_count() {
        let mut diagnosis = sample();
        diagnosis.traits = vec!["uno".to_string(), "dos".to_string()];
        assert!(diagnosis.validate().is_err());
    }

    #[test]
    fn test_rejects_score_out_of_range() {
        let mut diagnosis = sample();
        diagnosis.scores.social_energy = 0.0;
        assert!(diagnosis.validate().is_err());
    }
}
