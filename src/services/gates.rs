//! Progression gate engine.
//!
//! Pure derivations over the state aggregate: nothing here is stored, every
//! flag is recomputed from the entities on each evaluation. Today's date is
//! injected so the daily-checkin gate is testable without a clock.

use chrono::{Local, NaiveDate};

use crate::domain::models::{AppState, BaselineCheckin, DailyCheckin, DiagnosisResult, PracticeSession};

/// Practice successes required before the Conectar page unlocks.
pub const CONNECT_UNLOCK_THRESHOLD: usize = 3;

/// A baseline score at or below this recommends the workshop.
pub const LOW_BASELINE_SCORE: u8 = 2;

/// Daily-checkin labels that recommend the workshop, matched
/// case-insensitively.
pub const LOW_MOOD_LABELS: [&str; 4] = ["mal", "meh", "cansado/a", "triste"];

/// Fixed compatibility-score weights over the four profile factors.
const WEIGHT_SOCIAL_ENERGY: f64 = 0.3;
const WEIGHT_COMMUNICATION_GAPS: f64 = 0.3;
const WEIGHT_AUTHENTICITY_BOUNDARIES: f64 = 0.2;
const WEIGHT_SOCIAL_ANXIETY: f64 = 0.2;

/// Count of practice sessions completed at the success score.
pub fn successful_practices(history: &[PracticeSession]) -> usize {
    history.iter().filter(|s| s.is_successful()).count()
}

/// Práctica unlocks as soon as a diagnosis exists.
pub fn practice_unlocked(diagnosis: Option<&DiagnosisResult>) -> bool {
    diagnosis.is_some()
}

/// Conectar unlocks with a diagnosis plus three practice successes.
pub fn connect_unlocked(
    diagnosis: Option<&DiagnosisResult>,
    history: &[PracticeSession],
) -> bool {
    diagnosis.is_some() && successful_practices(history) >= CONNECT_UNLOCK_THRESHOLD
}

/// Weighted compatibility score in 0..=100, or 0 without a diagnosis.
///
/// Inputs are already 1..=100, so the weighted sum needs no explicit clamp.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn compatibility_score(diagnosis: Option<&DiagnosisResult>) -> u32 {
    let Some(diagnosis) = diagnosis else {
        return 0;
    };
    let scores = &diagnosis.scores;
    let weighted = scores.social_energy * WEIGHT_SOCIAL_ENERGY
        + scores.communication_gaps * WEIGHT_COMMUNICATION_GAPS
        + scores.authenticity_boundaries * WEIGHT_AUTHENTICITY_BOUNDARIES
        + scores.social_anxiety * WEIGHT_SOCIAL_ANXIETY;
    weighted.round() as u32
}

/// Workshop recommendation: baseline score at or below the threshold, or any
/// low-mood daily label. Both inputs are append-only, so once true this can
/// never flip back.
pub fn workshop_recommended(
    baseline: Option<&BaselineCheckin>,
    daily_checkins: &[DailyCheckin],
) -> bool {
    if baseline.is_some_and(|b| b.score <= LOW_BASELINE_SCORE) {
        return true;
    }
    daily_checkins.iter().any(|checkin| {
        let label = checkin.label.to_lowercase();
        LOW_MOOD_LABELS.contains(&label.as_str())
    })
}

/// True iff the most recent daily checkin falls on `today` in local time.
pub fn completed_daily_checkin_today(daily_checkins: &[DailyCheckin], today: NaiveDate) -> bool {
    daily_checkins
        .last()
        .is_some_and(|checkin| checkin.timestamp.with_timezone(&Local).date_naive() == today)
}

/// The daily prompt shows only inside Main, once a diagnosis exists, and at
/// most once per local calendar day.
pub fn daily_checkin_due(state: &AppState, today: NaiveDate) -> bool {
    state.diagnosis.is_some() && !completed_daily_checkin_today(&state.daily_checkins, today)
}

/// One evaluation of every gate, for display and tests.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct GateSnapshot {
    pub successful_practices: usize,
    pub practice_unlocked: bool,
    pub connect_unlocked: bool,
    pub compatibility_score: u32,
    pub workshop_recommended: bool,
    pub completed_daily_checkin_today: bool,
}

impl GateSnapshot {
    pub fn derive(state: &AppState, today: NaiveDate) -> Self {
        Self {
            successful_practices: successful_practices(&state.practice_history),
            practice_unlocked: practice_unlocked(state.diagnosis.as_ref()),
            connect_unlocked: connect_unlocked(state.diagnosis.as_ref(), &state.practice_history),
            compatibility_score: compatibility_score(state.diagnosis.as_ref()),
            workshop_recommended: workshop_recommended(
                state.baseline.as_ref(),
                &state.daily_checkins,
            ),
            completed_daily_checkin_today: completed_daily_checkin_today(
                &state.daily_checkins,
                today,
            ),
        }
    }
}
