//! Mood check-in entities.
//!
//! The baseline check-in happens exactly once and gates entry into the
//! diagnosis survey. Daily check-ins form an append-only sequence with at
//! most one substantive answer per local calendar day.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One-time initial mood survey, required before diagnosis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineCheckin {
    /// The mood question shown to the user (oracle-generated or fallback).
    pub question: String,

    /// Self-reported mood on a 1 (very low) to 5 (very high) scale.
    pub score: u8,

    /// Optional free-text note, may be empty.
    pub note: String,

    pub timestamp: DateTime<Utc>,
}

impl BaselineCheckin {
    pub fn new(question: impl Into<String>, score: u8, note: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            score,
            note: note.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Recurring at-most-once-per-day mood prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyCheckin {
    pub question: String,

    /// The one-word answer label the user picked (e.g. "Bien", "Triste").
    pub label: String,

    pub note: String,

    pub timestamp: DateTime<Utc>,
}

impl DailyCheckin {
    pub fn new(
        question: impl Into<String>,
        label: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            label: label.into(),
            note: note.into(),
            timestamp: Utc::now(),
        }
    }
}
