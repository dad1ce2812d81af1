//! Synk - Guided social-skills practice companion
//!
//! Synk walks a user through onboarding, an AI-derived diagnosis of their
//! main social challenge, coached chat practice scenarios, and a
//! social-connection unlock gate, persisting all state in a local store.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Entities, ports, and error taxonomies
//! - **Service Layer** (`services`): Gating, routing, state, intake, and chat
//! - **Infrastructure Layer** (`infrastructure`): Storage, oracle client,
//!   configuration, and logging adapters
//! - **CLI Layer** (`cli`): Command-line interface and the interactive session
//!
//! The engineering core is the session state machine and progression-gating
//! engine: gates are pure derivations over the state aggregate, the page
//! router is an ordered precedence table, and every mutation is mirrored to
//! durable storage through an injected port.

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{
    AppState, BaselineCheckin, ChatMessage, ChatRole, ChatSurface, Config, DailyCheckin,
    DiagnosisResult, MainChallenge, PracticeSession, ProfileScores,
};
pub use domain::ports::{Oracle, StateStore};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{
    ChatSessionManager, CheckinService, DiagnosisService, GateSnapshot, StateService, SurveyWalker,
};
