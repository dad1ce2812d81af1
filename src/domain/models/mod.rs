pub mod chat;
pub mod checkin;
pub mod config;
pub mod diagnosis;
pub mod oracle;
pub mod practice;
pub mod profile;
pub mod resources;
pub mod scenario;
pub mod state;
pub mod survey;

pub use chat::{ChatMessage, ChatRole, ChatSurface};
pub use checkin::{BaselineCheckin, DailyCheckin};
pub use config::{Config, CredentialsConfig, LoggingConfig, OracleConfig, StorageConfig};
pub use diagnosis::{DiagnosisResult, MainChallenge, ProfileScores, SCENARIO_KEYS};
pub use oracle::{CompletionRequest, OracleRole, OracleTurn};
pub use practice::{PracticeSession, SUCCESS_SCORE};
pub use profile::{recommended_profile_id, ChatbotProfile, PROFILES};
pub use resources::{ContactKind, Resource, ResourceCategory, EMERGENCY_RESOURCES};
pub use scenario::{Scenario, SCENARIOS};
pub use state::{keys, AppState};
pub use survey::{Question, QuestionKind, SurveyAnswers, SURVEY};
