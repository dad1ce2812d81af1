pub mod chat_service;
pub mod checkin_service;
pub mod gates;
pub mod intake_service;
pub mod router;
pub mod state_service;

pub use chat_service::{ChatSession, ChatSessionManager, SendOutcome, COMPLETION_MARKER};
pub use checkin_service::{CheckinService, DailyQuestion, FallbackNotice};
pub use gates::GateSnapshot;
pub use intake_service::{AnswerOutcome, DiagnosisService, SurveyWalker, AUTO_ADVANCE_DELAY};
pub use router::{resolve_page, tab_enabled, Page, Tab};
pub use state_service::StateService;
