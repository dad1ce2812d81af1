//! Session/page router.
//!
//! The page-selection precedence is an ordered list of (predicate, page)
//! pairs evaluated top to bottom: the first unmet prerequisite wins, no
//! matter what later entities happen to exist in storage.

use crate::domain::models::AppState;
use crate::services::gates;

/// Top-level pages, in onboarding precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Nickname,
    Consent,
    Baseline,
    Main,
}

/// Tabs inside the Main page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Chequeo,
    Practica,
    Conectar,
    Taller,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Chequeo, Tab::Practica, Tab::Conectar, Tab::Taller];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Chequeo => "Chequeo",
            Tab::Practica => "Práctica",
            Tab::Conectar => "Conectar",
            Tab::Taller => "Taller",
        }
    }
}

/// What the router looks at when resolving a page.
#[derive(Debug, Clone, Copy)]
pub struct RouteInput<'a> {
    pub authenticated: bool,
    pub state: &'a AppState,
}

type Predicate = fn(&RouteInput<'_>) -> bool;

/// Ordered precedence table. The final catch-all row makes resolution total.
const ROUTES: [(Predicate, Page); 5] = [
    (|input| !input.authenticated, Page::Login),
    (|input| input.state.nickname.is_none(), Page::Nickname),
    (|input| !input.state.has_consented, Page::Consent),
    (|input| input.state.baseline.is_none(), Page::Baseline),
    (|_| true, Page::Main),
];

/// Resolve the visible page: the first route whose predicate holds.
pub fn resolve_page(authenticated: bool, state: &AppState) -> Page {
    let input = RouteInput { authenticated, state };
    for (predicate, page) in &ROUTES {
        if predicate(&input) {
            return *page;
        }
    }
    // The table ends with a catch-all, so this is unreachable; Main keeps
    // resolution total anyway.
    Page::Main
}

/// Whether a tab can be selected given current gates.
pub fn tab_enabled(tab: Tab, state: &AppState) -> bool {
    match tab {
        Tab::Chequeo | Tab::Taller => true,
        Tab::Practica => gates::practice_unlocked(state.diagnosis.as_ref()),
        Tab::Conectar => {
            gates::connect_unlocked(state.diagnosis.as_ref(), &state.practice_history)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{BaselineCheckin, DiagnosisResult, MainChallenge, PracticeSession, ProfileScores};

    fn diagnosis() -> DiagnosisResult {
        DiagnosisResult {
            main_challenge: MainChallenge::Other,
            confidence: 0.8,
            traits: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            insight: "insight".to_string(),
            recommended_scenario: "general".to_string(),
            scores: ProfileScores {
                social_energy: 50.0,
                social_anxiety: 50.0,
                communication_gaps: 50.0,
                authenticity_boundaries: 50.0,
            },
        }
    }

    #[test]
    fn test_unauthenticated_always_routes_to_login() {
        let state = AppState {
            nickname: Some("Ana".to_string()),
            has_consented: true,
            baseline: Some(BaselineCheckin::new("q", 3, "")),
            ..AppState::default()
        };
        assert_eq!(resolve_page(false, &state), Page::Login);
    }

    #[test]
    fn test_missing_nickname_routes_to_nickname() {
        assert_eq!(resolve_page(true, &AppState::default()), Page::Nickname);
    }

    #[test]
    fn test_consent_precedes_baseline_even_when_baseline_stored() {
        // A baseline restored from storage must not skip the consent step.
        let state = AppState {
            nickname: Some("Ana".to_string()),
            has_consented: false,
            baseline: Some(BaselineCheckin::new("q", 3, "")),
            ..AppState::default()
        };
        assert_eq!(resolve_page(true, &state), Page::Consent);
    }

    #[test]
    fn test_full_onboarding_routes_to_main() {
        let state = AppState {
            nickname: Some("Ana".to_string()),
            has_consented: true,
            baseline: Some(BaselineCheckin::new("q", 3, "")),
            ..AppState::default()
        };
        assert_eq!(resolve_page(true, &state), Page::Main);
    }

    #[test]
    fn test_practica_tab_needs_diagnosis() {
        let mut state = AppState::default();
        assert!(!tab_enabled(Tab::Practica, &state));
        state.diagnosis = Some(diagnosis());
        assert!(tab_enabled(Tab::Practica, &state));
    }

    #[test]
    fn test_conectar_tab_needs_diagnosis_and_successes() {
        let mut state = AppState {
            diagnosis: Some(diagnosis()),
            ..AppState::default()
        };
        assert!(!tab_enabled(Tab::Conectar, &state));

        state.practice_history = (0..3)
            .map(|_| PracticeSession::completed("p", "a"))
            .collect();
        assert!(tab_enabled(Tab::Conectar, &state));
    }

    #[test]
    fn test_chequeo_and_taller_always_enabled() {
        let state = AppState::default();
        assert!(tab_enabled(Tab::Chequeo, &state));
        assert!(tab_enabled(Tab::Taller, &state));
    }
}
