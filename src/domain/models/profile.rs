//! Chatbot personas for the Conectar page.

use super::diagnosis::{DiagnosisResult, MainChallenge};

/// A conversational persona the user can chat with once Conectar unlocks.
#[derive(Debug, Clone)]
pub struct ChatbotProfile {
    /// Catalog id; also the transcript id for this surface.
    pub id: &'static str,
    pub name: &'static str,
    pub bio: &'static str,
    pub personality: &'static [&'static str],
}

pub static PROFILES: [ChatbotProfile; 4] = [
    ChatbotProfile {
        id: "sofia",
        name: "Sofía",
        bio: "Amante del arte, la poesía y las conversaciones profundas. Siempre buscando inspiración en los pequeños detalles.",
        personality: &["Creativa", "Reflexiva", "Empática"],
    },
    ChatbotProfile {
        id: "leo",
        name: "Leo",
        bio: "Viajero, fotógrafo y contador de historias. Hablemos de tu próximo gran viaje o del último libro que te atrapó.",
        personality: &["Aventurero", "Curioso", "Optimista"],
    },
    ChatbotProfile {
        id: "clara",
        name: "Clara",
        bio: "Programadora y aficionada a los puzzles. Disfruto de una buena charla sobre tecnología, ciencia o cualquier acertijo lógico.",
        personality: &["Analítica", "Ingeniosa", "Directa"],
    },
    ChatbotProfile {
        id: "mateo",
        name: "Mateo",
        bio: "Guitarrista y amante de la música indie. Busco conversaciones tranquilas y compartir buenas vibras.",
        personality: &["Relajado", "Amable", "Introvertido"],
    },
];

impl ChatbotProfile {
    pub fn by_id(id: &str) -> Option<&'static ChatbotProfile> {
        PROFILES.iter().find(|p| p.id == id)
    }
}

/// Which profile to suggest first, derived from the diagnosis.
///
/// The recommended scenario wins over the main challenge when both map
/// somewhere; `leo` is the final default.
pub fn recommended_profile_id(diagnosis: Option<&DiagnosisResult>) -> Option<&'static str> {
    let diagnosis = diagnosis?;

    let by_scenario = match diagnosis.recommended_scenario.as_str() {
        "social_anxiety" | "social_energy" => Some("mateo"),
        "authenticity_boundaries" => Some("clara"),
        "communication_gaps" => Some("leo"),
        _ => None,
    };
    if by_scenario.is_some() {
        return by_scenario;
    }

    Some(match diagnosis.main_challenge {
        MainChallenge::SocialAnxiety => "mateo",
        MainChallenge::BoundaryIssues => "clara",
        MainChallenge::CommunicationGaps => "leo",
        MainChallenge::AuthenticityDoubt => "sofia",
        MainChallenge::Other => "leo",
    })
}
