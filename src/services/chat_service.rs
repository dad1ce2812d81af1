//! Chat session manager for the Práctica and Conectar surfaces.
//!
//! One transcript per (surface, id), persisted independently. New sessions
//! open with a fixed message under a scenario/persona system instruction;
//! saved transcripts are replayed as oracle context without a network call.
//! At most one request is in flight per session.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::errors::OracleError;
use crate::domain::models::{
    ChatMessage, ChatSurface, ChatbotProfile, CompletionRequest, MainChallenge, OracleTurn,
    PracticeSession, Scenario,
};
use crate::domain::ports::Oracle;
use crate::services::state_service::StateService;

/// A coach reply containing this marker ends a practice session.
pub const COMPLETION_MARKER: &str = "insignia";

/// System instruction for the practice coach, shared by every scenario.
const COACH_SYSTEM_PROMPT: &str = r#"Eres el "Coach de Entrenamiento de IA de Synk". Tu único propósito es ayudar a un usuario a practicar habilidades de comunicación en un entorno seguro y simulado. Debes seguir estas reglas en todo momento:

**DIRECTIVAS PRINCIPALES:**
1.  **DOBLE PERSONAJE:** Tienes dos identidades: "El Coach" (tu yo primario, empático, un maestro) y "El Personaje de Rol" (tu yo secundario). Cuando hables como un personaje, DEBES encerrar tu texto en asteriscos. (ej., *¿Ah, sí? Cuéntame más.*)

2.  **USA EL ESCENARIO:** Se te darán instrucciones para un escenario específico. Todo el entrenamiento DEBE basarse en estas instrucciones.

3.  **EL CICLO DE RETROALIMENTACIÓN (LO MÁS IMPORTANTE):** Si el mensaje del usuario es bueno, primero responde como "El Coach" (ej., "¡Gran trabajo haciendo una pregunta de seguimiento!"). Luego, responde inmediatamente como "El Personaje de Rol" para continuar la conversación. Si el mensaje del usuario es débil o no cumple el objetivo, DEBES pausar el roleplay. Responde ÚNICAMENTE como "El Coach", da una corrección amable y pídeles que "intenten esa frase de nuevo".

4.  **TONO Y SEGURIDAD:** Como "El Coach," siempre eres paciente y positivo. Como "El Personaje de Rol," nunca debes ser abusivo, agresivo o sexual. Mantente seguro.

5. **FINALIZANDO LA ESCENA**: Después de unos pocos intercambios exitosos (3-5 mensajes), concluye el ejercicio. Responde como "El Coach" con un resumen positivo final, y DEBES terminar tu mensaje con la frase exacta "¡Has ganado la insignia '[NOMBRE_DEL_MÓDULO]'!". Por ejemplo: "¡Has ganado la insignia 'Rompehielos'!"."#;

/// What kind of surface a live session is bound to.
#[derive(Debug, Clone)]
enum SessionKind {
    Practice {
        title: String,
        module: String,
    },
    Connect,
}

/// One live chat session over a persisted transcript.
#[derive(Debug)]
pub struct ChatSession {
    surface: ChatSurface,
    id: String,
    system_instruction: String,
    kind: SessionKind,
    transcript: Vec<ChatMessage>,
    awaiting_reply: bool,
    completed: bool,
    resumed: bool,
}

impl ChatSession {
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// True while a request is in flight; input stays disabled.
    pub fn awaiting_reply(&self) -> bool {
        self.awaiting_reply
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// True when this session was restored from a saved transcript instead
    /// of sending an opening request.
    pub fn resumed(&self) -> bool {
        self.resumed
    }

    /// Replay the stored transcript as oracle context. Prior `error`
    /// entries fold into `model` turns here and only here.
    fn replay_context(&self) -> Vec<OracleTurn> {
        self.transcript
            .iter()
            .map(|message| OracleTurn {
                role: message.to_oracle_role(),
                text: message.content.clone(),
            })
            .collect()
    }
}

/// Result of sending one user message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// Model reply appended to the transcript.
    Replied,
    /// Completion marker detected: practice session recorded, transcript
    /// discarded.
    Completed,
    /// Error entry appended; the transcript survives for retry.
    Failed { rate_limited: bool },
}

pub struct ChatSessionManager {
    oracle: Arc<dyn Oracle>,
}

impl ChatSessionManager {
    pub fn new(oracle: Arc<dyn Oracle>) -> Self {
        Self { oracle }
    }

    /// Enter a practice scenario: restore its saved transcript, or send the
    /// scenario opening message and store the coach's first reply.
    pub async fn open_practice(
        &self,
        state: &mut StateService,
        nickname: &str,
        main_challenge: Option<MainChallenge>,
        scenario: &Scenario,
    ) -> ChatSession {
        let mut session = ChatSession {
            surface: ChatSurface::Practicar,
            id: scenario.key.to_string(),
            system_instruction: COACH_SYSTEM_PROMPT.to_string(),
            kind: SessionKind::Practice {
                title: scenario.title.to_string(),
                module: scenario.module.to_string(),
            },
            transcript: state
                .load_transcript(ChatSurface::Practicar, scenario.key)
                .await,
            awaiting_reply: false,
            completed: false,
            resumed: false,
        };

        if session.transcript.is_empty() {
            let opening = practice_opening_message(nickname, main_challenge, scenario);
            self.send_opening(state, &mut session, opening, opening_error_message_practice)
                .await;
        } else {
            session.resumed = true;
            info!(scenario = scenario.key, entries = session.transcript.len(), "resumed practice transcript");
        }
        session
    }

    /// Enter a profile chat on Conectar; same restore-or-open contract.
    pub async fn open_connect(
        &self,
        state: &mut StateService,
        nickname: &str,
        profile: &ChatbotProfile,
    ) -> ChatSession {
        let mut session = ChatSession {
            surface: ChatSurface::Conectar,
            id: profile.id.to_string(),
            system_instruction: connect_system_prompt(nickname, profile),
            kind: SessionKind::Connect,
            transcript: state.load_transcript(ChatSurface::Conectar, profile.id).await,
            awaiting_reply: false,
            completed: false,
            resumed: false,
        };

        if session.transcript.is_empty() {
            self.send_opening(state, &mut session, "Hola".to_string(), opening_error_message_connect)
                .await;
        } else {
            session.resumed = true;
            info!(profile = profile.id, entries = session.transcript.len(), "resumed connect transcript");
        }
        session
    }

    /// Send one user message: optimistic append, then the oracle reply or an
    /// error entry once the request settles.
    pub async fn send(
        &self,
        state: &mut StateService,
        session: &mut ChatSession,
        user_text: &str,
    ) -> SendOutcome {
        debug_assert!(!session.awaiting_reply, "one in-flight request per transcript");
        if session.completed || user_text.trim().is_empty() {
            return SendOutcome::Failed { rate_limited: false };
        }

        session.transcript.push(ChatMessage::user(user_text));
        state
            .save_transcript(session.surface, &session.id, &session.transcript)
            .await;

        session.awaiting_reply = true;
        let request = CompletionRequest::conversation(
            session.system_instruction.clone(),
            session.replay_context(),
        );
        let result = self.oracle.complete(request).await;
        session.awaiting_reply = false;

        match result {
            Ok(reply) => {
                session.transcript.push(ChatMessage::model(&reply));

                if matches!(session.kind, SessionKind::Practice { .. })
                    && reply.contains(COMPLETION_MARKER)
                {
                    self.complete_practice(state, session).await;
                    return SendOutcome::Completed;
                }

                state
                    .save_transcript(session.surface, &session.id, &session.transcript)
                    .await;
                SendOutcome::Replied
            }
            Err(err) => {
                warn!(%err, surface = ?session.surface, id = %session.id, "oracle request failed");
                let rate_limited = err.is_rate_limited();
                session
                    .transcript
                    .push(ChatMessage::error(send_error_message(rate_limited)));
                state
                    .save_transcript(session.surface, &session.id, &session.transcript)
                    .await;
                SendOutcome::Failed { rate_limited }
            }
        }
    }

    /// User-initiated end without completion: the transcript is discarded
    /// and no practice session is recorded.
    pub async fn end(&self, state: &mut StateService, session: &mut ChatSession) {
        state.discard_transcript(session.surface, &session.id).await;
        session.transcript.clear();
        session.completed = false;
    }

    async fn send_opening(
        &self,
        state: &mut StateService,
        session: &mut ChatSession,
        opening: String,
        error_message: fn(bool) -> &'static str,
    ) {
        session.awaiting_reply = true;
        let request = CompletionRequest::conversation(
            session.system_instruction.clone(),
            vec![OracleTurn::user(opening)],
        );
        let result = self.oracle.complete(request).await;
        session.awaiting_reply = false;

        match result {
            Ok(reply) => session.transcript.push(ChatMessage::model(reply)),
            Err(err) => {
                warn!(%err, surface = ?session.surface, id = %session.id, "chat opening failed");
                session
                    .transcript
                    .push(ChatMessage::error(error_message(err.is_rate_limited())));
            }
        }
        state
            .save_transcript(session.surface, &session.id, &session.transcript)
            .await;
    }

    async fn complete_practice(&self, state: &mut StateService, session: &mut ChatSession) {
        let SessionKind::Practice { title, module } = &session.kind else {
            return;
        };
        session.completed = true;
        state.discard_transcript(session.surface, &session.id).await;
        state
            .record_practice_session(PracticeSession::completed(
                title.clone(),
                format!("Completó el módulo {module}."),
            ))
            .await;
        info!(scenario = %session.id, "practice session completed");
    }
}

fn practice_opening_message(
    nickname: &str,
    main_challenge: Option<MainChallenge>,
    scenario: &Scenario,
) -> String {
    let challenge = main_challenge.map_or("general", MainChallenge::as_str);
    format!(
        "[REPORTE_DIAGNÓSTICO]: {{main_challenge: '{challenge}'}}\n\
         [MÓDULO_ACTUAL]: {}\n\
         [ESCENARIO]: {}\n\
         [INSTRUCCIONES_PERSONAJE_IA]: {}\n\n\
         [MENSAJE_INICIAL_DEL_COACH_IA]: \"¡Bienvenido/a, {nickname}, a tu próxima sesión de práctica! Basado en tu chequeo, vamos a trabajar en **{}**. Para este escenario, seré '{}'. Tu objetivo es practicar tus habilidades en un espacio seguro. Te daré retroalimentación en el camino. ¿Listo/a para empezar?\"",
        scenario.module,
        scenario.scenario,
        scenario.character_instructions,
        scenario.title,
        scenario.character_name,
    )
}

fn connect_system_prompt(nickname: &str, profile: &ChatbotProfile) -> String {
    format!(
        "Eres un personaje de chatbot llamado {}. Tu personalidad se describe como: {}.\n\
         Tu biografía es: \"{}\".\n\
         Debes conversar con el usuario, {nickname}, manteniéndote siempre fiel a tu personaje. No reveles que eres una IA. Simplemente actúa como {}. Sé amigable, interesante y mantén la conversación fluyendo de forma natural. Tu primera respuesta debe ser un saludo inicial que refleje tu personalidad.",
        profile.name,
        profile.personality.join(", "),
        profile.bio,
        profile.name,
    )
}

fn opening_error_message_practice(rate_limited: bool) -> &'static str {
    if rate_limited {
        "Se ha excedido el límite de solicitudes a la IA. La conversación está en pausa. Por favor, inténtalo de nuevo en unos minutos."
    } else {
        "Lo siento, ocurrió un error al iniciar la práctica. Por favor, intenta de nuevo."
    }
}

fn opening_error_message_connect(rate_limited: bool) -> &'static str {
    if rate_limited {
        "Se ha excedido el límite de solicitudes a la IA. La conversación está en pausa. Por favor, inténtalo de nuevo en unos minutos."
    } else {
        "Lo siento, ocurrió un error al iniciar el chat. Por favor, intenta de nuevo."
    }
}

fn send_error_message(rate_limited: bool) -> &'static str {
    if rate_limited {
        "Se ha excedido el límite de solicitudes a la IA. La conversación está en pausa. Por favor, inténtalo de nuevo en unos minutos."
    } else {
        "Lo siento, ocurrió un error al procesar tu mensaje. Por favor, inténtalo de nuevo."
    }
}
