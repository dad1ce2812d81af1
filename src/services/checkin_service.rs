//! Check-in question fetching with deterministic fallbacks.
//!
//! Both the baseline and the daily prompt ask the oracle for a fresh
//! question; any failure swaps in a fixed default so the user is never
//! blocked, with a notice explaining what happened.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use crate::domain::errors::OracleError;
use crate::domain::models::CompletionRequest;
use crate::domain::ports::Oracle;

/// Fallback baseline question when the oracle cannot supply one.
pub const FALLBACK_BASELINE_QUESTION: &str =
    "Para empezar, ¿cómo te sientes en este preciso momento?";

/// The daily prompt needs at least this many answer labels to be usable.
const MIN_DAILY_ANSWERS: usize = 3;

/// A daily mood question plus its one-word answer labels.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DailyQuestion {
    pub question: String,
    pub answers: Vec<String>,
}

impl DailyQuestion {
    /// Fixed default used whenever the oracle fails or under-delivers.
    pub fn fallback() -> Self {
        Self {
            question: "¿Cómo te sientes hoy?".to_string(),
            answers: vec![
                "Bien".to_string(),
                "Normal".to_string(),
                "Meh".to_string(),
                "Mal".to_string(),
            ],
        }
    }
}

/// Non-fatal notice shown alongside a fallback question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackNotice {
    pub message: &'static str,
}

pub struct CheckinService {
    oracle: Arc<dyn Oracle>,
}

impl CheckinService {
    pub fn new(oracle: Arc<dyn Oracle>) -> Self {
        Self { oracle }
    }

    /// Fetch the baseline mood question. Failures return the fixed fallback
    /// plus a notice; rate limiting gets its own wording.
    pub async fn baseline_question(&self) -> (String, Option<FallbackNotice>) {
        let request = CompletionRequest::text(
            "Genera una única pregunta corta, cálida y concreta para evaluar el estado de ánimo de alguien en este preciso momento. El formato debe ser solo texto, menos de 80 caracteres y sin emojis.",
        );

        match self.oracle.complete(request).await {
            Ok(text) if !text.trim().is_empty() => (text.trim().to_string(), None),
            Ok(_) => {
                warn!("baseline question came back empty, using fallback");
                (
                    FALLBACK_BASELINE_QUESTION.to_string(),
                    Some(FallbackNotice {
                        message: "No se pudo cargar una pregunta personalizada. ¡No hay problema! Usaremos una estándar para empezar.",
                    }),
                )
            }
            Err(err) => {
                warn!(%err, "baseline question fetch failed, using fallback");
                let message = if err.is_rate_limited() {
                    "Debido a la alta demanda, no pudimos generar una pregunta personalizada. Usaremos una estándar para que puedas continuar."
                } else {
                    "No se pudo cargar una pregunta personalizada. ¡No hay problema! Usaremos una estándar para empezar."
                };
                (
                    FALLBACK_BASELINE_QUESTION.to_string(),
                    Some(FallbackNotice { message }),
                )
            }
        }
    }

    /// Fetch the daily question and answer labels as schema-validated JSON.
    /// Fewer than three answers, malformed JSON, or any oracle failure all
    /// fall back to the fixed default.
    pub async fn daily_question(&self) -> (DailyQuestion, Option<FallbackNotice>) {
        let prompt = "Genera un objeto JSON para un chequeo de estado de ánimo diario. El objeto debe tener dos claves:\n\
                      1. \"question\": una pregunta corta, única y cálida para el usuario sobre cómo se siente hoy (en español, <100 caracteres).\n\
                      2. \"answers\": un array de 4 respuestas de una sola palabra (en español) que cubran un rango de sentimientos.\n\n\
                      No incluyas comentarios fuera del JSON.";
        let schema = json!({
            "type": "OBJECT",
            "properties": {
                "question": { "type": "STRING" },
                "answers": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" }
                }
            },
            "required": ["question", "answers"]
        });

        let result = self.oracle.complete(CompletionRequest::json(prompt, schema)).await;
        match result.and_then(|text| {
            serde_json::from_str::<DailyQuestion>(text.trim())
                .map_err(|err| OracleError::MalformedResponse(err.to_string()))
        }) {
            Ok(question) if question.answers.len() >= MIN_DAILY_ANSWERS => (question, None),
            Ok(short) => {
                warn!(answers = short.answers.len(), "daily question came back with too few answers");
                (
                    DailyQuestion::fallback(),
                    Some(FallbackNotice {
                        message: "No se pudo cargar el chequeo. No te preocupes, se usará una pregunta predeterminada.",
                    }),
                )
            }
            Err(err) => {
                warn!(%err, "daily question fetch failed, using fallback");
                let message = if err.is_rate_limited() {
                    "Se ha superado la cuota de la API. No te preocupes, puedes usar la pregunta predeterminada para el chequeo de hoy."
                } else {
                    "No se pudo cargar el chequeo. No te preocupes, se usará una pregunta predeterminada."
                };
                (DailyQuestion::fallback(), Some(FallbackNotice { message }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_daily_question_has_four_answers() {
        let fallback = DailyQuestion::fallback();
        assert_eq!(fallback.answers.len(), 4);
        assert!(fallback.answers.contains(&"Mal".to_string()));
    }
}
