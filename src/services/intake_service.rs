//! Diagnosis intake: the sequential questionnaire and the oracle request
//! that turns baseline + answers into a [`DiagnosisResult`].

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tracing::{info, warn};

use crate::domain::errors::OracleError;
use crate::domain::models::{
    BaselineCheckin, CompletionRequest, DiagnosisResult, Question, SurveyAnswers, SURVEY,
};
use crate::domain::ports::Oracle;

/// Fixed delay before a non-final question auto-advances.
pub const AUTO_ADVANCE_DELAY: Duration = Duration::from_millis(300);

/// What happens after an answer is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Not the last question: the walker advances after [`AUTO_ADVANCE_DELAY`].
    AdvancesAfterDelay,
    /// Last question answered: submission is an explicit separate action.
    AwaitingSubmit,
}

/// Walks the fixed survey one question at a time.
///
/// Forward movement happens by answering; backward navigation is free except
/// at the first question. Re-answering an earlier question overwrites the
/// stored answer for it.
#[derive(Debug, Default)]
pub struct SurveyWalker {
    index: usize,
    answers: SurveyAnswers,
}

impl SurveyWalker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_question(&self) -> &'static Question {
        &SURVEY[self.index]
    }

    /// 1-based position for display ("Pregunta 3 de 12").
    pub fn position(&self) -> (usize, usize) {
        (self.index + 1, SURVEY.len())
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index == SURVEY.len() - 1
    }

    pub fn answer_for_current(&self) -> Option<&str> {
        self.answers
            .get(&self.current_question().id)
            .map(String::as_str)
    }

    /// Record an answer for the current question.
    pub fn select_answer(&mut self, answer: impl Into<String>) -> AnswerOutcome {
        let id = self.current_question().id;
        self.answers.insert(id, answer.into());
        if self.is_last() {
            AnswerOutcome::AwaitingSubmit
        } else {
            AnswerOutcome::AdvancesAfterDelay
        }
    }

    /// Move to the next question. Caller applies [`AUTO_ADVANCE_DELAY`] first.
    pub fn advance(&mut self) {
        if !self.is_last() {
            self.index += 1;
        }
    }

    /// Step back one question; no-op at the first.
    pub fn back(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    /// All answers, for the diagnosis request.
    pub fn answers(&self) -> &SurveyAnswers {
        &self.answers
    }

    /// The survey can be submitted once the final question has an answer.
    pub fn ready_to_submit(&self) -> bool {
        self.is_last() && self.answer_for_current().is_some()
    }
}

/// Builds the diagnosis completion request and validates the oracle's reply.
pub struct DiagnosisService {
    oracle: Arc<dyn Oracle>,
}

impl DiagnosisService {
    pub fn new(oracle: Arc<dyn Oracle>) -> Self {
        Self { oracle }
    }

    /// Run the diagnosis. Any failure (transport, rate limit, malformed or
    /// invalid JSON) leaves no partial result behind.
    pub async fn request_diagnosis(
        &self,
        nickname: &str,
        baseline: &BaselineCheckin,
        answers: &SurveyAnswers,
    ) -> Result<DiagnosisResult, OracleError> {
        let prompt = build_diagnosis_prompt(nickname, baseline, answers);
        let request = CompletionRequest::json(prompt, diagnosis_response_schema());

        let text = self.oracle.complete(request).await?;
        let diagnosis: DiagnosisResult = serde_json::from_str(text.trim()).map_err(|err| {
            warn!(%err, "diagnosis response is not valid JSON for the declared schema");
            OracleError::MalformedResponse(err.to_string())
        })?;
        diagnosis
            .validate()
            .map_err(|err| OracleError::MalformedResponse(err.to_string()))?;

        info!(challenge = ?diagnosis.main_challenge, "diagnosis accepted");
        Ok(diagnosis)
    }
}

fn build_diagnosis_prompt(
    nickname: &str,
    baseline: &BaselineCheckin,
    answers: &SurveyAnswers,
) -> String {
    let formatted_answers = SURVEY
        .iter()
        .map(|question| {
            let answer = answers
                .get(&question.id)
                .map_or("No respondida", String::as_str);
            format!("P{}: \"{}\"\nR: \"{}\"", question.id, question.text, answer)
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    let note = if baseline.note.is_empty() {
        "Ninguna"
    } else {
        baseline.note.as_str()
    };
    let baseline_info = format!(
        "Información del chequeo inicial de {nickname}:\n\
         - Pregunta de estado de ánimo: \"{}\"\n\
         - Puntuación: {}/5\n\
         - Nota adicional: \"{note}\"\n\
         Utiliza esta información como contexto clave para tu análisis.",
        baseline.question, baseline.score
    );

    format!(
        "Eres \"Synk Diagnóstico\". Recibirás respuestas de una encuesta y un chequeo de estado de ánimo de un usuario llamado {nickname}.\n\
         Analiza las respuestas a través de 4 factores clave: Energía Social, Ansiedad Social, Habilidades de Comunicación y Autenticidad/Límites.\n\n\
         {baseline_info}\n\n\
         Respuestas de {nickname} a la encuesta principal:\n\
         {formatted_answers}\n\n\
         Basado en todo esto, devuelve un único objeto JSON estricto con la siguiente estructura:\n\
         1.  `main_challenge`: Elige uno de: [\"social_anxiety\", \"boundary_issues\", \"communication_gaps\", \"authenticity_doubt\", \"other\"].\n\
         2.  `confidence`: Un número de 0 a 1 que representa tu confianza en el diagnóstico.\n\
         3.  `traits`: Un array de 3 a 5 etiquetas en minúsculas y en español que describen al usuario.\n\
         4.  `insight`: Un párrafo breve (≤80 palabras) en un tono cálido y empático.\n\
         5.  `recommended_scenario`: Elige uno de: [\"social_anxiety\", \"authenticity_boundaries\", \"communication_gaps\", \"social_energy\", \"general\"]. Debe corresponder al 'main_challenge' o ser 'general' si no hay un enfoque claro.\n\
         6.  `scores`: Un objeto con puntuaciones numéricas del 1 al 100 para los 4 factores ('social_energy', 'social_anxiety', 'communication_gaps', 'authenticity_boundaries') para el gráfico de radar. Una puntuación más alta es mejor.\n\n\
         No incluyas comentarios fuera del objeto JSON."
    )
}

/// Response schema declared to the oracle for structured output.
fn diagnosis_response_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "main_challenge": { "type": "STRING" },
            "confidence": { "type": "NUMBER" },
            "traits": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            },
            "insight": { "type": "STRING" },
            "recommended_scenario": { "type": "STRING" },
            "scores": {
                "type": "OBJECT",
                "properties": {
                    "social_energy": { "type": "NUMBER" },
                    "social_anxiety": { "type": "NUMBER" },
                    "communication_gaps": { "type": "NUMBER" },
                    "authenticity_boundaries": { "type": "NUMBER" }
                },
                "required": ["social_energy", "social_anxiety", "communication_gaps", "authenticity_boundaries"]
            }
        },
        "required": ["main_challenge", "confidence", "traits", "insight", "recommended_scenario", "scores"]
    })
}
