//! The fixed intake questionnaire.

use std::collections::BTreeMap;

/// How a question is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    /// 1..=5 numeric scale.
    Scale,
    MultipleChoice,
}

/// One survey question with its fixed option set.
#[derive(Debug, Clone)]
pub struct Question {
    pub id: u32,
    pub text: &'static str,
    pub kind: QuestionKind,
    pub options: &'static [&'static str],
    pub helper_text: Option<&'static str>,
}

/// Answers keyed by question id. BTreeMap keeps prompt assembly in
/// question order regardless of answer order.
pub type SurveyAnswers = BTreeMap<u32, String>;

/// The intake survey, in presentation order.
pub static SURVEY: [Question; 12] = [
    Question {
        id: 1,
        text: "En una escala del 1 (muy agotado/a) al 5 (lleno/a de energía), ¿cómo te sientes ahora mismo?",
        kind: QuestionKind::Scale,
        options: &["1", "2", "3", "4", "5"],
        helper_text: None,
    },
    Question {
        id: 2,
        text: "En la última semana, ¿has sentido más ganas de buscar conversaciones o de evitarlas?",
        kind: QuestionKind::MultipleChoice,
        options: &["Buscar conversaciones", "Evitarlas", "Una mezcla de ambos"],
        helper_text: None,
    },
    Question {
        id: 3,
        text: "Cuando piensas en conocer a alguien nuevo, ¿cuál es tu primer sentimiento?",
        kind: QuestionKind::MultipleChoice,
        options: &["Emoción", "Curiosidad", "Nerviosismo", "Cansancio", "Escepticismo"],
        helper_text: Some("Ej: Emoción, Curiosidad, Nerviosismo, Cansancio, Escepticismo"),
    },
    Question {
        id: 4,
        text: "¿Cuál de estas opciones te parece más difícil?",
        kind: QuestionKind::MultipleChoice,
        options: &["Iniciar una conversación", "Mantener una conversación"],
        helper_text: None,
    },
    Question {
        id: 5,
        text: "¿Te resulta fácil hablar de tus propios sentimientos y experiencias?",
        kind: QuestionKind::MultipleChoice,
        options: &["Sí, bastante fácil", "Depende de la persona", "No, es difícil"],
        helper_text: None,
    },
    Question {
        id: 6,
        text: "¿Con qué frecuencia te preocupa lo que los demás piensan de ti después de una interacción social?",
        kind: QuestionKind::MultipleChoice,
        options: &["Rara vez o nunca", "A veces", "Muy a menudo"],
        helper_text: None,
    },
    Question {
        id: 7,
        text: "Cuando estás con otros, ¿sientes que eres más tu 'verdadero yo' o que estás 'interpretando un papel'?",
        kind: QuestionKind::MultipleChoice,
        options: &["Mi 'verdadero yo'", "Estoy 'interpretando un papel'"],
        helper_text: None,
    },
    Question {
        id: 8,
        text: "¿Cuál es tu principal objetivo al conectar con gente nueva?",
        kind: QuestionKind::MultipleChoice,
        options: &[
            "Encontrar amigos con intereses comunes",
            "Encontrar una pareja romántica",
            "Practicar mis habilidades sociales",
            "Aún no estoy seguro/a",
        ],
        helper_text: None,
    },
    Question {
        id: 9,
        text: "¿Qué tan fácil te resulta establecer límites (por ejemplo, decir 'no' o 'no me siento cómodo/a con eso')?",
        kind: QuestionKind::MultipleChoice,
        options: &["Muy fácil", "Más o menos", "Es muy difícil"],
        helper_text: None,
    },
    Question {
        id: 10,
        text: "Si tienes una experiencia social difícil, ¿cuál es tu primera reacción?",
        kind: QuestionKind::MultipleChoice,
        options: &[
            "Intento aprender de ella",
            "Me frustro con la otra persona",
            "Tiendo a culparme y a sentirme mal por un tiempo",
        ],
        helper_text: None,
    },
    Question {
        id: 11,
        text: "¿Sientes una sensación de soledad que te gustaría cambiar?",
        kind: QuestionKind::MultipleChoice,
        options: &["Sí", "No", "Un poco"],
        helper_text: None,
    },
    Question {
        id: 12,
        text: "Para terminar, ¿qué palabra describe mejor lo que buscas aquí?",
        kind: QuestionKind::MultipleChoice,
        options: &["Confianza", "Comprensión", "Conexión", "Calma"],
        helper_text: Some("Ej: Confianza, Comprensión, Conexión, Calma"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_survey_ids_are_sequential() {
        for (index, question) in SURVEY.iter().enumerate() {
            assert_eq!(question.id as usize, index + 1);
        }
    }

    #[test]
    fn test_only_first_question_is_scale() {
        assert_eq!(SURVEY[0].kind, QuestionKind::Scale);
        assert!(SURVEY[1..].iter().all(|q| q.kind == QuestionKind::MultipleChoice));
    }

    #[test]
    fn test_every_question_has_options() {
        assert!(SURVEY.iter().all(|q| q.options.len() >= 2));
    }
}
