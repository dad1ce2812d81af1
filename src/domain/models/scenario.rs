//! Practice scenario catalog.

/// A coached practice scenario for the Práctica tab.
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Catalog key; also the transcript id for this surface.
    pub key: &'static str,
    pub title: &'static str,
    /// Badge name awarded on completion, quoted as it appears in the marker
    /// phrase (e.g. "'Rompehielos'").
    pub module: &'static str,
    pub character_name: &'static str,
    /// Scene setup handed to the coach as part of the opening message.
    pub scenario: &'static str,
    /// Behavioral instructions for the roleplay character.
    pub character_instructions: &'static str,
}

pub static SCENARIOS: [Scenario; 5] = [
    Scenario {
        key: "social_anxiety",
        title: "Iniciar una Conversación",
        module: "'Rompehielos'",
        character_name: "Alex",
        scenario: "Serás 'Alex', alguien nuevo que el usuario conoce en una cafetería local. El objetivo del usuario es iniciar una conversación contigo usando una pregunta abierta.",
        character_instructions: "Comienza diciendo 'Hola'. Responde positivamente si el usuario hace una buena pregunta. Si te devuelven una respuesta cerrada como 'hola', guíalos amablemente como El Coach para que lo intenten de nuevo.",
    },
    Scenario {
        key: "authenticity_boundaries",
        title: "Establecer un Límite",
        module: "'Rechazar Cortésmente'",
        character_name: "Ben",
        scenario: "Serás 'Ben', un conocido amigable pero insistente. El objetivo del usuario es rechazar cortésmente tu petición de salir ahora mismo.",
        character_instructions: "Comienza charlando normalmente por un mensaje, luego pregunta al usuario si quiere ir al cine ahora mismo. Si dicen que no, sé un poco persistente (ej., '¡Oh, vamos, será divertido!'). Si dicen que no por segunda vez, cede y termina la escena positivamente.",
    },
    Scenario {
        key: "communication_gaps",
        title: "Mantener una Conversación",
        module: "'Encontrando Conexiones'",
        character_name: "Sam",
        scenario: "Eres 'Sam', un/a nuevo/a colega. El usuario acaba de iniciar una conversación. Tus respuestas deben ser un poco breves, requiriendo que el usuario haga preguntas de seguimiento para mantener viva la conversación.",
        character_instructions: "El usuario comenzará. Responde a su pregunta, pero no ofrezcas mucha información extra a menos que hagan una pregunta de seguimiento. El objetivo es que practiquen profundizar más.",
    },
    Scenario {
        key: "social_energy",
        title: "Una Charla de Bajo Riesgo",
        module: "'Práctica Suave'",
        character_name: "Casey",
        scenario: "Eres 'Casey', un/a bibliotecario/a amigable. El usuario está pidiendo una recomendación de libro. El objetivo es una interacción corta, positiva y de baja energía.",
        character_instructions: "Sé cálido/a y servicial. Mantén la conversación ligera y centrada en los libros. Termina la conversación después de 3-4 intercambios.",
    },
    Scenario {
        key: "general",
        title: "Práctica General de Conversación",
        module: "'Charla Abierta'",
        character_name: "Jordan",
        scenario: "Eres 'Jordan', alguien a quien el usuario conoce a través de un amigo en común. El objetivo es simplemente tener una conversación agradable durante unos pocos intercambios.",
        character_instructions: "Sé un/a compañero/a de chat amigable y participativo/a. Habla sobre pasatiempos, planes de fin de semana u otros temas comunes.",
    },
];

impl Scenario {
    /// Look up a scenario by key, falling back to the general scenario for
    /// anything the catalog does not know.
    pub fn for_key(key: &str) -> &'static Scenario {
        SCENARIOS
            .iter()
            .find(|s| s.key == key)
            .unwrap_or_else(|| Scenario::general())
    }

    pub fn general() -> &'static Scenario {
        &SCENARIOS[4]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_key() {
        assert_eq!(Scenario::for_key("social_anxiety").character_name, "Alex");
    }

    #[test]
    fn test_unknown_key_falls_back_to_general() {
        assert_eq!(Scenario::for_key("mindfulness").key, "general");
    }
}
