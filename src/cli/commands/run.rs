//! Implementation of the `synk run` command: the interactive session.
//!
//! Drives the page router one step at a time. Onboarding pages loop until
//! their prerequisite is met; the main loop renders the current tab, handles
//! its interaction, then reads a navigation command.

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Local;
use console::{style, Term};
use tracing::debug;

use crate::cli::commands::help_lines;
use crate::cli::output::{dim, error_line, notice_line, oracle_spinner, section_title, success_line};
use crate::domain::errors::DomainError;
use crate::domain::models::{
    recommended_profile_id, BaselineCheckin, ChatMessage, ChatRole, ChatbotProfile, Config,
    CredentialsConfig, DailyCheckin, MainChallenge, Scenario, PROFILES, SCENARIOS,
};
use crate::domain::ports::Oracle;
use crate::infrastructure::oracle::GeminiClient;
use crate::services::{
    gates, resolve_page, tab_enabled, AnswerOutcome, ChatSessionManager, CheckinService,
    DiagnosisService, Page, SendOutcome, StateService, SurveyWalker, Tab, AUTO_ADVANCE_DELAY,
};

pub async fn execute(config: &Config) -> Result<()> {
    let state = super::open_state(config).await?;
    let oracle: Arc<dyn Oracle> = Arc::new(GeminiClient::new(config.oracle.clone())?);

    let mut session = RunSession {
        term: Term::stdout(),
        state,
        checkins: CheckinService::new(oracle.clone()),
        diagnosis: DiagnosisService::new(oracle.clone()),
        chats: ChatSessionManager::new(oracle),
        credentials: config.credentials.clone(),
        authenticated: false,
        daily_skipped_today: false,
    };
    session.run().await
}

/// Navigation commands available at the tab bar.
enum NavCommand {
    Go(Tab),
    ToggleIa,
    Ayuda,
    Salir,
}

struct RunSession {
    term: Term,
    state: StateService,
    checkins: CheckinService,
    diagnosis: DiagnosisService,
    chats: ChatSessionManager,
    credentials: CredentialsConfig,
    authenticated: bool,
    /// The user dismissed today's daily prompt for the rest of this run.
    daily_skipped_today: bool,
}

impl RunSession {
    async fn run(&mut self) -> Result<()> {
        loop {
            let page = resolve_page(self.authenticated, self.state.state());
            debug!(?page, "router resolved page");
            match page {
                Page::Login => self.login_page()?,
                Page::Nickname => self.nickname_page().await?,
                Page::Consent => self.consent_page().await?,
                Page::Baseline => self.baseline_page().await?,
                Page::Main => return self.main_loop().await,
            }
        }
    }

    fn read_line(&self, prompt: &str) -> Result<String> {
        self.term
            .write_str(prompt)
            .context("Failed to write to the terminal")?;
        let line = self
            .term
            .read_line()
            .context("Failed to read from the terminal")?;
        Ok(line.trim().to_string())
    }

    fn println(&self, text: &str) -> Result<()> {
        self.term
            .write_line(text)
            .context("Failed to write to the terminal")
    }

    // --- onboarding pages ---------------------------------------------------

    fn login_page(&mut self) -> Result<()> {
        self.println(&section_title("Bienvenido/a a Synk"))?;
        self.println(&dim("Inicia sesión para continuar."))?;

        let username = self.read_line("Nombre de usuario: ")?;
        self.term
            .write_str("Contraseña: ")
            .context("Failed to write to the terminal")?;
        let password = self
            .term
            .read_secure_line()
            .context("Failed to read the password")?;

        if self.credentials.matches(&username, &password) {
            self.authenticated = true;
        } else {
            self.println(&error_line(&DomainError::InvalidCredentials.to_string()))?;
        }
        Ok(())
    }

    async fn nickname_page(&mut self) -> Result<()> {
        self.println(&section_title("¿Cómo quieres que te llamemos?"))?;
        let nickname = self.read_line("Escribe tu apodo aquí: ")?;
        if let Err(err) = self.state.set_nickname(&nickname).await {
            self.println(&error_line(&err.to_string()))?;
        }
        Ok(())
    }

    async fn consent_page(&mut self) -> Result<()> {
        self.println(&section_title("¿Qué es Synk?"))?;
        self.println("Synk es tu compañero de IA personal para el bienestar social. Te ayudamos a comprenderte mejor, practicar conversaciones y construir confianza en un espacio seguro y sin juicios.")?;
        self.println(&format!("\n{}", section_title("Tu Privacidad es Primero")))?;
        self.println("Operamos de forma anónima. No pedimos tu nombre real. Todas las conversaciones son privadas y los datos que recopilamos se utilizan únicamente para personalizar tu experiencia en la aplicación.")?;
        self.println(&format!("\n{}", section_title("Tu Acompañante de IA")))?;
        self.println("Nuestra IA está aquí para guiarte. Aprenderá contigo para ofrecerte prácticas personalizadas y perspectivas útiles. Recuerda, Synk es una herramienta de apoyo, no un reemplazo de la terapia.")?;

        let answer =
            self.read_line("\n¿Aceptas los Términos de Servicio y la Política de Privacidad? (si/no): ")?;
        if matches!(answer.to_lowercase().as_str(), "si" | "sí" | "s") {
            self.state.grant_consent().await;
            self.println(&success_line("Comenzando tu viaje."))?;
        } else {
            self.println(&notice_line(
                "Necesitamos tu consentimiento para continuar.",
            ))?;
        }
        Ok(())
    }

    async fn baseline_page(&mut self) -> Result<()> {
        self.println(&section_title("Un rápido chequeo inicial"))?;
        self.println(&dim(
            "Escribe 'demo' en cualquier momento para cargar datos de ejemplo y explorar la aplicación.",
        ))?;

        let spinner = oracle_spinner("Preparando tu chequeo...");
        let (question, notice) = self.checkins.baseline_question().await;
        spinner.finish_and_clear();
        if let Some(notice) = notice {
            self.println(&notice_line(notice.message))?;
        }

        self.println(&format!("\n{question}"))?;
        self.println(&dim("1 = Muy mal · 5 = Muy bien"))?;

        let score = loop {
            let input = self.read_line("Tu puntuación (1-5): ")?;
            if input.eq_ignore_ascii_case("demo") {
                self.state.load_demo().await;
                self.println(&success_line("Datos de ejemplo cargados."))?;
                return Ok(());
            }
            match input.parse::<u8>() {
                Ok(score @ 1..=5) => break score,
                _ => self.println(&error_line("Elige un número del 1 al 5."))?,
            }
        };

        let note = self.read_line("¿Algo más que quieras añadir? (Opcional): ")?;
        self.state
            .record_baseline(BaselineCheckin::new(question, score, note))
            .await;
        self.println(&success_line("Chequeo inicial guardado."))?;
        Ok(())
    }

    // --- main loop ----------------------------------------------------------

    async fn main_loop(&mut self) -> Result<()> {
        let mut tab = Tab::Chequeo;
        loop {
            let today = Local::now().date_naive();
            if tab != Tab::Taller
                && !self.daily_skipped_today
                && gates::daily_checkin_due(self.state.state(), today)
            {
                self.daily_checkin_page().await?;
            }

            match tab {
                Tab::Chequeo => self.chequeo_tab().await?,
                Tab::Practica => self.practica_tab().await?,
                Tab::Conectar => self.conectar_tab().await?,
                Tab::Taller => self.taller_tab()?,
            }

            match self.read_nav_command(tab)? {
                NavCommand::Go(next) => {
                    if tab_enabled(next, self.state.state()) {
                        tab = next;
                    } else {
                        self.println(&error_line(locked_tab_message(next)))?;
                    }
                }
                NavCommand::ToggleIa => {
                    let opted_in = !self.state.state().passive_ai_opt_in;
                    self.state.set_passive_ai_opt_in(opted_in).await;
                    let status = if opted_in { "activada" } else { "desactivada" };
                    self.println(&success_line(&format!("IA pasiva {status}.")))?;
                }
                NavCommand::Ayuda => help_lines::execute()?,
                NavCommand::Salir => {
                    self.println(&dim("Hasta pronto. Tu progreso queda guardado."))?;
                    return Ok(());
                }
            }
        }
    }

    fn read_nav_command(&self, current: Tab) -> Result<NavCommand> {
        let state = self.state.state();
        let mut bar = Vec::new();
        for tab in Tab::ALL {
            let label = if tab == current {
                style(tab.label()).bold().cyan().to_string()
            } else if tab_enabled(tab, state) {
                tab.label().to_string()
            } else {
                format!("{} 🔒", style(tab.label()).dim())
            };
            bar.push(label);
        }
        self.println(&format!("\n[{}]", bar.join(" | ")))?;

        loop {
            let input = self
                .read_line("synk> ")?
                .to_lowercase()
                .replace('á', "a")
                .replace('é', "e");
            match input.as_str() {
                "chequeo" => return Ok(NavCommand::Go(Tab::Chequeo)),
                "practica" => return Ok(NavCommand::Go(Tab::Practica)),
                "conectar" => return Ok(NavCommand::Go(Tab::Conectar)),
                "taller" => return Ok(NavCommand::Go(Tab::Taller)),
                "ia" => return Ok(NavCommand::ToggleIa),
                "ayuda" => return Ok(NavCommand::Ayuda),
                "salir" => return Ok(NavCommand::Salir),
                "" => continue,
                _ => self.println(&dim(
                    "Comandos: chequeo, practica, conectar, taller, ia, ayuda, salir",
                ))?,
            }
        }
    }

    // --- daily check-in -----------------------------------------------------

    async fn daily_checkin_page(&mut self) -> Result<()> {
        let spinner = oracle_spinner("Cargando tu chequeo diario...");
        let (daily, notice) = self.checkins.daily_question().await;
        spinner.finish_and_clear();
        if let Some(notice) = notice {
            self.println(&notice_line(notice.message))?;
        }

        self.println(&format!("\n{}", section_title(&daily.question)))?;
        for (index, label) in daily.answers.iter().enumerate() {
            self.println(&format!("  {}. {label}", index + 1))?;
        }
        self.println(&dim("Escribe 'saltar' para dejarlo por ahora."))?;

        let label = loop {
            let input = self.read_line("> ")?;
            if input.eq_ignore_ascii_case("saltar") {
                self.daily_skipped_today = true;
                return Ok(());
            }
            match input.parse::<usize>() {
                Ok(n) if (1..=daily.answers.len()).contains(&n) => {
                    break daily.answers[n - 1].clone()
                }
                _ => self.println(&error_line("Elige una de las opciones."))?,
            }
        };

        let note = self.read_line("Añadir una nota (opcional): ")?;
        self.state
            .record_daily_checkin(DailyCheckin::new(daily.question, label, note))
            .await;
        self.println(&success_line("¡Gracias por tu chequeo de hoy! Vuelve mañana."))?;
        Ok(())
    }

    // --- Chequeo tab ----------------------------------------------------------

    async fn chequeo_tab(&mut self) -> Result<()> {
        if self.state.state().diagnosis.is_some() {
            self.show_profile()?;
        } else {
            self.survey_page().await?;
        }
        Ok(())
    }

    fn show_profile(&self) -> Result<()> {
        let state = self.state.state();
        let Some(diagnosis) = &state.diagnosis else {
            return Ok(());
        };
        let nickname = state.nickname.as_deref().unwrap_or("-");

        self.println(&format!(
            "\n{}",
            section_title(&format!("Tu Perfil Synk, {nickname}"))
        ))?;
        self.println(&diagnosis.insight)?;

        self.println(&format!("\n{}", style("Rasgos Clave").bold()))?;
        self.println(&format!("  {}", diagnosis.traits.join(" · ")))?;

        self.println(&format!("\n{}", style("Tu Panorama Social").bold()))?;
        let scores = &diagnosis.scores;
        self.println(&format!("  Energía Social          {:>3.0}", scores.social_energy))?;
        self.println(&format!("  Ansiedad Social         {:>3.0}", scores.social_anxiety))?;
        self.println(&format!("  Comunicación            {:>3.0}", scores.communication_gaps))?;
        self.println(&format!("  Autenticidad/Límites    {:>3.0}", scores.authenticity_boundaries))?;

        self.println(&format!(
            "\nÁrea de enfoque principal: {}",
            style(diagnosis.main_challenge.label()).bold()
        ))?;

        let passive = if state.passive_ai_opt_in { "activada" } else { "desactivada" };
        self.println(&dim(&format!(
            "IA pasiva {passive} (escribe 'ia' para cambiarla). Escribe 'practica' para tu práctica recomendada."
        )))?;
        Ok(())
    }

    async fn survey_page(&mut self) -> Result<()> {
        self.println(&section_title("Chequeo Principal"))?;
        self.println(&dim("Responde estas preguntas para personalizar tu experiencia."))?;

        let mut walker = SurveyWalker::new();
        loop {
            let question = walker.current_question();
            let (position, total) = walker.position();
            self.println(&format!("\nPregunta {position} de {total}"))?;
            self.println(&style(question.text).bold().to_string())?;
            if let Some(helper) = question.helper_text {
                self.println(&dim(helper))?;
            }
            for (index, option) in question.options.iter().enumerate() {
                let marker = if walker.answer_for_current() == Some(*option) {
                    "●"
                } else {
                    " "
                };
                self.println(&format!(" {marker} {}. {option}", index + 1))?;
            }

            let mut hints = vec!["número para responder"];
            if !walker.is_first() {
                hints.push("'atras'");
            }
            if walker.ready_to_submit() {
                hints.push("'perfil' para obtener tu perfil");
            }
            self.println(&dim(&format!("({})", hints.join(", "))))?;

            let input = self.read_line("> ")?;
            let normalized = input.to_lowercase().replace('á', "a");
            match normalized.as_str() {
                "atras" if !walker.is_first() => walker.back(),
                "perfil" if walker.ready_to_submit() => {
                    if self.request_diagnosis(&walker).await? {
                        return Ok(());
                    }
                    // Oracle failed and the user declined the fallbacks:
                    // stay on the final question.
                }
                _ => match normalized.parse::<usize>() {
                    Ok(n) if (1..=question.options.len()).contains(&n) => {
                        let option = question.options[n - 1];
                        match walker.select_answer(option) {
                            AnswerOutcome::AdvancesAfterDelay => {
                                tokio::time::sleep(AUTO_ADVANCE_DELAY).await;
                                walker.advance();
                            }
                            AnswerOutcome::AwaitingSubmit => {
                                self.println(&dim(
                                    "Última pregunta respondida. Escribe 'perfil' para continuar.",
                                ))?;
                            }
                        }
                    }
                    _ => self.println(&error_line("Entrada no válida."))?,
                },
            }
        }
    }

    /// Submit the survey. Returns true when a diagnosis (or the demo) ended
    /// the intake; false keeps the user on the questionnaire.
    async fn request_diagnosis(&mut self, walker: &SurveyWalker) -> Result<bool> {
        loop {
            let state = self.state.state();
            let nickname = state.nickname.clone().unwrap_or_default();
            // The router only reaches the survey with a baseline in place.
            let Some(baseline) = state.baseline.clone() else {
                return Ok(false);
            };

            let spinner = oracle_spinner("Creando tu perfil...");
            let result = self
                .diagnosis
                .request_diagnosis(&nickname, &baseline, walker.answers())
                .await;
            spinner.finish_and_clear();

            match result {
                Ok(diagnosis) => {
                    self.state.set_diagnosis(diagnosis).await;
                    self.println(&success_line("Tu perfil está listo."))?;
                    self.show_profile()?;
                    return Ok(true);
                }
                Err(err) => {
                    let message = if err.is_rate_limited() {
                        "Se ha excedido el límite de solicitudes a la IA. No se pudo generar tu perfil. Puedes esperar unos minutos e 'Intentar de Nuevo', o 'Cargar Demo' para explorar la aplicación con datos de ejemplo."
                    } else {
                        "Lo siento, no pude generar un diagnóstico en este momento. Por favor, inténtalo de nuevo más tarde."
                    };
                    self.println(&error_line(message))?;

                    loop {
                        let choice = self
                            .read_line("¿Qué quieres hacer? (reintentar/demo/cancelar): ")?
                            .to_lowercase();
                        match choice.as_str() {
                            "reintentar" => break,
                            "demo" => {
                                self.state.load_demo().await;
                                self.println(&success_line("Datos de ejemplo cargados."))?;
                                return Ok(true);
                            }
                            "cancelar" => return Ok(false),
                            _ => self.println(&dim("Opciones: reintentar, demo, cancelar"))?,
                        }
                    }
                }
            }
        }
    }

    // --- Práctica tab ---------------------------------------------------------

    async fn practica_tab(&mut self) -> Result<()> {
        let state = self.state.state();
        if !gates::practice_unlocked(state.diagnosis.as_ref()) {
            self.println(&section_title("Práctica Bloqueada"))?;
            self.println(
                "Por favor, completa tu chequeo inicial en la pestaña \"Chequeo\" para desbloquear el entrenamiento personalizado con IA.",
            )?;
            return Ok(());
        }

        loop {
            let Some(scenario) = self.choose_scenario()? else {
                return Ok(());
            };
            let completed = self.practice_chat(scenario).await?;
            if !completed {
                return Ok(());
            }
            // Completed sessions offer a fresh scenario selection.
        }
    }

    fn choose_scenario(&self) -> Result<Option<&'static Scenario>> {
        let state = self.state.state();
        let successes = gates::successful_practices(&state.practice_history);
        let recommended = state
            .diagnosis
            .as_ref()
            .map(|d| Scenario::for_key(&d.recommended_scenario).key);

        self.println(&format!("\n{}", section_title("Práctica")))?;
        self.println(&dim(&format!(
            "Completa 3 prácticas para desbloquear la siguiente fase. ({successes}/{})",
            gates::CONNECT_UNLOCK_THRESHOLD
        )))?;
        for (index, scenario) in SCENARIOS.iter().enumerate() {
            let marker = if Some(scenario.key) == recommended {
                style(" (recomendado)").green().to_string()
            } else {
                String::new()
            };
            self.println(&format!(
                "  {}. {} — {}{marker}",
                index + 1,
                scenario.title,
                scenario.module
            ))?;
        }
        self.println(&dim("Elige un escenario (número, vacío = recomendado, 'volver')."))?;

        loop {
            let input = self.read_line("> ")?;
            if input.eq_ignore_ascii_case("volver") {
                return Ok(None);
            }
            if input.is_empty() {
                if let Some(key) = recommended {
                    return Ok(Some(Scenario::for_key(key)));
                }
            }
            match input.parse::<usize>() {
                Ok(n) if (1..=SCENARIOS.len()).contains(&n) => return Ok(Some(&SCENARIOS[n - 1])),
                _ => self.println(&error_line("Elige un escenario de la lista."))?,
            }
        }
    }

    /// Run one practice chat. Returns true when the scenario completed (the
    /// caller then offers a new selection), false when the user left.
    async fn practice_chat(&mut self, scenario: &'static Scenario) -> Result<bool> {
        self.println(&format!(
            "\n{}",
            section_title(&format!("Práctica: {}", scenario.title))
        ))?;

        let nickname = self.state.state().nickname.clone().unwrap_or_default();
        let main_challenge: Option<MainChallenge> =
            self.state.state().diagnosis.as_ref().map(|d| d.main_challenge);

        let spinner = oracle_spinner("El Coach está escribiendo...");
        let mut chat = self
            .chats
            .open_practice(&mut self.state, &nickname, main_challenge, scenario)
            .await;
        spinner.finish_and_clear();

        if chat.resumed() {
            self.println(&dim("Continuando tu sesión guardada."))?;
        }
        self.render_transcript(chat.transcript(), "Coach")?;
        self.println(&dim("Escribe tu mensaje ('fin' termina y descarta, 'volver' guarda y sale)."))?;

        loop {
            let input = self.read_line("Tú: ")?;
            if input.is_empty() {
                continue;
            }
            if input.eq_ignore_ascii_case("fin") {
                self.chats.end(&mut self.state, &mut chat).await;
                self.println(&dim("Práctica finalizada. No se registró la sesión."))?;
                return Ok(false);
            }
            if input.eq_ignore_ascii_case("volver") {
                self.println(&dim("Sesión guardada. Puedes retomarla cuando quieras."))?;
                return Ok(false);
            }

            let spinner = oracle_spinner("El Coach está escribiendo...");
            let outcome = self.chats.send(&mut self.state, &mut chat, &input).await;
            spinner.finish_and_clear();

            if let Some(last) = chat.transcript().last() {
                self.render_message(last, "Coach")?;
            }
            if matches!(outcome, SendOutcome::Completed) {
                self.println(&success_line(
                    "¡Práctica Completada! Has terminado este módulo con éxito. ¿Listo/a para otra ronda?",
                ))?;
                return Ok(true);
            }
        }
    }

    // --- Conectar tab -----------------------------------------------------------

    async fn conectar_tab(&mut self) -> Result<()> {
        let state = self.state.state();
        if !gates::connect_unlocked(state.diagnosis.as_ref(), &state.practice_history) {
            self.println(&section_title("Página Bloqueada"))?;
            self.println(
                "Completa tu chequeo y 3 sesiones de práctica para desbloquear esta sección y conocer a nuestros perfiles de IA.",
            )?;
            return Ok(());
        }

        let score = gates::compatibility_score(state.diagnosis.as_ref());
        let recommended = recommended_profile_id(state.diagnosis.as_ref());

        self.println(&format!("\n{}", section_title("Conecta con Perfiles")))?;
        self.println(&format!(
            "Tu puntaje de compatibilidad es de {}%. ¡Felicidades! Elige un perfil para comenzar.",
            style(score).green().bold()
        ))?;
        for (index, profile) in PROFILES.iter().enumerate() {
            let marker = if Some(profile.id) == recommended {
                style(" (recomendado)").green().to_string()
            } else {
                String::new()
            };
            self.println(&format!(
                "  {}. {} — {}{marker}",
                index + 1,
                profile.name,
                profile.personality.join(", ")
            ))?;
            self.println(&dim(&format!("     {}", profile.bio)))?;
        }
        self.println(&dim("Elige un perfil (número) o 'volver'."))?;

        let profile = loop {
            let input = self.read_line("> ")?;
            if input.eq_ignore_ascii_case("volver") {
                return Ok(());
            }
            match input.parse::<usize>() {
                Ok(n) if (1..=PROFILES.len()).contains(&n) => break &PROFILES[n - 1],
                _ => self.println(&error_line("Elige un perfil de la lista."))?,
            }
        };

        self.connect_chat(profile).await
    }

    async fn connect_chat(&mut self, profile: &'static ChatbotProfile) -> Result<()> {
        let nickname = self.state.state().nickname.clone().unwrap_or_default();

        let spinner = oracle_spinner(format!("{} está escribiendo...", profile.name));
        let mut chat = self
            .chats
            .open_connect(&mut self.state, &nickname, profile)
            .await;
        spinner.finish_and_clear();

        if chat.resumed() {
            self.println(&dim("Continuando tu conversación guardada."))?;
        }
        self.render_transcript(chat.transcript(), profile.name)?;
        self.println(&dim(&format!(
            "Habla con {} ('volver' guarda y sale).",
            profile.name
        )))?;

        loop {
            let input = self.read_line("Tú: ")?;
            if input.is_empty() {
                continue;
            }
            if input.eq_ignore_ascii_case("volver") {
                self.println(&dim("Conversación guardada."))?;
                return Ok(());
            }

            let spinner = oracle_spinner(format!("{} está escribiendo...", profile.name));
            self.chats.send(&mut self.state, &mut chat, &input).await;
            spinner.finish_and_clear();

            if let Some(last) = chat.transcript().last() {
                self.render_message(last, profile.name)?;
            }
        }
    }

    // --- Taller tab -------------------------------------------------------------

    fn taller_tab(&self) -> Result<()> {
        let state = self.state.state();
        let nickname = state.nickname.as_deref().unwrap_or("-");

        self.println(&format!("\n{}", section_title("Taller")))?;
        if gates::workshop_recommended(state.baseline.as_ref(), &state.daily_checkins) {
            self.println(&notice_line(
                "Basado en tus chequeos, creemos que esta sección te hará especialmente bien.",
            ))?;
        }
        self.println(&format!(
            "¡Hola, {nickname}! Estamos trabajando en nuevas y emocionantes herramientas para esta sección. Vuelve pronto para descubrir ejercicios guiados y talleres interactivos. ¡Gracias por tu paciencia!"
        ))?;
        Ok(())
    }

    // --- rendering --------------------------------------------------------------

    fn render_transcript(&self, transcript: &[ChatMessage], model_name: &str) -> Result<()> {
        for message in transcript {
            self.render_message(message, model_name)?;
        }
        Ok(())
    }

    fn render_message(&self, message: &ChatMessage, model_name: &str) -> Result<()> {
        match message.role {
            ChatRole::User => self.println(&format!("{} {}", style("Tú:").bold(), message.content)),
            ChatRole::Model => self.println(&format!(
                "{} {}",
                style(format!("{model_name}:")).cyan().bold(),
                message.content
            )),
            ChatRole::Error => self.println(&error_line(&message.content)),
        }
    }
}

fn locked_tab_message(tab: Tab) -> &'static str {
    match tab {
        Tab::Practica => {
            "Práctica está bloqueada: completa tu chequeo en la pestaña Chequeo."
        }
        Tab::Conectar => {
            "Conectar está bloqueado: necesitas tu diagnóstico y 3 prácticas exitosas."
        }
        Tab::Chequeo | Tab::Taller => "Esta pestaña siempre está disponible.",
    }
}
