//! Implementation of the `synk history` command.

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Table};

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{Config, PracticeSession};

#[derive(Debug, serde::Serialize)]
pub struct HistoryOutput {
    pub sessions: Vec<PracticeSession>,
}

impl CommandOutput for HistoryOutput {
    fn to_human(&self) -> String {
        if self.sessions.is_empty() {
            return "Aún no hay sesiones de práctica registradas.".to_string();
        }

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec!["Fecha", "Escenario", "Resultado", "Puntaje"]);
        for session in &self.sessions {
            table.add_row(vec![
                session.timestamp.format("%Y-%m-%d %H:%M").to_string(),
                session.prompt.clone(),
                session.answer.clone(),
                session.score.to_string(),
            ]);
        }
        table.to_string()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(config: &Config, json_mode: bool) -> Result<()> {
    let state_service = super::open_state(config).await?;
    let history = HistoryOutput {
        sessions: state_service.state().practice_history.clone(),
    };
    output(&history, json_mode);
    Ok(())
}
