//! Implementation of the `synk status` command.

use anyhow::Result;
use chrono::Local;
use comfy_table::{presets::UTF8_FULL, Table};

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Config;
use crate::services::{gates, GateSnapshot};

#[derive(Debug, serde::Serialize)]
pub struct StatusOutput {
    pub nickname: Option<String>,
    pub has_consented: bool,
    pub baseline_recorded: bool,
    pub diagnosis_present: bool,
    pub daily_checkins: usize,
    pub passive_ai_opt_in: bool,
    pub gates: GateSnapshot,
}

impl CommandOutput for StatusOutput {
    fn to_human(&self) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec!["Campo", "Valor"]);
        table.add_row(vec![
            "Apodo".to_string(),
            self.nickname.clone().unwrap_or_else(|| "—".to_string()),
        ]);
        table.add_row(vec!["Consentimiento".to_string(), yes_no(self.has_consented)]);
        table.add_row(vec![
            "Chequeo inicial".to_string(),
            yes_no(self.baseline_recorded),
        ]);
        table.add_row(vec![
            "Diagnóstico".to_string(),
            yes_no(self.diagnosis_present),
        ]);
        table.add_row(vec![
            "Chequeos diarios".to_string(),
            self.daily_checkins.to_string(),
        ]);
        table.add_row(vec![
            "IA pasiva".to_string(),
            yes_no(self.passive_ai_opt_in),
        ]);
        table.add_row(vec![
            "Prácticas exitosas".to_string(),
            format!(
                "{}/{}",
                self.gates.successful_practices,
                gates::CONNECT_UNLOCK_THRESHOLD
            ),
        ]);
        table.add_row(vec![
            "Práctica desbloqueada".to_string(),
            yes_no(self.gates.practice_unlocked),
        ]);
        table.add_row(vec![
            "Conectar desbloqueado".to_string(),
            yes_no(self.gates.connect_unlocked),
        ]);
        table.add_row(vec![
            "Puntaje de compatibilidad".to_string(),
            format!("{}%", self.gates.compatibility_score),
        ]);
        table.add_row(vec![
            "Taller recomendado".to_string(),
            yes_no(self.gates.workshop_recommended),
        ]);
        table.add_row(vec![
            "Chequeo de hoy completado".to_string(),
            yes_no(self.gates.completed_daily_checkin_today),
        ]);
        table.to_string()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

fn yes_no(flag: bool) -> String {
    if flag { "sí" } else { "no" }.to_string()
}

pub async fn execute(config: &Config, json_mode: bool) -> Result<()> {
    let state_service = super::open_state(config).await?;
    let state = state_service.state();

    let status = StatusOutput {
        nickname: state.nickname.clone(),
        has_consented: state.has_consented,
        baseline_recorded: state.baseline.is_some(),
        diagnosis_present: state.diagnosis.is_some(),
        daily_checkins: state.daily_checkins.len(),
        passive_ai_opt_in: state.passive_ai_opt_in,
        gates: GateSnapshot::derive(state, Local::now().date_naive()),
    };

    output(&status, json_mode);
    Ok(())
}
