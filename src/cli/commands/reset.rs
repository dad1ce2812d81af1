//! Implementation of the `synk reset` command.

use anyhow::{Context, Result};
use console::Term;

use crate::cli::output::{output, success_line, CommandOutput};
use crate::domain::models::Config;

#[derive(Debug, serde::Serialize)]
pub struct ResetOutput {
    pub success: bool,
    pub message: String,
}

impl CommandOutput for ResetOutput {
    fn to_human(&self) -> String {
        success_line(&self.message)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(config: &Config, yes: bool, json_mode: bool) -> Result<()> {
    if !yes {
        let term = Term::stdout();
        term.write_str("Esto borrará todo tu progreso guardado. ¿Continuar? (si/no): ")
            .context("Failed to write to the terminal")?;
        let answer = term.read_line().context("Failed to read confirmation")?;
        if !matches!(answer.trim().to_lowercase().as_str(), "si" | "sí" | "s") {
            println!("Cancelado.");
            return Ok(());
        }
    }

    let mut state_service = super::open_state(config).await?;
    state_service.reset().await;

    output(
        &ResetOutput {
            success: true,
            message: "Todo el estado guardado fue eliminado.".to_string(),
        },
        json_mode,
    );
    Ok(())
}
