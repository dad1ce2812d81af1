//! Implementation of the `synk init` command.

use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Config;

#[derive(Debug, serde::Serialize)]
pub struct InitOutput {
    pub success: bool,
    pub message: String,
    pub config_path: String,
}

impl CommandOutput for InitOutput {
    fn to_human(&self) -> String {
        self.message.clone()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(force: bool, json_mode: bool) -> Result<()> {
    let config_path = Path::new(".synk/config.yaml");

    if config_path.exists() && !force {
        output(
            &InitOutput {
                success: false,
                message: "Already initialized. Use --force to overwrite the configuration."
                    .to_string(),
                config_path: config_path.display().to_string(),
            },
            json_mode,
        );
        return Ok(());
    }

    tokio::fs::create_dir_all(".synk")
        .await
        .context("Failed to create the .synk directory")?;
    let yaml = serde_yaml::to_string(&Config::default())
        .context("Failed to serialize the default configuration")?;
    tokio::fs::write(config_path, yaml)
        .await
        .context("Failed to write .synk/config.yaml")?;

    output(
        &InitOutput {
            success: true,
            message: "Initialized .synk/config.yaml with defaults. Set oracle.api_key (or GEMINI_API_KEY) before running."
                .to_string(),
            config_path: config_path.display().to_string(),
        },
        json_mode,
    );
    Ok(())
}
