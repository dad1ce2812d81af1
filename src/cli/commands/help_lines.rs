//! Implementation of the `synk help-lines` command.

use anyhow::Result;
use console::style;

use crate::domain::models::{ContactKind, EMERGENCY_RESOURCES};

/// Print the static emergency directory. Reads nothing and writes nothing.
pub fn execute() -> Result<()> {
    println!("{}", style("Ayuda Inmediata").red().bold());
    println!("{}", style("Si estás pasando por un momento difícil, no estás solo/a.").dim());

    for category in &EMERGENCY_RESOURCES {
        println!("\n{}", style(category.title).bold());
        println!("  {}", style(category.description).dim());
        for resource in category.resources {
            let contact = match resource.kind {
                ContactKind::Call => format!("Llamar: {}", resource.contact),
                ContactKind::WhatsApp => format!("WhatsApp: +{}", resource.contact),
            };
            println!("  • {} — {} ({})", resource.name, contact, resource.info);
        }
    }
    Ok(())
}
