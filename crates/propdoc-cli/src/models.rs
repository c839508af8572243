use crate::Config;

use anyhow::Result;
use clap::Parser;
use console::style;
use propdoc_core::{fs::FileSystem, model::ModelRegistry};

#[derive(Parser, Debug)]
pub struct ModelsCommand {}

impl ModelsCommand {
    pub(crate) fn run(self, config: &Config, fs: &dyn FileSystem) -> Result<()> {
        println!();
        println!("  {}", style("Models").cyan().bold().underlined());
        println!();

        let registry = ModelRegistry::new(&config.project, fs);
        let models = registry.list()?;
        let width = models.iter().map(String::len).max().unwrap_or(0);

        for name in &models {
            let (class, table) = match registry.resolve(name) {
                Ok(class) => {
                    let table = class
                        .table_name(fs)
                        .unwrap_or_else(|_| "?".to_string());
                    (class.name, table)
                }
                Err(_) => ("?".to_string(), "?".to_string()),
            };

            println!(
                "  {}  {}  {}",
                style(format!("{name:<width$}")).bold(),
                class,
                style(table).dim()
            );
        }

        println!();
        Ok(())
    }
}
