use crate::{pint::Pint, Config};

use anyhow::Result;
use clap::Parser;
use console::style;
use propdoc_core::{
    docblock::Placement, fs::FileSystem, Chooser, Docblock, FormatStatus, Synthesizer,
};

#[derive(Parser, Debug)]
pub struct PropertiesCommand {
    /// The name of the model (prompts when omitted)
    model: Option<String>,

    /// Print the docblock instead of writing it
    #[arg(long)]
    dry_run: bool,

    /// Skip running the formatter on the updated file
    #[arg(long)]
    no_format: bool,
}

impl PropertiesCommand {
    pub(crate) fn run(
        self,
        config: &Config,
        fs: &dyn FileSystem,
        chooser: &dyn Chooser,
    ) -> Result<()> {
        println!();
        println!("  {}", style("Model Properties").cyan().bold().underlined());
        println!();

        let pint = Pint::new(&config.project.root, &config.formatter);

        let mut synthesizer = Synthesizer::new(&config.project, fs).dry_run(self.dry_run);
        if config.formatter.enabled && !self.no_format {
            synthesizer = synthesizer.formatter(&pint);
        }

        let model = synthesizer.select_model(self.model.as_deref(), chooser)?;
        println!(
            "  {} Processing model: {}",
            style("→").cyan(),
            style(&model.name).bold()
        );

        let table = synthesizer.table_name(&model)?;
        let migrations = synthesizer.migrations(&table)?;
        println!(
            "  {} Found {} migration file(s) for table {}",
            style("→").cyan(),
            migrations.len(),
            style(&table).bold()
        );
        for migration in &migrations {
            println!(
                "      {}",
                style(config.project.relative(migration).display()).dim()
            );
        }

        let columns = synthesizer.columns(&migrations)?;
        let docblock = Docblock::render(&columns);
        let model_path = config.project.relative(&model.path);

        if synthesizer.is_dry_run() {
            println!();
            println!(
                "  {}",
                style(format!("Docblock for {}:", model_path.display())).dim()
            );
            println!();
            println!("{docblock}");
            println!();
            return Ok(());
        }

        let placement = synthesizer.write(&model, &docblock)?;
        let action = match placement {
            Some(Placement::Replaced) => "Replaced property docblock in",
            Some(Placement::Inserted) | None => "Added property docblock to",
        };
        println!(
            "  {} {}",
            style("✓").green().bold(),
            style(format!(
                "{action} {} ({} columns)",
                model_path.display(),
                columns.len()
            ))
            .dim()
        );

        match synthesizer.format(&model) {
            FormatStatus::Formatted => println!(
                "  {} {}",
                style("✓").green().bold(),
                style("Formatted with the project code style").dim()
            ),
            FormatStatus::Skipped => {}
            FormatStatus::Failed { code, output } => {
                let code = code.map_or_else(|| "none".to_string(), |code| code.to_string());
                println!(
                    "  {} {}",
                    style("⚠").yellow().bold(),
                    style(format!("Pint formatting failed with code {code}.")).yellow()
                );
                for line in output.lines() {
                    println!("      {}", style(line).yellow().dim());
                }
            }
        }

        println!();
        println!(
            "  {}",
            style(format!("Model {} updated successfully.", model.simple_name()))
                .green()
                .bold()
        );
        println!();

        Ok(())
    }
}
