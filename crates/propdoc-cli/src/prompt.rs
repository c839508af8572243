use console::style;
use dialoguer::{theme::ColorfulTheme, Select};
use propdoc_core::{err, Chooser, Error};

/// Returns the standard theme used for interactive prompts
pub fn dialoguer_theme() -> ColorfulTheme {
    ColorfulTheme {
        active_item_style: console::Style::new().cyan().bold(),
        active_item_prefix: style("❯".to_string()).cyan().bold(),
        inactive_item_prefix: style(" ".to_string()),
        prompt_style: console::Style::new().bold(),
        prompt_prefix: style("?".to_string()).yellow().bold(),
        success_prefix: style("✔".to_string()).green().bold(),
        error_prefix: style("✖".to_string()).red().bold(),
        hint_style: console::Style::new().dim(),
        values_style: console::Style::new().cyan(),
        ..Default::default()
    }
}

/// Asks the user to pick a model in the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalChooser;

impl Chooser for TerminalChooser {
    fn choose(&self, prompt: &str, candidates: &[String]) -> propdoc_core::Result<String> {
        let index = Select::with_theme(&dialoguer_theme())
            .with_prompt(format!("  {prompt}"))
            .items(candidates)
            .default(0)
            .interact()
            .map_err(|e| {
                Error::from(anyhow::Error::new(e)).context(err!("model selection failed"))
            })?;

        Ok(candidates[index].clone())
    }
}
