mod config;
mod models;
mod pint;
mod prompt;
mod properties;

pub use config::*;
pub use models::ModelsCommand;
pub use pint::Pint;
pub use prompt::{dialoguer_theme, TerminalChooser};
pub use properties::PropertiesCommand;

use anyhow::Result;
use clap::Parser;
use propdoc_core::{
    fs::{FileSystem, OsFileSystem},
    Chooser,
};
use std::path::PathBuf;

/// Propdoc CLI library for building custom command-line tools
pub struct PropdocCli {
    config: Option<Config>,
    fs: Box<dyn FileSystem>,
    chooser: Box<dyn Chooser>,
}

impl Default for PropdocCli {
    fn default() -> Self {
        Self::new()
    }
}

impl PropdocCli {
    /// Create a new PropdocCli working on the host file system. The
    /// configuration is discovered from the project root at run time.
    pub fn new() -> Self {
        Self {
            config: None,
            fs: Box::new(OsFileSystem),
            chooser: Box::new(TerminalChooser),
        }
    }

    /// Use a fixed configuration instead of discovering `propdoc.toml`
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Use another file system, e.g. an in-memory one
    pub fn with_file_system(mut self, fs: impl FileSystem + 'static) -> Self {
        self.fs = Box::new(fs);
        self
    }

    /// Use another way of picking a model when none is named
    pub fn with_chooser(mut self, chooser: impl Chooser + 'static) -> Self {
        self.chooser = Box::new(chooser);
        self
    }

    /// Parse and execute CLI commands from command-line arguments
    pub fn parse_and_run(&self) -> Result<()> {
        let cli = Cli::parse();
        self.run(cli)
    }

    /// Parse and execute CLI commands from an iterator of arguments
    pub fn parse_from<I, T>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args)?;
        self.run(cli)
    }

    pub fn run(&self, cli: Cli) -> Result<()> {
        let config = self.config(&cli)?;

        match cli.command {
            Command::Properties(cmd) => cmd.run(&config, self.fs.as_ref(), self.chooser.as_ref()),
            Command::Models(cmd) => cmd.run(&config, self.fs.as_ref()),
        }
    }

    fn config(&self, cli: &Cli) -> Result<Config> {
        let mut config = match &self.config {
            Some(config) => config.clone(),
            None => {
                let root = match &cli.root {
                    Some(root) => root.clone(),
                    None => std::env::current_dir()?,
                };
                Config::discover(root, cli.config.as_deref())?
            }
        };

        if let Some(root) = &cli.root {
            config.project.root = root.clone();
        }

        Ok(config)
    }
}

/// One-line message for a failed run, including every cause.
pub fn error_message(err: &anyhow::Error) -> String {
    format!("{err:#}")
}

#[derive(Parser, Debug)]
#[command(name = "propdoc")]
#[command(about = "Add @property docblocks to Eloquent models based on their migrations")]
#[command(version)]
pub struct Cli {
    /// Laravel project root (defaults to the current directory)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Config file (defaults to <root>/propdoc.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log more detail to stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// Add properties to a model class based on its migrations
    Properties(PropertiesCommand),

    /// List models with their resolved class and table
    Models(ModelsCommand),
}
