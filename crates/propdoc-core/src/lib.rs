pub mod config;
pub use config::ProjectConfig;

pub mod docblock;
pub use docblock::Docblock;

mod error;
pub use error::{Error, IntoError};

pub mod format;
pub use format::{FormatStatus, Formatter};

pub mod fs;

pub mod migration;

pub mod model;

pub mod schema;

mod synthesize;
pub use synthesize::{Chooser, Outcome, Synthesizer};

/// A Result type alias that uses propdoc's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
