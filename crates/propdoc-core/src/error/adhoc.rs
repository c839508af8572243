/// Free-form error built from a message, for failures without a dedicated kind.
#[derive(Debug)]
pub(super) struct AdhocError {
    message: Box<str>,
}

impl AdhocError {
    pub(super) fn new(message: impl Into<String>) -> Self {
        AdhocError {
            message: message.into().into(),
        }
    }

    pub(super) fn from_args(args: core::fmt::Arguments<'_>) -> Self {
        match args.as_str() {
            Some(s) => AdhocError::new(s),
            None => AdhocError::new(args.to_string()),
        }
    }
}

impl std::error::Error for AdhocError {}

impl core::fmt::Display for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}
