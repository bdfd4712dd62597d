//! Error handling utilities for the CLI.

use viewscan::{Error, RenderConfig, ScanError, ViewError, render_error_to};

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// An error together with the name of the input it came from, if any.
#[derive(Debug)]
pub struct CliError {
    pub error: Error,
    pub filename: Option<String>,
}

impl CliError {
    pub fn with_filename(error: impl Into<Error>, filename: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            filename: Some(filename.into()),
        }
    }
}

impl From<Error> for CliError {
    fn from(error: Error) -> Self {
        Self {
            error,
            filename: None,
        }
    }
}

impl From<ViewError> for CliError {
    fn from(error: ViewError) -> Self {
        Error::from(error).into()
    }
}

impl From<ScanError> for CliError {
    fn from(error: ScanError) -> Self {
        Error::from(error).into()
    }
}

/// Render an error to stderr and exit with code 1.
pub fn render_and_exit(error: CliError, no_color: bool) -> ! {
    let config = RenderConfig {
        color: !no_color,
        filename: error.filename.as_deref(),
        ..Default::default()
    };
    render_error_to(&error.error, &mut std::io::stderr(), &config).ok();
    std::process::exit(1);
}
