//! Error rendering using ariadne
//!
//! Dataset parse errors are rendered as annotated source snippets; all other
//! errors are a single `error: ...` line.

use std::io::Write;

use ariadne::{Color, ColorGenerator, Fmt, Label, Report, ReportKind, Source};

use crate::Error;

/// Character set for rendering error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    /// Use Unicode characters for rich visual output.
    #[default]
    Unicode,
    /// Use ASCII-only characters for compatibility.
    Ascii,
}

/// Configuration for error rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig<'a> {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// The filename to display in error messages.
    /// Defaults to "<unknown>" if not provided.
    pub filename: Option<&'a str>,
    /// The character set to use for rendering.
    pub charset: CharSet,
}

impl Default for RenderConfig<'_> {
    fn default() -> Self {
        Self {
            color: true,
            filename: None,
            charset: CharSet::Unicode,
        }
    }
}

/// Render an error to stderr using the default config.
pub fn render_error(error: &Error) {
    render_error_to(error, &mut std::io::stderr(), &RenderConfig::default()).ok();
}

/// Render an error to a writer with the given configuration.
///
/// # Example
/// ```
/// use viewscan::{Dataset, RenderConfig, render_error_to};
///
/// let err = Dataset::from_json("{ nope }").unwrap_err();
/// let mut buf = Vec::new();
/// let config = RenderConfig { color: false, filename: Some("input.json"), ..Default::default() };
/// render_error_to(&err, &mut buf, &config).unwrap();
/// assert!(String::from_utf8_lossy(&buf).contains("input.json"));
/// ```
pub fn render_error_to(
    error: &Error,
    writer: &mut dyn Write,
    config: &RenderConfig,
) -> std::io::Result<()> {
    match error {
        Error::Dataset {
            message,
            text,
            span,
        } => render_snippet(message, text, span.clone(), writer, config),
        other => render_line(&other.to_string(), writer, config),
    }
}

fn render_line(
    message: &str,
    writer: &mut dyn Write,
    config: &RenderConfig,
) -> std::io::Result<()> {
    if config.color {
        writeln!(writer, "{}: {}", "error".fg(Color::Red), message)
    } else {
        writeln!(writer, "error: {}", message)
    }
}

fn render_snippet(
    message: &str,
    text: &str,
    span: std::ops::Range<usize>,
    writer: &mut dyn Write,
    config: &RenderConfig,
) -> std::io::Result<()> {
    let filename = config.filename.unwrap_or("<unknown>");

    let mut colors = ColorGenerator::new();
    colors.next(); // Skip the first color.

    let ariadne_charset = match config.charset {
        CharSet::Unicode => ariadne::CharSet::Unicode,
        CharSet::Ascii => ariadne::CharSet::Ascii,
    };
    let ariadne_config = ariadne::Config::default()
        .with_color(config.color)
        .with_char_set(ariadne_charset)
        .with_index_type(ariadne::IndexType::Byte);

    Report::build(ReportKind::Error, (filename, span.clone()))
        .with_message("invalid dataset")
        .with_config(ariadne_config)
        .with_label(
            Label::new((filename, span))
                .with_message(message)
                .with_color(colors.next()),
        )
        .finish()
        .write((filename, Source::from(text)), &mut *writer)
}
