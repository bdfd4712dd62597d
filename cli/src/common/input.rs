//! Input utilities.

use std::io::Read;

use viewscan::Error;

/// Read input from a file path or stdin if path is "-".
///
/// Returns the content and a display name for error messages.
pub fn read_input(path: &str) -> Result<(String, String), Error> {
    if is_stdin(path) {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| Error::Input(format!("<stdin>: {}", e)))?;
        Ok((content, "<stdin>".to_string()))
    } else {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Input(format!("{}: {}", path, e)))?;
        Ok((content, path.to_string()))
    }
}

/// Check if the path represents stdin.
pub fn is_stdin(path: &str) -> bool {
    path == "-"
}

/// Parse a comma-separated list of integers. An empty string is an empty list.
pub fn parse_list(text: &str) -> Result<Vec<i64>, Error> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    text.split(',')
        .map(|item| {
            let item = item.trim();
            item.parse::<i64>().map_err(|e| {
                Error::Input(format!("invalid integer `{}` in `{}`: {}", item, text, e))
            })
        })
        .collect()
}
