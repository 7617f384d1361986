use crate::UclError;

/// Render an error against the source it came from.
///
/// Position-carrying errors produce the base template
/// `"<message> (строка <L>, столбец <C>)"` and, when line `L` exists in
/// the source, the verbatim source line followed by a caret marker under
/// column `C`. Errors without a position render via `Display` alone.
///
/// # Examples
/// ```
/// use ucl_cfg::{diagnostics, parse};
///
/// let source = "$[ a: 10, ]";
/// let err = parse(source).unwrap_err();
/// let report = diagnostics::render(&err, source);
/// assert!(report.contains("строка 1"));
/// assert!(report.ends_with("^"));
/// ```
pub fn render(error: &UclError, source: &str) -> String {
    let base = error.to_string();
    let Some((line, column)) = error.position() else {
        return base;
    };

    let lines: Vec<&str> = source.lines().collect();
    if line == 0 || line > lines.len() {
        return base;
    }

    let padding = " ".repeat(column.saturating_sub(1));
    format!("{}\n{}\n{}^", base, lines[line - 1], padding)
}
