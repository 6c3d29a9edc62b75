// crates/normalize_line_endings/src/lib.rs

/// Splits file content into lines and rewrites every terminator to the
/// canonical CRLF pair, regardless of the original convention (LF, CRLF,
/// or a final line with no terminator at all).
///
/// Notebook cell sources store one terminated string per line, so the
/// output is a vector of lines each ending in `\r\n`.
pub fn normalize_line_endings(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    for raw in content.split_inclusive('\n') {
        let body = raw
            .strip_suffix("\r\n")
            .or_else(|| raw.strip_suffix('\n'))
            .unwrap_or(raw);
        lines.push(format!("{}\r\n", body));
    }
    lines
}
