// crates/inject_cell_payload/src/lib.rs

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InjectError {
    #[error("document has no properties.cells list")]
    MissingCells,
}

/// Result of one injection pass over a notebook document.
pub struct Injection {
    /// The rebuilt document. Value-equal to the input when nothing matched.
    pub document: Value,
    /// Whether any cell actually received the payload.
    pub injected: bool,
}

/// Splices `payload` into the marker-delimited region of the first matching
/// cell of a Synapse notebook document.
///
/// The document is expected to carry an ordered cell list at
/// `properties.cells`, each cell holding its text as a list of terminated
/// strings under `source`. Scanning cells in order, the first cell whose
/// source contains a line starting with `open_marker` is rebuilt:
///   - lines up to and including the open-marker line are kept,
///   - the payload is spliced in immediately after it,
///   - original lines are dropped until one starting with `close_marker`,
///     which is kept along with everything after it.
///
/// Later cells are never touched, even if they also contain markers. The
/// input document itself is not mutated; the caller receives a rebuilt copy.
pub fn inject_cell_payload(
    document: &Value,
    payload: &[String],
    open_marker: &str,
    close_marker: &str,
) -> Result<Injection, InjectError> {
    let mut document = document.clone();
    let cells = document
        .pointer_mut("/properties/cells")
        .and_then(Value::as_array_mut)
        .ok_or(InjectError::MissingCells)?;

    let mut injected = false;
    for cell in cells.iter_mut() {
        let source_lines = match cell.get("source").and_then(Value::as_array) {
            Some(lines) => lines,
            None => continue,
        };
        let mut new_source: Vec<Value> = Vec::new();
        let mut take_line = true;
        let mut inserted = false;
        for source_line in source_lines {
            // Non-string entries never match a marker and pass through.
            let text = source_line.as_str().unwrap_or("");
            if text.starts_with(close_marker) {
                take_line = true;
            }
            if take_line {
                new_source.push(source_line.clone());
            }
            if text.starts_with(open_marker) {
                take_line = false;
                new_source.extend(payload.iter().map(|line| Value::String(line.clone())));
                inserted = true;
            }
        }
        if inserted {
            cell["source"] = Value::Array(new_source);
            injected = true;
            break;
        }
    }

    Ok(Injection { document, injected })
}
