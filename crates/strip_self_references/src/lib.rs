// crates/strip_self_references/src/lib.rs

/// Removes lines belonging to the synchronizer's own definition from a line
/// sequence, so that pointing the tool at its own source file never copies
/// the tool into the destination notebook.
///
/// The scan tracks a single "active exclusion indent" integer:
///   - A line whose trimmed text starts with `definition_marker` begins
///     exclusion at that line's indent width, and is itself dropped.
///   - A non-blank line indented at or below the active exclusion indent
///     ends exclusion.
///   - Outside an excluded block, a line is kept only if it contains none
///     of `reference_tokens`.
///
/// This is a textual heuristic over indentation, not a structural parse;
/// the only structural signal the source format offers here is indent.
pub fn strip_self_references(
    lines: &[String],
    definition_marker: &str,
    reference_tokens: &[&str],
) -> Vec<String> {
    let mut kept = Vec::new();
    let mut take_line = true;
    let mut exclusion_indent = 0;

    for line in lines {
        let indent = indent_width(line);
        if !line.trim().is_empty() && indent <= exclusion_indent {
            take_line = true;
        }
        if line.trim_start().starts_with(definition_marker) {
            exclusion_indent = indent;
            take_line = false;
        }
        if take_line && !reference_tokens.iter().any(|token| line.contains(token)) {
            kept.push(line.clone());
        }
    }
    kept
}

/// Width of the leading whitespace run, counted in characters.
fn indent_width(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}
