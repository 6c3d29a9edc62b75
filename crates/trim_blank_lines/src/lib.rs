/// Drops leading and trailing whitespace-only lines from a line sequence.
/// Interior lines keep their order and content.
pub fn trim_blank_lines(lines: &[String]) -> Vec<String> {
    let first = lines.iter().position(|line| !line.trim().is_empty());
    let last = lines.iter().rposition(|line| !line.trim().is_empty());
    match (first, last) {
        (Some(first), Some(last)) => lines[first..=last].to_vec(),
        _ => Vec::new(),
    }
}
