// crates/populate_notebook/src/confirm.rs

use std::io::{self, BufRead, Write};
use std::path::Path;

/// Prints a summary of the pending update and waits for the literal `X`
/// (case-insensitive) on stdin. Any other response declines.
pub fn confirm_action(source: &Path, destination: &Path) -> io::Result<bool> {
    let mut stdout = io::stdout();
    writeln!(stdout, "\n\n================================\n")?;
    writeln!(
        stdout,
        "The contents of the destination notebook will be updated as follows:\n"
    )?;
    writeln!(stdout, "SOURCE:         {}", file_name(source))?;
    writeln!(stdout, "DESTINATION:    {}\n", file_name(destination))?;
    writeln!(stdout, "Type \"X\" to confirm:")?;
    stdout.flush()?;

    let mut response = String::new();
    io::stdin().lock().read_line(&mut response)?;
    Ok(response.trim().eq_ignore_ascii_case("x"))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
