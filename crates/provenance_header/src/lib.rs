// crates/provenance_header/src/lib.rs

use chrono::{DateTime, SecondsFormat, Utc};
use std::path::Path;

/// Builds the four-line provenance comment block that is stamped ahead of an
/// injected payload: where the code came from, when the update ran, and which
/// script performed it, followed by a bare `#` separator line.
///
/// The timestamp is taken as a parameter rather than sampled here, so callers
/// own the clock.
pub fn build_provenance_header(
    source_path: &Path,
    updated_at: DateTime<Utc>,
    script_url: &str,
) -> Vec<String> {
    vec![
        format!(
            "# Cell source code was retrieved from {}\r\n",
            source_path.display()
        ),
        format!(
            "# Update was conducted at {}\r\n",
            updated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
        ),
        format!("# Update script: {}\r\n", script_url),
        "#\r\n".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::build_provenance_header;
    use chrono::{TimeZone, Utc};
    use std::path::Path;

    #[test]
    fn test_header_has_expected_lines() {
        let when = Utc.with_ymd_and_hms(2024, 5, 17, 9, 30, 0).unwrap();
        let header = build_provenance_header(
            Path::new("/work/etl_job.py"),
            when,
            "https://example.com/repo",
        );
        assert_eq!(
            header,
            vec![
                "# Cell source code was retrieved from /work/etl_job.py\r\n",
                "# Update was conducted at 2024-05-17T09:30:00Z\r\n",
                "# Update script: https://example.com/repo\r\n",
                "#\r\n",
            ]
        );
    }

    #[test]
    fn test_every_header_line_ends_with_crlf() {
        let when = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let header =
            build_provenance_header(Path::new("a.py"), when, "https://example.com/repo");
        assert_eq!(header.len(), 4);
        assert!(header.iter().all(|line| line.ends_with("\r\n")));
    }
}
