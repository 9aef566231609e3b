use std::fs;
use std::path::Path;

use crate::errors::{ScanError, ScanResult};
use crate::types::ProbeTarget;

/// Read a newline-delimited list file. Lines are trimmed of surrounding
/// whitespace; empty lines are skipped. An unreadable file is a fatal input
/// error.
pub fn read_list(path: &Path) -> ScanResult<Vec<String>> {
    let contents = fs::read_to_string(path).map_err(|source| ScanError::InputFile {
        path: path.display().to_string(),
        source,
    })?;

    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Resolve targets from either a single URL or a list file. The same cookie
/// applies to every target.
pub fn load_targets(
    url: Option<&str>,
    list: Option<&Path>,
    cookie: Option<&str>,
) -> ScanResult<Vec<ProbeTarget>> {
    let urls = match (url, list) {
        (Some(url), _) => vec![url.trim().to_string()],
        (None, Some(path)) => read_list(path)?,
        (None, None) => Vec::new(),
    };

    Ok(urls
        .into_iter()
        .map(|u| ProbeTarget::new(u, cookie.map(str::to_string)))
        .collect())
}

/// Load the payload list; an empty list is treated as an input error since
/// there would be nothing to probe.
pub fn load_payloads(path: &Path) -> ScanResult<Vec<String>> {
    let payloads = read_list(path)?;
    if payloads.is_empty() {
        return Err(ScanError::EmptyPayloadList {
            path: path.display().to_string(),
        });
    }
    Ok(payloads)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn list_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn lines_are_trimmed_and_empties_skipped() {
        let file = list_file("  ' OR '1'='1  \n\n\t'; WAITFOR DELAY '0:0:5'--\n");
        let lines = read_list(file.path()).unwrap();
        assert_eq!(lines, vec!["' OR '1'='1", "'; WAITFOR DELAY '0:0:5'--"]);
    }

    #[test]
    fn missing_file_is_an_input_error() {
        let err = read_list(Path::new("/nonexistent/payloads.txt")).unwrap_err();
        assert!(matches!(err, ScanError::InputFile { .. }));
    }

    #[test]
    fn empty_payload_file_is_rejected() {
        let file = list_file("\n   \n");
        let err = load_payloads(file.path()).unwrap_err();
        assert!(matches!(err, ScanError::EmptyPayloadList { .. }));
    }

    #[test]
    fn single_url_takes_precedence_over_list() {
        let file = list_file("http://ignored.example\n");
        let targets = load_targets(
            Some(" http://a.example/item?id=1 "),
            Some(file.path()),
            Some("session=abc"),
        )
        .unwrap();
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].base_url, "http://a.example/item?id=1");
        assert_eq!(targets[0].cookie.as_deref(), Some("session=abc"));
    }

    #[test]
    fn list_file_yields_one_target_per_line() {
        let file = list_file("http://a.example/?id=1\nhttp://b.example/?id=2\n");
        let targets = load_targets(None, Some(file.path()), None).unwrap();
        assert_eq!(targets.len(), 2);
        assert!(targets.iter().all(|t| t.cookie.is_none()));
    }
}
