use std::io::Read;
use std::path::PathBuf;

/// Resolves tool input from an inline argument, a file, or stdin.
pub fn read_input(inline: Option<&str>, file: Option<&PathBuf>) -> anyhow::Result<String> {
    match (inline, file) {
        (Some(_), Some(_)) => anyhow::bail!("pass either INPUT or --file, not both"),
        (Some(text), None) => Ok(text.to_string()),
        (None, Some(path)) => {
            tracing::debug!(path = %path.display(), "reading input file");
            std::fs::read_to_string(path)
                .map_err(|e| anyhow::anyhow!("cannot read {}: {}", path.display(), e))
        }
        (None, None) => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_and_file_inputs() {
        assert_eq!(read_input(Some("abc"), None).unwrap(), "abc");

        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("in.txt");
        std::fs::write(&path, "from file").unwrap();
        assert_eq!(read_input(None, Some(&path)).unwrap(), "from file");
    }

    #[test]
    fn both_sources_or_missing_file_fail() {
        let path = PathBuf::from("/definitely/not/here.txt");
        assert!(read_input(Some("x"), Some(&path)).is_err());
        let err = read_input(None, Some(&path)).unwrap_err();
        assert!(err.to_string().contains("cannot read"));
    }
}
