//! Custom validation functions for CLI arguments

use std::fs;
use std::path::PathBuf;

/// Validate that a configuration file path is accessible (exists and is readable)
pub fn validate_config_file_path(path_str: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path_str);

    if !path.exists() {
        return Err(format!("Configuration file does not exist: '{}'", path_str));
    }

    if !path.is_file() {
        return Err(format!("Configuration path is not a file: '{}'", path_str));
    }

    match fs::File::open(&path) {
        Ok(_) => Ok(path),
        Err(e) => Err(format!(
            "Cannot read configuration file '{}': {}",
            path_str, e
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_validate_existing_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logger]").unwrap();
        let path = file.path().to_str().unwrap().to_string();
        assert_eq!(validate_config_file_path(&path).unwrap(), file.path());
    }

    #[test]
    fn test_validate_missing_file() {
        let err = validate_config_file_path("/no/such/file.toml").unwrap_err();
        assert!(err.contains("does not exist"));
    }

    #[test]
    fn test_validate_directory_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = validate_config_file_path(dir.path().to_str().unwrap()).unwrap_err();
        assert!(err.contains("not a file"));
    }
}
