use serde::Deserialize;

use crate::error::RowError;

/// Row construction policy: parsed from TOML.
///
/// Every field has a default, so an empty document is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RowConfig {
    /// Fold column names to lowercase when normalizing keys.
    pub fold_case: bool,

    /// Reject raw rows whose name and value sequences differ in length.
    /// Only consulted by checked construction.
    pub strict_alignment: bool,
}

impl Default for RowConfig {
    fn default() -> Self {
        Self {
            fold_case: true,
            strict_alignment: false,
        }
    }
}

impl RowConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self, RowError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content).map_err(|e| e.with_context(path))
    }

    /// Parse configuration from a TOML string.
    pub fn parse(toml_str: &str) -> Result<Self, RowError> {
        toml::from_str(toml_str).map_err(|e| RowError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = RowConfig::parse("").unwrap();
        assert_eq!(config, RowConfig::default());
        assert!(config.fold_case);
        assert!(!config.strict_alignment);
    }

    #[test]
    fn parse_overrides() {
        let config = RowConfig::parse("fold_case = false\nstrict_alignment = true\n").unwrap();
        assert!(!config.fold_case);
        assert!(config.strict_alignment);
    }

    #[test]
    fn unknown_key_rejected() {
        let err = RowConfig::parse("fold_cases = true").unwrap_err();
        assert!(matches!(err, RowError::Config(_)));
    }

    #[test]
    fn wrong_type_rejected() {
        assert!(RowConfig::parse("fold_case = \"yes\"").is_err());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = RowConfig::load("/nonexistent/cql-row.toml").unwrap_err();
        match err {
            RowError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn load_reads_file_and_tags_parse_errors_with_path() {
        let dir = std::env::temp_dir().join(format!("cql-row-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let good = dir.join("good.toml");
        std::fs::write(&good, "strict_alignment = true\n").unwrap();
        let config = RowConfig::load(good.to_str().unwrap()).unwrap();
        assert!(config.strict_alignment);
        assert!(config.fold_case);

        let bad = dir.join("bad.toml");
        std::fs::write(&bad, "fold_case = 1\n").unwrap();
        let bad_path = bad.to_str().unwrap();
        match RowConfig::load(bad_path).unwrap_err() {
            RowError::Config(msg) => assert!(msg.starts_with(&format!("{bad_path}: "))),
            other => panic!("unexpected error: {other:?}"),
        }

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
