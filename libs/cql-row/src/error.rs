#[derive(Debug, thiserror::Error)]
pub enum RowError {
    #[error("misaligned result row: {names} column names, {values} column values")]
    LengthMismatch { names: usize, values: usize },

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl RowError {
    /// Add context to the error.
    ///
    /// Context is prepended to `Config` messages. Other variants carry
    /// structured data and are returned unchanged.
    pub fn with_context(self, ctx: impl std::fmt::Display) -> Self {
        match self {
            RowError::Config(msg) => RowError::Config(format!("{ctx}: {msg}")),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_mismatch_message() {
        let err = RowError::LengthMismatch {
            names: 3,
            values: 2,
        };
        assert_eq!(err.to_string(), "misaligned result row: 3 column names, 2 column values");
    }

    #[test]
    fn context_prepended_to_config() {
        let err = RowError::Config("bad key".into()).with_context("row.toml");
        assert_eq!(err.to_string(), "config error: row.toml: bad key");
    }

    #[test]
    fn context_ignored_for_structured_variants() {
        let err = RowError::LengthMismatch {
            names: 1,
            values: 0,
        }
        .with_context("ignored");
        let RowError::LengthMismatch { names, values } = err else {
            panic!("unexpected error: {err:?}");
        };
        assert_eq!((names, values), (1, 0));
    }
}
