use std::borrow::Borrow;
use std::fmt;

/// Canonical column name.
///
/// All stores of a [`Row`](crate::Row) are keyed by `ColumnKey`, and every
/// lookup normalizes its argument the same way before probing, so `"Email"`,
/// `"EMAIL"` and `"email"` address one entry. Whitespace is significant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[serde(transparent)]
pub struct ColumnKey(String);

impl ColumnKey {
    /// Normalize a raw column name. Case is folded when `fold_case` is set,
    /// otherwise the name is kept as is.
    pub fn normalize(name: impl AsRef<str>, fold_case: bool) -> Self {
        let name = name.as_ref();
        if fold_case {
            Self(name.to_lowercase())
        } else {
            Self(name.to_owned())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ColumnKey {
    fn from(name: &str) -> Self {
        Self::normalize(name, true)
    }
}

impl From<String> for ColumnKey {
    fn from(name: String) -> Self {
        Self::normalize(name, true)
    }
}

impl AsRef<str> for ColumnKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// `String` and `str` hash identically, so maps keyed by `ColumnKey` can be
// probed with an already normalized `&str`.
impl Borrow<str> for ColumnKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_case() {
        assert_eq!(ColumnKey::normalize("Email", true).as_str(), "email");
        assert_eq!(ColumnKey::from("EMAIL"), ColumnKey::from("email".to_string()));
    }

    #[test]
    fn whitespace_is_significant() {
        assert_eq!(ColumnKey::from(" Email ").as_str(), " email ");
        assert_ne!(ColumnKey::from(" id"), ColumnKey::from("id"));
        assert_eq!(ColumnKey::normalize("ttl(email) ", false).as_str(), "ttl(email) ");
    }

    #[test]
    fn preserves_case_when_not_folding() {
        let key = ColumnKey::normalize("Email", false);
        assert_eq!(key.as_str(), "Email");
        assert_ne!(key, ColumnKey::normalize("email", false));
    }

    #[test]
    fn non_ascii_case_folding() {
        assert_eq!(ColumnKey::from("STRAßE").as_str(), "straße");
        assert_eq!(ColumnKey::from("ÉTÉ"), ColumnKey::from("été"));
    }

    #[test]
    fn normalizing_a_key_is_idempotent() {
        let key = ColumnKey::from("Writetime");
        assert_eq!(ColumnKey::normalize(&key, true), key);
        assert_eq!(key.to_string(), "writetime");
    }
}
