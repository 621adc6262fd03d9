use std::sync::LazyLock;

use regex::Regex;

/// `ttl(<col>)` / `writetime(<col>)`, anchored on both ends.
static PSEUDO_COLUMN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A(ttl|writetime)\((.+)\)\z").expect("static pattern"));

/// Classification of a raw result column name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind<'a> {
    /// Regular column, stored under its own name.
    Ordinary(&'a str),
    /// `ttl(<col>)`: time-to-live of `<col>` in seconds.
    Ttl(&'a str),
    /// `writetime(<col>)`: write timestamp of `<col>`.
    Writetime(&'a str),
}

impl<'a> ColumnKind<'a> {
    pub fn classify(name: &'a str) -> Self {
        let Some(caps) = PSEUDO_COLUMN.captures(name) else {
            return ColumnKind::Ordinary(name);
        };
        let (Some(prefix), Some(inner)) = (caps.get(1), caps.get(2)) else {
            return ColumnKind::Ordinary(name);
        };
        match prefix.as_str() {
            "ttl" => ColumnKind::Ttl(inner.as_str()),
            _ => ColumnKind::Writetime(inner.as_str()),
        }
    }

    pub fn is_metadata(&self) -> bool {
        !matches!(self, ColumnKind::Ordinary(_))
    }
}

/// Whether an ordinary column name looks like a botched pseudo-column,
/// e.g. `ttl(email` or `writetime()`.
pub fn resembles_pseudo_column(name: &str) -> bool {
    name.starts_with("ttl(") || name.starts_with("writetime(")
}
