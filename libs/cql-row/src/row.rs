use std::ops::Index;

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::config::RowConfig;
use crate::error::RowError;
use crate::key::ColumnKey;
use crate::pseudo::{ColumnKind, resembles_pseudo_column};
use crate::raw::{RawRow, ResultRow};
use crate::value::Value;

/// A result row from a CQL query.
///
/// Acts as an indifferent-access map of column names to values, and also
/// exposes the TTL and writetime of columns whose `ttl(col)` /
/// `writetime(col)` pseudo-columns were selected.
///
/// Iteration follows result column order. A completed row is read-only by
/// convention and can be shared across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    fold_case: bool,
    values: IndexMap<ColumnKey, Value>,
    ttls: IndexMap<ColumnKey, i64>,
    writetimes: IndexMap<ColumnKey, i64>,
}

impl Default for Row {
    fn default() -> Self {
        Self::new()
    }
}

impl Row {
    pub fn new() -> Self {
        Self::with_config(&RowConfig::default())
    }

    /// Empty row following `config`'s key normalization.
    pub fn with_config(config: &RowConfig) -> Self {
        Self {
            fold_case: config.fold_case,
            values: IndexMap::new(),
            ttls: IndexMap::new(),
            writetimes: IndexMap::new(),
        }
    }

    /// Wrap a driver row. `None` in, `None` out.
    pub fn from_result_row<R: ResultRow>(raw: Option<R>) -> Option<Self> {
        Self::from_result_row_with(raw, &RowConfig::default())
    }

    /// Like [`Row::from_result_row`], with an explicit config.
    ///
    /// Misaligned rows are paired positionally: a name without a value gets
    /// [`Value::Null`], surplus values are dropped. `strict_alignment` is not
    /// consulted here, see [`Row::try_from_result_row`].
    pub fn from_result_row_with<R: ResultRow>(raw: Option<R>, config: &RowConfig) -> Option<Self> {
        let raw = raw?;
        let mut row = Self::with_config(config);
        row.populate(raw.column_names(), raw.column_values().iter().cloned());
        Some(row)
    }

    /// Checked construction: with `strict_alignment` set, a row whose name and
    /// value sequences differ in length is rejected.
    pub fn try_from_result_row<R: ResultRow>(
        raw: &R,
        config: &RowConfig,
    ) -> Result<Self, RowError> {
        if config.strict_alignment && !raw.is_aligned() {
            return Err(RowError::LengthMismatch {
                names: raw.column_names().len(),
                values: raw.column_values().len(),
            });
        }
        let mut row = Self::with_config(config);
        row.populate(raw.column_names(), raw.column_values().iter().cloned());
        Ok(row)
    }

    fn populate(&mut self, names: &[String], values: impl IntoIterator<Item = Value>) {
        let mut values = values.into_iter();
        for name in names {
            let value = values.next().unwrap_or(Value::Null);
            self.route(name, value);
        }
        let surplus = values.count();
        if surplus > 0 {
            tracing::debug!(
                columns = names.len(),
                surplus,
                "dropping column values without a name"
            );
        }
    }

    fn route(&mut self, name: &str, value: Value) {
        match ColumnKind::classify(name) {
            ColumnKind::Ttl(column) => {
                if let Some(ttl) = metadata_value("ttl", column, &value) {
                    tracing::trace!(column, ttl, "ttl captured");
                    self.set_ttl(column, ttl);
                }
            }
            ColumnKind::Writetime(column) => {
                if let Some(writetime) = metadata_value("writetime", column, &value) {
                    tracing::trace!(column, writetime, "writetime captured");
                    self.set_writetime(column, writetime);
                }
            }
            ColumnKind::Ordinary(name) => {
                if resembles_pseudo_column(name) {
                    tracing::debug!(
                        name,
                        "malformed pseudo-column name, storing as ordinary column"
                    );
                }
                self.insert(name, value);
            }
        }
    }

    fn key(&self, column: impl AsRef<str>) -> ColumnKey {
        ColumnKey::normalize(column, self.fold_case)
    }

    pub fn get(&self, column: impl AsRef<str>) -> Option<&Value> {
        self.values.get(&self.key(column))
    }

    pub fn get_mut(&mut self, column: impl AsRef<str>) -> Option<&mut Value> {
        let key = self.key(column);
        self.values.get_mut(&key)
    }

    pub fn contains_key(&self, column: impl AsRef<str>) -> bool {
        self.values.contains_key(&self.key(column))
    }

    /// Store a value, returning the previous one. An existing column keeps
    /// its position.
    pub fn insert(&mut self, column: impl AsRef<str>, value: impl Into<Value>) -> Option<Value> {
        let key = self.key(column);
        self.values.insert(key, value.into())
    }

    /// Remove a column, keeping the order of the rest. Metadata is untouched.
    pub fn remove(&mut self, column: impl AsRef<str>) -> Option<Value> {
        let key = self.key(column);
        self.values.shift_remove(&key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, ColumnKey, Value> {
        self.values.keys()
    }

    pub fn values(&self) -> indexmap::map::Values<'_, ColumnKey, Value> {
        self.values.values()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, ColumnKey, Value> {
        self.values.iter()
    }

    /// TTL of a column in seconds, `None` if it was not selected.
    pub fn ttl(&self, column: impl AsRef<str>) -> Option<i64> {
        self.ttls.get(&self.key(column)).copied()
    }

    /// Writetime of a column in nanoseconds since epoch, `None` if it was not
    /// selected.
    pub fn writetime(&self, column: impl AsRef<str>) -> Option<i64> {
        self.writetimes.get(&self.key(column)).copied()
    }

    pub fn set_ttl(&mut self, column: impl AsRef<str>, ttl: i64) {
        let key = self.key(column);
        self.ttls.insert(key, ttl);
    }

    pub fn set_writetime(&mut self, column: impl AsRef<str>, writetime: i64) {
        let key = self.key(column);
        self.writetimes.insert(key, writetime);
    }

    pub fn ttls(&self) -> impl Iterator<Item = (&ColumnKey, i64)> {
        self.ttls.iter().map(|(k, v)| (k, *v))
    }

    pub fn writetimes(&self) -> impl Iterator<Item = (&ColumnKey, i64)> {
        self.writetimes.iter().map(|(k, v)| (k, *v))
    }
}

/// Integer payload of a pseudo-column. Null means "no metadata" (e.g. a
/// column written without TTL); anything else non-integral is skipped.
fn metadata_value(kind: &'static str, column: &str, value: &Value) -> Option<i64> {
    if value.is_null() {
        return None;
    }
    let n = value.as_i64();
    if n.is_none() {
        tracing::warn!(
            kind,
            column,
            value_type = value.type_name(),
            "non-integer metadata value, skipping"
        );
    }
    n
}

impl From<RawRow> for Row {
    fn from(raw: RawRow) -> Self {
        let (names, values) = raw.into_parts();
        let mut row = Row::new();
        row.populate(&names, values);
        row
    }
}

impl Index<&str> for Row {
    type Output = Value;

    /// # Panics
    /// If the column is not present.
    fn index(&self, column: &str) -> &Value {
        match self.get(column) {
            Some(value) => value,
            None => panic!("no column `{column}` in row"),
        }
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = (&'a ColumnKey, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, ColumnKey, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl IntoIterator for Row {
    type Item = (ColumnKey, Value);
    type IntoIter = indexmap::map::IntoIter<ColumnKey, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<K: AsRef<str>, V: Into<Value>> Extend<(K, V)> for Row {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (column, value) in iter {
            self.insert(column, value);
        }
    }
}

impl<K: AsRef<str>, V: Into<Value>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Row::new();
        row.extend(iter);
        row
    }
}

/// Serializes the ordinary columns as a map. Metadata is not included.
impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (key, value) in &self.values {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
