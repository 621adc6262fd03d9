use crate::value::Value;

/// A row as produced by the driver: index-aligned column names and values.
///
/// `column_names()[i]` names `column_values()[i]`.
pub trait ResultRow {
    fn column_names(&self) -> &[String];
    fn column_values(&self) -> &[Value];

    fn is_aligned(&self) -> bool {
        self.column_names().len() == self.column_values().len()
    }
}

impl<T: ResultRow + ?Sized> ResultRow for &T {
    fn column_names(&self) -> &[String] {
        (**self).column_names()
    }

    fn column_values(&self) -> &[Value] {
        (**self).column_values()
    }
}

/// Owned raw row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    names: Vec<String>,
    values: Vec<Value>,
}

impl RawRow {
    pub fn new(names: Vec<String>, values: Vec<Value>) -> Self {
        Self { names, values }
    }

    /// Append one column.
    pub fn column(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.names.push(name.into());
        self.values.push(value.into());
        self
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<Value>) {
        (self.names, self.values)
    }
}

impl ResultRow for RawRow {
    fn column_names(&self) -> &[String] {
        &self.names
    }

    fn column_values(&self) -> &[Value] {
        &self.values
    }
}
