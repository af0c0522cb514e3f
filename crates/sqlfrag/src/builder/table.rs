use crate::sql::{Query, ToQuery};

/// A bracket-quoted table reference.
///
/// Renders as a single literal `[name]`. A `]` inside the name is doubled so
/// the name cannot terminate the bracket early.
///
/// # Example
///
/// ```rust
/// use sqlfrag::{Table, ToQuery};
///
/// let t = Table::new("products");
/// assert_eq!(t.to_query().text(), "[products]");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    name: String,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }
}

impl ToQuery for Table {
    fn to_query(&self) -> Query {
        Query::literal(format!("[{}]", self.name.replace(']', "]]")))
    }
}
