use super::table::Table;
use crate::collection::ItemCollection;
use crate::sql::{Query, ToQuery};
use std::fmt;

/// A `SELECT` statement assembled from a table, fields, filters and ordering.
///
/// # Example
///
/// ```rust
/// use sqlfrag::{Query, Select, ToQuery};
///
/// let mut select = Select::new("products");
/// select.filter(Query::build("id <> {0}", [1])?);
///
/// assert_eq!(select.to_query().text(), "SELECT  *  FROM [products]  where id <> @p0 ");
/// # Ok::<(), sqlfrag::QueryError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Select {
    table: Table,
    fields: ItemCollection,
    filter: ItemCollection,
    order: ItemCollection,
}

impl Select {
    pub fn new(table: impl Into<String>) -> Self {
        Self::from_table(Table::new(table))
    }

    pub fn from_table(table: Table) -> Self {
        Self {
            table,
            fields: ItemCollection::fields(),
            filter: ItemCollection::filter(),
            order: ItemCollection::order_by(),
        }
    }

    /// Add a selected field. With no fields the statement selects ` * `.
    pub fn field(&mut self, field: Query) -> &mut Self {
        self.fields.add(field);
        self
    }

    /// Add a filter condition, joined to the others with `AND`.
    pub fn filter(&mut self, condition: Query) -> &mut Self {
        self.filter.add(condition);
        self
    }

    /// Add an ordering term.
    pub fn order_by(&mut self, term: Query) -> &mut Self {
        self.order.add(term);
        self
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut Table {
        &mut self.table
    }

    pub fn fields(&self) -> &ItemCollection {
        &self.fields
    }

    pub fn filters(&self) -> &ItemCollection {
        &self.filter
    }

    pub fn ordering(&self) -> &ItemCollection {
        &self.order
    }
}

impl ToQuery for Select {
    // Same segments as `Query::build("SELECT {0} FROM {1} {2} {3}", ..)`.
    fn to_query(&self) -> Query {
        let mut q = Query::literal("SELECT ");
        q.push_arg(&self.fields)
            .push_literal(" FROM ")
            .push_arg(&self.table)
            .push_literal(" ")
            .push_arg(&self.filter)
            .push_literal(" ")
            .push_arg(&self.order);
        q
    }
}

/// Formats the positional form.
impl fmt::Display for Select {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_query(), f)
    }
}
