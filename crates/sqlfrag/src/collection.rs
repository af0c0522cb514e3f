//! Named clause collections (field lists, filters, ordering).
//!
//! An [`ItemCollection`] joins its items like a [`FragmentSet`](crate::FragmentSet)
//! but has a policy for the empty case: it renders a fallback literal when one
//! is configured, and nothing otherwise. A filter with no conditions then
//! disappears from the statement, while a field list can fall back to `*`.

use crate::sql::{Query, ToQuery};

/// Accumulates clause items joined with prefix/separator, with an empty fallback.
#[derive(Debug, Clone, Default)]
pub struct ItemCollection {
    prefix: Option<String>,
    separator: String,
    empty_value: Option<String>,
    items: Vec<Query>,
}

impl ItemCollection {
    pub fn new(
        prefix: Option<&str>,
        separator: impl Into<String>,
        empty_value: Option<&str>,
    ) -> Self {
        Self {
            prefix: prefix.map(str::to_string),
            separator: separator.into(),
            empty_value: empty_value.map(str::to_string),
            items: Vec::new(),
        }
    }

    /// Column list: `a, \r\nb`, or ` * ` when empty.
    pub fn fields() -> Self {
        Self::new(None, ", \r\n", Some(" * "))
    }

    /// Filter conditions: ` where a AND b`, or nothing when empty.
    pub fn filter() -> Self {
        Self::new(Some(" where "), " AND ", None)
    }

    /// Ordering terms: ` order by a, b`, or nothing when empty.
    pub fn order_by() -> Self {
        Self::new(Some(" order by "), ", ", None)
    }

    /// Append an item.
    pub fn add(&mut self, item: Query) -> &mut Self {
        self.items.push(item);
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Query] {
        &self.items
    }
}

impl ToQuery for ItemCollection {
    fn to_query(&self) -> Query {
        if self.items.is_empty() {
            return match self.empty_value.as_deref() {
                Some(fallback) if !fallback.trim().is_empty() => Query::literal(fallback),
                _ => Query::empty(),
            };
        }
        Query::join(
            self.prefix.as_deref(),
            &self.separator,
            self.items.iter().cloned(),
        )
    }
}

impl Extend<Query> for ItemCollection {
    fn extend<T: IntoIterator<Item = Query>>(&mut self, iter: T) {
        self.items.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_contributes_nothing() {
        let filter = ItemCollection::filter();
        assert!(filter.to_query().is_empty());
    }

    #[test]
    fn empty_fields_fall_back_to_star() {
        let fields = ItemCollection::fields();
        assert_eq!(fields.to_query().text(), " * ");
    }

    #[test]
    fn blank_fallback_is_ignored() {
        let c = ItemCollection::new(None, ",", Some("   "));
        assert!(c.to_query().is_empty());
    }

    #[test]
    fn prefix_once_separator_between() {
        let mut filter = ItemCollection::filter();
        filter.add(Query::build("a = {0}", [1]).unwrap());
        filter.add(Query::build("b = {0}", ["x"]).unwrap());

        let q = filter.to_query();
        assert_eq!(q.text(), " where a = @p0 AND b = @p1");
        assert_eq!(q.parameter_count(), 2);
        assert_eq!(filter.items().len(), 2);
        assert_eq!(filter.items()[1].text(), "b = @p0");
    }

    #[test]
    fn order_by_joins_terms() {
        let mut order = ItemCollection::order_by();
        order.extend([Query::raw("name"), Query::raw("id desc")]);
        assert_eq!(order.to_query().text(), " order by name, id desc");
    }
}
