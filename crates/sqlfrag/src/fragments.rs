//! Imperatively accumulated fragments joined into a single query.

use crate::sql::{Query, ToQuery};

/// An ordered list of queries joined by a separator, after an optional prefix.
///
/// # Example
///
/// ```rust
/// use sqlfrag::{FragmentSet, Query};
///
/// let mut fs = FragmentSet::new(" and ");
/// fs.add(Query::build("a = {0}", [1])?);
/// fs.add(Query::build("b = {0}", [2])?);
///
/// assert_eq!(fs.into_query().text(), "a = @p0 and b = @p1");
/// # Ok::<(), sqlfrag::QueryError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct FragmentSet {
    prefix: Option<String>,
    separator: String,
    fragments: Vec<Query>,
}

impl FragmentSet {
    /// Create an empty set without a prefix.
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            prefix: None,
            separator: separator.into(),
            fragments: Vec::new(),
        }
    }

    /// Create an empty set whose joined form starts with `prefix`.
    pub fn with_prefix(prefix: impl Into<String>, separator: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
            ..Self::new(separator)
        }
    }

    /// Append a fragment.
    pub fn add(&mut self, fragment: Query) -> &mut Self {
        self.fragments.push(fragment);
        self
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Join all fragments into one query.
    pub fn into_query(self) -> Query {
        Query::join(self.prefix.as_deref(), &self.separator, self.fragments)
    }
}

impl ToQuery for FragmentSet {
    fn to_query(&self) -> Query {
        self.clone().into_query()
    }
}

impl Extend<Query> for FragmentSet {
    fn extend<T: IntoIterator<Item = Query>>(&mut self, iter: T) {
        self.fragments.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::Arg;

    #[test]
    fn joins_without_prefix() {
        let mut fs = FragmentSet::new(" and ");
        fs.add(Query::build("a = {0}", [1]).unwrap());
        fs.add(Query::build("b = {0}", [2]).unwrap());
        fs.add(Query::build("c = {0}", [3]).unwrap());

        let q = Query::build("select * from customers where {0}", [Arg::from(fs)]).unwrap();
        assert_eq!(
            q.text(),
            "select * from customers where a = @p0 and b = @p1 and c = @p2"
        );
    }

    #[test]
    fn prefix_is_emitted_once() {
        let mut fs = FragmentSet::with_prefix("where ", " and ");
        fs.add(Query::build("a = {0}", [1]).unwrap());
        fs.add(Query::build("b = {0}", [2]).unwrap());

        let q = Query::build("select * {0}", [Arg::from(&fs)]).unwrap();
        assert_eq!(q.text(), "select * where a = @p0 and b = @p1");
        assert_eq!(fs.len(), 2);
    }

    #[test]
    fn empty_set_yields_prefix_only() {
        let fs = FragmentSet::with_prefix("where ", " and ");
        assert!(fs.is_empty());
        assert_eq!(fs.to_query().text(), "where ");

        let fs = FragmentSet::new(", ");
        assert!(fs.into_query().is_empty());
    }
}
