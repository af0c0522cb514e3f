use super::arg::Arg;
use super::segment::Segment;
use crate::error::{QueryError, QueryResult};
use crate::value::Value;
use std::fmt;
use std::ops::{Add, AddAssign};

/// An ordered sequence of literal text and bound parameters.
///
/// A `Query` is always fully flattened: embedding one query in another splices
/// its segments in place, so the parameter order of the outer query is exactly
/// the left-to-right order in which parameters appear in the final SQL text.
///
/// # Example
///
/// ```rust
/// use sqlfrag::{Arg, Query};
///
/// let join = Query::build("join T on (X = {0})", [20])?;
/// let q = Query::build(
///     "select * from A {0} where y > {1}",
///     vec![Arg::from(join), Arg::from(1000)],
/// )?;
///
/// assert_eq!(q.text(), "select * from A join T on (X = @p0) where y > @p1");
/// # Ok::<(), sqlfrag::QueryError>(())
/// ```
#[must_use]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    segments: Vec<Segment>,
}

impl Query {
    /// Create a query with no segments.
    pub fn empty() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Flatten a template with positional `{0}`, `{1}`, ... slots.
    ///
    /// Slots are located in increasing numeric order, each one searched in the
    /// text remaining after the previous slot. Argument `i` fills slot `{i}`:
    ///
    /// - queries and composables splice their segments in place
    /// - fragment sets are joined, then spliced
    /// - scalar lists expand to `p0,p1,...` (nothing when empty)
    /// - any other value becomes a single parameter
    ///
    /// A blank template with no arguments yields the empty query. If a slot is
    /// missing from the remaining text, this fails with
    /// [`QueryError::MissingSlot`] instead of shifting the parameters.
    pub fn build<I>(template: &str, args: I) -> QueryResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        let args: Vec<Arg> = args.into_iter().map(Into::into).collect();
        if args.is_empty() && template.trim().is_empty() {
            return Ok(Self::empty());
        }

        let slots = args.len();
        let mut query = Self::empty();
        let mut rest = template;

        for (index, arg) in args.into_iter().enumerate() {
            let token = format!("{{{index}}}");
            let Some(pos) = rest.find(&token) else {
                tracing::debug!(
                    target: "sqlfrag::build",
                    index,
                    slots,
                    template,
                    "slot token not found"
                );
                return Err(QueryError::missing_slot(index, template));
            };

            query.push_literal(&rest[..pos]);
            query.push_arg(arg);
            rest = &rest[pos + token.len()..];
        }
        query.push_literal(rest);

        tracing::trace!(
            target: "sqlfrag::build",
            slots,
            segments = query.segments.len(),
            params = query.parameter_count(),
            "flattened template"
        );
        Ok(query)
    }

    /// Concatenate one or more queries in order.
    ///
    /// Fails with [`QueryError::EmptyQuery`] when `fragments` is empty, so an
    /// accidental no-op call cannot silently produce an empty clause.
    pub fn new<I>(fragments: I) -> QueryResult<Self>
    where
        I: IntoIterator<Item = Query>,
    {
        let mut iter = fragments.into_iter();
        let Some(mut query) = iter.next() else {
            return Err(QueryError::EmptyQuery);
        };
        for fragment in iter {
            query.append(fragment);
        }
        Ok(query)
    }

    /// Text-only query, equivalent to `build(text, [])`.
    ///
    /// Blank text yields the empty query.
    pub fn raw(text: &str) -> Self {
        if text.trim().is_empty() {
            return Self::empty();
        }
        Self::literal(text)
    }

    /// Text-only query that keeps `text` verbatim, whitespace included.
    pub fn literal(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            return Self::empty();
        }
        Self {
            segments: vec![Segment::Literal(text)],
        }
    }

    /// A query made of a single bound parameter.
    pub fn param(value: impl Into<Value>) -> Self {
        Self {
            segments: vec![Segment::Param(value.into())],
        }
    }

    /// Join queries with `separator`, after an optional `prefix`.
    ///
    /// The prefix is taken as raw text (a blank prefix contributes nothing).
    /// Joining zero queries yields just the prefix.
    pub fn join<I>(prefix: Option<&str>, separator: &str, queries: I) -> Self
    where
        I: IntoIterator<Item = Query>,
    {
        let mut out = prefix.map(Query::raw).unwrap_or_default();
        for (i, query) in queries.into_iter().enumerate() {
            if i > 0 {
                out.push_literal(separator);
            }
            out.append(query);
        }
        out
    }

    /// `self` followed by `other`, with nothing injected between them.
    pub fn concat(mut self, other: Query) -> Self {
        self.append(other);
        self
    }

    /// Append another query's segments, consuming it.
    pub fn append(&mut self, other: Query) -> &mut Self {
        for segment in other.segments {
            match segment {
                Segment::Literal(text) => {
                    self.push_literal(&text);
                }
                param @ Segment::Param(_) => self.segments.push(param),
            }
        }
        self
    }

    /// Append literal SQL text (no parameters).
    pub fn push_literal(&mut self, text: &str) -> &mut Self {
        if text.is_empty() {
            return self;
        }

        match self.segments.last_mut() {
            Some(Segment::Literal(last)) => last.push_str(text),
            _ => self.segments.push(Segment::Literal(text.to_string())),
        }
        self
    }

    /// Append a single bound parameter.
    pub fn push_param(&mut self, value: impl Into<Value>) -> &mut Self {
        self.segments.push(Segment::Param(value.into()));
        self
    }

    /// Append an interpolation argument, flattening it in place.
    pub fn push_arg(&mut self, arg: impl Into<Arg>) -> &mut Self {
        match arg.into() {
            Arg::Value(value) => self.push_param(value),
            Arg::List(values) => {
                for (i, value) in values.into_iter().enumerate() {
                    if i > 0 {
                        self.push_literal(",");
                    }
                    self.push_param(value);
                }
                self
            }
            Arg::Query(query) => self.append(query),
            Arg::Fragments(fragments) => self.append(fragments.into_query()),
        }
    }

    /// The flattened segments, in rendering order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    /// `true` when the query has no segments at all.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of bound parameters.
    pub fn parameter_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_param()).count()
    }

    /// Bound parameter values, in binding order.
    pub fn values(&self) -> impl Iterator<Item = &Value> + '_ {
        self.segments.iter().filter_map(Segment::as_param)
    }
}

impl FromIterator<Segment> for Query {
    fn from_iter<T: IntoIterator<Item = Segment>>(iter: T) -> Self {
        let mut query = Query::empty();
        for segment in iter {
            match segment {
                Segment::Literal(text) => {
                    query.push_literal(&text);
                }
                Segment::Param(value) => {
                    query.push_param(value);
                }
            }
        }
        query
    }
}

impl Add for Query {
    type Output = Query;

    fn add(self, rhs: Query) -> Query {
        self.concat(rhs)
    }
}

impl AddAssign for Query {
    fn add_assign(&mut self, rhs: Query) {
        self.append(rhs);
    }
}

/// Formats the positional form (`{0}`, `{1}`, ...).
impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut idx: usize = 0;
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => f.write_str(text)?,
                Segment::Param(_) => {
                    write!(f, "{{{idx}}}")?;
                    idx += 1;
                }
            }
        }
        Ok(())
    }
}
