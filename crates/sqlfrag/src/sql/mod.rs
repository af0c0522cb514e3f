//! Fragment composition engine.
//!
//! A [`Query`] is a flat list of [`Segment`]s: literal SQL text and bound
//! parameters. Queries are built from templates with positional slots and can
//! be nested to any depth; nesting splices segments in place, so placeholder
//! numbering is always computed over the final, flattened sequence.
//!
//! # Example
//!
//! ```rust
//! use sqlfrag::{Arg, FragmentSet, Query};
//!
//! let mut filters = FragmentSet::with_prefix("where ", " and ");
//! filters.add(Query::build("a = {0}", [1])?);
//! filters.add(Query::build("b = {0}", [2])?);
//!
//! let q = Query::build("select * {0}", [Arg::from(filters)])?;
//! assert_eq!(q.text(), "select * where a = @p0 and b = @p1");
//! # Ok::<(), sqlfrag::QueryError>(())
//! ```

mod arg;
mod query;
mod render;
mod segment;


pub use arg::{Arg, ToQuery};
pub use query::Query;
pub use render::{PlaceholderStyle, RenderConfig, RenderedSql};
pub use segment::Segment;

use crate::error::QueryResult;

/// Flatten a template with positional `{0}`, `{1}`, ... slots.
///
/// Shorthand for [`Query::build`].
pub fn query<I>(template: &str, args: I) -> QueryResult<Query>
where
    I: IntoIterator,
    I::Item: Into<Arg>,
{
    Query::build(template, args)
}
