//! # sqlfrag
//!
//! Injection-safe SQL composition from nestable, parameterized fragments.
//!
//! ## Features
//!
//! - **Text and values stay apart**: a [`Query`] is a flat list of literal text
//!   and bound parameters; values never end up inside the SQL string
//! - **Nesting flattens**: embed queries, fragment sets and clause collections
//!   inside other templates; placeholders are numbered over the final sequence
//! - **List expansion**: `Vec`/slice arguments expand to `p0,p1,...` while
//!   strings always bind as one value
//! - **Two views**: a positional `{k}` form for re-embedding and the final
//!   `@pN` text with ordered `(name, value)` bindings
//!
//! ## Example
//!
//! ```rust
//! use sqlfrag::{sql, FragmentSet};
//!
//! let min_total = 20;
//! let mut filters = FragmentSet::with_prefix(" WHERE ", " AND ");
//! filters.add(sql!("Total > {min_total}"));
//! filters.add(sql!("Status IN ({vec![\"open\", \"late\"]})"));
//!
//! let q = sql!("SELECT * FROM Invoices{filters}");
//! assert_eq!(
//!     q.text(),
//!     "SELECT * FROM Invoices WHERE Total > @p0 AND Status IN (@p1,@p2)"
//! );
//! ```

// Lets `sql!` expansions resolve `sqlfrag::` paths inside this crate.
extern crate self as sqlfrag;

pub mod builder;
pub mod collection;
pub mod error;
pub mod fragments;
pub mod prelude;
pub mod sql;
pub mod value;

#[cfg(feature = "postgres")]
pub mod postgres;

pub use builder::{Select, Table};
pub use collection::ItemCollection;
pub use error::{QueryError, QueryResult};
pub use fragments::FragmentSet;
pub use sql::{
    Arg, PlaceholderStyle, Query, RenderConfig, RenderedSql, Segment, ToQuery, query,
};
pub use value::Value;

#[cfg(feature = "macros")]
pub use sqlfrag_macros::sql;
