//! Convenient imports for typical `sqlfrag` usage.
//!
//! ```rust
//! use sqlfrag::prelude::*;
//! ```

pub use crate::{
    Arg, FragmentSet, ItemCollection, Query, QueryError, QueryResult, Select, Table, ToQuery,
    Value, query,
};

#[cfg(feature = "macros")]
pub use crate::sql;
