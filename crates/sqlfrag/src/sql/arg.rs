//! Interpolation arguments.
//!
//! Every value passed to [`Query::build`] or interpolated by `sql!` is
//! classified into an [`Arg`] at the call site through `From`. The
//! classification decides how the value is flattened:
//!
//! | source type                               | variant           | segments           |
//! |-------------------------------------------|-------------------|--------------------|
//! | `Query`, `Table`, `Select`, collections   | `Arg::Query`      | spliced in place   |
//! | `FragmentSet`                             | `Arg::Fragments`  | joined, spliced    |
//! | `Vec<T>`, `&[T]`, `[T; N]` of scalars     | `Arg::List`       | `p,p,...`          |
//! | scalars, `Option<T>`, `&str`, `String`    | `Arg::Value`      | one parameter      |
//!
//! Strings are always a single value, never a list of characters.

use super::query::Query;
use crate::builder::{Select, Table};
use crate::collection::ItemCollection;
use crate::fragments::FragmentSet;
use crate::value::Value;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use uuid::Uuid;

/// A classified interpolation argument.
#[derive(Debug, Clone)]
pub enum Arg {
    /// A single bound parameter.
    Value(Value),
    /// A scalar sequence, expanded to comma-separated parameters.
    List(Vec<Value>),
    /// A sub-query whose segments are spliced in place.
    Query(Query),
    /// A fragment set, joined then spliced.
    Fragments(FragmentSet),
}

/// Types that can contribute a flattened segment sequence to a query.
pub trait ToQuery {
    fn to_query(&self) -> Query;
}

impl ToQuery for Query {
    fn to_query(&self) -> Query {
        self.clone()
    }
}

impl Arg {
    /// Classify any composable as a sub-query.
    pub fn composable<T: ToQuery + ?Sized>(value: &T) -> Self {
        Arg::Query(value.to_query())
    }

    /// Build a list argument from any iterator of scalars.
    pub fn list<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Arg::List(values.into_iter().map(Into::into).collect())
    }
}

macro_rules! impl_arg_from_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Arg {
                fn from(v: $ty) -> Self {
                    Arg::Value(Value::from(v))
                }
            }
        )*
    };
}

impl_arg_from_scalar!(
    bool,
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    u64,
    usize,
    f32,
    f64,
    &str,
    String,
    &String,
    NaiveDate,
    NaiveDateTime,
    DateTime<Utc>,
    Uuid,
    serde_json::Value,
);

impl From<Value> for Arg {
    fn from(v: Value) -> Self {
        Arg::Value(v)
    }
}

impl From<&Value> for Arg {
    fn from(v: &Value) -> Self {
        Arg::Value(v.clone())
    }
}

impl<T: Into<Value>> From<Option<T>> for Arg {
    fn from(v: Option<T>) -> Self {
        Arg::Value(Value::from(v))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Arg {
    fn from(v: Vec<T>) -> Self {
        Arg::list(v)
    }
}

impl<T: Into<Value> + Clone> From<&[T]> for Arg {
    fn from(v: &[T]) -> Self {
        Arg::list(v.iter().cloned())
    }
}

impl<T: Into<Value> + Clone> From<&Vec<T>> for Arg {
    fn from(v: &Vec<T>) -> Self {
        Arg::list(v.iter().cloned())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Arg {
    fn from(v: [T; N]) -> Self {
        Arg::list(v)
    }
}

impl From<Query> for Arg {
    fn from(q: Query) -> Self {
        Arg::Query(q)
    }
}

impl From<&Query> for Arg {
    fn from(q: &Query) -> Self {
        Arg::Query(q.clone())
    }
}

impl From<FragmentSet> for Arg {
    fn from(f: FragmentSet) -> Self {
        Arg::Fragments(f)
    }
}

impl From<&FragmentSet> for Arg {
    fn from(f: &FragmentSet) -> Self {
        Arg::Fragments(f.clone())
    }
}

macro_rules! impl_arg_from_composable {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Arg {
                fn from(v: $ty) -> Self {
                    Arg::composable(&v)
                }
            }

            impl From<&$ty> for Arg {
                fn from(v: &$ty) -> Self {
                    Arg::composable(v)
                }
            }
        )*
    };
}

impl_arg_from_composable!(ItemCollection, Table, Select);
