//! tokio-postgres binding bridge.
//!
//! This module does not execute anything. It turns a [`Query`] into the
//! `(sql, params)` pair that `tokio_postgres::Client::query` and friends expect:
//!
//! ```ignore
//! let q = sqlfrag::Query::build("SELECT * FROM users WHERE id = {0}", [42_i64])?;
//! let rows = client.query(&q.to_pg_sql(), &q.pg_params()).await?;
//! ```

use crate::sql::{PlaceholderStyle, Query};
use crate::value::Value;
use bytes::BytesMut;
use std::error::Error;
use tokio_postgres::types::{IsNull, ToSql, Type, to_sql_checked};

impl ToSql for Value {
    fn to_sql(
        &self,
        ty: &Type,
        out: &mut BytesMut,
    ) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        match self {
            Value::Null => Ok(IsNull::Yes),
            Value::Bool(v) => v.to_sql_checked(ty, out),
            Value::Int(v) if *ty == Type::INT2 => i16::try_from(*v)?.to_sql_checked(ty, out),
            Value::Int(v) if *ty == Type::INT4 => i32::try_from(*v)?.to_sql_checked(ty, out),
            Value::Int(v) => v.to_sql_checked(ty, out),
            Value::Float(v) if *ty == Type::FLOAT4 => narrow_f32(*v)?.to_sql_checked(ty, out),
            Value::Float(v) => v.to_sql_checked(ty, out),
            Value::Text(v) => v.to_sql_checked(ty, out),
            Value::Bytes(v) => v.to_sql_checked(ty, out),
            Value::Date(v) => v.to_sql_checked(ty, out),
            Value::DateTime(v) => v.to_sql_checked(ty, out),
            Value::Timestamp(v) => v.to_sql_checked(ty, out),
            Value::Uuid(v) => v.to_sql_checked(ty, out),
            Value::Json(v) => v.to_sql_checked(ty, out),
        }
    }

    // Type mismatches surface from the inner `to_sql_checked` calls.
    fn accepts(_ty: &Type) -> bool {
        true
    }

    to_sql_checked!();
}

/// Rounds to the nearest `f32`, rejecting finite values outside its range.
fn narrow_f32(v: f64) -> Result<f32, Box<dyn Error + Sync + Send>> {
    if v.is_finite() && v.abs() > f64::from(f32::MAX) {
        return Err(format!("{v} out of range for FLOAT4").into());
    }
    Ok(v as f32)
}

impl Query {
    /// SQL text with PostgreSQL `$1, $2, ...` placeholders.
    pub fn to_pg_sql(&self) -> String {
        self.render_sql(&PlaceholderStyle::Dollar)
    }

    /// Parameter refs compatible with `tokio-postgres`, in binding order.
    pub fn pg_params(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.values().map(|v| v as &(dyn ToSql + Sync)).collect()
    }
}
