//! Rendering views of a flattened [`Query`].

use super::query::Query;
use super::segment::Segment;
use crate::error::{QueryError, QueryResult};
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Placeholder syntax used by the parameterized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaceholderStyle {
    /// `{prefix}0`, `{prefix}1`, ... (0-based). The default prefix is `@p`.
    Named { prefix: String },
    /// `$1`, `$2`, ... (1-based, PostgreSQL).
    Dollar,
    /// `?` for every parameter; names in the binding list are `?1`, `?2`, ...
    Question,
}

impl Default for PlaceholderStyle {
    fn default() -> Self {
        PlaceholderStyle::Named {
            prefix: "@p".to_string(),
        }
    }
}

impl PlaceholderStyle {
    fn write_placeholder(&self, out: &mut String, idx: usize) {
        let _ = match self {
            PlaceholderStyle::Named { prefix } => write!(out, "{prefix}{idx}"),
            PlaceholderStyle::Dollar => write!(out, "${}", idx + 1),
            PlaceholderStyle::Question => write!(out, "?"),
        };
    }

    /// Name paired with the `idx`-th (0-based) parameter in the binding list.
    pub fn name(&self, idx: usize) -> String {
        match self {
            PlaceholderStyle::Named { prefix } => format!("{prefix}{idx}"),
            PlaceholderStyle::Dollar => format!("${}", idx + 1),
            PlaceholderStyle::Question => format!("?{}", idx + 1),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            PlaceholderStyle::Named { .. } => "named",
            PlaceholderStyle::Dollar => "dollar",
            PlaceholderStyle::Question => "question",
        }
    }
}

/// Rendering options.
///
/// The default renders `@p0, @p1, ...`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    pub placeholder: PlaceholderStyle,
}

impl RenderConfig {
    /// Create a configuration with defaults (`@p` named placeholders).
    pub fn new() -> Self {
        Self::default()
    }

    /// Named placeholders with a custom prefix, e.g. `:p` or `@`.
    pub fn named(prefix: impl Into<String>) -> Self {
        Self::new().with_placeholder(PlaceholderStyle::Named {
            prefix: prefix.into(),
        })
    }

    /// PostgreSQL-style `$1, $2, ...`.
    pub fn dollar() -> Self {
        Self::new().with_placeholder(PlaceholderStyle::Dollar)
    }

    /// Anonymous `?` placeholders.
    pub fn question() -> Self {
        Self::new().with_placeholder(PlaceholderStyle::Question)
    }

    pub fn with_placeholder(mut self, placeholder: PlaceholderStyle) -> Self {
        self.placeholder = placeholder;
        self
    }
}

/// Final SQL text paired with its ordered `(name, value)` bindings.
///
/// This is the hand-off to an execution layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedSql {
    pub sql: String,
    pub params: Vec<(String, Value)>,
}

impl RenderedSql {
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.params.iter().map(|(name, _)| name.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> + '_ {
        self.params.iter().map(|(_, value)| value)
    }

    pub fn into_parts(self) -> (String, Vec<(String, Value)>) {
        (self.sql, self.params)
    }
}

impl Query {
    /// Positional form: each parameter rendered as `{k}`.
    ///
    /// Feeding this text and [`Query::values`] back into [`Query::build`]
    /// reproduces an equivalent query.
    pub fn to_positional(&self) -> String {
        self.to_string()
    }

    /// Positional form together with the owned parameter values.
    ///
    /// Literal text is emitted verbatim, so a literal that itself contains a
    /// token such as `{0}` (e.g. from `sql!("'{{0}}'")`) is indistinguishable
    /// from a slot once rebuilt. Use [`Query::try_to_template`] when the
    /// result is fed back into [`Query::build`].
    pub fn to_template(&self) -> (String, Vec<Value>) {
        (self.to_positional(), self.values().cloned().collect())
    }

    /// Like [`Query::to_template`], but fails when a literal contains a
    /// `{k}` token with `k` below the parameter count.
    pub fn try_to_template(&self) -> QueryResult<(String, Vec<Value>)> {
        let count = self.parameter_count();
        for segment in self.segments() {
            if let Segment::Literal(text) = segment {
                if let Some(index) = slot_tokens(text).find(|&k| k < count) {
                    return Err(QueryError::AmbiguousTemplate { index });
                }
            }
        }
        Ok(self.to_template())
    }

    /// Parameterized SQL text with `@p0, @p1, ...` placeholders.
    pub fn text(&self) -> String {
        self.render_sql(&PlaceholderStyle::default())
    }

    /// Ordered `("@pN", value)` bindings matching [`Query::text`].
    pub fn params(&self) -> Vec<(String, Value)> {
        let style = PlaceholderStyle::default();
        self.values()
            .enumerate()
            .map(|(idx, value)| (style.name(idx), value.clone()))
            .collect()
    }

    /// Render SQL text only, using `style` for placeholders.
    pub fn render_sql(&self, style: &PlaceholderStyle) -> String {
        let mut out = String::new();
        let mut idx: usize = 0;

        for segment in self.segments() {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Param(_) => {
                    style.write_placeholder(&mut out, idx);
                    idx += 1;
                }
            }
        }
        out
    }

    /// Render the parameterized form and its bindings in one pass.
    pub fn render(&self, config: &RenderConfig) -> RenderedSql {
        let style = &config.placeholder;
        let mut sql = String::new();
        let mut params = Vec::new();

        for segment in self.segments() {
            match segment {
                Segment::Literal(text) => sql.push_str(text),
                Segment::Param(value) => {
                    let idx = params.len();
                    style.write_placeholder(&mut sql, idx);
                    params.push((style.name(idx), value.clone()));
                }
            }
        }

        tracing::trace!(
            target: "sqlfrag::render",
            placeholder = style.label(),
            params = params.len(),
            kinds = ?params.iter().map(|(_, v)| v.kind()).collect::<Vec<_>>(),
            "rendered query"
        );
        RenderedSql { sql, params }
    }
}

/// Indices of every `{digits}` token in `text`.
fn slot_tokens(text: &str) -> impl Iterator<Item = usize> + '_ {
    text.match_indices('{').filter_map(move |(start, _)| {
        let rest = &text[start + 1..];
        let end = rest.find('}')?;
        let digits = &rest[..end];
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    })
}
