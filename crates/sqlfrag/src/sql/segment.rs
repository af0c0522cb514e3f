use crate::value::Value;

/// The atomic unit of a [`Query`](super::Query).
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal SQL text, emitted verbatim.
    Literal(String),
    /// A bound parameter, emitted as a placeholder.
    Param(Value),
}

impl Segment {
    pub fn literal(text: impl Into<String>) -> Self {
        Segment::Literal(text.into())
    }

    pub fn param(value: impl Into<Value>) -> Self {
        Segment::Param(value.into())
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Segment::Literal(_))
    }

    pub fn is_param(&self) -> bool {
        matches!(self, Segment::Param(_))
    }

    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Segment::Literal(s) => Some(s),
            Segment::Param(_) => None,
        }
    }

    pub fn as_param(&self) -> Option<&Value> {
        match self {
            Segment::Literal(_) => None,
            Segment::Param(v) => Some(v),
        }
    }
}
