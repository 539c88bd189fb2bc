use thiserror::Error;

/**
    Error returned by `FromStr` implementations on enum types.
*/
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseError {
    pub kind: &'static str,
    pub value: String,
}

/**
    Error returned when a byte slice does not have the exact size of a
    fixed-size boundary value.
*/
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} must be {expected} bytes, got {actual}")]
pub struct SizeError {
    pub kind: &'static str,
    pub expected: usize,
    pub actual: usize,
}
