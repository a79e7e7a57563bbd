/// Errors raised by schema lookups and field assignment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// No field table is registered under the given type identifier.
    #[error("unknown message type: {0:?}")]
    UnknownMessageType(String),
}

/// A value of the wrong kind was assigned to a field.
///
/// Field tables and field storage are generated together, so this only
/// surfaces when a caller assigns through [`Field::assign`](crate::Field::assign)
/// with a value that does not match the field's declared kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected} value, got {found}")]
pub struct ValueError {
    pub expected: &'static str,
    pub found: &'static str,
}

pub type Result<T> = std::result::Result<T, SchemaError>;
