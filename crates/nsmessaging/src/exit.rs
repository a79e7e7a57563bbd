use std::fmt;
use std::io;

use nsmessaging_codec::CodecError;
use nsmessaging_schema::SchemaError;

// Exit code constants. USAGE matches sysexits EX_USAGE.
pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::InvalidData => DATA_INVALID,
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => FAILURE,
        _ => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn codec_error(context: &str, err: CodecError) -> CliError {
    CliError::new(DATA_INVALID, format!("{context}: {err}"))
}

pub fn schema_error(context: &str, err: SchemaError) -> CliError {
    match err {
        SchemaError::UnknownMessageType(_) => CliError::new(USAGE, format!("{context}: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_map_by_kind() {
        let err = io_error("read", io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.code, FAILURE);
        assert_eq!(err.to_string(), "read: gone");

        let err = io_error("read", io::Error::new(io::ErrorKind::InvalidData, "not utf-8"));
        assert_eq!(err.code, DATA_INVALID);

        let err = io_error("read", io::Error::other("boom"));
        assert_eq!(err.code, INTERNAL);
    }

    #[test]
    fn unknown_type_is_usage_error() {
        let err = schema_error("fields", SchemaError::UnknownMessageType("Foo".into()));
        assert_eq!(err.code, USAGE);
    }
}
