/// Controls codec behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CodecConfig {
    /// When true, keys outside a record's field table fail decoding with
    /// `CodecError::UnknownField` instead of being skipped.
    pub strict_mode: bool,
    /// When true, encoders emit indented JSON. The output is then no longer
    /// canonical text, though it decodes to the same value.
    pub pretty: bool,
}
