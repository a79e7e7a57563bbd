//! Fixed wire spellings of the canonical JSON form.

/// `int64`/`uint64` values are quoted decimal strings.
pub const WIDE_INTEGERS: &str = "quoted-decimal";

/// `bytes` values are standard base64 with padding.
pub const BINARY: &str = "base64-standard-padded";

pub const NAN: &str = "NaN";
pub const INFINITY: &str = "Infinity";
pub const NEG_INFINITY: &str = "-Infinity";

/// serde_json features the codec depends on.
pub const JSON_FEATURES: &[&str] = &["preserve_order", "float_roundtrip"];
