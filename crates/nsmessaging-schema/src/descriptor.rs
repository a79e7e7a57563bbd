use std::fmt;

/// Wire kind of a single field element.
#[derive(Clone, Copy)]
pub enum FieldKind {
    String,
    Double,
    Float,
    Int32,
    UInt32,
    /// Signed 64-bit integer, carried as a quoted decimal string.
    Int64,
    /// Unsigned 64-bit integer, carried as a quoted decimal string.
    UInt64,
    Bool,
    /// Arbitrary bytes, carried as standard padded base64.
    Bytes,
    Enum(fn() -> &'static EnumDescriptor),
    Message(fn() -> &'static MessageDescriptor),
}

impl FieldKind {
    /// Short name used in diagnostics and field listings.
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Double => "double",
            FieldKind::Float => "float",
            FieldKind::Int32 => "int32",
            FieldKind::UInt32 => "uint32",
            FieldKind::Int64 => "int64",
            FieldKind::UInt64 => "uint64",
            FieldKind::Bool => "bool",
            FieldKind::Bytes => "bytes",
            FieldKind::Enum(_) => "enum",
            FieldKind::Message(_) => "message",
        }
    }

    /// 64-bit integers are quoted on the wire to survive double-based parsers.
    pub fn is_wide(&self) -> bool {
        matches!(self, FieldKind::Int64 | FieldKind::UInt64)
    }

    /// Name of the referenced enum or message type, if any.
    pub fn type_name(&self) -> Option<&'static str> {
        match self {
            FieldKind::Enum(descriptor) => Some(descriptor().name),
            FieldKind::Message(descriptor) => Some(descriptor().name),
            _ => None,
        }
    }
}

impl PartialEq for FieldKind {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name() && self.type_name() == other.type_name()
    }
}

impl Eq for FieldKind {}

impl fmt::Debug for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.type_name() {
            Some(type_name) => write!(f, "{}({type_name})", self.name()),
            None => f.write_str(self.name()),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.type_name() {
            Some(type_name) => f.write_str(type_name),
            None => f.write_str(self.name()),
        }
    }
}

/// Presence rule of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// Always holds a value and is always emitted, zero included.
    Required,
    /// Present or absent; absent fields are omitted.
    Optional,
    /// Ordered sequence; empty sequences are omitted.
    Repeated,
}

impl Cardinality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cardinality::Required => "required",
            Cardinality::Optional => "optional",
            Cardinality::Repeated => "repeated",
        }
    }
}

/// One row of a field table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// lowerCamelCase name used on the wire.
    pub name: &'static str,
    /// snake_case schema name, also accepted when decoding.
    pub proto_name: &'static str,
    pub kind: FieldKind,
    pub cardinality: Cardinality,
}

/// Static field table of one record type, in encode order.
#[derive(Debug)]
pub struct MessageDescriptor {
    pub name: &'static str,
    pub fields: &'static [FieldDescriptor],
}

impl MessageDescriptor {
    /// Find a field by wire name, falling back to its snake_case schema name.
    pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .or_else(|| self.fields.iter().find(|field| field.proto_name == name))
    }

    /// Wire names in encode order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> {
        self.fields.iter().map(|field| field.name)
    }
}

/// Closed set of wire strings for one enum type.
#[derive(Debug)]
pub struct EnumDescriptor {
    pub name: &'static str,
    pub variants: &'static [&'static str],
}

impl EnumDescriptor {
    pub fn contains(&self, wire: &str) -> bool {
        self.variants.contains(&wire)
    }
}
