use std::any::Any;
use std::fmt;

use bytes::Bytes;

use crate::descriptor::{Cardinality, EnumDescriptor, FieldKind, MessageDescriptor};
use crate::error::ValueError;

/// A record type with a static field table.
///
/// Implementations are generated by [`record!`](crate::record); codecs only
/// ever go through this trait, so one engine serves every type.
pub trait Record: fmt::Debug + Send + Sync + 'static {
    /// Field table of the concrete type.
    fn static_descriptor() -> &'static MessageDescriptor
    where
        Self: Sized;

    /// Field table of this value's type.
    fn descriptor(&self) -> &'static MessageDescriptor;

    /// Field storage by wire name.
    fn field(&self, name: &str) -> Option<&dyn Field>;

    /// Mutable field storage by wire name.
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Field>;

    fn as_any(&self) -> &dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

/// A record that travels as the `data` of a message envelope.
pub trait Payload: Record + Scalar + Default {
    /// Value of the envelope's `messageType`.
    const MESSAGE_TYPE: &'static str;
}

/// A closed enum with a fixed wire string per variant.
pub trait WireEnum: Sized + Copy + 'static {
    fn as_wire(&self) -> &'static str;

    /// `None` for strings outside the closed set.
    fn from_wire(wire: &str) -> Option<Self>;

    fn descriptor() -> &'static EnumDescriptor;
}

/// Borrowed view of one element value.
#[derive(Debug, Clone, Copy)]
pub enum ScalarRef<'a> {
    String(&'a str),
    Double(f64),
    Float(f32),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Bool(bool),
    Bytes(&'a [u8]),
    Enum(&'static str),
    Message(&'a dyn Record),
}

/// Borrowed view of a whole field, shaped by its cardinality.
#[derive(Debug)]
pub enum FieldRef<'a> {
    Single(ScalarRef<'a>),
    Optional(Option<ScalarRef<'a>>),
    Repeated(Vec<ScalarRef<'a>>),
}

impl FieldRef<'_> {
    /// Absent optionals and empty sequences are not present.
    pub fn is_present(&self) -> bool {
        match self {
            FieldRef::Single(_) => true,
            FieldRef::Optional(value) => value.is_some(),
            FieldRef::Repeated(values) => !values.is_empty(),
        }
    }
}

/// Owned element value handed to [`Field::assign`].
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    String(String),
    Double(f64),
    Float(f32),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Bool(bool),
    Bytes(Bytes),
    /// Wire string of an enum variant.
    Enum(String),
}

impl ScalarValue {
    pub fn kind_name(&self) -> &'static str {
        match self {
            ScalarValue::String(_) => "string",
            ScalarValue::Double(_) => "double",
            ScalarValue::Float(_) => "float",
            ScalarValue::Int32(_) => "int32",
            ScalarValue::UInt32(_) => "uint32",
            ScalarValue::Int64(_) => "int64",
            ScalarValue::UInt64(_) => "uint64",
            ScalarValue::Bool(_) => "bool",
            ScalarValue::Bytes(_) => "bytes",
            ScalarValue::Enum(_) => "enum",
        }
    }
}

/// Element type of a field: a primitive, a wire enum, or a nested record.
pub trait Scalar: Sized + Clone + PartialEq + fmt::Debug + Send + Sync + 'static {
    const KIND: FieldKind;

    fn to_scalar_ref(&self) -> ScalarRef<'_>;

    fn from_scalar(value: ScalarValue) -> Result<Self, ValueError>;

    /// Fresh element for nested-record decoding; `None` for non-records.
    fn empty_message() -> Option<Self> {
        None
    }

    fn as_record_mut(&mut self) -> Option<&mut dyn Record> {
        None
    }
}

/// Storage of one field, accessed through its record's field table.
pub trait Field {
    fn value(&self) -> FieldRef<'_>;

    /// Overwrites required and optional fields; appends to repeated fields.
    fn assign(&mut self, value: ScalarValue) -> Result<(), ValueError>;

    /// Slot for decoding a nested record.
    ///
    /// Optional fields are populated with an empty record if absent and
    /// repeated fields gain a new trailing element. `None` for fields that
    /// do not hold records.
    fn message_mut(&mut self) -> Option<&mut dyn Record>;

    /// Reset to the absent/zero state.
    fn clear(&mut self);
}

/// Compile-time shape of a field's Rust type, used to build field tables.
pub trait FieldShape {
    const KIND: FieldKind;
    const CARDINALITY: Cardinality;
}

macro_rules! primitive_scalar {
    ($ty:ty, $kind:ident, $name:literal, |$v:ident| $to_ref:expr) => {
        impl Scalar for $ty {
            const KIND: FieldKind = FieldKind::$kind;

            fn to_scalar_ref(&self) -> ScalarRef<'_> {
                let $v = self;
                $to_ref
            }

            fn from_scalar(value: ScalarValue) -> Result<Self, ValueError> {
                match value {
                    ScalarValue::$kind(inner) => Ok(inner),
                    other => Err(ValueError {
                        expected: $name,
                        found: other.kind_name(),
                    }),
                }
            }
        }

        impl FieldShape for $ty {
            const KIND: FieldKind = FieldKind::$kind;
            const CARDINALITY: Cardinality = Cardinality::Required;
        }

        impl Field for $ty {
            fn value(&self) -> FieldRef<'_> {
                FieldRef::Single(self.to_scalar_ref())
            }

            fn assign(&mut self, value: ScalarValue) -> Result<(), ValueError> {
                *self = <$ty as Scalar>::from_scalar(value)?;
                Ok(())
            }

            fn message_mut(&mut self) -> Option<&mut dyn Record> {
                None
            }

            fn clear(&mut self) {
                *self = <$ty>::default();
            }
        }
    };
}

primitive_scalar!(String, String, "string", |v| ScalarRef::String(v.as_str()));
primitive_scalar!(f64, Double, "double", |v| ScalarRef::Double(*v));
primitive_scalar!(f32, Float, "float", |v| ScalarRef::Float(*v));
primitive_scalar!(i32, Int32, "int32", |v| ScalarRef::Int32(*v));
primitive_scalar!(u32, UInt32, "uint32", |v| ScalarRef::UInt32(*v));
primitive_scalar!(i64, Int64, "int64", |v| ScalarRef::Int64(*v));
primitive_scalar!(u64, UInt64, "uint64", |v| ScalarRef::UInt64(*v));
primitive_scalar!(bool, Bool, "bool", |v| ScalarRef::Bool(*v));
primitive_scalar!(Bytes, Bytes, "bytes", |v| ScalarRef::Bytes(v.as_ref()));

impl<T: Scalar> FieldShape for Option<T> {
    const KIND: FieldKind = T::KIND;
    const CARDINALITY: Cardinality = Cardinality::Optional;
}

impl<T: Scalar> Field for Option<T> {
    fn value(&self) -> FieldRef<'_> {
        FieldRef::Optional(self.as_ref().map(|value| value.to_scalar_ref()))
    }

    fn assign(&mut self, value: ScalarValue) -> Result<(), ValueError> {
        *self = Some(T::from_scalar(value)?);
        Ok(())
    }

    fn message_mut(&mut self) -> Option<&mut dyn Record> {
        if self.is_none() {
            *self = Some(T::empty_message()?);
        }
        self.as_mut().and_then(|value| value.as_record_mut())
    }

    fn clear(&mut self) {
        *self = None;
    }
}

impl<T: Scalar> FieldShape for Vec<T> {
    const KIND: FieldKind = T::KIND;
    const CARDINALITY: Cardinality = Cardinality::Repeated;
}

impl<T: Scalar> Field for Vec<T> {
    fn value(&self) -> FieldRef<'_> {
        FieldRef::Repeated(self.iter().map(|value| value.to_scalar_ref()).collect())
    }

    fn assign(&mut self, value: ScalarValue) -> Result<(), ValueError> {
        self.push(T::from_scalar(value)?);
        Ok(())
    }

    fn message_mut(&mut self) -> Option<&mut dyn Record> {
        let element = T::empty_message()?;
        self.push(element);
        self.last_mut().and_then(|value| value.as_record_mut())
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }
}
