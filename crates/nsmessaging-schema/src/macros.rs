/// Declare a closed wire enum.
///
/// Each variant maps to exactly one wire string; both directions are an
/// exhaustive `match`, so an unknown string never decodes to a default.
///
/// ```
/// nsmessaging_schema::wire_enum! {
///     pub enum Polarity {
///         Vertical => "VERTICAL",
///         Horizontal => "HORIZONTAL",
///     }
/// }
///
/// use nsmessaging_schema::WireEnum;
/// assert_eq!(Polarity::Vertical.as_wire(), "VERTICAL");
/// assert_eq!(Polarity::from_wire("HORIZONTAL"), Some(Polarity::Horizontal));
/// assert_eq!(Polarity::from_wire("vertical"), None);
/// ```
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )+ ];
        }

        impl $crate::WireEnum for $name {
            fn as_wire(&self) -> &'static str {
                match self {
                    $( $name::$variant => $wire, )+
                }
            }

            fn from_wire(wire: &str) -> Option<Self> {
                match wire {
                    $( $wire => Some($name::$variant), )+
                    _ => None,
                }
            }

            fn descriptor() -> &'static $crate::EnumDescriptor {
                static DESCRIPTOR: $crate::EnumDescriptor = $crate::EnumDescriptor {
                    name: stringify!($name),
                    variants: &[ $( $wire, )+ ],
                };
                &DESCRIPTOR
            }
        }

        impl $crate::Scalar for $name {
            const KIND: $crate::FieldKind =
                $crate::FieldKind::Enum(<$name as $crate::WireEnum>::descriptor);

            fn to_scalar_ref(&self) -> $crate::ScalarRef<'_> {
                $crate::ScalarRef::Enum($crate::WireEnum::as_wire(self))
            }

            fn from_scalar(
                value: $crate::ScalarValue,
            ) -> ::std::result::Result<Self, $crate::ValueError> {
                match value {
                    $crate::ScalarValue::Enum(wire) => {
                        <$name as $crate::WireEnum>::from_wire(&wire).ok_or($crate::ValueError {
                            expected: stringify!($name),
                            found: "unknown variant",
                        })
                    }
                    other => Err($crate::ValueError {
                        expected: "enum",
                        found: other.kind_name(),
                    }),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::WireEnum::as_wire(self))
            }
        }
    };
}

/// Declare a record type and its static field table.
///
/// Field order in the invocation is the canonical encode order. The Rust
/// type of each field decides its cardinality: `Option<T>` is optional,
/// `Vec<T>` is repeated, anything else is required.
///
/// ```
/// nsmessaging_schema::record! {
///     pub struct Sample: "Sample" {
///         device_name: String => "deviceName",
///         rssi: Option<f32> => "rssi",
///     }
/// }
///
/// use nsmessaging_schema::{Cardinality, Record};
/// let table = Sample::static_descriptor();
/// assert_eq!(table.fields[0].name, "deviceName");
/// assert_eq!(table.fields[0].proto_name, "device_name");
/// assert_eq!(table.fields[1].cardinality, Cardinality::Optional);
/// ```
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident : $wire_name:literal {
            $( $(#[$fmeta:meta])* $field:ident : $ty:ty => $json:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            $( $(#[$fmeta])* pub $field: $ty, )*
        }

        impl $crate::Record for $name {
            fn static_descriptor() -> &'static $crate::MessageDescriptor {
                static DESCRIPTOR: $crate::MessageDescriptor = $crate::MessageDescriptor {
                    name: $wire_name,
                    fields: &[
                        $(
                            $crate::FieldDescriptor {
                                name: $json,
                                proto_name: stringify!($field),
                                kind: <$ty as $crate::FieldShape>::KIND,
                                cardinality: <$ty as $crate::FieldShape>::CARDINALITY,
                            },
                        )*
                    ],
                };
                &DESCRIPTOR
            }

            fn descriptor(&self) -> &'static $crate::MessageDescriptor {
                <Self as $crate::Record>::static_descriptor()
            }

            fn field(&self, name: &str) -> Option<&dyn $crate::Field> {
                match name {
                    $( $json => Some(&self.$field), )*
                    _ => None,
                }
            }

            fn field_mut(&mut self, name: &str) -> Option<&mut dyn $crate::Field> {
                match name {
                    $( $json => Some(&mut self.$field), )*
                    _ => None,
                }
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn into_any(self: Box<Self>) -> Box<dyn ::std::any::Any> {
                self
            }
        }

        impl $crate::Scalar for $name {
            const KIND: $crate::FieldKind =
                $crate::FieldKind::Message(<$name as $crate::Record>::static_descriptor);

            fn to_scalar_ref(&self) -> $crate::ScalarRef<'_> {
                $crate::ScalarRef::Message(self)
            }

            fn from_scalar(
                value: $crate::ScalarValue,
            ) -> ::std::result::Result<Self, $crate::ValueError> {
                Err($crate::ValueError {
                    expected: $wire_name,
                    found: value.kind_name(),
                })
            }

            fn empty_message() -> Option<Self> {
                Some(Self::default())
            }

            fn as_record_mut(&mut self) -> Option<&mut dyn $crate::Record> {
                Some(self)
            }
        }
    };
}
