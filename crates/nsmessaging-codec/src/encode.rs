use nsmessaging_schema::{FieldRef, Record};
use serde_json::{Map, Value};

use crate::scalar::encode_scalar;

/// Build the JSON object for one record, walking its field table in order.
///
/// Required fields are always written. Absent optionals and empty
/// sequences are left out.
pub(crate) fn record_value(record: &dyn Record) -> Value {
    let descriptor = record.descriptor();
    let mut object = Map::with_capacity(descriptor.fields.len());

    for field_descriptor in descriptor.fields {
        let Some(field) = record.field(field_descriptor.name) else {
            continue;
        };
        let value = match field.value() {
            FieldRef::Single(value) => encode_scalar(value),
            FieldRef::Optional(Some(value)) => encode_scalar(value),
            FieldRef::Optional(None) => continue,
            FieldRef::Repeated(values) if values.is_empty() => continue,
            FieldRef::Repeated(values) => {
                Value::Array(values.into_iter().map(encode_scalar).collect())
            }
        };
        object.insert(field_descriptor.name.to_string(), value);
    }

    Value::Object(object)
}

/// Build the `{version, messageType, data}` envelope.
pub(crate) fn envelope_value(version: &str, message_type: &str, data: Option<&dyn Record>) -> Value {
    let mut object = Map::with_capacity(3);
    object.insert("version".to_string(), Value::String(version.to_string()));
    object.insert(
        "messageType".to_string(),
        Value::String(message_type.to_string()),
    );
    if let Some(data) = data {
        object.insert("data".to_string(), record_value(data));
    }
    Value::Object(object)
}

pub(crate) fn render(value: &Value, pretty: bool) -> String {
    if pretty {
        format!("{value:#}")
    } else {
        value.to_string()
    }
}
