use indexmap::IndexMap;
use serde::{ser::SerializeMap, ser::SerializeSeq, Serialize, Serializer};
use serde_json::Value;

use crate::CodecError;

/// A generic, self-describing value tree used to hand typed results to dynamic consumers.
///
/// Numbers keep their exact decimal text so that 64-bit integers survive formats
/// storing numbers as doubles.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum StructuredValue {
    #[default]
    Null,
    Bool(bool),
    Number(String),
    String(String),
    List(Vec<StructuredValue>),
    Map(IndexMap<String, StructuredValue>),
}

impl StructuredValue {
    /// Converts any serializable value.
    ///
    /// Records become maps keyed by their exposed field names, without the fields
    /// that are null. Unions are maps carrying their `__typename`. List items are kept
    /// as is, nulls included.
    pub fn from_typed<T: Serialize + ?Sized>(value: &T) -> Result<Self, CodecError> {
        Ok(serde_json::to_value(value)?.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, StructuredValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            StructuredValue::String(s) | StructuredValue::Number(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&IndexMap<String, StructuredValue>> {
        match self {
            StructuredValue::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[StructuredValue]> {
        match self {
            StructuredValue::List(list) => Some(list.as_slice()),
            _ => None,
        }
    }

    /// Looks up a key of a map.
    pub fn get(&self, key: &str) -> Option<&StructuredValue> {
        self.as_map().and_then(|map| map.get(key))
    }
}

impl From<Value> for StructuredValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => StructuredValue::Null,
            Value::Bool(b) => StructuredValue::Bool(b),
            Value::Number(n) => StructuredValue::Number(n.to_string()),
            Value::String(s) => StructuredValue::String(s),
            Value::Array(list) => StructuredValue::List(list.into_iter().map(Into::into).collect()),
            Value::Object(fields) => StructuredValue::Map(
                fields
                    .into_iter()
                    .filter(|(_, value)| !value.is_null())
                    .map(|(name, value)| (name, value.into()))
                    .collect(),
            ),
        }
    }
}

impl Serialize for StructuredValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StructuredValue::Null => serializer.serialize_unit(),
            StructuredValue::Bool(b) => serializer.serialize_bool(*b),
            StructuredValue::Number(n) => match n.parse::<serde_json::Number>() {
                Ok(number) => number.serialize(serializer),
                Err(_) => serializer.serialize_str(n),
            },
            StructuredValue::String(s) => serializer.serialize_str(s),
            StructuredValue::List(list) => {
                let mut seq = serializer.serialize_seq(Some(list.len()))?;
                for item in list {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            StructuredValue::Map(fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (name, value) in fields {
                    map.serialize_entry(name, value)?;
                }
                map.end()
            }
        }
    }
}

/// Conversion into the protobuf `Value` well-known type. Numbers are carried as strings.
impl From<StructuredValue> for prost_types::Value {
    fn from(value: StructuredValue) -> Self {
        use prost_types::value::Kind;

        let kind = match value {
            StructuredValue::Null => Kind::NullValue(prost_types::NullValue::NullValue as i32),
            StructuredValue::Bool(b) => Kind::BoolValue(b),
            StructuredValue::Number(s) | StructuredValue::String(s) => Kind::StringValue(s),
            StructuredValue::List(list) => Kind::ListValue(prost_types::ListValue {
                values: list.into_iter().map(Into::into).collect(),
            }),
            StructuredValue::Map(fields) => Kind::StructValue(prost_types::Struct {
                fields: fields.into_iter().map(|(name, value)| (name, value.into())).collect(),
            }),
        };

        prost_types::Value { kind: Some(kind) }
    }
}
