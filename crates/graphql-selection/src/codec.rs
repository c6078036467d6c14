//! Encoding of GraphQL unions as `__typename` tagged JSON objects.
//!
//! On the wire a union value is a single flat object: the `__typename` discriminator
//! followed by the fields of the member it names. `null`, a missing discriminator and
//! an empty one all stand for an absent value.

mod union;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

pub use union::{Union, UnionType};

use crate::{CodecError, TypeDescriptor};

/// Name of the discriminator field of every union.
pub const TYPENAME_FIELD: &str = "__typename";

/// Fields of a union member, without the discriminator, in wire order.
pub type Payload = serde_json::Map<String, Value>;

/// A union value that has not been bound to a Rust type yet.
///
/// The discriminator is empty if and only if there is no payload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaggedValue {
    discriminator: String,
    payload: Option<Payload>,
}

impl TaggedValue {
    pub fn absent() -> Self {
        TaggedValue::default()
    }

    pub fn new(discriminator: impl Into<String>, payload: Payload) -> Self {
        TaggedValue {
            discriminator: discriminator.into(),
            payload: Some(payload),
        }
    }

    pub fn is_absent(&self) -> bool {
        self.discriminator.is_empty() && self.payload.is_none()
    }

    pub fn discriminator(&self) -> &str {
        &self.discriminator
    }

    pub fn payload(&self) -> Option<&Payload> {
        self.payload.as_ref()
    }

    pub fn into_parts(self) -> (String, Option<Payload>) {
        (self.discriminator, self.payload)
    }
}

pub fn decode_tagged(ty: &TypeDescriptor, bytes: &[u8]) -> Result<TaggedValue, CodecError> {
    let value: Value = serde_json::from_slice(bytes)?;
    decode_tagged_value(ty, value)
}

pub fn decode_tagged_value(ty: &TypeDescriptor, value: Value) -> Result<TaggedValue, CodecError> {
    if !ty.is_union() {
        return Err(CodecError::NotAUnion { type_name: ty.name() });
    }

    let fields = match value {
        Value::Null => return Ok(TaggedValue::absent()),
        Value::Object(fields) => fields,
        other => {
            return Err(CodecError::UnexpectedShape {
                union: ty.name(),
                found: value_kind(&other),
            })
        }
    };

    let discriminator = match fields.get(TYPENAME_FIELD) {
        None | Some(Value::Null) => return Ok(TaggedValue::absent()),
        Some(Value::String(typename)) if typename.is_empty() => return Ok(TaggedValue::absent()),
        Some(Value::String(typename)) => typename.clone(),
        Some(other) => {
            return Err(CodecError::UnexpectedShape {
                union: ty.name(),
                found: value_kind(other),
            })
        }
    };

    if ty.variant(&discriminator).is_none() {
        return Err(CodecError::UnknownVariant {
            union: ty.name(),
            discriminator,
        });
    }

    let payload = fields
        .into_iter()
        .filter(|(name, _)| name != TYPENAME_FIELD)
        .collect();

    Ok(TaggedValue::new(discriminator, payload))
}

pub fn encode_tagged(ty: &TypeDescriptor, tagged: &TaggedValue) -> Result<Vec<u8>, CodecError> {
    let value = encode_tagged_value(ty, tagged)?;
    Ok(serde_json::to_vec(&value)?)
}

/// Flattens a tagged value into one object, discriminator first.
pub fn encode_tagged_value(ty: &TypeDescriptor, tagged: &TaggedValue) -> Result<Value, CodecError> {
    if !ty.is_union() {
        return Err(CodecError::NotAUnion { type_name: ty.name() });
    }

    if tagged.discriminator.is_empty() {
        return match tagged.payload {
            None => Ok(Value::Null),
            Some(_) => Err(CodecError::InvariantViolation {
                union: ty.name(),
                discriminator: String::new(),
                reason: "a payload is set without a discriminator",
            }),
        };
    }

    if ty.variant(&tagged.discriminator).is_none() {
        return Err(CodecError::UnknownVariant {
            union: ty.name(),
            discriminator: tagged.discriminator.clone(),
        });
    }

    let Some(payload) = &tagged.payload else {
        return Err(CodecError::InvariantViolation {
            union: ty.name(),
            discriminator: tagged.discriminator.clone(),
            reason: "the discriminated member has no payload",
        });
    };

    let mut object = Payload::new();
    object.insert(TYPENAME_FIELD.to_owned(), Value::String(tagged.discriminator.clone()));

    for (name, value) in payload {
        if name != TYPENAME_FIELD {
            object.insert(name.clone(), value.clone());
        }
    }

    Ok(Value::Object(object))
}

/// Binds the payload of a union member to its Rust type.
pub fn decode_variant<V: DeserializeOwned>(payload: Payload) -> Result<V, CodecError> {
    Ok(serde_json::from_value(Value::Object(payload))?)
}

/// Serializes a union member into its payload.
pub fn encode_variant<V: Serialize>(
    union: &'static str,
    variant: &'static str,
    value: &V,
) -> Result<Payload, CodecError> {
    match serde_json::to_value(value)? {
        Value::Object(payload) => Ok(payload),
        _ => Err(CodecError::InvariantViolation {
            union,
            discriminator: variant.to_owned(),
            reason: "the member does not serialize to an object",
        }),
    }
}

/// Reads an explicit `null` as the default value of the field.
///
/// Nodes answer `null` for lists and objects that do not apply to a member, a Mint
/// transaction has `null` inputs for example.
#[doc(hidden)]
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de> + Default,
{
    let value = <Option<T> as serde::Deserialize>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;
    use wrapping::Wrapping;

    use super::*;
    use crate::{FieldDescriptor, FieldKind};

    static SUBMITTED: TypeDescriptor = TypeDescriptor::record(
        "SubmittedStatus",
        &[FieldDescriptor::new("time", "Tai64Timestamp", FieldKind::Scalar, Wrapping::required())],
    );

    static SUCCESS: TypeDescriptor = TypeDescriptor::record(
        "SuccessStatus",
        &[
            FieldDescriptor::new("transactionId", "TransactionId", FieldKind::Scalar, Wrapping::required()),
            FieldDescriptor::new("time", "Tai64Timestamp", FieldKind::Scalar, Wrapping::required()),
        ],
    );

    static STATUS: TypeDescriptor = TypeDescriptor::union(
        "TransactionStatus",
        &[
            FieldDescriptor::new(
                "SubmittedStatus",
                "SubmittedStatus",
                FieldKind::Object(submitted),
                Wrapping::nullable(),
            ),
            FieldDescriptor::new(
                "SuccessStatus",
                "SuccessStatus",
                FieldKind::Object(success),
                Wrapping::nullable(),
            ),
        ],
    );

    fn submitted() -> &'static TypeDescriptor {
        &SUBMITTED
    }

    fn success() -> &'static TypeDescriptor {
        &SUCCESS
    }

    #[test]
    fn decode_member() {
        let tagged = decode_tagged(&STATUS, br#"{"__typename":"SuccessStatus","transactionId":"0x01"}"#).unwrap();

        assert_eq!(tagged.discriminator(), "SuccessStatus");
        assert_eq!(tagged.payload(), Some(&json!({"transactionId": "0x01"}).as_object().unwrap().clone()));
    }

    #[rstest]
    #[case::null("null")]
    #[case::empty_discriminator(r#"{"__typename":""}"#)]
    #[case::null_discriminator(r#"{"__typename":null}"#)]
    #[case::no_discriminator(r#"{"time":"1"}"#)]
    fn decode_absent(#[case] input: &str) {
        let tagged = decode_tagged(&STATUS, input.as_bytes()).unwrap();

        assert!(tagged.is_absent());
        assert_eq!(tagged, TaggedValue::absent());
    }

    #[test]
    fn decode_unknown_member() {
        let error = decode_tagged(&STATUS, br#"{"__typename":"FailureStatus"}"#).unwrap_err();

        assert!(matches!(error, CodecError::UnknownVariant { .. }));
        assert_eq!(
            error.to_string(),
            r#"union type TransactionStatus does not have member "FailureStatus""#
        );
    }

    #[test]
    fn decode_requires_a_union() {
        let error = decode_tagged(&SUCCESS, b"null").unwrap_err();

        assert_eq!(
            error.to_string(),
            "SuccessStatus is not a union type because it has no __typename discriminator"
        );
    }

    #[test]
    fn decode_rejects_scalars() {
        let error = decode_tagged(&STATUS, b"12").unwrap_err();

        assert_eq!(
            error.to_string(),
            "union type TransactionStatus expects an object or null, found a number"
        );
    }

    #[test]
    fn encode_absent() {
        assert_eq!(encode_tagged(&STATUS, &TaggedValue::absent()).unwrap(), b"null");
    }

    #[test]
    fn encode_puts_the_discriminator_first() {
        let payload = json!({"transactionId": "0x01", "__typename": "Ignored", "time": "7"})
            .as_object()
            .cloned()
            .unwrap();

        let bytes = encode_tagged(&STATUS, &TaggedValue::new("SuccessStatus", payload)).unwrap();

        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            r#"{"__typename":"SuccessStatus","transactionId":"0x01","time":"7"}"#
        );
    }

    #[test]
    fn encode_checks_invariants() {
        let missing_payload = TaggedValue {
            discriminator: "SubmittedStatus".into(),
            payload: None,
        };
        assert!(matches!(
            encode_tagged(&STATUS, &missing_payload),
            Err(CodecError::InvariantViolation { .. })
        ));

        let missing_discriminator = TaggedValue {
            discriminator: String::new(),
            payload: Some(Payload::new()),
        };
        assert!(matches!(
            encode_tagged(&STATUS, &missing_discriminator),
            Err(CodecError::InvariantViolation { .. })
        ));

        assert!(matches!(
            encode_tagged(&STATUS, &TaggedValue::new("FailureStatus", Payload::new())),
            Err(CodecError::UnknownVariant { .. })
        ));
    }

    #[test]
    fn round_trip() {
        let input = r#"{"__typename":"SubmittedStatus","time":"4611686020140659807"}"#;

        let tagged = decode_tagged(&STATUS, input.as_bytes()).unwrap();
        let bytes = encode_tagged(&STATUS, &tagged).unwrap();

        assert_eq!(String::from_utf8(bytes).unwrap(), input);
        assert_eq!(decode_tagged(&STATUS, input.as_bytes()).unwrap(), tagged);
    }
}
