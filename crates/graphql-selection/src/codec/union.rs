use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::{decode_tagged, decode_tagged_value, encode_tagged, encode_tagged_value, Payload, TaggedValue};
use crate::{CodecError, GraphqlType, Wrapped, Wrapping};

/// A Rust enum standing for a GraphQL union, usually generated by
/// [`graphql_union!`](crate::graphql_union).
pub trait UnionType: GraphqlType + Sized {
    /// The GraphQL name of the member held by `self`.
    fn typename(&self) -> &'static str;

    fn from_variant(typename: &str, payload: Payload) -> Result<Self, CodecError>;

    fn to_variant(&self) -> Result<Payload, CodecError>;
}

/// A union field: either absent or exactly one member of `T`.
///
/// Serializes to the flattened `__typename` form and back. Both `null` and an empty
/// discriminator deserialize to an absent value.
#[derive(Clone, Debug, PartialEq)]
pub struct Union<T>(Option<T>);

impl<T> Default for Union<T> {
    fn default() -> Self {
        Union(None)
    }
}

impl<T> From<T> for Union<T> {
    fn from(value: T) -> Self {
        Union(Some(value))
    }
}

impl<T> Union<T> {
    pub const fn absent() -> Self {
        Union(None)
    }

    pub fn is_absent(&self) -> bool {
        self.0.is_none()
    }

    pub fn variant(&self) -> Option<&T> {
        self.0.as_ref()
    }

    pub fn variant_mut(&mut self) -> Option<&mut T> {
        self.0.as_mut()
    }

    pub fn into_variant(self) -> Option<T> {
        self.0
    }
}

impl<T: UnionType> Union<T> {
    /// Name of the held member, empty when absent.
    pub fn discriminator(&self) -> &'static str {
        self.0.as_ref().map(UnionType::typename).unwrap_or_default()
    }

    pub fn to_tagged(&self) -> Result<TaggedValue, CodecError> {
        match &self.0 {
            Some(value) => Ok(TaggedValue::new(value.typename(), value.to_variant()?)),
            None => Ok(TaggedValue::absent()),
        }
    }

    pub fn from_tagged(tagged: TaggedValue) -> Result<Self, CodecError> {
        let (discriminator, payload) = tagged.into_parts();

        match (discriminator.is_empty(), payload) {
            (true, None) => Ok(Union(None)),
            (false, Some(payload)) => T::from_variant(&discriminator, payload).map(|value| Union(Some(value))),
            (true, Some(_)) => Err(CodecError::InvariantViolation {
                union: T::descriptor().name(),
                discriminator,
                reason: "a payload is set without a discriminator",
            }),
            (false, None) => Err(CodecError::InvariantViolation {
                union: T::descriptor().name(),
                discriminator,
                reason: "the discriminated member has no payload",
            }),
        }
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        Union::from_tagged(decode_tagged(T::descriptor(), bytes)?)
    }

    pub fn encode(&self) -> Result<Vec<u8>, CodecError> {
        encode_tagged(T::descriptor(), &self.to_tagged()?)
    }

    pub(crate) fn to_value(&self) -> Result<Value, CodecError> {
        encode_tagged_value(T::descriptor(), &self.to_tagged()?)
    }
}

impl<T: Wrapped> Wrapped for Union<T> {
    type Inner = T::Inner;
    const NAME: &'static str = T::NAME;
    const WRAPPING: Wrapping = T::WRAPPING;
}

impl<T: UnionType> Serialize for Union<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().map_err(ser::Error::custom)?.serialize(serializer)
    }
}

impl<'de, T: UnionType> Deserialize<'de> for Union<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let tagged = decode_tagged_value(T::descriptor(), value).map_err(de::Error::custom)?;

        Union::from_tagged(tagged).map_err(de::Error::custom)
    }
}
