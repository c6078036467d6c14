/// Errors raised while decoding or encoding tagged unions and structured values.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The discriminator names a type that is not a member of the union.
    #[error("union type {union} does not have member {discriminator:?}")]
    UnknownVariant { union: &'static str, discriminator: String },

    /// The discriminator and the variant payload disagree.
    #[error("union type {union} tagged {discriminator:?}: {reason}")]
    InvariantViolation {
        union: &'static str,
        discriminator: String,
        reason: &'static str,
    },

    /// A record type was used where a union was expected.
    #[error("{type_name} is not a union type because it has no __typename discriminator")]
    NotAUnion { type_name: &'static str },

    /// The wire value of a union is neither an object nor null.
    #[error("union type {union} expects an object or null, found {found}")]
    UnexpectedShape { union: &'static str, found: &'static str },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
