/// Declares named GraphQL scalars usable as field types.
///
/// ```ignore
/// graphql_scalar! {
///     BlockId => "BlockId",
///     U64 => "U64",
/// }
/// ```
#[macro_export]
macro_rules! graphql_scalar {
    ($($ty:ty => $name:expr),* $(,)?) => {
        $(
            impl $crate::Wrapped for $ty {
                type Inner = Self;
                const NAME: &'static str = $name;
                const WRAPPING: $crate::Wrapping = $crate::Wrapping::required();
            }
        )*
    };
}

/// Declares a GraphQL object type together with its static descriptor.
///
/// Every field names its exposed GraphQL name and its structural kind, one of
/// `scalar`, `object` or `union`. The generated struct deserializes partial
/// responses: fields missing from the payload or set to `null` keep their default
/// value. The calling crate must depend on `serde` and `graphql_selection` under
/// those names.
///
/// ```ignore
/// graphql_object! {
///     pub struct Header {
///         id: BlockId => "id" scalar,
///         da_height: U64 => "daHeight" scalar,
///     }
/// }
/// ```
#[macro_export]
macro_rules! graphql_object {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident: $ty:ty => $exposed:literal $kind:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(default)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                #[serde(rename = $exposed, deserialize_with = "graphql_selection::codec::null_as_default")]
                pub $field: $ty,
            )*
        }

        impl $crate::GraphqlType for $name {
            fn descriptor() -> &'static $crate::TypeDescriptor {
                static DESCRIPTOR: $crate::TypeDescriptor = $crate::TypeDescriptor::record(
                    stringify!($name),
                    &[$($crate::__field_descriptor!($exposed, $ty, $kind)),*],
                );

                &DESCRIPTOR
            }
        }

        impl $crate::Wrapped for $name {
            type Inner = Self;
            const NAME: &'static str = stringify!($name);
            const WRAPPING: $crate::Wrapping = $crate::Wrapping::required();
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_descriptor {
    ($exposed:literal, $ty:ty, scalar) => {
        $crate::FieldDescriptor::new(
            $exposed,
            <$ty as $crate::Wrapped>::NAME,
            $crate::FieldKind::Scalar,
            <$ty as $crate::Wrapped>::WRAPPING,
        )
    };
    ($exposed:literal, $ty:ty, object) => {
        $crate::FieldDescriptor::new(
            $exposed,
            <$ty as $crate::Wrapped>::NAME,
            $crate::FieldKind::Object(<<$ty as $crate::Wrapped>::Inner as $crate::GraphqlType>::descriptor),
            <$ty as $crate::Wrapped>::WRAPPING,
        )
    };
    ($exposed:literal, $ty:ty, union) => {
        $crate::FieldDescriptor::new(
            $exposed,
            <$ty as $crate::Wrapped>::NAME,
            $crate::FieldKind::Union(<<$ty as $crate::Wrapped>::Inner as $crate::GraphqlType>::descriptor),
            <$ty as $crate::Wrapped>::WRAPPING,
        )
    };
}

/// Declares a GraphQL union over object types declared with [`graphql_object!`].
///
/// The enum has one variant per member, named after it. Record fields holding the
/// union use [`Union`](crate::Union) so that an absent value can be represented.
///
/// ```ignore
/// graphql_union! {
///     pub enum Consensus {
///         Genesis,
///         PoAConsensus,
///     }
/// }
/// ```
#[macro_export]
macro_rules! graphql_union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[allow(clippy::large_enum_variant)]
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $name {
            $($variant($variant)),+
        }

        impl $crate::UnionType for $name {
            fn typename(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => stringify!($variant)),+
                }
            }

            fn from_variant(
                typename: &str,
                payload: $crate::codec::Payload,
            ) -> ::std::result::Result<Self, $crate::CodecError> {
                $(
                    if typename == stringify!($variant) {
                        return $crate::codec::decode_variant(payload).map(Self::$variant);
                    }
                )+

                Err($crate::CodecError::UnknownVariant {
                    union: stringify!($name),
                    discriminator: typename.to_owned(),
                })
            }

            fn to_variant(&self) -> ::std::result::Result<$crate::codec::Payload, $crate::CodecError> {
                match self {
                    $(Self::$variant(value) => $crate::codec::encode_variant(stringify!($name), stringify!($variant), value)),+
                }
            }
        }

        impl $crate::GraphqlType for $name {
            fn descriptor() -> &'static $crate::TypeDescriptor {
                static DESCRIPTOR: $crate::TypeDescriptor = $crate::TypeDescriptor::union(
                    stringify!($name),
                    &[$(
                        $crate::FieldDescriptor::new(
                            stringify!($variant),
                            stringify!($variant),
                            $crate::FieldKind::Object(<$variant as $crate::GraphqlType>::descriptor),
                            $crate::Wrapping::nullable(),
                        )
                    ),+],
                );

                &DESCRIPTOR
            }
        }

        impl $crate::Wrapped for $name {
            type Inner = Self;
            const NAME: &'static str = stringify!($name);
            const WRAPPING: $crate::Wrapping = $crate::Wrapping::nullable();
        }

        $(
            impl From<$variant> for $name {
                fn from(value: $variant) -> Self {
                    Self::$variant(value)
                }
            }
        )+
    };
}

/// Declares the arguments of a root field.
///
/// Fields set to `None` are left out of the rendered argument list.
///
/// ```ignore
/// graphql_arguments! {
///     pub struct QueryBlockParams {
///         id: Option<BlockId> => "id",
///         height: Option<U32> => "height",
///     }
/// }
/// ```
#[macro_export]
macro_rules! graphql_arguments {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident: $ty:ty => $exposed:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                pub $field: $ty,
            )*
        }

        impl $crate::QueryArguments for $name {
            fn arguments(&self) -> ::std::vec::Vec<$crate::Argument> {
                ::std::vec![$($crate::Argument::new($exposed, $crate::ToArgument::to_argument(&self.$field))),*]
            }
        }

        impl $crate::ToArgument for $name {
            fn to_argument(&self) -> $crate::ArgumentValue {
                $crate::ArgumentValue::Object($crate::QueryArguments::arguments(self))
            }
        }
    };
}
