//! Schema-directed GraphQL query building for typed clients.
//!
//! Entity types describe themselves through a static [`TypeDescriptor`] table,
//! usually generated by [`graphql_object!`] and [`graphql_union!`]. From those
//! tables this crate:
//!
//! - synthesizes selection sets, honouring caller supplied [`Suppression`] rules
//!   to trim fields and break cycles between entities,
//! - encodes query arguments ([`QueryArguments`]) and assembles query documents,
//! - decodes and encodes `__typename` tagged unions ([`Union`], [`TaggedValue`]),
//! - converts typed values into a generic [`StructuredValue`] tree.
//!
//! Nothing in here performs I/O.

#![cfg_attr(test, allow(unused_crate_dependencies))]

mod arguments;
pub mod codec;
mod descriptor;
mod document;
mod error;
mod layout;
mod macros;
mod selection;
mod structured;
mod suppression;

pub use arguments::{Argument, ArgumentValue, QueryArguments, ToArgument};
pub use codec::{decode_tagged, encode_tagged, TaggedValue, Union, UnionType, TYPENAME_FIELD};
pub use descriptor::{DescriptorFn, FieldDescriptor, FieldKind, GraphqlType, Shape, TypeDescriptor, Wrapped};
pub use document::{QueryDocument, RootField};
pub use error::CodecError;
pub use layout::Layout;
pub use structured::StructuredValue;
pub use suppression::Suppression;
pub use wrapping::Wrapping;
