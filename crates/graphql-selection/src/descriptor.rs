use std::fmt;

use wrapping::Wrapping;

/// Lazily resolved reference to another descriptor. Entity types reference each
/// other cyclically, so fields point at a function rather than at the table itself.
pub type DescriptorFn = fn() -> &'static TypeDescriptor;

/// A type exposed by the GraphQL schema, either a plain record or a union.
pub trait GraphqlType {
    fn descriptor() -> &'static TypeDescriptor;
}

/// Looks through the `Option`, `Vec` and `Box` wrappers of a field type.
///
/// `Inner` is the named element type, `NAME` its GraphQL name and `WRAPPING` the
/// list and nullability wrappers the Rust type adds around it.
pub trait Wrapped {
    type Inner;
    const NAME: &'static str;
    const WRAPPING: Wrapping;
}

impl<T: Wrapped> Wrapped for Option<T> {
    type Inner = T::Inner;
    const NAME: &'static str = T::NAME;
    const WRAPPING: Wrapping = T::WRAPPING.without_outer_requirement();
}

impl<T: Wrapped> Wrapped for Vec<T> {
    type Inner = T::Inner;
    const NAME: &'static str = T::NAME;
    const WRAPPING: Wrapping = T::WRAPPING.list_non_null();
}

impl<T: Wrapped> Wrapped for Box<T> {
    type Inner = T::Inner;
    const NAME: &'static str = T::NAME;
    const WRAPPING: Wrapping = T::WRAPPING;
}

crate::graphql_scalar! {
    String => "String",
    bool => "Boolean",
    i32 => "Int",
    f64 => "Float",
}

/// Structural kind of a field, with the element type already unwrapped.
#[derive(Clone, Copy)]
pub enum FieldKind {
    Scalar,
    Object(DescriptorFn),
    Union(DescriptorFn),
}

impl fmt::Debug for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Scalar => f.write_str("Scalar"),
            FieldKind::Object(target) => f.debug_tuple("Object").field(&target().name()).finish(),
            FieldKind::Union(target) => f.debug_tuple("Union").field(&target().name()).finish(),
        }
    }
}

/// A field of a record, or a member of a union.
#[derive(Clone, Copy, Debug)]
pub struct FieldDescriptor {
    name: &'static str,
    type_name: &'static str,
    kind: FieldKind,
    wrapping: Wrapping,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, type_name: &'static str, kind: FieldKind, wrapping: Wrapping) -> Self {
        FieldDescriptor {
            name,
            type_name,
            kind,
            wrapping,
        }
    }

    /// Name of the field as exposed by the schema. Union members are named after their type.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Name of the element type, without any list or nullability wrapper.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn wrapping(&self) -> Wrapping {
        self.wrapping
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self.kind, FieldKind::Scalar)
    }

    /// The descriptor of the element type for object and union fields.
    pub fn target(&self) -> Option<&'static TypeDescriptor> {
        match self.kind {
            FieldKind::Scalar => None,
            FieldKind::Object(target) | FieldKind::Union(target) => Some(target()),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub enum Shape {
    Record(&'static [FieldDescriptor]),
    Union(&'static [FieldDescriptor]),
}

/// Static description of an entity or value type.
///
/// Descriptors are built once, in declaration order, and never change afterwards.
/// Two descriptors are the same type when their names match.
#[derive(Debug)]
pub struct TypeDescriptor {
    name: &'static str,
    shape: Shape,
}

impl TypeDescriptor {
    pub const fn record(name: &'static str, fields: &'static [FieldDescriptor]) -> Self {
        TypeDescriptor {
            name,
            shape: Shape::Record(fields),
        }
    }

    pub const fn union(name: &'static str, variants: &'static [FieldDescriptor]) -> Self {
        TypeDescriptor {
            name,
            shape: Shape::Union(variants),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn is_union(&self) -> bool {
        matches!(self.shape, Shape::Union(_))
    }

    /// Fields of a record, or members of a union, in declaration order.
    pub fn fields(&self) -> &'static [FieldDescriptor] {
        match self.shape {
            Shape::Record(fields) | Shape::Union(fields) => fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields().iter().find(|field| field.name == name)
    }

    /// The union member named `typename`. Always `None` for records.
    pub fn variant(&self, typename: &str) -> Option<&'static FieldDescriptor> {
        match self.shape {
            Shape::Union(variants) => variants.iter().find(|variant| variant.name == typename),
            Shape::Record(_) => None,
        }
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for TypeDescriptor {}

/// Renders the descriptor as an SDL definition.
impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.shape {
            Shape::Union(variants) => {
                write!(f, "union {} =", self.name)?;

                for (i, variant) in variants.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" |")?;
                    }
                    write!(f, " {}", variant.type_name)?;
                }

                f.write_str("\n")
            }
            Shape::Record(fields) => {
                writeln!(f, "type {} {{", self.name)?;

                for field in fields {
                    writeln!(
                        f,
                        "  {}: {}",
                        field.name,
                        field.wrapping.type_reference(field.type_name)
                    )?;
                }

                f.write_str("}\n")
            }
        }
    }
}
