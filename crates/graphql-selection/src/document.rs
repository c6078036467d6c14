use std::fmt;

use crate::{Argument, GraphqlType, Layout, QueryArguments, Suppression, TypeDescriptor};

/// A root field of a query: `alias:name(arguments) { selection set }`.
#[derive(Clone, Debug)]
pub struct RootField {
    alias: Option<String>,
    name: &'static str,
    arguments: Vec<Argument>,
    ty: &'static TypeDescriptor,
    rules: Suppression,
}

impl RootField {
    /// A root field returning `T`, selecting every field of `T` until suppressed.
    pub fn new<T: GraphqlType>(name: &'static str) -> Self {
        RootField::of(name, T::descriptor())
    }

    pub fn of(name: &'static str, ty: &'static TypeDescriptor) -> Self {
        RootField {
            alias: None,
            name,
            arguments: Vec::new(),
            ty,
            rules: Suppression::NONE,
        }
    }

    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    #[must_use]
    pub fn arguments(mut self, arguments: &impl QueryArguments) -> Self {
        self.arguments = arguments.arguments();
        self
    }

    #[must_use]
    pub fn suppress(mut self, rules: Suppression) -> Self {
        self.rules = rules;
        self
    }

    /// Key of this field in the response data.
    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(self.name)
    }

    fn render(&self) -> String {
        let layout = Layout::COMPACT;
        let mut out = String::new();

        if let Some(alias) = &self.alias {
            out.push_str(alias);
            out.push(':');
        }

        out.push_str(self.name);

        let arguments = layout.argument_list(&self.arguments);
        if !arguments.is_empty() {
            out.push('(');
            out.push_str(&arguments);
            out.push(')');
        }

        out.push_str(" {");
        out.push_str(layout.eol());
        out.push_str(&layout.selection_set_of(self.ty, &self.rules));
        out.push('}');

        out
    }
}

/// An anonymous query made of one or more root fields, rendered on a single line.
///
/// ```text
/// { block(id: "0x01" ) { id header { height } } }
/// { b0:block(height: "1" ) { id } b1:block(height: "2" ) { id } }
/// ```
#[derive(Clone, Debug, Default)]
pub struct QueryDocument {
    fields: Vec<RootField>,
}

impl QueryDocument {
    pub fn new() -> Self {
        QueryDocument { fields: Vec::new() }
    }

    #[must_use]
    pub fn field(mut self, field: RootField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn push(&mut self, field: RootField) {
        self.fields.push(field);
    }

    pub fn fields(&self) -> &[RootField] {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Display for QueryDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{ ")?;

        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(&field.render())?;
        }

        f.write_str(" }")
    }
}

#[cfg(test)]
mod tests {
    use wrapping::Wrapping;

    use super::*;
    use crate::{ArgumentValue, FieldDescriptor, FieldKind, ToArgument};

    static BLOCK: TypeDescriptor = TypeDescriptor::record(
        "Block",
        &[
            FieldDescriptor::new("id", "BlockId", FieldKind::Scalar, Wrapping::required()),
            FieldDescriptor::new("height", "U32", FieldKind::Scalar, Wrapping::required()),
        ],
    );

    struct Height(Option<u32>);

    impl QueryArguments for Height {
        fn arguments(&self) -> Vec<Argument> {
            vec![Argument::new(
                "height",
                self.0.map(ArgumentValue::quoted).unwrap_or(ArgumentValue::Absent),
            )]
        }
    }

    #[test]
    fn single_root_field() {
        let document = QueryDocument::new().field(
            RootField::of("block", &BLOCK)
                .arguments(&Height(Some(7)))
                .suppress(Suppression::field("Block", "height")),
        );

        assert_eq!(document.to_string(), r#"{ block(height: "7" ) { id } }"#);
    }

    #[test]
    fn parentheses_are_dropped_without_arguments() {
        let document = QueryDocument::new().field(RootField::of("block", &BLOCK).arguments(&Height(None)));

        assert_eq!(document.to_string(), "{ block { id height } }");
    }

    #[test]
    fn aliased_batch() {
        let mut document = QueryDocument::new();

        for (i, height) in [1, 2].into_iter().enumerate() {
            document.push(
                RootField::of("block", &BLOCK)
                    .alias(format!("b{i}"))
                    .arguments(&Height(Some(height)))
                    .suppress(Suppression::keep_only("Block", ["id"])),
            );
        }

        assert_eq!(document.fields()[1].response_key(), "b1");
        assert_eq!(
            document.to_string(),
            r#"{ b0:block(height: "1" ) { id } b1:block(height: "2" ) { id } }"#
        );
    }

    #[test]
    fn strings_are_quoted_by_their_argument_impl() {
        assert_eq!("x".to_argument(), ArgumentValue::Quoted("x".into()));
        assert_eq!(true.to_argument(), ArgumentValue::Bare("true".into()));
    }
}
