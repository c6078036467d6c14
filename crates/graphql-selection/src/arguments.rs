use std::fmt::Display;

use crate::layout::{Buffer, Layout};

/// Value of a root field argument, before rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArgumentValue {
    /// Not provided: the argument is left out entirely.
    Absent,
    /// Rendered verbatim, e.g. booleans, integers and enum values.
    Bare(String),
    /// Rendered as a GraphQL string literal.
    Quoted(String),
    /// An input object.
    Object(Vec<Argument>),
}

impl ArgumentValue {
    pub fn bare(value: impl Display) -> Self {
        ArgumentValue::Bare(value.to_string())
    }

    pub fn quoted(value: impl Display) -> Self {
        ArgumentValue::Quoted(value.to_string())
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, ArgumentValue::Absent)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Argument {
    name: &'static str,
    value: ArgumentValue,
}

impl Argument {
    pub fn new(name: &'static str, value: ArgumentValue) -> Self {
        Argument { name, value }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn value(&self) -> &ArgumentValue {
        &self.value
    }
}

/// Conversion of a Rust value into an argument value.
///
/// Scalars with a textual representation render quoted, the others bare.
pub trait ToArgument {
    fn to_argument(&self) -> ArgumentValue;
}

/// A flat set of arguments for a root field, in declaration order.
pub trait QueryArguments {
    fn arguments(&self) -> Vec<Argument>;
}

impl<T: ToArgument> ToArgument for Option<T> {
    fn to_argument(&self) -> ArgumentValue {
        match self {
            Some(value) => value.to_argument(),
            None => ArgumentValue::Absent,
        }
    }
}

impl<T: ToArgument + ?Sized> ToArgument for &T {
    fn to_argument(&self) -> ArgumentValue {
        (**self).to_argument()
    }
}

impl<T: ToArgument + ?Sized> ToArgument for Box<T> {
    fn to_argument(&self) -> ArgumentValue {
        (**self).to_argument()
    }
}

impl ToArgument for str {
    fn to_argument(&self) -> ArgumentValue {
        ArgumentValue::Quoted(self.to_owned())
    }
}

impl ToArgument for String {
    fn to_argument(&self) -> ArgumentValue {
        ArgumentValue::Quoted(self.clone())
    }
}

impl ToArgument for ArgumentValue {
    fn to_argument(&self) -> ArgumentValue {
        self.clone()
    }
}

macro_rules! bare_arguments {
    ($($ty:ty),*) => {
        $(
            impl ToArgument for $ty {
                fn to_argument(&self) -> ArgumentValue {
                    ArgumentValue::bare(self)
                }
            }
        )*
    };
}

bare_arguments!(bool, i32, u32, i64, u64, f64);

impl Layout<'_> {
    /// Renders the arguments of a root field, without the surrounding parentheses.
    pub fn arguments(&self, arguments: &impl QueryArguments) -> String {
        self.argument_list(&arguments.arguments())
    }

    pub(crate) fn argument_list(&self, arguments: &[Argument]) -> String {
        let mut buffer = self.buffer();

        for argument in arguments {
            buffer.write_argument(argument);
        }

        buffer.into_string()
    }
}

impl Buffer<'_> {
    fn write_argument(&mut self, argument: &Argument) {
        match &argument.value {
            ArgumentValue::Absent => {}
            ArgumentValue::Bare(value) => self.line(&[argument.name, ": ", value.as_str()]),
            ArgumentValue::Quoted(value) => self.line(&[argument.name, ": ", quote(value).as_str()]),
            ArgumentValue::Object(fields) => {
                self.open(&[argument.name, ":"]);

                for field in fields {
                    self.write_argument(field);
                }

                self.close();
            }
        }
    }
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');

    for c in s.chars() {
        match c {
            '\r' => out.push_str("\\r"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }

    out.push('"');
    out
}
