use std::fmt;

/// Maximum number of list wrappers a type reference can carry.
pub const MAX_LIST_WRAPPINGS: u8 = 16;

/// Compact representation of the wrappers around a named GraphQL type, such as the
/// `[...]` and `!` in `[Transaction!]!`.
///
/// Wrappers are recorded from the inside out: first whether the named type itself is
/// required, then for every list around it whether that list is required. A Rust field
/// of type `Vec<Option<T>>` therefore maps to `[T]!`, and `Option<Vec<T>>` to `[T!]`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Wrapping {
    inner_is_required: bool,
    list_count: u8,
    /// Bit `i` is set when the `i`-th list, counting from the innermost one, is required.
    required_lists: u16,
}

/// A single list wrapper.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ListWrapping {
    NullableList,
    RequiredList,
}

impl Wrapping {
    pub const fn nullable() -> Self {
        Wrapping {
            inner_is_required: false,
            list_count: 0,
            required_lists: 0,
        }
    }

    pub const fn required() -> Self {
        Wrapping {
            inner_is_required: true,
            list_count: 0,
            required_lists: 0,
        }
    }

    /// Wraps the current type in a nullable list.
    #[must_use]
    pub const fn list(self) -> Self {
        assert!(self.list_count < MAX_LIST_WRAPPINGS, "too many list wrappings");
        Wrapping {
            list_count: self.list_count + 1,
            ..self
        }
    }

    /// Wraps the current type in a required list.
    #[must_use]
    pub const fn list_non_null(self) -> Self {
        assert!(self.list_count < MAX_LIST_WRAPPINGS, "too many list wrappings");
        Wrapping {
            inner_is_required: self.inner_is_required,
            list_count: self.list_count + 1,
            required_lists: self.required_lists | (1 << self.list_count),
        }
    }

    /// Drops the required marker of the outermost wrapper, whatever it is.
    #[must_use]
    pub const fn without_outer_requirement(self) -> Self {
        if self.list_count == 0 {
            Wrapping {
                inner_is_required: false,
                ..self
            }
        } else {
            Wrapping {
                required_lists: self.required_lists & !(1 << (self.list_count - 1)),
                ..self
            }
        }
    }

    pub const fn inner_is_required(self) -> bool {
        self.inner_is_required
    }

    /// Whether the outermost wrapper is required.
    pub const fn is_required(self) -> bool {
        if self.list_count == 0 {
            self.inner_is_required
        } else {
            self.required_lists & (1 << (self.list_count - 1)) != 0
        }
    }

    pub const fn is_nullable(self) -> bool {
        !self.is_required()
    }

    pub const fn is_list(self) -> bool {
        self.list_count > 0
    }

    pub const fn list_depth(self) -> u8 {
        self.list_count
    }

    /// List wrappers, from the innermost to the outermost.
    pub fn list_wrappings(self) -> impl DoubleEndedIterator<Item = ListWrapping> + ExactSizeIterator {
        (0..self.list_count).map(move |i| {
            if self.required_lists & (1 << i) != 0 {
                ListWrapping::RequiredList
            } else {
                ListWrapping::NullableList
            }
        })
    }

    /// Renders a type reference to `name` with these wrappers, e.g. `[Receipt!]`.
    pub fn type_reference<'a>(self, name: &'a str) -> TypeReference<'a> {
        TypeReference { name, wrapping: self }
    }
}

impl fmt::Debug for Wrapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Wrapping({})", self.type_reference("T"))
    }
}

/// Display helper returned by [`Wrapping::type_reference`].
pub struct TypeReference<'a> {
    name: &'a str,
    wrapping: Wrapping,
}

impl fmt::Display for TypeReference<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.wrapping.list_depth() {
            f.write_str("[")?;
        }

        f.write_str(self.name)?;

        if self.wrapping.inner_is_required() {
            f.write_str("!")?;
        }

        for list in self.wrapping.list_wrappings() {
            f.write_str("]")?;

            if list == ListWrapping::RequiredList {
                f.write_str("!")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_types() {
        assert_eq!(Wrapping::required().type_reference("U64").to_string(), "U64!");
        assert_eq!(Wrapping::nullable().type_reference("U64").to_string(), "U64");
        assert!(Wrapping::required().is_required());
        assert!(!Wrapping::required().is_list());
    }

    #[test]
    fn lists() {
        let wrapping = Wrapping::required().list_non_null();
        assert_eq!(wrapping.type_reference("Transaction").to_string(), "[Transaction!]!");
        assert!(wrapping.is_list());
        assert_eq!(wrapping.list_depth(), 1);

        let wrapping = Wrapping::nullable().list().list_non_null();
        assert_eq!(wrapping.type_reference("Int").to_string(), "[[Int]]!");
        assert_eq!(
            wrapping.list_wrappings().collect::<Vec<_>>(),
            vec![ListWrapping::NullableList, ListWrapping::RequiredList]
        );
    }

    #[test]
    fn outer_requirement_is_dropped_from_the_outermost_wrapper_only() {
        let wrapping = Wrapping::required().list_non_null().without_outer_requirement();
        assert_eq!(wrapping.type_reference("Receipt").to_string(), "[Receipt!]");
        assert!(wrapping.is_nullable());
        assert!(wrapping.inner_is_required());

        let wrapping = Wrapping::required().without_outer_requirement();
        assert_eq!(wrapping, Wrapping::nullable());
    }
}
