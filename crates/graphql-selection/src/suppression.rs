use std::ops::BitOr;

use crate::{FieldDescriptor, GraphqlType, TypeDescriptor};

/// Decides whether a field occurrence is left out of a synthesized selection set.
///
/// Rules are evaluated against the owning type and the field, so the same type can be
/// fully expanded in one position and stubbed in another. Merging rules is a
/// short-circuit OR.
///
/// Types and fields are matched by name: the GraphQL type name for owners and field
/// targets, the exposed GraphQL name for fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Suppression {
    /// Suppresses nothing.
    #[default]
    Never,
    /// Any field whose element type, seen through lists and optionals, is one of these.
    Types(Vec<&'static str>),
    /// Exactly one field of one owner.
    Field { owner: &'static str, field: &'static str },
    /// Every field of `owner` that is not listed.
    KeepOnly {
        owner: &'static str,
        fields: Vec<&'static str>,
    },
    /// Any of the nested rules.
    Any(Vec<Suppression>),
}

impl Suppression {
    pub const NONE: Suppression = Suppression::Never;

    pub fn types(type_names: impl IntoIterator<Item = &'static str>) -> Self {
        Suppression::Types(type_names.into_iter().collect())
    }

    /// Suppresses every occurrence of `T`, the usual way to cut a cycle between entities.
    pub fn of<T: GraphqlType>() -> Self {
        Suppression::Types(vec![T::descriptor().name()])
    }

    pub fn field(owner: &'static str, field: &'static str) -> Self {
        Suppression::Field { owner, field }
    }

    pub fn field_of<T: GraphqlType>(field: &'static str) -> Self {
        Suppression::field(T::descriptor().name(), field)
    }

    pub fn keep_only(owner: &'static str, fields: impl IntoIterator<Item = &'static str>) -> Self {
        Suppression::KeepOnly {
            owner,
            fields: fields.into_iter().collect(),
        }
    }

    pub fn keep_only_of<T: GraphqlType>(fields: impl IntoIterator<Item = &'static str>) -> Self {
        Suppression::keep_only(T::descriptor().name(), fields)
    }

    /// Combines rules with OR. No rule gives [`Suppression::Never`] and a single rule is
    /// returned as is.
    pub fn merge(rules: impl IntoIterator<Item = Suppression>) -> Self {
        let mut merged = Vec::new();

        for rule in rules {
            match rule {
                Suppression::Never => {}
                Suppression::Any(nested) => merged.extend(nested),
                rule => merged.push(rule),
            }
        }

        match merged.len() {
            0 => Suppression::Never,
            1 => merged.pop().unwrap_or_default(),
            _ => Suppression::Any(merged),
        }
    }

    pub fn is_suppressed(&self, owner: &TypeDescriptor, field: &FieldDescriptor) -> bool {
        match self {
            Suppression::Never => false,
            Suppression::Types(type_names) => type_names.contains(&field.type_name()),
            Suppression::Field {
                owner: owner_name,
                field: field_name,
            } => owner.name() == *owner_name && field.name() == *field_name,
            Suppression::KeepOnly {
                owner: owner_name,
                fields,
            } => owner.name() == *owner_name && !fields.contains(&field.name()),
            Suppression::Any(rules) => rules.iter().any(|rule| rule.is_suppressed(owner, field)),
        }
    }
}

impl BitOr for Suppression {
    type Output = Suppression;

    fn bitor(self, rhs: Self) -> Self::Output {
        Suppression::merge([self, rhs])
    }
}

impl FromIterator<Suppression> for Suppression {
    fn from_iter<I: IntoIterator<Item = Suppression>>(iter: I) -> Self {
        Suppression::merge(iter)
    }
}
