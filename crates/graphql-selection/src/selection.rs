use crate::{
    codec::TYPENAME_FIELD,
    layout::{Buffer, Layout},
    GraphqlType, Shape, Suppression, TypeDescriptor,
};

impl Layout<'_> {
    /// Renders the selection set of `T`, without the surrounding braces.
    ///
    /// Fields come out in declaration order and union members as `... on Member`
    /// fragments in declaration order. Cycles between types are not detected: they
    /// must be cut with a [`Suppression`], typically [`Suppression::of`].
    pub fn selection_set<T: GraphqlType>(&self, rules: &Suppression) -> String {
        self.selection_set_of(T::descriptor(), rules)
    }

    pub fn selection_set_of(&self, ty: &TypeDescriptor, rules: &Suppression) -> String {
        let mut buffer = self.buffer();
        buffer.write_selection_set(ty, rules);
        buffer.into_string()
    }
}

impl Buffer<'_> {
    pub(crate) fn write_selection_set(&mut self, ty: &TypeDescriptor, rules: &Suppression) {
        match ty.shape() {
            Shape::Union(variants) => {
                // We always need to know the concrete member.
                self.line(&[TYPENAME_FIELD]);

                for variant in variants {
                    if rules.is_suppressed(ty, variant) {
                        continue;
                    }

                    let Some(target) = variant.target() else {
                        continue;
                    };

                    self.open(&["... on ", variant.name()]);
                    self.write_selection_set(target, rules);
                    self.close();
                }
            }
            Shape::Record(fields) => {
                for field in fields {
                    if rules.is_suppressed(ty, field) {
                        continue;
                    }

                    match field.target() {
                        Some(target) => {
                            self.open(&[field.name()]);
                            self.write_selection_set(target, rules);
                            self.close();
                        }
                        None => self.line(&[field.name()]),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use wrapping::Wrapping;

    use super::*;
    use crate::{FieldDescriptor, FieldKind};

    static HEADER: TypeDescriptor = TypeDescriptor::record(
        "Header",
        &[FieldDescriptor::new("height", "U32", FieldKind::Scalar, Wrapping::required())],
    );

    static BLOCK: TypeDescriptor = TypeDescriptor::record(
        "Block",
        &[
            FieldDescriptor::new("id", "BlockId", FieldKind::Scalar, Wrapping::required()),
            FieldDescriptor::new("header", "Header", FieldKind::Object(header), Wrapping::required()),
            FieldDescriptor::new(
                "transactions",
                "Transaction",
                FieldKind::Object(transaction),
                Wrapping::required().list_non_null(),
            ),
        ],
    );

    static TRANSACTION: TypeDescriptor = TypeDescriptor::record(
        "Transaction",
        &[
            FieldDescriptor::new("id", "TransactionId", FieldKind::Scalar, Wrapping::required()),
            FieldDescriptor::new("status", "Status", FieldKind::Union(status), Wrapping::nullable()),
        ],
    );

    static STATUS: TypeDescriptor = TypeDescriptor::union(
        "Status",
        &[
            FieldDescriptor::new("Pending", "Pending", FieldKind::Object(pending), Wrapping::nullable()),
            FieldDescriptor::new("Done", "Done", FieldKind::Object(done), Wrapping::nullable()),
        ],
    );

    static PENDING: TypeDescriptor = TypeDescriptor::record(
        "Pending",
        &[FieldDescriptor::new("time", "Tai64Timestamp", FieldKind::Scalar, Wrapping::required())],
    );

    static DONE: TypeDescriptor = TypeDescriptor::record(
        "Done",
        &[
            FieldDescriptor::new("time", "Tai64Timestamp", FieldKind::Scalar, Wrapping::required()),
            FieldDescriptor::new("block", "Block", FieldKind::Object(block), Wrapping::required()),
        ],
    );

    fn header() -> &'static TypeDescriptor {
        &HEADER
    }

    fn block() -> &'static TypeDescriptor {
        &BLOCK
    }

    fn transaction() -> &'static TypeDescriptor {
        &TRANSACTION
    }

    fn status() -> &'static TypeDescriptor {
        &STATUS
    }

    fn pending() -> &'static TypeDescriptor {
        &PENDING
    }

    fn done() -> &'static TypeDescriptor {
        &DONE
    }

    #[test]
    fn suppressed_field_is_left_out() {
        let rules = Suppression::field("Block", "transactions");

        assert_eq!(
            Layout::COMPACT.selection_set_of(&BLOCK, &rules),
            "id header { height } "
        );
    }

    #[test]
    fn unions_expand_into_fragments() {
        let rules = Suppression::field("Done", "block");

        assert_eq!(
            Layout::COMPACT.selection_set_of(&TRANSACTION, &rules),
            "id status { __typename ... on Pending { time } ... on Done { time } } "
        );
    }

    #[test]
    fn union_members_can_be_suppressed() {
        let rules = Suppression::types(["Done"]);

        assert_eq!(
            Layout::COMPACT.selection_set_of(&STATUS, &rules),
            "__typename ... on Pending { time } "
        );
    }

    #[test]
    fn cycles_are_cut_by_type() {
        let rules = Suppression::types(["Block"]);

        insta::assert_snapshot!(Layout::PRETTY.selection_set_of(&TRANSACTION, &rules), @r###"
        id
        status {
          __typename
          ... on Pending {
            time
          }
          ... on Done {
            time
          }
        }
        "###);
    }

    #[test]
    fn the_same_type_can_be_stubbed_in_one_position_only() {
        let rules = Suppression::keep_only("Done", ["block"])
            | Suppression::keep_only("Block", ["id", "transactions"])
            | Suppression::keep_only("Transaction", ["id"]);

        assert_eq!(
            Layout::COMPACT.selection_set_of(&STATUS, &rules),
            "__typename ... on Pending { time } ... on Done { block { id transactions { id } } } "
        );
    }
}
