use lazy_static::lazy_static;
use regex::Regex;

use crate::field::Field;

/// Grammar of an identifier usable as a bare method name or keyword argument
pub const IDENTIFIER_PATTERN: &str = r"\A[a-z_][A-Za-z0-9_]*\z";

/// IdentifierValidator flags schema names that would produce invalid signatures.
/// It never fails, it only reports.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentifierValidator;

impl IdentifierValidator {
    pub fn is_valid_identifier(&self, name: &str) -> bool {
        lazy_static! {
            static ref IDENTIFIER: Regex = Regex::new(IDENTIFIER_PATTERN).unwrap();
        }

        IDENTIFIER.is_match(name)
    }

    /// Returns true if at least one field name is not a valid identifier
    pub fn any_invalid<'a>(&self, fields: impl IntoIterator<Item = &'a Field>) -> bool {
        fields
            .into_iter()
            .any(|field| !self.is_valid_identifier(&field.name))
    }
}

#[cfg(test)]
mod tests {
    use super::IdentifierValidator;
    use crate::{
        field::{Field, FieldKind, ValueType},
        scalar::Scalar,
    };

    macro_rules! test_identifier {
        ($name:ident, $identifier:expr, $valid:expr) => {
            #[test]
            fn $name() {
                assert_eq!(IdentifierValidator.is_valid_identifier($identifier), $valid);
            }
        };
    }

    test_identifier!(test_simple_name, "id", true);
    test_identifier!(test_snake_case_name, "page_number_2", true);
    test_identifier!(test_leading_underscore, "_internal", true);
    test_identifier!(test_constant_form, "Foo_1", false);
    test_identifier!(test_digit, "1", false);
    test_identifier!(test_leading_digit, "2fa", false);
    test_identifier!(test_empty, "", false);
    test_identifier!(test_dash, "foo-bar", false);

    fn field(name: &str) -> Field {
        Field::new(name, 1, FieldKind::Singular(ValueType::Scalar(Scalar::Int32)))
    }

    #[test]
    fn test_any_invalid() {
        let valid = vec![field("id"), field("name")];
        assert!(!IdentifierValidator.any_invalid(&valid));

        let invalid = vec![field("id"), field("Foo_1")];
        assert!(IdentifierValidator.any_invalid(&invalid));

        assert!(!IdentifierValidator.any_invalid(&Vec::new()));
    }
}
